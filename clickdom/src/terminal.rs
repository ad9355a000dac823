use std::io::{self, BufWriter, Stdout, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent},
    execute, queue,
    style::{Attribute, Color as CtColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal,
};

use crate::buffer::{Buffer, Cell};
use crate::element::Element;
use crate::layout::{layout, LayoutResult, Rect};
use crate::render::render_to_buffer;
use crate::style::{Rgb, Stylesheet, TextStyle};
use crate::text::char_width;

/// Raw-mode terminal with mouse capture. Each frame is drawn into a buffer and
/// only the cells that changed since the previous frame are written.
///
/// The previous terminal state is restored on drop.
pub struct Terminal {
    out: BufWriter<Stdout>,
    frame: Buffer,
    shown: Buffer,
    last_layout: LayoutResult,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut out = BufWriter::new(io::stdout());

        terminal::enable_raw_mode()?;
        execute!(
            out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;

        let (width, height) = terminal::size()?;
        log::debug!("terminal opened at {width}x{height}");

        Ok(Self {
            out,
            frame: Buffer::new(width, height),
            shown: Buffer::new(width, height),
            last_layout: LayoutResult::new(),
        })
    }

    pub fn size(&self) -> (u16, u16) {
        (self.frame.width(), self.frame.height())
    }

    /// Wait up to `timeout` (forever for None) for input, then drain
    /// everything already queued.
    pub fn poll(&self, timeout: Option<Duration>) -> io::Result<Vec<CrosstermEvent>> {
        let ready = match timeout {
            Some(dur) => event::poll(dur)?,
            None => true,
        };
        if !ready {
            return Ok(Vec::new());
        }

        let mut events = vec![event::read()?];
        while event::poll(Duration::ZERO)? {
            events.push(event::read()?);
        }
        Ok(events)
    }

    pub fn render(&mut self, root: &Element, stylesheet: &Stylesheet) -> io::Result<&LayoutResult> {
        let (width, height) = terminal::size()?;
        if (width, height) != self.size() {
            log::debug!("terminal resized to {width}x{height}");
            self.frame = Buffer::new(width, height);
            self.shown = Buffer::new(width, height);
            queue!(self.out, terminal::Clear(terminal::ClearType::All))?;
        }

        self.frame.reset();
        self.last_layout = layout(root, stylesheet, Rect::from_size(width, height));
        render_to_buffer(root, stylesheet, &self.last_layout, &mut self.frame);

        self.flush_changes()?;
        std::mem::swap(&mut self.frame, &mut self.shown);

        Ok(&self.last_layout)
    }

    /// Get the layout from the last render.
    pub fn layout(&self) -> &LayoutResult {
        &self.last_layout
    }

    fn flush_changes(&mut self) -> io::Result<()> {
        let mut pen = Pen::default();
        let mut next: Option<(u16, u16)> = None;

        queue!(self.out, SetAttribute(Attribute::Reset))?;

        for (x, y, cell) in self.frame.changes(&self.shown) {
            if cell.continuation {
                continue;
            }
            if next != Some((x, y)) {
                queue!(self.out, cursor::MoveTo(x, y))?;
            }
            pen.switch(&mut self.out, cell)?;
            write!(self.out, "{}", cell.symbol)?;
            next = Some((x + char_width(cell.symbol).max(1) as u16, y));
        }

        queue!(self.out, SetAttribute(Attribute::Reset))?;
        self.out.flush()
    }
}

/// Colors and attributes currently active on the terminal. `None` is the
/// terminal's own default color, which is what `Attribute::Reset` leaves.
#[derive(Default)]
struct Pen {
    fg: Option<Rgb>,
    bg: Option<Rgb>,
    style: TextStyle,
}

impl Pen {
    fn switch(&mut self, out: &mut impl Write, cell: &Cell) -> io::Result<()> {
        if cell.style != self.style {
            // Attributes can't be switched off one by one on every terminal,
            // so start over and restore the colors too.
            queue!(out, SetAttribute(Attribute::Reset))?;
            self.fg = None;
            self.bg = None;
            for (on, attr) in [
                (cell.style.bold, Attribute::Bold),
                (cell.style.dim, Attribute::Dim),
                (cell.style.italic, Attribute::Italic),
                (cell.style.underline, Attribute::Underlined),
                (cell.style.reverse, Attribute::Reverse),
            ] {
                if on {
                    queue!(out, SetAttribute(attr))?;
                }
            }
            self.style = cell.style;
        }

        if self.fg != Some(cell.fg) {
            queue!(out, SetForegroundColor(rgb(cell.fg)))?;
            self.fg = Some(cell.fg);
        }
        if self.bg != Some(cell.bg) {
            queue!(out, SetBackgroundColor(rgb(cell.bg)))?;
            self.bg = Some(cell.bg);
        }
        Ok(())
    }
}

fn rgb(color: Rgb) -> CtColor {
    CtColor::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.out,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
