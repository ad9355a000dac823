use crate::buffer::{Buffer, Ink};
use crate::element::{Content, Element};
use crate::layout::LayoutResult;
use crate::style::Stylesheet;
use crate::text::truncate_to_width;

/// Draw every laid-out element of the tree into `buf`.
pub fn render_to_buffer(
    element: &Element,
    stylesheet: &Stylesheet,
    layout: &LayoutResult,
    buf: &mut Buffer,
) {
    let Some(rect) = layout.get(&element.id).copied() else {
        return;
    };

    let computed = stylesheet.computed(element);

    if let Some(bg) = computed.background {
        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                if let Some(cell) = buf.get_mut(x, y) {
                    cell.bg = bg;
                }
            }
        }
    }

    match &element.content {
        Content::None => {}
        Content::Text(text) if !rect.is_empty() => {
            let line = truncate_to_width(&format!("{}{text}", computed.prefix), rect.width as usize);
            let ink = Ink {
                fg: computed.foreground,
                bg: computed.background,
                style: computed.text_style,
            };
            buf.put_str(rect.x, rect.y, rect.right(), &line, ink);
        }
        Content::Text(_) => {}
        Content::Children(children) => {
            for child in children {
                render_to_buffer(child, stylesheet, layout, buf);
            }
        }
    }
}
