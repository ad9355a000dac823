use std::fs::File;

use clickdom::{Edges, Element, Event, Key, Rgb, Selector, Style, Terminal, find_element};
use dropsel::{DropdownConfig, OptionPick, Page, default_stylesheet};
use simplelog::{Config, LevelFilter, WriteLogger};

const LANGUAGES: [&str; 5] = ["Rust", "Go", "Zig", "OCaml", "Haskell"];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set up file logging
    let log_file = File::create("select.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;

    // Optional config file, e.g. `boundary = "select-and-close"`
    let config = match std::env::args().nth(1) {
        Some(path) => DropdownConfig::from_toml(&std::fs::read_to_string(path)?)?,
        None => DropdownConfig::default(),
    };

    let stylesheet = default_stylesheet(&config)?.rule(
        Selector::class("option"),
        Style::new().foreground(Rgb::new(180, 190, 200)).prefix("  "),
    );
    let mut page = Page::load(ui(), stylesheet, [config])?;

    let mut term = Terminal::new()?;

    loop {
        term.render(page.document(), page.stylesheet())?;

        for raw in term.poll(None)? {
            let Some(event) = Event::from_crossterm(&raw, term.layout(), page.document()) else {
                continue;
            };

            match event {
                Event::Key(Key::Char('q') | Key::Escape) => return Ok(()),
                Event::Click { .. } => {
                    let report = page.dispatch(&event);
                    for pick in &report.picks {
                        choose(&mut page, pick);
                    }
                }
                _ => {}
            }
        }
    }
}

/// Show the picked option's text in the widget's display element.
fn choose(page: &mut Page, pick: &OptionPick) {
    let Some(text) = find_element(page.document(), &pick.option)
        .and_then(|el| el.text_content())
        .map(str::to_string)
    else {
        return;
    };

    let display = match page.widget(&pick.widget).map(|w| w.display_id(page.document())) {
        Some(Ok(id)) => id,
        Some(Err(err)) => {
            log::error!("no display element for {}: {err}", pick.widget);
            return;
        }
        None => return,
    };

    if let Some(display) = clickdom::find_element_mut(page.document_mut(), &display) {
        log::info!("picked {text}");
        display.set_text(text);
    }
}

fn ui() -> Element {
    Element::col()
        .id("page")
        .padding(Edges::all(1))
        .gap(1)
        .child(Element::text("Favourite language (q to quit)"))
        .child(
            Element::col()
                .id("menu")
                .class("select")
                .child(Element::text(LANGUAGES[0]).id("current").class("selected"))
                .child(
                    Element::col().id("list").class("options").children(
                        LANGUAGES
                            .iter()
                            .map(|lang| Element::text(*lang).id(format!("opt-{lang}")).class("option")),
                    ),
                ),
        )
        .child(Element::text("Click anywhere else to close the list."))
}
