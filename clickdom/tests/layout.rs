use clickdom::layout::measure;
use clickdom::{layout, Edges, Element, Rect, Selector, Style, Stylesheet};
use pretty_assertions::assert_eq;

fn sheet() -> Stylesheet {
    Stylesheet::new()
        .rule(Selector::class("options"), Style::new().hidden())
        .rule(
            Selector::class("options").and_class("show"),
            Style::new().display(clickdom::Display::Block),
        )
        .rule(Selector::class("selected"), Style::new().prefix("> "))
}

fn menu(open: bool) -> Element {
    let mut options = Element::col()
        .id("list")
        .class("options")
        .child(Element::text("Go").id("opt-go"))
        .child(Element::text("Zig").id("opt-zig"));
    if open {
        options = options.class("show");
    }

    Element::col()
        .id("page")
        .child(
            Element::col()
                .id("menu")
                .class("select")
                .child(Element::text("Rust").id("current").class("selected"))
                .child(options),
        )
        .child(Element::text("footer").id("footer"))
}

#[test]
fn test_column_children_stack() {
    let result = layout(&menu(true), &sheet(), Rect::from_size(20, 10));

    assert_eq!(result.get("page"), Some(&Rect::new(0, 0, 20, 10)));
    assert_eq!(result.get("menu"), Some(&Rect::new(0, 0, 20, 3)));
    assert_eq!(result.get("current"), Some(&Rect::new(0, 0, 20, 1)));
    assert_eq!(result.get("list"), Some(&Rect::new(0, 1, 20, 2)));
    assert_eq!(result.get("opt-zig"), Some(&Rect::new(0, 2, 20, 1)));
    assert_eq!(result.get("footer"), Some(&Rect::new(0, 3, 20, 1)));
}

#[test]
fn test_hidden_subtree_gets_no_rect() {
    let result = layout(&menu(false), &sheet(), Rect::from_size(20, 10));

    assert!(result.get("list").is_none());
    assert!(result.get("opt-go").is_none());
    assert_eq!(result.get("menu"), Some(&Rect::new(0, 0, 20, 1)));
    assert_eq!(result.get("footer"), Some(&Rect::new(0, 1, 20, 1)));
}

#[test]
fn test_row_uses_natural_width_and_gap() {
    let root = Element::row()
        .id("bar")
        .gap(1)
        .padding(Edges::symmetric(0, 1))
        .child(Element::text("ab").id("a"))
        .child(Element::text("cde").id("b"))
        .child(Element::text("x").id("c").class("selected"));

    let result = layout(&root, &sheet(), Rect::from_size(30, 1));

    assert_eq!(result.get("a"), Some(&Rect::new(1, 0, 2, 1)));
    assert_eq!(result.get("b"), Some(&Rect::new(4, 0, 3, 1)));
    // Prefix counts toward natural width
    assert_eq!(result.get("c"), Some(&Rect::new(8, 0, 3, 1)));
}

#[test]
fn test_children_clipped_to_container() {
    let root = Element::col()
        .id("root")
        .child(Element::text("one").id("one"))
        .child(Element::text("two").id("two"))
        .child(Element::text("three").id("three"));

    let result = layout(&root, &sheet(), Rect::from_size(10, 2));

    assert_eq!(result.get("two"), Some(&Rect::new(0, 1, 10, 1)));
    assert_eq!(result.get("three"), Some(&Rect::new(0, 2, 10, 0)));
}

#[test]
fn test_huge_padding_saturates() {
    let wide = Element::col().padding(Edges::new(0, u16::MAX, 0, 1));
    assert_eq!(measure(&wide, &sheet()), (u16::MAX, 0));

    let root = Element::col()
        .id("root")
        .padding(Edges::all(u16::MAX))
        .child(Element::text("squeezed").id("inner"));

    let result = layout(&root, &sheet(), Rect::from_size(10, 5));

    assert_eq!(result.get("root"), Some(&Rect::new(0, 0, 10, 5)));
    assert_eq!(result.get("inner"), Some(&Rect::new(u16::MAX, u16::MAX, 0, 0)));
}
