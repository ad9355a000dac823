pub mod buffer;
pub mod element;
pub mod event;
pub mod hit;
pub mod layout;
pub mod render;
pub mod selector;
pub mod style;
pub mod terminal;
pub mod text;

pub use buffer::{Buffer, Cell, Ink};
pub use element::{
    contains, find_element, find_element_mut, query_selector, query_selector_all,
    query_selector_in, ClassList, Content, Element,
};
pub use event::{Event, Key, MouseButton};
pub use hit::hit_test;
pub use layout::{layout, Direction, Edges, LayoutResult, Rect};
pub use selector::{Selector, SelectorError};
pub use style::{ComputedStyle, Display, Rgb, Rule, Style, Stylesheet, TextStyle};
pub use terminal::Terminal;
