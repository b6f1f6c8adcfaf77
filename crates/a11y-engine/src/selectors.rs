//! Static CSS selectors shared by the checks

use lazy_static::lazy_static;
use scraper::Selector;

lazy_static! {
    pub static ref TITLE: Selector = Selector::parse("title").unwrap();
    pub static ref HTML_ROOT: Selector = Selector::parse("html").unwrap();
    pub static ref IMG: Selector = Selector::parse("img").unwrap();
    pub static ref FORM_CONTROLS: Selector = Selector::parse("input, select, textarea").unwrap();
    pub static ref LABEL: Selector = Selector::parse("label").unwrap();
    pub static ref HEADINGS: Selector = Selector::parse("h1, h2, h3, h4, h5, h6").unwrap();
    pub static ref ANY_ELEMENT: Selector = Selector::parse("*").unwrap();
    pub static ref TABBED: Selector = Selector::parse("[tabindex]").unwrap();
    pub static ref ROLE: Selector = Selector::parse("[role]").unwrap();
    pub static ref HEADER: Selector = Selector::parse("header").unwrap();
    pub static ref FOOTER: Selector = Selector::parse("footer").unwrap();
    pub static ref NAV: Selector = Selector::parse("nav").unwrap();
    pub static ref MAIN_LIKE: Selector =
        Selector::parse(r#"main, [role="main"], #main, #content"#).unwrap();
}
