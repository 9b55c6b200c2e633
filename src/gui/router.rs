// src/gui/router.rs
use super::pages::{self, Page};

pub static PAGES: &[&'static dyn Page] = &[
    &pages::match_analysis::PAGE,
    &pages::fight_comparison::PAGE,
];

pub fn all_pages() -> &'static [&'static dyn Page] {
    PAGES
}
