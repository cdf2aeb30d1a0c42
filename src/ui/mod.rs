mod allocation;
mod charts;
mod navbar;
mod news;
mod styles;
mod summary;
mod theme;
mod watchlist;

pub(crate) use theme::{Theme, apply_visuals};
