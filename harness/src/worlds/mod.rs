//! Problem domains that plug into the search engine.

pub mod sheep_pen;
