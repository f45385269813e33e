mod common;
mod json;
mod tsv;

pub use json::JsonLoader;
pub use tsv::TsvLoader;

pub(crate) use common::{build_frame, text_series};
