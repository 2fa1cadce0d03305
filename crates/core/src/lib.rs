#![forbid(unsafe_code)]

pub mod catalog;
pub mod content;
pub mod error;
pub mod model;
pub mod progress;

pub use catalog::Catalog;
pub use error::CatalogError;
pub use progress::{Progress, progress, progress_percent};
