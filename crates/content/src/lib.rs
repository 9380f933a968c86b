#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;

pub use catalog::{embedded_course, load_course};
pub use error::ContentError;
