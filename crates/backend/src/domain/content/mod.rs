pub mod classification_check;
pub mod service;
pub mod store;

pub use store::{ContentStore, SectionColumns};
