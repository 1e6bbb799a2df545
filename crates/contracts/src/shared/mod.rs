pub mod api;
pub mod classification;
pub mod content;
pub mod pricing;
