pub mod aggregate;

pub use aggregate::{TestSeries, TestSeriesDto, TestSeriesId};
