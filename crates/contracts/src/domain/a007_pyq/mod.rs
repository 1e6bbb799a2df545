pub mod aggregate;

pub use aggregate::{Pyq, PyqDto, PyqId};
