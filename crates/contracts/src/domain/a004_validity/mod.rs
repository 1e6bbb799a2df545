pub mod aggregate;

pub use aggregate::{Validity, ValidityDto, ValidityId};
