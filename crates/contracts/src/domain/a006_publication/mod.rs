pub mod aggregate;

pub use aggregate::{Publication, PublicationDto, PublicationId};
