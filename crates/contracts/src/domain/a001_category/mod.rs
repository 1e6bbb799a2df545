pub mod aggregate;

pub use aggregate::{Category, CategoryDto, CategoryId, CategoryListQuery};
