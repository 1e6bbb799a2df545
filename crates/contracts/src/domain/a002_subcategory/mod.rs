pub mod aggregate;
pub mod category_ref;

pub use aggregate::{SubCategory, SubCategoryDto, SubCategoryId, SubCategoryQuery};
pub use category_ref::CategoryRef;
