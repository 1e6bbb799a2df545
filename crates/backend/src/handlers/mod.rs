pub mod a001_category;
pub mod a002_subcategory;
pub mod a003_language;
pub mod a004_validity;
pub mod content;
pub mod testdata;
