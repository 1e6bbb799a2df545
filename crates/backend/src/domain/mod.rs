pub mod a001_category;
pub mod a002_subcategory;
pub mod a003_language;
pub mod a004_validity;
pub mod a005_course;
pub mod a006_publication;
pub mod a007_pyq;
pub mod a008_test_series;
pub mod content;
pub mod testdata;
