//! Заголовки вкладок.
//!
//! Для агрегатов берётся `list_name` из contracts, fallback - пустая строка.

use contracts::domain::a001_category::Category;
use contracts::domain::a002_subcategory::SubCategory;
use contracts::domain::a003_language::Language;
use contracts::domain::a004_validity::Validity;
use contracts::domain::a005_course::Course;
use contracts::domain::a006_publication::Publication;
use contracts::domain::a007_pyq::Pyq;
use contracts::domain::a008_test_series::TestSeries;
use contracts::domain::common::AggregateRoot;

pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        "a001_category" => Category::list_name(),
        "a002_subcategory" => SubCategory::list_name(),
        "a003_language" => Language::list_name(),
        "a004_validity" => Validity::list_name(),
        "a005_course" => Course::list_name(),
        "a006_publication" => Publication::list_name(),
        "a007_pyq" => Pyq::list_name(),
        "a008_test_series" => TestSeries::list_name(),
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_keys_have_labels() {
        assert_eq!(tab_label_for_key("a005_course"), "Courses");
        assert!(!tab_label_for_key("a002_subcategory").is_empty());
    }

    #[test]
    fn test_unknown_key_falls_back_to_empty() {
        assert_eq!(tab_label_for_key("d400_monthly_summary"), "");
    }
}
