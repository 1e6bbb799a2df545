//! Начальное наполнение справочников для разработки и демонстрации.

use crate::domain::{a001_category, a002_subcategory, a003_language, a004_validity};
use contracts::domain::a001_category::Category;
use contracts::domain::a002_subcategory::SubCategory;
use contracts::domain::a003_language::Language;
use contracts::domain::a004_validity::Validity;
use contracts::enums::ContentType;
use contracts::shared::api::SeedReport;

/// Категории с подкатегориями для каждого раздела
const CATALOG: &[(ContentType, &[(&str, &[&str])])] = &[
    (
        ContentType::Course,
        &[
            ("Engineering", &["JEE Main", "JEE Advanced", "GATE"]),
            ("Medical", &["NEET UG", "NEET PG"]),
            ("Programming", &["Rust", "Web Development"]),
        ],
    ),
    (
        ContentType::Publication,
        &[
            ("Textbooks", &["Physics", "Chemistry", "Mathematics"]),
            ("Guides", &["Previous Papers", "Quick Revision"]),
        ],
    ),
    (
        ContentType::Pyq,
        &[
            ("Government Exams", &["UPSC", "SSC CGL", "Banking"]),
            ("Entrance Exams", &["JEE Main", "NEET UG"]),
        ],
    ),
    (
        ContentType::TestSeries,
        &[
            ("Full Length Mocks", &["JEE Main", "NEET UG", "SSC CGL"]),
            ("Sectional Tests", &["Quantitative Aptitude", "Reasoning"]),
        ],
    ),
];

const LANGUAGES: &[(&str, &str)] = &[("English", "en"), ("Hindi", "hi"), ("Bengali", "bn")];

const VALIDITIES: &[(&str, u32)] = &[
    ("1 month", 1),
    ("3 months", 3),
    ("6 months", 6),
    ("12 months", 12),
    ("24 months", 24),
];

/// Заполнить пустые справочники. Непустой справочник не трогается.
pub async fn insert_test_data() -> anyhow::Result<SeedReport> {
    let mut report = SeedReport::default();

    if a001_category::repository::list(None, false).await?.is_empty() {
        for (content_type, categories) in CATALOG {
            for (name, subs) in *categories {
                let mut category =
                    Category::new_for_insert(name.to_string(), *content_type, true, None);
                category.before_write();
                a001_category::repository::insert(&category).await?;
                report.categories += 1;

                for sub_name in *subs {
                    let mut sub = SubCategory::new_for_insert(
                        sub_name.to_string(),
                        category.base.id,
                        *content_type,
                    );
                    sub.before_write();
                    a002_subcategory::repository::insert(&sub).await?;
                    report.subcategories += 1;
                }
            }
        }
    }

    if a003_language::repository::list_all().await?.is_empty() {
        for (name, code) in LANGUAGES {
            let mut language = Language::new_for_insert(name.to_string(), code.to_string());
            language.before_write();
            a003_language::repository::insert(&language).await?;
            report.languages += 1;
        }
    }

    if a004_validity::repository::list_all().await?.is_empty() {
        for (name, months) in VALIDITIES {
            let mut validity = Validity::new_for_insert(name.to_string(), *months);
            validity.before_write();
            a004_validity::repository::insert(&validity).await?;
            report.validities += 1;
        }
    }

    tracing::info!(
        "Test data inserted: {} categories, {} subcategories, {} languages, {} validities",
        report.categories,
        report.subcategories,
        report.languages,
        report.validities
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_data_is_valid() {
        for (content_type, categories) in CATALOG {
            for (name, subs) in *categories {
                let category = Category::new_for_insert(name.to_string(), *content_type, true, None);
                assert!(category.validate().is_ok(), "{}", name);
                assert!(!subs.is_empty());
            }
        }
        for (name, code) in LANGUAGES {
            assert!(Language::new_for_insert(name.to_string(), code.to_string())
                .validate()
                .is_ok());
        }
        for (name, months) in VALIDITIES {
            assert!(Validity::new_for_insert(name.to_string(), *months)
                .validate()
                .is_ok());
        }
    }

    #[test]
    fn test_every_content_type_is_seeded() {
        for ct in ContentType::all() {
            assert!(CATALOG.iter().any(|(c, _)| *c == ct));
        }
    }
}
