use serde::{Deserialize, Serialize};

/// Раздел платформы, к которому привязаны категории и подкатегории
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContentType {
    Course,
    Publication,
    Pyq,
    TestSeries,
}

impl ContentType {
    /// Код раздела на проводе и в БД
    pub fn code(&self) -> &'static str {
        match self {
            ContentType::Course => "COURSE",
            ContentType::Publication => "PUBLICATION",
            ContentType::Pyq => "PYQ",
            ContentType::TestSeries => "TEST_SERIES",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            ContentType::Course => "Courses",
            ContentType::Publication => "Publications",
            ContentType::Pyq => "Past-year papers",
            ContentType::TestSeries => "Test series",
        }
    }

    pub fn all() -> Vec<ContentType> {
        vec![
            ContentType::Course,
            ContentType::Publication,
            ContentType::Pyq,
            ContentType::TestSeries,
        ]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "COURSE" => Some(ContentType::Course),
            "PUBLICATION" => Some(ContentType::Publication),
            "PYQ" => Some(ContentType::Pyq),
            "TEST_SERIES" => Some(ContentType::TestSeries),
            _ => None,
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_match_serde() {
        for ct in ContentType::all() {
            let json = serde_json::to_string(&ct).unwrap();
            assert_eq!(json, format!("\"{}\"", ct.code()));
            assert_eq!(ContentType::from_code(ct.code()), Some(ct));
        }
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(ContentType::from_code("course"), None);
        assert_eq!(ContentType::from_code(""), None);
    }
}
