use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};

crate::aggregate_id!(
    /// Уникальный идентификатор языка
    LanguageId
);

/// Язык контента (плоский справочник)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    #[serde(flatten)]
    pub base: BaseAggregate<LanguageId>,

    /// Короткий код, например "en" или "hi"
    pub code: String,
}

impl Language {
    pub fn new_for_insert(name: String, code: String) -> Self {
        Self {
            base: BaseAggregate::new(LanguageId::new_v4(), name),
            code,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn update(&mut self, dto: &LanguageDto) {
        self.base.name = dto.name.trim().to_string();
        self.code = dto.code.trim().to_lowercase();
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.name.trim().is_empty() {
            return Err("Language name must not be empty".into());
        }
        let code = self.code.trim();
        if code.is_empty() || code.len() > 8 || !code.chars().all(|c| c.is_ascii_alphabetic() || c == '-') {
            return Err("Language code must be 1-8 latin letters (e.g. \"en\", \"hi\")".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for Language {
    type Id = LanguageId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn name(&self) -> &str {
        &self.base.name
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "languages"
    }

    fn element_name() -> &'static str {
        "Language"
    }

    fn list_name() -> &'static str {
        "Languages"
    }

    fn table_name() -> &'static str {
        "a003_language"
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageDto {
    pub id: Option<String>,
    pub name: String,
    pub code: String,
}

impl From<&Language> for LanguageDto {
    fn from(l: &Language) -> Self {
        Self {
            id: Some(l.to_string_id()),
            name: l.base.name.clone(),
            code: l.code.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_is_normalized_on_update() {
        let mut l = Language::new_for_insert("Hindi".into(), "hi".into());
        l.update(&LanguageDto {
            id: None,
            name: " Hindi ".into(),
            code: " HI ".into(),
        });
        assert_eq!(l.base.name, "Hindi");
        assert_eq!(l.code, "hi");
        assert!(l.validate().is_ok());
    }

    #[test]
    fn test_code_validation() {
        assert!(Language::new_for_insert("English".into(), "".into()).validate().is_err());
        assert!(Language::new_for_insert("English".into(), "en_1".into()).validate().is_err());
        assert!(Language::new_for_insert("English".into(), "en-IN".into()).validate().is_ok());
    }
}
