use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::enums::ContentType;
use crate::shared::classification::Classification;
use crate::shared::content::{validate_title, ContentItem};
use crate::shared::pricing::Pricing;
use serde::{Deserialize, Serialize};

crate::aggregate_id!(
    /// Уникальный идентификатор публикации
    PublicationId
);

/// Публикация (книга, пособие)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Publication {
    #[serde(flatten)]
    pub base: BaseAggregate<PublicationId>,

    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub isbn: Option<String>,
    pub is_active: bool,

    #[serde(default)]
    pub pricing: Pricing,
    #[serde(default)]
    pub classification: Classification,
}

impl Publication {
    pub fn new_for_insert(name: String) -> Self {
        Self {
            base: BaseAggregate::new(PublicationId::new_v4(), name),
            description: String::new(),
            authors: Vec::new(),
            isbn: None,
            is_active: true,
            pricing: Pricing::default(),
            classification: Classification::default(),
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn update(&mut self, dto: &PublicationDto) {
        self.base.name = dto.name.trim().to_string();
        self.description = dto.description.trim().to_string();
        self.authors = dto
            .authors
            .iter()
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty())
            .collect();
        self.isbn = dto
            .isbn
            .as_ref()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        self.is_active = dto.is_active;
    }

    pub fn validate(&self) -> Result<(), String> {
        validate_title("Publication", &self.base.name)?;
        if let Some(isbn) = &self.isbn {
            if !is_valid_isbn(isbn) {
                return Err(format!("Invalid ISBN: {}", isbn));
            }
        }
        self.pricing.validate()
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

/// ISBN-10 или ISBN-13: только длина и состав символов, дефисы допускаются
fn is_valid_isbn(isbn: &str) -> bool {
    let chars: Vec<char> = isbn.chars().filter(|c| *c != '-' && *c != ' ').collect();
    match chars.len() {
        13 => chars.iter().all(|c| c.is_ascii_digit()),
        10 => {
            chars[..9].iter().all(|c| c.is_ascii_digit())
                && (chars[9].is_ascii_digit() || chars[9] == 'X' || chars[9] == 'x')
        }
        _ => false,
    }
}

impl AggregateRoot for Publication {
    type Id = PublicationId;

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
        "a006"
    }

    fn collection_name() -> &'static str {
        "publications"
    }

    fn element_name() -> &'static str {
        "Publication"
    }

    fn list_name() -> &'static str {
        "Publications"
    }

    fn table_name() -> &'static str {
        "a006_publication"
    }
}

impl ContentItem for Publication {
    type BasicDto = PublicationDto;

    fn content_type() -> ContentType {
        ContentType::Publication
    }

    fn uuid(&self) -> uuid::Uuid {
        self.base.id.value()
    }

    fn from_basic(dto: &PublicationDto) -> Self {
        let mut p = Self::new_for_insert(String::new());
        p.update(dto);
        p
    }

    fn apply_basic(&mut self, dto: &PublicationDto) {
        self.update(dto);
    }

    fn basic_id(dto: &PublicationDto) -> Option<&str> {
        dto.id.as_deref()
    }

    fn pricing(&self) -> &Pricing {
        &self.pricing
    }

    fn pricing_mut(&mut self) -> &mut Pricing {
        &mut self.pricing
    }

    fn classification(&self) -> &Classification {
        &self.classification
    }

    fn classification_mut(&mut self) -> &mut Classification {
        &mut self.classification
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn validate(&self) -> Result<(), String> {
        Publication::validate(self)
    }

    fn before_write(&mut self) {
        Publication::before_write(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicationDto {
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub isbn: Option<String>,
    pub is_active: bool,
}

impl Default for PublicationDto {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            description: String::new(),
            authors: Vec::new(),
            isbn: None,
            is_active: true,
        }
    }
}

impl From<&Publication> for PublicationDto {
    fn from(p: &Publication) -> Self {
        Self {
            id: Some(p.to_string_id()),
            name: p.base.name.clone(),
            description: p.description.clone(),
            authors: p.authors.clone(),
            isbn: p.isbn.clone(),
            is_active: p.is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_drops_blank_authors_and_isbn() {
        let mut p = Publication::new_for_insert("Physics".into());
        p.update(&PublicationDto {
            name: "Physics Vol. 1".into(),
            authors: vec![" H. C. Verma ".into(), "  ".into()],
            isbn: Some("   ".into()),
            ..Default::default()
        });
        assert_eq!(p.authors, vec!["H. C. Verma".to_string()]);
        assert_eq!(p.isbn, None);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_isbn_check() {
        assert!(is_valid_isbn("978-3-16-148410-0"));
        assert!(is_valid_isbn("0-306-40615-X"));
        assert!(!is_valid_isbn("12345"));
        assert!(!is_valid_isbn("97831614841AB"));

        let mut p = Publication::new_for_insert("Chemistry".into());
        p.isbn = Some("abc".into());
        assert!(p.validate().is_err());
    }
}
