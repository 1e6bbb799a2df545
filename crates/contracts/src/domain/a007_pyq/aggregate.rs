use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::enums::ContentType;
use crate::shared::classification::Classification;
use crate::shared::content::{validate_title, ContentItem};
use crate::shared::pricing::Pricing;
use serde::{Deserialize, Serialize};

crate::aggregate_id!(
    /// Уникальный идентификатор сборника PYQ
    PyqId
);

const MIN_YEAR: i32 = 1950;
const MAX_YEAR: i32 = 2100;

/// Сборник вопросов прошлых лет (past-year questions)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pyq {
    #[serde(flatten)]
    pub base: BaseAggregate<PyqId>,

    /// Экзамен, например "JEE Main"
    pub exam_name: String,
    pub year: i32,
    #[serde(default)]
    pub description: String,
    pub is_active: bool,

    #[serde(default)]
    pub pricing: Pricing,
    #[serde(default)]
    pub classification: Classification,
}

impl Pyq {
    pub fn new_for_insert(name: String, exam_name: String, year: i32) -> Self {
        Self {
            base: BaseAggregate::new(PyqId::new_v4(), name),
            exam_name,
            year,
            description: String::new(),
            is_active: true,
            pricing: Pricing::default(),
            classification: Classification::default(),
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn update(&mut self, dto: &PyqDto) {
        self.base.name = dto.name.trim().to_string();
        self.exam_name = dto.exam_name.trim().to_string();
        self.year = dto.year;
        self.description = dto.description.trim().to_string();
        self.is_active = dto.is_active;
    }

    pub fn validate(&self) -> Result<(), String> {
        validate_title("PYQ", &self.base.name)?;
        if self.exam_name.trim().is_empty() {
            return Err("Exam name must not be empty".into());
        }
        if !(MIN_YEAR..=MAX_YEAR).contains(&self.year) {
            return Err(format!("Year must be between {} and {}", MIN_YEAR, MAX_YEAR));
        }
        self.pricing.validate()
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for Pyq {
    type Id = PyqId;

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
        "a007"
    }

    fn collection_name() -> &'static str {
        "pyqs"
    }

    fn element_name() -> &'static str {
        "PYQ"
    }

    fn list_name() -> &'static str {
        "PYQs"
    }

    fn table_name() -> &'static str {
        "a007_pyq"
    }
}

impl ContentItem for Pyq {
    type BasicDto = PyqDto;

    fn content_type() -> ContentType {
        ContentType::Pyq
    }

    fn uuid(&self) -> uuid::Uuid {
        self.base.id.value()
    }

    fn from_basic(dto: &PyqDto) -> Self {
        let mut pyq = Self::new_for_insert(String::new(), String::new(), dto.year);
        pyq.update(dto);
        pyq
    }

    fn apply_basic(&mut self, dto: &PyqDto) {
        self.update(dto);
    }

    fn basic_id(dto: &PyqDto) -> Option<&str> {
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
        Pyq::validate(self)
    }

    fn before_write(&mut self) {
        Pyq::before_write(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PyqDto {
    pub id: Option<String>,
    pub name: String,
    pub exam_name: String,
    pub year: i32,
    #[serde(default)]
    pub description: String,
    pub is_active: bool,
}

impl Default for PyqDto {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            exam_name: String::new(),
            year: chrono::Utc::now().format("%Y").to_string().parse().unwrap_or(2024),
            description: String::new(),
            is_active: true,
        }
    }
}

impl From<&Pyq> for PyqDto {
    fn from(p: &Pyq) -> Self {
        Self {
            id: Some(p.to_string_id()),
            name: p.base.name.clone(),
            exam_name: p.exam_name.clone(),
            year: p.year,
            description: p.description.clone(),
            is_active: p.is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_range() {
        let mut pyq = Pyq::new_for_insert("JEE 2019".into(), "JEE Main".into(), 2019);
        assert!(pyq.validate().is_ok());
        pyq.year = 1900;
        assert!(pyq.validate().is_err());
    }

    #[test]
    fn test_exam_name_required() {
        let pyq = Pyq::from_basic(&PyqDto {
            name: "NEET papers".into(),
            exam_name: " ".into(),
            year: 2021,
            ..Default::default()
        });
        assert!(pyq.validate().is_err());
    }

    #[test]
    fn test_default_dto_year_is_in_range() {
        let year = PyqDto::default().year;
        assert!((MIN_YEAR..=MAX_YEAR).contains(&year));
    }
}
