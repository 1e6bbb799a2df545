use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::enums::ContentType;
use crate::shared::classification::Classification;
use crate::shared::content::{validate_title, ContentItem};
use crate::shared::pricing::Pricing;
use serde::{Deserialize, Serialize};

crate::aggregate_id!(
    /// Уникальный идентификатор курса
    CourseId
);

/// Курс
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(flatten)]
    pub base: BaseAggregate<CourseId>,

    #[serde(default)]
    pub description: String,
    /// Продолжительность в часах (0 — не указана)
    #[serde(default)]
    pub duration_hours: u32,
    pub is_active: bool,

    #[serde(default)]
    pub pricing: Pricing,
    #[serde(default)]
    pub classification: Classification,
}

impl Course {
    pub fn new_for_insert(name: String, description: String, duration_hours: u32) -> Self {
        Self {
            base: BaseAggregate::new(CourseId::new_v4(), name),
            description,
            duration_hours,
            is_active: true,
            pricing: Pricing::default(),
            classification: Classification::default(),
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn update(&mut self, dto: &CourseDto) {
        self.base.name = dto.name.trim().to_string();
        self.description = dto.description.trim().to_string();
        self.duration_hours = dto.duration_hours;
        self.is_active = dto.is_active;
    }

    pub fn validate(&self) -> Result<(), String> {
        validate_title("Course", &self.base.name)?;
        if self.duration_hours > 10_000 {
            return Err("Course duration must be at most 10000 hours".into());
        }
        self.pricing.validate()
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for Course {
    type Id = CourseId;

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
        "a005"
    }

    fn collection_name() -> &'static str {
        "courses"
    }

    fn element_name() -> &'static str {
        "Course"
    }

    fn list_name() -> &'static str {
        "Courses"
    }

    fn table_name() -> &'static str {
        "a005_course"
    }
}

impl ContentItem for Course {
    type BasicDto = CourseDto;

    fn content_type() -> ContentType {
        ContentType::Course
    }

    fn uuid(&self) -> uuid::Uuid {
        self.base.id.value()
    }

    fn from_basic(dto: &CourseDto) -> Self {
        let mut course = Self::new_for_insert(String::new(), String::new(), 0);
        course.update(dto);
        course
    }

    fn apply_basic(&mut self, dto: &CourseDto) {
        self.update(dto);
    }

    fn basic_id(dto: &CourseDto) -> Option<&str> {
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
        Course::validate(self)
    }

    fn before_write(&mut self) {
        Course::before_write(self)
    }
}

/// Секция "основная информация" курса
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDto {
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub duration_hours: u32,
    pub is_active: bool,
}

impl Default for CourseDto {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            description: String::new(),
            duration_hours: 0,
            is_active: true,
        }
    }
}

impl From<&Course> for CourseDto {
    fn from(c: &Course) -> Self {
        Self {
            id: Some(c.to_string_id()),
            name: c.base.name.clone(),
            description: c.description.clone(),
            duration_hours: c.duration_hours,
            is_active: c.is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape_has_sections() {
        let mut course = Course::new_for_insert("Rust basics".into(), "".into(), 12);
        course.pricing = Pricing {
            price: 100.0,
            discount_price: Some(80.0),
        };
        let json = serde_json::to_value(&course).unwrap();
        assert!(json.get("_id").is_some());
        assert_eq!(json["durationHours"], 12);
        assert_eq!(json["pricing"]["discountPrice"], 80.0);
        assert!(json["classification"]["categoryIds"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_from_basic_trims_and_keeps_sections_empty() {
        let dto = CourseDto {
            name: "  Algebra ".into(),
            duration_hours: 40,
            ..Default::default()
        };
        let course = Course::from_basic(&dto);
        assert_eq!(course.base.name, "Algebra");
        assert!(course.is_active);
        assert!(course.pricing.is_free());
        assert!(course.classification.is_empty());
    }

    #[test]
    fn test_validation() {
        let mut course = Course::new_for_insert(" ".into(), "".into(), 0);
        assert!(course.validate().is_err());
        course.base.name = "Geometry".into();
        assert!(course.validate().is_ok());
        course.pricing = Pricing {
            price: 10.0,
            discount_price: Some(20.0),
        };
        assert!(course.validate().is_err());
    }

    #[test]
    fn test_deserialize_without_sections() {
        let json = r#"{"_id":"6f1c1e8e-3b1a-4f4e-9f61-0a3f3f7c2b10","name":"Old","isActive":false}"#;
        let course: Course = serde_json::from_str(json).unwrap();
        assert!(!course.is_active);
        assert_eq!(course.duration_hours, 0);
        assert!(course.classification.is_empty());
    }
}
