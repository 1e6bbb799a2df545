use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::enums::ContentType;
use crate::shared::classification::Classification;
use crate::shared::content::{validate_title, ContentItem};
use crate::shared::pricing::Pricing;
use serde::{Deserialize, Serialize};

crate::aggregate_id!(
    /// Уникальный идентификатор тест-серии
    TestSeriesId
);

/// Тест-серия (набор пробных тестов)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestSeries {
    #[serde(flatten)]
    pub base: BaseAggregate<TestSeriesId>,

    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub total_tests: u32,
    pub is_active: bool,

    #[serde(default)]
    pub pricing: Pricing,
    #[serde(default)]
    pub classification: Classification,
}

impl TestSeries {
    pub fn new_for_insert(name: String, total_tests: u32) -> Self {
        Self {
            base: BaseAggregate::new(TestSeriesId::new_v4(), name),
            description: String::new(),
            total_tests,
            is_active: true,
            pricing: Pricing::default(),
            classification: Classification::default(),
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn update(&mut self, dto: &TestSeriesDto) {
        self.base.name = dto.name.trim().to_string();
        self.description = dto.description.trim().to_string();
        self.total_tests = dto.total_tests;
        self.is_active = dto.is_active;
    }

    pub fn validate(&self) -> Result<(), String> {
        validate_title("Test series", &self.base.name)?;
        if self.is_active && self.total_tests == 0 {
            return Err("Active test series must contain at least one test".into());
        }
        self.pricing.validate()
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for TestSeries {
    type Id = TestSeriesId;

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
        "a008"
    }

    fn collection_name() -> &'static str {
        "test-series"
    }

    fn element_name() -> &'static str {
        "Test series"
    }

    fn list_name() -> &'static str {
        "Test series"
    }

    fn table_name() -> &'static str {
        "a008_test_series"
    }
}

impl ContentItem for TestSeries {
    type BasicDto = TestSeriesDto;

    fn content_type() -> ContentType {
        ContentType::TestSeries
    }

    fn uuid(&self) -> uuid::Uuid {
        self.base.id.value()
    }

    fn from_basic(dto: &TestSeriesDto) -> Self {
        let mut ts = Self::new_for_insert(String::new(), 0);
        ts.update(dto);
        ts
    }

    fn apply_basic(&mut self, dto: &TestSeriesDto) {
        self.update(dto);
    }

    fn basic_id(dto: &TestSeriesDto) -> Option<&str> {
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
        TestSeries::validate(self)
    }

    fn before_write(&mut self) {
        TestSeries::before_write(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestSeriesDto {
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub total_tests: u32,
    pub is_active: bool,
}

impl Default for TestSeriesDto {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            description: String::new(),
            total_tests: 1,
            is_active: true,
        }
    }
}

impl From<&TestSeries> for TestSeriesDto {
    fn from(t: &TestSeries) -> Self {
        Self {
            id: Some(t.to_string_id()),
            name: t.base.name.clone(),
            description: t.description.clone(),
            total_tests: t.total_tests,
            is_active: t.is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_series_needs_tests() {
        let mut ts = TestSeries::new_for_insert("Mock tests".into(), 0);
        assert!(ts.validate().is_err());
        ts.is_active = false;
        assert!(ts.validate().is_ok());
        ts.is_active = true;
        ts.total_tests = 25;
        assert!(ts.validate().is_ok());
    }

    #[test]
    fn test_dto_roundtrip_through_aggregate() {
        let dto = TestSeriesDto {
            name: "SSC CGL".into(),
            total_tests: 30,
            ..Default::default()
        };
        let ts = TestSeries::from_basic(&dto);
        let back = TestSeriesDto::from(&ts);
        assert_eq!(back.name, "SSC CGL");
        assert_eq!(back.total_tests, 30);
        assert!(back.id.is_some());
    }
}
