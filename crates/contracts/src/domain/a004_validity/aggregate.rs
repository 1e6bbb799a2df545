use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};

crate::aggregate_id!(
    /// Уникальный идентификатор срока доступа
    ValidityId
);

/// Срок доступа к купленному контенту (плоский справочник)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Validity {
    #[serde(flatten)]
    pub base: BaseAggregate<ValidityId>,

    pub months: u32,
}

impl Validity {
    pub fn new_for_insert(name: String, months: u32) -> Self {
        Self {
            base: BaseAggregate::new(ValidityId::new_v4(), name),
            months,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn update(&mut self, dto: &ValidityDto) {
        self.base.name = dto.name.trim().to_string();
        self.months = dto.months;
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.name.trim().is_empty() {
            return Err("Validity name must not be empty".into());
        }
        if self.months == 0 || self.months > 120 {
            return Err("Validity must be between 1 and 120 months".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for Validity {
    type Id = ValidityId;

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
        "a004"
    }

    fn collection_name() -> &'static str {
        "validities"
    }

    fn element_name() -> &'static str {
        "Validity"
    }

    fn list_name() -> &'static str {
        "Validities"
    }

    fn table_name() -> &'static str {
        "a004_validity"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidityDto {
    pub id: Option<String>,
    pub name: String,
    pub months: u32,
}

impl Default for ValidityDto {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            months: 12,
        }
    }
}

impl From<&Validity> for ValidityDto {
    fn from(v: &Validity) -> Self {
        Self {
            id: Some(v.to_string_id()),
            name: v.base.name.clone(),
            months: v.months,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_months_bounds() {
        assert!(Validity::new_for_insert("None".into(), 0).validate().is_err());
        assert!(Validity::new_for_insert("1 year".into(), 12).validate().is_ok());
        assert!(Validity::new_for_insert("Forever".into(), 121).validate().is_err());
    }
}
