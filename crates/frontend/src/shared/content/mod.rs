//! Обобщённые страницы контента (курсы, публикации, PYQ, тест-серии).
//!
//! Тип записи подключается реализацией `ContentPage`: набор колонок
//! таблицы и поля секции "основная информация". Цена и классификация
//! одинаковы для всех типов и редактируются общими модалками.

pub mod api;
pub mod basic_form;
pub mod list;

pub use list::content_list_page;

use contracts::shared::content::ContentItem;
use leptos::prelude::*;

/// Колонка таблицы, специфичная для типа записи
pub struct Column<T> {
    pub title: &'static str,
    pub value: fn(&T) -> String,
}

impl<T> Column<T> {
    pub const fn new(title: &'static str, value: fn(&T) -> String) -> Self {
        Self { title, value }
    }
}

pub trait ContentPage: ContentItem + Send + Sync + 'static {
    fn columns() -> Vec<Column<Self>>;

    /// Поля формы "основная информация"
    fn basic_fields(form: RwSignal<Self::BasicDto>) -> AnyView;

    /// Текст для поиска по таблице
    fn search_text(&self) -> String {
        self.name().to_string()
    }
}

/// Проверка основной информации теми же правилами, что на сервере
pub fn validate_basic<T: ContentItem>(dto: &T::BasicDto) -> Result<(), String> {
    T::from_basic(dto).validate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a005_course::{Course, CourseDto};
    use contracts::domain::a007_pyq::{Pyq, PyqDto};

    #[test]
    fn test_validate_basic_uses_aggregate_rules() {
        assert!(validate_basic::<Course>(&CourseDto::default()).is_err());
        let dto = CourseDto {
            name: "Polity".into(),
            ..CourseDto::default()
        };
        assert_eq!(validate_basic::<Course>(&dto), Ok(()));
    }

    #[test]
    fn test_validate_basic_pyq_requires_exam() {
        let dto = PyqDto {
            name: "Prelims 2019".into(),
            exam_name: String::new(),
            ..PyqDto::default()
        };
        assert!(validate_basic::<Pyq>(&dto).is_err());
    }
}
