//! Модалка классификации контентной записи и её контроллер.

pub mod controller;
pub mod form;

pub use controller::CascadeController;
pub use form::ClassificationForm;
