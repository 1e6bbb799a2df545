//! Форма категории (создание/редактирование)
//!
//! - view_model.rs: состояние формы и команды
//! - view.rs: компонент

mod view;
mod view_model;

pub use view::CategoryDetails;
pub use view_model::CategoryDetailsViewModel;
