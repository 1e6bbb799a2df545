//! Классификация контента: категория → подкатегория → язык → срок доступа.
//!
//! - `selection` — состояние выбора в открытой форме
//! - `filter` — вычисление видимых подкатегорий
//! - `cascade` — контроллер scoped-загрузки подкатегорий с отбрасыванием устаревших ответов

pub mod cascade;
pub mod filter;
pub mod selection;

pub use cascade::{FetchOutcome, RequestTicket, ScopedFetch, SubCategoryCascade};
pub use filter::{compute_visible_subcategories, exclude_orphans, is_orphan, ClassificationCatalog};
pub use selection::Classification;
