pub mod badge;
pub mod button;
pub mod checkbox;
pub mod input;
pub mod select;
pub mod textarea;

pub use badge::{Badge, BadgeVariant};
pub use button::{Button, ButtonVariant};
pub use checkbox::Checkbox;
pub use input::Input;
pub use select::Select;
pub use textarea::Textarea;
