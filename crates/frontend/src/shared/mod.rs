pub mod api_utils;
pub mod classification;
pub mod components;
pub mod confirm;
pub mod content;
pub mod date_utils;
pub mod icons;
pub mod list_utils;
pub mod modal_frame;
pub mod modal_stack;
pub mod pricing;
pub mod theme;
pub mod toast;
