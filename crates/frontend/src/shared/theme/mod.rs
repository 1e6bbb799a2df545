//! Темы оформления: dark, light, forest.
//!
//! Выбор хранится в localStorage и применяется подменой `#theme-stylesheet`
//! плюс атрибутом `data-theme` на body.

mod theme_select;

pub use theme_select::ThemeSelect;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::window;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
    Forest,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
            Theme::Forest => "forest",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
            Theme::Forest => "Forest",
        }
    }

    pub fn css_path(&self) -> String {
        format!("static/themes/{0}/{0}.css", self.as_str())
    }

    /// Неизвестное значение - тема по умолчанию
    pub fn parse(s: &str) -> Self {
        match s {
            "light" => Theme::Light,
            "forest" => Theme::Forest,
            _ => Theme::Dark,
        }
    }

    pub fn all() -> [Theme; 3] {
        [Theme::Dark, Theme::Light, Theme::Forest]
    }
}

const THEME_STORAGE_KEY: &str = "app_theme";

fn load_theme_from_storage() -> Theme {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten())
        .map(|s| Theme::parse(&s))
        .unwrap_or_default()
}

fn save_theme_to_storage(theme: Theme) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(THEME_STORAGE_KEY, theme.as_str());
    }
}

fn apply_theme(theme: Theme) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };

    if let Some(body) = document.body() {
        let _ = body.set_attribute("data-theme", theme.as_str());
    }

    if let Some(link) = document.get_element_by_id("theme-stylesheet") {
        if let Ok(link) = link.dyn_into::<web_sys::HtmlLinkElement>() {
            link.set_href(&theme.css_path());
        }
    }
}

#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: RwSignal<Theme>,
}

impl ThemeContext {
    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
        save_theme_to_storage(theme);
        apply_theme(theme);
    }
}

/// Кладёт `ThemeContext` в контекст и применяет сохранённую тему
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let initial_theme = load_theme_from_storage();
    apply_theme(initial_theme);

    provide_context(ThemeContext {
        theme: RwSignal::new(initial_theme),
    });

    children()
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_falls_back_to_dark() {
        assert_eq!(Theme::parse("forest"), Theme::Forest);
        assert_eq!(Theme::parse("light"), Theme::Light);
        assert_eq!(Theme::parse("neon"), Theme::Dark);
        assert_eq!(Theme::parse(""), Theme::Dark);
    }

    #[test]
    fn test_stored_value_matches_parse() {
        for theme in Theme::all() {
            assert_eq!(Theme::parse(theme.as_str()), theme);
        }
    }

    #[test]
    fn test_css_path() {
        assert_eq!(Theme::Light.css_path(), "static/themes/light/light.css");
    }
}
