//! Масштаб интерфейса от ширины окна.
//!
//! На узких экранах весь layout ужимается через CSS `zoom`, таблицы и модалки
//! остаются читаемыми без горизонтальной прокрутки.

use leptos::prelude::window_event_listener;
use leptos::prelude::*;

/// Ступени: (минимальная ширина окна, масштаб)
const ZOOM_STEPS: [(f64, f64); 4] = [(1600.0, 1.0), (1366.0, 0.95), (1024.0, 0.9), (768.0, 0.85)];
const MIN_ZOOM: f64 = 0.8;

pub fn zoom_for_width(width: f64) -> f64 {
    ZOOM_STEPS
        .iter()
        .find(|(min_width, _)| width >= *min_width)
        .map(|(_, zoom)| *zoom)
        .unwrap_or(MIN_ZOOM)
}

fn current_window_width() -> Option<f64> {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
}

/// Сигнал масштаба, пересчитывается на `resize`
pub fn use_viewport_zoom() -> RwSignal<f64> {
    let zoom = RwSignal::new(current_window_width().map(zoom_for_width).unwrap_or(1.0));

    let handle = window_event_listener(leptos::ev::resize, move |_| {
        if let Some(width) = current_window_width() {
            let next = zoom_for_width(width);
            if zoom.get_untracked() != next {
                zoom.set(next);
            }
        }
    });
    on_cleanup(move || handle.remove());

    zoom
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_screens_are_not_scaled() {
        assert_eq!(zoom_for_width(1920.0), 1.0);
        assert_eq!(zoom_for_width(1600.0), 1.0);
    }

    #[test]
    fn test_steps_follow_width() {
        assert_eq!(zoom_for_width(1599.0), 0.95);
        assert_eq!(zoom_for_width(1280.0), 0.9);
        assert_eq!(zoom_for_width(1024.0), 0.9);
        assert_eq!(zoom_for_width(800.0), 0.85);
    }

    #[test]
    fn test_narrow_screens_bottom_out() {
        assert_eq!(zoom_for_width(375.0), MIN_ZOOM);
        assert_eq!(zoom_for_width(0.0), MIN_ZOOM);
    }
}
