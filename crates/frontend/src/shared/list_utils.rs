/// Утилиты списков: поиск, сортировка, поле поиска
use gloo_timers::future::TimeoutFuture;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;

/// Минимальная длина запроса, с которой включается фильтр
pub const MIN_FILTER_LEN: usize = 2;

/// Тип строк, поддерживающих поиск
pub trait Searchable {
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Тип строк, поддерживающих сортировку
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

pub fn filter_active(filter: &str) -> bool {
    filter.trim().chars().count() >= MIN_FILTER_LEN
}

/// Регистронезависимое вхождение
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.trim().to_lowercase())
}

pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

pub fn filter_list<T: Searchable>(items: Vec<T>, filter: &str) -> Vec<T> {
    if !filter_active(filter) {
        return items;
    }
    items
        .into_iter()
        .filter(|item| item.matches_filter(filter))
        .collect()
}

/// Поле поиска с задержкой 300 мс и кнопкой очистки
#[component]
pub fn SearchInput(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        format!("Search (min. {} chars)...", MIN_FILTER_LEN)
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(value.get_untracked());
    // поколение ввода: применяется только последнее значение
    let generation = StoredValue::new(0u64);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        let current = generation.get_value() + 1;
        generation.set_value(current);
        spawn_local(async move {
            TimeoutFuture::new(300).await;
            if generation.try_get_value() == Some(current) {
                on_change.run(new_value);
            }
        });
    };

    let clear_filter = move |_| {
        generation.update_value(|g| *g += 1);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=move || filter_active(&value.get())
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear_filter title="Clear">
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

/// Индикатор сортировки для заголовка колонки
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// Обработчик клика по заголовку: та же колонка - смена направления, другая - по возрастанию
pub fn create_sort_toggle(
    field: &'static str,
    sort_field: RwSignal<String>,
    sort_ascending: RwSignal<bool>,
) -> impl Fn(MouseEvent) + 'static {
    move |_| {
        if sort_field.get_untracked() == field {
            sort_ascending.update(|v| *v = !*v);
        } else {
            sort_field.set(field.to_string());
            sort_ascending.set(true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: &'static str,
        months: u32,
    }

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            contains_ci(self.name, filter)
        }
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "months" => self.months.cmp(&other.months),
                _ => self.name.cmp(other.name),
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "Twelve months", months: 12 },
            Row { name: "One month", months: 1 },
            Row { name: "Six months", months: 6 },
        ]
    }

    #[test]
    fn test_short_filter_keeps_everything() {
        assert_eq!(filter_list(rows(), "s").len(), 3);
        assert_eq!(filter_list(rows(), "  ").len(), 3);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let found = filter_list(rows(), "SIX");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].months, 6);
    }

    #[test]
    fn test_sort_both_directions() {
        let mut items = rows();
        sort_list(&mut items, "months", true);
        assert_eq!(items.iter().map(|r| r.months).collect::<Vec<_>>(), vec![1, 6, 12]);
        sort_list(&mut items, "months", false);
        assert_eq!(items.iter().map(|r| r.months).collect::<Vec<_>>(), vec![12, 6, 1]);
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator("name", "name", true), " ▲");
        assert_eq!(get_sort_indicator("name", "name", false), " ▼");
        assert_eq!(get_sort_indicator("name", "months", true), " ⇅");
    }
}
