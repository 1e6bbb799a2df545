use crate::domain::a004_validity::api;
use crate::shared::components::ui::{Button, ButtonVariant, Input};
use crate::shared::confirm::confirm;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalHeader;
use crate::shared::modal_stack::{ModalOptions, ModalStackService};
use crate::shared::toast::ToastService;
use contracts::domain::a004_validity::{Validity, ValidityDto};
use leptos::prelude::*;

/// Срок в человекочитаемом виде: "6 months", "1 year", "18 months"
pub fn format_months(months: u32) -> String {
    match months {
        1 => "1 month".to_string(),
        m if m % 12 == 0 && m / 12 == 1 => "1 year".to_string(),
        m if m % 12 == 0 => format!("{} years", m / 12),
        m => format!("{} months", m),
    }
}

/// Поле "Months" хранится строкой, пока пользователь печатает
fn build_dto(id: Option<String>, name: String, months_raw: &str) -> Result<ValidityDto, String> {
    let months = months_raw
        .trim()
        .parse::<u32>()
        .map_err(|_| "Months must be a whole number".to_string())?;
    let dto = ValidityDto { id, name, months };
    let mut probe = Validity::new_for_insert(String::new(), 1);
    probe.update(&dto);
    probe.validate()?;
    Ok(dto)
}

#[component]
fn ValidityDetails(
    initial: ValidityDto,
    saving: RwSignal<bool>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not found");
    let id = initial.id.clone();
    let is_edit = id.is_some();
    let name = RwSignal::new(initial.name);
    let months = RwSignal::new(initial.months.to_string());
    let error = RwSignal::new(None::<String>);

    let save = move || {
        let dto = match build_dto(id.clone(), name.get_untracked(), &months.get_untracked()) {
            Ok(dto) => dto,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };
        error.set(None);
        saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::save(&dto).await {
                Ok(_) => {
                    toasts.success(format!("Validity \"{}\" saved", dto.name.trim()));
                    saving.set(false);
                    on_saved.run(());
                }
                Err(e) => {
                    toasts.error(format!("Failed to save validity: {}", e));
                    error.set(Some(e));
                    saving.set(false);
                }
            }
        });
    };

    view! {
        <div class="details-container">
            <ModalHeader
                title=Signal::derive(move || if is_edit { "Edit validity".to_string() } else { "New validity".to_string() })
                on_close=on_cancel
            />
            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}
            <div class="details-form">
                <Input
                    label="Name"
                    id="validity-name"
                    required=true
                    value=name
                    on_input=Callback::new(move |v| name.set(v))
                    placeholder="1 year access"
                />
                <Input
                    label="Months"
                    id="validity-months"
                    input_type="number"
                    required=true
                    value=months
                    on_input=Callback::new(move |v| months.set(v))
                />
            </div>
            <div class="details-actions">
                <button class="button button--primary" disabled=move || saving.get() on:click=move |_| save()>
                    {icon("save")}
                    {move || if saving.get() { "Saving..." } else { "Save" }}
                </button>
                <button class="button button--secondary" on:click=move |_| on_cancel.run(())>"Cancel"</button>
            </div>
        </div>
    }
}

#[component]
pub fn ValidityList() -> impl IntoView {
    let modal_stack = use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");

    let items = RwSignal::new(Vec::<Validity>::new());
    let error = RwSignal::new(None::<String>);

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_list().await {
                Ok(mut v) => {
                    v.sort_by_key(|x| x.months);
                    items.set(v);
                    error.set(None);
                }
                Err(e) => error.set(Some(e)),
            }
        });
    };

    let open_details = move |initial: ValidityDto| {
        let saving = RwSignal::new(false);
        modal_stack.push(
            ModalOptions::sized(480, "validity-details-modal").guarded(move || !saving.get_untracked()),
            move |handle| {
                let close = handle.clone();
                view! {
                    <ValidityDetails
                        initial=initial.clone()
                        saving=saving
                        on_saved=Callback::new(move |_| {
                            handle.close();
                            fetch();
                        })
                        on_cancel=Callback::new(move |_| close.close())
                    />
                }
                .into_any()
            },
        );
    };

    let delete_row = move |id: String, name: String| {
        if !confirm(&format!("Delete validity \"{}\"?", name)) {
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            match api::delete(&id).await {
                Ok(()) => {
                    toasts.success(format!("Validity \"{}\" deleted", name));
                    fetch();
                }
                Err(e) => toasts.error(format!("Failed to delete validity: {}", e)),
            }
        });
    };

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Validities"</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| open_details(ValidityDto::default())>
                        {icon("plus")}
                        "New validity"
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        "Refresh"
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="warning-box warning-box--error">{e}</div> })}

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Name"</th>
                            <th class="table__header-cell">"Duration"</th>
                            <th class="table__header-cell table__header-cell--actions"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || items.get().into_iter().map(|v| {
                            let dto = ValidityDto::from(&v);
                            let id = v.to_string_id();
                            let name = v.base.name.clone();
                            view! {
                                <tr class="table__row" on:click=move |_| open_details(dto.clone())>
                                    <td class="table__cell">{v.base.name}</td>
                                    <td class="table__cell">{format_months(v.months)}</td>
                                    <td class="table__cell table__cell--actions">
                                        <Button
                                            variant=ButtonVariant::Danger
                                            small=true
                                            title="Delete"
                                            on_click=Callback::new(move |_| delete_row(id.clone(), name.clone()))
                                        >
                                            {icon("delete")}
                                        </Button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_months() {
        assert_eq!(format_months(1), "1 month");
        assert_eq!(format_months(6), "6 months");
        assert_eq!(format_months(12), "1 year");
        assert_eq!(format_months(24), "2 years");
        assert_eq!(format_months(18), "18 months");
    }

    #[test]
    fn test_build_dto_rejects_non_numeric_and_zero() {
        assert!(build_dto(None, "Trial".into(), "abc").is_err());
        assert!(build_dto(None, "Trial".into(), "0").is_err());
        assert_eq!(build_dto(None, "Half year".into(), " 6 ").map(|d| d.months), Ok(6));
    }
}
