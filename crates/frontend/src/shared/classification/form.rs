use super::controller::CascadeController;
use crate::shared::components::ui::{Checkbox, Select};
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalHeader;
use contracts::domain::common::AggregateId;
use contracts::enums::ContentType;
use contracts::shared::classification::Classification;
use leptos::prelude::*;

#[component]
pub fn ClassificationForm(
    #[prop(into)] title: String,
    content_type: ContentType,
    seed: Classification,
    saving: RwSignal<bool>,
    on_submit: Callback<Classification>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let ctl = CascadeController::new(content_type, seed);
    ctl.load();
    let cascade = ctl.cascade;

    let category_options = Signal::derive(move || {
        cascade.with(|c| {
            std::iter::once((String::new(), "Select category".to_string()))
                .chain(
                    c.category_options()
                        .into_iter()
                        .map(|cat| (cat.to_string_id(), cat.base.name.clone())),
                )
                .collect::<Vec<_>>()
        })
    });

    let selected_category = Signal::derive(move || {
        cascade.with(|c| {
            c.selection()
                .primary_category()
                .map(|id| id.as_string())
                .unwrap_or_default()
        })
    });

    let sub_disabled = Signal::derive(move || cascade.with(|c| c.sub_category_control_disabled()));

    let subcategory_block = move || {
        cascade.with(|c| {
            if c.selection().primary_category().is_none() {
                return view! { <div class="form__hint">"Select a category first"</div> }.into_any();
            }
            if c.is_loading() {
                return view! { <div class="form__hint">"Loading subcategories..."</div> }.into_any();
            }
            if let Some(e) = c.error() {
                return view! { <div class="error">{format!("Failed to load subcategories: {}", e)}</div> }.into_any();
            }
            if c.visible().is_empty() {
                return view! { <div class="form__hint">"No subcategories in this category"</div> }.into_any();
            }
            c.visible()
                .iter()
                .map(|sub| {
                    let id = sub.base.id;
                    view! {
                        <Checkbox
                            label=sub.base.name.clone()
                            checked=Signal::derive(move || cascade.with(|c| c.selection().sub_category_ids.contains(&id)))
                            disabled=sub_disabled
                            on_change=Callback::new(move |_| ctl.toggle_sub_category(id))
                        />
                    }
                })
                .collect_view()
                .into_any()
        })
    };

    let language_block = move || {
        ctl.languages
            .get()
            .into_iter()
            .map(|lang| {
                let id = lang.base.id;
                view! {
                    <Checkbox
                        label=format!("{} ({})", lang.base.name, lang.code)
                        checked=Signal::derive(move || cascade.with(|c| c.selection().language_ids.contains(&id)))
                        on_change=Callback::new(move |_| ctl.toggle_language(id))
                    />
                }
            })
            .collect_view()
    };

    let validity_block = move || {
        ctl.validities
            .get()
            .into_iter()
            .map(|v| {
                let id = v.base.id;
                view! {
                    <Checkbox
                        label=v.base.name.clone()
                        checked=Signal::derive(move || cascade.with(|c| c.selection().validity_ids.contains(&id)))
                        on_change=Callback::new(move |_| ctl.toggle_validity(id))
                    />
                }
            })
            .collect_view()
    };

    view! {
        <div class="details-container">
            <ModalHeader title=Signal::derive(move || title.clone()) on_close=on_cancel />
            {move || ctl.lookup_error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <Select
                    label="Category"
                    id="classification-category"
                    value=selected_category
                    options=category_options
                    on_change=Callback::new(move |raw: String| ctl.select_category(&raw))
                />

                <fieldset class="form__fieldset" disabled=move || sub_disabled.get()>
                    <legend class="form__label">"Subcategories"</legend>
                    {subcategory_block}
                    {move || cascade.with(|c| c.notice().map(|n| n.to_string())).map(|n| view! { <div class="warning">{n}</div> })}
                </fieldset>

                <fieldset class="form__fieldset">
                    <legend class="form__label">"Languages"</legend>
                    {language_block}
                </fieldset>

                <fieldset class="form__fieldset">
                    <legend class="form__label">"Validity"</legend>
                    {validity_block}
                </fieldset>
            </div>

            <div class="details-actions">
                <button
                    class="button button--primary"
                    disabled=move || saving.get() || cascade.with(|c| c.is_loading())
                    on:click=move |_| on_submit.run(ctl.selection())
                >
                    {icon("save")}
                    {move || if saving.get() { "Saving..." } else { "Save classification" }}
                </button>
                <button class="button button--secondary" on:click=move |_| on_cancel.run(())>"Cancel"</button>
            </div>
        </div>
    }
}
