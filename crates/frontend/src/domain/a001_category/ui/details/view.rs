use super::view_model::CategoryDetailsViewModel;
use crate::shared::components::ui::{Checkbox, Input, Select, Textarea};
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalHeader;
use crate::shared::toast::ToastService;
use contracts::enums::ContentType;
use leptos::prelude::*;

#[component]
pub fn CategoryDetails(
    id: Option<String>,
    saving: RwSignal<bool>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not found");
    let vm = CategoryDetailsViewModel::new(saving);
    vm.load_if_needed(id);

    let content_type_options: Vec<(String, String)> = ContentType::all()
        .into_iter()
        .map(|ct| (ct.code().to_string(), ct.display_name().to_string()))
        .collect();

    view! {
        <div class="details-container">
            <ModalHeader
                title=Signal::derive(move || {
                    if vm.is_edit_mode() { "Edit category".to_string() } else { "New category".to_string() }
                })
                on_close=on_cancel
            />

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <Input
                    label="Name"
                    id="category-name"
                    required=true
                    value=Signal::derive(move || vm.form.get().name)
                    on_input=Callback::new(move |v| vm.form.update(|f| f.name = v))
                    placeholder="e.g. Engineering"
                />
                <Select
                    label="Section"
                    id="category-content-type"
                    value=Signal::derive(move || vm.form.get().content_type.code().to_string())
                    options=content_type_options
                    on_change=Callback::new(move |code: String| {
                        if let Some(ct) = ContentType::from_code(&code) {
                            vm.form.update(|f| f.content_type = ct);
                        }
                    })
                />
                <Textarea
                    label="Description"
                    id="category-description"
                    value=Signal::derive(move || vm.form.get().description.unwrap_or_default())
                    on_input=Callback::new(move |v: String| {
                        vm.form.update(|f| f.description = if v.trim().is_empty() { None } else { Some(v) });
                    })
                />
                <Checkbox
                    label="Active"
                    checked=Signal::derive(move || vm.form.get().is_active)
                    on_change=Callback::new(move |checked| vm.form.update(|f| f.is_active = checked))
                />
            </div>

            <div class="details-actions">
                <button
                    class="button button--primary"
                    disabled=move || saving.get()
                    on:click=move |_| vm.save_command(toasts, on_saved)
                >
                    {icon("save")}
                    {move || if saving.get() { "Saving..." } else if vm.is_edit_mode() { "Save" } else { "Create" }}
                </button>
                <button class="button button--secondary" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
            </div>
        </div>
    }
}
