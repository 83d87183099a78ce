//! Form fields shared by the project and task create/edit forms.

use leptos::prelude::*;

use crate::net::types::TaskStatus;

/// Name input plus description textarea bound to the given signals.
#[component]
pub fn RecordFields(
    name: RwSignal<String>,
    description: RwSignal<String>,
    #[prop(default = "Name")] name_label: &'static str,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">{name_label}</span>
            <input
                class="field__input"
                type="text"
                required=true
                prop:value=move || name.get()
                on:input=move |ev| name.set(event_target_value(&ev))
            />
        </label>
        <label class="field">
            <span class="field__label">"Description"</span>
            <textarea
                class="field__input"
                rows="3"
                required=true
                prop:value=move || description.get()
                on:input=move |ev| description.set(event_target_value(&ev))
            ></textarea>
        </label>
    }
}

/// Task status dropdown. Unknown values fall back to `todo`.
#[component]
pub fn StatusSelect(status: RwSignal<TaskStatus>) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">"Status"</span>
            <select
                class="field__input"
                prop:value=move || status.get().as_str()
                on:change=move |ev| status.set(TaskStatus::parse(&event_target_value(&ev)).unwrap_or_default())
            >
                {TaskStatus::ALL
                    .into_iter()
                    .map(|s| view! { <option value=s.as_str()>{s.as_str()}</option> })
                    .collect_view()}
            </select>
        </label>
    }
}
