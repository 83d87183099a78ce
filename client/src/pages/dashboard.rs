//! Dashboard page listing the user's projects with create/edit/delete.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. The list is fetched once on
//! mount and afterwards only changed by confirmed backend responses.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::record_fields::RecordFields;
use crate::net::api::ApiClient;
use crate::net::types::{Project, ProjectInput};
use crate::routes::AppRoute;
use crate::state::records::{remove_by_id, replace_by_id, required_pair};
use crate::util::browser::confirm;

pub const LOAD_FAILED: &str = "Failed to load projects.";
pub const CREATE_FAILED: &str = "Failed to create project.";
pub const UPDATE_FAILED: &str = "Failed to update project.";
pub const DELETE_FAILED: &str = "Failed to delete project.";
pub const DELETE_CONFIRM: &str = "Delete this project and its tasks?";

fn project_input(name: &str, description: &str) -> Option<ProjectInput> {
    required_pair(name, description).map(|(name, description)| ProjectInput { name, description })
}

#[component]
pub fn DashboardPage(api: ApiClient) -> impl IntoView {
    let projects = RwSignal::new(Vec::<Project>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());

    let editing = RwSignal::new(None::<String>);
    let edit_name = RwSignal::new(String::new());
    let edit_description = RwSignal::new(String::new());

    leptos::task::spawn_local(async move {
        match api.list_projects().await {
            Ok(items) => projects.set(items),
            Err(e) => {
                log::error!("loading projects failed: {e}");
                error.set(Some(LOAD_FAILED.to_owned()));
            }
        }
        loading.set(false);
    });

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(input) = project_input(&name.get_untracked(), &description.get_untracked()) else {
            return;
        };
        error.set(None);
        leptos::task::spawn_local(async move {
            match api.create_project(&input).await {
                Ok(project) => {
                    projects.update(|list| list.push(project));
                    name.set(String::new());
                    description.set(String::new());
                }
                Err(e) => {
                    log::error!("creating project failed: {e}");
                    error.set(Some(CREATE_FAILED.to_owned()));
                }
            }
        });
    };

    let start_edit = move |project: &Project| {
        editing.set(Some(project.id.clone()));
        edit_name.set(project.name.clone());
        edit_description.set(project.description.clone());
    };

    let cancel_edit = move || {
        editing.set(None);
        edit_name.set(String::new());
        edit_description.set(String::new());
    };

    let on_update = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(id) = editing.get_untracked() else {
            return;
        };
        let Some(input) = project_input(&edit_name.get_untracked(), &edit_description.get_untracked()) else {
            return;
        };
        error.set(None);
        leptos::task::spawn_local(async move {
            match api.update_project(&id, &input).await {
                Ok(updated) => {
                    projects.update(|list| {
                        replace_by_id(list, updated);
                    });
                    cancel_edit();
                }
                Err(e) => {
                    log::error!("updating project {id} failed: {e}");
                    error.set(Some(UPDATE_FAILED.to_owned()));
                }
            }
        });
    };

    let delete_project = move |id: String| {
        if !confirm(DELETE_CONFIRM) {
            return;
        }
        error.set(None);
        leptos::task::spawn_local(async move {
            match api.delete_project(&id).await {
                Ok(()) => projects.update(|list| {
                    remove_by_id(list, &id);
                }),
                Err(e) => {
                    log::error!("deleting project {id} failed: {e}");
                    error.set(Some(DELETE_FAILED.to_owned()));
                }
            }
        });
    };

    let project_list = move || {
        if loading.get() {
            return view! { <p class="muted">"Loading projects..."</p> }.into_any();
        }
        let items = projects.get();
        if items.is_empty() {
            return view! { <p class="muted">"You have no projects yet."</p> }.into_any();
        }
        view! {
            <ul class="record-list">
                {items
                    .into_iter()
                    .map(|project| {
                        let href = AppRoute::Project(project.id.clone()).path();
                        let id = project.id.clone();
                        let Project { name: title, description: summary, .. } = project.clone();
                        view! {
                            <li class="record-card">
                                <div class="record-card__text">
                                    <h3 class="record-card__title">{title}</h3>
                                    <p class="record-card__body">{summary}</p>
                                </div>
                                <div class="record-card__actions">
                                    <a href=href class="btn btn--ghost">"View"</a>
                                    <button
                                        type="button"
                                        class="btn btn--secondary"
                                        on:click=move |_| start_edit(&project)
                                    >
                                        "Edit"
                                    </button>
                                    <button
                                        type="button"
                                        class="btn btn--danger"
                                        on:click=move |_| delete_project(id.clone())
                                    >
                                        "Delete"
                                    </button>
                                </div>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        }
        .into_any()
    };

    view! {
        <Title text="Projects · Pro-Tasker"/>
        <div class="dashboard-page">
            <h1 class="page-title">"Your Projects"</h1>
            <Show when=move || error.get().is_some()>
                <div class="alert alert--error">{move || error.get().unwrap_or_default()}</div>
            </Show>
            <Show
                when=move || editing.get().is_some()
                fallback=move || {
                    view! {
                        <form class="panel" on:submit=on_create>
                            <h2 class="panel__title">"Create New Project"</h2>
                            <RecordFields name=name description=description/>
                            <button type="submit" class="btn btn--primary">"Create Project"</button>
                        </form>
                    }
                }
            >
                <form class="panel" on:submit=on_update>
                    <h2 class="panel__title">"Edit Project"</h2>
                    <RecordFields name=edit_name description=edit_description/>
                    <div class="panel__actions">
                        <button type="button" class="btn btn--outline" on:click=move |_| cancel_edit()>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn--primary">"Save"</button>
                    </div>
                </form>
            </Show>
            {project_list}
        </div>
    }
}
