//! Project page: project header plus its task list with add/edit/delete.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reached via `/projects/:id`. Project and tasks load concurrently and are
//! reloaded when the route id changes.

#[cfg(test)]
#[path = "project_test.rs"]
mod project_test;

use futures::future::join;
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

use crate::components::record_fields::{RecordFields, StatusSelect};
use crate::net::api::{ApiClient, ApiError};
use crate::net::types::{Project, Task, TaskInput, TaskStatus};
use crate::state::records::{remove_by_id, replace_by_id, required_pair};
use crate::util::browser::confirm;

pub const LOAD_FAILED: &str = "Failed to load project or tasks.";
pub const CREATE_FAILED: &str = "Failed to create task.";
pub const UPDATE_FAILED: &str = "Failed to update task.";
pub const DELETE_FAILED: &str = "Failed to delete task.";
pub const DELETE_CONFIRM: &str = "Delete this task?";

fn task_input(name: &str, description: &str, status: TaskStatus) -> Option<TaskInput> {
    required_pair(name, description).map(|(name, description)| TaskInput { name, description, status })
}

/// Both halves of the page load must succeed for either to be shown.
fn combine_load(
    project: Result<Project, ApiError>,
    tasks: Result<Vec<Task>, ApiError>,
) -> Result<(Project, Vec<Task>), ApiError> {
    Ok((project?, tasks?))
}

#[component]
pub fn ProjectPage(api: ApiClient) -> impl IntoView {
    let params = use_params_map();
    let project_id = Memo::new(move |_| params.read().get("id").unwrap_or_default());

    let project = RwSignal::new(None::<Project>);
    let tasks = RwSignal::new(Vec::<Task>::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let task_name = RwSignal::new(String::new());
    let task_description = RwSignal::new(String::new());
    let task_status = RwSignal::new(TaskStatus::Todo);

    let editing = RwSignal::new(None::<String>);
    let edit_name = RwSignal::new(String::new());
    let edit_description = RwSignal::new(String::new());
    let edit_status = RwSignal::new(TaskStatus::Todo);

    Effect::new(move || {
        let id = project_id.get();
        if id.is_empty() {
            return;
        }
        loading.set(true);
        error.set(None);
        leptos::task::spawn_local(async move {
            let (project_res, tasks_res) = join(api.get_project(&id), api.list_tasks(&id)).await;
            match combine_load(project_res, tasks_res) {
                Ok((loaded, items)) => {
                    project.set(Some(loaded));
                    tasks.set(items);
                }
                Err(e) => {
                    log::error!("loading project {id} failed: {e}");
                    error.set(Some(LOAD_FAILED.to_owned()));
                }
            }
            loading.set(false);
        });
    });

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let id = project_id.get_untracked();
        if id.is_empty() {
            return;
        }
        let Some(input) = task_input(&task_name.get_untracked(), &task_description.get_untracked(), task_status.get_untracked())
        else {
            return;
        };
        error.set(None);
        leptos::task::spawn_local(async move {
            match api.create_task(&id, &input).await {
                Ok(task) => {
                    tasks.update(|list| list.push(task));
                    task_name.set(String::new());
                    task_description.set(String::new());
                    task_status.set(TaskStatus::Todo);
                }
                Err(e) => {
                    log::error!("creating task in {id} failed: {e}");
                    error.set(Some(CREATE_FAILED.to_owned()));
                }
            }
        });
    };

    let start_edit = move |task: &Task| {
        editing.set(Some(task.id.clone()));
        edit_name.set(task.name.clone());
        edit_description.set(task.description.clone());
        edit_status.set(task.status);
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
        let Some(input) = task_input(&edit_name.get_untracked(), &edit_description.get_untracked(), edit_status.get_untracked())
        else {
            return;
        };
        error.set(None);
        leptos::task::spawn_local(async move {
            match api.update_task(&id, &input).await {
                Ok(updated) => {
                    tasks.update(|list| {
                        replace_by_id(list, updated);
                    });
                    cancel_edit();
                }
                Err(e) => {
                    log::error!("updating task {id} failed: {e}");
                    error.set(Some(UPDATE_FAILED.to_owned()));
                }
            }
        });
    };

    let delete_task = move |id: String| {
        if !confirm(DELETE_CONFIRM) {
            return;
        }
        error.set(None);
        leptos::task::spawn_local(async move {
            match api.delete_task(&id).await {
                Ok(()) => tasks.update(|list| {
                    remove_by_id(list, &id);
                }),
                Err(e) => {
                    log::error!("deleting task {id} failed: {e}");
                    error.set(Some(DELETE_FAILED.to_owned()));
                }
            }
        });
    };

    let ready = move || !loading.get() && project.with(Option::is_some);

    let task_list = move || {
        let items = tasks.get();
        if items.is_empty() {
            return view! { <p class="muted">"No tasks yet."</p> }.into_any();
        }
        view! {
            <ul class="record-list">
                {items
                    .into_iter()
                    .map(|task| {
                        let id = task.id.clone();
                        let Task { name, description, status, .. } = task.clone();
                        view! {
                            <li class="record-card">
                                <div class="record-card__text">
                                    <div class="record-card__heading">
                                        <span class="record-card__title">{name}</span>
                                        <span class=format!("badge badge--{}", status.as_str())>{status.as_str()}</span>
                                    </div>
                                    <p class="record-card__body">{description}</p>
                                </div>
                                <div class="record-card__actions">
                                    <button
                                        type="button"
                                        class="btn btn--secondary"
                                        on:click=move |_| start_edit(&task)
                                    >
                                        "Edit"
                                    </button>
                                    <button
                                        type="button"
                                        class="btn btn--danger"
                                        on:click=move |_| delete_task(id.clone())
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
        <Title text="Project · Pro-Tasker"/>
        <div class="project-page">
            <div class="page-header">
                <h1 class="page-title">"Project Details"</h1>
                <a href="/" class="btn btn--ghost btn--small">"Back to Dashboard"</a>
            </div>
            <Show when=move || error.get().is_some()>
                <div class="alert alert--error">{move || error.get().unwrap_or_default()}</div>
            </Show>
            <Show when=move || loading.get()>
                <p class="muted">"Loading..."</p>
            </Show>
            <Show when=ready>
                <div class="panel">
                    <h2 class="panel__title">{move || project.get().map(|p| p.name).unwrap_or_default()}</h2>
                    <p>{move || project.get().map(|p| p.description).unwrap_or_default()}</p>
                </div>
            </Show>
            <Show when=move || ready() && editing.get().is_none()>
                <form class="panel" on:submit=on_create>
                    <h3 class="panel__title">"Add Task"</h3>
                    <RecordFields name=task_name description=task_description name_label="Title"/>
                    <StatusSelect status=task_status/>
                    <button type="submit" class="btn btn--primary">"Add Task"</button>
                </form>
            </Show>
            <Show when=move || editing.get().is_some()>
                <form class="panel" on:submit=on_update>
                    <h3 class="panel__title">"Edit Task"</h3>
                    <RecordFields name=edit_name description=edit_description name_label="Title"/>
                    <StatusSelect status=edit_status/>
                    <div class="panel__actions">
                        <button type="button" class="btn btn--outline" on:click=move |_| cancel_edit()>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn--primary">"Save"</button>
                    </div>
                </form>
            </Show>
            <Show when=move || !loading.get()>
                <section class="task-section">
                    <h3 class="section-title">"Tasks"</h3>
                    {task_list}
                </section>
            </Show>
        </div>
    }
}
