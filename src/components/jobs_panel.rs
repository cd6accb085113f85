//! Jobs Panel Component
//!
//! Lists jobs from the backend with create, edit and delete.

use chrono::NaiveDate;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{DeleteConfirmButton, JobForm};
use crate::context::use_app_context;
use crate::models::Job;
use crate::store::{store_remove_job, use_app_store, AppStateStoreFields};
use crate::theme::use_theme;
use crate::view::Palette;

/// "2024-01-01 → open" / "2024-01-01 → 2024-06-30"
pub fn date_range(job: &Job) -> String {
    match job.end_date {
        Some(end) => format!("{} → {}", job.start_date, end),
        None => format!("{} → open", job.start_date),
    }
}

/// Row key covering every displayed field, so an edited job re-renders
pub fn row_key(job: &Job) -> (String, String, NaiveDate, Option<NaiveDate>) {
    (job.id.clone(), job.name.clone(), job.start_date, job.end_date)
}

#[component]
pub fn JobsPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let theme = use_theme();
    let palette = move || Palette::for_theme(theme.get());

    let editing = RwSignal::new(None::<Job>);
    let (loading, set_loading) = signal(true);

    // Load jobs on mount
    Effect::new(move |_| {
        let api = ctx.api();
        spawn_local(async move {
            match api.list_jobs().await {
                Ok(jobs) => {
                    log::info!("[JOBS] Loaded {} jobs", jobs.len());
                    *store.jobs().write() = jobs;
                    *store.jobs_error().write() = None;
                }
                Err(e) => {
                    log::error!("[JOBS] List failed: {} (status {:?})", e, e.status());
                    *store.jobs_error().write() = Some(e.to_string());
                }
            }
            set_loading.set(false);
        });
    });

    // Fetch a fresh copy before editing
    let start_edit = move |id: String| {
        let api = ctx.api();
        spawn_local(async move {
            match api.get_job(&id).await {
                Ok(job) => editing.set(Some(job)),
                Err(e) => {
                    log::error!("[JOBS] Get {} failed: {}", id, e);
                    *store.jobs_error().write() = Some(e.to_string());
                }
            }
        });
    };

    let delete_job = move |id: String| {
        let api = ctx.api();
        spawn_local(async move {
            match api.delete_job(&id).await {
                Ok(()) => {
                    log::info!("[JOBS] Deleted job {}", id);
                    store_remove_job(&store, &id);
                    if editing.with_untracked(|job| job.as_ref().is_some_and(|j| j.id == id)) {
                        editing.set(None);
                    }
                }
                Err(e) => {
                    log::error!("[JOBS] Delete {} failed: {}", id, e);
                    *store.jobs_error().write() = Some(e.to_string());
                }
            }
        });
    };

    view! {
        <section class=move || palette().panel>
            <h2 class="jobs-title">"Jobs"</h2>

            {move || store.jobs_error().get().map(|msg| view! {
                <p class="jobs-error" role="alert">{msg}</p>
            })}

            <JobForm editing=editing />

            <Show when=move || loading.get()>
                <div class="loading">"Loading..."</div>
            </Show>

            <ul class="job-list">
                <For
                    each=move || store.jobs().get()
                    key=row_key
                    children=move |job| {
                        let edit_id = job.id.clone();
                        let delete_id = job.id.clone();
                        let is_open = job.is_open();
                        let range = date_range(&job);
                        view! {
                            <li class="job-row" class:open=is_open>
                                <span class="job-name">{job.name}</span>
                                <span class=move || palette().subtitle>{range}</span>
                                <button class="edit-btn" on:click=move |_| start_edit(edit_id.clone())>
                                    "Edit"
                                </button>
                                <DeleteConfirmButton
                                    button_class="delete-btn"
                                    on_confirm=Callback::new(move |_| delete_job(delete_id.clone()))
                                />
                            </li>
                        }
                    }
                />
            </ul>

            <Show when=move || !loading.get() && store.jobs().with(Vec::is_empty)>
                <p class=move || palette().subtitle>"No jobs yet."</p>
            </Show>
        </section>
    }
}
