//! Job Form Component
//!
//! Creates a new job, or updates the one loaded for editing.

use chrono::NaiveDate;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::models::{Job, JobCreate};
use crate::store::{store_upsert_job, use_app_store, AppStateStoreFields};
use crate::theme::use_theme;
use crate::view::Palette;

/// Raw form input, as typed
#[derive(Clone, Debug, Default, PartialEq)]
pub struct JobDraft {
    pub name: String,
    pub start_date: String,
    /// Empty means the job is still open
    pub end_date: String,
}

impl JobDraft {
    pub fn from_job(job: &Job) -> Self {
        Self {
            name: job.name.clone(),
            start_date: job.start_date.to_string(),
            end_date: job.end_date.map(|d| d.to_string()).unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<JobCreate, String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Job name is required".to_string());
        }
        let start_date = parse_date(&self.start_date)
            .ok_or_else(|| "Start date must be YYYY-MM-DD".to_string())?;
        let end_date = match self.end_date.trim() {
            "" => None,
            raw => Some(parse_date(raw).ok_or_else(|| "End date must be YYYY-MM-DD".to_string())?),
        };
        if end_date.is_some_and(|end| end < start_date) {
            return Err("End date cannot be before start date".to_string());
        }
        Ok(JobCreate {
            name: name.to_string(),
            start_date,
            end_date,
        })
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    raw.trim().parse::<NaiveDate>().ok()
}

#[component]
pub fn JobForm(editing: RwSignal<Option<Job>>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let theme = use_theme();
    let input_class = move || Palette::for_theme(theme.get()).input;

    let (name, set_name) = signal(String::new());
    let (start_date, set_start_date) = signal(String::new());
    let (end_date, set_end_date) = signal(String::new());

    let load_draft = move |draft: JobDraft| {
        set_name.set(draft.name);
        set_start_date.set(draft.start_date);
        set_end_date.set(draft.end_date);
    };

    // Fill the form when a job is picked for editing, clear it when released
    Effect::new(move |_| {
        let draft = editing.with(|job| job.as_ref().map(JobDraft::from_job).unwrap_or_default());
        load_draft(draft);
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = JobDraft {
            name: name.get(),
            start_date: start_date.get(),
            end_date: end_date.get(),
        };
        let payload = match draft.validate() {
            Ok(payload) => payload,
            Err(msg) => {
                *store.jobs_error().write() = Some(msg);
                return;
            }
        };
        let target = editing.get_untracked();
        let api = ctx.api();

        spawn_local(async move {
            let result = match &target {
                Some(job) => api.update_job(&job.id, &payload).await,
                None => api.create_job(&payload).await,
            };
            match result {
                Ok(saved) => {
                    log::info!("[JOBS] Saved job {}", saved.id);
                    store_upsert_job(&store, saved);
                    *store.jobs_error().write() = None;
                    editing.set(None);
                    load_draft(JobDraft::default());
                }
                Err(e) => {
                    log::error!("[JOBS] Save failed: {} (status {:?})", e, e.status());
                    *store.jobs_error().write() = Some(e.to_string());
                }
            }
        });
    };

    view! {
        <form class="job-form" on:submit=on_submit>
            <input
                type="text"
                class=input_class
                placeholder="Job name"
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            <label class="job-form-field">
                "Start"
                <input
                    type="date"
                    class=input_class
                    prop:value=move || start_date.get()
                    on:input=move |ev| set_start_date.set(event_target_value(&ev))
                />
            </label>
            <label class="job-form-field">
                "End"
                <input
                    type="date"
                    class=input_class
                    prop:value=move || end_date.get()
                    on:input=move |ev| set_end_date.set(event_target_value(&ev))
                />
            </label>
            <button type="submit">
                {move || if editing.with(Option::is_some) { "Save" } else { "Add job" }}
            </button>
            <Show when=move || editing.with(Option::is_some)>
                <button type="button" class="cancel-btn" on:click=move |_| editing.set(None)>
                    "Cancel"
                </button>
            </Show>
        </form>
    }
}
