//! Exercise Form Pages
//!
//! Create and edit share one form. Edit starts from the record held in the
//! [`EditSession`](crate::state::EditSession) and saves with a full replace.

use leptos::logging::error;
use leptos::*;
use leptos_router::*;
use std::rc::Rc;

use crate::api::{ApiError, ExerciseApi, HttpExerciseApi};
use crate::app::HOME_PATH;
use crate::components::InlineLoading;
use crate::model::{Exercise, ExerciseDraft, ExercisePayload, UNITS};
use crate::state::{use_edit_session, GlobalState, ViewLifetime};

/// Which request a submitted form sends
#[derive(Debug, Clone, PartialEq)]
pub enum FormMode {
    Create,
    Edit { id: String },
}

impl FormMode {
    fn title(&self) -> &'static str {
        match self {
            FormMode::Create => "Add New Exercise",
            FormMode::Edit { .. } => "Edit Exercise",
        }
    }

    fn submit_label(&self) -> &'static str {
        match self {
            FormMode::Create => "Add",
            FormMode::Edit { .. } => "Save",
        }
    }
}

/// Send the form: POST for a new record, PUT for an edited one
pub async fn save_exercise<A: ExerciseApi>(
    api: &A,
    mode: &FormMode,
    payload: &ExercisePayload,
) -> Result<Exercise, ApiError> {
    match mode {
        FormMode::Create => api.create_exercise(payload).await,
        FormMode::Edit { id } => api.replace_exercise(id, payload).await,
    }
}

/// Choices for the unit select. A stored unit outside [`UNITS`] is listed
/// first so an edit shows the record's value instead of a default.
fn unit_options(current: &str) -> Vec<String> {
    let mut options: Vec<String> = UNITS.iter().map(|unit| unit.to_string()).collect();
    if !current.is_empty() && !UNITS.contains(&current) {
        options.insert(0, current.to_string());
    }
    options
}

#[component]
pub fn CreateExercisePage() -> impl IntoView {
    let initial = ExerciseDraft::for_today();
    view! { <ExerciseForm mode=FormMode::Create initial=initial /> }
}

#[component]
pub fn EditExercisePage() -> impl IntoView {
    match use_edit_session().current() {
        Some(exercise) => {
            let initial = ExerciseDraft::from_exercise(&exercise);
            let mode = FormMode::Edit { id: exercise.id };
            view! { <ExerciseForm mode=mode initial=initial /> }.into_view()
        }
        None => view! {
            <div class="bg-gray-800 rounded-lg p-8 text-center space-y-4">
                <p class="text-gray-400">"No exercise selected for editing."</p>
                <A
                    href=HOME_PATH
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                >
                    "Back to your exercises"
                </A>
            </div>
        }
        .into_view(),
    }
}

#[component]
fn ExerciseForm(mode: FormMode, initial: ExerciseDraft) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let session = use_edit_session();
    let navigate = use_navigate();

    let draft = create_rw_signal(initial);
    let (submitting, set_submitting) = create_signal(false);

    let lifetime = ViewLifetime::new();
    let api = Rc::new(HttpExerciseApi::for_view());
    {
        let lifetime = lifetime.clone();
        let api = Rc::clone(&api);
        on_cleanup(move || {
            lifetime.end();
            api.abort();
        });
    }

    let unit_at_mount = draft.with_untracked(|d| d.unit.clone());
    let title = mode.title();
    let submit_label = mode.submit_label();

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let payload = match draft.with_untracked(|d| d.to_payload()) {
            Ok(payload) => payload,
            Err(message) => {
                state.show_error(&message);
                return;
            }
        };

        set_submitting.set(true);

        let api = Rc::clone(&api);
        let mode = mode.clone();
        let lifetime = lifetime.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = save_exercise(&*api, &mode, &payload).await;
            if !lifetime.is_alive() {
                return;
            }

            match result {
                Ok(saved) => {
                    state.show_success(&format!("Saved {}", saved.name));
                    session.clear();
                    navigate(HOME_PATH, Default::default());
                }
                Err(ApiError::Cancelled) => {}
                Err(e) => {
                    error!("Failed to save exercise: {}", e);
                    state.show_error(&e.to_string());
                    set_submitting.set(false);
                }
            }
        });
    };

    view! {
        <div class="max-w-xl mx-auto space-y-6">
            <h2 class="text-2xl font-bold">{title}</h2>

            <form on:submit=on_submit class="bg-gray-800 rounded-lg p-6 space-y-4">
                <Field label="Name">
                    <input
                        type="text"
                        required
                        class=INPUT_CLASS
                        prop:value=move || draft.with(|d| d.name.clone())
                        on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                    />
                </Field>

                <div class="grid grid-cols-2 gap-4">
                    <Field label="Reps">
                        <input
                            type="number"
                            min="1"
                            step="1"
                            required
                            class=INPUT_CLASS
                            prop:value=move || draft.with(|d| d.reps.clone())
                            on:input=move |ev| draft.update(|d| d.reps = event_target_value(&ev))
                        />
                    </Field>

                    <Field label="Weight">
                        <input
                            type="number"
                            min="0"
                            step="any"
                            required
                            class=INPUT_CLASS
                            prop:value=move || draft.with(|d| d.weight.clone())
                            on:input=move |ev| draft.update(|d| d.weight = event_target_value(&ev))
                        />
                    </Field>
                </div>

                <div class="grid grid-cols-2 gap-4">
                    <Field label="Unit">
                        <select
                            class=INPUT_CLASS
                            prop:value=move || draft.with(|d| d.unit.clone())
                            on:change=move |ev| draft.update(|d| d.unit = event_target_value(&ev))
                        >
                            {unit_options(&unit_at_mount).into_iter().map(|unit| {
                                let value = unit.clone();
                                view! {
                                    <option
                                        value=unit.clone()
                                        selected=move || draft.with(|d| d.unit == value)
                                    >
                                        {unit}
                                    </option>
                                }
                            }).collect_view()}
                        </select>
                    </Field>

                    <Field label="Date">
                        <input
                            type="date"
                            required
                            class=INPUT_CLASS
                            prop:value=move || draft.with(|d| d.date.clone())
                            on:input=move |ev| draft.update(|d| d.date = event_target_value(&ev))
                        />
                    </Field>
                </div>

                <button
                    type="submit"
                    disabled=move || submitting.get()
                    class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                           disabled:cursor-not-allowed rounded-lg py-3 font-semibold
                           transition-colors flex items-center justify-center space-x-2"
                >
                    {move || if submitting.get() {
                        view! {
                            <InlineLoading />
                            <span>"Saving..."</span>
                        }.into_view()
                    } else {
                        view! { <span>{submit_label}</span> }.into_view()
                    }}
                </button>
            </form>
        </div>
    }
}

const INPUT_CLASS: &str = "w-full bg-gray-700 rounded-lg px-4 py-3 text-white \
                           border border-gray-600 focus:border-primary-500 focus:outline-none";

#[component]
fn Field(label: &'static str, children: Children) -> impl IntoView {
    view! {
        <label class="block">
            <span class="block text-sm text-gray-400 mb-2">{label}</span>
            {children()}
        </label>
    }
}
