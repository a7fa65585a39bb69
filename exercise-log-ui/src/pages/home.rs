//! Home Page
//!
//! Lists every exercise and lets the user edit or delete them.

use leptos::logging::{error, warn};
use leptos::*;
use leptos_router::use_navigate;
use std::cell::Cell;
use std::rc::Rc;

use crate::api::{ApiError, ExerciseApi, HttpExerciseApi};
use crate::app::EDIT_PATH;
use crate::components::{ExerciseTable, ListSkeleton};
use crate::model::Exercise;
use crate::state::{use_edit_session, EditSlot, GlobalState, Navigator, ViewLifetime};

/// What the list area shows
#[derive(Debug, Clone, PartialEq)]
pub enum ListState {
    Loading,
    Loaded(Vec<Exercise>),
    Failed(String),
}

/// Result of a delete request, as seen by the list
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    /// The server confirmed with 204; this is the freshly fetched list
    Reloaded(ListState),
    /// The server answered with another status; the list is unchanged
    Rejected { status: u16 },
    /// No response; the list is unchanged
    Failed(String),
    /// Another delete and its reload are still running; nothing was sent
    Busy,
}

/// List-page logic, independent of rendering
#[derive(Clone)]
pub struct HomeController<A> {
    api: A,
    lifetime: ViewLifetime,
    deleting: Rc<Cell<bool>>,
}

/// Clears the in-flight delete flag when dropped
struct DeleteGuard(Rc<Cell<bool>>);

impl Drop for DeleteGuard {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl<A: ExerciseApi> HomeController<A> {
    pub fn new(api: A, lifetime: ViewLifetime) -> Self {
        Self {
            api,
            lifetime,
            deleting: Rc::new(Cell::new(false)),
        }
    }

    /// Whether a delete (or the reload after it) is in flight
    pub fn is_deleting(&self) -> bool {
        self.deleting.get()
    }

    /// Fetch the full list. `None` if the view ended while waiting.
    pub async fn load_exercises(&self) -> Option<ListState> {
        let result = self.api.list_exercises().await;
        if !self.lifetime.is_alive() {
            return None;
        }

        match result {
            Ok(exercises) => Some(ListState::Loaded(exercises)),
            Err(ApiError::Cancelled) => None,
            Err(e) => {
                error!("Failed to load exercises: {}", e);
                Some(ListState::Failed(e.to_string()))
            }
        }
    }

    /// Delete one record, then reload the list from the server on success.
    /// Only one delete runs at a time; a second call while one is in flight
    /// answers [`DeleteOutcome::Busy`]. `None` if the view ended while waiting.
    pub async fn delete_exercise(&self, id: &str) -> Option<DeleteOutcome> {
        if self.deleting.replace(true) {
            return Some(DeleteOutcome::Busy);
        }
        let _guard = DeleteGuard(Rc::clone(&self.deleting));

        let result = self.api.delete_exercise(id).await;
        if !self.lifetime.is_alive() {
            return None;
        }

        match result {
            Ok(()) => self.load_exercises().await.map(DeleteOutcome::Reloaded),
            Err(ApiError::Status { status, .. }) => {
                warn!(
                    "Request to delete exercise with id {} failed. Status code: {}",
                    id, status
                );
                Some(DeleteOutcome::Rejected { status })
            }
            Err(ApiError::Cancelled) => None,
            Err(e) => {
                warn!("Request to delete exercise with id {} failed: {}", id, e);
                Some(DeleteOutcome::Failed(e.to_string()))
            }
        }
    }
}

/// Hand `exercise` to the edit page. Makes no network request.
pub fn edit_exercise(exercise: Exercise, slot: &impl EditSlot, navigator: &impl Navigator) {
    slot.store(exercise);
    navigator.navigate(EDIT_PATH);
}

/// Home page component
#[component]
pub fn HomePage() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let session = use_edit_session();
    let navigate = use_navigate();

    let lifetime = ViewLifetime::new();
    let api = Rc::new(HttpExerciseApi::for_view());
    let controller = HomeController::new(Rc::clone(&api), lifetime.clone());

    on_cleanup(move || {
        lifetime.end();
        api.abort();
    });

    let list = create_rw_signal(ListState::Loading);
    let deleting = create_rw_signal(false);

    let reload = {
        let controller = controller.clone();
        move || {
            let controller = controller.clone();
            list.set(ListState::Loading);
            spawn_local(async move {
                if let Some(next) = controller.load_exercises().await {
                    list.set(next);
                }
            });
        }
    };

    // Initial load on mount
    reload();

    let on_delete = Callback::new(move |id: String| {
        let controller = controller.clone();
        if controller.is_deleting() {
            return;
        }
        deleting.set(true);
        spawn_local(async move {
            let outcome = controller.delete_exercise(&id).await;
            if outcome.is_some() {
                deleting.set(false);
            }
            match outcome {
                Some(DeleteOutcome::Reloaded(next)) => list.set(next),
                Some(DeleteOutcome::Rejected { status }) => {
                    state.show_error(&format!("Could not delete exercise (status {})", status));
                }
                Some(DeleteOutcome::Failed(reason)) => {
                    state.show_error(&format!("Could not delete exercise: {}", reason));
                }
                Some(DeleteOutcome::Busy) | None => {}
            }
        });
    });

    let on_edit = Callback::new(move |exercise: Exercise| {
        let navigator = |path: &str| navigate(path, Default::default());
        edit_exercise(exercise, &session, &navigator);
    });

    view! {
        <div class="space-y-6">
            <h2 class="text-2xl font-bold">"Your Exercises"</h2>

            {move || match list.get() {
                ListState::Loading => view! { <ListSkeleton count=3 /> }.into_view(),
                ListState::Loaded(exercises) => view! {
                    <ExerciseTable
                        exercises=exercises
                        busy=deleting
                        on_edit=on_edit
                        on_delete=on_delete
                    />
                }.into_view(),
                ListState::Failed(reason) => {
                    let retry = reload.clone();
                    view! {
                        <div class="bg-gray-800 rounded-lg p-6 text-center space-y-4">
                            <p class="text-red-400">"Could not load exercises"</p>
                            <p class="text-sm text-gray-400">{reason}</p>
                            <button
                                class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                                on:click=move |_| retry()
                            >
                                "Retry"
                            </button>
                        </div>
                    }.into_view()
                }
            }}
        </div>
    }
}
