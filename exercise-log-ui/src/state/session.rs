//! Edit session
//!
//! Carries the record picked on the list page over to the edit page. The
//! session is provided once at the app root and read by the edit route.

use leptos::*;

use crate::model::Exercise;

/// Somewhere to put the record being edited
pub trait EditSlot {
    fn store(&self, exercise: Exercise);
}

/// Route changes, abstracted so page logic can be tested off the browser
pub trait Navigator {
    fn navigate(&self, path: &str);
}

impl<F: Fn(&str)> Navigator for F {
    fn navigate(&self, path: &str) {
        self(path)
    }
}

/// The exercise currently selected for editing
#[derive(Clone, Copy)]
pub struct EditSession {
    selected: RwSignal<Option<Exercise>>,
}

impl EditSession {
    pub fn new() -> Self {
        Self {
            selected: create_rw_signal(None),
        }
    }

    /// Selected record, without subscribing to changes
    pub fn current(&self) -> Option<Exercise> {
        self.selected.get_untracked()
    }

    /// End the session once the edit is saved
    pub fn clear(&self) {
        self.selected.set(None);
    }
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EditSlot for EditSession {
    fn store(&self, exercise: Exercise) {
        self.selected.set(Some(exercise));
    }
}

pub fn provide_edit_session() {
    provide_context(EditSession::new());
}

/// The session provided by [`provide_edit_session`], or a fresh empty one
pub fn use_edit_session() -> EditSession {
    use_context::<EditSession>().unwrap_or_default()
}
