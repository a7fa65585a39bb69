//! App Root Component
//!
//! Routing and the providers every page relies on.

use leptos::*;
use leptos_router::*;

use crate::components::{Navigation, Toast};
use crate::pages::{CreateExercisePage, EditExercisePage, HomePage};
use crate::state::{provide_edit_session, provide_global_state};

pub const HOME_PATH: &str = "/";
pub const CREATE_PATH: &str = "/create-exercise";
pub const EDIT_PATH: &str = "/edit-exercise";

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_global_state();
    provide_edit_session();

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                <header class="text-center py-6">
                    <h1 class="text-3xl font-bold">"Exercise Log"</h1>
                    <p class="text-gray-400">"Track every set you lift"</p>
                </header>

                <Navigation />

                <main class="flex-1 container mx-auto px-4 py-8">
                    <Routes>
                        <Route path=HOME_PATH view=HomePage />
                        <Route path=CREATE_PATH view=CreateExercisePage />
                        <Route path=EDIT_PATH view=EditExercisePage />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                <footer class="text-center text-sm text-gray-500 py-4">
                    "Exercise Log v" {env!("CARGO_PKG_VERSION")}
                </footer>

                <Toast />
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href=HOME_PATH
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Back to your exercises"
            </A>
        </div>
    }
}
