//! Exercise Log front-end
//!
//! Client-side rendered Leptos application compiled to WebAssembly. It lists
//! exercises from the Exercise Log REST API and lets the user add, edit and
//! delete them.

use leptos::*;

mod api;
mod app;
mod components;
mod model;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
