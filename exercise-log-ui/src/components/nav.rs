//! Navigation Component
//!
//! Header navigation bar with brand and links.

use leptos::*;
use leptos_router::*;

use crate::app::{CREATE_PATH, HOME_PATH};

/// Navigation header component
#[component]
pub fn Navigation() -> impl IntoView {
    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Brand
                    <A href=HOME_PATH class="flex items-center space-x-3">
                        <span class="text-2xl">"🏋"</span>
                        <span class="text-xl font-bold text-white">"Exercise Log"</span>
                    </A>

                    <div class="flex items-center space-x-1">
                        <NavLink href=HOME_PATH label="Home" />
                        <NavLink href=CREATE_PATH label="Add New Exercise" />
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            exact=true
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-gray-700 text-white"
        >
            {label}
        </A>
    }
}
