//! Navigation Component
//!
//! Header navigation bar with title and screen links.

use leptos::*;
use leptos_router::*;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="bg-primary-700 shadow">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Brand
                    <A href="/" class="text-xl font-semibold text-white">
                        "NGO Reporting"
                    </A>

                    // Navigation links
                    <div class="flex items-center space-x-6">
                        <NavLink href="/" label="Submit Report" />
                        <NavLink href="/dashboard" label="Dashboard" />
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link, underlined and bold while its route is active
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            exact=true
            class="py-2 text-primary-100 hover:text-white transition-colors"
            active_class="text-white font-bold underline underline-offset-4"
        >
            {label}
        </A>
    }
}
