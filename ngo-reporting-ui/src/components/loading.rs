//! Loading Component
//!
//! Loading spinners.

use leptos::*;

/// Block loading spinner with a caption
#[component]
pub fn Loading(
    #[prop(default = "Loading...")]
    label: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex items-center justify-center space-x-3 py-12 text-gray-500">
            <div class="loading-spinner w-8 h-8" />
            <span>{label}</span>
        </div>
    }
}

/// Inline loading spinner
#[component]
pub fn InlineLoading() -> impl IntoView {
    view! {
        <span class="inline-block loading-spinner w-4 h-4" />
    }
}
