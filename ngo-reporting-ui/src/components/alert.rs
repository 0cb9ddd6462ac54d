//! Alert Component
//!
//! Inline success and error messages.

use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertVariant {
    Success,
    Error,
}

impl AlertVariant {
    fn style(self) -> (&'static str, &'static str) {
        match self {
            AlertVariant::Success => ("✓", "bg-green-50 border-green-400 text-green-800"),
            AlertVariant::Error => ("✕", "bg-red-50 border-red-400 text-red-800"),
        }
    }
}

#[component]
pub fn Alert(
    #[prop(into)]
    message: String,
    variant: AlertVariant,
) -> impl IntoView {
    let (icon, class) = variant.style();
    let role = if variant == AlertVariant::Error { "alert" } else { "status" };

    view! {
        <div
            role=role
            class=format!("flex items-center space-x-3 border rounded-lg px-4 py-3 {}", class)
        >
            <span class="text-lg">{icon}</span>
            <span class="text-sm font-medium">{message}</span>
        </div>
    }
}
