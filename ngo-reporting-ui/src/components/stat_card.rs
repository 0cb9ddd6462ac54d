//! Stat Card Component
//!
//! One aggregated dashboard figure.

use leptos::*;
use ngo_reporting::SummaryCard;

#[component]
pub fn StatCard(card: SummaryCard) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg shadow p-6 border border-gray-100">
            <h3 class="text-sm font-medium text-gray-500">{card.label}</h3>
            <p class="text-3xl font-bold text-primary-700 mt-2">{card.value}</p>
        </div>
    }
}
