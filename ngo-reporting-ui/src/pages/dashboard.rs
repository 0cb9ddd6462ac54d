//! Dashboard Page
//!
//! Aggregated statistics for one month, chosen by free text or the month
//! picker.

use leptos::*;
use ngo_reporting::dashboard::{DashboardRequest, DashboardState, DashboardView, EMPTY_MESSAGE};
use ngo_reporting::{Month, ReportingApi};

use crate::api::GlooApi;
use crate::components::{Alert, AlertVariant, Loading, MonthPicker, StatCard};

/// Caption of the button switching between text input and picker
pub fn toggle_label(show_picker: bool) -> &'static str {
    if show_picker {
        "Use Text Input"
    } else {
        "Use Date Picker"
    }
}

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = create_rw_signal(DashboardState::default());
    let (show_picker, set_show_picker) = create_signal(false);
    let api = store_value(GlooApi::from_env());

    // Fetch in the background; only the newest request may update the view
    let dispatch = move |request: Option<DashboardRequest>| {
        let Some(request) = request else {
            return;
        };

        let api = api.get_value();
        spawn_local(async move {
            let result = api.fetch_dashboard(&request.month).await;
            if let Err(e) = &result {
                web_sys::console::error_1(
                    &format!("Failed to fetch dashboard for {}: {}", request.month, e).into(),
                );
            }
            state.update(|s| {
                s.apply(&request, result);
            });
        });
    };

    let select = move |input: String| {
        dispatch(state.try_update(|s| s.select_month(&input)).flatten());
    };

    // Fetch the initial month on mount
    create_effect(move |_| {
        dispatch(state.try_update(|s| s.refresh()).flatten());
    });

    let selected_month = create_memo(move |_| state.with(|s| s.month()));
    let loading = create_memo(move |_| state.with(|s| s.is_loading()));

    view! {
        <div class="max-w-5xl mx-auto bg-white rounded-xl shadow-lg p-8 space-y-6">
            // Page header
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-semibold text-primary-700">"Admin Dashboard"</h1>
                <div class="text-sm text-gray-500">
                    {move || selected_month.get().map(|m| m.label())}
                </div>
            </div>

            // Month selection
            <div class="flex flex-wrap items-end gap-3">
                {move || if show_picker.get() {
                    view! {
                        <div>
                            <label for="dashboard-month-picker" class="block text-sm text-gray-600 mb-1">
                                "Select Month"
                            </label>
                            <MonthPicker
                                id="dashboard-month-picker"
                                value=selected_month
                                on_change=move |month: Month| select(month.to_string())
                            />
                        </div>
                    }.into_view()
                } else {
                    view! {
                        <div class="w-full max-w-xs">
                            <label for="dashboard-month" class="block text-sm text-gray-600 mb-1">
                                "Select Month (YYYY-MM)"
                            </label>
                            <input
                                id="dashboard-month"
                                type="text"
                                placeholder="YYYY-MM"
                                prop:value=move || state.with(|s| s.input().to_string())
                                on:input=move |ev| select(event_target_value(&ev))
                                class="w-full bg-white rounded-lg px-4 py-2 border border-gray-300
                                       focus:border-primary-500 focus:outline-none"
                            />
                        </div>
                    }.into_view()
                }}

                <button
                    type="button"
                    on:click=move |_| set_show_picker.update(|p| *p = !*p)
                    class="px-4 py-2 rounded-lg border border-primary-600 text-primary-700
                           hover:bg-primary-50 transition-colors"
                >
                    {move || toggle_label(show_picker.get())}
                </button>

                <button
                    type="button"
                    disabled=move || loading.get()
                    on:click=move |_| dispatch(state.try_update(|s| s.refresh()).flatten())
                    class="px-4 py-2 rounded-lg text-gray-600 hover:text-primary-700
                           disabled:text-gray-300 disabled:cursor-not-allowed transition-colors"
                >
                    "Refresh"
                </button>
            </div>

            // Summary
            {move || match state.with(|s| s.view()) {
                DashboardView::Error(message) => view! {
                    <Alert message=message variant=AlertVariant::Error />
                }.into_view(),
                DashboardView::Loading => view! { <Loading /> }.into_view(),
                DashboardView::Empty => view! {
                    <p class="text-center text-gray-500 py-8">{EMPTY_MESSAGE}</p>
                }.into_view(),
                DashboardView::Populated(cards) => view! {
                    <div class="grid grid-cols-1 sm:grid-cols-2 md:grid-cols-4 gap-4">
                        {cards.into_iter().map(|card| view! { <StatCard card=card /> }).collect_view()}
                    </div>
                }.into_view(),
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_label() {
        assert_eq!(toggle_label(false), "Use Date Picker");
        assert_eq!(toggle_label(true), "Use Text Input");
    }
}
