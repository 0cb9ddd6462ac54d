//! Month Picker Component
//!
//! Structured year/month selection that always yields a canonical month.

use leptos::*;
use ngo_reporting::Month;

/// Years offered before the current one
const YEARS_BACK: i32 = 10;

/// Years offered for selection, newest first
///
/// Covers the last [`YEARS_BACK`] years and next year, plus `selected` when it
/// falls outside that window.
pub fn year_options(selected: Option<i32>, current: i32) -> Vec<i32> {
    let mut years: Vec<i32> = (current - YEARS_BACK..=current + 1).rev().collect();
    if let Some(year) = selected {
        if !years.contains(&year) {
            years.push(year);
            years.sort_unstable_by(|a, b| b.cmp(a));
        }
    }
    years
}

/// English month name for 1-12
pub fn month_name(month: u32) -> &'static str {
    u8::try_from(month)
        .ok()
        .and_then(|m| chrono::Month::try_from(m).ok())
        .map(|m| m.name())
        .unwrap_or("")
}

#[component]
pub fn MonthPicker(
    /// Currently selected month, if any
    #[prop(into)]
    value: Signal<Option<Month>>,
    /// Called once both a year and a month are chosen
    #[prop(into)]
    on_change: Callback<Month>,
    /// Id of the year select, for an external label
    #[prop(optional)]
    id: &'static str,
) -> impl IntoView {
    let year = create_rw_signal(value.get_untracked().map(|m| m.year()));
    let month = create_rw_signal(value.get_untracked().map(|m| m.month()));
    let current_year = Month::current().year();

    // Follow selections made outside the picker
    create_effect(move |_| {
        let selected = value.get();
        year.set(selected.map(|m| m.year()));
        month.set(selected.map(|m| m.month()));
    });

    let emit = move || {
        if let (Some(y), Some(m)) = (year.get_untracked(), month.get_untracked()) {
            match Month::from_year_month(y, m) {
                Ok(selected) => on_change.call(selected),
                Err(e) => {
                    web_sys::console::error_1(&format!("Invalid month selection: {}", e).into());
                }
            }
        }
    };

    let select_class = "bg-white rounded-lg px-3 py-2 border border-gray-300 \
                        focus:border-primary-500 focus:outline-none";

    view! {
        <div class="flex space-x-2">
            <select
                id=id
                aria-label="Year"
                class=select_class
                on:change=move |ev| {
                    year.set(event_target_value(&ev).parse().ok());
                    emit();
                }
            >
                <option value="" selected=move || year.get().is_none()>"Year"</option>
                {move || {
                    let selected = year.get();
                    year_options(selected, current_year).into_iter().map(|y| view! {
                        <option value=y.to_string() selected=selected == Some(y)>
                            {format!("{:04}", y)}
                        </option>
                    }).collect_view()
                }}
            </select>

            <select
                aria-label="Month"
                class=select_class
                on:change=move |ev| {
                    month.set(event_target_value(&ev).parse().ok());
                    emit();
                }
            >
                <option value="" selected=move || month.get().is_none()>"Month"</option>
                {(1..=12u32).map(|m| view! {
                    <option value=m.to_string() selected=move || month.get() == Some(m)>
                        {month_name(m)}
                    </option>
                }).collect_view()}
            </select>
        </div>
    }
}
