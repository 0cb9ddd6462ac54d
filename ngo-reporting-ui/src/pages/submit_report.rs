//! Submit Report Page
//!
//! Monthly activity report form. Validation runs on submit; a report that
//! fails it never leaves the browser.

use leptos::*;
use ngo_reporting::form::{ReportForm, SubmitBlocked};
use ngo_reporting::{Month, ReportField, ReportingApi};

use crate::api::GlooApi;
use crate::components::{Alert, AlertVariant, InlineLoading, MonthPicker};

/// Form label for each field
fn input_label(field: ReportField) -> &'static str {
    match field {
        ReportField::NgoId => "NGO ID",
        ReportField::Month => "Select Month",
        ReportField::PeopleHelped => "People Helped",
        ReportField::EventsConducted => "Events Conducted",
        ReportField::FundsUtilized => "Funds Utilized ($)",
    }
}

/// Report submission page component
#[component]
pub fn SubmitReport() -> impl IntoView {
    let form = create_rw_signal(ReportForm::new());
    let api = store_value(GlooApi::from_env());

    let submitting = create_memo(move |_| form.with(|f| f.is_submitting()));
    let month = create_memo(move |_| {
        form.with(|f| Month::parse(f.value(ReportField::Month)).ok())
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let report = match form.try_update(|f| f.begin_submit()) {
            Some(Ok(report)) => report,
            Some(Err(SubmitBlocked::Invalid(e))) => {
                web_sys::console::warn_1(&format!("Report not submitted: {}", e).into());
                return;
            }
            Some(Err(SubmitBlocked::InFlight)) | None => return,
        };

        let api = api.get_value();
        spawn_local(async move {
            let result = api.submit_report(&report).await;
            if let Err(e) = &result {
                web_sys::console::error_1(&format!("Failed to submit report: {}", e).into());
            }
            form.update(|f| {
                f.finish_submit(result);
            });
        });
    };

    view! {
        <div class="max-w-xl mx-auto bg-white rounded-xl shadow-lg p-8">
            <h1 class="text-2xl font-semibold text-primary-700 mb-4">"Submit Monthly Report"</h1>

            {move || form.with(|f| f.error().map(|msg| view! {
                <div class="mb-4"><Alert message=msg.to_string() variant=AlertVariant::Error /></div>
            }))}
            {move || form.with(|f| f.success().map(|msg| view! {
                <div class="mb-4"><Alert message=msg.to_string() variant=AlertVariant::Success /></div>
            }))}

            <form on:submit=on_submit class="space-y-4" novalidate=true>
                <FieldInput form=form field=ReportField::NgoId input_type="text" />

                <div>
                    <label for="report-month" class="block text-sm text-gray-600 mb-1">
                        {input_label(ReportField::Month)}
                    </label>
                    <MonthPicker
                        id="report-month"
                        value=month
                        on_change=move |selected: Month| {
                            form.update(|f| f.update(ReportField::Month, selected.to_string()));
                        }
                    />
                </div>

                <FieldInput form=form field=ReportField::PeopleHelped input_type="number" step="1" />
                <FieldInput form=form field=ReportField::EventsConducted input_type="number" step="1" />
                <FieldInput form=form field=ReportField::FundsUtilized input_type="number" step="0.01" />

                <button
                    type="submit"
                    disabled=move || submitting.get()
                    class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-400
                           disabled:cursor-not-allowed text-white rounded-lg py-3 font-semibold
                           transition-colors flex items-center justify-center space-x-2"
                >
                    {move || if submitting.get() {
                        view! {
                            <InlineLoading />
                            <span>"Submitting..."</span>
                        }.into_view()
                    } else {
                        view! {
                            <span>"Submit Report"</span>
                        }.into_view()
                    }}
                </button>
            </form>
        </div>
    }
}

/// Labelled input bound to one field of the form
#[component]
fn FieldInput(
    form: RwSignal<ReportForm>,
    field: ReportField,
    input_type: &'static str,
    #[prop(optional)]
    step: Option<&'static str>,
) -> impl IntoView {
    let id = format!("report-{}", field.name());
    let min = (input_type == "number").then_some("0");

    view! {
        <div>
            <label for=id.clone() class="block text-sm text-gray-600 mb-1">
                {input_label(field)}
            </label>
            <input
                id=id
                name=field.name()
                type=input_type
                min=min
                step=step
                required=true
                prop:value=move || form.with(|f| f.value(field).to_string())
                on:input=move |ev| form.update(|f| f.update(field, event_target_value(&ev)))
                class="w-full bg-white rounded-lg px-4 py-2 border border-gray-300
                       focus:border-primary-500 focus:outline-none"
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_field_has_a_label() {
        for field in ReportField::ALL {
            assert!(!input_label(field).is_empty());
        }
        assert_eq!(input_label(ReportField::FundsUtilized), "Funds Utilized ($)");
    }
}
