use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::models::{FieldEdit, IncomeRange, LeadDraft, LeadError, LeadSubmission, SubmissionStatus};
use crate::server_fns::submit_lead;

const INPUT_CLASS: &str = "mt-1 w-full rounded-lg border border-gray-300 px-3 py-2 focus:outline-none focus:ring-2 focus:ring-gray-900/10";

#[component]
pub fn LeadForm() -> impl IntoView {
    let submission = RwSignal::new(LeadSubmission::new());

    let relay = Action::new(move |lead: &LeadDraft| {
        let lead = lead.clone();
        async move {
            let outcome = submit_lead(lead).await.map_err(LeadError::from);
            submission.update(|s| s.settle(outcome));
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let mut snapshot = None;
        submission.update(|s| snapshot = s.begin_submit().ok());
        if let Some(lead) = snapshot {
            relay.dispatch(lead);
        }
    };

    let edit = move |e: FieldEdit| submission.update(|s| s.update_field(e));
    let loading = move || submission.with(|s| s.status().is_loading());

    view! {
        <section id="apply" class="py-16 sm:py-24">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="grid lg:grid-cols-2 gap-10 items-start">
                    <div class="space-y-4" id="eligibility">
                        <h2 class="text-3xl sm:text-4xl font-bold text-gray-900">"Apply in minutes"</h2>
                        <p class="text-gray-600">
                            "Enter your contact details and we'll get back to you with the next steps."
                        </p>
                        <ul class="text-sm text-gray-600 list-disc pl-5 space-y-1">
                            <li>"No impact on your credit score"</li>
                            <li>"Secure data handling"</li>
                            <li>"Quick turnaround"</li>
                        </ul>
                    </div>

                    <form
                        on:submit=on_submit
                        novalidate
                        class="bg-white/70 backdrop-blur rounded-2xl border border-white/60 shadow-sm p-6 space-y-4"
                    >
                        <div class="grid sm:grid-cols-2 gap-4">
                            <div>
                                <label for="full_name" class="block text-sm font-medium text-gray-700">"Full Name"</label>
                                <input
                                    id="full_name"
                                    name="full_name"
                                    autocomplete="name"
                                    class=INPUT_CLASS
                                    placeholder="Jane Doe"
                                    prop:value=move || submission.with(|s| s.draft().full_name.clone())
                                    on:input=move |ev| edit(FieldEdit::FullName(event_target_value(&ev)))
                                />
                            </div>
                            <div>
                                <label for="email" class="block text-sm font-medium text-gray-700">"Email"</label>
                                <input
                                    id="email"
                                    name="email"
                                    type="email"
                                    autocomplete="email"
                                    class=INPUT_CLASS
                                    placeholder="jane@example.com"
                                    prop:value=move || submission.with(|s| s.draft().email.clone())
                                    on:input=move |ev| edit(FieldEdit::Email(event_target_value(&ev)))
                                />
                            </div>
                        </div>

                        <div class="grid sm:grid-cols-2 gap-4">
                            <div>
                                <label for="phone" class="block text-sm font-medium text-gray-700">"Phone"</label>
                                <input
                                    id="phone"
                                    name="phone"
                                    type="tel"
                                    autocomplete="tel"
                                    class=INPUT_CLASS
                                    placeholder="+1 555 123 4567"
                                    prop:value=move || submission.with(|s| s.draft().phone.clone())
                                    on:input=move |ev| edit(FieldEdit::Phone(event_target_value(&ev)))
                                />
                            </div>
                            <div>
                                <label for="income_range" class="block text-sm font-medium text-gray-700">
                                    "Income Range (optional)"
                                </label>
                                <select
                                    id="income_range"
                                    name="income_range"
                                    class=INPUT_CLASS
                                    prop:value=move || submission.with(|s| s.draft().income_range.clone())
                                    on:change=move |ev| edit(FieldEdit::IncomeRange(event_target_value(&ev)))
                                >
                                    <option value="">"Select"</option>
                                    {IncomeRange::all()
                                        .into_iter()
                                        .map(|range| {
                                            let value = range.value();
                                            view! {
                                                <option
                                                    value=value
                                                    selected=move || submission.with(|s| s.draft().income_range == value)
                                                >
                                                    {range.label()}
                                                </option>
                                            }
                                        })
                                        .collect_view()}
                                </select>
                            </div>
                        </div>

                        <div>
                            <label for="message" class="block text-sm font-medium text-gray-700">"Message (optional)"</label>
                            <textarea
                                id="message"
                                name="message"
                                rows="3"
                                class=INPUT_CLASS
                                placeholder="Anything we should know?"
                                prop:value=move || submission.with(|s| s.draft().message.clone())
                                on:input=move |ev| edit(FieldEdit::Message(event_target_value(&ev)))
                            ></textarea>
                        </div>

                        <label class="flex items-start gap-2 text-sm text-gray-700">
                            <input
                                type="checkbox"
                                name="consent"
                                class="mt-1 h-4 w-4"
                                prop:checked=move || submission.with(|s| s.draft().consent)
                                on:change=move |ev| edit(FieldEdit::Consent(event_target_checked(&ev)))
                            />
                            "I agree to be contacted about my application and accept the privacy policy."
                        </label>

                        <button
                            type="submit"
                            class="w-full bg-gray-900 text-white font-semibold rounded-lg py-3 hover:bg-black/90 transition disabled:opacity-60"
                            disabled=loading
                        >
                            {move || if loading() { "Submitting..." } else { "Submit" }}
                        </button>

                        {move || {
                            submission.with(|s| {
                                let status = s.status();
                                status.message().map(|message| {
                                    view! {
                                        <p class=status_class(status) role="status">{message.to_string()}</p>
                                    }
                                })
                            })
                        }}
                    </form>
                </div>
            </div>
        </section>
    }
}

fn status_class(status: &SubmissionStatus) -> &'static str {
    match status {
        SubmissionStatus::Success(_) => "text-sm text-emerald-600",
        s if s.is_error() => "text-sm text-red-600",
        _ => "text-sm text-gray-600",
    }
}
