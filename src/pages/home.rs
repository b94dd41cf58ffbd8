use leptos::prelude::*;

use crate::components::{Features, Hero, LeadForm};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Hero/>
        <Features/>
        <LeadForm/>
    }
}
