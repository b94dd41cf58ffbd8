use chrono::{Datelike, Utc};
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let year = Utc::now().year();

    view! {
        <footer class="py-12 text-center text-sm text-gray-600">
            "© " {year} " Tiger Credit Card. All rights reserved."
        </footer>
    }
}
