use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
            resp.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <section class="min-h-[60vh] flex flex-col items-center justify-center gap-4 pt-32 text-center">
            <h1 class="text-4xl font-bold text-gray-900">"404 - Page Not Found"</h1>
            <a href="/" class="px-6 py-3 rounded-xl bg-gray-900 text-white font-semibold">"Back to Tiger"</a>
        </section>
    }
}
