use leptos::prelude::*;

/// In-page anchors shown in the top bar
const NAV_LINKS: [(&str, &str); 3] = [
    ("#features", "Benefits"),
    ("#eligibility", "Eligibility"),
    ("#apply", "Apply"),
];

#[component]
pub fn Nav() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <header class="fixed top-0 left-0 right-0 z-40">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex h-16 items-center justify-between rounded-xl mt-4 backdrop-blur-md bg-white/40 border border-white/30 shadow-sm">
                    <a href="#hero" class="flex items-center gap-2 pl-4">
                        <div class="h-9 w-9 rounded-lg bg-gradient-to-br from-orange-500 to-amber-600 flex items-center justify-center text-white font-black">
                            "T"
                        </div>
                        <span class="font-semibold text-gray-800 tracking-tight">"Tiger Credit Card"</span>
                    </a>

                    <nav class="hidden md:flex items-center gap-6 text-sm text-gray-700">
                        {NAV_LINKS
                            .into_iter()
                            .map(|(href, label)| {
                                view! { <a href=href class="hover:text-gray-900">{label}</a> }
                            })
                            .collect_view()}
                    </nav>

                    <div class="flex items-center pr-2">
                        <a
                            href="#apply"
                            class="hidden sm:inline-flex px-4 py-2 rounded-lg bg-gray-900 text-white text-sm font-medium hover:bg-black/90 transition"
                        >
                            "Get Started"
                        </a>
                        <button
                            class="md:hidden p-2 text-xl leading-none"
                            aria-label="Toggle menu"
                            aria-expanded=move || menu_open.get().to_string()
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        >
                            "☰"
                        </button>
                    </div>
                </div>

                <Show when=move || menu_open.get()>
                    <nav class="md:hidden mt-2 rounded-xl backdrop-blur-md bg-white/70 border border-white/30 shadow-sm flex flex-col p-2 text-sm text-gray-700">
                        {NAV_LINKS
                            .into_iter()
                            .map(|(href, label)| {
                                view! {
                                    <a
                                        href=href
                                        class="px-3 py-2 rounded-lg hover:bg-white/80"
                                        on:click=move |_| set_menu_open.set(false)
                                    >
                                        {label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </nav>
                </Show>
            </div>
        </header>
    }
}
