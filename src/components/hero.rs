use leptos::prelude::*;

use crate::motion::{card_transform, stagger_style, Layer, Pointer, Tilt};

const SPLINE_SCENE: &str = "https://prod.spline.design/41MGRk-UDPKO-l6W/scene.splinecode";

const HIGHLIGHTS: [(&str, &str); 3] = [
    ("5x", " rewards on dining"),
    ("Zero", " forex markup"),
    ("No", " annual fee first year"),
];

#[component]
pub fn Hero() -> impl IntoView {
    let (pointer, set_pointer) = signal(Pointer::CENTER);

    let on_mouse_move = move |ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;
            let target = ev
                .current_target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok());
            if let Some(el) = target {
                let rect = el.get_bounding_client_rect();
                set_pointer.set(Pointer::from_client(
                    f64::from(ev.client_x()),
                    f64::from(ev.client_y()),
                    rect.left(),
                    rect.top(),
                    rect.width(),
                    rect.height(),
                ));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    view! {
        <section
            id="hero"
            class="relative overflow-hidden min-h-[100svh] pt-28 sm:pt-32 pb-16"
            on:mousemove=on_mouse_move
            on:mouseleave=move |_| set_pointer.set(Pointer::CENTER)
        >
            // Spline scene, furthest back
            <div
                class="absolute inset-0 -z-30 parallax-layer"
                style=move || Layer::BACKGROUND.translate(pointer.get())
            >
                <spline-viewer url=SPLINE_SCENE class="block w-full h-full"></spline-viewer>
                <div class="pointer-events-none absolute inset-0 bg-gradient-to-b from-white/70 via-white/30 to-white/70"></div>
            </div>

            <div
                class="absolute inset-0 -z-40 pointer-events-none parallax-layer"
                style=move || Layer::BACKGROUND.translate(pointer.get())
            >
                <div class="absolute -top-40 -left-32 h-[36rem] w-[36rem] bg-gradient-to-br from-amber-400/35 via-orange-500/20 to-fuchsia-500/20 rounded-full blur-3xl"></div>
                <div class="absolute -bottom-40 -right-24 h-[40rem] w-[40rem] bg-gradient-to-br from-indigo-500/25 via-purple-500/25 to-pink-500/20 rounded-full blur-3xl"></div>
            </div>

            <div
                class="absolute inset-0 -z-20 opacity-40 mix-blend-soft-light parallax-layer"
                style=move || Layer::MID.translate(pointer.get())
                aria-hidden="true"
            >
                <div class="h-full w-full dot-grid"></div>
            </div>

            <div
                class="absolute inset-0 -z-10 parallax-layer"
                style=move || Layer::FOREGROUND.translate(pointer.get())
                aria-hidden="true"
            >
                <div class="absolute left-1/2 top-1/3 -translate-x-1/2 -rotate-12 w-[120%] h-40 bg-gradient-to-r from-transparent via-white/35 to-transparent blur-2xl"></div>
                <div class="absolute left-1/2 top-1/2 -translate-x-1/2 rotate-6 w-[110%] h-24 bg-gradient-to-r from-transparent via-amber-200/30 to-transparent blur-2xl"></div>
            </div>

            <div class="pointer-events-none absolute inset-0 -z-[5] vignette"></div>

            <div class="relative max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <div
                    class="flex flex-col items-center text-center gap-6 parallax-layer"
                    style=move || format!("transform: {}", Tilt::CONTENT.rotate(pointer.get(), 1000))
                >
                    <span
                        class="fade-up inline-flex items-center gap-2 px-3 py-1 rounded-full bg-white/70 backdrop-blur text-xs font-medium border border-white/50 shadow-sm badge-bob"
                        style=stagger_style(0)
                    >
                        <span class="h-2 w-2 rounded-full bg-emerald-500 animate-pulse"></span>
                        "Instant approval in minutes"
                    </span>

                    <h1
                        class="fade-up text-4xl sm:text-5xl lg:text-6xl font-extrabold tracking-tight text-gray-900"
                        style=stagger_style(1)
                    >
                        "Tiger Credit Card"
                    </h1>

                    <p class="fade-up text-lg text-gray-700 max-w-2xl" style=stagger_style(2)>
                        "A premium, glass-morphic card built for modern life. Earn rewards on every spend, "
                        "enjoy airport lounge access, and get concierge support 24/7."
                    </p>

                    <div class="fade-up relative mt-2 mb-2" style=stagger_style(3)>
                        <ShowcaseCard pointer=pointer/>
                    </div>

                    <div class="fade-up flex flex-col sm:flex-row gap-3 pt-2" style=stagger_style(4)>
                        <a href="#apply" class="lift px-6 py-3 rounded-xl bg-gray-900 text-white font-semibold">
                            "Apply Now"
                        </a>
                        <a
                            href="#features"
                            class="lift px-6 py-3 rounded-xl bg-white/70 backdrop-blur border border-white/60 font-semibold text-gray-900"
                        >
                            "See Benefits"
                        </a>
                    </div>

                    <div class="fade-up grid grid-cols-3 gap-6 pt-4" style=stagger_style(5)>
                        {HIGHLIGHTS
                            .into_iter()
                            .enumerate()
                            .map(|(i, (lead, rest))| {
                                view! {
                                    <div
                                        class="fade-up text-sm text-gray-600"
                                        style=format!("animation-delay: {:.1}s", 0.6 + 0.1 * i as f64)
                                    >
                                        <span class="font-semibold text-gray-900">{lead}</span>
                                        {rest}
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

/// The virtual card shown in the hero, tilting harder than the surrounding content
#[component]
fn ShowcaseCard(pointer: ReadSignal<Pointer>) -> impl IntoView {
    view! {
        <div
            class="relative mx-auto w-[300px] sm:w-[360px] h-[180px] sm:h-[216px] rounded-3xl p-5 sm:p-6 shadow-2xl parallax-layer"
            style=move || card_transform(pointer.get())
        >
            <div class="absolute inset-0 rounded-3xl bg-gradient-to-br from-neutral-900 via-zinc-800 to-neutral-900"></div>
            <div class="absolute inset-0 rounded-3xl card-gloss"></div>
            <div class="absolute inset-0 rounded-3xl ring-1 ring-white/15"></div>
            <div class="pointer-events-none absolute -inset-1 rounded-[1.75rem] card-shine"></div>

            <div class="relative h-full w-full flex flex-col justify-between text-white">
                <div class="flex items-center justify-between">
                    <div class="text-sm font-semibold tracking-wider uppercase text-amber-300">"Tiger"</div>
                    <div class="h-6 w-9 rounded-md bg-gradient-to-br from-amber-400 to-red-400 opacity-90"></div>
                </div>

                <div class="space-y-1">
                    <div class="flex items-center gap-2 text-[11px] opacity-70">
                        <div class="h-4 w-5 rounded-sm bg-gradient-to-br from-zinc-300 to-white opacity-90 mr-1"></div>
                        <span>"VIRTUAL • CARD"</span>
                    </div>
                    <div class="font-semibold tracking-[0.25em] text-lg sm:text-xl">"5240  1930  4872  1029"</div>
                    <div class="flex items-center justify-between text-[11px] opacity-80">
                        <span>"VALID THRU 12/28"</span>
                        <span class="tracking-widest">"VISA"</span>
                    </div>
                </div>

                <div class="flex items-center justify-between text-[11px]">
                    <span class="font-medium tracking-widest">"ALEXANDER TIGER"</span>
                    <div class="h-6 w-10 rounded bg-gradient-to-br from-sky-400 to-indigo-500 opacity-80"></div>
                </div>
            </div>
        </div>
    }
}
