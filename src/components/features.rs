use leptos::prelude::*;

struct Feature {
    icon: &'static str,
    title: &'static str,
    desc: &'static str,
}

const FEATURES: [Feature; 4] = [
    Feature {
        icon: "🛡",
        title: "Advanced Security",
        desc: "Real-time fraud alerts, card lock/unlock, and biometric verification.",
    },
    Feature {
        icon: "♛",
        title: "Premium Rewards",
        desc: "5x points on dining and entertainment, instant cashback on partners.",
    },
    Feature {
        icon: "✈",
        title: "Travel Privileges",
        desc: "Complimentary lounge access and zero foreign exchange markup.",
    },
    Feature {
        icon: "🎁",
        title: "Welcome Bonus",
        desc: "Limited-time joining bonus when you apply this month.",
    },
];

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" class="py-16 sm:py-24 bg-gradient-to-b from-transparent to-white/60">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-12">
                    <h2 class="text-3xl sm:text-4xl font-bold text-gray-900">"Why choose Tiger"</h2>
                    <p class="text-gray-600 mt-2">"Designed for speed, security, and style."</p>
                </div>
                <div class="grid sm:grid-cols-2 lg:grid-cols-4 gap-6">
                    {FEATURES
                        .iter()
                        .map(|f| {
                            view! {
                                <div class="rounded-2xl p-6 bg-white/70 backdrop-blur border border-white/60 shadow-sm">
                                    <div class="h-10 w-10 rounded-lg bg-gray-900 text-white flex items-center justify-center mb-4" aria-hidden="true">
                                        {f.icon}
                                    </div>
                                    <h3 class="font-semibold text-gray-900 mb-1">{f.title}</h3>
                                    <p class="text-sm text-gray-600">{f.desc}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
