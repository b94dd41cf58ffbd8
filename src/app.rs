use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::components::{Footer, Nav};
use crate::pages::*;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/tiger-card.css"/>
        <Title text="Tiger Credit Card - Premium rewards, instant approval"/>
        <Meta name="description" content="Apply for the Tiger Credit Card: 5x rewards on dining, lounge access and zero forex markup"/>

        <Router>
            <div class="min-h-screen bg-gradient-to-br from-orange-50 via-amber-50 to-white text-gray-900">
                <Nav/>
                <main>
                    <Routes fallback=NotFoundPage>
                        <Route path=path!("/") view=HomePage/>
                    </Routes>
                </main>
                <Footer/>
            </div>
        </Router>
    }
}
