// web_app/pages/home.rs - Landing page

use leptos::html::Section;
use leptos::prelude::*;

use crate::web_app::components::{NavChrome, ParticleBackground};

#[component]
pub fn HomePage() -> impl IntoView {
    let hero = NodeRef::<Section>::new();

    view! {
        <NavChrome hero=hero />

        <section
            id="hero-section"
            node_ref=hero
            class="gradient-bg relative overflow-hidden min-h-screen flex items-center"
        >
            <ParticleBackground />

            <div class="relative z-10 max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 text-center">
                <h1 class="text-4xl sm:text-6xl font-bold text-white mb-6">
                    "Learn from the people doing the research"
                </h1>
                <p class="text-lg sm:text-xl text-white/80 mb-10">
                    "Ask university mentors about their field, their lab, and how they got there."
                </p>
                <a
                    href="/mentors"
                    class="inline-block bg-white text-purple-700 font-semibold px-8 py-4 rounded-xl \
                           shadow-lg hover:shadow-xl transition-all focus-ring"
                >
                    "Browse Mentors"
                </a>
            </div>
        </section>
    }
}
