// web_app/pages/coming_soon.rs - Launch countdown page

use leptos::html::Section;
use leptos::prelude::*;

use crate::web_app::components::{Countdown, NavChrome, ParticleBackground};

/// Launch instant the countdown runs to
pub const LAUNCH_TARGET: &str = "2027-01-15T09:00:00Z";

#[component]
pub fn ComingSoonPage() -> impl IntoView {
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
                <h1 class="text-4xl sm:text-5xl font-bold text-white mb-4">"Something new is coming"</h1>
                <p class="text-lg text-white/80 mb-10">"Mentor office hours open in"</p>
                <Countdown target=LAUNCH_TARGET.to_string() />
            </div>
        </section>
    }
}
