// web_app/app.rs - Root application component
//
// This is the entry point for the Leptos application.
// It sets up routing and the HTML shell the host renders around it.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::web_app::pages::{ComingSoonPage, HomePage, MentorsPage};

/// Icon font used by the navbar, search box and placeholders
pub const FONT_AWESOME_CSS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.4.0/css/all.min.css";
/// particles.js build loaded ahead of hydration
pub const PARTICLES_JS: &str = "https://cdn.jsdelivr.net/npm/particles.js@2.0.0/particles.min.js";

/// HTML document rendered by the host around [`App`]
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="stylesheet" href=FONT_AWESOME_CSS/>
                <script src=PARTICLES_JS></script>
                <AutoReload options=options.clone() />
                <HydrationScripts options=options/>
                <MetaTags/>
            </head>
            <body class="bg-gray-50 text-gray-800">
                <App/>
            </body>
        </html>
    }
}

/// Root application component
///
/// Sets up:
/// - Meta tags
/// - Router with the landing, directory and countdown pages
#[component]
pub fn App() -> impl IntoView {
    // Provide meta context for <Title>, <Meta>, etc.
    provide_meta_context();

    view! {
        <Title text="Bloo Mentors" />
        <Meta name="description" content="Find university mentors and ask them about their research" />

        <Stylesheet id="leptos" href="/pkg/mentor_directory.css" />

        <Router>
            <main class="min-h-screen">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/mentors") view=MentorsPage />
                    <Route path=path!("/coming-soon") view=ComingSoonPage />
                </Routes>
            </main>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-100 flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-gray-300 mb-4">"404"</h1>
                <p class="text-xl text-gray-600 mb-8">"Page not found"</p>
                <a
                    href="/mentors"
                    class="px-6 py-3 bg-purple-600 text-white rounded-lg hover:bg-purple-700 transition-colors"
                >
                    "Browse Mentors"
                </a>
            </div>
        </div>
    }
}
