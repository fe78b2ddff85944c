// web_app/pages/mentors.rs - Mentor directory page
//
// Owns the directory state for one page view. The roster is fetched once
// after hydration; search and page changes re-render from memory.

use leptos::html::Div;
use leptos::prelude::*;

use crate::web_app::components::*;
use crate::web_app::model::*;

/// Mentor directory page
///
/// Composes:
/// - Navbar
/// - Search bar
/// - Card grid (or loading / failure / no-match placeholder)
/// - Pagination controls
#[component]
pub fn MentorsPage() -> impl IntoView {
    let directory = RwSignal::new(MentorDirectory::new());
    let query = RwSignal::new(String::new());
    let container_ref = NodeRef::<Div>::new();

    // One request per page view, issued once the page is live in the browser
    #[cfg(feature = "hydrate")]
    {
        use crate::web_app::api::client::{current_page_url, fetch_mentors};
        use crate::web_app::error::DirectoryError;

        Effect::new(move || {
            leptos::task::spawn_local(async move {
                let outcome = match current_page_url() {
                    Some(url) => fetch_mentors(&url).await,
                    None => Err(DirectoryError::Unavailable),
                };
                if let Err(e) = &outcome {
                    log::error!("Error fetching mentors: {}", e);
                }
                let _ = directory.try_update(|d| d.finish_load(outcome));
            });
        });
    }

    let on_input = Callback::new(move |term: String| {
        directory.update(|d| d.filter(&term));
    });

    let on_navigate = Callback::new(move |page: usize| {
        directory.update(|d| d.go_to_page(page));

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = container_ref.get_untracked() {
                crate::web_app::api::client::scroll_into_view(&el);
            }
        }
    });

    let content = Signal::derive(move || directory.with(|d| d.container()));
    let controls = Signal::derive(move || directory.with(|d| d.pagination()));
    let current_page = Signal::derive(move || directory.with(|d| d.current_page()));

    view! {
        <NavChrome />

        <section class="gradient-bg pt-32 pb-20 min-h-screen">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-12">
                    <h1 class="text-4xl sm:text-5xl font-bold text-white mb-4">"Find a Mentor"</h1>
                    <p class="text-lg text-white/80 max-w-2xl mx-auto">
                        "Browse researchers and ask them a question about their work."
                    </p>
                </div>

                <SearchBar query=query on_input=on_input />

                <MentorGrid content=content container_ref=container_ref />

                <PageControls controls=controls current_page=current_page on_navigate=on_navigate />
            </div>
        </section>
    }
}
