// web_app/components/chrome.rs - Shared navigation chrome
//
// Every page renders the same navbar. It tracks the window scroll offset
// against the page's hero section (if the page has one) and owns the mobile
// menu toggle.

use leptos::html::Section;
use leptos::prelude::*;

use crate::web_app::model::{menu_icon_class, NavbarStyle};

/// Links shown in both the desktop bar and the mobile menu
const NAV_LINKS: [(&str, &str); 3] = [
    ("/", "Home"),
    ("/mentors", "Mentors"),
    ("/coming-soon", "Coming Soon"),
];

/// Navbar attached to an optional hero section
///
/// Without a hero the navbar keeps its initial translucent style.
#[component]
pub fn NavChrome(
    /// The page's hero section
    #[prop(optional)]
    hero: Option<NodeRef<Section>>,
) -> impl IntoView {
    let style = RwSignal::new(NavbarStyle::Glass);
    let menu_open = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        use crate::web_app::model::navbar_style;

        let refresh = move || {
            let hero_height = hero
                .and_then(|hero| hero.get_untracked())
                .map(|el| f64::from(el.offset_height()));
            let scroll_y = window().scroll_y().unwrap_or(0.0);
            if let Some(next) = navbar_style(scroll_y, hero_height) {
                style.set(next);
            }
        };

        Effect::new(move || refresh());
        let handle = window_event_listener(leptos::ev::scroll, move |_| refresh());
        on_cleanup(move || handle.remove());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = hero;
    }

    let close_menu = move |_| menu_open.set(false);

    view! {
        <nav
            id="navbar"
            class=move || format!("fixed top-0 inset-x-0 z-50 transition-all duration-300 {}", style.get().class())
        >
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 h-16 flex items-center justify-between">
                <a href="/" class="text-2xl font-bold tracking-tight">"Bloo"</a>

                <div class="hidden md:flex items-center gap-8">
                    {NAV_LINKS.into_iter().map(|(href, label)| view! {
                        <a href=href class="nav-link font-medium">{label}</a>
                    }).collect_view()}
                </div>

                <button
                    id="mobile-menu-btn"
                    type="button"
                    class="md:hidden p-2 rounded-lg focus-ring"
                    aria-label="Toggle menu"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    <i id="menu-icon" class=move || menu_icon_class(menu_open.get())></i>
                </button>
            </div>

            <div
                id="mobile-menu"
                class=move || if menu_open.get() { "mobile-menu md:hidden active" } else { "mobile-menu md:hidden" }
            >
                {NAV_LINKS.into_iter().map(|(href, label)| view! {
                    <a href=href class="block px-6 py-3 font-medium" on:click=close_menu>{label}</a>
                }).collect_view()}
            </div>
        </nav>
    }
}
