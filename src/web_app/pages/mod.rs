// web_app/pages/mod.rs - Page components module
//
// This module contains page-level Leptos components:
// - HomePage: Landing hero with the particle backdrop
// - MentorsPage: Searchable, paginated mentor directory
// - ComingSoonPage: Launch countdown

pub mod coming_soon;
pub mod home;
pub mod mentors;

// Re-export page components
pub use coming_soon::ComingSoonPage;
pub use home::HomePage;
pub use mentors::MentorsPage;
