// web_app/mod.rs - Root module for the Leptos web application
//
// Architecture:
// - model/: Shared data types and the pure directory logic
// - error.rs: The directory load failure
// - api/: The browser-side directory client, plus the roster endpoint (SSR only)
// - components/: Reusable UI components (both SSR and hydrate)
// - pages/: Page-level components (both SSR and hydrate)
// - app.rs: Root application component with routing (both SSR and hydrate)

pub mod model;

pub mod error;

pub mod api;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod components;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod pages;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;

// Re-export main app component for convenience
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use app::App;
