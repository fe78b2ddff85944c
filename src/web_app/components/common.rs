// web_app/components/common.rs - Reusable UI components
//
// Small, stateless pieces shared by the directory page: the loading spinner
// and the full-width placeholder cards shown instead of mentor cards.

use leptos::prelude::*;

/// Title of the placeholder shown when the directory failed to load
pub const LOAD_ERROR_TITLE: &str = "Error loading mentors";
/// Title of the placeholder shown when no record is on the current page
pub const NO_MATCHES_TITLE: &str = "No mentors found";

/// Loading spinner component
///
/// Displays a centered spinner with optional message.
#[component]
pub fn Loading(
    /// Optional message to display below the spinner
    #[prop(default = "Loading...")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="col-span-full flex flex-col items-center justify-center py-12">
            <div class="animate-spin rounded-full h-10 w-10 border-4 border-gray-200 border-t-purple-600"></div>
            <span class="mt-4 text-gray-400 font-medium animate-pulse">{message}</span>
        </div>
    }
}

/// Full-width placeholder card
///
/// Takes the whole grid row: an icon, a title, and a hint line.
#[component]
pub fn DirectoryMessage(
    /// Font Awesome icon classes
    icon: &'static str,
    title: &'static str,
    hint: &'static str,
) -> impl IntoView {
    view! {
        <div class="col-span-full text-center py-12">
            <i class=format!("{} text-4xl mb-4", icon)></i>
            <h3 class="text-xl font-semibold text-gray-300 mb-2">{title}</h3>
            <p class="text-gray-400">{hint}</p>
        </div>
    }
}

/// Shown when the directory request failed; there is no retry
#[component]
pub fn LoadError() -> impl IntoView {
    view! {
        <DirectoryMessage
            icon="fas fa-exclamation-triangle text-red-400"
            title=LOAD_ERROR_TITLE
            hint="Please try refreshing the page"
        />
    }
}

/// Shown when the current page has no records
#[component]
pub fn NoMentorsFound() -> impl IntoView {
    view! {
        <DirectoryMessage
            icon="fas fa-search text-gray-400"
            title=NO_MATCHES_TITLE
            hint="Try adjusting your search criteria"
        />
    }
}
