// web_app/components/directory.rs - Directory controls
//
// These components handle the directory interface including:
// - SearchBar: Live search input, re-filters on every keystroke
// - PageControls: Prev/next buttons around the page-number strip

use leptos::prelude::*;

use crate::web_app::model::{PageItem, PaginationControls};

const PAGE_BUTTON_CLASS: &str =
    "pagination-btn px-3 py-2 sm:px-4 sm:py-2 rounded-xl text-sm font-medium focus-ring";
const PAGE_CURRENT_CLASS: &str =
    "pagination-current px-3 py-2 sm:px-4 sm:py-2 rounded-xl text-sm font-medium focus-ring";
const NAV_BUTTON_CLASS: &str =
    "pagination-btn px-4 py-2 rounded-xl text-sm font-medium focus-ring \
     disabled:opacity-50 disabled:cursor-not-allowed";

/// Style class for a page-number button
pub fn page_button_class(active: bool) -> &'static str {
    if active {
        PAGE_CURRENT_CLASS
    } else {
        PAGE_BUTTON_CLASS
    }
}

/// Search input
///
/// Every `input` event hands the raw value to `on_input`; there is no
/// debounce and no submit step.
#[component]
pub fn SearchBar(
    /// Current search text
    query: RwSignal<String>,
    /// Called with the new text on every change
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="relative max-w-xl mx-auto mb-10">
            <div class="absolute inset-y-0 left-0 pl-4 flex items-center pointer-events-none">
                <i class="fas fa-search text-gray-400"></i>
            </div>
            <input
                id="search-input"
                type="search"
                placeholder="Search by name, university, or department..."
                class="w-full pl-11 pr-4 py-3 rounded-xl bg-white/10 text-white placeholder-white/60 \
                       border border-white/20 focus:ring-4 focus:ring-purple-300/40 \
                       outline-none transition-all"
                prop:value=move || query.get()
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    query.set(value.clone());
                    on_input.run(value);
                }
            />
        </div>
    }
}

/// Pagination controls
///
/// Prev/next are disabled at the ends; the strip shows the sliding window
/// with pinned first/last pages and ellipses.
#[component]
pub fn PageControls(
    /// Controls for the current directory state
    controls: Signal<PaginationControls>,
    /// Page currently shown (1-based)
    current_page: Signal<usize>,
    /// Called with the page to navigate to
    on_navigate: Callback<usize>,
) -> impl IntoView {
    let go_prev = move |_| on_navigate.run(current_page.get_untracked().saturating_sub(1));
    let go_next = move |_| on_navigate.run(current_page.get_untracked() + 1);

    view! {
        <div class="flex items-center justify-center gap-2 sm:gap-3 mt-12 mb-8">
            <button
                id="prev-btn"
                type="button"
                class=NAV_BUTTON_CLASS
                disabled=move || controls.get().prev_disabled
                on:click=go_prev
            >
                <i class="fas fa-chevron-left"></i>
            </button>

            <div id="pagination-numbers" class="flex items-center gap-2">
                {move || {
                    controls
                        .get()
                        .items
                        .into_iter()
                        .map(|item| match item {
                            PageItem::Page { number, active } => view! {
                                <button
                                    type="button"
                                    class=page_button_class(active)
                                    on:click=move |_| on_navigate.run(number)
                                >
                                    {number}
                                </button>
                            }
                            .into_any(),
                            PageItem::Ellipsis => view! {
                                <span class="text-white/60 px-2">"..."</span>
                            }
                            .into_any(),
                        })
                        .collect_view()
                }}
            </div>

            <button
                id="next-btn"
                type="button"
                class=NAV_BUTTON_CLASS
                disabled=move || controls.get().next_disabled
                on:click=go_next
            >
                <i class="fas fa-chevron-right"></i>
            </button>
        </div>
    }
}
