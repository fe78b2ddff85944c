// web_app/components/mentor.rs - Mentor display components
//
// Components for displaying mentors including:
// - MentorAvatar: Photo or gradient initials badge
// - MentorCard: One directory card
// - MentorGrid: The records container and its placeholders

use leptos::html::Div;
use leptos::prelude::*;

use super::common::{LoadError, Loading, NoMentorsFound};
use crate::web_app::model::{Avatar, ContainerView, MentorCardView};

/// Circular avatar at the top of a card
#[component]
pub fn MentorAvatar(avatar: Avatar) -> impl IntoView {
    match avatar {
        Avatar::Photo { src, alt } => view! {
            <img
                src=src
                alt=alt
                class="w-16 h-16 sm:w-20 sm:h-20 rounded-full mx-auto mb-4 object-cover"
            />
        }
        .into_any(),
        Avatar::Initials { initials, gradient } => view! {
            <div class=format!(
                "w-16 h-16 sm:w-20 sm:h-20 bg-gradient-to-r {} rounded-full mx-auto mb-4 \
                 flex items-center justify-center text-white font-semibold text-lg sm:text-xl",
                gradient
            )>
                {initials}
            </div>
        }
        .into_any(),
    }
}

/// Mentor card for the directory grid
///
/// The only interactive element is the link to the mentor's question page.
#[component]
pub fn MentorCard(card: MentorCardView) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl p-6 sm:p-8 shadow-sm card-hover">
            <div class="text-center">
                <MentorAvatar avatar=card.avatar />
                <h3 class="text-lg sm:text-xl font-bold mb-2 text-gray-800">{card.name}</h3>
                <p class="text-purple-600 font-medium mb-1">{card.university}</p>
                <p class="text-gray-600 text-sm sm:text-base mb-4">{card.department}</p>

                <div class="flex flex-col sm:flex-row gap-2 justify-center">
                    <a
                        href=card.question_href
                        class="bg-gray-200 text-gray-800 py-2 px-4 rounded-lg text-sm font-medium \
                               hover:bg-gray-300 transition-colors text-center"
                    >
                        "Ask a Question"
                    </a>
                </div>
            </div>
        </div>
    }
}

/// Records container
///
/// Replaces its whole content whenever `content` changes.
#[component]
pub fn MentorGrid(
    /// What the container should show
    content: Signal<ContainerView>,
    /// Handle used to scroll the container into view after a page change
    container_ref: NodeRef<Div>,
) -> impl IntoView {
    view! {
        <div
            id="mentors-container"
            node_ref=container_ref
            class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6 sm:gap-8"
        >
            {move || match content.get() {
                ContainerView::Loading => view! { <Loading message="Loading mentors..." /> }.into_any(),
                ContainerView::LoadFailed => view! { <LoadError /> }.into_any(),
                ContainerView::NoMatches => view! { <NoMentorsFound /> }.into_any(),
                ContainerView::Cards(cards) => cards
                    .into_iter()
                    .map(|card| view! { <MentorCard card=card /> })
                    .collect_view()
                    .into_any(),
            }}
        </div>
    }
}
