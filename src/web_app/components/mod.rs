// web_app/components/mod.rs - UI components module
//
// This module contains all Leptos UI components for the application.
//
// Structure:
// - common.rs: Loading spinner and placeholder cards
// - mentor.rs: Mentor display components (MentorAvatar, MentorCard, MentorGrid)
// - directory.rs: Directory controls (SearchBar, PageControls)
// - chrome.rs: Navbar and mobile menu
// - countdown.rs / particles.rs: Landing page decorations

pub mod chrome;
pub mod common;
pub mod countdown;
pub mod directory;
pub mod mentor;
pub mod particles;

// Re-export commonly used components for convenience
pub use chrome::*;
pub use common::*;
pub use countdown::*;
pub use directory::*;
pub use mentor::*;
pub use particles::*;
