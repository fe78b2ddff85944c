// web_app/model/mod.rs - Shared data models for client and server
//
// These types are used by the host (to answer the directory request), by the
// browser (to decode it), and by the pure directory logic in between.
//
// - directory.rs: The directory widget state (filter, page cursor, load status)
// - pagination.rs: Page-number window and prev/next control state
// - card.rs: Record-to-card mapping
// - navbar.rs / countdown.rs / particles.rs: Page chrome rules and settings

use serde::{Deserialize, Serialize};

pub mod card;
pub mod countdown;
pub mod directory;
pub mod navbar;
pub mod pagination;
pub mod particles;

pub use card::*;
pub use countdown::*;
pub use directory::*;
pub use navbar::*;
pub use pagination::*;
pub use particles::*;

/// Number of mentor cards shown per page
pub const PAGE_SIZE: usize = 6;

/// One directory entry, as sent by the host
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MentorRecord {
    pub name: String,
    pub university: String,
    pub department: String,
    pub slug: String,
    #[serde(default)]
    pub profile_photo_url: Option<String>,
    pub initials: String,
    pub gradient: String,
}

/// Body of the programmatic directory request
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MentorsResponse {
    pub mentors: Vec<MentorRecord>,
}
