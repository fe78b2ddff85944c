// web_app/model/card.rs - Record-to-card mapping
//
// A card is described as plain data first; the `MentorCard` component only
// turns this description into nodes.

use super::MentorRecord;

/// Prefix of the per-mentor question page
pub const QUESTION_PATH_PREFIX: &str = "/mentors/ask-question/";

/// The circular avatar at the top of a card
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Avatar {
    /// The mentor's own photo
    Photo { src: String, alt: String },
    /// Initials on a gradient badge (gradient is a pair of Tailwind classes)
    Initials { initials: String, gradient: String },
}

/// Structured description of one mentor card
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MentorCardView {
    pub slug: String,
    pub avatar: Avatar,
    pub name: String,
    pub university: String,
    pub department: String,
    pub question_href: String,
}

/// Link target for asking `slug` a question
pub fn question_href(slug: &str) -> String {
    format!("{QUESTION_PATH_PREFIX}{slug}/")
}

impl From<&MentorRecord> for MentorCardView {
    fn from(record: &MentorRecord) -> Self {
        let avatar = match record.profile_photo_url.as_deref() {
            Some(src) if !src.is_empty() => Avatar::Photo {
                src: src.to_string(),
                alt: record.name.clone(),
            },
            _ => Avatar::Initials {
                initials: record.initials.clone(),
                gradient: record.gradient.clone(),
            },
        };

        MentorCardView {
            slug: record.slug.clone(),
            avatar,
            name: record.name.clone(),
            university: record.university.clone(),
            department: record.department.clone(),
            question_href: question_href(&record.slug),
        }
    }
}
