// web_app/api/roster.rs - Directory endpoint
//
// The directory page requests its own URL with `X-Requested-With:
// XMLHttpRequest`; those requests get the roster as JSON. Requests without
// the header fall through to the server-rendered page.
//
// The roster is read once at start-up and served unchanged.

use std::fs;
use std::path::Path;

use actix_web::{guard, web, HttpResponse};
use anyhow::Context;

use super::client::XML_HTTP_REQUEST;
use crate::web_app::model::{MentorRecord, MentorsResponse};

/// Paths the directory page is served from
pub const DIRECTORY_PATHS: [&str; 2] = ["/mentors", "/mentors/"];

/// The mentors served to the directory page
#[derive(Clone, Debug, Default)]
pub struct Roster {
    mentors: Vec<MentorRecord>,
}

impl Roster {
    pub fn new(mentors: Vec<MentorRecord>) -> Self {
        Self { mentors }
    }

    /// Read a roster file shaped like the directory response
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read roster file {}", path.display()))?;
        let response: MentorsResponse = serde_json::from_str(&raw)
            .with_context(|| format!("roster file {} is not a mentors document", path.display()))?;

        tracing::info!("Loaded {} mentors from {}", response.mentors.len(), path.display());
        Ok(Self::new(response.mentors))
    }

    pub fn mentors(&self) -> &[MentorRecord] {
        &self.mentors
    }
}

/// Answer the directory request
pub async fn mentors_json(roster: web::Data<Roster>) -> HttpResponse {
    tracing::debug!("Serving {} mentors", roster.mentors.len());
    HttpResponse::Ok().json(MentorsResponse {
        mentors: roster.mentors.clone(),
    })
}

/// Register the directory endpoint. Must run before the Leptos routes so
/// the header guard gets the first look at `/mentors`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    for path in DIRECTORY_PATHS {
        cfg.service(
            web::resource(path)
                .guard(guard::Header("x-requested-with", XML_HTTP_REQUEST))
                .route(web::get().to(mentors_json)),
        );
    }
}
