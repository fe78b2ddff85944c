// web_app/api/client.rs - Browser-side directory client
//
// The directory is loaded with a single GET to the page's own URL, marked as
// a programmatic request so the host answers with JSON instead of HTML.
// There is no retry, timeout, or cancellation: the request resolves once.
//
// Client-side (hydrate): real HTTP via `gloo-net`.
// Server-side (SSR): the request is never issued; callers get `Unavailable`.

#![allow(clippy::unused_async)]

use crate::web_app::error::DirectoryError;
use crate::web_app::model::{MentorRecord, MentorsResponse};

/// Header marking the request as programmatic
pub const REQUESTED_WITH_HEADER: &str = "X-Requested-With";

/// Value sent in `REQUESTED_WITH_HEADER`
pub const XML_HTTP_REQUEST: &str = "XMLHttpRequest";

/// Distance kept between the viewport top and the records container after
/// a page change
pub const SCROLL_OFFSET: f64 = 100.0;

/// Decode a directory response body
pub fn parse_mentors_response(body: &str) -> Result<Vec<MentorRecord>, DirectoryError> {
    let response: MentorsResponse = serde_json::from_str(body)?;
    Ok(response.mentors)
}

/// Fetch the mentor roster from `url`.
///
/// # Errors
///
/// Any transport failure, non-success status, or undecodable body.
pub async fn fetch_mentors(url: &str) -> Result<Vec<MentorRecord>, DirectoryError> {
    #[cfg(feature = "hydrate")]
    {
        let response = gloo_net::http::Request::get(url)
            .header(REQUESTED_WITH_HEADER, XML_HTTP_REQUEST)
            .send()
            .await
            .map_err(|e| DirectoryError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(DirectoryError::Status(response.status()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| DirectoryError::Network(e.to_string()))?;
        parse_mentors_response(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Err(DirectoryError::Unavailable)
    }
}

/// The URL the current page was loaded from
pub fn current_page_url() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.location().href().ok())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Vertical scroll target that puts an element at `offset_top` just below
/// the viewport top
pub fn scroll_target(offset_top: f64) -> f64 {
    offset_top - SCROLL_OFFSET
}

/// Smooth-scroll the window so `element` sits `SCROLL_OFFSET` below the top
#[cfg(feature = "hydrate")]
pub fn scroll_into_view(element: &web_sys::HtmlElement) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let options = web_sys::ScrollToOptions::new();
    options.set_top(scroll_target(f64::from(element.offset_top())));
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}
