// tests/client_response_tests.rs - Directory response decoding
//
// The browser fetch itself needs a window; these tests cover everything
// around it: body decoding, failure classification, and scroll math.

use mentor_directory::web_app::api::client::*;
use mentor_directory::web_app::error::DirectoryError;
use mentor_directory::web_app::model::MentorsResponse;

const BODY: &str = r#"{
    "mentors": [
        {
            "name": "Amara Okafor",
            "university": "University of Lagos",
            "department": "Computer Science",
            "slug": "amara-okafor",
            "profile_photo_url": "/media/mentors/profile_photos/amara.jpg",
            "initials": "AO",
            "gradient": "from-purple-400 to-pink-400"
        },
        {
            "name": "Bence Kovacs",
            "university": "ETH Zurich",
            "department": "Mechanical Engineering",
            "slug": "bence-kovacs",
            "profile_photo_url": null,
            "initials": "BK",
            "gradient": "from-blue-400 to-indigo-400"
        }
    ]
}"#;

#[test]
fn test_parse_directory_body() {
    let mentors = parse_mentors_response(BODY).unwrap();
    assert_eq!(mentors.len(), 2);
    assert_eq!(mentors[0].slug, "amara-okafor");
    assert_eq!(mentors[1].profile_photo_url, None);
}

#[test]
fn test_parse_empty_roster() {
    let mentors = parse_mentors_response(r#"{"mentors": []}"#).unwrap();
    assert!(mentors.is_empty());
}

#[test]
fn test_html_body_is_decode_error() {
    let err = parse_mentors_response("<!DOCTYPE html><html></html>").unwrap_err();
    assert!(matches!(err, DirectoryError::Decode(_)));
}

#[test]
fn test_record_missing_field_is_decode_error() {
    let body = r#"{"mentors": [{"name": "No Slug"}]}"#;
    assert!(matches!(parse_mentors_response(body), Err(DirectoryError::Decode(_))));
}

#[test]
fn test_host_response_parses_back() {
    let response = MentorsResponse {
        mentors: mentor_directory::fixtures::sample_roster(),
    };
    let body = serde_json::to_string(&response).unwrap();
    assert_eq!(parse_mentors_response(&body).unwrap(), response.mentors);
}

#[test]
fn test_request_marker_header() {
    assert_eq!(REQUESTED_WITH_HEADER, "X-Requested-With");
    assert_eq!(XML_HTTP_REQUEST, "XMLHttpRequest");
}

#[test]
fn test_scroll_lands_above_container() {
    assert_eq!(scroll_target(640.0), 540.0);
    assert_eq!(scroll_target(0.0), -SCROLL_OFFSET);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn test_no_page_url_outside_browser() {
    assert_eq!(current_page_url(), None);
}
