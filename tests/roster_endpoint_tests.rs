// tests/roster_endpoint_tests.rs - Directory endpoint on the host
//
// Runs the roster routes in an actix test service and checks that only
// requests carrying the XMLHttpRequest marker get the JSON roster.

use actix_web::{http::StatusCode, test, web, App};
use mentor_directory::fixtures::{numbered_mentors, sample_roster};
use mentor_directory::web_app::api::client::{
    fetch_mentors, parse_mentors_response, REQUESTED_WITH_HEADER, XML_HTTP_REQUEST,
};
use mentor_directory::web_app::api::config::{HostConfig, DEFAULT_MENTORS_FILE};
use mentor_directory::web_app::api::roster::{self, Roster};
use mentor_directory::web_app::error::DirectoryError;
use mentor_directory::web_app::model::MentorsResponse;

#[actix_web::test]
async fn test_marked_request_gets_roster() {
    let roster = web::Data::new(Roster::new(sample_roster()));
    let app = test::init_service(App::new().app_data(roster).configure(roster::configure)).await;

    for path in roster::DIRECTORY_PATHS {
        let req = test::TestRequest::get()
            .uri(path)
            .insert_header((REQUESTED_WITH_HEADER, XML_HTTP_REQUEST))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK, "path {}", path);

        let body = test::read_body(resp).await;
        let mentors = parse_mentors_response(std::str::from_utf8(&body).unwrap()).unwrap();
        assert_eq!(mentors, sample_roster());
    }
}

#[actix_web::test]
async fn test_unmarked_request_falls_through() {
    let roster = web::Data::new(Roster::new(sample_roster()));
    let app = test::init_service(App::new().app_data(roster).configure(roster::configure)).await;

    let req = test::TestRequest::get().uri("/mentors").to_request();
    let resp = test::call_service(&app, req).await;

    // Nothing else is mounted here; in the real host the page route answers
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_guard_wins_over_later_route() {
    let roster = web::Data::new(Roster::new(numbered_mentors(2)));
    let app = test::init_service(
        App::new()
            .app_data(roster)
            .configure(roster::configure)
            .route("/mentors", web::get().to(|| async { "page" })),
    )
    .await;

    let page = test::TestRequest::get().uri("/mentors").to_request();
    let body = test::call_and_read_body(&app, page).await;
    assert_eq!(&body[..], b"page");

    let data = test::TestRequest::get()
        .uri("/mentors")
        .insert_header((REQUESTED_WITH_HEADER, XML_HTTP_REQUEST))
        .to_request();
    let response: MentorsResponse = test::call_and_read_body_json(&app, data).await;
    assert_eq!(response.mentors.len(), 2);
}

#[actix_web::test]
async fn test_roster_file_served_unchanged() {
    let path = std::env::temp_dir().join("mentor_directory_roster_endpoint.json");
    let document = MentorsResponse { mentors: numbered_mentors(9) };
    std::fs::write(&path, serde_json::to_string(&document).unwrap()).unwrap();

    let roster = web::Data::new(Roster::load(&path).unwrap());
    let app = test::init_service(App::new().app_data(roster).configure(roster::configure)).await;

    let req = test::TestRequest::get()
        .uri("/mentors/")
        .insert_header((REQUESTED_WITH_HEADER, XML_HTTP_REQUEST))
        .to_request();
    let response: MentorsResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(response, document);

    std::fs::remove_file(&path).ok();
}

#[::core::prelude::v1::test]
fn test_bundled_roster_loads() {
    let config = HostConfig::from_lookup(|_| None);
    assert_eq!(config.mentors_file.to_str(), Some(DEFAULT_MENTORS_FILE));

    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join(&config.mentors_file);
    let roster = Roster::load(&path).unwrap();
    assert!(!roster.mentors().is_empty());
}

#[actix_web::test]
async fn test_fetch_needs_a_browser() {
    let outcome = fetch_mentors("http://127.0.0.1:3000/mentors").await;
    assert_eq!(outcome, Err(DirectoryError::Unavailable));
}
