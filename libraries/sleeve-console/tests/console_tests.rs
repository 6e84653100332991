//! Comprehensive tests for the Sleeve admin console.
//!
//! These tests use mock servers to verify gate and panel behavior without
//! requiring a real hosted project.

use serde_json::json;
use sleeve_client::{ClientError, ServiceConfig, Session, SleeveClient, UserInfo};
use sleeve_console::{AdminConsole, Confirm, ConsoleError, DeleteOutcome, Panel};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn session() -> Session {
    Session {
        access_token: "user-jwt".into(),
        refresh_token: None,
        expires_at: None,
        user: UserInfo {
            id: "user-1".into(),
            email: Some("admin@example.com".into()),
        },
    }
}

/// Console over a client that already holds a session
fn authed_console(server: &MockServer) -> AdminConsole {
    let config = ServiceConfig::with_session(server.uri(), "anon-key", session());
    AdminConsole::new(SleeveClient::new(config).unwrap())
}

/// Console over a signed-out client
fn anon_console(server: &MockServer) -> AdminConsole {
    let config = ServiceConfig::new(server.uri(), "anon-key");
    AdminConsole::new(SleeveClient::new(config).unwrap())
}

/// Mount the four list endpoints the console loads on entry
async fn mount_lists(server: &MockServer, times: u64) {
    for table in ["albums", "blog_posts", "subscriptions", "inquiries"] {
        Mock::given(method("GET"))
            .and(path(format!("/rest/v1/{table}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(times)
            .mount(server)
            .await;
    }
}

// =============================================================================
// Gate Flow Tests
// =============================================================================

mod gate_flow {
    use super::*;

    #[tokio::test]
    async fn test_start_unauthenticated_shows_login() {
        let mock_server = MockServer::start().await;

        let mut console = anon_console(&mock_server);
        let panel = console.start().await.unwrap();

        assert_eq!(panel, Panel::Login);
        assert!(mock_server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_start_with_session_initializes_once() {
        let mock_server = MockServer::start().await;
        mount_lists(&mock_server, 1).await;

        let mut console = authed_console(&mock_server);
        assert_eq!(console.start().await.unwrap(), Panel::Admin);
        assert_eq!(console.gate().email(), Some("admin@example.com"));

        // Re-running the gate must not reload the lists (expect(1) above)
        assert_eq!(console.start().await.unwrap(), Panel::Admin);
    }

    #[tokio::test]
    async fn test_sign_in_enters_admin_and_loads_lists() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/v1/token"))
            .and(query_param("grant_type", "password"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "user-jwt",
                "token_type": "bearer",
                "expires_in": 3600,
                "refresh_token": "refresh-1",
                "user": { "id": "user-1", "email": "admin@example.com" }
            })))
            .mount(&mock_server)
            .await;
        mount_lists(&mock_server, 1).await;

        let mut console = anon_console(&mock_server);
        assert_eq!(console.start().await.unwrap(), Panel::Login);

        let panel = console.sign_in("admin@example.com", "hunter2").await.unwrap();
        assert_eq!(panel, Panel::Admin);
    }

    #[tokio::test]
    async fn test_sign_out_resets_every_panel() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/rest/v1/albums"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 4, "album_name": "Hollow Signal"}
            ])))
            .mount(&mock_server)
            .await;
        for table in ["blog_posts", "subscriptions", "inquiries"] {
            Mock::given(method("GET"))
                .and(path(format!("/rest/v1/{table}")))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
                .mount(&mock_server)
                .await;
        }
        Mock::given(method("POST"))
            .and(path("/auth/v1/logout"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&mock_server)
            .await;

        let mut console = authed_console(&mock_server);
        console.start().await.unwrap();
        assert_eq!(console.catalog.albums.len(), 1);
        console.catalog.album_editor.open(Some(&json!({"id": 4})));

        let panel = console.sign_out().await;
        assert_eq!(panel, Panel::Login);
        assert!(console.catalog.albums.is_empty());
        assert_eq!(console.catalog.album_editor.title(), "New Album");
        assert_eq!(console.gate().email(), None);
    }

    #[tokio::test]
    async fn test_reentry_after_sign_out_reinitializes() {
        let mock_server = MockServer::start().await;
        mount_lists(&mock_server, 2).await;

        Mock::given(method("POST"))
            .and(path("/auth/v1/logout"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&mock_server)
            .await;
        Mock::given(method("POST"))
            .and(path("/auth/v1/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "user-jwt-2",
                "refresh_token": "refresh-2",
                "expires_in": 3600,
                "user": { "id": "user-1", "email": "admin@example.com" }
            })))
            .mount(&mock_server)
            .await;

        let mut console = authed_console(&mock_server);
        console.start().await.unwrap();
        console.sign_out().await;

        let panel = console.sign_in("admin@example.com", "hunter2").await.unwrap();
        assert_eq!(panel, Panel::Admin);
    }
}

// =============================================================================
// Catalog Panel Tests
// =============================================================================

mod catalog {
    use super::*;

    #[tokio::test]
    async fn test_edit_album_selects_it_and_loads_tracks() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/rest/v1/albums"))
            .and(query_param("id", "eq.4"))
            .and(query_param("limit", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 4, "album_name": "Hollow Signal", "album_type": "EP"}
            ])))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/tracks"))
            .and(query_param("album_id", "eq.4"))
            .and(query_param("order", "track_no.asc.nullsfirst"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 31, "album_id": 4, "track_no": 1, "track_name": "Carrier Wave"},
                {"id": 32, "album_id": 4, "track_no": 2, "track_name": "Dead Air"}
            ])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let mut console = authed_console(&mock_server);
        console.edit_album(4).await.unwrap();

        assert_eq!(console.catalog.album_editor.title(), "Edit Album #4");
        assert_eq!(console.catalog.album_editor.value("album_type"), "EP");
        assert_eq!(console.catalog.selected_album, Some(4));
        assert_eq!(console.catalog.tracks.len(), 2);
        assert_eq!(console.catalog.track_editor.title(), "New Track");
    }

    #[tokio::test]
    async fn test_save_new_album_sends_nulls_for_empty_dates() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/rest/v1/albums"))
            .and(body_json(json!({
                "album_artist": "The Corruptive",
                "album_name": "Hollow Signal",
                "album_type": "LP",
                "catalog_no": "",
                "catalog_roman": "",
                "visibility": "PUBLIC",
                "release_date": null,
                "physical_release_date": null,
                "album_status": "In Development",
                "art_front": "",
                "art_back": "",
                "art_sleeve": "",
                "art_sticker": "",
                "stream_links": "[]",
                "purchase_links": "[]",
                "distributor": "",
                "label": "",
                "album_commentary": ""
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": 9,
                "album_artist": "The Corruptive",
                "album_name": "Hollow Signal",
                "album_type": "LP",
                "visibility": "PUBLIC",
                "release_date": null
            })))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/albums"))
            .and(query_param("order", "release_date.desc.nullsfirst"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 9, "album_name": "Hollow Signal"}
            ])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let mut console = authed_console(&mock_server);
        console.catalog.album_editor.set("album_artist", "The Corruptive");
        console.catalog.album_editor.set("album_name", "Hollow Signal");

        console.save_album().await.unwrap();

        assert_eq!(console.catalog.albums.len(), 1);
        assert_eq!(console.catalog.album_editor.title(), "Edit Album #9");
    }

    #[tokio::test]
    async fn test_save_track_without_album_is_rejected_locally() {
        let mock_server = MockServer::start().await;

        let mut console = authed_console(&mock_server);
        console.catalog.track_editor.set("track_name", "Orphan");

        match console.save_track().await.unwrap_err() {
            ConsoleError::NoAlbumSelected => {}
            e => panic!("Expected NoAlbumSelected, got: {:?}", e),
        }
        assert!(mock_server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_track_resets_editor_for_the_next_entry() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/rest/v1/tracks"))
            .and(body_json(json!({
                "album_id": 4,
                "track_no": 1,
                "track_name": "Carrier Wave",
                "track_status": "WIP",
                "stage": "CONCEPTION",
                "duration": null,
                "stream_embed": null,
                "purchase_url": null,
                "track_commentary": null
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": 31,
                "album_id": 4,
                "track_no": 1,
                "track_name": "Carrier Wave"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/tracks"))
            .and(query_param("album_id", "eq.4"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 31, "album_id": 4, "track_no": 1, "track_name": "Carrier Wave"}
            ])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let mut console = authed_console(&mock_server);
        console.catalog.selected_album = Some(4);
        console.catalog.track_editor.set("track_no", "1");
        console.catalog.track_editor.set("track_name", "Carrier Wave");

        console.save_track().await.unwrap();

        assert_eq!(console.catalog.tracks.len(), 1);
        assert_eq!(console.catalog.track_editor.title(), "New Track");
        assert_eq!(console.catalog.track_editor.value("track_name"), "");
        assert_eq!(console.catalog.selected_album, Some(4));
    }

    #[tokio::test]
    async fn test_delete_album_clears_tracks_even_when_refresh_fails() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/rest/v1/albums"))
            .and(query_param("id", "eq.4"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/albums"))
            .respond_with(ResponseTemplate::new(500).set_body_string("unavailable"))
            .mount(&mock_server)
            .await;

        let mut console = authed_console(&mock_server);
        console.catalog.album_editor.open(Some(&json!({"id": 4})));
        console.catalog.selected_album = Some(4);
        console.catalog.tracks = vec![
            serde_json::from_value(json!({"id": 31, "album_id": 4})).unwrap(),
            serde_json::from_value(json!({"id": 32, "album_id": 4})).unwrap(),
        ];

        let result = console.delete_album(Confirm::Proceed).await;

        match result.unwrap_err() {
            ConsoleError::Client(ClientError::Api { status, .. }) => assert_eq!(status, 500),
            e => panic!("Expected Api error, got: {:?}", e),
        }
        assert!(console.catalog.tracks.is_empty());
        assert_eq!(console.catalog.selected_album, None);
        assert_eq!(console.catalog.album_editor.title(), "New Album");
    }

    #[tokio::test]
    async fn test_cancelled_delete_touches_nothing() {
        let mock_server = MockServer::start().await;

        let mut console = authed_console(&mock_server);
        console.catalog.album_editor.open(Some(&json!({"id": 4})));

        let outcome = console.delete_album(Confirm::Cancel).await.unwrap();
        assert_eq!(outcome, DeleteOutcome::Cancelled);
        assert_eq!(console.catalog.album_editor.title(), "Edit Album #4");
        assert!(mock_server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_with_nothing_selected_is_rejected() {
        let mock_server = MockServer::start().await;

        let mut console = authed_console(&mock_server);
        match console.delete_album(Confirm::Proceed).await.unwrap_err() {
            ConsoleError::NothingSelected => {}
            e => panic!("Expected NothingSelected, got: {:?}", e),
        }
    }

    #[tokio::test]
    async fn test_delete_track_refreshes_the_owning_album() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/rest/v1/tracks"))
            .and(query_param("id", "eq.31"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 31,
                "album_id": 4
            })))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/tracks"))
            .and(query_param("album_id", "eq.4"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let mut console = authed_console(&mock_server);
        console.catalog.track_editor.open(Some(&json!({"id": 31})));

        let outcome = console.delete_track(Confirm::Proceed).await.unwrap();
        assert_eq!(outcome, DeleteOutcome::Deleted);
        assert_eq!(console.catalog.track_editor.title(), "New Track");
        assert!(console.catalog.tracks.is_empty());
    }
}

// =============================================================================
// Blog Panel Tests
// =============================================================================

mod blog {
    use super::*;

    #[tokio::test]
    async fn test_save_new_post_and_reopen_saved_row() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/rest/v1/blog_posts"))
            .and(body_json(json!({
                "slug": "first-pressing",
                "title": "First Pressing",
                "author": "",
                "category": "",
                "tags": ["vinyl", "lathe"],
                "draft": true,
                "publish_at": null,
                "body_md": "",
                "body_html": ""
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": 3,
                "slug": "first-pressing",
                "title": "First Pressing",
                "tags": ["vinyl", "lathe"],
                "draft": true
            })))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/blog_posts"))
            .and(query_param("order", "publish_at.desc.nullsfirst"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 3, "slug": "first-pressing", "title": "First Pressing"}
            ])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let mut console = authed_console(&mock_server);
        console.blog.post_editor.set("slug", "first-pressing");
        console.blog.post_editor.set("title", "First Pressing");
        console.blog.post_editor.set("tags", "vinyl, lathe");

        console.save_post().await.unwrap();

        assert_eq!(console.blog.posts.len(), 1);
        assert_eq!(console.blog.post_editor.title(), "Edit Post #3");
        assert_eq!(console.blog.post_editor.value("tags"), "vinyl, lathe");
    }

    #[tokio::test]
    async fn test_malformed_publish_at_never_reaches_the_wire() {
        let mock_server = MockServer::start().await;

        let mut console = authed_console(&mock_server);
        console.blog.post_editor.set("publish_at", "not a time");

        match console.save_post().await.unwrap_err() {
            ConsoleError::Invalid(_) => {}
            e => panic!("Expected Invalid, got: {:?}", e),
        }
        assert!(mock_server.received_requests().await.unwrap().is_empty());
    }
}

// =============================================================================
// Submissions Panel Tests
// =============================================================================

mod submissions {
    use super::*;

    #[tokio::test]
    async fn test_lists_fetch_exact_columns_newest_first() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/rest/v1/subscriptions"))
            .and(query_param(
                "select",
                "first_name,last_name,email,country,created_at",
            ))
            .and(query_param("order", "created_at.desc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "first_name": "Ada",
                "last_name": "Hart",
                "email": "ada@example.com",
                "country": "NZ",
                "created_at": "2024-03-01T10:00:00Z"
            }])))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/inquiries"))
            .and(query_param(
                "select",
                "first_name,last_name,email,messenger,created_at",
            ))
            .and(query_param("order", "created_at.desc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let mut console = authed_console(&mock_server);
        console.load_subscriptions().await.unwrap();
        console.load_inquiries().await.unwrap();

        assert_eq!(console.submissions.subscriptions.len(), 1);
        assert_eq!(console.submissions.subscriptions[0].display_name(), "Ada Hart");
        assert!(console.submissions.inquiries.is_empty());
    }
}
