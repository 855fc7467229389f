#![allow(clippy::module_inception)]

#[cfg(test)]
mod http_tests {
    use std::sync::Arc;
    use actix_web::cookie::Cookie;
    use actix_web::http::header::{HeaderValue, LOCATION, SET_COOKIE};
    use actix_web::http::StatusCode;
    use actix_web::{test as actix_test, web, App};
    use chrono::{TimeZone, Utc};
    use crate::config::structs::configuration::Configuration;
    use crate::database::errors::DatabaseError;
    use crate::database::enums::database_drivers::DatabaseDrivers;
    use crate::database::traits::database_backend::MockDatabaseBackend;
    use crate::http::http::*;
    use crate::http::structs::board_service_data::BoardServiceData;
    use crate::posts::structs::new_post::NewPost;
    use crate::posts::structs::post::Post;
    use crate::tracking::errors::TrackingError;
    use crate::tracking::structs::tracking_id::TrackingId;
    use crate::tracking::structs::tracking_manager::TrackingManager;
    use crate::tracking::traits::random_source::MockRandomSource;
    use crate::tracking::tracking::TRACKING_COOKIE_NAME;

    const TEST_PEPPER: &str = "SECRET";
    const ALICE_TRACKING_ID: &str = "42_92d53edfc989028b55f01b0fde281a3f37b71640";
    const BOB_TRACKING_ID: &str = "42_2e804e1591eef9bba3d0baf5ef85d2e503bbf146";
    const USER_HEADER: &str = "X-Forwarded-User";

    fn seeded_random_source() -> MockRandomSource {
        let mut random_source = MockRandomSource::new();
        random_source.expect_fill_bytes().returning(|buffer| {
            buffer.copy_from_slice(&42u64.to_be_bytes());
            Ok(())
        });
        random_source
    }

    fn unused_random_source() -> MockRandomSource {
        let mut random_source = MockRandomSource::new();
        random_source.expect_fill_bytes().times(0);
        random_source
    }

    fn service_data_with(config: Configuration, database: MockDatabaseBackend, random_source: MockRandomSource) -> Arc<BoardServiceData> {
        let http_server_config = Arc::new(config.http_server[0].clone());
        Arc::new(BoardServiceData::new(
            Arc::new(TrackingManager::with_random_source(TEST_PEPPER, Arc::new(random_source))),
            Arc::new(database),
            Arc::new(config),
            http_server_config,
        ))
    }

    fn service_data(database: MockDatabaseBackend, random_source: MockRandomSource) -> Arc<BoardServiceData> {
        service_data_with(Configuration::init(), database, random_source)
    }

    fn post(id: i64, content: &str, posted_by: &str) -> Post {
        Post::from_new(
            id,
            NewPost {
                content: content.to_string(),
                tracking_cookie: TrackingId(String::from(ALICE_TRACKING_ID)),
                posted_by: posted_by.to_string(),
            },
            Utc.with_ymd_and_hms(2024, 1, 31, 15, 4, 5).unwrap(),
        )
    }

    fn issued_tracking_id(response: &actix_web::dev::ServiceResponse) -> Option<String> {
        response.response().cookies()
            .find(|cookie| cookie.name() == TRACKING_COOKIE_NAME)
            .map(|cookie| cookie.value().to_string())
    }

    mod user_tests {
        use super::*;

        #[test]
        fn test_basic_auth_user() {
            assert_eq!(http_service_basic_auth_user("Basic YWxpY2U6cHc="), Some(String::from("alice")));
            assert_eq!(http_service_basic_auth_user("basic Ym9i"), Some(String::from("bob")));
        }

        #[test]
        fn test_basic_auth_user_rejects_other_schemes() {
            assert_eq!(http_service_basic_auth_user("Bearer YWxpY2U6cHc="), None);
            assert_eq!(http_service_basic_auth_user("Basic !!!"), None);
            assert_eq!(http_service_basic_auth_user("Basic OnB3"), None);
            assert_eq!(http_service_basic_auth_user(""), None);
        }

        #[test]
        fn test_resolve_user_prefers_header() {
            let data = service_data(MockDatabaseBackend::new(), unused_random_source());
            let request = actix_test::TestRequest::default()
                .insert_header((USER_HEADER, "alice"))
                .insert_header(("Authorization", "Basic Ym9i"))
                .to_http_request();
            assert_eq!(http_service_resolve_user(&request, &data).unwrap(), "alice");
        }

        #[test]
        fn test_resolve_user_from_basic_auth() {
            let data = service_data(MockDatabaseBackend::new(), unused_random_source());
            let request = actix_test::TestRequest::default()
                .insert_header(("Authorization", "Basic Ym9i"))
                .to_http_request();
            assert_eq!(http_service_resolve_user(&request, &data).unwrap(), "bob");
        }

        #[test]
        fn test_resolve_user_anonymous() {
            let data = service_data(MockDatabaseBackend::new(), unused_random_source());
            let request = actix_test::TestRequest::default().to_http_request();
            assert_eq!(http_service_resolve_user(&request, &data).unwrap(), "");
        }

        #[test]
        fn test_resolve_user_keeps_non_ascii_header() {
            let data = service_data(MockDatabaseBackend::new(), unused_random_source());
            let request = actix_test::TestRequest::default()
                .insert_header((USER_HEADER, HeaderValue::from_bytes("ユーザー".as_bytes()).unwrap()))
                .insert_header(("Authorization", "Basic Ym9i"))
                .to_http_request();
            assert_eq!(http_service_resolve_user(&request, &data).unwrap(), "ユーザー");
        }

        #[test]
        fn test_resolve_user_rejects_invalid_utf8_header() {
            let data = service_data(MockDatabaseBackend::new(), unused_random_source());
            let request = actix_test::TestRequest::default()
                .insert_header((USER_HEADER, HeaderValue::from_bytes(&[0xe3, 0x83, 0xff]).unwrap()))
                .to_http_request();
            assert!(matches!(
                http_service_resolve_user(&request, &data),
                Err(crate::http::errors::BoardError::BadRequest(_))
            ));
        }

        #[test]
        fn test_resolve_user_rejects_oversized_name() {
            let data = service_data(MockDatabaseBackend::new(), unused_random_source());
            let request = actix_test::TestRequest::default()
                .insert_header((USER_HEADER, "a".repeat(300)))
                .to_http_request();
            assert!(http_service_resolve_user(&request, &data).is_err());
        }

        #[test]
        fn test_retrieve_remote_ip_from_real_ip_header() {
            let request = actix_test::TestRequest::default()
                .insert_header(("X-Real-IP", "203.0.113.7"))
                .to_http_request();
            assert_eq!(
                http_service_retrieve_remote_ip(&request, "X-Real-IP"),
                Some("203.0.113.7".parse().unwrap())
            );
            let request = actix_test::TestRequest::default()
                .insert_header(("X-Real-IP", "not an ip"))
                .to_http_request();
            assert_eq!(http_service_retrieve_remote_ip(&request, "X-Real-IP"), None);
        }
    }

    mod cookie_tests {
        use super::*;
        use crate::tracking::structs::tracking_outcome::TrackingOutcome;

        #[test]
        fn test_no_cookie_when_identifier_is_reused() {
            let outcome = TrackingOutcome {
                tracking_id: TrackingId(String::from(ALICE_TRACKING_ID)),
                should_set_cookie: false,
                expires: None,
            };
            let config = Configuration::init().tracking;
            assert!(http_service_tracking_cookie(&outcome, &config).unwrap().is_none());
        }

        #[test]
        fn test_cookie_attributes() {
            let expires = Utc.with_ymd_and_hms(2024, 2, 1, 15, 4, 5).unwrap();
            let outcome = TrackingOutcome {
                tracking_id: TrackingId(String::from(ALICE_TRACKING_ID)),
                should_set_cookie: true,
                expires: Some(expires),
            };
            let mut config = Configuration::init().tracking;
            config.cookie_secure = true;
            let cookie = http_service_tracking_cookie(&outcome, &config).unwrap().unwrap();
            assert_eq!(cookie.name(), TRACKING_COOKIE_NAME);
            assert_eq!(cookie.value(), ALICE_TRACKING_ID);
            assert_eq!(cookie.path(), Some("/"));
            assert_eq!(cookie.http_only(), Some(true));
            assert_eq!(cookie.secure(), Some(true));
            assert_eq!(
                cookie.expires_datetime().map(|datetime| datetime.unix_timestamp()),
                Some(expires.timestamp())
            );
        }
    }

    mod list_tests {
        use super::*;

        #[actix_web::test]
        async fn test_list_issues_tracking_cookie() {
            let mut database = MockDatabaseBackend::new();
            database.expect_list_posts().times(1).returning(|| Ok(vec![post(1, "hello", "alice")]));
            let app = actix_test::init_service(App::new().configure(http_service_routes(service_data(database, seeded_random_source())))).await;

            let request = actix_test::TestRequest::get().uri("/posts").insert_header((USER_HEADER, "alice")).to_request();
            let response = actix_test::call_service(&app, request).await;
            assert_eq!(response.status(), StatusCode::OK);
            let cookie = response.response().cookies()
                .find(|cookie| cookie.name() == TRACKING_COOKIE_NAME)
                .map(|cookie| (cookie.value().to_string(), cookie.path().map(str::to_string), cookie.expires().is_some()))
                .unwrap();
            assert_eq!(cookie, (String::from(ALICE_TRACKING_ID), Some(String::from("/")), true));

            let body = actix_test::read_body(response).await;
            let html = String::from_utf8(body.to_vec()).unwrap();
            assert!(html.contains("hello"));
            assert!(html.contains("ID:42 "));
        }

        #[actix_web::test]
        async fn test_list_reuses_valid_cookie() {
            let mut database = MockDatabaseBackend::new();
            database.expect_list_posts().returning(|| Ok(vec![]));
            let app = actix_test::init_service(App::new().configure(http_service_routes(service_data(database, unused_random_source())))).await;

            let request = actix_test::TestRequest::get()
                .uri("/posts")
                .insert_header((USER_HEADER, "alice"))
                .cookie(Cookie::new(TRACKING_COOKIE_NAME, ALICE_TRACKING_ID))
                .to_request();
            let response = actix_test::call_service(&app, request).await;
            assert_eq!(response.status(), StatusCode::OK);
            assert!(response.headers().get(SET_COOKIE).is_none());
        }

        #[actix_web::test]
        async fn test_list_replaces_cookie_of_other_user() {
            let mut database = MockDatabaseBackend::new();
            database.expect_list_posts().returning(|| Ok(vec![]));
            let app = actix_test::init_service(App::new().configure(http_service_routes(service_data(database, seeded_random_source())))).await;

            let request = actix_test::TestRequest::get()
                .uri("/posts")
                .insert_header((USER_HEADER, "bob"))
                .cookie(Cookie::new(TRACKING_COOKIE_NAME, ALICE_TRACKING_ID))
                .to_request();
            let response = actix_test::call_service(&app, request).await;
            let value = response.response().cookies()
                .find(|cookie| cookie.name() == TRACKING_COOKIE_NAME)
                .map(|cookie| cookie.value().to_string());
            assert_eq!(value, Some(String::from(BOB_TRACKING_ID)));
        }

        #[actix_web::test]
        async fn test_list_replaces_tampered_cookie() {
            let mut database = MockDatabaseBackend::new();
            database.expect_list_posts().returning(|| Ok(vec![]));
            let app = actix_test::init_service(App::new().configure(http_service_routes(service_data(database, seeded_random_source())))).await;

            let request = actix_test::TestRequest::get()
                .uri("/posts")
                .insert_header((USER_HEADER, "alice"))
                .cookie(Cookie::new(TRACKING_COOKIE_NAME, "43_92d53edfc989028b55f01b0fde281a3f37b71640"))
                .to_request();
            let response = actix_test::call_service(&app, request).await;
            assert!(response.headers().get(SET_COOKIE).is_some());
        }

        #[actix_web::test]
        async fn test_list_fails_when_random_source_fails() {
            let mut random_source = MockRandomSource::new();
            random_source.expect_fill_bytes().returning(|_| {
                Err(TrackingError::RandomSourceUnavailable(String::from("entropy exhausted")))
            });
            let mut database = MockDatabaseBackend::new();
            database.expect_list_posts().times(0);
            let app = actix_test::init_service(App::new().configure(http_service_routes(service_data(database, random_source)))).await;

            let request = actix_test::TestRequest::get().uri("/posts").to_request();
            let response = actix_test::call_service(&app, request).await;
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }

        #[actix_web::test]
        async fn test_list_database_error() {
            let mut database = MockDatabaseBackend::new();
            database.expect_list_posts().returning(|| Err(DatabaseError::EngineNotConnected(DatabaseDrivers::sqlite3)));
            let app = actix_test::init_service(App::new().configure(http_service_routes(service_data(database, seeded_random_source())))).await;

            let request = actix_test::TestRequest::get().uri("/posts").to_request();
            let response = actix_test::call_service(&app, request).await;
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
            assert!(issued_tracking_id(&response).is_some());
            let body = actix_test::read_body(response).await;
            assert_eq!(body, web::Bytes::from_static(b"internal server error"));
        }
    }

    mod create_tests {
        use super::*;

        #[actix_web::test]
        async fn test_create_post() {
            let mut database = MockDatabaseBackend::new();
            database.expect_create_post()
                .withf(|post| {
                    post.content == "hello\nworld"
                        && post.posted_by == "alice"
                        && post.tracking_cookie.as_str() == ALICE_TRACKING_ID
                })
                .times(1)
                .returning(|post| Ok(Post::from_new(1, post, Utc::now())));
            let app = actix_test::init_service(App::new().configure(http_service_routes(service_data(database, seeded_random_source())))).await;

            let request = actix_test::TestRequest::post()
                .uri("/posts")
                .insert_header((USER_HEADER, "alice"))
                .set_form([("content", "hello\nworld")])
                .to_request();
            let response = actix_test::call_service(&app, request).await;
            assert_eq!(response.status(), StatusCode::SEE_OTHER);
            assert_eq!(response.headers().get(LOCATION).unwrap(), "/posts");
            assert!(response.headers().get(SET_COOKIE).is_some());
        }

        #[actix_web::test]
        async fn test_empty_post_is_not_stored() {
            let mut database = MockDatabaseBackend::new();
            database.expect_create_post().times(0);
            let app = actix_test::init_service(App::new().configure(http_service_routes(service_data(database, seeded_random_source())))).await;

            let request = actix_test::TestRequest::post()
                .uri("/posts")
                .insert_header((USER_HEADER, "alice"))
                .set_form([("content", "   ")])
                .to_request();
            let response = actix_test::call_service(&app, request).await;
            assert_eq!(response.status(), StatusCode::SEE_OTHER);
        }

        #[actix_web::test]
        async fn test_oversized_post_is_rejected() {
            let mut config = Configuration::init();
            config.board.max_content_length = 5;
            let mut database = MockDatabaseBackend::new();
            database.expect_create_post().times(0);
            let app = actix_test::init_service(App::new().configure(http_service_routes(service_data_with(config, database, seeded_random_source())))).await;

            let request = actix_test::TestRequest::post()
                .uri("/posts")
                .insert_header((USER_HEADER, "alice"))
                .set_form([("content", "あいうえおか")])
                .to_request();
            let response = actix_test::call_service(&app, request).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert_eq!(issued_tracking_id(&response), Some(String::from(ALICE_TRACKING_ID)));
        }
    }

    mod delete_tests {
        use super::*;

        fn database_with_post(delete_times: usize) -> MockDatabaseBackend {
            let mut database = MockDatabaseBackend::new();
            database.expect_find_post().returning(|id| match id {
                7 => Ok(Some(post(7, "hello", "alice"))),
                _ => Ok(None),
            });
            database.expect_delete_post().times(delete_times).returning(|_| Ok(true));
            database
        }

        #[actix_web::test]
        async fn test_author_deletes_post() {
            let app = actix_test::init_service(App::new().configure(http_service_routes(service_data(database_with_post(1), seeded_random_source())))).await;

            let request = actix_test::TestRequest::post()
                .uri("/posts/delete")
                .insert_header((USER_HEADER, "alice"))
                .set_form([("id", "7")])
                .to_request();
            let response = actix_test::call_service(&app, request).await;
            assert_eq!(response.status(), StatusCode::SEE_OTHER);
            assert_eq!(response.headers().get(LOCATION).unwrap(), "/posts");
        }

        #[actix_web::test]
        async fn test_admin_deletes_post_with_legacy_query() {
            let app = actix_test::init_service(App::new().configure(http_service_routes(service_data(database_with_post(1), seeded_random_source())))).await;

            let request = actix_test::TestRequest::post()
                .uri("/posts?delete=1")
                .insert_header((USER_HEADER, "admin"))
                .set_form([("id", "7")])
                .to_request();
            let response = actix_test::call_service(&app, request).await;
            assert_eq!(response.status(), StatusCode::SEE_OTHER);
        }

        #[actix_web::test]
        async fn test_other_user_cannot_delete() {
            let app = actix_test::init_service(App::new().configure(http_service_routes(service_data(database_with_post(0), seeded_random_source())))).await;

            let request = actix_test::TestRequest::post()
                .uri("/posts/delete")
                .insert_header((USER_HEADER, "bob"))
                .set_form([("id", "7")])
                .to_request();
            let response = actix_test::call_service(&app, request).await;
            assert_eq!(response.status(), StatusCode::FORBIDDEN);
            assert_eq!(issued_tracking_id(&response), Some(String::from(BOB_TRACKING_ID)));
        }

        #[actix_web::test]
        async fn test_legacy_delete_forbidden_keeps_cookie() {
            let app = actix_test::init_service(App::new().configure(http_service_routes(service_data(database_with_post(0), seeded_random_source())))).await;

            let request = actix_test::TestRequest::post()
                .uri("/posts?delete=1")
                .set_form([("id", "7")])
                .to_request();
            let response = actix_test::call_service(&app, request).await;
            assert_eq!(response.status(), StatusCode::FORBIDDEN);
            assert!(issued_tracking_id(&response).is_some());
        }

        #[actix_web::test]
        async fn test_forbidden_without_reissue_sets_no_cookie() {
            let app = actix_test::init_service(App::new().configure(http_service_routes(service_data(database_with_post(0), unused_random_source())))).await;

            let request = actix_test::TestRequest::post()
                .uri("/posts/delete")
                .insert_header((USER_HEADER, "bob"))
                .cookie(Cookie::new(TRACKING_COOKIE_NAME, BOB_TRACKING_ID))
                .set_form([("id", "7")])
                .to_request();
            let response = actix_test::call_service(&app, request).await;
            assert_eq!(response.status(), StatusCode::FORBIDDEN);
            assert!(response.headers().get(SET_COOKIE).is_none());
        }

        #[actix_web::test]
        async fn test_unknown_post() {
            let app = actix_test::init_service(App::new().configure(http_service_routes(service_data(database_with_post(0), seeded_random_source())))).await;

            let request = actix_test::TestRequest::post()
                .uri("/posts/delete")
                .insert_header((USER_HEADER, "alice"))
                .set_form([("id", "8")])
                .to_request();
            let response = actix_test::call_service(&app, request).await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND);
            assert_eq!(issued_tracking_id(&response), Some(String::from(ALICE_TRACKING_ID)));
        }

        #[actix_web::test]
        async fn test_invalid_id() {
            let app = actix_test::init_service(App::new().configure(http_service_routes(service_data(database_with_post(0), seeded_random_source())))).await;

            let request = actix_test::TestRequest::post()
                .uri("/posts/delete")
                .insert_header((USER_HEADER, "alice"))
                .set_form([("id", "seven")])
                .to_request();
            let response = actix_test::call_service(&app, request).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert_eq!(issued_tracking_id(&response), Some(String::from(ALICE_TRACKING_ID)));
        }
    }

    mod routing_tests {
        use super::*;

        #[actix_web::test]
        async fn test_root_redirects_to_posts() {
            let app = actix_test::init_service(App::new().configure(http_service_routes(service_data(MockDatabaseBackend::new(), unused_random_source())))).await;
            let response = actix_test::call_service(&app, actix_test::TestRequest::get().uri("/").to_request()).await;
            assert_eq!(response.status(), StatusCode::SEE_OTHER);
            assert_eq!(response.headers().get(LOCATION).unwrap(), "/posts");
        }

        #[actix_web::test]
        async fn test_unsupported_method() {
            let app = actix_test::init_service(App::new().configure(http_service_routes(service_data(MockDatabaseBackend::new(), unused_random_source())))).await;
            let response = actix_test::call_service(&app, actix_test::TestRequest::put().uri("/posts").to_request()).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            let response = actix_test::call_service(&app, actix_test::TestRequest::get().uri("/posts/delete").to_request()).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        }

        #[actix_web::test]
        async fn test_unknown_path() {
            let app = actix_test::init_service(App::new().configure(http_service_routes(service_data(MockDatabaseBackend::new(), unused_random_source())))).await;
            let response = actix_test::call_service(&app, actix_test::TestRequest::get().uri("/announce").to_request()).await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND);
        }
    }
}
