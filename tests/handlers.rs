//! HTTP contract of the routes, exercised through an in-process actix service
//! backed by the in-memory SQLite database.
mod common;

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::{Value, json};
use uuid::Uuid;

use blog_admin_api::auth::jwt::Claims;
use blog_admin_api::auth::middleware::JwtSecret;
use blog_admin_api::handlers;
use common::{PostSeed, seed_author, seed_post, setup_db};

const SECRET: &str = "handlers-test-secret-at-least-32-bytes";

/// Same wiring as `main`, minus CORS and the request logger.
macro_rules! app {
    ($db:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($db))
                .app_data(web::Data::new(JwtSecret(SECRET.to_string())))
                .route("/health", web::get().to(handlers::health::health))
                .service(web::scope("/api").configure(handlers::init_routes))
                .default_service(web::to(handlers::not_found)),
        )
        .await
    };
}

fn bearer(role: &str) -> (&'static str, String) {
    let now = Utc::now().timestamp() as usize;
    let claims = Claims {
        sub: Uuid::new_v4().to_string(),
        exp: now + 600,
        iat: Some(now),
        email: Some("editor@example.com".to_string()),
        name: None,
        role: Some(role.to_string()),
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .expect("Failed to encode test JWT");
    ("Authorization", format!("Bearer {token}"))
}

#[actix_web::test]
async fn health_reports_running() {
    let db = setup_db().await;
    let app = app!(db);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "status": "ok", "message": "API is running" }));
}

#[actix_web::test]
async fn unknown_route_is_json_404() {
    let db = setup_db().await;
    let app = app!(db);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/api/nope").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "message": "Route not found" }));
}

#[actix_web::test]
async fn malformed_ids_are_bad_requests() {
    let db = setup_db().await;
    let app = app!(db);

    let cases = [
        ("/api/authors/not-a-uuid", "Invalid author id"),
        ("/api/posts/not-a-uuid", "Invalid post id"),
        ("/api/posts/author/not-a-uuid", "Invalid author id"),
    ];
    for (uri, message) in cases {
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{uri}");

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], message, "{uri}");
    }
}

#[actix_web::test]
async fn post_writes_require_an_admin_token() {
    let db = setup_db().await;
    let app = app!(db);
    let post_uri = format!("/api/posts/{}", Uuid::new_v4());

    let requests = || {
        [
            test::TestRequest::post().uri("/api/posts").set_json(json!({})),
            test::TestRequest::patch().uri(&post_uri).set_json(json!({})),
            test::TestRequest::delete().uri(&post_uri),
        ]
    };

    for req in requests() {
        let resp = test::call_service(&app, req.to_request()).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    for req in requests() {
        let resp = test::call_service(&app, req.insert_header(bearer("user")).to_request()).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Admin access required");
    }
}

#[actix_web::test]
async fn admin_creates_and_deletes_posts() {
    let db = setup_db().await;
    let author = seed_author(&db, "Ada", "ada@example.com", 0).await;
    let app = app!(db);

    let req = test::TestRequest::post()
        .uri("/api/posts")
        .insert_header(bearer("admin"))
        .set_json(json!({
            "title": "Route Tested",
            "content": "Body",
            "author": author.id,
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let created: Value = test::read_body_json(resp).await;
    assert_eq!(created["slug"], "route-tested");
    assert_eq!(created["author"]["id"], json!(author.id));
    let uri = format!("/api/posts/{}", created["id"].as_str().expect("post id"));

    let req = test::TestRequest::delete()
        .uri(&uri)
        .insert_header(bearer("admin"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::delete()
        .uri(&uri)
        .insert_header(bearer("admin"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Post not found");
}

#[actix_web::test]
async fn deleting_a_missing_author_is_not_found() {
    let db = setup_db().await;
    let app = app!(db);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/authors/{}", Uuid::new_v4()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn list_route_returns_the_envelope() {
    let db = setup_db().await;
    let author = seed_author(&db, "Ada", "ada@example.com", 0).await;
    for n in 1..=3 {
        seed_post(&db, author.id, PostSeed::new(&format!("Post {n}"), n)).await;
    }
    let app = app!(db);

    let req = test::TestRequest::get()
        .uri("/api/posts?limit=2&sort=createdAt&order=asc")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["total"], 3);
    assert_eq!(body["totalPages"], 2);
    assert_eq!(body["results"], 2);
    assert_eq!(body["data"][0]["title"], "Post 1");

    let req = test::TestRequest::get()
        .uri("/api/posts?page=100000000000000000&limit=100")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["results"], 0);
}
