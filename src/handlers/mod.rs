pub mod authors;
pub mod health;
pub mod posts;

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use crate::error::AppError;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // ── Author routes (public) ──
    cfg.service(
        web::scope("/authors")
            .route("", web::get().to(authors::get_authors))
            .route("", web::post().to(authors::create_author))
            .route("/{id}", web::get().to(authors::get_author))
            .route("/{id}", web::patch().to(authors::update_author))
            .route("/{id}", web::delete().to(authors::delete_author)),
    );

    // ── Post routes (reads public, writes require an admin JWT via the AdminUser extractor) ──
    cfg.service(
        web::scope("/posts")
            .route("", web::get().to(posts::get_posts))
            .route("", web::post().to(posts::create_post))
            .route("/author/{author_id}", web::get().to(posts::get_posts_by_author))
            .route("/{id}", web::get().to(posts::get_post))
            .route("/{id}", web::patch().to(posts::update_post))
            .route("/{id}", web::delete().to(posts::delete_post)),
    );
}

/// Fallback for unmatched routes.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "message": "Route not found",
    }))
}

/// Parse a path identifier, answering 400 with `message` when malformed.
pub(crate) fn parse_id(raw: &str, message: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw.trim()).map_err(|_| AppError::BadRequest(message.to_string()))
}
