use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;

use super::parse_id;
use crate::auth::middleware::AdminUser;
use crate::db::posts as post_db;
use crate::error::AppError;
use crate::features::QuerySpec;
use crate::models::posts::{CreatePost, UpdatePost};

/// GET /api/posts: list posts with their authors.
/// Query params: ?status=&author=&tag=&q=&sort=&order=&page=&limit=
pub async fn get_posts(
    db: web::Data<DatabaseConnection>,
    query: QuerySpec,
) -> Result<HttpResponse, AppError> {
    let posts = post_db::list_posts(db.get_ref(), &query).await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /api/posts/author/{author_id}: list one author's posts.
pub async fn get_posts_by_author(
    db: web::Data<DatabaseConnection>,
    path: web::Path<String>,
    query: QuerySpec,
) -> Result<HttpResponse, AppError> {
    let author_id = parse_id(&path, "Invalid author id")?;
    let posts = post_db::list_posts_by_author(db.get_ref(), author_id, &query).await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /api/posts/{id}: get a single post.
pub async fn get_post(
    db: web::Data<DatabaseConnection>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_id(&path, "Invalid post id")?;
    match post_db::get_post_by_id(db.get_ref(), id).await? {
        Some(post) => Ok(HttpResponse::Ok().json(post)),
        None => Err(AppError::NotFound("Post not found".to_string())),
    }
}

/// POST /api/posts: create a post (admin only).
pub async fn create_post(
    admin: AdminUser,
    db: web::Data<DatabaseConnection>,
    body: web::Json<CreatePost>,
) -> Result<HttpResponse, AppError> {
    let post = post_db::insert_post(db.get_ref(), body.into_inner()).await?;
    tracing::info!(post = %post.id, by = %admin.0.actor(), "post created");
    Ok(HttpResponse::Created().json(post))
}

/// PATCH /api/posts/{id}: update a post (admin only).
pub async fn update_post(
    admin: AdminUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<String>,
    body: web::Json<UpdatePost>,
) -> Result<HttpResponse, AppError> {
    let id = parse_id(&path, "Invalid post id")?;
    let updated = post_db::update_post(db.get_ref(), id, body.into_inner()).await?;
    tracing::info!(post = %id, by = %admin.0.actor(), "post updated");
    Ok(HttpResponse::Ok().json(updated))
}

/// DELETE /api/posts/{id}: delete a post (admin only).
pub async fn delete_post(
    admin: AdminUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_id(&path, "Invalid post id")?;
    let result = post_db::delete_post(db.get_ref(), id).await?;

    if result.rows_affected > 0 {
        tracing::info!(post = %id, by = %admin.0.actor(), "post deleted");
        Ok(HttpResponse::Ok().json(serde_json::json!({
            "message": format!("Post {id} deleted"),
        })))
    } else {
        Err(AppError::NotFound("Post not found".to_string()))
    }
}
