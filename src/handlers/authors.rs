use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;

use super::parse_id;
use crate::db::authors as author_db;
use crate::error::AppError;
use crate::features::QuerySpec;
use crate::models::authors::{CreateAuthor, UpdateAuthor};

/// POST /api/authors: create an author.
pub async fn create_author(
    db: web::Data<DatabaseConnection>,
    body: web::Json<CreateAuthor>,
) -> Result<HttpResponse, AppError> {
    let author = author_db::insert_author(db.get_ref(), body.into_inner()).await?;
    Ok(HttpResponse::Created().json(author))
}

/// GET /api/authors: list authors.
/// Query params: ?name=&email=&q=&sort=&order=&page=&limit=
pub async fn get_authors(
    db: web::Data<DatabaseConnection>,
    query: QuerySpec,
) -> Result<HttpResponse, AppError> {
    let authors = author_db::list_authors(db.get_ref(), &query).await?;
    Ok(HttpResponse::Ok().json(authors))
}

/// GET /api/authors/{id}: get a single author.
pub async fn get_author(
    db: web::Data<DatabaseConnection>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_id(&path, "Invalid author id")?;
    match author_db::get_author_by_id(db.get_ref(), id).await? {
        Some(author) => Ok(HttpResponse::Ok().json(author)),
        None => Err(AppError::NotFound("Author not found".to_string())),
    }
}

/// PATCH /api/authors/{id}: update an author.
pub async fn update_author(
    db: web::Data<DatabaseConnection>,
    path: web::Path<String>,
    body: web::Json<UpdateAuthor>,
) -> Result<HttpResponse, AppError> {
    let id = parse_id(&path, "Invalid author id")?;
    let updated = author_db::update_author(db.get_ref(), id, body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(updated))
}

/// DELETE /api/authors/{id}: delete an author.
pub async fn delete_author(
    db: web::Data<DatabaseConnection>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_id(&path, "Invalid author id")?;
    let result = author_db::delete_author(db.get_ref(), id).await?;

    if result.rows_affected > 0 {
        Ok(HttpResponse::Ok().json(serde_json::json!({
            "message": format!("Author {id} deleted"),
        })))
    } else {
        Err(AppError::NotFound("Author not found".to_string()))
    }
}
