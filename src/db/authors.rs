use sea_orm::*;
use uuid::Uuid;

use crate::features::pagination::{DEFAULT_LIMIT, MAX_LIMIT};
use crate::features::{ApiFeatures, QuerySpec};
use crate::models::ListResponse;
use crate::models::authors::{self, CreateAuthor, FILTER_FIELDS, SEARCH_FIELDS, UpdateAuthor};

/// Insert a new author.
pub async fn insert_author(
    db: &DatabaseConnection,
    input: CreateAuthor,
) -> Result<authors::Model, DbErr> {
    let now = chrono::Utc::now();
    let new_author = authors::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(input.name.trim().to_string()),
        email: Set(normalize_email(&input.email)),
        bio: Set(input.bio.unwrap_or_default()),
        created_at: Set(now),
        updated_at: Set(now),
    };

    new_author.insert(db).await
}

/// Fetch one page of authors, narrowed by the request's query parameters.
///
/// The page and the total are read concurrently by two independent queries,
/// so `total` can disagree with the page contents under concurrent writes.
pub async fn list_authors(
    db: &DatabaseConnection,
    spec: &QuerySpec,
) -> Result<ListResponse<authors::Model>, DbErr> {
    let features = ApiFeatures::new(authors::Entity::find(), spec)
        .filter(FILTER_FIELDS)
        .search(SEARCH_FIELDS)
        .sort("-createdAt")
        .paginate(DEFAULT_LIMIT, MAX_LIMIT);
    let pagination = features.pagination().unwrap_or_default();

    let counter = ApiFeatures::new(authors::Entity::find(), spec)
        .filter(FILTER_FIELDS)
        .search(SEARCH_FIELDS);

    let (total, rows) = tokio::try_join!(
        counter.into_query().count(db),
        features.into_query().all(db),
    )?;

    tracing::debug!(page = pagination.page, limit = pagination.limit, total, "listed authors");
    Ok(ListResponse::new(rows, total, pagination))
}

/// Fetch a single author by ID.
pub async fn get_author_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<authors::Model>, DbErr> {
    authors::Entity::find_by_id(id).one(db).await
}

/// Update an existing author.
pub async fn update_author(
    db: &DatabaseConnection,
    id: Uuid,
    input: UpdateAuthor,
) -> Result<authors::Model, DbErr> {
    let author = authors::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound("Author not found".to_string()))?;

    let mut active: authors::ActiveModel = author.into();

    if let Some(name) = input.name {
        active.name = Set(name.trim().to_string());
    }
    if let Some(email) = input.email {
        active.email = Set(normalize_email(&email));
    }
    if let Some(bio) = input.bio {
        active.bio = Set(bio);
    }
    active.updated_at = Set(chrono::Utc::now());

    active.update(db).await
}

/// Delete an author by ID. Their posts go with them.
pub async fn delete_author(db: &DatabaseConnection, id: Uuid) -> Result<DeleteResult, DbErr> {
    authors::Entity::delete_by_id(id).exec(db).await
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
