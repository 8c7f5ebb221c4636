use sea_orm::*;
use uuid::Uuid;

use crate::features::pagination::{DEFAULT_LIMIT, MAX_LIMIT};
use crate::features::{ApiFeatures, QuerySpec};
use crate::models::ListResponse;
use crate::models::authors;
use crate::models::posts::{
    self, AUTHOR_FILTER_FIELDS, CreatePost, FILTER_FIELDS, PostResponse, PostStatus,
    SEARCH_FIELDS, UpdatePost, slugify,
};

/// Insert a new post and return it with its author.
///
/// A published post without an explicit `publishedAt` is stamped now; a draft
/// never carries one.
pub async fn insert_post(db: &DatabaseConnection, input: CreatePost) -> Result<PostResponse, DbErr> {
    let now = chrono::Utc::now();
    let id = Uuid::new_v4();
    let status = input.status.unwrap_or(PostStatus::Draft);
    let published_at = match status {
        PostStatus::Published => input.published_at.or(Some(now)),
        PostStatus::Draft => None,
    };
    let slug = input
        .slug
        .as_deref()
        .map(slugify)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| fallback_slug(&input.title, id));

    let new_post = posts::ActiveModel {
        id: Set(id),
        title: Set(input.title),
        slug: Set(slug),
        content: Set(input.content),
        status: Set(status),
        tag: Set(input.tag),
        author_id: Set(input.author),
        published_at: Set(published_at),
        created_at: Set(now),
        updated_at: Set(now),
    };
    new_post.insert(db).await?;

    get_post_by_id(db, id)
        .await?
        .ok_or(DbErr::RecordNotFound("Post not found".to_string()))
}

/// Fetch one page of posts, narrowed by the request's query parameters.
pub async fn list_posts(
    db: &DatabaseConnection,
    spec: &QuerySpec,
) -> Result<ListResponse<PostResponse>, DbErr> {
    list_where(db, posts::Entity::find, spec, FILTER_FIELDS).await
}

/// Fetch one page of an author's posts.
pub async fn list_posts_by_author(
    db: &DatabaseConnection,
    author_id: Uuid,
    spec: &QuerySpec,
) -> Result<ListResponse<PostResponse>, DbErr> {
    let scoped = || posts::Entity::find().filter(posts::Column::AuthorId.eq(author_id));
    let listing = list_where(db, scoped, spec, AUTHOR_FILTER_FIELDS).await?;

    Ok(listing.for_author(author_id))
}

/// Shared list pipeline: the data query embeds the author, the count query does not.
async fn list_where(
    db: &DatabaseConnection,
    base: impl Fn() -> Select<posts::Entity>,
    spec: &QuerySpec,
    filters: &[&str],
) -> Result<ListResponse<PostResponse>, DbErr> {
    let features = ApiFeatures::new(base(), spec)
        .filter(filters)
        .search(SEARCH_FIELDS)
        .sort("-createdAt")
        .paginate(DEFAULT_LIMIT, MAX_LIMIT);
    let pagination = features.pagination().unwrap_or_default();

    let counter = ApiFeatures::new(base(), spec)
        .filter(filters)
        .search(SEARCH_FIELDS);

    let (total, rows) = tokio::try_join!(
        counter.into_query().count(db),
        features
            .into_query()
            .find_also_related(authors::Entity)
            .all(db),
    )?;

    tracing::debug!(page = pagination.page, limit = pagination.limit, total, "listed posts");
    let data = rows.into_iter().map(PostResponse::from).collect();
    Ok(ListResponse::new(data, total, pagination))
}

/// Fetch a single post by ID with its author.
pub async fn get_post_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<PostResponse>, DbErr> {
    let row = posts::Entity::find_by_id(id)
        .find_also_related(authors::Entity)
        .one(db)
        .await?;

    Ok(row.map(PostResponse::from))
}

/// Update an existing post.
///
/// Setting the status to `published` stamps `publishedAt` with the current
/// time; setting it to `draft` clears it.
pub async fn update_post(
    db: &DatabaseConnection,
    id: Uuid,
    input: UpdatePost,
) -> Result<PostResponse, DbErr> {
    let post = posts::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound("Post not found".to_string()))?;

    let now = chrono::Utc::now();
    let mut active: posts::ActiveModel = post.into();

    if let Some(title) = input.title {
        active.title = Set(title);
    }
    if let Some(slug) = input.slug.as_deref().map(slugify).filter(|s| !s.is_empty()) {
        active.slug = Set(slug);
    }
    if let Some(content) = input.content {
        active.content = Set(content);
    }
    if let Some(tag) = input.tag {
        active.tag = Set(tag);
    }
    if let Some(author) = input.author {
        active.author_id = Set(author);
    }
    if let Some(published_at) = input.published_at {
        active.published_at = Set(Some(published_at));
    }
    match input.status {
        Some(PostStatus::Published) => {
            active.status = Set(PostStatus::Published);
            active.published_at = Set(Some(now));
        }
        Some(PostStatus::Draft) => {
            active.status = Set(PostStatus::Draft);
            active.published_at = Set(None);
        }
        None => {}
    }
    active.updated_at = Set(now);
    active.update(db).await?;

    get_post_by_id(db, id)
        .await?
        .ok_or(DbErr::RecordNotFound("Post not found".to_string()))
}

/// Delete a post by ID.
pub async fn delete_post(db: &DatabaseConnection, id: Uuid) -> Result<DeleteResult, DbErr> {
    posts::Entity::delete_by_id(id).exec(db).await
}

fn fallback_slug(title: &str, id: Uuid) -> String {
    let slug = slugify(title);
    if slug.is_empty() {
        format!("post-{}", id.simple())
    } else {
        slug
    }
}
