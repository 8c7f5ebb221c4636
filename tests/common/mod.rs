#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ActiveModelTrait, ConnectOptions, Database, DatabaseConnection, Set};
use uuid::Uuid;

use blog_admin_api::models::authors;
use blog_admin_api::models::posts::{self, PostStatus};

/// Fresh in-memory SQLite database with every migration applied.
///
/// A single pooled connection keeps every query on the same in-memory database.
pub async fn setup_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).min_connections(1).sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .expect("Failed to open in-memory database");
    Migrator::up(&db, None)
        .await
        .expect("Failed to apply migrations");
    db
}

/// Timestamp `minutes` after a fixed epoch, so creation order is explicit.
pub fn at(minutes: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap() + Duration::minutes(minutes)
}

pub async fn seed_author(
    db: &DatabaseConnection,
    name: &str,
    email: &str,
    created_minute: i64,
) -> authors::Model {
    authors::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.to_string()),
        email: Set(email.to_string()),
        bio: Set(String::new()),
        created_at: Set(at(created_minute)),
        updated_at: Set(at(created_minute)),
    }
    .insert(db)
    .await
    .expect("Failed to seed author")
}

pub struct PostSeed<'a> {
    pub title: &'a str,
    pub content: &'a str,
    pub status: PostStatus,
    pub tag: Option<&'a str>,
    pub created_minute: i64,
}

impl<'a> PostSeed<'a> {
    pub fn new(title: &'a str, created_minute: i64) -> Self {
        Self {
            title,
            content: "",
            status: PostStatus::Draft,
            tag: None,
            created_minute,
        }
    }
}

pub async fn seed_post(db: &DatabaseConnection, author_id: Uuid, seed: PostSeed<'_>) -> posts::Model {
    posts::ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(seed.title.to_string()),
        slug: Set(posts::slugify(seed.title)),
        content: Set(seed.content.to_string()),
        status: Set(seed.status),
        tag: Set(seed.tag.map(str::to_string)),
        author_id: Set(author_id),
        published_at: Set(None),
        created_at: Set(at(seed.created_minute)),
        updated_at: Set(at(seed.created_minute)),
    }
    .insert(db)
    .await
    .expect("Failed to seed post")
}
