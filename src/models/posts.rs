use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::authors::{self, AuthorSummary};
use crate::features::{Field, FieldCatalog};

/// Publication state, stored as a lowercase string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    #[sea_orm(string_value = "draft")]
    Draft,
    #[sea_orm(string_value = "published")]
    Published,
}

/// SeaORM entity for the `posts` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "posts")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub status: PostStatus,
    pub tag: Option<String>,
    pub author_id: Uuid,
    pub published_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::authors::Entity",
        from = "Column::AuthorId",
        to = "super::authors::Column::Id",
        on_delete = "Cascade"
    )]
    Author,
}

impl Related<super::authors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Author.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

const FIELDS: &[Field<Column>] = &[
    Field::uuid("id", Column::Id),
    Field::text("title", Column::Title),
    Field::text("slug", Column::Slug),
    Field::text("content", Column::Content),
    Field::text("status", Column::Status),
    Field::text("tag", Column::Tag),
    Field::uuid("author", Column::AuthorId),
    Field::timestamp("publishedAt", Column::PublishedAt),
    Field::timestamp("createdAt", Column::CreatedAt),
    Field::timestamp("updatedAt", Column::UpdatedAt),
];

impl FieldCatalog for Entity {
    fn fields() -> &'static [Field<Column>] {
        FIELDS
    }
}

/// Fields accepted as exact-match filters on post listings.
pub const FILTER_FIELDS: &[&str] = &["status", "author", "tag"];

/// Filters for listings already scoped to one author.
pub const AUTHOR_FILTER_FIELDS: &[&str] = &["status", "tag"];

/// Fields matched against `q` on post listings.
pub const SEARCH_FIELDS: &[&str] = &["title", "content", "slug"];

// ── DTOs ──

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePost {
    pub title: String,
    pub slug: Option<String>,
    pub content: String,
    pub status: Option<PostStatus>,
    pub tag: Option<String>,
    pub author: Uuid,
    pub published_at: Option<DateTimeUtc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePost {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub content: Option<String>,
    pub status: Option<PostStatus>,
    /// Absent leaves the tag alone; `null` clears it.
    #[serde(default, deserialize_with = "present")]
    pub tag: Option<Option<String>>,
    pub author: Option<Uuid>,
    pub published_at: Option<DateTimeUtc>,
}

/// Wraps whatever was sent, `null` included, so it differs from an absent field.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// A post with its author embedded, as returned by every post endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub status: PostStatus,
    pub tag: Option<String>,
    pub author: Option<AuthorSummary>,
    pub published_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

impl From<(Model, Option<authors::Model>)> for PostResponse {
    fn from((m, author): (Model, Option<authors::Model>)) -> Self {
        Self {
            id: m.id,
            title: m.title,
            slug: m.slug,
            content: m.content,
            status: m.status,
            tag: m.tag,
            author: author.map(AuthorSummary::from),
            published_at: m.published_at,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

/// Lowercase, ASCII-alphanumeric slug with single dashes between words.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}
