use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::features::{Field, FieldCatalog};

/// SeaORM entity for the `authors` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "authors")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    #[sea_orm(column_type = "Text")]
    pub bio: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::posts::Entity")]
    Posts,
}

impl Related<super::posts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Posts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

const FIELDS: &[Field<Column>] = &[
    Field::uuid("id", Column::Id),
    Field::text("name", Column::Name),
    Field::text("email", Column::Email),
    Field::text("bio", Column::Bio),
    Field::timestamp("createdAt", Column::CreatedAt),
    Field::timestamp("updatedAt", Column::UpdatedAt),
];

impl FieldCatalog for Entity {
    fn fields() -> &'static [Field<Column>] {
        FIELDS
    }
}

/// Fields accepted as exact-match filters on author listings.
pub const FILTER_FIELDS: &[&str] = &["name", "email"];

/// Fields matched against `q` on author listings.
pub const SEARCH_FIELDS: &[&str] = &["name", "email"];

// ── DTOs ──

#[derive(Debug, Clone, Deserialize)]
pub struct CreateAuthor {
    pub name: String,
    pub email: String,
    pub bio: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAuthor {
    pub name: Option<String>,
    pub email: Option<String>,
    pub bio: Option<String>,
}

/// The slice of an author embedded in post responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorSummary {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

impl From<Model> for AuthorSummary {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            email: m.email,
        }
    }
}
