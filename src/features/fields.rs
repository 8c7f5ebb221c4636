use chrono::{DateTime, Utc};
use sea_orm::{ColumnTrait, Condition, EntityTrait, Value};
use uuid::Uuid;

/// How a raw query-string value is converted before it is compared with a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Uuid,
    Timestamp,
}

impl FieldKind {
    /// Convert a raw value, `None` when it is not valid for this kind.
    pub fn parse(self, raw: &str) -> Option<Value> {
        match self {
            FieldKind::Text => Some(raw.to_owned().into()),
            FieldKind::Uuid => Uuid::parse_str(raw.trim()).ok().map(Value::from),
            FieldKind::Timestamp => DateTime::parse_from_rfc3339(raw.trim())
                .ok()
                .map(|ts| Value::from(ts.with_timezone(&Utc))),
        }
    }

    pub fn is_searchable(self) -> bool {
        self == FieldKind::Text
    }
}

/// A field exposed to list queries under its API name.
#[derive(Debug, Clone, Copy)]
pub struct Field<C> {
    pub name: &'static str,
    pub column: C,
    pub kind: FieldKind,
}

impl<C> Field<C> {
    pub const fn text(name: &'static str, column: C) -> Self {
        Self {
            name,
            column,
            kind: FieldKind::Text,
        }
    }

    pub const fn uuid(name: &'static str, column: C) -> Self {
        Self {
            name,
            column,
            kind: FieldKind::Uuid,
        }
    }

    pub const fn timestamp(name: &'static str, column: C) -> Self {
        Self {
            name,
            column,
            kind: FieldKind::Timestamp,
        }
    }
}

impl<C: ColumnTrait> Field<C> {
    /// Exact-match condition for the supplied values.
    ///
    /// One value is an equality test, several become `IN (..)`. Values that do
    /// not parse for this field's kind drop out, so a field given only invalid
    /// values matches no row.
    pub fn equals(&self, raw: &[String]) -> Condition {
        let mut values: Vec<Value> = raw.iter().filter_map(|v| self.kind.parse(v)).collect();

        if raw.len() == 1 && values.len() == 1 {
            return Condition::all().add(self.column.eq(values.remove(0)));
        }
        Condition::all().add(self.column.is_in(values))
    }
}

/// Per-entity catalog of fields that list queries may filter, search or sort on.
///
/// Names not present in the catalog are ignored by every [`ApiFeatures`] stage.
///
/// [`ApiFeatures`]: super::ApiFeatures
pub trait FieldCatalog: EntityTrait {
    fn fields() -> &'static [Field<Self::Column>];

    fn field(name: &str) -> Option<&'static Field<Self::Column>> {
        Self::fields().iter().find(|f| f.name == name)
    }
}
