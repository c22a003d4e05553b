use super::BakedGood;
use crate::error::AppError;
use chrono::{DateTime, Utc};
use serde_json::{json, Value};

#[derive(Clone, Debug, PartialEq, sqlx::FromRow)]
pub struct Bakery {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Bakery {
    /// Mapping of the bakery's columns plus its baked goods under `baked_goods`.
    /// Callers pass the goods already loaded for this bakery.
    pub fn to_dict(&self, baked_goods: &[BakedGood]) -> Value {
        json!({
            "id": self.id,
            "name": self.name,
            "created_at": self.created_at.to_rfc3339(),
            "updated_at": self.updated_at.to_rfc3339(),
            "baked_goods": baked_goods.iter().map(BakedGood::to_dict).collect::<Vec<_>>(),
        })
    }
}

type Setter = fn(&mut BakeryChanges, Value) -> Result<(), AppError>;

/// Fields a PATCH may assign, each with its typed setter.
const MUTABLE_FIELDS: &[(&str, Setter)] = &[("name", set_name)];

/// Partial update of a bakery built from request attributes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BakeryChanges {
    pub name: Option<String>,
}

impl BakeryChanges {
    /// Apply `attrs` in order. The first attribute outside the allow-list, or with a value of
    /// the wrong type, rejects the whole set.
    pub fn from_attributes<I>(attrs: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        let mut changes = BakeryChanges::default();
        for (key, value) in attrs {
            let setter = MUTABLE_FIELDS
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, setter)| *setter)
                .ok_or_else(|| AppError::BadRequest(format!("Attribute {} not found in bakery.", key)))?;
            setter(&mut changes, value)?;
        }
        if changes.is_empty() {
            return Err(AppError::BadRequest("No data provided to update.".into()));
        }
        Ok(changes)
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
    }
}

fn set_name(changes: &mut BakeryChanges, value: Value) -> Result<(), AppError> {
    match value {
        Value::String(s) => {
            changes.name = Some(s);
            Ok(())
        }
        _ => Err(AppError::BadRequest("Attribute name must be a string.".into())),
    }
}
