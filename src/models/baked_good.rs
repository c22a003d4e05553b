use chrono::{DateTime, Utc};
use serde_json::{json, Value};

#[derive(Clone, Debug, PartialEq, sqlx::FromRow)]
pub struct BakedGood {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub bakery_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BakedGood {
    /// Flat mapping of every persisted column. Does not embed the owning bakery.
    pub fn to_dict(&self) -> Value {
        json!({
            "id": self.id,
            "name": self.name,
            "price": self.price,
            "bakery_id": self.bakery_id,
            "created_at": self.created_at.to_rfc3339(),
            "updated_at": self.updated_at.to_rfc3339(),
        })
    }
}

/// Validated input for an insert.
#[derive(Clone, Debug, PartialEq)]
pub struct NewBakedGood {
    pub name: String,
    pub price: f64,
    pub bakery_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn to_dict_covers_all_columns() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 8, 30, 0).unwrap();
        let good = BakedGood {
            id: 7,
            name: "Croissant".into(),
            price: 2.75,
            bakery_id: 1,
            created_at: at,
            updated_at: at,
        };
        let dict = good.to_dict();
        assert_eq!(dict["id"], 7);
        assert_eq!(dict["name"], "Croissant");
        assert_eq!(dict["price"], 2.75);
        assert_eq!(dict["bakery_id"], 1);
        assert_eq!(dict["created_at"], "2024-03-01T08:30:00+00:00");
        assert!(dict.get("bakery").is_none());
    }
}
