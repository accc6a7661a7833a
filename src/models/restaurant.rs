use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewAuthor {
    pub name: String,
}

/// A review embedded in its restaurant document. Reviews are immutable
/// once created; there is no edit or delete path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(rename = "_id")]
    pub id: String,
    pub rating: u8,
    pub comment: String,
    pub user: ReviewAuthor,
    pub created_at: DateTime<Utc>,
}

impl Review {
    /// Ratings outside 1..=5 are clamped rather than rejected.
    pub fn new(
        id: impl Into<String>,
        rating: i64,
        comment: impl Into<String>,
        author: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            rating: rating.clamp(1, 5) as u8,
            comment: comment.into(),
            user: ReviewAuthor {
                name: author.into(),
            },
            created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Free-form label used purely for grouping; no fixed enumeration.
    pub category: String,
    pub vegetarian: bool,
    #[serde(default)]
    pub vegan: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spicy_level: Option<u8>,
}

/// A restaurant document with its embedded reviews and menu items.
///
/// Display-oriented fields are absent-safe: a record missing its address,
/// rating or embedded collections still deserializes and aggregates, it
/// just renders as an empty state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    /// Plain string, deliberately not foreign-keyed to the cuisine catalog.
    pub cuisine: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub menu_items: Vec<MenuItem>,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_level: Option<u8>,
    #[serde(default)]
    pub delivery_time: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_fee: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub image: String,
}

impl Restaurant {
    /// Derived URL slug: lowercase name with whitespace runs replaced by a
    /// single hyphen.
    pub fn slug(&self) -> String {
        crate::catalog::slug_of(&self.name)
    }

    /// Write-time validation. Reads stay absent-safe; writes reject
    /// malformed records before anything is persisted.
    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation(
                "Restaurant name must not be empty".to_string(),
            ));
        }
        if let Some(rating) = self.rating {
            if !(0.0..=5.0).contains(&rating) {
                return Err(AppError::Validation(format!(
                    "Rating {} out of range 0.0-5.0 for {}",
                    rating, self.name
                )));
            }
        }
        if self.delivery_time == 0 {
            return Err(AppError::Validation(format!(
                "Delivery time must be positive for {}",
                self.name
            )));
        }
        match &self.address {
            None => {
                return Err(AppError::Validation(format!(
                    "Missing address for {}",
                    self.name
                )))
            }
            Some(address) => {
                let fields = [
                    ("street", &address.street),
                    ("city", &address.city),
                    ("state", &address.state),
                    ("zipCode", &address.zip_code),
                ];
                for (field, value) in fields {
                    if value.trim().is_empty() {
                        return Err(AppError::Validation(format!(
                            "Missing address {} for {}",
                            field, self.name
                        )));
                    }
                }
            }
        }
        for review in &self.reviews {
            if !(1..=5).contains(&review.rating) {
                return Err(AppError::Validation(format!(
                    "Review rating {} out of range 1-5 for {}",
                    review.rating, self.name
                )));
            }
        }
        for item in &self.menu_items {
            if item.name.trim().is_empty() {
                return Err(AppError::Validation(format!(
                    "Menu item name must not be empty for {}",
                    self.name
                )));
            }
            if item.price < 0.0 {
                return Err(AppError::Validation(format!(
                    "Negative price for menu item {} of {}",
                    item.name, self.name
                )));
            }
        }
        Ok(())
    }
}

/// Flat cuisine catalog entry. Cuisines are listed independently of which
/// restaurants reference them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cuisine {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn valid_restaurant() -> Restaurant {
        Restaurant {
            id: "1".to_string(),
            name: "Pizza Palace".to_string(),
            cuisine: "Italian".to_string(),
            rating: Some(4.5),
            reviews: vec![],
            menu_items: vec![],
            description: "Authentic Italian pizzeria.".to_string(),
            price_level: None,
            delivery_time: 30,
            delivery_fee: None,
            address: Some(Address {
                street: "123 Main St".to_string(),
                city: "Anytown".to_string(),
                state: "CA".to_string(),
                zip_code: "12345".to_string(),
            }),
            phone: "555-123-4567".to_string(),
            image: "https://example.com/pizza.jpg".to_string(),
        }
    }

    #[test]
    fn validate_accepts_well_formed_record() {
        assert!(valid_restaurant().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_name_and_missing_address() {
        let mut r = valid_restaurant();
        r.name = "  ".to_string();
        assert!(r.validate().is_err());

        let mut r = valid_restaurant();
        r.address = None;
        assert!(r.validate().is_err());

        let mut r = valid_restaurant();
        r.address.as_mut().unwrap().zip_code = "".to_string();
        assert!(r.validate().is_err());
    }

    #[test]
    fn validate_rejects_out_of_range_rating_and_zero_delivery_time() {
        let mut r = valid_restaurant();
        r.rating = Some(5.5);
        assert!(r.validate().is_err());

        let mut r = valid_restaurant();
        r.delivery_time = 0;
        assert!(r.validate().is_err());
    }

    #[test]
    fn review_ratings_clamp_to_one_through_five() {
        let at = Utc.with_ymd_and_hms(2023, 9, 15, 14, 30, 0).unwrap();
        assert_eq!(Review::new("r1", 9, "great", "John Doe", at).rating, 5);
        assert_eq!(Review::new("r2", 0, "bad", "John Doe", at).rating, 1);
        assert_eq!(Review::new("r3", 4, "good", "John Doe", at).rating, 4);
    }

    #[test]
    fn unrated_restaurant_round_trips_without_rating_field() {
        let mut r = valid_restaurant();
        r.rating = None;
        let json = serde_json::to_value(&r).unwrap();
        assert!(json.get("rating").is_none());
        assert_eq!(json["_id"], "1");
        assert_eq!(json["address"]["zipCode"], "12345");
        let back: Restaurant = serde_json::from_value(json).unwrap();
        assert_eq!(back, r);
    }
}
