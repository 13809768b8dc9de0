//! Firearm entity model.

use armory_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `firearms` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Firearm {
    pub id: DbId,
    pub brand: String,
    pub name: String,
    pub caliber: String,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub category: String,
    pub magazine_capacity: i64,
    pub effective_range: i64,
    pub year: i64,
    pub price: i64,
    pub manufacturer: Option<String>,
    pub weight: Option<f64>,
    pub barrel_length: Option<f64>,
    pub action: Option<String>,
    pub country_of_origin: Option<String>,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
}
