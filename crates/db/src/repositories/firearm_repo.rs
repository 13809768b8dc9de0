//! Repository for the `firearms` table.
//!
//! Every method issues exactly one read query. Results come back in storage
//! order (no `ORDER BY`).

use armory_core::pricing::PriceRange;
use sqlx::SqlitePool;

use crate::models::firearm::Firearm;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, brand, name, caliber, type, magazine_capacity, effective_range, \
     year, price, manufacturer, weight, barrel_length, action, country_of_origin, \
     created_at, updated_at";

/// Read-only queries over the firearm catalog.
pub struct FirearmRepo;

impl FirearmRepo {
    /// Every record in the table.
    pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Firearm>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM firearms");
        sqlx::query_as::<_, Firearm>(&query).fetch_all(pool).await
    }

    /// Find a record by id.
    ///
    /// `id` is bound as text and compared by SQLite, so a non-numeric value
    /// simply matches nothing.
    pub async fn find_by_id(pool: &SqlitePool, id: &str) -> Result<Option<Firearm>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM firearms WHERE id = ?");
        sqlx::query_as::<_, Firearm>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Records whose brand contains `brand`, ignoring case.
    pub async fn find_by_brand(
        pool: &SqlitePool,
        brand: &str,
    ) -> Result<Vec<Firearm>, sqlx::Error> {
        Self::find_containing(pool, "brand", brand).await
    }

    /// Records whose name contains `name`, ignoring case.
    pub async fn find_by_name(pool: &SqlitePool, name: &str) -> Result<Vec<Firearm>, sqlx::Error> {
        Self::find_containing(pool, "name", name).await
    }

    /// Records whose caliber contains `caliber`, ignoring case.
    pub async fn find_by_caliber(
        pool: &SqlitePool,
        caliber: &str,
    ) -> Result<Vec<Firearm>, sqlx::Error> {
        Self::find_containing(pool, "caliber", caliber).await
    }

    /// Records whose `type` column contains `category`, ignoring case.
    pub async fn find_by_type(
        pool: &SqlitePool,
        category: &str,
    ) -> Result<Vec<Firearm>, sqlx::Error> {
        Self::find_containing(pool, "type", category).await
    }

    /// Records whose country of origin contains `country`, ignoring case.
    pub async fn find_by_country(
        pool: &SqlitePool,
        country: &str,
    ) -> Result<Vec<Firearm>, sqlx::Error> {
        Self::find_containing(pool, "country_of_origin", country).await
    }

    /// Records introduced in `year`.
    ///
    /// The raw string is bound and SQLite applies the column's integer
    /// affinity before comparing.
    pub async fn find_by_year(pool: &SqlitePool, year: &str) -> Result<Vec<Firearm>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM firearms WHERE year = ?");
        sqlx::query_as::<_, Firearm>(&query)
            .bind(year)
            .fetch_all(pool)
            .await
    }

    /// Records priced within `range`, both bounds inclusive.
    pub async fn find_by_price(
        pool: &SqlitePool,
        range: PriceRange,
    ) -> Result<Vec<Firearm>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM firearms WHERE price BETWEEN ? AND ?");
        sqlx::query_as::<_, Firearm>(&query)
            .bind(range.min)
            .bind(range.max)
            .fetch_all(pool)
            .await
    }

    /// Total number of records.
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM firearms")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// Case-insensitive substring match on `column`.
    ///
    /// `column` is always one of the fixed names above, never caller input.
    async fn find_containing(
        pool: &SqlitePool,
        column: &'static str,
        needle: &str,
    ) -> Result<Vec<Firearm>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM firearms WHERE {column} LIKE '%' || ? || '%' COLLATE NOCASE"
        );
        sqlx::query_as::<_, Firearm>(&query)
            .bind(needle)
            .fetch_all(pool)
            .await
    }
}
