//! Idempotent seeding of the reference catalog.

use armory_core::catalog::{ReferenceFirearm, REFERENCE_FIREARMS};

use crate::DbPool;

const INSERT_FIREARM: &str = "INSERT OR IGNORE INTO firearms (
        brand, name, caliber, type, magazine_capacity, effective_range,
        year, price, manufacturer, weight, barrel_length, action, country_of_origin
    ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)";

/// Seeding failures. Duplicate `(brand, name)` pairs are not errors.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("failed to insert firearm {label}: {source}")]
    Insert {
        label: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("seed transaction failed: {0}")]
    Transaction(#[from] sqlx::Error),
}

/// Insert the built-in reference catalog.
pub async fn seed_reference_firearms(pool: &DbPool) -> Result<u64, SeedError> {
    seed_firearms(pool, REFERENCE_FIREARMS).await
}

/// Insert `firearms`, skipping any whose `(brand, name)` already exists.
///
/// Runs in a single transaction: the first failing insert rolls the whole
/// pass back and is reported with the record's label. Returns the number of
/// rows actually inserted, so a repeated pass returns `0`.
pub async fn seed_firearms(pool: &DbPool, firearms: &[ReferenceFirearm]) -> Result<u64, SeedError> {
    let mut tx = pool.begin().await?;
    let mut inserted = 0;

    for firearm in firearms {
        let result = sqlx::query(INSERT_FIREARM)
            .bind(firearm.brand)
            .bind(firearm.name)
            .bind(firearm.caliber)
            .bind(firearm.category)
            .bind(firearm.magazine_capacity)
            .bind(firearm.effective_range)
            .bind(firearm.year)
            .bind(firearm.price)
            .bind(firearm.manufacturer)
            .bind(firearm.weight)
            .bind(firearm.barrel_length)
            .bind(firearm.action)
            .bind(firearm.country_of_origin)
            .execute(&mut *tx)
            .await
            .map_err(|source| SeedError::Insert {
                label: firearm.label(),
                source,
            })?;

        inserted += result.rows_affected();
    }

    tx.commit().await?;

    tracing::debug!(
        offered = firearms.len(),
        inserted,
        "Reference firearms seeded"
    );

    Ok(inserted)
}
