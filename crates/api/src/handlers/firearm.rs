//! Handlers for the firearm catalog filters.
//!
//! Each filter issues exactly one read through [`FirearmRepo`]. Brand, name,
//! type and country values are title-cased before matching; all not-found
//! messages echo the value exactly as the client sent it.

use armory_core::error::CoreError;
use armory_core::naming::title_case;
use armory_core::pricing::PriceRange;
use armory_db::models::firearm::Firearm;
use armory_db::repositories::FirearmRepo;
use axum::extract::State;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::extract::Path;
use crate::state::AppState;

/// GET /all
///
/// Every record, never a 404.
pub async fn list_all(State(state): State<AppState>) -> AppResult<Json<Vec<Firearm>>> {
    let firearms = FirearmRepo::list_all(&state.pool).await?;
    Ok(Json(firearms))
}

/// GET /id/{id}
///
/// Returns a single object rather than an array.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Firearm>> {
    let firearm = FirearmRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| CoreError::NotFound(format!("no firearm found with id: {id}")))?;

    Ok(Json(firearm))
}

/// GET /brand/{brand}
pub async fn list_by_brand(
    State(state): State<AppState>,
    Path(brand): Path<String>,
) -> AppResult<Json<Vec<Firearm>>> {
    let firearms = FirearmRepo::find_by_brand(&state.pool, &title_case(&brand)).await?;
    found_or(firearms, || format!("no firearms found for brand: {brand}"))
}

/// GET /name/{name}
pub async fn list_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<Vec<Firearm>>> {
    let firearms = FirearmRepo::find_by_name(&state.pool, &title_case(&name)).await?;
    found_or(firearms, || format!("no firearms found with name: {name}"))
}

/// GET /caliber/{caliber}
///
/// Matched as sent; calibers are not title-cased.
pub async fn list_by_caliber(
    State(state): State<AppState>,
    Path(caliber): Path<String>,
) -> AppResult<Json<Vec<Firearm>>> {
    let firearms = FirearmRepo::find_by_caliber(&state.pool, &caliber).await?;
    found_or(firearms, || format!("no firearms found for caliber: {caliber}"))
}

/// GET /year/{year}
pub async fn list_by_year(
    State(state): State<AppState>,
    Path(year): Path<String>,
) -> AppResult<Json<Vec<Firearm>>> {
    let firearms = FirearmRepo::find_by_year(&state.pool, &year).await?;
    found_or(firearms, || format!("no firearms found for year: {year}"))
}

/// GET /type/{type}
pub async fn list_by_type(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> AppResult<Json<Vec<Firearm>>> {
    let firearms = FirearmRepo::find_by_type(&state.pool, &title_case(&category)).await?;
    found_or(firearms, || format!("no firearms found for type: {category}"))
}

/// GET /country/{country}
pub async fn list_by_country(
    State(state): State<AppState>,
    Path(country): Path<String>,
) -> AppResult<Json<Vec<Firearm>>> {
    let firearms = FirearmRepo::find_by_country(&state.pool, &title_case(&country)).await?;
    found_or(firearms, || format!("no firearms found for country: {country}"))
}

/// GET /price/{min}/{max}
///
/// Both bounds are validated before any query runs.
pub async fn list_by_price(
    State(state): State<AppState>,
    Path((min, max)): Path<(String, String)>,
) -> AppResult<Json<Vec<Firearm>>> {
    let range = PriceRange::parse(&min, &max)?;

    let firearms = FirearmRepo::find_by_price(&state.pool, range).await?;
    found_or(firearms, || {
        format!(
            "no firearms found for price range: {} to {}",
            range.min, range.max
        )
    })
}

/// Response for a filter route hit without its path parameter.
pub async fn missing_parameter(message: &'static str) -> AppError {
    AppError::BadRequest(message.to_string())
}

/// Zero matches is a not-found outcome, never an empty array.
fn found_or(
    firearms: Vec<Firearm>,
    message: impl FnOnce() -> String,
) -> AppResult<Json<Vec<Firearm>>> {
    if firearms.is_empty() {
        return Err(CoreError::NotFound(message()).into());
    }
    Ok(Json(firearms))
}
