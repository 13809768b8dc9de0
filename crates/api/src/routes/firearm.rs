//! Route definitions for the firearm catalog filters.

use axum::routing::{get, MethodRouter};
use axum::Router;

use crate::handlers::firearm;
use crate::state::AppState;

/// Filter routes, mounted at the root.
///
/// ```text
/// GET /all                  -> list_all
/// GET /id/{id}              -> get_by_id
/// GET /brand/{brand}        -> list_by_brand
/// GET /name/{name}          -> list_by_name
/// GET /caliber/{caliber}    -> list_by_caliber
/// GET /year/{year}          -> list_by_year
/// GET /type/{type}          -> list_by_type
/// GET /country/{country}    -> list_by_country
/// GET /price/{min}/{max}    -> list_by_price
/// ```
///
/// The bare prefixes (`/brand`, `/brand/`, `/price/{min}`, ...) answer 400
/// instead of falling through to the router's 404.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/all", get(firearm::list_all))
        .route("/id/{id}", get(firearm::get_by_id))
        .route("/brand/{brand}", get(firearm::list_by_brand))
        .route("/name/{name}", get(firearm::list_by_name))
        .route("/caliber/{caliber}", get(firearm::list_by_caliber))
        .route("/year/{year}", get(firearm::list_by_year))
        .route("/type/{type}", get(firearm::list_by_type))
        .route("/country/{country}", get(firearm::list_by_country))
        .route("/price/{min}/{max}", get(firearm::list_by_price))
        .merge(missing_parameter_routes())
}

fn missing_parameter_routes() -> Router<AppState> {
    let single = [
        ("id", "id parameter is required"),
        ("brand", "brand parameter is required"),
        ("name", "name parameter is required"),
        ("caliber", "caliber parameter is required"),
        ("year", "year parameter is required"),
        ("type", "type parameter is required"),
        ("country", "country parameter is required"),
    ];

    let mut router = Router::new();
    for (prefix, message) in single {
        router = router
            .route(&format!("/{prefix}"), required(message))
            .route(&format!("/{prefix}/"), required(message));
    }

    let price = "min and max price parameters are required";
    router
        .route("/price", required(price))
        .route("/price/", required(price))
        .route("/price/{min}", required(price))
        .route("/price/{min}/", required(price))
}

fn required(message: &'static str) -> MethodRouter<AppState> {
    get(move || firearm::missing_parameter(message))
}
