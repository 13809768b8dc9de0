//! HTTP-level integration tests for the catalog filter endpoints.
//!
//! Requests go straight into the router through `tower::ServiceExt`, against
//! a temp SQLite file seeded with the reference catalog.

mod common;

use std::collections::BTreeSet;

use axum::http::StatusCode;
use common::{body_json, get};
use serde_json::Value;

async fn seeded_app() -> (tempfile::TempDir, axum::Router) {
    let (dir, pool) = common::test_pool(true).await;
    (dir, common::build_test_app(pool))
}

fn field<'a>(json: &'a Value, key: &str) -> Vec<&'a str> {
    json.as_array()
        .expect("expected a JSON array")
        .iter()
        .map(|item| item[key].as_str().unwrap())
        .collect()
}

fn ids(json: &Value) -> Vec<i64> {
    json.as_array()
        .expect("expected a JSON array")
        .iter()
        .map(|item| item["id"].as_i64().unwrap())
        .collect()
}

// ---------------------------------------------------------------------------
// /all
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_all_returns_every_record() {
    let (_dir, app) = seeded_app().await;

    let response = get(app, "/all").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 74);

    let first = &json[0];
    assert_eq!(first["brand"], "Glock");
    assert_eq!(first["name"], "19");
    assert_eq!(first["type"], "Pistol");
    assert_eq!(first["magazine_capacity"], 15);
    assert_eq!(first["effective_range"], 50);
    assert_eq!(first["year"], 1988);
    assert_eq!(first["price"], 550);
    assert_eq!(first["manufacturer"], "Glock GmbH");
    assert_eq!(first["country_of_origin"], "Austria");
    assert!(first["created_at"].is_string());
    assert!(first["updated_at"].is_string());
}

#[tokio::test]
async fn test_all_on_empty_catalog_is_an_empty_array() {
    let (_dir, pool) = common::test_pool(false).await;

    let response = get(common::build_test_app(pool), "/all").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!([]));
}

// ---------------------------------------------------------------------------
// /id/{id}
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_every_id_returns_its_own_record() {
    let (_dir, app) = seeded_app().await;

    let all = body_json(get(app.clone(), "/all").await).await;

    for id in ids(&all) {
        let response = get(app.clone(), &format!("/id/{id}")).await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert!(json.is_object(), "/id returns a single object");
        assert_eq!(json["id"], id);
    }
}

#[tokio::test]
async fn test_absent_id_returns_404() {
    let (_dir, app) = seeded_app().await;

    let response = get(app, "/id/9999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await["message"],
        "no firearm found with id: 9999"
    );
}

#[tokio::test]
async fn test_non_numeric_id_returns_404() {
    let (_dir, app) = seeded_app().await;

    let response = get(app, "/id/abc").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await["message"],
        "no firearm found with id: abc"
    );
}

// ---------------------------------------------------------------------------
// /brand/{brand}
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_brand_glock_returns_three_models() {
    let (_dir, app) = seeded_app().await;

    let response = get(app, "/brand/glock").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(field(&json, "name"), vec!["19", "20", "21"]);
}

#[tokio::test]
async fn test_brand_with_punctuation_is_title_cased() {
    let (_dir, app) = seeded_app().await;

    let json = body_json(get(app, "/brand/smith%20%26%20wesson").await).await;
    assert_eq!(
        field(&json, "name"),
        vec!["M&P Shield", "Model 686", "M&P15"]
    );
}

#[tokio::test]
async fn test_brand_union_equals_all() {
    let (_dir, app) = seeded_app().await;

    let all = body_json(get(app.clone(), "/all").await).await;
    let brands: BTreeSet<&str> = field(&all, "brand").into_iter().collect();

    let mut union = Vec::new();
    for brand in brands {
        let uri = format!("/brand/{}", brand.replace(' ', "%20").replace('&', "%26"));
        let response = get(app.clone(), &uri).await;
        assert_eq!(response.status(), StatusCode::OK, "brand {brand}");
        union.extend(ids(&body_json(response).await));
    }

    let all_ids = ids(&all);
    assert_eq!(union.len(), all_ids.len(), "no record may be counted twice");
    assert_eq!(
        union.into_iter().collect::<BTreeSet<_>>(),
        all_ids.into_iter().collect::<BTreeSet<_>>()
    );
}

#[tokio::test]
async fn test_unknown_brand_returns_404_with_raw_value() {
    let (_dir, app) = seeded_app().await;

    let response = get(app, "/brand/acme").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({ "message": "no firearms found for brand: acme" })
    );
}

#[tokio::test]
async fn test_invalid_utf8_segment_is_json_400() {
    let (_dir, app) = seeded_app().await;

    for uri in ["/brand/%FF", "/id/%C3%28", "/price/%FF/100"] {
        let response = get(app.clone(), uri).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(
            response.headers()["content-type"],
            "application/json",
            "{uri}"
        );

        let json = body_json(response).await;
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 1, "{uri}: {json}");
        assert!(
            json["error"].as_str().unwrap().contains("Invalid UTF-8"),
            "{uri}: {json}"
        );
    }
}

// ---------------------------------------------------------------------------
// /name, /caliber, /type, /country, /year
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_name_substring() {
    let (_dir, app) = seeded_app().await;

    let json = body_json(get(app.clone(), "/name/ak").await).await;
    assert_eq!(field(&json, "name"), vec!["AK-47", "AKM", "Makarov PM"]);

    let response = get(app, "/name/zzz").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await["message"],
        "no firearms found with name: zzz"
    );
}

#[tokio::test]
async fn test_caliber_substring_without_title_casing() {
    let (_dir, app) = seeded_app().await;

    let json = body_json(get(app.clone(), "/caliber/magnum").await).await;
    assert_eq!(
        field(&json, "name"),
        vec!["Anaconda", "Python", "Model 686"]
    );

    let response = get(app, "/caliber/99mm").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await["message"],
        "no firearms found for caliber: 99mm"
    );
}

#[tokio::test]
async fn test_type_substring() {
    let (_dir, app) = seeded_app().await;

    let json = body_json(get(app.clone(), "/type/launcher").await).await;
    assert_eq!(
        field(&json, "name"),
        vec!["RPG-7", "FGM-148 Javelin", "Predator SRAW", "AT4"]
    );

    let response = get(app, "/type/catapult").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await["message"],
        "no firearms found for type: catapult"
    );
}

#[tokio::test]
async fn test_country_multi_word() {
    let (_dir, app) = seeded_app().await;

    let json = body_json(get(app.clone(), "/country/united%20kingdom").await).await;
    assert_eq!(field(&json, "name"), vec!["AWP"]);

    let response = get(app, "/country/atlantis").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await["message"],
        "no firearms found for country: atlantis"
    );
}

#[tokio::test]
async fn test_year_1911_contains_colt() {
    let (_dir, app) = seeded_app().await;

    let response = get(app.clone(), "/year/1911").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let colt = json
        .as_array()
        .unwrap()
        .iter()
        .find(|f| f["brand"] == "Colt" && f["name"] == "1911");
    assert!(colt.is_some());

    let response = get(app, "/year/1800").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await["message"],
        "no firearms found for year: 1800"
    );
}

// ---------------------------------------------------------------------------
// /price/{min}/{max}
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_price_range_is_inclusive() {
    let (_dir, app) = seeded_app().await;

    let response = get(app, "/price/25000/50000").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(
        field(&json, "name"),
        vec!["FGM-148 Javelin", "M134D Minigun"]
    );
}

#[tokio::test]
async fn test_price_min_above_max_is_400_regardless_of_data() {
    for seed in [true, false] {
        let (_dir, pool) = common::test_pool(seed).await;
        let app = common::build_test_app(pool);

        for (min, max) in [(100, 50), (1, 0), (-5, -10), (50001, 50000)] {
            let response = get(app.clone(), &format!("/price/{min}/{max}")).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert_eq!(
                body_json(response).await["error"],
                "min price cannot be greater than max price"
            );
        }
    }
}

#[tokio::test]
async fn test_price_non_numeric_is_400() {
    let (_dir, app) = seeded_app().await;

    let response = get(app.clone(), "/price/low/100").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"],
        "min price must be a valid integer"
    );

    let response = get(app, "/price/100/high").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"],
        "max price must be a valid integer"
    );
}

#[tokio::test]
async fn test_price_without_matches_is_404() {
    let (_dir, app) = seeded_app().await;

    let response = get(app, "/price/1/10").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await["message"],
        "no firearms found for price range: 1 to 10"
    );
}

// ---------------------------------------------------------------------------
// Missing parameters
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_missing_parameters_are_400() {
    let (_dir, app) = seeded_app().await;

    let cases = [
        ("/id", "id parameter is required"),
        ("/brand", "brand parameter is required"),
        ("/brand/", "brand parameter is required"),
        ("/name/", "name parameter is required"),
        ("/caliber/", "caliber parameter is required"),
        ("/year/", "year parameter is required"),
        ("/type", "type parameter is required"),
        ("/country/", "country parameter is required"),
        ("/price", "min and max price parameters are required"),
        ("/price/100", "min and max price parameters are required"),
        ("/price/100/", "min and max price parameters are required"),
    ];

    for (uri, message) in cases {
        let response = get(app.clone(), uri).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body_json(response).await["error"], message, "{uri}");
    }
}

// ---------------------------------------------------------------------------
// Storage failures
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_storage_failure_is_500_and_scoped_to_request() {
    let (_dir, pool) = common::test_pool(true).await;
    let app = common::build_test_app(pool.clone());

    sqlx::query("DROP TABLE firearms")
        .execute(&pool)
        .await
        .unwrap();

    let response = get(app.clone(), "/brand/glock").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert!(json["error"]
        .as_str()
        .unwrap()
        .starts_with("failed to query database: "));

    // Validation still short-circuits before storage.
    let response = get(app, "/price/100/50").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
