//! A fixture-backed serving side for the two filter endpoints.
//!
//! Useful for demos and for integration-testing [`HttpLookupClient`]
//! without a real registry behind it. Unknown parents resolve to empty
//! lists, which is exactly what the real endpoints do.
//!
//! [`HttpLookupClient`]: super::HttpLookupClient

use axum::Json;
use axum::Router;
use axum::extract::Path;
use axum::routing::get;

use crate::types::LocationOption;

fn districts_for(county: &str) -> Vec<LocationOption> {
    match county {
        "1" => vec![
            LocationOption::new("101", "Bratislava I"),
            LocationOption::new("102", "Bratislava II"),
        ],
        "2" => vec![
            LocationOption::new("205", "Košice I"),
            LocationOption::new("206", "Košice II"),
        ],
        "9" => vec![LocationOption::new("901", "Zahraničie")],
        _ => Vec::new(),
    }
}

fn schools_for(district: &str) -> Vec<LocationOption> {
    match district {
        "101" => vec![
            LocationOption::new("1001", "Gymnázium Grösslingová 18, Bratislava"),
            LocationOption::new("1002", "Základná škola Vazovova 4, Bratislava"),
        ],
        "205" => vec![
            LocationOption::new("3001", "Gymnázium Poštová 9, Košice"),
            LocationOption::new("3002", "Základná škola Staničná 13, Košice"),
        ],
        "901" => vec![LocationOption::new("9001", "Škola v zahraničí")],
        _ => Vec::new(),
    }
}

async fn districts(Path(county): Path<String>) -> Json<Vec<LocationOption>> {
    Json(districts_for(&county))
}

async fn schools(Path(district): Path<String>) -> Json<Vec<LocationOption>> {
    Json(schools_for(&district))
}

/// Routes `/districts/{county}` and `/schools/{district}`.
pub fn stub_router() -> Router {
    Router::new()
        .route("/districts/{county}", get(districts))
        .route("/schools/{district}", get(schools))
}
