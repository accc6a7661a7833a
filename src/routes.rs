//! Read-only REST surface for the catalog.
//!
//! Every body is wrapped in the `{success, data|message}` envelope. The
//! list endpoint serves summaries; the by-name endpoint serves the full
//! restaurant document.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};
use serde::Serialize;
use tracing::info;

use crate::app_state::AppState;
use crate::error::{AppError, AppResult};
use crate::models::{Address, Cuisine, Restaurant, Review};

#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }
}

/// List-endpoint shape: omits menuItems, description, phone, deliveryTime
/// and image relative to the full restaurant document.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub cuisine: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    pub reviews: Vec<Review>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

impl From<&Restaurant> for RestaurantSummary {
    fn from(restaurant: &Restaurant) -> Self {
        Self {
            id: restaurant.id.clone(),
            name: restaurant.name.clone(),
            cuisine: restaurant.cuisine.clone(),
            rating: restaurant.rating,
            reviews: restaurant.reviews.clone(),
            address: restaurant.address.clone(),
        }
    }
}

pub async fn list_restaurants(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<RestaurantSummary>>>> {
    let restaurants = state.store.all_restaurants().await?;
    let summaries = restaurants.iter().map(RestaurantSummary::from).collect();
    Ok(Json(ApiResponse::ok(summaries)))
}

pub async fn restaurant_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<ApiResponse<Restaurant>>> {
    info!("Restaurant lookup for slug: {}", name);
    match state.store.restaurant_by_name(&name).await? {
        Some(restaurant) => Ok(Json(ApiResponse::ok(restaurant))),
        None => Err(AppError::NotFound("Restaurant not found".to_string())),
    }
}

pub async fn list_cuisines(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<Cuisine>>>> {
    let cuisines = state.store.all_cuisines().await?;
    Ok(Json(ApiResponse::ok(cuisines)))
}

pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/api/restaurants", get(list_restaurants))
        .route("/api/restaurants/name/{name}", get(restaurant_by_name))
        .route("/api/cuisines", get(list_cuisines))
        .with_state(state)
}
