//! Catalog store: retrieval of restaurant, cuisine and user records.
//!
//! Two implementations share the [`CatalogStore`] contract: an in-memory
//! fixture store holding the static catalog the API serves today, and a
//! sqlite-backed document store persisting each record as a JSON document,
//! mirroring the embedded `restaurants`/`users` collection layout.

pub mod connection;
pub mod fixtures;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::Row;

use crate::catalog;
use crate::error::{AppError, AppResult};
use crate::models::{Cuisine, Restaurant, User};
use connection::ConnectionCache;

/// Read contract consumed by the query layer and the HTTP handlers.
/// Lookup misses are `Ok(None)`; only infrastructure failures are errors.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn all_restaurants(&self) -> AppResult<Vec<Restaurant>>;
    async fn restaurant_by_id(&self, id: &str) -> AppResult<Option<Restaurant>>;
    /// Slug-normalized name lookup, see [`catalog::find_by_slug`].
    async fn restaurant_by_name(&self, raw_name: &str) -> AppResult<Option<Restaurant>>;
    async fn all_cuisines(&self) -> AppResult<Vec<Cuisine>>;
}

/// In-memory store over the static fixture catalog.
pub struct FixtureStore {
    restaurants: Vec<Restaurant>,
    cuisines: Vec<Cuisine>,
}

impl FixtureStore {
    pub fn new() -> Self {
        Self {
            restaurants: fixtures::sample_restaurants(),
            cuisines: fixtures::sample_cuisines(),
        }
    }
}

impl Default for FixtureStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogStore for FixtureStore {
    async fn all_restaurants(&self) -> AppResult<Vec<Restaurant>> {
        Ok(self.restaurants.clone())
    }

    async fn restaurant_by_id(&self, id: &str) -> AppResult<Option<Restaurant>> {
        Ok(self.restaurants.iter().find(|r| r.id == id).cloned())
    }

    async fn restaurant_by_name(&self, raw_name: &str) -> AppResult<Option<Restaurant>> {
        Ok(catalog::find_by_slug(&self.restaurants, raw_name).cloned())
    }

    async fn all_cuisines(&self) -> AppResult<Vec<Cuisine>> {
        Ok(self.cuisines.clone())
    }
}

/// Sqlite-backed document store. Restaurants embed their reviews and menu
/// items inside one JSON document per row; users embed their addresses.
pub struct SqliteCatalogStore {
    connection: ConnectionCache,
}

impl SqliteCatalogStore {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            connection: ConnectionCache::new(url),
        }
    }

    pub async fn init(&self) -> AppResult<()> {
        let pool = self.connection.acquire().await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS restaurants (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                doc BLOB NOT NULL,
                created INTEGER NOT NULL,
                updated INTEGER NOT NULL
            )",
        )
        .execute(&pool)
        .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY,
                email TEXT NOT NULL UNIQUE,
                doc BLOB NOT NULL,
                created INTEGER NOT NULL,
                updated INTEGER NOT NULL
            )",
        )
        .execute(&pool)
        .await?;

        Ok(())
    }

    /// Replace the entire restaurant catalog with the given records.
    /// Destructive and deliberately not transactional across the
    /// delete/insert pair: a failure between the two steps leaves the
    /// store empty. Records are validated up front so nothing malformed
    /// is ever persisted.
    pub async fn seed_restaurants(&self, restaurants: &[Restaurant]) -> AppResult<()> {
        for restaurant in restaurants {
            restaurant.validate()?;
        }

        let pool = self.connection.acquire().await?;
        let now = Utc::now().timestamp();

        if let Err(err) = sqlx::query("DELETE FROM restaurants").execute(&pool).await {
            self.connection.invalidate().await;
            return Err(err.into());
        }

        for restaurant in restaurants {
            let doc = serde_json::to_vec(restaurant)
                .map_err(|e| AppError::Internal(format!("Failed to encode document: {}", e)))?;
            let result = sqlx::query(
                "INSERT INTO restaurants (id, name, doc, created, updated)
                 VALUES (?, ?, ?, ?, ?)",
            )
            .bind(&restaurant.id)
            .bind(&restaurant.name)
            .bind(doc)
            .bind(now)
            .bind(now)
            .execute(&pool)
            .await;
            if let Err(err) = result {
                self.connection.invalidate().await;
                return Err(err.into());
            }
        }

        tracing::info!("Seeded {} restaurants", restaurants.len());
        Ok(())
    }

    /// Persist a user document, repairing the default-address invariant
    /// first. Write-only for now; no read path exposes users.
    pub async fn save_user(&self, user: &mut User) -> AppResult<()> {
        user.validate()?;
        user.repair_default_address();

        let pool = self.connection.acquire().await?;
        let now = Utc::now().timestamp();
        let doc = serde_json::to_vec(user)
            .map_err(|e| AppError::Internal(format!("Failed to encode document: {}", e)))?;

        let result = sqlx::query(
            "INSERT INTO users (id, email, doc, created, updated)
             VALUES (?, ?, ?, ?, ?)
             ON CONFLICT(id) DO UPDATE SET
                 email = excluded.email,
                 doc = excluded.doc,
                 updated = excluded.updated",
        )
        .bind(&user.id)
        .bind(&user.email)
        .bind(doc)
        .bind(now)
        .bind(now)
        .execute(&pool)
        .await;
        if let Err(err) = result {
            self.connection.invalidate().await;
            return Err(err.into());
        }
        Ok(())
    }

    fn decode(doc: &[u8]) -> AppResult<Restaurant> {
        serde_json::from_slice(doc)
            .map_err(|e| AppError::Internal(format!("Failed to decode document: {}", e)))
    }
}

#[async_trait]
impl CatalogStore for SqliteCatalogStore {
    async fn all_restaurants(&self) -> AppResult<Vec<Restaurant>> {
        let pool = self.connection.acquire().await?;
        let rows = match sqlx::query("SELECT doc FROM restaurants ORDER BY rowid")
            .fetch_all(&pool)
            .await
        {
            Ok(rows) => rows,
            Err(err) => {
                self.connection.invalidate().await;
                return Err(err.into());
            }
        };

        rows.iter()
            .map(|row| Self::decode(row.get::<&[u8], _>("doc")))
            .collect()
    }

    async fn restaurant_by_id(&self, id: &str) -> AppResult<Option<Restaurant>> {
        let pool = self.connection.acquire().await?;
        let row = match sqlx::query("SELECT doc FROM restaurants WHERE id = ?")
            .bind(id)
            .fetch_optional(&pool)
            .await
        {
            Ok(row) => row,
            Err(err) => {
                self.connection.invalidate().await;
                return Err(err.into());
            }
        };

        row.map(|row| Self::decode(row.get::<&[u8], _>("doc")))
            .transpose()
    }

    async fn restaurant_by_name(&self, raw_name: &str) -> AppResult<Option<Restaurant>> {
        // Slug normalization lives in Rust, not SQL, so the lookup stays
        // byte-for-byte consistent with the fixture store.
        let all = self.all_restaurants().await?;
        Ok(catalog::find_by_slug(&all, raw_name).cloned())
    }

    async fn all_cuisines(&self) -> AppResult<Vec<Cuisine>> {
        // The cuisine catalog is flat and independent of the restaurant
        // rows; it is not derived from their cuisine fields.
        Ok(fixtures::sample_cuisines())
    }
}
