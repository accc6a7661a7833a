// One-shot seeder: destructively replaces the restaurant catalog in the
// configured sqlite document store with the fixed seed list.

use tracing_subscriber::EnvFilter;

use foodie_express::{config::Config, store::fixtures, store::SqliteCatalogStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    let store = SqliteCatalogStore::new(&config.database.url);
    store.init().await?;

    let restaurants = fixtures::seed_restaurants();
    store.seed_restaurants(&restaurants).await?;

    println!("Successfully seeded {} restaurants!", restaurants.len());
    for restaurant in &restaurants {
        println!("{}: {}", restaurant.name, restaurant.id);
    }

    Ok(())
}
