//! Seed the database with demo stores and menu items.
//!
//! Inserts a small fixed data set for local development. Existing rows are
//! left alone, so the command is safe to re-run.

use secrecy::SecretString;
use sqlx::PgPool;
use tracing::info;

use stonefire_core::Price;
use stonefire_store::db::{self, MenuRepository, RepositoryError};
use stonefire_store::models::item::Item;

/// Errors that can occur while seeding.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

const DEMO_STORES: &[(i32, &str, &str, &str)] = &[
    (1, "3643 Canyon Crest Dr", "Riverside", "CA"),
    (2, "1201 University Ave", "Riverside", "CA"),
    (3, "402 W Mission Blvd", "Pomona", "CA"),
];

const DEMO_ITEMS: &[(&str, &str, &str, &str, &str)] = &[
    (
        "Cheese Pizza",
        "dough, tomato sauce, mozzarella",
        "entree",
        "9.50",
        "The classic.",
    ),
    (
        "Pepperoni Pizza",
        "dough, tomato sauce, mozzarella, pepperoni",
        "entree",
        "11.00",
        "House favorite.",
    ),
    (
        "Stonefire Special",
        "dough, tomato sauce, mozzarella, sausage, peppers, onion",
        "entree",
        "13.25",
        "Everything from the wood oven.",
    ),
    (
        "Garlic Knots",
        "dough, garlic, butter, parsley",
        "sides",
        "4.50",
        "Six per order.",
    ),
    ("Caesar Salad", "romaine, parmesan, croutons", "sides", "6.75", ""),
    ("Soda", "assorted cans", "drinks", "2.00", ""),
    ("Sparkling Water", "lightly carbonated", "drinks", "2.50", ""),
];

/// Insert the demo data set.
///
/// # Errors
///
/// Returns an error if environment variables are missing or a statement
/// fails.
pub async fn run() -> Result<(), SeedError> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("STONEFIRE_DATABASE_URL")
        .map(SecretString::from)
        .map_err(|_| SeedError::MissingEnvVar("STONEFIRE_DATABASE_URL"))?;

    let pool = db::create_pool(&database_url).await?;
    info!("Connected to database");

    let stores = seed_stores(&pool).await?;
    let (inserted, skipped) = seed_items(&pool).await?;

    info!("Seeding complete!");
    info!("  Stores inserted: {stores}");
    info!("  Items inserted: {inserted}");
    info!("  Items skipped (already exist): {skipped}");

    Ok(())
}

async fn seed_stores(pool: &PgPool) -> Result<u64, SeedError> {
    let mut inserted = 0;
    for (id, address, city, state) in DEMO_STORES {
        let result = sqlx::query(
            "INSERT INTO Store (storeID, address, city, state) VALUES ($1, $2, $3, $4) \
             ON CONFLICT (storeID) DO NOTHING",
        )
        .bind(id)
        .bind(address)
        .bind(city)
        .bind(state)
        .execute(pool)
        .await?;
        inserted += result.rows_affected();
    }
    Ok(inserted)
}

async fn seed_items(pool: &PgPool) -> Result<(u32, u32), SeedError> {
    let menu = MenuRepository::new(pool);
    let mut inserted = 0;
    let mut skipped = 0;

    for (name, ingredients, type_of_item, price, description) in DEMO_ITEMS {
        let item = Item {
            name: (*name).to_owned(),
            ingredients: (*ingredients).to_owned(),
            type_of_item: (*type_of_item).to_owned(),
            price: Price::parse(price).map_err(|e| {
                RepositoryError::DataCorruption(format!("bad seed price for {name}: {e}"))
            })?,
            description: (*description).to_owned(),
        };

        match menu.insert(&item).await {
            Ok(()) => inserted += 1,
            Err(RepositoryError::Conflict(_)) => skipped += 1,
            Err(e) => return Err(e.into()),
        }
    }

    Ok((inserted, skipped))
}
