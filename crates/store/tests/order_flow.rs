//! Integration tests for the store services.
//!
//! These tests require:
//! - A running `PostgreSQL` with the Stonefire schema applied
//!   (`cargo run -p stonefire-cli -- migrate`)
//! - `STONEFIRE_TEST_DATABASE_URL` pointing at it
//!
//! They are `#[ignore]`d so `cargo test` passes without a database.
//! Run them with: `cargo test -p stonefire-store -- --ignored`

#![allow(clippy::unwrap_used)]

use std::time::{SystemTime, UNIX_EPOCH};

use sqlx::PgPool;

use stonefire_core::{OrderStatus, Price, Role, StoreId};
use stonefire_store::error::AppError;
use stonefire_store::models::item::{Item, MenuFilter, PriceOrder};
use stonefire_store::models::order::Cart;
use stonefire_store::models::session::CurrentUser;
use stonefire_store::services::auth::Signup;
use stonefire_store::services::{AuthService, CatalogService, OrderService};

async fn test_pool() -> PgPool {
    let url = std::env::var("STONEFIRE_TEST_DATABASE_URL")
        .expect("STONEFIRE_TEST_DATABASE_URL must point at a migrated test database");
    PgPool::connect(&url).await.expect("failed to connect")
}

/// A short unique suffix so tests don't collide across runs.
fn unique(prefix: &str) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("{prefix}{nanos}")
}

async fn sign_up_user(pool: &PgPool, prefix: &str, role: Role) -> CurrentUser {
    let auth = AuthService::new(pool);
    let login = unique(prefix);
    auth.sign_up(Signup {
        login: login.clone(),
        password: "hunter2".to_owned(),
        role: role.to_string(),
        favorite_items: String::new(),
        phone_num: "555-0100".to_owned(),
    })
    .await
    .expect("signup failed");

    auth.log_in(&login, "hunter2").await.expect("login failed")
}

/// Insert a store row directly; locations are read-only through the app.
async fn seed_store(pool: &PgPool) -> StoreId {
    let id = i32::try_from(
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos()
            % 1_000_000_000,
    )
    .unwrap();

    // A rare id collision across runs is fine; the row just needs to exist.
    sqlx::query(
        "INSERT INTO Store (storeID, address, city, state) VALUES ($1, $2, $3, $4) \
         ON CONFLICT (storeID) DO NOTHING",
    )
        .bind(id)
        .bind("1 Test Way")
        .bind("Riverside")
        .bind("CA")
        .execute(pool)
        .await
        .expect("store insert failed");

    StoreId::new(id)
}

async fn seed_item(pool: &PgPool, manager: &CurrentUser, name: &str, price: &str) {
    CatalogService::new(pool)
        .add_item(
            manager,
            &Item {
                name: name.to_owned(),
                ingredients: "test".to_owned(),
                type_of_item: "entree".to_owned(),
                price: Price::parse(price).unwrap(),
                description: String::new(),
            },
        )
        .await
        .expect("item insert failed");
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn signup_then_login_returns_same_identity() {
    let pool = test_pool().await;
    let auth = AuthService::new(&pool);

    let login = unique("it_auth_");
    auth.sign_up(Signup {
        login: login.clone(),
        password: "secret".to_owned(),
        role: "Customer".to_owned(),
        favorite_items: "Cheese Pizza".to_owned(),
        phone_num: "555-0101".to_owned(),
    })
    .await
    .expect("signup failed");

    let session = auth.log_in(&login, "secret").await.expect("login failed");
    assert_eq!(session.login.as_str(), login);
    assert_eq!(session.role, Role::Customer);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn login_with_wrong_password_fails() {
    let pool = test_pool().await;
    let auth = AuthService::new(&pool);

    let session = sign_up_user(&pool, "it_badpw_", Role::Customer).await;

    let result = auth.log_in(session.login.as_str(), "not-the-password").await;
    assert!(result.is_err());
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn placing_order_persists_total_and_lines() {
    let pool = test_pool().await;
    let orders = OrderService::new(&pool);

    let manager = sign_up_user(&pool, "it_mgr_", Role::Manager).await;
    let customer = sign_up_user(&pool, "it_cust_", Role::Customer).await;
    let store_id = seed_store(&pool).await;

    let item_a = unique("it_item_a_");
    let item_b = unique("it_item_b_");
    seed_item(&pool, &manager, &item_a, "5.00").await;
    seed_item(&pool, &manager, &item_b, "3.00").await;

    let mut cart = Cart::new();
    cart.add(&item_a, 2, Price::parse("5.00").unwrap());
    cart.add(&item_b, 1, Price::parse("3.00").unwrap());

    let placed = orders
        .place(&customer, store_id, &cart)
        .await
        .expect("placement failed");
    assert_eq!(placed.total.to_string(), "13.00");

    let (header, lines) = orders
        .order_info(&customer, placed.order_id)
        .await
        .expect("order info failed");
    assert_eq!(header.total_price.to_string(), "13.00");
    assert_eq!(header.order_status, OrderStatus::Placed);
    assert_eq!(header.login, customer.login);
    assert_eq!(lines.len(), 2);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn empty_cart_persists_nothing() {
    let pool = test_pool().await;
    let orders = OrderService::new(&pool);

    let customer = sign_up_user(&pool, "it_empty_", Role::Customer).await;
    let store_id = seed_store(&pool).await;

    let result = orders.place(&customer, store_id, &Cart::new()).await;
    assert!(matches!(result, Err(AppError::InvalidInput(_))));

    let ids = orders.order_ids(&customer).await.expect("history failed");
    assert!(ids.is_empty());
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn customer_history_never_shows_other_users_orders() {
    let pool = test_pool().await;
    let orders = OrderService::new(&pool);

    let manager = sign_up_user(&pool, "it_mgr2_", Role::Manager).await;
    let alice = sign_up_user(&pool, "it_alice_", Role::Customer).await;
    let bob = sign_up_user(&pool, "it_bob_", Role::Customer).await;
    let store_id = seed_store(&pool).await;

    let item = unique("it_item_h_");
    seed_item(&pool, &manager, &item, "4.50").await;

    let mut cart = Cart::new();
    cart.add(&item, 1, Price::parse("4.50").unwrap());

    let alice_order = orders.place(&alice, store_id, &cart).await.expect("placement");
    let bob_order = orders.place(&bob, store_id, &cart).await.expect("placement");

    let alice_ids = orders.order_ids(&alice).await.expect("history");
    assert!(alice_ids.contains(&alice_order.order_id));
    assert!(!alice_ids.contains(&bob_order.order_id));

    // A manager sees both.
    let all_ids = orders.order_ids(&manager).await.expect("history");
    assert!(all_ids.contains(&alice_order.order_id));
    assert!(all_ids.contains(&bob_order.order_id));

    // A customer cannot read another customer's order detail.
    let denied = orders.order_info(&alice, bob_order.order_id).await;
    assert!(matches!(denied, Err(AppError::AccessDenied(_))));
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn status_update_is_role_gated() {
    let pool = test_pool().await;
    let orders = OrderService::new(&pool);

    let manager = sign_up_user(&pool, "it_mgr3_", Role::Manager).await;
    let driver = sign_up_user(&pool, "it_drv_", Role::Driver).await;
    let customer = sign_up_user(&pool, "it_cust3_", Role::Customer).await;
    let store_id = seed_store(&pool).await;

    let item = unique("it_item_s_");
    seed_item(&pool, &manager, &item, "2.00").await;

    let mut cart = Cart::new();
    cart.add(&item, 1, Price::parse("2.00").unwrap());
    let placed = orders.place(&customer, store_id, &cart).await.expect("placement");

    // Customer denied, status unchanged.
    let denied = orders
        .update_status(&customer, placed.order_id, OrderStatus::Complete)
        .await;
    assert!(matches!(denied, Err(AppError::AccessDenied(_))));
    let (header, _) = orders.order_info(&customer, placed.order_id).await.expect("info");
    assert_eq!(header.order_status, OrderStatus::Placed);

    // Driver allowed.
    orders
        .update_status(&driver, placed.order_id, OrderStatus::InProgress)
        .await
        .expect("driver update failed");
    let (header, _) = orders.order_info(&driver, placed.order_id).await.expect("info");
    assert_eq!(header.order_status, OrderStatus::InProgress);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn menu_price_sorts_are_exact_reverses() {
    let pool = test_pool().await;
    let catalog = CatalogService::new(&pool);

    let manager = sign_up_user(&pool, "it_mgr4_", Role::Manager).await;
    seed_item(&pool, &manager, &unique("it_sort_a_"), "1.25").await;
    seed_item(&pool, &manager, &unique("it_sort_b_"), "9.75").await;
    seed_item(&pool, &manager, &unique("it_sort_c_"), "9.75").await;

    let ascending = catalog
        .browse(&MenuFilter::ByPrice(PriceOrder::LowestFirst))
        .await
        .expect("browse failed");
    let descending = catalog
        .browse(&MenuFilter::ByPrice(PriceOrder::HighestFirst))
        .await
        .expect("browse failed");

    let mut reversed: Vec<String> = descending.into_iter().map(|i| i.name).collect();
    reversed.reverse();
    let ascending: Vec<String> = ascending.into_iter().map(|i| i.name).collect();
    assert_eq!(ascending, reversed);
}
