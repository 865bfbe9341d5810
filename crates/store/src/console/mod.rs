//! Console shell: a two-level numbered menu over the domain services.
//!
//! The outer loop offers account creation, login, and exit; the inner loop
//! appears after a successful login and runs until logout. Every operation
//! is an isolated unit of work: its errors are reported as one line and
//! control returns to the menu.

pub mod prompt;

use std::io;

use sqlx::PgPool;

use stonefire_core::{Login, OrderId, OrderStatus, Price, StoreId};

use crate::error::AppError;
use crate::models::item::{Item, MenuFilter, PriceOrder};
use crate::models::order::Cart;
use crate::models::session::CurrentUser;
use crate::models::user::UserUpdate;
use crate::services::auth::{AuthError, Signup};
use crate::services::{
    AccountService, AuthService, CatalogService, OrderService, StoreService,
};

/// Print the session banner.
pub fn greeting() {
    println!();
    println!("*******************************************************");
    println!("                 Stonefire Pizza");
    println!("*******************************************************");
    println!();
}

/// Report an operation result, printing a one-line error on failure.
fn report<T>(result: crate::error::Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            println!("Error: {e}");
            None
        }
    }
}

/// Run the console shell until the user exits.
///
/// # Errors
///
/// Returns an error only if the console itself fails (e.g. stdin closes);
/// operation failures are reported inline and never propagate.
pub async fn run(pool: &PgPool) -> io::Result<()> {
    greeting();

    loop {
        println!("MAIN MENU");
        println!("---------");
        println!("1. Create account");
        println!("2. Log in");
        println!("9. < EXIT");

        match prompt::read_choice()? {
            1 => create_account(pool).await?,
            2 => {
                if let Some(session) = log_in(pool).await? {
                    session_menu(pool, &session).await?;
                }
            }
            9 => break,
            _ => println!("Unrecognized choice!"),
        }
    }

    Ok(())
}

async fn create_account(pool: &PgPool) -> io::Result<()> {
    let login = prompt::read_line("Enter username: ")?;
    let password = prompt::read_line("Enter password: ")?;
    let phone_num = prompt::read_line("Enter phone number: ")?;
    let role = prompt::read_line("Enter your role (Customer, Manager, Driver): ")?;
    let favorite_items = prompt::read_line("Enter your favorite item: ")?;

    let signup = Signup {
        login,
        password,
        role,
        favorite_items,
        phone_num,
    };

    if report(AuthService::new(pool).sign_up(signup).await.map_err(AppError::from)).is_some() {
        println!("User successfully created!");
    }

    Ok(())
}

async fn log_in(pool: &PgPool) -> io::Result<Option<CurrentUser>> {
    let login = prompt::read_line("Enter username: ")?;
    let password = prompt::read_line("Enter password: ")?;

    match AuthService::new(pool).log_in(&login, &password).await {
        Ok(session) => {
            println!("Login successful. Welcome, {}!", session.login);
            Ok(Some(session))
        }
        Err(AuthError::InvalidCredentials) => {
            println!("Invalid credentials. Please try again.");
            Ok(None)
        }
        Err(e) => {
            println!("Error: {e}");
            Ok(None)
        }
    }
}

async fn session_menu(pool: &PgPool, session: &CurrentUser) -> io::Result<()> {
    loop {
        println!("MAIN MENU");
        println!("---------");
        println!("1. View Profile");
        println!("2. Update Profile");
        println!("3. View Menu");
        println!("4. Place Order");
        println!("5. View Full Order ID History");
        println!("6. View Past 5 Order IDs");
        println!("7. View Order Information");
        println!("8. View Stores");
        if session.role.can_update_order_status() {
            println!("9. Update Order Status");
        }
        if session.role.is_manager() {
            println!("10. Update Menu");
            println!("11. Update User");
        }
        println!(".........................");
        println!("20. Log out");

        match prompt::read_choice()? {
            1 => view_profile(pool, session).await?,
            2 => update_profile(pool, session).await?,
            3 => view_menu(pool).await?,
            4 => place_order(pool, session).await?,
            5 => view_all_orders(pool, session).await?,
            6 => view_recent_orders(pool, session).await?,
            7 => view_order_info(pool, session).await?,
            8 => view_stores(pool).await?,
            9 => update_order_status(pool, session).await?,
            10 => update_menu(pool, session).await?,
            11 => update_user(pool, session).await?,
            20 => break,
            _ => println!("Unrecognized choice!"),
        }
    }

    Ok(())
}

async fn view_profile(pool: &PgPool, session: &CurrentUser) -> io::Result<()> {
    if let Some(user) = report(AccountService::new(pool).profile(session).await) {
        println!("Profile Details:");
        println!("Username: {}", user.login);
        println!("Role: {}", user.role);
        println!("Favorite Items: {}", user.favorite_items);
        println!("Phone Number: {}", user.phone_num);
    }
    Ok(())
}

async fn update_profile(pool: &PgPool, session: &CurrentUser) -> io::Result<()> {
    let accounts = AccountService::new(pool);

    println!("What would you like to update?");
    println!("1. Favorite Items");
    println!("2. Phone Number");
    println!("3. Password");

    match prompt::read_choice()? {
        1 => {
            let items = prompt::read_line("Enter your new favorite items: ")?;
            if report(accounts.update_favorite_items(session, &items).await).is_some() {
                println!("Favorite items updated successfully.");
            }
        }
        2 => {
            let phone = prompt::read_line("Enter your new phone number: ")?;
            if report(accounts.update_phone(session, &phone).await).is_some() {
                println!("Phone number updated successfully.");
            }
        }
        3 => {
            let password = prompt::read_line("Enter your new password: ")?;
            if report(accounts.update_password(session, &password).await).is_some() {
                println!("Password updated successfully.");
            }
        }
        _ => println!("Unrecognized choice!"),
    }

    Ok(())
}

fn print_items(items: &[Item]) {
    if items.is_empty() {
        println!("No items found.");
        return;
    }

    println!("{:<28} {:>8}  {:<12}", "ITEM", "PRICE", "TYPE");
    for item in items {
        println!(
            "{:<28} {:>8}  {:<12}",
            item.name,
            format!("${}", item.price),
            item.type_of_item
        );
        println!("    {} -- {}", item.ingredients, item.description);
    }
}

async fn view_menu(pool: &PgPool) -> io::Result<()> {
    let catalog = CatalogService::new(pool);

    println!("View Menu Options:");
    println!("1. View all items");
    println!("2. Filter by type");
    println!("3. Filter by price");
    println!("4. Sort by price");

    let filter = match prompt::read_choice()? {
        1 => MenuFilter::All,
        2 => {
            let category = prompt::read_line("Enter type of item (e.g., drinks, sides): ")?;
            MenuFilter::Category(category)
        }
        3 => {
            let raw = prompt::read_line("Enter maximum price: ")?;
            match Price::parse(&raw) {
                Ok(limit) => MenuFilter::MaxPrice(limit),
                Err(e) => {
                    println!("Error: invalid input: {e}");
                    return Ok(());
                }
            }
        }
        4 => {
            println!("Sort by price:");
            println!("1. Lowest to Highest");
            println!("2. Highest to Lowest");
            let order = if prompt::read_choice()? == 2 {
                PriceOrder::HighestFirst
            } else {
                PriceOrder::LowestFirst
            };
            MenuFilter::ByPrice(order)
        }
        _ => {
            println!("Unrecognized choice!");
            return Ok(());
        }
    };

    if let Some(items) = report(catalog.browse(&filter).await) {
        print_items(&items);
    }

    Ok(())
}

async fn place_order(pool: &PgPool, session: &CurrentUser) -> io::Result<()> {
    let catalog = CatalogService::new(pool);

    let raw = prompt::read_line("Enter store ID: ")?;
    let Ok(store_id) = raw.parse::<StoreId>() else {
        println!("Error: invalid input: store ID must be a number");
        return Ok(());
    };

    let mut cart = Cart::new();
    loop {
        let item_name = prompt::read_line("Enter item name (or 'done' to finish): ")?;
        let item_name = item_name.trim();
        if item_name.eq_ignore_ascii_case("done") {
            break;
        }

        let quantity_raw = prompt::read_line("Enter quantity: ")?;
        let Ok(quantity) = quantity_raw.trim().parse::<i32>() else {
            println!("Quantity must be a positive whole number.");
            continue;
        };
        if quantity <= 0 {
            println!("Quantity must be a positive whole number.");
            continue;
        }

        match report(catalog.price_of(item_name).await) {
            Some(Some(price)) => {
                cart.add(item_name, quantity, price);
                println!("Added. Running total: ${}", cart.total());
            }
            Some(None) => println!("Item not found. Please try again."),
            None => {}
        }
    }

    if cart.is_empty() {
        println!("No items in the order. Aborting.");
        return Ok(());
    }

    if let Some(placed) = report(OrderService::new(pool).place(session, store_id, &cart).await) {
        println!("Order placed successfully!");
        println!("Order ID: {}", placed.order_id);
        println!("Total Price: ${}", placed.total);
    }

    Ok(())
}

fn print_order_ids(ids: &[OrderId]) {
    if ids.is_empty() {
        println!("No orders found.");
        return;
    }
    println!("Order IDs:");
    for id in ids {
        println!("{id}");
    }
}

async fn view_all_orders(pool: &PgPool, session: &CurrentUser) -> io::Result<()> {
    if let Some(ids) = report(OrderService::new(pool).order_ids(session).await) {
        print_order_ids(&ids);
    }
    Ok(())
}

async fn view_recent_orders(pool: &PgPool, session: &CurrentUser) -> io::Result<()> {
    if let Some(ids) = report(OrderService::new(pool).recent_order_ids(session).await) {
        print_order_ids(&ids);
    }
    Ok(())
}

async fn view_order_info(pool: &PgPool, session: &CurrentUser) -> io::Result<()> {
    let raw = prompt::read_line("Enter the order ID: ")?;
    let Ok(order_id) = raw.parse::<OrderId>() else {
        println!("Error: invalid input: order ID must be a number");
        return Ok(());
    };

    if let Some((order, lines)) = report(OrderService::new(pool).order_info(session, order_id).await)
    {
        println!("Order {}", order.order_id);
        println!("Placed by: {}", order.login);
        println!("Store: {}", order.store_id);
        println!("Status: {}", order.order_status);
        println!("Placed at: {}", order.order_timestamp);
        println!("Total Price: ${}", order.total_price);
        println!("Items:");
        for line in &lines {
            println!("  {} x{}", line.item_name, line.quantity);
        }
    }

    Ok(())
}

async fn view_stores(pool: &PgPool) -> io::Result<()> {
    if let Some(stores) = report(StoreService::new(pool).list().await) {
        if stores.is_empty() {
            println!("No stores found.");
        } else {
            println!("{:<8} {:<30} {:<20} {:<6}", "ID", "ADDRESS", "CITY", "STATE");
            for store in &stores {
                println!(
                    "{:<8} {:<30} {:<20} {:<6}",
                    store.store_id, store.address, store.city, store.state
                );
            }
        }
    }
    Ok(())
}

async fn update_order_status(pool: &PgPool, session: &CurrentUser) -> io::Result<()> {
    let raw = prompt::read_line("Enter the order ID: ")?;
    let Ok(order_id) = raw.parse::<OrderId>() else {
        println!("Error: invalid input: order ID must be a number");
        return Ok(());
    };

    let raw = prompt::read_line("Enter the new order status (incomplete, in progress, or complete): ")?;
    let Ok(status) = raw.parse::<OrderStatus>() else {
        println!("Error: invalid input: unknown order status");
        return Ok(());
    };

    if report(OrderService::new(pool).update_status(session, order_id, status).await).is_some() {
        println!("Order status updated successfully!");
    }

    Ok(())
}

fn read_item_fields() -> io::Result<Option<Item>> {
    let name = prompt::read_line("Enter the item name: ")?;
    let ingredients = prompt::read_line("Enter the ingredients: ")?;
    let type_of_item = prompt::read_line("Enter the type of item (e.g., drinks, sides): ")?
        .trim()
        .to_lowercase();
    let price_raw = prompt::read_line("Enter the price: ")?;
    let price = match Price::parse(&price_raw) {
        Ok(price) => price,
        Err(e) => {
            println!("Error: invalid input: {e}");
            return Ok(None);
        }
    };
    let description = prompt::read_line("Enter the description: ")?;

    Ok(Some(Item {
        name,
        ingredients,
        type_of_item,
        price,
        description,
    }))
}

async fn update_menu(pool: &PgPool, session: &CurrentUser) -> io::Result<()> {
    let catalog = CatalogService::new(pool);

    println!("What would you like to update?");
    println!("1. Update existing item");
    println!("2. Add item");

    match prompt::read_choice()? {
        1 => {
            let existing = prompt::read_line("Enter the existing item name: ")?;
            let Some(item) = read_item_fields()? else {
                return Ok(());
            };
            if report(catalog.update_item(session, &existing, &item).await).is_some() {
                println!("Menu updated successfully.");
            }
        }
        2 => {
            let Some(item) = read_item_fields()? else {
                return Ok(());
            };
            if report(catalog.add_item(session, &item).await).is_some() {
                println!("Menu updated successfully.");
            }
        }
        _ => println!("Unrecognized choice!"),
    }

    Ok(())
}

async fn update_user(pool: &PgPool, session: &CurrentUser) -> io::Result<()> {
    let accounts = AccountService::new(pool);

    let raw = prompt::read_line("Enter the username to update: ")?;
    let target = match Login::parse(&raw) {
        Ok(target) => target,
        Err(e) => {
            println!("Error: invalid input: {e}");
            return Ok(());
        }
    };

    println!("1. Change role");
    println!("2. Change password");
    println!("3. Change phone number");
    println!("4. Change favorite items");
    println!("5. Change username");

    let update = match prompt::read_choice()? {
        1 => {
            let raw = prompt::read_line("Enter the new role (Customer, Manager, Driver): ")?;
            match raw.parse() {
                Ok(role) => UserUpdate::Role(role),
                Err(_) => {
                    println!("Error: invalid input: unknown role");
                    return Ok(());
                }
            }
        }
        2 => UserUpdate::Password(prompt::read_line("Enter the new password: ")?),
        3 => UserUpdate::PhoneNum(prompt::read_line("Enter the new phone number: ")?),
        4 => UserUpdate::FavoriteItems(prompt::read_line("Enter the new favorite items: ")?),
        5 => {
            let raw = prompt::read_line("Enter the new username: ")?;
            match Login::parse(&raw) {
                Ok(new_login) => UserUpdate::Login(new_login),
                Err(e) => {
                    println!("Error: invalid input: {e}");
                    return Ok(());
                }
            }
        }
        _ => {
            println!("Unrecognized choice!");
            return Ok(());
        }
    };

    if report(accounts.update_user(session, &target, update).await).is_some() {
        println!("User updated successfully!");
    }

    Ok(())
}
