//! Application state for the terminal shell.
//!
//! The shell is a set of navigable screens over the store services. It
//! carries its own session state; every gated call hands the services the
//! authenticated identity.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use sqlx::PgPool;

use stonefire_core::{OrderId, StoreId};
use stonefire_store::models::item::{Item, MenuFilter};
use stonefire_store::models::order::Cart;
use stonefire_store::models::session::CurrentUser;
use stonefire_store::services::auth::Signup;
use stonefire_store::services::{AuthService, CatalogService, OrderService};

/// Current screen being displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Entry page with login/signup navigation.
    Home,
    Login,
    Signup,
    /// Post-login navigation page.
    Welcome,
    Menu,
    PlaceOrder,
    OrderHistory,
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Home => write!(f, "Stonefire Pizza"),
            Self::Login => write!(f, "Log In"),
            Self::Signup => write!(f, "Sign Up"),
            Self::Welcome => write!(f, "Welcome"),
            Self::Menu => write!(f, "Menu"),
            Self::PlaceOrder => write!(f, "Place Order"),
            Self::OrderHistory => write!(f, "Order History"),
        }
    }
}

/// A labelled text input on a form screen.
#[derive(Debug, Clone)]
pub struct FormField {
    pub label: &'static str,
    pub value: String,
    /// Render the value as asterisks.
    pub mask: bool,
}

impl FormField {
    fn text(label: &'static str) -> Self {
        Self {
            label,
            value: String::new(),
            mask: false,
        }
    }

    fn password(label: &'static str) -> Self {
        Self {
            label,
            value: String::new(),
            mask: true,
        }
    }
}

/// Terminal shell application state.
pub struct App {
    pool: PgPool,
    pub screen: Screen,
    pub session: Option<CurrentUser>,
    pub fields: Vec<FormField>,
    pub focus: usize,
    pub menu_items: Vec<Item>,
    pub order_ids: Vec<OrderId>,
    pub cart: Cart,
    /// One-line status or error shown in the footer.
    pub status: Option<String>,
    pub running: bool,
}

impl App {
    /// Create the app on the home screen.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            screen: Screen::Home,
            session: None,
            fields: Vec::new(),
            focus: 0,
            menu_items: Vec::new(),
            order_ids: Vec::new(),
            cart: Cart::new(),
            status: None,
            running: true,
        }
    }

    /// Switch screens, resetting form state for the target.
    pub fn goto(&mut self, screen: Screen) {
        self.focus = 0;
        self.fields = match screen {
            Screen::Login => vec![
                FormField::text("Username"),
                FormField::password("Password"),
            ],
            Screen::Signup => vec![
                FormField::text("Username"),
                FormField::password("Password"),
                FormField::text("Phone number"),
                FormField::text("Role (Customer, Manager, Driver)"),
                FormField::text("Favorite item"),
            ],
            Screen::PlaceOrder => {
                self.cart = Cart::new();
                vec![
                    FormField::text("Store ID"),
                    FormField::text("Item name"),
                    FormField::text("Quantity"),
                ]
            }
            _ => Vec::new(),
        };
        self.screen = screen;
    }

    fn field_value(&self, index: usize) -> String {
        self.fields
            .get(index)
            .map(|f| f.value.clone())
            .unwrap_or_default()
    }

    fn focus_next(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + 1) % self.fields.len();
        }
    }

    fn focus_previous(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
        }
    }

    /// Handle one key event for the current screen.
    pub async fn handle_key(&mut self, key: KeyEvent) {
        match self.screen {
            Screen::Home => match key.code {
                KeyCode::Char('1') => self.goto(Screen::Login),
                KeyCode::Char('2') => self.goto(Screen::Signup),
                KeyCode::Char('q') | KeyCode::Esc => self.running = false,
                _ => {}
            },
            Screen::Welcome => match key.code {
                KeyCode::Char('1') => {
                    self.load_menu().await;
                    self.goto(Screen::Menu);
                }
                KeyCode::Char('2') => self.goto(Screen::PlaceOrder),
                KeyCode::Char('3') => {
                    self.load_orders().await;
                    self.goto(Screen::OrderHistory);
                }
                KeyCode::Char('4') => {
                    self.session = None;
                    self.status = Some("Logged out.".to_owned());
                    self.goto(Screen::Home);
                }
                KeyCode::Char('q') => self.running = false,
                _ => {}
            },
            Screen::Menu | Screen::OrderHistory => match key.code {
                KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => {
                    self.goto(Screen::Welcome);
                }
                KeyCode::Char('q') => self.running = false,
                _ => {}
            },
            Screen::Login | Screen::Signup | Screen::PlaceOrder => {
                self.handle_form_key(key).await;
            }
        }
    }

    async fn handle_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                let back = if self.screen == Screen::PlaceOrder {
                    Screen::Welcome
                } else {
                    Screen::Home
                };
                self.goto(back);
            }
            KeyCode::Tab | KeyCode::Down => self.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.focus_previous(),
            KeyCode::Backspace => {
                if let Some(field) = self.fields.get_mut(self.focus) {
                    field.value.pop();
                }
            }
            KeyCode::Enter => match self.screen {
                Screen::Login => self.submit_login().await,
                Screen::Signup => self.submit_signup().await,
                Screen::PlaceOrder => self.add_cart_line().await,
                _ => {}
            },
            KeyCode::Char('s')
                if key.modifiers.contains(KeyModifiers::CONTROL)
                    && self.screen == Screen::PlaceOrder =>
            {
                self.submit_order().await;
            }
            KeyCode::Char(c) => {
                if let Some(field) = self.fields.get_mut(self.focus) {
                    field.value.push(c);
                }
            }
            _ => {}
        }
    }

    async fn submit_login(&mut self) {
        let username = self.field_value(0);
        let password = self.field_value(1);

        match AuthService::new(&self.pool).log_in(&username, &password).await {
            Ok(session) => {
                self.status = Some(format!("Login successful. Welcome, {}!", session.login));
                self.session = Some(session);
                self.goto(Screen::Welcome);
            }
            Err(_) => {
                self.status = Some("Invalid credentials. Please try again.".to_owned());
            }
        }
    }

    async fn submit_signup(&mut self) {
        let signup = Signup {
            login: self.field_value(0),
            password: self.field_value(1),
            phone_num: self.field_value(2),
            role: self.field_value(3),
            favorite_items: self.field_value(4),
        };

        match AuthService::new(&self.pool).sign_up(signup).await {
            Ok(login) => {
                self.status = Some(format!("Account created for {login}. Please log in."));
                self.goto(Screen::Login);
            }
            Err(e) => self.status = Some(format!("Error: {e}")),
        }
    }

    async fn load_menu(&mut self) {
        match CatalogService::new(&self.pool).browse(&MenuFilter::All).await {
            Ok(items) => self.menu_items = items,
            Err(e) => self.status = Some(format!("Error: {e}")),
        }
    }

    async fn load_orders(&mut self) {
        let Some(session) = self.session.clone() else {
            return;
        };
        match OrderService::new(&self.pool).order_ids(&session).await {
            Ok(ids) => self.order_ids = ids,
            Err(e) => self.status = Some(format!("Error: {e}")),
        }
    }

    async fn add_cart_line(&mut self) {
        let item_name = self.field_value(1);
        let item_name = item_name.trim().to_owned();
        let quantity_raw = self.field_value(2);

        if item_name.is_empty() {
            self.status = Some("Enter an item name.".to_owned());
            return;
        }

        let Ok(quantity) = quantity_raw.trim().parse::<i32>() else {
            self.status = Some("Quantity must be a positive whole number.".to_owned());
            return;
        };
        if quantity <= 0 {
            self.status = Some("Quantity must be a positive whole number.".to_owned());
            return;
        }

        match CatalogService::new(&self.pool).price_of(&item_name).await {
            Ok(Some(price)) => {
                self.cart.add(&item_name, quantity, price);
                self.status = Some(format!(
                    "Added {item_name} x{quantity}. Running total: ${}",
                    self.cart.total()
                ));
                for field in self.fields.iter_mut().skip(1) {
                    field.value.clear();
                }
                self.focus = 1;
            }
            Ok(None) => self.status = Some("Item not found. Please try again.".to_owned()),
            Err(e) => self.status = Some(format!("Error: {e}")),
        }
    }

    async fn submit_order(&mut self) {
        let Some(session) = self.session.clone() else {
            return;
        };

        let Ok(store_id) = self.field_value(0).parse::<StoreId>() else {
            self.status = Some("Store ID must be a number.".to_owned());
            return;
        };

        if self.cart.is_empty() {
            self.status = Some("No items in the order.".to_owned());
            return;
        }

        match OrderService::new(&self.pool)
            .place(&session, store_id, &self.cart)
            .await
        {
            Ok(placed) => {
                self.status = Some(format!(
                    "Order {} placed. Total: ${}",
                    placed.order_id, placed.total
                ));
                self.goto(Screen::Welcome);
            }
            Err(e) => self.status = Some(format!("Error: {e}")),
        }
    }
}
