//! Screen rendering with ratatui.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use crate::app::{App, Screen};

/// Render the full frame.
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Content
            Constraint::Length(2), // Footer
        ])
        .split(f.area());

    draw_header(f, app, chunks[0]);
    draw_content(f, app, chunks[1]);
    draw_footer(f, app, chunks[2]);
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(app.screen.to_string())
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::BOTTOM))
        .alignment(Alignment::Center);

    f.render_widget(header, area);
}

fn draw_content(f: &mut Frame, app: &App, area: Rect) {
    match app.screen {
        Screen::Home => draw_home(f, area),
        Screen::Welcome => draw_welcome(f, app, area),
        Screen::Login | Screen::Signup => draw_form(f, app, area),
        Screen::PlaceOrder => draw_place_order(f, app, area),
        Screen::Menu => draw_menu(f, app, area),
        Screen::OrderHistory => draw_order_history(f, app, area),
    }
}

fn draw_home(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from("1. Log in"),
        Line::from("2. Sign up"),
        Line::from("q. Quit"),
    ];
    let page = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(page, area);
}

fn draw_welcome(f: &mut Frame, app: &App, area: Rect) {
    let who = app
        .session
        .as_ref()
        .map(|s| format!("Welcome, {}!", s.login))
        .unwrap_or_default();

    let lines = vec![
        Line::from(""),
        Line::from(who),
        Line::from(""),
        Line::from("1. View Menu"),
        Line::from("2. Place Order"),
        Line::from("3. View Orders"),
        Line::from("4. Log out"),
    ];
    let page = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(page, area);
}

fn draw_form(f: &mut Frame, app: &App, area: Rect) {
    let constraints: Vec<Constraint> = app
        .fields
        .iter()
        .map(|_| Constraint::Length(3))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(constraints)
        .split(area);

    for (i, field) in app.fields.iter().enumerate() {
        let style = if i == app.focus {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };

        let shown = if field.mask {
            "*".repeat(field.value.len())
        } else {
            field.value.clone()
        };

        let widget = Paragraph::new(shown).block(
            Block::default()
                .title(field.label)
                .borders(Borders::ALL)
                .border_style(style),
        );

        if let Some(rect) = rows.get(i) {
            f.render_widget(widget, *rect);
        }
    }
}

fn draw_place_order(f: &mut Frame, app: &App, area: Rect) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    draw_form(f, app, halves[0]);

    let mut lines: Vec<ListItem> = app
        .cart
        .lines()
        .iter()
        .map(|l| ListItem::new(format!("{} x{}  (${})", l.item_name, l.quantity, l.line_total())))
        .collect();
    lines.push(ListItem::new(format!("Total: ${}", app.cart.total())));

    let cart = List::new(lines).block(Block::default().title(" Cart ").borders(Borders::ALL));
    f.render_widget(cart, halves[1]);
}

fn draw_menu(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .menu_items
        .iter()
        .map(|item| {
            ListItem::new(format!(
                "{:<28} ${:>7}  [{}]",
                item.name,
                item.price.to_string(),
                item.type_of_item
            ))
        })
        .collect();

    let list = List::new(items).block(Block::default().title(" Menu ").borders(Borders::ALL));
    f.render_widget(list, area);
}

fn draw_order_history(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .order_ids
        .iter()
        .map(|id| ListItem::new(format!("Order {id}")))
        .collect();

    let list = List::new(items).block(Block::default().title(" Orders ").borders(Borders::ALL));
    f.render_widget(list, area);
}

fn draw_footer(f: &mut Frame, app: &App, area: Rect) {
    let hints = match app.screen {
        Screen::Home => "1/2 navigate | q quit",
        Screen::Welcome => "1-4 navigate | q quit",
        Screen::Login | Screen::Signup => "Tab next field | Enter submit | Esc back",
        Screen::PlaceOrder => "Enter add item | Ctrl-S place order | Esc back",
        Screen::Menu | Screen::OrderHistory => "Esc back",
    };

    let text = app
        .status
        .clone()
        .unwrap_or_else(|| hints.to_owned());

    let footer = Paragraph::new(text).style(Style::default().fg(Color::Gray));
    f.render_widget(footer, area);
}
