//! Shopfront - terminal storefront for the shop API.
//!
//! Renders the product catalog, manages a server-side cart, and submits
//! checkout requests. Three mutually exclusive views (Home, Cart, Order);
//! every command is a one-shot request/render cycle against the API.
//!
//! # Usage
//!
//! ```bash
//! # Against the default API origin (http://127.0.0.1:8000)
//! shopfront
//!
//! # Against another origin
//! shopfront --base-url http://shop.internal:9000
//! ```
//!
//! # Commands
//!
//! - `home` / `back` - show the catalog
//! - `browse [category]` - reload the catalog, optionally filtered
//! - `cart` - show and reload the cart
//! - `add <product-id> [quantity]` - add a product (quantity defaults to 1)
//! - `remove <item-id>` - remove a cart line
//! - `checkout` - create an order from the cart
//! - `help`, `quit`

#![cfg_attr(not(test), forbid(unsafe_code))]

mod app;
mod panels;
mod surface;
mod view;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use shopfront_client::{ClientConfig, ShopClient, StoreApi};
use shopfront_core::{CartItemId, ProductId};

use app::App;
use surface::{Surface, TerminalSurface};

#[derive(Parser)]
#[command(name = "shopfront")]
#[command(author, version, about = "Terminal storefront for the shop API")]
struct Args {
    /// Base URL of the shop API (overrides SHOPFRONT_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Identity sent as user_id (overrides SHOPFRONT_USER_ID)
    #[arg(long)]
    user_id: Option<String>,
}

/// One line of user input, parsed.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Home,
    Browse { category: Option<String> },
    Cart,
    Add { product_id: ProductId, quantity: u32 },
    Remove { item_id: CartItemId },
    Checkout,
    Back,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let mut parts = line.split_whitespace();
    let Some(word) = parts.next() else {
        return Ok(None);
    };
    let command = match word {
        "home" => Command::Home,
        "browse" => Command::Browse {
            category: parts.next().map(str::to_string),
        },
        "cart" => Command::Cart,
        "add" => {
            let product_id = parts
                .next()
                .ok_or_else(|| "usage: add <product-id> [quantity]".to_string())?
                .into();
            let quantity = match parts.next() {
                Some(raw) => raw
                    .parse()
                    .map_err(|_| format!("invalid quantity: {raw}"))?,
                None => 1,
            };
            Command::Add {
                product_id,
                quantity,
            }
        }
        "remove" => Command::Remove {
            item_id: parts
                .next()
                .ok_or_else(|| "usage: remove <item-id>".to_string())?
                .into(),
        },
        "checkout" => Command::Checkout,
        "back" => Command::Back,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(format!("unknown command: {other} (try 'help')")),
    };
    Ok(Some(command))
}

async fn dispatch<A: StoreApi, S: Surface>(app: &mut App<A, S>, command: Command) {
    match command {
        Command::Home | Command::Back => app.go_home(),
        Command::Browse { category } => {
            app.show_home();
            app.load_products(category.as_deref()).await;
        }
        Command::Cart => app.go_cart().await,
        Command::Add {
            product_id,
            quantity,
        } => app.add_to_cart(&product_id, quantity).await,
        Command::Remove { item_id } => app.remove_from_cart(&item_id).await,
        Command::Checkout => app.checkout().await,
        Command::Help => print_help(),
        // Handled by the command loop.
        Command::Quit => {}
    }
}

/// Read commands line by line; each one runs to completion before the next
/// is accepted, so no two operations are ever in flight at once.
async fn run<A: StoreApi, S: Surface>(app: &mut App<A, S>) -> std::io::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    print_help();
    prompt();
    while let Some(line) = lines.next_line().await? {
        match parse_command(&line) {
            Ok(None) => {}
            Ok(Some(Command::Quit)) => break,
            Ok(Some(command)) => dispatch(app, command).await,
            Err(message) => print_note(&message),
        }
        prompt();
    }
    Ok(())
}

// Interactive output belongs on stdout; tracing stays on stderr.
#[allow(clippy::print_stdout)]
fn print_help() {
    println!("commands: home | browse [category] | cart | add <product-id> [quantity]");
    println!("          remove <item-id> | checkout | back | help | quit");
}

#[allow(clippy::print_stdout)]
fn print_note(text: &str) {
    println!("  {text}");
}

#[allow(clippy::print_stdout)]
fn prompt() {
    use std::io::Write;
    print!("> ");
    let _ = std::io::stdout().flush();
}

#[tokio::main]
async fn main() {
    // Default to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "shopfront_app=info,shopfront_client=info".into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = ClientConfig::from_env().expect("Failed to load configuration");
    if let Some(base_url) = args.base_url {
        config = config
            .with_base_url(&base_url)
            .expect("Invalid --base-url");
    }
    if let Some(user_id) = args.user_id {
        config.user_id = user_id;
    }

    let client = ShopClient::new(&config);
    if let Err(e) = client.health().await {
        tracing::warn!("shop API health check failed: {e}");
    }

    let mut app = App::new(client, TerminalSurface::new());
    app.start().await;

    if let Err(e) = run(&mut app).await {
        tracing::error!("input loop failed: {e}");
        std::process::exit(1);
    }
}
