//! Baksho CLI - Grocery storefront demo and management tools.
//!
//! Drives the storefront engine end to end from the terminal. Cart,
//! session, language, and banner state persist between invocations
//! through the JSON snapshot storage in `BAKSHO_DATA_DIR`, so adding to
//! the cart in one invocation and checking out in the next behaves like
//! a page refresh in the browser build.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog
//! baksho products list --category fruits --sort price-low
//!
//! # Build a cart and check out
//! baksho cart add 2 --quantity 3
//! baksho cart show
//! baksho auth login -e demo@example.com -p password123
//! baksho checkout
//!
//! # Back-office
//! baksho dashboard
//! baksho banners list --all
//! ```
//!
//! # Environment Variables
//!
//! - `BAKSHO_DATA_DIR` - Snapshot directory (default: `.baksho`)
//! - `BAKSHO_API_LATENCY_MS` - Simulated network delay (default: 250)

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

use baksho_core::{BannerId, Category, Language, ProductId, SortKey};
use baksho_storefront::config::StorefrontConfig;
use baksho_storefront::state::AppState;

mod commands;

#[derive(Parser)]
#[command(name = "baksho")]
#[command(author, version, about = "Baksho grocery storefront CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the product catalog
    Products {
        #[command(subcommand)]
        action: ProductsAction,
    },
    /// Manage the shopping cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Check out the current cart
    Checkout {
        /// Street line; defaults to the session's default address
        #[arg(long)]
        street: Option<String>,

        /// City; defaults to the session's default address
        #[arg(long)]
        city: Option<String>,

        /// State; defaults to the session's default address
        #[arg(long)]
        state: Option<String>,

        /// Postal code; defaults to the session's default address
        #[arg(long)]
        zip: Option<String>,

        /// Payment method label
        #[arg(long, default_value = "card")]
        payment: String,
    },
    /// Sign in, register, and inspect the session
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },
    /// View order history
    Orders {
        #[command(subcommand)]
        action: OrdersAction,
    },
    /// Manage promotional banners
    Banners {
        #[command(subcommand)]
        action: BannersAction,
    },
    /// Get or set the display language
    Lang {
        #[command(subcommand)]
        action: LangAction,
    },
    /// Print back-office dashboard aggregates
    Dashboard,
}

#[derive(Subcommand)]
enum ProductsAction {
    /// List products
    List {
        /// 1-based page number
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Page size
        #[arg(long, default_value_t = 12)]
        limit: usize,

        /// Search by name or id
        #[arg(long)]
        search: Option<String>,

        /// Filter to one category
        #[arg(long)]
        category: Option<Category>,

        /// Sort order (`price-low`, `price-high`, `name-az`, `newest`)
        #[arg(long, default_value = "newest")]
        sort: SortKey,
    },
    /// Show one product
    Show {
        /// Product id
        id: i32,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Add a product to the cart
    Add {
        /// Product id
        product_id: i32,

        /// Units to add
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Remove a product from the cart
    Remove {
        /// Product id
        product_id: i32,
    },
    /// Set a line's quantity exactly (0 removes it)
    Update {
        /// Product id
        product_id: i32,

        /// New quantity
        quantity: u32,
    },
    /// Print the cart with derived totals
    Show,
    /// Empty the cart
    Clear,
}

#[derive(Subcommand)]
enum AuthAction {
    /// Sign in
    Login {
        /// Account email
        #[arg(short, long)]
        email: String,

        /// Account password
        #[arg(short, long)]
        password: String,
    },
    /// Create an account and sign in
    Register {
        /// Account email
        #[arg(short, long)]
        email: String,

        /// Account password
        #[arg(short, long)]
        password: String,

        /// First name
        #[arg(long)]
        first_name: String,

        /// Last name
        #[arg(long)]
        last_name: String,

        /// Contact phone
        #[arg(long, default_value = "")]
        phone: String,
    },
    /// Sign out
    Logout,
    /// Print the active session
    Whoami,
}

#[derive(Subcommand)]
enum OrdersAction {
    /// List the signed-in user's orders
    List,
    /// Show one order
    Show {
        /// Order id (e.g. ORD-2026-001)
        id: String,
    },
}

#[derive(Subcommand)]
enum BannersAction {
    /// List banners (active only by default)
    List {
        /// Include inactive banners
        #[arg(long)]
        all: bool,
    },
    /// Flip a banner's active flag
    Toggle {
        /// Banner id
        id: BannerId,
    },
}

#[derive(Subcommand)]
enum LangAction {
    /// Print the selected language
    Get,
    /// Select a language (`EN`, `BN`, `DE`)
    Set {
        /// Language code
        code: Language,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;
    let mut state = AppState::new(config);

    match cli.command {
        Commands::Products { action } => match action {
            ProductsAction::List {
                page,
                limit,
                search,
                category,
                sort,
            } => commands::catalog::list(&state, page, limit, search, category, sort).await?,
            ProductsAction::Show { id } => {
                commands::catalog::show(&state, ProductId::new(id)).await?;
            }
        },
        Commands::Cart { action } => match action {
            CartAction::Add {
                product_id,
                quantity,
            } => commands::cart::add(&mut state, ProductId::new(product_id), quantity).await?,
            CartAction::Remove { product_id } => {
                commands::cart::remove(&mut state, ProductId::new(product_id))?;
            }
            CartAction::Update {
                product_id,
                quantity,
            } => commands::cart::update(&mut state, ProductId::new(product_id), quantity)?,
            CartAction::Show => commands::cart::show(&state)?,
            CartAction::Clear => commands::cart::clear(&mut state)?,
        },
        Commands::Checkout {
            street,
            city,
            state: region,
            zip,
            payment,
        } => commands::cart::checkout(&mut state, street, city, region, zip, payment).await?,
        Commands::Auth { action } => match action {
            AuthAction::Login { email, password } => {
                commands::account::login(&mut state, &email, &password).await?;
            }
            AuthAction::Register {
                email,
                password,
                first_name,
                last_name,
                phone,
            } => {
                commands::account::register(&mut state, email, password, first_name, last_name, phone)
                    .await?;
            }
            AuthAction::Logout => commands::account::logout(&mut state)?,
            AuthAction::Whoami => commands::account::whoami(&state)?,
        },
        Commands::Orders { action } => match action {
            OrdersAction::List => commands::account::orders(&state).await?,
            OrdersAction::Show { id } => commands::account::order(&state, &id.into()).await?,
        },
        Commands::Banners { action } => match action {
            BannersAction::List { all } => commands::backoffice::banners(&state, all)?,
            BannersAction::Toggle { id } => commands::backoffice::toggle_banner(&mut state, id)?,
        },
        Commands::Lang { action } => match action {
            LangAction::Get => commands::account::language(&state)?,
            LangAction::Set { code } => commands::account::set_language(&mut state, code)?,
        },
        Commands::Dashboard => commands::backoffice::dashboard(&state).await?,
    }
    Ok(())
}
