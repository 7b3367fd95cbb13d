//! Royal Cafe CLI - drive the local cart from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Show the cart
//! royal-cafe show
//!
//! # Add one unit of an item
//! royal-cafe add Latte 15
//!
//! # Change or remove a line
//! royal-cafe set-qty 1718000000123 3
//! royal-cafe remove 1718000000123
//!
//! # Place the order
//! royal-cafe checkout --name "Sara" --phone "0551234567" --address "Olaya St"
//! ```
//!
//! The cart file location and currency come from the same environment
//! variables as the storefront (`STOREFRONT_DATA_DIR`, `STOREFRONT_CURRENCY`).

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

use royal_cafe_storefront::checkout::CheckoutForm;
use royal_cafe_storefront::config::StorefrontConfig;

mod commands;

#[derive(Parser)]
#[command(name = "royal-cafe")]
#[command(author, version, about = "Royal Cafe cart tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the cart
    Show,
    /// Add one unit of an item
    Add {
        /// Item name as it appears on the menu
        name: String,
        /// Unit price
        price: String,
    },
    /// Remove a cart line
    Remove {
        /// Line id (see `show`)
        id: i64,
    },
    /// Set the quantity of a cart line (values below 1 become 1)
    SetQty {
        /// Line id (see `show`)
        id: i64,
        /// New quantity
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Empty the cart
    Clear,
    /// Place the order and empty the cart
    Checkout {
        /// Customer name
        #[arg(short, long)]
        name: String,

        /// Contact phone number
        #[arg(short, long)]
        phone: String,

        /// Delivery address
        #[arg(short, long)]
        address: String,

        /// Order notes
        #[arg(long, default_value = "")]
        notes: String,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;
    let mut cart = commands::cart::open(&config.data_dir, config.currency);

    match cli.command {
        Commands::Show => {}
        Commands::Add { name, price } => commands::cart::add(&mut cart, &name, &price)?,
        Commands::Remove { id } => commands::cart::remove(&mut cart, id),
        Commands::SetQty { id, quantity } => {
            commands::cart::set_quantity(&mut cart, id, quantity);
        }
        Commands::Clear => commands::cart::clear(&mut cart),
        Commands::Checkout {
            name,
            phone,
            address,
            notes,
        } => {
            commands::cart::checkout(
                &mut cart,
                CheckoutForm {
                    name,
                    phone,
                    address,
                    notes,
                },
            )?;
        }
    }

    commands::cart::show(&cart);
    Ok(())
}
