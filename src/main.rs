use anyhow::Result;
use clap::{Parser, Subcommand};

use corral::cli::{
    handle_animal_command, handle_customer_command, handle_rental_command, AnimalCommands,
    CustomerCommands, RentalCommands,
};
use corral::config::{paths::CorralPaths, settings::Settings};
use corral::storage::Storage;

#[derive(Parser)]
#[command(
    name = "corral",
    author = "Marcos Herrera",
    version,
    about = "Terminal-based rental management for small animal farms",
    long_about = "corral tracks rentable animals, customers, and rentals for a \
                  small farm. It makes sure an animal is never rented out to \
                  two customers at once."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Animal management commands
    #[command(subcommand)]
    Animal(AnimalCommands),

    /// Customer management commands
    #[command(subcommand)]
    Customer(CustomerCommands),

    /// Rental management commands
    #[command(subcommand)]
    Rental(RentalCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = CorralPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Animal(cmd)) => {
            handle_animal_command(&storage, cmd)?;
        }
        Some(Commands::Customer(cmd)) => {
            handle_customer_command(&storage, cmd)?;
        }
        Some(Commands::Rental(cmd)) => {
            handle_rental_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Config) => {
            println!("corral Configuration");
            println!("====================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!();
            println!("Settings:");
            println!("  Default rental type: {}", settings.default_rental_type);
            println!("  Date format: {}", settings.date_format);
        }
        None => {
            println!("corral - Terminal-based rental management for small animal farms");
            println!();
            println!("Run 'corral --help' for usage information.");
        }
    }

    Ok(())
}
