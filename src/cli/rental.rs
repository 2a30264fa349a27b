//! Rental CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_rental_list;
use crate::error::{CorralError, CorralResult};
use crate::models::{AnimalId, CustomerId, RentalId, RentalType};
use crate::services::RentalService;
use crate::storage::Storage;

/// Rental subcommands
#[derive(Subcommand)]
pub enum RentalCommands {
    /// Start a rental for an animal and customer
    Start {
        /// Animal ID
        animal_id: String,
        /// Customer ID
        customer_id: String,
        /// Rental type (short-ride, hourly); defaults to the configured type
        #[arg(short = 't', long = "type")]
        rental_type: Option<String>,
    },
    /// Finish a rental and return the animal
    Finish {
        /// Rental ID
        rental_id: String,
    },
    /// List all rentals
    List,
}

/// Handle a rental command
pub fn handle_rental_command(
    storage: &Storage,
    settings: &Settings,
    cmd: RentalCommands,
) -> CorralResult<()> {
    let service = RentalService::new(storage);

    match cmd {
        RentalCommands::Start {
            animal_id,
            customer_id,
            rental_type,
        } => {
            let animal_id: AnimalId = animal_id
                .parse()
                .map_err(|_| CorralError::Validation(format!("Invalid animal id: '{}'", animal_id)))?;
            let customer_id: CustomerId = customer_id.parse().map_err(|_| {
                CorralError::Validation(format!("Invalid customer id: '{}'", customer_id))
            })?;

            let rental_type = match rental_type {
                Some(raw) => RentalType::parse(&raw).ok_or_else(|| {
                    CorralError::Validation(format!(
                        "Invalid rental type: '{}'. Valid types: short-ride, hourly",
                        raw
                    ))
                })?,
                None => settings.default_rental_type,
            };

            let rental = service.start(animal_id, customer_id, rental_type)?;

            println!(
                "Started rental: {}",
                rental.id.map_or_else(|| "-".to_string(), |id| id.to_string())
            );
            println!("  Animal: {}", rental.animal_id);
            println!("  Customer: {}", rental.customer_id);
            println!("  Type: {}", rental.rental_type);
            println!(
                "  Started: {}",
                rental.start_time.format(&settings.date_format)
            );
        }

        RentalCommands::Finish { rental_id } => {
            let rental_id: RentalId = rental_id
                .parse()
                .map_err(|_| CorralError::Validation(format!("Invalid rental id: '{}'", rental_id)))?;

            let rental = service.finish(rental_id)?;

            let ended = rental
                .end_time
                .map(|end| end.format(&settings.date_format).to_string())
                .unwrap_or_default();

            println!(
                "Finished rental {}: animal {} is available again (ended {})",
                rental.id.map_or_else(|| "-".to_string(), |id| id.to_string()),
                rental.animal_id,
                ended
            );
        }

        RentalCommands::List => {
            let rentals = service.list_all()?;
            print!("{}", format_rental_list(&rentals, &settings.date_format));
        }
    }

    Ok(())
}
