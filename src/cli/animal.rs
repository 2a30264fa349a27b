//! Animal CLI commands

use clap::Subcommand;

use crate::display::format_animal_list;
use crate::error::{CorralError, CorralResult};
use crate::models::AnimalType;
use crate::services::AnimalService;
use crate::storage::Storage;

/// Animal subcommands
#[derive(Subcommand)]
pub enum AnimalCommands {
    /// Register a new animal
    Register {
        /// Animal name
        name: String,
        /// Animal type (horse, donkey, pig)
        #[arg(short = 't', long = "type")]
        animal_type: String,
    },
    /// List available animals
    List {
        /// Include rented animals
        #[arg(short, long)]
        all: bool,
    },
}

/// Handle an animal command
pub fn handle_animal_command(storage: &Storage, cmd: AnimalCommands) -> CorralResult<()> {
    let service = AnimalService::new(storage);

    match cmd {
        AnimalCommands::Register { name, animal_type } => {
            let animal_type = AnimalType::parse(&animal_type).ok_or_else(|| {
                CorralError::Validation(format!(
                    "Invalid animal type: '{}'. Valid types: horse, donkey, pig",
                    animal_type
                ))
            })?;

            let animal = service.register(&name, animal_type)?;

            println!("Registered animal: {}", animal.name);
            println!("  Type: {}", animal.animal_type);
            println!("  Status: {}", animal.status);
            println!(
                "  ID: {}",
                animal.id.map_or_else(|| "-".to_string(), |id| id.to_string())
            );
        }

        AnimalCommands::List { all } => {
            let animals = if all {
                service.list_all()?
            } else {
                service.list_available()?
            };
            print!("{}", format_animal_list(&animals));
        }
    }

    Ok(())
}
