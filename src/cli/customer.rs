//! Customer CLI commands

use clap::Subcommand;

use crate::display::format_customer_list;
use crate::error::CorralResult;
use crate::services::CustomerService;
use crate::storage::Storage;

/// Customer subcommands
#[derive(Subcommand)]
pub enum CustomerCommands {
    /// Register a new customer
    Register {
        /// Full name of the customer
        full_name: String,
    },
    /// List all customers
    List,
}

/// Handle a customer command
pub fn handle_customer_command(storage: &Storage, cmd: CustomerCommands) -> CorralResult<()> {
    let service = CustomerService::new(storage);

    match cmd {
        CustomerCommands::Register { full_name } => {
            let customer = service.register(&full_name)?;

            println!("Registered customer: {}", customer.full_name);
            println!(
                "  ID: {}",
                customer
                    .id
                    .map_or_else(|| "-".to_string(), |id| id.to_string())
            );
        }

        CustomerCommands::List => {
            let customers = service.list_all()?;
            print!("{}", format_customer_list(&customers));
        }
    }

    Ok(())
}
