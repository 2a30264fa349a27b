//! Rental display formatting

use crate::models::Rental;

/// Format a list of rentals as a table
///
/// `date_format` is the user's strftime preference from settings.
pub fn format_rental_list(rentals: &[Rental], date_format: &str) -> String {
    if rentals.is_empty() {
        return "No rentals found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:>4}  {:>6}  {:>8}  {:<10}  {:<16}  {}\n",
        "ID", "Animal", "Customer", "Type", "Started", "Ended",
    ));
    output.push_str(&format!(
        "{:->4}  {:->6}  {:->8}  {:-<10}  {:-<16}  {:-<16}\n",
        "", "", "", "", "", "",
    ));

    for rental in rentals {
        let id = rental
            .id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "-".to_string());
        let ended = match rental.end_time {
            Some(end) => end.format(date_format).to_string(),
            None => "active".to_string(),
        };

        output.push_str(&format!(
            "{:>4}  {:>6}  {:>8}  {:<10}  {:<16}  {}\n",
            id,
            rental.animal_id.to_string(),
            rental.customer_id.to_string(),
            rental.rental_type.to_string(),
            rental.start_time.format(date_format).to_string(),
            ended,
        ));
    }

    output
}
