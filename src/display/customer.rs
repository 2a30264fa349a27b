//! Customer display formatting

use crate::models::Customer;

/// Format a list of customers as a table
pub fn format_customer_list(customers: &[Customer]) -> String {
    if customers.is_empty() {
        return "No customers found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!("{:>4}  {}\n", "ID", "Name"));
    output.push_str(&format!("{:->4}  {:-<30}\n", "", ""));

    for customer in customers {
        let id = customer
            .id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "-".to_string());

        output.push_str(&format!("{:>4}  {}\n", id, customer.full_name));
    }

    output
}
