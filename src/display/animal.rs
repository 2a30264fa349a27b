//! Animal display formatting
//!
//! Formats animals for terminal output in table form.

use crate::models::Animal;

/// Format a list of animals as a table
pub fn format_animal_list(animals: &[Animal]) -> String {
    if animals.is_empty() {
        return "No animals found.\n".to_string();
    }

    let name_width = animals
        .iter()
        .map(|a| a.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:>4}  {:<name_width$}  {:<8}  {}\n",
        "ID",
        "Name",
        "Type",
        "Status",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:->4}  {:-<name_width$}  {:-<8}  {:-<9}\n",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for animal in animals {
        let id = animal
            .id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "-".to_string());

        output.push_str(&format!(
            "{:>4}  {:<name_width$}  {:<8}  {}\n",
            id,
            animal.name,
            animal.animal_type.to_string(),
            animal.status,
            name_width = name_width,
        ));
    }

    output
}
