use shared_types::*;
use std::fs;
use std::path::Path;
use ts_rs::TS;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Generate TypeScript definitions for API types
    let types = vec![
        clean_type(Contact::export_to_string()?),
        clean_type(CreateContactRequest::export_to_string()?),
        clean_type(ContactsResponse::export_to_string()?),
        clean_type(ContactListItem::export_to_string()?),
        clean_type(ContactListResponse::export_to_string()?),
        clean_type(ContactDetails::export_to_string()?),
        clean_type(FieldErrorsResponse::export_to_string()?),
        clean_type(SheetState::export_to_string()?),
        clean_type(ErrorResponse::export_to_string()?),
    ];

    let output_dir = Path::new("../gui/src/api-types");
    fs::create_dir_all(output_dir)?;

    let output_path = output_dir.join("types.ts");
    let output = types.join("\n\n");

    fs::write(&output_path, output)?;
    println!("Generated TypeScript types in {}", output_path.display());

    Ok(())
}

fn clean_type(mut type_def: String) -> String {
    type_def.retain(|c| c != '\r');

    // All types land in one file, so cross-type imports are dropped
    let filtered: Vec<&str> = type_def
        .lines()
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.starts_with("import type")
                && !trimmed.starts_with("// This file was generated")
                && !trimmed.starts_with("/* This file was generated")
        })
        .collect();

    let result = filtered.join("\n").trim().to_string();
    if result.is_empty() {
        result
    } else {
        format!("{}\n", result)
    }
}
