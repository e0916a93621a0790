use crate::Elements::element_properties::ElementProperties;
use log::{error, info, warn};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

pub struct LoadData {
    pub file_name: String,
}

impl LoadData {
    pub fn new(file_name: String) -> Self {
        LoadData { file_name }
    }
    pub fn load_elements(&self) -> Result<Vec<ElementProperties>, String> {
        load_and_validate_elements(&self.file_name)
    }
}

/// Reads the element reference dataset: a JSON array of rows, one row per element.
/// On a JSON error the problematic line is logged with a pointer to the column
pub fn load_elements_from_file(file_name: &str) -> Result<Vec<ElementProperties>, String> {
    let path = Path::new(file_name);
    if !path.exists() {
        return Err(format!("File '{}' does not exist", file_name));
    }

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => return Err(format!("Failed to open file '{}': {}", file_name, e)),
    };
    if content.trim().is_empty() {
        return Err(format!("File '{}' is empty", file_name));
    }

    match serde_json::from_str::<Vec<ElementProperties>>(&content) {
        Ok(data) => {
            info!(
                "Successfully parsed {} elements from file '{}'",
                data.len(),
                file_name
            );
            Ok(data)
        }
        Err(e) => {
            let error_line = e.line();
            let error_column = e.column();
            let error_msg = format!(
                "Error parsing element data at line {}, column {} in file '{}': {}",
                error_line, error_column, file_name, e
            );
            error!("{}", error_msg);

            if let Some(problem_line) = content.lines().nth(error_line.saturating_sub(1)) {
                error!("Problematic line: {}", problem_line);
                if error_column >= 1 && error_column <= problem_line.len() {
                    let pointer = " ".repeat(error_column - 1) + "^";
                    error!("{}", pointer);
                }
            }
            Err(error_msg)
        }
    }
}

/// Loads the dataset and checks it: at least one row, every symbol non-empty and unique
pub fn load_and_validate_elements(file_name: &str) -> Result<Vec<ElementProperties>, String> {
    let elements = load_elements_from_file(file_name)?;
    validate_elements(&elements).map_err(|e| format!("{} (file '{}')", e, file_name))?;

    for element in &elements {
        if element.electronegativity.is_none()
            || element.atomic_radius.is_none()
            || element.density.is_none()
        {
            warn!(
                "Element '{}' has missing properties, empty cells will be shown",
                element.symbol
            );
        }
    }
    info!(
        "Loaded and validated element data from file '{}'",
        file_name
    );
    Ok(elements)
}

pub fn validate_elements(elements: &[ElementProperties]) -> Result<(), String> {
    if elements.is_empty() {
        return Err("element data contains no rows".to_string());
    }
    let mut seen = HashSet::new();
    for element in elements {
        if element.symbol.trim().is_empty() {
            return Err(format!(
                "element with atomic number {} has an empty symbol",
                element.atomic_number
            ));
        }
        if !seen.insert(element.symbol.as_str()) {
            return Err(format!("symbol '{}' occurs more than once", element.symbol));
        }
    }
    Ok(())
}
