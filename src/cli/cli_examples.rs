use super::cli_main::get_user_input;
use crate::Elements::reference_data::ReferenceData;
use crate::Examples::balance_examples::balance_examples;
use std::io::{self, Write};

pub fn examples_menu(data: &ReferenceData) {
    loop {
        println!("\n=== Examples ===");
        println!("1. Combustion of propane with full report");
        println!("2. Formulas with groups and brackets");
        println!("3. One-line equations with state marks");
        println!("4. Equations without a unique balance");
        println!("5. Null space of the stoichiometric matrix");
        println!("6. Element properties");
        println!("0. Back to main menu");
        print!("Enter your choice: ");
        let _ = io::stdout().flush();

        let Some(choice) = get_user_input() else {
            break;
        };
        match choice.trim() {
            "0" => break,
            other => match other.parse::<usize>() {
                Ok(n) if (1..=6).contains(&n) => balance_examples(n - 1, data),
                _ => println!("Invalid choice. Please try again."),
            },
        }
    }
}
