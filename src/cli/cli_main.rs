use super::cli_examples::examples_menu;
use super::cli_settings::settings_menu;
use crate::Balancer::equation::{BalancedEquation, balance, balance_equation_str};
use crate::Balancer::errors::BalanceError;
use crate::Elements::reference_data::ReferenceData;
use crate::report::build_report;
use log::error;
use std::io::{self, Write};

pub fn run_interactive_menu(data: &ReferenceData) {
    loop {
        show_main_menu();
        let Some(choice) = get_user_input() else {
            break;
        };

        match choice.trim() {
            "1" => {
                let Some(reactants) = prompt("Reactants (e.g. H2+O2): ") else {
                    break;
                };
                let Some(products) = prompt("Products (e.g. H2O): ") else {
                    break;
                };
                print_result(balance(&reactants, &products), data);
            }
            "2" => {
                let Some(equation) = prompt("Equation (e.g. CH4 + O2 -> CO2 + H2O): ") else {
                    break;
                };
                print_result(balance_equation_str(&equation), data);
            }
            "3" => {
                let Some(symbols) = prompt("Element symbols separated by spaces: ") else {
                    break;
                };
                let symbols: Vec<String> =
                    symbols.split_whitespace().map(|s| s.to_string()).collect();
                data.pretty_print_properties(&symbols);
                let missing = data.missing_symbols(&symbols);
                if !missing.is_empty() {
                    println!("no reference data for: {}", missing.join(", "));
                }
            }
            "4" => examples_menu(data),
            "5" => settings_menu(),
            "0" => {
                println!("Goodbye!");
                break;
            }
            _ => println!("Invalid choice. Please try again."),
        }
    }
}

/// Prints the full report of a balanced equation, or the reason it has no unique balance
pub fn print_result(result: Result<BalancedEquation, BalanceError>, data: &ReferenceData) {
    match result {
        Ok(balanced) => build_report(balanced, data).pretty_print(data),
        Err(e) => {
            error!("{}", e);
            println!("\x1b[31m{}\x1b[0m", e);
        }
    }
}
/* colors
Blue (\x1b[34m) - Welcome header text

Yellow (\x1b[33m) - Menu options

Cyan (\x1b[36m) - "Enter your choice:" prompt

Red (\x1b[31m) - balancing errors

Reset (\x1b[0m) - Returns to normal color after each colored section
*/
fn show_main_menu() {
    println!("\x1b[34m\n ChemBalance: balancing of chemical equations \n \x1b[0m");
    println!("\x1b[33m1. Balance equation (reactants and products)\x1b[0m");
    println!("\x1b[33m2. Balance one-line equation\x1b[0m");
    println!("\x1b[33m3. Element properties\x1b[0m");
    println!("\x1b[33m4. Examples\x1b[0m");
    println!("\x1b[33m5. Settings\x1b[0m");
    println!("\x1b[33m0. Exit\x1b[0m");
    print!("\x1b[36mEnter your choice: \x1b[0m");
    let _ = io::stdout().flush();
}

fn prompt(message: &str) -> Option<String> {
    print!("\x1b[36m{}\x1b[0m", message);
    let _ = io::stdout().flush();
    get_user_input()
}

/// one line from stdin, None at end of input
pub(crate) fn get_user_input() -> Option<String> {
    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) => None,
        Ok(_) => Some(input),
        Err(e) => {
            error!("failed to read input: {}", e);
            None
        }
    }
}
