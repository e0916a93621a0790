use ChemBalance::Balancer::equation::{balance, balance_equation_str};
use ChemBalance::Elements::reference_data::init_reference_data;
use ChemBalance::cli::cli_main::{print_result, run_interactive_menu};
use ChemBalance::library_manager::with_library_manager;
use log::error;
use simplelog::{Config, SimpleLogger};
use std::process;

pub fn main() {
    let (elements_base, level) = with_library_manager(|manager| {
        (manager.elements_base_path().to_string(), manager.log_level())
    });
    if let Err(e) = SimpleLogger::init(level, Config::default()) {
        eprintln!("logger is not initialised: {}", e);
    }

    // no request is served without the reference data
    let data = match init_reference_data(&elements_base) {
        Ok(data) => data,
        Err(e) => {
            error!("{}", e);
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.as_slice() {
        [] => run_interactive_menu(data),
        [equation] => print_result(balance_equation_str(equation), data),
        [reactants, products] => print_result(balance(reactants, products), data),
        _ => {
            eprintln!("usage: ChemBalance [\"<reactants>\" \"<products>\" | \"<equation>\"]");
            process::exit(2);
        }
    }
}
