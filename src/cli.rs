/// interactive menu of the balancer
pub mod cli_main;
/// examples submenu
pub mod cli_examples;
/// dataset path and log level
pub mod cli_settings;
