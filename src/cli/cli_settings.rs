use super::cli_main::get_user_input;
use crate::library_manager::{LibraryManager, with_library_manager, with_library_manager_mut};
use log::{info, warn};
use std::io::{self, Write};

/// settings editable from the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting {
    ElementsBase,
    LogLevel,
    Defaults,
}

/// Applies one setting to the manager and saves it. A new log level is applied at once,
/// a new dataset is used from the next start
pub fn apply_setting(
    manager: &mut LibraryManager,
    setting: Setting,
    value: &str,
) -> Result<(), String> {
    let value = value.trim();
    let result = match setting {
        Setting::ElementsBase => manager.set_elements_base(value),
        Setting::LogLevel => manager.set_log_level(value),
        Setting::Defaults => manager.reset_to_defaults(),
    };
    result.map_err(|e| e.to_string())?;
    log::set_max_level(manager.log_level());
    info!("settings saved to '{}'", manager.config_file());
    Ok(())
}

pub fn settings_menu() {
    loop {
        let config = with_library_manager(|manager| manager.get_config().clone());
        println!("\n=== Settings ===");
        println!("element data: {}", config.elements_base);
        println!("log level: {}", config.log_level);
        println!("1. Element data file (used from the next start)");
        println!("2. Log level (off, error, warn, info, debug, trace)");
        println!("3. Reset to defaults");
        println!("0. Back to main menu");
        print!("Enter your choice: ");
        let _ = io::stdout().flush();

        let Some(choice) = get_user_input() else {
            break;
        };
        let setting = match choice.trim() {
            "1" => Setting::ElementsBase,
            "2" => Setting::LogLevel,
            "3" => Setting::Defaults,
            "0" => break,
            _ => {
                println!("Invalid choice. Please try again.");
                continue;
            }
        };
        let value = if setting == Setting::Defaults {
            String::new()
        } else {
            print!("New value: ");
            let _ = io::stdout().flush();
            let Some(value) = get_user_input() else {
                break;
            };
            value
        };
        if let Err(e) = with_library_manager_mut(|manager| apply_setting(manager, setting, &value)) {
            warn!("setting not changed: {}", e);
            println!("\x1b[31m{}\x1b[0m", e);
        }
    }
}
