//! Isle Runtime
//!
//! Interactive shell for the survival backpack. The shell owns all
//! prompting, parsing, and formatting; the store itself lives in
//! `isle_inventory` and only ever sees validated values.
//!
//! Run with: cargo run -p isle_runtime
//!       or: cargo run --bin isle

mod input;
mod menu;
mod table;

use isle_inventory::Backpack;
use menu::MenuAction;

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("isle runtime starting");

    let mut pack = Backpack::new();

    loop {
        menu::print_menu();

        // End of input counts as quitting.
        let Some(choice) = input::prompt("Choose an option: ") else {
            break;
        };
        let Some(action) = menu::parse_choice(&choice) else {
            println!("Invalid option. Try again.");
            continue;
        };

        if action == MenuAction::Quit {
            break;
        }
        menu::dispatch(action, &mut pack);
    }

    println!("Leaving... good luck out there!");
    log::info!("isle runtime exiting with {} items carried", pack.len());
}
