//! Menu actions and their handlers
//!
//! Each handler prompts for what it needs, calls one store operation, and
//! reports the result. The store is never touched when input validation
//! fails.

use crate::input;
use crate::table;
use isle_inventory::{Backpack, BackpackError, Item, SortKey};

/// One selectable menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Add an item
    AddItem,
    /// Remove an item by name
    RemoveItem,
    /// List all items
    ListItems,
    /// Linear search by name
    SearchLinear,
    /// Sort by a chosen criterion
    Sort,
    /// Binary search by name
    SearchBinary,
    /// Leave the shell
    Quit,
}

/// Parse a menu choice
pub fn parse_choice(raw: &str) -> Option<MenuAction> {
    match raw.trim() {
        "1" => Some(MenuAction::AddItem),
        "2" => Some(MenuAction::RemoveItem),
        "3" => Some(MenuAction::ListItems),
        "4" => Some(MenuAction::SearchLinear),
        "5" => Some(MenuAction::Sort),
        "6" => Some(MenuAction::SearchBinary),
        "0" => Some(MenuAction::Quit),
        _ => None,
    }
}

/// Parse a sort criterion choice
pub fn parse_sort_key(raw: &str) -> Option<SortKey> {
    match raw.trim() {
        "1" => Some(SortKey::Name),
        "2" => Some(SortKey::Kind),
        "3" => Some(SortKey::Priority),
        _ => None,
    }
}

/// Print the main menu
pub fn print_menu() {
    println!();
    println!(
        "=== Island Backpack (capacity: {} items) ===",
        Backpack::CAPACITY
    );
    println!("1. Add item");
    println!("2. Remove item by name");
    println!("3. List items");
    println!("4. Search by name (linear)");
    println!("5. Sort backpack (insertion sort)");
    println!("6. Search by name (binary, requires name sort)");
    println!("0. Quit");
}

/// Run the handler for an action
pub fn dispatch(action: MenuAction, pack: &mut Backpack) {
    match action {
        MenuAction::AddItem => add_item(pack),
        MenuAction::RemoveItem => remove_item(pack),
        MenuAction::ListItems => list_items(pack),
        MenuAction::SearchLinear => search_linear(pack),
        MenuAction::Sort => sort_items(pack),
        MenuAction::SearchBinary => search_binary(pack),
        MenuAction::Quit => {}
    }
}

fn add_item(pack: &mut Backpack) {
    if pack.is_full() {
        println!("Backpack full! Cannot carry any more items.");
        return;
    }

    let Some(name) = input::prompt("Item name: ") else {
        return;
    };
    let Some(kind) = input::prompt("Item type: ") else {
        return;
    };

    let Some(quantity) = input::prompt("Quantity: ").and_then(|raw| input::parse_quantity(&raw))
    else {
        println!("Invalid quantity.");
        return;
    };
    let Some(priority) =
        input::prompt("Priority (1 to 5): ").and_then(|raw| input::parse_priority(&raw))
    else {
        println!("Invalid priority.");
        return;
    };

    let item = Item::new(name, kind)
        .with_quantity(quantity)
        .with_priority(priority);
    let name = item.name.clone();
    match pack.add(item) {
        Ok(()) => {
            log::debug!("added '{}' ({} carried)", name, pack.len());
            println!("Item '{}' added.", name);
        }
        Err(err) => println!("{err}"),
    }
}

fn remove_item(pack: &mut Backpack) {
    if pack.is_empty() {
        println!("Backpack empty. Nothing to remove.");
        return;
    }

    let Some(name) = input::prompt("Name of the item to remove: ") else {
        return;
    };

    match pack.remove(&name) {
        Ok(index) => {
            log::debug!("removed '{}' from position {}", name, index);
            println!("Item '{}' removed (was at position {}).", name, index);
        }
        Err(_) => println!("Item '{}' not found. Nothing removed.", name),
    }
}

fn list_items(pack: &Backpack) {
    if pack.is_empty() {
        println!("Backpack empty.");
        return;
    }

    println!();
    print!("{}", table::render_listing(pack.items()));
}

fn search_linear(pack: &Backpack) {
    let Some(name) = input::prompt("Item name to search for (linear): ") else {
        return;
    };

    match pack.search_linear(&name) {
        Ok(index) => {
            println!();
            println!("Item found (position {index}):");
            print!("{}", table::render_detail(&pack.items()[index]));
        }
        Err(_) => println!("Item '{}' not found (linear search).", name),
    }
}

fn sort_items(pack: &mut Backpack) {
    println!();
    println!("Choose a sort criterion:");
    println!("1 - Name");
    println!("2 - Type");
    println!("3 - Priority");

    let Some(raw) = input::prompt("Criterion: ") else {
        return;
    };
    let Some(key) = parse_sort_key(&raw) else {
        println!("Invalid criterion.");
        return;
    };

    let comparisons = pack.sort(key);
    log::debug!("sorted {:?}, state {:?}", key, pack.sort_state());
    println!("Sort complete. Comparisons performed: {comparisons}");
}

fn search_binary(pack: &Backpack) {
    let Some(name) = input::prompt("Item name to search for (binary): ") else {
        return;
    };

    match pack.search_binary(&name) {
        Ok(index) => {
            println!();
            println!("Item found (position {index}):");
            print!("{}", table::render_detail(&pack.items()[index]));
        }
        Err(BackpackError::NotSortedByName) => {
            println!();
            println!("ERROR: binary search requires the backpack to be sorted by NAME.");
            println!("Sort by name first (option 5 -> criterion 1).");
        }
        Err(_) => println!("Item '{}' not found (binary search).", name),
    }
}
