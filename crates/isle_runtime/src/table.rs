//! Listing and detail rendering
//!
//! Pure string builders; the menu layer decides where they go.

use isle_inventory::Item;
use std::fmt::Write;

/// Render the item sequence as a table
///
/// One row per item, indexed from zero so the IDs line up with the
/// positions reported by the search operations.
pub fn render_listing(items: &[Item]) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{:<3} | {:<30} | {:<15} | {:<9} | {:<9}",
        "ID", "NAME", "TYPE", "QUANT.", "PRIORITY"
    );
    let _ = writeln!(
        out,
        "----+--------------------------------+-----------------+-----------+----------"
    );
    for (index, item) in items.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:<3} | {:<30} | {:<15} | {:<9} | {:<9}",
            index, item.name, item.kind, item.quantity, item.priority
        );
    }

    out
}

/// Render a single item in detail
pub fn render_detail(item: &Item) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Name    : {}", item.name);
    let _ = writeln!(out, "Type    : {}", item.kind);
    let _ = writeln!(out, "Quantity: {}", item.quantity);
    let _ = writeln!(out, "Priority: {}", item.priority);

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_rows() {
        let items = vec![
            Item::new("Medkit", "Heal").with_quantity(2).with_priority(5),
            Item::new("Rope", "Tool").with_priority(2),
        ];

        let listing = render_listing(&items);
        let lines: Vec<&str> = listing.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("ID "));
        assert!(lines[2].starts_with("0  "));
        assert!(lines[2].contains("Medkit"));
        assert!(lines[3].starts_with("1  "));
        assert!(lines[3].contains("Rope"));
    }

    #[test]
    fn test_listing_empty_has_only_header() {
        let listing = render_listing(&[]);
        assert_eq!(listing.lines().count(), 2);
    }

    #[test]
    fn test_detail_fields() {
        let item = Item::new("Axe", "Tool").with_priority(4);

        let detail = render_detail(&item);

        assert!(detail.contains("Name    : Axe"));
        assert!(detail.contains("Type    : Tool"));
        assert!(detail.contains("Quantity: 1"));
        assert!(detail.contains("Priority: 4"));
    }
}
