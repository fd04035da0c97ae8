//! Print the collection.

use crate::collection::{CollectionStore, Record, Shelf};

/// List the owned records or the wishlist
pub fn cmd_list(wishlist: bool, json: bool) -> anyhow::Result<()> {
    let store = CollectionStore::default_location();
    let collection = store.load();
    let shelf = Shelf::from_wishlist_flag(wishlist);
    let records = collection.shelf(shelf);

    if json {
        println!("{}", serde_json::to_string_pretty(records)?);
        return Ok(());
    }

    if records.is_empty() {
        println!("No records in {} ({}).", shelf, store.path().display());
        return Ok(());
    }

    for record in records {
        println!("{}", format_record(record));
    }
    println!();
    println!(
        "{} in {} ({} in collection)",
        plural(records.len(), "record"),
        shelf,
        plural(collection.len(), "record")
    );
    Ok(())
}

/// `#<id>  <artist> - <title> (<year>)`
fn format_record(record: &Record) -> String {
    format!(
        "#{:<4} {} - {} ({})",
        record.id,
        record.artist,
        record.title,
        record.year()
    )
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {}", noun)
    } else {
        format!("{} {}s", count, noun)
    }
}
