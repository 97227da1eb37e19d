use crate::error::CliError;
use model::pagination::page::PaginationResult;
use serde_json::json;

pub fn page_json(page: &PaginationResult) -> Result<String, CliError> {
    let json = json!({
        "products": page.items,
        "orderingKeys": page.ordering_keys,
        "first": page.first_boundary().map(|b| json!({ "sortKey": b.sort_key, "uniqueKey": b.anchor })),
        "last": page.last_boundary().map(|b| json!({ "sortKey": b.sort_key, "uniqueKey": b.anchor })),
    });
    Ok(serde_json::to_string_pretty(&json)?)
}

pub fn print_page(page: &PaginationResult) {
    if page.is_empty() {
        println!("No products on this page.");
        return;
    }

    println!("{:<26} {:>10} {:<20} {:<24}", "Id", "Key", "Brand", "Name");
    println!("{}", "-".repeat(82));
    for (item, key) in page.items.iter().zip(&page.ordering_keys) {
        println!(
            "{:<26} {:>10.4} {:<20} {:<24}",
            item.id, key, item.brand, item.name
        );
    }

    if let (Some(first), Some(last)) = (page.first_boundary(), page.last_boundary()) {
        println!();
        println!("previous: --sort-key {} --unique-key {}", first.sort_key, first.anchor);
        println!("next:     --sort-key {} --unique-key {}", last.sort_key, last.anchor);
    }
}
