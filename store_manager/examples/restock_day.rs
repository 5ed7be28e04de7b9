use store_manager::{Store, StoreError};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), StoreError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .init();

    let mut store = Store::new();

    // Aisle 0 carries milk (id 5) and bread (id 7); aisle 1 more bread.
    let milk = store.locate(0, 0)?;
    let bread_a = store.locate(0, 1)?;
    let bread_b = store.locate(1, 2)?;
    store.assign_id(milk, 5)?;
    store.assign_id(bread_a, 7)?;
    store.assign_id(bread_b, 7)?;
    store.set_occupancy_at(bread_a, 0b11)?;

    store.stockroom_mut().set(5, 3);
    store.stockroom_mut().set(7, 14);

    let report = store.refill_from_stockroom();
    println!(
        "refill moved {} units into {} sections",
        report.units_moved, report.sections_touched
    );

    let removed = store.fulfill_order(7, 15);
    println!("order for 15 bread: {} removed", removed);

    let fullest = store.find_fullest_section();
    println!("fullest section: {} with {} items", fullest.locator, fullest.count);

    match store.find_empty_section(7) {
        Some(loc) => println!("empty bread section at {}", loc),
        None => println!("no empty bread section"),
    }

    Ok(())
}
