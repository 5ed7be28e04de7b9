use aisle_bits::{Aisle, Section};

fn main() {
    println!("=== Aisle Bits Examples ===\n");

    example_sections();
    example_rotation();
    example_rejected_writes();
}

fn example_sections() {
    println!("Example 1: Packing sections into an aisle");

    let aisle = Aisle::from_sections([
        Section::from_parts(1, 0b11).unwrap(),
        Section::EMPTY,
        Section::new(0x651A),
        Section::from_parts(63, 0x03FF).unwrap(),
    ]);

    println!("  Aisle word: {:#018x}", aisle.raw());
    for (i, s) in aisle.sections().enumerate() {
        println!("  Section {}: id {:2}, {} items", i, s.id(), s.count());
    }
    println!();
}

fn example_rotation() {
    println!("Example 2: Rotating a section's slots");

    let mut aisle = Aisle::EMPTY;
    aisle.set_occupancy(0, 0b01_1110_0001);
    println!("  Before:          {:010b}", aisle.occupancy(0));
    aisle.rotate_left(0, 2);
    println!("  Rotated left 2:  {:010b}", aisle.occupancy(0));
    aisle.rotate_right(0, 12);
    println!("  Rotated right 12: {:010b}", aisle.occupancy(0));
    println!();
}

fn example_rejected_writes() {
    println!("Example 3: Payloads wider than their field");

    let mut aisle = Aisle::new(0x0155);
    let written = aisle.set_occupancy(0, 0x0400);
    println!("  set_occupancy(0x0400) written: {}", written);
    match aisle.try_set_id(0, 64) {
        Ok(()) => println!("  id 64 accepted"),
        Err(e) => println!("  id 64 rejected: {}", e),
    }
    println!("  Aisle unchanged: {:#06x}", aisle.raw());
}
