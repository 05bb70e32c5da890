use hotelpricelib::{
    error::PricingError,
    model::{CheapestResult, CheapestRoom, Guests, PriceCeiling, TotalPriceEntry},
    report::write_report,
};
use rust_decimal::Decimal;
use std::fs;

fn sample() -> (CheapestResult, Vec<TotalPriceEntry>) {
    let cheapest = CheapestResult {
        cheapest_price: PriceCeiling::Finite(Decimal::new(50, 0)),
        cheapest_room: Some(CheapestRoom {
            room_type: "Single Room".into(),
            guests: Guests::Count(1),
        }),
    };
    let totals = vec![
        TotalPriceEntry {
            room_type: "Single Room".into(),
            total_price: Decimal::new(550, 1),
        },
        TotalPriceEntry {
            room_type: "Double Room".into(),
            total_price: Decimal::new(800, 1),
        },
    ];
    (cheapest, totals)
}

#[test]
fn writes_summary_and_grid() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("lower_price.txt");
    let (cheapest, totals) = sample();

    write_report(&path, &cheapest, &totals).expect("write report");
    let content = fs::read_to_string(&path).expect("read back");

    assert!(content.contains("Cheapest price: 50"));
    assert!(content.contains("Room type: Single Room, Guests: 1"));
    assert!(content.contains("Total prices for all rooms:"));
    assert!(content.contains("+-------------+---------------+"));
    assert!(content.contains("| Room Type   |   Total Price |"));
    assert!(content.contains("+=============+===============+"));
    assert!(content.contains("| Single Room |            55 |"));
    assert!(content.contains("| Double Room |            80 |"));
    assert!(content.ends_with("+-------------+---------------+\n"));
}

#[test]
fn overwrites_existing_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("lower_price.txt");
    fs::write(&path, "stale content that is much longer than nothing at all\n".repeat(50)).unwrap();

    write_report(&path, &CheapestResult::default(), &[]).expect("write report");
    let content = fs::read_to_string(&path).expect("read back");

    assert!(!content.contains("stale"));
    assert!(content.starts_with("Cheapest price: inf\nRoom type: N/A, Guests: N/A\n"));
}

#[test]
fn missing_directory_is_write_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("no-such-dir").join("lower_price.txt");
    let (cheapest, totals) = sample();

    match write_report(&path, &cheapest, &totals) {
        Err(PricingError::Write { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected write error, got {other:?}"),
    }
}
