//! Tests for the parking-garage queue/stack simulations

use rstest::rstest;

use dsalab::errors::LabError;
use dsalab::garage::{Discipline, Garage, DEFAULT_CAPACITY};

// ============================================================
// Departure Order
// ============================================================

#[test]
fn given_fifo_garage_when_departing_then_front_car_leaves_first() {
    let mut garage = Garage::new(Discipline::Fifo);
    garage.arrive("AAA-1").unwrap();
    garage.arrive("BBB-2").unwrap();
    garage.arrive("CCC-3").unwrap();

    assert_eq!(garage.depart_next().unwrap(), "AAA-1");
    assert_eq!(garage.depart_next().unwrap(), "BBB-2");
    assert_eq!(garage.next_out(), Some("CCC-3"));
}

#[test]
fn given_lifo_garage_when_departing_then_top_car_leaves_first() {
    let mut garage = Garage::new(Discipline::Lifo);
    garage.arrive("AAA-1").unwrap();
    garage.arrive("BBB-2").unwrap();
    garage.arrive("CCC-3").unwrap();

    assert_eq!(garage.depart_next().unwrap(), "CCC-3");
    assert_eq!(garage.depart_next().unwrap(), "BBB-2");
    assert_eq!(garage.next_out(), Some("AAA-1"));
}

#[test]
fn given_fifo_garage_when_departing_blocked_car_then_rejected() {
    let mut garage = Garage::new(Discipline::Fifo);
    garage.arrive("FRONT").unwrap();
    garage.arrive("BLOCKED").unwrap();

    let err = garage.depart("BLOCKED").unwrap_err();
    assert!(matches!(err, LabError::NotNextToDepart(p) if p == "BLOCKED"));
    assert_eq!(garage.depart("FRONT").unwrap(), "FRONT");
    // Now the blocked car is free to go
    assert_eq!(garage.depart("BLOCKED").unwrap(), "BLOCKED");
}

#[test]
fn given_lifo_garage_when_departing_buried_car_then_rejected() {
    let mut garage = Garage::new(Discipline::Lifo);
    garage.arrive("BURIED").unwrap();
    garage.arrive("TOP").unwrap();

    assert!(matches!(
        garage.depart("BURIED").unwrap_err(),
        LabError::NotNextToDepart(_)
    ));
    assert_eq!(garage.depart("TOP").unwrap(), "TOP");
}

// ============================================================
// Validation (shared by both disciplines)
// ============================================================

#[rstest]
#[case(Discipline::Fifo)]
#[case(Discipline::Lifo)]
fn given_duplicate_plate_when_arriving_then_rejected(#[case] discipline: Discipline) {
    let mut garage = Garage::new(discipline);
    garage.arrive("SAME-1").unwrap();

    let err = garage.arrive("SAME-1").unwrap_err();
    assert!(matches!(err, LabError::DuplicatePlate(p) if p == "SAME-1"));
    assert_eq!(garage.len(), 1);
}

#[rstest]
#[case(Discipline::Fifo)]
#[case(Discipline::Lifo)]
fn given_full_garage_when_arriving_then_rejected(#[case] discipline: Discipline) {
    let mut garage = Garage::with_limits(discipline, 2, 11);
    garage.arrive("A1").unwrap();
    garage.arrive("B2").unwrap();

    assert!(matches!(
        garage.arrive("C3").unwrap_err(),
        LabError::GarageFull(2)
    ));
}

#[rstest]
#[case(Discipline::Fifo)]
#[case(Discipline::Lifo)]
fn given_empty_garage_when_departing_then_rejected(#[case] discipline: Discipline) {
    let mut garage = Garage::new(discipline);
    assert!(matches!(
        garage.depart_next().unwrap_err(),
        LabError::GarageEmpty
    ));
}

#[test]
fn given_blank_plate_when_arriving_then_rejected() {
    let mut garage = Garage::new(Discipline::Fifo);
    assert!(matches!(
        garage.arrive("   ").unwrap_err(),
        LabError::EmptyPlate
    ));
}

#[test]
fn given_overlong_plate_when_arriving_then_rejected() {
    let mut garage = Garage::new(Discipline::Fifo);
    let err = garage.arrive("ABCDEFGHIJKL").unwrap_err(); // 12 chars
    assert!(matches!(err, LabError::PlateTooLong(11)));
}

#[test]
fn given_plate_with_odd_characters_when_arriving_then_rejected() {
    let mut garage = Garage::new(Discipline::Fifo);
    let err = garage.arrive("AB 12!").unwrap_err();
    assert!(matches!(err, LabError::InvalidPlate(_)));
}

// ============================================================
// Counters and Capacity
// ============================================================

#[test]
fn given_arrivals_and_departures_when_counting_then_totals_track_events() {
    let mut garage = Garage::new(Discipline::Fifo);
    garage.arrive("X1").unwrap();
    garage.arrive("X2").unwrap();
    garage.depart_next().unwrap();

    assert_eq!(garage.arrivals(), 2);
    assert_eq!(garage.departures(), 1);
    assert_eq!(garage.capacity(), DEFAULT_CAPACITY);
    assert!(garage.contains("X2"));
    assert!(!garage.contains("X1"));
}
