//! Parking-garage simulations of a queue and a stack.
//!
//! Cars are identified by plate number. A FIFO garage lets only the front
//! car depart, a LIFO garage only the car on top. Plates must be non-empty,
//! short, alphanumeric (dashes allowed) and unique within the garage.

use std::collections::VecDeque;
use std::fmt;

use regex::Regex;
use tracing::instrument;

use crate::errors::{LabError, LabResult};

/// Number of parking spots
pub const DEFAULT_CAPACITY: usize = 10;
/// Longest accepted plate number
pub const DEFAULT_PLATE_MAX_LEN: usize = 11;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discipline {
    Fifo,
    Lifo,
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Discipline::Fifo => write!(f, "fifo"),
            Discipline::Lifo => write!(f, "lifo"),
        }
    }
}

#[derive(Debug)]
pub struct Garage {
    discipline: Discipline,
    spots: VecDeque<String>,
    capacity: usize,
    plate_max_len: usize,
    arrivals: usize,
    departures: usize,
    plate_regex: Regex,
}

impl Garage {
    pub fn new(discipline: Discipline) -> Self {
        Self::with_limits(discipline, DEFAULT_CAPACITY, DEFAULT_PLATE_MAX_LEN)
    }

    pub fn with_limits(discipline: Discipline, capacity: usize, plate_max_len: usize) -> Self {
        Self {
            discipline,
            spots: VecDeque::new(),
            capacity,
            plate_max_len,
            arrivals: 0,
            departures: 0,
            plate_regex: Regex::new(r"^[A-Za-z0-9-]+$").unwrap(),
        }
    }

    fn validate_plate(&self, plate: &str) -> LabResult<String> {
        let plate = plate.trim();
        if plate.is_empty() {
            return Err(LabError::EmptyPlate);
        }
        if plate.len() > self.plate_max_len {
            return Err(LabError::PlateTooLong(self.plate_max_len));
        }
        if !self.plate_regex.is_match(plate) {
            return Err(LabError::InvalidPlate(plate.to_string()));
        }
        Ok(plate.to_string())
    }

    /// Parks a car at the rear of the garage.
    #[instrument(level = "debug", skip(self))]
    pub fn arrive(&mut self, plate: &str) -> LabResult<()> {
        let plate = self.validate_plate(plate)?;
        if self.spots.contains(&plate) {
            return Err(LabError::DuplicatePlate(plate));
        }
        if self.spots.len() >= self.capacity {
            return Err(LabError::GarageFull(self.capacity));
        }
        self.spots.push_back(plate);
        self.arrivals += 1;
        Ok(())
    }

    /// Removes the next departing car: front for FIFO, top for LIFO.
    #[instrument(level = "debug", skip(self))]
    pub fn depart_next(&mut self) -> LabResult<String> {
        let departed = match self.discipline {
            Discipline::Fifo => self.spots.pop_front(),
            Discipline::Lifo => self.spots.pop_back(),
        }
        .ok_or(LabError::GarageEmpty)?;
        self.departures += 1;
        Ok(departed)
    }

    /// Removes a specific car, which must be next in line to depart.
    #[instrument(level = "debug", skip(self))]
    pub fn depart(&mut self, plate: &str) -> LabResult<String> {
        let plate = self.validate_plate(plate)?;
        if self.spots.is_empty() {
            return Err(LabError::GarageEmpty);
        }
        if !self.spots.contains(&plate) {
            return Err(LabError::CarNotFound(plate));
        }
        if self.next_out() != Some(plate.as_str()) {
            return Err(LabError::NotNextToDepart(plate));
        }
        self.depart_next()
    }

    /// Plate of the car that would depart next, if any.
    pub fn next_out(&self) -> Option<&str> {
        match self.discipline {
            Discipline::Fifo => self.spots.front(),
            Discipline::Lifo => self.spots.back(),
        }
        .map(String::as_str)
    }

    pub fn contains(&self, plate: &str) -> bool {
        self.spots.iter().any(|p| p == plate)
    }

    /// Parked cars in arrival order (front of the garage first).
    pub fn cars(&self) -> impl Iterator<Item = &str> {
        self.spots.iter().map(String::as_str)
    }

    pub fn discipline(&self) -> Discipline {
        self.discipline
    }

    pub fn len(&self) -> usize {
        self.spots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn arrivals(&self) -> usize {
        self.arrivals
    }

    pub fn departures(&self) -> usize {
        self.departures
    }
}
