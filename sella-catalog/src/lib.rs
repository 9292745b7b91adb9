pub mod availability;
pub mod fares;
pub mod seed;

pub use availability::{airline_matches, matching_flights};
pub use fares::{fare_for_class, scan_fares, FareScan, FareScanError, RankedFare};
pub use seed::seed_flights;
