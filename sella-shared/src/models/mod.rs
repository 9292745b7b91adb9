pub mod fare;
pub mod flight;
