use crate::models::fare::FareDetail;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A flight as shown on the availability screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flight {
    pub id: Uuid,
    pub flight_number: String,
    pub airline: String, // codeshares are slash-combined, e.g. "MH/FY"
    pub origin: String,
    pub destination: String,
    pub date: String, // DDMON, e.g. "15JUN"
    pub departure_time: String,
    pub arrival_time: String,
    pub duration: String,
    pub aircraft: String,
    /// Class availability string, whitespace-tokenized, e.g. "J7 C7 Y9".
    pub class: String,
    pub seats: u32,
    pub fare: f64,
    pub operates: String,
    pub on_time: String,
    pub air_miles: u32,
    pub meals: Option<String>,
    pub equipment: Option<String>,
    pub terminal: Option<String>,
    pub connectivity: Option<String>,
    pub fare_details: Option<Vec<FareDetail>>,
    pub transit: Option<TransitLeg>,
}

impl Flight {
    /// Booking-class codes offered on this flight: the leading letters (at
    /// most two) of each token in the availability string, so "J7 C7 Y9"
    /// yields J, C, Y.
    pub fn class_codes(&self) -> Vec<String> {
        self.class
            .split_whitespace()
            .filter_map(|token| {
                let code: String = token
                    .chars()
                    .take_while(|c| c.is_ascii_uppercase())
                    .take(2)
                    .collect();
                if code.is_empty() {
                    None
                } else {
                    Some(code)
                }
            })
            .collect()
    }

    /// Whether the given RBD appears among this flight's class codes.
    pub fn has_class(&self, rbd: &str) -> bool {
        self.class_codes().iter().any(|c| c == rbd)
    }

    /// Carrier codes for this flight, splitting slash-combined codeshares.
    pub fn airline_codes(&self) -> Vec<&str> {
        self.airline.split('/').collect()
    }
}

/// Intermediate stop on a one-stop itinerary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitLeg {
    pub city: String,
    pub arrival_time: String,
    pub departure_time: String,
    pub layover_duration: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flight_with_classes(class: &str) -> Flight {
        Flight {
            id: Uuid::new_v4(),
            flight_number: "BG 123".to_string(),
            airline: "BG".to_string(),
            origin: "DAC".to_string(),
            destination: "BKK".to_string(),
            date: "15JUN".to_string(),
            departure_time: "08:25".to_string(),
            arrival_time: "12:10".to_string(),
            duration: "2H 45M".to_string(),
            aircraft: "B787".to_string(),
            class: class.to_string(),
            seats: 162,
            fare: 18500.0,
            operates: "DAILY".to_string(),
            on_time: "92%".to_string(),
            air_miles: 973,
            meals: None,
            equipment: None,
            terminal: None,
            connectivity: None,
            fare_details: None,
            transit: None,
        }
    }

    #[test]
    fn test_class_codes_take_leading_letters() {
        let flight = flight_with_classes("J7 C7 Y9 KK3");
        assert_eq!(flight.class_codes(), vec!["J", "C", "Y", "KK"]);
    }

    #[test]
    fn test_has_class() {
        let flight = flight_with_classes("J7 C7 Y9");
        assert!(flight.has_class("Y"));
        assert!(!flight.has_class("M"));
    }

    #[test]
    fn test_airline_codes_split_codeshares() {
        let mut flight = flight_with_classes("Y9");
        flight.airline = "MH/FY".to_string();
        assert_eq!(flight.airline_codes(), vec!["MH", "FY"]);
    }
}
