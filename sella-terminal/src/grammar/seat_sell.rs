use sella_session::{Booking, SessionRecord};
use sella_shared::Flight;

use crate::result::{BookingPayload, CommandError, CommandPayload};

const FORMAT_HINT: &str = "Format: 0[Number of Passenger][RBD][Serial Number]";

/// Sell seats on a flight from the current availability display:
/// `0[passengers][RBD][serial]`, e.g. `01Y2` books one Y seat on the second
/// displayed flight. Appends a `Booking` to the session on success.
pub fn execute(
    cmd: &str,
    flights: &[Flight],
    session: &mut SessionRecord,
) -> Result<CommandPayload, CommandError> {
    if !cmd.starts_with('0') {
        return Err(CommandError::format(
            "Invalid format: Seat sell command must start with '0'",
            FORMAT_HINT,
        ));
    }

    let rest = &cmd[1..];
    if rest.len() < 3 {
        return Err(CommandError::format(
            "Invalid format: Command too short after '0'",
            "Format: 0[Number of Passenger][RBD][Serial Number]. Example: 01Y1",
        ));
    }

    let bytes = rest.as_bytes();
    if !bytes[0].is_ascii_digit() {
        return Err(CommandError::format(
            "Invalid format: Number of passengers must be a digit (1-10)",
            FORMAT_HINT,
        ));
    }

    let passengers = u32::from(bytes[0] - b'0');
    if passengers < 1 || passengers > 10 {
        return Err(CommandError::format(
            format!("Invalid format: Number of passengers must be 1-10, got {}", passengers),
            FORMAT_HINT,
        ));
    }

    let rbd_len = bytes[1..]
        .iter()
        .take_while(|b| b.is_ascii_uppercase())
        .take(2)
        .count();
    if rbd_len == 0 {
        return Err(CommandError::format(
            "Invalid format: RBD (class) must be 1-2 uppercase letters",
            FORMAT_HINT,
        ));
    }
    let rbd = rest[1..1 + rbd_len].to_string();

    if rbd.starts_with('0') || rbd.starts_with('C') {
        return Err(CommandError::domain(
            format!("Invalid RBD: Classes starting with '0' or 'C' cannot be selected. Got '{}'", rbd),
            "Please select a valid class that doesn't start with '0' or 'C'",
        ));
    }

    // Serial is the leading digit run after the RBD; anything after it is
    // ignored, as on the real terminal.
    let serial_len = bytes[1 + rbd_len..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if serial_len == 0 {
        return Err(CommandError::format(
            "Invalid format: Serial Number (flight ID) is required",
            FORMAT_HINT,
        ));
    }
    let serial = rest[1 + rbd_len..1 + rbd_len + serial_len].to_string();

    let serial_index: usize = serial.parse().unwrap_or(0);
    if serial_index < 1 || serial_index > flights.len() {
        return Err(CommandError::reference(
            format!(
                "Invalid Serial Number: Flight at position '{}' not found. Available positions: 1-{}",
                serial,
                flights.len()
            ),
            format!(
                "Please use a valid serial number (1-{}) from the availability results",
                flights.len()
            ),
        ));
    }

    let flight = &flights[serial_index - 1];
    if !flight.has_class(&rbd) {
        return Err(CommandError::domain(
            format!("Invalid RBD: Class '{}' not available for flight {}", rbd, flight.flight_number),
            format!("Available classes for this flight: {}", flight.class),
        ));
    }

    let booking = Booking::new(passengers, rbd, serial, flight.clone(), cmd.to_string());
    session.add_booking(booking.clone());

    Ok(CommandPayload::Booking(BookingPayload {
        message: "SEGMENTS ADDED TO PNR".to_string(),
        flight_number: flight.flight_number.clone(),
        booking,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sella_catalog::seed_flights;

    #[test]
    fn test_sell_books_displayed_flight() {
        let flights = seed_flights();
        let mut session = SessionRecord::new();

        let payload = execute("01Y1", &flights, &mut session).unwrap();
        match payload {
            CommandPayload::Booking(p) => {
                assert_eq!(p.message, "SEGMENTS ADDED TO PNR");
                assert_eq!(p.flight_number, "BG 123");
                assert_eq!(p.booking.number_of_passengers, 1);
                assert_eq!(p.booking.rbd, "Y");
                assert_eq!(p.booking.serial_number, "1");
            }
            other => panic!("expected booking payload, got {:?}", other),
        }

        assert_eq!(session.bookings.len(), 1);
        assert_eq!(session.bookings[0].command, "01Y1");
    }

    #[test]
    fn test_serial_resolves_one_based() {
        let flights = seed_flights();
        let mut session = SessionRecord::new();

        execute("02Y2", &flights, &mut session).unwrap();
        assert_eq!(session.bookings[0].flight.flight_number, flights[1].flight_number);
        assert_eq!(session.bookings[0].number_of_passengers, 2);
    }

    #[test]
    fn test_serial_out_of_range() {
        let flights = seed_flights();
        let mut session = SessionRecord::new();

        let err = execute("01Y9", &flights, &mut session).unwrap_err();
        assert_eq!(
            err.message,
            "Invalid Serial Number: Flight at position '9' not found. Available positions: 1-6"
        );
        assert!(session.bookings.is_empty());
    }

    #[test]
    fn test_closed_classes_rejected() {
        let flights = seed_flights();
        let mut session = SessionRecord::new();

        let err = execute("01C1", &flights, &mut session).unwrap_err();
        assert_eq!(
            err.message,
            "Invalid RBD: Classes starting with '0' or 'C' cannot be selected. Got 'C'"
        );
    }

    #[test]
    fn test_unpublished_class_names_alternatives() {
        let flights = seed_flights();
        let mut session = SessionRecord::new();

        // BG 123 publishes "J7 C7 Y9 M9 L9", no K
        let err = execute("01K1", &flights, &mut session).unwrap_err();
        assert_eq!(err.message, "Invalid RBD: Class 'K' not available for flight BG 123");
        assert_eq!(err.suggestion, "Available classes for this flight: J7 C7 Y9 M9 L9");
    }

    #[test]
    fn test_field_shape_errors() {
        let flights = seed_flights();
        let mut session = SessionRecord::new();

        let err = execute("01", &flights, &mut session).unwrap_err();
        assert_eq!(err.message, "Invalid format: Command too short after '0'");

        let err = execute("0XY1", &flights, &mut session).unwrap_err();
        assert_eq!(err.message, "Invalid format: Number of passengers must be a digit (1-10)");

        let err = execute("00Y1", &flights, &mut session).unwrap_err();
        assert_eq!(err.message, "Invalid format: Number of passengers must be 1-10, got 0");

        let err = execute("011Y", &flights, &mut session).unwrap_err();
        assert_eq!(err.message, "Invalid format: RBD (class) must be 1-2 uppercase letters");

        let err = execute("01YX", &flights, &mut session).unwrap_err();
        assert_eq!(err.message, "Invalid format: Serial Number (flight ID) is required");
    }
}
