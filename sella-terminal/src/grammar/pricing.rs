//! Fare pricing: WPA, WPNCB, PQ and *PQ.

use chrono::{Duration, Utc};
use sella_catalog::{fare_for_class, scan_fares, FareScanError};
use sella_session::{Booking, SessionRecord};
use sella_shared::{dates, FareDetail, Flight};

use crate::config::TerminalConfig;
use crate::result::{
    CommandError, CommandPayload, PriceCheckPayload, PriceQuotePayload, WpaPayload, WpncbPayload,
};

// Resolves the latest booking against the live flight list. The booking holds
// a snapshot taken at sell time, so fares are always read from the catalog copy.
fn resolve_latest(
    session: &SessionRecord,
    flights: &[Flight],
) -> Result<(Booking, Flight, FareDetail), CommandError> {
    let Some(booking) = session.latest_booking() else {
        return Err(CommandError::reference(
            "No segments found in PNR. Please add segments first.",
            "Add a segment first. Example: 01Y1",
        ));
    };

    let Some(flight) = flights.iter().find(|f| f.id == booking.flight.id) else {
        return Err(CommandError::reference(
            format!("Flight {} not found", booking.flight.flight_number),
            "Run a fresh availability check and sell the segment again",
        ));
    };

    if flight.fare_details.as_ref().map_or(true, |f| f.is_empty()) {
        return Err(CommandError::reference(
            format!(
                "No fare details available for flight {}",
                booking.flight.flight_number
            ),
            "Choose a flight that publishes fare details",
        ));
    }

    let Some(fare) = fare_for_class(flight, &booking.rbd) else {
        return Err(CommandError::reference(
            format!(
                "No fare details found for class {} on flight {}",
                booking.rbd, booking.flight.flight_number
            ),
            "Choose a published class from the availability display",
        ));
    };

    Ok((booking.clone(), flight.clone(), fare.clone()))
}

/// WPA: price the booked class of the latest segment.
pub fn wpa(session: &SessionRecord, flights: &[Flight]) -> Result<CommandPayload, CommandError> {
    let (mut booking, flight, fare) = resolve_latest(session, flights)?;
    let passenger_count = booking.number_of_passengers;
    booking.flight = flight;

    Ok(CommandPayload::Wpa(WpaPayload {
        booking,
        fare_detail: fare,
        passenger_type: "ADT".to_string(),
        passenger_count,
    }))
}

/// WPNCB: rank every published fare across the flight list, lowest first.
pub fn wpncb(flights: &[Flight]) -> Result<CommandPayload, CommandError> {
    let scan = scan_fares(flights).map_err(|e| {
        let suggestion = match e {
            FareScanError::NoFlights => "Run an availability check first. Example: 115JUNDACBKK",
            FareScanError::NoFaresPublished => "Choose a route with published fares",
        };
        CommandError::reference(e.to_string(), suggestion)
    })?;

    Ok(CommandPayload::Wpncb(WpncbPayload {
        lowest: scan.lowest,
        ranked: scan.ranked,
    }))
}

/// PQ: price the latest segment and retain the quote on the session.
pub fn price_quote(
    session: &mut SessionRecord,
    flights: &[Flight],
    config: &TerminalConfig,
) -> Result<CommandPayload, CommandError> {
    let (booking, flight, fare) = resolve_latest(session, flights)?;

    let passenger_name_line = session
        .passenger_name
        .as_ref()
        .map(|n| format!("1.{}/{} {}", n.last_name, n.first_name, n.title))
        .unwrap_or_default();

    let deadline_at = Utc::now() + Duration::days(config.ticketing_deadline_days);
    let deadline = format!("{}/2359", dates::ddmonyy(deadline_at));

    let date_only: String = flight.date.chars().take(5).collect();
    let dep_time = flight.departure_time.replace(':', "");
    let flight_num: String = flight.flight_number.split_whitespace().collect();
    let segment_line = format!(
        "1 {}{} {} {}{} {} {} {}",
        flight.origin,
        flight.destination,
        flight.airline,
        flight_num,
        booking.rbd,
        date_only,
        dep_time,
        flight.destination,
    );

    let fare_construction = format!(
        "{} {} {}{:.2}NUC{:.2}END ROE{:.2}",
        flight.origin, flight.airline, flight.destination, fare.base_fare_usd, fare.nuc, fare.roe,
    );

    session.set_fare_detail(fare.clone());

    Ok(CommandPayload::PriceQuote(PriceQuotePayload {
        message: "PRICE QUOTE RECORD RETAINED".to_string(),
        fare_detail: fare,
        passenger_name_line,
        deadline,
        segment_line,
        fare_construction,
    }))
}

/// *PQ: replay the quote retained by the last PQ.
pub fn price_check(session: &SessionRecord) -> Result<CommandPayload, CommandError> {
    let Some(fare) = session.fare_detail.clone() else {
        return Err(CommandError::reference(
            "No price quote found. Please run PQ first to save a price quote.",
            "Run PQ to retain a quote before checking it",
        ));
    };

    Ok(CommandPayload::PriceCheck(PriceCheckPayload {
        message: "PRICE QUOTE RECORD RETAINED".to_string(),
        fare_detail: fare,
    }))
}
