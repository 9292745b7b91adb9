//! Record views: ER/IR PNR display, *A ticket details and the IG/I clear.

use chrono::Utc;
use sella_session::SessionRecord;
use sella_shared::dates;

use crate::config::TerminalConfig;
use crate::result::{ClearPayload, CommandPayload, PnrPayload, TicketDetailsPayload};

// First retrieve mints the record locator; every later view reuses it.
fn ensure_pnr(session: &mut SessionRecord, config: &TerminalConfig) -> String {
    if let Some(pnr) = &session.pnr {
        return pnr.clone();
    }
    use rand::Rng;
    let mut rng = rand::thread_rng();
    let pnr: String = (0..config.pnr_length)
        .map(|_| char::from(b'A' + rng.gen_range(0..26u8)))
        .collect();
    session.set_pnr(pnr.clone());
    pnr
}

/// ER and IR: render the live record as a PNR face. `mode` is echoed back so
/// the display layer can tell a committing ER from a read-only IR.
pub fn pnr_view(session: &mut SessionRecord, config: &TerminalConfig, mode: &str) -> CommandPayload {
    let pnr = ensure_pnr(session, config);

    let name_line = session
        .passenger_name
        .as_ref()
        .map(|n| format!("1.{}", n.formatted.strip_prefix('-').unwrap_or(&n.formatted)))
        .unwrap_or_default();

    let segment_line = session
        .latest_booking()
        .map(|b| {
            let flight = &b.flight;
            format!(
                "1 {} {} {} {} {} {}{} HK1 {} {} /{} /E",
                flight.airline,
                flight.flight_number,
                b.rbd,
                flight.date,
                dates::day_of_week(&flight.date),
                flight.origin,
                flight.destination,
                flight.departure_time,
                flight.arrival_time,
                flight.airline,
            )
        })
        .unwrap_or_default();

    let tkt_limit = if session.ticketing.is_some() {
        "1.TAW/".to_string()
    } else {
        String::new()
    };

    let phones = match (&session.agency, session.latest_booking()) {
        (Some(agency), Some(booking)) => format!(
            "1.{} {} {} {}",
            booking.flight.origin,
            agency.agency_name,
            agency.agency_phone,
            agency.reservation_officer_name,
        ),
        _ => String::new(),
    };

    let received_from = session
        .received
        .as_ref()
        .map(|r| format!("RECEIVED FROM - {}", r.reservation_officer_name))
        .unwrap_or_default();

    CommandPayload::Pnr(PnrPayload {
        mode: mode.to_string(),
        pnr,
        name_line,
        segment_line,
        tkt_limit,
        phones,
        received_from,
    })
}

/// *A: the full ticket face, aggregated from everything the session holds.
pub fn ticket_details(session: &mut SessionRecord, config: &TerminalConfig) -> CommandPayload {
    let pnr = ensure_pnr(session, config);

    let passenger_name_line = session
        .passenger_name
        .as_ref()
        .map(|n| format!("1.1{}/{} {}", n.last_name, n.first_name, n.title))
        .unwrap_or_default();

    let segment_line = session
        .latest_booking()
        .map(|b| {
            let flight = &b.flight;
            let date_only: String = flight.date.chars().take(5).collect();
            let dep = flight.departure_time.replace(':', "");
            let arr = flight.arrival_time.replace(':', "");
            let flight_num: String = flight.flight_number.split_whitespace().collect();
            let pax = b.number_of_passengers;
            format!(
                "1 {} {}{} {} {} {}{} HK{} {} {} /DC{}*SZTGXF /E",
                flight.airline,
                flight_num,
                b.rbd,
                date_only,
                pax,
                flight.origin,
                flight.destination,
                pax,
                dep,
                arr,
                flight.airline,
            )
        })
        .unwrap_or_default();

    let tkt_time_limit = if session.ticketing.is_some() {
        "1.TAW/".to_string()
    } else {
        String::new()
    };

    let phones_line = session
        .agency
        .as_ref()
        .map(|agency| {
            let origin = session
                .first_booking()
                .map(|b| b.flight.origin.as_str())
                .unwrap_or("DAC");
            format!("1. {} {}", origin, agency.agency_name)
        })
        .unwrap_or_default();

    let first_airline = session
        .first_booking()
        .map(|b| b.flight.airline.as_str())
        .unwrap_or("BG");

    let mut general_facts = Vec::new();
    if let Some(email) = &session.email {
        let name_for_ssr = session
            .passenger_name
            .as_ref()
            .map(|n| format!("{}{}{}", n.last_name, n.first_name, n.first_name.len()))
            .unwrap_or_else(|| "PASSENGER".to_string());
        general_facts.push(format!(
            "1.SSR CTCE {} HK1/{}{}",
            first_airline, name_for_ssr, email.email
        ));
    }
    if let Some(mobile) = &session.mobile {
        general_facts.push(format!("2.SSR CTCM {} HK1/{}", first_airline, mobile.number));
    }
    if session.fare_detail.is_some() {
        general_facts.push("4.OSI 1B PLEASE TICKET FARE AS PER TKT/TL IN PQ".to_string());
    }

    let received_from = session
        .received
        .as_ref()
        .map(|r| format!("RECEIVED FROM - {}", r.reservation_officer_name))
        .unwrap_or_default();

    let now = Utc::now();
    let record_locator = format!(
        "NL1L.NL1L*AAK {}/{} {} H",
        dates::hhmm(now),
        dates::ddmonyy(now),
        pnr
    );

    CommandPayload::TicketDetails(TicketDetailsPayload {
        pnr,
        passenger_name_line,
        segment_line,
        tkt_time_limit,
        phones_line,
        general_facts,
        received_from,
        record_locator,
        has_passenger_detail: session.docs.is_some(),
        has_price_quote: session.fare_detail.is_some(),
        has_security_info: true,
        has_ticket_number: session.ticket_number.is_some(),
        ticket_number: session.ticket_number.clone(),
    })
}

/// IG and I: wipe the working record.
pub fn clear(session: &mut SessionRecord) -> CommandPayload {
    session.reset();
    CommandPayload::Clear(ClearPayload {
        message: "ALL SEGMENTS REMOVED FROM PNR".to_string(),
        clear_storage: true,
    })
}
