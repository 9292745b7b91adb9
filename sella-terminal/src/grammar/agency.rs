//! Agency, ticketing and received-from field entries.

use sella_session::{AgencyDetails, ReceivedFrom, SessionRecord, Ticketing};

use crate::result::{
    AgencyPayload, CommandError, CommandPayload, ReceivedPayload, TicketingPayload,
};

// Uppercase initial plus at least one more uppercase letter, digit or hyphen.
fn valid_name_token(token: &str) -> bool {
    let mut chars = token.chars();
    match chars.next() {
        Some(c) if c.is_ascii_uppercase() => {}
        _ => return false,
    }
    let mut rest = 0;
    for c in chars {
        if !(c.is_ascii_uppercase() || c.is_ascii_digit() || c == '-') {
            return false;
        }
        rest += 1;
    }
    rest >= 1
}

// Leading 0 followed by 10-14 digits.
fn valid_phone(token: &str) -> bool {
    token.len() >= 11
        && token.len() <= 15
        && token.starts_with('0')
        && token.chars().all(|c| c.is_ascii_digit())
}

/// Agency details: 9 [Agency Name] [Agency Phone] [Reservation Officer Name].
pub fn details(cmd: &str, session: &mut SessionRecord) -> Result<CommandPayload, CommandError> {
    if !cmd.starts_with("9 ") && cmd != "9" {
        return Err(CommandError::format(
            "Invalid format: Must start with '9 ' followed by details",
            "Format: 9 [Agency Name] [Agency Phone] [Reservation Officer Name]",
        ));
    }

    let tokens: Vec<&str> = cmd.split_whitespace().collect();
    if tokens.len() != 4 {
        return Err(CommandError::format(
            "Invalid format: Provide Agency Name, Phone and Officer Name",
            "Format: 9 FLYGER 01717452756 IMRAN",
        ));
    }

    let (agency_name, agency_phone, officer_name) = (tokens[1], tokens[2], tokens[3]);

    if !valid_name_token(agency_name) {
        return Err(CommandError::format(
            "Invalid Agency Name",
            "Use uppercase letters/numbers, e.g., FLYGER",
        ));
    }

    if !valid_phone(agency_phone) {
        return Err(CommandError::format(
            "Invalid phone. Use leading 0 and 11-15 digits",
            "Example: 01717452756",
        ));
    }

    if !valid_name_token(officer_name) {
        return Err(CommandError::format(
            "Invalid Reservation Officer Name",
            "Use uppercase letters/numbers, e.g., IMRAN",
        ));
    }

    let agency = AgencyDetails {
        agency_name: agency_name.to_string(),
        agency_phone: agency_phone.to_string(),
        reservation_officer_name: officer_name.to_string(),
        formatted: format!("9 {} {} {}«", agency_name, agency_phone, officer_name),
    };
    session.set_agency(agency.clone());

    Ok(CommandPayload::AgencyDetails(AgencyPayload {
        message: "AGENCY DETAILS ADDED".to_string(),
        agency,
    }))
}

/// Ticketing field, accepted only as the literal 7TAW/.
pub fn ticketing(cmd: &str, session: &mut SessionRecord) -> Result<CommandPayload, CommandError> {
    if cmd != "7TAW/" {
        return Err(CommandError::format(
            "Invalid format: Ticketing must be exactly '7TAW/'",
            "Format: 7TAW/",
        ));
    }

    let ticketing = Ticketing {
        formatted: format!("{}«", cmd),
    };
    session.set_ticketing(ticketing.clone());

    Ok(CommandPayload::Ticketing(TicketingPayload {
        message: "TICKETING ADDED".to_string(),
        ticketing,
    }))
}

/// Received-from field: 6 [Reservation Officer Name].
pub fn received(cmd: &str, session: &mut SessionRecord) -> Result<CommandPayload, CommandError> {
    let parts: Vec<&str> = cmd.split_whitespace().collect();
    if parts.len() != 2 || parts[0] != "6" {
        return Err(CommandError::format(
            "Invalid format: Received must be '6 [Reservation Officer Name]'",
            "Example: 6 IMRAN",
        ));
    }

    let officer = parts[1];
    if !valid_name_token(officer) {
        return Err(CommandError::format(
            "Invalid officer name. Use uppercase letters/numbers",
            "Example: 6 IMRAN",
        ));
    }

    // The echoed field drops the space after the action code.
    let received = ReceivedFrom {
        reservation_officer_name: officer.to_string(),
        formatted: format!("6{}«", officer),
    };
    session.set_received(received.clone());

    Ok(CommandPayload::Received(ReceivedPayload {
        message: "RECEIVED ADDED".to_string(),
        received,
    }))
}
