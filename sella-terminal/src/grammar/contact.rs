//! Passenger contact and document entries: 3CTCM/, 3CTCE/ and 3DOCS/.

use sella_session::{EmailContact, MobileContact, SessionRecord, TravelDocs};
use sella_shared::Masked;

use crate::result::{CommandError, CommandPayload, DocsPayload, EmailPayload, MobilePayload};

const MOBILE_HINT: &str = "Format: 3CTCM/[Passenger Mobile Number]. Example: 3CTCM/01919919191";
const EMAIL_HINT: &str = "Format: 3CTCE/[Passenger Email Address]. Example: 3CTCE/EXAMPLE//GMAIL.COM";
const EMAIL_EXAMPLE: &str = "Example: 3CTCE/EXAMPLE//GMAIL.COM";
const DOCS_EXAMPLE: &str = "Example: 3DOCS/P/BGD/A1234567890/BGD/22JUN98/M/25DEC30/HOSSEN/TUSHAR";

/// Passenger mobile number: 3CTCM/[11 digits starting with 0].
pub fn mobile(cmd: &str, session: &mut SessionRecord) -> Result<CommandPayload, CommandError> {
    let Some(number) = cmd.strip_prefix("3CTCM/") else {
        return Err(CommandError::format(
            "Invalid format: Mobile number must start with '3CTCM/'",
            MOBILE_HINT,
        ));
    };

    if number.is_empty() {
        return Err(CommandError::format(
            "Invalid format: Mobile number is required",
            MOBILE_HINT,
        ));
    }

    if number.len() != 11 || !number.starts_with('0') || !number.chars().all(|c| c.is_ascii_digit())
    {
        return Err(CommandError::format(
            "Invalid mobile number: Must be 11 digits starting with 0",
            "Example: 3CTCM/01919919191",
        ));
    }

    let contact = MobileContact {
        number: number.to_string(),
        formatted: format!("{}«", cmd),
    };
    session.set_mobile(contact.clone());

    Ok(CommandPayload::Mobile(MobilePayload {
        message: "MOBILE NUMBER ADDED".to_string(),
        contact,
    }))
}

/// Passenger email: 3CTCE/LOCAL//DOMAIN.COM, with '//' standing in for '@'.
pub fn email(cmd: &str, session: &mut SessionRecord) -> Result<CommandPayload, CommandError> {
    let Some(address) = cmd.strip_prefix("3CTCE/") else {
        return Err(CommandError::format(
            "Invalid format: Email address must start with '3CTCE/'",
            EMAIL_HINT,
        ));
    };

    if address.is_empty() {
        return Err(CommandError::format(
            "Invalid format: Email address is required",
            EMAIL_HINT,
        ));
    }

    if address.contains('@') {
        return Err(CommandError::format(
            "Invalid format: Use '//' instead of '@'",
            EMAIL_EXAMPLE,
        ));
    }

    if !address.contains("//") {
        return Err(CommandError::format(
            "Invalid format: Must use '//' (double slash) instead of '@'",
            EMAIL_EXAMPLE,
        ));
    }

    let parts: Vec<&str> = address.split("//").collect();
    if parts.len() != 2 {
        return Err(CommandError::format(
            "Invalid format: Must have exactly one '//' separator",
            EMAIL_EXAMPLE,
        ));
    }

    let (local, domain) = (parts[0], parts[1]);

    if local.is_empty()
        || !local
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || matches!(c, '.' | '_' | '-'))
    {
        return Err(CommandError::format(
            "Invalid local part. Use uppercase letters, numbers, dots, underscores, or hyphens",
            EMAIL_EXAMPLE,
        ));
    }

    let Some(domain_name) = domain.strip_suffix(".COM") else {
        return Err(CommandError::format(
            "Invalid format: Domain must end with '.COM' (uppercase)",
            EMAIL_EXAMPLE,
        ));
    };

    if domain_name.is_empty() {
        return Err(CommandError::format(
            "Invalid format: Domain name cannot be empty",
            EMAIL_EXAMPLE,
        ));
    }

    if !domain_name
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || matches!(c, '.' | '-'))
    {
        return Err(CommandError::format(
            "Invalid domain name. Use uppercase letters, numbers, dots, or hyphens",
            EMAIL_EXAMPLE,
        ));
    }

    let contact = EmailContact {
        email: address.to_string(),
        formatted: format!("{}«", cmd),
    };
    session.set_email(contact.clone());

    Ok(CommandPayload::Email(EmailPayload {
        message: "EMAIL ADDRESS ADDED".to_string(),
        contact,
    }))
}

// DDMONYY with day 01-31. The month letters are shape-checked only.
fn valid_compact_date(s: &str) -> bool {
    let b = s.as_bytes();
    if b.len() != 7 {
        return false;
    }
    let day_ok = match (b[0], b[1]) {
        (b'0', d) => d.is_ascii_digit() && d != b'0',
        (b'1' | b'2', d) => d.is_ascii_digit(),
        (b'3', d) => d == b'0' || d == b'1',
        _ => false,
    };
    day_ok
        && b[2..5].iter().all(|c| c.is_ascii_uppercase())
        && b[5].is_ascii_digit()
        && b[6].is_ascii_digit()
}

/// Travel documents: 3DOCS/ followed by nine slash-separated fields.
pub fn docs(cmd: &str, session: &mut SessionRecord) -> Result<CommandPayload, CommandError> {
    let body = cmd.strip_prefix("3DOCS/").unwrap_or(cmd);
    let parts: Vec<&str> = body.split('/').collect();
    if parts.len() != 9 {
        return Err(CommandError::format(
            "Invalid DOCS: Must have 9 fields after 3DOCS/",
            DOCS_EXAMPLE,
        ));
    }

    let [ptype, country, passport, nationality, dob, gender, expiry, last_name, first_name] =
        [
            parts[0], parts[1], parts[2], parts[3], parts[4], parts[5], parts[6], parts[7],
            parts[8],
        ];

    if ptype.len() != 1 || !ptype.chars().all(|c| c.is_ascii_uppercase()) {
        return Err(CommandError::format("Invalid passport type (A-Z)", "Use 'P'"));
    }

    if country.len() != 3 || !country.chars().all(|c| c.is_ascii_uppercase()) {
        return Err(CommandError::format("Invalid country code (3 letters)", "BGD"));
    }

    if passport.len() < 6
        || !passport
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
    {
        return Err(CommandError::format("Invalid passport number", "A1234567890"));
    }

    if nationality.len() != 3 || !nationality.chars().all(|c| c.is_ascii_uppercase()) {
        return Err(CommandError::format("Invalid nationality (3 letters)", "BGD"));
    }

    if !valid_compact_date(dob) {
        return Err(CommandError::format("Invalid DOB (DDMONYY)", "22JUN98"));
    }

    if gender != "M" && gender != "F" {
        return Err(CommandError::format("Invalid gender (M/F)", "M"));
    }

    if !valid_compact_date(expiry) {
        return Err(CommandError::format("Invalid expiry (DDMONYY)", "25DEC30"));
    }

    let name_ok = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_uppercase());
    if !name_ok(last_name) || !name_ok(first_name) {
        return Err(CommandError::format(
            "Invalid name (uppercase letters only)",
            "HOSSEN/TUSHAR",
        ));
    }

    let docs = TravelDocs {
        passport_type: ptype.to_string(),
        country_code: country.to_string(),
        passport_number: Masked::new(passport.to_string()),
        nationality: nationality.to_string(),
        date_of_birth: dob.to_string(),
        gender: gender.to_string(),
        passport_expiry: expiry.to_string(),
        last_name: last_name.to_string(),
        first_name: first_name.to_string(),
        formatted: format!("{}«", cmd),
    };
    session.set_docs(docs.clone());

    Ok(CommandPayload::DocsInsert(DocsPayload {
        message: "DOCS INSERTED".to_string(),
        docs,
    }))
}
