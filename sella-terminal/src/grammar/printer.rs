//! Printer handshake chain: PE*NL1L, W*, DSIV, PTR/ and the W' invoice.

use sella_session::{PrinterConfirmation, PrinterError, Ptr, SessionRecord};

use crate::config::TerminalConfig;
use crate::result::{
    CommandError, CommandPayload, DesignationEntry, DesignationType, DsivPayload, InvoicePayload,
    PrinterConfirmPayload, PrinterDesignatePayload, PtrAssignedPayload,
};

const CONFIRM_HINT: &str = "Format: W*[Country Code], Example: W*BD";
const DSIV_HINT: &str = "Format: DSIV[PTR NUMBER], Example: DSIV30B6B2";
const PTR_HINT: &str = "Format: PTR/[PTR NUMBER], Example: PTR/30B6B2";
const INVOICE_LITERAL: &str = "W'PQ1N1.1'ABG'FINVAGT'KP7";

const HEX: &[u8] = b"0123456789ABCDEF";

fn hex_token(len: usize) -> String {
    use rand::Rng;
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| HEX[rng.gen_range(0..HEX.len())] as char)
        .collect()
}

// CRT addresses come in a plain six-character form or with a two-character
// suffix, e.g. "06124A-51". PTR addresses are always the plain form.
fn crt_lniata() -> String {
    use rand::Rng;
    if rand::thread_rng().gen_range(0..3) == 0 {
        hex_token(6)
    } else {
        format!("{}-{}", hex_token(6), hex_token(2))
    }
}

fn valid_ptr_number(s: &str) -> bool {
    s.len() == 6
        && s.chars()
            .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c))
}

/// PE*NL1L: list CRT and PTR addresses and issue the PTR pool to the session.
pub fn designate(
    cmd: &str,
    session: &mut SessionRecord,
    config: &TerminalConfig,
) -> Result<CommandPayload, CommandError> {
    if cmd != "PE*NL1L" {
        return Err(CommandError::format(
            "Invalid format: Command must be exactly 'PE*NL1L'",
            "Format: PE*NL1L",
        ));
    }

    let mut entries = Vec::with_capacity(config.crt_entries + config.ptr_pool_size);
    for _ in 0..config.crt_entries {
        entries.push(DesignationEntry {
            lniata: crt_lniata(),
            entry_type: DesignationType::Crt,
            tapool: String::new(),
            pool: String::new(),
            ind: String::new(),
        });
    }

    let mut ptr_numbers = Vec::with_capacity(config.ptr_pool_size);
    for _ in 0..config.ptr_pool_size {
        let lniata = hex_token(6);
        ptr_numbers.push(Ptr::new(lniata.clone()));
        entries.push(DesignationEntry {
            lniata,
            entry_type: DesignationType::Ptr,
            tapool: String::new(),
            pool: String::new(),
            ind: String::new(),
        });
    }
    session.printer.issue(ptr_numbers);

    Ok(CommandPayload::PrinterDesignate(PrinterDesignatePayload {
        message: "Printer designation list".to_string(),
        entries,
    }))
}

/// W*[Country Code]: confirm the designation for a two-letter country.
pub fn confirm(cmd: &str, session: &mut SessionRecord) -> Result<CommandPayload, CommandError> {
    let Some(country) = cmd.strip_prefix("W*") else {
        return Err(CommandError::format(
            "Invalid format: Command must start with 'W*'",
            CONFIRM_HINT,
        ));
    };

    if country.trim().is_empty() {
        return Err(CommandError::format(
            "Invalid format: Country code is required after 'W*'",
            CONFIRM_HINT,
        ));
    }

    if cmd.contains(' ') {
        return Err(CommandError::format(
            "Invalid format: Spaces are not allowed in the command",
            CONFIRM_HINT,
        ));
    }

    if country.len() != 2 || !country.chars().all(|c| c.is_ascii_uppercase()) {
        return Err(CommandError::format(
            "Invalid format: Country code must be exactly 2 uppercase letters",
            CONFIRM_HINT,
        ));
    }

    use rand::Rng;
    let ok_number = format!("OK-{:04}", rand::thread_rng().gen_range(0..10000));

    let confirmation = PrinterConfirmation {
        country_code: country.to_string(),
        ok_number,
        formatted: format!("{}«", cmd),
    };
    session.set_printer_confirm(confirmation.clone());

    Ok(CommandPayload::PrinterConfirm(PrinterConfirmPayload {
        message: "Printer designation confirmed".to_string(),
        confirmation,
    }))
}

/// DSIV[PTR NUMBER]: pick one address out of the issued pool.
pub fn dsiv(cmd: &str, session: &mut SessionRecord) -> Result<CommandPayload, CommandError> {
    let Some(number) = cmd.strip_prefix("DSIV") else {
        return Err(CommandError::format(
            "Invalid format: Command must start with 'DSIV'",
            DSIV_HINT,
        ));
    };

    if number.trim().is_empty() {
        return Err(CommandError::format(
            "Invalid format: PTR number is required after 'DSIV'",
            DSIV_HINT,
        ));
    }

    if cmd.contains(' ') {
        return Err(CommandError::format(
            "Invalid format: Spaces are not allowed in the command",
            DSIV_HINT,
        ));
    }

    if !valid_ptr_number(number) {
        return Err(CommandError::format(
            "Invalid format: PTR number must be exactly 6 hexadecimal characters (0-9, A-F)",
            DSIV_HINT,
        ));
    }

    let ptr = Ptr::new(number);
    session.printer.assign(&ptr).map_err(|e| match e {
        PrinterError::NothingIssued => CommandError::reference(
            "Invalid: No PTR numbers found. Please run PE*NL1L first to generate PTR numbers.",
            DSIV_HINT,
        ),
        PrinterError::NotInPool {
            requested,
            available,
        } => CommandError::reference(
            format!(
                "Invalid: PTR number '{}' not found. Available PTR numbers: {}",
                requested,
                available
                    .iter()
                    .map(Ptr::as_str)
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            "Please use a valid PTR number from the PE*NL1L command output.",
        ),
        other => CommandError::reference(other.to_string(), DSIV_HINT),
    })?;

    Ok(CommandPayload::Dsiv(DsivPayload {
        message: "OK PTR ASSIGNED".to_string(),
        ptr: ptr.to_string(),
        formatted: format!("{}«", cmd),
    }))
}

/// PTR/[PTR NUMBER]: confirm the address picked by DSIV.
pub fn ptr_assign(cmd: &str, session: &mut SessionRecord) -> Result<CommandPayload, CommandError> {
    let Some(number) = cmd.strip_prefix("PTR/") else {
        return Err(CommandError::format(
            "Invalid format: Command must start with 'PTR/'",
            PTR_HINT,
        ));
    };

    if number.trim().is_empty() {
        return Err(CommandError::format(
            "Invalid format: PTR number is required after 'PTR/'",
            PTR_HINT,
        ));
    }

    if cmd.contains(' ') {
        return Err(CommandError::format(
            "Invalid format: Spaces are not allowed in the command",
            PTR_HINT,
        ));
    }

    if !valid_ptr_number(number) {
        return Err(CommandError::format(
            "Invalid format: PTR number must be exactly 6 hexadecimal characters (0-9, A-F)",
            PTR_HINT,
        ));
    }

    let ptr = Ptr::new(number);
    session.printer.confirm(&ptr).map_err(|e| match e {
        PrinterError::NothingAssigned => CommandError::reference(
            "Invalid: No PTR assigned via DSIV command. Please run DSIV[PTR NUMBER] first.",
            PTR_HINT,
        ),
        PrinterError::Mismatch {
            requested,
            assigned,
        } => CommandError::reference(
            format!(
                "Invalid: PTR number '{}' does not match the assigned PTR '{}' from DSIV command.",
                requested, assigned
            ),
            format!(
                "Please use the PTR number '{}' that was assigned via DSIV command.",
                assigned
            ),
        ),
        other => CommandError::reference(other.to_string(), PTR_HINT),
    })?;

    // The confirmation echo carries a space before the terminator.
    Ok(CommandPayload::PtrAssigned(PtrAssignedPayload {
        message: "PRINTER DESIGNATED".to_string(),
        ptr: ptr.to_string(),
        formatted: format!("{} «", cmd),
    }))
}

/// W' invoice entry: accepted as one exact literal, issues the ticket number.
pub fn invoice(
    cmd: &str,
    session: &mut SessionRecord,
    config: &TerminalConfig,
) -> Result<CommandPayload, CommandError> {
    if cmd != INVOICE_LITERAL {
        return Err(CommandError::format(
            "Invalid format: Command must match exactly 'W'PQ1N1.1'ABG'FINVAGT'KP7'",
            "Format: W'PQ1N1.1'ABG'FINVAGT'KP7, Example: W'PQ1N1.1'ABG'FINVAGT'KP7",
        ));
    }

    use rand::Rng;
    let mut rng = rand::thread_rng();
    let digits: String = (0..10)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect();
    let ticket_number = format!("{}{}", config.ticket_number_prefix, digits);
    session.set_ticket_number(ticket_number.clone());

    Ok(CommandPayload::Invoice(InvoicePayload {
        message: "Ticket number generated".to_string(),
        ticket_number,
        formatted: format!("{}«", cmd),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::ErrorKind;
    use sella_session::PrinterStage;

    fn issued_session() -> SessionRecord {
        let mut session = SessionRecord::new();
        session
            .printer
            .issue(vec![Ptr::new("30B6B2"), Ptr::new("6B8893")]);
        session
    }

    #[test]
    fn test_designate_requires_exact_literal() {
        let mut session = SessionRecord::new();
        let config = TerminalConfig::default();

        let err = designate("PE*NL1M", &mut session, &config).unwrap_err();
        assert_eq!(err.message, "Invalid format: Command must be exactly 'PE*NL1L'");
    }

    #[test]
    fn test_designate_issues_ptr_pool() {
        let mut session = SessionRecord::new();
        let config = TerminalConfig::default();

        let payload = designate("PE*NL1L", &mut session, &config).unwrap();
        match payload {
            CommandPayload::PrinterDesignate(p) => {
                assert_eq!(p.message, "Printer designation list");
                assert_eq!(p.entries.len(), 7);
                assert!(p.entries[..5]
                    .iter()
                    .all(|e| e.entry_type == DesignationType::Crt));
                for entry in &p.entries[5..] {
                    assert_eq!(entry.entry_type, DesignationType::Ptr);
                    assert!(valid_ptr_number(&entry.lniata));
                }
            }
            other => panic!("unexpected payload: {:?}", other),
        }
        assert_eq!(session.printer.stage(), PrinterStage::Issued);
        assert_eq!(session.printer.ptr_numbers.len(), 2);
    }

    #[test]
    fn test_confirm_country_code_rules() {
        let mut session = SessionRecord::new();

        let err = confirm("W*", &mut session).unwrap_err();
        assert_eq!(err.message, "Invalid format: Country code is required after 'W*'");

        let err = confirm("W*B D", &mut session).unwrap_err();
        assert_eq!(err.message, "Invalid format: Spaces are not allowed in the command");

        let err = confirm("W*BGD", &mut session).unwrap_err();
        assert_eq!(
            err.message,
            "Invalid format: Country code must be exactly 2 uppercase letters"
        );

        let payload = confirm("W*BD", &mut session).unwrap();
        match payload {
            CommandPayload::PrinterConfirm(p) => {
                assert_eq!(p.confirmation.country_code, "BD");
                assert!(p.confirmation.ok_number.starts_with("OK-"));
                assert_eq!(p.confirmation.ok_number.len(), 7);
                assert_eq!(p.confirmation.formatted, "W*BD«");
            }
            other => panic!("unexpected payload: {:?}", other),
        }
        assert!(session.printer_confirm.is_some());
    }

    #[test]
    fn test_dsiv_requires_issued_pool() {
        let mut session = SessionRecord::new();

        let err = dsiv("DSIV30B6B2", &mut session).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Reference);
        assert_eq!(
            err.message,
            "Invalid: No PTR numbers found. Please run PE*NL1L first to generate PTR numbers."
        );
    }

    #[test]
    fn test_dsiv_pool_membership() {
        let mut session = issued_session();

        let err = dsiv("DSIVFFFFFF", &mut session).unwrap_err();
        assert_eq!(
            err.message,
            "Invalid: PTR number 'FFFFFF' not found. Available PTR numbers: 30B6B2, 6B8893"
        );

        let payload = dsiv("DSIV30B6B2", &mut session).unwrap();
        match payload {
            CommandPayload::Dsiv(p) => {
                assert_eq!(p.message, "OK PTR ASSIGNED");
                assert_eq!(p.formatted, "DSIV30B6B2«");
            }
            other => panic!("unexpected payload: {:?}", other),
        }
        assert_eq!(session.printer.stage(), PrinterStage::Assigned);
    }

    #[test]
    fn test_dsiv_shape_errors() {
        let mut session = issued_session();

        let err = dsiv("DSIV", &mut session).unwrap_err();
        assert_eq!(err.message, "Invalid format: PTR number is required after 'DSIV'");

        let err = dsiv("DSIV30B6", &mut session).unwrap_err();
        assert_eq!(
            err.message,
            "Invalid format: PTR number must be exactly 6 hexadecimal characters (0-9, A-F)"
        );
    }

    #[test]
    fn test_ptr_assign_handshake() {
        let mut session = issued_session();

        let err = ptr_assign("PTR/30B6B2", &mut session).unwrap_err();
        assert_eq!(
            err.message,
            "Invalid: No PTR assigned via DSIV command. Please run DSIV[PTR NUMBER] first."
        );

        dsiv("DSIV30B6B2", &mut session).unwrap();

        let err = ptr_assign("PTR/6B8893", &mut session).unwrap_err();
        assert_eq!(
            err.message,
            "Invalid: PTR number '6B8893' does not match the assigned PTR '30B6B2' from DSIV command."
        );
        assert_eq!(
            err.suggestion,
            "Please use the PTR number '30B6B2' that was assigned via DSIV command."
        );

        let payload = ptr_assign("PTR/30B6B2", &mut session).unwrap();
        match payload {
            CommandPayload::PtrAssigned(p) => {
                assert_eq!(p.message, "PRINTER DESIGNATED");
                assert_eq!(p.formatted, "PTR/30B6B2 «");
            }
            other => panic!("unexpected payload: {:?}", other),
        }
        assert_eq!(session.printer.stage(), PrinterStage::Confirmed);
    }

    #[test]
    fn test_invoice_generates_ticket_number() {
        let mut session = SessionRecord::new();
        let config = TerminalConfig::default();

        let err = invoice("W'PQ1N1.1'ABG'FINVAGT'KP8", &mut session, &config).unwrap_err();
        assert_eq!(
            err.message,
            "Invalid format: Command must match exactly 'W'PQ1N1.1'ABG'FINVAGT'KP7'"
        );

        let payload = invoice(INVOICE_LITERAL, &mut session, &config).unwrap();
        match payload {
            CommandPayload::Invoice(p) => {
                assert_eq!(p.message, "Ticket number generated");
                assert_eq!(p.ticket_number.len(), 13);
                assert!(p.ticket_number.starts_with("157"));
                assert!(p.ticket_number.chars().all(|c| c.is_ascii_digit()));
                assert_eq!(session.ticket_number.as_deref(), Some(p.ticket_number.as_str()));
            }
            other => panic!("unexpected payload: {:?}", other),
        }
    }
}
