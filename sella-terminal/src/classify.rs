use serde::{Deserialize, Serialize};

/// Command families the terminal understands. One variant per grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommandFamily {
    AvailabilityCheck,
    SeatSell,
    Wpa,
    Wpncb,
    PriceQuote,
    PriceCheck,
    NameInsert,
    AgencyDetails,
    Ticketing,
    Received,
    MobileNumber,
    EmailAddress,
    DocsInsert,
    PrinterDesignate,
    PrinterConfirm,
    Dsiv,
    PtrAssign,
    Invoice,
    EndRetrieve,
    IgnoreRetrieve,
    TicketDetails,
    ClearSegments,
}

impl CommandFamily {
    /// Canonical format string shown with every diagnostic for this family.
    pub fn format(&self) -> &'static str {
        match self {
            CommandFamily::AvailabilityCheck => "1[DD][MON][FROM][TO][AIRLINE]",
            CommandFamily::SeatSell => "0[Number of Passenger][RBD][Serial Number]",
            CommandFamily::Wpa => "WPA",
            CommandFamily::Wpncb => "WPNCB",
            CommandFamily::PriceQuote => "PQ",
            CommandFamily::PriceCheck => "*PQ",
            CommandFamily::NameInsert => "-[Last Name]/[First Name][Space][Name Title]",
            CommandFamily::AgencyDetails => {
                "9[Space][Agency Name][Space][Agency Phone][Space][Reservation Officer Name]"
            }
            CommandFamily::Ticketing => "7TAW/",
            CommandFamily::Received => "6 [Reservation Officer Name]",
            CommandFamily::MobileNumber => "3CTCM/[Passenger Mobile Number]",
            CommandFamily::EmailAddress => "3CTCE/[Passenger Email Address]",
            CommandFamily::DocsInsert => {
                "3DOCS/[Passport type]/[Country Code]/[Passport Number]/[Nationality]/[Date of Birth]/[Gender]/[Passport Expiry Date]/[Passenger Name]"
            }
            CommandFamily::PrinterDesignate => "PE*[Agency Code(PCC)]",
            CommandFamily::PrinterConfirm => "W*[Country Code]",
            CommandFamily::Dsiv => "DSIV[PTR NUMBER]",
            CommandFamily::PtrAssign => "PTR/[PTR NUMBER]",
            CommandFamily::Invoice => "W'PQ1N1.1'ABG'FINVAGT'KP7",
            CommandFamily::EndRetrieve => "ER",
            CommandFamily::IgnoreRetrieve => "IR",
            CommandFamily::TicketDetails => "*A",
            CommandFamily::ClearSegments => "IG",
        }
    }

    /// Worked example paired with the format string.
    pub fn example(&self) -> &'static str {
        match self {
            CommandFamily::AvailabilityCheck => "115JUNDACBKK BG",
            CommandFamily::SeatSell => "01Y2",
            CommandFamily::Wpa => "WPA",
            CommandFamily::Wpncb => "WPNCB",
            CommandFamily::PriceQuote => "PQ",
            CommandFamily::PriceCheck => "*PQ",
            CommandFamily::NameInsert => "-HOSSEN/TUSHAR MR",
            CommandFamily::AgencyDetails => "9 Flyger 01717171717 IMRAN",
            CommandFamily::Ticketing => "7TAW/",
            CommandFamily::Received => "6 IMRAN",
            CommandFamily::MobileNumber => "3CTCM/01919919191",
            CommandFamily::EmailAddress => "3CTCE/example@gmail.com",
            CommandFamily::DocsInsert => "3DOCS/P/BGD/A1234567890/BGD/22JUN98/M/25DEC30/HOSSEN/TUSHAR",
            CommandFamily::PrinterDesignate => "PE*NL1L",
            CommandFamily::PrinterConfirm => "W*BD",
            CommandFamily::Dsiv => "DSIV30B6B2",
            CommandFamily::PtrAssign => "PTR/30B6B2",
            CommandFamily::Invoice => "W'PQ1N1.1'ABG'FINVAGT'KP7",
            CommandFamily::EndRetrieve => "ER",
            CommandFamily::IgnoreRetrieve => "IR",
            CommandFamily::TicketDetails => "*A",
            CommandFamily::ClearSegments => "IG",
        }
    }
}

/// Structural test for an availability display request: `1`, then one or two
/// day digits, then at least nine uppercase letters (MON + FROM + TO). Runs
/// on the space-stripped form so `1 15JUN DAC BKK` classifies the same as
/// `115JUNDACBKK`.
fn looks_like_availability(cmd: &str) -> bool {
    let cleaned: String = cmd.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = cleaned.as_bytes();

    if bytes.first() != Some(&b'1') {
        return false;
    }

    let digits = bytes[1..].iter().take_while(|b| b.is_ascii_digit()).count();
    if digits < 1 || digits > 2 {
        return false;
    }

    let rest = &bytes[1 + digits..];
    rest.len() >= 9 && rest[..9].iter().all(|b| b.is_ascii_uppercase())
}

/// Map a normalized (trimmed, uppercased) command onto its family. The
/// predicate order comes from the terminal being emulated and several
/// prefixes overlap, so it must not be reordered: `7TAW/` has to hit the
/// ticketing arm before anything else starting with a digit, `*PQ` must be
/// tested as an exact string before the `*A` view, and so on.
pub fn classify(cmd: &str) -> Option<CommandFamily> {
    if looks_like_availability(cmd) {
        return Some(CommandFamily::AvailabilityCheck);
    }
    if cmd == "ER" {
        return Some(CommandFamily::EndRetrieve);
    }
    if cmd == "IR" {
        return Some(CommandFamily::IgnoreRetrieve);
    }
    if cmd == "*A" {
        return Some(CommandFamily::TicketDetails);
    }
    if cmd.starts_with('6') {
        return Some(CommandFamily::Received);
    }
    if cmd.starts_with('7') {
        return Some(CommandFamily::Ticketing);
    }
    if cmd.starts_with('0') && !cmd.contains("OSI") {
        return Some(CommandFamily::SeatSell);
    }
    if cmd == "WPA" {
        return Some(CommandFamily::Wpa);
    }
    if cmd == "WPNCB" {
        return Some(CommandFamily::Wpncb);
    }
    if cmd == "PQ" {
        return Some(CommandFamily::PriceQuote);
    }
    if cmd == "*PQ" {
        return Some(CommandFamily::PriceCheck);
    }
    if cmd.starts_with("PE*") {
        return Some(CommandFamily::PrinterDesignate);
    }
    if cmd.starts_with("W'") {
        return Some(CommandFamily::Invoice);
    }
    if cmd.starts_with("W*") {
        return Some(CommandFamily::PrinterConfirm);
    }
    if cmd.starts_with("DSIV") {
        return Some(CommandFamily::Dsiv);
    }
    if cmd.starts_with("PTR/") {
        return Some(CommandFamily::PtrAssign);
    }
    if cmd.starts_with('-') {
        return Some(CommandFamily::NameInsert);
    }
    if cmd.starts_with('9') {
        return Some(CommandFamily::AgencyDetails);
    }
    if cmd.starts_with("3CTCM/") {
        return Some(CommandFamily::MobileNumber);
    }
    if cmd.starts_with("3CTCE/") {
        return Some(CommandFamily::EmailAddress);
    }
    if cmd.starts_with("3DOCS/") {
        return Some(CommandFamily::DocsInsert);
    }
    if cmd == "IG" || cmd == "I" {
        return Some(CommandFamily::ClearSegments);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_availability_structure() {
        assert_eq!(classify("115JUNDACBKK"), Some(CommandFamily::AvailabilityCheck));
        assert_eq!(classify("115JUNDACBKK BG"), Some(CommandFamily::AvailabilityCheck));
        assert_eq!(classify("1 15JUN DAC BKK"), Some(CommandFamily::AvailabilityCheck));
        // "15JUNDACBKK" still fits: day 5, month JUN
        assert_eq!(classify("15JUNDACBKK"), Some(CommandFamily::AvailabilityCheck));
        assert_eq!(classify("1234JUNDACBKK"), None); // three day digits
    }

    #[test]
    fn test_exact_families_win_over_prefixes() {
        assert_eq!(classify("ER"), Some(CommandFamily::EndRetrieve));
        assert_eq!(classify("IR"), Some(CommandFamily::IgnoreRetrieve));
        assert_eq!(classify("*A"), Some(CommandFamily::TicketDetails));
        assert_eq!(classify("*PQ"), Some(CommandFamily::PriceCheck));
        assert_eq!(classify("PQ"), Some(CommandFamily::PriceQuote));
        assert_eq!(classify("WPA"), Some(CommandFamily::Wpa));
        assert_eq!(classify("WPNCB"), Some(CommandFamily::Wpncb));
        assert_eq!(classify("I"), Some(CommandFamily::ClearSegments));
        assert_eq!(classify("IG"), Some(CommandFamily::ClearSegments));
    }

    #[test]
    fn test_prefix_families() {
        assert_eq!(classify("6 IMRAN"), Some(CommandFamily::Received));
        assert_eq!(classify("7TAW/"), Some(CommandFamily::Ticketing));
        assert_eq!(classify("01Y2"), Some(CommandFamily::SeatSell));
        assert_eq!(classify("PE*NL1L"), Some(CommandFamily::PrinterDesignate));
        assert_eq!(classify("W'PQ1N1.1'ABG'FINVAGT'KP7"), Some(CommandFamily::Invoice));
        assert_eq!(classify("W*BD"), Some(CommandFamily::PrinterConfirm));
        assert_eq!(classify("DSIV30B6B2"), Some(CommandFamily::Dsiv));
        assert_eq!(classify("PTR/30B6B2"), Some(CommandFamily::PtrAssign));
        assert_eq!(classify("-HOSSEN/TUSHAR MR"), Some(CommandFamily::NameInsert));
        assert_eq!(classify("9 FLYGER 01717452756 IMRAN"), Some(CommandFamily::AgencyDetails));
        assert_eq!(classify("3CTCM/01919919191"), Some(CommandFamily::MobileNumber));
        assert_eq!(classify("3CTCE/EXAMPLE//GMAIL.COM"), Some(CommandFamily::EmailAddress));
        assert_eq!(classify("3DOCS/P/BGD/A1234567890/BGD/22JUN98/M/25DEC30/HOSSEN/TUSHAR"), Some(CommandFamily::DocsInsert));
    }

    #[test]
    fn test_osi_entries_are_not_seat_sells() {
        assert_eq!(classify("0OSI YY FREE TEXT"), None);
    }

    #[test]
    fn test_unknown_input() {
        assert_eq!(classify("XYZZY"), None);
        assert_eq!(classify(""), None);
    }
}
