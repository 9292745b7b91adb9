use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use sella_catalog::RankedFare;
use sella_session::{
    AgencyDetails, Booking, EmailContact, MobileContact, PassengerName, PrinterConfirmation,
    ReceivedFrom, Ticketing, TravelDocs,
};
use sella_shared::{FareDetail, Flight};

use crate::classify::CommandFamily;

/// Envelope returned for every interpreted command, error or not.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandResult {
    pub family: CommandFamily,
    pub payload: CommandPayload,
    pub raw_command: String,
    pub timestamp: DateTime<Utc>,
}

impl CommandResult {
    pub fn ok(family: CommandFamily, raw_command: &str, payload: CommandPayload) -> Self {
        Self {
            family,
            payload,
            raw_command: raw_command.to_string(),
            timestamp: Utc::now(),
        }
    }

    /// Wrap a grammar failure, attaching the family's canonical format and
    /// example strings to the diagnostic.
    pub fn fail(family: CommandFamily, raw_command: &str, error: CommandError) -> Self {
        let payload = CommandPayload::Error(ErrorPayload {
            kind: error.kind,
            message: error.message,
            suggestion: error.suggestion,
            format: family.format().to_string(),
            example: family.example().to_string(),
        });
        Self::ok(family, raw_command, payload)
    }

    pub fn is_error(&self) -> bool {
        matches!(self.payload, CommandPayload::Error(_))
    }
}

/// Family-specific result data, tagged for the embedding display layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CommandPayload {
    Availability(AvailabilityPayload),
    Booking(BookingPayload),
    Wpa(WpaPayload),
    Wpncb(WpncbPayload),
    NameInsert(NameInsertPayload),
    AgencyDetails(AgencyPayload),
    Ticketing(TicketingPayload),
    Received(ReceivedPayload),
    Mobile(MobilePayload),
    Email(EmailPayload),
    DocsInsert(DocsPayload),
    PriceQuote(PriceQuotePayload),
    PriceCheck(PriceCheckPayload),
    PrinterDesignate(PrinterDesignatePayload),
    PrinterConfirm(PrinterConfirmPayload),
    Dsiv(DsivPayload),
    PtrAssigned(PtrAssignedPayload),
    Invoice(InvoicePayload),
    TicketDetails(TicketDetailsPayload),
    Pnr(PnrPayload),
    Clear(ClearPayload),
    Error(ErrorPayload),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityPayload {
    pub flights: Vec<Flight>,
    pub date: String, // echoed back zero-padded, e.g. "05JUN"
    pub route: String, // "DAC/BKK"
    pub origin: String,
    pub destination: String,
    pub airline: String, // empty when no carrier filter was given
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingPayload {
    pub message: String,
    pub booking: Booking,
    pub flight_number: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WpaPayload {
    pub booking: Booking,
    pub fare_detail: FareDetail,
    pub passenger_type: String, // always "ADT"
    pub passenger_count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WpncbPayload {
    pub lowest: RankedFare,
    pub ranked: Vec<RankedFare>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NameInsertPayload {
    pub message: String,
    pub name: PassengerName,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgencyPayload {
    pub message: String,
    pub agency: AgencyDetails,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketingPayload {
    pub message: String,
    pub ticketing: Ticketing,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceivedPayload {
    pub message: String,
    pub received: ReceivedFrom,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MobilePayload {
    pub message: String,
    pub contact: MobileContact,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailPayload {
    pub message: String,
    pub contact: EmailContact,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocsPayload {
    pub message: String,
    pub docs: TravelDocs,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceQuotePayload {
    pub message: String,
    pub fare_detail: FareDetail,
    pub passenger_name_line: String, // "1.HOSSEN/TUSHAR MR", empty without a name
    pub deadline: String,            // "DDMONYY/2359"
    pub segment_line: String,
    pub fare_construction: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceCheckPayload {
    pub message: String,
    pub fare_detail: FareDetail,
}

/// Device class on the designation list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DesignationType {
    #[serde(rename = "CRT")]
    Crt,
    #[serde(rename = "PTR")]
    Ptr,
}

/// One row of the PE* designation list. TA/POOL/IND columns are blank on the
/// emulated terminal but kept so the display lines up.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignationEntry {
    pub lniata: String,
    #[serde(rename = "type")]
    pub entry_type: DesignationType,
    pub tapool: String,
    pub pool: String,
    pub ind: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrinterDesignatePayload {
    pub message: String,
    pub entries: Vec<DesignationEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrinterConfirmPayload {
    pub message: String,
    pub confirmation: PrinterConfirmation,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DsivPayload {
    pub message: String,
    pub ptr: String,
    pub formatted: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PtrAssignedPayload {
    pub message: String,
    pub ptr: String,
    pub formatted: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoicePayload {
    pub message: String,
    pub ticket_number: String,
    pub formatted: String,
}

/// ER / IR view. Lines whose source fields are unset come back empty rather
/// than absent, matching the fixed-layout terminal screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PnrPayload {
    pub mode: String, // "ER" or "IR"
    pub pnr: String,
    pub name_line: String,
    pub segment_line: String,
    pub tkt_limit: String,
    pub phones: String,
    pub received_from: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketDetailsPayload {
    pub pnr: String,
    pub passenger_name_line: String,
    pub segment_line: String,
    pub tkt_time_limit: String,
    pub phones_line: String,
    pub general_facts: Vec<String>,
    pub received_from: String,
    pub record_locator: String,
    pub has_passenger_detail: bool,
    pub has_price_quote: bool,
    pub has_security_info: bool,
    pub has_ticket_number: bool,
    pub ticket_number: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClearPayload {
    pub message: String,
    pub clear_storage: bool,
}

/// Why a command was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    Format,
    Reference,
    DomainRule,
}

/// Uniform diagnostic payload: what went wrong, how to fix it, and the
/// family's canonical format with a worked example.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub kind: ErrorKind,
    pub message: String,
    pub suggestion: String,
    pub format: String,
    pub example: String,
}

/// Grammar-internal failure carried up to the dispatcher, which attaches the
/// family templates before handing the result back.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct CommandError {
    pub kind: ErrorKind,
    pub message: String,
    pub suggestion: String,
}

impl CommandError {
    pub fn format(message: impl Into<String>, suggestion: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Format,
            message: message.into(),
            suggestion: suggestion.into(),
        }
    }

    pub fn reference(message: impl Into<String>, suggestion: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Reference,
            message: message.into(),
            suggestion: suggestion.into(),
        }
    }

    pub fn domain(message: impl Into<String>, suggestion: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::DomainRule,
            message: message.into(),
            suggestion: suggestion.into(),
        }
    }
}
