use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};

use sella_shared::{FareDetail, Flight, Masked};

use crate::printer::PrinterHandshake;

/// Passenger name as captured by a name-insert entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PassengerName {
    pub last_name: String,
    pub first_name: String,
    pub title: String,
    pub formatted: String, // echo line, e.g. "-HOSSEN/TUSHAR MR<<"
}

/// Booking agency contact block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgencyDetails {
    pub agency_name: String,
    pub agency_phone: String,
    pub reservation_officer_name: String,
    pub formatted: String,
}

/// Ticketing time-limit entry. The grammar only accepts one spelling, so the
/// echo line is all that needs keeping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticketing {
    pub formatted: String,
}

/// "Received from" officer sign-off.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceivedFrom {
    pub reservation_officer_name: String,
    pub formatted: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MobileContact {
    pub number: String,
    pub formatted: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailContact {
    pub email: String, // kept in terminal form, "//" instead of "@"
    pub formatted: String,
}

/// Passport block from a DOCS entry. The passport number field is masked in
/// Debug output; the terminal echo line keeps the entry as typed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TravelDocs {
    pub passport_type: String,
    pub country_code: String,
    pub passport_number: Masked<String>,
    pub nationality: String,
    pub date_of_birth: String,
    pub gender: String,
    pub passport_expiry: String,
    pub last_name: String,
    pub first_name: String,
    pub formatted: String,
}

/// Country confirmation from the W* entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrinterConfirmation {
    pub country_code: String,
    pub ok_number: String, // e.g. "OK-0417"
    pub formatted: String,
}

/// One sold segment, with a snapshot of the flight as it was displayed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub number_of_passengers: u32,
    pub rbd: String,
    pub serial_number: String, // position in the availability display, as typed
    pub flight: Flight,
    pub command: String,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    pub fn new(number_of_passengers: u32, rbd: String, serial_number: String, flight: Flight, command: String) -> Self {
        Self {
            number_of_passengers,
            rbd,
            serial_number,
            flight,
            command,
            created_at: Utc::now(),
        }
    }
}

/// The single source of truth for one terminal session's reservation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    pub id: Uuid,
    pub bookings: Vec<Booking>,
    pub passenger_name: Option<PassengerName>,
    pub agency: Option<AgencyDetails>,
    pub ticketing: Option<Ticketing>,
    pub received: Option<ReceivedFrom>,
    pub mobile: Option<MobileContact>,
    pub email: Option<EmailContact>,
    pub docs: Option<TravelDocs>,
    pub fare_detail: Option<FareDetail>,
    pub printer: PrinterHandshake,
    pub printer_confirm: Option<PrinterConfirmation>,
    pub ticket_number: Option<String>,
    pub pnr: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SessionRecord {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            bookings: Vec::new(),
            passenger_name: None,
            agency: None,
            ticketing: None,
            received: None,
            mobile: None,
            email: None,
            docs: None,
            fare_detail: None,
            printer: PrinterHandshake::new(),
            printer_confirm: None,
            ticket_number: None,
            pnr: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Append a sold segment
    pub fn add_booking(&mut self, booking: Booking) {
        self.bookings.push(booking);
        self.touch();
    }

    pub fn latest_booking(&self) -> Option<&Booking> {
        self.bookings.last()
    }

    pub fn first_booking(&self) -> Option<&Booking> {
        self.bookings.first()
    }

    pub fn set_passenger_name(&mut self, name: PassengerName) {
        self.passenger_name = Some(name);
        self.touch();
    }

    pub fn set_agency(&mut self, agency: AgencyDetails) {
        self.agency = Some(agency);
        self.touch();
    }

    pub fn set_ticketing(&mut self, ticketing: Ticketing) {
        self.ticketing = Some(ticketing);
        self.touch();
    }

    pub fn set_received(&mut self, received: ReceivedFrom) {
        self.received = Some(received);
        self.touch();
    }

    pub fn set_mobile(&mut self, mobile: MobileContact) {
        self.mobile = Some(mobile);
        self.touch();
    }

    pub fn set_email(&mut self, email: EmailContact) {
        self.email = Some(email);
        self.touch();
    }

    pub fn set_docs(&mut self, docs: TravelDocs) {
        self.docs = Some(docs);
        self.touch();
    }

    /// Retain a price quote. Re-quoting replaces the stored fare.
    pub fn set_fare_detail(&mut self, fare: FareDetail) {
        self.fare_detail = Some(fare);
        self.touch();
    }

    pub fn set_printer_confirm(&mut self, confirm: PrinterConfirmation) {
        self.printer_confirm = Some(confirm);
        self.touch();
    }

    pub fn set_ticket_number(&mut self, number: String) {
        self.ticket_number = Some(number);
        self.touch();
    }

    /// Record the locator once generated; end/retrieve reuses it afterwards.
    pub fn set_pnr(&mut self, pnr: String) {
        self.pnr = Some(pnr);
        self.touch();
    }

    /// Ignore entry: drop every stored detail, locator and printer state
    /// included. The session id and creation time survive.
    pub fn reset(&mut self) {
        self.bookings.clear();
        self.passenger_name = None;
        self.agency = None;
        self.ticketing = None;
        self.received = None;
        self.mobile = None;
        self.email = None;
        self.docs = None;
        self.fare_detail = None;
        self.printer.reset();
        self.printer_confirm = None;
        self.ticket_number = None;
        self.pnr = None;
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Default for SessionRecord {
    fn default() -> Self {
        Self::new()
    }
}
