pub mod events;
pub mod printer;
pub mod record;

pub use events::{ChangeNotifier, SessionEvent, SessionField};
pub use printer::{PrinterError, PrinterHandshake, PrinterStage, Ptr};
pub use record::{
    AgencyDetails, Booking, EmailContact, MobileContact, PassengerName, PrinterConfirmation,
    ReceivedFrom, SessionRecord, Ticketing, TravelDocs,
};
