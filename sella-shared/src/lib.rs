pub mod dates;
pub mod models;
pub mod pii;

pub use models::fare::{FareDetail, PaymentFee, TaxBreakdown};
pub use models::flight::{Flight, TransitLeg};
pub use pii::Masked;
