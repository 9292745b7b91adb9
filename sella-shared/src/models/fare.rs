use serde::{Deserialize, Serialize};

/// Published fare for one booking class on a flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FareDetail {
    pub class: String, // booking class, e.g. "Y"
    pub base_fare_usd: f64,
    pub base_fare_local: f64,
    pub fare_basis: String, // e.g. "N15BDOA"
    pub nvb: String,        // not valid before
    pub nva: String,        // not valid after
    pub baggage: String,    // e.g. "25K"
    pub taxes: TaxBreakdown,
    pub total_local: f64,
    pub nuc: f64,
    pub roe: f64,
    pub rate_used: String, // e.g. "1USD-122.48BDT"
    pub validating_carrier: String,
    pub branded_fare: Option<String>,
    pub change_fee: bool,
    pub refund_fee: bool,
    pub no_show_fee: bool,
    pub payment_fees: Option<Vec<PaymentFee>>,
}

/// Itemized taxes keyed by the carrier's two-letter codes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxBreakdown {
    #[serde(rename = "BD")]
    pub bd: f64,
    #[serde(rename = "UT")]
    pub ut: f64,
    #[serde(rename = "XT")]
    pub xt: f64,
    #[serde(rename = "W")]
    pub w: Option<f64>,
    #[serde(rename = "E5")]
    pub e5: Option<f64>,
    #[serde(rename = "YR")]
    pub yr: Option<f64>,
    #[serde(rename = "P8")]
    pub p8: Option<f64>,
    #[serde(rename = "P7")]
    pub p7: Option<f64>,
}

/// Card-scheme surcharge row shown under a stored quote.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentFee {
    pub description: String,
    pub fee: f64,
    pub total: f64,
}
