use serde::{Deserialize, Serialize};

use sella_shared::{FareDetail, Flight};

/// One published fare paired with the flight it belongs to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedFare {
    pub flight: Flight,
    pub fare_detail: FareDetail,
}

/// Result of a best-buy sweep: the cheapest fare plus every published fare
/// ranked by local-currency total, ascending.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FareScan {
    pub lowest: RankedFare,
    pub ranked: Vec<RankedFare>,
}

/// Fare published for a booking class on one flight, if the carrier filed one.
pub fn fare_for_class<'a>(flight: &'a Flight, rbd: &str) -> Option<&'a FareDetail> {
    flight
        .fare_details
        .as_ref()?
        .iter()
        .find(|fare| fare.class == rbd)
}

/// Sweep every published fare across the flight list. Ties on the total keep
/// catalog order, so the cheapest entry is the first one filed at that price.
pub fn scan_fares(flights: &[Flight]) -> Result<FareScan, FareScanError> {
    if flights.is_empty() {
        return Err(FareScanError::NoFlights);
    }

    let mut ranked: Vec<RankedFare> = Vec::new();
    for flight in flights {
        if let Some(fares) = &flight.fare_details {
            for fare in fares {
                ranked.push(RankedFare {
                    flight: flight.clone(),
                    fare_detail: fare.clone(),
                });
            }
        }
    }

    if ranked.is_empty() {
        return Err(FareScanError::NoFaresPublished);
    }

    ranked.sort_by(|a, b| {
        a.fare_detail
            .total_local
            .partial_cmp(&b.fare_detail.total_local)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    let lowest = ranked[0].clone();

    Ok(FareScan { lowest, ranked })
}

#[derive(Debug, thiserror::Error)]
pub enum FareScanError {
    #[error("No flights available")]
    NoFlights,

    #[error("No fare details available for any flights")]
    NoFaresPublished,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_flights;

    #[test]
    fn test_fare_for_class_finds_published_fare() {
        let flights = seed_flights();
        let bg = flights
            .iter()
            .find(|f| f.flight_number == "BG 123")
            .unwrap();

        let fare = fare_for_class(bg, "Y").unwrap();
        assert_eq!(fare.class, "Y");

        assert!(fare_for_class(bg, "F").is_none());
    }

    #[test]
    fn test_scan_ranks_fares_ascending() {
        let flights = seed_flights();
        let scan = scan_fares(&flights).unwrap();

        assert_eq!(scan.lowest.fare_detail.total_local, scan.ranked[0].fare_detail.total_local);
        for pair in scan.ranked.windows(2) {
            assert!(pair[0].fare_detail.total_local <= pair[1].fare_detail.total_local);
        }
    }

    #[test]
    fn test_scan_rejects_empty_list() {
        assert!(matches!(scan_fares(&[]), Err(FareScanError::NoFlights)));
    }

    #[test]
    fn test_scan_requires_at_least_one_published_fare() {
        let flights = seed_flights();
        let unpublished: Vec<_> = flights
            .into_iter()
            .filter(|f| f.fare_details.is_none())
            .collect();
        assert!(!unpublished.is_empty());

        assert!(matches!(
            scan_fares(&unpublished),
            Err(FareScanError::NoFaresPublished)
        ));
    }
}
