use sella_shared::Flight;

/// Filter the catalog down to one availability display: a travel date plus an
/// origin/destination pair, optionally narrowed to a single carrier code.
pub fn matching_flights(
    flights: &[Flight],
    date: &str,
    origin: &str,
    destination: &str,
    airline: Option<&str>,
) -> Vec<Flight> {
    let mut matches: Vec<Flight> = flights
        .iter()
        .filter(|flight| {
            flight.date == date
                && flight.origin.eq_ignore_ascii_case(origin)
                && flight.destination.eq_ignore_ascii_case(destination)
        })
        .cloned()
        .collect();

    if let Some(code) = airline {
        let code = code.trim();
        if !code.is_empty() {
            matches.retain(|flight| airline_matches(flight, code));
        }
    }

    matches
}

/// Carrier match for codeshare listings like "MH/FY". Tries each published
/// code three ways: exact, leading two letters, then substring.
///
/// TODO: the substring tier lets "H" hit "MH"; swap it for a lookup against
/// a real IATA carrier table once the catalog carries one.
pub fn airline_matches(flight: &Flight, query: &str) -> bool {
    let query = query.trim().to_ascii_uppercase();
    if query.is_empty() {
        return true;
    }

    flight.airline_codes().iter().any(|code| {
        let code = code.to_ascii_uppercase();
        if code == query {
            return true;
        }
        if query.len() == 2 && code.starts_with(&query) {
            return true;
        }
        code.contains(&query)
    })
}
