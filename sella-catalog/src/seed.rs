use uuid::Uuid;

use sella_shared::{FareDetail, Flight, PaymentFee, TaxBreakdown, TransitLeg};

/// Built-in demo catalog. Every terminal session prices and books against
/// this list, so the values stay stable across runs except for the ids.
pub fn seed_flights() -> Vec<Flight> {
    vec![
        Flight {
            id: Uuid::new_v4(),
            flight_number: "BG 123".to_string(),
            airline: "BG".to_string(),
            origin: "DAC".to_string(),
            destination: "BKK".to_string(),
            date: "15JUN".to_string(),
            departure_time: "08:25".to_string(),
            arrival_time: "12:10".to_string(),
            duration: "2H 45M".to_string(),
            aircraft: "787".to_string(),
            class: "J7 C7 Y9 M9 L9".to_string(),
            seats: 42,
            fare: 145.0,
            operates: "DAILY".to_string(),
            on_time: "ON TIME 90%".to_string(),
            air_miles: 970,
            meals: Some("MEALS".to_string()),
            equipment: None,
            terminal: Some("T1".to_string()),
            connectivity: Some("WIFI".to_string()),
            fare_details: Some(vec![
                FareDetail {
                    class: "J".to_string(),
                    base_fare_usd: 340.0,
                    base_fare_local: 41643.0,
                    fare_basis: "JRTOW".to_string(),
                    nvb: "15JUN".to_string(),
                    nva: "15DEC".to_string(),
                    baggage: "40K".to_string(),
                    taxes: TaxBreakdown {
                        bd: 500.0,
                        ut: 500.0,
                        xt: 2610.0,
                        w: None,
                        e5: Some(96.0),
                        yr: None,
                        p8: None,
                        p7: None,
                    },
                    total_local: 45349.0,
                    nuc: 340.0,
                    roe: 1.0,
                    rate_used: "1USD-122.48BDT".to_string(),
                    validating_carrier: "BG".to_string(),
                    branded_fare: Some("BUSINESS FLEX".to_string()),
                    change_fee: false,
                    refund_fee: true,
                    no_show_fee: false,
                    payment_fees: None,
                },
                FareDetail {
                    class: "Y".to_string(),
                    base_fare_usd: 145.0,
                    base_fare_local: 17760.0,
                    fare_basis: "YRTOW".to_string(),
                    nvb: "15JUN".to_string(),
                    nva: "15DEC".to_string(),
                    baggage: "30K".to_string(),
                    taxes: TaxBreakdown {
                        bd: 500.0,
                        ut: 500.0,
                        xt: 2075.0,
                        w: None,
                        e5: Some(96.0),
                        yr: None,
                        p8: None,
                        p7: None,
                    },
                    total_local: 20931.0,
                    nuc: 145.0,
                    roe: 1.0,
                    rate_used: "1USD-122.48BDT".to_string(),
                    validating_carrier: "BG".to_string(),
                    branded_fare: Some("ECONOMY FLEX".to_string()),
                    change_fee: true,
                    refund_fee: true,
                    no_show_fee: false,
                    payment_fees: Some(vec![
                        PaymentFee {
                            description: "VISA CREDIT 1.5PCT".to_string(),
                            fee: 314.0,
                            total: 21245.0,
                        },
                        PaymentFee {
                            description: "AMEX CREDIT 3.0PCT".to_string(),
                            fee: 628.0,
                            total: 21559.0,
                        },
                    ]),
                },
                FareDetail {
                    class: "M".to_string(),
                    base_fare_usd: 132.0,
                    base_fare_local: 16167.0,
                    fare_basis: "MRTOW".to_string(),
                    nvb: "15JUN".to_string(),
                    nva: "15SEP".to_string(),
                    baggage: "25K".to_string(),
                    taxes: TaxBreakdown {
                        bd: 500.0,
                        ut: 500.0,
                        xt: 2075.0,
                        w: None,
                        e5: Some(96.0),
                        yr: None,
                        p8: None,
                        p7: None,
                    },
                    total_local: 19338.0,
                    nuc: 132.0,
                    roe: 1.0,
                    rate_used: "1USD-122.48BDT".to_string(),
                    validating_carrier: "BG".to_string(),
                    branded_fare: Some("ECONOMY SAVER".to_string()),
                    change_fee: true,
                    refund_fee: false,
                    no_show_fee: false,
                    payment_fees: None,
                },
            ]),
            transit: None,
        },
        Flight {
            id: Uuid::new_v4(),
            flight_number: "TG 322".to_string(),
            airline: "TG".to_string(),
            origin: "DAC".to_string(),
            destination: "BKK".to_string(),
            date: "15JUN".to_string(),
            departure_time: "13:30".to_string(),
            arrival_time: "17:05".to_string(),
            duration: "2H 35M".to_string(),
            aircraft: "77W".to_string(),
            class: "C5 Y9 B9 H9".to_string(),
            seats: 35,
            fare: 128.0,
            operates: "DAILY".to_string(),
            on_time: "ON TIME 85%".to_string(),
            air_miles: 970,
            meals: Some("MEALS".to_string()),
            equipment: None,
            terminal: Some("T1".to_string()),
            connectivity: None,
            fare_details: Some(vec![FareDetail {
                class: "Y".to_string(),
                base_fare_usd: 128.0,
                base_fare_local: 15677.0,
                fare_basis: "YOWTG".to_string(),
                nvb: "15JUN".to_string(),
                nva: "15DEC".to_string(),
                baggage: "30K".to_string(),
                taxes: TaxBreakdown {
                    bd: 500.0,
                    ut: 500.0,
                    xt: 2210.0,
                    w: None,
                    e5: None,
                    yr: None,
                    p8: None,
                    p7: None,
                },
                total_local: 18887.0,
                nuc: 128.0,
                roe: 1.0,
                rate_used: "1USD-122.48BDT".to_string(),
                validating_carrier: "TG".to_string(),
                branded_fare: None,
                change_fee: true,
                refund_fee: false,
                no_show_fee: false,
                payment_fees: None,
            }]),
            transit: None,
        },
        Flight {
            id: Uuid::new_v4(),
            flight_number: "BG 147".to_string(),
            airline: "BG".to_string(),
            origin: "DAC".to_string(),
            destination: "BKK".to_string(),
            date: "22JUN".to_string(),
            departure_time: "11:15".to_string(),
            arrival_time: "15:00".to_string(),
            duration: "2H 45M".to_string(),
            aircraft: "738".to_string(),
            class: "Y9 M9 L9 K9".to_string(),
            seats: 60,
            fare: 139.0,
            operates: "MO WE FR".to_string(),
            on_time: "ON TIME 80%".to_string(),
            air_miles: 970,
            meals: None,
            equipment: None,
            terminal: Some("T1".to_string()),
            connectivity: None,
            fare_details: None,
            transit: None,
        },
        Flight {
            id: Uuid::new_v4(),
            flight_number: "MH 196".to_string(),
            airline: "MH/FY".to_string(),
            origin: "DAC".to_string(),
            destination: "KUL".to_string(),
            date: "15JUN".to_string(),
            departure_time: "09:45".to_string(),
            arrival_time: "15:55".to_string(),
            duration: "4H 10M".to_string(),
            aircraft: "738".to_string(),
            class: "Y9 B9 H9 K9".to_string(),
            seats: 48,
            fare: 205.0,
            operates: "DAILY".to_string(),
            on_time: "ON TIME 88%".to_string(),
            air_miles: 1555,
            meals: Some("MEALS".to_string()),
            equipment: None,
            terminal: None,
            connectivity: Some("WIFI".to_string()),
            fare_details: Some(vec![FareDetail {
                class: "Y".to_string(),
                base_fare_usd: 205.0,
                base_fare_local: 25108.0,
                fare_basis: "YLRTMY".to_string(),
                nvb: "15JUN".to_string(),
                nva: "15JUL".to_string(),
                baggage: "30K".to_string(),
                taxes: TaxBreakdown {
                    bd: 500.0,
                    ut: 500.0,
                    xt: 2690.0,
                    w: None,
                    e5: None,
                    yr: None,
                    p8: None,
                    p7: None,
                },
                total_local: 28798.0,
                nuc: 205.0,
                roe: 1.0,
                rate_used: "1USD-122.48BDT".to_string(),
                validating_carrier: "MH".to_string(),
                branded_fare: None,
                change_fee: true,
                refund_fee: false,
                no_show_fee: true,
                payment_fees: None,
            }]),
            transit: None,
        },
        Flight {
            id: Uuid::new_v4(),
            flight_number: "SQ 449".to_string(),
            airline: "SQ".to_string(),
            origin: "DAC".to_string(),
            destination: "SIN".to_string(),
            date: "12JAN".to_string(),
            departure_time: "10:45".to_string(),
            arrival_time: "17:15".to_string(),
            duration: "4H 30M".to_string(),
            aircraft: "359".to_string(),
            class: "J9 Y9 B9 E9".to_string(),
            seats: 50,
            fare: 310.0,
            operates: "DAILY".to_string(),
            on_time: "ON TIME 95%".to_string(),
            air_miles: 1790,
            meals: Some("MEALS".to_string()),
            equipment: None,
            terminal: Some("T3".to_string()),
            connectivity: Some("WIFI".to_string()),
            fare_details: None,
            transit: None,
        },
        Flight {
            id: Uuid::new_v4(),
            flight_number: "BG 584".to_string(),
            airline: "BG".to_string(),
            origin: "DAC".to_string(),
            destination: "SIN".to_string(),
            date: "12JAN".to_string(),
            departure_time: "08:30".to_string(),
            arrival_time: "16:40".to_string(),
            duration: "6H 10M".to_string(),
            aircraft: "738".to_string(),
            class: "J5 C5 Y9 M9".to_string(),
            seats: 28,
            fare: 265.0,
            operates: "TU TH SA".to_string(),
            on_time: "ON TIME 75%".to_string(),
            air_miles: 1790,
            meals: Some("SNACKS".to_string()),
            equipment: None,
            terminal: Some("T1".to_string()),
            connectivity: None,
            fare_details: None,
            transit: Some(TransitLeg {
                city: "CGP".to_string(),
                arrival_time: "09:40".to_string(),
                departure_time: "10:50".to_string(),
                layover_duration: "1H 10M".to_string(),
            }),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_covers_primary_route() {
        let flights = seed_flights();

        let bg = flights
            .iter()
            .find(|f| f.flight_number == "BG 123")
            .unwrap();
        assert_eq!(bg.origin, "DAC");
        assert_eq!(bg.destination, "BKK");
        assert!(bg.has_class("Y"));
        assert!(bg.fare_details.is_some());

        // Codeshare listing and a fare-less flight both stay in the seed so
        // the carrier filter and the fare-scan failure path stay reachable.
        assert!(flights.iter().any(|f| f.airline.contains('/')));
        assert!(flights.iter().any(|f| f.fare_details.is_none()));
    }

    #[test]
    fn test_seed_totals_are_tax_consistent() {
        for flight in seed_flights() {
            for fare in flight.fare_details.iter().flatten() {
                let taxes = fare.taxes.bd
                    + fare.taxes.ut
                    + fare.taxes.xt
                    + fare.taxes.w.unwrap_or(0.0)
                    + fare.taxes.e5.unwrap_or(0.0)
                    + fare.taxes.yr.unwrap_or(0.0)
                    + fare.taxes.p8.unwrap_or(0.0)
                    + fare.taxes.p7.unwrap_or(0.0);
                let expected = fare.base_fare_local + taxes;
                assert!(
                    (fare.total_local - expected).abs() < 0.01,
                    "{} {} totals drift",
                    flight.flight_number,
                    fare.class
                );
            }
        }
    }
}
