//! Table rendering for lookup results.

use comfy_table::{Cell, Table};

use adsbdb_core::types::{Aircraft, Airline, Airport, FlightRoute};

fn field_table(rows: Vec<(&str, String)>) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Field", "Value"]);
    for (name, value) in rows {
        table.add_row(vec![Cell::new(name), Cell::new(value)]);
    }
    table
}

fn opt(value: &Option<String>) -> String {
    value.as_deref().unwrap_or("-").to_string()
}

pub fn aircraft_table(aircraft: &Aircraft) -> Table {
    field_table(vec![
        ("Registration", aircraft.registration.clone()),
        ("Mode-S", aircraft.mode_s.clone()),
        ("Type", aircraft.aircraft_type.clone()),
        ("ICAO type", aircraft.icao_type.clone()),
        ("Manufacturer", aircraft.manufacturer.clone()),
        ("Owner", aircraft.registered_owner.clone()),
        (
            "Owner country",
            format!(
                "{} ({})",
                aircraft.registered_owner_country_name, aircraft.registered_owner_country_iso_name
            ),
        ),
        ("Operator flag", opt(&aircraft.registered_owner_operator_flag_code)),
        ("Photo", opt(&aircraft.url_photo)),
    ])
}

pub fn airline_table(airline: &Airline) -> Table {
    field_table(vec![
        ("Name", airline.name.clone()),
        ("ICAO", airline.icao.clone()),
        ("IATA", opt(&airline.iata)),
        ("Callsign", opt(&airline.callsign)),
        (
            "Country",
            format!("{} ({})", airline.country, airline.country_iso),
        ),
    ])
}

fn airport_summary(airport: &Airport) -> String {
    format!(
        "{} {}/{} ({}, {}) {:.4},{:.4} {:.0}ft",
        airport.name,
        airport.icao,
        airport.iata,
        airport.municipality,
        airport.country_iso_name,
        airport.latitude,
        airport.longitude,
        airport.elevation
    )
}

pub fn flight_route_table(route: &FlightRoute) -> Table {
    let airline = route
        .airline
        .as_ref()
        .map(|a| format!("{} ({})", a.name, a.icao))
        .unwrap_or("-".into());

    field_table(vec![
        ("Callsign", route.callsign.clone()),
        ("ICAO callsign", opt(&route.callsign_icao)),
        ("IATA callsign", opt(&route.callsign_iata)),
        ("Airline", airline),
        ("Origin", airport_summary(&route.origin)),
        ("Destination", airport_summary(&route.destination)),
    ])
}
