//! Response mappers — reshape decoded adsbdb payloads into typed records.
//!
//! Unknown fields are ignored everywhere. A mapper either returns a complete
//! record or a [`AdsbdbError::Mapping`]; there are no partial records.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::types::{AdsbdbError, Aircraft, Airline, Airport, FlightRoute, Result};

/// Placeholder for airline fields the payload leaves out.
pub const MISSING_FIELD: &str = "None";

fn mapping_error(msg: impl Into<String>) -> AdsbdbError {
    AdsbdbError::Mapping(msg.into())
}

// ---------------------------------------------------------------------------
// Aircraft
// ---------------------------------------------------------------------------

/// Map `{ "aircraft": {...} }` into an [`Aircraft`].
///
/// Optional fields missing from the payload become `None`; a missing
/// required field is an error.
pub fn map_aircraft(body: &Value) -> Result<Aircraft> {
    let data = body
        .get("aircraft")
        .filter(|v| v.is_object())
        .ok_or_else(|| mapping_error("Invalid aircraft data format."))?;

    Aircraft::deserialize(data)
        .map_err(|e| mapping_error(format!("Failed to parse aircraft data: {e}")))
}

// ---------------------------------------------------------------------------
// Airline
// ---------------------------------------------------------------------------

/// Map `{ "response": [ {...}, ... ] }` into an [`Airline`], using element 0.
///
/// Fields absent from the payload are filled with the literal string
/// `"None"` rather than left empty. An explicit JSON `null` on `iata` or
/// `callsign` maps to `None`.
pub fn map_airline(body: &Value) -> Result<Airline> {
    let first = body
        .get("response")
        .and_then(Value::as_array)
        .and_then(|entries| entries.first())
        .and_then(Value::as_object)
        .ok_or_else(|| mapping_error("Invalid airline data format."))?;

    map_airline_object(first)
}

fn map_airline_object(obj: &Map<String, Value>) -> Result<Airline> {
    Ok(Airline {
        name: required_str(obj, "name")?,
        icao: required_str(obj, "icao")?,
        iata: optional_str(obj, "iata")?,
        country: required_str(obj, "country")?,
        country_iso: required_str(obj, "country_iso")?,
        callsign: optional_str(obj, "callsign")?,
    })
}

fn required_str(obj: &Map<String, Value>, key: &str) -> Result<String> {
    match obj.get(key) {
        None => Ok(MISSING_FIELD.to_string()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(bad_airline_field(key, other)),
    }
}

fn optional_str(obj: &Map<String, Value>, key: &str) -> Result<Option<String>> {
    match obj.get(key) {
        None => Ok(Some(MISSING_FIELD.to_string())),
        Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(bad_airline_field(key, other)),
    }
}

fn bad_airline_field(key: &str, value: &Value) -> AdsbdbError {
    mapping_error(format!(
        "Failed to parse airline data: field `{key}` is {value}, expected a string"
    ))
}

// ---------------------------------------------------------------------------
// Flight route + airports
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct RawFlightRoute {
    callsign: String,
    callsign_icao: Option<String>,
    callsign_iata: Option<String>,
    airline: Option<Value>,
    origin: Value,
    destination: Value,
}

/// Map `{ "response": { "flightroute": {...} } }` into a [`FlightRoute`].
pub fn map_flight_route(body: &Value) -> Result<FlightRoute> {
    let data = body
        .get("response")
        .and_then(|r| r.get("flightroute"))
        .filter(|v| v.is_object())
        .ok_or_else(|| mapping_error("Invalid flight route data format."))?;

    let raw = RawFlightRoute::deserialize(data)
        .map_err(|e| mapping_error(format!("Failed to parse flight route data: {e}")))?;

    let airline = match raw.airline {
        None => None,
        Some(Value::Object(obj)) => Some(map_airline_object(&obj)?),
        Some(_) => return Err(mapping_error("Invalid airline data format.")),
    };

    Ok(FlightRoute {
        callsign: raw.callsign,
        callsign_icao: raw.callsign_icao,
        callsign_iata: raw.callsign_iata,
        airline,
        origin: map_airport(&raw.origin)?,
        destination: map_airport(&raw.destination)?,
    })
}

/// Map one airport object. Accepts both `icao`/`iata` and the service's
/// `icao_code`/`iata_code` spellings.
pub fn map_airport(value: &Value) -> Result<Airport> {
    if !value.is_object() {
        return Err(mapping_error("Invalid airport data format."));
    }
    Airport::deserialize(value)
        .map_err(|e| mapping_error(format!("Failed to parse airport data: {e}")))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
