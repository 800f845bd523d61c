//! Shared types, error enum, and typed lookup records for adsbdb-core.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// All errors produced by adsbdb-core.
///
/// The `Display` text of every variant is the single user-facing message.
/// Use [`AdsbdbError::kind`] to branch on the failure class.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdsbdbError {
    #[error("{0}")]
    Format(String),
    #[error("{0}")]
    NotFound(String),
    #[error("HTTP error occurred: {status} for url ({url})")]
    Http { status: u16, url: String },
    #[error("Connection error occurred. Please check your network.")]
    Connection(String),
    #[error("The request timed out.")]
    Timeout,
    #[error("Request error occurred: {0}")]
    Request(String),
    #[error("{0}")]
    Mapping(String),
    #[error("config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, AdsbdbError>;

/// Coarse failure class of an [`AdsbdbError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input rejected locally, no request was sent.
    Format,
    /// The service answered 404.
    NotFound,
    /// Connection failure, timeout, or any other non-2xx status.
    Transport,
    /// The payload did not have the expected shape.
    Mapping,
    Config,
}

impl AdsbdbError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AdsbdbError::Format(_) => ErrorKind::Format,
            AdsbdbError::NotFound(_) => ErrorKind::NotFound,
            AdsbdbError::Http { .. }
            | AdsbdbError::Connection(_)
            | AdsbdbError::Timeout
            | AdsbdbError::Request(_) => ErrorKind::Transport,
            AdsbdbError::Mapping(_) => ErrorKind::Mapping,
            AdsbdbError::Config(_) => ErrorKind::Config,
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Format => write!(f, "format"),
            ErrorKind::NotFound => write!(f, "not found"),
            ErrorKind::Transport => write!(f, "transport"),
            ErrorKind::Mapping => write!(f, "mapping"),
            ErrorKind::Config => write!(f, "config"),
        }
    }
}

// ---------------------------------------------------------------------------
// Lookup records
// ---------------------------------------------------------------------------

/// Aircraft details from `GET /aircraft/{identifier}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aircraft {
    #[serde(rename = "type")]
    pub aircraft_type: String,
    pub icao_type: String,
    pub manufacturer: String,
    pub mode_s: String,
    pub registration: String,
    pub registered_owner_country_iso_name: String,
    pub registered_owner_country_name: String,
    pub registered_owner_operator_flag_code: Option<String>,
    pub registered_owner: String,
    pub url_photo: Option<String>,
    pub url_photo_thumbnail: Option<String>,
}

/// Airline details, either standalone (`GET /airline/{code}`) or embedded in
/// a flight route.
///
/// Fields absent from the payload hold the literal string `"None"`; see
/// [`crate::mapping::map_airline`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airline {
    pub name: String,
    pub icao: String,
    pub iata: Option<String>,
    pub country: String,
    pub country_iso: String,
    pub callsign: Option<String>,
}

/// Origin or destination of a flight route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    pub name: String,
    #[serde(alias = "icao_code")]
    pub icao: String,
    #[serde(alias = "iata_code")]
    pub iata: String,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
    pub municipality: String,
    pub country_iso_name: String,
    pub country_name: String,
}

/// Flight route from `GET /callsign/{callsign}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightRoute {
    pub callsign: String,
    pub callsign_icao: Option<String>,
    pub callsign_iata: Option<String>,
    pub airline: Option<Airline>,
    pub origin: Airport,
    pub destination: Airport,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            AdsbdbError::Timeout.to_string(),
            "The request timed out."
        );
        assert_eq!(
            AdsbdbError::Connection("refused".into()).to_string(),
            "Connection error occurred. Please check your network."
        );
        assert_eq!(
            AdsbdbError::Http {
                status: 500,
                url: "https://api.adsbdb.com/v0/online".into()
            }
            .to_string(),
            "HTTP error occurred: 500 for url (https://api.adsbdb.com/v0/online)"
        );
        assert_eq!(
            AdsbdbError::NotFound("aircraft not found".into()).to_string(),
            "aircraft not found"
        );
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(AdsbdbError::Format("x".into()).kind(), ErrorKind::Format);
        assert_eq!(AdsbdbError::NotFound("x".into()).kind(), ErrorKind::NotFound);
        assert_eq!(AdsbdbError::Timeout.kind(), ErrorKind::Transport);
        assert_eq!(AdsbdbError::Request("x".into()).kind(), ErrorKind::Transport);
        assert_eq!(
            AdsbdbError::Http {
                status: 503,
                url: String::new()
            }
            .kind(),
            ErrorKind::Transport
        );
        assert_eq!(AdsbdbError::Mapping("x".into()).kind(), ErrorKind::Mapping);
    }

    #[test]
    fn test_airport_accepts_service_field_names() {
        let value = serde_json::json!({
            "name": "London Heathrow Airport",
            "icao_code": "EGLL",
            "iata_code": "LHR",
            "latitude": 51.4706,
            "longitude": -0.461941,
            "elevation": 83,
            "municipality": "London",
            "country_iso_name": "GB",
            "country_name": "United Kingdom"
        });
        let airport: Airport = serde_json::from_value(value).unwrap();
        assert_eq!(airport.icao, "EGLL");
        assert_eq!(airport.iata, "LHR");
        assert_eq!(airport.elevation, 83.0);
    }

    #[test]
    fn test_aircraft_serializes_type_field() {
        let aircraft = Aircraft {
            aircraft_type: "A320 214".into(),
            icao_type: "A320".into(),
            manufacturer: "Airbus".into(),
            mode_s: "400F02".into(),
            registration: "G-EUYB".into(),
            registered_owner_country_iso_name: "GB".into(),
            registered_owner_country_name: "United Kingdom".into(),
            registered_owner_operator_flag_code: Some("BAW".into()),
            registered_owner: "British Airways".into(),
            url_photo: None,
            url_photo_thumbnail: None,
        };
        let value = serde_json::to_value(&aircraft).unwrap();
        assert_eq!(value["type"], "A320 214");
        assert!(value["url_photo"].is_null());
    }
}
