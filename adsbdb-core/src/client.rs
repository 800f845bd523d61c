//! adsbdb API client.
//!
//! Every operation runs the same pipeline: validate the input locally, GET
//! one path, then map or forward the decoded body. Input that fails
//! validation never reaches the transport.

use std::sync::Arc;

use serde_json::Value;

use crate::config::ClientConfig;
use crate::mapping::{map_aircraft, map_airline, map_flight_route};
use crate::transport::{fetch_url, segments_url, HttpTransport, ReqwestTransport};
use crate::types::{AdsbdbError, Aircraft, Airline, FlightRoute, Result};
use crate::validate::{validate_str, ModeSCode, NNumber};

const AIRLINE_CODE_MAX_LEN: usize = 3;

/// Blocking client for the adsbdb API. Cheap to share across threads.
#[derive(Clone)]
pub struct Client {
    config: ClientConfig,
    transport: Arc<dyn HttpTransport>,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for Client {
    /// Client for the production endpoint with default settings.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be built (no usable TLS backend).
    /// Use [`Client::new`] to handle that case.
    fn default() -> Self {
        Self::new(ClientConfig::default()).expect("Failed to create default HTTP client")
    }
}

impl Client {
    /// Create a client using the reqwest transport.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Create a client over any [`HttpTransport`].
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Client { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// GET the base URL extended by `segments`, each escaped as one path
    /// segment.
    fn get(&self, segments: &[&str]) -> Result<Value> {
        let url = segments_url(&self.config.base_url, segments)?;
        fetch_url(self.transport.as_ref(), url)
    }

    /// Aircraft details by Mode-S code or registration.
    pub fn get_aircraft_data(&self, identifier: &str) -> Result<Aircraft> {
        validate_str(identifier, "Identifier", None)?;
        let body = self.get(&["aircraft", identifier])?;
        map_aircraft(&body)
    }

    /// Flight route for a callsign, as returned by the service.
    pub fn get_flight_route(&self, callsign: &str) -> Result<Value> {
        validate_str(callsign, "Callsign", None)?;
        self.get(&["callsign", callsign])
    }

    /// Flight route for a callsign, mapped into a [`FlightRoute`].
    pub fn get_flight_route_typed(&self, callsign: &str) -> Result<FlightRoute> {
        let body = self.get_flight_route(callsign)?;
        map_flight_route(&body)
    }

    /// Airline details by ICAO or IATA code (at most 3 characters).
    pub fn get_airline(&self, airline_code: &str) -> Result<Airline> {
        validate_str(airline_code, "Airline code", Some(AIRLINE_CODE_MAX_LEN))?;
        let body = self.get(&["airline", airline_code])?;
        map_airline(&body)
    }

    /// Convert a Mode-S code to an N-Number; the body is returned unchanged.
    pub fn mode_s_to_n_number(&self, mode_s: &str) -> Result<Value> {
        validate_str(mode_s, "Mode-S code", None)?;
        let code = ModeSCode::parse(mode_s)?;
        self.get(&["mode-s", code.as_str()])
    }

    /// Convert an N-Number to a Mode-S code; the body is returned unchanged.
    pub fn n_number_to_mode_s(&self, n_number: &str) -> Result<Value> {
        validate_str(n_number, "N-Number", None)?;
        let number = NNumber::parse(n_number)?;
        self.get(&["n-number", number.as_str()])
    }

    /// Service status (`uptime`, `api_version`).
    pub fn get_online_status(&self) -> Result<Value> {
        self.get(&["online"])
    }

    /// Typed Mode-S → N-Number conversion.
    ///
    /// Fails with a mapping error when the `response` field is missing or is
    /// not a valid N-Number (the service answers non-US codes that way).
    pub fn lookup_n_number(&self, mode_s: &ModeSCode) -> Result<NNumber> {
        let body = self.get(&["mode-s", mode_s.as_str()])?;
        body.get("response")
            .and_then(Value::as_str)
            .and_then(|s| NNumber::parse(s).ok())
            .ok_or_else(|| AdsbdbError::Mapping(format!("Invalid Mode-S {mode_s}")))
    }

    /// Typed N-Number → Mode-S conversion.
    pub fn lookup_mode_s(&self, n_number: &NNumber) -> Result<ModeSCode> {
        let body = self.get(&["n-number", n_number.as_str()])?;
        body.get("response")
            .and_then(Value::as_str)
            .and_then(|s| ModeSCode::parse(s).ok())
            .ok_or_else(|| AdsbdbError::Mapping(format!("Invalid N-Number {n_number}")))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
