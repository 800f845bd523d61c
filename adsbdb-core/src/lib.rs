//! adsbdb-core: typed, blocking client for the adsbdb aviation-data API.
//!
//! Aircraft, flight-route and airline lookups plus Mode-S / N-Number
//! conversion. Identifiers are validated locally before any request is made,
//! transport failures are folded into [`AdsbdbError`], and JSON payloads are
//! mapped into the records in [`types`].

pub mod client;
pub mod config;
pub mod mapping;
pub mod transport;
pub mod types;
pub mod validate;

// Re-export commonly used types at crate root
pub use client::Client;
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport, TransportFailure};
pub use types::*;
pub use validate::{ModeSCode, NNumber};
