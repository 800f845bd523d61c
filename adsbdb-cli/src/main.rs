//! adsbdb: command-line lookups against the adsbdb API.
//!
//! Typed records (aircraft, airline, flight route) print as tables; raw
//! responses print as pretty JSON. Settings come from flags, then
//! environment, then `~/.adsbdb/config.yaml`.

use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use adsbdb_core::config::{self, ClientConfig};
use adsbdb_core::{AdsbdbError, Client};

mod render;

#[derive(Parser)]
#[command(name = "adsbdb", version, about = "Aircraft, route and airline lookups via adsbdb")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// API base URL
    #[arg(long, env = "ADSBDB_BASE_URL")]
    base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "ADSBDB_TIMEOUT")]
    timeout: Option<f64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up an aircraft by Mode-S code or registration
    Aircraft {
        identifier: String,
    },

    /// Look up the flight route for a callsign
    Route {
        callsign: String,

        /// Print the service response instead of a table
        #[arg(short, long)]
        raw: bool,
    },

    /// Look up an airline by ICAO or IATA code
    Airline {
        code: String,
    },

    /// Convert a Mode-S code to an N-Number
    ModeS {
        code: String,
    },

    /// Convert an N-Number to a Mode-S code
    NNumber {
        number: String,
    },

    /// Show API status
    Online,
}

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = build_config(cli.base_url, cli.timeout);
    tracing::debug!("using {}", config.base_url);

    let client = Client::new(config).unwrap_or_else(|e| exit_with(e));

    let result = match cli.command {
        Commands::Aircraft { identifier } => client
            .get_aircraft_data(&identifier)
            .map(|a| println!("{}", render::aircraft_table(&a))),
        Commands::Route { callsign, raw: true } => {
            client.get_flight_route(&callsign).map(|v| print_json(&v))
        }
        Commands::Route {
            callsign,
            raw: false,
        } => client
            .get_flight_route_typed(&callsign)
            .map(|r| println!("{}", render::flight_route_table(&r))),
        Commands::Airline { code } => client
            .get_airline(&code)
            .map(|a| println!("{}", render::airline_table(&a))),
        Commands::ModeS { code } => client.mode_s_to_n_number(&code).map(|v| print_json(&v)),
        Commands::NNumber { number } => client.n_number_to_mode_s(&number).map(|v| print_json(&v)),
        Commands::Online => client.get_online_status().map(|v| print_json(&v)),
    };

    if let Err(e) = result {
        exit_with(e);
    }
}

/// Config file values, overridden by flags / environment.
fn build_config(base_url: Option<String>, timeout: Option<f64>) -> ClientConfig {
    let mut config = config::load_config();
    if let Some(url) = base_url {
        config = config.with_base_url(url);
    }
    if let Some(secs) = timeout {
        match config::parse_timeout(secs) {
            Some(t) => config = config.with_timeout(t),
            None => tracing::warn!("ignoring unusable timeout {secs}"),
        }
    }
    config
}

fn print_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{text}"),
        Err(_) => println!("{value}"),
    }
}

fn exit_with(e: AdsbdbError) -> ! {
    eprintln!("Error ({}): {e}", e.kind());
    std::process::exit(1);
}
