pub mod aggregate;
pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod probe;
pub mod server;
pub mod telemetry;
pub mod transport;

pub use aggregate::{aggregate, AggregateStats};
pub use client::ValorantClient;
pub use config::Config;
pub use error::{FetchError, ProbeError, ValidationError};
pub use models::player::PlayerRecord;
pub use models::season::{PeriodId, PeriodStats};
pub use server::build_router;
pub use telemetry::Telemetry;
pub use transport::{HttpTransport, Transport};
