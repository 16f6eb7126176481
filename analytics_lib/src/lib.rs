//! Adobe Analytics 2.0 API client library.
//!
//! Provides an async client for the Analytics REST API: report suites,
//! calculated metrics, dimensions, metrics, date ranges, segments, users,
//! usage logs and reports.
//!
//! ```no_run
//! # async fn run() -> Result<(), analytics_lib::Error> {
//! use analytics_lib::{Client, ErrorKind, MetricsOptions};
//!
//! let client = Client::init("mycompany", "api-key", "access-token").await?;
//! match client.get_metrics("myrsid", &MetricsOptions::default()).await {
//!     Ok(res) => println!("{}", res.body),
//!     Err(e) if e.kind() == ErrorKind::GetMetrics => eprintln!("{}", e),
//!     Err(e) => return Err(e),
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod credentials;
pub mod description;
pub mod error;
pub mod headers;
pub mod helpers;
pub mod options;
pub mod request;
pub mod response;
pub mod transport;

pub use client::{Client, ClientBuilder};
pub use credentials::Credentials;
pub use description::ApiDescription;
pub use error::{Error, ErrorKind, TransportError};
pub use options::{
    CalculatedMetricsOptions, CollectionOptions, CollectionsOptions, DateRangesOptions,
    DimensionsOptions, LookupOptions, MetricsOptions, SegmentsOptions, UsageLogsOptions,
    UsersOptions,
};
pub use request::{Params, RequestDescriptor};
pub use response::ApiResponse;

/// Library version for User-Agent and diagnostics.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
