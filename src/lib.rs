//! Keystone Domain Config Synchronizer
//!
//! Pushes a local JSON configuration document into a Keystone identity
//! service's per-domain config resource.
//!
//! ```text
//!   argv ──▶ cli ──▶ http (client + TLS trust from OS_CACERT)
//!                      │
//!                      ▼
//!            GET  {base}/domains/{id}/config     (probe)
//!                      │
//!          404 ────────┴──────── anything else
//!           │                         │
//!          PUT                      PATCH
//!           └───────────┬─────────────┘
//!                       ▼
//!            body {"config": <file contents>}    (write)
//!                       │
//!                       ▼
//!            2xx → exit 0, otherwise exit 1
//! ```
//!
//! Exactly two requests per run, strictly sequential, no retries and no
//! state between invocations.

pub mod cli;
pub mod document;
pub mod error;
pub mod http;
pub mod sync;

pub use error::{SyncError, SyncResult};

use crate::cli::Cli;
use crate::sync::Synchronizer;

/// Execute one synchronization run from parsed arguments.
pub async fn run(cli: Cli) -> SyncResult<()> {
    let trust = http::TlsTrust::from_env();
    let client = http::build_client(&cli.token, &trust)?;

    let synchronizer = Synchronizer::new(client, cli.base_url);
    synchronizer.run(&cli.domain_id, &cli.config_file).await
}
