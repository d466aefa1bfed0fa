//! Command-line contract.
//!
//! Exactly five positional values, in an order existing callers already
//! depend on. The fourth slot is accepted and never read; it stays so the
//! argument count and positions do not shift under those callers.

use std::path::PathBuf;

use clap::Parser;

/// Synchronize a domain's configuration document into a Keystone
/// identity service.
#[derive(Debug, Parser)]
#[command(name = "keystone-domain-sync", about = "Create or update a Keystone per-domain config resource from a local JSON file", long_about = None)]
pub struct Cli {
    /// Base URL of the identity service, e.g. https://ks.example.com/v3
    pub base_url: String,

    /// Pre-acquired authentication token, sent verbatim as X-Auth-Token
    pub token: String,

    /// Identifier of the domain whose config resource is written
    pub domain_id: String,

    /// Unused slot, kept for interface compatibility
    #[arg(value_name = "RESERVED")]
    pub reserved: String,

    /// Path to the JSON configuration document
    pub config_file: PathBuf,
}
