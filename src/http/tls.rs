//! TLS trust configuration for the outbound client.
//!
//! The trust anchor is an explicit setting threaded into client
//! construction, not ambient process state. Certificate verification is
//! always on; `OS_CACERT` only chooses where the roots come from.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use reqwest::Certificate;

use crate::error::{SyncError, SyncResult};

/// Environment variable naming a PEM CA bundle for the service endpoint.
pub const CACERT_ENV: &str = "OS_CACERT";

/// Where the client's TLS root certificates come from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsTrust {
    /// The platform's default root store.
    #[default]
    SystemRoots,
    /// The platform store plus the CA certificates in a PEM bundle file.
    CaBundle(PathBuf),
}

impl TlsTrust {
    /// Read the trust setting from `OS_CACERT`.
    ///
    /// Unset or blank means system trust, never disabled verification.
    pub fn from_env() -> Self {
        match env::var(CACERT_ENV) {
            Ok(path) if !path.trim().is_empty() => Self::CaBundle(PathBuf::from(path)),
            _ => Self::SystemRoots,
        }
    }

    /// Load the additional root certificates named by this setting.
    pub fn extra_roots(&self) -> SyncResult<Vec<Certificate>> {
        match self {
            Self::SystemRoots => Ok(Vec::new()),
            Self::CaBundle(path) => load_ca_bundle(path),
        }
    }
}

/// Parse a PEM CA bundle into root certificates for the client.
fn load_ca_bundle(path: &Path) -> SyncResult<Vec<Certificate>> {
    let bundle_error = |reason: String| SyncError::CaBundle {
        path: path.to_path_buf(),
        reason,
    };

    let pem = fs::read(path).map_err(|e| bundle_error(e.to_string()))?;

    let mut roots = Vec::new();
    for entry in rustls_pemfile::certs(&mut pem.as_slice()) {
        let der = entry.map_err(|e| bundle_error(format!("invalid PEM entry: {e}")))?;
        let cert = Certificate::from_der(&der)
            .map_err(|e| bundle_error(format!("invalid certificate: {e}")))?;
        roots.push(cert);
    }

    if roots.is_empty() {
        return Err(bundle_error("no certificates found in bundle".into()));
    }

    Ok(roots)
}
