//! Probe-then-write synchronization of one domain config resource.
//!
//! # Responsibilities
//! - Build the per-domain resource URL
//! - Probe the resource with GET to select create vs update
//! - Send the PUT/PATCH carrying the wrapped document
//! - Turn the final status into success or a terminal error

use std::path::Path;

use reqwest::{Client, Method, StatusCode};
use tracing::{info, warn};

use crate::document::{self, ConfigPayload};
use crate::error::{SyncError, SyncResult};

/// Which write the probe selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteAction {
    /// Probe returned 404: the resource is absent and must be created.
    Create,
    /// Resource assumed present: update it in place.
    Update,
}

impl WriteAction {
    /// HTTP method carrying out this action.
    pub fn method(self) -> Method {
        match self {
            Self::Create => Method::PUT,
            Self::Update => Method::PATCH,
        }
    }
}

/// Pick the write action from the probe status.
///
/// Only 404 selects create. Every other status, 2xx and errors alike,
/// falls through to update; the probe never terminates the run on its
/// own.
pub fn choose_action(probe_status: StatusCode) -> WriteAction {
    if probe_status == StatusCode::NOT_FOUND {
        WriteAction::Create
    } else {
        WriteAction::Update
    }
}

/// Synchronizes a local configuration document into the identity service.
pub struct Synchronizer {
    client: Client,
    base_url: String,
}

impl Synchronizer {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// URL of the per-domain config resource.
    ///
    /// Plain interpolation: the service sees the identifier verbatim.
    pub fn resource_url(&self, domain_id: &str) -> String {
        format!("{}/domains/{}/config", self.base_url, domain_id)
    }

    async fn probe(&self, url: &str) -> SyncResult<StatusCode> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| SyncError::Http {
                method: Method::GET,
                url: url.to_owned(),
                source,
            })?;

        Ok(response.status())
    }

    async fn write(
        &self,
        url: &str,
        method: Method,
        payload: &ConfigPayload,
    ) -> SyncResult<StatusCode> {
        let response = self
            .client
            .request(method.clone(), url)
            .json(payload)
            .send()
            .await
            .map_err(|source| SyncError::Http {
                method,
                url: url.to_owned(),
                source,
            })?;

        Ok(response.status())
    }

    /// Run the full probe/branch/write sequence for one domain.
    ///
    /// Exactly two requests, strictly sequential. The file is read and
    /// parsed between them, so a parse failure leaves zero writes issued.
    pub async fn run(&self, domain_id: &str, config_file: &Path) -> SyncResult<()> {
        let url = self.resource_url(domain_id);
        info!(url = %url, "connecting to domain config resource");

        let probe_status = self.probe(&url).await?;
        let action = choose_action(probe_status);
        match action {
            WriteAction::Create => {
                info!(status = %probe_status, "domain config not found, creating")
            }
            WriteAction::Update => {
                info!(status = %probe_status, "domain config found, updating")
            }
        }
        if action == WriteAction::Update && !probe_status.is_success() {
            // A failing probe is indistinguishable from "exists" here.
            warn!(
                status = %probe_status,
                "probe did not confirm the resource exists, updating anyway"
            );
        }

        let payload = ConfigPayload::new(document::load(config_file)?);

        let method = action.method();
        let status = self.write(&url, method.clone(), &payload).await?;
        info!(action = %method, status = %status, "write completed");

        if status.is_success() {
            Ok(())
        } else {
            Err(SyncError::UnexpectedStatus {
                method,
                url,
                status,
            })
        }
    }
}
