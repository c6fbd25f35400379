// IDB API client: create or update machine records

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode, Url};
use tracing::{debug, instrument};

use crate::models::Machine;
use crate::version;

const TOKEN_HEADER: &str = "X-IDB-API-Token";

#[derive(Debug, thiserror::Error)]
pub enum IdbError {
    #[error("invalid idb url: {0}")]
    InvalidUrl(String),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{url} returned status {status}")]
    Status { url: String, status: StatusCode },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    Updated,
    Created,
    /// Not in the IDB and creation was not requested.
    Skipped,
}

/// Destination for mapped machines.
#[async_trait]
pub trait MachineStore: Send + Sync {
    /// Updates the machine with the same FQDN; creates it when missing and `create` is set.
    async fn update_machine(
        &self,
        machine: &Machine,
        create: bool,
    ) -> Result<UpdateOutcome, IdbError>;
}

pub struct IdbClient {
    http: Client,
    base: Url,
    token: String,
}

impl IdbClient {
    pub fn new(url: &str, token: &str, insecure_skip_verify: bool) -> Result<Self, IdbError> {
        let base = Url::parse(url).map_err(|e| IdbError::InvalidUrl(format!("{url}: {e}")))?;
        if base.cannot_be_a_base() {
            return Err(IdbError::InvalidUrl(url.to_string()));
        }
        let http = Client::builder()
            .danger_accept_invalid_certs(insecure_skip_verify)
            .user_agent(format!("{}/{}", version::NAME, version::VERSION))
            .build()?;
        Ok(Self {
            http,
            base,
            token: token.to_string(),
        })
    }

    /// `<base>/api/v3/machines[/<fqdn>]`, with the FQDN percent-encoded.
    fn machines_url(&self, fqdn: Option<&str>) -> Result<Url, IdbError> {
        let mut url = self.base.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| IdbError::InvalidUrl(self.base.to_string()))?;
            segments.pop_if_empty().extend(["api", "v3", "machines"]);
            if let Some(fqdn) = fqdn {
                segments.push(fqdn);
            }
        }
        Ok(url)
    }
}

#[async_trait]
impl MachineStore for IdbClient {
    #[instrument(skip(self, machine), fields(fqdn = %machine.fqdn))]
    async fn update_machine(
        &self,
        machine: &Machine,
        create: bool,
    ) -> Result<UpdateOutcome, IdbError> {
        let response = self
            .http
            .put(self.machines_url(Some(&machine.fqdn))?)
            .header(TOKEN_HEADER, &self.token)
            .json(machine)
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => {
                debug!("machine updated");
                Ok(UpdateOutcome::Updated)
            }
            StatusCode::NOT_FOUND if create => {
                let response = self
                    .http
                    .post(self.machines_url(None)?)
                    .header(TOKEN_HEADER, &self.token)
                    .json(machine)
                    .send()
                    .await?;
                check_status(response)?;
                debug!("machine created");
                Ok(UpdateOutcome::Created)
            }
            StatusCode::NOT_FOUND => {
                debug!("machine not in idb, not creating");
                Ok(UpdateOutcome::Skipped)
            }
            _ => Err(status_error(&response)),
        }
    }
}

fn check_status(response: Response) -> Result<Response, IdbError> {
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(status_error(&response))
    }
}

fn status_error(response: &Response) -> IdbError {
    IdbError::Status {
        url: response.url().to_string(),
        status: response.status(),
    }
}
