//! Data provider for the dashboard.
//!
//! - `ErpClient` talks to the ERP HTTP API.
//! - Snapshots can also come from a JSON file or the embedded demo data.

use std::{path::PathBuf, time::Duration};

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, info};

use crate::domain::{DashboardMetrics, ErpSnapshot, RawMaterial};
use crate::util::{assets, settings::Settings};

const USER_AGENT: &str = concat!("erp-dashboard/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);
const METRICS_PATH: &str = "dashboard/metrics";
const RAW_MATERIALS_PATH: &str = "raw-materials";

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("failed to read snapshot {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid snapshot data: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Clone, Debug)]
pub struct ErpClient {
    http: Client,
    base_url: Url,
}

impl ErpClient {
    pub fn new(base: &str) -> Result<Self, ProviderError> {
        let base_url = Url::parse(&with_trailing_slash(base))?;
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub async fn dashboard_metrics(&self) -> Result<DashboardMetrics, ProviderError> {
        self.get_json(METRICS_PATH).await
    }

    pub async fn raw_materials(&self) -> Result<Vec<RawMaterial>, ProviderError> {
        self.get_json(RAW_MATERIALS_PATH).await
    }

    pub async fn snapshot(&self) -> Result<ErpSnapshot, ProviderError> {
        let (dashboard_metrics, raw_materials) =
            tokio::try_join!(self.dashboard_metrics(), self.raw_materials())?;
        Ok(ErpSnapshot {
            dashboard_metrics,
            raw_materials,
        })
    }

    async fn get_json<T>(&self, path: &str) -> Result<T, ProviderError>
    where
        T: DeserializeOwned,
    {
        let url = self.url(path)?;
        debug!(%url, "requesting ERP resource");
        let response = self.http.get(url).send().await?.error_for_status()?;
        Ok(response.json::<T>().await?)
    }

    pub(crate) fn url(&self, path: &str) -> Result<Url, url::ParseError> {
        self.base_url.join(path)
    }
}

/// `Url::join` replaces the last segment unless the base ends with `/`.
fn with_trailing_slash(base: &str) -> String {
    let trimmed = base.trim();
    if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    }
}

/// Where dashboard data comes from.
#[derive(Clone, Debug)]
pub enum DataSource {
    Http(ErpClient),
    File(PathBuf),
    Demo,
}

impl DataSource {
    /// API URL wins over a snapshot file; with neither, the demo data is used.
    pub fn from_settings(settings: &Settings) -> Result<Self, ProviderError> {
        if let Some(url) = settings.api_base_url.as_deref() {
            return Ok(DataSource::Http(ErpClient::new(url)?));
        }
        if let Some(path) = settings.snapshot_path.clone() {
            return Ok(DataSource::File(path));
        }
        Ok(DataSource::Demo)
    }

    pub fn describe(&self) -> String {
        match self {
            DataSource::Http(client) => client.base_url().to_string(),
            DataSource::File(path) => path.display().to_string(),
            DataSource::Demo => "demo data".to_string(),
        }
    }

    pub async fn load(&self) -> Result<ErpSnapshot, ProviderError> {
        let snapshot = match self {
            DataSource::Http(client) => client.snapshot().await?,
            DataSource::File(path) => load_snapshot_file(path.clone()).await?,
            DataSource::Demo => parse_snapshot(assets::demo_snapshot_json())?,
        };
        info!(
            source = %self.describe(),
            raw_materials = snapshot.raw_materials.len(),
            "loaded dashboard snapshot"
        );
        Ok(snapshot)
    }
}

async fn load_snapshot_file(path: PathBuf) -> Result<ErpSnapshot, ProviderError> {
    let data = tokio::fs::read_to_string(&path)
        .await
        .map_err(|source| ProviderError::Io { path, source })?;
    parse_snapshot(&data)
}

pub fn parse_snapshot(data: &str) -> Result<ErpSnapshot, ProviderError> {
    Ok(serde_json::from_str(data)?)
}
