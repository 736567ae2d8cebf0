use crate::ports::outbound::ResourceClient;
use crate::shared::error::FetchError;
use crate::shared::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

/// Header naming the target cluster when requests go through the proxy
pub const CLUSTER_HEADER: &str = "Backstage-Kubernetes-Cluster";

/// Connection settings for [`KubeProxyClient`]
#[derive(Debug, Clone)]
pub struct ProxySettings {
    /// Base URL of a Kubernetes proxy shared by all clusters
    pub proxy_url: Option<String>,
    /// Direct API server URLs; these win over the proxy
    pub clusters: HashMap<String, String>,
    /// Bearer token passed through unchanged
    pub token: Option<String>,
    pub timeout: Duration,
    /// Extra attempts after a retryable failure
    pub max_retries: u32,
}

impl Default for ProxySettings {
    fn default() -> Self {
        Self {
            proxy_url: None,
            clusters: HashMap::new(),
            token: None,
            timeout: Duration::from_secs(30),
            max_retries: 1,
        }
    }
}

/// Where one request is sent
#[derive(Debug, PartialEq, Eq)]
struct Target {
    url: String,
    /// Set when the request goes through the shared proxy
    proxied_cluster: Option<String>,
}

/// KubeProxyClient adapter fetching resources over HTTP
///
/// Implements the ResourceClient port against either a direct API server
/// URL per cluster or a Kubernetes proxy that picks the cluster from the
/// `Backstage-Kubernetes-Cluster` header.
pub struct KubeProxyClient {
    client: reqwest::Client,
    settings: ProxySettings,
}

impl KubeProxyClient {
    pub fn new(settings: ProxySettings) -> Result<Self> {
        let user_agent = format!("xpgraph/{}", env!("CARGO_PKG_VERSION"));
        let client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client, settings })
    }

    fn target(&self, cluster: &str, path: &str) -> std::result::Result<Target, FetchError> {
        if let Some(server) = self.settings.clusters.get(cluster) {
            return Ok(Target {
                url: Self::join(server, path),
                proxied_cluster: None,
            });
        }
        match self.settings.proxy_url.as_deref() {
            Some(proxy) => Ok(Target {
                url: Self::join(proxy, path),
                proxied_cluster: Some(cluster.to_string()),
            }),
            None => Err(FetchError::UnknownCluster(cluster.to_string())),
        }
    }

    fn join(base: &str, path: &str) -> String {
        format!(
            "{}/{}",
            base.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn fetch_once(&self, target: &Target) -> std::result::Result<serde_json::Value, FetchError> {
        let mut request = self.client.get(&target.url);
        if let Some(cluster) = &target.proxied_cluster {
            request = request.header(CLUSTER_HEADER, cluster);
        }
        if let Some(token) = &self.settings.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(FetchError::RequestFailed {
                status: status.as_u16(),
                body,
            });
        }
        serde_json::from_str(&body).map_err(|e| FetchError::Decode(e.to_string()))
    }
}

#[async_trait]
impl ResourceClient for KubeProxyClient {
    async fn fetch(&self, cluster: &str, path: &str) -> std::result::Result<serde_json::Value, FetchError> {
        let target = self.target(cluster, path)?;
        let attempts = self.settings.max_retries + 1;

        let mut attempt = 1;
        loop {
            match self.fetch_once(&target).await {
                Ok(value) => return Ok(value),
                Err(e) if e.is_retryable() && attempt < attempts => {
                    debug!(cluster, path, attempt, error = %e, "retrying request");
                    tokio::time::sleep(Duration::from_millis(100 * u64::from(attempt))).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}
