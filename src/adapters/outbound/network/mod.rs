/// Network adapters for reaching remote clusters
mod kube_proxy_client;

pub use kube_proxy_client::{KubeProxyClient, ProxySettings, CLUSTER_HEADER};
