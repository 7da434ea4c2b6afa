use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Clone)]
pub struct AppConfig {
    /// Guardian content API key. Optional at load time so the file-sink
    /// paths can run without one; the fetcher refuses to start without it.
    pub guardian_api_key: Option<String>,
    pub guardian_base_url: String,
    /// SQS-compatible JSON-protocol endpoint (region endpoint behind a
    /// signing proxy, LocalStack, ElasticMQ).
    pub sqs_endpoint: String,
    pub default_queue_name: String,
    pub page_size: u32,
    pub request_timeout_secs: u64,
    /// Directory the file sink writes timestamped article batches into.
    pub artifact_dir: PathBuf,
    pub bind_addr: SocketAddr,
    pub log_level: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field(
                "guardian_api_key",
                &self.guardian_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("guardian_base_url", &self.guardian_base_url)
            .field("sqs_endpoint", &self.sqs_endpoint)
            .field("default_queue_name", &self.default_queue_name)
            .field("page_size", &self.page_size)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("artifact_dir", &self.artifact_dir)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .finish()
    }
}
