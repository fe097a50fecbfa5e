use std::env;
use std::net::SocketAddr;

use eyre::WrapErr;

use labsight_bedrock::DEFAULT_MODEL_ID;

const DEFAULT_REGION: &str = "us-east-1";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Deployment settings, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub region: String,
    /// Bedrock model or inference profile used for every question.
    pub model_id: String,
    pub textract_endpoint: Option<String>,
    pub bedrock_endpoint: Option<String>,
    pub max_upload_bytes: usize,
    /// Serve on this address instead of the Lambda runtime.
    pub bind_addr: Option<SocketAddr>,
}

impl AppConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key/value source. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let max_upload_bytes = match get("LABSIGHT_MAX_UPLOAD_BYTES") {
            Some(v) => v
                .trim()
                .parse::<usize>()
                .wrap_err_with(|| format!("invalid LABSIGHT_MAX_UPLOAD_BYTES: {v}"))?,
            None => DEFAULT_MAX_UPLOAD_BYTES,
        };

        let bind_addr = get("LABSIGHT_BIND_ADDR")
            .map(|v| {
                v.trim()
                    .parse::<SocketAddr>()
                    .wrap_err_with(|| format!("invalid LABSIGHT_BIND_ADDR: {v}"))
            })
            .transpose()?;

        Ok(Self {
            region: get("AWS_REGION").unwrap_or_else(|| DEFAULT_REGION.to_string()),
            model_id: get("LABSIGHT_MODEL_ID").unwrap_or_else(|| DEFAULT_MODEL_ID.to_string()),
            textract_endpoint: get("LABSIGHT_TEXTRACT_ENDPOINT"),
            bedrock_endpoint: get("LABSIGHT_BEDROCK_ENDPOINT"),
            max_upload_bytes,
            bind_addr,
        })
    }
}
