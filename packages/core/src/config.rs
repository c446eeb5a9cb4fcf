use std::path::PathBuf;

use axum::http::HeaderValue;
use reqwest::Url;

use crate::cli::Cli;
use crate::error::AppError;
use crate::report::ReportConfig;

/// Validated runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub explorer_base_url: String,
    pub allowed_origins: Vec<HeaderValue>,
    pub report: ReportConfig,
    pub static_dir: Option<PathBuf>,
    pub log_level: String,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Result<Self, AppError> {
        let url = Url::parse(&cli.explorer_url).map_err(|e| {
            AppError::Config(format!("invalid explorer URL {:?}: {}", cli.explorer_url, e))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(AppError::Config(format!(
                "explorer URL must be http or https, got {:?}",
                url.scheme()
            )));
        }

        if cli.page_size == 0 {
            return Err(AppError::Config("page size must be greater than 0".into()));
        }

        let allowed_origins = cli
            .allowed_origins
            .iter()
            .map(|o| o.trim())
            .filter(|o| !o.is_empty())
            .map(|o| {
                HeaderValue::from_str(o)
                    .map_err(|e| AppError::Config(format!("invalid origin {:?}: {}", o, e)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            port: cli.port,
            explorer_base_url: cli.explorer_url.trim_end_matches('/').to_string(),
            allowed_origins,
            report: ReportConfig {
                low_fee_rate_threshold: cli.low_fee_rate_threshold,
                low_absolute_fee_threshold: cli.low_fee_threshold,
                page_size: cli.page_size,
            },
            static_dir: cli.static_dir,
            log_level: cli.log_level,
        })
    }
}
