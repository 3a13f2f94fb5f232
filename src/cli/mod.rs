//! CLI definition and command handlers

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

pub mod console;
pub mod inventory;

/// prismaop - cloud account inventory for Prisma Cloud
///
/// Logs in, lists every onboarded cloud account (expanding organizations and
/// tenants into their member accounts) and writes a CSV inventory report.
#[derive(Parser, Debug)]
#[command(name = "prismaop")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Prisma Cloud API base URL
    #[arg(long, env = "PRISMAOP_API_URL", hide_env = true)]
    pub api_url: Option<String>,

    /// Access key ID
    #[arg(long, env = "PRISMAOP_ACCESS_KEY", hide_env = true)]
    pub access_key: Option<String>,

    /// Secret key (prompted for when omitted on a terminal)
    #[arg(long, env = "PRISMAOP_SECRET_KEY", hide_env_values = true)]
    pub secret_key: Option<String>,

    /// Pause before each organization member listing, in milliseconds
    #[arg(long, value_name = "MS", env = "PRISMAOP_REQUEST_DELAY_MS", hide_env = true)]
    pub request_delay_ms: Option<u64>,

    /// Report output path
    #[arg(short, long, value_name = "PATH", env = "PRISMAOP_OUTPUT", hide_env = true)]
    pub output: Option<PathBuf>,

    /// Override config file location
    #[arg(long, env = "PRISMAOP_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(long, env = "PRISMAOP_DEBUG", hide_env = true)]
    pub debug: bool,
}

impl Cli {
    /// Flag and environment values as a config layer.
    pub fn config_layer(&self) -> Config {
        Config {
            api_url: self.api_url.clone(),
            access_key: self.access_key.clone(),
            secret_key: self.secret_key.clone(),
            request_delay_ms: self.request_delay_ms,
            output: self.output.clone(),
        }
    }
}
