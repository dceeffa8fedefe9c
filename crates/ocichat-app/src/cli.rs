use std::path::PathBuf;

use clap::Parser;

/// CLI arguments for ocichat
#[derive(Parser, Debug)]
#[command(name = "ocichat")]
#[command(about = "Interactive client for an OpenAI-compatible proxy serving OCI models")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// Read models from a proxy config file instead of the live /v1/models endpoint
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Base URL of the proxy's OpenAI-compatible API
    #[arg(
        long,
        value_name = "URL",
        default_value = "http://localhost:4000/v1",
        env = "OCICHAT_BASE_URL"
    )]
    pub base_url: String,

    /// API key sent as a bearer token (the local proxy does not validate it)
    #[arg(
        long,
        value_name = "KEY",
        default_value = "sk-any-string",
        env = "OCICHAT_API_KEY"
    )]
    pub api_key: String,

    /// Model used when catalog resolution or selection falls through
    #[arg(
        long,
        value_name = "MODEL",
        default_value = "oci/xai.grok-3",
        env = "OCICHAT_DEFAULT_MODEL"
    )]
    pub default_model: String,

    /// Request timeout in seconds (waits indefinitely when omitted)
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Exit with a non-zero status when the completion request fails
    #[arg(long)]
    pub strict_exit: bool,

    /// Enable verbose debug output (shows HTTP requests, responses, headers, etc.)
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
