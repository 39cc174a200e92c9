use crate::error::{Error, Result};
use clap::Parser;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const HOST_ENV: &str = "A2A_UI_HOST";
pub const PORT_ENV: &str = "A2A_UI_PORT";
pub const TIMEOUT_ENV: &str = "A2A_DEMO_TIMEOUT";

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: &str = "12000";
pub const DEFAULT_TIMEOUT: &str = "180";
pub const DEFAULT_TEXT: &str = "export demo ping";

/// Tokens that switch the per-request timeout off.
const UNBOUNDED_TOKENS: [&str; 5] = ["0", "none", "inf", "infinite", "unlimited"];

#[derive(Parser, Debug)]
#[command(author, version, about = "Run /api/chat then export the session zip", long_about = None)]
pub struct Cli {
    /// Base URL, e.g. http://127.0.0.1:12000
    #[arg(long)]
    pub base: Option<String>,

    /// Output directory for the zip (defaults to the current directory)
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Timeout seconds; use 0/none/inf to disable
    #[arg(long, env = TIMEOUT_ENV, default_value = DEFAULT_TIMEOUT, value_parser = parse_timeout)]
    pub timeout: Timeout,

    /// Input text for /api/chat
    #[arg(long, default_value = DEFAULT_TEXT)]
    pub text: String,

    /// Ask the server for a mock response instead of calling the LLM
    #[arg(long)]
    pub mock: bool,
}

/// Per-request timeout policy.
///
/// Applied to each HTTP call on its own, never as a deadline shared by both.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Timeout {
    Bounded(Duration),
    Unbounded,
}

impl Timeout {
    /// The duration to enforce, if any.
    pub fn as_duration(self) -> Option<Duration> {
        match self {
            Timeout::Bounded(d) => Some(d),
            Timeout::Unbounded => None,
        }
    }
}

/// Parse a timeout given as seconds or as one of the "no timeout" tokens.
///
/// Tokens are matched case-insensitively after trimming. Anything else must be
/// a non-negative, finite number of seconds.
pub fn parse_timeout(raw: &str) -> Result<Timeout> {
    let text = raw.trim().to_lowercase();
    if UNBOUNDED_TOKENS.contains(&text.as_str()) {
        return Ok(Timeout::Unbounded);
    }

    let seconds: f64 = text.parse().map_err(|e| {
        Error::Config(format!(
            "invalid timeout {raw:?} ({e}): expected seconds or one of 0/none/inf/infinite/unlimited"
        ))
    })?;

    Duration::try_from_secs_f64(seconds)
        .map(Timeout::Bounded)
        .map_err(|e| Error::Config(format!("invalid timeout {raw:?}: {e}")))
}

/// Resolve the chat service base URL.
///
/// An explicit override wins verbatim. Otherwise `http://{host}:{port}` is
/// composed from the environment values, falling back to the defaults when a
/// value is absent or blank.
pub fn resolve_base_url(
    explicit: Option<&str>,
    env_host: Option<&str>,
    env_port: Option<&str>,
) -> String {
    if let Some(base) = explicit {
        return base.to_string();
    }

    let host = env_host
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_HOST);
    let port = env_port
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_PORT);

    format!("http://{host}:{port}")
}

/// Fully resolved configuration for one export run.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub base_url: String,
    pub timeout: Timeout,
    pub text: String,
    pub mock: bool,
    pub out_dir: PathBuf,
}

impl DemoConfig {
    pub fn load_from_args<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli = Cli::try_parse_from(args).map_err(|e| Error::Config(e.to_string()))?;
        Self::from_cli(cli)
    }

    /// Combine parsed flags with `A2A_UI_HOST` / `A2A_UI_PORT`.
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let env_host = env::var(HOST_ENV).ok();
        let env_port = env::var(PORT_ENV).ok();
        let base_url = resolve_base_url(
            cli.base.as_deref(),
            env_host.as_deref(),
            env_port.as_deref(),
        );

        let out_dir = match cli.out {
            Some(dir) => dir,
            None => env::current_dir()?,
        };

        Ok(Self {
            base_url,
            timeout: cli.timeout,
            text: cli.text,
            mock: cli.mock,
            out_dir,
        })
    }
}
