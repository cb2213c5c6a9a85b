use clap::{Parser, ValueEnum};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

/// Prefix of environment variables read by [`AppConfig::load`].
pub const ENV_PREFIX: &str = "MEDCHAT";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Address to bind
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Base URL of the medical assistant API
    #[arg(long, env = "API_URL")]
    pub api_url: Option<String>,

    /// Endpoint the input form submits to
    #[arg(long, value_enum)]
    pub input_mode: Option<InputMode>,

    /// Open a session as soon as the app starts
    #[arg(long)]
    pub create_on_mount: Option<bool>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub api: ApiConfig,
    pub chat: ChatConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    pub base_url: String,
}

/// Session lifecycle and input behaviour of the chat UI.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ChatConfig {
    #[serde(default)]
    pub input_mode: InputMode,
    #[serde(default)]
    pub session_ids: SessionIds,
    #[serde(default)]
    pub create_on_mount: bool,
}

/// Which remote operation a form submission goes to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    /// Generic chat (`POST /chat/chat`).
    #[default]
    Chat,
    /// Patient info query (`POST /patient/patients/query`).
    Patient,
}

impl InputMode {
    pub fn as_str(self) -> &'static str {
        match self {
            InputMode::Chat => "chat",
            InputMode::Patient => "patient",
        }
    }
}

/// Where new session identifiers come from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionIds {
    /// Ask the remote service (`POST /memory/session/create`).
    #[default]
    Remote,
    /// Generate `session-<unix millis>` locally.
    Placeholder,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from_args(std::env::args())
    }

    pub fn load_from_args<I, T>(args: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;

        let mut builder = Config::builder();

        // 1. Defaults
        builder = builder
            .set_default("server.port", 3000)?
            .set_default("server.host", "127.0.0.1")?
            .set_default("api.base_url", "http://127.0.0.1:8000")?
            .set_default("chat.input_mode", InputMode::Chat.as_str())?
            .set_default("chat.session_ids", "remote")?
            .set_default("chat.create_on_mount", false)?;

        // 2. Config file: explicit path must exist, ./config.* is optional
        builder = match &cli.config {
            Some(path) => builder.add_source(File::with_name(path)),
            None => builder.add_source(File::with_name("config").required(false)),
        };

        // 3. Environment, e.g. MEDCHAT_SERVER__PORT=8080
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        // 4. CLI flags (clap has already folded in PORT / API_URL)
        if let Some(host) = cli.host {
            builder = builder.set_override("server.host", host)?;
        }
        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", i64::from(port))?;
        }
        if let Some(url) = cli.api_url {
            builder = builder.set_override("api.base_url", url)?;
        }
        if let Some(mode) = cli.input_mode {
            builder = builder.set_override("chat.input_mode", mode.as_str())?;
        }
        if let Some(eager) = cli.create_on_mount {
            builder = builder.set_override("chat.create_on_mount", eager)?;
        }

        let cfg = builder.build()?;
        cfg.try_deserialize()
    }
}
