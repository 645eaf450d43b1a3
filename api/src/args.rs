use std::time::Duration;

use clap::{ArgAction, Parser, ValueEnum};
use mealmint_core::domain::common::{CacheConfig, LLMConfig, MealMintConfig, StrategyMode};

#[derive(Debug, Clone, Parser)]
#[command(name = "mealmint-api", version, about = "MealMint menu recommendation API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub cache: CacheArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 3333)]
    pub port: u16,

    #[arg(long, env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,

    /// Largest accepted menu photo, in bytes.
    #[arg(long, env = "MAX_IMAGE_BYTES", default_value_t = 10 * 1024 * 1024)]
    pub max_image_bytes: usize,

    #[arg(
        long = "metrics",
        env = "METRICS_ENABLED",
        default_value_t = true,
        action = ArgAction::Set
    )]
    pub metrics_enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LlmMode {
    Live,
    Mock,
}

impl From<LlmMode> for StrategyMode {
    fn from(mode: LlmMode) -> Self {
        match mode {
            LlmMode::Live => StrategyMode::Live,
            LlmMode::Mock => StrategyMode::Mock,
        }
    }
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    #[arg(long, env = "LLM_MODE", value_enum, default_value_t = LlmMode::Live)]
    pub llm_mode: LlmMode,

    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: Option<String>,

    #[arg(long, env = "OPENAI_BASE_URL", default_value = "https://api.openai.com/v1")]
    pub openai_base_url: String,

    #[arg(long, env = "VISION_MODEL", default_value = "gpt-4o-mini")]
    pub vision_model: String,

    #[arg(long, env = "BUDGET_MODEL", default_value = "gpt-4o-mini")]
    pub budget_model: String,

    #[arg(long, env = "LLM_TIMEOUT_SECS", default_value_t = 60)]
    pub llm_timeout_secs: u64,
}

#[derive(Debug, Clone, clap::Args)]
pub struct CacheArgs {
    /// Seconds a cached recommendation stays valid. Unset means no expiry.
    #[arg(long, env = "CACHE_TTL_SECS")]
    pub cache_ttl_secs: Option<u64>,

    /// Sessions kept in memory before the least recently written is dropped.
    #[arg(long, env = "CACHE_MAX_SESSIONS", default_value_t = 10_000)]
    pub cache_max_sessions: usize,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_filter: String,

    #[arg(long, env = "LOG_JSON", default_value_t = false, action = ArgAction::Set)]
    pub log_json: bool,
}

impl From<Args> for MealMintConfig {
    fn from(args: Args) -> Self {
        MealMintConfig {
            llm: LLMConfig {
                mode: args.llm.llm_mode.into(),
                api_key: args.llm.openai_api_key,
                base_url: args.llm.openai_base_url,
                vision_model: args.llm.vision_model,
                budget_model: args.llm.budget_model,
                timeout: Duration::from_secs(args.llm.llm_timeout_secs),
            },
            cache: CacheConfig {
                ttl: args.cache.cache_ttl_secs.map(Duration::from_secs),
                max_sessions: args.cache.cache_max_sessions,
            },
        }
    }
}
