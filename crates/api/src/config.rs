use std::path::PathBuf;

use examgen_core::generator::{GeneratorConfig, PLACEHOLDER_API_KEY};

/// Server configuration loaded from environment variables.
///
/// All fields except the generator API key have defaults suitable for
/// local development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `300`). Generation blocks
    /// the request for the full run of the external generator, so this is
    /// deliberately generous; it is the only timeout applied to a hung
    /// generator process.
    pub request_timeout_secs: u64,
    /// External generator configuration (interpreter, script, credential,
    /// cache directory, question-count cap).
    pub generator: GeneratorConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                      |
    /// |------------------------|------------------------------|
    /// | `HOST`                 | `0.0.0.0`                    |
    /// | `PORT`                 | `3000`                       |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`      |
    /// | `REQUEST_TIMEOUT_SECS` | `300`                        |
    /// | `GENERATOR_INTERPRETER`| `python3`                    |
    /// | `GENERATOR_SCRIPT`     | `scripts/gen.py`             |
    /// | `GEMINI_API_KEY`       | placeholder (rejected at startup) |
    /// | `CACHE_DIR`            | `<tmp>/examgen`              |
    /// | `MAX_QUESTIONS`        | `50`                         |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "300".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let interpreter =
            std::env::var("GENERATOR_INTERPRETER").unwrap_or_else(|_| "python3".into());

        let script_path = PathBuf::from(
            std::env::var("GENERATOR_SCRIPT").unwrap_or_else(|_| "scripts/gen.py".into()),
        );

        // The placeholder default is rejected by `GeneratorConfig::validate`
        // at startup, so an unconfigured key is a loud failure rather than
        // a silent bad invocation.
        let api_key =
            std::env::var("GEMINI_API_KEY").unwrap_or_else(|_| PLACEHOLDER_API_KEY.into());

        let cache_dir = std::env::var("CACHE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| std::env::temp_dir().join("examgen"));

        let max_questions: u32 = std::env::var("MAX_QUESTIONS")
            .unwrap_or_else(|_| "50".into())
            .parse()
            .expect("MAX_QUESTIONS must be a valid u32");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            generator: GeneratorConfig {
                interpreter,
                script_path,
                api_key,
                cache_dir,
                max_questions,
            },
        }
    }
}
