use anyhow::Result;
use std::{env, path::PathBuf};

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,

    // OpenAI backend configuration
    pub openai_base_url: String,
    pub openai_api_key: String,

    // Generation settings (fixed per request, configurable per deployment)
    pub model: String,
    pub temperature: f32,

    // Logging configuration
    pub debug: bool,
    pub verbose: bool,
}

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

impl Config {
    fn load_dotenv(custom_path: Option<PathBuf>) -> Option<PathBuf> {
        if let Some(path) = custom_path {
            if path.exists() {
                if dotenvy::from_path(&path).is_ok() {
                    return Some(path);
                }
            }
            eprintln!("WARNING: Custom config file not found: {}", path.display());
        }

        if let Ok(path) = dotenvy::dotenv() {
            return Some(path);
        }

        None
    }

    pub fn from_env() -> Result<Self> {
        Self::from_env_with_path(None)
    }

    pub fn from_env_with_path(custom_path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = Self::load_dotenv(custom_path) {
            eprintln!("Loaded config from: {}", path.display());
        }

        let openai_api_key = env::var("OPENAI_API_KEY")
            .ok()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "OPENAI_API_KEY is required.\n\
                    Set it in the environment or in a .env file:\n\
                      OPENAI_API_KEY=sk-xxxxx"
                )
            })?;

        let openai_base_url =
            env::var("OPENAI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let model = env::var("OCTOLEARN_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let temperature = env::var("OCTOLEARN_TEMPERATURE")
            .ok()
            .and_then(|t| t.parse().ok())
            .unwrap_or(DEFAULT_TEMPERATURE);

        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8000);

        let debug = env::var("DEBUG")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        let verbose = env::var("VERBOSE")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        Ok(Config {
            port,
            openai_base_url,
            openai_api_key,
            model,
            temperature,
            debug,
            verbose,
        })
    }

    pub fn chat_completions_url(&self) -> String {
        format!(
            "{}/v1/chat/completions",
            self.openai_base_url.trim_end_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_config(base_url: &str) -> Config {
        Config {
            port: 8000,
            openai_base_url: base_url.to_string(),
            openai_api_key: "test-key".to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            debug: false,
            verbose: false,
        }
    }

    #[test]
    fn test_chat_completions_url() {
        let config = create_config("https://api.example.com");
        assert_eq!(
            config.chat_completions_url(),
            "https://api.example.com/v1/chat/completions"
        );
    }

    #[test]
    fn test_chat_completions_url_with_trailing_slash() {
        let config = create_config("https://api.example.com/");
        assert_eq!(
            config.chat_completions_url(),
            "https://api.example.com/v1/chat/completions"
        );
    }

    #[test]
    fn test_default_constants() {
        assert_eq!(DEFAULT_MODEL, "gpt-4o-mini");
        assert_eq!(DEFAULT_TEMPERATURE, 0.7);
    }
}
