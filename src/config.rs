use crate::error::config::ConfigError;

/// Default number of recommendations requested by the insights overview.
pub const DEFAULT_RECOMMENDATION_COUNT: u32 = 10;

pub static USER_AGENT: &str = concat!("fundbank/", env!("CARGO_PKG_VERSION"));

pub struct Config {
    pub api_url: String,
    pub api_token: Option<String>,
    pub recommendation_count: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|value| !value.trim().is_empty());

        let api_url = get("FUNDBANK_API_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("FUNDBANK_API_URL".to_string()))?;

        let recommendation_count = match get("FUNDBANK_RECOMMENDATIONS") {
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(count) if count > 0 => count,
                _ => {
                    return Err(ConfigError::InvalidEnvValue {
                        var: "FUNDBANK_RECOMMENDATIONS".to_string(),
                        reason: format!("expected a positive integer, got {:?}", raw),
                    })
                }
            },
            None => DEFAULT_RECOMMENDATION_COUNT,
        };

        Ok(Self {
            api_url: api_url.trim().to_string(),
            api_token: get("FUNDBANK_API_TOKEN"),
            recommendation_count,
        })
    }
}
