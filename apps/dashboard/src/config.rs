use serde::{Deserialize, Serialize};

const DEFAULT_API_BASE_URL: &str = "http://localhost:8600/api/v1";

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppProfile {
    Dev,
    Prod,
}

impl AppProfile {
    pub fn from_env(value: Option<String>) -> Self {
        match value.as_deref() {
            Some("prod") | Some("production") => Self::Prod,
            _ => Self::Dev,
        }
    }
}

/// Runtime configuration. The API base URL documents where a host CRM would
/// serve `CaseRecord` arrays from; the dashboard itself performs no
/// requests and renders fixture data.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_url: String,
    pub officer_name: Option<String>,
    pub profile: AppProfile,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            officer_name: None,
            profile: AppProfile::Dev,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        crate::config::load_dotenv();

        let mut config = Self::default();

        if let Some(url) = read_env("ONBOARD_API_BASE_URL") {
            config.api_base_url = url;
        }

        if let Some(officer) = read_env("ONBOARD_OFFICER") {
            config.officer_name = Some(officer);
        }

        config.profile = AppProfile::from_env(read_env("ONBOARD_PROFILE"));

        config
    }
}

fn read_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .or_else(|| option_env_from_build(key).map(|s| s.to_string()))
}

fn option_env_from_build(key: &str) -> Option<&'static str> {
    match key {
        "ONBOARD_API_BASE_URL" => option_env!("ONBOARD_API_BASE_URL"),
        "ONBOARD_OFFICER" => option_env!("ONBOARD_OFFICER"),
        "ONBOARD_PROFILE" => option_env!("ONBOARD_PROFILE"),
        _ => None,
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_dotenv() {
    if let Err(err) = dotenvy::dotenv() {
        if !matches!(err, dotenvy::Error::Io(ref io_err) if io_err.kind() == std::io::ErrorKind::NotFound)
        {
            tracing::warn!("failed to load .env: {err}");
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[inline]
pub fn load_dotenv() {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_defaults_to_dev() {
        assert_eq!(AppProfile::from_env(None), AppProfile::Dev);
        assert_eq!(AppProfile::from_env(Some("staging".into())), AppProfile::Dev);
        assert_eq!(AppProfile::from_env(Some("prod".into())), AppProfile::Prod);
    }
}
