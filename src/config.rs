use crate::allowed_origins::AllowedOrigins;
use crate::constants::config_key as key;
use crate::options::{CorsOptions, ValidationError};
use crate::token_list::TokenList;
use thiserror::Error;

/// String-keyed filter configuration, as found in a deployment config section.
///
/// List-valued keys hold comma-separated strings. Only `local_origin` is required;
/// it is checked when the configuration is turned into [`CorsOptions`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CorsConfig {
    pub local_origin: Option<String>,
    pub allow_origins: Option<String>,
    pub allow_methods: Option<String>,
    pub allow_headers: Option<String>,
    pub expose_headers: Option<String>,
}

impl CorsConfig {
    /// Collects the recognised keys from `pairs`. Unknown keys are ignored and
    /// later pairs override earlier ones.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut config = Self::default();
        for (name, value) in pairs {
            let slot = match name.as_ref() {
                key::LOCAL_ORIGIN => &mut config.local_origin,
                key::ALLOW_ORIGINS => &mut config.allow_origins,
                key::ALLOW_METHODS => &mut config.allow_methods,
                key::ALLOW_HEADERS => &mut config.allow_headers,
                key::EXPOSE_HEADERS => &mut config.expose_headers,
                _ => continue,
            };
            *slot = Some(value.into());
        }
        config
    }

    /// Layers `local` over `global`: keys set in `local` win.
    pub fn merged(global: &CorsConfig, local: &CorsConfig) -> Self {
        fn pick(global: &Option<String>, local: &Option<String>) -> Option<String> {
            local.clone().or_else(|| global.clone())
        }

        Self {
            local_origin: pick(&global.local_origin, &local.local_origin),
            allow_origins: pick(&global.allow_origins, &local.allow_origins),
            allow_methods: pick(&global.allow_methods, &local.allow_methods),
            allow_headers: pick(&global.allow_headers, &local.allow_headers),
            expose_headers: pick(&global.expose_headers, &local.expose_headers),
        }
    }

    pub fn into_options(self) -> Result<CorsOptions, ConfigError> {
        CorsOptions::try_from(self)
    }
}

impl TryFrom<CorsConfig> for CorsOptions {
    type Error = ConfigError;

    fn try_from(config: CorsConfig) -> Result<Self, Self::Error> {
        let local_origin = config.local_origin.ok_or(ConfigError::MissingLocalOrigin)?;
        let parse = |value: Option<String>| value.as_deref().map(TokenList::parse).unwrap_or_default();

        Ok(CorsOptions {
            allow_origins: config
                .allow_origins
                .as_deref()
                .map(AllowedOrigins::parse)
                .unwrap_or_default(),
            allow_methods: parse(config.allow_methods),
            allow_headers: parse(config.allow_headers),
            expose_headers: config.expose_headers.as_deref().map(TokenList::parse),
            ..CorsOptions::new(local_origin)
        })
    }
}

/// Errors raised while building a policy from configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("local_origin is a required parameter")]
    MissingLocalOrigin,
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
