// SPDX-FileCopyrightText: 2025 Timothy Pogue
//
// SPDX-License-Identifier: ISC

use std::path::Path;
use serde::{Serialize, Deserialize};
use figment::{Figment, Error, providers::{Format, Json, Yaml, Env, Serialized}};

use crate::constant::{DEFAULT_FIELD_MANAGER, ENV_PREFIX};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[allow(unused)]
#[derive(Default)]
pub struct AppConfig {
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub server: ServerConfig,
}


#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[allow(unused)]
pub struct ProviderConfig {
    /// Path to a kubeconfig file, when unset the config is inferred
    #[serde(default)]
    pub kubeconfig: Option<String>,
    /// Kubeconfig context to use instead of the current context
    #[serde(default)]
    pub context: Option<String>,
    /// Field manager used for server-side apply
    #[serde(default = "default_field_manager")]
    pub field_manager: String,
}

fn default_field_manager() -> String {
    DEFAULT_FIELD_MANAGER.to_string()
}

impl Default for ProviderConfig {
    fn default() -> Self {
        ProviderConfig {
            kubeconfig: None,
            context: None,
            field_manager: default_field_manager(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[allow(unused)]
pub struct ServerConfig {
    #[serde(default)]
    pub host: String,
    /// Port to listen on, `0` lets the OS pick one which is reported in the handshake
    #[serde(default)]
    pub port: u16,
    #[serde(default)]
    pub tls: TLSConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            tls: TLSConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[allow(unused)]
pub struct TLSConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub cert_file: String,
    #[serde(default)]
    pub key_file: String,
}

impl Default for TLSConfig {
    fn default() -> Self {
        TLSConfig {
            enabled: false,
            cert_file: "/etc/ssl/certs/tls.crt".to_string(),
            key_file: "/etc/ssl/certs/tls.key".to_string(),
        }
    }
}

pub struct AppConfigBuilder {
    figment: Figment,
}

impl AppConfigBuilder {
    pub fn with_file(&mut self, path: &str) -> &mut Self {
        let extension = Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();

        self.figment = match extension {
            "json" => self.figment.clone().merge(Json::file(path)),
            "yaml" | "yml" => self.figment.clone().merge(Yaml::file(path)),
            _ => self.figment.clone(),
        };
        self
    }

    pub fn with_env(&mut self) -> &mut Self {
        self.figment = self.figment.clone().merge(Env::prefixed(&format!("{}__", ENV_PREFIX)).split("__"));
        self
    }

    pub fn with_override_option(&mut self, key: &str, value: Option<&str>) -> &mut Self {
        if let Some(value) = value {
            self.figment = self.figment.clone().merge(Serialized::default(key, value));
        }
        self
    }

    pub fn build(&self) -> Result<AppConfig, Error> {
        self.figment.extract()
    }
}

impl Default for AppConfigBuilder {
    fn default() -> Self {
        AppConfigBuilder {
            figment: Figment::from(Serialized::defaults(AppConfig::default()))
        }
    }
}
