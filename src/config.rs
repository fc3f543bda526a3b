//! Configuration management for Gigfolio Docs

use serde::Deserialize;
use std::env;
use std::path::PathBuf;

use crate::content::DEFAULT_EXTENSION;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub content: ContentConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentConfig {
    /// Directory holding the topic file tree
    pub root: PathBuf,
    /// Topic file extension
    pub extension: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 4000,
            },
            content: ContentConfig {
                root: PathBuf::from("./content"),
                extension: DEFAULT_EXTENSION.to_string(),
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        Ok(Config {
            server: ServerConfig {
                host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("SERVER_PORT")
                    .unwrap_or_else(|_| "4000".to_string())
                    .parse()
                    .unwrap_or(4000),
            },
            content: ContentConfig {
                root: env::var("CONTENT_ROOT")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| PathBuf::from("./content")),
                extension: env::var("CONTENT_EXTENSION")
                    .unwrap_or_else(|_| DEFAULT_EXTENSION.to_string()),
            },
        })
    }
}
