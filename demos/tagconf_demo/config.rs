//! Configuration structs for the tagconf demo application.
//!
//! The root [`DemoConfig`] holds two nested sub-configs, [`ServerConfig`] and
//! [`DisplayConfig`], each describing its fields through [`Schema`].
//!
//! # Env var mapping
//!
//! | Env var               | Field                    |
//! |-----------------------|--------------------------|
//! | `NAME`                | `name`                   |
//! | `VERBOSE`             | `verbose`                |
//! | `SERVER_HOST`         | `server.host`            |
//! | `SERVER_PORT`         | `server.port`            |
//! | `SERVER_MAX_CONN`     | `server.max_connections` |
//! | `DISPLAY_COLOR`       | `display.color`          |
//! | `DISPLAY_FORMAT`      | `display.format`         |
//!
//! `api_token` is disabled: it is never read from the file or environment.

use serde::{Deserialize, Serialize};
use tagconf::{Field, Kind, Meta, Schema};

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct DemoConfig {
    pub name: String,
    pub verbose: bool,
    pub api_token: String,
    pub server: ServerConfig,
    pub display: DisplayConfig,
}

impl Schema for DemoConfig {
    const META: Meta = Meta {
        name: "DemoConfig",
        fields: &[
            Field::new("name", Kind::String).tags(&[("cfgDefault", "tagconf-demo")]),
            Field::new("verbose", Kind::Bool).tags(&[("cfgDefault", "false")]),
            Field::new("api_token", Kind::String).tags(&[("cfg", "-")]),
            Field::nested("server", &ServerConfig::META),
            Field::nested("display", &DisplayConfig::META),
        ],
    };
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct ServerConfig {
    pub host: String,
    pub port: i64,
    pub max_connections: i64,
}

impl Schema for ServerConfig {
    const META: Meta = Meta {
        name: "ServerConfig",
        fields: &[
            Field::new("host", Kind::String).tags(&[("cfgDefault", "127.0.0.1")]),
            Field::new("port", Kind::Int).tags(&[("cfgDefault", "3000")]),
            Field::new("max_connections", Kind::Int)
                .tags(&[("cfg", "max_conn"), ("cfgDefault", "100")]),
        ],
    };
}

/// `color` drives the ANSI color of the `echo` output.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct DisplayConfig {
    pub color: String,
    pub format: String,
}

impl Schema for DisplayConfig {
    const META: Meta = Meta {
        name: "DisplayConfig",
        fields: &[
            Field::new("color", Kind::String).tags(&[("cfgDefault", "yellow")]),
            Field::new("format", Kind::String).tags(&[("cfgDefault", "pretty")]),
        ],
    };
}
