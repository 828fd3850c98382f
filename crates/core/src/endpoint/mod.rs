//! Endpoint discovery and cache-module generation.
//!
//! An "endpoint" is an optionally user-provided override file named
//! `gatsby-<kind>.<ext>` in the host's configuration directory.
//! [`resolve_endpoints`] locates them; [`setup_endpoints`] writes the
//! cache modules that proxy to them.

mod resolver;
mod setup;

pub use resolver::resolve_endpoints;
pub use setup::{BROWSER_SSR, EMPTY_MODULE, ENDPOINT_PATH_TOKEN, setup_endpoints};

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

/// The endpoint kinds the plugin recognizes. The kind doubles as the
/// `gatsby-<kind>` filename fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigType {
    Config,
    Node,
    Browser,
    Ssr,
}

impl ConfigType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigType::Config => "config",
            ConfigType::Node => "node",
            ConfigType::Browser => "browser",
            ConfigType::Ssr => "ssr",
        }
    }
}

impl fmt::Display for ConfigType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source extensions an endpoint file may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ext {
    Js,
    Jsx,
    Ts,
    Tsx,
}

impl Ext {
    pub fn as_str(&self) -> &'static str {
        match self {
            Ext::Js => "js",
            Ext::Jsx => "jsx",
            Ext::Ts => "ts",
            Ext::Tsx => "tsx",
        }
    }
}

/// What to look for when resolving one endpoint: a bare kind probes
/// every extension in [`crate::fs_tools::ALL_EXT`], an explicit spec
/// probes exactly the extensions it names.
///
/// Deserializes from either a kind string (`"browser"`) or a record
/// (`{"type": "ssr", "ext": ["ts"]}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EndpointSpec {
    Bare(ConfigType),
    Explicit {
        #[serde(rename = "type")]
        kind: ConfigType,
        ext: Vec<Ext>,
    },
}

impl EndpointSpec {
    pub fn kind(&self) -> ConfigType {
        match self {
            EndpointSpec::Bare(kind) => *kind,
            EndpointSpec::Explicit { kind, .. } => *kind,
        }
    }

    pub fn ext(&self) -> &[Ext] {
        match self {
            EndpointSpec::Bare(_) => crate::fs_tools::ALL_EXT,
            EndpointSpec::Explicit { ext, .. } => ext,
        }
    }
}

impl From<ConfigType> for EndpointSpec {
    fn from(kind: ConfigType) -> Self {
        EndpointSpec::Bare(kind)
    }
}

/// Endpoint kinds that were actually found on disk, keyed by kind.
pub type ResolvedEndpoints = HashMap<ConfigType, PathBuf>;
