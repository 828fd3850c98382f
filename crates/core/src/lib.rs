//! Discovers user-provided Gatsby endpoint overrides in a
//! configuration directory and generates the cache modules that proxy
//! to them.
//!
//! Resolution ([`resolve_endpoints`]) is a read-only probe over
//! convention-named files (`gatsby-<kind>.<ext>`); materialization
//! ([`setup_endpoints`]) writes one cache module per proxied kind,
//! either a templated re-export of the resolved file or an
//! empty-module stub.

pub mod endpoint;
pub mod error;
pub mod fs_tools;
pub mod logging;

pub use endpoint::{
    ConfigType, EndpointSpec, Ext, ResolvedEndpoints, resolve_endpoints, setup_endpoints,
};
pub use error::{Result, TsbridgeError};
