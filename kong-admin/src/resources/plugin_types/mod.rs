//! Typed wrappers for specific plugin kinds
//!
//! Each wrapper pins the plugin `name` and turns a typed config struct
//! into the `config` object the plugins endpoint expects; everything else
//! delegates to [`Plugins`](super::plugins::Plugins).

pub mod acl;
pub mod key_auth;
pub mod rate_limiting_advanced;

pub use acl::{AclConfig, AclPlugin};
pub use key_auth::{KeyAuthConfig, KeyAuthPlugin};
pub use rate_limiting_advanced::{RateLimitingAdvancedConfig, RateLimitingAdvancedPlugin};
