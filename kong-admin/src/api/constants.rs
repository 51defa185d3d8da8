//! Default connection settings and header names for the Kong Admin API

/// Admin API port on a local gateway install.
pub const DEFAULT_ADMIN_URL: &str = "http://localhost:8001";

/// Workspace every gateway ships with.
pub const DEFAULT_WORKSPACE: &str = "default";

/// Stock admin username; the identity-provider flow requires a real one.
pub const DEFAULT_ADMIN_USER: &str = "kong_admin";

/// Header carrying the static admin token.
pub const ADMIN_TOKEN_HEADER: &str = "kong-admin-token";

/// Header naming the admin user for session-based access.
pub const ADMIN_USER_HEADER: &str = "kong-admin-user";

/// Content type sent with every write verb.
pub const JSON_CONTENT_TYPE: &str = "application/json;charset=utf-8";

/// Endpoint for the identity-provider credential exchange, relative to the
/// unscoped admin URL.
pub const AUTH_ENDPOINT: &str = "/auth";
