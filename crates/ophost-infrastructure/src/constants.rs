//! Infrastructure constants

/// Environment variable prefix for configuration overrides.
///
/// Nested keys use a double underscore separator, e.g.
/// `OPHOST__SERVER__PORT=8000` sets `server.port`.
pub const CONFIG_ENV_PREFIX: &str = "OPHOST__";

/// Separator between nested keys in environment variable names.
pub const CONFIG_ENV_SEPARATOR: &str = "__";

/// Default configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "ophost.toml";

/// Default host the endpoint binds to.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default port the endpoint binds to.
pub const DEFAULT_PORT: u16 = 8000;

/// Default base path of the endpoint.
pub const DEFAULT_BASE_PATH: &str = "/Operations.svc";

/// Default relative path the operation route is mounted under.
pub const DEFAULT_RELATIVE_PATH: &str = "Operations";
