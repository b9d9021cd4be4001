/// Base URL used when none is configured.
///
/// Empty in production builds so requests stay on the origin that served the
/// front end. Building with `MUSIC_SERVER_SERVE` set points it at a locally
/// running server instead.
#[cfg(not(serve))]
pub const DEFAULT_BASE_URL: &str = "";
#[cfg(serve)]
pub const DEFAULT_BASE_URL: &str = "http://localhost:8980";
