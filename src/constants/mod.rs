pub mod platform;

pub use platform::Platform;

/// Release advertised when nothing overrides it in the environment.
pub const DEFAULT_RELEASE_VERSION: &str = "0.1.7";
pub const DEFAULT_RELEASE_BASE_URL: &str = "https://pub-29493441e7d647038e2f777e7cac5cce.r2.dev";
pub const DEFAULT_ARTIFACT_NAME: &str = "dearsql";

/// seconds
pub const DEFAULT_CACHE_MAX_AGE: u32 = 300;
