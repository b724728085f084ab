/// Application name shown in the demo's configuration section.
pub const APP_NAME: &str = "CPTo Rust Demo";

/// Application version shown alongside the name.
pub const VERSION: f64 = 2.5;

/// Maximum connection count advertised by the demo configuration.
pub const MAX_CONNECTIONS: u32 = 100;

/// Circle constant used by the calculator. Kept as the fixed literal the
/// demo has always printed rather than `std::f64::consts::PI`.
pub const PI: f64 = 3.14159265359;

/// Default buffer size advertised by the demo configuration.
pub const DEFAULT_BUFFER_SIZE: usize = 1024;

/// Database file name advertised by the demo configuration. Never opened.
pub const DATABASE_NAME: &str = "app_database.db";
