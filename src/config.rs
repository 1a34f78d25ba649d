use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Ayurficha";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default tracing filter when RUST_LOG is unset.
pub fn default_log_filter() -> &'static str {
    "info"
}

/// Get the application data directory
/// ~/Ayurficha/ on all platforms (user-visible, next to the user's documents)
pub fn app_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join("Ayurficha")
}

/// Path of the patient database file
pub fn database_path() -> PathBuf {
    app_data_dir().join("pacientes.db")
}
