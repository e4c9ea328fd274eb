//! Shop Server - fruit shop backend
//!
//! # Module layout
//!
//! ```text
//! shop-server/src/
//! ├── core/          # config, state, server
//! ├── auth/          # JWT, one-time codes, extractors
//! ├── db/            # key-value store, seed catalog, reconciliation
//! ├── orders/        # cart and order builder
//! ├── services/      # catalog, orders, inquiries, login, text generation
//! ├── api/           # HTTP routes and handlers
//! └── utils/         # logging, input validation
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod orders;
pub mod services;
pub mod utils;

// Re-export common types
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use db::Storage;
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro, accepts tracing field syntax
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

/// Initialize logging from the configuration
pub fn setup_environment(config: &Config) {
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
}

pub fn print_banner() {
    println!(
        r#"
  _____     _                _
 |_   _| __(_)_   _____ _ __ (_)
   | || '__| \ \ / / _ \ '_ \| |
   | || |  | |\ V /  __/ | | | |
   |_||_|  |_| \_/ \___|_| |_|_|
        fruit shop server
    "#
    );
}
