//! ABA ferias server - fairs, bookings and volunteers for ABA Animal
//!
//! # Overview
//!
//! - **Capacity ledger** (`ledger`): every fair keeps
//!   `cupos_disponibles = cupos_totales - reservados`
//! - **Collection store** (`ledger::storage`): redb file with one JSON
//!   array per collection plus an event journal
//! - **CSV export** (`export`)
//! - **HTTP API** (`api`): public pages and the admin dashboard
//!
//! # Module structure
//!
//! ```text
//! feria-server/src/
//! ├── core/          # config, state, errors, server
//! ├── ledger/        # commands, actions, appliers, storage
//! ├── export/        # CSV rendering
//! ├── api/           # HTTP routes and handlers
//! └── utils/         # logging
//! ```

pub mod api;
pub mod core;
pub mod export;
pub mod ledger;
pub mod utils;

// Re-export common types
pub use core::{Config, Server, ServerState};
pub use ledger::{LedgerManager, LedgerState};
pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCode};

// Re-export logger functions
pub use utils::logger::{cleanup_old_logs, init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
    ___    ____  ___       ______          _
   /   |  / __ )/   |     / ____/__  _____(_)___ ______
  / /| | / __  / /| |    / /_  / _ \/ ___/ / __ `/ ___/
 / ___ |/ /_/ / ___ |   / __/ /  __/ /  / / /_/ (__  )
/_/  |_/_____/_/  |_|  /_/    \___/_/  /_/\__,_/____/
    "#
    );
}

/// Load `.env`, create the work directory and start logging
///
/// Returns the configuration the rest of startup should use.
pub fn setup_environment() -> anyhow::Result<Config> {
    // Missing .env is fine
    let _ = dotenv::dotenv();

    let config = Config::from_env();
    std::fs::create_dir_all(&config.work_dir)?;

    let log_dir = config.log_dir();
    init_logger_with_file(&config.log_level, config.log_json, Some(&log_dir))?;

    tracing::info!(
        work_dir = %config.work_dir,
        environment = %config.environment,
        "Environment ready"
    );
    Ok(config)
}
