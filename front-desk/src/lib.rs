//! Front Desk - restaurant table reservation and order state
//!
//! # Overview
//!
//! - **Table directory** (`tables::directory`): table list from HTTP, a file or memory
//! - **State store** (`tables::store`): reservations and per-table choices
//! - **Queries** (`tables::query`): order view for a single table
//! - **Console** (`console`): JSON lines front end over stdin/stdout
//!
//! # Module structure
//!
//! ```text
//! front-desk/src/
//! ├── core/          # Configuration
//! ├── tables/        # State model, reducers, store, directory sources
//! ├── console.rs     # stdin/stdout front end
//! └── utils/         # Logging
//! ```

pub mod console;
pub mod core;
pub mod tables;
pub mod utils;

pub use core::Config;
pub use tables::directory::directory_from_config;
pub use tables::{
    ActionOutcome, Rejection, Selection, StoreError, StoreEvent, StoreResult, TableDirectory,
    TablesStateModel, TablesStore,
};

pub use utils::logger::{init_logger, init_logger_with_file};

/// Load `.env`, read configuration and initialize logging
pub fn setup_environment() -> Config {
    dotenv::dotenv().ok();
    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    config
}
