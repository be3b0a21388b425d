pub mod cli;
pub mod config;
pub mod storage;


pub use storage::Record;
pub use storage::RecordStore;
pub use storage::{StoreError, DecodeError};
pub use config::StoreConfig;
pub use cli::CLI;
