pub mod cli;
pub mod config;
pub mod storage;

pub use cli::{serve, CliError, Command, InputError, Invocation, Outcome, CLI};
pub use config::StoreConfig;
pub use storage::{Employee, EmployeeStore, MemoryStore, MongoStore, RecordId, StoreError};
