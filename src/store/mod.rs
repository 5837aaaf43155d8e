//! Persistence: per-user settings and the onboarding-complete flag.

pub mod libsql_backend;
pub mod memory;
pub mod traits;

pub use libsql_backend::LibSqlStore;
pub use memory::MemoryStore;
pub use traits::SettingsStore;
