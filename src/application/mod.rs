//! Application services. Depend on domain and ports, never on adapters.

pub mod record_manager;

pub use record_manager::RecordManager;
