//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!   ┌──────────────┐      ┌──────────────────┐      ┌──────────────┐
//!   │   Console    │─────▶│  RecordManager   │─────▶│ SQLite store │
//!   │  (Prompt)    │      │  (application)   │      │(StudentStore)│
//!   └──────────────┘      └──────────────────┘      └──────────────┘
//! ```

pub mod inbound;
pub mod outbound;

pub use inbound::Prompt;
pub use outbound::StudentStore;
