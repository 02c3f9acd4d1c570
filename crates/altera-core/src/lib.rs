//! # Altera Core Library
//!
//! Core library for the Altera screening toolkit. The browser dashboard and
//! the CLI are thin hosts over this crate, which owns:
//!
//! - **Session timers**: wall-clock elapsed-time tracking per
//!   candidate/question pair, persisted through a session store so a timer
//!   survives host restarts within a one-hour validity window. No internal
//!   threads -- the host drives periodic persistence via `tick()`.
//! - **Timer registry**: one timer per key, plus the single fan-out point
//!   for page-level events (visibility change, before-unload).
//! - **Analytics**: a typed client for the external analytics microservice
//!   and the pure score classification / ROI / funnel derivations the
//!   dashboard renders.
//! - **Storage**: a session key-value store abstraction with in-memory and
//!   SQLite backings, and TOML-based configuration.
//!
//! ## Key components
//!
//! - [`TimerManager`]: per-question session timer
//! - [`TimerRegistry`]: one-timer-per-key registry and event fan-out
//! - [`AnalyticsClient`]: analytics service client
//! - [`Config`]: application configuration management

pub mod analytics;
pub mod clock;
pub mod error;
pub mod events;
pub mod storage;
pub mod timer;

pub use analytics::{AnalyticsClient, JobDetail, JobSummary};
pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{ApiError, ConfigError, CoreError, StorageError};
pub use events::{Event, TimerSnapshot};
pub use storage::{Config, MemoryStore, SessionDb, SessionStore};
pub use timer::{TimerManager, TimerRegistry};
