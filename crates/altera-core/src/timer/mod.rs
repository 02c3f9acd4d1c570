mod manager;
mod registry;

pub use manager::{
    ListenerId, TimerKey, TimerManager, DEFAULT_AUTOSAVE_INTERVAL_MS, SESSION_WINDOW_MS,
};
pub use registry::TimerRegistry;
