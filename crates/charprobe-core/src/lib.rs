pub mod config;
pub mod error;
pub mod observer;
pub mod prober;

pub use config::ProbeConfig;
pub use error::ProbeError;
pub use observer::{ProbeObserver, StateEvent, TracingObserver, TransitionReason};
pub use prober::{CharSetProber, ProbingState};
