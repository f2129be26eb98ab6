//! Search session: state, messages, and the fetch orchestrator.

pub mod messages;
pub mod orchestrator;
pub mod state;

pub use messages::{Effect, Message};
pub use orchestrator::FetchOrchestrator;
pub use state::{DetailTicket, FetchTicket, LoadingMode, SessionState};
