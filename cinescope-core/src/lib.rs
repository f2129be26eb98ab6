//! Core of the cinescope movie search client.
//!
//! A single search session pages through an OMDb-style metadata service
//! with a strict single-flight guard: at most one network request is
//! outstanding at any time. Pages arrive either on an explicit "load more"
//! or, once that has been used, by scrolling near the bottom of the list.
//!
//! - [`providers`]: the [`MetadataClient`] boundary and the OMDb client.
//! - [`session`]: session state and the [`FetchOrchestrator`].
//! - [`view`]: visible screen, banner, and load-more affordance.
//! - [`scroll`]: the continuous-loading trigger.
//! - [`render`]: presenter traits implemented by front-ends.
//! - [`runtime`]: executes orchestrator effects on Tokio.

#![allow(missing_docs)]

pub mod providers;
pub mod render;
pub mod runtime;
pub mod scroll;
pub mod session;
pub mod view;

pub use providers::{MetadataClient, OmdbClient, ProviderError};
pub use render::{
    DetailRenderer, Presenter, RecordingPresenter, ResultRenderer, Surface,
};
pub use runtime::SessionRuntime;
pub use scroll::ScrollContinuation;
pub use session::{Effect, FetchOrchestrator, LoadingMode, Message, SessionState};
pub use view::{Banner, Severity, View, ViewController};
