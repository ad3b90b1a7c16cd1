//! Supervisor events: types and broadcast bus.
//!
//! This module groups the event **data model** and the **bus** used to
//! publish/subscribe to lifecycle events emitted by the supervisor.
//!
//! ## Contents
//! - [`EventKind`], [`Event`] event classification and payload metadata
//! - [`Bus`] thin wrapper over `tokio::sync::broadcast`
//!
//! ## Quick reference
//! - **Publishers**: `Supervisor` (admission, cancel, reset, signals) and the
//!   job execution task spawned by `Supervisor::admit` (terminal result, once
//!   the state is `Completed`).
//! - **Consumers**: anything holding a receiver from [`Supervisor::subscribe`](crate::Supervisor::subscribe).

mod bus;
mod event;

pub use bus::Bus;
pub use event::{Event, EventKind};
