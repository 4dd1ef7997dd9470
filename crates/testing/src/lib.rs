// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 TxnWatch

//! Deterministic test instrumentation for commit lifecycles.
//!
//! This crate provides:
//! - [`RecordingObserver`]: records every lifecycle callback in order
//! - [`Gate`]: timeout-bounded cross-thread rendezvous points for
//!   controlling where a worker pauses inside its commit
//! - [`ScriptedCommit`]: a stand-in engine that drives a registry through
//!   the full commit lifecycle, with failure injection per stage
//!
//! Together these turn races and conflict-resolution paths into scripted,
//! repeatable scenarios: park one worker at a chosen lifecycle point, let
//! another run to completion, then release the first and assert on the
//! recorded order.

#![cfg_attr(not(debug_assertions), deny(warnings))]

mod driver;
mod event;
mod gate;
mod logging;
mod recording;

// Re-export from driver
pub use driver::{CommitError, CommitVersion, ScriptedCommit};

// Re-export from event
pub use event::CommitEvent;

// Re-export from gate
pub use gate::{DEFAULT_TIMEOUT, Gate};

// Re-export from logging
pub use logging::init_tracing;

// Re-export from recording
pub use recording::RecordingObserver;
