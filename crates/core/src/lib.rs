// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 TxnWatch

//! Commit-lifecycle observation hooks for optimistic transaction engines.
//!
//! This crate provides:
//! - The [`CommitObserver`] contract: two wrap-style callbacks around
//!   transaction construction and commit preparation, four lifecycle
//!   notifications, and successor designation for hand-off chaining
//! - A shared inert default ([`noop`]) that passes everything through
//! - [`ObserverRegistry`], the per-worker handle the engine carries through
//!   its call chain and consults at each lifecycle point
//! - [`ObserverScope`], a guard that installs an observer for the dynamic
//!   extent of a unit of work and restores the previous one on every exit
//!   path, including unwinding
//!
//! # Architecture
//!
//! Every worker thread owns exactly one [`ObserverRegistry`] and passes it
//! by reference through the engine call chain. The registry is not `Send`
//! and not `Sync`, so the one-active-observer-per-worker invariant is
//! enforced by the compiler rather than by locking. Observers themselves
//! are `Send + Sync` shared values; the registry, scopes and chain links
//! only route control to them and never take ownership.
//!
//! A worker that performs several transactions in sequence can be driven by
//! a different observer for each one: observers designate a successor via
//! [`CommitObserver::set_next_observer`] (or [`link`]), and the engine
//! advances the registry once per completed transaction.
//!
//! # Usage
//!
//! ```ignore
//! // One registry per worker, handed through the engine call chain.
//! let registry = ObserverRegistry::new();
//!
//! let observer = ObserverBuilder::new()
//!     .on_commit_begin(|| println!("first commit attempt starting"))
//!     .build();
//!
//! // Active for the dynamic extent of the closure, restored afterward.
//! registry.with_observer(observer, || {
//!     let txn = registry.transaction_start(|| engine.begin());
//!     // ... engine drives the remaining lifecycle points ...
//! });
//! ```

#![cfg_attr(not(debug_assertions), deny(warnings))]

mod chain;
mod closure;
mod deferred;
mod noop;
mod observer;
mod registry;
mod scope;

// Re-export from observer
pub use observer::{CommitObserver, ObserverRef};

// Re-export from deferred
pub use deferred::Deferred;

// Re-export from noop
pub use noop::{NoOpObserver, noop};

// Re-export from registry
pub use registry::ObserverRegistry;

// Re-export from scope
pub use scope::ObserverScope;

// Re-export from chain
pub use chain::{NextObserver, link};

// Re-export from closure
pub use closure::{ClosureObserver, ObserverBuilder};
