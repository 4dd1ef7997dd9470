// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 TxnWatch

use std::{cell::RefCell, marker::PhantomData};

use tracing::trace;

use crate::{
	deferred::Deferred,
	noop::noop,
	observer::ObserverRef,
};

/// Per-worker routing state for commit observation.
///
/// Each worker owns exactly one registry and passes it by reference through
/// the engine call chain; the engine consults it at every lifecycle point
/// and test harnesses install observers on it. The registry is deliberately
/// neither `Send` nor `Sync`, so the exactly-one-active-observer invariant
/// holds structurally and the active slot needs no locking.
///
/// The active observer starts as the inert default and is replaced only by
/// [`set_active`](Self::set_active), [`reset`](Self::reset),
/// [`advance_to_next`](Self::advance_to_next) or a scope.
pub struct ObserverRegistry {
	active: RefCell<ObserverRef>,
	// Marker to prevent Send and Sync
	_not_send_sync: PhantomData<*const ()>,
}

impl ObserverRegistry {
	/// Creates a registry with the inert default observer active.
	pub fn new() -> Self {
		Self {
			active: RefCell::new(noop()),
			_not_send_sync: PhantomData,
		}
	}

	/// Returns the currently active observer.
	pub fn active(&self) -> ObserverRef {
		self.active.borrow().clone()
	}

	/// Replaces the active observer unconditionally.
	pub fn set_active(&self, observer: ObserverRef) {
		*self.active.borrow_mut() = observer;
	}

	/// Reinstates the inert default observer.
	pub fn reset(&self) {
		trace!("observer registry reset");
		self.set_active(noop());
	}

	/// Switches to the active observer's designated successor, or back to
	/// the inert default when none was designated.
	///
	/// The engine calls this exactly once per transaction that reached a
	/// terminal state, so a worker running several transactions in
	/// sequence hands off along the chain. Calling it with no successor
	/// designated is well-defined, not a failure.
	pub fn advance_to_next(&self) {
		let next = self.active().next_observer();
		trace!(chained = next.is_some(), "advancing to next observer");
		self.set_active(next.unwrap_or_else(noop));
	}

	/// Routes transaction construction through the active observer and
	/// returns the constructed value.
	///
	/// # Panics
	///
	/// Panics if the observer drops the deferred construction without
	/// running it.
	pub fn transaction_start<F, R>(&self, create: F) -> R
	where
		F: FnOnce() -> R,
	{
		let observer = self.active();
		let mut result = None;
		observer.on_transaction_start(Deferred::new(|| result = Some(create())));
		match result {
			Some(value) => value,
			None => panic!("observer dropped the deferred transaction construction"),
		}
	}

	/// Routes commit preparation through the active observer and returns
	/// the body's result untouched.
	///
	/// # Panics
	///
	/// Panics if the observer drops the deferred body without running it.
	pub fn commit_prepare<F, R>(&self, body: F) -> R
	where
		F: FnOnce() -> R,
	{
		let observer = self.active();
		let mut result = None;
		observer.on_commit_prepare(Deferred::new(|| result = Some(body())));
		match result {
			Some(value) => value,
			None => panic!("observer dropped the deferred commit preparation"),
		}
	}

	/// The first commit attempt is about to start.
	pub fn commit_begin(&self) {
		self.active().on_commit_begin();
	}

	/// The commit record is published; backfill is next.
	pub fn backfill_begin(&self) {
		self.active().on_backfill_begin();
	}

	/// The commit fully succeeded.
	pub fn transaction_committed(&self) {
		self.active().on_transaction_committed();
	}

	/// The transaction failed.
	///
	/// Fired on every failure path, including bodies that fail before the
	/// commit attempt — in that case no
	/// [`commit_begin`](Self::commit_begin) precedes it.
	pub fn transaction_aborted(&self) {
		self.active().on_transaction_aborted();
	}
}

impl Default for ObserverRegistry {
	fn default() -> Self {
		Self::new()
	}
}
