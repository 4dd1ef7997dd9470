// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 TxnWatch

//! Timeout-bounded rendezvous points for test choreography.
//!
//! Waits never hang a stuck test run: they panic with the gate's label once
//! the timeout elapses, so a deadlocked scenario fails loudly instead of
//! timing out at the harness level.

use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};

/// Default timeout for gate waits (5 seconds)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// One-shot open/closed synchronization point.
///
/// A gate starts closed. Any thread may open it; opening is idempotent and
/// wakes all waiters. Typical use: an observer hook opens a "reached" gate
/// and then waits on a "resume" gate, parking its worker at a precise
/// lifecycle point.
pub struct Gate {
	label: &'static str,
	open: Mutex<bool>,
	cond: Condvar,
}

impl Gate {
	pub fn new(label: &'static str) -> Self {
		Self {
			label,
			open: Mutex::new(false),
			cond: Condvar::new(),
		}
	}

	/// Opens the gate and wakes all waiters.
	pub fn open(&self) {
		let mut open = self.open.lock();
		*open = true;
		self.cond.notify_all();
	}

	pub fn is_open(&self) -> bool {
		*self.open.lock()
	}

	/// Blocks until the gate opens.
	///
	/// # Panics
	///
	/// Panics if the gate stays closed for [`DEFAULT_TIMEOUT`].
	pub fn wait(&self) {
		self.wait_for(DEFAULT_TIMEOUT);
	}

	/// Blocks until the gate opens, for at most `timeout`.
	///
	/// # Panics
	///
	/// Panics if the gate stays closed when the timeout elapses.
	pub fn wait_for(&self, timeout: Duration) {
		let deadline = Instant::now() + timeout;
		let mut open = self.open.lock();
		while !*open {
			if self.cond.wait_until(&mut open, deadline).timed_out() && !*open {
				panic!("Timeout after {:?}: gate '{}' never opened", timeout, self.label);
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use std::{sync::Arc, thread, time::Duration};

	use super::*;

	#[test]
	fn test_wait_returns_once_open() {
		let gate = Gate::new("already open");
		gate.open();
		gate.wait();
		assert!(gate.is_open());
	}

	#[test]
	fn test_open_wakes_waiting_thread() {
		let gate = Arc::new(Gate::new("cross thread"));

		let waiter = thread::spawn({
			let gate = gate.clone();
			move || gate.wait()
		});

		gate.open();
		waiter.join().unwrap();
	}

	#[test]
	fn test_open_is_idempotent() {
		let gate = Gate::new("double open");
		gate.open();
		gate.open();
		gate.wait();
	}

	#[test]
	#[should_panic(expected = "never opened")]
	fn test_wait_panics_on_timeout() {
		let gate = Gate::new("stays closed");
		gate.wait_for(Duration::from_millis(10));
	}
}
