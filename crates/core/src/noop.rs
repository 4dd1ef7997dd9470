// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 TxnWatch

use std::sync::{Arc, OnceLock};

use crate::observer::{CommitObserver, ObserverRef};

/// The inert default observer.
///
/// Every callback is a pure pass-through: wrapped operations run
/// immediately, notifications do nothing, and successor designations are
/// ignored. Stateless, so a single shared instance serves the whole
/// process.
pub struct NoOpObserver;

impl CommitObserver for NoOpObserver {}

/// Returns the shared [`NoOpObserver`] instance.
pub fn noop() -> ObserverRef {
	static INSTANCE: OnceLock<ObserverRef> = OnceLock::new();

	INSTANCE.get_or_init(|| Arc::new(NoOpObserver)).clone()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::deferred::Deferred;

	#[test]
	fn test_noop_is_shared_instance() {
		assert!(Arc::ptr_eq(&noop(), &noop()));
	}

	#[test]
	fn test_noop_runs_wrapped_operations() {
		let observer = noop();

		let mut started = false;
		observer.on_transaction_start(Deferred::new(|| started = true));
		assert!(started);

		let mut prepared = false;
		observer.on_commit_prepare(Deferred::new(|| prepared = true));
		assert!(prepared);
	}

	#[test]
	fn test_noop_keeps_no_successor() {
		let observer = noop();
		observer.set_next_observer(noop());
		assert!(observer.next_observer().is_none());
	}
}
