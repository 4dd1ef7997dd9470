// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 TxnWatch

use crate::{observer::ObserverRef, registry::ObserverRegistry};

/// RAII guard that installs an observer and restores the previous one on
/// drop.
///
/// Each guard captures its own immediately-prior observer, so nested
/// guards restore in LIFO order without any explicit stack. The restore
/// runs on every exit path, including unwinding out of the guarded work.
#[must_use = "the previous observer is restored when the scope is dropped"]
pub struct ObserverScope<'a> {
	registry: &'a ObserverRegistry,
	previous: Option<ObserverRef>,
}

impl<'a> ObserverScope<'a> {
	/// Installs `observer` on `registry` and saves the previously active
	/// one.
	pub fn new(registry: &'a ObserverRegistry, observer: ObserverRef) -> Self {
		let previous = registry.active();
		registry.set_active(observer);
		Self {
			registry,
			previous: Some(previous),
		}
	}
}

impl Drop for ObserverScope<'_> {
	fn drop(&mut self) {
		if let Some(previous) = self.previous.take() {
			self.registry.set_active(previous);
		}
	}
}

impl ObserverRegistry {
	/// Runs `f` with `observer` active, then restores the previously
	/// active observer — also when `f` unwinds.
	///
	/// Exactly one install and one restore happen per invocation. Nested
	/// calls restore in LIFO order. Work inside `f` that spawns threads
	/// does not carry the observer along (each worker owns its own
	/// registry), and transactions leaked out of the scope are not
	/// retroactively affected.
	pub fn with_observer<F, R>(&self, observer: ObserverRef, f: F) -> R
	where
		F: FnOnce() -> R,
	{
		let _scope = ObserverScope::new(self, observer);
		f()
	}
}
