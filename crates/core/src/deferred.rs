// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 TxnWatch

/// A deferred engine operation handed to wrap-style callbacks.
///
/// The receiving observer must call [`run`](Self::run) exactly once.
/// Running consumes the value, so a second invocation is unrepresentable;
/// dropping it without running is detected by the dispatching
/// [`ObserverRegistry`](crate::ObserverRegistry), which panics.
pub struct Deferred<'a> {
	op: Box<dyn FnOnce() + 'a>,
}

impl<'a> Deferred<'a> {
	pub fn new(op: impl FnOnce() + 'a) -> Self {
		Self {
			op: Box::new(op),
		}
	}

	/// Executes the wrapped operation.
	pub fn run(self) {
		(self.op)()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_run_executes_operation() {
		let mut called = false;
		Deferred::new(|| called = true).run();
		assert!(called);
	}

	#[test]
	fn test_captures_and_releases_borrow() {
		let mut count = 0;
		Deferred::new(|| count += 1).run();
		Deferred::new(|| count += 1).run();
		assert_eq!(count, 2);
	}
}
