// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 TxnWatch

use parking_lot::Mutex;

use crate::{noop::noop, observer::ObserverRef};

/// Successor cell for observers that participate in hand-off chaining.
///
/// Holds at most one designated successor; a later designation overwrites
/// an earlier one. The cell only routes control — it never owns the
/// successor.
pub struct NextObserver {
	next: Mutex<Option<ObserverRef>>,
}

impl NextObserver {
	pub fn new() -> Self {
		Self {
			next: Mutex::new(None),
		}
	}

	/// Records `next` as the successor, overwriting any prior designation.
	pub fn set(&self, next: ObserverRef) {
		*self.next.lock() = Some(next);
	}

	/// Returns the designated successor, if any.
	pub fn get(&self) -> Option<ObserverRef> {
		self.next.lock().clone()
	}
}

impl Default for NextObserver {
	fn default() -> Self {
		Self::new()
	}
}

/// Links `observers` into a hand-off chain and returns its head.
///
/// Each observer designates the one following it as its successor, so a
/// worker that installs the head and advances once per completed
/// transaction is driven by each observer in turn, ending on the inert
/// default. An empty slice yields the inert default directly.
pub fn link(observers: &[ObserverRef]) -> ObserverRef {
	for pair in observers.windows(2) {
		pair[0].set_next_observer(pair[1].clone());
	}
	match observers.first() {
		Some(head) => head.clone(),
		None => noop(),
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;

	use super::*;
	use crate::closure::ObserverBuilder;

	#[test]
	fn test_cell_starts_empty() {
		assert!(NextObserver::new().get().is_none());
	}

	#[test]
	fn test_last_designation_wins() {
		let cell = NextObserver::new();
		let first = ObserverBuilder::new().build();
		let second = ObserverBuilder::new().build();

		cell.set(first);
		cell.set(second.clone());

		let designated = cell.get().unwrap();
		assert!(Arc::ptr_eq(&designated, &second));
	}

	#[test]
	fn test_link_wires_successors() {
		let a = ObserverBuilder::new().build();
		let b = ObserverBuilder::new().build();
		let c = ObserverBuilder::new().build();

		let head = link(&[a.clone(), b.clone(), c.clone()]);

		assert!(Arc::ptr_eq(&head, &a));
		assert!(Arc::ptr_eq(&a.next_observer().unwrap(), &b));
		assert!(Arc::ptr_eq(&b.next_observer().unwrap(), &c));
		assert!(c.next_observer().is_none());
	}

	#[test]
	fn test_link_of_empty_slice_is_noop() {
		assert!(Arc::ptr_eq(&link(&[]), &noop()));
	}
}
