// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 TxnWatch

use std::sync::Arc;

use crate::{
	chain::NextObserver,
	observer::{CommitObserver, ObserverRef},
};

type Hook = Box<dyn Fn() + Send + Sync>;

/// Observer assembled from per-notification closures.
///
/// Only the four lifecycle notifications are hookable; the wrap-style
/// callbacks pass through unchanged. Participates in chaining through an
/// embedded successor cell. Built via [`ObserverBuilder`].
pub struct ClosureObserver {
	commit_begin: Option<Hook>,
	backfill_begin: Option<Hook>,
	committed: Option<Hook>,
	aborted: Option<Hook>,
	next: NextObserver,
}

impl CommitObserver for ClosureObserver {
	fn on_commit_begin(&self) {
		if let Some(hook) = &self.commit_begin {
			hook();
		}
	}

	fn on_backfill_begin(&self) {
		if let Some(hook) = &self.backfill_begin {
			hook();
		}
	}

	fn on_transaction_committed(&self) {
		if let Some(hook) = &self.committed {
			hook();
		}
	}

	fn on_transaction_aborted(&self) {
		if let Some(hook) = &self.aborted {
			hook();
		}
	}

	fn next_observer(&self) -> Option<ObserverRef> {
		self.next.get()
	}

	fn set_next_observer(&self, next: ObserverRef) {
		self.next.set(next);
	}
}

/// Builder for [`ClosureObserver`].
pub struct ObserverBuilder {
	commit_begin: Option<Hook>,
	backfill_begin: Option<Hook>,
	committed: Option<Hook>,
	aborted: Option<Hook>,
}

impl ObserverBuilder {
	pub fn new() -> Self {
		Self {
			commit_begin: None,
			backfill_begin: None,
			committed: None,
			aborted: None,
		}
	}

	/// Hook fired before the first commit attempt.
	pub fn on_commit_begin<F>(mut self, f: F) -> Self
	where
		F: Fn() + Send + Sync + 'static,
	{
		self.commit_begin = Some(Box::new(f));
		self
	}

	/// Hook fired once the commit record is published.
	pub fn on_backfill_begin<F>(mut self, f: F) -> Self
	where
		F: Fn() + Send + Sync + 'static,
	{
		self.backfill_begin = Some(Box::new(f));
		self
	}

	/// Hook fired after a commit fully succeeds.
	pub fn on_transaction_committed<F>(mut self, f: F) -> Self
	where
		F: Fn() + Send + Sync + 'static,
	{
		self.committed = Some(Box::new(f));
		self
	}

	/// Hook fired after a transaction fails.
	pub fn on_transaction_aborted<F>(mut self, f: F) -> Self
	where
		F: Fn() + Send + Sync + 'static,
	{
		self.aborted = Some(Box::new(f));
		self
	}

	pub fn build(self) -> ObserverRef {
		Arc::new(ClosureObserver {
			commit_begin: self.commit_begin,
			backfill_begin: self.backfill_begin,
			committed: self.committed,
			aborted: self.aborted,
			next: NextObserver::new(),
		})
	}
}

impl Default for ObserverBuilder {
	fn default() -> Self {
		Self::new()
	}
}
