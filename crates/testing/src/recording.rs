// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 TxnWatch

use std::sync::Arc;

use parking_lot::Mutex;
use txnwatch_core::{CommitObserver, Deferred, NextObserver, ObserverRef};

use crate::event::CommitEvent;

/// Observer that records every callback it receives, in order.
///
/// Wrapped operations still run; the recording happens on callback entry.
/// The log may be inspected from any thread while a worker drives the
/// lifecycle. Participates in chaining.
pub struct RecordingObserver {
	events: Mutex<Vec<CommitEvent>>,
	next: NextObserver,
}

impl RecordingObserver {
	pub fn new() -> Arc<Self> {
		Arc::new(Self {
			events: Mutex::new(Vec::new()),
			next: NextObserver::new(),
		})
	}

	/// Snapshot of the callbacks observed so far.
	pub fn events(&self) -> Vec<CommitEvent> {
		self.events.lock().clone()
	}

	/// Whether `event` was observed at least once.
	pub fn saw(&self, event: CommitEvent) -> bool {
		self.events.lock().contains(&event)
	}

	/// How many times `event` was observed.
	pub fn count(&self, event: CommitEvent) -> usize {
		self.events.lock().iter().filter(|seen| **seen == event).count()
	}

	pub fn clear(&self) {
		self.events.lock().clear();
	}

	fn record(&self, event: CommitEvent) {
		self.events.lock().push(event);
	}
}

impl CommitObserver for RecordingObserver {
	fn on_transaction_start(&self, create: Deferred<'_>) {
		self.record(CommitEvent::TransactionStart);
		create.run();
	}

	fn on_commit_prepare(&self, body: Deferred<'_>) {
		self.record(CommitEvent::CommitPrepare);
		body.run();
	}

	fn on_commit_begin(&self) {
		self.record(CommitEvent::CommitBegin);
	}

	fn on_backfill_begin(&self) {
		self.record(CommitEvent::BackfillBegin);
	}

	fn on_transaction_committed(&self) {
		self.record(CommitEvent::Committed);
	}

	fn on_transaction_aborted(&self) {
		self.record(CommitEvent::Aborted);
	}

	fn next_observer(&self) -> Option<ObserverRef> {
		self.next.get()
	}

	fn set_next_observer(&self, next: ObserverRef) {
		self.next.set(next);
	}
}
