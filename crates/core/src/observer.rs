// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 TxnWatch

use std::sync::Arc;

use crate::deferred::Deferred;

/// Shared handle to a commit observer.
///
/// Observers are aliased freely: the registry, scopes and chain links route
/// control to the same instance without taking ownership of it.
pub type ObserverRef = Arc<dyn CommitObserver>;

/// Callbacks invoked by the transaction engine at fixed points of the
/// commit lifecycle.
///
/// Every method has a pass-through default, so an empty impl behaves
/// exactly like the inert default observer. The engine fires the callbacks
/// in this order: [`on_transaction_start`](Self::on_transaction_start)
/// around construction, [`on_commit_prepare`](Self::on_commit_prepare)
/// around commit preparation, [`on_commit_begin`](Self::on_commit_begin)
/// before the first commit attempt,
/// [`on_backfill_begin`](Self::on_backfill_begin) once the commit record is
/// published, and finally exactly one of
/// [`on_transaction_committed`](Self::on_transaction_committed) or
/// [`on_transaction_aborted`](Self::on_transaction_aborted).
pub trait CommitObserver: Send + Sync {
	/// Wraps transaction construction.
	///
	/// Implementations must invoke `create` exactly once. Anything may
	/// happen before or after the call (delays, barriers, counters), but
	/// the constructed object reaches the engine unchanged and a failure
	/// raised during construction propagates to the caller.
	fn on_transaction_start(&self, create: Deferred<'_>) {
		create.run();
	}

	/// Wraps commit preparation.
	///
	/// Same contract as [`on_transaction_start`](Self::on_transaction_start):
	/// run `body` exactly once, pass its result or failure through
	/// untouched.
	fn on_commit_prepare(&self, body: Deferred<'_>) {
		body.run();
	}

	/// The first commit attempt is about to start.
	fn on_commit_begin(&self) {}

	/// The commit record is published; background backfill is next.
	fn on_backfill_begin(&self) {}

	/// The commit fully succeeded.
	fn on_transaction_committed(&self) {}

	/// The transaction failed.
	///
	/// May arrive without a preceding
	/// [`on_commit_begin`](Self::on_commit_begin) when the transaction body
	/// fails before the commit attempt is reached. Implementations must
	/// treat that sequence as valid.
	fn on_transaction_aborted(&self) {}

	/// Successor designated for the owning worker, if any.
	fn next_observer(&self) -> Option<ObserverRef> {
		None
	}

	/// Designates `next` as this observer's successor, overwriting any
	/// prior designation.
	///
	/// The default keeps no successor, which is the behavior of stateless
	/// observers such as the inert default. Observers that participate in
	/// chaining back this method with a
	/// [`NextObserver`](crate::NextObserver) cell.
	fn set_next_observer(&self, _next: ObserverRef) {}
}
