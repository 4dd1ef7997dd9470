// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 TxnWatch

/// Lifecycle callbacks distinguishable in recorded traces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitEvent {
	/// Transaction construction was wrapped.
	TransactionStart,
	/// Commit preparation was wrapped.
	CommitPrepare,
	/// The first commit attempt was about to start.
	CommitBegin,
	/// The commit record was published.
	BackfillBegin,
	/// The commit fully succeeded.
	Committed,
	/// The transaction failed.
	Aborted,
}
