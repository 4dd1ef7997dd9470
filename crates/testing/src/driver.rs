// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 TxnWatch

use std::cell::Cell;

use tracing::{debug, instrument};
use txnwatch_core::ObserverRegistry;

/// Version assigned to a successfully committed scripted transaction.
pub type CommitVersion = u64;

/// Failure stages a scripted commit can be told to hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CommitError {
	#[error("transaction body failed before the commit attempt")]
	BodyFailed,
	#[error("commit preparation failed")]
	PrepareFailed,
	#[error("commit record was not published")]
	PublishFailed,
}

/// Stand-in engine that drives a registry through one commit lifecycle per
/// [`run`](Self::run).
///
/// Call sites fire in the canonical order: construction is wrapped, the
/// body runs, preparation is wrapped, the commit attempt starts, the
/// commit record is published, backfill starts, and the terminal
/// notification fires. A failure at any injected stage diverts to the
/// abort notification — a body failure aborts before the commit attempt is
/// ever announced. Every completed run, success or failure, advances the
/// registry exactly once.
///
/// Successful runs commit monotonically increasing versions, starting at 1.
pub struct ScriptedCommit {
	fail_body: bool,
	fail_prepare: bool,
	fail_publish: bool,
	next_version: Cell<CommitVersion>,
}

impl ScriptedCommit {
	/// A driver whose transactions run to completion.
	pub fn new() -> Self {
		Self {
			fail_body: false,
			fail_prepare: false,
			fail_publish: false,
			next_version: Cell::new(1),
		}
	}

	/// Fail the transaction body, before any commit work starts.
	pub fn fail_body(mut self) -> Self {
		self.fail_body = true;
		self
	}

	/// Fail commit preparation.
	pub fn fail_prepare(mut self) -> Self {
		self.fail_prepare = true;
		self
	}

	/// Fail publication of the commit record.
	pub fn fail_publish(mut self) -> Self {
		self.fail_publish = true;
		self
	}

	/// Runs one full transaction against `registry`.
	#[instrument(name = "commit::scripted", level = "debug", skip(self, registry))]
	pub fn run(&self, registry: &ObserverRegistry) -> Result<CommitVersion, CommitError> {
		let version = registry.transaction_start(|| self.next_version.get());

		if self.fail_body {
			return Err(self.abort(registry, CommitError::BodyFailed));
		}

		let prepared = registry.commit_prepare(|| {
			if self.fail_prepare {
				Err(CommitError::PrepareFailed)
			} else {
				Ok(())
			}
		});
		if let Err(error) = prepared {
			return Err(self.abort(registry, error));
		}

		registry.commit_begin();

		if self.fail_publish {
			return Err(self.abort(registry, CommitError::PublishFailed));
		}

		registry.backfill_begin();
		registry.transaction_committed();
		registry.advance_to_next();

		self.next_version.set(version + 1);
		debug!(version, "scripted transaction committed");
		Ok(version)
	}

	fn abort(&self, registry: &ObserverRegistry, error: CommitError) -> CommitError {
		registry.transaction_aborted();
		registry.advance_to_next();
		debug!(%error, "scripted transaction aborted");
		error
	}
}

impl Default for ScriptedCommit {
	fn default() -> Self {
		Self::new()
	}
}
