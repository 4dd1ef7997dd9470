// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 TxnWatch

use tracing_subscriber::EnvFilter;

/// Installs a `RUST_LOG`-filtered fmt subscriber for test runs.
///
/// Safe to call from every test; only the first call installs a
/// subscriber, later calls are no-ops.
pub fn init_tracing() {
	let _ = tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env())
		.with_test_writer()
		.try_init();
}
