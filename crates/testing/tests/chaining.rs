// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 TxnWatch

use std::sync::Arc;

use txnwatch_core::{CommitObserver, ObserverRef, ObserverRegistry, link, noop};
use txnwatch_testing::{
	CommitEvent::{Aborted, Committed},
	RecordingObserver, ScriptedCommit, init_tracing,
};

#[test]
fn test_second_transaction_lands_on_successor() {
	init_tracing();
	let registry = ObserverRegistry::new();
	let first = RecordingObserver::new();
	let second = RecordingObserver::new();
	first.set_next_observer(second.clone());

	registry.set_active(first.clone());
	let driver = ScriptedCommit::new();
	assert_eq!(driver.run(&registry), Ok(1));
	assert_eq!(driver.run(&registry), Ok(2));

	// Each transaction's callbacks land on exactly one observer.
	assert_eq!(first.count(Committed), 1);
	assert_eq!(second.count(Committed), 1);
}

#[test]
fn test_exhausted_chain_falls_back_to_noop() {
	init_tracing();
	let registry = ObserverRegistry::new();
	let only = RecordingObserver::new();

	registry.set_active(only.clone());
	let driver = ScriptedCommit::new();
	driver.run(&registry).unwrap();

	assert!(Arc::ptr_eq(&registry.active(), &noop()));

	// A third transaction runs against the inert default and records
	// nothing anywhere.
	driver.run(&registry).unwrap();
	assert_eq!(only.count(Committed), 1);
}

#[test]
fn test_aborted_transaction_also_hands_off() {
	init_tracing();
	let registry = ObserverRegistry::new();
	let first = RecordingObserver::new();
	let second = RecordingObserver::new();
	first.set_next_observer(second.clone());

	registry.set_active(first.clone());
	assert!(ScriptedCommit::new().fail_body().run(&registry).is_err());
	assert_eq!(ScriptedCommit::new().run(&registry), Ok(1));

	assert_eq!(first.events().last(), Some(&Aborted));
	assert_eq!(second.count(Committed), 1);
}

#[test]
fn test_linked_chain_drives_one_observer_per_transaction() {
	init_tracing();
	let registry = ObserverRegistry::new();
	let observers: Vec<Arc<RecordingObserver>> =
		(0..3).map(|_| RecordingObserver::new()).collect();

	let chain: Vec<ObserverRef> =
		observers.iter().map(|o| -> ObserverRef { o.clone() }).collect();
	registry.set_active(link(&chain));

	let driver = ScriptedCommit::new();
	for _ in 0..3 {
		driver.run(&registry).unwrap();
	}

	for observer in &observers {
		assert_eq!(observer.count(Committed), 1);
	}
	assert!(Arc::ptr_eq(&registry.active(), &noop()));
}

#[test]
fn test_later_designation_overwrites_earlier() {
	init_tracing();
	let registry = ObserverRegistry::new();
	let head = RecordingObserver::new();
	let stale = RecordingObserver::new();
	let fresh = RecordingObserver::new();
	head.set_next_observer(stale.clone());
	head.set_next_observer(fresh.clone());

	registry.set_active(head);
	let driver = ScriptedCommit::new();
	driver.run(&registry).unwrap();
	driver.run(&registry).unwrap();

	assert_eq!(stale.count(Committed), 0);
	assert_eq!(fresh.count(Committed), 1);
}
