//! Multi-consumer synchronization tests
//!
//! Covers fan-out of navigations to every mounted consumer and the reference
//! counted traversal listener on the host.

use pathsync::core::{Action, NavigationHost};
use pathsync::prelude::*;
use rstest::rstest;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

fn shared_history(initial: &str) -> (Rc<MemoryHistory>, PathContext) {
	let history = Rc::new(MemoryHistory::new(initial).unwrap());
	let context = PathContext::from_shared(history.clone());
	(history, context)
}

#[rstest]
fn test_navigation_reaches_every_consumer() {
	// Arrange
	let (_history, context) = shared_history("/");
	let consumers: Vec<UsePath> = (0..3).map(|_| UsePath::mount(&context)).collect();

	// Act
	consumers[1].set_path("/x?y=1#z").unwrap();

	// Assert
	for consumer in &consumers {
		let location = consumer.location();
		assert_eq!(location.path(), "/x");
		assert_eq!(location.query(), "y=1");
		assert_eq!(location.hash(), "z");
		assert_eq!(location.fullpath(), "/x?y=1#z");
	}
}

#[rstest]
fn test_change_callbacks_run_once_per_consumer_per_navigation() {
	// Arrange
	let (history, context) = shared_history("/");
	let calls = Rc::new(Cell::new(0));
	let consumers: Vec<UsePath> = (0..3)
		.map(|_| {
			let calls = Rc::clone(&calls);
			UsePath::mount_with(&context, move |_| calls.set(calls.get() + 1))
		})
		.collect();

	// Act
	consumers[0].set_path("/a").unwrap();
	consumers[2].replace_path("/b").unwrap();
	history.back();

	// Assert
	assert_eq!(calls.get(), 9);
	for consumer in &consumers {
		assert_eq!(consumer.location().fullpath(), "/");
	}
}

#[rstest]
fn test_partial_update_resolves_against_consumer_state() {
	// Arrange
	let (_history, context) = shared_history("/list?page=2#row-4");
	let first = UsePath::mount(&context);
	let second = UsePath::mount(&context);

	// Act
	first.set_path(PartialLocation::new().hash("row-9")).unwrap();
	second.set_path(PartialLocation::new().query("page=3")).unwrap();

	// Assert
	assert_eq!(first.location().fullpath(), "/list?page=3");
	assert_eq!(second.location().fullpath(), "/list?page=3");
}

#[rstest]
fn test_failed_commit_leaves_consumers_untouched() {
	// Arrange
	let (history, context) = shared_history("/stay");
	let seen = Rc::new(RefCell::new(Vec::new()));
	let consumer = UsePath::mount_with(&context, {
		let seen = Rc::clone(&seen);
		move |location| seen.borrow_mut().push(location.fullpath().to_string())
	});

	// Act
	let result = consumer.set_path("https://elsewhere.test/");

	// Assert
	assert!(matches!(result, Err(NavigationError::Commit(_))));
	assert!(seen.borrow().is_empty());
	assert_eq!(consumer.location().fullpath(), "/stay");
	assert_eq!(history.history_length(), 1);
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(5)]
fn test_host_listener_tracks_mounted_consumers(#[case] count: usize) {
	// Arrange
	let (history, context) = shared_history("/");
	assert_eq!(history.listener_count(), 0);

	// Act
	let mut consumers: Vec<UsePath> = (0..count).map(|_| UsePath::mount(&context)).collect();

	// Assert
	assert_eq!(history.listener_count(), 1);
	assert_eq!(context.registry().len(), count);
	while consumers.len() > 1 {
		consumers.pop();
		assert_eq!(history.listener_count(), 1);
	}
	consumers.clear();
	assert_eq!(history.listener_count(), 0);
	assert!(context.registry().is_empty());

	let _remounted = UsePath::mount(&context);
	assert_eq!(history.listener_count(), 1);
}

#[rstest]
fn test_unmounted_consumer_stops_receiving() {
	// Arrange
	let (history, context) = shared_history("/");
	let calls = Rc::new(Cell::new(0));
	let kept = UsePath::mount(&context);
	let dropped = UsePath::mount_with(&context, {
		let calls = Rc::clone(&calls);
		move |_| calls.set(calls.get() + 1)
	});

	// Act
	drop(dropped);
	kept.set_path("/after").unwrap();
	history.back();

	// Assert
	assert_eq!(calls.get(), 0);
	assert_eq!(kept.location().fullpath(), "/");
}

#[rstest]
fn test_resync_all_refreshes_after_external_commit() {
	// Arrange
	let (history, context) = shared_history("/");
	let consumer = UsePath::mount(&context);
	history.push_entry("", "/outside").unwrap();
	assert_eq!(consumer.location().fullpath(), "/");

	// Act
	context.registry().resync_all();

	// Assert
	assert_eq!(consumer.location().fullpath(), "/outside");
}

#[rstest]
fn test_navigator_push_from_outside_any_consumer() {
	// Arrange
	let (history, context) = shared_history("/a?x=1");
	let consumer = UsePath::mount(&context);
	let current = context.location();

	// Act
	let next = context
		.navigator()
		.push(PartialLocation::new().hash("h"), &current)
		.unwrap();

	// Assert
	assert_eq!(next.fullpath(), "/a?x=1#h");
	assert_eq!(consumer.location(), next);
	assert_eq!(history.history_length(), 2);
	assert_eq!(
		context.navigator().apply(&Action::Resync).unwrap(),
		consumer.location()
	);
}
