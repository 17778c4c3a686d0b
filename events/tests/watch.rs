mod common;

use common::subsystem;
use sdl_events::event::*;
use sdl_events::prelude::*;
use sdl_events_test_queue::TestQueue;
use std::sync::{Arc, Mutex};

/// A watch recording the code of every user event it sees.
fn recorder() -> (Arc<Mutex<Vec<i32>>>, impl EventFilter) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let watch = {
        let seen = seen.clone();
        move |event: &Event<'_>| {
            if let Event::User(user) = event {
                seen.lock().unwrap().push(user.code());
            }
            true
        }
    };

    (seen, watch)
}

#[test]
fn adding_and_removing_a_watch() {
    let queue = TestQueue::acquire();
    let events = subsystem(&queue);

    let handle = events.add_watch(|_: &Event<'_>| true);
    assert_eq!(events.watch_count(), 1);
    assert_eq!(queue.native_watch_count(), 1);

    events.remove_watch(handle);
    assert_eq!(events.watch_count(), 0);
    assert_eq!(queue.native_watch_count(), 0);

    let stats = queue.stats();
    assert_eq!(stats.watch_adds, 1);
    assert_eq!(stats.watch_dels, 1);
}

#[test]
fn removing_a_watch_twice_does_nothing() {
    let queue = TestQueue::acquire();
    let events = subsystem(&queue);

    let handle = events.add_watch(|_: &Event<'_>| true);
    events.remove_watch(handle);
    events.remove_watch(handle);

    assert_eq!(queue.stats().watch_dels, 1);
    assert_eq!(events.watch_count(), 0);
}

#[test]
fn every_watch_sees_every_event() {
    let queue = TestQueue::acquire();
    let events = subsystem(&queue);

    let (first_seen, first) = recorder();
    let (second_seen, second) = recorder();

    let first = events.add_watch(first);
    let second = events.add_watch(second);
    assert_ne!(first, second);

    for code in 0..3 {
        let status = events.push_event(UserEvent::new(EventType::USER, 0, code));
        assert_eq!(status, Ok(PushStatus::Queued));
    }

    assert_eq!(*first_seen.lock().unwrap(), [0, 1, 2]);
    assert_eq!(*second_seen.lock().unwrap(), [0, 1, 2]);

    events.remove_watch(first);
    events.push_event(UserEvent::new(EventType::USER, 0, 3)).unwrap();

    assert_eq!(*first_seen.lock().unwrap(), [0, 1, 2]);
    assert_eq!(*second_seen.lock().unwrap(), [0, 1, 2, 3]);

    events.remove_watch(second);
}

#[test]
fn watch_return_value_is_ignored() {
    let queue = TestQueue::acquire();
    let events = subsystem(&queue);

    let handle = events.add_watch(|_: &Event<'_>| false);

    let status = events.push_event(CommonEvent::new(EventType::QUIT));
    assert_eq!(status, Ok(PushStatus::Queued));
    assert!(events.has_event(EventType::QUIT));

    events.remove_watch(handle);
}

#[test]
fn watches_do_not_see_filtered_events() {
    let queue = TestQueue::acquire();
    let events = subsystem(&queue);

    let (seen, watch) = recorder();
    let handle = events.add_watch(watch);
    events.set_filter_fn(|event: &Event<'_>| {
        matches!(event, Event::User(user) if user.code() % 2 == 0)
    });

    for code in 0..4 {
        events.push_event(UserEvent::new(EventType::USER, 0, code)).unwrap();
    }

    assert_eq!(*seen.lock().unwrap(), [0, 2]);

    events.clear_filter();
    events.remove_watch(handle);
}

#[test]
fn watches_can_push_events() {
    let queue = TestQueue::acquire();
    let events = subsystem(&queue);

    // Re-entering the subsystem from a watch must not deadlock.
    let inner = *events;
    let handle = events.add_watch(move |event: &Event<'_>| {
        if let Event::Quit(_) = event {
            assert_eq!(inner.watch_count(), 1);
            inner.push_event(UserEvent::new(EventType::USER, 0, 42)).unwrap();
        }
        true
    });

    events.push_event(CommonEvent::new(EventType::QUIT)).unwrap();
    assert_eq!(queue.queued_types(), [EventType::USER.to_raw(), EventType::QUIT.to_raw()]);

    events.remove_watch(handle);
}

#[test]
fn shared_watches_are_released_on_removal() {
    let queue = TestQueue::acquire();
    let events = subsystem(&queue);

    let watch: Arc<dyn EventFilter> = Arc::new(|_: &Event<'_>| true);
    let first = events.add_watch_arc(watch.clone());
    let second = events.add_watch_arc(watch.clone());
    assert_eq!(Arc::strong_count(&watch), 3);

    events.remove_watch(first);
    events.remove_watch(second);
    assert_eq!(Arc::strong_count(&watch), 1);
}

#[test]
fn clearing_callbacks_removes_the_filter_and_every_watch() {
    let queue = TestQueue::acquire();
    let events = subsystem(&queue);

    events.set_filter_fn(|_: &Event<'_>| true);
    events.add_watch(|_: &Event<'_>| true);
    events.add_watch(|_: &Event<'_>| true);
    queue.reset_stats();

    events.clear_callbacks();

    assert!(events.filter().is_none());
    assert_eq!(events.watch_count(), 0);
    assert!(!queue.has_native_filter());
    assert_eq!(queue.native_watch_count(), 0);

    let stats = queue.stats();
    assert_eq!(stats.filter_disarms, 1);
    assert_eq!(stats.watch_dels, 2);

    // Nothing is left to remove.
    events.clear_callbacks();
    assert_eq!(queue.stats().watch_dels, 2);
}
