mod common;

use common::subsystem;
use sdl_events::event::*;
use sdl_events::prelude::*;
use sdl_events_test_queue::TestQueue;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

fn user_event(event_type: EventType, code: i32) -> UserEvent {
    UserEvent::new(event_type, 0, code)
}

#[test]
fn clearing_an_unset_filter_does_not_call_sdl() {
    let queue = TestQueue::acquire();
    let events = subsystem(&queue);

    events.set_filter(None);
    events.clear_filter();

    let stats = queue.stats();
    assert_eq!(stats.filter_arms, 0);
    assert_eq!(stats.filter_disarms, 0);
    assert!(events.filter().is_none());
}

#[test]
fn replacing_a_filter_arms_sdl_only_once() {
    let queue = TestQueue::acquire();
    let events = subsystem(&queue);

    events.set_filter_fn(|_: &Event<'_>| false);
    events.set_filter_fn(|event: &Event<'_>| matches!(event, Event::User(u) if u.code() == 2));

    let stats = queue.stats();
    assert_eq!(stats.filter_arms, 1);
    assert_eq!(stats.filter_disarms, 0);
    assert!(events.is_native_filter_set());

    // The second filter is the one in use.
    assert_eq!(
        events.push_event(user_event(EventType::USER, 1)),
        Ok(PushStatus::Filtered)
    );
    assert_eq!(
        events.push_event(user_event(EventType::USER, 2)),
        Ok(PushStatus::Queued)
    );
    assert_eq!(queue.len(), 1);

    events.clear_filter();

    let stats = queue.stats();
    assert_eq!(stats.filter_arms, 1);
    assert_eq!(stats.filter_disarms, 1);
    assert!(!events.is_native_filter_set());
    assert!(events.filter().is_none());
}

#[test]
fn setting_a_filter_discards_pending_events() {
    let queue = TestQueue::acquire();
    let events = subsystem(&queue);

    events.push_event(user_event(EventType::USER, 0)).unwrap();
    assert_eq!(queue.len(), 1);

    events.set_filter_fn(|_: &Event<'_>| true);
    assert!(queue.is_empty());

    // Replacing the filter doesn't go through SDL, so nothing is discarded.
    events.push_event(user_event(EventType::USER, 0)).unwrap();
    events.set_filter_fn(|_: &Event<'_>| true);
    assert_eq!(queue.len(), 1);

    events.clear_filter();
}

#[test]
fn shared_filter_is_returned() {
    let queue = TestQueue::acquire();
    let events = subsystem(&queue);

    let calls = Arc::new(AtomicUsize::new(0));
    let filter: Arc<dyn EventFilter> = Arc::new({
        let calls = calls.clone();
        move |_: &Event<'_>| {
            calls.fetch_add(1, Ordering::Relaxed);
            true
        }
    });

    events.set_filter(Some(filter.clone()));

    let current = events.filter().unwrap();
    assert!(Arc::ptr_eq(&current, &filter));

    events.push_event(user_event(EventType::USER, 0)).unwrap();
    events.push_event(CommonEvent::new(EventType::QUIT)).unwrap();
    assert_eq!(calls.load(Ordering::Relaxed), 2);

    drop(current);
    events.clear_filter();

    // The subsystem released its reference.
    assert_eq!(Arc::strong_count(&filter), 1);
}

#[test]
fn filter_sees_decoded_events() {
    let queue = TestQueue::acquire();
    let events = subsystem(&queue);

    events.set_filter_fn(|event: &Event<'_>| match event {
        Event::KeyDown(key) => key.keysym().scancode() != Scancode::ESCAPE,
        _ => true,
    });

    let escape = Keysym::new(Scancode::ESCAPE, Keycode::ESCAPE, Keymod::empty());
    let space = Keysym::new(Scancode::SPACE, Keycode::SPACE, Keymod::empty());

    let pressed = |keysym| KeyboardEvent::new(1, ButtonState::Pressed, false, keysym);

    assert_eq!(events.push_event(pressed(escape)), Ok(PushStatus::Filtered));
    assert_eq!(events.push_event(pressed(space)), Ok(PushStatus::Queued));

    let polled = events.poll_event().unwrap();
    let Event::KeyDown(key) = polled.decode() else {
        panic!("Expected a key down event, got {:?}", polled.decode());
    };
    assert_eq!(key.keysym().scancode(), Scancode::SPACE);

    events.clear_filter();
}

#[test]
fn filter_existing_events_removes_rejected_events() {
    let queue = TestQueue::acquire();
    let events = subsystem(&queue);

    events.push_event(user_event(EventType::USER, 1)).unwrap();
    events.push_event(CommonEvent::new(EventType::QUIT)).unwrap();
    events.push_event(user_event(EventType::USER, 2)).unwrap();

    let mut seen = Vec::new();
    events.filter_existing_events(|event| {
        seen.push(event.event_type());
        !matches!(event, Event::Quit(_))
    });

    assert_eq!(seen, [EventType::USER, EventType::QUIT, EventType::USER]);
    assert_eq!(queue.stats().filter_events_calls, 1);
    assert_eq!(queue.queued_types(), [EventType::USER.to_raw(); 2]);

    // The remaining events keep their order.
    let codes: Vec<i32> = events
        .poll_iter()
        .map(|raw| raw.as_event::<UserEvent>().unwrap().code())
        .collect();
    assert_eq!(codes, [1, 2]);

    // No persistent filter is involved.
    assert!(events.filter().is_none());
    assert_eq!(queue.stats().filter_arms, 0);
}

#[test]
fn a_panicking_test_leaves_no_callbacks_behind() {
    let queue = TestQueue::acquire();

    let result = std::panic::catch_unwind(AssertUnwindSafe(|| {
        let events = subsystem(&queue);
        events.set_filter_fn(|_: &Event<'_>| false);
        events.add_watch(|_: &Event<'_>| true);

        panic!("Test failed with callbacks set");
    }));
    assert!(result.is_err());

    let events = subsystem(&queue);
    assert!(events.filter().is_none());
    assert_eq!(events.watch_count(), 0);
    assert!(!queue.has_native_filter());
    assert_eq!(queue.native_watch_count(), 0);

    // The bridge arms SDL again for the next filter.
    events.set_filter_fn(|_: &Event<'_>| true);
    assert!(queue.has_native_filter());
}
