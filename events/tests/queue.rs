mod common;

use common::subsystem;
use sdl_events::event::*;
use sdl_events::prelude::*;
use sdl_events_test_queue::TestQueue;
use std::time::Duration;

fn user_codes(events: EventSubsystem<'_>) -> Vec<i32> {
    events
        .poll_iter()
        .filter_map(|raw| raw.as_event::<UserEvent>().map(UserEvent::code))
        .collect()
}

#[test]
fn user_event_round_trip() {
    let queue = TestQueue::acquire();
    let events = subsystem(&queue);

    let data = core::ptr::without_provenance_mut(0xDEAD);
    let event = UserEvent::new(EventType::USER, 7, 42).with_data(data, core::ptr::null_mut());

    assert_eq!(events.push_event(event), Ok(PushStatus::Queued));
    assert!(events.has_event(EventType::USER));

    let raw = events.poll_event().unwrap();
    assert_ne!(raw.timestamp(), 0);

    let Event::User(user) = raw.decode() else {
        panic!("Expected a user event, got {:?}", raw.decode());
    };

    assert_eq!(user.window_id(), 7);
    assert_eq!(user.code(), 42);
    assert_eq!(user.data1(), data);
    assert!(user.data2().is_null());

    assert!(events.poll_event().is_none());
}

#[test]
fn poll_iter_drains_the_queue_in_order() {
    let queue = TestQueue::acquire();
    let events = subsystem(&queue);

    for code in 0..5 {
        events.push_event(UserEvent::new(EventType::USER, 0, code)).unwrap();
    }

    assert_eq!(user_codes(*events), [0, 1, 2, 3, 4]);
    assert!(queue.is_empty());
}

#[test]
fn wait_timeout_on_empty_queue() {
    let queue = TestQueue::acquire();
    let events = subsystem(&queue);

    assert!(events.wait_event_timeout(Duration::from_millis(10)).is_none());

    // Sub-millisecond timeouts still time out, rather than blocking.
    assert!(events.wait_event_timeout(Duration::from_micros(10)).is_none());
}

#[test]
fn wait_timeout_returns_queued_event() {
    let queue = TestQueue::acquire();
    let events = subsystem(&queue);

    events.push_event(CommonEvent::new(EventType::QUIT)).unwrap();

    let raw = events.wait_event_timeout(Duration::from_secs(5)).unwrap();
    assert!(matches!(raw.decode(), Event::Quit(_)));
}

#[test]
fn wait_wakes_up_on_push_from_another_thread() {
    let queue = TestQueue::acquire();
    let events = subsystem(&queue);

    let received = std::thread::scope(|s| {
        s.spawn(|| {
            std::thread::sleep(Duration::from_millis(20));
            events.push_event(UserEvent::new(EventType::USER, 0, 9)).unwrap();
        });

        events.wait_event().unwrap()
    });

    assert_eq!(received.as_event::<UserEvent>().map(UserEvent::code), Some(9));
}

#[test]
fn wait_failure_is_reported() {
    let queue = TestQueue::acquire();
    let events = subsystem(&queue);

    queue.fail_next_call("Video subsystem not initialized");

    let error = events.wait_event().unwrap_err();
    assert_eq!(
        error,
        EventError::WaitFailed("Video subsystem not initialized".into())
    );
}

#[test]
fn push_failure_carries_sdl_error() {
    let queue = TestQueue::acquire();
    let events = subsystem(&queue);

    queue.fail_next_call("Event queue exploded");
    let result = events.push_event(CommonEvent::new(EventType::QUIT));

    assert_eq!(
        result,
        Err(EventError::Native {
            code: -1,
            message: "Event queue exploded".into()
        })
    );
    assert!(queue.is_empty());
}

#[test]
fn registered_events_are_contiguous() {
    let queue = TestQueue::acquire();
    let events = subsystem(&queue);

    let first = events.register_events(3).unwrap();
    let second = events.register_events(2).unwrap();

    assert!(first.is_user());
    assert_eq!(second.to_raw(), first.to_raw() + 3);

    assert_eq!(events.register_events(0), None);
    assert_eq!(events.register_events(u32::MAX), None);
    assert_eq!(events.register_events(0x8000), None);
}

#[test]
fn disabled_types_are_not_queued() {
    let queue = TestQueue::acquire();
    let events = subsystem(&queue);

    events.push_event(CommonEvent::new(EventType::QUIT)).unwrap();

    assert!(events.is_event_enabled(EventType::QUIT));
    assert!(events.event_state(EventType::QUIT, EventState::Ignore));
    assert!(!events.is_event_enabled(EventType::QUIT));

    // Ignoring a type also drops the pending events of that type.
    assert!(queue.is_empty());

    let status = events.push_event(CommonEvent::new(EventType::QUIT));
    assert_eq!(status, Ok(PushStatus::Filtered));
    assert!(queue.is_empty());

    assert!(!events.event_state(EventType::QUIT, EventState::Enable));
    let status = events.push_event(CommonEvent::new(EventType::QUIT));
    assert_eq!(status, Ok(PushStatus::Queued));
}

#[test]
fn peek_and_get_by_type_range() {
    let queue = TestQueue::acquire();
    let events = subsystem(&queue);

    events.push_event(UserEvent::new(EventType::USER, 0, 1)).unwrap();
    events.push_event(CommonEvent::new(EventType::QUIT)).unwrap();
    events.push_event(UserEvent::new(EventType::USER, 0, 2)).unwrap();

    let user_types = EventType::USER..=EventType::LAST;
    assert_eq!(events.count_events(user_types.clone()), Ok(2));
    assert_eq!(events.count_events(EventType::ALL), Ok(3));

    let mut buffer = [RawEvent::zeroed(); 4];
    assert_eq!(events.peek_events(&mut buffer, user_types.clone()), Ok(2));
    assert_eq!(buffer[0].as_event::<UserEvent>().map(UserEvent::code), Some(1));
    assert_eq!(buffer[1].as_event::<UserEvent>().map(UserEvent::code), Some(2));
    assert_eq!(queue.len(), 3);

    // The buffer's size limits how many events are taken.
    let mut single = [RawEvent::zeroed(); 1];
    assert_eq!(events.get_events(&mut single, user_types.clone()), Ok(1));
    assert_eq!(single[0].as_event::<UserEvent>().map(UserEvent::code), Some(1));

    assert_eq!(
        queue.queued_types(),
        [EventType::QUIT.to_raw(), EventType::USER.to_raw()]
    );
    assert!(events.has_events(user_types.clone()));

    events.flush_events(user_types.clone());
    assert!(!events.has_events(user_types));
    assert!(events.has_event(EventType::QUIT));

    events.flush_event(EventType::QUIT);
    assert!(queue.is_empty());
}

#[test]
fn peek_failure_carries_sdl_error() {
    let queue = TestQueue::acquire();
    let events = subsystem(&queue);

    queue.fail_next_call("Peeping is not allowed");

    let mut buffer = [RawEvent::zeroed(); 2];
    let result = events.peek_events(&mut buffer, EventType::ALL);

    assert_eq!(
        result,
        Err(EventError::Native {
            code: -1,
            message: "Peeping is not allowed".into()
        })
    );
}

#[test]
fn added_events_bypass_the_filter() {
    let queue = TestQueue::acquire();
    let events = subsystem(&queue);

    events.set_filter_fn(|_: &Event<'_>| false);

    let added = events.add_events(&[
        RawEvent::new(EventType::QUIT, 0),
        UserEvent::new(EventType::USER, 0, 3).into(),
    ]);
    assert_eq!(added, Ok(2));

    assert_eq!(
        events.push_event(CommonEvent::new(EventType::QUIT)),
        Ok(PushStatus::Filtered)
    );
    assert_eq!(queue.len(), 2);

    events.clear_filter();
}

#[test]
fn pumping_reaches_sdl() {
    let queue = TestQueue::acquire();
    let events = subsystem(&queue);

    events.pump_events();
    events.pump_events();

    assert_eq!(queue.stats().pumps, 2);
}
