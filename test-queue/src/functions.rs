use crate::state::{EVENT_ADDED, RegisteredCallback, event_type, in_range, state};
use core::ffi::{c_char, c_int, c_void};
use sdl_events_sys::*;
use std::ffi::CString;
use std::sync::PoisonError;
use std::time::{Duration, Instant};

/// The emulated SDL event functions.
pub static FUNCTIONS: SDL_EventFunctions = SDL_EventFunctions {
    SDL_InitSubSystem: init_sub_system,
    SDL_QuitSubSystem: quit_sub_system,
    SDL_GetError: get_error,
    SDL_free: free,
    SDL_PumpEvents: pump_events,
    SDL_PeepEvents: peep_events,
    SDL_HasEvent: has_event,
    SDL_HasEvents: has_events,
    SDL_FlushEvent: flush_event,
    SDL_FlushEvents: flush_events,
    SDL_PollEvent: poll_event,
    SDL_WaitEvent: wait_event,
    SDL_WaitEventTimeout: wait_event_timeout,
    SDL_PushEvent: push_event,
    SDL_SetEventFilter: set_event_filter,
    SDL_GetEventFilter: get_event_filter,
    SDL_AddEventWatch: add_event_watch,
    SDL_DelEventWatch: del_event_watch,
    SDL_FilterEvents: filter_events,
    SDL_EventState: event_state,
    SDL_RegisterEvents: register_events,
};

#[inline]
fn sdl_bool(value: bool) -> SDL_bool {
    if value { SDL_TRUE } else { SDL_FALSE }
}

unsafe extern "C" fn init_sub_system(_flags: u32) -> c_int {
    state().stats.subsystem_inits += 1;
    0
}

unsafe extern "C" fn quit_sub_system(_flags: u32) {
    state().stats.subsystem_quits += 1;
}

unsafe extern "C" fn get_error() -> *const c_char {
    // The message stays alive in the state until the next error replaces it.
    match &state().error {
        Some(message) => message.as_ptr(),
        None => c"".as_ptr(),
    }
}

unsafe extern "C" fn free(mem: *mut c_void) {
    if mem.is_null() {
        return;
    }

    let mut state = state();
    state.stats.frees += 1;

    let Some(ptr) = state.allocations.remove(&mem.addr()) else {
        state.invalid_frees += 1;
        return;
    };

    // SAFETY: tracked allocations come from CString::into_raw, and this one was just untracked.
    drop(unsafe { CString::from_raw(ptr) });
}

unsafe extern "C" fn pump_events() {
    state().stats.pumps += 1;
}

unsafe extern "C" fn peep_events(
    events: *mut SDL_Event,
    numevents: c_int,
    action: SDL_eventaction,
    min_type: u32,
    max_type: u32,
) -> c_int {
    let mut state = state();
    if state.take_failure() {
        return -1;
    }

    let Ok(numevents) = usize::try_from(numevents) else {
        state.set_error("Invalid number of events");
        return -1;
    };

    let mut count: usize = 0;

    if action == SDL_ADDEVENT {
        for i in 0..numevents {
            // SAFETY: the caller guarantees `events` is valid for `numevents` reads.
            let event = unsafe { events.add(i).read() };
            if !state.enqueue(event) {
                break;
            }
            count += 1;
        }
    } else if events.is_null() {
        count = state
            .events
            .iter()
            .filter(|e| in_range(event_type(e), min_type, max_type))
            .count();
    } else {
        let mut index = 0;
        while count < numevents && index < state.events.len() {
            let event = state.events[index];
            if !in_range(event_type(&event), min_type, max_type) {
                index += 1;
                continue;
            }

            // SAFETY: the caller guarantees `events` is valid for `numevents` writes.
            unsafe { events.add(count).write(event) };
            count += 1;

            if action == SDL_GETEVENT {
                state.events.remove(index);
            } else {
                index += 1;
            }
        }
    }

    c_int::try_from(count).unwrap_or(c_int::MAX)
}

unsafe extern "C" fn has_event(type_: u32) -> SDL_bool {
    has_events(type_, type_)
}

unsafe extern "C" fn has_events(min_type: u32, max_type: u32) -> SDL_bool {
    let found = state()
        .events
        .iter()
        .any(|e| in_range(event_type(e), min_type, max_type));

    sdl_bool(found)
}

unsafe extern "C" fn flush_event(type_: u32) {
    state().flush(type_, type_)
}

unsafe extern "C" fn flush_events(min_type: u32, max_type: u32) {
    state().flush(min_type, max_type)
}

unsafe extern "C" fn poll_event(event: *mut SDL_Event) -> c_int {
    let mut state = state();
    state.stats.pumps += 1;

    if event.is_null() {
        return c_int::from(!state.events.is_empty());
    }

    match state.events.pop_front() {
        Some(next) => {
            // SAFETY: the caller guarantees the pointer is valid for writes.
            unsafe { event.write(next) };
            1
        }
        None => 0,
    }
}

unsafe extern "C" fn wait_event(event: *mut SDL_Event) -> c_int {
    wait_event_timeout(event, -1)
}

unsafe extern "C" fn wait_event_timeout(event: *mut SDL_Event, timeout: c_int) -> c_int {
    let deadline = u64::try_from(timeout)
        .ok()
        .map(|millis| Instant::now() + Duration::from_millis(millis));

    let mut state = state();
    if state.take_failure() {
        return 0;
    }

    loop {
        if let Some(next) = state.events.pop_front() {
            if !event.is_null() {
                // SAFETY: the caller guarantees the pointer is valid for writes.
                unsafe { event.write(next) };
            }
            return 1;
        }

        state = match deadline {
            None => EVENT_ADDED
                .wait(state)
                .unwrap_or_else(PoisonError::into_inner),
            Some(deadline) => {
                let now = Instant::now();
                if now >= deadline {
                    return 0;
                }

                EVENT_ADDED
                    .wait_timeout(state, deadline - now)
                    .unwrap_or_else(PoisonError::into_inner)
                    .0
            }
        };
    }
}

unsafe extern "C" fn push_event(event: *mut SDL_Event) -> c_int {
    // SAFETY: the caller guarantees the pointer is valid for reads.
    let mut event = unsafe { event.read() };

    let (filter, watches) = {
        let mut state = state();
        if state.take_failure() {
            return -1;
        }

        // SAFETY: every event starts with the common header.
        let mut common = unsafe { event.common };
        common.timestamp = state.next_timestamp();
        event.common = common;

        if state.disabled.contains(&event_type(&event)) {
            return 0;
        }

        (state.filter, state.watches.clone())
    };

    // Callbacks run without the lock held, as they may call back into the queue.
    if let Some(filter) = filter {
        // SAFETY: the callback was registered along with its userdata.
        if !unsafe { filter.call(&mut event) } {
            return 0;
        }
    }

    for watch in &watches {
        // SAFETY: the callback was registered along with its userdata.
        unsafe { watch.call(&mut event) };
    }

    if state().enqueue(event) { 1 } else { -1 }
}

unsafe extern "C" fn set_event_filter(filter: SDL_EventFilter, userdata: *mut c_void) {
    let mut state = state();

    match filter {
        Some(callback) => {
            state.stats.filter_arms += 1;
            state.filter = Some(RegisteredCallback { callback, userdata });
        }
        None => {
            state.stats.filter_disarms += 1;
            state.filter = None;
        }
    }

    // Setting a filter discards all pending events.
    state.events.clear();
}

unsafe extern "C" fn get_event_filter(
    filter: *mut SDL_EventFilter,
    userdata: *mut *mut c_void,
) -> SDL_bool {
    let Some(current) = state().filter else {
        return SDL_FALSE;
    };

    if !filter.is_null() {
        // SAFETY: the caller guarantees non-null pointers are valid for writes.
        unsafe { filter.write(Some(current.callback)) };
    }
    if !userdata.is_null() {
        // SAFETY: the caller guarantees non-null pointers are valid for writes.
        unsafe { userdata.write(current.userdata) };
    }

    SDL_TRUE
}

unsafe extern "C" fn add_event_watch(filter: SDL_EventFilter, userdata: *mut c_void) {
    let Some(callback) = filter else {
        return;
    };

    let mut state = state();
    state.stats.watch_adds += 1;
    state.watches.push(RegisteredCallback { callback, userdata });
}

unsafe extern "C" fn del_event_watch(filter: SDL_EventFilter, userdata: *mut c_void) {
    let mut state = state();
    state.stats.watch_dels += 1;

    let Some(callback) = filter else {
        return;
    };

    if let Some(index) = state.watches.iter().position(|w| w.matches(callback, userdata)) {
        state.watches.remove(index);
    }
}

unsafe extern "C" fn filter_events(filter: SDL_EventFilter, userdata: *mut c_void) {
    let Some(callback) = filter else {
        return;
    };
    let callback = RegisteredCallback { callback, userdata };

    let pending: Vec<SDL_Event> = {
        let mut state = state();
        state.stats.filter_events_calls += 1;
        state.events.drain(..).collect()
    };

    let mut kept = Vec::with_capacity(pending.len());
    for mut event in pending {
        // SAFETY: the caller guarantees the callback is safe to call with its userdata.
        if unsafe { callback.call(&mut event) } {
            kept.push(event);
        }
    }

    // Events pushed by the callback itself go after the surviving ones.
    let mut state = state();
    for event in kept.into_iter().rev() {
        state.events.push_front(event);
    }
}

unsafe extern "C" fn event_state(type_: u32, new_state: c_int) -> u8 {
    let mut state = state();
    let was_enabled = !state.disabled.contains(&type_);

    match new_state {
        SDL_IGNORE => {
            state.disabled.insert(type_);
            state.flush(type_, type_);
        }
        SDL_ENABLE => {
            state.disabled.remove(&type_);
        }
        _ => {}
    }

    u8::from(was_enabled)
}

unsafe extern "C" fn register_events(numevents: c_int) -> u32 {
    let mut state = state();

    let Some(count) = u32::try_from(numevents).ok().filter(|c| *c > 0) else {
        return u32::MAX;
    };

    let first = state.next_user_event;
    match first.checked_add(count) {
        Some(end) if end <= SDL_LASTEVENT => {
            state.next_user_event = end;
            first
        }
        _ => u32::MAX,
    }
}
