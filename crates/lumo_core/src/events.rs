//! Event dispatch system
//!
//! Unified event handling for pointer input and element lifecycle.

use rustc_hash::FxHashMap;

/// Event type identifier
pub type EventType = u32;

/// Common event types
pub mod event_types {
    use super::EventType;

    pub const POINTER_DOWN: EventType = 1;
    pub const POINTER_UP: EventType = 2;
    pub const POINTER_MOVE: EventType = 3;
    pub const POINTER_ENTER: EventType = 4;
    pub const POINTER_LEAVE: EventType = 5;
    pub const FOCUS: EventType = 10;
    pub const BLUR: EventType = 11;
    pub const RESIZE: EventType = 40;

    // Element lifecycle events
    pub const MOUNT: EventType = 60;
    pub const UNMOUNT: EventType = 61;
}

/// A UI event with associated data
#[derive(Clone, Debug)]
pub struct Event {
    pub event_type: EventType,
    pub target: u64, // Widget ID
    pub data: EventData,
    pub timestamp: u64,
    pub propagation_stopped: bool,
}

impl Event {
    pub fn new(event_type: EventType, target: u64, data: EventData) -> Self {
        Self {
            event_type,
            target,
            data,
            timestamp: 0,
            propagation_stopped: false,
        }
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }
}

/// Event-specific data
#[derive(Clone, Debug)]
pub enum EventData {
    Pointer {
        x: f32,
        y: f32,
        button: u8,
        pressure: f32,
    },
    Resize {
        width: u32,
        height: u32,
    },
    None,
}

/// Event handler function type
pub type EventHandler = Box<dyn Fn(&Event) + Send + Sync>;

/// Dispatches events to registered handlers
pub struct EventDispatcher {
    handlers: FxHashMap<(u64, EventType), Vec<EventHandler>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self {
            handlers: FxHashMap::default(),
        }
    }

    /// Register an event handler for a widget and event type
    pub fn register<F>(&mut self, widget_id: u64, event_type: EventType, handler: F)
    where
        F: Fn(&Event) + Send + Sync + 'static,
    {
        self.handlers
            .entry((widget_id, event_type))
            .or_default()
            .push(Box::new(handler));
    }

    /// Dispatch an event to all registered handlers
    pub fn dispatch(&self, event: &mut Event) {
        if let Some(handlers) = self.handlers.get(&(event.target, event.event_type)) {
            for handler in handlers {
                if event.propagation_stopped {
                    break;
                }
                handler(event);
            }
        } else {
            tracing::trace!(
                "EventDispatcher::dispatch - no handler for target={} event_type={}",
                event.target,
                event.event_type
            );
        }
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    #[test]
    fn dispatch_invokes_registered_handlers() {
        let mut dispatcher = EventDispatcher::new();
        let count = Arc::new(AtomicU32::new(0));

        let count_clone = count.clone();
        dispatcher.register(1, event_types::POINTER_DOWN, move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        let mut event = Event::new(event_types::POINTER_DOWN, 1, EventData::None);
        dispatcher.dispatch(&mut event);
        dispatcher.dispatch(&mut event);

        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn dispatch_ignores_other_targets() {
        let mut dispatcher = EventDispatcher::new();
        let count = Arc::new(AtomicU32::new(0));

        let count_clone = count.clone();
        dispatcher.register(1, event_types::POINTER_DOWN, move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        let mut event = Event::new(event_types::POINTER_DOWN, 2, EventData::None);
        dispatcher.dispatch(&mut event);

        assert_eq!(count.load(Ordering::SeqCst), 0);
    }
}
