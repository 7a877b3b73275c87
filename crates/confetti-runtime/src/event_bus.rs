//! Event queue between producer threads and the frame loop

use crate::event::OverlayEvent;
use std::sync::mpsc::{self, Receiver, Sender};

/// Queue the frame loop drains once per tick. Producers hold an
/// [`EventSender`] and may live on any thread.
pub struct EventBus {
    sender: Sender<OverlayEvent>,
    receiver: Receiver<OverlayEvent>,
}

/// Cloneable handle for pushing events onto an [`EventBus`]
#[derive(Clone)]
pub struct EventSender {
    sender: Sender<OverlayEvent>,
}

impl EventSender {
    /// Returns false once the bus has been dropped
    pub fn send(&self, event: OverlayEvent) -> bool {
        self.sender.send(event).is_ok()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self { sender, receiver }
    }

    pub fn sender(&self) -> EventSender {
        EventSender {
            sender: self.sender.clone(),
        }
    }

    /// Push an event from the owning thread
    pub fn push(&self, event: OverlayEvent) {
        // The bus owns a receiver, so the channel cannot be disconnected here
        let _ = self.sender.send(event);
    }

    /// Drain all pending events in arrival order
    pub fn drain(&self) -> Vec<OverlayEvent> {
        self.receiver.try_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_drain() {
        let bus = EventBus::new();
        bus.push(OverlayEvent::SetVisible(false));
        bus.push(OverlayEvent::Resized {
            width: 10,
            height: 20,
        });

        let events = bus.drain();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], OverlayEvent::SetVisible(false)));
        assert!(bus.drain().is_empty());
    }

    #[test]
    fn test_send_from_other_thread() {
        let bus = EventBus::new();
        let sender = bus.sender();
        std::thread::spawn(move || {
            assert!(sender.send(OverlayEvent::SetVisible(true)));
        })
        .join()
        .unwrap();

        let events = bus.drain();
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_send_after_drop() {
        let bus = EventBus::new();
        let sender = bus.sender();
        drop(bus);
        assert!(!sender.send(OverlayEvent::SetVisible(true)));
    }
}
