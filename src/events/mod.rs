//! Application event bus
//!
//! The original Mini App surfaced offline notices by attaching a callback to
//! the global `window` object and navigated on 401 from deep inside the HTTP
//! interceptor. Here those signals are explicit: the client publishes events
//! on a broadcast channel and UI layers subscribe to react (navigate to the
//! login screen, show an offline banner, display a notice).

use tokio::sync::broadcast;
use tracing::debug;

/// Events published by the API client
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// The backend rejected the token; the session has been cleared and the
    /// UI should navigate to `/login`.
    SessionExpired,
    /// A request was served from the local store because the backend was
    /// unreachable.
    OfflineMode { reason: String },
    /// Free-form user-facing notice
    Notice { text: String },
}

const EVENT_CAPACITY: usize = 64;

/// Broadcast bus shared between the client and its consumers
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<AppEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(EVENT_CAPACITY);
        Self { sender }
    }

    /// Publish an event. Lagging or absent subscribers are fine; events are
    /// advisory.
    pub fn publish(&self, event: AppEvent) {
        debug!(event = ?event, "Publishing app event");
        let _ = self.sender.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<AppEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_subscribers_receive_published_events() {
        let bus = EventBus::new();
        let mut rx = bus.subscribe();

        bus.publish(AppEvent::SessionExpired);
        bus.publish(AppEvent::OfflineMode { reason: "network".into() });

        assert_eq!(rx.recv().await.unwrap(), AppEvent::SessionExpired);
        assert_eq!(
            rx.recv().await.unwrap(),
            AppEvent::OfflineMode { reason: "network".into() }
        );
    }

    #[test]
    fn test_publish_without_subscribers_does_not_panic() {
        let bus = EventBus::new();
        bus.publish(AppEvent::Notice { text: "ok".into() });
    }
}
