use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::debug;

/// Session fields a command can touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionField {
    Bookings,
    PassengerName,
    Agency,
    Ticketing,
    Received,
    Mobile,
    Email,
    Docs,
    FareQuote,
    Printer,
    PrinterConfirm,
    TicketNumber,
    Pnr,
}

/// Emitted after a command mutates the session record, so display surfaces
/// can refresh the affected panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    Updated(SessionField),
    Cleared,
}

#[derive(Clone)]
pub struct ChangeNotifier {
    tx: broadcast::Sender<SessionEvent>,
}

impl ChangeNotifier {
    pub fn new(capacity: usize) -> Self {
        let (tx, _rx) = broadcast::channel(capacity);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.tx.subscribe()
    }

    /// Send errors only mean nobody is listening right now, so they are
    /// dropped rather than surfaced to the command path.
    pub fn publish(&self, event: SessionEvent) {
        match self.tx.send(event.clone()) {
            Ok(receivers) => debug!("session event {:?} reached {} receivers", event, receivers),
            Err(_) => debug!("session event {:?} dropped, no subscribers", event),
        }
    }
}

impl Default for ChangeNotifier {
    fn default() -> Self {
        Self::new(16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_publish_reaches_subscriber() {
        let notifier = ChangeNotifier::new(4);
        let mut rx = notifier.subscribe();

        notifier.publish(SessionEvent::Updated(SessionField::Bookings));
        notifier.publish(SessionEvent::Cleared);

        assert_eq!(rx.recv().await.unwrap(), SessionEvent::Updated(SessionField::Bookings));
        assert_eq!(rx.recv().await.unwrap(), SessionEvent::Cleared);
    }

    #[test]
    fn test_publish_without_subscribers_is_quiet() {
        let notifier = ChangeNotifier::default();
        notifier.publish(SessionEvent::Updated(SessionField::Pnr));
    }
}
