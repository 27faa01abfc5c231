//! Check-in activity side channel
//!
//! Successful issuances are broadcast in-process so downstream features
//! (activity feed logging) can observe "user went to venue X" without
//! touching the ledger. The channel is lossy for slow consumers and carries
//! no correctness weight: dropping an event never affects the one-per-day
//! invariant or the counts, which are always re-derived from storage.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::broadcast;
use tokio_stream::wrappers::BroadcastStream;

/// A successfully issued check-in, for downstream consumers
#[derive(Debug, Clone, Serialize)]
pub struct CheckInActivity {
    pub user_id: i32,
    pub venue_id: i32,
    pub venue_name: String,
    pub issued_at: DateTime<Utc>,
}

#[derive(Clone)]
pub struct ActivityPublisher {
    tx: broadcast::Sender<CheckInActivity>,
}

impl ActivityPublisher {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Publish an activity event. Having no subscribers is not an error.
    pub fn publish(&self, activity: CheckInActivity) {
        let _ = self.tx.send(activity);
    }

    /// Subscribe to activity events from this point onward
    pub fn subscribe(&self) -> BroadcastStream<CheckInActivity> {
        BroadcastStream::new(self.tx.subscribe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tokio_stream::StreamExt;

    #[tokio::test]
    async fn subscribers_receive_published_activity() {
        let publisher = ActivityPublisher::new(8);
        let mut stream = publisher.subscribe();

        publisher.publish(CheckInActivity {
            user_id: 1,
            venue_id: 2,
            venue_name: "Velvet".to_string(),
            issued_at: Utc::now(),
        });

        let event = stream.next().await.unwrap().unwrap();
        assert_eq!(event.user_id, 1);
        assert_eq!(event.venue_name, "Velvet");
    }

    #[test]
    fn publishing_without_subscribers_does_not_panic() {
        let publisher = ActivityPublisher::new(8);
        publisher.publish(CheckInActivity {
            user_id: 1,
            venue_id: 2,
            venue_name: "Velvet".to_string(),
            issued_at: Utc::now(),
        });
    }
}
