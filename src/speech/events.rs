use crossbeam_channel::Sender;

/// Notification channels posted by a [`Speech`](super::Speech) engine.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Channel {
    ProgressChanged,
    TotalDurationChanged,
    IsSpeakingChanged,
}

/// Opaque token identifying one subscriber's registrations.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SubscriberId(u64);

struct Subscription {
    id: SubscriberId,
    channel: Channel,
    sender: Sender<Channel>,
}

/// Per-engine observer registry. Each engine owns its own notifier, so
/// every subscription is explicitly scoped to one engine instance rather
/// than dispatched through any process-global center.
pub struct Notifier {
    next_id: u64,
    subscriptions: Vec<Subscription>,
}

impl Notifier {
    pub fn new() -> Self {
        Notifier {
            next_id: 0,
            subscriptions: Vec::new(),
        }
    }

    pub fn issue_id(&mut self) -> SubscriberId {
        self.next_id += 1;
        SubscriberId(self.next_id)
    }

    pub fn subscribe(&mut self, id: SubscriberId, channel: Channel, sender: Sender<Channel>) {
        self.subscriptions.push(Subscription {
            id,
            channel,
            sender,
        });
    }

    /// Drops every registration held by `id`. Unknown tokens are a no-op.
    pub fn unsubscribe(&mut self, id: SubscriberId) {
        self.subscriptions.retain(|sub| sub.id != id);
    }

    /// Delivery is best-effort: disconnected receivers are skipped.
    pub fn post(&self, channel: Channel) {
        for sub in &self.subscriptions {
            if sub.channel == channel {
                let _ = sub.sender.send(channel);
            }
        }
    }
}
