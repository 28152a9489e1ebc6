// events/bus/event_bus.rs
//
// Synchronous, typed event bus. Each ArticleRegistry owns one.
//
// - Handlers run immediately, in subscription order
// - A panicking handler is caught and logged; later handlers still run
// - The most recent emissions are kept in a bounded log

use std::any::{Any, TypeId};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, PoisonError, RwLock};

use crate::events::types::DomainEvent;

/// Entries kept by `EventBus::new`; older ones are dropped first
pub const DEFAULT_EVENT_LOG_CAPACITY: usize = 256;

/// Type-erased handler; downcasts to the concrete event inside
type EventHandler = Arc<dyn Fn(&dyn Any) + Send + Sync>;

pub struct EventBus {
    handlers: Arc<RwLock<HashMap<TypeId, Vec<EventHandler>>>>,
    event_log: Arc<RwLock<VecDeque<EventLogEntry>>>,
    log_capacity: usize,
}

/// One recorded emission
#[derive(Debug, Clone)]
pub struct EventLogEntry {
    pub event_type: String,
    pub event_id: String,
    pub occurred_at: String,
    pub handler_count: usize,
}

impl EventBus {
    pub fn new() -> Self {
        Self::with_log_capacity(DEFAULT_EVENT_LOG_CAPACITY)
    }

    /// Bus whose log keeps at most `capacity` entries. Zero disables the log.
    pub fn with_log_capacity(capacity: usize) -> Self {
        Self {
            handlers: Arc::new(RwLock::new(HashMap::new())),
            event_log: Arc::new(RwLock::new(VecDeque::with_capacity(capacity))),
            log_capacity: capacity,
        }
    }

    /// Subscribe to one event type.
    ///
    /// ```ignore
    /// registry.events().subscribe::<ArticleRegistered, _>(|event| {
    ///     log::info!("new article: {}", event.title);
    /// });
    /// ```
    ///
    /// A handler subscribed from inside another handler first runs on the
    /// next emission.
    pub fn subscribe<E, F>(&self, handler: F)
    where
        E: DomainEvent + 'static,
        F: Fn(&E) + Send + Sync + 'static,
    {
        let wrapped: EventHandler = Arc::new(move |event_any: &dyn Any| {
            if let Some(event) = event_any.downcast_ref::<E>() {
                handler(event);
            } else {
                log::error!(
                    "failed to downcast event in handler for {}",
                    std::any::type_name::<E>()
                );
            }
        });

        self.handlers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(TypeId::of::<E>())
            .or_default()
            .push(wrapped);
    }

    /// Record the event, then run its handlers.
    ///
    /// Handlers run with no bus lock held, so they may subscribe or emit.
    pub fn emit<E>(&self, event: E)
    where
        E: DomainEvent + 'static,
    {
        let event_handlers: Vec<EventHandler> = self
            .handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&TypeId::of::<E>())
            .cloned()
            .unwrap_or_default();

        let entry = EventLogEntry {
            event_type: event.event_type().to_string(),
            event_id: event.event_id().to_string(),
            occurred_at: event.occurred_at().to_rfc3339(),
            handler_count: event_handlers.len(),
        };

        log::debug!(
            "[EVENT] {} (id: {}) | {} handlers",
            entry.event_type,
            entry.event_id,
            entry.handler_count
        );

        if self.log_capacity > 0 {
            let mut log = self
                .event_log
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            while log.len() >= self.log_capacity {
                log.pop_front();
            }
            log.push_back(entry);
        }

        for (idx, handler) in event_handlers.iter().enumerate() {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                handler(&event as &dyn Any);
            }));

            if let Err(e) = result {
                log::error!(
                    "handler {} for {} panicked: {:?}",
                    idx,
                    event.event_type(),
                    e
                );
            }
        }
    }

    /// Most recent emissions, oldest first
    pub fn event_log(&self) -> Vec<EventLogEntry> {
        self.event_log
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .cloned()
            .collect()
    }

    pub fn log_capacity(&self) -> usize {
        self.log_capacity
    }

    pub fn clear_event_log(&self) {
        self.event_log
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    pub fn subscriber_count<E>(&self) -> usize
    where
        E: 'static,
    {
        self.handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&TypeId::of::<E>())
            .map_or(0, Vec::len)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

// Clones share handlers and log
impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            handlers: Arc::clone(&self.handlers),
            event_log: Arc::clone(&self.event_log),
            log_capacity: self.log_capacity,
        }
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("emitted", &self.event_log.read().map_or(0, |log| log.len()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::types::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use uuid::Uuid;

    fn registered(title: &str) -> ArticleRegistered {
        ArticleRegistered::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            title.to_string(),
            0,
        )
    }

    #[test]
    fn test_subscribe_and_emit() {
        let bus = EventBus::new();
        let counter = Arc::new(AtomicUsize::new(0));
        let counter_clone = Arc::clone(&counter);

        bus.subscribe::<ArticleRegistered, _>(move |_event| {
            counter_clone.fetch_add(1, Ordering::SeqCst);
        });

        bus.emit(registered("Building Systems"));

        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_handlers_run_in_subscription_order() {
        let bus = EventBus::new();
        let sequence = Arc::new(RwLock::new(Vec::new()));

        for n in 1..=3 {
            let seq = Arc::clone(&sequence);
            bus.subscribe::<ArticleReassigned, _>(move |_| {
                seq.write().unwrap().push(n);
            });
        }

        bus.emit(ArticleReassigned::new(
            Uuid::new_v4(),
            Link::Magazine,
            Uuid::new_v4(),
            Uuid::new_v4(),
        ));

        assert_eq!(*sequence.read().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_event_log_records_emissions() {
        let bus = EventBus::new();
        bus.subscribe::<ArticleRegistered, _>(|_| {});

        bus.emit(registered("First Article"));
        bus.emit(ArticleReassigned::new(
            Uuid::new_v4(),
            Link::Author,
            Uuid::new_v4(),
            Uuid::new_v4(),
        ));

        let log = bus.event_log();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].event_type, "ArticleRegistered");
        assert_eq!(log[0].handler_count, 1);
        assert_eq!(log[1].event_type, "ArticleReassigned");
        assert_eq!(log[1].handler_count, 0);

        bus.clear_event_log();
        assert!(bus.event_log().is_empty());
    }

    #[test]
    fn test_subscriber_count_is_per_type() {
        let bus = EventBus::new();
        assert_eq!(bus.subscriber_count::<ArticleRegistered>(), 0);

        bus.subscribe::<ArticleRegistered, _>(|_| {});
        bus.subscribe::<ArticleRegistered, _>(|_| {});
        assert_eq!(bus.subscriber_count::<ArticleRegistered>(), 2);
        assert_eq!(bus.subscriber_count::<MagazineRevised>(), 0);
    }

    #[test]
    fn test_handler_panic_doesnt_break_bus() {
        let bus = EventBus::new();
        let counter = Arc::new(AtomicUsize::new(0));

        bus.subscribe::<ArticleRegistered, _>(|_| {
            panic!("Intentional panic");
        });

        let counter_clone = Arc::clone(&counter);
        bus.subscribe::<ArticleRegistered, _>(move |_| {
            counter_clone.fetch_add(1, Ordering::SeqCst);
        });

        bus.emit(registered("Panicking Handlers"));

        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_event_log_is_bounded() {
        let bus = EventBus::with_log_capacity(3);
        for n in 0..10 {
            bus.emit(registered(&format!("Article {}", n)));
        }

        let log = bus.event_log();
        assert_eq!(log.len(), 3);
        assert_eq!(bus.log_capacity(), 3);

        let disabled = EventBus::with_log_capacity(0);
        disabled.emit(registered("Not Recorded"));
        assert!(disabled.event_log().is_empty());
    }

    #[test]
    fn test_default_log_keeps_latest_entries() {
        let bus = EventBus::new();
        let mut last_id = String::new();
        for n in 0..(DEFAULT_EVENT_LOG_CAPACITY + 50) {
            let event = registered(&format!("Article {}", n));
            last_id = event.event_id.to_string();
            bus.emit(event);
        }

        let log = bus.event_log();
        assert_eq!(log.len(), DEFAULT_EVENT_LOG_CAPACITY);
        assert_eq!(log.last().map(|entry| entry.event_id.clone()), Some(last_id));
    }

    #[test]
    fn test_handler_may_subscribe_during_emit() {
        let bus = EventBus::new();
        let inner_bus = bus.clone();
        bus.subscribe::<ArticleRegistered, _>(move |_| {
            inner_bus.subscribe::<MagazineRevised, _>(|_| {});
        });

        bus.emit(registered("Subscribes Inside"));

        assert_eq!(bus.subscriber_count::<MagazineRevised>(), 1);
        assert_eq!(bus.subscriber_count::<ArticleRegistered>(), 1);
    }

    #[test]
    fn test_handler_may_emit_during_emit() {
        let bus = EventBus::new();
        let counter = Arc::new(AtomicUsize::new(0));
        let inner_bus = bus.clone();
        bus.subscribe::<ArticleRegistered, _>(move |event| {
            inner_bus.emit(ArticleReassigned::new(
                event.article_id,
                Link::Author,
                event.author_id,
                event.author_id,
            ));
        });
        let counter_clone = Arc::clone(&counter);
        bus.subscribe::<ArticleReassigned, _>(move |_| {
            counter_clone.fetch_add(1, Ordering::SeqCst);
        });

        bus.emit(registered("Emits Inside"));

        assert_eq!(counter.load(Ordering::SeqCst), 1);
        assert_eq!(bus.event_log().len(), 2);
    }

    #[test]
    fn test_clones_share_handlers() {
        let bus = EventBus::new();
        let clone = bus.clone();
        clone.subscribe::<ArticleRegistered, _>(|_| {});
        assert_eq!(bus.subscriber_count::<ArticleRegistered>(), 1);
    }
}
