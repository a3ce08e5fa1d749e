use super::types::{InputEvent, TransitionKind};

/// Listener callback. An `Err` is logged and counted; it never stops dispatch.
type Listener = Box<dyn FnMut(&InputEvent) -> anyhow::Result<()>>;

/// Event category a listener subscribes to.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum EventCategory {
    KeyPressed,
    KeyReleased,
    KeyDown,
    ButtonPressed,
    ButtonReleased,
    ButtonDown,
    Moved,
}

impl EventCategory {
    pub const ALL: [EventCategory; 7] = [
        EventCategory::KeyPressed,
        EventCategory::KeyReleased,
        EventCategory::KeyDown,
        EventCategory::ButtonPressed,
        EventCategory::ButtonReleased,
        EventCategory::ButtonDown,
        EventCategory::Moved,
    ];

    /// Category of `event`, or `None` for an `Unchanged` transition.
    pub fn of(event: &InputEvent) -> Option<Self> {
        let category = match event {
            InputEvent::Key(e) => match e.kind {
                TransitionKind::Pressed => EventCategory::KeyPressed,
                TransitionKind::Released => EventCategory::KeyReleased,
                TransitionKind::Down => EventCategory::KeyDown,
                TransitionKind::Unchanged => return None,
            },
            InputEvent::Button(e) => match e.kind {
                TransitionKind::Pressed => EventCategory::ButtonPressed,
                TransitionKind::Released => EventCategory::ButtonReleased,
                TransitionKind::Down => EventCategory::ButtonDown,
                TransitionKind::Unchanged => return None,
            },
            InputEvent::Moved(_) => EventCategory::Moved,
        };
        Some(category)
    }

    #[inline]
    const fn slot(self) -> usize {
        self as usize
    }
}

/// Returned by [`ListenerRegistry::subscribe`]; pass it back to unsubscribe.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ListenerHandle {
    category: EventCategory,
    id: u64,
}

impl ListenerHandle {
    #[inline]
    pub fn category(&self) -> EventCategory {
        self.category
    }
}

/// Outcome of one dispatch pass.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct DispatchReport {
    /// Events handed to the registry.
    pub events: usize,
    /// Listener calls made.
    pub invocations: usize,
    /// Listener calls that returned an error.
    pub failures: usize,
}

impl DispatchReport {
    #[inline]
    pub fn is_clean(&self) -> bool {
        self.failures == 0
    }
}

struct ListenerEntry {
    id: u64,
    listener: Listener,
}

/// Ordered, category-scoped listener registry.
///
/// Listeners of one category run in subscription order. `dispatch` borrows the
/// registry mutably for the whole pass and listeners only see the event, so
/// subscribing or unsubscribing from inside a listener is rejected at compile
/// time. Registry changes happen between ticks.
pub struct ListenerRegistry {
    next_id: u64,
    slots: [Vec<ListenerEntry>; EventCategory::ALL.len()],
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            slots: Default::default(),
        }
    }

    /// Appends `listener` to the end of `category`'s invocation order.
    pub fn subscribe<F>(&mut self, category: EventCategory, listener: F) -> ListenerHandle
    where
        F: FnMut(&InputEvent) -> anyhow::Result<()> + 'static,
    {
        let id = self.next_id;
        self.next_id += 1;

        self.slots[category.slot()].push(ListenerEntry {
            id,
            listener: Box::new(listener),
        });

        ListenerHandle { category, id }
    }

    /// Removes a listener. Returns `false` if it was already removed.
    pub fn unsubscribe(&mut self, handle: ListenerHandle) -> bool {
        let slot = &mut self.slots[handle.category.slot()];
        match slot.iter().position(|e| e.id == handle.id) {
            Some(i) => {
                // `remove`, not `swap_remove`: invocation order must survive.
                slot.remove(i);
                true
            }
            None => false,
        }
    }

    /// Listeners currently subscribed to `category`.
    pub fn len(&self, category: EventCategory) -> usize {
        self.slots[category.slot()].len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Vec::is_empty)
    }

    /// Drops every listener.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            slot.clear();
        }
    }

    /// Delivers `events` in order; for each event, every listener of its
    /// category runs in subscription order.
    ///
    /// A failing listener is logged at `warn` and counted in the report; the
    /// remaining listeners and events are still delivered.
    pub fn dispatch(&mut self, events: &[InputEvent]) -> DispatchReport {
        let mut report = DispatchReport { events: events.len(), ..DispatchReport::default() };

        for event in events {
            let Some(category) = EventCategory::of(event) else {
                continue;
            };

            for entry in &mut self.slots[category.slot()] {
                report.invocations += 1;
                if let Err(err) = (entry.listener)(event) {
                    report.failures += 1;
                    log::warn!("input listener #{} failed on {category:?} ({event:?}): {err:#}", entry.id);
                }
            }
        }

        report
    }
}

impl Default for ListenerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for category in EventCategory::ALL {
            map.entry(&category, &self.len(category));
        }
        map.finish()
    }
}
