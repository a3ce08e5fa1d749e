/// Result of offering an input event to an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// The element acted on the event.
    Consumed,
    /// The element did nothing with it.
    Ignored,
}

impl EventResult {
    #[inline]
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }

    /// `Consumed` if either side is.
    #[inline]
    pub fn or(self, other: EventResult) -> EventResult {
        if self.is_consumed() { self } else { other }
    }
}
