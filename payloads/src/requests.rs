use serde::{Deserialize, Serialize};

/// Default page size of the activity feed, matching the backend.
pub const EVENTS_PAGE_SIZE: u32 = 30;

/// Query parameters for a page of the activity feed. Pages start at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventsPage {
    pub page: u32,
    pub items: u32,
}

impl Default for EventsPage {
    fn default() -> Self {
        Self {
            page: 1,
            items: EVENTS_PAGE_SIZE,
        }
    }
}
