//! Calendar collaborator boundary.
//!
//! The engine never talks to a calendar itself. A collaborator fetches busy
//! slots before an invocation and materializes the produced sessions after
//! it; this trait is the whole contract. Implementations live outside the
//! core (desktop app, test doubles).

use chrono::NaiveDate;

use crate::error::Result;
use crate::session::{BusyTimeSlot, ScheduledSession};

/// Every calendar backend implements this trait. Implementations are free to
/// be asynchronous internally; callers serialize requests per target day so
/// the engine never sees overlapping snapshots.
pub trait CalendarIntegration: Send + Sync {
    /// Unique identifier (e.g. "apple", "google").
    fn name(&self) -> &str;

    /// Fetch every event occupying time on `day`, across all calendars the
    /// user mapped. Notes must be included so hashtag recognition works.
    fn busy_slots(&self, day: NaiveDate) -> Result<Vec<BusyTimeSlot>>;

    /// Write a session as a real event on its target calendar, embedding the
    /// type hashtag in the event notes. Returns the backend event id.
    fn create_session(&mut self, session: &ScheduledSession) -> Result<String>;

    /// Remove a previously created event.
    fn delete_event(&mut self, event_id: &str) -> Result<()>;
}
