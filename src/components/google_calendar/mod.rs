mod client;
pub mod models;
pub mod transport;

pub use client::{events_url, CalendarClient};
pub use models::{Attendee, CalendarEvent, EventList, EventTime, Person};
pub use transport::{CalendarTransport, ReqwestTransport, TransportError, TransportResponse};
