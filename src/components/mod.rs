// Export components
pub mod google_calendar;
pub mod talks;

// Re-export the calendar client
pub use google_calendar::CalendarClient;
