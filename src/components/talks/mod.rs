pub mod models;
mod translator;

pub use models::{Talk, TalkDetails};
pub use translator::{parse_description, translate_event, translate_events, DESCRIPTION_DELIMITER};
