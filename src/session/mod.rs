/// Session management module - Gateway

mod transcript;

pub use transcript::{Speaker, Transcript, TranscriptEntry};
