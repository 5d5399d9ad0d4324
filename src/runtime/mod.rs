/// Runtime module - Gateway

mod chat;
mod non_interactive;
mod orchestrator;

pub use chat::ChatSession;
pub use non_interactive::{read_utterances, NonInteractiveRunner, TurnReport};
pub use orchestrator::Orchestrator;
