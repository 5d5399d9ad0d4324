//! Transit query intent resolution.
//!
//! Raw text is tokenized once; the [`EntityExtractor`] and the
//! [`IntentClassifier`] read the same tokens independently. The
//! [`IntentResolver`] then performs at most two sequential directory
//! lookups (routes, then stops of the first route) and hands whatever it
//! gathered to [`synthesize`].

mod classifier;
mod extractor;
mod gazetteer;
mod intent_resolver;
mod query;
mod synthesizer;

pub use classifier::{Intent, IntentClassifier, KeywordSets};
pub use extractor::{Entities, EntityExtractor};
pub use gazetteer::{City, Gazetteer};
pub use intent_resolver::IntentResolver;
pub use query::{ParsedQuery, Resolution, Stage};
pub use synthesizer::synthesize;
