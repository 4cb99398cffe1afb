//! Rule-based lexical classification of video text.
//!
//! - [`normalize`] — text canonicalization applied before every comparison.
//! - [`taxonomy`] — built-in keyword tables (categories, difficulty tiers, extra tags).
//! - [`category`] — weighted keyword scorer that picks one category.
//! - [`difficulty`] — first-match tier classifier.
//! - [`tags`] — bounded tag builder.

pub mod category;
pub mod difficulty;
pub mod normalize;
pub mod tags;
pub mod taxonomy;

use crate::config::Config;
use crate::error::ConfigError;

pub use category::Taxonomy;
pub use difficulty::DifficultyRules;
pub use tags::TagRules;

/// The three classifiers, built once per run and shared read-only.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    pub taxonomy: Taxonomy,
    pub difficulty: DifficultyRules,
    pub tags: TagRules,
}

impl Classifier {
    /// Build from config, falling back to the built-in table for anything
    /// the config leaves out.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let taxonomy = match &config.taxonomy {
            Some(rules) => Taxonomy::new(rules.clone())?,
            None => Taxonomy::default(),
        };

        let levels = &config.difficulty;
        let difficulty = DifficultyRules::new(
            levels.advanced_or_default().as_slice(),
            levels.intermediate_or_default().as_slice(),
            levels.basic_or_default().as_slice(),
        );

        let tags = match &config.tags.extra {
            Some(extra) => TagRules::new(extra.as_slice()),
            None => TagRules::default(),
        };

        Ok(Classifier {
            taxonomy,
            difficulty,
            tags,
        })
    }
}
