use crate::classify::normalize::normalize;
use crate::classify::taxonomy::{DEFAULT_ADVANCED, DEFAULT_BASIC, DEFAULT_INTERMEDIATE};
use crate::models::Difficulty;

/// Tier returned when no keyword list matches.
pub const DEFAULT_DIFFICULTY: Difficulty = Difficulty::Intermediate;

/// Three keyword lists checked in priority order: advanced, intermediate, basic.
#[derive(Debug, Clone)]
pub struct DifficultyRules {
    advanced: Vec<String>,
    intermediate: Vec<String>,
    basic: Vec<String>,
}

impl DifficultyRules {
    pub fn new<S: AsRef<str>>(advanced: &[S], intermediate: &[S], basic: &[S]) -> Self {
        DifficultyRules {
            advanced: prepare(advanced),
            intermediate: prepare(intermediate),
            basic: prepare(basic),
        }
    }

    /// Classify `text` by the first tier whose list has a substring hit.
    ///
    /// Unmatched text is [`Difficulty::Intermediate`], not basic.
    pub fn classify(&self, text: &str) -> Difficulty {
        let text = normalize(text);

        [
            (Difficulty::Advanced, &self.advanced),
            (Difficulty::Intermediate, &self.intermediate),
            (Difficulty::Basic, &self.basic),
        ]
        .into_iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| text.contains(kw.as_str())))
        .map(|(tier, _)| tier)
        .unwrap_or(DEFAULT_DIFFICULTY)
    }
}

impl Default for DifficultyRules {
    fn default() -> Self {
        DifficultyRules::new(DEFAULT_ADVANCED, DEFAULT_INTERMEDIATE, DEFAULT_BASIC)
    }
}

fn prepare<S: AsRef<str>>(keywords: &[S]) -> Vec<String> {
    keywords
        .iter()
        .map(|k| normalize(k.as_ref()))
        .filter(|k| !k.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advanced_beats_basic() {
        let rules = DifficultyRules::default();
        assert_eq!(
            rules.classify("Introducción al gamma para principiantes"),
            Difficulty::Advanced
        );
    }

    #[test]
    fn test_intermediate_beats_basic() {
        let rules = DifficultyRules::default();
        assert_eq!(
            rules.classify("Qué es un credit spread"),
            Difficulty::Intermediate
        );
    }

    #[test]
    fn test_basic() {
        let rules = DifficultyRules::default();
        assert_eq!(
            rules.classify("¿Qué es una opción? Introducción para principiantes"),
            Difficulty::Basic
        );
    }

    #[test]
    fn test_default_is_intermediate() {
        let rules = DifficultyRules::default();
        assert_eq!(rules.classify("vlog de mis vacaciones"), Difficulty::Intermediate);
        assert_eq!(rules.classify(""), Difficulty::Intermediate);
    }

    #[test]
    fn test_gex_is_advanced() {
        let rules = DifficultyRules::default();
        assert_eq!(
            rules.classify("Qué es el Gamma Exposure (GEX) y cómo afecta al SPX"),
            Difficulty::Advanced
        );
        assert_eq!(rules.classify("Estrategia 0DTE"), Difficulty::Advanced);
    }

    #[test]
    fn test_custom_lists() {
        let rules = DifficultyRules::new(&["expert"], &[], &["intro"]);
        assert_eq!(rules.classify("Expert intro"), Difficulty::Advanced);
        assert_eq!(rules.classify("an intro"), Difficulty::Basic);
        assert_eq!(rules.classify("nothing"), Difficulty::Intermediate);
    }

    #[test]
    fn test_empty_keyword_never_matches() {
        let rules = DifficultyRules::new(&["", "??"], &[], &["intro"]);
        assert_eq!(rules.classify("an intro"), Difficulty::Basic);
    }

    #[test]
    fn test_deterministic() {
        let rules = DifficultyRules::default();
        let text = "Credit spread con gamma para principiantes";
        let first = rules.classify(text);
        assert_eq!(rules.classify(text), first);
        assert_eq!(DifficultyRules::default().classify(text), first);
    }
}
