use crate::classify::normalize::normalize;
use crate::classify::taxonomy::DEFAULT_EXTRA_TAGS;

/// Upper bound on the number of tags attached to one video.
pub const MAX_TAGS: usize = 8;

/// Secondary tag phrases scanned after the category's default tags.
#[derive(Debug, Clone)]
pub struct TagRules {
    /// `(tag as written, normalized form)` in scan order.
    extra: Vec<(String, String)>,
}

impl TagRules {
    pub fn new<S: AsRef<str>>(extra: &[S]) -> Self {
        let extra = extra
            .iter()
            .map(|phrase| phrase.as_ref().trim())
            .map(|phrase| (phrase.to_string(), normalize(phrase)))
            .filter(|(_, normalized)| !normalized.is_empty())
            .collect();
        TagRules { extra }
    }

    /// Category tags first, then every extra phrase found in `text`, without
    /// duplicates and cut off after [`MAX_TAGS`] entries.
    pub fn build_tags(&self, category_tags: &[String], text: &str) -> Vec<String> {
        let text = normalize(text);

        let matched = self
            .extra
            .iter()
            .filter(|(_, normalized)| text.contains(normalized.as_str()))
            .map(|(tag, _)| tag);

        let mut tags: Vec<String> = Vec::with_capacity(MAX_TAGS);
        for tag in category_tags.iter().chain(matched) {
            if tags.len() == MAX_TAGS {
                break;
            }
            if !tags.contains(tag) {
                tags.push(tag.clone());
            }
        }
        tags
    }
}

impl Default for TagRules {
    fn default() -> Self {
        TagRules::new(DEFAULT_EXTRA_TAGS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(tags: &[&str]) -> Vec<String> {
        tags.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_category_tags_come_first() {
        let rules = TagRules::default();
        let tags = rules.build_tags(
            &owned(&["dealers", "gex", "microestructura"]),
            "Qué es el Gamma Exposure (GEX) y cómo afecta al SPX",
        );
        assert_eq!(tags, owned(&["dealers", "gex", "microestructura", "spx", "gamma"]));
    }

    #[test]
    fn test_duplicates_removed() {
        let rules = TagRules::new(&["spx", "spx", "vix"]);
        let tags = rules.build_tags(&owned(&["vix", "vix"]), "spx y vix");
        assert_eq!(tags, owned(&["vix", "spx"]));
    }

    #[test]
    fn test_cap_at_eight() {
        let rules = TagRules::default();
        let text = "0DTE SPX GEX gamma vanna charm VIX skew iron condor covered call \
                    straddle strangle theta delta vega earnings FED CPI";
        let tags = rules.build_tags(&owned(&["a", "b", "c"]), text);
        assert_eq!(tags.len(), MAX_TAGS);
        assert_eq!(tags, owned(&["a", "b", "c", "0dte", "spx", "gex", "gamma", "vanna"]));
    }

    #[test]
    fn test_cap_applies_to_category_tags_too() {
        let rules = TagRules::new::<&str>(&[]);
        let category: Vec<String> = (0..12).map(|i| format!("t{i}")).collect();
        assert_eq!(rules.build_tags(&category, "").len(), MAX_TAGS);
    }

    #[test]
    fn test_empty_text_and_no_category() {
        let rules = TagRules::default();
        assert!(rules.build_tags(&[], "").is_empty());
    }

    #[test]
    fn test_phrase_matched_after_normalization() {
        let rules = TagRules::new(&["iron condor"]);
        assert_eq!(
            rules.build_tags(&[], "IRON-CONDOR semanal"),
            owned(&["iron condor"])
        );
    }

    #[test]
    fn test_deterministic() {
        let rules = TagRules::default();
        let category = owned(&["volatilidad", "vix"]);
        let text = "VIX, skew, iron condor y straddle antes del CPI";
        let first = rules.build_tags(&category, text);
        assert_eq!(rules.build_tags(&category, text), first);
        assert_eq!(TagRules::default().build_tags(&category, text), first);
    }
}
