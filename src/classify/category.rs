use crate::classify::normalize::normalize;
use crate::classify::taxonomy::{default_rules, TaxonomyRule, FALLBACK_CATEGORY};
use crate::error::ConfigError;
use crate::models::CategoryMatch;

/// Keywords of at least this many (normalized) characters score higher.
const LONG_KEYWORD_LEN: usize = 10;
const LONG_KEYWORD_POINTS: u32 = 3;
const SHORT_KEYWORD_POINTS: u32 = 2;

/// Ordered, immutable category table with keywords pre-normalized.
#[derive(Debug, Clone)]
pub struct Taxonomy {
    rules: Vec<PreparedRule>,
}

#[derive(Debug, Clone)]
struct PreparedRule {
    category: String,
    keywords: Vec<String>,
    tags: Vec<String>,
}

impl PreparedRule {
    fn from_rule(rule: TaxonomyRule) -> Self {
        let mut keywords: Vec<String> = Vec::with_capacity(rule.keywords.len());
        for kw in rule.keywords.iter().map(|k| normalize(k)) {
            // An empty keyword is a substring of everything
            if !kw.is_empty() && !keywords.contains(&kw) {
                keywords.push(kw);
            }
        }

        let mut tags: Vec<String> = Vec::with_capacity(rule.tags.len());
        for tag in rule.tags {
            let tag = tag.trim().to_string();
            if !tag.is_empty() && !tags.contains(&tag) {
                tags.push(tag);
            }
        }

        PreparedRule {
            category: rule.category,
            keywords,
            tags,
        }
    }

    /// Each keyword contributes at most once, however often it occurs.
    fn score(&self, normalized_text: &str) -> u32 {
        self.keywords
            .iter()
            .filter(|kw| normalized_text.contains(kw.as_str()))
            .map(|kw| keyword_points(kw))
            .sum()
    }
}

fn keyword_points(normalized_keyword: &str) -> u32 {
    if normalized_keyword.len() >= LONG_KEYWORD_LEN {
        LONG_KEYWORD_POINTS
    } else {
        SHORT_KEYWORD_POINTS
    }
}

impl Taxonomy {
    /// Build a taxonomy from config rules, rejecting duplicate category names
    /// and any rule named after the fallback category.
    pub fn new(rules: Vec<TaxonomyRule>) -> Result<Self, ConfigError> {
        for (i, rule) in rules.iter().enumerate() {
            if rule.category == FALLBACK_CATEGORY {
                return Err(ConfigError::ReservedCategory(rule.category.clone()));
            }
            if rules[..i].iter().any(|r| r.category == rule.category) {
                return Err(ConfigError::DuplicateCategory(rule.category.clone()));
            }
        }
        Ok(Self::prepare(rules))
    }

    fn prepare(rules: Vec<TaxonomyRule>) -> Self {
        Taxonomy {
            rules: rules.into_iter().map(PreparedRule::from_rule).collect(),
        }
    }

    /// Category names in table (tie-break) order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|r| r.category.as_str())
    }

    /// Score `text` against every rule and return the best match.
    ///
    /// A keyword found in the normalized text is worth 3 points when it is
    /// 10 characters or longer, 2 otherwise. The highest total wins; on a tie
    /// the rule listed first wins. With no match at all the result is the
    /// `"General"` fallback with score 0 and no tags.
    pub fn pick_category(&self, text: &str) -> CategoryMatch {
        let text = normalize(text);

        let mut best: Option<(&PreparedRule, u32)> = None;
        for rule in &self.rules {
            let score = rule.score(&text);
            if score > best.map_or(0, |(_, s)| s) {
                best = Some((rule, score));
            }
        }

        match best {
            Some((rule, score)) => CategoryMatch {
                category: rule.category.clone(),
                score,
                tags: rule.tags.clone(),
            },
            None => CategoryMatch {
                category: FALLBACK_CATEGORY.to_string(),
                score: 0,
                tags: Vec::new(),
            },
        }
    }
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self::prepare(default_rules())
    }
}
