//! Built-in keyword tables.
//!
//! Keywords may be written with accents and punctuation; they are normalized
//! once when a [`Taxonomy`](super::category::Taxonomy),
//! [`DifficultyRules`](super::difficulty::DifficultyRules) or
//! [`TagRules`](super::tags::TagRules) is built. Table order matters: earlier
//! categories win score ties.

use serde::{Deserialize, Serialize};

/// One category of the taxonomy, as written in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyRule {
    pub category: String,
    pub keywords: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Category assigned when no rule scores above zero. Not allowed as a rule name.
pub const FALLBACK_CATEGORY: &str = "General";

/// `(category, keywords, default tags)`, in tie-break order.
const DEFAULT_TAXONOMY: &[(&str, &[&str], &[&str])] = &[
    (
        "0DTE / SPX",
        &[
            "0dte",
            "spx",
            "xsp",
            "zero days to expiration",
            "vencimiento diario",
            "intradía",
            "scalping",
        ],
        &["0dte", "spx", "intradia"],
    ),
    (
        "Dealers & Microestructura",
        &[
            "gamma exposure",
            "gex",
            "dealers",
            "market makers",
            "microestructura",
            "flujo de opciones",
            "open interest",
            "vanna",
            "charm",
            "skew",
        ],
        &["dealers", "gex", "microestructura"],
    ),
    (
        "Volatilidad",
        &[
            "volatilidad",
            "volatilidad implícita",
            "vix",
            "iv rank",
            "skew",
            "term structure",
            "vega",
            "vomma",
            "volga",
        ],
        &["volatilidad", "vix"],
    ),
    (
        "Griegas",
        &[
            "griegas",
            "greeks",
            "delta",
            "gamma",
            "theta",
            "decaimiento temporal",
        ],
        &["griegas"],
    ),
    (
        "Estrategias",
        &[
            "estrategia",
            "iron condor",
            "spread",
            "covered call",
            "cash secured put",
            "straddle",
            "strangle",
            "mariposa",
            "butterfly",
            "calendario",
        ],
        &["estrategias"],
    ),
    (
        "Fundamentos",
        &[
            "opción",
            "opciones",
            "call",
            "put",
            "strike",
            "prima",
            "vencimiento",
            "introducción",
            "principiantes",
        ],
        &["fundamentos", "opciones"],
    ),
    (
        "Gestión de Riesgo",
        &[
            "gestión de riesgo",
            "riesgo",
            "stop loss",
            "tamaño de posición",
            "position sizing",
            "psicología",
            "drawdown",
        ],
        &["riesgo", "gestion"],
    ),
    (
        "Análisis de Mercado",
        &[
            "análisis",
            "premarket",
            "earnings",
            "resultados",
            "fed",
            "cpi",
            "mercado hoy",
        ],
        &["mercado", "analisis"],
    ),
];

pub const DEFAULT_ADVANCED: &[&str] = &[
    "0dte",
    "gamma",
    "gamma exposure",
    "gex",
    "vanna",
    "charm",
    "vomma",
    "volga",
    "dealers",
    "microestructura",
    "skew",
];

pub const DEFAULT_INTERMEDIATE: &[&str] = &[
    "delta",
    "theta",
    "vega",
    "griegas",
    "spread",
    "iron",
    "covered",
    "condor",
    "straddle",
    "strangle",
    "volatilidad",
];

pub const DEFAULT_BASIC: &[&str] = &[
    "principiante",
    "introducción",
    "qué es",
    "básico",
    "desde cero",
    "tutorial",
    "opción",
    "call",
    "put",
];

/// Extra tags, scanned in this order after the category's default tags.
pub const DEFAULT_EXTRA_TAGS: &[&str] = &[
    "0dte",
    "spx",
    "gex",
    "gamma",
    "vanna",
    "charm",
    "vix",
    "skew",
    "iron condor",
    "covered call",
    "straddle",
    "strangle",
    "theta",
    "delta",
    "vega",
    "earnings",
    "fed",
    "cpi",
    "opciones",
    "principiantes",
];

/// The built-in taxonomy as owned rules.
pub fn default_rules() -> Vec<TaxonomyRule> {
    DEFAULT_TAXONOMY
        .iter()
        .map(|(category, keywords, tags)| TaxonomyRule {
            category: category.to_string(),
            keywords: to_owned(keywords),
            tags: to_owned(tags),
        })
        .collect()
}

pub fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
