use serde::{Deserialize, Serialize};

/// A condition recognized in the query text, resolved to a coded concept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionMatch {
    /// Dictionary term that matched, e.g. "diabetic".
    pub term: String,
    /// Terminology code — the dedup key; two matches with the same code
    /// collapse to the first one seen.
    pub code: String,
    /// Coding-system URI.
    pub system: String,
    /// Human-readable label.
    pub display: String,
    pub method: ExtractionMethod,
}

/// How a condition match was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExtractionMethod {
    /// Single-word term matched a token's lemma or surface.
    Lemma,
    /// Every word of a multi-word term was present in the document lemma set.
    MultiWordLemma,
    /// An annotator entity span labeled as a disease/symptom matched.
    NamedEntity,
}

/// An age constraint derived from the text. Downstream only ever consumes
/// the first one extracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgeFilter {
    GreaterThan(u32),
    LessThan(u32),
    Range { min: u32, max: u32 },
}

/// Administrative gender filter. First matching token wins; no conflict
/// resolution when both indicators appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

/// What the caller is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    #[default]
    Search,
    Count,
    Aggregate,
}

/// FHIR resource dimension implied by the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceType {
    Patient,
    Condition,
    Observation,
    MedicationRequest,
}

impl ResourceType {
    /// The FHIR URL path segment / resourceType value.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Patient => "Patient",
            ResourceType::Condition => "Condition",
            ResourceType::Observation => "Observation",
            ResourceType::MedicationRequest => "MedicationRequest",
        }
    }
}

/// A numeric token with its resolved value and surrounding context.
/// Kept in full for observability even when no age filter derives from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberMention {
    /// Token text as written, e.g. "50" or "fifty".
    pub text: String,
    /// Resolved integer, `None` when the token is outside the word-number
    /// table and not a digit literal.
    pub value: Option<u32>,
    /// Up to two tokens either side, joined with spaces, the mention itself
    /// excluded.
    pub context: String,
    /// Token index in the annotated document.
    pub position: usize,
}

/// A raw named-entity span from the annotator, retained for observability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedEntity {
    pub text: String,
    pub label: String,
}

/// Everything the extractor recognized in one query text.
///
/// Built fresh per query and immutable afterwards. Absent features are empty
/// or `None` — extraction has no failure mode.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractedEntities {
    /// Unique by code, first-seen order.
    pub conditions: Vec<ConditionMatch>,
    /// All filters found; only the first is consumed by the query builder.
    pub age_filters: Vec<AgeFilter>,
    pub gender: Option<Gender>,
    pub intent: Intent,
    /// Resource dimensions implied by the query (Patient always, Condition
    /// when conditions were found).
    pub resource_hints: Vec<ResourceType>,
    /// Raw numeric mentions, observability only.
    pub numbers: Vec<NumberMention>,
    /// Raw annotator entity spans, observability only.
    pub named_entities: Vec<NamedEntity>,
}
