//! Immutable exact-match knowledge base.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::Family;

/// Number of entries to generate per family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KnowledgeBounds {
    pub learning_advice: u32,
    pub efficiency_tip: u32,
    pub mood_encouragement: u32,
    pub health_reminder: u32,
    pub trivia: u32,
    pub programming_tip: u32,
}

impl KnowledgeBounds {
    /// Entry count configured for a family.
    #[must_use]
    pub fn count(&self, family: Family) -> u32 {
        match family {
            Family::LearningAdvice => self.learning_advice,
            Family::EfficiencyTip => self.efficiency_tip,
            Family::MoodEncouragement => self.mood_encouragement,
            Family::HealthReminder => self.health_reminder,
            Family::Trivia => self.trivia,
            Family::ProgrammingTip => self.programming_tip,
        }
    }

    /// Sum of all family counts.
    #[must_use]
    pub fn total(&self) -> usize {
        Family::ALL
            .iter()
            .map(|f| self.count(*f) as usize)
            .sum()
    }
}

impl Default for KnowledgeBounds {
    fn default() -> Self {
        Self {
            learning_advice: Family::LearningAdvice.default_count(),
            efficiency_tip: Family::EfficiencyTip.default_count(),
            mood_encouragement: Family::MoodEncouragement.default_count(),
            health_reminder: Family::HealthReminder.default_count(),
            trivia: Family::Trivia.default_count(),
            programming_tip: Family::ProgrammingTip.default_count(),
        }
    }
}

/// Mapping from lower-cased question to answer.
///
/// Built once and never mutated afterwards, so a shared reference can be
/// read from any number of threads.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    entries: HashMap<String, String>,
    bounds: KnowledgeBounds,
}

impl KnowledgeBase {
    /// Generate every family run up to its configured bound.
    #[must_use]
    pub fn build(bounds: &KnowledgeBounds) -> Self {
        let mut entries = HashMap::with_capacity(bounds.total());
        for family in Family::ALL {
            for index in 1..=bounds.count(family) {
                entries.insert(family.question(index).to_lowercase(), family.answer(index));
            }
        }
        tracing::debug!(entries = entries.len(), "Built knowledge base");
        Self {
            entries,
            bounds: bounds.clone(),
        }
    }

    /// Build with the reference bounds (1100 entries).
    #[must_use]
    pub fn reference() -> Self {
        Self::build(&KnowledgeBounds::default())
    }

    /// Exact lookup of a question. The query is lower-cased first.
    #[must_use]
    pub fn get(&self, question: &str) -> Option<&str> {
        self.entries
            .get(&question.to_lowercase())
            .map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, question: &str) -> bool {
        self.get(question).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Bounds the base was generated from.
    #[must_use]
    pub fn bounds(&self) -> &KnowledgeBounds {
        &self.bounds
    }

    /// Per-family entry counts, in generation order.
    #[must_use]
    pub fn family_counts(&self) -> Vec<(Family, u32)> {
        Family::ALL
            .iter()
            .map(|f| (*f, self.bounds.count(*f)))
            .collect()
    }
}
