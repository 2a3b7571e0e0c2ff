//! Entity relevance scoring.
//!
//! Scores catalog entities (notebooks, knowledge bases) against a keyword
//! set with additive per-field weights. Unlike compliance matching there is
//! no boolean verdict — the caller supplies a selection threshold.

use serde::Serialize;

use crate::catalog::MatchableEntity;

/// Additive weights per entity field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldWeights {
    /// Points per keyword contained in the entity name.
    pub name: u32,
    /// Points per keyword contained in the entity description.
    pub description: u32,
    /// Points per keyword/topic pair with containment in either direction.
    pub topic: u32,
}

impl Default for FieldWeights {
    fn default() -> Self {
        Self {
            name: 5,
            description: 3,
            topic: 2,
        }
    }
}

/// Default selection threshold.
pub const DEFAULT_THRESHOLD: u32 = 5;

/// An entity paired with its relevance score.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredEntity {
    #[serde(flatten)]
    pub entity: MatchableEntity,
    pub score: u32,
}

/// Score one entity against a keyword set.
///
/// Name and description use plain substring containment; topics match in
/// either direction (keyword-in-topic or topic-in-keyword). An empty
/// keyword set always scores zero.
pub fn score_entity(entity: &MatchableEntity, keywords: &[String], weights: &FieldWeights) -> u32 {
    let mut score = 0;

    let name_lower = entity.name.to_lowercase();
    for keyword in keywords {
        if name_lower.contains(keyword.as_str()) {
            score += weights.name;
        }
    }

    let desc_lower = entity.description.to_lowercase();
    for keyword in keywords {
        if desc_lower.contains(keyword.as_str()) {
            score += weights.description;
        }
    }

    for topic in &entity.topics {
        let topic_lower = topic.to_lowercase();
        for keyword in keywords {
            if topic_lower.contains(keyword.as_str()) || keyword.contains(topic_lower.as_str()) {
                score += weights.topic;
            }
        }
    }

    score
}

/// Select entities scoring at or above `threshold`, ordered by score
/// descending. Ties keep the original catalog order (stable sort).
pub fn select_entities(
    catalog: &[MatchableEntity],
    keywords: &[String],
    threshold: u32,
    weights: &FieldWeights,
) -> Vec<ScoredEntity> {
    let mut scored: Vec<ScoredEntity> = catalog
        .iter()
        .map(|entity| ScoredEntity {
            entity: entity.clone(),
            score: score_entity(entity, keywords, weights),
        })
        .filter(|s| s.score >= threshold)
        .collect();

    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored
}
