//! Compliance aggregation.
//!
//! Folds per-requirement verdicts into category buckets and global totals.
//! Buckets live in a `Vec` so category iteration order is first-encounter
//! order by construction — reports depend on that order, so it must not be
//! an accident of map internals.

use serde::Serialize;

use crate::requirements::Requirement;

/// Per-category verdict totals plus the missing requirements.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CategoryBucket {
    /// Category name (first-encountered spelling).
    pub name: String,
    /// Requirements aggregated under this category.
    pub total: usize,
    /// Requirements marked found.
    pub found: usize,
    /// Requirements marked missing.
    pub missing: usize,
    /// Missing requirements in encounter order.
    pub requirements: Vec<Requirement>,
}

/// Top-level aggregate for one analysis run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ComplianceResult {
    /// Total requirements checked.
    pub total: usize,
    /// Requirements marked found.
    pub found: usize,
    /// Requirements marked missing.
    pub missing: usize,
    /// Category buckets in first-encounter order.
    #[serde(rename = "by_category")]
    pub categories: Vec<CategoryBucket>,
}

impl ComplianceResult {
    /// Fold one requirement's verdict into the aggregate.
    pub fn record(&mut self, requirement: &Requirement) {
        self.total += 1;
        if requirement.found {
            self.found += 1;
        } else {
            self.missing += 1;
        }

        let bucket = self.bucket_mut(&requirement.category);
        bucket.total += 1;
        if requirement.found {
            bucket.found += 1;
        } else {
            bucket.missing += 1;
            bucket.requirements.push(requirement.clone());
        }
    }

    /// Field-wise additive merge. Missing lists concatenate per shared
    /// category; new categories append wholesale.
    pub fn merge(&mut self, other: ComplianceResult) {
        self.total += other.total;
        self.found += other.found;
        self.missing += other.missing;

        for bucket in other.categories {
            match self.categories.iter_mut().find(|b| b.name == bucket.name) {
                Some(existing) => {
                    existing.total += bucket.total;
                    existing.found += bucket.found;
                    existing.missing += bucket.missing;
                    existing.requirements.extend(bucket.requirements);
                }
                None => self.categories.push(bucket),
            }
        }
    }

    /// Bucket for `category`, created lazily on first encounter.
    fn bucket_mut(&mut self, category: &str) -> &mut CategoryBucket {
        if let Some(idx) = self.categories.iter().position(|b| b.name == category) {
            return &mut self.categories[idx];
        }
        self.categories.push(CategoryBucket {
            name: category.to_string(),
            ..Default::default()
        });
        self.categories.last_mut().expect("just pushed")
    }
}

/// Aggregate a slice of requirements carrying verdicts.
pub fn aggregate(requirements: &[Requirement]) -> ComplianceResult {
    let mut result = ComplianceResult::default();
    for requirement in requirements {
        result.record(requirement);
    }
    result
}
