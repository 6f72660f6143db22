//! Dashboard statistics — the computed read model for complaints.
//!
//! Recomputed by a full scan on every call; at campus scale there is nothing
//! to cache.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::complaint::{Category, Complaint, ComplaintStatus};

/// Counts of complaints grouped by status and by category.
///
/// Categories with zero complaints are absent from `by_category`, not
/// zero-filled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintStats {
  pub total:        u64,
  pub pending:      u64,
  pub under_review: u64,
  pub resolved:     u64,
  pub by_category:  BTreeMap<Category, u64>,
}

impl ComplaintStats {
  pub fn compute(complaints: &[Complaint]) -> Self {
    let mut stats = Self {
      total: complaints.len() as u64,
      ..Self::default()
    };

    for complaint in complaints {
      match complaint.status {
        ComplaintStatus::Pending => stats.pending += 1,
        ComplaintStatus::UnderReview => stats.under_review += 1,
        ComplaintStatus::Resolved => stats.resolved += 1,
      }
      *stats.by_category.entry(complaint.category).or_insert(0) += 1;
    }

    stats
  }
}
