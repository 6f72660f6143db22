//! Reference-ID allocation.
//!
//! Every complaint gets a human-readable tracking code of the form
//! `REF-<year>-<4-digit sequence>`. The sequence is a process-local atomic
//! counter seeded at startup from the highest sequence already stored under
//! the current-year prefix. Concurrent creations in a multi-process deployment
//! can therefore collide; that is an accepted limitation of the design, not a
//! guarantee this module tries to provide.

use std::sync::atomic::{AtomicU32, Ordering};

/// Allocates reference IDs for one process lifetime.
#[derive(Debug)]
pub struct ReferenceAllocator {
  year: i32,
  next: AtomicU32,
}

impl ReferenceAllocator {
  /// Start a fresh counter at sequence 1 for `year`.
  pub fn new(year: i32) -> Self {
    Self {
      year,
      next: AtomicU32::new(1),
    }
  }

  /// Resume from the highest sequence found among `existing` reference IDs
  /// for `year`; IDs from other years are ignored.
  pub fn seed<'a>(
    year: i32,
    existing: impl IntoIterator<Item = &'a str>,
  ) -> Self {
    let max = existing
      .into_iter()
      .filter_map(|reference| sequence_for_year(reference, year))
      .max()
      .unwrap_or(0);

    Self {
      year,
      next: AtomicU32::new(max + 1),
    }
  }

  /// Produce the next reference ID, e.g. `REF-2024-0001`.
  pub fn allocate(&self) -> String {
    let seq = self.next.fetch_add(1, Ordering::Relaxed);
    format!("REF-{}-{:04}", self.year, seq)
  }
}

/// Parse the sequence number out of a reference ID, if it belongs to `year`.
pub fn sequence_for_year(reference: &str, year: i32) -> Option<u32> {
  let rest = reference.strip_prefix("REF-")?;
  let (ref_year, seq) = rest.split_once('-')?;
  if ref_year.parse::<i32>().ok()? != year {
    return None;
  }
  seq.parse().ok()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn first_allocation_is_sequence_one() {
    let refs = ReferenceAllocator::new(2024);
    assert_eq!(refs.allocate(), "REF-2024-0001");
    assert_eq!(refs.allocate(), "REF-2024-0002");
  }

  #[test]
  fn seeding_resumes_after_the_highest_existing_sequence() {
    let existing = ["REF-2024-0007", "REF-2024-0012", "REF-2024-0003"];
    let refs = ReferenceAllocator::seed(2024, existing);
    assert_eq!(refs.allocate(), "REF-2024-0013");
  }

  #[test]
  fn other_years_do_not_affect_the_seed() {
    let existing = ["REF-2023-9999", "REF-2024-0002"];
    let refs = ReferenceAllocator::seed(2024, existing);
    assert_eq!(refs.allocate(), "REF-2024-0003");
  }

  #[test]
  fn malformed_references_are_ignored_when_seeding() {
    let existing = ["garbage", "REF-", "REF-2024-", "REF-2024-000x"];
    let refs = ReferenceAllocator::seed(2024, existing);
    assert_eq!(refs.allocate(), "REF-2024-0001");
  }

  #[test]
  fn sequence_parsing() {
    assert_eq!(sequence_for_year("REF-2024-0042", 2024), Some(42));
    assert_eq!(sequence_for_year("REF-2023-0042", 2024), None);
    assert_eq!(sequence_for_year("REF-2024-abcd", 2024), None);
    assert_eq!(sequence_for_year("nonsense", 2024), None);
  }
}
