//! Property tests for the deadline counter.

use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;

use jamkeeper::count_after_deadline;
use jamkeeper::domain::models::Commit;

fn cutoff() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 12, 23, 14, 30, 0).unwrap()
}

fn commit_at(offset_minutes: i64) -> Commit {
    let ts = cutoff() + Duration::minutes(offset_minutes);
    Commit::new("sha", ts.to_rfc3339())
}

proptest! {
    /// A listing that is entirely after the cutoff counts in full.
    #[test]
    fn all_late_commits_counted(offsets in prop::collection::vec(1i64..100_000, 1..40)) {
        let mut sorted = offsets.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a)); // newest first
        let commits: Vec<Commit> = sorted.iter().map(|m| commit_at(*m)).collect();

        prop_assert_eq!(count_after_deadline(&commits, cutoff()).unwrap(), commits.len());
    }

    /// A head at or before the cutoff short-circuits to zero no matter what
    /// follows, including later timestamps that violate the newest-first
    /// assumption.
    #[test]
    fn early_head_always_zero(
        head_offset in -100_000i64..=0,
        offsets in prop::collection::vec(-100_000i64..100_000, 0..40),
    ) {
        let mut commits = vec![commit_at(head_offset)];
        commits.extend(offsets.iter().map(|m| commit_at(*m)));

        prop_assert_eq!(count_after_deadline(&commits, cutoff()).unwrap(), 0);
    }

    /// With a late head, the count is exactly the number of late commits.
    #[test]
    fn late_head_counts_strictly_late(
        offsets in prop::collection::vec(-100_000i64..100_000, 0..40),
    ) {
        let mut commits = vec![commit_at(1)];
        commits.extend(offsets.iter().map(|m| commit_at(*m)));

        let expected = 1 + offsets.iter().filter(|m| **m > 0).count();
        prop_assert_eq!(count_after_deadline(&commits, cutoff()).unwrap(), expected);
    }

    /// The count never exceeds the listing length.
    #[test]
    fn count_bounded_by_len(offsets in prop::collection::vec(-100_000i64..100_000, 0..40)) {
        let commits: Vec<Commit> = offsets.iter().map(|m| commit_at(*m)).collect();
        let count = count_after_deadline(&commits, cutoff()).unwrap();
        prop_assert!(count <= commits.len());
    }
}

#[test]
fn empty_listing_is_zero() {
    assert_eq!(count_after_deadline(&[], cutoff()).unwrap(), 0);
}

#[test]
fn tie_with_cutoff_is_not_late() {
    let commits = vec![commit_at(0)];
    assert_eq!(count_after_deadline(&commits, cutoff()).unwrap(), 0);
}
