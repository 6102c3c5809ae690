//! Lifecycle state machine for breeding records
//!
//! Explicit transition tables per status enum. Terminal statuses are sinks:
//! no outgoing transitions, and the gateway refuses any update, status
//! change or deletion against a record sitting in one. The guard runs before
//! the validators so callers can tell "this record is locked" apart from
//! "fix these fields".

use crate::domain::entities::RecordKind;
use crate::domain::value_objects::{HeatStatus, PigletStatus, PregnancyStatus};

/// Contract shared by every status enum with a lifecycle
///
/// `next_states` lists the states reachable by an explicit status update;
/// a state with no successors is terminal and freezes its record.
pub trait Lifecycle: Copy + Eq + Sized + 'static {
    /// States reachable from `self`
    fn next_states(self) -> &'static [Self];

    /// True when no transition leads out of `self`
    fn is_terminal(self) -> bool {
        self.next_states().is_empty()
    }

    /// True when an explicit move from `self` to `next` is allowed
    fn can_transition_to(self, next: Self) -> bool {
        self.next_states().contains(&next)
    }
}

impl Lifecycle for HeatStatus {
    fn next_states(self) -> &'static [Self] {
        match self {
            HeatStatus::Detected => &[
                HeatStatus::Serviced,
                HeatStatus::NotServiced,
                HeatStatus::Cancelled,
            ],
            HeatStatus::Serviced | HeatStatus::NotServiced | HeatStatus::Cancelled => &[],
        }
    }
}

impl Lifecycle for PregnancyStatus {
    fn next_states(self) -> &'static [Self] {
        match self {
            PregnancyStatus::Unconfirmed => &[
                PregnancyStatus::InProgress,
                PregnancyStatus::EndedBirth,
                PregnancyStatus::EndedAbortion,
            ],
            PregnancyStatus::InProgress => {
                &[PregnancyStatus::EndedBirth, PregnancyStatus::EndedAbortion]
            }
            PregnancyStatus::EndedBirth | PregnancyStatus::EndedAbortion => &[],
        }
    }
}

impl Lifecycle for PigletStatus {
    fn next_states(self) -> &'static [Self] {
        match self {
            PigletStatus::Nursing => &[
                PigletStatus::Weaned,
                PigletStatus::Transferred,
                PigletStatus::Sold,
                PigletStatus::Dead,
            ],
            PigletStatus::Weaned
            | PigletStatus::Transferred
            | PigletStatus::Sold
            | PigletStatus::Dead => &[],
        }
    }
}

/// Gateway guard: a record may only be written while its status is
/// non-terminal.
pub fn can_mutate<S: Lifecycle>(status: S) -> bool {
    !status.is_terminal()
}

/// Audit note surfaced to callers before deleting a historical record.
///
/// Births and abortions never lock, so deletion is a policy decision the
/// caller must confirm rather than a hard block.
pub fn deletion_warning(kind: RecordKind) -> Option<&'static str> {
    match kind {
        RecordKind::Birth => Some(
            "births are audit-significant; deleting one orphans its piglets and the sow's parity history",
        ),
        RecordKind::Abortion => Some("abortions are audit-significant health records"),
        RecordKind::Heat
        | RecordKind::Service
        | RecordKind::Pregnancy
        | RecordKind::Piglet => None,
    }
}
