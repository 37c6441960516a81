//! # Run Status
//!
//! Final outcome of one reconciliation run. Escalated step failures fold
//! into this value; the entry point turns it into the process exit code.

/// Outcome of a full apply or revert run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReconcileStatus {
    /// Every escalating step succeeded
    #[default]
    Success,
    /// At least one validation or escalated step failure occurred
    Failure,
}

impl ReconcileStatus {
    /// Process exit code reported to the caller; deployment wrappers key
    /// their success detection off this
    #[must_use]
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Success => 0,
            Self::Failure => 1,
        }
    }

    #[must_use]
    pub fn is_success(self) -> bool {
        self == Self::Success
    }
}
