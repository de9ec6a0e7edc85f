//! Status returned by behavior nodes.

/// The result of evaluating a behavior node.
///
/// In a turn-based game every decision completes within a single tick:
/// conditions evaluate immediately and actions either record a choice or
/// report that they could not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The condition held, or the action recorded its choice.
    Success,

    /// The condition did not hold, or the action had nothing to choose.
    Failure,
}

impl Status {
    /// Maps a boolean to `Success` (true) or `Failure` (false).
    #[inline]
    pub fn from_bool(value: bool) -> Self {
        if value {
            Status::Success
        } else {
            Status::Failure
        }
    }

    /// Returns `true` if this status is `Success`.
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    /// Returns `true` if this status is `Failure`.
    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }

    /// Inverts the status: Success becomes Failure and vice versa.
    #[inline]
    pub fn invert(self) -> Self {
        match self {
            Status::Success => Status::Failure,
            Status::Failure => Status::Success,
        }
    }
}

impl From<bool> for Status {
    fn from(value: bool) -> Self {
        Status::from_bool(value)
    }
}
