//! Idempotent link primitives (check + apply pattern).
//!
//! A [`LinkResource`] describes one `(source, target)` pair. Preview mode asks
//! for its [`TargetState`] without touching anything; execute mode calls
//! [`LinkResource::apply`], which classifies the attempt as a [`LinkOutcome`].
pub mod error;
pub mod link;

pub use error::LinkFailure;
pub use link::{LinkMode, LinkResource};

/// Occupation of a target path, as seen before any mutation.
///
/// # Examples
///
/// ```
/// use zl_cleanup::resources::TargetState;
///
/// assert_ne!(TargetState::Vacant, TargetState::Occupied);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetState {
    /// Nothing exists at the target; a link would be created.
    Vacant,
    /// Something already exists at the target (a homonym).
    Occupied,
}

/// Result of attempting one link (or rename).
///
/// `AlreadyExists` is the steady state on reruns and is not an error.
///
/// # Examples
///
/// ```
/// use zl_cleanup::resources::LinkOutcome;
///
/// assert!(!LinkOutcome::Linked.is_failure());
/// assert!(!LinkOutcome::AlreadyExists.is_failure());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkOutcome {
    /// The clean name now refers to the source file.
    Linked,
    /// The target already existed; nothing was changed.
    AlreadyExists,
    /// The OS refused the operation.
    Failed(LinkFailure),
}

impl LinkOutcome {
    /// Returns `true` for [`LinkOutcome::Failed`].
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}
