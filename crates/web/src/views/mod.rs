//! View-models for pages with local, transient state.
//!
//! Each board starts from a fresh copy of the seed records and changes only
//! through commands that consume it and return the next board. Nothing here
//! writes back to [`crate::store::EntityStore`], so the next request starts
//! from the seed again.

pub mod dashboard;
pub mod inbox;
pub mod listings;
pub mod order_draft;
pub mod orders;
pub mod profile;
pub mod tasks;

pub use dashboard::{FarmOverview, MarketplaceOverview};
pub use inbox::Inbox;
pub use listings::ListingsBoard;
pub use order_draft::OrderDraft;
pub use orders::OrderBoard;
pub use profile::{ProfileDraft, ProfileForm};
pub use tasks::TaskBoard;

use philagri_core::TransitionError;
use thiserror::Error;

/// A command that could not be applied to a board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    /// No record with this id on the board.
    #[error("no {kind} with id {id}")]
    UnknownId { kind: &'static str, id: String },

    /// The status change is not in the lifecycle table.
    #[error(transparent)]
    Transition(#[from] TransitionError),

    /// Submitted input was unusable.
    #[error("{0}")]
    Invalid(String),
}

impl ViewError {
    pub(crate) fn unknown(kind: &'static str, id: &str) -> Self {
        Self::UnknownId {
            kind,
            id: id.to_owned(),
        }
    }
}
