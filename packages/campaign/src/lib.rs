//! # Mailsmith Campaign
//!
//! Orchestrates save / test-send / send of a composed email against the
//! external persistence and delivery collaborators.
//!
//! The campaign holds a point-in-time copy of the document and its
//! compiled HTML, captured at the moment of save rather than a live
//! reference into the store, so later edits cannot rewrite an
//! already-sent record.
//!
//! ## Lifecycle
//!
//! ```text
//! Unsaved ──save──▶ Saved ──send──▶ Sent
//!    │                ▲
//!    └── implicit save on first send_test / send_campaign
//! ```
//!
//! Every state transition happens only after the collaborator confirms;
//! a failed call leaves the campaign exactly where it was.

mod campaign;
mod collaborators;
mod lifecycle;

pub use campaign::{Campaign, CampaignStatus};
pub use collaborators::{
    CollaboratorError, DeliveryClient, PersistenceClient, SaveRequest, SaveResponse,
    SavedNewsletter, SendRequest, UploadClient, UploadedAsset,
};
pub use lifecycle::{upload_image, CampaignLifecycle, LifecycleError, TEST_RECIPIENT};
