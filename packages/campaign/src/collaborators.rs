//! Narrow interfaces to the external collaborators: persistence, delivery,
//! and image upload.
//!
//! The DTOs mirror the wire shapes the backend accepts; the trait
//! implementations live outside this repository. Tests substitute
//! recording doubles.

use async_trait::async_trait;
use mailsmith_model::Document;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::campaign::CampaignStatus;

/// Failure surfaced by any collaborator call
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CollaboratorError {
    /// Non-success response with the backend's message body
    #[error("Collaborator rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// The call never completed
    #[error("Transport failure: {0}")]
    Transport(String),
}

/// Payload for the save collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveRequest {
    /// Existing record identity, present on every save after the first so
    /// the collaborator upserts instead of creating a duplicate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub subject: String,
    /// Compiled HTML
    pub content: String,
    /// Point-in-time block snapshot
    pub blocks: Document,
    pub status: CampaignStatus,
}

/// Response envelope from the save collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveResponse {
    pub newsletter: SavedNewsletter,
}

/// Saved record inside the save response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedNewsletter {
    #[serde(rename = "_id")]
    pub id: String,
}

/// Payload for the send collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendRequest {
    pub newsletter_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_email: Option<String>,
}

/// Public URL of an uploaded asset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadedAsset {
    pub url: String,
}

/// Saves campaign records, keyed on the existing identity when supplied
#[async_trait]
pub trait PersistenceClient: Send + Sync {
    async fn save_newsletter(
        &self,
        request: SaveRequest,
    ) -> Result<SaveResponse, CollaboratorError>;
}

/// Dispatches a persisted campaign, optionally to a single test recipient
#[async_trait]
pub trait DeliveryClient: Send + Sync {
    async fn send_newsletter(&self, request: SendRequest) -> Result<(), CollaboratorError>;
}

/// Stores one uploaded file and returns its public URL
#[async_trait]
pub trait UploadClient: Send + Sync {
    async fn upload(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadedAsset, CollaboratorError>;
}
