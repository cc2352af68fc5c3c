//! Campaign state machine over the external collaborators.
//!
//! All campaign state lives behind one async mutex. Holding the lock
//! across the implicit-save + send sequence is the single-flight guard:
//! two racing sends serialize, and the second reuses the external id the
//! first obtained instead of persisting a duplicate record.

use std::sync::Arc;

use mailsmith_compiler_html::{compile_to_html, CompileOptions};
use mailsmith_editor::{BlockPatch, Mutation, MutationError, Pipeline};
use mailsmith_model::{BlockId, Document};
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::campaign::{Campaign, CampaignStatus};
use crate::collaborators::{
    CollaboratorError, DeliveryClient, PersistenceClient, SaveRequest, SendRequest, UploadClient,
};

/// Fixed recipient for test sends
pub const TEST_RECIPIENT: &str = "test@mailsmith.dev";

#[derive(Error, Debug)]
pub enum LifecycleError {
    #[error("Subject must not be empty")]
    EmptySubject,

    #[error("Save failed: {0}")]
    Save(#[source] CollaboratorError),

    #[error("Send failed: {0}")]
    Send(#[source] CollaboratorError),

    #[error("Upload failed: {0}")]
    Upload(#[source] CollaboratorError),

    #[error(transparent)]
    Mutation(#[from] MutationError),
}

/// Drives one campaign through save and send against the collaborators
pub struct CampaignLifecycle {
    state: Mutex<Campaign>,
    persistence: Arc<dyn PersistenceClient>,
    delivery: Arc<dyn DeliveryClient>,
    options: CompileOptions,
}

impl CampaignLifecycle {
    pub fn new(
        subject: impl Into<String>,
        persistence: Arc<dyn PersistenceClient>,
        delivery: Arc<dyn DeliveryClient>,
    ) -> Self {
        Self {
            state: Mutex::new(Campaign::new(subject)),
            persistence,
            delivery,
            options: CompileOptions::default(),
        }
    }

    /// Copy of the current campaign record
    pub async fn campaign(&self) -> Campaign {
        self.state.lock().await.clone()
    }

    pub async fn set_subject(&self, subject: impl Into<String>) {
        self.state.lock().await.subject = subject.into();
    }

    /// Persist the campaign, compiling the document at this moment.
    /// Re-saving passes the existing external id so the collaborator
    /// upserts; a second save never creates a second record.
    pub async fn save(
        &self,
        document: &Document,
        status: CampaignStatus,
    ) -> Result<String, LifecycleError> {
        let mut state = self.state.lock().await;
        self.save_locked(&mut state, document, status).await
    }

    /// Send to the fixed test recipient, implicitly saving as a draft
    /// first if the campaign has never been persisted.
    pub async fn send_test(&self, document: &Document) -> Result<(), LifecycleError> {
        let mut state = self.state.lock().await;
        let newsletter_id = self
            .ensure_saved(&mut state, document, CampaignStatus::Draft)
            .await?;
        self.dispatch(&newsletter_id, Some(TEST_RECIPIENT.to_string()))
            .await
    }

    /// Send the campaign proper, implicitly saving with send status first
    /// if the campaign has never been persisted.
    pub async fn send_campaign(&self, document: &Document) -> Result<(), LifecycleError> {
        let mut state = self.state.lock().await;
        let newsletter_id = self
            .ensure_saved(&mut state, document, CampaignStatus::Send)
            .await?;
        self.dispatch(&newsletter_id, None).await?;
        state.sent = true;
        Ok(())
    }

    async fn ensure_saved(
        &self,
        state: &mut Campaign,
        document: &Document,
        status: CampaignStatus,
    ) -> Result<String, LifecycleError> {
        match &state.external_id {
            Some(id) => Ok(id.clone()),
            None => self.save_locked(state, document, status).await,
        }
    }

    async fn save_locked(
        &self,
        state: &mut Campaign,
        document: &Document,
        status: CampaignStatus,
    ) -> Result<String, LifecycleError> {
        if state.subject.trim().is_empty() {
            return Err(LifecycleError::EmptySubject);
        }

        let html = compile_to_html(document, self.options.clone());
        let request = SaveRequest {
            id: state.external_id.clone(),
            subject: state.subject.clone(),
            content: html.clone(),
            blocks: document.clone(),
            status,
        };

        let saved = self
            .persistence
            .save_newsletter(request)
            .await
            .map_err(|error| {
                warn!(%error, "campaign save rejected");
                LifecycleError::Save(error)
            })?
            .newsletter;

        info!(newsletter_id = %saved.id, ?status, "campaign saved");

        state.external_id = Some(saved.id.clone());
        state.compiled_html = html;
        state.snapshot = document.clone();
        state.status = status;
        Ok(saved.id)
    }

    async fn dispatch(
        &self,
        newsletter_id: &str,
        test_email: Option<String>,
    ) -> Result<(), LifecycleError> {
        let is_test = test_email.is_some();
        self.delivery
            .send_newsletter(SendRequest {
                newsletter_id: newsletter_id.to_string(),
                test_email,
            })
            .await
            .map_err(|error| {
                warn!(%error, newsletter_id, "campaign send failed");
                LifecycleError::Send(error)
            })?;

        info!(newsletter_id, is_test, "campaign dispatched");
        Ok(())
    }
}

/// Upload one image file and write its public URL into the triggering
/// image block through the normal commit path. Compilation keeps working
/// on the empty `src` while the upload is in flight.
pub async fn upload_image(
    pipeline: &mut Pipeline,
    block_id: &BlockId,
    file_name: &str,
    bytes: Vec<u8>,
    client: &dyn UploadClient,
) -> Result<(), LifecycleError> {
    let asset = client
        .upload(file_name, bytes)
        .await
        .map_err(LifecycleError::Upload)?;

    pipeline.apply(Mutation::UpdateBlock {
        id: block_id.clone(),
        patch: BlockPatch {
            src: Some(asset.url),
            ..BlockPatch::default()
        },
    })?;
    Ok(())
}
