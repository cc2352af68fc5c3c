use mailsmith_model::Document;
use serde::{Deserialize, Serialize};

/// Persistence status of a campaign record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    Draft,
    Send,
}

/// One composed email tracked through save and send.
///
/// `compiled_html` and `snapshot` are point-in-time copies captured at the
/// last successful save, not live references into the document store.
#[derive(Debug, Clone, PartialEq)]
pub struct Campaign {
    pub subject: String,
    pub compiled_html: String,
    pub snapshot: Document,
    pub status: CampaignStatus,
    /// Identifier assigned by the persistence collaborator on first save
    pub external_id: Option<String>,
    /// Set once the delivery collaborator confirms a campaign send
    pub sent: bool,
}

impl Campaign {
    /// Fresh unsaved campaign, as created when the composer opens
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            compiled_html: String::new(),
            snapshot: Document::default(),
            status: CampaignStatus::Draft,
            external_id: None,
            sent: false,
        }
    }

    pub fn is_saved(&self) -> bool {
        self.external_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_campaign_is_unsaved() {
        let campaign = Campaign::new("Promo");
        assert!(!campaign.is_saved());
        assert!(!campaign.sent);
        assert_eq!(campaign.status, CampaignStatus::Draft);
        assert!(campaign.compiled_html.is_empty());
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&CampaignStatus::Draft).unwrap(),
            "\"draft\""
        );
        assert_eq!(
            serde_json::to_string(&CampaignStatus::Send).unwrap(),
            "\"send\""
        );
    }
}
