//! Referral ("indication") feed and creation form.

use crate::data::{models::avatar_url, Indication, IndicationStatus};
use chrono::{DateTime, Local};
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

/// Why a referral draft cannot be published.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReferralFormError {
    #[error("Title is required")]
    MissingTitle,
    #[error("Description is required")]
    MissingDescription,
    #[error("Choose a segment")]
    MissingSegment,
    #[error("Value must be a whole number")]
    InvalidValue,
}

/// Raw form contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferralDraft {
    pub title: String,
    pub description: String,
    pub segment: String,
    /// Optional reward, digits only
    pub value: String,
}

/// A draft that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReferral {
    pub title: String,
    pub description: String,
    pub segment: String,
    pub value: Option<u64>,
}

impl ReferralDraft {
    pub fn validate(&self) -> Result<NewReferral, ReferralFormError> {
        if self.title.trim().is_empty() {
            return Err(ReferralFormError::MissingTitle);
        }
        if self.description.trim().is_empty() {
            return Err(ReferralFormError::MissingDescription);
        }
        if self.segment.trim().is_empty() {
            return Err(ReferralFormError::MissingSegment);
        }

        let value = self.value.trim();
        let value = if value.is_empty() {
            None
        } else if value.chars().all(|c| c.is_ascii_digit()) {
            Some(
                value
                    .parse::<u64>()
                    .map_err(|_| ReferralFormError::InvalidValue)?,
            )
        } else {
            return Err(ReferralFormError::InvalidValue);
        };

        Ok(NewReferral {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            segment: self.segment.clone(),
            value,
        })
    }
}

impl NewReferral {
    /// Turn into a feed entry authored by `author`: open, no responses yet.
    pub fn into_indication(self, author: &str, timestamp: DateTime<Local>) -> Indication {
        Indication {
            id: Uuid::new_v4().to_string(),
            title: self.title,
            description: self.description,
            segment: self.segment,
            author: author.to_string(),
            author_photo: avatar_url(author.split_whitespace().next().unwrap_or(author)),
            timestamp,
            value: self.value,
            status: IndicationStatus::Open,
            responses: 0,
        }
    }
}

/// Tabs of the referrals screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedTab {
    #[default]
    Feed,
    Mine,
}

impl FeedTab {
    pub fn title(&self) -> &'static str {
        match self {
            FeedTab::Feed => "Opportunity feed",
            FeedTab::Mine => "My referrals",
        }
    }

    pub fn toggle(&self) -> FeedTab {
        match self {
            FeedTab::Feed => FeedTab::Mine,
            FeedTab::Mine => FeedTab::Feed,
        }
    }
}

/// In-memory referral feed for one visit to the screen.
#[derive(Debug, Clone)]
pub struct ReferralFeed {
    items: Vec<Indication>,
    author: String,
}

impl ReferralFeed {
    /// `author` is the local user's name, used for "My referrals".
    pub fn new(items: Vec<Indication>, author: impl Into<String>) -> Self {
        Self {
            items,
            author: author.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    /// Entries shown on `tab`, in feed order
    pub fn visible(&self, tab: FeedTab) -> Vec<&Indication> {
        self.items
            .iter()
            .filter(|item| tab == FeedTab::Feed || item.author == self.author)
            .collect()
    }

    /// Validate `draft` and put the result at the top of the feed.
    pub fn publish(&mut self, draft: &ReferralDraft) -> Result<&Indication, ReferralFormError> {
        let referral = draft.validate()?;
        let indication = referral.into_indication(&self.author, Local::now());
        info!("Referral published: {}", indication.title);
        self.items.insert(0, indication);
        Ok(&self.items[0])
    }
}

/// Age of a post relative to `now`: `Just now`, `Nh ago` or `Nd ago`.
pub fn relative_time(timestamp: &DateTime<Local>, now: &DateTime<Local>) -> String {
    let hours = now.signed_duration_since(*timestamp).num_hours();
    if hours < 1 {
        "Just now".to_string()
    } else if hours < 24 {
        format!("{}h ago", hours)
    } else {
        format!("{}d ago", hours / 24)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{DataProvider, SampleData};
    use chrono::Duration;

    fn draft() -> ReferralDraft {
        ReferralDraft {
            title: "Need a CFO".to_string(),
            description: "Series A company".to_string(),
            segment: "Investimentos".to_string(),
            value: "20000".to_string(),
        }
    }

    #[test]
    fn test_valid_draft() {
        let referral = draft().validate().unwrap();
        assert_eq!(referral.value, Some(20000));
    }

    #[test]
    fn test_required_fields() {
        let mut d = draft();
        d.title = "  ".to_string();
        assert_eq!(d.validate(), Err(ReferralFormError::MissingTitle));

        let mut d = draft();
        d.description.clear();
        assert_eq!(d.validate(), Err(ReferralFormError::MissingDescription));

        let mut d = draft();
        d.segment.clear();
        assert_eq!(d.validate(), Err(ReferralFormError::MissingSegment));
    }

    #[test]
    fn test_value_is_optional_digits() {
        let mut d = draft();
        d.value.clear();
        assert_eq!(d.validate().unwrap().value, None);

        d.value = "12k".to_string();
        assert_eq!(d.validate(), Err(ReferralFormError::InvalidValue));
    }

    #[test]
    fn test_publish_prepends() {
        let profile = SampleData.current_profile();
        let mut feed = ReferralFeed::new(SampleData.list_indications(), &profile.name);
        let before = feed.len();

        let created = feed.publish(&draft()).unwrap();
        assert_eq!(created.status, IndicationStatus::Open);
        assert_eq!(created.responses, 0);
        assert_eq!(created.author, "João Silva");

        assert_eq!(feed.len(), before + 1);
        assert_eq!(feed.visible(FeedTab::Feed)[0].title, "Need a CFO");
        assert_eq!(feed.visible(FeedTab::Mine).len(), 1);
    }

    #[test]
    fn test_publish_error_leaves_feed() {
        let mut feed = ReferralFeed::new(SampleData.list_indications(), "João Silva");
        let result = feed.publish(&ReferralDraft::default());
        assert!(result.is_err());
        assert_eq!(feed.len(), 3);
    }

    #[test]
    fn test_relative_time() {
        let now = Local::now();
        assert_eq!(relative_time(&(now - Duration::minutes(5)), &now), "Just now");
        assert_eq!(relative_time(&(now - Duration::hours(3)), &now), "3h ago");
        assert_eq!(relative_time(&(now - Duration::hours(50)), &now), "2d ago");
    }
}
