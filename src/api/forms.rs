use super::{decode, keys, SiteApi};
use crate::backend;
use crate::config::{CONTACT_INQUIRIES, DONATIONS, NEWSLETTER_SUBSCRIBERS, VOLUNTEERS};
use crate::error::{ApiError, BackendError, UNIQUE_VIOLATION};
use crate::model::{
    ContactFormInput, ContactInquiry, Donation, DonationFormInput, NewsletterFormInput,
    NewsletterSubscriber, Volunteer, VolunteerFormInput,
};
use crate::query::{Insert, Update};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde_json::{json, Value};

impl SiteApi {
    async fn insert_one<T: Serialize>(&self, table: &str, input: &T) -> Result<Value, BackendError> {
        let row = serde_json::to_value(input).map_err(|e| BackendError::new("PGRST102", e.to_string()))?;
        let insert = Insert::new(table, row)?;
        tracing::debug!(table, "insert");
        backend::single(self.backend.insert(&insert).await?)
    }

    pub async fn submit_contact_form(&self, input: &ContactFormInput) -> Result<ContactInquiry, ApiError> {
        let row = self.insert_one(CONTACT_INQUIRIES, input).await?;
        self.cache.invalidate(keys::CONTACT_INQUIRIES);
        decode(row)
    }

    pub async fn submit_volunteer_application(&self, input: &VolunteerFormInput) -> Result<Volunteer, ApiError> {
        let row = self.insert_one(VOLUNTEERS, input).await?;
        self.cache.invalidate(keys::VOLUNTEERS);
        decode(row)
    }

    /// A second subscription for the same address reports
    /// [`ApiError::AlreadySubscribed`] whatever the backend's wording.
    pub async fn subscribe_newsletter(&self, input: &NewsletterFormInput) -> Result<NewsletterSubscriber, ApiError> {
        let row = match self.insert_one(NEWSLETTER_SUBSCRIBERS, input).await {
            Ok(row) => row,
            Err(e) if e.has_code(UNIQUE_VIOLATION) => return Err(ApiError::AlreadySubscribed),
            Err(e) => return Err(e.into()),
        };
        self.cache.invalidate(keys::NEWSLETTER_SUBSCRIBERS);
        decode(row)
    }

    /// Marks the subscription inactive; the row is kept.
    pub async fn unsubscribe_newsletter(&self, email: &str) -> Result<NewsletterSubscriber, ApiError> {
        let now = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        let update = Update::new(
            NEWSLETTER_SUBSCRIBERS,
            json!({ "is_subscribed": false, "unsubscription_date": now }),
        )?
        .eq("email", email)?;
        tracing::debug!(table = NEWSLETTER_SUBSCRIBERS, "update");
        let row = backend::single(self.backend.update(&update).await?)?;
        self.cache.invalidate(keys::NEWSLETTER_SUBSCRIBERS);
        decode(row)
    }

    /// Records a donation. Payment is taken elsewhere; call this once it has succeeded.
    pub async fn create_donation(&self, input: &DonationFormInput) -> Result<Donation, ApiError> {
        let row = self.insert_one(DONATIONS, input).await?;
        self.cache.invalidate(keys::DONATIONS);
        decode(row)
    }
}
