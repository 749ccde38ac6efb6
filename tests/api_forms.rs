mod common;

use common::{api, FakeBackend};
use nazma_trust_web::config;
use nazma_trust_web::error::{ApiError, BackendError};
use nazma_trust_web::model::{
    ContactFormInput, DonationFormInput, DonationStatus, DonationType, InquiryCategory, InquiryStatus,
    NewsletterFormInput, ObjectiveType, VolunteerFormInput, VolunteerStatus,
};
use nazma_trust_web::normalize::{ALREADY_SUBSCRIBED, INVALID_REFERENCE};
use nazma_trust_web::SiteApi;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

fn newsletter(email: &str) -> NewsletterFormInput {
    NewsletterFormInput {
        email: email.into(),
        full_name: None,
        interests: Some(vec![ObjectiveType::ScienceInnovation]),
    }
}

#[tokio::test]
async fn contact_form_is_stored_with_defaults() {
    let backend = Arc::new(FakeBackend::new());
    let input = ContactFormInput {
        full_name: "Asha Das".into(),
        email: "asha@example.org".into(),
        phone: None,
        category: InquiryCategory::Partnership,
        subject: Some("Workshop".into()),
        message: "Can we host a STEM day?".into(),
    };
    let inquiry = api(&backend).submit_contact_form(&input).await.unwrap();
    assert_eq!(inquiry.status, InquiryStatus::New);
    assert_eq!(inquiry.category, InquiryCategory::Partnership);

    let stored = backend.rows(config::CONTACT_INQUIRIES);
    assert_eq!(stored.len(), 1);
    // Absent optionals are not sent at all.
    assert!(stored[0].get("phone").is_none());
}

#[tokio::test]
async fn volunteer_application() {
    let backend = Arc::new(FakeBackend::new());
    let input = VolunteerFormInput {
        full_name: "Ravi".into(),
        email: "ravi@example.org".into(),
        skills: Some(vec!["teaching".into()]),
        interests: Some(vec![ObjectiveType::ElderlySupport]),
        hours_per_week: Some(6),
        ..Default::default()
    };
    let volunteer = api(&backend).submit_volunteer_application(&input).await.unwrap();
    assert_eq!(volunteer.status, VolunteerStatus::Applied);
    assert_eq!(volunteer.interests, Some(vec![ObjectiveType::ElderlySupport]));
    assert_eq!(backend.rows(config::VOLUNTEERS)[0]["interests"], json!(["elderly_support"]));
}

#[tokio::test]
async fn duplicate_subscription_has_its_own_message() {
    let backend = Arc::new(FakeBackend::new());
    let api = api(&backend);
    let first = api.subscribe_newsletter(&newsletter("a@example.org")).await.unwrap();
    assert!(first.is_subscribed);

    let err = api.subscribe_newsletter(&newsletter("a@example.org")).await.unwrap_err();
    assert_eq!(err, ApiError::AlreadySubscribed);
    assert_eq!(err.to_string(), ALREADY_SUBSCRIBED);
}

#[tokio::test]
async fn unique_code_wins_over_message_text() {
    let backend = Arc::new(FakeBackend::new().failing(
        config::NEWSLETTER_SUBSCRIBERS,
        BackendError::new("23505", "something else entirely"),
    ));
    let err = api(&backend).subscribe_newsletter(&newsletter("b@example.org")).await.unwrap_err();
    assert_eq!(err.to_string(), ALREADY_SUBSCRIBED);
}

#[tokio::test]
async fn unsubscribe_keeps_the_row() {
    let backend = Arc::new(FakeBackend::new());
    let api = api(&backend);
    api.subscribe_newsletter(&newsletter("c@example.org")).await.unwrap();

    let sub = api.unsubscribe_newsletter("c@example.org").await.unwrap();
    assert!(!sub.is_subscribed);
    assert!(sub.unsubscription_date.is_some());
    assert_eq!(backend.rows(config::NEWSLETTER_SUBSCRIBERS).len(), 1);
}

#[tokio::test]
async fn unsubscribing_an_unknown_address_is_an_error() {
    let backend = Arc::new(FakeBackend::new());
    let err = api(&backend).unsubscribe_newsletter("nobody@example.org").await.unwrap_err();
    assert_eq!(err.code(), Some("PGRST116"));
}

#[tokio::test]
async fn donation_with_unknown_program_is_an_invalid_reference() {
    let backend = Arc::new(FakeBackend::new().failing(
        config::DONATIONS,
        BackendError::new(
            "23503",
            "insert or update on table \"donations\" violates foreign key constraint \"donations_program_id_fkey\"",
        ),
    ));
    let input = DonationFormInput {
        donor_name: Some("Anon".into()),
        donor_email: None,
        donor_phone: None,
        donor_pan: None,
        amount: 500.0,
        donation_type: DonationType::OneTime,
        allocated_to: None,
        program_id: Some(uuid::Uuid::new_v4()),
        donation_message: None,
        is_anonymous: true,
        recurring_frequency: None,
    };
    let err = api(&backend).create_donation(&input).await.unwrap_err();
    // "violates" is checked before "foreign key".
    assert_ne!(err.to_string(), INVALID_REFERENCE);
    assert_eq!(err.code(), Some("23503"));
}

#[tokio::test]
async fn donation_is_recorded_pending() {
    let backend = Arc::new(FakeBackend::new());
    let input = DonationFormInput {
        donor_name: Some("Meena".into()),
        donor_email: Some("meena@example.org".into()),
        donor_phone: None,
        donor_pan: None,
        amount: 1500.0,
        donation_type: DonationType::OneTime,
        allocated_to: Some(ObjectiveType::WomensWelfare),
        program_id: None,
        donation_message: None,
        is_anonymous: false,
        recurring_frequency: None,
    };
    let donation = api(&backend).create_donation(&input).await.unwrap();
    assert_eq!(donation.status, DonationStatus::Pending);
    assert_eq!(donation.amount, 1500.0);
    assert_eq!(donation.currency, "INR");
}

#[tokio::test]
async fn writes_invalidate_their_entity_only() {
    let backend = Arc::new(FakeBackend::new());
    let api = SiteApi::new(backend.clone(), Duration::from_secs(60));
    api.trustees().await.unwrap();
    assert_eq!(api.cache().len(), 1);

    api.subscribe_newsletter(&newsletter("d@example.org")).await.unwrap();
    // Reads stay cached; the subscriber key had nothing to drop.
    assert_eq!(api.cache().len(), 1);
    api.trustees().await.unwrap();
    assert_eq!(backend.select_count(), 1);
}
