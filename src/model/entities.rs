use super::enums::*;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProgramCategory {
    pub id: Uuid,
    pub objective_type: ObjectiveType,
    pub title: String,
    pub description: String,
    pub icon: Option<String>,
    pub color_scheme: Option<String>,
    pub image_url: Option<String>,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Trustee {
    pub id: Uuid,
    pub full_name: String,
    pub role: String,
    pub bio: Option<String>,
    pub photo_url: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub tenure_start_date: Option<NaiveDate>,
    pub tenure_end_date: Option<NaiveDate>,
    pub display_order: i32,
    pub is_public: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub id: Uuid,
    pub category_id: Uuid,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub short_description: Option<String>,
    pub target_beneficiaries: Option<String>,
    pub status: ProgramStatus,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub image_url: Option<String>,
    pub gallery_urls: Option<Vec<String>>,
    pub location: Option<String>,
    pub budget_allocated: Option<f64>,
    pub budget_spent: Option<f64>,
    pub beneficiaries_count: Option<i64>,
    pub volunteers_needed: Option<i64>,
    pub volunteers_enrolled: Option<i64>,
    pub impact_metrics: Option<Value>,
    pub display_order: i32,
    pub is_featured: bool,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<ProgramCategory>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContactInquiry {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub category: InquiryCategory,
    pub subject: Option<String>,
    pub message: String,
    pub status: InquiryStatus,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub referrer: Option<String>,
    pub assigned_to: Option<Uuid>,
    pub response: Option<String>,
    pub responded_at: Option<DateTime<Utc>>,
    pub is_spam: bool,
    pub spam_score: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Volunteer {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub pincode: Option<String>,
    pub occupation: Option<String>,
    pub organization: Option<String>,
    pub skills: Option<Vec<String>>,
    pub interests: Option<Vec<ObjectiveType>>,
    pub availability: Option<String>,
    pub hours_per_week: Option<i32>,
    pub previous_volunteering_experience: Option<String>,
    pub motivation: Option<String>,
    pub status: VolunteerStatus,
    pub application_date: DateTime<Utc>,
    pub approval_date: Option<DateTime<Utc>>,
    pub approved_by: Option<Uuid>,
    pub total_hours_contributed: Option<f64>,
    pub programs_participated: Option<Vec<Uuid>>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Donation {
    pub id: Uuid,
    pub donor_name: Option<String>,
    pub donor_email: Option<String>,
    pub donor_phone: Option<String>,
    pub donor_pan: Option<String>,
    pub amount: f64,
    pub currency: String,
    pub donation_type: DonationType,
    pub payment_method: Option<PaymentMethod>,
    pub status: DonationStatus,
    pub transaction_id: Option<String>,
    pub payment_gateway: Option<String>,
    pub gateway_order_id: Option<String>,
    pub gateway_payment_id: Option<String>,
    pub gateway_signature: Option<String>,
    pub program_id: Option<Uuid>,
    pub allocated_to: Option<ObjectiveType>,
    pub is_recurring: bool,
    pub recurring_frequency: Option<String>,
    pub recurring_start_date: Option<NaiveDate>,
    pub recurring_end_date: Option<NaiveDate>,
    pub parent_donation_id: Option<Uuid>,
    pub receipt_number: Option<String>,
    pub receipt_issued_date: Option<NaiveDate>,
    pub receipt_url: Option<String>,
    pub is_80g_eligible: bool,
    pub donation_message: Option<String>,
    pub is_anonymous: bool,
    pub ip_address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program: Option<Box<Program>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FinancialReport {
    pub id: Uuid,
    /// Label such as "2023-24"; sorts correctly as text.
    pub fiscal_year: String,
    pub report_type: String,
    pub title: String,
    pub total_income: Option<f64>,
    pub total_expenses: Option<f64>,
    pub opening_balance: Option<f64>,
    pub closing_balance: Option<f64>,
    pub income_breakdown: Option<BTreeMap<String, f64>>,
    pub expense_breakdown: Option<BTreeMap<String, f64>>,
    pub program_allocation: Option<BTreeMap<String, f64>>,
    pub report_url: Option<String>,
    pub audit_report_url: Option<String>,
    pub auditor_name: Option<String>,
    pub audit_firm: Option<String>,
    pub audit_date: Option<NaiveDate>,
    pub audit_status: Option<String>,
    pub fcra_compliance: bool,
    pub section_12a_number: Option<String>,
    pub section_80g_number: Option<String>,
    pub is_published: bool,
    pub published_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewsletterSubscriber {
    pub id: Uuid,
    pub email: String,
    pub full_name: Option<String>,
    pub subscription_source: Option<String>,
    pub interests: Option<Vec<ObjectiveType>>,
    pub is_subscribed: bool,
    pub subscription_date: DateTime<Utc>,
    pub unsubscription_date: Option<DateTime<Utc>>,
    pub email_verified: bool,
    pub verification_token: Option<String>,
    pub verification_sent_at: Option<DateTime<Utc>>,
    pub double_opt_in: bool,
    pub ip_address: Option<String>,
    pub frequency_preference: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: Uuid,
    pub author_name: String,
    pub author_role: Option<String>,
    pub author_photo_url: Option<String>,
    pub author_location: Option<String>,
    pub testimonial_text: String,
    pub rating: Option<i16>,
    pub program_id: Option<Uuid>,
    pub category_id: Option<Uuid>,
    pub is_approved: bool,
    pub approved_by: Option<Uuid>,
    pub approved_at: Option<DateTime<Utc>>,
    pub is_featured: bool,
    pub display_order: i32,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program: Option<Program>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<ProgramCategory>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SiteSetting {
    pub id: Uuid,
    pub setting_key: String,
    pub setting_value: Option<String>,
    pub setting_type: String,
    pub category: Option<String>,
    pub description: Option<String>,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub featured_image_url: Option<String>,
    pub author_id: Option<Uuid>,
    pub category_id: Option<Uuid>,
    pub tags: Option<Vec<String>>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub is_published: bool,
    pub published_date: Option<DateTime<Utc>>,
    pub scheduled_publish_date: Option<DateTime<Utc>>,
    pub view_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Trustee>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<ProgramCategory>,
}
