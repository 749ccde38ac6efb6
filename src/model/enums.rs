use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InquiryStatus {
    New,
    InProgress,
    Resolved,
    Spam,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InquiryCategory {
    General,
    Volunteer,
    Beneficiary,
    Donation,
    Partnership,
    Media,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DonationType {
    OneTime,
    Recurring,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DonationStatus {
    Pending,
    Completed,
    Failed,
    Refunded,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    CreditCard,
    DebitCard,
    Upi,
    NetBanking,
    Wallet,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolunteerStatus {
    Applied,
    Approved,
    Active,
    Inactive,
    Rejected,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgramStatus {
    Planned,
    Active,
    Completed,
    Suspended,
}

/// The four objectives programs, donations and volunteer interests are tagged with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectiveType {
    WomensWelfare,
    ElderlySupport,
    ScienceInnovation,
    GeneralWelfare,
}

impl ObjectiveType {
    pub const ALL: [ObjectiveType; 4] = [
        ObjectiveType::WomensWelfare,
        ObjectiveType::ElderlySupport,
        ObjectiveType::ScienceInnovation,
        ObjectiveType::GeneralWelfare,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectiveType::WomensWelfare => "womens_welfare",
            ObjectiveType::ElderlySupport => "elderly_support",
            ObjectiveType::ScienceInnovation => "science_innovation",
            ObjectiveType::GeneralWelfare => "general_welfare",
        }
    }
}
