//! Copy and view-models for each page section.
//!
//! Sections that show backend data are built from rows when they are available
//! and from the static copy below otherwise.

use crate::model::{FinancialReport, FinancialSummary, InquiryCategory, ObjectiveType, Program, Trustee};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
}

const fn link(label: &'static str, href: &'static str) -> Link {
    Link { label, href }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Card {
    pub title: &'static str,
    pub body: &'static str,
}

const fn card(title: &'static str, body: &'static str) -> Card {
    Card { title, body }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HeroSection {
    pub id: &'static str,
    pub headline: &'static str,
    pub highlight: &'static str,
    pub subheadline: &'static str,
    pub image_alt: &'static str,
    pub actions: Vec<Link>,
}

impl Default for HeroSection {
    fn default() -> Self {
        HeroSection {
            id: "home",
            headline: "Empowering Women, Supporting Elders, Promoting Innovation",
            highlight: "Supporting Elders",
            subheadline: "Dedicated to women's welfare, elderly support, science innovation, and general social welfare through education, health, environment, and disaster relief.",
            image_alt: "Community empowerment",
            actions: vec![
                link("Learn More", "#about"),
                link("Get Involved", "#involved"),
                link("Donate Now", "#involved"),
            ],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AboutSection {
    pub id: &'static str,
    pub heading: &'static str,
    pub summary: &'static str,
    pub values: Vec<Card>,
}

impl Default for AboutSection {
    fn default() -> Self {
        AboutSection {
            id: "about",
            heading: "About Nazma Trust",
            summary: "Founded by Kaosar Ahmed with initial trustees Imrana Begum and Farhana Begum, Nazma Social Development Trust was established under the Indian Trusts Act, 1882. Our vision is to create long-term empowerment, welfare, and innovation for communities across Nagaland and beyond.",
            values: vec![
                card(
                    "Community Focused",
                    "Dedicated to empowering local communities through sustainable development and inclusive programs.",
                ),
                card(
                    "Compassionate Care",
                    "Supporting the most vulnerable members of society with dignity, respect, and genuine care.",
                ),
                card(
                    "Innovation Driven",
                    "Promoting science, technology, and creative solutions to address social challenges.",
                ),
            ],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Objective {
    pub objective_type: ObjectiveType,
    pub title: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
}

impl Objective {
    pub fn of(objective_type: ObjectiveType) -> Self {
        let (title, icon, description) = match objective_type {
            ObjectiveType::WomensWelfare => (
                "Women's Welfare & Empowerment",
                "👩",
                "Skill development programs, vocational training, and entrepreneurship support to empower women economically and socially.",
            ),
            ObjectiveType::ElderlySupport => (
                "Support for the Elderly",
                "🤝",
                "Community support groups, healthcare assistance, and social engagement programs ensuring dignity and care for senior citizens.",
            ),
            ObjectiveType::ScienceInnovation => (
                "Promotion of Science & Innovation",
                "🔬",
                "STEM workshops, innovation labs, and educational programs fostering scientific thinking and technological advancement.",
            ),
            ObjectiveType::GeneralWelfare => (
                "General Social Welfare",
                "🌍",
                "Comprehensive initiatives in education, healthcare, environmental conservation, and disaster relief for community wellbeing.",
            ),
        };
        Objective {
            objective_type,
            title,
            icon,
            description,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ObjectivesSection {
    pub id: &'static str,
    pub heading: &'static str,
    pub tagline: &'static str,
    pub objectives: Vec<Objective>,
}

impl Default for ObjectivesSection {
    fn default() -> Self {
        ObjectivesSection {
            id: "objectives",
            heading: "Our Objectives",
            tagline: "Four pillars of impact driving positive change in our communities",
            objectives: ObjectiveType::ALL.iter().copied().map(Objective::of).collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TrusteeCard {
    pub name: String,
    pub role: String,
    pub bio: Option<String>,
    pub photo_url: Option<String>,
    pub linkedin: Option<String>,
    /// Shown in place of a photo.
    pub initial: String,
}

impl TrusteeCard {
    fn new(name: &str, role: &str, bio: Option<&str>, linkedin: Option<&str>) -> Self {
        TrusteeCard {
            name: name.to_string(),
            role: role.to_string(),
            bio: bio.map(str::to_string),
            photo_url: None,
            linkedin: linkedin.map(str::to_string),
            initial: initial(name),
        }
    }
}

fn initial(name: &str) -> String {
    name.chars().next().map(String::from).unwrap_or_default()
}

impl From<&Trustee> for TrusteeCard {
    fn from(t: &Trustee) -> Self {
        TrusteeCard {
            name: t.full_name.clone(),
            role: t.role.clone(),
            bio: t.bio.clone(),
            photo_url: t.photo_url.clone(),
            linkedin: None,
            initial: initial(&t.full_name),
        }
    }
}

fn founding_trustees() -> Vec<TrusteeCard> {
    vec![
        TrusteeCard::new(
            "Kaosar Ahmed",
            "Founder & Trustee",
            Some("Visionary founder dedicated to social development and community empowerment with years of experience in nonprofit leadership."),
            Some("https://www.linkedin.com/in/kaosar-ahmed-31bba0223"),
        ),
        TrusteeCard::new(
            "Imrana Begum",
            "Chairman",
            Some("Passionate advocate for women's rights and education, bringing extensive knowledge in community development and social welfare."),
            None,
        ),
        TrusteeCard::new(
            "Farhana Begum",
            "Trustee",
            Some("Committed to elderly care and healthcare initiatives, with a strong background in social services and community outreach."),
            None,
        ),
    ]
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GovernanceSection {
    pub id: &'static str,
    pub heading: &'static str,
    pub tagline: &'static str,
    pub trustees: Vec<TrusteeCard>,
    pub structure: Vec<Card>,
}

impl GovernanceSection {
    /// Trustees from the backend; the founding board when there are none.
    pub fn with_trustees(trustees: &[Trustee]) -> Self {
        let mut section = Self::default();
        if !trustees.is_empty() {
            section.trustees = trustees.iter().map(TrusteeCard::from).collect();
        }
        section
    }
}

impl Default for GovernanceSection {
    fn default() -> Self {
        GovernanceSection {
            id: "governance",
            heading: "Our Governance",
            tagline: "Transparent leadership committed to accountability and impact",
            trustees: founding_trustees(),
            structure: vec![
                card(
                    "Roles & Responsibilities",
                    "Trustee roles rotate annually among Chairman, Secretary, and Treasurer to ensure shared leadership and diverse perspectives.",
                ),
                card(
                    "Decision Making",
                    "All decisions are made by consensus or majority vote with proper quorum rules, ensuring democratic and transparent governance.",
                ),
            ],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProgramCard {
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub impact: Option<String>,
    pub category: Option<String>,
    pub slug: Option<String>,
}

impl From<&Program> for ProgramCard {
    fn from(p: &Program) -> Self {
        ProgramCard {
            title: p.title.clone(),
            description: p.short_description.clone().unwrap_or_else(|| p.description.clone()),
            image_url: p.image_url.clone(),
            impact: p
                .beneficiaries_count
                .filter(|n| *n > 0)
                .map(|n| format!("{}+ beneficiaries", n)),
            category: p.category.as_ref().map(|c| c.title.clone()),
            slug: Some(p.slug.clone()),
        }
    }
}

fn static_program(title: &str, description: &str, impact: &str, category: &str) -> ProgramCard {
    ProgramCard {
        title: title.to_string(),
        description: description.to_string(),
        image_url: None,
        impact: Some(impact.to_string()),
        category: Some(category.to_string()),
        slug: None,
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProgramsSection {
    pub id: &'static str,
    pub heading: &'static str,
    pub tagline: &'static str,
    pub programs: Vec<ProgramCard>,
}

impl ProgramsSection {
    /// Featured programs from the backend; the flagship programs when there are none.
    pub fn with_programs(programs: &[Program]) -> Self {
        let mut section = Self::default();
        if !programs.is_empty() {
            section.programs = programs.iter().map(ProgramCard::from).collect();
        }
        section
    }
}

impl Default for ProgramsSection {
    fn default() -> Self {
        ProgramsSection {
            id: "programs",
            heading: "Activities & Programs",
            tagline: "Real impact through dedicated programs and community initiatives",
            programs: vec![
                static_program(
                    "Women Skill Training",
                    "Comprehensive vocational training programs in tailoring, crafts, and entrepreneurship, helping women build sustainable livelihoods and financial independence.",
                    "200+ women trained",
                    "Empowerment",
                ),
                static_program(
                    "Elderly Support Groups",
                    "Regular community gatherings, healthcare support, and social activities creating a supportive network for senior citizens to maintain active and fulfilling lives.",
                    "150+ seniors supported",
                    "Care",
                ),
                static_program(
                    "STEM Workshops",
                    "Hands-on science, technology, engineering, and mathematics programs inspiring young minds to innovate and develop problem-solving skills for the future.",
                    "500+ students reached",
                    "Education",
                ),
            ],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FinanceSection {
    pub id: &'static str,
    pub heading: &'static str,
    pub tagline: &'static str,
    pub pillars: Vec<Card>,
    pub registration: &'static str,
    /// Figures from the latest published report, when there is one.
    pub latest_report: Option<FinancialSummary>,
    pub report_url: Option<String>,
}

impl FinanceSection {
    pub fn with_report(report: Option<&FinancialReport>) -> Self {
        FinanceSection {
            latest_report: report.map(FinancialSummary::from),
            report_url: report.and_then(|r| r.report_url.clone()),
            ..Self::default()
        }
    }
}

impl Default for FinanceSection {
    fn default() -> Self {
        FinanceSection {
            id: "finance",
            heading: "Financial Transparency",
            tagline: "Building trust through complete financial accountability",
            pillars: vec![
                card(
                    "Initial Corpus",
                    "Trust established with an initial corpus of ₹2,000, demonstrating our commitment to sustainable growth.",
                ),
                card(
                    "Fund Utilization",
                    "100% of income is applied directly to charitable objectives, ensuring maximum impact for our beneficiaries.",
                ),
                card(
                    "Annual Reports",
                    "Detailed financial statements and impact reports published annually for complete transparency.",
                ),
                card(
                    "Audit & Compliance",
                    "Regular audits and full compliance with all statutory requirements and governance standards.",
                ),
            ],
            registration: REGISTRATION,
            latest_report: None,
            report_url: None,
        }
    }
}

const REGISTRATION: &str = "Registered under the Indian Trusts Act, 1882";

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ContactSection {
    pub id: &'static str,
    pub heading: &'static str,
    pub tagline: &'static str,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    /// Choices offered by the contact form.
    pub categories: Vec<InquiryCategory>,
}

impl ContactSection {
    pub const EMAIL_KEY: &'static str = "contact_email";
    pub const PHONE_KEY: &'static str = "contact_phone";
    pub const ADDRESS_KEY: &'static str = "contact_address";

    /// Contact details come from site settings; empty values are left out.
    pub fn with_settings(settings: &BTreeMap<String, String>) -> Self {
        let get = |key: &str| settings.get(key).filter(|v| !v.is_empty()).cloned();
        ContactSection {
            email: get(Self::EMAIL_KEY),
            phone: get(Self::PHONE_KEY),
            address: get(Self::ADDRESS_KEY),
            ..Self::default()
        }
    }
}

impl Default for ContactSection {
    fn default() -> Self {
        ContactSection {
            id: "contact",
            heading: "Contact Us",
            tagline: "Reach out with questions, partnership ideas, or to learn how you can help",
            email: None,
            phone: None,
            address: None,
            categories: vec![
                InquiryCategory::General,
                InquiryCategory::Volunteer,
                InquiryCategory::Beneficiary,
                InquiryCategory::Donation,
                InquiryCategory::Partnership,
                InquiryCategory::Media,
            ],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FooterSection {
    pub name: &'static str,
    pub tagline: &'static str,
    pub quick_links: Vec<Link>,
    pub registration: &'static str,
    pub jurisdiction: &'static str,
    pub copyright: String,
    pub dissolution: &'static str,
    pub back_to_top: Link,
}

impl FooterSection {
    pub fn for_year(year: i32) -> Self {
        FooterSection {
            name: "Nazma Trust",
            tagline: "Empowering communities through women's welfare, elderly support, science innovation, and social welfare initiatives.",
            quick_links: vec![
                link("About Us", "#about"),
                link("Programs", "#programs"),
                link("Get Involved", "#involved"),
                link("Contact", "#contact"),
            ],
            registration: REGISTRATION,
            jurisdiction: "Courts of Dimapur, Nagaland",
            copyright: format!("© {} Nazma Social Development Trust. All rights reserved.", year),
            dissolution: "Upon dissolution, all assets will be transferred to another charitable trust or government agency committed to similar objectives.",
            back_to_top: link("Back to Top", "#home"),
        }
    }
}
