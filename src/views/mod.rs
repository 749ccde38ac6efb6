//! The single page: its sections in order plus the two interactive components.

mod involvement;
mod navbar;
mod preferences;
mod sections;

pub use involvement::*;
pub use navbar::*;
pub use preferences::*;
pub use sections::*;

use crate::api::SiteApi;
use crate::error::ApiError;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Page {
    pub navbar: NavbarState,
    pub navigation: Vec<Link>,
    pub hero: HeroSection,
    pub about: AboutSection,
    pub objectives: ObjectivesSection,
    pub governance: GovernanceSection,
    pub programs: ProgramsSection,
    pub finance: FinanceSection,
    pub involved: GetInvolvedSection,
    pub contact: ContactSection,
    pub footer: FooterSection,
}

impl Page {
    /// Static copy only.
    pub fn fallback(navbar: NavbarState, year: i32) -> Self {
        Page {
            navbar,
            navigation: NAV_ITEMS.to_vec(),
            hero: HeroSection::default(),
            about: AboutSection::default(),
            objectives: ObjectivesSection::default(),
            governance: GovernanceSection::default(),
            programs: ProgramsSection::default(),
            finance: FinanceSection::default(),
            involved: GetInvolvedSection::default(),
            contact: ContactSection::default(),
            footer: FooterSection::for_year(year),
        }
    }

    /// Page with backend data where available. A failed read leaves its
    /// section on static copy.
    pub async fn load(api: &SiteApi, navbar: NavbarState, year: i32) -> Self {
        let (trustees, programs, report, settings) = futures::join!(
            api.trustees(),
            api.featured_programs(),
            api.latest_financial_report(),
            api.site_settings(),
        );
        let trustees = or_fallback("trustees", trustees);
        let programs = or_fallback("featured programs", programs);
        let report = or_fallback("latest financial report", report);
        let settings: BTreeMap<String, String> = or_fallback("site settings", settings);

        Page {
            governance: GovernanceSection::with_trustees(&trustees),
            programs: ProgramsSection::with_programs(&programs),
            finance: FinanceSection::with_report(report.as_ref()),
            contact: ContactSection::with_settings(&settings),
            ..Self::fallback(navbar, year)
        }
    }
}

fn or_fallback<T: Default>(what: &str, result: Result<T, ApiError>) -> T {
    result.unwrap_or_else(|e| {
        tracing::warn!(section = what, error = %e, "using static copy");
        T::default()
    })
}
