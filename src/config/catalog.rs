//! Static catalog of the backend tables and procedures this site touches.
//!
//! The schema itself is owned by the backend; the catalog only records what is
//! needed to check identifiers before a request is built and to render SQL for
//! the direct Postgres backend.

/// Join between a table and a related row (we hold the FK, they hold the PK).
#[derive(Clone, Copy, Debug)]
pub struct Relation {
    /// Name of the embedded field in result rows (e.g. "category").
    pub name: &'static str,
    pub related_table: &'static str,
    /// Our column used in the join.
    pub our_key_column: &'static str,
    /// Their column used in the join.
    pub their_key_column: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct ColumnDef {
    pub name: &'static str,
    /// PostgreSQL type name for SQL casts when binding text values.
    pub pg_type: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct TableDef {
    pub name: &'static str,
    pub columns: &'static [ColumnDef],
    pub relations: &'static [Relation],
}

impl TableDef {
    pub fn column(&self, name: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn relation(&self, name: &str) -> Option<&Relation> {
        self.relations.iter().find(|r| r.name == name)
    }
}

/// What a procedure hands back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Returns {
    /// A single json/jsonb value.
    Json,
    /// A set of rows, returned as a JSON array.
    Rows,
    Void,
}

#[derive(Clone, Copy, Debug)]
pub struct ProcedureDef {
    pub name: &'static str,
    pub args: &'static [ColumnDef],
    pub returns: Returns,
}

const fn col(name: &'static str, pg_type: &'static str) -> ColumnDef {
    ColumnDef { name, pg_type }
}

const fn rel(
    name: &'static str,
    related_table: &'static str,
    our_key_column: &'static str,
    their_key_column: &'static str,
) -> Relation {
    Relation {
        name,
        related_table,
        our_key_column,
        their_key_column,
    }
}

pub const PROGRAM_CATEGORIES: &str = "program_categories";
pub const PROGRAMS: &str = "programs";
pub const TRUSTEES: &str = "trustees";
pub const FINANCIAL_REPORTS: &str = "financial_reports";
pub const TESTIMONIALS: &str = "testimonials";
pub const BLOG_POSTS: &str = "blog_posts";
pub const SITE_SETTINGS: &str = "site_settings";
pub const CONTACT_INQUIRIES: &str = "contact_inquiries";
pub const VOLUNTEERS: &str = "volunteers";
pub const DONATIONS: &str = "donations";
pub const NEWSLETTER_SUBSCRIBERS: &str = "newsletter_subscribers";

pub const GET_DONATION_STATS: &str = "get_donation_stats";
pub const GET_PROGRAM_IMPACT: &str = "get_program_impact";
pub const SEARCH_PROGRAMS: &str = "search_programs";
pub const INCREMENT_BLOG_VIEW_COUNT: &str = "increment_blog_view_count";

const TIMESTAMPS: [ColumnDef; 2] = [col("created_at", "timestamptz"), col("updated_at", "timestamptz")];

pub static TABLES: &[TableDef] = &[
    TableDef {
        name: PROGRAM_CATEGORIES,
        columns: &[
            col("id", "uuid"),
            col("objective_type", "objective_type"),
            col("title", "text"),
            col("description", "text"),
            col("icon", "text"),
            col("color_scheme", "text"),
            col("image_url", "text"),
            col("display_order", "int4"),
            col("is_active", "bool"),
            TIMESTAMPS[0],
            TIMESTAMPS[1],
        ],
        relations: &[],
    },
    TableDef {
        name: PROGRAMS,
        columns: &[
            col("id", "uuid"),
            col("category_id", "uuid"),
            col("title", "text"),
            col("slug", "text"),
            col("description", "text"),
            col("short_description", "text"),
            col("target_beneficiaries", "text"),
            col("status", "program_status"),
            col("start_date", "date"),
            col("end_date", "date"),
            col("image_url", "text"),
            col("gallery_urls", "text[]"),
            col("location", "text"),
            col("budget_allocated", "numeric"),
            col("budget_spent", "numeric"),
            col("beneficiaries_count", "int8"),
            col("volunteers_needed", "int8"),
            col("volunteers_enrolled", "int8"),
            col("impact_metrics", "jsonb"),
            col("display_order", "int4"),
            col("is_featured", "bool"),
            col("is_public", "bool"),
            TIMESTAMPS[0],
            TIMESTAMPS[1],
        ],
        relations: &[rel("category", PROGRAM_CATEGORIES, "category_id", "id")],
    },
    TableDef {
        name: TRUSTEES,
        columns: &[
            col("id", "uuid"),
            col("full_name", "text"),
            col("role", "text"),
            col("bio", "text"),
            col("photo_url", "text"),
            col("email", "text"),
            col("phone", "text"),
            col("tenure_start_date", "date"),
            col("tenure_end_date", "date"),
            col("display_order", "int4"),
            col("is_public", "bool"),
            col("is_active", "bool"),
            TIMESTAMPS[0],
            TIMESTAMPS[1],
        ],
        relations: &[],
    },
    TableDef {
        name: FINANCIAL_REPORTS,
        columns: &[
            col("id", "uuid"),
            col("fiscal_year", "text"),
            col("report_type", "text"),
            col("title", "text"),
            col("total_income", "numeric"),
            col("total_expenses", "numeric"),
            col("opening_balance", "numeric"),
            col("closing_balance", "numeric"),
            col("income_breakdown", "jsonb"),
            col("expense_breakdown", "jsonb"),
            col("program_allocation", "jsonb"),
            col("report_url", "text"),
            col("audit_report_url", "text"),
            col("auditor_name", "text"),
            col("audit_firm", "text"),
            col("audit_date", "date"),
            col("audit_status", "text"),
            col("fcra_compliance", "bool"),
            col("section_12a_number", "text"),
            col("section_80g_number", "text"),
            col("is_published", "bool"),
            col("published_date", "date"),
            TIMESTAMPS[0],
            TIMESTAMPS[1],
        ],
        relations: &[],
    },
    TableDef {
        name: TESTIMONIALS,
        columns: &[
            col("id", "uuid"),
            col("author_name", "text"),
            col("author_role", "text"),
            col("author_photo_url", "text"),
            col("author_location", "text"),
            col("testimonial_text", "text"),
            col("rating", "int2"),
            col("program_id", "uuid"),
            col("category_id", "uuid"),
            col("is_approved", "bool"),
            col("approved_by", "uuid"),
            col("approved_at", "timestamptz"),
            col("is_featured", "bool"),
            col("display_order", "int4"),
            col("is_public", "bool"),
            TIMESTAMPS[0],
            TIMESTAMPS[1],
        ],
        relations: &[
            rel("program", PROGRAMS, "program_id", "id"),
            rel("category", PROGRAM_CATEGORIES, "category_id", "id"),
        ],
    },
    TableDef {
        name: BLOG_POSTS,
        columns: &[
            col("id", "uuid"),
            col("title", "text"),
            col("slug", "text"),
            col("excerpt", "text"),
            col("content", "text"),
            col("featured_image_url", "text"),
            col("author_id", "uuid"),
            col("category_id", "uuid"),
            col("tags", "text[]"),
            col("meta_title", "text"),
            col("meta_description", "text"),
            col("is_published", "bool"),
            col("published_date", "timestamptz"),
            col("scheduled_publish_date", "timestamptz"),
            col("view_count", "int8"),
            TIMESTAMPS[0],
            TIMESTAMPS[1],
        ],
        relations: &[
            rel("author", TRUSTEES, "author_id", "id"),
            rel("category", PROGRAM_CATEGORIES, "category_id", "id"),
        ],
    },
    TableDef {
        name: SITE_SETTINGS,
        columns: &[
            col("id", "uuid"),
            col("setting_key", "text"),
            col("setting_value", "text"),
            col("setting_type", "text"),
            col("category", "text"),
            col("description", "text"),
            col("is_public", "bool"),
            TIMESTAMPS[0],
            TIMESTAMPS[1],
        ],
        relations: &[],
    },
    TableDef {
        name: CONTACT_INQUIRIES,
        columns: &[
            col("id", "uuid"),
            col("full_name", "text"),
            col("email", "text"),
            col("phone", "text"),
            col("category", "inquiry_category"),
            col("subject", "text"),
            col("message", "text"),
            col("status", "inquiry_status"),
            col("ip_address", "text"),
            col("user_agent", "text"),
            col("referrer", "text"),
            col("assigned_to", "uuid"),
            col("response", "text"),
            col("responded_at", "timestamptz"),
            col("is_spam", "bool"),
            col("spam_score", "numeric"),
            TIMESTAMPS[0],
            TIMESTAMPS[1],
        ],
        relations: &[],
    },
    TableDef {
        name: VOLUNTEERS,
        columns: &[
            col("id", "uuid"),
            col("full_name", "text"),
            col("email", "text"),
            col("phone", "text"),
            col("date_of_birth", "date"),
            col("address", "text"),
            col("city", "text"),
            col("state", "text"),
            col("pincode", "text"),
            col("occupation", "text"),
            col("organization", "text"),
            col("skills", "text[]"),
            col("interests", "objective_type[]"),
            col("availability", "text"),
            col("hours_per_week", "int4"),
            col("previous_volunteering_experience", "text"),
            col("motivation", "text"),
            col("status", "volunteer_status"),
            col("application_date", "timestamptz"),
            col("approval_date", "timestamptz"),
            col("approved_by", "uuid"),
            col("total_hours_contributed", "numeric"),
            col("programs_participated", "uuid[]"),
            col("emergency_contact_name", "text"),
            col("emergency_contact_phone", "text"),
            col("is_active", "bool"),
            TIMESTAMPS[0],
            TIMESTAMPS[1],
        ],
        relations: &[],
    },
    TableDef {
        name: DONATIONS,
        columns: &[
            col("id", "uuid"),
            col("donor_name", "text"),
            col("donor_email", "text"),
            col("donor_phone", "text"),
            col("donor_pan", "text"),
            col("amount", "numeric"),
            col("currency", "text"),
            col("donation_type", "donation_type"),
            col("payment_method", "payment_method"),
            col("status", "donation_status"),
            col("transaction_id", "text"),
            col("payment_gateway", "text"),
            col("gateway_order_id", "text"),
            col("gateway_payment_id", "text"),
            col("gateway_signature", "text"),
            col("program_id", "uuid"),
            col("allocated_to", "objective_type"),
            col("is_recurring", "bool"),
            col("recurring_frequency", "text"),
            col("recurring_start_date", "date"),
            col("recurring_end_date", "date"),
            col("parent_donation_id", "uuid"),
            col("receipt_number", "text"),
            col("receipt_issued_date", "date"),
            col("receipt_url", "text"),
            col("is_80g_eligible", "bool"),
            col("donation_message", "text"),
            col("is_anonymous", "bool"),
            col("ip_address", "text"),
            TIMESTAMPS[0],
            TIMESTAMPS[1],
        ],
        relations: &[rel("program", PROGRAMS, "program_id", "id")],
    },
    TableDef {
        name: NEWSLETTER_SUBSCRIBERS,
        columns: &[
            col("id", "uuid"),
            col("email", "text"),
            col("full_name", "text"),
            col("subscription_source", "text"),
            col("interests", "objective_type[]"),
            col("is_subscribed", "bool"),
            col("subscription_date", "timestamptz"),
            col("unsubscription_date", "timestamptz"),
            col("email_verified", "bool"),
            col("verification_token", "text"),
            col("verification_sent_at", "timestamptz"),
            col("double_opt_in", "bool"),
            col("ip_address", "text"),
            col("frequency_preference", "text"),
            TIMESTAMPS[0],
            TIMESTAMPS[1],
        ],
        relations: &[],
    },
];

pub static PROCEDURES: &[ProcedureDef] = &[
    ProcedureDef {
        name: GET_DONATION_STATS,
        args: &[col("start_date", "timestamptz"), col("end_date", "timestamptz")],
        returns: Returns::Json,
    },
    ProcedureDef {
        name: GET_PROGRAM_IMPACT,
        args: &[],
        returns: Returns::Json,
    },
    ProcedureDef {
        name: SEARCH_PROGRAMS,
        args: &[col("search_term", "text")],
        returns: Returns::Rows,
    },
    ProcedureDef {
        name: INCREMENT_BLOG_VIEW_COUNT,
        args: &[col("post_id", "uuid")],
        returns: Returns::Void,
    },
];

pub fn table(name: &str) -> Option<&'static TableDef> {
    TABLES.iter().find(|t| t.name == name)
}

pub fn procedure(name: &str) -> Option<&'static ProcedureDef> {
    PROCEDURES.iter().find(|p| p.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relations_point_at_known_tables() {
        for t in TABLES {
            for r in t.relations {
                let related = table(r.related_table).expect("related table in catalog");
                assert!(t.column(r.our_key_column).is_some(), "{}.{}", t.name, r.our_key_column);
                assert!(related.column(r.their_key_column).is_some());
            }
        }
    }

    #[test]
    fn every_table_has_an_id() {
        for t in TABLES {
            assert_eq!(t.column("id").map(|c| c.pg_type), Some("uuid"), "{}", t.name);
        }
    }

    #[test]
    fn lookup_by_name() {
        assert!(table(BLOG_POSTS).and_then(|t| t.relation("author")).is_some());
        assert_eq!(procedure(SEARCH_PROGRAMS).map(|p| p.returns), Some(Returns::Rows));
        assert!(table("users").is_none());
    }
}
