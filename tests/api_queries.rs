mod common;

use common::{api, category, post, program, report, setting, testimonial, trustee, FakeBackend};
use nazma_trust_web::config;
use nazma_trust_web::error::{ApiError, BackendError};
use nazma_trust_web::normalize::{GENERIC_FAILURE, PERMISSION_DENIED};
use nazma_trust_web::SiteApi;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

#[tokio::test]
async fn only_active_categories_in_display_order() {
    let backend = Arc::new(FakeBackend::new().with_rows(
        config::PROGRAM_CATEGORIES,
        vec![
            category("Elderly Support", "elderly_support", 2, true),
            category("Archived", "general_welfare", 0, false),
            category("Women's Welfare", "womens_welfare", 1, true),
        ],
    ));
    let categories = api(&backend).program_categories().await.unwrap();
    let titles: Vec<_> = categories.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["Women's Welfare", "Elderly Support"]);
}

#[tokio::test]
async fn programs_embed_category_and_filter_by_it() {
    let women = category("Women's Welfare", "womens_welfare", 1, true);
    let stem = category("Science", "science_innovation", 2, true);
    let backend = Arc::new(
        FakeBackend::new()
            .with_rows(config::PROGRAM_CATEGORIES, vec![women.clone(), stem.clone()])
            .with_rows(
                config::PROGRAMS,
                vec![
                    program(&stem, "STEM Workshops", "stem", 2, true, true),
                    program(&women, "Skill Training", "skills", 1, true, true),
                    program(&women, "Draft", "draft", 0, false, false),
                ],
            ),
    );
    let api = api(&backend);

    let all = api.programs(None).await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].slug, "skills");
    assert_eq!(all[0].category.as_ref().map(|c| c.title.as_str()), Some("Women's Welfare"));

    let id = stem["id"].as_str().unwrap().parse().unwrap();
    let only_stem = api.programs(Some(id)).await.unwrap();
    let slugs: Vec<_> = only_stem.iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(slugs, vec!["stem"]);
}

#[tokio::test]
async fn featured_programs_are_capped_at_three() {
    let c = category("General", "general_welfare", 1, true);
    let rows = (0..5)
        .map(|i| program(&c, &format!("P{}", i), &format!("p{}", i), i, true, true))
        .collect();
    let backend = Arc::new(
        FakeBackend::new()
            .with_rows(config::PROGRAM_CATEGORIES, vec![c.clone()])
            .with_rows(config::PROGRAMS, rows),
    );
    let featured = api(&backend).featured_programs().await.unwrap();
    let slugs: Vec<_> = featured.iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(slugs, vec!["p0", "p1", "p2"]);
}

#[tokio::test]
async fn program_by_slug() {
    let c = category("General", "general_welfare", 1, true);
    let backend = Arc::new(
        FakeBackend::new()
            .with_rows(config::PROGRAM_CATEGORIES, vec![c.clone()])
            .with_rows(config::PROGRAMS, vec![program(&c, "Relief", "relief", 1, false, true)]),
    );
    let api = api(&backend);
    let found = api.program("relief").await.unwrap().unwrap();
    assert_eq!(found.title, "Relief");

    let err = api.program("missing").await.unwrap_err();
    assert_eq!(err.code(), Some("PGRST116"));
}

#[tokio::test]
async fn empty_slug_is_not_looked_up() {
    let backend = Arc::new(FakeBackend::new());
    let api = api(&backend);
    assert_eq!(api.program("").await.unwrap(), None);
    assert_eq!(api.blog_post("").await.unwrap(), None);
    assert_eq!(backend.select_count(), 0);
    assert!(backend.rpc_calls().is_empty());
}

#[tokio::test]
async fn trustees_must_be_public_and_active() {
    let backend = Arc::new(FakeBackend::new().with_rows(
        config::TRUSTEES,
        vec![
            trustee("Imrana Begum", "Chairman", 2, true, true),
            trustee("Former Trustee", "Trustee", 1, true, false),
            trustee("Kaosar Ahmed", "Founder & Trustee", 1, true, true),
            trustee("Private", "Treasurer", 0, false, true),
        ],
    ));
    let names: Vec<_> = api(&backend)
        .trustees()
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.full_name)
        .collect();
    assert_eq!(names, vec!["Kaosar Ahmed", "Imrana Begum"]);
}

#[tokio::test]
async fn financial_reports_newest_first() {
    let backend = Arc::new(FakeBackend::new().with_rows(
        config::FINANCIAL_REPORTS,
        vec![
            report("2022-23", true, 1000.0, 800.0),
            report("2024-25", false, 0.0, 0.0),
            report("2023-24", true, 2500.0, 2000.0),
        ],
    ));
    let api = api(&backend);
    let years: Vec<_> = api
        .financial_reports()
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.fiscal_year)
        .collect();
    assert_eq!(years, vec!["2023-24", "2022-23"]);

    let latest = api.latest_financial_report().await.unwrap().unwrap();
    assert_eq!(latest.fiscal_year, "2023-24");
}

#[tokio::test]
async fn latest_report_is_none_when_nothing_is_published() {
    let backend = Arc::new(
        FakeBackend::new().with_rows(config::FINANCIAL_REPORTS, vec![report("2024-25", false, 0.0, 0.0)]),
    );
    assert_eq!(api(&backend).latest_financial_report().await.unwrap(), None);
}

#[tokio::test]
async fn report_errors_are_normalized() {
    let backend = Arc::new(FakeBackend::new().failing(
        config::FINANCIAL_REPORTS,
        BackendError::new("42501", "permission denied for table financial_reports"),
    ));
    let api = api(&backend);
    let err = api.financial_reports().await.unwrap_err();
    assert_eq!(err.to_string(), PERMISSION_DENIED);
    // Only "no rows" becomes None; other failures still surface.
    assert!(api.latest_financial_report().await.is_err());
}

#[tokio::test]
async fn malformed_filter_surfaces_backend_message() {
    let backend = Arc::new(FakeBackend::new().failing(
        config::FINANCIAL_REPORTS,
        BackendError::new("22P02", "invalid input syntax for type boolean: \"yes\""),
    ));
    let err = api(&backend).financial_reports().await.unwrap_err();
    assert_eq!(
        err,
        ApiError::Backend {
            message: "invalid input syntax for type boolean: \"yes\"".into(),
            code: Some("22P02".into()),
        }
    );
}

#[tokio::test]
async fn error_without_message_uses_generic_copy() {
    let backend = Arc::new(FakeBackend::new().failing(
        config::TRUSTEES,
        BackendError {
            code: Some("500".into()),
            ..Default::default()
        },
    ));
    let err = api(&backend).trustees().await.unwrap_err();
    assert_eq!(err.to_string(), GENERIC_FAILURE);
}

#[tokio::test]
async fn testimonials_embed_program() {
    let c = category("General", "general_welfare", 1, true);
    let p = program(&c, "Relief", "relief", 1, false, true);
    let backend = Arc::new(
        FakeBackend::new()
            .with_rows(config::PROGRAM_CATEGORIES, vec![c.clone()])
            .with_rows(config::PROGRAMS, vec![p.clone()])
            .with_rows(
                config::TESTIMONIALS,
                vec![
                    testimonial("Unapproved", None, false, 0),
                    testimonial("Asha", Some(&p), true, 1),
                ],
            ),
    );
    let list = api(&backend).testimonials().await.unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].program.as_ref().map(|p| p.slug.as_str()), Some("relief"));
    assert!(list[0].category.is_none());
}

#[tokio::test]
async fn blog_posts_hide_future_and_unpublished() {
    let author = trustee("Kaosar Ahmed", "Founder & Trustee", 1, true, true);
    let backend = Arc::new(
        FakeBackend::new()
            .with_rows(config::TRUSTEES, vec![author.clone()])
            .with_rows(
                config::BLOG_POSTS,
                vec![
                    post("Older", "older", true, "2024-02-01T00:00:00+00:00", Some(&author)),
                    post("Scheduled", "scheduled", true, "2999-01-01T00:00:00+00:00", None),
                    post("Newer", "newer", true, "2025-06-01T00:00:00+00:00", None),
                    post("Draft", "draft", false, "2024-01-01T00:00:00+00:00", None),
                ],
            ),
    );
    let posts = api(&backend).blog_posts().await.unwrap();
    let slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(slugs, vec!["newer", "older"]);
    assert_eq!(posts[1].author.as_ref().map(|a| a.full_name.as_str()), Some("Kaosar Ahmed"));
}

#[tokio::test]
async fn blog_post_counts_one_view_per_fetch() {
    let p = post("Hello", "hello", true, "2025-01-01T00:00:00+00:00", None);
    let backend = Arc::new(FakeBackend::new().with_rows(config::BLOG_POSTS, vec![p.clone()]));
    let api = api(&backend);

    let fetched = api.blog_post("hello").await.unwrap().unwrap();
    assert_eq!(fetched.title, "Hello");
    api.blog_post("hello").await.unwrap();

    let calls = backend.rpc_calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].0, config::INCREMENT_BLOG_VIEW_COUNT);
    assert_eq!(calls[0].1, json!({ "post_id": p["id"] }));
}

#[tokio::test]
async fn failed_view_increment_does_not_change_the_post() {
    let p = post("Hello", "hello", true, "2025-01-01T00:00:00+00:00", None);
    let ok = Arc::new(FakeBackend::new().with_rows(config::BLOG_POSTS, vec![p.clone()]));
    let failing = Arc::new(
        FakeBackend::new()
            .with_rows(config::BLOG_POSTS, vec![p])
            .with_rpc(
                config::INCREMENT_BLOG_VIEW_COUNT,
                Err(BackendError::new("42501", "permission denied for function increment_blog_view_count")),
            ),
    );
    let a = api(&ok).blog_post("hello").await.unwrap();
    let b = api(&failing).blog_post("hello").await.unwrap();
    assert_eq!(a, b);
    assert_eq!(failing.rpc_calls().len(), 1);
}

#[tokio::test]
async fn cached_blog_post_still_counts_each_view() {
    let p = post("Hello", "hello", true, "2025-01-01T00:00:00+00:00", None);
    let backend = Arc::new(FakeBackend::new().with_rows(config::BLOG_POSTS, vec![p.clone()]));
    let api = SiteApi::new(backend.clone(), Duration::from_secs(30));
    for _ in 0..5 {
        api.blog_post("hello").await.unwrap();
    }
    assert_eq!(backend.select_count(), 1);
    let calls = backend.rpc_calls();
    assert_eq!(calls.len(), 5);
    assert!(calls
        .iter()
        .all(|(name, args)| name == config::INCREMENT_BLOG_VIEW_COUNT && args == &json!({ "post_id": p["id"] })));
}

#[tokio::test]
async fn settings_fold_to_map() {
    let backend = Arc::new(FakeBackend::new().with_rows(
        config::SITE_SETTINGS,
        vec![
            setting("contact_email", Some("info@nazmatrust.org"), true),
            setting("contact_phone", None, true),
            setting("smtp_password", Some("secret"), false),
        ],
    ));
    let settings = api(&backend).site_settings().await.unwrap();
    assert_eq!(settings.get("contact_email").map(String::as_str), Some("info@nazmatrust.org"));
    assert_eq!(settings.get("contact_phone").map(String::as_str), Some(""));
    assert!(!settings.contains_key("smtp_password"));
}

#[tokio::test]
async fn short_search_terms_never_reach_the_backend() {
    let backend = Arc::new(FakeBackend::new());
    let api = api(&backend);
    for term in ["", "a", "ab", "नज"] {
        assert_eq!(api.search_programs(term).await.unwrap(), None);
    }
    assert!(backend.rpc_calls().is_empty());
}

#[tokio::test]
async fn search_runs_from_three_characters() {
    let id = uuid::Uuid::new_v4();
    let backend = Arc::new(FakeBackend::new().with_rpc(
        config::SEARCH_PROGRAMS,
        Ok(json!([{ "id": id, "title": "STEM Workshops", "slug": "stem", "rank": 0.8 }])),
    ));
    let hits = api(&backend).search_programs("ste").await.unwrap().unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].slug, "stem");
    assert_eq!(
        backend.rpc_calls(),
        vec![(config::SEARCH_PROGRAMS.to_string(), json!({ "search_term": "ste" }))]
    );
}

#[tokio::test]
async fn donation_stats_pass_date_range() {
    let backend = Arc::new(FakeBackend::new().with_rpc(
        config::GET_DONATION_STATS,
        Ok(json!({
            "total_donations": 3,
            "total_amount": 4500.0,
            "average_donation": 1500.0,
            "by_objective": { "womens_welfare": 3000.0 },
            "by_month": {}
        })),
    ));
    let api = api(&backend);
    let start = "2024-04-01T00:00:00Z".parse().unwrap();
    let stats = api.donation_stats(Some(start), None).await.unwrap();
    assert_eq!(stats.total_donations, 3);
    assert_eq!(stats.by_objective.get("womens_welfare"), Some(&3000.0));
    assert_eq!(
        backend.rpc_calls()[0].1,
        json!({ "start_date": "2024-04-01T00:00:00Z", "end_date": null })
    );
}

#[tokio::test]
async fn program_impact_defaults_when_null() {
    let backend = Arc::new(FakeBackend::new());
    let impact = api(&backend).program_impact().await.unwrap();
    assert_eq!(impact.total_programs, 0);
    assert_eq!(backend.rpc_calls()[0].0, config::GET_PROGRAM_IMPACT);
}
