use time::macros::datetime;

use crate::{
    author::{Author, SocialLinks},
    category::Category,
    post::BlogPost,
    seed::SeedContent,
    slug::Slug,
};

fn authors() -> [Author; 2] {
    [
        Author::new(
            "maya-okafor",
            "Maya Okafor",
            Slug::literal("maya-okafor"),
            "/images/team/maya-okafor.jpg",
            "Founder and principal consultant. Maya has spent twelve years building revenue \
             operations teams for B2B SaaS companies from seed stage to IPO.",
        )
        .with_social(SocialLinks {
            linkedin: Some("https://www.linkedin.com/in/mayaokafor".to_string()),
            twitter: Some("https://twitter.com/mayaokafor".to_string()),
            ..SocialLinks::default()
        }),
        Author::new(
            "daniel-brandt",
            "Daniel Brandt",
            Slug::literal("daniel-brandt"),
            "/images/team/daniel-brandt.jpg",
            "Systems architect focused on CRM implementations, data pipelines and the \
             plumbing between sales, marketing and finance tools.",
        )
        .with_social(SocialLinks {
            linkedin: Some("https://www.linkedin.com/in/danielbrandt".to_string()),
            github: Some("https://github.com/dbrandt".to_string()),
            ..SocialLinks::default()
        }),
    ]
}

fn categories() -> [Category; 4] {
    [
        Category::new("revops-strategy", "RevOps Strategy", Slug::literal("revops-strategy"))
            .with_description("Operating models, planning and alignment across the revenue team."),
        Category::new("crm-systems", "CRM & Systems", Slug::literal("crm-systems"))
            .with_description("Salesforce, HubSpot and the tools that sit around them."),
        Category::new("analytics", "Analytics", Slug::literal("analytics"))
            .with_description("Forecasting, attribution and the metrics that matter."),
        Category::new("case-studies", "Case Studies", Slug::literal("case-studies")),
    ]
}

pub(super) fn content() -> SeedContent {
    let [maya, daniel] = authors();
    let [strategy, crm, analytics, case_studies] = categories();

    let posts = vec![
        BlogPost::builder(
            "1",
            "What RevOps Actually Means for a Series A Company",
            Slug::literal("what-revops-means-for-series-a"),
            datetime!(2024-09-12 9:00 UTC),
            maya.clone(),
            strategy.clone(),
        )
        .excerpt(
            "Revenue operations is not a headcount line. It is an agreement about how \
             leads, deals and renewals move through the company.",
        )
        .content(
            "<p>Most Series A teams hire their first operations person to fix a broken CRM. \
             Six months later that person owns the CRM, the comp plan, the board deck and \
             every spreadsheet nobody else wants.</p>\
             <h2>Start with the handoffs</h2>\
             <p>Map every point where a record changes owner: marketing to SDR, SDR to AE, \
             AE to customer success. Each handoff needs a definition, an owner and a field \
             that proves it happened.</p>\
             <h2>Then pick three numbers</h2>\
             <p>Pipeline created, win rate and net revenue retention. Everything else is a \
             diagnostic for one of those three.</p>",
        )
        .cover_image("/images/blog/revops-series-a.jpg")
        .updated_at(datetime!(2024-10-02 14:30 UTC))
        .tags(["RevOps", "Strategy", "Growth"])
        .featured(true)
        .build(),
        BlogPost::builder(
            "2",
            "Cleaning Up a Salesforce Org Without Stopping Sales",
            Slug::literal("cleaning-up-salesforce-org"),
            datetime!(2024-08-20 10:00 UTC),
            daniel.clone(),
            crm.clone(),
        )
        .excerpt(
            "A phased approach to retiring fields, consolidating record types and fixing \
             validation rules while reps keep closing.",
        )
        .content(
            "<p>Every mature Salesforce org carries years of fields nobody remembers \
             creating. Deleting them all at once breaks reports, integrations and trust.</p>\
             <h2>Inventory first</h2>\
             <p>Export field usage, last-modified dates and report references. Anything \
             untouched for a year goes on a hide list, not a delete list.</p>\
             <h2>Hide, wait, delete</h2>\
             <p>Remove fields from layouts for one full quarter. If nobody asks, archive the \
             data and delete the field.</p>",
        )
        .cover_image("/images/blog/salesforce-cleanup.jpg")
        .tags(["Salesforce", "Data Quality", "CRM"])
        .build(),
        BlogPost::builder(
            "3",
            "Building a Forecast Your Board Will Believe",
            Slug::literal("building-a-forecast-your-board-will-believe"),
            datetime!(2024-07-08 8:00 UTC),
            maya.clone(),
            analytics.clone(),
        )
        .excerpt(
            "Forecast accuracy comes from stage definitions and inspection cadence, not \
             from a better spreadsheet.",
        )
        .content(
            "<p>A forecast is a promise made by people, summarised by a model. When the \
             model is right and the promise is wrong, the board remembers the promise.</p>\
             <h2>Define stages by buyer actions</h2>\
             <p>A deal is in evaluation when the buyer has agreed to evaluate, not when the \
             rep has sent a deck.</p>\
             <h2>Inspect weekly, commit monthly</h2>\
             <p>Weekly deal reviews catch slippage early. Monthly commits give leadership a \
             number they can plan against.</p>",
        )
        .cover_image("/images/blog/forecasting.jpg")
        .tags(["Forecasting", "Pipeline", "Strategy"])
        .featured(true)
        .build(),
        BlogPost::builder(
            "4",
            "HubSpot to Salesforce: A Migration Checklist",
            Slug::literal("hubspot-to-salesforce-migration-checklist"),
            datetime!(2024-05-30 12:00 UTC),
            daniel.clone(),
            crm.clone(),
        )
        .excerpt(
            "The twelve decisions to make before moving a single record between CRMs.",
        )
        .content(
            "<p>Migrations fail on decisions, not on data volume. Decide the object model, \
             the owner mapping and the cutover date before anyone writes an import job.</p>\
             <ul><li>Which HubSpot properties become standard fields?</li>\
             <li>How do lifecycle stages map to lead status and opportunity stage?</li>\
             <li>Who owns records assigned to departed users?</li></ul>",
        )
        .cover_image("/images/blog/hubspot-salesforce.jpg")
        .tags(["HubSpot", "Salesforce", "CRM", "Migration"])
        .build(),
        BlogPost::builder(
            "5",
            "Multi-Touch Attribution Without the Hype",
            Slug::literal("multi-touch-attribution-without-the-hype"),
            datetime!(2024-04-15 9:30 UTC),
            maya.clone(),
            analytics.clone(),
        )
        .excerpt(
            "Attribution models answer budget questions. Treat them as a lens, not a \
             verdict.",
        )
        .content(
            "<p>No attribution model is true. Each one answers a different question about \
             where to spend the next dollar.</p>\
             <p>First-touch rewards awareness, last-touch rewards conversion, and \
             position-based models split the difference. Pick the one that matches the \
             decision you are trying to make.</p>",
        )
        .cover_image("/images/blog/attribution.jpg")
        .tags(["Attribution", "Marketing", "Growth"])
        .build(),
        BlogPost::builder(
            "6",
            "How a Fintech Cut Its Sales Cycle by 30 Percent",
            Slug::literal("fintech-sales-cycle-case-study"),
            datetime!(2024-03-04 11:00 UTC),
            daniel.clone(),
            case_studies.clone(),
        )
        .excerpt(
            "Routing rules, a shared definition of a qualified opportunity and one new \
             dashboard.",
        )
        .content(
            "<p>The client had a healthy top of funnel and a sales cycle that kept \
             stretching. Leads waited days for an owner and opportunities sat in discovery \
             for weeks.</p>\
             <h2>What changed</h2>\
             <p>We rebuilt lead routing, agreed a qualification checklist with sales \
             leadership and put stage ageing on the weekly dashboard.</p>",
        )
        .cover_image("/images/blog/fintech-case-study.jpg")
        .tags(["RevOps", "Pipeline", "Sales Process"])
        .build(),
    ];

    SeedContent::new(
        vec![maya, daniel],
        vec![strategy, crm, analytics, case_studies],
        posts,
    )
}
