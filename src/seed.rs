//! Sample records bundled with the application.
//!
//! Seed records use fixed identifiers so that persisted edits can override them.

use std::collections::BTreeMap;

use crate::models::*;

const SEED_TIMESTAMP: &str = "2024-01-01T00:00:00+00:00";

fn s(value: &str) -> String {
    value.to_string()
}

pub fn line_accounts() -> Vec<LineAccount> {
    vec![
        LineAccount {
            id: s("acc-001"),
            name: s("Main Store"),
            basic_id: s("@mainstore"),
            channel_id: s("1650000001"),
            picture_url: None,
            status: AccountStatus::Connected,
            updated_at: s(SEED_TIMESTAMP),
        },
        LineAccount {
            id: s("acc-002"),
            name: s("Outlet"),
            basic_id: s("@outlet"),
            channel_id: s("1650000002"),
            picture_url: None,
            status: AccountStatus::Pending,
            updated_at: s(SEED_TIMESTAMP),
        },
    ]
}

pub fn system_categories() -> Vec<SystemCategory> {
    vec![
        SystemCategory {
            id: s("cat-001"),
            name: s("Audience"),
            description: s("Who the content is for"),
            options: vec![
                CategoryOption {
                    id: s("opt-001"),
                    label: s("Members"),
                },
                CategoryOption {
                    id: s("opt-002"),
                    label: s("Guests"),
                },
            ],
            status: ActivityStatus::Active,
            updated_at: s(SEED_TIMESTAMP),
        },
        SystemCategory {
            id: s("cat-002"),
            name: s("Season"),
            description: String::new(),
            options: vec![CategoryOption {
                id: s("opt-003"),
                label: s("Summer"),
            }],
            status: ActivityStatus::Active,
            updated_at: s(SEED_TIMESTAMP),
        },
    ]
}

pub fn pages() -> Vec<LandingPage> {
    let mut home = BTreeMap::new();
    home.insert(
        s("th"),
        PageContent {
            title: s("หน้าแรก"),
            seo: SeoMetadata {
                title: s("หน้าแรก"),
                description: s("ยินดีต้อนรับ"),
                keywords: vec![s("home")],
                og_image: None,
            },
            blocks: vec![
                ComponentData {
                    id: s("blk-001"),
                    content: BlockContent::Hero {
                        title: s("ยินดีต้อนรับ"),
                        subtitle: s("สมัครสมาชิกวันนี้"),
                        background_image: None,
                        cta_text: Some(s("สมัคร")),
                        cta_link: Some(s("/register")),
                    },
                },
                ComponentData {
                    id: s("blk-002"),
                    content: BlockContent::Text {
                        body: s("รับสิทธิพิเศษมากมาย"),
                    },
                },
            ],
        },
    );
    home.insert(
        s("en"),
        PageContent {
            title: s("Home"),
            seo: SeoMetadata {
                title: s("Home"),
                description: s("Welcome"),
                keywords: vec![s("home")],
                og_image: None,
            },
            blocks: Vec::new(),
        },
    );

    let mut about = BTreeMap::new();
    about.insert(
        s("th"),
        PageContent {
            title: s("เกี่ยวกับเรา"),
            seo: SeoMetadata::default(),
            blocks: vec![ComponentData {
                id: s("blk-003"),
                content: BlockContent::Carousel {
                    slides: vec![
                        CarouselSlide {
                            id: s("sld-001"),
                            image: s("/images/store-1.jpg"),
                            title: s("Store"),
                            caption: String::new(),
                            link: None,
                        },
                        CarouselSlide {
                            id: s("sld-002"),
                            image: s("/images/team-1.jpg"),
                            title: s("Team"),
                            caption: String::new(),
                            link: None,
                        },
                    ],
                    autoplay: true,
                },
            }],
        },
    );

    vec![
        LandingPage {
            id: s("page-001"),
            slug: s("home"),
            status: PublishStatus::Published,
            default_language: s(DEFAULT_LANGUAGE),
            contents: home,
            publish_at: None,
            unpublish_at: None,
            tags: vec![s("main")],
            category_values: BTreeMap::from([(s("cat-001"), s("opt-001"))]),
            revisions: vec![Revision {
                date: s(SEED_TIMESTAMP),
                note: s("Created"),
            }],
            updated_at: s(SEED_TIMESTAMP),
        },
        LandingPage {
            id: s("page-002"),
            slug: s("about-us"),
            status: PublishStatus::Draft,
            default_language: s(DEFAULT_LANGUAGE),
            contents: about,
            publish_at: None,
            unpublish_at: None,
            tags: Vec::new(),
            category_values: BTreeMap::new(),
            revisions: Vec::new(),
            updated_at: s(SEED_TIMESTAMP),
        },
    ]
}

pub fn campaigns() -> Vec<Campaign> {
    vec![
        Campaign {
            id: s("cmp-001"),
            account_id: s("acc-001"),
            title: s("Summer Coupon"),
            description: s("Ten percent off every order"),
            image: None,
            status: CampaignStatus::Published,
            reward: RewardConfig {
                reward_type: RewardType::ONLINE,
                expiry: ExpiryPolicy::FixedDate {
                    date: s("2024-08-31"),
                },
                code_distribution: CodeDistribution::PublicCode,
                public_code: Some(s("SUMMER10")),
            },
            paragraphs: vec![Paragraph {
                id: s("par-001"),
                text: s("Use the code at checkout."),
            }],
            total_quota: Some(500),
            quota_periods: vec![QuotaPeriod {
                id: s("qp-001"),
                date: s("2024-06-01"),
                quota_per_period: 500,
                quota_per_user: 1,
            }],
            start_at: Some(s("2024-06-01T00:00:00+07:00")),
            end_at: Some(s("2024-08-31T23:59:59+07:00")),
            publish_at: None,
            unpublish_at: None,
            seo: SeoMetadata::default(),
            tags: vec![s("summer")],
            category_values: BTreeMap::from([(s("cat-002"), s("opt-003"))]),
            updated_at: s(SEED_TIMESTAMP),
        },
        Campaign {
            id: s("cmp-002"),
            account_id: s("acc-001"),
            title: s("Free Tote Bag"),
            description: s("Collect a tote bag at any branch"),
            image: None,
            status: CampaignStatus::Scheduled,
            reward: RewardConfig {
                reward_type: RewardType::PHYSICAL,
                expiry: ExpiryPolicy::DaysAfterClaim { days: 14 },
                code_distribution: CodeDistribution::UniqueCode,
                public_code: None,
            },
            paragraphs: Vec::new(),
            total_quota: Some(200),
            quota_periods: Vec::new(),
            start_at: None,
            end_at: None,
            publish_at: Some(s("2024-09-01T09:00:00+07:00")),
            unpublish_at: None,
            seo: SeoMetadata::default(),
            tags: Vec::new(),
            category_values: BTreeMap::new(),
            updated_at: s(SEED_TIMESTAMP),
        },
        Campaign {
            id: s("cmp-003"),
            account_id: s("acc-002"),
            title: s("Outlet Members Day"),
            description: String::new(),
            image: None,
            status: CampaignStatus::Ended,
            reward: RewardConfig::default(),
            paragraphs: Vec::new(),
            total_quota: None,
            quota_periods: Vec::new(),
            start_at: None,
            end_at: None,
            publish_at: None,
            unpublish_at: None,
            seo: SeoMetadata::default(),
            tags: Vec::new(),
            category_values: BTreeMap::new(),
            updated_at: s(SEED_TIMESTAMP),
        },
    ]
}

pub fn rich_menus() -> Vec<RichMenu> {
    let mut actions = BTreeMap::new();
    actions.insert(
        s("A"),
        MenuAction {
            action_type: ActionType::Uri,
            data: s("https://example.com/shop"),
        },
    );
    actions.insert(
        s("B"),
        MenuAction {
            action_type: ActionType::Message,
            data: s("Contact us"),
        },
    );

    vec![
        RichMenu {
            id: s("rm-001"),
            account_id: s("acc-001"),
            name: s("Main menu"),
            chat_bar_text: s("Menu"),
            template_id: Some(s("compact-2")),
            size: MenuSize::Compact,
            actions,
            image: None,
            status: PublishStatus::Published,
            updated_at: s(SEED_TIMESTAMP),
        },
        RichMenu {
            id: s("rm-002"),
            account_id: s("acc-002"),
            name: s("Outlet menu"),
            chat_bar_text: s("Tap here"),
            template_id: None,
            size: MenuSize::Large,
            actions: BTreeMap::new(),
            image: None,
            status: PublishStatus::Draft,
            updated_at: s(SEED_TIMESTAMP),
        },
    ]
}

pub fn banners() -> Vec<Banner> {
    vec![
        Banner {
            id: s("bnr-001"),
            title: s("Summer Coupon"),
            image_url: s("/images/banner-summer.jpg"),
            link_url: None,
            linked_campaign_id: Some(s("cmp-001")),
            placement: s("home"),
            status: PublishStatus::Published,
            start_at: None,
            end_at: None,
            updated_at: s(SEED_TIMESTAMP),
        },
        Banner {
            id: s("bnr-002"),
            title: s("New Branch"),
            image_url: s("/images/banner-branch.jpg"),
            link_url: Some(s("https://example.com/branches")),
            linked_campaign_id: None,
            placement: s("campaigns"),
            status: PublishStatus::Draft,
            start_at: None,
            end_at: None,
            updated_at: s(SEED_TIMESTAMP),
        },
    ]
}

pub fn forms() -> Vec<FormTemplate> {
    vec![FormTemplate {
        id: s("frm-001"),
        name: s("Member registration"),
        description: s("Collects contact details"),
        status: FormStatus::Active,
        sections: vec![FormSection {
            id: s("sec-001"),
            title: s("Contact"),
            description: String::new(),
            fields: vec![
                FormField {
                    id: s("fld-001"),
                    label: s("Full name"),
                    field_type: FieldType::Text,
                    required: true,
                    placeholder: None,
                    options: Vec::new(),
                },
                FormField {
                    id: s("fld-002"),
                    label: s("Email"),
                    field_type: FieldType::Email,
                    required: true,
                    placeholder: Some(s("you@example.com")),
                    options: Vec::new(),
                },
            ],
        }],
        submit_label: s("Register"),
        updated_at: s(SEED_TIMESTAMP),
    }]
}

pub fn faqs() -> Vec<Faq> {
    vec![
        Faq {
            id: s("faq-001"),
            question: s("How do I redeem a coupon?"),
            answer: s("Show the code to the cashier."),
            category: s("Rewards"),
            order: 1,
            status: PublishStatus::Published,
            updated_at: s(SEED_TIMESTAMP),
        },
        Faq {
            id: s("faq-002"),
            question: s("Can I change my phone number?"),
            answer: s("Yes, from the profile page."),
            category: s("Account"),
            order: 2,
            status: PublishStatus::Published,
            updated_at: s(SEED_TIMESTAMP),
        },
        Faq {
            id: s("faq-003"),
            question: s("When do points expire?"),
            answer: String::new(),
            category: s("Rewards"),
            order: 3,
            status: PublishStatus::Draft,
            updated_at: s(SEED_TIMESTAMP),
        },
    ]
}

pub fn partners() -> Vec<Partner> {
    vec![
        Partner {
            id: s("ptn-001"),
            name: s("Coffee Corner"),
            logo_url: None,
            website: Some(s("https://example.com/coffee")),
            description: s("Cafe chain"),
            category: s("Food"),
            status: ActivityStatus::Active,
            updated_at: s(SEED_TIMESTAMP),
        },
        Partner {
            id: s("ptn-002"),
            name: s("City Cinema"),
            logo_url: None,
            website: None,
            description: String::new(),
            category: s("Entertainment"),
            status: ActivityStatus::Inactive,
            updated_at: s(SEED_TIMESTAMP),
        },
    ]
}

pub fn email_templates() -> Vec<EmailTemplate> {
    vec![
        EmailTemplate {
            id: s("eml-001"),
            name: s("Welcome"),
            subject: s("Welcome, {{name}}"),
            body_html: s("<p>Hi {{name}}, thanks for joining.</p>"),
            category: s("Onboarding"),
            variables: vec![s("name")],
            status: ActivityStatus::Active,
            updated_at: s(SEED_TIMESTAMP),
        },
        EmailTemplate {
            id: s("eml-002"),
            name: s("Reward claimed"),
            subject: s("Your reward {{reward}}"),
            body_html: s("<p>Your code is {{code}}.</p>"),
            category: s("Rewards"),
            variables: vec![s("reward"), s("code")],
            status: ActivityStatus::Active,
            updated_at: s(SEED_TIMESTAMP),
        },
    ]
}
