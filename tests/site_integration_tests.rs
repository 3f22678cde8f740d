//! End-to-end event flows through the page dispatcher

use folio_core::site::{FieldKind, FilterItem, FormField, Testimonial};
use folio_core::{
    Config, PlacementOutcome, Site, SiteContent, SiteEffect, SiteEvent, Viewport,
};
use pretty_assertions::assert_eq;

fn portfolio() -> SiteContent {
    SiteContent {
        testimonials: vec![
            Testimonial {
                avatar_src: "./assets/images/avatar-1.png".into(),
                avatar_alt: "Daniel Lewis".into(),
                title: "Daniel Lewis".into(),
                text: "Richard was hired to create a corporate identity.".into(),
            },
            Testimonial {
                avatar_src: "./assets/images/avatar-2.png".into(),
                avatar_alt: "Jessica Miller".into(),
                title: "Jessica Miller".into(),
                text: "Very professional and on time.".into(),
            },
        ],
        filter_items: vec![
            FilterItem::new("Finance", "web development"),
            FilterItem::new("Orizon", "web development"),
            FilterItem::new("Fundo", "web design"),
            FilterItem::new("Brawlhalla", "applications"),
        ],
        filter_buttons: vec![
            "All".into(),
            "Web design".into(),
            "Applications".into(),
            "Web development".into(),
        ],
        form_fields: vec![
            FormField::new("fullname", FieldKind::Text, true),
            FormField::new("email", FieldKind::Email, true),
            FormField::new("message", FieldKind::Text, true),
        ],
        nav_links: vec![
            "About".into(),
            "Resume".into(),
            "Portfolio".into(),
            "Contact".into(),
        ],
        pages: vec![
            "about".into(),
            "resume".into(),
            "portfolio".into(),
            "contact".into(),
        ],
        cards: vec![(300.0, 180.0), (300.0, 180.0)],
    }
}

fn site() -> Site {
    Site::new(
        &Config::default(),
        portfolio(),
        Viewport::new(1440.0, 900.0).unwrap(),
        fastrand::Rng::with_seed(2024),
    )
    .unwrap()
}

#[test]
fn test_contact_flow() -> anyhow::Result<()> {
    let mut site = site();
    site.dispatch(SiteEvent::NavLinkClicked("Contact".into()))?;
    assert_eq!(site.navigation.active_page(), Some("contact"));

    let mut last = Vec::new();
    for (field, value) in [
        ("fullname", "Ada Lovelace"),
        ("email", "ada@analytical.engine"),
        ("message", "Let's build something."),
    ] {
        last = site.dispatch(SiteEvent::FormInput {
            field: field.into(),
            value: value.into(),
        })?;
    }
    assert_eq!(last, vec![SiteEffect::SubmitEnabled { enabled: true }]);
    assert!(site.form.is_submit_enabled());
    Ok(())
}

#[test]
fn test_portfolio_filtering_flow() -> anyhow::Result<()> {
    let mut site = site();
    site.dispatch(SiteEvent::NavLinkClicked("Portfolio".into()))?;

    site.dispatch(SiteEvent::SelectClicked)?;
    assert!(site.filter.dropdown().is_active());
    site.dispatch(SiteEvent::SelectItemClicked("Web development".into()))?;
    assert!(!site.filter.dropdown().is_active());

    let titles: Vec<_> = site.filter.visible().map(|i| i.title.clone()).collect();
    assert_eq!(titles, vec!["Finance".to_string(), "Orizon".to_string()]);

    site.dispatch(SiteEvent::FilterButtonClicked(0))?;
    assert_eq!(site.filter.visible().count(), 4);
    Ok(())
}

#[test]
fn test_testimonial_modal_flow() -> anyhow::Result<()> {
    let mut site = site();
    site.dispatch(SiteEvent::TestimonialClicked(1))?;
    assert!(site.testimonials.is_open());
    assert_eq!(site.testimonials.shown().avatar_alt, "Jessica Miller");

    site.dispatch(SiteEvent::ModalClosed)?;
    assert!(!site.testimonials.is_open());

    assert!(site.dispatch(SiteEvent::TestimonialClicked(7)).is_err());
    Ok(())
}

#[test]
fn test_blob_animation_flow() -> anyhow::Result<()> {
    let mut site = site();
    let count = site.blobs.len();
    assert_eq!(count, 4);

    for _ in 0..25 {
        for blob in 0..count {
            let effects = site.dispatch(SiteEvent::BlobAnimationIteration(blob))?;
            assert_eq!(effects.len(), 1);
            match &effects[0] {
                SiteEffect::BlobMoved {
                    blob: moved,
                    position,
                    outcome,
                } => {
                    assert_eq!(*moved, blob);
                    assert_eq!(*outcome, PlacementOutcome::Accepted);
                    assert!((5..=95).contains(&position.x_percent));
                    assert!((5..=95).contains(&position.y_percent));
                }
                other => panic!("unexpected effect: {:?}", other),
            }
        }
    }

    assert!(site.dispatch(SiteEvent::BlobAnimationIteration(count)).is_err());
    Ok(())
}

#[test]
fn test_background_follows_document_and_window() -> anyhow::Result<()> {
    let mut site = site();
    assert_eq!(site.background.height(), 900.0);

    let effects = site.dispatch(SiteEvent::DocumentResized { height: 2600.0 })?;
    assert_eq!(effects, vec![SiteEffect::BackgroundResized { height: 2600.0 }]);

    let effects = site.dispatch(SiteEvent::WindowResized {
        width: 390.0,
        height: 844.0,
    })?;
    assert!(effects.is_empty());
    assert_eq!(site.viewport().width(), 390.0);
    Ok(())
}

#[test]
fn test_deserialized_content_filters_by_category() -> anyhow::Result<()> {
    let content: SiteContent = serde_json::from_str(
        r#"{
            "filter_items": [
                {"title": "Fundo", "category": "Web design"},
                {"title": "Brawlhalla", "category": "Applications"}
            ],
            "filter_buttons": ["All", "Web design", "Applications"]
        }"#,
    )?;
    let mut site = Site::new(
        &Config::default(),
        content,
        Viewport::new(1440.0, 900.0)?,
        fastrand::Rng::with_seed(1),
    )?;
    assert_eq!(site.filter.visible().count(), 2);

    site.dispatch(SiteEvent::FilterButtonClicked(1))?;
    let titles: Vec<_> = site.filter.visible().map(|i| i.title.clone()).collect();
    assert_eq!(titles, vec!["Fundo".to_string()]);
    Ok(())
}

#[test]
fn test_effects_serialize_for_host() -> anyhow::Result<()> {
    let mut site = site();
    let effects = site.dispatch(SiteEvent::CardPointerMoved {
        card: 1,
        offset_x: 150.0,
        offset_y: 90.0,
    })?;
    let json = serde_json::to_value(&effects)?;
    assert_eq!(json[0]["type"], "card_transform");
    assert_eq!(json[0]["card"], 1);

    let effects = site.dispatch(SiteEvent::CardPointerLeft { card: 1 })?;
    assert_eq!(
        effects,
        vec![SiteEffect::CardTransform {
            card: 1,
            css: "perspective(2000px) scale(1) rotateX(0) rotateY(0)".into(),
        }]
    );
    Ok(())
}
