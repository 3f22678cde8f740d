//! Routes page events to the models that own them.
//!
//! The host forwards each DOM-level event as a [`SiteEvent`]; the [`Site`]
//! handles it to completion and answers with the [`SiteEffect`]s the host must
//! apply (styles, scroll position, button state).

use serde::{Deserialize, Serialize};

use crate::effects::{BackgroundSizer, BlobField, TiltCard};
use crate::geometry::Viewport;
use crate::placement::{CandidatePosition, PlacementOutcome};
use crate::site::{
    CategoryFilter, ContactForm, FilterItem, FormField, Navigation, NavigationOutcome,
    Testimonial, TestimonialsModal, Toggle,
};
use crate::utils::config::Config;
use crate::utils::error::{FolioError, FolioResult};

/// Static page content the models are built from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteContent {
    pub testimonials: Vec<Testimonial>,
    pub filter_items: Vec<FilterItem>,
    pub filter_buttons: Vec<String>,
    pub form_fields: Vec<FormField>,
    pub nav_links: Vec<String>,
    pub pages: Vec<String>,
    /// Width and height of each tilt card in pixels
    pub cards: Vec<(f64, f64)>,
}

/// Events raised by the page.
#[derive(Debug, Clone, PartialEq)]
pub enum SiteEvent {
    SidebarClicked,
    TestimonialClicked(usize),
    ModalClosed,
    SelectClicked,
    SelectItemClicked(String),
    FilterButtonClicked(usize),
    FormInput { field: String, value: String },
    NavLinkClicked(String),
    CardPointerMoved { card: usize, offset_x: f64, offset_y: f64 },
    CardPointerLeft { card: usize },
    BlobAnimationIteration(usize),
    WindowResized { width: f64, height: f64 },
    /// Document content changed height (mutation observed).
    DocumentResized { height: f64 },
}

/// Changes the host has to apply after an event.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SiteEffect {
    ScrollToTop,
    BlobMoved {
        blob: usize,
        position: CandidatePosition,
        outcome: PlacementOutcome,
    },
    CardTransform { card: usize, css: String },
    BackgroundResized { height: f64 },
    SubmitEnabled { enabled: bool },
}

/// All page state, driven by [`SiteEvent`]s.
pub struct Site {
    pub sidebar: Toggle,
    pub testimonials: TestimonialsModal,
    pub filter: CategoryFilter,
    pub form: ContactForm,
    pub navigation: Navigation,
    pub cards: Vec<TiltCard>,
    pub blobs: BlobField,
    pub background: BackgroundSizer,
    viewport: Viewport,
    document_height: f64,
    rng: fastrand::Rng,
}

impl Site {
    pub fn new(
        config: &Config,
        content: SiteContent,
        viewport: Viewport,
        rng: fastrand::Rng,
    ) -> FolioResult<Self> {
        config.validate()?;
        let cards = content
            .cards
            .iter()
            .map(|&(width, height)| TiltCard::new(width, height, config.tilt))
            .collect();

        let mut site = Self {
            sidebar: Toggle::default(),
            testimonials: TestimonialsModal::new(content.testimonials),
            filter: CategoryFilter::new(content.filter_items, content.filter_buttons),
            form: ContactForm::new(content.form_fields),
            navigation: Navigation::new(content.nav_links, content.pages),
            cards,
            blobs: BlobField::from_config(config)?,
            background: BackgroundSizer::default(),
            viewport,
            document_height: 0.0,
            rng,
        };
        site.background.update(viewport.height(), site.document_height);
        Ok(site)
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Handles one event to completion.
    pub fn dispatch(&mut self, event: SiteEvent) -> FolioResult<Vec<SiteEffect>> {
        tracing::trace!(?event, "dispatching");
        let mut effects = Vec::new();

        match event {
            SiteEvent::SidebarClicked => {
                self.sidebar.toggle();
            }
            SiteEvent::TestimonialClicked(index) => {
                self.testimonials.open(index)?;
            }
            SiteEvent::ModalClosed => self.testimonials.close(),
            SiteEvent::SelectClicked => {
                self.filter.click_select();
            }
            SiteEvent::SelectItemClicked(label) => self.filter.click_select_item(&label),
            SiteEvent::FilterButtonClicked(index) => self.filter.click_filter_button(index)?,
            SiteEvent::FormInput { field, value } => {
                let enabled = self.form.input(&field, value)?;
                effects.push(SiteEffect::SubmitEnabled { enabled });
            }
            SiteEvent::NavLinkClicked(label) => {
                if let NavigationOutcome::Shown(_) = self.navigation.click(&label)? {
                    effects.push(SiteEffect::ScrollToTop);
                    self.resize_background(&mut effects);
                }
            }
            SiteEvent::CardPointerMoved {
                card,
                offset_x,
                offset_y,
            } => {
                let transform = self
                    .cards
                    .get_mut(card)
                    .ok_or(FolioError::UnknownCard(card))?
                    .on_pointer_move(offset_x, offset_y);
                effects.push(SiteEffect::CardTransform {
                    card,
                    css: transform.to_css(),
                });
            }
            SiteEvent::CardPointerLeft { card } => {
                let transform = self
                    .cards
                    .get_mut(card)
                    .ok_or(FolioError::UnknownCard(card))?
                    .on_pointer_leave();
                effects.push(SiteEffect::CardTransform {
                    card,
                    css: transform.to_css(),
                });
            }
            SiteEvent::BlobAnimationIteration(blob) => {
                let placement = self
                    .blobs
                    .on_animation_iteration(blob, &self.viewport, &mut self.rng)?;
                effects.push(SiteEffect::BlobMoved {
                    blob,
                    position: placement.position,
                    outcome: placement.outcome,
                });
            }
            SiteEvent::WindowResized { width, height } => {
                self.viewport = Viewport::new(width, height)?;
                self.resize_background(&mut effects);
            }
            SiteEvent::DocumentResized { height } => {
                self.document_height = height;
                self.resize_background(&mut effects);
            }
        }

        Ok(effects)
    }

    fn resize_background(&mut self, effects: &mut Vec<SiteEffect>) {
        if self
            .background
            .update(self.viewport.height(), self.document_height)
        {
            effects.push(SiteEffect::BackgroundResized {
                height: self.background.height(),
            });
        }
    }
}
