use serde::{Deserialize, Serialize};

use super::Toggle;
use crate::utils::error::FolioError;

/// One testimonial card as it appears in the list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub avatar_src: String,
    pub avatar_alt: String,
    pub title: String,
    pub text: String,
}

/// Modal that shows a copy of the clicked testimonial over an overlay.
#[derive(Debug, Clone, Default)]
pub struct TestimonialsModal {
    items: Vec<Testimonial>,
    shown: Testimonial,
    container: Toggle,
    overlay: Toggle,
}

impl TestimonialsModal {
    pub fn new(items: Vec<Testimonial>) -> Self {
        Self {
            items,
            ..Default::default()
        }
    }

    /// Content currently copied into the modal.
    pub fn shown(&self) -> &Testimonial {
        &self.shown
    }

    pub fn is_open(&self) -> bool {
        self.container.is_active()
    }

    pub fn overlay(&self) -> Toggle {
        self.overlay
    }

    /// Handles a click on testimonial `index`: copies its avatar, title and
    /// text into the modal, then toggles the modal and overlay.
    pub fn open(&mut self, index: usize) -> Result<&Testimonial, FolioError> {
        let item = self
            .items
            .get(index)
            .ok_or(FolioError::UnknownTestimonial(index))?;
        self.shown = item.clone();
        self.container.toggle();
        self.overlay.toggle();
        Ok(&self.shown)
    }

    /// Hides the modal and overlay.
    pub fn close(&mut self) {
        self.container.deactivate();
        self.overlay.deactivate();
    }
}
