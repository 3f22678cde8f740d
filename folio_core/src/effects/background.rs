/// Height the full-page background must cover: the taller of the window and
/// the document.
pub fn full_page_height(window_height: f64, document_height: f64) -> f64 {
    window_height.max(document_height)
}

/// Tracks the height applied to the full-page background element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BackgroundSizer {
    height: f64,
}

impl BackgroundSizer {
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Recomputes the height after a resize, mutation or page switch.
    /// Returns true if the height changed.
    pub fn update(&mut self, window_height: f64, document_height: f64) -> bool {
        let height = full_page_height(window_height, document_height);
        if height == self.height {
            return false;
        }
        tracing::debug!(from = self.height, to = height, "background resized");
        self.height = height;
        true
    }

    /// Inline style for the background element.
    pub fn to_css(&self) -> String {
        format!("height: {}px;", self.height)
    }
}
