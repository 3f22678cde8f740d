use super::Toggle;
use crate::utils::error::FolioError;

/// Result of a navigation click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// The page was found and is now the only active one. The host scrolls
    /// to the top, re-binds card effects and resizes the background.
    Shown(String),
    /// No page matched the link text; every page is now inactive.
    Missing(String),
}

#[derive(Debug, Clone)]
struct Entry {
    name: String,
    state: Toggle,
}

impl Entry {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: Toggle::default(),
        }
    }
}

/// Single-page navigation between content sections.
#[derive(Debug, Clone)]
pub struct Navigation {
    links: Vec<Entry>,
    pages: Vec<Entry>,
}

impl Navigation {
    /// Creates the navbar. Page names are matched in lowercase. The first
    /// link and the first page start out active.
    pub fn new<L, P>(links: L, pages: P) -> Self
    where
        L: IntoIterator,
        L::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        let mut links: Vec<Entry> = links.into_iter().map(Entry::new).collect();
        let mut pages: Vec<Entry> = pages
            .into_iter()
            .map(|p| Entry::new(p.into().to_lowercase()))
            .collect();
        if let Some(first) = links.first_mut() {
            first.state.activate();
        }
        if let Some(first) = pages.first_mut() {
            first.state.activate();
        }
        Self { links, pages }
    }

    pub fn active_link(&self) -> Option<&str> {
        self.links
            .iter()
            .find(|l| l.state.is_active())
            .map(|l| l.name.as_str())
    }

    pub fn active_page(&self) -> Option<&str> {
        self.pages
            .iter()
            .find(|p| p.state.is_active())
            .map(|p| p.name.as_str())
    }

    /// Handles a click on the link labelled `label`.
    pub fn click(&mut self, label: &str) -> Result<NavigationOutcome, FolioError> {
        let index = self
            .links
            .iter()
            .position(|l| l.name == label)
            .ok_or_else(|| FolioError::UnknownLink(label.to_string()))?;

        for entry in self.links.iter_mut().chain(self.pages.iter_mut()) {
            entry.state.deactivate();
        }
        self.links[index].state.activate();

        let target = label.trim().to_lowercase();
        match self.pages.iter_mut().find(|p| p.name == target) {
            Some(page) => {
                page.state.activate();
                tracing::debug!(page = %target, "page shown");
                Ok(NavigationOutcome::Shown(target))
            }
            None => {
                tracing::warn!(page = %target, "navigation link has no matching page");
                Ok(NavigationOutcome::Missing(target))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nav() -> Navigation {
        Navigation::new(
            ["About", "Resume", "Portfolio", "Blog", "Contact"],
            ["about", "resume", "portfolio", "contact"],
        )
    }

    #[test]
    fn test_initial_state() {
        let nav = nav();
        assert_eq!(nav.active_link(), Some("About"));
        assert_eq!(nav.active_page(), Some("about"));
    }

    #[test]
    fn test_click_switches_page() {
        let mut nav = nav();
        let outcome = nav.click("Portfolio").unwrap();
        assert_eq!(outcome, NavigationOutcome::Shown("portfolio".into()));
        assert_eq!(nav.active_link(), Some("Portfolio"));
        assert_eq!(nav.active_page(), Some("portfolio"));
    }

    #[test]
    fn test_missing_page_leaves_none_active() {
        let mut nav = nav();
        let outcome = nav.click("Blog").unwrap();
        assert_eq!(outcome, NavigationOutcome::Missing("blog".into()));
        assert_eq!(nav.active_link(), Some("Blog"));
        assert_eq!(nav.active_page(), None);
    }

    #[test]
    fn test_label_is_trimmed() {
        let mut nav = Navigation::new([" Resume "], ["about", "resume"]);
        let outcome = nav.click(" Resume ").unwrap();
        assert_eq!(outcome, NavigationOutcome::Shown("resume".into()));
    }

    #[test]
    fn test_unknown_link() {
        let mut nav = nav();
        assert!(nav.click("Shop").is_err());
        assert_eq!(nav.active_page(), Some("about"));
    }
}
