use crate::constants::ACTIVE_CLASS;

/// An element whose only state is the `active` class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Toggle {
    active: bool,
}

impl Toggle {
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Flips the state and returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.active = !self.active;
        self.active
    }

    pub fn activate(&mut self) {
        self.active = true;
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Class the host should set on the element, if any.
    pub fn class(&self) -> Option<&'static str> {
        self.active.then_some(ACTIVE_CLASS)
    }
}
