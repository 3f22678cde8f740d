//! Headless state for the portfolio page widgets.
//!
//! Each model owns the flags and text the page toggles on its elements; a host
//! UI reads them back to apply classes and content.

mod contact_form;
mod filter;
mod navigation;
mod testimonials;
mod toggle;

pub use contact_form::{ContactForm, FieldKind, FormField};
pub use filter::{CategoryFilter, FilterItem};
pub use navigation::{Navigation, NavigationOutcome};
pub use testimonials::{Testimonial, TestimonialsModal};
pub use toggle::Toggle;
