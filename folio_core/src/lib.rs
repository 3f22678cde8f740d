//! Core models for folio-fx: minimum-distance blob placement, hover tilt
//! cards and the headless state behind the portfolio page widgets.

pub mod constants;
pub mod dispatcher;
pub mod effects;
pub mod geometry;
pub mod placement;
pub mod site;
pub mod utils;

pub use dispatcher::{Site, SiteContent, SiteEffect, SiteEvent};
pub use effects::{BlobField, TiltCard, Transform};
pub use geometry::{Point, Rect, Viewport};
pub use placement::{
    is_far_enough, sample, CandidatePosition, CandidateSource, PercentRange, Placement,
    PlacementOutcome, PlacementSampler, ScriptedCandidates,
};
pub use utils::config::Config;
pub use utils::error::{FolioError, FolioResult};
