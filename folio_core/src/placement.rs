//! Minimum-distance placement of decorative markers.
//!
//! A new position is drawn uniformly from an integer percentage grid and
//! rejected while it lands closer than `min_distance` pixels to any existing
//! marker center. The retry loop is capped; once the cap is exhausted the last
//! candidate is returned as a best-effort placement.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MAX_ATTEMPTS, DEFAULT_MIN_DISTANCE, MAX_PERCENT, MIN_PERCENT};
use crate::geometry::{Point, Viewport};
use crate::utils::config::PlacementConfig;
use crate::utils::error::FolioError;

/// Inclusive integer percentage range candidates are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PercentRange {
    min: u32,
    max: u32,
}

impl Default for PercentRange {
    fn default() -> Self {
        Self {
            min: MIN_PERCENT,
            max: MAX_PERCENT,
        }
    }
}

impl PercentRange {
    /// Creates a range, requiring `min <= max <= 100`.
    pub fn new(min: u32, max: u32) -> Result<Self, FolioError> {
        if min > max || max > 100 {
            return Err(FolioError::InvalidPercentRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    fn clamp(&self, value: u32) -> u32 {
        value.clamp(self.min, self.max)
    }
}

/// A percentage-space point under consideration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidatePosition {
    pub x_percent: u32,
    pub y_percent: u32,
}

impl CandidatePosition {
    pub fn new(x_percent: u32, y_percent: u32) -> Self {
        Self {
            x_percent,
            y_percent,
        }
    }

    /// Pixel position of this candidate inside `viewport`.
    pub fn to_pixels(&self, viewport: &Viewport) -> Point {
        viewport.to_pixels(self.x_percent, self.y_percent)
    }

    /// Inline style the host applies to the marker.
    pub fn to_css(&self) -> String {
        format!("left: {}%; top: {}%;", self.x_percent, self.y_percent)
    }
}

/// Source of candidate positions.
pub trait CandidateSource {
    /// Draws the next candidate. Both coordinates must lie inside `range`.
    fn next_candidate(&mut self, range: PercentRange) -> CandidatePosition;
}

impl CandidateSource for fastrand::Rng {
    fn next_candidate(&mut self, range: PercentRange) -> CandidatePosition {
        let x_percent = self.u32(range.min..=range.max);
        let y_percent = self.u32(range.min..=range.max);
        CandidatePosition::new(x_percent, y_percent)
    }
}

/// Replays a fixed list of candidates, repeating the last one once the list
/// runs out. Values outside the requested range are clamped into it.
#[derive(Debug, Clone)]
pub struct ScriptedCandidates {
    candidates: Vec<CandidatePosition>,
    cursor: usize,
}

impl ScriptedCandidates {
    pub fn new(candidates: Vec<CandidatePosition>) -> Self {
        Self {
            candidates,
            cursor: 0,
        }
    }

    /// Number of candidates handed out so far.
    pub fn drawn(&self) -> usize {
        self.cursor
    }
}

impl CandidateSource for ScriptedCandidates {
    fn next_candidate(&mut self, range: PercentRange) -> CandidatePosition {
        let next = self
            .candidates
            .get(self.cursor)
            .or_else(|| self.candidates.last())
            .copied()
            .unwrap_or_else(|| CandidatePosition::new(range.min, range.min));
        self.cursor += 1;
        CandidatePosition::new(range.clamp(next.x_percent), range.clamp(next.y_percent))
    }
}

/// Whether a placement satisfied the distance invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacementOutcome {
    Accepted,
    /// Retry cap exhausted; the position may violate the minimum distance.
    BestEffort,
}

/// Result of one sampling run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub position: CandidatePosition,
    pub attempts: u32,
    pub outcome: PlacementOutcome,
}

impl Placement {
    pub fn is_accepted(&self) -> bool {
        self.outcome == PlacementOutcome::Accepted
    }
}

/// Returns true when `point` is at least `min_distance` away from every center.
pub fn is_far_enough(point: Point, centers: &[Point], min_distance: f64) -> bool {
    centers
        .iter()
        .all(|center| point.distance(*center) >= min_distance)
}

/// Reject-and-retry sampler with a bounded number of attempts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementSampler {
    min_distance: f64,
    max_attempts: u32,
    range: PercentRange,
}

impl Default for PlacementSampler {
    fn default() -> Self {
        Self {
            min_distance: DEFAULT_MIN_DISTANCE,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            range: PercentRange::default(),
        }
    }
}

impl PlacementSampler {
    pub fn new(min_distance: f64) -> Self {
        Self {
            min_distance,
            ..Default::default()
        }
    }

    /// Sets the retry cap. Zero is treated as one: a candidate is always drawn.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn with_range(mut self, range: PercentRange) -> Self {
        self.range = range;
        self
    }

    /// Builds a sampler from the `placement` config section.
    pub fn from_config(config: &PlacementConfig) -> Result<Self, FolioError> {
        if !config.min_distance.is_finite() {
            return Err(FolioError::Config(format!(
                "placement.min_distance must be finite, got {}",
                config.min_distance
            )));
        }
        let range = PercentRange::new(config.min_percent, config.max_percent)?;
        Ok(Self::new(config.min_distance)
            .with_max_attempts(config.max_attempts)
            .with_range(range))
    }

    pub fn min_distance(&self) -> f64 {
        self.min_distance
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn range(&self) -> PercentRange {
        self.range
    }

    /// Draws candidates until one is far enough from every center in
    /// `centers`, or until the retry cap is reached.
    pub fn sample<S>(&self, centers: &[Point], viewport: &Viewport, source: &mut S) -> Placement
    where
        S: CandidateSource + ?Sized,
    {
        let mut attempts = 0;
        loop {
            let candidate = source.next_candidate(self.range);
            attempts += 1;

            let pixel = candidate.to_pixels(viewport);
            if is_far_enough(pixel, centers, self.min_distance) {
                tracing::trace!(
                    x = candidate.x_percent,
                    y = candidate.y_percent,
                    attempts,
                    "placement accepted"
                );
                return Placement {
                    position: candidate,
                    attempts,
                    outcome: PlacementOutcome::Accepted,
                };
            }

            if attempts >= self.max_attempts {
                tracing::warn!(
                    x = candidate.x_percent,
                    y = candidate.y_percent,
                    attempts,
                    min_distance = self.min_distance,
                    markers = centers.len(),
                    "retry cap exhausted, using best-effort placement"
                );
                return Placement {
                    position: candidate,
                    attempts,
                    outcome: PlacementOutcome::BestEffort,
                };
            }
        }
    }
}

/// Samples a placement with the default range and retry cap, drawing from a
/// freshly seeded generator.
pub fn sample(centers: &[Point], viewport: &Viewport, min_distance: f64) -> Placement {
    let mut rng = fastrand::Rng::new();
    PlacementSampler::new(min_distance).sample(centers, viewport, &mut rng)
}
