use serde::Serialize;

use crate::geometry::{Point, Rect, Viewport};
use crate::placement::{CandidatePosition, CandidateSource, Placement, PlacementSampler};
use crate::utils::config::Config;
use crate::utils::error::FolioError;

/// A decorative background blob positioned by its top-left corner in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Blob {
    /// Diameter in pixels
    pub size: f64,
    pub position: CandidatePosition,
}

impl Blob {
    /// On-screen box of the blob for the given viewport.
    pub fn bounding_rect(&self, viewport: &Viewport) -> Rect {
        let origin = self.position.to_pixels(viewport);
        Rect::new(origin.x, origin.y, self.size, self.size)
    }

    pub fn center(&self, viewport: &Viewport) -> Point {
        self.bounding_rect(viewport).center()
    }
}

/// The set of blobs drifting over the page background.
#[derive(Debug, Clone)]
pub struct BlobField {
    blobs: Vec<Blob>,
    sampler: PlacementSampler,
}

impl BlobField {
    /// Creates `count` blobs laid out along the diagonal of the sampler's range.
    pub fn new(count: usize, size: f64, sampler: PlacementSampler) -> Self {
        let range = sampler.range();
        let span = (range.max() - range.min()) as usize;
        let blobs = (0..count)
            .map(|i| {
                let offset = (span * (i + 1) / (count + 1)) as u32;
                Blob {
                    size,
                    position: CandidatePosition::new(range.min() + offset, range.min() + offset),
                }
            })
            .collect();
        Self { blobs, sampler }
    }

    pub fn from_config(config: &Config) -> Result<Self, FolioError> {
        let sampler = PlacementSampler::from_config(&config.placement)?;
        Ok(Self::new(config.blobs.count, config.blobs.size, sampler))
    }

    pub fn blobs(&self) -> &[Blob] {
        &self.blobs
    }

    pub fn len(&self) -> usize {
        self.blobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blobs.is_empty()
    }

    pub fn sampler(&self) -> &PlacementSampler {
        &self.sampler
    }

    /// Snapshot of every blob center, resolved against the current viewport.
    pub fn centers(&self, viewport: &Viewport) -> Vec<Point> {
        self.blobs.iter().map(|b| b.center(viewport)).collect()
    }

    /// Handles the end of one animation cycle of blob `index` by moving it to
    /// a fresh position away from every blob, itself included.
    ///
    /// The distance check uses the sampled top-left corner against the other
    /// blobs' centers, so blobs with a non-zero size can end up with centers
    /// closer than the minimum distance.
    pub fn on_animation_iteration<S>(
        &mut self,
        index: usize,
        viewport: &Viewport,
        source: &mut S,
    ) -> Result<Placement, FolioError>
    where
        S: CandidateSource + ?Sized,
    {
        if index >= self.blobs.len() {
            return Err(FolioError::UnknownBlob(index));
        }

        let centers = self.centers(viewport);
        let placement = self.sampler.sample(&centers, viewport, source);
        self.blobs[index].position = placement.position;

        tracing::debug!(
            blob = index,
            x = placement.position.x_percent,
            y = placement.position.y_percent,
            attempts = placement.attempts,
            "blob moved"
        );
        Ok(placement)
    }

    /// Moves every blob once, in order.
    pub fn scatter<S>(&mut self, viewport: &Viewport, source: &mut S) -> Vec<Placement>
    where
        S: CandidateSource + ?Sized,
    {
        let mut placements = Vec::with_capacity(self.blobs.len());
        for index in 0..self.blobs.len() {
            let centers = self.centers(viewport);
            let placement = self.sampler.sample(&centers, viewport, source);
            self.blobs[index].position = placement.position;
            placements.push(placement);
        }
        placements
    }

    /// Distance between the two closest blob centers, if there are at least two.
    pub fn min_pairwise_distance(&self, viewport: &Viewport) -> Option<f64> {
        let centers = self.centers(viewport);
        let mut closest: Option<f64> = None;
        for (i, a) in centers.iter().enumerate() {
            for b in &centers[i + 1..] {
                let d = a.distance(*b);
                closest = Some(closest.map_or(d, |c| c.min(d)));
            }
        }
        closest
    }
}
