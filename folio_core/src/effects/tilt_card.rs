use serde::Serialize;

use crate::constants::{TILT_MAX_ROTATION, TILT_ROTATION_FACTOR};
use crate::utils::config::TiltConfig;

/// A 3D card transform in CSS terms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Transform {
    pub perspective: f64,
    pub scale: f64,
    /// Degrees around the horizontal axis
    pub rotate_x: f64,
    /// Degrees around the vertical axis
    pub rotate_y: f64,
}

impl Transform {
    /// Untilted transform at full scale.
    pub fn rest(perspective: f64) -> Self {
        Self {
            perspective,
            scale: 1.0,
            rotate_x: 0.0,
            rotate_y: 0.0,
        }
    }

    pub fn is_rest(&self) -> bool {
        self.scale == 1.0 && self.rotate_x == 0.0 && self.rotate_y == 0.0
    }

    /// Renders the value of the `transform` style property.
    pub fn to_css(&self) -> String {
        if self.is_rest() {
            return format!(
                "perspective({}px) scale(1) rotateX(0) rotateY(0)",
                self.perspective
            );
        }
        format!(
            "perspective({}px) scale({}) rotateX({}deg) rotateY({}deg)",
            self.perspective, self.scale, self.rotate_x, self.rotate_y
        )
    }
}

/// State for a hover-tilt card.
#[derive(Debug, Clone)]
pub struct TiltCard {
    width: f64,
    height: f64,
    config: TiltConfig,
    transform: Transform,
    is_hovered: bool,
}

impl TiltCard {
    /// Creates a card of the given size. A zero dimension is treated as 1px.
    /// A negative rotation limit is used by magnitude; a non-finite one falls
    /// back to the default.
    pub fn new(width: f64, height: f64, mut config: TiltConfig) -> Self {
        let or_one = |v: f64| if v > 0.0 { v } else { 1.0 };
        config.max_rotation = if config.max_rotation.is_finite() {
            config.max_rotation.abs()
        } else {
            TILT_MAX_ROTATION
        };
        Self {
            width: or_one(width),
            height: or_one(height),
            config,
            transform: Transform::rest(config.perspective),
            is_hovered: false,
        }
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn transform(&self) -> Transform {
        self.transform
    }

    pub fn is_hovered(&self) -> bool {
        self.is_hovered
    }

    /// Tilts the card toward the pointer. Offsets are relative to the card's
    /// top-left corner.
    pub fn on_pointer_move(&mut self, offset_x: f64, offset_y: f64) -> Transform {
        let max = self.config.max_rotation;
        let rotate_y = (TILT_ROTATION_FACTOR * ((offset_x - self.width / 2.0) / self.width))
            .clamp(-max, max);
        let rotate_x = (-TILT_ROTATION_FACTOR * ((offset_y - self.height / 2.0) / self.height))
            .clamp(-max, max);

        self.is_hovered = true;
        self.transform = Transform {
            perspective: self.config.perspective,
            scale: self.config.hover_scale,
            rotate_x,
            rotate_y,
        };
        self.transform
    }

    /// Resets the card once the pointer leaves it.
    pub fn on_pointer_leave(&mut self) -> Transform {
        self.is_hovered = false;
        self.transform = Transform::rest(self.config.perspective);
        self.transform
    }
}
