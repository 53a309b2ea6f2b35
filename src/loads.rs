//! Load types applied to a beam
//!
//! Magnitudes are positive downward. In a [`crate::beam::BeamDescription`]
//! they are given in kN (point) or kN/m (distributed); after normalization
//! they are in N or N/m. The geometry helpers here are unit-agnostic.

use serde::{Deserialize, Serialize};

/// A single load on the beam
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Load {
    /// Concentrated force at a single position
    Point {
        /// Force magnitude (positive downward)
        magnitude: f64,
        /// Distance from the left end of the beam
        position: f64,
    },
    /// Constant-intensity line load between two positions
    Uniform {
        /// Intensity (force per unit length, positive downward)
        magnitude: f64,
        /// Start of the loaded segment
        start: f64,
        /// End of the loaded segment
        end: f64,
    },
    /// Linearly varying line load: zero at `start`, `magnitude` at `end`
    Triangular {
        /// Peak intensity at `end` (positive downward)
        magnitude: f64,
        /// Start of the loaded segment (zero intensity)
        start: f64,
        /// End of the loaded segment (peak intensity)
        end: f64,
    },
}

impl Load {
    /// Create a point load
    pub fn point(magnitude: f64, position: f64) -> Self {
        Self::Point {
            magnitude,
            position,
        }
    }

    /// Create a uniform distributed load
    pub fn uniform(magnitude: f64, start: f64, end: f64) -> Self {
        Self::Uniform {
            magnitude,
            start,
            end,
        }
    }

    /// Create a triangular load (zero at start, peak at end)
    pub fn triangular(magnitude: f64, start: f64, end: f64) -> Self {
        Self::Triangular {
            magnitude,
            start,
            end,
        }
    }

    /// Scale the load magnitude by a factor, keeping its geometry
    pub fn scaled(&self, factor: f64) -> Self {
        match *self {
            Self::Point {
                magnitude,
                position,
            } => Self::Point {
                magnitude: magnitude * factor,
                position,
            },
            Self::Uniform {
                magnitude,
                start,
                end,
            } => Self::Uniform {
                magnitude: magnitude * factor,
                start,
                end,
            },
            Self::Triangular {
                magnitude,
                start,
                end,
            } => Self::Triangular {
                magnitude: magnitude * factor,
                start,
                end,
            },
        }
    }

    /// Extent of the load along the beam as `(start, end)`
    ///
    /// A point load has a degenerate extent at its position.
    pub fn extent(&self) -> (f64, f64) {
        match *self {
            Self::Point { position, .. } => (position, position),
            Self::Uniform { start, end, .. } | Self::Triangular { start, end, .. } => (start, end),
        }
    }

    /// Total force (resultant) of the load
    pub fn resultant(&self) -> f64 {
        match *self {
            Self::Point { magnitude, .. } => magnitude,
            Self::Uniform {
                magnitude,
                start,
                end,
            } => magnitude * (end - start),
            Self::Triangular {
                magnitude,
                start,
                end,
            } => magnitude * (end - start) / 2.0,
        }
    }

    /// Position where the resultant acts
    ///
    /// The centroid of a triangular load lies one third of its width from
    /// the peak end (two thirds from the zero-intensity apex).
    pub fn centroid(&self) -> f64 {
        match *self {
            Self::Point { position, .. } => position,
            Self::Uniform { start, end, .. } => (start + end) / 2.0,
            Self::Triangular { start, end, .. } => end - (end - start) / 3.0,
        }
    }

    /// Resultant of the part of the load lying within `[lo, hi]`
    ///
    /// Zero when the load does not intersect the window. This is the
    /// clipping primitive used to ignore loads outside the supported span.
    pub fn resultant_between(&self, lo: f64, hi: f64) -> f64 {
        match *self {
            Self::Point {
                magnitude,
                position,
            } => {
                if position >= lo && position <= hi {
                    magnitude
                } else {
                    0.0
                }
            }
            Self::Uniform {
                magnitude,
                start,
                end,
            } => {
                let a = start.max(lo);
                let b = end.min(hi);
                if b > a {
                    magnitude * (b - a)
                } else {
                    0.0
                }
            }
            Self::Triangular {
                magnitude,
                start,
                end,
            } => {
                let a = start.max(lo);
                let b = end.min(hi);
                if b > a {
                    // intensity w(u) = k (u - start), k = magnitude / width
                    let k = magnitude / (end - start);
                    k * ((b - start).powi(2) - (a - start).powi(2)) / 2.0
                } else {
                    0.0
                }
            }
        }
    }

    /// Centroid of the part of the load lying within `[lo, hi]`
    ///
    /// `None` when the clipped resultant is zero.
    pub fn centroid_between(&self, lo: f64, hi: f64) -> Option<f64> {
        match *self {
            Self::Point { position, .. } => {
                if position >= lo && position <= hi {
                    Some(position)
                } else {
                    None
                }
            }
            Self::Uniform { start, end, .. } => {
                let a = start.max(lo);
                let b = end.min(hi);
                if b > a {
                    Some((a + b) / 2.0)
                } else {
                    None
                }
            }
            Self::Triangular {
                magnitude,
                start,
                end,
            } => {
                let a = start.max(lo);
                let b = end.min(hi);
                if b > a {
                    let k = magnitude / (end - start);
                    let force = k * ((b - start).powi(2) - (a - start).powi(2)) / 2.0;
                    // first moment of k (u - start) over [a, b]
                    let first =
                        k * ((b.powi(3) - a.powi(3)) / 3.0 - start * (b.powi(2) - a.powi(2)) / 2.0);
                    Some(first / force)
                } else {
                    None
                }
            }
        }
    }

    /// Whether the load lies fully within `[lo, hi]`
    pub fn within(&self, lo: f64, hi: f64) -> bool {
        let (start, end) = self.extent();
        start >= lo && end <= hi
    }
}
