//! Normalized throughput curve and plot geometry

use crate::{config::CwlLookup, dataset::Dataset};
use std::fmt;

/// Nominal padding on both sides of the band [nm]
pub const PADDING: f64 = 50.;
/// Vertical extent of the plot
pub const Y_RANGE: (f64, f64) = (0., 1.02);

#[derive(thiserror::Error, Debug)]
pub enum CurveError {
    #[error("cannot normalize the throughput by its maximum value {0}")]
    Normalization(f64),
    #[error("no sample found at the center wavelength {cwl} nm ({lookup} lookup)")]
    CwlNotFound { cwl: f64, lookup: CwlLookup },
}
type Result<T> = std::result::Result<T, CurveError>;

/// Filter band [nm]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub min: f64,
    pub max: f64,
}
impl Band {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
    pub fn width(&self) -> f64 {
        self.max - self.min
    }
    /// Center wavelength
    pub fn center(&self) -> f64 {
        (self.max + self.min) / 2.
    }
    /// Center wavelength rounded to the nearest integer, ties to even
    pub fn center_label(&self) -> i64 {
        self.center().round_ties_even() as i64
    }
    /// Padding on both sides of the band
    ///
    /// The padding is reduced to half the band width for bands narrower than twice [PADDING]
    pub fn padding(&self) -> f64 {
        let width = self.width();
        if width / (2. * PADDING) < 1. {
            width / 2.
        } else {
            PADDING
        }
    }
}
impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}-{}]nm", self.min, self.max)
    }
}

/// Plot geometry derived from the band and the throughput curve
#[derive(Debug, Clone, PartialEq)]
pub struct PlotParameters {
    band: Band,
    max_throughput: f64,
    normalized: Vec<f64>,
    padding: f64,
    cwl_throughput: f64,
}
impl PlotParameters {
    /// Normalizes the throughput and locates the height of the center wavelength marker
    pub fn new(dataset: &Dataset, band: Band, lookup: CwlLookup) -> Result<Self> {
        if band.width() <= 0. {
            log::warn!("empty or inverted band: {}", band);
        }
        let max_throughput = dataset.max_throughput();
        if max_throughput == 0. || !max_throughput.is_finite() {
            return Err(CurveError::Normalization(max_throughput));
        }
        let normalized: Vec<f64> = dataset
            .throughput_iter()
            .map(|t| t / max_throughput)
            .collect();
        let padding = band.padding();
        if padding < PADDING {
            log::warn!("narrow band {}, padding reduced to {}nm", band, padding);
        }
        let curve: Vec<(f64, f64)> = dataset
            .wavelength_iter()
            .zip(normalized.iter().cloned())
            .collect();
        let cwl_throughput = match lookup {
            CwlLookup::Exact => exact(&curve, band.center_label() as f64),
            CwlLookup::Nearest => nearest(&curve, band.center()),
            CwlLookup::Interpolate => interpolate(&curve, band.center()),
        }
        .ok_or_else(|| CurveError::CwlNotFound {
            cwl: match lookup {
                CwlLookup::Exact => band.center_label() as f64,
                _ => band.center(),
            },
            lookup,
        })?;
        Ok(Self {
            band,
            max_throughput,
            normalized,
            padding,
            cwl_throughput,
        })
    }
    pub fn band(&self) -> Band {
        self.band
    }
    pub fn center(&self) -> f64 {
        self.band.center()
    }
    pub fn center_label(&self) -> i64 {
        self.band.center_label()
    }
    /// Normalization factor
    pub fn max_throughput(&self) -> f64 {
        self.max_throughput
    }
    pub fn normalized(&self) -> &[f64] {
        &self.normalized
    }
    pub fn normalized_iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.normalized.iter().cloned()
    }
    pub fn padding(&self) -> f64 {
        self.padding
    }
    pub fn x_range(&self) -> (f64, f64) {
        (self.band.min - self.padding, self.band.max + self.padding)
    }
    pub fn y_range(&self) -> (f64, f64) {
        Y_RANGE
    }
    /// Height of the center wavelength marker
    pub fn cwl_throughput(&self) -> f64 {
        self.cwl_throughput
    }
    /// Center wavelength annotation
    pub fn annotation(&self) -> String {
        format!("CWL={}", self.center_label())
    }
    /// Horizontal offset of the annotation from the center wavelength marker
    pub fn annotation_offset(&self) -> f64 {
        self.band.width() / 20.
    }
}
impl fmt::Display for PlotParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (x0, x1) = self.x_range();
        write!(
            f,
            "band: {}, CWL: {}nm ({:.3}), peak throughput: {:.4}, x range: [{}, {}]",
            self.band,
            self.center(),
            self.cwl_throughput,
            self.max_throughput,
            x0,
            x1
        )
    }
}

fn exact(curve: &[(f64, f64)], cwl: f64) -> Option<f64> {
    curve.iter().find(|(x, _)| *x == cwl).map(|(_, y)| *y)
}
// first sample wins on ties
fn nearest(curve: &[(f64, f64)], cwl: f64) -> Option<f64> {
    curve
        .iter()
        .fold(None, |closest: Option<(f64, f64)>, &(x, y)| {
            let d = (x - cwl).abs();
            match closest {
                Some((d_min, _)) if d_min <= d => closest,
                _ if d.is_nan() => closest,
                _ => Some((d, y)),
            }
        })
        .map(|(_, y)| y)
}
fn interpolate(curve: &[(f64, f64)], cwl: f64) -> Option<f64> {
    exact(curve, cwl).or_else(|| {
        curve.windows(2).find_map(|w| {
            let ((x0, y0), (x1, y1)) = (w[0], w[1]);
            if (x0 < cwl && cwl < x1) || (x1 < cwl && cwl < x0) {
                Some(y0 + (y1 - y0) * (cwl - x0) / (x1 - x0))
            } else {
                None
            }
        })
    })
}
