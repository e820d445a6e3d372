use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

/// Default throughput data file
pub const INPUT_PATH: &str = ".total_system_throughput.dat";
/// Default plot file
pub const OUTPUT_PATH: &str = ".throughput.png";
/// Figure size [inch]
pub const FIGURE_SIZE: (f64, f64) = (6.4, 4.8);
/// Default image resolution [dot per inch]
pub const DPI: f64 = 60.;
/// Highest image resolution [dot per inch]
pub const MAX_DPI: f64 = 1200.;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("CWL lookup {value:?} is not recognized, expected one of: {expected}")]
    CwlLookup { value: String, expected: String },
    #[error("resolution must be in ]0, 1200] dots per inch, found {0}")]
    Dpi(f64),
}

/// Sample selection for the height of the center wavelength marker
#[derive(EnumIter, Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum CwlLookup {
    /// first sample with a wavelength equal to the rounded center wavelength
    #[default]
    Exact,
    /// sample with the wavelength closest to the center wavelength
    Nearest,
    /// linear interpolation of the normalized curve at the center wavelength
    Interpolate,
}
impl fmt::Display for CwlLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CwlLookup::Exact => write!(f, "exact"),
            CwlLookup::Nearest => write!(f, "nearest"),
            CwlLookup::Interpolate => write!(f, "interpolate"),
        }
    }
}
impl FromStr for CwlLookup {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().to_lowercase();
        CwlLookup::iter()
            .find(|lookup| lookup.to_string() == value)
            .ok_or_else(|| ConfigError::CwlLookup {
                value: s.to_owned(),
                expected: CwlLookup::iter()
                    .map(|lookup| lookup.to_string())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

/// Plot configuration
#[derive(Debug, Clone)]
pub struct Config {
    input_path: PathBuf,
    output_path: PathBuf,
    dpi: f64,
    cwl_lookup: CwlLookup,
}
impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(INPUT_PATH),
            output_path: PathBuf::from(OUTPUT_PATH),
            dpi: DPI,
            cwl_lookup: CwlLookup::default(),
        }
    }
}
impl Config {
    pub fn input_path<P: Into<PathBuf>>(self, input_path: P) -> Self {
        Self {
            input_path: input_path.into(),
            ..self
        }
    }
    pub fn output_path<P: Into<PathBuf>>(self, output_path: P) -> Self {
        Self {
            output_path: output_path.into(),
            ..self
        }
    }
    /// Sets the image resolution, the figure size is fixed
    pub fn dpi(self, dpi: f64) -> Result<Self, ConfigError> {
        if !(dpi > 0. && dpi <= MAX_DPI) {
            return Err(ConfigError::Dpi(dpi));
        }
        Ok(Self { dpi, ..self })
    }
    pub fn cwl_lookup(self, cwl_lookup: CwlLookup) -> Self {
        Self { cwl_lookup, ..self }
    }
    pub fn input(&self) -> &Path {
        &self.input_path
    }
    pub fn output(&self) -> &Path {
        &self.output_path
    }
    pub fn resolution(&self) -> f64 {
        self.dpi
    }
    pub fn lookup(&self) -> CwlLookup {
        self.cwl_lookup
    }
    /// Returns the image size in pixels
    pub fn pixel_size(&self) -> (u32, u32) {
        (
            (FIGURE_SIZE.0 * self.dpi).round() as u32,
            (FIGURE_SIZE.1 * self.dpi).round() as u32,
        )
    }
    /// Converts a font size from points to pixels
    pub fn points_to_pixels(&self, points: f64) -> f64 {
        points * self.dpi / 72.
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.input(), Path::new(".total_system_throughput.dat"));
        assert_eq!(config.output(), Path::new(".throughput.png"));
        assert_eq!(config.lookup(), CwlLookup::Exact);
        assert_eq!(config.pixel_size(), (384, 288));
    }

    #[test]
    fn builder() {
        let config = Config::default()
            .input_path("data/throughput.dat")
            .output_path("plot.png")
            .cwl_lookup(CwlLookup::Nearest)
            .dpi(100.)
            .unwrap();
        assert_eq!(config.input(), Path::new("data/throughput.dat"));
        assert_eq!(config.output(), Path::new("plot.png"));
        assert_eq!(config.lookup(), CwlLookup::Nearest);
        assert_eq!(config.pixel_size(), (640, 480));
        assert_eq!(config.points_to_pixels(72.), 100.);
    }

    #[test]
    fn bad_dpi() {
        assert!(Config::default().dpi(0.).is_err());
        assert!(Config::default().dpi(f64::NAN).is_err());
        assert!(Config::default().dpi(1e7).is_err());
        assert!(Config::default().dpi(f64::INFINITY).is_err());
        assert_eq!(
            Config::default().dpi(MAX_DPI).unwrap().pixel_size(),
            (7680, 5760)
        );
    }

    #[test]
    fn parse_lookup() {
        for lookup in CwlLookup::iter() {
            assert_eq!(lookup.to_string().parse::<CwlLookup>().unwrap(), lookup);
        }
        assert_eq!(
            " Interpolate ".parse::<CwlLookup>().unwrap(),
            CwlLookup::Interpolate
        );
        let err = "closest".parse::<CwlLookup>().unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"CWL lookup "closest" is not recognized, expected one of: exact, nearest, interpolate"#
        );
    }
}
