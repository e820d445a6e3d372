//! # Throughput plot
//!
//! Normalizes a filter throughput curve and plots it together with the filter band
//! boundaries and the center wavelength (CWL) marker.
//!
//! The throughput curve is read from a text file with one sample per row, the wavelength
//! in nm in the first column and the throughput in the second column.
//!
//! ```no_run
//! use throughput_plot::{Band, Config};
//!
//! let params = throughput_plot::run(Band::new(500., 600.), "g filter", &Config::default())?;
//! println!("{}", params);
//! # Ok::<(), throughput_plot::Error>(())
//! ```

pub mod config;
pub mod curve;
pub mod dataset;
mod error;
pub mod plot;

pub use config::{Config, CwlLookup};
pub use curve::{Band, PlotParameters};
pub use dataset::{Dataset, Sample};
pub use error::Error;

/// Loads the throughput curve, derives the plot geometry and writes the plot
pub fn run(band: Band, title: &str, config: &Config) -> Result<PlotParameters, Error> {
    log::info!("Loading {:?}...", config.input());
    let dataset = Dataset::from_path(config.input())?;
    let params = PlotParameters::new(&dataset, band, config.lookup())?;
    log::info!("{}", params);
    plot::render(&dataset, &params, title, config)?;
    Ok(params)
}
