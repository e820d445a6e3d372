use std::path::PathBuf;

use anyhow::Context;
use structopt::{clap::AppSettings, StructOpt};
use throughput_plot::{Band, Config, CwlLookup};

#[derive(Debug, StructOpt)]
#[structopt(
    name = "throughput-plot",
    about = "Plotting the normalized throughput of a filter band",
    setting = AppSettings::AllowNegativeNumbers
)]
struct Opt {
    /// Lower wavelength of the filter band [nm]
    wavemin: f64,
    /// Upper wavelength of the filter band [nm]
    wavemax: f64,
    /// Plot title
    title: String,
    /// Throughput data file [default: .total_system_throughput.dat]
    #[structopt(short, long, parse(from_os_str))]
    input: Option<PathBuf>,
    /// Plot file [default: .throughput.png]
    #[structopt(short, long, parse(from_os_str))]
    output: Option<PathBuf>,
    /// Plot resolution [dpi, default: 60]
    #[structopt(long)]
    dpi: Option<f64>,
    /// Center wavelength marker lookup: exact, nearest or interpolate [default: exact]
    #[structopt(long)]
    cwl: Option<CwlLookup>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let opt = Opt::from_args();
    log::debug!("{:?}", opt);

    let mut config = Config::default();
    if let Some(arg) = opt.input {
        config = config.input_path(arg);
    }
    if let Some(arg) = opt.output {
        config = config.output_path(arg);
    }
    if let Some(arg) = opt.dpi {
        config = config.dpi(arg)?;
    }
    if let Some(arg) = opt.cwl {
        config = config.cwl_lookup(arg);
    }

    let band = Band::new(opt.wavemin, opt.wavemax);
    throughput_plot::run(band, &opt.title, &config)
        .with_context(|| format!("failed to plot the throughput of the {} band", band))?;

    Ok(())
}
