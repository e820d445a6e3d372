//! Throughput plot rendering
//!
//! The plot shows the normalized throughput curve over the original one, the filter band
//! boundaries and the center wavelength (CWL) marker with its annotation.

use crate::{config::Config, curve::PlotParameters, dataset::Dataset};
use plotters::{
    coord::Shift, drawing::DrawingAreaErrorKind, prelude::*, series::DashedLineSeries,
    style::FontTransform,
};

/// Font size of labels, title and annotation [pt]
pub const FONT_SIZE: f64 = 20.;
/// Height of the bottom end of the annotation text in normalized transmission units
const ANNOTATION_Y: f64 = 0.4;
const FONT: &str = "sans-serif";

const ORIGINAL_COLOR: RGBColor = RGBColor(0xaa, 0xaa, 0xaa);
const CWL_COLOR: RGBColor = RGBColor(0xbb, 0x00, 0x00);
const BAND_COLOR: RGBColor = RGBColor(0x00, 0x80, 0x00);

#[derive(thiserror::Error, Debug)]
pub enum PlotError {
    #[error("failed to draw the throughput plot")]
    Drawing(#[source] Box<dyn std::error::Error + Send + Sync>),
}
impl<E: std::error::Error + Send + Sync + 'static> From<DrawingAreaErrorKind<E>> for PlotError {
    fn from(value: DrawingAreaErrorKind<E>) -> Self {
        PlotError::Drawing(Box::new(value))
    }
}
type Result<T> = std::result::Result<T, PlotError>;

/// Writes the throughput plot to the output file of the configuration
///
/// The image format follows the file extension and an existing file is overwritten.
pub fn render(
    dataset: &Dataset,
    params: &PlotParameters,
    title: &str,
    config: &Config,
) -> Result<()> {
    log::info!(
        "making figure: {:?} at {}dpi",
        config.output(),
        config.resolution()
    );
    let root = BitMapBackend::new(config.output(), config.pixel_size()).into_drawing_area();
    draw(root, dataset, params, title, config.points_to_pixels(FONT_SIZE))
}

/// Draws the throughput plot on any drawing area
pub fn draw<DB>(
    root: DrawingArea<DB, Shift>,
    dataset: &Dataset,
    params: &PlotParameters,
    title: &str,
    font_size: f64,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    let (x_min, x_max) = params.x_range();
    let (y_min, y_max) = params.y_range();
    let mut chart = ChartBuilder::on(&root)
        .caption(title, (FONT, font_size))
        .set_label_area_size(LabelAreaPosition::Left, (4.5 * font_size) as u32)
        .set_label_area_size(LabelAreaPosition::Bottom, (2.5 * font_size) as u32)
        .margin((0.5 * font_size) as u32)
        // room for the half of the last x tick label past the axis end
        .margin_right((1.5 * font_size) as u32)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;
    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Wavelength [nm]")
        .y_desc("Normalized transmission")
        .axis_desc_style((FONT, font_size))
        .label_style((FONT, font_size))
        .x_labels(5)
        .x_label_formatter(&tick_label)
        .y_labels(6)
        .draw()?;

    let c = colorous::TABLEAU10[0];
    let normalized_color = RGBColor(c.r, c.g, c.b);
    chart.draw_series(LineSeries::new(
        dataset.wavelength_iter().zip(params.normalized_iter()),
        normalized_color.stroke_width(2),
    ))?;
    chart.draw_series(LineSeries::new(
        dataset.xy_iter(),
        ORIGINAL_COLOR.stroke_width(1),
    ))?;

    let dash = (0.4 * font_size).max(2.) as u32;
    let cwl = params.center();
    chart.draw_series(DashedLineSeries::new(
        vec![(cwl, 0.), (cwl, params.cwl_throughput())],
        dash,
        dash / 2,
        CWL_COLOR.stroke_width(2),
    ))?;
    let band = params.band();
    for x in [band.min, band.max] {
        chart.draw_series(DashedLineSeries::new(
            vec![(x, 0.), (x, 1.)],
            dash,
            dash / 2,
            BAND_COLOR.stroke_width(2),
        ))?;
    }

    let annotation_style = (FONT, font_size)
        .into_font()
        .transform(FontTransform::Rotate270)
        .color(&CWL_COLOR);
    chart.draw_series(std::iter::once(Text::new(
        params.annotation(),
        (cwl + params.annotation_offset(), ANNOTATION_Y),
        annotation_style,
    )))?;

    root.present()?;
    Ok(())
}

/// Wavelength tick label, integral values without decimals
fn tick_label(x: &f64) -> String {
    format!("{}", x)
}
