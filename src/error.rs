use crate::{curve::CurveError, dataset::DatasetError, plot::PlotError};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Error in the `dataset` module")]
    Dataset(#[from] DatasetError),
    #[error("Error in the `curve` module")]
    Curve(#[from] CurveError),
    #[error("Error in the `plot` module")]
    Plot(#[from] PlotError),
}
