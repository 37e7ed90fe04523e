use xygraph_compute::plot::Error as PlotError;
use xygraph_graph::Error as RenderError;

/// Utility enum to package errors that can occur while plotting an equation.
pub enum Error {
    /// The evaluation pipeline rejected the equation or the sampling range.
    Plot(PlotError),

    /// The renderer failed to draw or write the image.
    Render(RenderError),
}

impl Error {
    /// Report the error in this [`Error`] to stderr.
    ///
    /// Pipeline errors are rendered as span-labeled reports against the submitted equation;
    /// everything else is printed as a plain message.
    pub fn report_to_stderr(&self) {
        match self {
            Self::Plot(err) => err.report_to_stderr(),
            Self::Render(err) => eprintln!("error: {}", err),
        }
    }
}

impl From<PlotError> for Error {
    fn from(err: PlotError) -> Self {
        Self::Plot(err)
    }
}

impl From<RenderError> for Error {
    fn from(err: RenderError) -> Self {
        Self::Render(err)
    }
}
