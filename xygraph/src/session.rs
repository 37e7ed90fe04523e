//! Interactive session state, independent of the input toolkit driving it.
//!
//! A [`Session`] owns the current equation text and x bounds, and is mutated only by validated
//! submit events. A rejected submission leaves the session exactly as it was; an accepted one
//! recomputes the plot so the caller can re-render. The session itself never terminates on an
//! engine error.

use xygraph_compute::plot::{plot_data, Error as PlotError, PlotData};
use xygraph_compute::sample::RangeError;

/// Whether the session has produced at least one successful plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// No equation has been accepted yet; there is nothing to render.
    Idle,

    /// At least one equation has been accepted; bound changes re-render it.
    Ready,
}

/// The state of one interactive plotting session.
#[derive(Debug, Clone)]
pub struct Session {
    equation: String,
    x_min: f64,
    x_max: f64,
    points: usize,
    state: State,
}

impl Session {
    /// Creates an idle session over the default `[-10, 10]` window.
    pub fn new(points: usize) -> Self {
        Self {
            equation: String::new(),
            x_min: -10.0,
            x_max: 10.0,
            points,
            state: State::Idle,
        }
    }

    /// Returns the session state.
    pub fn state(&self) -> State {
        self.state
    }

    /// Returns the equation text of the last accepted submission.
    pub fn equation(&self) -> &str {
        &self.equation
    }

    /// Returns the current `(x_min, x_max)` bounds.
    pub fn bounds(&self) -> (f64, f64) {
        (self.x_min, self.x_max)
    }

    /// Submits new equation text.
    ///
    /// On success the session becomes [`State::Ready`] and the fresh plot is returned; on
    /// failure the previous equation and state are kept.
    pub fn submit_equation(&mut self, text: &str) -> Result<PlotData, PlotError> {
        let data = plot_data(text, self.x_min, self.x_max, self.points)?;
        self.equation = text.to_string();
        self.state = State::Ready;
        Ok(data)
    }

    /// Submits a new lower x bound.
    ///
    /// The bound must stay strictly below the current upper bound; otherwise it is rejected and
    /// the session is unchanged. When an equation is already present, the plot is recomputed
    /// over the new bounds and returned.
    pub fn submit_xmin(&mut self, value: f64) -> Result<Option<PlotData>, PlotError> {
        if !(value < self.x_max) {
            return Err(RangeError::EmptyRange { x_min: value, x_max: self.x_max }.into());
        }
        self.x_min = value;
        self.replot()
    }

    /// Submits a new upper x bound.
    ///
    /// The bound must stay strictly above the current lower bound; otherwise it is rejected and
    /// the session is unchanged. When an equation is already present, the plot is recomputed
    /// over the new bounds and returned.
    pub fn submit_xmax(&mut self, value: f64) -> Result<Option<PlotData>, PlotError> {
        if !(value > self.x_min) {
            return Err(RangeError::EmptyRange { x_min: self.x_min, x_max: value }.into());
        }
        self.x_max = value;
        self.replot()
    }

    /// Recomputes the plot for the current equation, if one has been accepted.
    fn replot(&mut self) -> Result<Option<PlotData>, PlotError> {
        match self.state {
            State::Idle => Ok(None),
            State::Ready => plot_data(&self.equation, self.x_min, self.x_max, self.points).map(Some),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle_with_default_window() {
        let session = Session::new(100);
        assert_eq!(session.state(), State::Idle);
        assert_eq!(session.bounds(), (-10.0, 10.0));
    }

    #[test]
    fn accepted_equation_enters_ready() {
        let mut session = Session::new(5);
        let data = session.submit_equation("y = x^2").unwrap();
        assert_eq!(session.state(), State::Ready);
        assert_eq!(session.equation(), "y = x^2");
        assert_eq!(data.xs.len(), 5);
    }

    #[test]
    fn rejected_equation_keeps_previous_state() {
        let mut session = Session::new(5);
        session.submit_equation("x").unwrap();

        assert!(session.submit_equation("x)").is_err());
        assert_eq!(session.state(), State::Ready);
        assert_eq!(session.equation(), "x");
    }

    #[test]
    fn rejected_equation_stays_idle() {
        let mut session = Session::new(5);
        assert!(session.submit_equation("q+1").is_err());
        assert_eq!(session.state(), State::Idle);
    }

    #[test]
    fn bound_updates_without_equation_do_not_render() {
        let mut session = Session::new(5);
        assert!(matches!(session.submit_xmin(-5.0), Ok(None)));
        assert_eq!(session.bounds(), (-5.0, 10.0));
        assert_eq!(session.state(), State::Idle);
    }

    #[test]
    fn bound_updates_replot_the_current_equation() {
        let mut session = Session::new(5);
        session.submit_equation("x").unwrap();

        let data = session.submit_xmax(2.0).unwrap().unwrap();
        assert_eq!(session.bounds(), (-10.0, 2.0));
        assert_eq!(data.xs.last().copied(), Some(2.0));
    }

    #[test]
    fn crossing_bounds_are_rejected() {
        let mut session = Session::new(5);
        assert!(session.submit_xmin(10.0).is_err());
        assert!(session.submit_xmin(11.0).is_err());
        assert!(session.submit_xmax(-10.0).is_err());
        // unchanged after all three rejections
        assert_eq!(session.bounds(), (-10.0, 10.0));
    }
}
