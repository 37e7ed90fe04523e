//! Curve renderer for sampled equations.
//!
//! This module renders an evaluated curve to an image: create a [`Graph`], hand it the sample
//! and result vectors with [`Graph::set_curve`], fit the viewport with
//! [`Graph::center_on_range`], then call [`Graph::draw`] (or [`Graph::save_png`]) to produce
//! the output. This crate uses the [`cairo`] crate to render the graph, and thus can render to
//! any format supported by [`cairo`], including PNG and SVG.
//!
//! The renderer owns all of its state explicitly; there is no process-wide "current figure".
//! Non-finite entries in the result vector are simply not plotted: they break the curve into
//! separate segments.
//!
//! # Example
//!
//! ```no_run
//! use xygraph_graph::Graph;
//!
//! # fn main() -> Result<(), xygraph_graph::Error> {
//! let mut graph = Graph::new();
//! graph.set_title("y = x^2")
//!     .set_curve(&[-2.0, -1.0, 0.0, 1.0, 2.0], &[4.0, 1.0, 0.0, 1.0, 4.0])
//!     .center_on_range((-2.0, 2.0), (-0.4, 4.4))
//!     .save_png("output.png")?;
//! # Ok(())
//! # }
//! ```

pub mod opts;
pub mod point;

use cairo::{Context, FontSlant, FontWeight, Format, ImageSurface};
use std::{fmt, fs::File, path::Path};
use super::text_align::ShowTextAlign;
pub use opts::GraphOptions;
pub use point::{CanvasPoint, GraphPoint};

/// An error produced while rendering or writing a graph.
#[derive(Debug)]
pub enum Error {
    /// A drawing operation failed.
    Draw(cairo::Error),

    /// The rendered image could not be written.
    Write(cairo::IoError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Draw(err) => write!(f, "drawing failed: {}", err),
            Error::Write(err) => write!(f, "could not write image: {}", err),
        }
    }
}

impl std::error::Error for Error {}

impl From<cairo::Error> for Error {
    fn from(err: cairo::Error) -> Self {
        Self::Draw(err)
    }
}

impl From<cairo::IoError> for Error {
    fn from(err: cairo::IoError) -> Self {
        Self::Write(err)
    }
}

/// Round `n` to the nearest `k`.
fn round_to(n: f64, k: f64) -> f64 {
    (n / k).round() * k
}

/// Picks a "nice" grid step (1, 2, or 5 times a power of ten) for the given visible span.
fn nice_step(span: f64) -> f64 {
    if !span.is_finite() || span <= 0.0 {
        return 1.0;
    }

    // aim for roughly ten grid divisions across the span
    let raw = span / 10.0;
    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let step = if normalized < 1.5 {
        1.0
    } else if normalized < 3.5 {
        2.0
    } else if normalized < 7.5 {
        5.0
    } else {
        10.0
    };
    step * magnitude
}

/// Formats a graph value for a label, trimming trailing zeros.
fn fmt_value(value: f64) -> String {
    let raw = format!("{:.3}", value);
    raw.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// A graph containing one curve to draw.
///
/// See the [module-level documentation](self) for more information.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    /// The curve to draw, as `(x, y)` pairs in graph units.
    pub points: Vec<GraphPoint<f64>>,

    /// The title drawn at the top of the canvas, usually the equation being plotted.
    pub title: Option<String>,

    /// The rendering options for the graph.
    pub options: GraphOptions,
}

impl Graph {
    /// Create a new, empty graph.
    pub fn new() -> Graph {
        Graph::default()
    }

    /// Create a new graph with the given options.
    pub fn with_opts(options: GraphOptions) -> Graph {
        Graph {
            options,
            ..Graph::default()
        }
    }

    /// Set the title of the graph.
    ///
    /// Returns a mutable reference to the graph to allow chaining.
    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = Some(title.into());
        self
    }

    /// Set the curve to draw from matching sample and result vectors.
    ///
    /// Returns a mutable reference to the graph to allow chaining.
    pub fn set_curve(&mut self, xs: &[f64], ys: &[f64]) -> &mut Self {
        self.points = xs.iter()
            .zip(ys)
            .map(|(&x, &y)| GraphPoint(x, y))
            .collect();
        self
    }

    /// Center and scale the graph so the given x and y ranges exactly fill the canvas, and pick
    /// a matching grid spacing.
    ///
    /// Returns a mutable reference to the graph to allow chaining.
    pub fn center_on_range(&mut self, x_range: (f64, f64), y_range: (f64, f64)) -> &mut Self {
        self.options.center = GraphPoint(
            (x_range.0 + x_range.1) / 2.0,
            (y_range.0 + y_range.1) / 2.0,
        );
        self.options.scale = GraphPoint(
            (x_range.1 - x_range.0) / 2.0,
            (y_range.1 - y_range.0) / 2.0,
        );
        self.options.grid_spacing = GraphPoint(
            nice_step(x_range.1 - x_range.0),
            nice_step(y_range.1 - y_range.0),
        );
        self
    }

    /// Creates an [`ImageSurface`] with the graph's canvas size and draws the graph to it.
    ///
    /// The resulting [`ImageSurface`] can be written to a file or manipulated further.
    pub fn draw(&self) -> Result<ImageSurface, cairo::Error> {
        let surface = ImageSurface::create(
            Format::ARgb32,
            self.options.canvas_size.0 as i32,
            self.options.canvas_size.1 as i32,
        )?;
        let context = Context::new(&surface)?;

        context.set_source_rgb(0.0, 0.0, 0.0);
        context.paint()?;

        context.select_font_face("sans-serif", FontSlant::Normal, FontWeight::Normal);

        let origin_canvas = self.options.to_canvas(GraphPoint(0.0, 0.0));
        self.draw_grid_lines(&context)?;
        self.draw_origin_axes(&context, origin_canvas)?;
        self.draw_edge_labels(&context, origin_canvas)?;
        self.draw_grid_line_numbers(&context, origin_canvas)?;
        self.draw_title(&context)?;

        self.draw_curve(&context)?;
        if self.options.draw_markers {
            self.draw_markers(&context)?;
        }

        Ok(surface)
    }

    /// Draws the graph and writes it to the given path as a PNG image.
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let surface = self.draw()?;
        let mut file = File::create(path).map_err(cairo::IoError::Io)?;
        surface.write_to_png(&mut file)?;
        Ok(())
    }

    /// Draw the grid lines.
    fn draw_grid_lines(&self, context: &Context) -> Result<(), cairo::Error> {
        context.set_source_rgba(0.4, 0.4, 0.4, self.options.grid_opacity);
        context.set_line_width(1.0);

        // vertical grid lines (x = ...)
        let vert_bounds = (
            round_to(self.options.center.0 - self.options.scale.0, self.options.grid_spacing.0),
            round_to(self.options.center.0 + self.options.scale.0, self.options.grid_spacing.0),
        );
        let mut x = vert_bounds.0;
        while x <= vert_bounds.1 {
            // is this grid line within the canvas bounds?
            let x_canvas = self.options.x_to_canvas(x);
            if x_canvas < 0.0 || x_canvas > self.options.canvas_size.0 as f64 {
                x += self.options.grid_spacing.0;
                continue;
            }

            context.move_to(x_canvas, 0.0);
            context.line_to(x_canvas, self.options.canvas_size.1 as f64);
            context.stroke()?;

            x += self.options.grid_spacing.0;
        }

        // horizontal grid lines (y = ...)
        let hor_bounds = (
            round_to(self.options.center.1 - self.options.scale.1, self.options.grid_spacing.1),
            round_to(self.options.center.1 + self.options.scale.1, self.options.grid_spacing.1),
        );
        let mut y = hor_bounds.0;
        while y <= hor_bounds.1 {
            let y_canvas = self.options.y_to_canvas(y);
            if y_canvas < 0.0 || y_canvas > self.options.canvas_size.1 as f64 {
                y += self.options.grid_spacing.1;
                continue;
            }

            context.move_to(0.0, y_canvas);
            context.line_to(self.options.canvas_size.0 as f64, y_canvas);
            context.stroke()?;

            y += self.options.grid_spacing.1;
        }

        Ok(())
    }

    /// Draw the origin axes if they fall within the viewport.
    fn draw_origin_axes(
        &self,
        context: &Context,
        origin_canvas: CanvasPoint<f64>,
    ) -> Result<(), cairo::Error> {
        context.set_source_rgb(1.0, 1.0, 1.0);
        context.set_line_width(2.5);

        // vertical axis (x = 0)
        if origin_canvas.0 >= 0.0 && origin_canvas.0 <= self.options.canvas_size.0 as f64 {
            context.move_to(origin_canvas.0, 0.0);
            context.line_to(origin_canvas.0, self.options.canvas_size.1 as f64);
            context.stroke()?;
        }

        // horizontal axis (y = 0)
        if origin_canvas.1 >= 0.0 && origin_canvas.1 <= self.options.canvas_size.1 as f64 {
            context.move_to(0.0, origin_canvas.1);
            context.line_to(self.options.canvas_size.0 as f64, origin_canvas.1);
            context.stroke()?;
        }

        Ok(())
    }

    /// Draw the edge labels (the values at the edge of the canvas).
    fn draw_edge_labels(
        &self,
        context: &Context,
        origin_canvas: CanvasPoint<f64>,
    ) -> Result<(), cairo::Error> {
        context.set_source_rgb(1.0, 1.0, 1.0);
        context.set_font_size(24.0);

        let padding = 8.0;

        // top edge, bottom edge
        let x = origin_canvas.0 + padding;
        context.show_text_align(
            &fmt_value(self.options.center.1 + self.options.scale.1),
            (x, padding),
            (0.0, 1.0),
        )?;
        context.show_text_align(
            &fmt_value(self.options.center.1 - self.options.scale.1),
            (x, self.options.canvas_size.1 as f64 - padding),
            (0.0, 0.0),
        )?;

        // left edge, right edge
        let y = origin_canvas.1 + padding;
        context.show_text_align(
            &fmt_value(self.options.center.0 - self.options.scale.0),
            (padding, y),
            (0.0, 1.0),
        )?;
        context.show_text_align(
            &fmt_value(self.options.center.0 + self.options.scale.0),
            (self.options.canvas_size.0 as f64 - padding, y),
            (1.0, 1.0),
        )?;

        Ok(())
    }

    /// Draw the grid line numbers along the origin axes.
    fn draw_grid_line_numbers(
        &self,
        context: &Context,
        origin_canvas: CanvasPoint<f64>,
    ) -> Result<(), cairo::Error> {
        context.set_source_rgba(1.0, 1.0, 1.0, 0.8);
        context.set_font_size(18.0);

        let padding = 6.0;

        // numbers along the horizontal axis
        let vert_bounds = (
            round_to(self.options.center.0 - self.options.scale.0, self.options.grid_spacing.0),
            round_to(self.options.center.0 + self.options.scale.0, self.options.grid_spacing.0),
        );
        let mut x = vert_bounds.0;
        while x <= vert_bounds.1 {
            // skip 0.0; the origin axes already mark it
            if x == 0.0 {
                x += self.options.grid_spacing.0;
                continue;
            }

            let x_canvas = self.options.x_to_canvas(x);
            if x_canvas < 0.0 || x_canvas > self.options.canvas_size.0 as f64 {
                x += self.options.grid_spacing.0;
                continue;
            }

            context.show_text_align(
                &fmt_value(x),
                (x_canvas, origin_canvas.1 + padding),
                (0.5, 1.0),
            )?;

            x += self.options.grid_spacing.0;
        }

        // numbers along the vertical axis
        let hor_bounds = (
            round_to(self.options.center.1 - self.options.scale.1, self.options.grid_spacing.1),
            round_to(self.options.center.1 + self.options.scale.1, self.options.grid_spacing.1),
        );
        let mut y = hor_bounds.0;
        while y <= hor_bounds.1 {
            if y == 0.0 {
                y += self.options.grid_spacing.1;
                continue;
            }

            let y_canvas = self.options.y_to_canvas(y);
            if y_canvas < 0.0 || y_canvas > self.options.canvas_size.1 as f64 {
                y += self.options.grid_spacing.1;
                continue;
            }

            context.show_text_align(
                &fmt_value(y),
                (origin_canvas.0 + padding, y_canvas),
                (0.0, 0.5),
            )?;

            y += self.options.grid_spacing.1;
        }

        Ok(())
    }

    /// Draw the title at the top center of the canvas.
    fn draw_title(&self, context: &Context) -> Result<(), cairo::Error> {
        let Some(title) = self.title.as_deref() else {
            return Ok(());
        };

        context.set_source_rgb(1.0, 1.0, 1.0);
        context.set_font_size(30.0);
        context.show_text_align(
            title,
            (self.options.canvas_size.0 as f64 / 2.0, 14.0),
            (0.5, 1.0),
        )?;

        Ok(())
    }

    /// Draw the curve as connected line segments. Non-finite points break the curve; they are
    /// not plotted.
    fn draw_curve(&self, context: &Context) -> Result<(), cairo::Error> {
        context.set_source_rgb(0.3, 0.5, 1.0);
        context.set_line_width(3.0);

        let mut pen_down = false;
        for point in self.points.iter() {
            if !point.0.is_finite() || !point.1.is_finite() {
                if pen_down {
                    context.stroke()?;
                    pen_down = false;
                }
                continue;
            }

            let canvas = self.options.to_canvas(*point);
            if pen_down {
                context.line_to(canvas.0, canvas.1);
            } else {
                context.move_to(canvas.0, canvas.1);
                pen_down = true;
            }
        }
        if pen_down {
            context.stroke()?;
        }

        Ok(())
    }

    /// Draw a dot at each finite sample point of the curve.
    fn draw_markers(&self, context: &Context) -> Result<(), cairo::Error> {
        context.set_source_rgba(1.0, 0.25, 0.25, 0.6);

        for point in self.points.iter() {
            if !point.0.is_finite() || !point.1.is_finite() {
                continue;
            }

            let canvas = self.options.to_canvas(*point);
            context.arc(canvas.0, canvas.1, 3.0, 0.0, 2.0 * std::f64::consts::PI);
            context.fill()?;
        }

        Ok(())
    }
}
