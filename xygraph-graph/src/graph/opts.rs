use super::point::{CanvasPoint, GraphPoint};

/// Options to use when drawing a graph.
#[derive(Clone, Copy, Debug)]
pub struct GraphOptions {
    /// The width and height of the canvas, in pixels.
    ///
    /// The default value is `(1000, 700)`.
    pub canvas_size: CanvasPoint<u16>,

    /// The `(x, y)` point at which to center the graph.
    ///
    /// This field will automatically be computed when calling
    /// [`Graph::center_on_range`](super::Graph::center_on_range).
    ///
    /// The default value is `(0.0, 0.0)`.
    pub center: GraphPoint<f64>,

    /// The `(x, y)` scale of the graph.
    ///
    /// The scale indicates the distance, in graph units, from the center of the canvas to the
    /// edge of the canvas. For example, when the graph is centered at `(0.0, 0.0)` with a scale
    /// of `(10.0, 10.0)`, the visible graph will be from `(-10.0, -10.0)` to `(10.0, 10.0)`.
    ///
    /// This field will automatically be computed when calling
    /// [`Graph::center_on_range`](super::Graph::center_on_range).
    ///
    /// The default value is `(10.0, 10.0)`.
    pub scale: GraphPoint<f64>,

    /// The number of graph units between grid lines, given as a pair of `(x, y)` units.
    ///
    /// This field will automatically be computed when calling
    /// [`Graph::center_on_range`](super::Graph::center_on_range).
    ///
    /// The default value is `(2.0, 2.0)`.
    pub grid_spacing: GraphPoint<f64>,

    /// The opacity of the grid lines, given as a value in the range `0.0` to `1.0`.
    ///
    /// The default value is `0.5`.
    pub grid_opacity: f64,

    /// Whether to mark each sample point on the curve with a dot.
    ///
    /// The default value is `true`.
    pub draw_markers: bool,
}

impl Default for GraphOptions {
    fn default() -> GraphOptions {
        GraphOptions {
            canvas_size: CanvasPoint(1000, 700),
            center: GraphPoint(0.0, 0.0),
            scale: GraphPoint(10.0, 10.0),
            grid_spacing: GraphPoint(2.0, 2.0),
            grid_opacity: 0.5,
            draw_markers: true,
        }
    }
}

impl GraphOptions {
    /// Converts an x-value in **graph** space to an x-value in **canvas** space.
    pub(crate) fn x_to_canvas(&self, x: f64) -> f64 {
        let graph_space_range = self.scale.0 * 2.0;

        // normalize x-value to [0.0, 1.0], where 0.0 indicates left-edge of visible graph, 1.0
        // indicates right-edge of visible graph
        let normalized = (x - self.center.0) / graph_space_range + 0.5;

        // convert normalized x-value to canvas space
        normalized * self.canvas_size.0 as f64
    }

    /// Converts a y-value in **graph** space to a y-value in **canvas** space.
    pub(crate) fn y_to_canvas(&self, y: f64) -> f64 {
        let graph_space_range = self.scale.1 * 2.0;

        // normalize y-value to [0.0, 1.0], then flip the normalized value so 0.0 is top, 1.0 is
        // bottom; the y-axis grows downwards in canvas space
        let normalized = 0.5 - (y - self.center.1) / graph_space_range;

        // convert normalized y-value to canvas space
        normalized * self.canvas_size.1 as f64
    }

    /// Converts a point in **graph** space to **canvas** space.
    pub fn to_canvas(&self, point: GraphPoint<f64>) -> CanvasPoint<f64> {
        CanvasPoint(
            self.x_to_canvas(point.0),
            self.y_to_canvas(point.1),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test the conversion functions from graph to canvas space.
    #[test]
    fn graph_to_canvas() {
        let options = GraphOptions {
            canvas_size: CanvasPoint(465, 917),
            center: GraphPoint(-3.0, 2.41),
            scale: GraphPoint(3.59, 5.69),
            ..Default::default()
        };

        assert_eq!(
            options.x_to_canvas(options.center.0 - options.scale.0),
            0.0,
        );
        assert_eq!(
            options.x_to_canvas(options.center.0 + options.scale.0),
            options.canvas_size.0 as f64,
        );
        assert_eq!(
            options.y_to_canvas(options.center.1 - options.scale.1),
            options.canvas_size.1 as f64,
        );
    }

    #[test]
    fn center_maps_to_canvas_center() {
        let options = GraphOptions::default();
        let canvas = options.to_canvas(options.center);
        assert_eq!(canvas, CanvasPoint(500.0, 350.0));
    }
}
