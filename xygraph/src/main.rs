mod error;
mod session;

use clap::Parser;
use error::Error;
use rustyline::{error::ReadlineError, DefaultEditor};
use session::Session;
use std::{path::{Path, PathBuf}, process::ExitCode};
use xygraph_compute::plot::{plot_data, PlotData};
use xygraph_graph::Graph;

/// Plots single-variable equations such as `y=x^2` or `sin(x)` to PNG images.
#[derive(Debug, Parser)]
#[command(name = "xygraph", version, about)]
struct Cli {
    /// The equation to plot, e.g. "y=x^2". Omit to enter interactive mode.
    equation: Option<String>,

    /// The number of points to sample.
    #[arg(long, default_value_t = 500)]
    points: usize,

    /// The smallest x value to sample.
    #[arg(long, default_value_t = -10.0, allow_negative_numbers = true)]
    xmin: f64,

    /// The largest x value to sample.
    #[arg(long, default_value_t = 10.0, allow_negative_numbers = true)]
    xmax: f64,

    /// The path to save the rendered image to.
    #[arg(long, default_value = "xygraph.png")]
    save: PathBuf,
}

/// Renders the given plot to a PNG file at `path`.
fn render(data: &PlotData, title: &str, bounds: (f64, f64), path: &Path) -> Result<(), Error> {
    let mut graph = Graph::new();
    graph.set_title(title)
        .set_curve(&data.xs, &data.ys)
        .center_on_range(bounds, data.range)
        .save_png(path)?;
    Ok(())
}

/// Prints a short summary of a successful plot.
fn summarize(data: &PlotData, bounds: (f64, f64), path: &Path) {
    println!("expression: {}", data.expression);
    println!(
        "plotted {} points over x in [{}, {}] ({} finite)",
        data.xs.len(),
        bounds.0,
        bounds.1,
        data.finite_count(),
    );
    println!("y range: [{:.2}, {:.2}]", data.range.0, data.range.1);
    println!("saved graph to {}", path.display());
}

/// Runs the pipeline once and renders the result. Any error is reported by the caller and the
/// process exits non-zero.
fn one_shot(equation: &str, cli: &Cli) -> Result<(), Error> {
    let data = plot_data(equation, cli.xmin, cli.xmax, cli.points)?;
    render(&data, equation, (cli.xmin, cli.xmax), &cli.save)?;
    summarize(&data, (cli.xmin, cli.xmax), &cli.save);
    Ok(())
}

/// Renders and summarizes an accepted interactive submission. Render failures are reported in
/// place; the session stays usable.
fn show(data: &PlotData, session: &Session, path: &Path) {
    match render(data, session.equation(), session.bounds(), path) {
        Ok(()) => summarize(data, session.bounds(), path),
        Err(err) => err.report_to_stderr(),
    }
}

/// Handles one line of interactive input. Returns `Ok(false)` when the session should end.
fn process_line(rl: &mut DefaultEditor, session: &mut Session, path: &Path) -> Result<bool, ReadlineError> {
    let input = rl.readline("> ")?;
    let input = input.trim();
    if input.is_empty() {
        return Ok(true);
    }

    rl.add_history_entry(input)?;

    if matches!(input, "quit" | "exit") {
        return Ok(false);
    }

    if let Some(value) = input.strip_prefix("xmin ") {
        submit_bound(value, session, path, Session::submit_xmin);
    } else if let Some(value) = input.strip_prefix("xmax ") {
        submit_bound(value, session, path, Session::submit_xmax);
    } else {
        match session.submit_equation(input) {
            Ok(data) => show(&data, session, path),
            Err(err) => err.report_to_stderr(),
        }
    }

    Ok(true)
}

/// Parses and submits a new x bound, rendering the updated plot if an equation is present.
fn submit_bound(
    value: &str,
    session: &mut Session,
    path: &Path,
    submit: fn(&mut Session, f64) -> Result<Option<PlotData>, xygraph_compute::plot::Error>,
) {
    let value = value.trim();
    let Ok(parsed) = value.parse::<f64>() else {
        eprintln!("error: `{}` is not a number", value);
        return;
    };

    match submit(session, parsed) {
        Ok(Some(data)) => show(&data, session, path),
        Ok(None) => {
            let (x_min, x_max) = session.bounds();
            println!("x range set to [{}, {}]; type an equation to plot", x_min, x_max);
        },
        Err(err) => err.report_to_stderr(),
    }
}

/// Runs the interactive mode. Engine errors are reported in place and never end the session.
fn interactive(cli: &Cli) {
    println!("xygraph interactive mode");
    println!("type an equation (e.g. x^2, sin(x)) to plot it to {}", cli.save.display());
    println!("commands: xmin <value>, xmax <value>, quit");

    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(err) => {
            eprintln!("{}", err);
            return;
        },
    };
    let mut session = Session::new(cli.points);

    loop {
        match process_line(&mut rl, &mut session, &cli.save) {
            Ok(true) => (),
            Ok(false) => break,
            Err(err) => {
                match err {
                    ReadlineError::Eof | ReadlineError::Interrupted => (),
                    _ => eprintln!("{}", err),
                }
                break;
            },
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match &cli.equation {
        Some(equation) => match one_shot(equation, &cli) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                err.report_to_stderr();
                ExitCode::FAILURE
            },
        },
        None => {
            interactive(&cli);
            ExitCode::SUCCESS
        },
    }
}
