use super::figure::{EmptySeriesPolicy, Figure, Series};
use super::{output_path, PlotError, PlotResult, ResultTable, DEFAULT_CSV, VERSION};
use clap::{App, Arg};
use plotters::style::RGBColor;
use std::path::{Path, PathBuf};

pub const SIZE_IN: (f64, f64) = (7., 5.);
pub const NAME_SUFFIX: &str = "3";
pub const EXTENSION: &str = "png";
pub const LINE_COLOR: RGBColor = RGBColor(31, 119, 180);

/// <algorithm>3.png
pub fn output_name(algorithm: &str) -> String {
    format!("{}{}.{}", algorithm, NAME_SUFFIX, EXTENSION)
}

/// Chart of one algorithm's time vs. input size, no legend
pub fn single_figure(
    table: &ResultTable,
    algorithm: &str,
    policy: EmptySeriesPolicy,
) -> PlotResult<Figure> {
    let series = table.series(algorithm);
    policy.check(&series)?;
    let mut figure = Figure::new(SIZE_IN);
    figure.add_series(Series::from_algorithm(&series, LINE_COLOR, None));
    Ok(figure)
}

/// Saves the single algorithm chart into out_dir and returns the written path.
/// The name becomes the file name, so path separators are rejected.
pub fn render_one(
    table: &ResultTable,
    algorithm: &str,
    out_dir: &Path,
    policy: EmptySeriesPolicy,
) -> PlotResult<PathBuf> {
    if algorithm.contains('/') || algorithm.contains('\\') {
        return Err(PlotError::AlgorithmName(algorithm.to_string()));
    }
    let figure = single_figure(table, algorithm, policy)?;
    let fout = output_path(out_dir, &output_name(algorithm));
    figure.save(&fout)?;
    Ok(fout)
}

/// Takes the CLI arguments that control the plotting of a single algorithm.
/// Returns csv file, algorithm, output directory, show, strict, verbose.
pub fn parse_cli() -> (PathBuf, String, PathBuf, bool, bool, bool) {
    let arg_csvin = Arg::with_name("input_csvfile")
        .help("name of the semicolon separated benchmark file")
        .short("f")
        .long("csvfile")
        .takes_value(true)
        .default_value(DEFAULT_CSV);
    let arg_algorithm = Arg::with_name("algorithm")
        .help("algorithm to plot, exact name as in the algo column")
        .short("a")
        .long("algorithm")
        .takes_value(true)
        .required(true);
    let arg_outdir = Arg::with_name("output_dir")
        .help("directory for the output png, named <algorithm>3.png")
        .short("o")
        .long("outdir")
        .takes_value(true)
        .default_value(".");
    let arg_noshow = Arg::with_name("no_show")
        .help("only save the chart, do not open it")
        .long("no-show")
        .takes_value(false);
    let arg_strict = Arg::with_name("strict")
        .help("fail when the algorithm has no rows instead of plotting an empty chart")
        .long("strict")
        .takes_value(false);
    let arg_verbose = Arg::with_name("verbose")
        .help("print verbose information")
        .short("v")
        .long("verbose")
        .takes_value(false);
    let cli_args = App::new("mst_plot")
        .version(VERSION.unwrap_or("unknown"))
        .about("cli app to plot execution time vs. input size of one MST algorithm")
        .arg(arg_csvin)
        .arg(arg_algorithm)
        .arg(arg_outdir)
        .arg(arg_noshow)
        .arg(arg_strict)
        .arg(arg_verbose)
        .get_matches();
    let csvin = PathBuf::from(cli_args.value_of("input_csvfile").unwrap_or(DEFAULT_CSV));
    let algorithm = cli_args.value_of("algorithm").unwrap_or_default().to_string();
    let outdir = PathBuf::from(cli_args.value_of("output_dir").unwrap_or("."));
    return (
        csvin,
        algorithm,
        outdir,
        !cli_args.is_present("no_show"),
        cli_args.is_present("strict"),
        cli_args.is_present("verbose"),
    );
}
