use super::figure::{EmptySeriesPolicy, Figure, Series};
use super::{PlotResult, ResultTable, DEFAULT_CSV, VERSION};
use clap::{App, Arg};
use plotters::style::{RGBColor, BLACK, BLUE, RED};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const SIZE_IN: (f64, f64) = (14., 8.);
pub const OUTPUT_NAME: &str = "all2.png";

/// Color and legend label of one configured algorithm
#[derive(Debug, Clone)]
pub struct SeriesStyle {
    pub color: RGBColor,
    pub label: String,
}

/// The algorithms of the overlay chart, in draw order
#[derive(Debug, Clone)]
pub struct OverlayConfig {
    pub entries: Vec<(String, SeriesStyle)>,
}

impl OverlayConfig {
    pub fn new() -> OverlayConfig {
        OverlayConfig {
            entries: Vec::new(),
        }
    }

    /// appends an algorithm, drawn on top of the ones already present
    pub fn with(mut self, algorithm: &str, color: RGBColor, label: &str) -> OverlayConfig {
        self.entries.push((
            algorithm.to_string(),
            SeriesStyle {
                color,
                label: label.to_string(),
            },
        ));
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn algorithms(&self) -> Vec<&str> {
        self.entries.iter().map(|(a, _)| a.as_str()).collect()
    }
}

impl Default for OverlayConfig {
    /// The benchmarked MST algorithms, matplotlib's r g b m y k colors
    fn default() -> Self {
        OverlayConfig::new()
            .with("Prim", RED, "Primov algoritam")
            .with("Kruskal", RGBColor(0, 128, 0), "Kruskalov algoritam")
            .with("Boruvka", BLUE, "Boruvkin algoritam")
            .with("Karger", RGBColor(191, 0, 191), "Kargerov algoritam")
            .with("FredmanTarjan", RGBColor(191, 191, 0), "Fredman-Tardžanov algoritam")
            .with("Chazelle", BLACK, "Šazelov algoritam")
    }
}

/// One labelled series per configured algorithm, in configuration order.
/// Algorithms without rows keep their legend entry.
pub fn overlay_figure(
    table: &ResultTable,
    config: &OverlayConfig,
    policy: EmptySeriesPolicy,
) -> PlotResult<Figure> {
    let mut figure = Figure::new(SIZE_IN);
    figure.legend = true;
    for (algorithm, style) in config.entries.iter() {
        let series = table.series(algorithm);
        policy.check(&series)?;
        debug!("overlay {} with {} points", algorithm, series.len());
        figure.add_series(Series::from_algorithm(&series, style.color, Some(&style.label)));
    }
    Ok(figure)
}

/// Saves the overlay chart to fout and returns the written path
pub fn render_all(
    table: &ResultTable,
    config: &OverlayConfig,
    fout: &Path,
    policy: EmptySeriesPolicy,
) -> PlotResult<PathBuf> {
    let figure = overlay_figure(table, config, policy)?;
    figure.save(fout)?;
    Ok(fout.to_path_buf())
}

/// Takes the CLI arguments that control the plotting of all configured algorithms.
/// Returns csv file, output file, show, strict, verbose.
pub fn parse_cli() -> (PathBuf, PathBuf, bool, bool, bool) {
    let arg_csvin = Arg::with_name("input_csvfile")
        .help("name of the semicolon separated benchmark file")
        .short("f")
        .long("csvfile")
        .takes_value(true)
        .default_value(DEFAULT_CSV);
    let arg_out = Arg::with_name("output_file")
        .help("name of the output image, svg when the extension is .svg, png otherwise")
        .short("o")
        .long("output")
        .takes_value(true)
        .default_value(OUTPUT_NAME);
    let arg_noshow = Arg::with_name("no_show")
        .help("only save the chart, do not open it")
        .long("no-show")
        .takes_value(false);
    let arg_strict = Arg::with_name("strict")
        .help("fail when a configured algorithm has no rows")
        .long("strict")
        .takes_value(false);
    let arg_verbose = Arg::with_name("verbose")
        .help("print verbose information")
        .short("v")
        .long("verbose")
        .takes_value(false);
    let cli_args = App::new("mst_plot_all")
        .version(VERSION.unwrap_or("unknown"))
        .about("cli app to plot execution time vs. input size of all MST algorithms together")
        .arg(arg_csvin)
        .arg(arg_out)
        .arg(arg_noshow)
        .arg(arg_strict)
        .arg(arg_verbose)
        .get_matches();
    let csvin = PathBuf::from(cli_args.value_of("input_csvfile").unwrap_or(DEFAULT_CSV));
    let fout = PathBuf::from(cli_args.value_of("output_file").unwrap_or(OUTPUT_NAME));
    return (
        csvin,
        fout,
        !cli_args.is_present("no_show"),
        cli_args.is_present("strict"),
        cli_args.is_present("verbose"),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_order() {
        let config = OverlayConfig::default();
        assert_eq!(
            config.algorithms(),
            vec!["Prim", "Kruskal", "Boruvka", "Karger", "FredmanTarjan", "Chazelle"]
        );
    }

    #[test]
    fn custom_config_replaces_defaults() {
        let config = OverlayConfig::new().with("Prim", RED, "prim");
        let table = ResultTable::default();
        let figure = overlay_figure(&table, &config, EmptySeriesPolicy::Render).unwrap();
        assert_eq!(figure.legend_entries(), vec!["prim"]);
        assert_eq!(figure.pixels(), (2100, 1200));
    }
}
