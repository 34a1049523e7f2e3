use super::{min_and_max, AlgorithmSeries, PlotError, PlotResult, DPI, TITLE, X_DESC, Y_DESC};
use plotters::coord::Shift;
use plotters::element::Pixel;
use plotters::prelude::*;
use std::ops::Range;
use std::path::Path;
use tracing::{info, warn};

/// What to do when an algorithm has no rows in the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptySeriesPolicy {
    /// draw the empty series (and its legend entry) and carry on
    Render,
    /// stop before anything is written
    Fail,
}

impl Default for EmptySeriesPolicy {
    fn default() -> Self {
        EmptySeriesPolicy::Render
    }
}

impl EmptySeriesPolicy {
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            EmptySeriesPolicy::Fail
        } else {
            EmptySeriesPolicy::Render
        }
    }

    pub fn check(self, series: &AlgorithmSeries) -> PlotResult<()> {
        if !series.is_empty() {
            return Ok(());
        }
        match self {
            EmptySeriesPolicy::Render => {
                warn!("no rows for algorithm {}, plotting an empty series", series.algorithm);
                Ok(())
            }
            EmptySeriesPolicy::Fail => Err(PlotError::EmptySeries(series.algorithm.clone())),
        }
    }
}

/// One line of the chart
#[derive(Debug, Clone)]
pub struct Series {
    pub label: Option<String>,
    pub color: RGBColor,
    pub points: Vec<(f64, f64)>,
}

impl Series {
    pub fn from_algorithm(
        series: &AlgorithmSeries,
        color: RGBColor,
        label: Option<&str>,
    ) -> Series {
        Series {
            label: label.map(|l| l.to_string()),
            color,
            points: series.xy(),
        }
    }
}

/// An explicit chart: canvas size in inches, resolution, text and the series in draw order.
/// Nothing is drawn until `save` is called.
#[derive(Debug, Clone)]
pub struct Figure {
    pub size_in: (f64, f64),
    pub dpi: f64,
    pub title: String,
    pub x_desc: String,
    pub y_desc: String,
    pub series: Vec<Series>,
    pub legend: bool,
}

impl Figure {
    pub fn new(size_in: (f64, f64)) -> Figure {
        Figure {
            size_in,
            dpi: DPI,
            title: TITLE.to_string(),
            x_desc: X_DESC.to_string(),
            y_desc: Y_DESC.to_string(),
            series: Vec::new(),
            legend: false,
        }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    pub fn pixels(&self) -> (u32, u32) {
        (
            (self.size_in.0 * self.dpi).round() as u32,
            (self.size_in.1 * self.dpi).round() as u32,
        )
    }

    /// labels shown in the legend, empty series included
    pub fn legend_entries(&self) -> Vec<&str> {
        if !self.legend {
            return Vec::new();
        }
        self.series.iter().filter_map(|s| s.label.as_deref()).collect()
    }

    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }

    /// data extent plus 5% on each side; the unit square when there is no data
    pub fn ranges(&self) -> (Range<f64>, Range<f64>) {
        let xs: Vec<f64> = self.series.iter().flat_map(|s| s.points.iter().map(|p| p.0)).collect();
        let ys: Vec<f64> = self.series.iter().flat_map(|s| s.points.iter().map(|p| p.1)).collect();
        (padded(min_and_max(&xs)), padded(min_and_max(&ys)))
    }

    /// font size in pixels for a size in points at the figure resolution
    fn font_px(&self, pt: f64) -> u32 {
        (pt * self.dpi / 72.).round() as u32
    }

    /// renders to svg when the extension is svg, to a bitmap (png) otherwise
    pub fn save<P: AsRef<Path>>(&self, fout: P) -> PlotResult<()> {
        let fout = fout.as_ref();
        let is_svg = fout
            .extension()
            .map(|e| e.eq_ignore_ascii_case("svg"))
            .unwrap_or(false);
        let drawn = if is_svg {
            self.draw(SVGBackend::new(fout, self.pixels()).into_drawing_area())
        } else {
            self.draw(BitMapBackend::new(fout, self.pixels()).into_drawing_area())
        };
        drawn.map_err(|e| PlotError::Render {
            path: fout.to_path_buf(),
            reason: e.to_string(),
        })?;
        info!(
            "saved {} series, {} points to {}",
            self.series.len(),
            self.point_count(),
            fout.display()
        );
        Ok(())
    }

    fn draw<DB>(&self, root: DrawingArea<DB, Shift>) -> Result<(), Box<dyn std::error::Error>>
    where
        DB: DrawingBackend,
        DB::ErrorType: 'static,
    {
        let (xrange, yrange) = self.ranges();
        let decimals = tick_decimals(yrange.end - yrange.start);
        let text_px = self.font_px(10.);
        root.fill(&WHITE)?;
        let mut chart = ChartBuilder::on(&root)
            .caption(&self.title, ("sans-serif", self.font_px(12.)))
            .margin(text_px)
            .x_label_area_size(text_px * 3)
            .y_label_area_size(text_px * 4)
            .build_cartesian_2d(xrange, yrange)?;
        chart
            .configure_mesh()
            .disable_mesh()
            .set_all_tick_mark_size(4)
            .label_style(("sans-serif", text_px))
            .x_desc(self.x_desc.as_str())
            .y_desc(self.y_desc.as_str())
            .x_label_formatter(&|x: &f64| format!("{:.0}", x))
            .y_label_formatter(&|y: &f64| format!("{:.*}", decimals, y))
            .draw()?;

        for s in self.series.iter() {
            let color = s.color;
            let line = chart.draw_series(LineSeries::new(
                s.points.iter().copied(),
                color.stroke_width(2),
            ))?;
            if let Some(label) = &s.label {
                line.label(label.clone()).legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
                });
            }
            // one pixel marker per measurement
            chart.draw_series(s.points.iter().map(|&p| Pixel::new(p, color)))?;
        }

        if self.legend {
            chart
                .configure_series_labels()
                .position(SeriesLabelPosition::UpperLeft)
                .label_font(("sans-serif", text_px))
                .background_style(&WHITE.mix(0.8))
                .border_style(&BLACK)
                .draw()?;
        }
        root.present()?;
        Ok(())
    }
}

/// decimals for the tick labels over the span, at most 6;
/// ten labels with 1-2-5 steps never need a power of ten below span / 50
fn tick_decimals(span: f64) -> usize {
    if !(span > 0.) {
        return 0;
    }
    let step = span / 50.;
    (-step.log10()).ceil().max(0.).min(6.) as usize
}

fn padded(extent: Option<(f64, f64)>) -> Range<f64> {
    match extent {
        None => 0.0..1.0,
        Some((min, max)) if min == max => (min - 1.)..(max + 1.),
        Some((min, max)) => {
            let margin = (max - min) / 20.;
            (min - margin)..(max + margin)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixels_follow_dpi() {
        assert_eq!(Figure::new((7., 5.)).pixels(), (1050, 750));
        assert_eq!(Figure::new((14., 8.)).pixels(), (2100, 1200));
    }

    #[test]
    fn empty_figure_has_unit_ranges() {
        let (x, y) = Figure::new((7., 5.)).ranges();
        assert_eq!(x, 0.0..1.0);
        assert_eq!(y, 0.0..1.0);
    }

    #[test]
    fn ranges_are_padded() {
        let mut fig = Figure::new((7., 5.));
        fig.add_series(Series {
            label: None,
            color: RED,
            points: vec![(0., 10.), (100., 30.)],
        });
        let (x, y) = fig.ranges();
        assert_eq!(x, -5.0..105.0);
        assert_eq!(y, 9.0..31.0);
    }

    #[test]
    fn tick_decimals_follow_span() {
        assert_eq!(tick_decimals(110.), 0);
        assert_eq!(tick_decimals(10.), 1);
        assert_eq!(tick_decimals(0.66), 2);
        assert_eq!(tick_decimals(0.004), 5);
        assert_eq!(tick_decimals(1e-12), 6);
        assert_eq!(tick_decimals(0.), 0);
    }

    #[test]
    fn single_point_range_is_widened() {
        assert_eq!(padded(Some((4., 4.))), 3.0..5.0);
    }

    #[test]
    fn legend_only_when_enabled() {
        let mut fig = Figure::new((7., 5.));
        fig.add_series(Series {
            label: Some("x".to_string()),
            color: BLUE,
            points: vec![],
        });
        assert!(fig.legend_entries().is_empty());
        fig.legend = true;
        assert_eq!(fig.legend_entries(), vec!["x"]);
    }

    #[test]
    fn strict_policy_rejects_empty() {
        let empty = AlgorithmSeries {
            algorithm: "Prim".to_string(),
            points: vec![],
        };
        assert!(EmptySeriesPolicy::Render.check(&empty).is_ok());
        match EmptySeriesPolicy::Fail.check(&empty) {
            Err(PlotError::EmptySeries(name)) => assert_eq!(name, "Prim"),
            other => panic!("unexpected {:?}", other),
        }
    }
}
