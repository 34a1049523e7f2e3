use serde::Deserialize;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::{debug, info, Level};
pub mod error;
pub mod figure;
pub mod overlay;
pub mod single;
pub mod viewer;

pub use error::{PlotError, PlotResult};

pub const VERSION: Option<&str> = option_env!("CARGO_PKG_VERSION");

pub const DELIMITER: u8 = b';';
pub const DEFAULT_CSV: &str = "benchDense.csv";
pub const DPI: f64 = 150.;

pub const X_DESC: &str = "Broj čvorova";
pub const Y_DESC: &str = "Vreme izvršavanja(ms)";
pub const TITLE: &str = "Vreme izvršavanja u zavisnosti od veličine ulaza (broja čvorova)";

const COLUMNS: [&str; 3] = ["algo", "n", "ms"];

/// One benchmark observation, a row of the semicolon separated results file
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResultRow {
    #[serde(rename = "algo")]
    pub algorithm: String,
    #[serde(rename = "n")]
    pub input_size: u64,
    #[serde(rename = "ms")]
    pub elapsed_ms: f64,
}

/// The benchmark runs in file order, never re-sorted
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultTable {
    pub rows: Vec<ResultRow>,
}

/// The (n, ms) points of one algorithm, in table order
#[derive(Debug, Clone, PartialEq)]
pub struct AlgorithmSeries {
    pub algorithm: String,
    pub points: Vec<(u64, f64)>,
}

impl ResultTable {
    pub fn new(capacity: usize) -> ResultTable {
        ResultTable {
            rows: Vec::with_capacity(capacity),
        }
    }

    /// Init a ResultTable from the benchmark csv.
    /// Columns are matched by header name (algo, n, ms), extra columns are ignored.
    /// Any unparsable row fails the whole load, nothing partial is returned.
    pub fn from_csv<P: AsRef<Path>>(fin: P) -> PlotResult<ResultTable> {
        let fin = fin.as_ref();
        let format_err = |reason: String| PlotError::DataFormat {
            path: fin.to_path_buf(),
            reason,
        };
        let file = File::open(fin).map_err(|e| format_err(format!("could not open file: {}", e)))?;
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(DELIMITER)
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(file);

        let headers = rdr
            .headers()
            .map_err(|e| format_err(format!("could not read header: {}", e)))?
            .clone();
        if headers.iter().all(|h| h.is_empty()) {
            return Err(format_err("missing header row".to_string()));
        }
        for column in COLUMNS.iter() {
            if !headers.iter().any(|h| h == *column) {
                return Err(format_err(format!("missing column '{}'", column)));
            }
        }

        let mut table = ResultTable::new(1024);
        for (i, record) in rdr.deserialize::<ResultRow>().enumerate() {
            let row = record.map_err(|e| format_err(format!("data row {}: {}", i + 1, e)))?;
            if !row.elapsed_ms.is_finite() || row.elapsed_ms < 0. {
                return Err(format_err(format!(
                    "data row {}: invalid elapsed time {}",
                    i + 1,
                    row.elapsed_ms
                )));
            }
            table.rows.push(row);
        }
        info!("loaded {} rows from {}", table.len(), fin.display());
        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// rows whose algorithm matches exactly (case-sensitive);
    /// an unknown name gives an empty series
    pub fn series(&self, algorithm: &str) -> AlgorithmSeries {
        let points: Vec<(u64, f64)> = self
            .rows
            .iter()
            .filter(|r| r.algorithm == algorithm)
            .map(|r| (r.input_size, r.elapsed_ms))
            .collect();
        debug!("series {} has {} points", algorithm, points.len());
        AlgorithmSeries {
            algorithm: algorithm.to_string(),
            points,
        }
    }

    /// distinct algorithm names in first-seen order
    pub fn algorithms(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for r in self.rows.iter() {
            if !names.contains(&r.algorithm.as_str()) {
                names.push(&r.algorithm);
            }
        }
        names
    }
}

impl AlgorithmSeries {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// points as plotting coordinates
    pub fn xy(&self) -> Vec<(f64, f64)> {
        self.points.iter().map(|&(n, ms)| (n as f64, ms)).collect()
    }
}

impl std::fmt::Display for ResultTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "algo;n;ms\n")?;
        for r in self.rows.iter() {
            write!(f, "{};{};{}\n", r.algorithm, r.input_size, r.elapsed_ms)?
        }
        Ok(())
    }
}

impl std::fmt::Display for AlgorithmSeries {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: n;ms\n", self.algorithm)?;
        for (n, ms) in self.points.iter() {
            write!(f, "{};{}\n", n, ms)?
        }
        Ok(())
    }
}

/// None for an empty slice, NaN values are never picked
pub fn min_and_max(s: &[f64]) -> Option<(f64, f64)> {
    let mut self_iter = s.iter().filter(|v| !v.is_nan());
    let (mut min, mut max) = match self_iter.next() {
        Some(v) => (*v, *v),
        None => return None,
    };
    for es in self_iter {
        if *es > max {
            max = *es
        }
        if *es < min {
            min = *es
        }
    }
    Some((min, max))
}

/// installs the fmt subscriber for the binaries, debug level when verbose
pub fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();
}

/// joins the output directory and file name, creating nothing
pub fn output_path(dir: &Path, name: &str) -> PathBuf {
    let mut p = dir.to_path_buf();
    p.push(name);
    p
}
