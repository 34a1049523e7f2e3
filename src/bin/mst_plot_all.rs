use mst_plot::figure::EmptySeriesPolicy;
use mst_plot::overlay::{parse_cli, render_all, OverlayConfig};
use mst_plot::viewer::viewer_for;
use mst_plot::{init_tracing, ResultTable};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (csvin, fout, show, strict, verbose) = parse_cli();
    init_tracing(verbose);
    println!("read data from {} and plot to {}", csvin.display(), fout.display());
    let table = ResultTable::from_csv(&csvin)?;
    let config = OverlayConfig::default();
    let fout = render_all(&table, &config, &fout, EmptySeriesPolicy::from_strict(strict))?;
    println!("saved {}", fout.display());
    viewer_for(show).show(&fout)?;
    Ok(())
}
