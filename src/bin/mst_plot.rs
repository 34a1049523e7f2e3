use mst_plot::figure::EmptySeriesPolicy;
use mst_plot::single::{parse_cli, render_one};
use mst_plot::viewer::viewer_for;
use mst_plot::{init_tracing, ResultTable};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (csvin, algorithm, outdir, show, strict, verbose) = parse_cli();
    init_tracing(verbose);
    println!(
        "read data from {} and plot {} to {}",
        csvin.display(),
        algorithm,
        outdir.display()
    );
    let table = ResultTable::from_csv(&csvin)?;
    let series = table.series(&algorithm);
    if series.is_empty() {
        println!(
            "no rows for {}, available algorithms: {}",
            algorithm,
            table.algorithms().join(", ")
        );
    } else {
        print!("{}", series);
    }
    let fout = render_one(&table, &algorithm, &outdir, EmptySeriesPolicy::from_strict(strict))?;
    println!("saved {}", fout.display());
    viewer_for(show).show(&fout)?;
    Ok(())
}
