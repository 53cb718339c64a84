use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use sheet_facade::demo::{self, DemoReport};
use sheet_facade::json_export;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Excel file path (created if it does not exist)
    #[arg(long, short = 'f', required = true)]
    file: PathBuf,

    /// Name of the sheet the demonstration creates
    #[arg(long, short = 's', default_value = "Data")]
    sheet: String,

    /// Print the read-back range as JSON records keyed by the header row
    #[arg(long, short = 'j')]
    json: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        println!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let report = demo::run_demo(&cli.file, &cli.sheet)
        .with_context(|| format!("Demo failed for '{}'", cli.file.display()))?;

    if cli.json {
        let export = json_export::export_range(
            &report.sheet,
            (2, 1),
            (3, 3),
            &report.headers,
            &report.rows,
        );
        println!("{}", json_export::serialize_to_json(&export)?);
    } else {
        print_report(&cli.file, &report);
    }

    Ok(())
}

fn print_report(path: &std::path::Path, report: &DemoReport) {
    if report.created_file {
        println!("Created new file '{}'", path.display());
    } else {
        println!("Loaded existing file '{}'", path.display());
    }

    println!("A2 = {}, B2 = {}", report.first_id, report.first_name);

    let rows: Vec<String> = report
        .rows
        .iter()
        .map(|row| {
            let cells: Vec<String> = row.iter().map(ToString::to_string).collect();
            format!("[{}]", cells.join(", "))
        })
        .collect();
    println!("Read back: [{}]", rows.join(", "));
    println!("Saved '{}'", path.display());
}
