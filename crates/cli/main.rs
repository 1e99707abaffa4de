use catalog::{
    build_score_histogram, build_type_totals, build_yearly_type_counts, load_titles,
    normalize_to_percentages,
};
use chart::ChartSpec;
use config::Config;

use clap::builder::PossibleValuesParser;
use clap::Parser;
use env_logger::Env;
use polars::prelude::DataFrame;
use std::error::Error;
use std::path::PathBuf;
use std::process;

use log::{debug, error, info};

mod report;

use report::{report, OutputType};

/// Render release trend, type share and IMDB score charts from a titles dataset
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
struct Args {
    #[arg(
        long = "config",
        default_value = config::DEFAULT_CONFIG_FILE,
        help = "config file, defaults are used when it does not exist"
    )]
    config: String,

    #[arg(long = "dataset", help = "titles csv file, overrides the config, e.g. datasets/titles.csv")]
    dataset: Option<String>,

    #[arg(long = "out-dir", help = "directory the charts are written to")]
    out_dir: Option<String>,

    #[arg(
        short = 'R',
        long = "report",
        value_parser = PossibleValuesParser::new(["none", "polar"]),
        default_value = "none",
        help = "also print the derived tables"
    )]
    report: String,
}

type ChartResult = Result<PathBuf, Box<dyn Error>>;
type ChartStep = fn(&DataFrame, &Config, OutputType) -> ChartResult;

fn chart_spec(conf: &Config, chart: &config::Chart) -> ChartSpec {
    ChartSpec::new(conf.output_path(chart), &chart.title, chart.width, chart.height)
}

fn line_chart(records: &DataFrame, conf: &Config, out: OutputType) -> ChartResult {
    let yearly = build_yearly_type_counts(records)?;
    report(out, "yearly_type_counts", yearly.frame())?;
    let rows = yearly.rows()?;
    let path = chart::render_line(&chart_spec(conf, &conf.charts.line), &rows, yearly.types())?;
    Ok(path)
}

fn pie_chart(records: &DataFrame, conf: &Config, out: OutputType) -> ChartResult {
    let totals = build_type_totals(records)?;
    let shares = normalize_to_percentages(&totals)?;
    report(out, "type_totals", shares.frame())?;
    let path = chart::render_pie(
        &chart_spec(conf, &conf.charts.pie),
        &shares.percentages()?,
        |kind| conf.label(kind).to_string(),
    )?;
    Ok(path)
}

fn bar_chart(records: &DataFrame, conf: &Config, out: OutputType) -> ChartResult {
    let histogram = build_score_histogram(records)?;
    report(out, "score_histogram", histogram.frame())?;
    let path = chart::render_bar(&chart_spec(conf, &conf.charts.bar), &histogram.bins()?)?;
    Ok(path)
}

/// Loads the dataset and draws every chart. A failed chart does not stop the
/// following ones; the run fails if any of them did.
fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let mut conf = Config::load_or_default(&args.config)?;
    if let Some(dataset) = args.dataset {
        conf.dataset = dataset;
    }
    if let Some(out_dir) = args.out_dir {
        conf.output_dir = out_dir;
    }
    debug!("config: {:?}", conf);

    let out = OutputType::from_str(&args.report).unwrap_or(OutputType::NONE);
    let records = load_titles(&conf.dataset)?;
    std::fs::create_dir_all(&conf.output_dir)?;

    let steps: [(&str, ChartStep); 3] = [
        ("line", line_chart),
        ("pie", pie_chart),
        ("bar", bar_chart),
    ];
    let mut failed = vec![];
    for (name, step) in steps {
        match step(&records, &conf, out) {
            Ok(path) => info!("{} chart done: {}", name, path.display()),
            Err(e) => {
                error!("{} chart failed: {}", name, e);
                failed.push(format!("{}: {}", name, e));
            }
        }
    }

    if failed.is_empty() {
        Ok(())
    } else {
        Err(format!("charts failed: {}", failed.join("; ")).into())
    }
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if let Err(e) = run(args) {
        error!("{}", e);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::Path;

    fn args(dataset: &Path, out_dir: &Path) -> Args {
        Args::try_parse_from([
            "title-charts",
            "--config",
            "no/such/config.yml",
            "--dataset",
            dataset.to_str().unwrap(),
            "--out-dir",
            out_dir.to_str().unwrap(),
        ])
        .unwrap()
    }

    #[test]
    fn test_default_args() {
        let args = Args::try_parse_from(["title-charts"]).unwrap();
        assert_eq!(args.config, config::DEFAULT_CONFIG_FILE);
        assert_eq!(args.dataset, None);
        assert_eq!(args.out_dir, None);
        assert_eq!(args.report, "none");
        assert!(Args::try_parse_from(["title-charts", "--report", "table"]).is_err());
        assert!(Args::try_parse_from(["title-charts", "--report", "csv"]).is_err());
    }

    #[test]
    fn test_run_missing_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let err = run(args(&dir.path().join("titles.csv"), dir.path())).unwrap_err();
        assert!(err.to_string().contains("titles.csv"));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_run_reports_every_failed_chart() {
        let dir = tempfile::tempdir().unwrap();
        let dataset = dir.path().join("titles.csv");
        let mut file = std::fs::File::create(&dataset).unwrap();
        write!(file, "id,title,release_year\ntm1,Alpha,2020\n").unwrap();

        let err = run(args(&dataset, &dir.path().join("out"))).unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("charts failed: line: "), "{}", message);
        assert!(message.contains("; pie: required column `type` is missing"));
        assert!(message.contains("; bar: required column `imdb_score` is missing"));
    }

    #[test]
    fn test_run_writes_three_charts() {
        let dir = tempfile::tempdir().unwrap();
        let dataset = dir.path().join("titles.csv");
        let mut file = std::fs::File::create(&dataset).unwrap();
        write!(
            file,
            "id,title,type,release_year,imdb_score\n\
             tm1,Alpha,MOVIE,2019,7.1\n\
             ts1,Beta,SHOW,2020,\n\
             tm2,Gamma,MOVIE,2021,6.4\n"
        )
        .unwrap();
        let out_dir = dir.path().join("out");

        match run(args(&dataset, &out_dir)) {
            Ok(()) => {}
            // plotters needs a system font to draw text
            Err(e) if e.to_string().to_lowercase().contains("font") => {
                eprintln!("skipping, no font available: {}", e);
                return;
            }
            Err(e) => panic!("run failed: {}", e),
        }
        let mut written: Vec<String> = std::fs::read_dir(&out_dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        written.sort();
        assert_eq!(written, vec!["barplot.png", "linplot.png", "pieplot.png"]);
        for name in &written {
            assert!(std::fs::metadata(out_dir.join(name)).unwrap().len() > 0);
        }
    }

    #[test]
    fn test_pie_chart_on_empty_dataset() {
        let records = polars::df!(
            "release_year" => Vec::<i64>::new(),
            "type" => Vec::<&str>::new()
        )
        .unwrap();
        let err = pie_chart(&records, &Config::default(), OutputType::NONE).unwrap_err();
        assert_eq!(err.to_string(), "cannot compute percentages: total count is zero");
    }
}
