use std::path::PathBuf;
use std::process::ExitCode;

use dual_axis_chart::api::{ChartConfig, ChartView};
use dual_axis_chart::data::{LoadOptions, load_records};
use dual_axis_chart::error::ChartResult;
use dual_axis_chart::render::SvgRenderer;
use tracing::{error, info, warn};

const USAGE: &str =
    "usage: render_chart [--data <path>] [--config <path>] [--out <path>] [--strict]";

#[derive(Debug)]
struct CliArgs {
    data: PathBuf,
    config: Option<PathBuf>,
    out: PathBuf,
    strict: bool,
}

fn main() -> ExitCode {
    let _ = dual_axis_chart::telemetry::init_default_tracing();

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(Some(args)) => args,
        Ok(None) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(message) => {
            eprintln!("{message}\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "failed to render chart");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &CliArgs) -> ChartResult<()> {
    let config = match &args.config {
        Some(path) => ChartConfig::load(path)?,
        None => ChartConfig::default(),
    };
    let options = if args.strict {
        LoadOptions::strict()
    } else {
        LoadOptions::default()
    };

    let outcome = load_records(&args.data, options)?;
    if !outcome.rejected.is_empty() {
        warn!(rejected = outcome.rejected.len(), "some rows were skipped");
    }

    let viewport = config.viewport;
    let mut view = ChartView::new(SvgRenderer::new(), &outcome.records, config)?;
    view.render()?;
    view.renderer().write_to(&args.out)?;
    info!(
        path = %args.out.display(),
        records = outcome.records.len(),
        "wrote svg chart"
    );

    #[cfg(feature = "cairo-backend")]
    {
        use dual_axis_chart::render::{CairoRenderer, Renderer};

        let png = args.out.with_extension("png");
        let width = i32::try_from(viewport.width).unwrap_or(i32::MAX);
        let height = i32::try_from(viewport.height).unwrap_or(i32::MAX);
        let mut cairo = CairoRenderer::new(width, height)?;
        cairo.render(&view.build_render_frame())?;
        cairo.write_png(&png)?;
        info!(path = %png.display(), "wrote png chart");
    }
    #[cfg(not(feature = "cairo-backend"))]
    let _ = viewport;

    Ok(())
}

/// Returns `Ok(None)` when help was requested.
fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Option<CliArgs>, String> {
    let mut parsed = CliArgs {
        data: PathBuf::from("data/data.csv"),
        config: None,
        out: PathBuf::from("target/out/chart.svg"),
        strict: false,
    };

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--data" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --data".to_owned())?;
                parsed.data = PathBuf::from(value);
            }
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                parsed.config = Some(PathBuf::from(value));
            }
            "--out" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --out".to_owned())?;
                parsed.out = PathBuf::from(value);
            }
            "--strict" => parsed.strict = true,
            "--help" | "-h" => return Ok(None),
            other => return Err(format!("unknown argument `{other}`")),
        }
    }

    Ok(Some(parsed))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> impl Iterator<Item = String> {
        values
            .iter()
            .map(|value| (*value).to_owned())
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn defaults_point_at_bundled_data() {
        let parsed = parse_args(args(&[])).expect("parse").expect("not help");
        assert_eq!(parsed.data, PathBuf::from("data/data.csv"));
        assert_eq!(parsed.out, PathBuf::from("target/out/chart.svg"));
        assert!(parsed.config.is_none());
        assert!(!parsed.strict);
    }

    #[test]
    fn flags_override_defaults() {
        let parsed = parse_args(args(&[
            "--data", "in.csv", "--config", "chart.json", "--out", "out/c.svg", "--strict",
        ]))
        .expect("parse")
        .expect("not help");
        assert_eq!(parsed.data, PathBuf::from("in.csv"));
        assert_eq!(parsed.config, Some(PathBuf::from("chart.json")));
        assert_eq!(parsed.out, PathBuf::from("out/c.svg"));
        assert!(parsed.strict);
    }

    #[test]
    fn help_and_bad_flags() {
        assert!(parse_args(args(&["-h"])).expect("parse").is_none());
        assert_eq!(
            parse_args(args(&["--out"])).expect_err("missing value"),
            "missing value for --out"
        );
        assert!(parse_args(args(&["--png"])).is_err());
    }
}
