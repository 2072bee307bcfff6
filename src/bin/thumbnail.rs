use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use trace_thumbnail::ThumbnailError;
use trace_thumbnail::api::{ThumbnailConfig, ThumbnailEngine};
use trace_thumbnail::core::PlotTarget;
use trace_thumbnail::fetch::HttpContentFetcher;
use trace_thumbnail::render::PngRenderer;
use trace_thumbnail::telemetry::init_default_tracing;

const USAGE: &str = "usage: thumbnail trace [<reference>] [--dpi <n>] --output <path> [--input <file>] [--config <path>]\n       thumbnail simulation [<reference>] <stimulus|simulation> [--width <px>] [--height <px>] --output <path> [--input <file>] [--config <path>]";

const AUTH_TOKEN_ENV: &str = "THUMBNAIL_AUTH_TOKEN";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommandKind {
    Trace,
    Simulation,
}

#[derive(Debug)]
struct CliArgs {
    command: CommandKind,
    positionals: Vec<String>,
    dpi: Option<u32>,
    width: Option<u32>,
    height: Option<u32>,
    output: PathBuf,
    input: Option<PathBuf>,
    config: Option<PathBuf>,
}

/// Where the container or document bytes come from.
#[derive(Debug)]
enum Source {
    Remote(String),
    File(PathBuf),
}

fn main() {
    let _ = init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let config = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
            ThumbnailConfig::from_json_str(&raw).map_err(describe)?
        }
        None => ThumbnailConfig::default(),
    };
    let auth_token = std::env::var(AUTH_TOKEN_ENV).unwrap_or_default();

    let fetcher = HttpContentFetcher::new(Duration::from_secs(config.fetch_timeout_secs))
        .map_err(describe)?;
    let mut engine = ThumbnailEngine::new(fetcher, PngRenderer::new(), config).map_err(describe)?;

    let image = match args.command {
        CommandKind::Trace => {
            let [reference] = positionals::<1>(&args, "trace")?;
            match source(reference, &args)? {
                Source::Remote(reference) => engine
                    .render_trace(&reference, &auth_token, args.dpi)
                    .map_err(describe)?,
                Source::File(path) => engine
                    .render_trace_bytes(&read_bytes(&path)?, args.dpi)
                    .map_err(describe)?,
            }
        }
        CommandKind::Simulation => {
            let [reference, target] = positionals::<2>(&args, "simulation")?;
            let target = target
                .as_deref()
                .ok_or_else(|| format!("missing plot target\n{USAGE}"))?
                .parse::<PlotTarget>()
                .map_err(describe)?;
            let rendered = match source(reference, &args)? {
                Source::Remote(reference) => engine
                    .render_simulation_plot(&reference, &auth_token, target, args.width, args.height)
                    .map_err(describe)?,
                Source::File(path) => engine
                    .render_simulation_bytes(&read_bytes(&path)?, target, args.width, args.height)
                    .map_err(describe)?,
            };
            let Some(image) = rendered else {
                println!("no {target} data to plot, nothing written");
                return Ok(());
            };
            image
        }
    };

    fs::write(&args.output, &image)
        .map_err(|err| format!("failed to write `{}`: {err}", args.output.display()))?;
    println!("wrote {} bytes to {}", image.len(), args.output.display());
    Ok(())
}

/// Splits positionals into the optional leading reference and the rest.
///
/// With `--input` the reference may be omitted.
fn positionals<const N: usize>(args: &CliArgs, command: &str) -> Result<[Option<String>; N], String> {
    let expected_without_reference = N - 1;
    let mut values = args.positionals.clone();
    if args.input.is_some() && values.len() == expected_without_reference {
        values.insert(0, String::new());
    }
    if values.len() != N {
        return Err(format!(
            "`{command}` expects {N} positional argument(s), got {}\n{USAGE}",
            values.len()
        ));
    }

    let mut out: [Option<String>; N] = std::array::from_fn(|_| None);
    for (slot, value) in out.iter_mut().zip(values) {
        *slot = (!value.is_empty()).then_some(value);
    }
    Ok(out)
}

fn source(reference: Option<String>, args: &CliArgs) -> Result<Source, String> {
    match (reference, &args.input) {
        (None, Some(path)) => Ok(Source::File(path.clone())),
        (Some(reference), None) => Ok(Source::Remote(reference)),
        (Some(_), Some(_)) => Err("pass either a reference or --input, not both".to_owned()),
        (None, None) => Err(format!("missing reference\n{USAGE}")),
    }
}

fn read_bytes(path: &PathBuf) -> Result<Vec<u8>, String> {
    fs::read(path).map_err(|err| format!("failed to read `{}`: {err}", path.display()))
}

fn describe(err: ThumbnailError) -> String {
    format!("{err} (status {})", err.class().http_status())
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let command = match args.next().as_deref() {
        Some("trace") => CommandKind::Trace,
        Some("simulation") => CommandKind::Simulation,
        _ => return Err(USAGE.to_owned()),
    };

    let mut positionals = Vec::new();
    let mut dpi = None::<u32>;
    let mut width = None::<u32>;
    let mut height = None::<u32>;
    let mut output = None::<PathBuf>;
    let mut input = None::<PathBuf>;
    let mut config = None::<PathBuf>;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--dpi" => dpi = Some(parse_number(&mut args, "--dpi")?),
            "--width" => width = Some(parse_number(&mut args, "--width")?),
            "--height" => height = Some(parse_number(&mut args, "--height")?),
            "--output" => output = Some(PathBuf::from(flag_value(&mut args, "--output")?)),
            "--input" => input = Some(PathBuf::from(flag_value(&mut args, "--input")?)),
            "--config" => config = Some(PathBuf::from(flag_value(&mut args, "--config")?)),
            "--help" | "-h" => return Err(USAGE.to_owned()),
            flag if flag.starts_with("--") => return Err(format!("unknown argument `{flag}`")),
            other => positionals.push(other.to_owned()),
        }
    }

    if command == CommandKind::Trace && (width.is_some() || height.is_some()) {
        return Err("--width/--height only apply to `simulation`".to_owned());
    }
    if command == CommandKind::Simulation && dpi.is_some() {
        return Err("--dpi only applies to `trace`".to_owned());
    }

    let output = output.ok_or_else(|| "missing --output".to_owned())?;
    Ok(CliArgs {
        command,
        positionals,
        dpi,
        width,
        height,
        output,
        input,
        config,
    })
}

fn flag_value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String, String> {
    args.next()
        .ok_or_else(|| format!("missing value for {flag}"))
}

fn parse_number(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<u32, String> {
    let value = flag_value(args, flag)?;
    value
        .parse()
        .map_err(|err| format!("invalid value `{value}` for {flag}: {err}"))
}
