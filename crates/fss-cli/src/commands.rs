use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, anyhow, bail};
use chrono::Utc;
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::Value;
use tracing::{debug, info, info_span};

use fss_cli::screen::SimulationScreen;
use fss_cli::settings::Settings;
use fss_model::{Layout, ParameterSet, SimulationResult};
use fss_report::{
    CommandShare, DownloadSink, ExportSink, ShareSink, export_rows, flatten, render, to_delimited,
};
use fss_submit::{HttpSimulationClient, SimulationBackend, SubmitOutcome};

use crate::cli::{ConfigArgs, ExportArgs, FlattenArgs, ParamsArgs, ReportArgs, SimulateArgs};
use crate::summary::{print_export, print_layouts, print_parameters, print_report};

pub fn run_layouts() -> Result<()> {
    print_layouts();
    Ok(())
}

pub fn run_params(args: &ParamsArgs) -> Result<()> {
    let parameters = load_parameters(args.layout, args.params.as_deref())?;
    print_parameters(&parameters);
    Ok(())
}

pub fn run_simulate(args: &SimulateArgs, settings: &Settings) -> Result<()> {
    let span = info_span!("simulate", layout = %args.layout);
    let _guard = span.enter();

    let parameters = load_parameters(args.layout, args.params.as_deref())?;
    let client = HttpSimulationClient::new(&settings.simulation)
        .context("failed to build simulation client")?;
    let mut screen = SimulationScreen::with_parameters(parameters, client);
    apply_edits(&mut screen, args)?;
    print_parameters(screen.parameters());

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    let spinner = submit_spinner(screen.backend().url());
    let outcome = runtime.block_on(screen.start_simulation());
    spinner.finish_and_clear();

    let result = match outcome {
        SubmitOutcome::Completed(result) => result,
        SubmitOutcome::Failed(error) => {
            debug!(%error, "submission error detail");
            let message = screen.last_error().unwrap_or(error.user_message());
            return Err(anyhow!(error).context(message));
        }
        SubmitOutcome::Busy => bail!("a simulation is already running"),
    };

    if let Some(path) = &args.save_result {
        save_result(&result, path)?;
    }
    print_report(&render(args.layout, &result));
    export_if_requested(&args.export, settings, &result);
    Ok(())
}

pub fn run_report(args: &ReportArgs, settings: &Settings) -> Result<()> {
    let result = load_result(&args.result)?;
    print_report(&render(args.layout, &result));
    export_if_requested(&args.export, settings, &result);
    Ok(())
}

pub fn run_flatten(args: &FlattenArgs) -> Result<()> {
    let result = load_result(&args.result)?;
    let text = to_delimited(&flatten(result.as_value())).context("failed to encode result")?;
    print!("{text}");
    Ok(())
}

pub fn run_config(args: &ConfigArgs, settings: &Settings) -> Result<()> {
    let path = Settings::config_path();
    let source = if path.exists() { "file" } else { "defaults" };
    println!("# {} ({source})", path.display());
    let text = toml::to_string_pretty(settings).context("failed to serialize settings")?;
    print!("{text}");
    if args.write {
        settings.save_to(&path).map_err(|message| anyhow!(message))?;
        info!(path = %path.display(), "saved settings");
    }
    Ok(())
}

/// Replay `--set` and machine flags as dialog edits, one commit per dialog.
fn apply_edits<B: SimulationBackend>(
    screen: &mut SimulationScreen<B>,
    args: &SimulateArgs,
) -> Result<()> {
    for (name, text) in &args.set {
        screen
            .open_field(name)
            .with_context(|| format!("cannot edit '{name}'"))?;
        screen.change_text(name, text.as_str())?;
        screen.commit()?;
    }

    if let Some(machine) = args.machine {
        screen
            .open_machine_group(machine)
            .with_context(|| format!("cannot edit machine '{machine}'"))?;
        let fields = machine.fields();
        let edits = [
            (fields.mean, &args.mean),
            (fields.std_dev, &args.std_dev),
            (fields.setup_time, &args.setup),
        ];
        for (name, text) in edits {
            if let Some(text) = text {
                screen.change_text(name, text.as_str())?;
            }
        }
        screen.commit()?;
    }
    Ok(())
}

/// Parameters from a saved file, or the layout defaults.
///
/// The file holds either a bare parameter object or a whole request body
/// with the values under `parametros`.
fn load_parameters(layout: Layout, path: Option<&Path>) -> Result<ParameterSet> {
    let Some(path) = path else {
        return Ok(ParameterSet::defaults(layout));
    };
    let value = read_json(path)?;
    let object = value.get("parametros").unwrap_or(&value);
    ParameterSet::from_json(layout, object)
        .with_context(|| format!("invalid parameters in {}", path.display()))
}

fn load_result(path: &Path) -> Result<SimulationResult> {
    read_json(path).map(SimulationResult::new)
}

fn read_json(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("invalid JSON in {}", path.display()))
}

fn save_result(result: &SimulationResult, path: &Path) -> Result<()> {
    let content = serde_json::to_string_pretty(result).context("failed to serialize result")?;
    std::fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))?;
    info!(path = %path.display(), "saved raw result");
    Ok(())
}

fn export_if_requested(args: &ExportArgs, settings: &Settings, result: &SimulationResult) {
    let Some(sink) = export_sink(args, settings) else {
        return;
    };
    let outcome = export_rows(sink.as_ref(), &flatten(result.as_value()), Utc::now());
    print_export(&outcome);
}

fn export_sink(args: &ExportArgs, settings: &Settings) -> Option<Box<dyn ExportSink>> {
    if args.share {
        let program = settings
            .export
            .share_command
            .clone()
            .unwrap_or_else(|| default_share_program().to_string());
        return Some(Box::new(ShareSink::new(CommandShare::new(program))));
    }
    let dir = args.export.as_ref()?;
    let dir = dir
        .clone()
        .or_else(|| settings.export.output_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."));
    Some(Box::new(DownloadSink::new(dir)))
}

fn default_share_program() -> &'static str {
    if cfg!(target_os = "macos") {
        "open"
    } else if cfg!(target_os = "windows") {
        "explorer"
    } else {
        "xdg-open"
    }
}

fn submit_spinner(url: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(format!("Simulating via {url}"));
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
