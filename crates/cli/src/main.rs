mod settings;

use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;

use clap::Parser;

use facehider_core::pipeline::mock_face_hider::MockFaceHider;
use facehider_core::pipeline::remote_face_hider::RemoteFaceHider;
use facehider_core::raster::infrastructure::result_file_writer::ResultFileWriter;
use facehider_core::remote::infrastructure::http_face_hide_client::HttpFaceHideClient;
use facehider_core::session::face_hider_session::{FaceHiderSession, SubmissionState};
use facehider_core::session::upload_slot::SlotRole;
use facehider_core::shared::constants::INPUT_ACCEPT;
use facehider_core::shared::hide_mode::HideMode;
use facehider_core::shared::image_file::{format_bytes, ImageFile};

use settings::Settings;

/// Hide a reference face inside a target image, remotely or with a local mock.
#[derive(Parser)]
#[command(name = "face-hider")]
struct Cli {
    /// Image of the face to hide.
    #[arg(long)]
    face: Option<PathBuf>,

    /// Image in which the face should be hidden.
    #[arg(long)]
    target: Option<PathBuf>,

    /// Hiding mode: box, pixelate or blur.
    #[arg(long)]
    mode: Option<HideMode>,

    /// Send the images to the remote API instead of the local mock.
    #[arg(long)]
    remote: bool,

    /// Remote endpoint URL.
    #[arg(long)]
    api_url: Option<String>,

    /// Simulated latency of the local mock, in milliseconds.
    #[arg(long)]
    mock_delay_ms: Option<u64>,

    /// Output file for the result.
    #[arg(long, conflicts_with = "output_dir")]
    output: Option<PathBuf>,

    /// Directory for the result, named face-hider-result-<timestamp>.png.
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Print the available modes and exit.
    #[arg(long)]
    list_modes: bool,

    /// Store the effective mode, API URL and mock options as new defaults.
    #[arg(long)]
    save_settings: bool,
}

/// Effective options after merging flags over persisted settings.
struct Options {
    mode: HideMode,
    mock_mode: bool,
    api_url: String,
    mock_delay: Duration,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.list_modes {
        print_modes();
        return Ok(());
    }
    validate(&cli)?;

    let settings = Settings::load();
    let options = merge(&cli, &settings);
    if cli.save_settings {
        save_settings(&options);
    }

    let mut session = FaceHiderSession::new(options.mock_mode);
    session.set_mode(options.mode)?;
    if let Some(face) = &cli.face {
        select(&mut session, SlotRole::Face, face)?;
    }
    if let Some(target) = &cli.target {
        select(&mut session, SlotRole::Target, target)?;
    }

    let mock = MockFaceHider::new(options.mock_delay);
    let remote = RemoteFaceHider::new(Box::new(HttpFaceHideClient::new(options.api_url.as_str())));
    if options.mock_mode {
        log::info!("Hiding face locally ({} mode)", options.mode);
    } else {
        log::info!("Hiding face via {} ({} mode)", options.api_url, options.mode);
    }

    match session.submit(&mock, &remote)? {
        SubmissionState::Succeeded(result) => {
            log::info!("Result ready in {} ms", result.elapsed_ms);
        }
        SubmissionState::Failed(message) => return Err(message.clone().into()),
        state => return Err(format!("Submission ended in unexpected state: {state:?}").into()),
    }

    let writer = ResultFileWriter::new();
    let path = match (&cli.output, &cli.output_dir) {
        (Some(output), _) => {
            session.save_result_as(&writer, output)?;
            output.clone()
        }
        (None, dir) => {
            let dir = dir.clone().unwrap_or_else(|| PathBuf::from("."));
            session.save_result(&writer, &dir, chrono::Utc::now())?
        }
    };

    let elapsed = session.result().map(|r| r.elapsed_ms).unwrap_or_default();
    println!(
        "{} result written to {} in {elapsed} ms",
        options.mode.label(),
        path.display()
    );
    Ok(())
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let inputs = [("face", &cli.face), ("target", &cli.target)];
    for (role, input) in inputs {
        let Some(path) = input else {
            return Err(format!("--{role} is required").into());
        };
        if !path.exists() {
            return Err(format!("Input file not found: {}", path.display()).into());
        }
    }
    if let Some(url) = &cli.api_url {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(format!("API URL must start with http:// or https://, got '{url}'").into());
        }
    }
    Ok(())
}

fn merge(cli: &Cli, settings: &Settings) -> Options {
    Options {
        mode: cli.mode.unwrap_or(settings.mode),
        mock_mode: settings.mock_mode && !cli.remote,
        api_url: cli.api_url.clone().unwrap_or_else(|| settings.api_url.clone()),
        mock_delay: Duration::from_millis(cli.mock_delay_ms.unwrap_or(settings.mock_delay_ms)),
    }
}

fn save_settings(options: &Options) {
    let settings = Settings {
        mode: options.mode,
        mock_mode: options.mock_mode,
        api_url: options.api_url.clone(),
        mock_delay_ms: options.mock_delay.as_millis() as u64,
    };
    settings.save();
    log::info!("Saved settings");
}

/// Loads `path` into the slot, failing with the validation reason if the
/// file is rejected.
fn select(
    session: &mut FaceHiderSession,
    role: SlotRole,
    path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = ImageFile::from_path(path)?;
    let summary = format!("{} ({})", file.name(), format_bytes(file.size()));
    session.select_file(role, file)?;

    let slot = session.slot(role);
    if let Some(reason) = slot.error() {
        return Err(format!("{}: {reason} Accepted: {INPUT_ACCEPT}", role.title()).into());
    }
    log::info!("{}: {summary}", role.title());
    Ok(())
}

fn print_modes() {
    for mode in HideMode::ALL {
        println!("{:<10} {:<10} {}", mode.as_str(), mode.label(), mode.description());
    }
}
