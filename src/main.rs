mod api;
mod cli;
mod dashboard;
mod models;
mod web;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use cli::{Args, Command, DashboardConfig, UploadTarget};
use dashboard::{intents, Dashboard, Section, UiEvent, View};
use models::{UploadFile, UploadForm};
use tracing::{info, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use api::HttpEvaluationService;

const DEFAULT_CONFIG_PATH: &str = "dashboard.yaml";

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Setup logging
    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.as_str().to_lowercase()));

    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config =
        DashboardConfig::resolve(args.config.as_deref(), Path::new(DEFAULT_CONFIG_PATH))?
            .with_service_url(args.service_url.clone());

    match args.command {
        Command::Init(init_args) => generate_sample_config(init_args),
        Command::Ui(ui_args) => start_ui_server(config, ui_args).await,
        Command::Summary => run_event(&config, UiEvent::Navigate(Section::Dashboard), None).await,
        Command::Upload(upload_args) => {
            let event = upload_event(upload_args.target).await?;
            run_event(&config, event, None).await
        }
        Command::Evaluate(eval_args) => {
            let event = UiEvent::SubmitEvaluation {
                resume_id: Some(eval_args.resume_id),
                jd_id: Some(eval_args.jd_id),
            };
            run_event(&config, event, None).await
        }
        Command::Results(filter) => {
            run_event(&config, UiEvent::ApplyFilters(filter.into()), None).await
        }
        Command::Show(show_args) => {
            run_event(&config, UiEvent::ViewDetail(show_args.evaluation_id), None).await
        }
        Command::Export(export_args) => {
            let event = UiEvent::Export(export_args.filter.into());
            run_event(&config, event, Some(&export_args.output)).await
        }
    }
}

/// Resolve an event, run it against the service and print the screen.
/// A warning or error on the screen makes the command fail.
async fn run_event(
    config: &DashboardConfig,
    event: UiEvent,
    export_to: Option<&Path>,
) -> Result<()> {
    let service = HttpEvaluationService::new(&config.service)
        .context("Failed to build evaluation service client")?;
    info!("Using evaluation service at {}", service.base_url());

    let dashboard = Dashboard::new(service, config);
    let intent = intents::handle(event, dashboard.limits());
    let screen = dashboard.dispatch(intent).await;

    if let (View::Export(export), Some(path)) = (&screen.view, export_to) {
        std::fs::write(path, &export.content)
            .context(format!("Failed to write export file: {:?}", path))?;
        println!("Results exported to: {:?}", path);
    }

    cli::print_screen(&screen);

    if let Some(failure) = screen.failure() {
        bail!("{}", failure.message);
    }

    Ok(())
}

async fn read_upload_file(path: &Path) -> Result<UploadFile> {
    let content = tokio::fs::read(path)
        .await
        .context(format!("Failed to read file: {:?}", path))?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(UploadFile::new(file_name, content))
}

async fn upload_event(target: UploadTarget) -> Result<UiEvent> {
    let (file, form): (PathBuf, UploadForm) = match target {
        UploadTarget::Resume { file, name, email } => (
            file,
            UploadForm::Resume {
                student_name: name,
                student_email: email,
            },
        ),
        UploadTarget::JobDescription {
            file,
            title,
            location,
        } => (file, UploadForm::JobDescription { title, location }),
    };

    let file = read_upload_file(&file).await?;
    Ok(UiEvent::SubmitUpload {
        form,
        file: Some(file),
    })
}

fn generate_sample_config(args: cli::InitArgs) -> Result<()> {
    let config = DashboardConfig::sample();

    config.save(&args.output)?;
    println!("Generated sample config at: {:?}", args.output);

    Ok(())
}

async fn start_ui_server(mut config: DashboardConfig, args: cli::UiArgs) -> Result<()> {
    if let Some(port) = args.port {
        config.ui.port = port;
    }
    let port = config.ui.port;

    info!("Starting web UI server on port {}", port);
    info!("Evaluation service: {}", config.service.base_url);

    println!("\n╔═══════════════════════════════════════════════════════════════╗");
    println!("║                  RESUME-DASHBOARD Web UI                      ║");
    println!("╠═══════════════════════════════════════════════════════════════╣");
    println!("║  Open http://localhost:{:<5} in your browser                 ║", port);
    println!("║                                                               ║");
    println!("║  Pages:                                                       ║");
    println!("║    /          - Dashboard summary                             ║");
    println!("║    /upload    - Upload resumes and job descriptions           ║");
    println!("║    /evaluate  - Evaluate a resume against a job               ║");
    println!("║    /results   - Evaluation results and CSV export             ║");
    println!("║                                                               ║");
    println!("║  Press Ctrl+C to stop the server                              ║");
    println!("╚═══════════════════════════════════════════════════════════════╝\n");

    web::start_server(config).await?;

    Ok(())
}
