mod logging;
mod server;
mod server_utils;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use cloudchase::{AssetsOptions, DashboardOptions, PageContext, PageKey, Theme, Upload};
use logging::init_logging;
use server::start_web_server;
use tracing::error;

const DEFAULT_PORT: u16 = 1864;
const DEFAULT_STEP_DELAY_MS: u64 = 20;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Do not print any logs
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the dashboard server (default)
    Serve(ServeArgs),
    /// Print a single page as HTML
    Render(RenderArgs),
}

#[derive(Args, Clone)]
struct DashboardArgs {
    /// Directory holding IR.jpeg, contrast.jpeg and gif.mp4
    #[arg(long, default_value = "assets")]
    assets: PathBuf,

    /// Color theme: azure, slate or paper
    #[arg(long, default_value_t = Theme::Azure)]
    theme: Theme,
}

impl Default for DashboardArgs {
    fn default() -> Self {
        Self {
            assets: "assets".into(),
            theme: Theme::Azure,
        }
    }
}

#[derive(Args, Clone)]
struct ServeArgs {
    #[command(flatten)]
    dashboard: DashboardArgs,

    /// Expose the server to the network (binds 0.0.0.0)
    #[arg(long)]
    host: bool,

    /// First port to try; the next free one is used if it is taken
    #[arg(long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Delay between two frames of the prediction progress bar, in milliseconds
    #[arg(long, default_value_t = DEFAULT_STEP_DELAY_MS)]
    step_delay_ms: u64,
}

impl Default for ServeArgs {
    fn default() -> Self {
        Self {
            dashboard: DashboardArgs::default(),
            host: false,
            port: DEFAULT_PORT,
            step_delay_ms: DEFAULT_STEP_DELAY_MS,
        }
    }
}

#[derive(Args, Clone)]
struct RenderArgs {
    /// Page to render: home, prediction, visualization, metrics, insights or team
    page: PageKey,

    /// Simulate an upload with this file name
    #[arg(long)]
    upload: Option<String>,

    /// Seed for the synthetic forecast
    #[arg(long)]
    seed: Option<u64>,

    #[command(flatten)]
    dashboard: DashboardArgs,
}

impl DashboardArgs {
    fn options(&self, progress_step: Duration) -> DashboardOptions {
        DashboardOptions {
            theme: self.theme,
            assets: AssetsOptions {
                assets_dir: self.assets.clone(),
                ..Default::default()
            },
            progress_step,
            ..Default::default()
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.quiet);

    match cli.command.unwrap_or_else(|| Commands::Serve(ServeArgs::default())) {
        Commands::Serve(args) => {
            let options = args
                .dashboard
                .options(Duration::from_millis(args.step_delay_ms));

            if let Err(err) = start_web_server(options, args.host, args.port).await {
                error!(name: "server", "{}", err);
                return ExitCode::FAILURE;
            }
        }
        Commands::Render(args) => {
            if let Err(err) = render_to_stdout(&args) {
                error!(name: "render", "{}", err);
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}

fn render_to_stdout(args: &RenderArgs) -> Result<(), Box<dyn std::error::Error>> {
    let options = args.dashboard.options(Duration::ZERO);
    let upload = Upload::from_file_name(args.upload.as_deref());

    let mut ctx = match args.seed {
        Some(seed) => PageContext::with_seed(&options, upload, seed),
        None => PageContext::new(&options, upload),
    };

    let html = cloudchase::render(args.page, &mut ctx)?.into_string();

    let mut stdout = io::stdout().lock();
    stdout.write_all(html.as_bytes())?;
    writeln!(stdout)?;

    Ok(())
}
