use clap::Parser;
use parking_lot_system::core::engine::RunSummary;
use parking_lot_system::core::{CommandSource, ConfigProvider, OutputFormat, Renderer};
use parking_lot_system::utils::error::{ErrorSeverity, ParkingError};
use parking_lot_system::utils::{logger, validation::Validate};
use parking_lot_system::{
    CliConfig, JsonRenderer, LineSource, ParkingEngine, Settings, TextRenderer, TomlConfig,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 載入 TOML 配置 (可選)
    let file_config = match &cli.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(config) => Some(config),
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        },
        None => None,
    };

    let settings = Settings::resolve(&cli, file_config.as_ref());

    if settings.json_logs {
        logger::init_json_logger(settings.verbose);
    } else {
        logger::init_cli_logger(settings.verbose);
    }

    tracing::info!("Starting parking-lot CLI");
    tracing::debug!("Effective settings: {:?}", settings);

    if let Err(e) = file_config.as_ref().map_or(Ok(()), |config| config.validate()) {
        fail(&e);
    }
    if let Err(e) = settings.validate() {
        fail(&e);
    }

    let result = match settings.input.clone() {
        Some(path) => match LineSource::open(&path).await {
            Ok(source) => dispatch(source, settings).await,
            Err(e) => {
                tracing::error!("❌ Error opening file '{}': {}", path, e);
                Err(e)
            }
        },
        None => dispatch(LineSource::stdin(), settings).await,
    };

    match result {
        Ok(summary) => {
            tracing::info!(
                "✅ Session completed: {} commands ({} failed)",
                summary.commands,
                summary.failures
            );
        }
        Err(e) => fail(&e),
    }

    Ok(())
}

async fn dispatch<S: CommandSource>(
    source: S,
    settings: Settings,
) -> parking_lot_system::Result<RunSummary> {
    match settings.output_format() {
        OutputFormat::Text => run_session(source, TextRenderer::new(), settings).await,
        OutputFormat::Json => run_session(source, JsonRenderer::new(), settings).await,
    }
}

async fn run_session<S: CommandSource, R: Renderer>(
    source: S,
    renderer: R,
    settings: Settings,
) -> parking_lot_system::Result<RunSummary> {
    let mut engine = ParkingEngine::new(source, renderer, settings);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    engine.run(&mut out).await
}

fn fail(e: &ParkingError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
