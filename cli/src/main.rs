//! CLI entrypoint for escriba
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, bail};
use clap::Parser;
use escriba_application::{RunDocumentInput, RunDocumentUseCase};
use escriba_domain::Goal;
use escriba_infrastructure::{ConfigLoader, GeminiBackend};
use escriba_infrastructure::providers::gemini::GeminiConfig;
use escriba_presentation::{Cli, ConsoleReporter, load_context};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting escriba");

    // Load configuration
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).map_err(|e| anyhow::anyhow!(e))?
    };

    // CLI model overrides win over the config file
    if !cli.model.is_empty() {
        config.backend.models = cli.model.clone();
    }

    // === Dependency Injection ===
    let gemini_config = GeminiConfig::from_file_config(&config.backend);
    let backend = Arc::new(GeminiBackend::new(gemini_config)?);

    if cli.check {
        return run_check(&backend, &config);
    }

    let goal = match cli.goal.as_deref() {
        Some(g) => match Goal::try_new(g) {
            Ok(goal) => goal,
            Err(e) => bail!("{}", e),
        },
        None => bail!("O objetivo (goal) é obrigatório. Use --help para exemplos."),
    };

    let context = load_context(&cli)?;

    let input = {
        let mut input = RunDocumentInput::new(goal, context)
            .with_params(config.backend.generation_params());
        if cli.no_collaboration {
            input = input.without_collaboration();
        }
        if cli.no_quality {
            input = input.without_quality();
        }
        input
    };

    let use_case = Arc::new(RunDocumentUseCase::new(backend));
    let events = use_case.handle_request(input);

    let reporter = ConsoleReporter::new(cli.quiet);
    match reporter.run(events).await {
        Ok(document) => {
            println!("{}", document);
            Ok(())
        }
        Err(message) => bail!("{}", message),
    }
}

/// Verify the backend configuration without running a generation.
fn run_check(
    backend: &Arc<GeminiBackend>,
    config: &escriba_infrastructure::FileConfig,
) -> Result<()> {
    use escriba_application::GenerationBackend;

    let models = config.backend.parse_models();
    println!(
        "Modelos configurados: {}",
        models
            .iter()
            .map(|m| m.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!("Tentativas por modelo: {}", config.backend.max_retries);
    println!("Timeout por chamada: {}s", config.backend.timeout_secs);

    match backend.ensure_configured() {
        Ok(()) => {
            println!("Configuração OK");
            Ok(())
        }
        Err(e) => bail!("{}", e),
    }
}
