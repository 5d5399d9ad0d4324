use anyhow::{Context, Result};

use super::{read_utterances, ChatSession, NonInteractiveRunner};
use crate::{
    app::{load_config, load_config_file, Config},
    cli::{connect_directory, handle_command, Cli, Commands},
    resolver::IntentResolver,
    utils::log_status,
};

/// Main runtime orchestrator
pub struct Orchestrator {
    cli: Cli,
    config: Config,
}

impl Orchestrator {
    /// Create a new orchestrator from CLI args
    pub fn new(cli: Cli) -> Result<Self> {
        let mut config = if let Some(config_path) = &cli.config {
            load_config_file(config_path)?
        } else {
            match load_config() {
                Ok(cfg) => cfg,
                Err(e) => {
                    log_status(format!(
                        "No se pudo cargar la configuración: {:#}. Se usan los valores por defecto.",
                        e
                    ));
                    Config::default()
                }
            }
        };

        apply_cli_overrides(&mut config, &cli);
        config.validate()?;

        Ok(Self { cli, config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the orchestrator
    pub async fn run(self) -> Result<()> {
        // Handle subcommands that don't need the resolver
        if let Some(command) = &self.cli.command {
            if handle_command(command, &self.config).await? {
                return Ok(());
            }
        }

        let directory = connect_directory(&self.config)?;
        let resolver = IntentResolver::from_config(&self.config, directory);

        if let Some(Commands::Batch { file, concurrency }) = &self.cli.command {
            let input = std::fs::read_to_string(file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let runner = NonInteractiveRunner::new(&resolver);
            let reports = runner
                .execute_batch(read_utterances(&input), *concurrency)
                .await;
            println!("{}", runner.format_batch(&reports, self.cli.output_format));
            return Ok(());
        }

        if let Some(query) = self.cli.query.clone() {
            let runner = NonInteractiveRunner::new(&resolver);
            let report = runner.execute(query).await;
            println!("{}", runner.format_report(&report, self.cli.output_format));

            // The reply is printed either way; the exit code flags a degraded turn
            if report.resolution.degraded() {
                std::process::exit(1);
            }
            return Ok(());
        }

        let mut session = ChatSession::new(resolver);
        let result = session.run().await;

        if let Some(path) = &self.cli.transcript {
            session.transcript().save(path)?;
            log_status(format!("Conversación guardada en {}", path.display()));
        }

        result
    }
}

/// Command-line flags take priority over every config layer
fn apply_cli_overrides(config: &mut Config, cli: &Cli) {
    if let Some(base_url) = &cli.base_url {
        config.directory.base_url = base_url.clone();
    }
    if let Some(token) = &cli.token {
        config.directory.token = Some(token.clone());
    }
    if let Some(timeout_ms) = cli.timeout_ms {
        config.directory.timeout_ms = timeout_ms;
    }
}
