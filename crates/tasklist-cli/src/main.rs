use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use tasklist_core::impls::{ChannelNotifier, InMemoryTaskStore};
use tasklist_core::{ActivatedJob, JobHandler, SchemaConfig, TaskExtractor, UserTaskJobHandler};

/// Turn one activated user-task job into a task record.
///
/// The record is validated, stored in memory and printed as JSON.
#[derive(Debug, Parser)]
#[command(name = "tasklist", version)]
struct Cli {
    /// Activated job as JSON (`-` reads stdin)
    job: PathBuf,

    /// JSON file with a schema config (`{"supportedFieldTypes": [...]}`)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Supported form-field type; repeat to list several. Overrides --config.
    #[arg(long = "field-type", value_name = "TYPE")]
    field_types: Vec<String>,
}

fn schema_config(file: Option<SchemaConfig>, field_types: Vec<String>) -> SchemaConfig {
    if field_types.is_empty() {
        file.unwrap_or_default()
    } else {
        SchemaConfig::with_field_types(field_types)
    }
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// Stdin can only be consumed once.
fn check_stdin_use(cli: &Cli) -> anyhow::Result<()> {
    if is_stdin(&cli.job) && cli.config.as_deref().is_some_and(is_stdin) {
        anyhow::bail!("the job and --config cannot both be read from stdin (`-`)");
    }
    Ok(())
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if is_stdin(path) {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading job from stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    check_stdin_use(&cli)?;

    let file_config = match &cli.config {
        Some(path) => Some(
            SchemaConfig::from_json(&read_input(path)?)
                .with_context(|| format!("parsing config {}", path.display()))?,
        ),
        None => None,
    };
    let config = schema_config(file_config, cli.field_types);

    let job: ActivatedJob =
        serde_json::from_str(&read_input(&cli.job)?).context("decoding activated job")?;

    let store = Arc::new(InMemoryTaskStore::new());
    let notifier = Arc::new(ChannelNotifier::default());
    let mut signals = notifier.subscribe();

    let handler = UserTaskJobHandler::with_extractor(
        TaskExtractor::with_config(config),
        Arc::clone(&store),
        Arc::clone(&notifier),
    );

    let record = match handler.handle(&job).await {
        Ok(record) => record,
        Err(err) => {
            warn!(job_key = %job.key, kind = ?err.kind(), error = %err, "job rejected");
            return Err(err.into());
        }
    };

    if signals.try_recv().is_ok() {
        debug!(stored = store.len().await, "new-task signal received");
    }

    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_job_path_and_repeated_field_types() {
        let cli = Cli::try_parse_from([
            "tasklist",
            "job.json",
            "--field-type",
            "string",
            "--field-type",
            "date",
        ])
        .unwrap();

        assert_eq!(cli.job, PathBuf::from("job.json"));
        assert_eq!(cli.field_types, vec!["string", "date"]);
        assert!(cli.config.is_none());
    }

    #[test]
    fn job_path_is_required() {
        assert!(Cli::try_parse_from(["tasklist"]).is_err());
    }

    #[test]
    fn no_overrides_means_default_schema() {
        assert_eq!(schema_config(None, vec![]), SchemaConfig::default());
    }

    #[test]
    fn flags_win_over_config_file() {
        let file = SchemaConfig::with_field_types(["string", "number"]);

        let config = schema_config(Some(file.clone()), vec!["date".to_string()]);
        assert_eq!(config.supported_field_types, vec!["date"]);

        assert_eq!(schema_config(Some(file.clone()), vec![]), file);
    }

    #[test]
    fn job_and_config_cannot_both_come_from_stdin() {
        let cli = Cli::try_parse_from(["tasklist", "-", "--config", "-"]).unwrap();
        let err = check_stdin_use(&cli).unwrap_err();
        assert!(err.to_string().contains("stdin"));

        let cli = Cli::try_parse_from(["tasklist", "-", "--config", "schema.json"]).unwrap();
        assert!(check_stdin_use(&cli).is_ok());

        let cli = Cli::try_parse_from(["tasklist", "job.json", "--config", "-"]).unwrap();
        assert!(check_stdin_use(&cli).is_ok());
    }
}
