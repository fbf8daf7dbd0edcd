//! CLI entry point: issue one directory listing and print the JSON response.

use std::sync::Arc;

use clap::Parser;
use serde::Serialize;
use tracing_subscriber::{fmt, EnvFilter};

use dirview_core::config::DirectoryConfig;
use dirview_directory::{Directory, RestDirectoryClient};

#[derive(Parser)]
#[command(name = "dirview")]
#[command(about = "Read-only queries against a hierarchical-graph directory")]
struct Cli {
    /// Listing to run: attributes, children, parents, incoming, outgoing.
    operation: String,

    /// Object identifier (becomes the `$<id>` selector).
    id: String,

    /// Override the directory ARN (otherwise read from config).
    #[arg(long)]
    directory_arn: Option<String>,

    /// Override the schema ARN (otherwise read from config).
    #[arg(long)]
    schema_arn: Option<String>,

    /// Config file prefix (default: dirview).
    #[arg(short, long, default_value = "dirview")]
    config: String,
}

enum Operation {
    Attributes,
    Children,
    Parents,
    Incoming,
    Outgoing,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).json().init();

    let cli = Cli::parse();
    let operation = parse_operation(&cli.operation)?;

    let mut config = load_directory_config(&cli.config)?;
    if let Some(arn) = &cli.directory_arn {
        config.directory_arn = arn.clone();
    }
    if let Some(arn) = &cli.schema_arn {
        config.schema_arn = arn.clone();
    }
    if config.directory_arn.is_empty() {
        anyhow::bail!("Directory ARN required: set --directory-arn or directory.directory_arn in config");
    }

    let client = RestDirectoryClient::new(&config)?;
    let dir = Directory::new(
        Arc::new(client),
        config.directory_arn.clone(),
        config.schema_arn.clone(),
    );
    tracing::info!(directory_arn = %dir.directory_arn(), schema_arn = %dir.schema_arn(), "querying directory");

    match operation {
        Operation::Attributes => print_json(&dir.list_object_attributes(&cli.id).await?)?,
        Operation::Children => print_json(&dir.list_object_children(&cli.id).await?)?,
        Operation::Parents => print_json(&dir.list_object_parents(&cli.id).await?)?,
        Operation::Incoming => print_json(&dir.list_incoming_typed_links(&cli.id).await?)?,
        Operation::Outgoing => print_json(&dir.list_outgoing_typed_links(&cli.id).await?)?,
    }

    Ok(())
}

fn parse_operation(s: &str) -> anyhow::Result<Operation> {
    match s.to_lowercase().as_str() {
        "attributes" => Ok(Operation::Attributes),
        "children" => Ok(Operation::Children),
        "parents" => Ok(Operation::Parents),
        "incoming" => Ok(Operation::Incoming),
        "outgoing" => Ok(Operation::Outgoing),
        _ => anyhow::bail!(
            "Invalid operation: {s}. Choose: attributes, children, parents, incoming, outgoing"
        ),
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn load_directory_config(file_prefix: &str) -> anyhow::Result<DirectoryConfig> {
    let cfg = config::Config::builder()
        .add_source(config::File::with_name(file_prefix).required(false))
        .add_source(
            config::Environment::with_prefix("DIRVIEW")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    match cfg.get::<DirectoryConfig>("directory") {
        Ok(c) => Ok(c),
        Err(_) => Ok(DirectoryConfig::default()),
    }
}
