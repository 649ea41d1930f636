//! CLI command definitions and handlers

use anyhow::Result;
use clap::{Parser, Subcommand};
use mealgraph_client::{fetch_random_meals, ClientConfig, MealDbClient, DEFAULT_ENDPOINT};
use mealgraph_core::mapper::{map_meal, MapError};
use mealgraph_store::query;
use mealgraph_store::{load_from_file, save_to_file, GraphFormat, GraphStore};
use serde_json::Value;
use std::path::PathBuf;

/// Default graph file, shared by `generate` and `query`.
const DEFAULT_GRAPH_FILE: &str = "recipe_knowledge_graph.ttl";

/// Main CLI structure
#[derive(Parser)]
#[command(name = "mealgraph")]
#[command(about = "Recipe knowledge graph generator for TheMealDB")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Fetch meals and build the knowledge graph file
    Generate {
        /// Number of random meals to fetch
        #[arg(short, long, default_value_t = 50)]
        count: usize,

        /// Output graph file
        #[arg(short, long, default_value = DEFAULT_GRAPH_FILE)]
        output: PathBuf,

        /// Serialization format
        #[arg(short, long, default_value = "turtle")]
        format: SerializationFormat,

        /// API endpoint
        #[arg(long, default_value = DEFAULT_ENDPOINT)]
        endpoint: String,

        /// Delay between fetch attempts in milliseconds
        #[arg(long, default_value_t = 500)]
        delay_ms: u64,

        /// Also export a Graphviz DOT visualization to this path
        #[arg(long)]
        visualize: Option<PathBuf>,
    },

    /// Run a canned query against a serialized graph file
    Query {
        /// Graph file to load
        #[arg(short, long, default_value = DEFAULT_GRAPH_FILE)]
        file: PathBuf,

        /// Serialization format of the graph file
        #[arg(long, default_value = "turtle")]
        format: SerializationFormat,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,

        #[command(subcommand)]
        command: QueryCommands,
    },

    /// Show build information
    Info,
}

/// Canned graph queries
#[derive(Subcommand)]
pub enum QueryCommands {
    /// List all meal names
    Meals,

    /// List meals belonging to a cuisine
    Cuisine {
        /// Cuisine label to match exactly
        #[arg(short, long, default_value = "Italian")]
        name: String,
    },

    /// List a meal's ingredients
    Ingredients {
        /// Meal name
        #[arg(short, long)]
        meal: String,
    },

    /// Count meals per category
    Categories,

    /// Find meals containing an ingredient
    Ingredient {
        /// Case-insensitive substring of the ingredient name
        #[arg(short, long, default_value = "chicken")]
        contains: String,
    },
}

/// Output format options
#[derive(Clone, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    JsonPretty,
}

/// Graph serialization format options
#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum SerializationFormat {
    Turtle,
    Ntriples,
}

impl From<SerializationFormat> for GraphFormat {
    fn from(format: SerializationFormat) -> Self {
        match format {
            SerializationFormat::Turtle => GraphFormat::Turtle,
            SerializationFormat::Ntriples => GraphFormat::NTriples,
        }
    }
}

/// Command execution result
pub struct CommandResult {
    pub success: bool,
    pub message: String,
    pub data: Option<Value>,
}

/// Execute CLI commands
#[derive(Default)]
pub struct CommandExecutor;

impl CommandExecutor {
    pub fn new() -> Self {
        Self
    }

    /// Execute a CLI command
    pub async fn execute(&self, command: Commands) -> Result<CommandResult> {
        match command {
            Commands::Generate {
                count,
                output,
                format,
                endpoint,
                delay_ms,
                visualize,
            } => {
                self.execute_generate(count, output, format.into(), endpoint, delay_ms, visualize)
                    .await
            }
            Commands::Query {
                file,
                format,
                output,
                command,
            } => self.execute_query(file, format.into(), command, output),
            Commands::Info => self.execute_info(),
        }
    }

    async fn execute_generate(
        &self,
        count: usize,
        output: PathBuf,
        format: GraphFormat,
        endpoint: String,
        delay_ms: u64,
        visualize: Option<PathBuf>,
    ) -> Result<CommandResult> {
        let config = ClientConfig::new(&endpoint).with_fetch_delay(delay_ms);
        let delay = config.fetch_delay();
        let client = MealDbClient::new(config);

        println!("Fetching {} meals from TheMealDB API...", count);
        let report = fetch_random_meals(&client, count, delay).await;
        println!(
            "{} meals fetched ({} failures). Building knowledge graph...",
            report.meals.len(),
            report.failures
        );

        let mut store = GraphStore::new();
        let mut skipped = 0usize;
        for record in &report.meals {
            match map_meal(record) {
                Ok(triples) => {
                    store.insert_all(triples);
                }
                Err(MapError::MissingIdentifier) => {
                    tracing::warn!("skipping record without identifier: {:?}", record.name());
                    skipped += 1;
                }
            }
        }

        save_to_file(&store, &output, format)?;
        println!(
            "Knowledge graph written to {} ({} triples)",
            output.display(),
            store.len()
        );

        if let Some(dot_path) = visualize {
            match mealgraph_viz::export_dot(&store, &dot_path) {
                Ok(()) => println!("Visualization written to {}", dot_path.display()),
                Err(error) => tracing::warn!("visualization export failed: {}", error),
            }
        }

        Ok(CommandResult {
            success: true,
            message: format!(
                "Generated {} triples from {} meals ({} fetch failures, {} records skipped)",
                store.len(),
                report.meals.len(),
                report.failures,
                skipped
            ),
            data: Some(serde_json::json!({
                "meals": report.meals.len(),
                "triples": store.len(),
                "fetch_failures": report.failures,
                "skipped_records": skipped,
                "output": output.display().to_string(),
            })),
        })
    }

    fn execute_query(
        &self,
        file: PathBuf,
        format: GraphFormat,
        command: QueryCommands,
        output: OutputFormat,
    ) -> Result<CommandResult> {
        let store = load_from_file(&file, format)?;
        println!("Loaded graph with {} triples", store.len());

        let (message, data) = match command {
            QueryCommands::Meals => {
                let names = query::meal_names(&store);
                (format!("{} meals", names.len()), serde_json::json!(names))
            }
            QueryCommands::Cuisine { name } => {
                let names = query::meals_by_cuisine(&store, &name);
                (
                    format!("{} meals in cuisine {}", names.len(), name),
                    serde_json::json!(names),
                )
            }
            QueryCommands::Ingredients { meal } => {
                let rows = query::meal_ingredients(&store, &meal);
                (
                    format!("{} ingredients for {}", rows.len(), meal),
                    serde_json::json!(rows),
                )
            }
            QueryCommands::Categories => {
                let counts = query::category_counts(&store);
                (
                    format!("{} categories", counts.len()),
                    serde_json::json!(counts),
                )
            }
            QueryCommands::Ingredient { contains } => {
                let names = query::meals_with_ingredient(&store, &contains);
                (
                    format!("{} meals containing {}", names.len(), contains),
                    serde_json::json!(names),
                )
            }
        };

        match output {
            OutputFormat::Text => print_rows(&data),
            OutputFormat::Json => println!("{}", serde_json::to_string(&data)?),
            OutputFormat::JsonPretty => println!("{}", serde_json::to_string_pretty(&data)?),
        }

        Ok(CommandResult {
            success: true,
            message,
            data: Some(data),
        })
    }

    fn execute_info(&self) -> Result<CommandResult> {
        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
            "default_endpoint": DEFAULT_ENDPOINT,
            "default_graph_file": DEFAULT_GRAPH_FILE,
        });

        println!("{}", serde_json::to_string_pretty(&info)?);

        Ok(CommandResult {
            success: true,
            message: "Build information".to_string(),
            data: Some(info),
        })
    }
}

/// Print one query result row per line.
fn print_rows(data: &Value) {
    let items = match data.as_array() {
        Some(items) => items,
        None => return,
    };
    for item in items {
        match item {
            Value::String(name) => println!("  {}", name),
            Value::Object(row) => {
                let name = row.get("name").and_then(Value::as_str);
                let measure = row.get("measure").and_then(Value::as_str);
                let label = row.get("label").and_then(Value::as_str);
                let meals = row.get("meals").and_then(Value::as_u64);
                match (name, measure, label, meals) {
                    (Some(name), Some(measure), _, _) => println!("  {}: {}", name, measure),
                    (Some(name), None, _, _) => println!("  {}", name),
                    (_, _, Some(label), Some(meals)) => println!("  {}: {} meals", label, meals),
                    _ => println!("  {}", item),
                }
            }
            other => println!("  {}", other),
        }
    }
}
