//! Botflow studio developer tool.
//!
//! Provides the `botflow` binary with subcommands for working on a studio
//! database directly, without going through the HTTP service: listing,
//! creating and deleting bots, and exporting or importing their stored flow
//! documents.
//!
//! Uses the same `botflow_store::SqliteStore` as the server, so anything the
//! tool writes is exactly what the service would have written. Every
//! subcommand exits 0 on success, 1 on validation errors (bad bot ids,
//! malformed or invalid flow documents), 2 when the bot does not exist, and
//! 3 on I/O or database failures.

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use serde_json::{json, Value};

use botflow_core::FlowDocument;
use botflow_store::{BotId, BotRecord, BotStore, NewBot, Pagination, SqliteStore, StoreError};

/// Botflow studio database tools.
#[derive(Parser)]
#[command(name = "botflow", about = "Botflow studio database tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List bots in creation order.
    List {
        /// Path to the studio database file.
        #[arg(short, long)]
        db: String,

        /// Number of bots to skip.
        #[arg(long, default_value_t = 0)]
        skip: usize,

        /// Maximum number of bots to print.
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },

    /// Create a bot.
    Create {
        /// Path to the studio database file.
        #[arg(short, long)]
        db: String,

        /// Bot name (default: "Alexa").
        #[arg(short, long)]
        name: Option<String>,

        /// Timezone (default: "UTC").
        #[arg(long)]
        timezone: Option<String>,

        /// Language code (default: "en").
        #[arg(short, long)]
        language: Option<String>,

        /// Avatar image URL.
        #[arg(long)]
        avatar_url: Option<String>,
    },

    /// Delete a bot and its flow document.
    Delete {
        /// Path to the studio database file.
        #[arg(short, long)]
        db: String,

        /// Bot ID to delete.
        #[arg(short, long)]
        bot: String,
    },

    /// Print a bot's stored flow document as JSON.
    Export {
        /// Path to the studio database file.
        #[arg(short, long)]
        db: String,

        /// Bot ID to export.
        #[arg(short, long)]
        bot: String,

        /// Write the document here instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate a flow document file and store it on a bot.
    Import {
        /// Path to the studio database file.
        #[arg(short, long)]
        db: String,

        /// Bot ID to import into.
        #[arg(short, long)]
        bot: String,

        /// Path to the flow document JSON file.
        #[arg(short, long)]
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::List { db, skip, limit } => run_list(&db, skip, limit),
        Commands::Create {
            db,
            name,
            timezone,
            language,
            avatar_url,
        } => run_create(&db, name, timezone, language, avatar_url),
        Commands::Delete { db, bot } => run_delete(&db, &bot),
        Commands::Export { db, bot, output } => run_export(&db, &bot, output),
        Commands::Import { db, bot, file } => run_import(&db, &bot, &file),
    };
    process::exit(exit_code);
}

/// Open the store at `db_path`, or report and hand back exit code 3.
fn open_store(db_path: &str) -> Result<SqliteStore, i32> {
    match SqliteStore::open(db_path) {
        Ok(store) => Ok(store),
        Err(e) => {
            eprintln!("Error: failed to open database '{}': {}", db_path, e);
            Err(3)
        }
    }
}

/// Parse a bot id argument, or report and hand back exit code 1.
fn parse_bot_id(raw: &str) -> Result<BotId, i32> {
    match raw.parse::<BotId>() {
        Ok(id) => Ok(id),
        Err(e) => {
            eprintln!("Error: invalid bot id '{}': {}", raw, e);
            Err(1)
        }
    }
}

/// Report a store failure and pick its exit code.
fn store_failure(err: StoreError) -> i32 {
    eprintln!("Error: {}", err);
    match err {
        StoreError::BotNotFound(_) => 2,
        _ => 3,
    }
}

/// A bot record in the studio's camelCase JSON shape.
fn bot_json(bot: &BotRecord) -> Value {
    let mut value = json!({
        "botId": bot.bot_id.to_string(),
        "name": bot.name,
        "timezone": bot.timezone,
        "language": bot.language,
        "avatarUrl": bot.avatar_url,
        "createdAt": bot.created_at,
        "updatedAt": bot.updated_at,
    });
    if let Some(data) = &bot.data {
        value["data"] = data.clone();
    }
    value
}

/// Pretty-print a JSON value to stdout for machine-readable output.
fn print_json(value: &Value) {
    let json = serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize output: {}\"}}", e));
    println!("{}", json);
}

fn run_list(db_path: &str, skip: usize, limit: usize) -> i32 {
    let store = match open_store(db_path) {
        Ok(s) => s,
        Err(code) => return code,
    };

    match store.list_bots(Pagination { skip, limit }) {
        Ok(bots) => {
            let values: Vec<Value> = bots.iter().map(bot_json).collect();
            print_json(&Value::Array(values));
            0
        }
        Err(e) => store_failure(e),
    }
}

fn run_create(
    db_path: &str,
    name: Option<String>,
    timezone: Option<String>,
    language: Option<String>,
    avatar_url: Option<String>,
) -> i32 {
    let mut store = match open_store(db_path) {
        Ok(s) => s,
        Err(code) => return code,
    };

    let mut new = NewBot::default();
    if let Some(name) = name {
        new.name = name;
    }
    if let Some(timezone) = timezone {
        new.timezone = timezone;
    }
    if let Some(language) = language {
        new.language = language;
    }
    if let Some(avatar_url) = avatar_url {
        new.avatar_url = avatar_url;
    }

    match store.create_bot(new) {
        Ok(bot) => {
            print_json(&bot_json(&bot));
            0
        }
        Err(e) => store_failure(e),
    }
}

fn run_delete(db_path: &str, bot: &str) -> i32 {
    let id = match parse_bot_id(bot) {
        Ok(id) => id,
        Err(code) => return code,
    };
    let mut store = match open_store(db_path) {
        Ok(s) => s,
        Err(code) => return code,
    };

    match store.delete_bot(id) {
        Ok(()) => 0,
        Err(e) => store_failure(e),
    }
}

/// Execute the export subcommand.
///
/// The stored blob is decoded and rebuilt into a graph before printing, so
/// exports are always the canonical document shape. Bots that never saved a
/// flow export as the empty document, matching what the canvas restores for
/// them.
fn run_export(db_path: &str, bot: &str, output: Option<PathBuf>) -> i32 {
    let id = match parse_bot_id(bot) {
        Ok(id) => id,
        Err(code) => return code,
    };
    let store = match open_store(db_path) {
        Ok(s) => s,
        Err(code) => return code,
    };
    let record = match store.get_bot(id) {
        Ok(record) => record,
        Err(e) => return store_failure(e),
    };

    let document = match record.data {
        None => FlowDocument::default(),
        Some(blob) => match serde_json::from_value::<FlowDocument>(blob) {
            Ok(document) => document,
            Err(e) => {
                eprintln!("Error: bot {} holds a malformed flow document: {}", id, e);
                return 1;
            }
        },
    };
    let (graph, viewport) = match document.into_graph() {
        Ok(pair) => pair,
        Err(e) => {
            eprintln!("Error: bot {} holds an invalid flow document: {}", id, e);
            return 1;
        }
    };
    let canonical = FlowDocument::from_graph(&graph, viewport);

    let json = match serde_json::to_string_pretty(&canonical) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("Error: failed to serialize document: {}", e);
            return 3;
        }
    };
    match output {
        Some(path) => match fs::write(&path, json + "\n") {
            Ok(()) => 0,
            Err(e) => {
                eprintln!("Error: failed to write '{}': {}", path.display(), e);
                3
            }
        },
        None => {
            println!("{}", json);
            0
        }
    }
}

/// Execute the import subcommand.
///
/// The file must parse as a flow document and rebuild into a valid graph
/// (unique ids, no dangling edges). What gets stored is the canonical
/// re-encoding, not the raw file bytes.
fn run_import(db_path: &str, bot: &str, file: &Path) -> i32 {
    let id = match parse_bot_id(bot) {
        Ok(id) => id,
        Err(code) => return code,
    };

    let text = match fs::read_to_string(file) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error: failed to read '{}': {}", file.display(), e);
            return 3;
        }
    };
    let document: FlowDocument = match serde_json::from_str(&text) {
        Ok(document) => document,
        Err(e) => {
            eprintln!("Error: '{}' is not a flow document: {}", file.display(), e);
            return 1;
        }
    };
    let (graph, viewport) = match document.into_graph() {
        Ok(pair) => pair,
        Err(e) => {
            eprintln!("Error: invalid flow document: {}", e);
            return 1;
        }
    };
    let canonical = FlowDocument::from_graph(&graph, viewport);
    let blob = match serde_json::to_value(&canonical) {
        Ok(blob) => blob,
        Err(e) => {
            eprintln!("Error: failed to serialize document: {}", e);
            return 3;
        }
    };

    let mut store = match open_store(db_path) {
        Ok(s) => s,
        Err(code) => return code,
    };
    match store.save_data(id, blob) {
        Ok(()) => {
            print_json(&json!({
                "botId": id.to_string(),
                "elements": canonical.element_count(),
            }));
            0
        }
        Err(e) => store_failure(e),
    }
}
