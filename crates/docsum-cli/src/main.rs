//! docsum — command-line client for the AI Summarizer backend.
//!
//! Set DOCSUM_API_URL (or API_URL) to point at a non-production backend.

use std::io::{BufRead, Write};

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use docsum_api_client::ApiClient;
use docsum_cli::{init_tracing, selected_file_from_path, truncate_string};
use docsum_core::Role;
use docsum_workflows::{ChatState, ChatWorkflow, SendOutcome, UploadWorkflow};

#[derive(Parser)]
#[command(name = "docsum", about = "AI document summarizer CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize a PDF or TXT file
    Summarize {
        /// Path to the file to summarize
        file: std::path::PathBuf,
        /// Emit the result as JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
    /// Chat with a document: upload it, then ask questions interactively
    Chat {
        /// Path to the document
        file: std::path::PathBuf,
    },
    /// Check whether the backend is reachable
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let client = ApiClient::from_env().map_err(|e| anyhow!(e.to_string()))?;

    match cli.command {
        Commands::Summarize { file, json } => summarize(&client, &file, json).await,
        Commands::Chat { file } => chat(&client, &file).await,
        Commands::Health => health(&client).await,
    }
}

async fn summarize(client: &ApiClient, path: &std::path::Path, json: bool) -> Result<()> {
    let file = selected_file_from_path(path)?;
    let name = file.name.clone();

    let mut workflow = UploadWorkflow::new();
    workflow.submit_file(client, file).await;

    if let Some(message) = workflow.error_message() {
        return Err(anyhow!("{message}"));
    }
    let summary = workflow
        .summary()
        .ok_or_else(|| anyhow!("No summary returned"))?;

    if json {
        println!(
            "{}",
            serde_json::json!({ "file": name, "summary": summary })
        );
    } else {
        println!("{summary}");
    }
    Ok(())
}

async fn chat(client: &ApiClient, path: &std::path::Path) -> Result<()> {
    let file = selected_file_from_path(path)?;

    let mut workflow = ChatWorkflow::new();
    workflow.upload_document(client, file).await;

    if let Some(message) = workflow.error_message() {
        return Err(anyhow!("{message}"));
    }
    if let Some(opening) = workflow.transcript().first() {
        println!("assistant: {}", opening.content);
    }
    println!("(type a question, or /quit to exit)");

    let stdin = std::io::stdin();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let question = line.trim();
        if question == "/quit" {
            break;
        }

        match workflow.send_question(client, question).await {
            SendOutcome::Answered => {
                if let Some(answer) = workflow
                    .transcript()
                    .last()
                    .filter(|m| m.role == Role::Assistant)
                {
                    println!("assistant: {}", truncate_string(&answer.content, 4000));
                }
            }
            SendOutcome::Failed => {
                if let ChatState::Error { message } = workflow.state() {
                    eprintln!("error: {message} (question kept in transcript, try again)");
                }
            }
            SendOutcome::Ignored => {}
        }
    }

    Ok(())
}

async fn health(client: &ApiClient) -> Result<()> {
    if client.check_health().await {
        println!("backend reachable at {}", client.base_url());
        Ok(())
    } else {
        eprintln!("backend unreachable at {}", client.base_url());
        std::process::exit(1);
    }
}
