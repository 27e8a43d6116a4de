//! Interactive console for the documentation Q&A pipeline.
//!
//! Reads questions from stdin and runs the same retrieve → prompt → generate
//! path as the HTTP server. `exit` (case-insensitive) quits; an empty line
//! re-prompts.

use std::error::Error;
use std::io::{self, BufRead, Write};

use colored::Colorize;
use tracing::error;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use docs_rag::{DocIndex, OllamaEmbedder, RagConfig};
use llm_service::{LlmModelConfig, OllamaChatService};
use qa_gateway::{AskOptions, answer_question};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // .env is optional for the console; fall back to process env.
    let _ = dotenvy::dotenv();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .unwrap();

    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    // Clients are built once; every question reuses them.
    let rag_cfg = RagConfig::from_env()?;
    let llm_cfg = LlmModelConfig::from_env()?;

    let embedder = OllamaEmbedder::new(&rag_cfg)?;
    let index = DocIndex::new(&rag_cfg)?;
    let chat = OllamaChatService::new(llm_cfg)?;

    println!(
        "{}",
        "Docs assistant console. Ask a question, or type 'exit' to quit.".cyan()
    );

    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        print!("{} ", "You:".green().bold());
        io::stdout().flush()?;

        line.clear();
        // EOF behaves like 'exit'.
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let question = line.trim();
        if question.eq_ignore_ascii_case("exit") {
            break;
        }
        if question.is_empty() {
            println!("{}", "Please enter a question (or 'exit' to quit).".yellow());
            continue;
        }

        let opts = AskOptions {
            top_k: rag_cfg.search.top_k,
        };

        match answer_question(&embedder, &index, &chat, question, opts).await {
            Ok(qa) => {
                println!("{} {}", "Bot:".blue().bold(), qa.answer);
                println!(
                    "{}",
                    format!("({} context chunks)", qa.context.len()).dimmed()
                );
            }
            Err(e) => {
                error!(target: "qa_cli", error = %e, "pipeline failed");
                println!("{} {}", "Retrieval failed:".red().bold(), e);
            }
        }
    }

    println!("{}", "Bye.".cyan());
    Ok(())
}
