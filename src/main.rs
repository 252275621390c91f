//! Underwriting Intake CLI
//!
//! Runs an intake interview in the terminal and prints the finished
//! questionnaire as JSON on stdout. Prompts and logs go to stderr.

mod terminal;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use underwriting_intake::adapters::{FileInterviewStore, InMemoryInterviewStore};
use underwriting_intake::application::{InterviewService, StartInterviewCommand};
use underwriting_intake::config::{AppConfig, LoggingConfig};
use underwriting_intake::domain::foundation::{QuestionnaireId, RespondentId, Sex, Timestamp};
use underwriting_intake::domain::intake::RawAnswer;
use underwriting_intake::ports::InterviewStore;

#[derive(Parser)]
#[command(name = "underwriting-intake")]
#[command(about = "Run an adaptive underwriting intake interview in the terminal")]
struct Cli {
    /// Respondent sex (female, male, unspecified)
    #[arg(long, default_value = "unspecified")]
    sex: Sex,

    /// Directory where interviews are saved after every answer
    #[arg(long)]
    store_dir: Option<PathBuf>,

    /// Resume a saved interview (requires --store-dir)
    #[arg(long, requires = "store_dir")]
    resume: Option<QuestionnaireId>,
}

type StdinLines = Lines<BufReader<Stdin>>;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load_validated().context("Invalid configuration")?;
    init_tracing(&config.logging);

    let store: Arc<dyn InterviewStore> = match &cli.store_dir {
        Some(dir) => Arc::new(FileInterviewStore::new(dir)),
        None => Arc::new(InMemoryInterviewStore::new()),
    };
    let service = InterviewService::new(store, config.engine.settings());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    let id = match cli.resume {
        Some(id) => id,
        None => {
            eprintln!("Acceptez-vous que vos réponses soient transmises à l'assureur ? (o/n)");
            let consent = read_line(&mut lines).await?.unwrap_or_default();
            let started = service
                .start_interview(StartInterviewCommand {
                    questionnaire_id: None,
                    respondent_id: RespondentId::new(),
                    respondent_sex: cli.sex,
                    consent_accepted: matches!(consent.trim().to_lowercase().as_str(), "o" | "oui"),
                    started_at: Timestamp::now(),
                })
                .await?;
            started.state.questionnaire_id()
        }
    };

    loop {
        let view = service.current_question(id).await?;
        let Some(question) = view.question else {
            break;
        };
        eprintln!("{}", terminal::render_prompt(question, &view.progress));

        let Some(line) = read_line(&mut lines).await? else {
            eprintln!("Interview paused: {}", id);
            return Ok(());
        };
        let value = terminal::parse_answer(question, &line);
        service.submit_answer(id, RawAnswer::new(value)).await?;
    }

    let questionnaire = service.finished_questionnaire(id).await?;
    println!("{}", serde_json::to_string_pretty(&questionnaire)?);
    Ok(())
}

async fn read_line(lines: &mut StdinLines) -> Result<Option<String>> {
    lines.next_line().await.context("Failed to read stdin")
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.filter_directive()));
    let registry = tracing_subscriber::registry().with(filter);

    if logging.json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}
