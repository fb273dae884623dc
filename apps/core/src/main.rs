// Founders Advisor debug console.
// Wires config, telemetry, the HTTP backend and a conversation into a
// stdin/stdout loop for exercising the core end to end.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use advisor_core::client::HttpAdvisorBackend;
use advisor_core::config::AdvisorConfig;
use advisor_core::session::AdvisorSession;
use advisor_core::{telemetry, Persona};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    telemetry::init_telemetry("advisor-core", "info");

    let config = AdvisorConfig::from_env().context("loading configuration")?;
    info!(api_url = %config.api_url, persona = %config.persona, "starting advisor console");

    let backend = Arc::new(
        HttpAdvisorBackend::new(&config.api_url, config.request_timeout())
            .context("building backend client")?,
    );
    let mut session = AdvisorSession::new(config.founder_id.clone(), config.persona, backend);

    print_banner(&session);
    prompt()?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match input {
            "/quit" => break,
            "/progress" => {
                let coverage = session.conversation().coverage();
                println!(
                    "{}",
                    serde_json::to_string_pretty(&coverage).context("rendering coverage")?
                );
            }
            _ if input.starts_with("/persona ") => {
                let name = &input["/persona ".len()..];
                let persona = Persona::from_name_lenient(name);
                let reset = session.switch_persona(persona);
                if reset {
                    println!("Switched to {} - new conversation started.", persona);
                } else {
                    println!("Now talking to {}.", persona);
                }
            }
            _ => {
                run_exchange(&mut session, input).await;
            }
        }

        prompt()?;
    }

    Ok(())
}

async fn run_exchange(session: &mut AdvisorSession, message: &str) {
    match session.send(message).await {
        Ok(exchange) => {
            println!("{}", exchange.reply);
            for event in &exchange.events {
                println!("[covered] {} has been covered!", event.label);
            }

            let conversation = session.conversation();
            let coverage = conversation.coverage();
            println!(
                "[progress] {}/{} ({:.0}%)",
                coverage.completed_count, coverage.total_count, coverage.percent
            );
            if coverage.is_complete() {
                println!("[progress] Complete analysis achieved! Ready for the next round.");
            }

            // Only nudge once the conversation has some substance.
            if conversation.messages().len() > 2 {
                if let Some(focus) = conversation.next_focus() {
                    println!("[next] Try asking about {}.", focus);
                }
            }
        }
        Err(err) => {
            eprintln!("Failed to send message: {}. Please try again.", err);
        }
    }
}

fn print_banner(session: &AdvisorSession) {
    let conversation = session.conversation();
    let persona = conversation.persona();
    println!(
        "Founders Advisor console - talking to {} ({}).",
        persona,
        persona.description()
    );
    println!("Commands: /persona <name>, /progress, /quit");
    println!("Suggested questions:");
    for question in conversation.suggested_questions() {
        println!("  - {}", question);
    }
}

fn prompt() -> anyhow::Result<()> {
    print!("> ");
    io::stdout().flush().context("flushing stdout")?;
    Ok(())
}
