//! Main chat loop orchestration.
//!
//! Coordinates the conversation lifecycle: welcome banner, seeded
//! greeting, input loop, slash commands, and event-driven rendering of
//! settled turns. The loop owns the session controller for exactly one
//! session; the conversation log dies with it.

use console::style;
use tokio::sync::broadcast;

use opsdeck_core::session::controller::SessionController;
use opsdeck_types::chat::{Speaker, Turn};
use opsdeck_types::event::SessionEvent;

use crate::state::AppState;

use super::banner::print_welcome_banner;
use super::commands::{self, ChatCommand};
use super::input::{ChatInput, InputEvent};
use super::renderer::ChatRenderer;

/// Run the interactive chat loop against the configured agent backend.
pub async fn run_chat_loop(state: &AppState) -> anyhow::Result<()> {
    let mut controller = SessionController::new(state.transport.clone());
    let mut events = controller.subscribe();
    let renderer = ChatRenderer::new();

    print_welcome_banner(&state.config.agent_base_url);

    // The log is seeded with the agent greeting; render it like any other
    // agent turn.
    if let Some(greeting) = controller.log().first() {
        print_agent_turn(&renderer, &greeting.text);
    }

    let prompt = format!("  {} ", style("You >").green().bold());
    let (mut chat_input, _writer) =
        ChatInput::new(prompt).map_err(|e| anyhow::anyhow!("Failed to initialize input: {e}"))?;

    loop {
        match chat_input.read_line().await {
            InputEvent::Eof => {
                println!("\n  {}", style("Session ended.").dim());
                break;
            }
            InputEvent::Interrupted => {
                println!(
                    "\n  {}",
                    style("Press Ctrl+D to exit, or keep chatting.").dim()
                );
                continue;
            }
            InputEvent::Line(text) => {
                if text.trim().is_empty() {
                    continue;
                }

                if let Some(cmd) = commands::parse(&text) {
                    match cmd {
                        ChatCommand::Help => commands::print_help(),
                        ChatCommand::Clear => chat_input.clear(),
                        ChatCommand::Exit => {
                            println!("\n  {}", style("Session ended.").dim());
                            break;
                        }
                        ChatCommand::History => print_history(controller.log()),
                        ChatCommand::Unknown(name) => {
                            println!(
                                "\n  {} Unknown command: {}. Type /help for available commands.\n",
                                style("?").yellow().bold(),
                                style(name).dim()
                            );
                        }
                    }
                    continue;
                }

                controller.update_input(text);

                // Thinking indicator, mirroring the in-flight window. The
                // readline loop cannot submit again until settlement, but
                // the controller gate is what actually enforces that.
                let spinner = indicatif::ProgressBar::new_spinner();
                spinner.set_style(
                    indicatif::ProgressStyle::default_spinner()
                        .template("{spinner:.cyan} {msg}")
                        .unwrap(),
                );
                spinner.set_message("Agent is thinking...");
                spinner.enable_steady_tick(std::time::Duration::from_millis(80));

                controller.submit().await;

                spinner.finish_and_clear();
                render_settled_turns(&mut events, &renderer);
            }
        }
    }

    Ok(())
}

/// Drain pending session events and render newly appended agent turns.
///
/// Operator turns are skipped -- the readline already echoed them.
fn render_settled_turns(events: &mut broadcast::Receiver<SessionEvent>, renderer: &ChatRenderer) {
    while let Ok(event) = events.try_recv() {
        if let SessionEvent::TurnAppended { turn } = event {
            if turn.speaker == Speaker::Agent {
                print_agent_turn(renderer, &turn.text);
            }
        }
    }
}

fn print_agent_turn(renderer: &ChatRenderer, text: &str) {
    let rendered = renderer.render_final(text);
    println!("  {} {}", style("Agent >").cyan().bold(), rendered.trim());
    println!();
}

/// Print the conversation log so far, one line per turn.
fn print_history(log: &[Turn]) {
    println!();
    for turn in log {
        let label = match turn.speaker {
            Speaker::Operator => format!("{}", style("You").green()),
            Speaker::Agent => format!("{}", style("Agent").cyan()),
        };
        let preview = if turn.text.chars().count() > 100 {
            let head: String = turn.text.chars().take(97).collect();
            format!("{head}...")
        } else {
            turn.text.clone()
        };
        println!("  {} {}", style(label).bold(), preview);
    }
    println!();
}
