//! Welcome banner display for chat sessions.

use console::style;

/// Print the welcome banner at the start of a chat session.
///
/// Shows the console identity, the agent endpoint in use, and a hint about
/// slash commands.
pub fn print_welcome_banner(agent_base_url: &str) {
    println!();
    println!("  {}", style("Agent Command Center").cyan().bold());
    println!("  {}", style("Supply Chain Control Tower").dim());
    println!();
    println!(
        "  {}  {}",
        style("Agent:").bold(),
        style(agent_base_url).dim()
    );
    println!();
    println!(
        "  {}",
        style("Ask about inventory, contracts, or orders. Type /help for commands, Ctrl+D to exit.").dim()
    );
    println!("  {}", style("---").dim());
    println!();
}
