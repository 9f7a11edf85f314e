//! Welcome banner for interactive sessions.

use console::style;

/// Print the banner at the top of an interactive session.
///
/// Shows the assistant name, the answer endpoint, how many messages were
/// restored from the saved conversation, and a hint about slash commands.
pub fn print_welcome_banner(assistant_name: &str, base_url: &str, restored: usize) {
    println!();
    println!("  {}", style(assistant_name).cyan().bold());
    println!(
        "  {}",
        style("Ask anything about the knowledge base.").dim()
    );
    println!();
    println!(
        "  {}  {}",
        style("Endpoint:").bold(),
        style(base_url).dim()
    );
    if restored > 0 {
        println!(
            "  {}  {}",
            style("Restored:").bold(),
            style(format!("{restored} messages")).dim()
        );
    }
    println!();
    println!(
        "  {}",
        style("Type /help for commands, Ctrl+D to exit").dim()
    );
    println!("  {}", style("---").dim());
    println!();
}
