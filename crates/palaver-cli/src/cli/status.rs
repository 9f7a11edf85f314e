//! Service status dashboard command.

use anyhow::Result;
use console::style;

use palaver_core::store::SnapshotStore;
use palaver_core::transport::AnswerTransport;
use palaver_types::api::HealthStatus;

use crate::state::AppState;

/// Display the status dashboard.
///
/// Probes the answer service health endpoint and reports the saved
/// conversation and configuration.
pub async fn status(state: &AppState, json: bool) -> Result<()> {
    let health = state.transport().health().await;
    let snapshot = state.store().load().await.ok().flatten();
    let saved_messages = snapshot.as_ref().map(|s| s.messages.len()).unwrap_or(0);
    let saved_at = snapshot
        .as_ref()
        .map(|s| s.saved_at.format("%Y-%m-%d %H:%M UTC").to_string());

    if json {
        let (reachable, service_status, service_message) = match &health {
            Ok(report) => (true, report.status.to_string(), report.message.clone()),
            Err(err) => (false, "unreachable".to_string(), err.to_string()),
        };
        let status = serde_json::json!({
            "version": env!("CARGO_PKG_VERSION"),
            "endpoint": state.config.base_url,
            "reachable": reachable,
            "service": {
                "status": service_status,
                "message": service_message,
            },
            "saved_messages": saved_messages,
            "saved_at": saved_at,
            "data_dir": state.data_dir.display().to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!();
    println!(
        "  {} Palaver v{}",
        style("⚡").bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!();

    println!("  {}", style("── Answer service ──").dim());
    println!("  Endpoint: {}", style(&state.config.base_url).dim());
    match &health {
        Ok(report) => {
            let glyph = match report.status {
                HealthStatus::Healthy => style("✓").green().bold(),
                HealthStatus::Degraded => style("!").yellow().bold(),
                HealthStatus::Unhealthy | HealthStatus::Unknown => style("✗").red().bold(),
            };
            println!("  Status:   {} {}", glyph, report.status);
            if !report.message.is_empty() {
                println!("  Note:     {}", style(&report.message).dim());
            }
        }
        Err(err) => {
            println!("  Status:   {} unreachable", style("✗").red().bold());
            println!("  Note:     {}", style(err).dim());
        }
    }
    println!();

    println!("  {}", style("── Conversation ──").dim());
    println!("  Saved messages: {}", style(saved_messages).bold());
    if let Some(saved_at) = &saved_at {
        println!("  Last saved:     {}", style(saved_at).dim());
    }
    println!();

    println!("  {}", style("── System ──").dim());
    println!("  Data dir:  {}", style(state.data_dir.display()).dim());
    println!(
        "  Assistant: {}",
        style(&state.config.assistant_name).dim()
    );
    println!();

    Ok(())
}
