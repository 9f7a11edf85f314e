//! Saved conversation management: clear and export.

use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;
use console::style;
use dialoguer::Confirm;

use palaver_core::export::transcript_html;
use palaver_core::store::SnapshotStore;

use crate::state::AppState;

/// Delete the saved conversation after confirmation.
pub async fn clear_session(state: &AppState, force: bool, json: bool) -> Result<()> {
    let store = state.store();
    // A snapshot that cannot be parsed can still be deleted.
    let count = match store.load().await {
        Ok(Some(snapshot)) => Some(snapshot.messages.len()),
        Ok(None) => {
            if json {
                println!("{}", serde_json::json!({"cleared": false, "messages": 0}));
            } else {
                println!("  {}", style("No saved conversation.").dim());
            }
            return Ok(());
        }
        Err(_) => None,
    };

    if !force && !json {
        let what = match count {
            Some(count) => format!("the saved conversation ({count} messages)"),
            None => "the unreadable saved conversation".to_string(),
        };
        let confirmed = Confirm::new()
            .with_prompt(format!("Permanently delete {what}?"))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("  Cancelled.");
            return Ok(());
        }
    }

    store.clear().await?;

    if json {
        println!(
            "{}",
            serde_json::json!({"cleared": true, "messages": count.unwrap_or(0)})
        );
    } else {
        println!(
            "  {} Conversation cleared.",
            style("✓").green().bold()
        );
    }

    Ok(())
}

/// Export the saved conversation as a standalone HTML page.
pub async fn export_session(state: &AppState, output: Option<PathBuf>, json: bool) -> Result<()> {
    let Some(snapshot) = state.store().load().await? else {
        if json {
            println!("{}", serde_json::json!({"exported": false, "messages": 0}));
        } else {
            println!("  {}", style("No saved conversation to export.").dim());
        }
        return Ok(());
    };

    let path = output.unwrap_or_else(|| {
        PathBuf::from(format!("palaver-{}.html", Local::now().format("%Y%m%d-%H%M%S")))
    });
    let html = transcript_html(&snapshot, &state.config.assistant_name);
    tokio::fs::write(&path, html).await?;

    if json {
        println!(
            "{}",
            serde_json::json!({
                "exported": true,
                "messages": snapshot.messages.len(),
                "path": path.display().to_string(),
            })
        );
    } else {
        println!(
            "  {} Exported {} messages to {}",
            style("✓").green().bold(),
            snapshot.messages.len(),
            style(path.display()).cyan()
        );
    }

    Ok(())
}
