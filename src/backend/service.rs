//! Service control through configured command lines.

use std::process::Output;

use tokio::process::Command;

use super::{Outcome, ServiceAction};
use crate::config::ServiceCommands;

/// Run `argv`, returning whether it exited successfully together with its
/// combined stdout and stderr. `Err` means it could not be started at all.
async fn execute(argv: &[String]) -> Result<(bool, String), String> {
    let Some((program, args)) = argv.split_first() else {
        return Err("No command configured".to_string());
    };

    tracing::debug!(program, ?args, "running command");
    let output = Command::new(program)
        .args(args)
        .output()
        .await
        .map_err(|e| format!("Could not run `{program}`: {e}"))?;

    if !output.status.success() {
        tracing::warn!(program, status = %output.status, "command failed");
    }
    Ok((output.status.success(), combined(&output)))
}

/// Like [`execute`], but a non-zero exit is an error carrying the output.
async fn run(argv: &[String]) -> Outcome {
    match execute(argv).await? {
        (true, text) => Ok(text),
        (false, text) => Err(text),
    }
}

fn combined(output: &Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    match (stdout.trim().is_empty(), stderr.trim().is_empty()) {
        (false, false) => format!("{}\n{}", stdout.trim_end(), stderr.trim_end()),
        (false, true) => stdout.trim_end().to_string(),
        (true, _) => stderr.trim_end().to_string(),
    }
}

/// Ask whether nginx is running. The exit code is ignored because
/// `systemctl is-active` exits non-zero for inactive units.
pub async fn check_status(argv: &[String]) -> Outcome {
    let (_, text) = execute(argv)
        .await
        .map_err(|e| format!("Could not determine nginx status:\n{e}"))?;
    match text.trim() {
        "" => Err("Could not determine nginx status: no output".to_string()),
        state => Ok(describe_status(state)),
    }
}

fn describe_status(state: &str) -> String {
    match state {
        "active" | "running" => "Nginx is running".to_string(),
        "inactive" | "failed" | "dead" | "stopped" => format!("Nginx is not running ({state})"),
        other => format!("Nginx status: {other}"),
    }
}

pub async fn test_config(argv: &[String]) -> Outcome {
    run(argv)
        .await
        .map(|text| format!("Configuration test passed!\n\n{text}"))
        .map_err(|text| format!("Configuration test failed:\n{text}"))
}

pub async fn control(action: ServiceAction, commands: &ServiceCommands) -> Outcome {
    let argv = match action {
        ServiceAction::Start => &commands.start,
        ServiceAction::Stop => &commands.stop,
        ServiceAction::Restart => &commands.restart,
        ServiceAction::Reload => &commands.reload,
    };
    tracing::info!(action = action.verb(), "service control");
    run(argv)
        .await
        .map(|text| format!("Nginx {} successfully\n\n{text}", action.past_tense()))
        .map_err(|text| {
            format!(
                "Failed to {} nginx:\n{text}\n\nNote: You may need to run with sudo/administrator privileges",
                action.verb()
            )
        })
}
