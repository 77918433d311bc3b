use crate::error::{HubError, Result};
use std::io::Write;
use std::process::{Command, Stdio};

/// Copies text to the system clipboard by piping it into the platform's tool.
/// - macOS: `pbcopy`
/// - Linux: `xclip`, falling back to `xsel`
/// - Windows: `clip`
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let candidates = clipboard_commands();
    if candidates.is_empty() {
        return Err(HubError::Api(
            "Clipboard not supported on this platform".to_string(),
        ));
    }

    let mut last_error = None;
    for &(program, args) in candidates {
        match Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .spawn()
        {
            Ok(child) => return pipe_into(child, program, text),
            Err(e) => {
                tracing::debug!(program, error = %e, "clipboard command unavailable");
                last_error = Some(format!("{}: {}", program, e));
            }
        }
    }

    Err(HubError::Api(format!(
        "Failed to spawn a clipboard command ({})",
        last_error.unwrap_or_default()
    )))
}

fn pipe_into(mut child: std::process::Child, program: &str, text: &str) -> Result<()> {
    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| HubError::Api(format!("Failed to write to {}: {}", program, e)))?;
    }

    let status = child
        .wait()
        .map_err(|e| HubError::Api(format!("Failed to wait for {}: {}", program, e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(HubError::Api(format!("{} exited with error", program)))
    }
}

type ClipboardCommand = (&'static str, &'static [&'static str]);

const MACOS: &[ClipboardCommand] = &[("pbcopy", &[])];
const LINUX: &[ClipboardCommand] = &[
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];
const WINDOWS: &[ClipboardCommand] = &[("clip", &[])];

fn clipboard_commands() -> &'static [ClipboardCommand] {
    if cfg!(target_os = "macos") {
        MACOS
    } else if cfg!(target_os = "linux") {
        LINUX
    } else if cfg!(target_os = "windows") {
        WINDOWS
    } else {
        &[]
    }
}
