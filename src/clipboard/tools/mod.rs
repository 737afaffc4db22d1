//! Clipboard tools backed by OS binaries.
//!
//! Every supported tool takes the text on stdin, so one `PipeTool` covers
//! them all; `CopyMethod` knows each binary's name, flags and platform.

use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};

use super::result::CopyMethod;
use super::tool::{CopyTool, CopyToolError};

/// Linux tools, Wayland first.
const LINUX_ORDER: [CopyMethod; 3] = [CopyMethod::WlCopy, CopyMethod::Xclip, CopyMethod::Xsel];

/// A clipboard binary that reads the text to copy from stdin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipeTool {
    method: CopyMethod,
}

impl PipeTool {
    pub fn new(method: CopyMethod) -> Self {
        Self { method }
    }
}

impl CopyTool for PipeTool {
    fn method(&self) -> CopyMethod {
        self.method
    }

    fn is_available(&self) -> bool {
        self.method.on_this_platform() && tool_exists(self.method.name())
    }

    fn try_copy_text(&self, text: &str) -> Result<(), CopyToolError> {
        pipe_text(self.method.name(), self.method.args(), text)
    }
}

/// Get the platform-appropriate tools in priority order.
pub fn platform_tools() -> Vec<Box<dyn CopyTool>> {
    let methods: &[CopyMethod] = if cfg!(target_os = "macos") {
        &[CopyMethod::Pbcopy]
    } else if cfg!(target_os = "linux") {
        &LINUX_ORDER
    } else {
        &[]
    };

    methods
        .iter()
        .map(|&m| Box::new(PipeTool::new(m)) as Box<dyn CopyTool>)
        .collect()
}

/// Check if a binary is on the PATH.
fn tool_exists(binary: &str) -> bool {
    Command::new("which")
        .arg(binary)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Spawn `program` and feed `text` on its stdin.
fn pipe_text(program: &str, args: &[&str], text: &str) -> Result<(), CopyToolError> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| match e.kind() {
            ErrorKind::NotFound => CopyToolError::NotFound,
            _ => CopyToolError::Failed(e.to_string()),
        })?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| CopyToolError::Failed(e.to_string()))?;
        // stdin dropped here so the tool sees EOF
    }

    // Output pipes stay closed: xclip forks a daemon that would hold them open
    let status = child
        .wait()
        .map_err(|e| CopyToolError::Failed(e.to_string()))?;

    if status.success() {
        Ok(())
    } else {
        Err(CopyToolError::Failed(format!(
            "{} exited with {}",
            program, status
        )))
    }
}
