//! AiBackend implementations
//!
//! The hosted model is reached through a local CLI tool (e.g. `gemini -p`).
//! The prompt is passed as the last argument and the answer read from stdout.

use std::process::Command;

use crate::AdvisorError;

/// A single request/response exchange with a language model
pub trait AiBackend {
    fn send_prompt(&self, prompt: &str) -> Result<String, AdvisorError>;
}

impl<B: AiBackend + ?Sized> AiBackend for &B {
    fn send_prompt(&self, prompt: &str) -> Result<String, AdvisorError> {
        (**self).send_prompt(prompt)
    }
}

/// AiBackend that shells out to a configured command line
#[derive(Debug, Clone)]
pub struct CliAiBackend {
    /// Command line, split with shell quoting rules
    pub command: String,
    /// Passed as `--model <name>` when set
    pub model: Option<String>,
}

impl CliAiBackend {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            model: None,
        }
    }

    pub fn with_model(mut self, model: Option<String>) -> Self {
        self.model = model;
        self
    }

    fn build_command(&self, prompt: &str) -> Result<Command, AdvisorError> {
        let mut parts = shell_words::split(&self.command)
            .map_err(|e| AdvisorError::InvalidCommand(format!("{}: {}", self.command, e)))?;
        if parts.is_empty() {
            return Err(AdvisorError::NotConfigured);
        }

        let program = parts.remove(0);
        let mut cmd = Command::new(&program);
        cmd.args(&parts);
        if let Some(ref model) = self.model {
            cmd.arg("--model").arg(model);
        }
        cmd.arg(prompt);
        Ok(cmd)
    }
}

impl AiBackend for CliAiBackend {
    fn send_prompt(&self, prompt: &str) -> Result<String, AdvisorError> {
        let mut cmd = self.build_command(prompt)?;
        tracing::debug!(command = %self.command, model = ?self.model, "sending recommendation prompt");

        let output = cmd
            .output()
            .map_err(|e| AdvisorError::Transport(format!("failed to run {}: {}", self.command, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            tracing::warn!(status = %output.status, "advisor command failed");
            return Err(AdvisorError::Transport(format!(
                "{} exited with {}: {}",
                self.command,
                output.status,
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
