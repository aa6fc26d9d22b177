//! External question-generator invocation.
//!
//! Assembles a shell-safe command line from a [`GenerationRequest`] plus
//! the configured credential and output path, then runs the generator
//! synchronously via `sh -c`, capturing stdout and stderr merged into one
//! text blob. The exit status is not interpreted here: the sole success
//! signal is the artifact existing afterwards (see [`crate::artifact`]).

use std::path::{Path, PathBuf};
use std::process::Stdio;

use crate::error::CoreError;
use crate::request::GenerationRequest;
use crate::sanitize::shell_quote;

/// Placeholder credential value. Treated the same as an absent credential.
pub const PLACEHOLDER_API_KEY: &str = "<YOUR_API_KEY>";

/// Stand-in for the credential in logged command lines.
const REDACTED: &str = "[REDACTED]";

/// Configuration for the external generator, injected explicitly so
/// tests can construct it without touching process-wide state.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Interpreter used to run the generator script (e.g. `python3`).
    pub interpreter: String,
    /// Path to the generator script.
    pub script_path: PathBuf,
    /// Credential passed to the generator. Never sourced from operator
    /// input, never logged.
    pub api_key: String,
    /// Directory where output artifacts are written.
    pub cache_dir: PathBuf,
    /// Upper bound on the requested question count.
    pub max_questions: u32,
}

impl GeneratorConfig {
    /// Reject an absent or placeholder credential.
    ///
    /// Called at startup so misconfiguration fails fast instead of
    /// degrading into invoking the generator with an invalid key.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.api_key.trim().is_empty() || self.api_key == PLACEHOLDER_API_KEY {
            return Err(CoreError::Configuration(
                "Generator API key is not configured (set GEMINI_API_KEY)".into(),
            ));
        }
        Ok(())
    }
}

/// A fully-assembled generator command line.
///
/// Invariant: every operator-supplied field has passed through
/// [`shell_quote`] before concatenation, so no raw operator text can
/// alter the command topology. Carries a second rendering with the
/// credential redacted, which is the only form that may be logged.
#[derive(Debug, Clone)]
pub struct GeneratorInvocation {
    command: String,
    redacted: String,
}

impl GeneratorInvocation {
    /// Assemble the command line for one request.
    ///
    /// Named-argument contract with the generator: `--api_key`,
    /// `--module`, `--description`, `--subjects` (space-joined quoted
    /// tokens), `--num_questions`, `--output`.
    pub fn build(
        config: &GeneratorConfig,
        request: &GenerationRequest,
        output_path: &Path,
    ) -> Result<Self, CoreError> {
        config.validate()?;

        let subjects_cli = request
            .subjects
            .iter()
            .map(|s| shell_quote(s))
            .collect::<Vec<_>>()
            .join(" ");

        let assemble = |credential: &str| {
            format!(
                "{interpreter} {script} --api_key {credential} --module {module} \
                 --description {description} --subjects {subjects} \
                 --num_questions {count} --output {output}",
                interpreter = shell_quote(&config.interpreter),
                script = shell_quote(&config.script_path.to_string_lossy()),
                module = shell_quote(&request.module),
                description = shell_quote(&request.description),
                subjects = subjects_cli,
                count = request.num_questions,
                output = shell_quote(&output_path.to_string_lossy()),
            )
        };

        Ok(Self {
            command: assemble(&shell_quote(&config.api_key)),
            redacted: assemble(REDACTED),
        })
    }

    /// The executable command line. Contains the cleartext credential;
    /// must never be logged.
    pub fn command(&self) -> &str {
        &self.command
    }

    /// The loggable rendering, with the credential redacted.
    pub fn redacted(&self) -> &str {
        &self.redacted
    }
}

/// Run the generator for one request, blocking until the process exits.
///
/// Returns the merged stdout/stderr text. No timeout is enforced on the
/// child process, matching the one-blocking-round-trip contract; a hung
/// generator hangs the calling request (the HTTP layer's request timeout
/// is the backstop). Two audit lines are emitted: the redacted command
/// and the captured output.
pub async fn run(
    config: &GeneratorConfig,
    request: &GenerationRequest,
    output_path: &Path,
) -> Result<String, CoreError> {
    let invocation = GeneratorInvocation::build(config, request, output_path)?;

    tracing::info!(command = %invocation.redacted(), "Invoking question generator");

    let output = tokio::process::Command::new("sh")
        .arg("-c")
        .arg(format!("{} 2>&1", invocation.command()))
        .stdin(Stdio::null())
        .output()
        .await?;

    let captured = String::from_utf8_lossy(&output.stdout).into_owned();
    tracing::info!(output = %captured, "Generator output captured");

    Ok(captured)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
