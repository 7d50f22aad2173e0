//! Execution of compose lifecycle commands against the docker-compose binary.

use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

use serde::{Deserialize, Serialize};

use crate::command::ComposeCommand;
use crate::error::{Error, Result};

/// Fixed name of the external binary this crate drives.
pub const COMPOSE_BINARY: &str = "docker-compose";

/// Environment variable docker-compose reads to locate registry credentials.
pub const DOCKER_CONFIG_ENV: &str = "DOCKER_CONFIG";

/// Per-invocation execution modifiers.
///
/// Every field is optional; `None` omits the corresponding flag or variable
/// entirely. Blank and whitespace-only values are treated as absent too, so
/// callers forwarding raw request fields get the same behavior.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComposeOptions {
    /// Working directory for the spawned process. `None` inherits the
    /// caller's current directory.
    pub working_dir: Option<String>,
    /// Remote daemon host, forwarded as `-H`.
    pub host: Option<String>,
    /// Compose project name, forwarded as `-p`.
    pub project_name: Option<String>,
    /// Environment file, forwarded as `--env-file`.
    pub env_file_path: Option<String>,
    /// Alternate credential-store directory, exported as `DOCKER_CONFIG`.
    pub config_path: Option<String>,
}

/// Runs compose lifecycle commands against a binary located once at
/// construction.
#[derive(Debug)]
pub struct ComposeWrapper {
    program: PathBuf,
}

impl ComposeWrapper {
    /// Locate the docker-compose binary and validate its presence.
    ///
    /// A non-empty `binary_dir` is joined with the fixed binary name and
    /// probed directly; otherwise the binary is searched for on `PATH`.
    /// The probe happens once here, not per call.
    pub fn new(binary_dir: Option<&Path>) -> Result<Self> {
        let program = resolve_program(binary_dir).ok_or(Error::BinaryNotFound)?;
        Ok(Self { program })
    }

    /// Resolved path of the binary this wrapper invokes.
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Create and start containers declared in `file_paths`.
    pub fn up(&self, file_paths: &[impl AsRef<str>], options: &ComposeOptions) -> Result<Vec<u8>> {
        self.run(ComposeCommand::up(file_paths), options)
    }

    /// Stop and remove containers declared in `file_paths`, including
    /// orphans. Tear-down never takes an env file or credential override.
    pub fn down(&self, file_paths: &[impl AsRef<str>], options: &ComposeOptions) -> Result<Vec<u8>> {
        let options = ComposeOptions {
            env_file_path: None,
            config_path: None,
            ..options.clone()
        };
        self.run(ComposeCommand::down(file_paths), &options)
    }

    /// Shared execution path: attach optional modifiers, spawn the binary,
    /// and capture stdout. Returns captured stdout bytes on success; on
    /// non-zero exit or spawn failure, returns an error carrying the
    /// captured stderr and no output.
    pub fn run(&self, mut command: ComposeCommand, options: &ComposeOptions) -> Result<Vec<u8>> {
        if let Some(name) = non_blank(&options.project_name) {
            command = command.with_project_name(name);
        }
        if let Some(path) = non_blank(&options.env_file_path) {
            command = command.with_env_file(path);
        }
        if let Some(host) = non_blank(&options.host) {
            command = command.with_host(host);
        }

        let args = command.to_args();
        log_status!("compose", "{} {}", self.program.display(), args.join(" "));

        let mut cmd = Command::new(&self.program);
        cmd.args(&args);

        if let Some(dir) = non_blank(&options.working_dir) {
            cmd.current_dir(dir);
        }

        // The child inherits the parent environment either way; a credential
        // override only adds DOCKER_CONFIG on top.
        if let Some(config) = non_blank(&options.config_path) {
            cmd.env(DOCKER_CONFIG_ENV, config);
        }

        let output = cmd.output().map_err(Error::Spawn)?;

        if !output.status.success() {
            return Err(Error::Failed {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(output.stdout)
    }
}

fn non_blank(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn resolve_program(binary_dir: Option<&Path>) -> Option<PathBuf> {
    match binary_dir {
        Some(dir) if !dir.as_os_str().is_empty() => {
            let candidate = dir.join(COMPOSE_BINARY);
            is_executable(&candidate).then_some(candidate)
        }
        _ => find_in_path(COMPOSE_BINARY),
    }
}

fn find_in_path(name: &str) -> Option<PathBuf> {
    let path = env::var_os("PATH")?;
    env::split_paths(&path)
        .map(|dir| dir.join(name))
        .find(|candidate| is_executable(candidate))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
