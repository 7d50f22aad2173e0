//! Argument construction for compose lifecycle commands.

/// Ordered argument builder for a single compose invocation.
///
/// Modifier flags accumulate in `args`; the operation's base tokens live in
/// `command`. Finalization places all modifiers before the base tokens -
/// docker-compose is position sensitive, so the ordering is a contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeCommand {
    args: Vec<String>,
    command: Vec<String>,
}

impl ComposeCommand {
    fn new(command: &[&str], file_paths: &[impl AsRef<str>]) -> Self {
        let mut args = Vec::with_capacity(file_paths.len() * 2);
        for path in file_paths {
            args.push("-f".to_string());
            args.push(path.as_ref().trim().to_string());
        }

        Self {
            args,
            command: command.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// Create and start containers in detached mode.
    pub fn up(file_paths: &[impl AsRef<str>]) -> Self {
        Self::new(&["up", "-d"], file_paths)
    }

    /// Stop and remove containers, including orphans not declared in the
    /// current file set.
    pub fn down(file_paths: &[impl AsRef<str>]) -> Self {
        Self::new(&["down", "--remove-orphans"], file_paths)
    }

    /// Scope the invocation to a compose project name (`-p`).
    pub fn with_project_name(mut self, project_name: &str) -> Self {
        self.args.push("-p".to_string());
        self.args.push(project_name.to_string());
        self
    }

    /// Point the invocation at an environment file (`--env-file`).
    pub fn with_env_file(mut self, env_file_path: &str) -> Self {
        self.args.push("--env-file".to_string());
        self.args.push(env_file_path.to_string());
        self
    }

    /// Target a remote daemon host (`-H`).
    pub fn with_host(mut self, host: &str) -> Self {
        self.args.push("-H".to_string());
        self.args.push(host.to_string());
        self
    }

    /// Finalized argument vector: accumulated modifiers in attachment
    /// order, then the operation's base tokens.
    pub fn to_args(&self) -> Vec<String> {
        let mut out = self.args.clone();
        out.extend(self.command.iter().cloned());
        out
    }
}
