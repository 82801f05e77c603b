use crate::state::types::{Application, Operation, PackageType};

/// A package-manager invocation ready to spawn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlannedCommand {
    /// Executable (`sudo` for privileged commands).
    pub program: String,
    /// Arguments after the program.
    pub args: Vec<String>,
}

impl PlannedCommand {
    /// Privileged command run through non-interactive `sudo -n`.
    fn sudo(args: &[&str]) -> Self {
        let mut all = vec!["-n".to_string()];
        all.extend(args.iter().map(|s| (*s).to_string()));
        Self {
            program: "sudo".into(),
            args: all,
        }
    }

    /// Unprivileged command.
    fn user(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    /// What: Shell-like rendering of the command, single-quoting arguments that need it.
    #[must_use]
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .map(shell_single_quote)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Whether the command escalates through `sudo`.
    #[must_use]
    pub fn uses_sudo(&self) -> bool {
        self.program == "sudo"
    }
}

/// What: Single-quote `s` for display when it contains shell metacharacters.
///
/// Output:
/// - `s` unchanged when it only has safe characters; otherwise `'...'` with embedded quotes escaped.
#[must_use]
pub fn shell_single_quote(s: &str) -> String {
    if !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./=:@+,${}".contains(c))
    {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for ch in s.chars() {
        if ch == '\'' {
            out.push_str("'\"'\"'");
        } else {
            out.push(ch);
        }
    }
    out.push('\'');
    out
}

/// Identifier after `prefix:` in the source, or the configured package.
fn source_target(app: &Application) -> &str {
    match app.source.split_once(':') {
        Some((_, t)) if app.package == app.key && !t.is_empty() => t,
        _ => &app.package,
    }
}

/// What: Build the package-manager command for one operation.
///
/// Inputs:
/// - `app`: Target application
/// - `operation`: Install or uninstall
///
/// Output:
/// - `Ok(PlannedCommand)` for apt, flatpak, snap and mise applications.
///
/// # Errors
///
/// - Returns `Err` for package types without a non-interactive command (`.deb`, aqua, github,
///   script).
///
/// Details:
/// - apt, flatpak and snap go through `sudo -n` so a missing credential fails instead of
///   prompting; mise installs globally for the current user.
pub fn build_command(app: &Application, operation: Operation) -> Result<PlannedCommand, String> {
    let target = source_target(app);
    let cmd = match (app.package_type(), operation) {
        (PackageType::Apt, Operation::Install) => {
            PlannedCommand::sudo(&["apt-get", "install", "-y", target])
        }
        (PackageType::Apt, Operation::Uninstall) => {
            PlannedCommand::sudo(&["apt-get", "remove", "-y", target])
        }
        (PackageType::Flatpak, Operation::Install) => PlannedCommand::sudo(&[
            "flatpak",
            "install",
            "-y",
            "--noninteractive",
            "flathub",
            target,
        ]),
        (PackageType::Flatpak, Operation::Uninstall) => {
            PlannedCommand::sudo(&["flatpak", "uninstall", "-y", "--noninteractive", target])
        }
        (PackageType::Snap, Operation::Install) => PlannedCommand::sudo(&["snap", "install", target]),
        (PackageType::Snap, Operation::Uninstall) => PlannedCommand::sudo(&["snap", "remove", target]),
        (PackageType::Mise, Operation::Install) => {
            PlannedCommand::user("mise", &["use", "-g", &format!("{target}@latest")])
        }
        (PackageType::Mise, Operation::Uninstall) => {
            PlannedCommand::user("mise", &["uninstall", "--all", target])
        }
        (t, op) => {
            return Err(format!(
                "{} of {} is not supported for {} sources",
                op.verb(),
                app.name,
                t.as_str()
            ));
        }
    };
    Ok(cmd)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(key: &str, source: &str, package: &str) -> Application {
        Application {
            key: key.into(),
            name: key.into(),
            description: String::new(),
            source: source.into(),
            package: package.into(),
            tool: key.into(),
            installed: false,
            status_pending: false,
            version: String::new(),
        }
    }

    #[test]
    /// What: Commands per package type and operation.
    ///
    /// Inputs:
    /// - apt, flatpak (ref from source), snap and mise applications.
    ///
    /// Output:
    /// - `sudo -n` for system package managers, plain `mise` for mise.
    fn build_command_variants() {
        let c = build_command(&app("jq", "apt", "jq"), Operation::Install).expect("apt");
        assert_eq!(c.display(), "sudo -n apt-get install -y jq");
        assert!(c.uses_sudo());

        let c = build_command(&app("vlc", "flatpak:org.videolan.VLC", "vlc"), Operation::Uninstall)
            .expect("flatpak");
        assert_eq!(
            c.display(),
            "sudo -n flatpak uninstall -y --noninteractive org.videolan.VLC"
        );

        let c = build_command(&app("slack", "snap", "slack"), Operation::Install).expect("snap");
        assert_eq!(c.args, vec!["-n", "snap", "install", "slack"]);

        let c = build_command(&app("hadolint", "mise:hadolint", "hadolint"), Operation::Install)
            .expect("mise");
        assert_eq!(c.display(), "mise use -g hadolint@latest");
        assert!(!c.uses_sudo());
    }

    #[test]
    /// What: Unsupported package types produce a descriptive error.
    ///
    /// Inputs:
    /// - github and script sources.
    ///
    /// Output:
    /// - `Err` naming the operation and source type.
    fn unsupported_types_error() {
        let err = build_command(&app("fzf", "github:junegunn/fzf", "fzf"), Operation::Install)
            .expect_err("github unsupported");
        assert!(err.contains("install of fzf"));
        assert!(err.contains("github"));
        assert!(build_command(&app("zed", "script", "zed"), Operation::Uninstall).is_err());
    }

    #[test]
    /// What: Display quoting leaves safe words alone and quotes the rest.
    ///
    /// Inputs:
    /// - Safe word, word with a space, word with a single quote.
    ///
    /// Output:
    /// - Unchanged, single-quoted, and escaped.
    fn shell_quoting() {
        assert_eq!(shell_single_quote("org.gimp.GIMP"), "org.gimp.GIMP");
        assert_eq!(shell_single_quote("a b"), "'a b'");
        assert_eq!(shell_single_quote("it's"), "'it'\"'\"'s'");
        assert_eq!(shell_single_quote(""), "''");
    }
}
