use super::CatalogEntry;

/// Built-in registry rows: (key, name, description, source, group, package, tool).
const BUILTIN: &[(&str, &str, &str, &str, &str, Option<&str>, Option<&str>)] = &[
    // Containers & DevOps
    ("docker", "Docker", "Container runtime and build engine", "apt", "Containers & DevOps", Some("docker.io"), None),
    ("hadolint", "Hadolint", "Dockerfile linter that checks best practices", "mise:hadolint", "Containers & DevOps", None, None),
    ("kubectl", "kubectl", "Command line client for Kubernetes clusters", "snap", "Containers & DevOps", None, None),
    ("lazydocker", "Lazydocker", "Terminal UI for managing containers", "github:jesseduffield/lazydocker", "Containers & DevOps", None, None),
    ("terraform", "Terraform", "Infrastructure as code provisioning", "aqua:hashicorp/terraform", "Containers & DevOps", None, None),
    // Development
    ("gh", "GitHub CLI", "Work with pull requests and issues from the terminal", "aqua:cli/cli", "Development", None, None),
    ("git", "Git", "Distributed version control system", "apt", "Development", None, None),
    ("lazygit", "Lazygit", "Simple terminal UI for git commands", "github:jesseduffield/lazygit", "Development", None, None),
    ("mise", "mise", "Polyglot tool version manager and task runner", "script", "Development", None, None),
    ("node", "Node.js", "JavaScript runtime built on V8", "mise:node", "Development", None, None),
    ("python", "Python", "Python interpreter and standard library", "mise:python", "Development", None, Some("python3")),
    ("shellcheck", "ShellCheck", "Static analysis for shell scripts", "apt", "Development", None, None),
    // Editors
    ("code", "Visual Studio Code", "Code editor with debugging and extensions", "https://update.code.visualstudio.com/latest/linux-deb-x64/stable.deb", "Editors", None, None),
    ("helix", "Helix", "Post-modern modal text editor", "github:helix-editor/helix", "Editors", None, Some("hx")),
    ("neovim", "Neovim", "Hyperextensible Vim-based text editor", "apt", "Editors", None, Some("nvim")),
    ("zed", "Zed", "High-performance collaborative code editor", "script:https://zed.dev/install.sh", "Editors", None, None),
    // Graphics & Media
    ("gimp", "GIMP", "GNU image manipulation program", "flatpak:org.gimp.GIMP", "Graphics & Media", Some("org.gimp.GIMP"), None),
    ("obs", "OBS Studio", "Video recording and live streaming", "flatpak:com.obsproject.Studio", "Graphics & Media", Some("com.obsproject.Studio"), None),
    ("spotify", "Spotify", "Music streaming client", "snap", "Graphics & Media", None, None),
    ("vlc", "VLC", "Versatile audio and video player", "apt", "Graphics & Media", None, None),
    // Internet & Communication
    ("discord", "Discord", "Voice and text chat for communities", "flatpak:com.discordapp.Discord", "Internet & Communication", Some("com.discordapp.Discord"), None),
    ("firefox", "Firefox", "Web browser from Mozilla", "snap", "Internet & Communication", None, None),
    ("signal", "Signal", "Private messenger with end-to-end encryption", "flatpak:org.signal.Signal", "Internet & Communication", Some("org.signal.Signal"), None),
    ("slack", "Slack", "Team chat and messaging", "snap", "Internet & Communication", None, None),
    // Productivity
    ("libreoffice", "LibreOffice", "Office suite for documents and spreadsheets", "apt", "Productivity", None, None),
    ("obsidian", "Obsidian", "Markdown note taking knowledge base", "flatpak:md.obsidian.Obsidian", "Productivity", Some("md.obsidian.Obsidian"), None),
    ("zotero", "Zotero", "Reference manager for research documents", "flatpak:org.zotero.Zotero", "Productivity", Some("org.zotero.Zotero"), None),
    // System Tools
    ("btop", "btop", "Resource monitor for cpu memory disk and network", "apt", "System Tools", None, None),
    ("htop", "htop", "Interactive process viewer", "apt", "System Tools", None, None),
    ("ncdu", "ncdu", "Disk usage analyzer with ncurses interface", "apt", "System Tools", None, None),
    ("timeshift", "Timeshift", "System restore and backup snapshots", "apt", "System Tools", None, None),
    // Terminal Utilities
    ("bat", "bat", "Cat clone with syntax highlighting", "apt", "Terminal Utilities", None, Some("batcat")),
    ("fzf", "fzf", "Command line fuzzy finder", "github:junegunn/fzf", "Terminal Utilities", None, None),
    ("jq", "jq", "Command line JSON processor", "apt", "Terminal Utilities", None, None),
    ("ripgrep", "ripgrep", "Fast recursive search respecting gitignore", "apt", "Terminal Utilities", None, Some("rg")),
    ("starship", "Starship", "Minimal and fast shell prompt", "script:https://starship.rs/install.sh", "Terminal Utilities", None, None),
];

/// What: Return the built-in application registry.
///
/// Output:
/// - One `CatalogEntry` per built-in application, in registry order.
#[must_use]
pub fn builtin_entries() -> Vec<CatalogEntry> {
    BUILTIN
        .iter()
        .map(|(key, name, description, source, group, package, tool)| CatalogEntry {
            key: (*key).to_string(),
            name: (*name).to_string(),
            description: (*description).to_string(),
            source: (*source).to_string(),
            group: (*group).to_string(),
            package: package.map(str::to_string),
            tool: tool.map(str::to_string),
        })
        .collect()
}
