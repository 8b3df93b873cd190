//! Getting-started extraction
//!
//! Commands come from exactly one source: fenced shell blocks in the README
//! when there are any, otherwise the first ecosystem whose manifest is
//! present, otherwise a generic clone placeholder.

use lazy_static::lazy_static;
use regex::Regex;

use super::char_prefix;
use super::readme::extract_section;
use crate::constants::limits::{MAX_COMMAND_BLOCKS, SETUP_SCAN_CHARS};
use crate::constants::section_keywords::GETTING_STARTED_SECTION;
use crate::models::{GettingStarted, RawSnapshot};

lazy_static! {
    static ref FENCED_BLOCK: Regex =
        Regex::new(r"(?ms)^[ \t]*```[ \t]*([A-Za-z0-9_+-]*)[^\n]*\n(.*?)^[ \t]*```").unwrap();
}

/// Fence tags treated as shell; an untagged fence counts too
const SHELL_TAGS: &[&str] = &["", "bash", "sh", "shell", "zsh", "powershell", "cmd"];

pub const DEFAULT_STEPS: &str =
    "Install dependencies, configure environment, then run the primary startup command from the repository README.";

pub const GENERIC_COMMANDS: &str = "git clone <repo-url>\ncd <repo>\n# Follow project README setup steps";

/// Where the command list came from, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandSource {
    ReadmeBlocks,
    NodeManifest,
    PythonRequirements,
    GoModule,
    CargoManifest,
    Generic,
}

impl CommandSource {
    pub const PRIORITY: [CommandSource; 6] = [
        CommandSource::ReadmeBlocks,
        CommandSource::NodeManifest,
        CommandSource::PythonRequirements,
        CommandSource::GoModule,
        CommandSource::CargoManifest,
        CommandSource::Generic,
    ];

    /// Manifest that enables an ecosystem source
    pub fn manifest(&self) -> Option<&'static str> {
        match self {
            CommandSource::NodeManifest => Some("package.json"),
            CommandSource::PythonRequirements => Some("requirements.txt"),
            CommandSource::GoModule => Some("go.mod"),
            CommandSource::CargoManifest => Some("Cargo.toml"),
            CommandSource::ReadmeBlocks | CommandSource::Generic => None,
        }
    }

    fn canned_commands(&self) -> &'static str {
        match self {
            CommandSource::NodeManifest => "npm install\nnpm run build\nnpm start",
            CommandSource::PythonRequirements => "pip install -r requirements.txt\npython main.py",
            CommandSource::GoModule => "go mod tidy\ngo run .",
            CommandSource::CargoManifest => "cargo build\ncargo run",
            CommandSource::ReadmeBlocks | CommandSource::Generic => GENERIC_COMMANDS,
        }
    }

    /// Commands this source yields, empty when it does not apply
    pub fn commands(&self, search_text: &str, snapshot: &RawSnapshot) -> Vec<String> {
        match self {
            CommandSource::ReadmeBlocks => shell_blocks(search_text),
            CommandSource::Generic => vec![GENERIC_COMMANDS.to_string()],
            ecosystem => match ecosystem.manifest().and_then(|file| snapshot.config(file)) {
                Some(_) => vec![ecosystem.canned_commands().to_string()],
                None => Vec::new(),
            },
        }
    }
}

/// Up to four non-empty fenced blocks tagged as shell (or untagged)
///
/// Every fenced block is consumed whole, so a closing fence of some other
/// language never pairs with the next opening fence.
pub fn shell_blocks(text: &str) -> Vec<String> {
    FENCED_BLOCK
        .captures_iter(text)
        .filter(|block| SHELL_TAGS.contains(&block[1].to_lowercase().as_str()))
        .map(|block| block[2].trim().to_string())
        .filter(|block| !block.is_empty())
        .take(MAX_COMMAND_BLOCKS)
        .collect()
}

pub fn extract_getting_started(snapshot: &RawSnapshot) -> GettingStarted {
    let section = extract_section(&snapshot.readme, GETTING_STARTED_SECTION);
    let search_text = if section.is_empty() {
        char_prefix(&snapshot.readme, SETUP_SCAN_CHARS)
    } else {
        section.as_str()
    };

    let (source, commands) = CommandSource::PRIORITY
        .iter()
        .map(|source| (*source, source.commands(search_text, snapshot)))
        .find(|(_, commands)| !commands.is_empty())
        .unwrap_or_else(|| (CommandSource::Generic, vec![GENERIC_COMMANDS.to_string()]));
    tracing::debug!("getting-started commands from {:?}", source);

    let steps = if section.is_empty() { DEFAULT_STEPS.to_string() } else { section };
    GettingStarted { steps, commands }
}
