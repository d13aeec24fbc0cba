use std::collections::BTreeMap;

use ahash::HashSet;

use super::CopyCommand;
use crate::model::ServerId;

/// The header every generated script starts with, followed by a blank line
pub const SHEBANG: &str = "#!/bin/bash";

/// The copy script of one server
#[derive(Debug, Clone, Default)]
pub struct ShellScript {
    lines: Vec<String>,
    seen: HashSet<String>,
}

impl ShellScript {
    /// Add the copy line for `command`, returns `false` if the script already has it
    pub fn push_copy(&mut self, command: &CopyCommand) -> bool {
        let line = format!(
            "/bin/cp \"{}\" \"{}\"",
            quote(&command.source),
            quote(&command.destination)
        );
        if self.seen.contains(&line) {
            return false;
        }
        self.seen.insert(line.clone());
        self.lines.push(line);

        true
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn render(&self) -> String {
        let mut out = String::with_capacity(
            SHEBANG.len() + 2 + self.lines.iter().map(|v| v.len() + 1).sum::<usize>(),
        );
        out.push_str(SHEBANG);
        out.push_str("\n\n");
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }

        out
    }
}

/// The scripts of all servers of a run, ordered by server number
#[derive(Debug, Clone, Default)]
pub struct ShellScripts(BTreeMap<ServerId, ShellScript>);

impl ShellScripts {
    pub fn new(servers: impl IntoIterator<Item = ServerId>) -> Self {
        Self(
            servers
                .into_iter()
                .map(|v| (v, ShellScript::default()))
                .collect(),
        )
    }

    /// Add all copy commands to their server's script
    pub fn merge(&mut self, commands: &[CopyCommand]) {
        for command in commands {
            self.0.entry(command.server).or_default().push_copy(command);
        }
    }

    pub fn get(&self, server: ServerId) -> Option<&ShellScript> {
        self.0.get(&server)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ServerId, &ShellScript)> {
        self.0.iter().map(|(id, script)| (*id, script))
    }
}

/// Escape for the inside of a double-quoted bash string
fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | '"' | '$' | '`') {
            out.push('\\');
        }
        out.push(c);
    }

    out
}
