//! The documented command catalog
//!
//! Each record is literal display data. Nothing here parses or runs the
//! documented CLI; `usage` and `example` are rendered verbatim and `example`
//! is the exact string handed to the clipboard.

/// One documented subcommand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandRecord {
    /// Unique key within the catalog
    pub id: &'static str,
    pub name: &'static str,
    /// Invocation pattern, e.g. `my-own-cli chat [message]`
    pub usage: &'static str,
    pub description: &'static str,
    /// Concrete invocation shown in a copyable block
    pub example: &'static str,
}

const COMMANDS: &[CommandRecord] = &[
    CommandRecord {
        id: "init",
        name: "init",
        usage: "my-own-cli init",
        description: "Initialize a new project with AI-powered setup",
        example: "my-own-cli init --template react",
    },
    CommandRecord {
        id: "chat",
        name: "chat",
        usage: "my-own-cli chat [message]",
        description: "Start an interactive chat session with the AI agent",
        example: "my-own-cli chat \"How do I optimize this code?\"",
    },
    CommandRecord {
        id: "generate",
        name: "generate",
        usage: "my-own-cli generate [type]",
        description: "Generate code, components, or files using AI",
        example: "my-own-cli generate component Button",
    },
    CommandRecord {
        id: "analyze",
        name: "analyze",
        usage: "my-own-cli analyze [file]",
        description: "Analyze code quality, security, and performance",
        example: "my-own-cli analyze src/app.js",
    },
    CommandRecord {
        id: "refactor",
        name: "refactor",
        usage: "my-own-cli refactor [file]",
        description: "Intelligently refactor and improve your code",
        example: "my-own-cli refactor --pattern observer",
    },
    CommandRecord {
        id: "test",
        name: "test",
        usage: "my-own-cli test [options]",
        description: "Generate and run tests for your code",
        example: "my-own-cli test --coverage",
    },
    CommandRecord {
        id: "docs",
        name: "docs",
        usage: "my-own-cli docs [action]",
        description: "Generate or update documentation automatically",
        example: "my-own-cli docs generate --format markdown",
    },
    CommandRecord {
        id: "commit",
        name: "commit",
        usage: "my-own-cli commit",
        description: "Generate intelligent commit messages from changes",
        example: "my-own-cli commit --auto",
    },
];

/// All documented commands in display order
pub fn commands() -> &'static [CommandRecord] {
    COMMANDS
}

/// Look up a command by its id
pub fn find(id: &str) -> Option<&'static CommandRecord> {
    COMMANDS.iter().find(|cmd| cmd.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_order() {
        let ids: Vec<_> = commands().iter().map(|c| c.id).collect();
        assert_eq!(
            ids,
            vec![
                "init", "chat", "generate", "analyze", "refactor", "test", "docs", "commit"
            ]
        );
    }

    #[test]
    fn test_ids_are_unique() {
        let mut seen = HashSet::new();
        for cmd in commands() {
            assert!(seen.insert(cmd.id), "duplicate command id {}", cmd.id);
        }
    }

    #[test]
    fn test_usage_and_example_name_the_tool() {
        for cmd in commands() {
            let prefix = format!("my-own-cli {}", cmd.name);
            assert!(cmd.usage.starts_with(&prefix), "{}", cmd.usage);
            assert!(cmd.example.starts_with(&prefix), "{}", cmd.example);
        }
    }

    #[test]
    fn test_find_known_and_unknown() {
        let chat = find("chat").unwrap();
        assert_eq!(chat.usage, "my-own-cli chat [message]");
        assert_eq!(chat.example, "my-own-cli chat \"How do I optimize this code?\"");

        assert!(find("deploy").is_none());
        assert!(find("").is_none());
    }
}
