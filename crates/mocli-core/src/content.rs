//! Bundled prose for every section
//!
//! All of this is literal data compiled into the binary. The view renders it
//! unchanged, so any string that appears in a copyable block here is the
//! exact string that ends up on the clipboard.

use crate::catalog;
use crate::icon::{Accent, Icon};
use crate::section::Section;

pub const PRODUCT_NAME: &str = "my-own-cli";
pub const TAGLINE: &str = "AI-Powered Terminal Agent";

/// Getting Started hero block
#[derive(Debug, Clone, Copy)]
pub struct Hero {
    pub badge: &'static str,
    pub headline: &'static str,
    pub lead: &'static str,
    /// Install command, shown in a copyable block
    pub install: &'static str,
}

pub const HERO: Hero = Hero {
    badge: "Supercharge Your Terminal",
    headline: "AI Agent in Your Terminal",
    lead: "Build, analyze, refactor, and ship faster with an intelligent CLI assistant \
           that understands your code and workflow.",
    install: "npm install -g my-own-cli",
};

#[derive(Debug, Clone, Copy)]
pub struct Feature {
    pub icon: Icon,
    pub accent: Accent,
    pub title: &'static str,
    pub desc: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        icon: Icon::Zap,
        accent: Accent::Emerald,
        title: "Lightning Fast",
        desc: "Execute commands and get AI responses in milliseconds",
    },
    Feature {
        icon: Icon::Code,
        accent: Accent::Cyan,
        title: "Context Aware",
        desc: "Understands your project structure and codebase",
    },
    Feature {
        icon: Icon::Terminal,
        accent: Accent::Purple,
        title: "Seamless Workflow",
        desc: "Integrates perfectly with your existing tools",
    },
];

pub fn features() -> &'static [Feature] {
    FEATURES
}

/// Title and subtitle at the top of a section panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Heading {
    pub title: &'static str,
    pub subtitle: &'static str,
}

/// Panel heading, or `None` for the hero-led Getting Started view
pub fn heading(section: Section) -> Option<Heading> {
    match section {
        Section::GettingStarted => None,
        Section::Commands => Some(Heading {
            title: "Command Reference",
            subtitle: "Complete list of available commands",
        }),
        Section::Examples => Some(Heading {
            title: "Usage Examples",
            subtitle: "Real-world scenarios and workflows",
        }),
        Section::Api => Some(Heading {
            title: "API Reference",
            subtitle: "Configuration and advanced options",
        }),
    }
}

/// A single line inside a workflow card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Copyable invocation
    Snippet(&'static str),
    /// Plain prose between snippets
    Note(&'static str),
}

#[derive(Debug, Clone, Copy)]
pub struct Workflow {
    pub title: &'static str,
    pub accent: Accent,
    pub steps: &'static [Step],
}

const WORKFLOWS: &[Workflow] = &[
    Workflow {
        title: "Quick Start New Project",
        accent: Accent::Emerald,
        steps: &[
            Step::Snippet("my-own-cli init --template react-typescript"),
            Step::Snippet("my-own-cli generate component Header --props title,subtitle"),
            Step::Snippet("my-own-cli test --watch"),
        ],
    },
    Workflow {
        title: "Code Analysis & Refactoring",
        accent: Accent::Cyan,
        steps: &[
            Step::Snippet("my-own-cli analyze src/ --security --performance"),
            Step::Snippet("my-own-cli refactor src/utils/helper.js --suggest"),
            Step::Snippet("my-own-cli docs generate --output docs/"),
        ],
    },
    Workflow {
        title: "Interactive Development",
        accent: Accent::Purple,
        steps: &[
            Step::Snippet("my-own-cli chat"),
            Step::Note("Then ask: \"How can I optimize database queries in my app?\""),
            Step::Snippet("my-own-cli commit --auto --conventional"),
        ],
    },
];

pub fn workflows() -> &'static [Workflow] {
    WORKFLOWS
}

pub const CONFIG_FILE_NAME: &str = "my-own-cli.config.json";

/// Sample project configuration shown on the API Reference panel
pub const CONFIG_SAMPLE: &str = r#"{
  "model": "advanced",
  "context": {
    "includeFiles": ["src/**/*.js", "*.md"],
    "excludeFiles": ["node_modules/**"]
  },
  "preferences": {
    "codeStyle": "airbnb",
    "testFramework": "jest",
    "commitStyle": "conventional"
  },
  "apiKey": "your-api-key-here"
}"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvVar {
    pub name: &'static str,
    pub description: &'static str,
}

const ENV_VARS: &[EnvVar] = &[
    EnvVar {
        name: "MY_OWN_CLI_API_KEY",
        description: "Your API authentication key",
    },
    EnvVar {
        name: "MY_OWN_CLI_MODEL",
        description: "AI model to use (basic, advanced, expert)",
    },
    EnvVar {
        name: "MY_OWN_CLI_VERBOSE",
        description: "Enable detailed logging (true/false)",
    },
];

/// Environment variables read by the documented tool
pub fn env_vars() -> &'static [EnvVar] {
    ENV_VARS
}

pub const FOOTER_LINES: [&str; 2] = [
    "Built with \u{2764}\u{FE0F} for developers who love their terminal",
    "\u{00A9} 2024 my-own-cli. Open source and community driven.",
];

/// Every literal a section renders inside a copyable block, in render order
pub fn copyable_snippets(section: Section) -> Vec<&'static str> {
    match section {
        Section::GettingStarted => vec![HERO.install],
        Section::Commands => catalog::commands().iter().map(|cmd| cmd.example).collect(),
        Section::Examples => WORKFLOWS
            .iter()
            .flat_map(|workflow| workflow.steps.iter())
            .filter_map(|step| match step {
                Step::Snippet(text) => Some(*text),
                Step::Note(_) => None,
            })
            .collect(),
        // The config sample is a plain <pre>, not a copy target
        Section::Api => Vec::new(),
    }
}
