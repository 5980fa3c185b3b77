//! The fixed demo script played back by the CLI demo sequencer.
//!
//! A [`Script`] is an ordered, immutable list of [`Step`]s defined at build
//! time. Each step is one simulated command plus the output block it prints.

use serde::{Deserialize, Serialize};

/// One simulated command and the output lines it produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// The command text typed at the prompt.
    pub command: String,
    /// Output lines revealed one by one after the command is typed.
    pub output: Vec<String>,
    /// Delay before this step starts typing, in milliseconds.
    pub start_delay_ms: u32,
    /// Typing speed, in milliseconds per character.
    pub typing_speed_ms: u32,
}

impl Step {
    pub fn new(
        command: impl Into<String>,
        output: Vec<String>,
        start_delay_ms: u32,
        typing_speed_ms: u32,
    ) -> Self {
        Self {
            command: command.into(),
            output,
            start_delay_ms,
            typing_speed_ms,
        }
    }

    /// A step with no command or no output would render as a blank prompt
    /// that the sequencer can never finish typing or revealing.
    pub fn is_renderable(&self) -> bool {
        !self.command.is_empty() && !self.output.is_empty()
    }
}

/// An ordered, immutable sequence of steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    steps: Vec<Step>,
}

impl Script {
    /// Build a script, discarding steps that would not render visibly
    /// (empty command or empty output).
    pub fn new(steps: Vec<Step>) -> Self {
        Self {
            steps: steps.into_iter().filter(Step::is_renderable).collect(),
        }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// The Schemerr demo script shown in the hero terminal.
pub fn demo_script() -> Script {
    Script::new(vec![
        Step::new(
            "schemerr init",
            vec![
                "✓ Created .schemerrc".to_string(),
                "✓ Project initialized successfully!".to_string(),
            ],
            1000,
            50,
        ),
        Step::new(
            "schemerr config set --token=sk_live_***",
            vec![
                "✓ Token validated".to_string(),
                "✓ Token set successfully!".to_string(),
            ],
            800,
            40,
        ),
        Step::new(
            "schemerr deploy",
            vec![
                "◐ Building project...".to_string(),
                "◐ Uploading assets...".to_string(),
                "✓ Deployed successfully!".to_string(),
                "  → https://my-app.schemerr.dev".to_string(),
                "  → Ready in 2.3s".to_string(),
            ],
            800,
            45,
        ),
    ])
}
