//! Playback state machine for the CLI demo terminal.
//!
//! The demo loops forever over a fixed [`Script`], typing each command
//! character by character and then revealing its output line by line. Rather
//! than nesting ad-hoc timers, playback is modeled as an explicit state
//! machine: [`Playback::apply`] consumes one [`SequencerEvent`] and returns at
//! most one [`ScheduledEvent`] to deliver next. Exactly one timer chain is
//! active at a time, and an event arriving for a phase that has already ended
//! is ignored, so a stale timer callback can never corrupt the state.

use derive_more::Display;

use super::script::{Script, Step};

/// Pause between finishing typing a command and revealing its output.
pub const SETTLE_DELAY_MS: u32 = 300;
/// Interval between revealing consecutive output lines.
pub const LINE_REVEAL_INTERVAL_MS: u32 = 150;
/// Pause after the last output line before moving to the next step.
pub const ADVANCE_DELAY_MS: u32 = 600;
/// Pause on the completion screen before the loop restarts.
pub const RESTART_DELAY_MS: u32 = 5000;

/// Sub-state within one step's playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum Phase {
    /// Waiting out the step's start delay.
    #[default]
    Idle,
    /// Revealing the command text one character at a time.
    Typing,
    /// Revealing output lines one at a time.
    OutputRevealing,
    /// Output fully shown, waiting before committing the step to history.
    Advancing,
    /// All steps played; showing the synthetic completion block.
    Complete,
}

/// A step that has finished playing and is replayed in full above the
/// actively-typing line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedStep {
    pub command: String,
    pub output: Vec<String>,
}

/// Timer expirations driving the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencerEvent {
    StartDelayElapsed,
    CharTick,
    SettleElapsed,
    LineTick,
    AdvanceElapsed,
    RestartElapsed,
}

/// The single effect a transition can emit: deliver `event` after `delay_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledEvent {
    pub delay_ms: u32,
    pub event: SequencerEvent,
}

impl ScheduledEvent {
    fn after(delay_ms: u32, event: SequencerEvent) -> Self {
        Self { delay_ms, event }
    }
}

/// Mutable playback state for one mounted terminal.
///
/// Created when the component mounts, mutated only through [`Playback::apply`]
/// by the owning timer chain, and reset in place when the loop restarts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playback {
    script: Script,
    phase: Phase,
    step_index: usize,
    typed_prefix: String,
    visible_output: usize,
    history: Vec<CompletedStep>,
}

impl Playback {
    pub fn new(script: Script) -> Self {
        Self {
            script,
            phase: Phase::Idle,
            step_index: 0,
            typed_prefix: String::new(),
            visible_output: 0,
            history: Vec::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn step_index(&self) -> usize {
        self.step_index
    }

    pub fn typed_prefix(&self) -> &str {
        &self.typed_prefix
    }

    pub fn history(&self) -> &[CompletedStep] {
        &self.history
    }

    pub fn script(&self) -> &Script {
        &self.script
    }

    pub fn current_step(&self) -> Option<&Step> {
        self.script.get(self.step_index)
    }

    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }

    /// True while the command is still being typed out. The cursor renders
    /// solid during typing and blinks otherwise.
    pub fn is_typing(&self) -> bool {
        self.phase == Phase::Typing
    }

    /// Output lines of the current step revealed so far.
    pub fn visible_output_lines(&self) -> &[String] {
        match self.current_step() {
            Some(step) if self.phase == Phase::OutputRevealing || self.phase == Phase::Advancing => {
                &step.output[..self.visible_output.min(step.output.len())]
            }
            _ => &[],
        }
    }

    /// The first event to schedule after mount. `None` for an empty script:
    /// the terminal then just shows an idle prompt.
    pub fn start(&self) -> Option<ScheduledEvent> {
        self.script
            .get(self.step_index)
            .map(|step| ScheduledEvent::after(step.start_delay_ms, SequencerEvent::StartDelayElapsed))
    }

    /// Advance the state machine by one event.
    ///
    /// Returns the next event to schedule, or `None` when the event does not
    /// match the current phase (a stale timer) and the state was left
    /// untouched. For a non-empty script every valid event yields a follow-up:
    /// the loop has no terminal state.
    pub fn apply(&mut self, event: SequencerEvent) -> Option<ScheduledEvent> {
        use SequencerEvent::*;

        match (self.phase, event) {
            (Phase::Idle, StartDelayElapsed) => {
                let step = self.script.get(self.step_index)?;
                let speed = step.typing_speed_ms;
                self.phase = Phase::Typing;
                Some(ScheduledEvent::after(speed, CharTick))
            }
            (Phase::Typing, CharTick) => {
                let step = self.script.get(self.step_index)?;
                let typed = self.typed_prefix.chars().count();
                let next_char = step.command.chars().nth(typed);
                let speed = step.typing_speed_ms;
                let command_len = step.command.chars().count();
                if let Some(ch) = next_char {
                    self.typed_prefix.push(ch);
                }
                if self.typed_prefix.chars().count() >= command_len {
                    Some(ScheduledEvent::after(SETTLE_DELAY_MS, SettleElapsed))
                } else {
                    Some(ScheduledEvent::after(speed, CharTick))
                }
            }
            (Phase::Typing, SettleElapsed) => {
                self.phase = Phase::OutputRevealing;
                Some(ScheduledEvent::after(LINE_REVEAL_INTERVAL_MS, LineTick))
            }
            (Phase::OutputRevealing, LineTick) => {
                let step = self.script.get(self.step_index)?;
                let total = step.output.len();
                if self.visible_output < total {
                    self.visible_output += 1;
                }
                if self.visible_output == total {
                    self.phase = Phase::Advancing;
                    Some(ScheduledEvent::after(ADVANCE_DELAY_MS, AdvanceElapsed))
                } else {
                    Some(ScheduledEvent::after(LINE_REVEAL_INTERVAL_MS, LineTick))
                }
            }
            (Phase::Advancing, AdvanceElapsed) => {
                let step = self.script.get(self.step_index)?.clone();
                self.history.push(CompletedStep {
                    command: step.command,
                    output: step.output,
                });
                self.typed_prefix.clear();
                self.visible_output = 0;
                self.step_index += 1;
                match self.script.get(self.step_index) {
                    Some(next) => {
                        let delay = next.start_delay_ms;
                        self.phase = Phase::Idle;
                        Some(ScheduledEvent::after(delay, StartDelayElapsed))
                    }
                    None => {
                        self.phase = Phase::Complete;
                        Some(ScheduledEvent::after(RESTART_DELAY_MS, RestartElapsed))
                    }
                }
            }
            (Phase::Complete, RestartElapsed) => {
                self.history.clear();
                self.step_index = 0;
                self.typed_prefix.clear();
                self.visible_output = 0;
                self.phase = Phase::Idle;
                self.start()
            }
            // Stale timer for a phase that has already ended.
            _ => None,
        }
    }
}
