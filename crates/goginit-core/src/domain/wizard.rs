//! Interactive selection state machine.
//!
//! ```text
//! NameInput ──enter──▶ FrameworkSelect ──enter──▶ DbSelect ──enter──▶ Complete
//!     │                      │                        │
//!     └────────── quit ──────┴────────── quit ────────┴──────────▶ Cancelled
//! ```
//!
//! `DbSelect` is skipped when [`WizardOptions::offer_database`] is off.
//!
//! The machine is a pure function of `(state, event)`; it never touches the
//! terminal. The CLI decodes key presses into [`WizardEvent`]s, feeds them one
//! at a time, and paints [`Wizard::view`] between events.

use crate::domain::{
    registry::FRAMEWORK_REGISTRY,
    value_objects::{ProjectName, ProjectSpec},
};

/// Choices offered by the database step. The first one enables setup.
pub const DB_CHOICES: &[&str] = &["Yes", "No"];

/// One decoded input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardEvent {
    /// A printable character.
    Char(char),
    Backspace,
    Enter,
    Up,
    Down,
    Quit,
}

/// Which optional steps the wizard presents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WizardOptions {
    pub offer_database: bool,
}

impl Default for WizardOptions {
    fn default() -> Self {
        Self {
            offer_database: true,
        }
    }
}

/// Discriminant of the non-terminal states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    NameInput,
    FrameworkSelect,
    DbSelect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardState {
    NameInput {
        buffer: String,
        /// Set when the last commit was rejected; cleared by the next key.
        rejection: Option<String>,
    },
    FrameworkSelect {
        name: ProjectName,
        cursor: usize,
    },
    DbSelect {
        name: ProjectName,
        framework: &'static str,
        cursor: usize,
    },
    Complete(ProjectSpec),
    Cancelled,
}

impl WizardState {
    pub fn initial() -> Self {
        Self::NameInput {
            buffer: String::new(),
            rejection: None,
        }
    }

    /// `None` once the wizard has terminated.
    pub fn step(&self) -> Option<WizardStep> {
        match self {
            Self::NameInput { .. } => Some(WizardStep::NameInput),
            Self::FrameworkSelect { .. } => Some(WizardStep::FrameworkSelect),
            Self::DbSelect { .. } => Some(WizardStep::DbSelect),
            Self::Complete(_) | Self::Cancelled => None,
        }
    }

    pub fn cursor(&self) -> Option<usize> {
        match self {
            Self::FrameworkSelect { cursor, .. } | Self::DbSelect { cursor, .. } => Some(*cursor),
            _ => None,
        }
    }

    /// Choice list of the current step; empty outside the selection steps.
    pub fn choices(&self) -> Vec<&'static str> {
        match self {
            Self::FrameworkSelect { .. } => FRAMEWORK_REGISTRY.iter().map(|d| d.key).collect(),
            Self::DbSelect { .. } => DB_CHOICES.to_vec(),
            _ => Vec::new(),
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.step().is_none()
    }
}

/// Apply one event.
pub fn transition(options: &WizardOptions, state: WizardState, event: WizardEvent) -> WizardState {
    if event == WizardEvent::Quit && !state.is_terminal() {
        return WizardState::Cancelled;
    }

    match state {
        WizardState::NameInput { mut buffer, .. } => match event {
            WizardEvent::Char(c) => {
                buffer.push(c);
                WizardState::NameInput {
                    buffer,
                    rejection: None,
                }
            }
            WizardEvent::Backspace => {
                buffer.pop();
                WizardState::NameInput {
                    buffer,
                    rejection: None,
                }
            }
            WizardEvent::Enter => match ProjectName::parse(&buffer) {
                Ok(name) => WizardState::FrameworkSelect { name, cursor: 0 },
                Err(err) => WizardState::NameInput {
                    buffer,
                    rejection: Some(rejection_message(&err)),
                },
            },
            WizardEvent::Up | WizardEvent::Down | WizardEvent::Quit => WizardState::NameInput {
                buffer,
                rejection: None,
            },
        },

        WizardState::FrameworkSelect { name, cursor } => {
            let len = FRAMEWORK_REGISTRY.len();
            match event {
                WizardEvent::Enter => {
                    let framework = FRAMEWORK_REGISTRY[cursor].key;
                    if options.offer_database {
                        WizardState::DbSelect {
                            name,
                            framework,
                            cursor: 0,
                        }
                    } else {
                        WizardState::Complete(ProjectSpec::new(name, framework, false))
                    }
                }
                other => WizardState::FrameworkSelect {
                    name,
                    cursor: move_cursor(cursor, len, other),
                },
            }
        }

        WizardState::DbSelect {
            name,
            framework,
            cursor,
        } => match event {
            WizardEvent::Enter => {
                WizardState::Complete(ProjectSpec::new(name, framework, cursor == 0))
            }
            other => WizardState::DbSelect {
                name,
                framework,
                cursor: move_cursor(cursor, DB_CHOICES.len(), other),
            },
        },

        terminal @ (WizardState::Complete(_) | WizardState::Cancelled) => terminal,
    }
}

/// Clamp-move within `[0, len - 1]`; non-navigation events leave it alone.
fn move_cursor(cursor: usize, len: usize, event: WizardEvent) -> usize {
    match event {
        WizardEvent::Up => cursor.saturating_sub(1),
        WizardEvent::Down if cursor + 1 < len => cursor + 1,
        _ => cursor,
    }
}

fn rejection_message(err: &crate::domain::DomainError) -> String {
    match err {
        crate::domain::DomainError::InvalidProjectName { reason, .. } => reason.clone(),
        other => other.to_string(),
    }
}

/// How a wizard run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardOutcome {
    Complete(ProjectSpec),
    Cancelled,
}

/// Render-ready projection of a state. Pure data; styling is the caller's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardView {
    pub title: &'static str,
    /// Text prompt with the typed buffer (name step only).
    pub prompt: Option<String>,
    pub choices: Vec<&'static str>,
    pub selected: Option<usize>,
    pub notice: Option<String>,
    pub hint: &'static str,
}

/// Owns the state during the interactive phase.
#[derive(Debug, Clone)]
pub struct Wizard {
    options: WizardOptions,
    state: WizardState,
}

impl Wizard {
    pub fn new(options: WizardOptions) -> Self {
        Self {
            options,
            state: WizardState::initial(),
        }
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn options(&self) -> &WizardOptions {
        &self.options
    }

    /// Feed one event.
    pub fn handle(&mut self, event: WizardEvent) {
        let current = std::mem::replace(&mut self.state, WizardState::Cancelled);
        self.state = transition(&self.options, current, event);
    }

    /// Feed events until the wizard terminates or the events run out.
    pub fn run<I>(mut self, events: I) -> Option<WizardOutcome>
    where
        I: IntoIterator<Item = WizardEvent>,
    {
        for event in events {
            self.handle(event);
            if self.state.is_terminal() {
                break;
            }
        }
        self.into_outcome()
    }

    /// `None` while the wizard is still collecting input.
    pub fn into_outcome(self) -> Option<WizardOutcome> {
        match self.state {
            WizardState::Complete(spec) => Some(WizardOutcome::Complete(spec)),
            WizardState::Cancelled => Some(WizardOutcome::Cancelled),
            _ => None,
        }
    }

    pub fn view(&self) -> WizardView {
        match &self.state {
            WizardState::NameInput { buffer, rejection } => WizardView {
                title: "Create a new Go project",
                prompt: Some(format!("Enter project name: {buffer}")),
                choices: Vec::new(),
                selected: None,
                notice: rejection.clone(),
                hint: "Press Esc to quit.",
            },
            WizardState::FrameworkSelect { cursor, .. } => WizardView {
                title: "\u{1f680}  Select a Framework",
                prompt: None,
                choices: self.state.choices(),
                selected: Some(*cursor),
                notice: None,
                hint: "Press q to quit.",
            },
            WizardState::DbSelect { cursor, .. } => WizardView {
                title: "\u{1f5c3}\u{fe0f}  Setup Database",
                prompt: None,
                choices: self.state.choices(),
                selected: Some(*cursor),
                notice: None,
                hint: "Press q to quit.",
            },
            WizardState::Complete(spec) => WizardView {
                title: "Selection complete",
                prompt: None,
                choices: Vec::new(),
                selected: None,
                notice: Some(spec.to_string()),
                hint: "",
            },
            WizardState::Cancelled => WizardView {
                title: "Cancelled",
                prompt: None,
                choices: Vec::new(),
                selected: None,
                notice: None,
                hint: "",
            },
        }
    }
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new(WizardOptions::default())
    }
}
