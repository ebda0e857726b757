//! Terminal driver for the selection wizard.
//!
//! Reads raw key presses with [`console::Term`], decodes them into
//! [`WizardEvent`]s, and repaints the [`WizardView`] in place after each one.
//! All selection logic lives in `goginit_core::domain::wizard`.

use std::io;

use console::{Key, Term};
use goginit_core::domain::{
    Wizard, WizardEvent, WizardOptions, WizardOutcome, WizardStep, WizardView,
};
use owo_colors::OwoColorize;
use tracing::debug;

use crate::error::{CliError, CliResult};

/// Run the wizard on `term` until it completes or is cancelled.
pub fn run(term: &Term, options: WizardOptions, color: bool) -> CliResult<WizardOutcome> {
    if !term.is_term() {
        return Err(CliError::NotInteractive);
    }

    let mut wizard = Wizard::new(options);
    term.hide_cursor()?;
    let result = drive(term, &mut wizard, color);
    term.show_cursor()?;
    result?;

    Ok(wizard.into_outcome().unwrap_or(WizardOutcome::Cancelled))
}

fn drive(term: &Term, wizard: &mut Wizard, color: bool) -> io::Result<()> {
    let mut painted = 0;
    while let Some(step) = wizard.state().step() {
        let lines = render(&wizard.view(), color);
        if painted > 0 {
            term.clear_last_lines(painted)?;
        }
        for line in &lines {
            term.write_line(line)?;
        }
        painted = lines.len();

        let event = match term.read_key() {
            Ok(key) => decode(&key, step),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => Some(WizardEvent::Quit),
            Err(e) => return Err(e),
        };
        if let Some(event) = event {
            debug!(?step, ?event, "wizard input");
            wizard.handle(event);
        }
    }

    if painted > 0 {
        term.clear_last_lines(painted)?;
    }
    Ok(())
}

/// Map a key press to a wizard event.
///
/// `q` quits only on the selection steps; while typing a name it is text.
pub fn decode(key: &Key, step: WizardStep) -> Option<WizardEvent> {
    match key {
        Key::Escape | Key::CtrlC | Key::Char('\u{3}') => Some(WizardEvent::Quit),
        Key::Char('q') if step != WizardStep::NameInput => Some(WizardEvent::Quit),
        Key::ArrowUp => Some(WizardEvent::Up),
        Key::ArrowDown => Some(WizardEvent::Down),
        Key::Enter => Some(WizardEvent::Enter),
        Key::Backspace => Some(WizardEvent::Backspace),
        Key::Char(c) if !c.is_control() => Some(WizardEvent::Char(*c)),
        _ => None,
    }
}

/// Lines to paint for one view.
pub fn render(view: &WizardView, color: bool) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(if color {
        view.title.cyan().bold().to_string()
    } else {
        view.title.to_string()
    });
    lines.push(String::new());

    if let Some(prompt) = &view.prompt {
        lines.push(prompt.clone());
    }

    for (index, choice) in view.choices.iter().enumerate() {
        let line = if view.selected == Some(index) {
            let text = format!("> {choice}");
            if color {
                text.green().bold().to_string()
            } else {
                text
            }
        } else {
            format!("  {choice}")
        };
        lines.push(line);
    }

    if let Some(notice) = &view.notice {
        lines.push(String::new());
        lines.push(if color {
            notice.red().to_string()
        } else {
            notice.clone()
        });
    }

    if !view.hint.is_empty() {
        lines.push(String::new());
        lines.push(if color {
            view.hint.dimmed().to_string()
        } else {
            view.hint.to_string()
        });
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_and_ctrl_c_quit_everywhere() {
        for step in [
            WizardStep::NameInput,
            WizardStep::FrameworkSelect,
            WizardStep::DbSelect,
        ] {
            assert_eq!(decode(&Key::Escape, step), Some(WizardEvent::Quit));
            assert_eq!(decode(&Key::CtrlC, step), Some(WizardEvent::Quit));
        }
    }

    #[test]
    fn q_is_text_while_naming() {
        assert_eq!(
            decode(&Key::Char('q'), WizardStep::NameInput),
            Some(WizardEvent::Char('q'))
        );
        assert_eq!(
            decode(&Key::Char('q'), WizardStep::FrameworkSelect),
            Some(WizardEvent::Quit)
        );
        assert_eq!(
            decode(&Key::Char('q'), WizardStep::DbSelect),
            Some(WizardEvent::Quit)
        );
    }

    #[test]
    fn navigation_keys() {
        let step = WizardStep::FrameworkSelect;
        assert_eq!(decode(&Key::ArrowUp, step), Some(WizardEvent::Up));
        assert_eq!(decode(&Key::ArrowDown, step), Some(WizardEvent::Down));
        assert_eq!(decode(&Key::Enter, step), Some(WizardEvent::Enter));
        assert_eq!(
            decode(&Key::Backspace, WizardStep::NameInput),
            Some(WizardEvent::Backspace)
        );
    }

    #[test]
    fn unmapped_keys_are_ignored() {
        assert_eq!(decode(&Key::Tab, WizardStep::NameInput), None);
        assert_eq!(decode(&Key::ArrowLeft, WizardStep::FrameworkSelect), None);
        assert_eq!(decode(&Key::Char('\u{7}'), WizardStep::NameInput), None);
    }

    #[test]
    fn name_step_renders_prompt_and_hint() {
        let lines = render(&Wizard::default().view(), false);
        assert_eq!(lines[0], "Create a new Go project");
        assert!(lines.contains(&"Enter project name: ".to_string()));
        assert_eq!(lines.last().map(String::as_str), Some("Press Esc to quit."));
    }

    #[test]
    fn selection_marks_cursor() {
        let mut wizard = Wizard::default();
        for c in "blog".chars() {
            wizard.handle(WizardEvent::Char(c));
        }
        wizard.handle(WizardEvent::Enter);
        wizard.handle(WizardEvent::Down);

        let lines = render(&wizard.view(), false);

        assert!(lines.contains(&"  echo".to_string()));
        assert!(lines.contains(&"> gin".to_string()));
        assert!(lines.contains(&"  default".to_string()));
    }

    #[test]
    fn rejection_notice_is_shown() {
        let mut wizard = Wizard::default();
        wizard.handle(WizardEvent::Enter);

        let view = wizard.view();
        let notice = view.notice.clone().expect("empty name is rejected");
        assert!(render(&view, false).contains(&notice));
    }
}
