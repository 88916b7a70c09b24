//! Terminal rendition of the password generator widget.
//!
//! Each loop iteration renders the current password and configuration, then asks for one
//! action. All state lives in [`PasswordWidget`]; this module only translates prompts into
//! widget events.

use std::fmt;

use console::style;
use inquire::validator::Validation;
use inquire::{CustomType, InquireError, Select};
use log::debug;
use rand::Rng;
use thiserror::Error;

use crate::clipboard::Clipboard;
use crate::config::{MAX_LENGTH, MIN_LENGTH};
use crate::widget::{PasswordWidget, WidgetEvent};

#[derive(Error, Debug)]
pub(crate) enum WidgetError {
    #[error("terminal prompt failed: {0}")]
    Prompt(#[from] InquireError),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Action {
    Copy,
    Length,
    Numbers,
    Symbols,
    Quit,
}

impl Action {
    const ALL: [Action; 5] = [
        Action::Copy,
        Action::Length,
        Action::Numbers,
        Action::Symbols,
        Action::Quit,
    ];
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Copy => write!(f, "📋 Copy"),
            Action::Length => write!(f, "📏 Length"),
            Action::Numbers => write!(f, "🔢 Numbers"),
            Action::Symbols => write!(f, "🔣 Characters"),
            Action::Quit => write!(f, "🚪 Quit"),
        }
    }
}

pub(crate) fn run(
    widget: &mut PasswordWidget,
    clipboard: &mut dyn Clipboard,
) -> Result<(), WidgetError> {
    println!("╔══════════════════════════════════════╗");
    println!("║          Password Generator          ║");
    println!("╚══════════════════════════════════════╝");

    loop {
        render(widget);

        let action = match Select::new("Action:", Action::ALL.to_vec()).prompt() {
            Ok(action) => action,
            Err(e) if is_cancellation(&e) => break,
            Err(e) => return Err(e.into()),
        };
        debug!("Selected action: {action:?}");

        if apply(action, widget, clipboard, prompt_length)? == Flow::Quit {
            break;
        }
    }

    debug!(
        "Session ended after {} regeneration(s)",
        widget.regenerations()
    );
    Ok(())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Carries out one menu action. `ask_length` is only called for [`Action::Length`].
fn apply<R: Rng>(
    action: Action,
    widget: &mut PasswordWidget<R>,
    clipboard: &mut dyn Clipboard,
    ask_length: impl FnOnce(usize) -> Result<usize, InquireError>,
) -> Result<Flow, WidgetError> {
    match action {
        Action::Copy => {
            if let Err(e) = widget.copy_to_clipboard(clipboard) {
                println!("{}", style(format!("⚠️  Could not copy: {e}")).yellow());
            } else {
                println!("{}", style("✅ Copied to clipboard").green());
            }
        }
        Action::Length => match ask_length(widget.configuration().length()) {
            Ok(length) => widget.handle(WidgetEvent::SetLength(length)),
            Err(e) if is_cancellation(&e) => debug!("Length prompt cancelled"),
            Err(e) => return Err(e.into()),
        },
        Action::Numbers => widget.handle(WidgetEvent::ToggleNumbers),
        Action::Symbols => widget.handle(WidgetEvent::ToggleSymbols),
        Action::Quit => return Ok(Flow::Quit),
    }

    Ok(Flow::Continue)
}

fn render(widget: &PasswordWidget) {
    let password = if widget.is_highlighted() {
        style(widget.password()).reverse().bold()
    } else {
        style(widget.password()).bold()
    };
    let config = widget.configuration();

    println!();
    println!("  {password}");
    println!(
        "  Length: {}   [{}] Numbers   [{}] Characters",
        config.length(),
        checkbox(config.allow_numbers),
        checkbox(config.allow_symbols)
    );
}

fn checkbox(checked: bool) -> &'static str {
    if checked {
        "x"
    } else {
        " "
    }
}

fn prompt_length(current: usize) -> Result<usize, InquireError> {
    let help = format!("{MIN_LENGTH} to {MAX_LENGTH}");

    CustomType::<usize>::new("Length:")
        .with_default(current)
        .with_help_message(&help)
        .with_error_message("Please type a whole number")
        .with_validator(|length: &usize| {
            if (MIN_LENGTH..=MAX_LENGTH).contains(length) {
                Ok(Validation::Valid)
            } else {
                Ok(Validation::Invalid(
                    format!("Length must be between {MIN_LENGTH} and {MAX_LENGTH}").into(),
                ))
            }
        })
        .prompt()
}

fn is_cancellation(e: &InquireError) -> bool {
    matches!(
        e,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::tests::MemoryClipboard;
    use crate::config::Configuration;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn seeded() -> PasswordWidget<StdRng> {
        PasswordWidget::with_rng(Configuration::default(), StdRng::seed_from_u64(3))
    }

    fn no_prompt(_: usize) -> Result<usize, InquireError> {
        panic!("length prompt must not be shown")
    }

    #[test]
    fn action_labels() {
        let labels: Vec<String> = Action::ALL.iter().map(|a| a.to_string()).collect();

        assert_eq!(labels.len(), 5);
        assert!(labels[0].ends_with("Copy"));
        assert!(labels[4].ends_with("Quit"));
    }

    #[test]
    fn checkbox_marks() {
        assert_eq!(checkbox(true), "x");
        assert_eq!(checkbox(false), " ");
    }

    #[test]
    fn cancellation_is_not_an_error() {
        assert!(is_cancellation(&InquireError::OperationCanceled));
        assert!(is_cancellation(&InquireError::OperationInterrupted));
        assert!(!is_cancellation(&InquireError::NotTTY));
    }

    #[test]
    fn copy_action_exports_password() {
        let mut widget = seeded();
        let mut clipboard = MemoryClipboard::default();

        let flow = apply(Action::Copy, &mut widget, &mut clipboard, no_prompt).unwrap();

        assert_eq!(flow, Flow::Continue);
        assert_eq!(clipboard.contents.as_deref(), Some(widget.password()));
        assert!(widget.is_highlighted());
    }

    #[test]
    fn denied_copy_keeps_session() {
        let mut widget = seeded();
        let mut clipboard = MemoryClipboard {
            deny: true,
            ..Default::default()
        };
        let password = widget.password().to_string();

        let flow = apply(Action::Copy, &mut widget, &mut clipboard, no_prompt).unwrap();

        assert_eq!(flow, Flow::Continue);
        assert_eq!(widget.password(), password);
    }

    #[test]
    fn length_action_sets_length() {
        let mut widget = seeded();
        let mut clipboard = MemoryClipboard::default();

        let flow = apply(Action::Length, &mut widget, &mut clipboard, |current| {
            assert_eq!(current, 8);
            Ok(20)
        })
        .unwrap();

        assert_eq!(flow, Flow::Continue);
        assert_eq!(widget.configuration().length(), 20);
        assert_eq!(widget.password().len(), 20);
        assert_eq!(widget.regenerations(), 2);
    }

    #[test]
    fn cancelled_length_prompt_keeps_session() {
        let mut widget = seeded();
        let mut clipboard = MemoryClipboard::default();
        let password = widget.password().to_string();

        let flow = apply(Action::Length, &mut widget, &mut clipboard, |_| {
            Err(InquireError::OperationCanceled)
        })
        .unwrap();

        assert_eq!(flow, Flow::Continue);
        assert_eq!(widget.password(), password);
        assert_eq!(widget.regenerations(), 1);
    }

    #[test]
    fn failed_length_prompt_ends_session() {
        let mut widget = seeded();
        let mut clipboard = MemoryClipboard::default();

        let result = apply(Action::Length, &mut widget, &mut clipboard, |_| {
            Err(InquireError::NotTTY)
        });

        assert!(matches!(
            result,
            Err(WidgetError::Prompt(InquireError::NotTTY))
        ));
    }

    #[test]
    fn toggle_actions_regenerate() {
        let mut widget = seeded();
        let mut clipboard = MemoryClipboard::default();

        apply(Action::Numbers, &mut widget, &mut clipboard, no_prompt).unwrap();
        assert!(widget.configuration().allow_numbers);
        assert_eq!(widget.regenerations(), 2);

        apply(Action::Symbols, &mut widget, &mut clipboard, no_prompt).unwrap();
        assert!(widget.configuration().allow_symbols);
        assert_eq!(widget.regenerations(), 3);
        assert!(clipboard.contents.is_none());
    }

    #[test]
    fn quit_action_ends_loop() {
        let mut widget = seeded();
        let mut clipboard = MemoryClipboard::default();

        let flow = apply(Action::Quit, &mut widget, &mut clipboard, no_prompt).unwrap();

        assert_eq!(flow, Flow::Quit);
        assert_eq!(widget.regenerations(), 1);
    }
}
