use std::io::Write;
use std::time::Duration;

use log::debug;

use crate::cli::GenerateArgs;
use crate::clipboard::Clipboard;
use crate::widget::PasswordWidget;

/// Prints `count` passwords, one per line. Each line after the first is a forced regeneration
/// with the same configuration.
///
/// With `--copy` the last password is exported and the clipboard is held for `--hold` seconds,
/// since some platforms drop the text as soon as the process exits.
pub(crate) fn generate_passwords(
    generate_args: &GenerateArgs,
    clipboard: &mut dyn Clipboard,
    out: &mut impl Write,
) -> std::io::Result<()> {
    debug!("Starting 'generate' with {} password(s)", generate_args.count);

    let mut widget = PasswordWidget::new(generate_args.base.configuration());
    writeln!(out, "{}", widget.password())?;

    for _ in 1..generate_args.count {
        widget.regenerate();
        writeln!(out, "{}", widget.password())?;
    }
    out.flush()?;

    if generate_args.copy {
        match widget.copy_to_clipboard(clipboard) {
            Ok(()) if generate_args.hold > 0 => {
                eprintln!(
                    "📋 Copied to clipboard, keeping it for {}s (Ctrl-C to stop)",
                    generate_args.hold
                );
                clipboard.hold(Duration::from_secs(generate_args.hold));
            }
            Ok(()) => {}
            Err(e) => eprintln!("⚠️  Could not copy password: {e}"),
        }
    }

    Ok(())
}
