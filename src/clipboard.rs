// Copyright (c) 2024 PostFinance AG
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use std::thread;
use std::time::Duration;

use ::clipboard::{ClipboardContext, ClipboardProvider};
use log::debug;
use thiserror::Error;

#[derive(Error, Debug)]
pub(crate) enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("clipboard rejected write: {0}")]
    WriteRejected(String),
}

/// Destination for exported passwords.
pub(crate) trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;

    /// Keeps the last written text available for `duration` before the caller moves on.
    fn hold(&mut self, duration: Duration);
}

/// The operating system clipboard. The provider is opened on the first write, so a session
/// without clipboard access still starts.
///
/// On X11 the text is only served while the provider is alive, so the context is kept for the
/// lifetime of this value.
#[derive(Default)]
pub(crate) struct SystemClipboard {
    context: Option<ClipboardContext>,
}

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut context: ClipboardContext = match self.context.take() {
            Some(context) => context,
            None => {
                debug!("Opening system clipboard");
                ClipboardProvider::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?
            }
        };

        let result = context
            .set_contents(text.to_string())
            .map_err(|e| ClipboardError::WriteRejected(e.to_string()));
        self.context = Some(context);
        result
    }

    fn hold(&mut self, duration: Duration) {
        if self.context.is_none() {
            return;
        }

        debug!("Holding clipboard ownership for {duration:?}");
        thread::sleep(duration);
    }
}
