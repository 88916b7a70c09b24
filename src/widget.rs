use log::{debug, info, warn};
use rand::rngs::ThreadRng;
use rand::Rng;

use crate::clipboard::{Clipboard, ClipboardError};
use crate::config::Configuration;
use crate::password::{generate_password, Alphabet};

/// Discrete user inputs the widget reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum WidgetEvent {
    SetLength(usize),
    ToggleNumbers,
    ToggleSymbols,
}

/// Holds the configuration and the password derived from it.
///
/// Every mutation that changes the configuration regenerates the password before returning, so
/// the published password always matches the latest configuration.
pub(crate) struct PasswordWidget<R: Rng = ThreadRng> {
    config: Configuration,
    password: String,
    highlighted: bool,
    regenerations: usize,
    rng: R,
}

impl PasswordWidget {
    pub(crate) fn new(config: Configuration) -> Self {
        PasswordWidget::with_rng(config, rand::rng())
    }
}

impl<R: Rng> PasswordWidget<R> {
    pub(crate) fn with_rng(config: Configuration, rng: R) -> Self {
        let mut widget = PasswordWidget {
            config,
            password: String::new(),
            highlighted: false,
            regenerations: 0,
            rng,
        };
        widget.regenerate();
        widget
    }

    pub(crate) fn configuration(&self) -> &Configuration {
        &self.config
    }

    pub(crate) fn password(&self) -> &str {
        &self.password
    }

    /// Whether the displayed password is selected after a copy.
    pub(crate) fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    pub(crate) fn regenerations(&self) -> usize {
        self.regenerations
    }

    pub(crate) fn set_length(&mut self, length: usize) {
        self.update(|config| config.set_length(length));
    }

    pub(crate) fn set_allow_numbers(&mut self, allow_numbers: bool) {
        self.update(|config| config.allow_numbers = allow_numbers);
    }

    pub(crate) fn set_allow_symbols(&mut self, allow_symbols: bool) {
        self.update(|config| config.allow_symbols = allow_symbols);
    }

    pub(crate) fn handle(&mut self, event: WidgetEvent) {
        match event {
            WidgetEvent::SetLength(length) => self.set_length(length),
            WidgetEvent::ToggleNumbers => self.set_allow_numbers(!self.config.allow_numbers),
            WidgetEvent::ToggleSymbols => self.set_allow_symbols(!self.config.allow_symbols),
        }
    }

    /// Copies the current password and selects it. A failed write leaves the password as is.
    pub(crate) fn copy_to_clipboard(
        &mut self,
        clipboard: &mut dyn Clipboard,
    ) -> Result<(), ClipboardError> {
        self.highlighted = true;

        match clipboard.write_text(&self.password) {
            Ok(()) => {
                info!("Copied password to clipboard");
                Ok(())
            }
            Err(e) => {
                warn!("Failed to copy password to clipboard: {e}");
                Err(e)
            }
        }
    }

    fn update(&mut self, mutate: impl FnOnce(&mut Configuration)) {
        let previous = self.config;
        mutate(&mut self.config);

        if self.config != previous {
            debug!("Configuration changed: {:?} -> {:?}", previous, self.config);
            self.regenerate();
        }
    }

    /// Draws a fresh password for the current configuration.
    pub(crate) fn regenerate(&mut self) {
        let alphabet = Alphabet::for_configuration(&self.config);
        self.password = generate_password(&alphabet, self.config.length(), &mut self.rng);
        self.highlighted = false;
        self.regenerations += 1;

        debug!("Regenerated password (#{})", self.regenerations);
    }
}
