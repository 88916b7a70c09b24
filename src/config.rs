// Copyright (c) 2024 PostFinance AG
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use log::debug;

pub(crate) const MIN_LENGTH: usize = 6;
pub(crate) const MAX_LENGTH: usize = 40;
pub(crate) const DEFAULT_LENGTH: usize = 8;

/// User-controlled settings that parameterize password generation.
///
/// The length is always kept within `MIN_LENGTH..=MAX_LENGTH`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Configuration {
    length: usize,
    pub(crate) allow_numbers: bool,
    pub(crate) allow_symbols: bool,
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            length: DEFAULT_LENGTH,
            allow_numbers: false,
            allow_symbols: false,
        }
    }
}

impl Configuration {
    pub(crate) fn new(length: usize, allow_numbers: bool, allow_symbols: bool) -> Self {
        Configuration {
            length: clamp_length(length),
            allow_numbers,
            allow_symbols,
        }
    }

    pub(crate) fn length(&self) -> usize {
        self.length
    }

    pub(crate) fn set_length(&mut self, length: usize) {
        self.length = clamp_length(length);
    }
}

fn clamp_length(length: usize) -> usize {
    let clamped = length.clamp(MIN_LENGTH, MAX_LENGTH);
    if clamped != length {
        debug!("Clamped password length {length} to {clamped}");
    }
    clamped
}
