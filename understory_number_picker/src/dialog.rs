// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text-entry fallback for setting a picker value directly.
//!
//! [`EditDialog`] models a modal dialog with a single numeric field. It only
//! tracks the pending value and a validation flag; drawing the dialog and
//! collecting keystrokes is up to the host.
//!
//! Validation is advisory: out-of-band numbers set [`EditDialog::is_invalid`]
//! but are still accepted, and confirming always reports the pending value.
//!
//! ```
//! use understory_number_picker::dialog::{EditDialog, TextChange};
//!
//! let mut dialog = EditDialog::default();
//! dialog.open(8);
//! assert_eq!(dialog.text(), "8");
//!
//! assert_eq!(
//!     dialog.on_text_change("8085"),
//!     TextChange::Parsed { value: 8085, out_of_band: false }
//! );
//! assert_eq!(dialog.on_text_change("80x"), TextChange::Ignored);
//! assert_eq!(dialog.confirm(), Some(8085));
//! assert!(!dialog.is_open());
//! ```

use alloc::string::{String, ToString};
use core::ops::RangeInclusive;

/// Pending value meaning "the field is empty".
pub const UNSET: i32 = -1;

/// Values outside this band raise the validation flag.
///
/// The band is fixed and does not follow the picker's own range.
pub const VALIDATION_BAND: RangeInclusive<i32> = 1_000..=1_000_000;

/// Hint shown in the empty field.
pub const PLACEHOLDER: &str = "example: 8085";

/// Outcome of feeding new field text to the dialog.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TextChange {
    /// The field was emptied; the pending value is [`UNSET`].
    Cleared,
    /// The text parsed as an integer, which is now the pending value.
    Parsed {
        /// The parsed value.
        value: i32,
        /// Whether the value lies outside [`VALIDATION_BAND`].
        out_of_band: bool,
    },
    /// The text is not an integer; nothing changed.
    Ignored,
}

/// State of the edit dialog of one picker.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditDialog {
    open: bool,
    pending: i32,
    invalid: bool,
}

impl EditDialog {
    /// Opens the dialog with the field seeded from `value`.
    pub fn open(&mut self, value: i32) {
        self.open = true;
        self.pending = value;
        self.invalid = false;
    }

    /// Returns `true` while the dialog is shown.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The value that confirming would report.
    #[must_use]
    pub fn pending_value(&self) -> i32 {
        self.pending
    }

    /// Whether the last parsed value fell outside [`VALIDATION_BAND`].
    #[must_use]
    pub fn is_invalid(&self) -> bool {
        self.invalid
    }

    /// Text to display in the field; empty for [`UNSET`].
    #[must_use]
    pub fn text(&self) -> String {
        if self.pending == UNSET {
            String::new()
        } else {
            self.pending.to_string()
        }
    }

    /// Applies the field's new contents.
    ///
    /// Does nothing while the dialog is closed.
    pub fn on_text_change(&mut self, text: &str) -> TextChange {
        if !self.open {
            return TextChange::Ignored;
        }
        if text.is_empty() {
            self.pending = UNSET;
            return TextChange::Cleared;
        }
        match text.parse::<i32>() {
            Ok(value) => {
                let out_of_band = !VALIDATION_BAND.contains(&value);
                self.pending = value;
                self.invalid = out_of_band;
                TextChange::Parsed { value, out_of_band }
            }
            Err(_) => TextChange::Ignored,
        }
    }

    /// Closes the dialog and returns the pending value, valid or not.
    ///
    /// Returns `None` if the dialog was not open.
    pub fn confirm(&mut self) -> Option<i32> {
        if !self.open {
            return None;
        }
        self.open = false;
        Some(self.pending)
    }

    /// Closes the dialog without reporting anything.
    ///
    /// Returns `true` if the dialog was open.
    pub fn dismiss(&mut self) -> bool {
        core::mem::replace(&mut self.open, false)
    }
}
