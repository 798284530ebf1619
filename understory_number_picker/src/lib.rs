// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_number_picker --heading-base-level=0

//! Understory Number Picker: a headless, vertically-scrollable number picker.
//!
//! This crate turns continuous drag and fling gestures into a discrete,
//! bounded integer value. It owns the interaction and animation state of one
//! picker column and leaves rendering, text input and layout to the host.
//!
//! The pieces, from the bottom up:
//!
//! - [`value`]: the bounded value model and display labels.
//! - [`mapping`]: converts pixel offsets to value changes and back, computes
//!   the legal offset interval and snaps to rows.
//! - [`animation`]: frame-driven decay and spring animation of a bounded scalar.
//! - [`velocity`]: release-velocity estimation from pointer samples.
//! - [`input`]: routes raw pointer events into drag deltas or the gestures that
//!   open the edit dialog.
//! - [`dialog`]: the text-entry fallback.
//! - [`preview`]: the three label rows shown for a given offset.
//! - [`picker`]: [`NumberPicker`], the per-instance controller tying these together.
//!
//! ## Controlled value
//!
//! The picker never keeps a value of its own between interactions. The owner
//! supplies `(value, range)` and receives [`PickerEvent::Committed`] once a
//! gesture settles or the dialog is confirmed; it then hands the new value
//! back with [`NumberPicker::set_value`]. Several pickers side by side share
//! nothing and need no coordination.
//!
//! ## Driving a picker
//!
//! ```rust
//! use core::time::Duration;
//! use kurbo::Point;
//! use understory_number_picker::{InteractionMode, NumberPicker, PickerEvent};
//!
//! let mut minutes = NumberPicker::new(30, 0..=59).unwrap();
//! let ms = Duration::from_millis;
//!
//! // Press, drag up by a row and a bit, release.
//! minutes.pointer_down(Point::new(0.0, 100.0), ms(0));
//! minutes.pointer_move(Point::new(0.0, 80.0), ms(16));
//! minutes.pointer_move(Point::new(0.0, 50.0), ms(32));
//! minutes.pointer_up(Point::new(0.0, 50.0), ms(48));
//!
//! // Feed frames until the settle animation commits a value.
//! let mut now = ms(48);
//! let mut committed = None;
//! while minutes.needs_frames() {
//!     now += ms(16);
//!     if let Some(PickerEvent::Committed(v)) = minutes.tick(now) {
//!         committed = Some(v);
//!     }
//! }
//! assert!(committed.unwrap() > 30);
//! assert_eq!(minutes.mode(), InteractionMode::Idle);
//! assert_eq!(minutes.offset(), 0.0);
//! ```
//!
//! ## Edit dialog
//!
//! A click, double click or long press opens the dialog. Single clicks are
//! held back for the double-tap timeout and reported from
//! [`NumberPicker::tick`]. While the dialog is open drag input is ignored. Confirming commits the typed value even if it is
//! flagged as out of band; validation only drives an error indicator.
//!
//! ```rust
//! use understory_number_picker::{EditorGesture, NumberPicker, PickerEvent};
//!
//! let mut port = NumberPicker::new(8, 0..=65_535).unwrap();
//! port.open_editor(EditorGesture::Click);
//! port.edit_text("8085");
//! assert!(!port.dialog().is_invalid());
//! assert_eq!(port.confirm_editor(), Some(PickerEvent::Committed(8085)));
//! ```
//!
//! ## Logging
//!
//! State transitions are reported through the [`log`] facade at `debug` and
//! `trace` level. Nothing is printed unless the application installs a logger.
//!
//! ## Features
//!
//! - `std` (enabled by default): forwards `std` to Kurbo and Peniko.
//! - `libm`: forwards `libm` to Kurbo and Peniko for `no_std` targets.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod animation;
pub mod config;
pub mod dialog;
pub mod input;
pub mod mapping;
pub mod picker;
pub mod preview;
pub mod value;
pub mod velocity;

pub use config::{PickerConfig, PickerStyle};
pub use dialog::{EditDialog, TextChange};
pub use input::EditorGesture;
pub use mapping::{OffsetBounds, QuantumError, RowMapping};
pub use picker::{InteractionMode, NumberPicker, PickerError, PickerEvent};
pub use preview::{Preview, RowPreview, RowSlot};
pub use value::{BoundedValue, Label, RangeError};
