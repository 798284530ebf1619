// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-instance picker controller.
//!
//! [`NumberPicker`] owns the transient half of a picker: the animated offset,
//! the interaction mode and the edit dialog. The committed value belongs to
//! the owner, who passes it in with [`NumberPicker::set_value`] and receives
//! new values as [`PickerEvent::Committed`]. The picker never adopts a value
//! on its own.
//!
//! ## Interaction cycle
//!
//! - `Idle` → `Dragging` on the first drag delta. Deltas move the offset
//!   directly, clamped so no value outside the range can be revealed.
//! - `Dragging` → `Settling` on release. The release velocity projects a
//!   coast target, which is snapped to a row and animated toward with a
//!   spring seeded by that velocity.
//! - `Settling` → `Idle` when the animation ends: the value under the centre
//!   row is committed and the offset jumps back to zero.
//! - A new drag during `Settling` cancels the animation without committing.
//! - Any mode → `EditingViaDialog` on a click, double click or long press.
//!   Drag input is ignored until the dialog is confirmed or dismissed.

use core::fmt;
use core::ops::RangeInclusive;
use core::time::Duration;

use kurbo::Point;

use crate::animation::{Animatable, Frame};
use crate::config::{PickerConfig, PickerStyle};
use crate::dialog::{EditDialog, TextChange};
use crate::input::{EditorGesture, OpenEditorPolicy, PointerRouter, RouterEvent};
use crate::mapping::{OffsetBounds, QuantumError, RowMapping};
use crate::preview::Preview;
use crate::value::{BoundedValue, Label, RangeError};

/// Error returned when a picker cannot be constructed.
#[derive(Clone, Debug, PartialEq)]
pub enum PickerError {
    /// The value range is empty.
    Range(RangeError),
    /// The configured row height is unusable.
    Quantum(QuantumError),
}

impl fmt::Display for PickerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Range(err) => write!(f, "invalid picker range: {err}"),
            Self::Quantum(err) => write!(f, "invalid picker configuration: {err}"),
        }
    }
}

impl core::error::Error for PickerError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Range(err) => Some(err),
            Self::Quantum(err) => Some(err),
        }
    }
}

impl From<RangeError> for PickerError {
    fn from(err: RangeError) -> Self {
        Self::Range(err)
    }
}

impl From<QuantumError> for PickerError {
    fn from(err: QuantumError) -> Self {
        Self::Quantum(err)
    }
}

/// What a picker is currently doing.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum InteractionMode {
    /// At rest, showing the committed value.
    #[default]
    Idle,
    /// Following the pointer.
    Dragging,
    /// Animating onto a row after release.
    Settling,
    /// The edit dialog is open.
    EditingViaDialog,
}

/// Notification for the owner of a picker.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PickerEvent {
    /// The value under the centre row changed mid-gesture.
    ///
    /// For live feedback only; the owner should keep its committed value.
    Previewed(i32),
    /// A gesture or the dialog produced a new authoritative value.
    Committed(i32),
    /// The edit dialog opened in response to a gesture.
    EditorOpened(EditorGesture),
    /// The edit dialog was dismissed without a value.
    EditorClosed,
}

/// A single-column number picker.
///
/// ```
/// use core::time::Duration;
/// use understory_number_picker::{NumberPicker, PickerEvent};
///
/// let mut hours = NumberPicker::new(5, 0..=23).unwrap();
///
/// // Drag almost two rows up and let go without velocity.
/// hours.drag_by(-40.0);
/// hours.drag_by(-35.0);
/// assert_eq!(hours.release(0.0), None);
///
/// let mut now = Duration::ZERO;
/// let committed = loop {
///     if let Some(PickerEvent::Committed(v)) = hours.tick(now) {
///         break v;
///     }
///     now += Duration::from_millis(16);
/// };
/// assert_eq!(committed, 7);
///
/// // The owner stays in charge of the value.
/// hours.set_value(committed, 0..=23).unwrap();
/// assert_eq!(hours.value(), 7);
/// ```
#[derive(Debug)]
pub struct NumberPicker {
    config: PickerConfig,
    style: PickerStyle,
    rows: RowMapping,
    label: Label,
    value: BoundedValue,
    offset: Animatable,
    mode: InteractionMode,
    dialog: EditDialog,
    router: PointerRouter,
    policy: OpenEditorPolicy,
    shown: i32,
}

impl NumberPicker {
    /// Creates a picker with the default configuration.
    pub fn new(value: i32, range: RangeInclusive<i32>) -> Result<Self, PickerError> {
        Self::with_config(value, range, PickerConfig::default())
    }

    /// Creates a picker with `config`.
    pub fn with_config(
        value: i32,
        range: RangeInclusive<i32>,
        config: PickerConfig,
    ) -> Result<Self, PickerError> {
        let rows = RowMapping::new(config.row_height)?;
        let value = BoundedValue::new(value, range)?;
        let bounds = rows.offset_bounds(&value);
        let mut offset = Animatable::new(0.0);
        offset.update_bounds(bounds.lower, bounds.upper);
        Ok(Self {
            config,
            style: PickerStyle::default(),
            rows,
            label: Label::default(),
            shown: value.current(),
            value,
            offset,
            mode: InteractionMode::Idle,
            dialog: EditDialog::default(),
            router: PointerRouter::new(&config),
            policy: OpenEditorPolicy,
        })
    }

    /// Replaces the label function.
    #[must_use]
    pub fn with_label(mut self, label: Label) -> Self {
        self.label = label;
        self
    }

    /// Replaces the style.
    #[must_use]
    pub fn with_style(mut self, style: PickerStyle) -> Self {
        self.style = style;
        self
    }

    /// Supplies the owner's current value and range.
    ///
    /// Call this whenever the owner's state changes, in particular after
    /// handling [`PickerEvent::Committed`]. Legal offsets are recomputed.
    pub fn set_value(&mut self, value: i32, range: RangeInclusive<i32>) -> Result<(), RangeError> {
        let value = BoundedValue::new(value, range)?;
        if value == self.value {
            return Ok(());
        }
        self.value = value;
        let bounds = self.bounds();
        self.offset.update_bounds(bounds.lower, bounds.upper);
        self.shown = self.candidate_value();
        Ok(())
    }

    /// The owner-supplied committed value.
    #[must_use]
    pub fn value(&self) -> i32 {
        self.value.current()
    }

    /// The owner-supplied range.
    #[must_use]
    pub fn range(&self) -> &RangeInclusive<i32> {
        self.value.range()
    }

    /// Current interaction mode.
    #[must_use]
    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    /// Current animated offset in pixels.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset.value()
    }

    /// Legal offsets for the current value and range.
    #[must_use]
    pub fn bounds(&self) -> OffsetBounds {
        self.rows.offset_bounds(&self.value)
    }

    /// The value currently under the centre row.
    #[must_use]
    pub fn candidate_value(&self) -> i32 {
        self.rows
            .candidate_value(self.value.current(), self.offset.value())
    }

    /// The rows to draw this frame.
    #[must_use]
    pub fn preview(&self) -> Preview {
        Preview::compute(
            self.rows,
            &self.value,
            self.offset.value(),
            &self.label,
            self.style.text_color,
            self.config.minimum_alpha,
        )
    }

    /// The edit dialog state.
    #[must_use]
    pub fn dialog(&self) -> &EditDialog {
        &self.dialog
    }

    /// Behavioural configuration.
    #[must_use]
    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    /// Visual style.
    #[must_use]
    pub fn style(&self) -> &PickerStyle {
        &self.style
    }

    /// Label function.
    #[must_use]
    pub fn label(&self) -> &Label {
        &self.label
    }

    /// Moves the column by `delta` pixels.
    ///
    /// Starts a drag when idle and cancels a settle in flight. Ignored while
    /// the edit dialog is open.
    pub fn drag_by(&mut self, delta: f64) -> Option<PickerEvent> {
        match self.mode {
            InteractionMode::EditingViaDialog => return None,
            InteractionMode::Settling => {
                self.offset.stop();
                log::trace!("settle cancelled by a new drag at {}", self.offset.value());
            }
            InteractionMode::Idle => {
                log::trace!("drag started from {}", self.value.current());
            }
            InteractionMode::Dragging => {}
        }
        self.mode = InteractionMode::Dragging;
        self.offset.snap_to(self.offset.value() + delta);
        self.preview_changed()
    }

    /// Ends a drag with `velocity` pixels per second and starts settling.
    ///
    /// Commits immediately when the column already rests on its target.
    pub fn release(&mut self, velocity: f64) -> Option<PickerEvent> {
        if self.mode != InteractionMode::Dragging {
            return None;
        }
        let start = self.offset.value();
        let projected = self.config.decay().target(start, velocity);
        let target = self.bounds().clamp(self.rows.snap(projected));
        log::debug!("settling from {start} toward {target} (velocity {velocity})");

        if target == start && velocity == 0.0 {
            return Some(self.finish_settle());
        }
        self.mode = InteractionMode::Settling;
        self.offset
            .animate_to(target, self.config.settle_spring, velocity);
        None
    }

    /// Advances animations and gesture timeouts to frame time `now`.
    ///
    /// Long presses and single clicks open the editor from here: a click is
    /// only reported once the double-tap timeout has passed.
    pub fn tick(&mut self, now: Duration) -> Option<PickerEvent> {
        if let Some(RouterEvent::Gesture(gesture)) = self.router.poll(now) {
            return self.open_editor(gesture);
        }
        if self.mode != InteractionMode::Settling {
            return None;
        }
        match self.offset.tick(now) {
            Frame::Running => self.preview_changed(),
            Frame::Ended(end) => {
                log::trace!("settle ended: {end:?}");
                Some(self.finish_settle())
            }
            Frame::Idle => Some(self.finish_settle()),
        }
    }

    /// Returns `true` while the picker needs [`NumberPicker::tick`] calls.
    #[must_use]
    pub fn needs_frames(&self) -> bool {
        self.mode == InteractionMode::Settling
            || self.router.is_pressed()
            || self.router.has_pending_click()
    }

    /// Opens the edit dialog in response to `gesture`.
    ///
    /// Any drag or settle in progress is abandoned without committing.
    pub fn open_editor(&mut self, gesture: EditorGesture) -> Option<PickerEvent> {
        if self.mode == InteractionMode::EditingViaDialog || !self.policy.opens_editor(gesture) {
            return None;
        }
        if self.offset.stop() || self.offset.value() != 0.0 {
            log::trace!("gesture abandoned for the edit dialog");
        }
        self.offset.snap_to(0.0);
        self.shown = self.value.current();
        self.router.cancel();
        self.dialog.open(self.value.current());
        self.mode = InteractionMode::EditingViaDialog;
        log::debug!("showing edit dialog ({gesture:?})");
        Some(PickerEvent::EditorOpened(gesture))
    }

    /// Feeds new text from the dialog's field.
    pub fn edit_text(&mut self, text: &str) -> TextChange {
        self.dialog.on_text_change(text)
    }

    /// Confirms the dialog, committing its pending value whether or not it validated.
    pub fn confirm_editor(&mut self) -> Option<PickerEvent> {
        let invalid = self.dialog.is_invalid();
        let value = self.dialog.confirm()?;
        self.mode = InteractionMode::Idle;
        if invalid {
            log::debug!("edit dialog confirmed with out-of-band value {value}");
        } else {
            log::debug!("edit dialog confirmed with {value}");
        }
        Some(PickerEvent::Committed(value))
    }

    /// Closes the dialog without changing the value.
    pub fn dismiss_editor(&mut self) -> Option<PickerEvent> {
        if !self.dialog.dismiss() {
            return None;
        }
        self.mode = InteractionMode::Idle;
        log::debug!("edit dialog dismissed");
        Some(PickerEvent::EditorClosed)
    }

    /// Pointer pressed on the picker's hit area.
    pub fn pointer_down(&mut self, pos: Point, time: Duration) {
        if self.mode != InteractionMode::EditingViaDialog {
            self.router.down(pos, time);
        }
    }

    /// Pointer moved.
    pub fn pointer_move(&mut self, pos: Point, time: Duration) -> Option<PickerEvent> {
        if self.mode == InteractionMode::EditingViaDialog {
            return None;
        }
        match self.router.moved(pos, time)? {
            RouterEvent::Dragged(delta) => self.drag_by(delta),
            RouterEvent::DragEnded { velocity } => self.release(velocity),
            RouterEvent::Gesture(gesture) => self.open_editor(gesture),
        }
    }

    /// Pointer released.
    pub fn pointer_up(&mut self, pos: Point, time: Duration) -> Option<PickerEvent> {
        if self.mode == InteractionMode::EditingViaDialog {
            return None;
        }
        match self.router.up(pos, time)? {
            RouterEvent::Dragged(delta) => self.drag_by(delta),
            RouterEvent::DragEnded { velocity } => self.release(velocity),
            RouterEvent::Gesture(gesture) => self.open_editor(gesture),
        }
    }

    fn preview_changed(&mut self) -> Option<PickerEvent> {
        let candidate = self.candidate_value();
        if candidate == self.shown {
            return None;
        }
        self.shown = candidate;
        Some(PickerEvent::Previewed(candidate))
    }

    fn finish_settle(&mut self) -> PickerEvent {
        let end = self.offset.value();
        let committed = self.rows.settled_value(self.value.current(), end);
        self.offset.snap_to(0.0);
        self.shown = self.value.current();
        self.mode = InteractionMode::Idle;
        log::debug!("settled on {committed}");
        PickerEvent::Committed(committed)
    }
}
