//! Clock engine: maps pointer positions on the face to hours and minutes.
//!
//! A drag only updates a draft value. The draft goes through the selection
//! protocol when the pointer is released: releasing on the hour ring moves
//! on to minutes, releasing on the minute ring finishes the pick.

pub mod geometry;

use chrono::{NaiveDateTime, Timelike};
use egui::Pos2;

use crate::error::PickerError;
use crate::models::clock::{default_time, to_24_hour, ClockCursor, ClockMode, DisplayTime, Period};
use crate::models::selection::CommitMode;
use crate::services::selection::{PickerListener, SelectionProtocol};

use self::geometry::{position_angle, radius_for_width, DEFAULT_FACE_WIDTH};

/// Phase of a pointer or touch gesture on the face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
}

/// One pointer or touch event in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub phase: PointerPhase,
    pub pos: Pos2,
}

impl PointerSample {
    pub fn new(phase: PointerPhase, pos: Pos2) -> Self {
        Self { phase, pos }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClockConfig {
    pub value: Option<NaiveDateTime>,
    /// Only minutes divisible by this are selectable; `None` allows all
    pub minute_interval: Option<u32>,
    pub commit_mode: CommitMode,
}

impl ClockConfig {
    pub fn new(value: Option<NaiveDateTime>) -> Self {
        Self {
            value,
            ..Default::default()
        }
    }

    pub fn with_minute_interval(mut self, interval: Option<u32>) -> Self {
        self.minute_interval = interval;
        self
    }

    pub fn with_commit_mode(mut self, mode: CommitMode) -> Self {
        self.commit_mode = mode;
        self
    }

    pub fn validate(&self) -> Result<(), PickerError> {
        match self.minute_interval {
            Some(interval) if interval == 0 || interval > 60 => {
                Err(PickerError::InvalidMinuteInterval(interval))
            }
            _ => Ok(()),
        }
    }
}

/// Hour labels in face order, 12 at the top.
pub fn hour_options() -> Vec<u32> {
    std::iter::once(12).chain(1..12).collect()
}

/// Selectable minutes, every minute when `interval` is unset.
pub fn minute_options(interval: Option<u32>) -> Vec<u32> {
    match interval.filter(|interval| *interval > 0) {
        Some(interval) => (0..60).filter(|minute| minute % interval == 0).collect(),
        None => (0..60).collect(),
    }
}

#[derive(Debug, Clone)]
pub struct ClockEngine {
    config: ClockConfig,
    cursor: ClockCursor,
    selection: SelectionProtocol,
    /// Live value while a drag is in progress
    draft: Option<NaiveDateTime>,
    face_width: f32,
}

impl ClockEngine {
    pub fn new(config: ClockConfig) -> Self {
        let selection = SelectionProtocol::new(config.commit_mode);
        Self {
            config,
            cursor: ClockCursor::default(),
            selection,
            draft: None,
            face_width: DEFAULT_FACE_WIDTH,
        }
    }

    pub fn config(&self) -> &ClockConfig {
        &self.config
    }

    pub fn cursor(&self) -> ClockCursor {
        self.cursor
    }

    pub fn mode(&self) -> ClockMode {
        self.cursor.mode
    }

    pub fn is_dragging(&self) -> bool {
        self.cursor.is_dragging
    }

    pub fn commit_mode(&self) -> CommitMode {
        self.selection.mode()
    }

    pub fn pending(&self) -> Option<NaiveDateTime> {
        self.selection.pending()
    }

    pub fn draft(&self) -> Option<NaiveDateTime> {
        self.draft
    }

    pub fn sync_value(&mut self, value: Option<NaiveDateTime>) {
        self.config.value = value;
    }

    /// Value picks are applied to: staged value in deferred mode, else the
    /// external value, else the epoch default.
    fn committed_value(&self) -> NaiveDateTime {
        self.selection
            .pending()
            .or(self.config.value)
            .unwrap_or_else(default_time)
    }

    /// Value the face and readout show right now.
    pub fn working_value(&self) -> NaiveDateTime {
        self.draft.unwrap_or_else(|| self.committed_value())
    }

    pub fn display(&self) -> DisplayTime {
        DisplayTime::from_value(self.working_value())
    }

    pub fn set_mode(&mut self, mode: ClockMode) {
        self.cursor.mode = mode;
    }

    // ---- geometry ----------------------------------------------------------

    /// Record a new measurement of the rendered face.
    pub fn set_face_width(&mut self, width: f32) {
        if width > 0.0 {
            self.face_width = width;
        }
    }

    pub fn face_width(&self) -> f32 {
        self.face_width
    }

    pub fn radius(&self) -> f32 {
        radius_for_width(self.face_width)
    }

    pub fn options(&self) -> Vec<u32> {
        match self.cursor.mode {
            ClockMode::Hour => hour_options(),
            ClockMode::Minute => minute_options(self.config.minute_interval),
        }
    }

    fn ring(&self) -> u32 {
        match self.cursor.mode {
            ClockMode::Hour => 12,
            ClockMode::Minute => 60,
        }
    }

    /// Option under `point` for the active ring.
    pub fn angle_to_value(&self, point: Pos2, center: Pos2) -> Option<u32> {
        geometry::angle_to_value(point, center, &self.options(), self.ring())
    }

    /// Hand angle for the working value, clockwise from 12.
    pub fn hand_angle(&self) -> f32 {
        let display = self.display();
        match self.cursor.mode {
            ClockMode::Hour => position_angle((display.hour12 % 12) as f32, 12),
            ClockMode::Minute => position_angle(display.minute as f32, 60),
        }
    }

    /// Whether `option` of the active ring is the one currently picked.
    pub fn is_selected_option(&self, option: u32) -> bool {
        let display = self.display();
        match self.cursor.mode {
            ClockMode::Hour => display.hour12 == option,
            ClockMode::Minute => display.minute == option,
        }
    }

    fn apply_option(&self, base: NaiveDateTime, option: u32) -> NaiveDateTime {
        let updated = match self.cursor.mode {
            ClockMode::Hour => base.with_hour(to_24_hour(option, Period::of_hour(base.hour()))),
            ClockMode::Minute => base.with_minute(option),
        };
        updated.unwrap_or(base)
    }

    // ---- gestures ----------------------------------------------------------

    /// Feed one pointer or touch event. Events of a gesture must arrive in
    /// down, move*, up order.
    pub fn handle_pointer(
        &mut self,
        sample: PointerSample,
        center: Pos2,
        listener: &mut dyn PickerListener,
    ) {
        match sample.phase {
            PointerPhase::Down => {
                self.cursor.is_dragging = true;
                self.update_draft(sample.pos, center);
            }
            PointerPhase::Move => {
                if self.cursor.is_dragging {
                    self.update_draft(sample.pos, center);
                }
            }
            PointerPhase::Up => {
                if self.cursor.is_dragging {
                    self.finish_drag(listener);
                }
            }
        }
    }

    fn update_draft(&mut self, point: Pos2, center: Pos2) {
        if let Some(option) = self.angle_to_value(point, center) {
            let base = self.working_value();
            self.draft = Some(self.apply_option(base, option));
        }
    }

    fn finish_drag(&mut self, listener: &mut dyn PickerListener) {
        self.cursor.is_dragging = false;
        let Some(value) = self.draft.take() else {
            return;
        };
        self.selection.stage(value, listener);

        match self.cursor.mode {
            ClockMode::Hour => {
                log::debug!("Clock hour picked: {}", value.hour());
                self.cursor.mode = ClockMode::Minute;
            }
            ClockMode::Minute => {
                log::debug!("Clock minute picked: {}", value.minute());
                if !self.selection.is_deferred() {
                    listener.on_close();
                }
            }
        }
    }

    /// Switch AM/PM. Only shifts the hour when the period actually changes.
    pub fn set_period(&mut self, period: Period, listener: &mut dyn PickerListener) {
        let value = self.committed_value();
        let hour = value.hour();
        let shifted = match (Period::of_hour(hour), period) {
            (Period::Pm, Period::Am) => hour - 12,
            (Period::Am, Period::Pm) => hour + 12,
            _ => return,
        };
        if let Some(updated) = value.with_hour(shifted) {
            self.selection.stage(updated, listener);
        }
    }

    pub fn confirm(&mut self, listener: &mut dyn PickerListener) {
        self.selection.confirm(listener);
    }

    pub fn cancel(&mut self, listener: &mut dyn PickerListener) {
        self.draft = None;
        self.cursor.is_dragging = false;
        self.selection.cancel(listener);
    }
}
