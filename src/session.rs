use clap::ValueEnum;

use crate::catalog::{DrillDefinition, Sport};
use crate::progression::compute_target;
use crate::timer::{parse_rest_duration, DurationParseError, RestTimer};

pub const DEFAULT_RPE: u8 = 7;
pub const MIN_RPE: u8 = 1;
pub const MAX_RPE: u8 = 10;

/// Where the session takes place. Accepted from the input surface but not
/// consumed by any target or timer computation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum, strum_macros::Display)]
pub enum Setting {
    Indoor,
    Outdoor,
    Combination,
}

impl Setting {
    pub fn from_name(name: &str) -> Option<Setting> {
        match name.to_lowercase().as_str() {
            "indoor" => Some(Setting::Indoor),
            "outdoor" => Some(Setting::Outdoor),
            "combination" => Some(Setting::Combination),
            _ => None,
        }
    }
}

/// Pre-session self-assessment, each axis 1-5. Informational only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Readiness {
    pub sleep_quality: u8,
    pub soreness: u8,
    pub energy: u8,
}

impl Readiness {
    pub fn mean(&self) -> f64 {
        f64::from(u16::from(self.sleep_quality) + u16::from(self.soreness) + u16::from(self.energy))
            / 3.0
    }
}

impl Default for Readiness {
    fn default() -> Self {
        Self {
            sleep_quality: 3,
            soreness: 3,
            energy: 3,
        }
    }
}

/// Everything a single page view is keyed by. Built once from user input;
/// never persisted.
#[derive(Debug, Clone)]
pub struct SessionContext {
    pub sport: Sport,
    pub setting: Setting,
    pub week: u32,
    pub session: u32,
    pub readiness: Readiness,
}

/// Transient per-drill log state. Discarded whenever the view resets.
#[derive(Debug, Clone, PartialEq)]
pub struct DrillLogEntry {
    pub result_text: String,
    pub rpe: u8,
}

impl Default for DrillLogEntry {
    fn default() -> Self {
        Self {
            result_text: String::new(),
            rpe: DEFAULT_RPE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    EditingResult,
}

/// State for the current render cycle: the drill list plus an index-keyed
/// log entry and rest timer per drill. All of it belongs to exactly one
/// view and dies with it.
#[derive(Debug)]
pub struct SessionView {
    pub context: SessionContext,
    pub drills: Vec<DrillDefinition>,
    pub entries: Vec<DrillLogEntry>,
    pub timers: Vec<RestTimer>,
    pub selected: usize,
    pub input_mode: InputMode,
    /// One-shot status line content: "Go!" notifications, parse errors,
    /// the save acknowledgment.
    pub flash: Option<String>,
    pub saved: bool,
}

impl SessionView {
    pub fn new(context: SessionContext) -> Self {
        let drills = context.sport.drills();
        let entries = vec![DrillLogEntry::default(); drills.len()];
        let timers = vec![RestTimer::new(); drills.len()];

        Self {
            context,
            drills,
            entries,
            timers,
            selected: 0,
            input_mode: InputMode::Normal,
            flash: None,
            saved: false,
        }
    }

    pub fn selected_drill(&self) -> Option<&DrillDefinition> {
        self.drills.get(self.selected)
    }

    /// Computed target for the drill at `idx` in the view's week.
    pub fn target_for(&self, idx: usize) -> Option<f64> {
        self.drills
            .get(idx)
            .map(|d| compute_target(d.base_value, d.weekly_increment, self.context.week))
    }

    pub fn select_next(&mut self) {
        if !self.drills.is_empty() && self.selected + 1 < self.drills.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// Start (or restart) the selected drill's rest timer. On a malformed
    /// rest label the timer stays as it was and the error is returned for
    /// the status line.
    pub fn start_selected_timer(&mut self) -> Result<u32, DurationParseError> {
        let drill = match self.drills.get(self.selected) {
            Some(d) => d,
            None => return Ok(0),
        };

        let seconds = parse_rest_duration(&drill.rest_duration)?;
        self.timers[self.selected].start(seconds);
        self.flash = None;
        Ok(seconds)
    }

    pub fn selected_timer(&self) -> Option<&RestTimer> {
        self.timers.get(self.selected)
    }

    pub fn adjust_rpe(&mut self, delta: i16) {
        if let Some(entry) = self.entries.get_mut(self.selected) {
            let next = (i16::from(entry.rpe) + delta).clamp(i16::from(MIN_RPE), i16::from(MAX_RPE));
            entry.rpe = next as u8;
        }
    }

    pub fn push_result_char(&mut self, c: char) {
        if let Some(entry) = self.entries.get_mut(self.selected) {
            entry.result_text.push(c);
        }
    }

    pub fn pop_result_char(&mut self) {
        if let Some(entry) = self.entries.get_mut(self.selected) {
            entry.result_text.pop();
        }
    }

    /// Reset the whole view: log entries back to defaults, timers cancelled,
    /// flashes cleared. The only way to stop a running countdown early.
    pub fn reset(&mut self) {
        for entry in &mut self.entries {
            *entry = DrillLogEntry::default();
        }
        for timer in &mut self.timers {
            timer.cancel();
            *timer = RestTimer::new();
        }
        self.selected = 0;
        self.input_mode = InputMode::Normal;
        self.flash = None;
        self.saved = false;
    }
}
