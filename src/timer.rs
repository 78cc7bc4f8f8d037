use std::error::Error;
use std::fmt;

/// Raised when a rest-duration label carries no digits to count down from.
/// The timer start fails and the message is surfaced in the status line;
/// there is no fallback duration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DurationParseError {
    input: String,
}

impl fmt::Display for DurationParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rest duration {:?} contains no digits", self.input)
    }
}

impl Error for DurationParseError {}

/// Parse a human-readable rest label into whole seconds.
///
/// The first contiguous run of ASCII digits is the value; an 'm' anywhere in
/// the string makes it minutes, otherwise it is seconds. "90s" -> 90,
/// "2m" -> 120, "rest 3 min" -> 180.
pub fn parse_rest_duration(s: &str) -> Result<u32, DurationParseError> {
    let digits: String = s
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();

    if digits.is_empty() {
        return Err(DurationParseError {
            input: s.to_string(),
        });
    }

    let value = digits.parse::<u32>().unwrap_or(u32::MAX);

    if s.contains(['m', 'M']) {
        Ok(value.saturating_mul(60))
    } else {
        Ok(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerStatus {
    Idle,
    Running,
    Finished,
}

/// Per-drill countdown state machine.
///
/// Transitions: Idle -> Running on start, Running -> Finished when the
/// countdown reaches zero, Running -> Idle on cancel (whole-view reset).
/// Starting again from any status begins a fresh countdown; Finished is
/// terminal only for the current run.
///
/// The driving loop in the binary sleeps one wall-clock second per tick and
/// redraws in between. That keeps the view deliberately unresponsive for the
/// full rest duration; cumulative drift of up to a tick per countdown is
/// accepted and not corrected.
#[derive(Debug, Clone)]
pub struct RestTimer {
    status: TimerStatus,
    remaining: u32,
}

impl RestTimer {
    pub fn new() -> Self {
        Self {
            status: TimerStatus::Idle,
            remaining: 0,
        }
    }

    pub fn status(&self) -> TimerStatus {
        self.status
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.status == TimerStatus::Running
    }

    pub fn start(&mut self, seconds: u32) {
        self.status = TimerStatus::Running;
        self.remaining = seconds;
    }

    /// Advance one second. Returns true exactly once, on the tick that
    /// completes the countdown; the caller emits the "Go!" signal then.
    /// Ticks while Idle or Finished are no-ops.
    pub fn tick(&mut self) -> bool {
        if self.status != TimerStatus::Running {
            return false;
        }

        if self.remaining > 0 {
            self.remaining -= 1;
        }

        if self.remaining == 0 {
            self.status = TimerStatus::Finished;
            return true;
        }

        false
    }

    pub fn cancel(&mut self) {
        if self.status == TimerStatus::Running {
            self.status = TimerStatus::Idle;
            self.remaining = 0;
        }
    }

    /// Two-digit zero-padded MM:SS of the remaining time.
    pub fn display(&self) -> String {
        format!("{:02}:{:02}", self.remaining / 60, self.remaining % 60)
    }
}

impl Default for RestTimer {
    fn default() -> Self {
        Self::new()
    }
}
