use std::fmt;

use serde::Serialize;

use super::mode::Mode;
use super::pending::PendingCommand;
use crate::config::{IndicatorConfig, IndicatorStyle};

/// What the external indicator should show
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Status {
    pub mode: Mode,
    pub text: String,
    /// The surface's own caret is hidden while inserting
    pub caret_visible: bool,
    pub style: IndicatorStyle,
}

impl Status {
    pub fn new(mode: Mode, pending: &PendingCommand, indicator: &IndicatorConfig) -> Self {
        let text = pending
            .indicator_text()
            .unwrap_or_else(|| mode.display().to_string());

        Status {
            mode,
            text,
            caret_visible: mode != Mode::Insert,
            style: style_for(mode, indicator).clone(),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "-- {} --", self.text)
    }
}

fn style_for(mode: Mode, indicator: &IndicatorConfig) -> &IndicatorStyle {
    match mode {
        Mode::Normal => &indicator.normal,
        Mode::Insert => &indicator.insert,
        Mode::Visual | Mode::VisualLine => &indicator.visual,
        Mode::Search => &indicator.search,
        Mode::WaitForOperatorMotion1
        | Mode::WaitForOperatorMotion2
        | Mode::WaitForVisualTextObject => &indicator.pending,
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod status_tests;
