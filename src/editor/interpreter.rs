use crate::config::{Config, IndicatorConfig, KeysConfig};
use crate::input::{Disposition, InputKey, RawKeyEvent};
use crate::surface::{Action, ActionPort, Host, KeystrokePort, Modifiers, StatusSink, SurfaceKey};

use super::commands::Operator;
use super::editor_events;
use super::marks::MarkRegistry;
use super::mode::Mode;
use super::pending::PendingCommand;
use super::status::Status;

/// The modal command interpreter.
///
/// Owns the mode, the pending command and the marks. `S` is the host's
/// selection snapshot type. All side effects go through the `Host` passed to
/// [`Interpreter::handle_key_event`].
#[derive(Debug, Clone)]
pub struct Interpreter<S> {
    pub(crate) mode: Mode,
    pub(crate) pending: PendingCommand,
    pub(crate) marks: MarkRegistry<S>,
    /// Operator remembered while waiting for its motion
    pub(crate) operator: Option<Operator>,
    /// Entered Normal through the Insert-mode toggle; go back after one command
    pub(crate) temporary_normal: bool,
    pub(crate) indicator: IndicatorConfig,
    pub(crate) keys: KeysConfig,
}

impl<S: Clone> Interpreter<S> {
    pub fn new(config: &Config) -> Self {
        Interpreter {
            mode: Mode::Normal,
            pending: PendingCommand::default(),
            marks: MarkRegistry::new(),
            operator: None,
            temporary_normal: false,
            indicator: config.indicator.clone(),
            keys: config.keys.clone(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn pending(&self) -> &PendingCommand {
        &self.pending
    }

    pub fn marks(&self) -> &MarkRegistry<S> {
        &self.marks
    }

    pub fn is_temporary_normal(&self) -> bool {
        self.temporary_normal
    }

    pub fn status(&self) -> Status {
        Status::new(self.mode, &self.pending, &self.indicator)
    }

    /// Announce the initial state once the host is attached
    pub fn start<H: StatusSink>(&mut self, host: &mut H) {
        self.announce(host);
    }

    pub fn handle_key_event<H: Host<Selection = S>>(
        &mut self,
        host: &mut H,
        event: &RawKeyEvent,
    ) -> Disposition {
        let key = event.input_key();

        if self.mode == Mode::Insert
            && event.ctrl
            && !event.alt
            && !event.meta
            && key == InputKey::Char(self.keys.temporary_normal)
        {
            log::debug!("Entering temporary normal mode");
            self.to_normal(host);
            self.temporary_normal = true;
            return Disposition::Suppress;
        }

        // The find box owns the keyboard until it is closed
        if self.mode == Mode::Search {
            return match key {
                InputKey::Escape | InputKey::Enter => {
                    self.to_normal(host);
                    Disposition::Suppress
                }
                _ => Disposition::PassThrough,
            };
        }

        if event.has_host_modifier() || key == InputKey::Modifier {
            return Disposition::PassThrough;
        }

        if key == InputKey::Escape {
            if self.mode.is_visual() {
                host.emit(SurfaceKey::Right, Modifiers::NONE);
            }
            self.operator = None;
            self.temporary_normal = false;
            self.to_normal(host);
            self.reset_pending(host);
            return Disposition::Suppress;
        }

        match self.mode {
            Mode::Insert | Mode::Search => return Disposition::PassThrough,
            Mode::Normal => editor_events::handle_normal_mode_key(self, host, &key),
            Mode::Visual | Mode::VisualLine => {
                editor_events::handle_visual_mode_key(self, host, &key)
            }
            Mode::WaitForOperatorMotion1 => {
                editor_events::handle_first_motion_key(self, host, &key)
            }
            Mode::WaitForOperatorMotion2 => {
                editor_events::handle_second_motion_key(self, host, &key)
            }
            Mode::WaitForVisualTextObject => {
                editor_events::handle_visual_text_object_key(self, host, &key)
            }
        }

        Disposition::Suppress
    }

    pub fn to_insert<H: StatusSink>(&mut self, host: &mut H) {
        self.enter(Mode::Insert, host);
    }

    pub fn to_normal<H: KeystrokePort + StatusSink>(&mut self, host: &mut H) {
        // Entering VisualLine selects one line past the target; step back
        if self.mode == Mode::VisualLine {
            host.emit(SurfaceKey::Left, Modifiers::NONE);
        }
        self.enter(Mode::Normal, host);
    }

    pub fn to_visual<H: KeystrokePort + StatusSink>(&mut self, host: &mut H) {
        self.enter(Mode::Visual, host);
        // a collapsed selection is not visible on the surface
        host.emit(SurfaceKey::Right, Modifiers::SHIFT);
    }

    pub fn to_visual_line<H: KeystrokePort + StatusSink>(&mut self, host: &mut H) {
        self.enter(Mode::VisualLine, host);
        host.emit(SurfaceKey::Home, Modifiers::NONE);
        host.emit(SurfaceKey::Down, Modifiers::SHIFT);
    }

    /// VisualLine over a selection that is already in place
    pub fn to_visual_line_keeping_selection<H: StatusSink>(&mut self, host: &mut H) {
        self.enter(Mode::VisualLine, host);
    }

    pub fn to_search<H: StatusSink>(&mut self, host: &mut H) {
        self.enter(Mode::Search, host);
    }

    pub fn to_wait_for_operator_motion1<H: StatusSink>(&mut self, host: &mut H) {
        self.enter(Mode::WaitForOperatorMotion1, host);
    }

    pub fn to_wait_for_operator_motion2<H: StatusSink>(&mut self, host: &mut H) {
        self.enter(Mode::WaitForOperatorMotion2, host);
    }

    pub fn to_wait_for_visual_text_object<H: StatusSink>(&mut self, host: &mut H) {
        self.enter(Mode::WaitForVisualTextObject, host);
    }

    fn enter<H: StatusSink>(&mut self, mode: Mode, host: &mut H) {
        if self.mode != mode {
            log::debug!("Mode {:?} -> {:?}", self.mode, mode);
        }
        self.mode = mode;
        self.announce(host);
    }

    pub(crate) fn announce<H: StatusSink>(&self, host: &mut H) {
        host.announce(&self.status());
    }

    pub(crate) fn reset_pending<H: StatusSink>(&mut self, host: &mut H) {
        self.pending.clear();
        self.announce(host);
    }

    /// Turn the selection already on the surface into a cut, copy or paste
    pub(crate) fn run_long_string_op<H>(&mut self, host: &mut H, operator: Operator)
    where
        H: KeystrokePort + ActionPort + StatusSink,
    {
        log::debug!("Long-string op {:?}", operator);
        self.operator = None;

        match operator {
            Operator::Change => {
                perform_action(host, Action::Cut);
                self.to_insert(host);
            }
            Operator::Delete => {
                perform_action(host, Action::Cut);
                // the cut leaves the line break behind
                host.emit(SurfaceKey::Backspace, Modifiers::NONE);
                // selection is gone, so no VisualLine correction
                self.enter(Mode::Normal, host);
            }
            Operator::Yank => {
                perform_action(host, Action::Copy);
                self.to_normal(host);
            }
            Operator::Put => {
                perform_action(host, Action::Paste);
                self.to_normal(host);
            }
        }
    }

    /// Resolve the temporary-normal continuation after a completed command.
    /// A search keeps it alive for the next Normal command.
    pub(crate) fn finish_command<H: StatusSink>(&mut self, host: &mut H) {
        if !self.temporary_normal || self.mode.is_waiting() || self.mode == Mode::Search {
            return;
        }
        self.temporary_normal = false;
        if self.mode == Mode::Normal {
            self.to_insert(host);
        }
    }
}

/// Action failures are the host's to report; the command carries on
pub(crate) fn perform_action<H: ActionPort>(host: &mut H, action: Action) {
    if let Err(e) = host.perform(action) {
        log::warn!("{}", e);
    }
}

#[cfg(test)]
#[path = "interpreter_tests.rs"]
mod interpreter_tests;
