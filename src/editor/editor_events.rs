use crate::input::InputKey;
use crate::surface::{Action, Host, KeystrokePort, Modifiers, StatusSink, SurfaceKey};

use super::Interpreter;
use super::commands::{
    Leader, NormalCommand, TextObject, VisualCommand, normal_command, visual_command,
};
use super::interpreter::perform_action;

pub fn handle_normal_mode_key<H: Host>(
    interp: &mut Interpreter<H::Selection>,
    host: &mut H,
    key: &InputKey,
) {
    let Some(ch) = key.as_char() else {
        interp.reset_pending(host);
        return;
    };

    if interp.pending.accepts_digit(ch) {
        interp.pending.push_digit(ch, interp.keys.count_limit);
        interp.announce(host);
        return;
    }

    let count = interp.pending.count(interp.keys.count_limit);

    if let Some(leader) = interp.pending.leader {
        interp.pending.arg = Some(ch);
        dispatch_two_key_command(interp, host, leader, ch, count);
        interp.reset_pending(host);
        interp.finish_command(host);
        return;
    }

    let Some(command) = normal_command(ch) else {
        log::debug!("No normal-mode command for {:?}", ch);
        interp.reset_pending(host);
        return;
    };

    if let NormalCommand::Leader(leader) = command {
        interp.pending.leader = Some(leader);
        interp.announce(host);
        return;
    }

    let has_count = interp.pending.has_count();
    execute_normal_command(interp, host, command, count, has_count);
    interp.reset_pending(host);
    interp.finish_command(host);
}

fn execute_normal_command<H: Host>(
    interp: &mut Interpreter<H::Selection>,
    host: &mut H,
    command: NormalCommand,
    count: usize,
    has_count: bool,
) {
    match command {
        NormalCommand::Move(key) => emit_times(host, key, Modifiers::NONE, count),
        NormalCommand::WordBackward => {
            emit_times(host, SurfaceKey::Left, Modifiers::CONTROL, count)
        }
        NormalCommand::WordForward => {
            emit_times(host, SurfaceKey::Right, Modifiers::CONTROL, count)
        }
        NormalCommand::ParagraphBackward => {
            emit_times(host, SurfaceKey::Up, Modifiers::CONTROL, count)
        }
        NormalCommand::ParagraphForward => {
            for _ in 0..count {
                go_to_paragraph_end(host, false);
            }
        }
        NormalCommand::DocumentEnd => {
            if has_count {
                go_to_line(host, count);
            } else {
                host.emit(SurfaceKey::End, Modifiers::CONTROL);
            }
        }
        NormalCommand::Paste => {
            for _ in 0..count {
                perform_action(host, Action::Paste);
            }
        }
        NormalCommand::Append => {
            host.emit(SurfaceKey::Right, Modifiers::NONE);
            interp.to_insert(host);
        }
        NormalCommand::Insert => interp.to_insert(host),
        NormalCommand::LineStart => host.emit(SurfaceKey::Home, Modifiers::NONE),
        NormalCommand::LineEnd => host.emit(SurfaceKey::End, Modifiers::NONE),
        NormalCommand::InsertAtLineStart => {
            host.emit(SurfaceKey::Home, Modifiers::NONE);
            interp.to_insert(host);
        }
        NormalCommand::AppendAtLineEnd => {
            host.emit(SurfaceKey::End, Modifiers::NONE);
            interp.to_insert(host);
        }
        NormalCommand::Visual => interp.to_visual(host),
        NormalCommand::VisualLine => interp.to_visual_line(host),
        NormalCommand::OpenBelow => {
            for _ in 0..count {
                host.emit(SurfaceKey::End, Modifiers::NONE);
                host.emit(SurfaceKey::Enter, Modifiers::SHIFT);
            }
            interp.to_insert(host);
        }
        NormalCommand::OpenAbove => {
            for _ in 0..count {
                host.emit(SurfaceKey::Home, Modifiers::NONE);
                host.emit(SurfaceKey::Enter, Modifiers::SHIFT);
                host.emit(SurfaceKey::Up, Modifiers::NONE);
            }
            interp.to_insert(host);
        }
        NormalCommand::Undo => {
            for _ in 0..count {
                perform_action(host, Action::Undo);
            }
        }
        NormalCommand::Redo => {
            for _ in 0..count {
                perform_action(host, Action::Redo);
            }
        }
        NormalCommand::JoinLines => {
            // always inserts the space, even if the next line starts with one
            for _ in 0..count {
                host.emit(SurfaceKey::End, Modifiers::NONE);
                host.emit(SurfaceKey::Delete, Modifiers::NONE);
                host.emit(SurfaceKey::Space, Modifiers::NONE);
            }
        }
        NormalCommand::DeleteChar => {
            emit_times(host, SurfaceKey::Delete, Modifiers::NONE, count)
        }
        NormalCommand::DeleteCharBefore => {
            emit_times(host, SurfaceKey::Backspace, Modifiers::NONE, count)
        }
        NormalCommand::DeleteToLineEnd => {
            host.emit(SurfaceKey::End, Modifiers::SHIFT);
            perform_action(host, Action::Cut);
        }
        NormalCommand::ChangeToLineEnd => {
            host.emit(SurfaceKey::End, Modifiers::SHIFT);
            perform_action(host, Action::Cut);
            interp.to_insert(host);
        }
        NormalCommand::SearchNext => host.emit(SurfaceKey::Enter, Modifiers::NONE),
        NormalCommand::SearchPrevious => host.emit(SurfaceKey::Enter, Modifiers::SHIFT),
        NormalCommand::Search => {
            host.emit(SurfaceKey::Letter('f'), Modifiers::CONTROL);
            interp.to_search(host);
        }
        // leaders never reach execution; they only set pending state
        NormalCommand::Leader(_) => {}
    }
}

fn dispatch_two_key_command<H: Host>(
    interp: &mut Interpreter<H::Selection>,
    host: &mut H,
    leader: Leader,
    arg: char,
    count: usize,
) {
    match leader {
        Leader::SetMark => {
            let Some(selection) = host.selection() else {
                log::debug!("No selection to mark");
                return;
            };
            if !interp.marks.set(arg, selection) {
                log::debug!("Invalid mark label {:?}", arg);
            }
        }
        Leader::JumpToMarkLine => jump_to_mark(interp, host, arg, true),
        Leader::JumpToMark => jump_to_mark(interp, host, arg, false),
        Leader::Go => {
            if arg == 'g' {
                go_to_line(host, count);
            }
        }
        Leader::Operator(operator) => {
            if arg == operator.as_char() {
                select_lines(host, count);
                interp.run_long_string_op(host, operator);
            } else {
                interp.operator = Some(operator);
                interp.to_wait_for_operator_motion1(host);
                handle_first_motion_key(interp, host, &InputKey::Char(arg));
            }
        }
    }
}

fn jump_to_mark<H: Host>(
    interp: &Interpreter<H::Selection>,
    host: &mut H,
    label: char,
    linewise: bool,
) {
    let Some(snapshot) = interp.marks.get(label).cloned() else {
        log::debug!("Mark {:?} is not set", label);
        return;
    };
    host.restore_selection(snapshot);
    if linewise {
        host.emit(SurfaceKey::Home, Modifiers::NONE);
    }
}

pub fn handle_first_motion_key<H: Host>(
    interp: &mut Interpreter<H::Selection>,
    host: &mut H,
    key: &InputKey,
) {
    let Some(operator) = interp.operator else {
        interp.to_normal(host);
        return;
    };

    match key.as_char() {
        Some('i' | 'a') => {
            interp.to_wait_for_operator_motion2(host);
            return;
        }
        Some(ch) if ch == operator.as_char() => {
            select_lines(host, 1);
            interp.run_long_string_op(host, operator);
        }
        Some(ch) => match TextObject::from_char(ch) {
            Some(object) => {
                select_to_object_end(host, object);
                interp.run_long_string_op(host, operator);
            }
            None => abort_operator(interp, host),
        },
        None => abort_operator(interp, host),
    }

    interp.finish_command(host);
}

pub fn handle_second_motion_key<H: Host>(
    interp: &mut Interpreter<H::Selection>,
    host: &mut H,
    key: &InputKey,
) {
    match key.as_char().and_then(TextObject::from_char) {
        Some(object) => {
            move_to_object_start(host, object);
            handle_first_motion_key(interp, host, key);
        }
        None => {
            abort_operator(interp, host);
            interp.finish_command(host);
        }
    }
}

fn abort_operator<S: Clone, H: KeystrokePort + StatusSink>(
    interp: &mut Interpreter<S>,
    host: &mut H,
) {
    log::debug!("Operator {:?} aborted", interp.operator);
    interp.operator = None;
    interp.to_normal(host);
}

pub fn handle_visual_mode_key<H: Host>(
    interp: &mut Interpreter<H::Selection>,
    host: &mut H,
    key: &InputKey,
) {
    let Some(command) = key.as_char().and_then(visual_command) else {
        return;
    };

    match command {
        VisualCommand::Extend(key) => host.emit(key, Modifiers::SHIFT),
        VisualCommand::WordBackward => host.emit(SurfaceKey::Left, Modifiers::CONTROL_SHIFT),
        VisualCommand::WordForward => host.emit(SurfaceKey::Right, Modifiers::CONTROL_SHIFT),
        VisualCommand::ParagraphBackward => host.emit(SurfaceKey::Up, Modifiers::CONTROL_SHIFT),
        VisualCommand::ParagraphForward => go_to_paragraph_end(host, true),
        VisualCommand::DocumentEnd => host.emit(SurfaceKey::End, Modifiers::CONTROL_SHIFT),
        VisualCommand::DocumentStart => host.emit(SurfaceKey::Home, Modifiers::CONTROL_SHIFT),
        VisualCommand::Operate(operator) => interp.run_long_string_op(host, operator),
        VisualCommand::TextObject => interp.to_wait_for_visual_text_object(host),
    }
}

pub fn handle_visual_text_object_key<H: Host>(
    interp: &mut Interpreter<H::Selection>,
    host: &mut H,
    key: &InputKey,
) {
    match key.as_char().and_then(TextObject::from_char) {
        Some(TextObject::Word) => {
            host.emit(SurfaceKey::Left, Modifiers::CONTROL);
            move_to_object_start(host, TextObject::Word);
            select_to_object_end(host, TextObject::Word);
        }
        Some(TextObject::Paragraph) => {
            move_to_object_start(host, TextObject::Paragraph);
            go_to_paragraph_end(host, true);
        }
        None => {}
    }

    interp.to_visual_line_keeping_selection(host);
}

fn emit_times<H: KeystrokePort>(host: &mut H, key: SurfaceKey, mods: Modifiers, count: usize) {
    for _ in 0..count {
        host.emit(key, mods);
    }
}

/// Document start, then down `line - 1` lines
fn go_to_line<H: KeystrokePort>(host: &mut H, line: usize) {
    host.emit(SurfaceKey::Home, Modifiers::CONTROL);
    emit_times(host, SurfaceKey::Down, Modifiers::NONE, line.saturating_sub(1));
}

fn go_to_paragraph_end<H: KeystrokePort>(host: &mut H, extend: bool) {
    let shift = Modifiers::NONE.with_shift(extend);
    host.emit(SurfaceKey::Down, Modifiers::CONTROL.with_shift(extend));
    host.emit(SurfaceKey::Right, shift);
}

/// Select `lines` whole lines starting at the current one
fn select_lines<H: KeystrokePort>(host: &mut H, lines: usize) {
    host.emit(SurfaceKey::Home, Modifiers::NONE);
    emit_times(host, SurfaceKey::Down, Modifiers::SHIFT, lines.saturating_sub(1));
    host.emit(SurfaceKey::End, Modifiers::SHIFT);
}

fn move_to_object_start<H: KeystrokePort>(host: &mut H, object: TextObject) {
    match object {
        TextObject::Word => host.emit(SurfaceKey::Left, Modifiers::CONTROL),
        TextObject::Paragraph => host.emit(SurfaceKey::Up, Modifiers::CONTROL),
    }
}

fn select_to_object_end<H: KeystrokePort>(host: &mut H, object: TextObject) {
    match object {
        TextObject::Word => host.emit(SurfaceKey::Right, Modifiers::CONTROL_SHIFT),
        TextObject::Paragraph => host.emit(SurfaceKey::Down, Modifiers::CONTROL_SHIFT),
    }
}

#[cfg(test)]
#[path = "editor_events_tests.rs"]
mod editor_events_tests;
