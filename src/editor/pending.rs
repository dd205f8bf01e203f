use super::commands::Leader;

/// Count, leader and argument gathered across Normal-mode key events
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingCommand {
    count: String,
    pub leader: Option<Leader>,
    pub arg: Option<char>,
}

impl PendingCommand {
    /// A leading `0` is the line-start motion, not a count digit
    pub fn accepts_digit(&self, ch: char) -> bool {
        ch.is_ascii_digit() && !(self.count.is_empty() && ch == '0')
    }

    /// Digits past the width of `limit` are dropped; the count is clamped anyway
    pub fn push_digit(&mut self, ch: char, limit: usize) {
        debug_assert!(self.accepts_digit(ch));
        if self.count.len() < max_count_digits(limit) {
            self.count.push(ch);
        }
    }

    pub fn has_count(&self) -> bool {
        !self.count.is_empty()
    }

    /// Repeat count, 1 when none was typed, clamped to `limit`
    pub fn count(&self, limit: usize) -> usize {
        if self.count.is_empty() {
            return 1;
        }
        self.count
            .parse::<usize>()
            .unwrap_or(usize::MAX)
            .min(limit)
            .max(1)
    }

    pub fn is_empty(&self) -> bool {
        self.count.is_empty() && self.leader.is_none() && self.arg.is_none()
    }

    pub fn clear(&mut self) {
        self.count.clear();
        self.leader = None;
        self.arg = None;
    }

    /// `<count><leader>` while a leader waits, `NORMAL <count>` while only
    /// digits were typed
    pub fn indicator_text(&self) -> Option<String> {
        match self.leader {
            Some(leader) => Some(format!("{}{}", self.count, leader.as_char())),
            None if self.has_count() => Some(format!("NORMAL {}", self.count)),
            None => None,
        }
    }
}

fn max_count_digits(limit: usize) -> usize {
    limit.max(1).ilog10() as usize + 1
}

#[cfg(test)]
#[path = "pending_tests.rs"]
mod pending_tests;
