//! Append-only combat log records.
//!
//! One [`LogEntry`] is produced per resolved turn, exclusively by the
//! resolver, and never mutated after creation. The runtime persists entries
//! keyed by `(session, turn)`.

/// Who a log line is attributed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase")]
pub enum Actor {
    Player,
    Monster,
    /// Outcome lines (victory, defeat, flee) not tied to either side.
    System,
}

/// One narration line with its structured context.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogLine {
    /// Order within the turn, starting at 0.
    pub sequence: u32,
    pub actor: Actor,
    /// Name of the skill or event that produced this line.
    pub action: String,
    pub target: String,
    pub hit: bool,
    pub text: String,
    pub damage: Option<u32>,
}

/// The full log record for one resolved turn.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogEntry {
    /// The turn this entry narrates (the pre-increment turn number).
    pub turn: u32,
    pub lines: Vec<LogLine>,
    /// All line texts joined blank-line separated, ready for display.
    pub narration: String,
}

impl LogEntry {
    pub fn new(turn: u32, lines: Vec<LogLine>) -> Self {
        let narration = lines
            .iter()
            .map(|line| line.text.as_str())
            .collect::<Vec<_>>()
            .join("\n\n");
        Self {
            turn,
            lines,
            narration,
        }
    }
}

/// Accumulates log lines during one resolution step.
#[derive(Debug, Default)]
pub struct LineBuffer {
    lines: Vec<LogLine>,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line, assigning the next sequence number.
    pub fn push(
        &mut self,
        actor: Actor,
        action: impl Into<String>,
        target: impl Into<String>,
        hit: bool,
        text: String,
        damage: Option<u32>,
    ) {
        let sequence = self.lines.len() as u32;
        self.lines.push(LogLine {
            sequence,
            actor,
            action: action.into(),
            target: target.into(),
            hit,
            text,
            damage,
        });
    }

    pub fn into_entry(self, turn: u32) -> LogEntry {
        LogEntry::new(turn, self.lines)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LogLine> {
        self.lines.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narration_joins_blank_line_separated() {
        let mut buffer = LineBuffer::new();
        buffer.push(Actor::Player, "Slash", "Boar", true, "You slash!".into(), Some(12));
        buffer.push(Actor::System, "victory", "", true, "The boar falls.".into(), None);

        let entry = buffer.into_entry(3);
        assert_eq!(entry.turn, 3);
        assert_eq!(entry.narration, "You slash!\n\nThe boar falls.");
        assert_eq!(entry.lines[0].sequence, 0);
        assert_eq!(entry.lines[1].sequence, 1);
    }
}
