//! The paper tape: an immutable log of completed computations.

use super::machine::Computation;
use super::operation::OperationTag;
use super::state::format_number;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default number of entries a tape keeps.
pub const DEFAULT_TAPE_CAPACITY: usize = 100;

/// One printed line of the tape.
///
/// # Example
///
/// ```rust
/// use keycalc::core::{OperationTag, TapeEntry};
/// use chrono::Utc;
///
/// let entry = TapeEntry {
///     lhs: 3.0,
///     operation: OperationTag::Add,
///     rhs: 4.0,
///     result: 7.0,
///     timestamp: Utc::now(),
/// };
/// assert_eq!(entry.line(), "3 + 4 = 7");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TapeEntry {
    pub lhs: f64,
    pub operation: OperationTag,
    pub rhs: f64,
    pub result: f64,
    /// When the computation completed
    pub timestamp: DateTime<Utc>,
}

impl TapeEntry {
    /// Stamp a computation with the current time.
    pub fn now(computation: Computation) -> Self {
        Self::at(computation, Utc::now())
    }

    pub fn at(computation: Computation, timestamp: DateTime<Utc>) -> Self {
        Self {
            lhs: computation.lhs,
            operation: computation.operation,
            rhs: computation.rhs,
            result: computation.result,
            timestamp,
        }
    }

    pub fn line(&self) -> String {
        format!(
            "{} {} {} = {}",
            format_number(self.lhs),
            self.operation,
            format_number(self.rhs),
            format_number(self.result)
        )
    }
}

/// Bounded, ordered history of computations.
///
/// The tape is immutable: `record` returns a new tape and leaves the
/// original as it was. Once `capacity` entries are held, recording drops
/// the oldest.
///
/// # Example
///
/// ```rust
/// use keycalc::core::{Computation, OperationTag, Tape, TapeEntry};
///
/// let tape = Tape::with_capacity(2);
/// let add = Computation { lhs: 1.0, operation: OperationTag::Add, rhs: 2.0, result: 3.0 };
///
/// let tape = tape.record(TapeEntry::now(add));
/// let tape = tape.record(TapeEntry::now(add));
/// let tape = tape.record(TapeEntry::now(add));
///
/// assert_eq!(tape.len(), 2);
/// assert_eq!(tape.last().map(|e| e.line()), Some("1 + 2 = 3".to_string()));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tape {
    entries: Vec<TapeEntry>,
    capacity: usize,
}

impl Default for Tape {
    fn default() -> Self {
        Self::new()
    }
}

impl Tape {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_TAPE_CAPACITY)
    }

    /// A capacity of zero is treated as one.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity: capacity.max(1),
        }
    }

    /// Record an entry, returning a new tape.
    pub fn record(&self, entry: TapeEntry) -> Self {
        let skip = (self.entries.len() + 1).saturating_sub(self.capacity);
        let entries = self
            .entries
            .iter()
            .skip(skip)
            .cloned()
            .chain(std::iter::once(entry))
            .collect();
        Self {
            entries,
            capacity: self.capacity,
        }
    }

    pub fn entries(&self) -> &[TapeEntry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&TapeEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Time between the first and last entry, `None` when empty.
    pub fn span(&self) -> Option<Duration> {
        let (first, last) = (self.entries.first()?, self.entries.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// All lines, oldest first.
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(TapeEntry::line).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn computation(lhs: f64, rhs: f64, result: f64) -> Computation {
        Computation {
            lhs,
            operation: OperationTag::Add,
            rhs,
            result,
        }
    }

    #[test]
    fn new_tape_is_empty() {
        let tape = Tape::new();
        assert!(tape.is_empty());
        assert_eq!(tape.len(), 0);
        assert!(tape.last().is_none());
        assert!(tape.span().is_none());
        assert_eq!(tape.capacity(), DEFAULT_TAPE_CAPACITY);
    }

    #[test]
    fn record_is_immutable() {
        let tape = Tape::new();
        let new_tape = tape.record(TapeEntry::now(computation(1.0, 1.0, 2.0)));

        assert_eq!(tape.len(), 0);
        assert_eq!(new_tape.len(), 1);
    }

    #[test]
    fn record_drops_oldest_beyond_capacity() {
        let mut tape = Tape::with_capacity(3);
        for i in 0..5 {
            let n = f64::from(i);
            tape = tape.record(TapeEntry::now(computation(n, 1.0, n + 1.0)));
        }

        assert_eq!(tape.len(), 3);
        let lhs: Vec<f64> = tape.entries().iter().map(|e| e.lhs).collect();
        assert_eq!(lhs, vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn zero_capacity_keeps_latest_entry() {
        let tape = Tape::with_capacity(0)
            .record(TapeEntry::now(computation(1.0, 1.0, 2.0)))
            .record(TapeEntry::now(computation(2.0, 2.0, 4.0)));
        assert_eq!(tape.len(), 1);
        assert_eq!(tape.last().map(|e| e.result), Some(4.0));
    }

    #[test]
    fn line_formats_canonically() {
        let entry = TapeEntry::now(Computation {
            lhs: 2.5,
            operation: OperationTag::Multiply,
            rhs: 2.0,
            result: 5.0,
        });
        assert_eq!(entry.line(), "2.5 * 2 = 5");
    }

    #[test]
    fn span_measures_first_to_last() {
        let start = Utc::now();
        let tape = Tape::new()
            .record(TapeEntry::at(computation(1.0, 1.0, 2.0), start))
            .record(TapeEntry::at(
                computation(2.0, 1.0, 3.0),
                start + chrono::Duration::milliseconds(250),
            ));

        assert_eq!(tape.span(), Some(Duration::from_millis(250)));
    }

    #[test]
    fn single_entry_has_zero_span() {
        let tape = Tape::new().record(TapeEntry::now(computation(1.0, 1.0, 2.0)));
        assert_eq!(tape.span(), Some(Duration::from_secs(0)));
    }

    #[test]
    fn tape_serializes_correctly() {
        let tape = Tape::new().record(TapeEntry::now(computation(1.0, 2.0, 3.0)));
        let json = serde_json::to_string(&tape).unwrap();
        let deserialized: Tape = serde_json::from_str(&json).unwrap();
        assert_eq!(tape, deserialized);
    }
}
