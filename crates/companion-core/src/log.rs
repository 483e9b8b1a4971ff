//! Per-panel output log.

/// An ordered record of generated or selected results, newest first where
/// the owning panel prepends.
///
/// Two write policies exist side by side: [`OutputLog::prepend`] for panels
/// that accumulate history and [`OutputLog::replace`] for panels whose
/// output is a fresh batch on every generation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputLog {
    entries: Vec<String>,
}

impl OutputLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a line at the front of the log.
    pub fn prepend(&mut self, line: impl Into<String>) {
        self.entries.insert(0, line.into());
    }

    /// Discard the current content and take `lines` as the whole log.
    pub fn replace<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries = lines.into_iter().map(Into::into).collect();
    }

    /// Empty the log.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// All lines in display order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The most recent line for prepend-policy logs.
    pub fn latest(&self) -> Option<&str> {
        self.entries.first().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prepend_puts_newest_first() {
        let mut log = OutputLog::new();
        log.prepend("first");
        log.prepend("second");
        assert_eq!(log.entries(), ["second", "first"]);
        assert_eq!(log.latest(), Some("second"));
    }

    #[test]
    fn replace_discards_previous_content() {
        let mut log = OutputLog::new();
        log.prepend("old");
        log.replace(["a", "b", "c"]);
        assert_eq!(log.entries(), ["a", "b", "c"]);
    }

    #[test]
    fn replace_with_nothing_empties() {
        let mut log = OutputLog::new();
        log.prepend("old");
        log.replace(Vec::<String>::new());
        assert!(log.is_empty());
    }

    #[test]
    fn clear_empties_any_log() {
        let mut log = OutputLog::new();
        for i in 0..10 {
            log.prepend(format!("line {i}"));
        }
        assert_eq!(log.len(), 10);
        log.clear();
        assert!(log.is_empty());
        assert_eq!(log.latest(), None);

        // clearing an empty log is fine too
        log.clear();
        assert!(log.is_empty());
    }
}
