//! Agent memory implementations

use std::collections::VecDeque;

#[derive(Debug, Clone)]
pub struct MemoryEntry {
    pub role: String,
    pub text: String,
}

impl MemoryEntry {
    fn new(role: &str, text: &str) -> Self {
        Self {
            role: role.to_string(),
            text: text.to_string(),
        }
    }
}

/// Conversation memory for agents.
pub trait Memory: Send + Sync {
    /// Record one entry.
    fn record(&mut self, role: &str, text: &str);

    /// All remembered entries, oldest first.
    fn recall(&self) -> Vec<MemoryEntry>;

    fn clear(&mut self);

    /// Remembered entries rendered one per line as `role: text`.
    fn transcript(&self) -> String {
        self.recall()
            .iter()
            .map(|entry| format!("{}: {}", entry.role, entry.text))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Unbounded append-only memory.
#[derive(Debug, Default)]
pub struct SimpleMemory {
    entries: Vec<MemoryEntry>,
}

impl SimpleMemory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Memory for SimpleMemory {
    fn record(&mut self, role: &str, text: &str) {
        self.entries.push(MemoryEntry::new(role, text));
    }

    fn recall(&self) -> Vec<MemoryEntry> {
        self.entries.clone()
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Bounded memory that keeps the most recent entries.
#[derive(Debug)]
pub struct ConversationMemory {
    entries: VecDeque<MemoryEntry>,
    max_history: usize,
}

impl ConversationMemory {
    pub fn new(max_history: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            max_history,
        }
    }
}

impl Default for ConversationMemory {
    fn default() -> Self {
        Self::new(20)
    }
}

impl Memory for ConversationMemory {
    fn record(&mut self, role: &str, text: &str) {
        if self.entries.len() == self.max_history {
            self.entries.pop_front();
        }
        self.entries.push_back(MemoryEntry::new(role, text));
    }

    fn recall(&self) -> Vec<MemoryEntry> {
        self.entries.iter().cloned().collect()
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Memory grouped into episodes; recall covers the current episode only.
#[derive(Debug, Default)]
pub struct EpisodicMemory {
    episodes: Vec<Vec<MemoryEntry>>,
    current: Vec<MemoryEntry>,
}

impl EpisodicMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Close the current episode and start a new one.
    pub fn end_episode(&mut self) {
        if !self.current.is_empty() {
            self.episodes.push(std::mem::take(&mut self.current));
        }
    }

    pub fn episodes(&self) -> &[Vec<MemoryEntry>] {
        &self.episodes
    }
}

impl Memory for EpisodicMemory {
    fn record(&mut self, role: &str, text: &str) {
        self.current.push(MemoryEntry::new(role, text));
    }

    fn recall(&self) -> Vec<MemoryEntry> {
        self.current.clone()
    }

    fn clear(&mut self) {
        self.episodes.clear();
        self.current.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversation_memory_drops_oldest() {
        let mut memory = ConversationMemory::new(2);
        memory.record("user", "one");
        memory.record("agent", "two");
        memory.record("user", "three");

        let entries = memory.recall();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].text, "two");
        assert_eq!(entries[1].text, "three");
    }

    #[test]
    fn test_episodic_memory_recall_is_current_episode() {
        let mut memory = EpisodicMemory::new();
        memory.record("user", "first episode");
        memory.end_episode();
        memory.record("user", "second episode");

        assert_eq!(memory.recall().len(), 1);
        assert_eq!(memory.recall()[0].text, "second episode");
        assert_eq!(memory.episodes().len(), 1);
    }

    #[test]
    fn test_transcript_format() {
        let mut memory = SimpleMemory::new();
        memory.record("user", "hi");
        memory.record("agent", "hello");
        assert_eq!(memory.transcript(), "user: hi\nagent: hello");
    }
}
