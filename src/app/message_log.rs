//! Benutzer-sichtbares Meldungs-Log (Overlay) mit Spiegelung ins `log`-Backend.

use std::time::{Duration, Instant};

/// Eine Meldung mit Erstellungszeitpunkt.
#[derive(Debug, Clone)]
pub struct LogMessage {
    pub text: String,
    pub created: Instant,
}

/// Begrenzte, zeitgestempelte Meldungsliste.
#[derive(Debug, Default)]
pub struct MessageLog {
    entries: Vec<LogMessage>,
}

impl MessageLog {
    const MAX_ENTRIES: usize = 200;
}

impl MessageLog {
    /// Erstellt ein leeres Meldungs-Log.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Fügt eine Meldung hinzu und spiegelt sie nach `log::info!`.
    /// Begrenzt auf MAX_ENTRIES, ältere Einträge werden verworfen.
    pub fn log(&mut self, text: impl Into<String>) {
        let text = text.into();
        log::info!("{}", text);
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.drain(..Self::MAX_ENTRIES / 2);
        }
        self.entries.push(LogMessage {
            text,
            created: Instant::now(),
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[LogMessage] {
        &self.entries
    }

    /// Text der jüngsten Meldung.
    pub fn last(&self) -> Option<&str> {
        self.entries.last().map(|m| m.text.as_str())
    }

    /// Prüft, ob eine Meldung exakt `text` lautet.
    pub fn contains(&self, text: &str) -> bool {
        self.entries.iter().any(|m| m.text == text)
    }

    /// Entfernt Meldungen, die älter als `max_age` sind.
    pub fn prune(&mut self, now: Instant, max_age: Duration) {
        self.entries
            .retain(|m| now.saturating_duration_since(m.created) <= max_age);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_keeps_order_and_last() {
        let mut log = MessageLog::new();
        log.log("eins");
        log.log(String::from("zwei"));
        assert_eq!(log.len(), 2);
        assert_eq!(log.last(), Some("zwei"));
        assert!(log.contains("eins"));
        assert!(!log.contains("drei"));
    }

    #[test]
    fn log_is_bounded() {
        let mut log = MessageLog::new();
        for i in 0..(MessageLog::MAX_ENTRIES + 10) {
            log.log(format!("Meldung {i}"));
        }
        assert!(log.len() <= MessageLog::MAX_ENTRIES);
        assert_eq!(
            log.last(),
            Some(format!("Meldung {}", MessageLog::MAX_ENTRIES + 9).as_str())
        );
    }

    #[test]
    fn prune_drops_expired_messages() {
        let mut log = MessageLog::new();
        log.log("alt");
        let later = Instant::now() + Duration::from_secs(10);
        log.prune(later, Duration::from_secs(4));
        assert!(log.is_empty());

        log.log("neu");
        log.prune(Instant::now(), Duration::from_secs(4));
        assert_eq!(log.len(), 1);
    }
}
