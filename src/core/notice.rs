// src/core/notice.rs

/// User-facing "some words lack signs" message.
///
/// Set by the first unresolved word of a session and then left alone until
/// the user clears it; later failures do not replace it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MissingSignNotice {
    message: Option<String>,
}

impl MissingSignNotice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if this call set the notice.
    pub fn record(&mut self, word: &str) -> bool {
        if self.message.is_some() {
            return false;
        }
        self.message = Some(format!("Some words like \"{word}\" don't have signs yet"));
        true
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_set(&self) -> bool {
        self.message.is_some()
    }

    pub fn clear(&mut self) {
        self.message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_word_sticks_until_cleared() {
        let mut notice = MissingSignNotice::new();
        assert!(notice.record("qwerty"));
        assert!(!notice.record("zxcv"));
        assert_eq!(notice.message(), Some("Some words like \"qwerty\" don't have signs yet"));

        notice.clear();
        assert!(!notice.is_set());
        assert!(notice.record("zxcv"));
        assert!(notice.message().unwrap().contains("zxcv"));
    }
}
