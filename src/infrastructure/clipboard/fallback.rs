//! Ordered clipboard fallback chain

use async_trait::async_trait;

use crate::application::ports::{Clipboard, ClipboardError};

/// Ordered chain of copy mechanisms.
///
/// The first mechanism to succeed wins and the rest are never
/// attempted. Empty text fails before any mechanism is tried.
pub struct FallbackClipboard {
    mechanisms: Vec<Box<dyn Clipboard>>,
}

impl FallbackClipboard {
    /// Create a chain from mechanisms in try-order
    pub fn new(mechanisms: Vec<Box<dyn Clipboard>>) -> Self {
        Self { mechanisms }
    }

    /// Mechanism names in try-order
    pub fn mechanism_names(&self) -> Vec<&str> {
        self.mechanisms.iter().map(|m| m.name()).collect()
    }
}

#[async_trait]
impl Clipboard for FallbackClipboard {
    async fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        if text.is_empty() {
            return Err(ClipboardError::EmptyText);
        }

        let mut attempted = Vec::new();

        for mechanism in &self.mechanisms {
            match mechanism.copy(text).await {
                Ok(()) => return Ok(()),
                Err(_) => attempted.push(mechanism.name().to_string()),
            }
        }

        Err(ClipboardError::AllMechanismsFailed(attempted.join(", ")))
    }

    fn name(&self) -> &str {
        "fallback-chain"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct MockMechanism {
        name: &'static str,
        succeed: bool,
        attempts: Arc<AtomicUsize>,
    }

    impl MockMechanism {
        fn new(name: &'static str, succeed: bool) -> (Box<dyn Clipboard>, Arc<AtomicUsize>) {
            let attempts = Arc::new(AtomicUsize::new(0));
            let mechanism = Box::new(Self {
                name,
                succeed,
                attempts: Arc::clone(&attempts),
            });
            (mechanism, attempts)
        }
    }

    #[async_trait]
    impl Clipboard for MockMechanism {
        async fn copy(&self, _text: &str) -> Result<(), ClipboardError> {
            self.attempts.fetch_add(1, Ordering::SeqCst);
            if self.succeed {
                Ok(())
            } else {
                Err(ClipboardError::CopyFailed("mock failure".to_string()))
            }
        }

        fn name(&self) -> &str {
            self.name
        }
    }

    #[tokio::test]
    async fn first_success_stops_the_chain() {
        let (first, first_attempts) = MockMechanism::new("first", false);
        let (second, second_attempts) = MockMechanism::new("second", false);
        let (third, third_attempts) = MockMechanism::new("third", true);
        let (fourth, fourth_attempts) = MockMechanism::new("fourth", true);

        let chain = FallbackClipboard::new(vec![first, second, third, fourth]);
        chain.copy("some text").await.unwrap();

        assert_eq!(first_attempts.load(Ordering::SeqCst), 1);
        assert_eq!(second_attempts.load(Ordering::SeqCst), 1);
        assert_eq!(third_attempts.load(Ordering::SeqCst), 1);
        assert_eq!(fourth_attempts.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn empty_text_attempts_no_mechanism() {
        let (only, attempts) = MockMechanism::new("only", true);

        let chain = FallbackClipboard::new(vec![only]);
        let err = chain.copy("").await.unwrap_err();

        assert!(matches!(err, ClipboardError::EmptyText));
        assert_eq!(attempts.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn all_failures_name_attempted_mechanisms() {
        let (first, _) = MockMechanism::new("first", false);
        let (second, _) = MockMechanism::new("second", false);

        let chain = FallbackClipboard::new(vec![first, second]);
        let err = chain.copy("some text").await.unwrap_err();

        match err {
            ClipboardError::AllMechanismsFailed(attempted) => {
                assert_eq!(attempted, "first, second");
            }
            other => panic!("Expected AllMechanismsFailed, got: {}", other),
        }
    }

    #[tokio::test]
    async fn single_successful_mechanism_succeeds() {
        let (only, attempts) = MockMechanism::new("only", true);

        let chain = FallbackClipboard::new(vec![only]);
        chain.copy("some text").await.unwrap();

        assert_eq!(attempts.load(Ordering::SeqCst), 1);
    }
}
