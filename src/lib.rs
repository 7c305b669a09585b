pub mod checker;
pub mod cli;
pub mod config;
pub mod error;

pub use checker::distance::{Distance, DistanceKind, Sift3, Sift4};
pub use checker::MailChecker;
pub use config::{Config, ConfigLayer};
pub use error::ConfigError;

use serde::{Deserialize, Serialize};

/// A corrected address proposed for a likely typo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub address: String,
    pub domain: String,
    pub full: String,
}

impl Suggestion {
    pub fn new(address: &str, domain: &str) -> Self {
        Self {
            address: address.to_string(),
            domain: domain.to_string(),
            full: format!("{}@{}", address, domain),
        }
    }
}

/// Result of checking one address
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Suggested(Suggestion),
    Empty,
}

impl Outcome {
    /// Dispatch to the handler matching this outcome
    pub fn handle<T>(
        self,
        on_suggested: impl FnOnce(Suggestion) -> T,
        on_empty: impl FnOnce() -> T,
    ) -> T {
        match self {
            Outcome::Suggested(suggestion) => on_suggested(suggestion),
            Outcome::Empty => on_empty(),
        }
    }

    pub fn into_suggestion(self) -> Option<Suggestion> {
        self.handle(Some, || None)
    }
}

/// Check one address against `config`.
///
/// Builds a [`MailChecker`] per call, copying the reference lists; batches should create
/// one checker and call [`MailChecker::run`] on it instead.
pub fn evaluate(email: &str, config: &Config) -> Outcome {
    MailChecker::new(config).run(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_defaults() {
        let config = Config::default();
        assert_eq!(evaluate("user@gmail.com", &config), Outcome::Empty);
        assert_eq!(
            evaluate("user@gmial.com", &config),
            Outcome::Suggested(Suggestion::new("user", "gmail.com"))
        );
    }

    #[test]
    fn test_outcome_handlers() {
        let message = evaluate("user@gmial.com", &Config::default()).handle(
            |s| format!("Did you mean {}?", s.full),
            || "ok".to_string(),
        );
        assert_eq!(message, "Did you mean user@gmail.com?");

        let message = evaluate("user@aol.com", &Config::default())
            .handle(|s| s.full, || "ok".to_string());
        assert_eq!(message, "ok");
    }

    #[test]
    fn test_reused_checker_matches_evaluate() {
        let config = Config::default();
        let checker = MailChecker::new(&config);
        for email in ["user@gmial.com", "user@gmail.com", "user@hotmail.co", "notanemail"] {
            assert_eq!(checker.run(email), evaluate(email, &config));
        }
    }

    #[test]
    fn test_suggestion_full_address() {
        let suggestion = Suggestion::new("a.b", "yahoo.com");
        assert_eq!(suggestion.full, "a.b@yahoo.com");
    }
}
