pub mod distance;
pub mod matcher;
pub mod sanitize;
pub mod splitter;

use crate::{Config, Outcome, Suggestion};
use distance::Distance;
use matcher::find_closest_domain;
use splitter::split_email;

/// Suggests corrections for mistyped email domains against three reference lists
pub struct MailChecker {
    domains: Vec<String>,
    second_level_domains: Vec<String>,
    top_level_domains: Vec<String>,
    domain_threshold: f64,
    second_level_threshold: f64,
    top_level_threshold: f64,
    distance: Box<dyn Distance>,
}

impl MailChecker {
    pub fn new(config: &Config) -> Self {
        Self {
            domains: config.domains.clone(),
            second_level_domains: config.second_level_domains.clone(),
            top_level_domains: config.top_level_domains.clone(),
            domain_threshold: config.domain_threshold,
            second_level_threshold: config.second_level_threshold,
            top_level_threshold: config.top_level_threshold,
            distance: config.distance.build(),
        }
    }

    /// Replace the configured distance function with a custom one
    pub fn with_distance(mut self, distance: impl Distance + 'static) -> Self {
        self.distance = Box::new(distance);
        self
    }

    /// Escape the raw input, then look for a correction
    pub fn run(&self, email: &str) -> Outcome {
        let encoded = sanitize::encode_email(email);
        match self.suggest(&encoded) {
            Some(suggestion) => Outcome::Suggested(suggestion),
            None => Outcome::Empty,
        }
    }

    /// Suggest a corrected address, or `None` when the address looks right or can't be parsed
    pub fn suggest(&self, email: &str) -> Option<Suggestion> {
        let email = email.to_lowercase();
        let parts = split_email(&email)?;
        let distance = self.distance.as_ref();

        if let Some(closest) = find_closest_domain(
            &parts.domain,
            &self.domains,
            distance,
            Some(self.domain_threshold),
        ) {
            if closest == parts.domain {
                tracing::debug!(domain = %parts.domain, "domain is a known domain");
                return None;
            }
            tracing::debug!(domain = %parts.domain, closest, "close to a known domain");
            return Some(Suggestion::new(&parts.address, closest));
        }

        let closest_sld = find_closest_domain(
            &parts.second_level_domain,
            &self.second_level_domains,
            distance,
            Some(self.second_level_threshold),
        );
        let closest_tld = find_closest_domain(
            &parts.top_level_domain,
            &self.top_level_domains,
            distance,
            Some(self.top_level_threshold),
        );

        if parts.domain.is_empty() {
            return None;
        }

        let mut domain = parts.domain.clone();
        let mut corrected = false;

        // plain first-occurrence replacement, not a rebuild from labels
        if let Some(sld) = closest_sld.filter(|sld| *sld != parts.second_level_domain) {
            domain = domain.replacen(&parts.second_level_domain, sld, 1);
            corrected = true;
        }
        if let Some(tld) = closest_tld.filter(|tld| *tld != parts.top_level_domain) {
            domain = domain.replacen(&parts.top_level_domain, tld, 1);
            corrected = true;
        }

        if !corrected {
            return None;
        }
        tracing::debug!(original = %parts.domain, corrected = %domain, "corrected domain labels");
        Some(Suggestion::new(&parts.address, &domain))
    }
}

impl Default for MailChecker {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
