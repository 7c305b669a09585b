/// An email address broken into the pieces the matcher works on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailParts {
    /// Everything before the last `@`
    pub address: String,
    /// Everything after the last `@`
    pub domain: String,
    /// First label of the domain, empty for single-label domains
    pub second_level_domain: String,
    /// Remaining labels of the domain
    pub top_level_domain: String,
}

/// Split an email into its parts, returning `None` for anything that isn't `local@domain`
pub fn split_email(email: &str) -> Option<EmailParts> {
    let mut parts: Vec<&str> = email.trim().split('@').collect();

    if parts.len() < 2 || parts.iter().any(|p| p.is_empty()) {
        return None;
    }

    let domain = parts.pop()?;
    let labels: Vec<&str> = domain.split('.').collect();

    let (second_level_domain, top_level_domain) = match labels.as_slice() {
        [] => return None,
        [tld] => (String::new(), tld.to_string()),
        [sld, rest @ ..] => (sld.to_string(), rest.join(".")),
    };

    Some(EmailParts {
        address: parts.join("@"),
        domain: domain.to_string(),
        second_level_domain,
        top_level_domain,
    })
}
