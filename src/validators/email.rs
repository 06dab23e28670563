//! Email address check with an optional domain existence lookup.

use super::FieldValidator;
use crate::error::Violation;
use std::fmt;
use std::net::ToSocketAddrs;
use std::sync::Arc;
use stillwater::validation::Validation;
use tracing::debug;

const LOCAL_PART_MAX: usize = 64;
const DOMAIN_MAX: usize = 253;
const LABEL_MAX: usize = 63;
const LOCAL_PART_SPECIALS: &str = "!#$%&'*+/=?^_`{|}~-.";

/// Answers whether a mail domain exists.
pub trait DomainResolver: Send + Sync {
    fn resolves(&self, domain: &str) -> bool;
}

/// Looks the domain up through the operating system resolver.
///
/// This is a host lookup (A/AAAA records via `ToSocketAddrs`), not an MX
/// query, so a domain that only publishes MX records is reported as
/// unresolvable.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemDomainResolver;

impl DomainResolver for SystemDomainResolver {
    fn resolves(&self, domain: &str) -> bool {
        match (domain, 25).to_socket_addrs() {
            Ok(mut addrs) => addrs.next().is_some(),
            Err(e) => {
                debug!(domain, error = %e, "email domain lookup failed");
                false
            }
        }
    }
}

/// Treats every syntactically valid domain as existing.
#[derive(Clone, Copy, Debug, Default)]
pub struct AcceptAllDomains;

impl DomainResolver for AcceptAllDomains {
    fn resolves(&self, _domain: &str) -> bool {
        true
    }
}

/// Value must be a well-formed email address whose domain resolves.
///
/// The syntax check runs first; the domain is only looked up for addresses
/// that are well formed, so one value yields at most one violation.
///
/// # Example
///
/// ```rust
/// use intake::validators::{EmailAddress, FieldValidator};
///
/// let email = EmailAddress::syntax_only();
///
/// assert!(email.check(&"stephen@hawking.me".to_string()).is_success());
/// assert!(email.check(&"stephen.hawking.me".to_string()).is_failure());
/// ```
#[derive(Clone)]
pub struct EmailAddress {
    resolver: Arc<dyn DomainResolver>,
}

impl EmailAddress {
    pub fn new(resolver: impl DomainResolver + 'static) -> Self {
        Self {
            resolver: Arc::new(resolver),
        }
    }

    /// Check syntax only; no lookup is made.
    pub fn syntax_only() -> Self {
        Self::new(AcceptAllDomains)
    }

    /// Check syntax, then look the domain up as a host through
    /// [`SystemDomainResolver`].
    pub fn resolving() -> Self {
        Self::new(SystemDomainResolver)
    }
}

impl Default for EmailAddress {
    fn default() -> Self {
        Self::syntax_only()
    }
}

impl fmt::Debug for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmailAddress").finish_non_exhaustive()
    }
}

impl FieldValidator<String> for EmailAddress {
    fn check(&self, value: &String) -> Validation<(), Violation> {
        let Some(domain) = well_formed_domain(value) else {
            return Validation::Failure(Violation::InvalidEmail {
                value: value.clone(),
            });
        };

        if self.resolver.resolves(domain) {
            Validation::Success(())
        } else {
            Validation::Failure(Violation::UnresolvableEmailDomain {
                value: value.clone(),
                domain: domain.to_string(),
            })
        }
    }
}

/// Domain part of `address` if the whole address is well formed.
fn well_formed_domain(address: &str) -> Option<&str> {
    let (local, domain) = address.split_once('@')?;
    (is_local_part(local) && is_domain(domain)).then_some(domain)
}

fn is_local_part(local: &str) -> bool {
    !local.is_empty()
        && local.len() <= LOCAL_PART_MAX
        && !local.starts_with('.')
        && !local.ends_with('.')
        && !local.contains("..")
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || LOCAL_PART_SPECIALS.contains(c))
}

fn is_domain(domain: &str) -> bool {
    if domain.is_empty() || domain.len() > DOMAIN_MAX {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    let tld_is_alphabetic = labels
        .last()
        .is_some_and(|tld| tld.chars().all(|c| c.is_ascii_alphabetic()));

    labels.len() >= 2 && tld_is_alphabetic && labels.iter().all(|l| is_label(l))
}

fn is_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= LABEL_MAX
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    struct KnownDomains(&'static [&'static str]);

    impl DomainResolver for KnownDomains {
        fn resolves(&self, domain: &str) -> bool {
            self.0.contains(&domain)
        }
    }

    fn code_of(outcome: Validation<(), Violation>) -> Option<String> {
        match outcome {
            Validation::Failure(violation) => Some(violation.code().to_string()),
            Validation::Success(_) => None,
        }
    }

    #[test]
    fn accepts_common_addresses() {
        let email = EmailAddress::syntax_only();

        for address in ["a@b.com", "first.last+tag@mail.example.org", "x_y@sub-domain.io"] {
            assert!(email.check(&address.to_string()).is_success(), "{address}");
        }
    }

    #[test]
    fn rejects_malformed_addresses() {
        let email = EmailAddress::syntax_only();

        for address in [
            "stephen.hawking.me",
            "@b.com",
            "a@",
            "a@b",
            "a@@b.com",
            "a..b@c.com",
            ".a@b.com",
            "a@-b.com",
            "a@b.c0m",
            "a b@c.com",
        ] {
            assert_eq!(
                code_of(email.check(&address.to_string())).as_deref(),
                Some("invalid_email"),
                "{address}"
            );
        }
    }

    #[test]
    fn unknown_domain_is_its_own_violation() {
        let email = EmailAddress::new(KnownDomains(&["hawking.me"]));

        assert!(email.check(&"stephen@hawking.me".to_string()).is_success());
        match email.check(&"stephen@nowhere.invalid".to_string()) {
            Validation::Failure(Violation::UnresolvableEmailDomain { domain, .. }) => {
                assert_eq!(domain, "nowhere.invalid")
            }
            _ => panic!("Expected unresolvable domain"),
        }
    }

    #[test]
    fn malformed_address_skips_lookup() {
        let email = EmailAddress::new(KnownDomains(&[]));

        assert_eq!(
            code_of(email.check(&"not-an-address".to_string())).as_deref(),
            Some("invalid_email")
        );
    }
}
