//! Construction-time resolver configuration.

use super::asserter::{FlatRecordAsserter, ValueAsserter};
use crate::core::InputSource;
use std::sync::Arc;

/// Asserters a resolver reads each input source through.
///
/// Every source always has an asserter: those left unset on the builder are
/// filled in with a [`FlatRecordAsserter`] when the config is built, never
/// at resolve time.
///
/// # Example
///
/// ```rust
/// use intake::core::InputSource;
/// use intake::resolver::{QueryAsserter, ResolverConfig, SectionAsserter};
///
/// let config = ResolverConfig::builder()
///     .attributes(SectionAsserter::named_after(InputSource::Attributes))
///     .query(QueryAsserter::in_section("query"))
///     .build();
///
/// assert_eq!(config.asserter(InputSource::Body).source(), InputSource::Body);
/// ```
#[derive(Clone, Debug)]
pub struct ResolverConfig {
    body: Arc<dyn ValueAsserter>,
    attributes: Arc<dyn ValueAsserter>,
    query: Arc<dyn ValueAsserter>,
}

impl ResolverConfig {
    pub fn builder() -> ResolverConfigBuilder {
        ResolverConfigBuilder::new()
    }

    pub fn asserter(&self, source: InputSource) -> &dyn ValueAsserter {
        match source {
            InputSource::Body => self.body.as_ref(),
            InputSource::Attributes => self.attributes.as_ref(),
            InputSource::Query => self.query.as_ref(),
        }
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Builder for [`ResolverConfig`].
#[derive(Default)]
pub struct ResolverConfigBuilder {
    body: Option<Arc<dyn ValueAsserter>>,
    attributes: Option<Arc<dyn ValueAsserter>>,
    query: Option<Arc<dyn ValueAsserter>>,
}

impl ResolverConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Asserter for body fields
    pub fn body(mut self, asserter: impl ValueAsserter + 'static) -> Self {
        self.body = Some(Arc::new(asserter));
        self
    }

    /// Asserter for routing attributes
    pub fn attributes(mut self, asserter: impl ValueAsserter + 'static) -> Self {
        self.attributes = Some(Arc::new(asserter));
        self
    }

    /// Asserter for query parameters
    pub fn query(mut self, asserter: impl ValueAsserter + 'static) -> Self {
        self.query = Some(Arc::new(asserter));
        self
    }

    /// Share an already-built asserter, e.g. one used by several resolvers.
    pub fn shared(mut self, source: InputSource, asserter: Arc<dyn ValueAsserter>) -> Self {
        match source {
            InputSource::Body => self.body = Some(asserter),
            InputSource::Attributes => self.attributes = Some(asserter),
            InputSource::Query => self.query = Some(asserter),
        }
        self
    }

    pub fn build(self) -> ResolverConfig {
        ResolverConfig {
            body: self.body.unwrap_or_else(|| flat(InputSource::Body)),
            attributes: self
                .attributes
                .unwrap_or_else(|| flat(InputSource::Attributes)),
            query: self.query.unwrap_or_else(|| flat(InputSource::Query)),
        }
    }
}

fn flat(source: InputSource) -> Arc<dyn ValueAsserter> {
    Arc::new(FlatRecordAsserter::new(source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RawInput;
    use crate::resolver::{QueryAsserter, SectionAsserter};
    use serde_json::json;

    #[test]
    fn omitted_asserters_default_to_flat_lookup() {
        let config = ResolverConfig::default();
        let input = RawInput::new().with("id", 1);

        for source in [InputSource::Body, InputSource::Attributes, InputSource::Query] {
            let asserter = config.asserter(source);
            assert_eq!(asserter.source(), source);
            assert_eq!(asserter.locate(&input, "id"), Some(&json!(1)));
        }
    }

    #[test]
    fn configured_asserters_replace_defaults_per_source() {
        let config = ResolverConfig::builder()
            .attributes(SectionAsserter::named_after(InputSource::Attributes))
            .query(QueryAsserter::in_section("query"))
            .build();
        let input = RawInput::new()
            .with("id", "flat")
            .with("attributes", json!({ "id": "nested" }));

        assert_eq!(
            config.asserter(InputSource::Body).locate(&input, "id"),
            Some(&json!("flat"))
        );
        assert_eq!(
            config.asserter(InputSource::Attributes).locate(&input, "id"),
            Some(&json!("nested"))
        );
        assert_eq!(config.asserter(InputSource::Query).locate(&input, "id"), None);
    }

    #[test]
    fn shared_asserter_is_reused() {
        let section: Arc<dyn ValueAsserter> =
            Arc::new(SectionAsserter::new(InputSource::Body, "data"));
        let config = ResolverConfig::builder()
            .shared(InputSource::Body, Arc::clone(&section))
            .build();

        assert_eq!(Arc::strong_count(&section), 2);
        assert_eq!(config.asserter(InputSource::Body).source(), InputSource::Body);
    }
}
