//! Fluent assertion API for parsed records

use crate::log::Log;

/// Create an assertion builder for a record
pub fn assert_log(log: &Log) -> LogAssertion<'_> {
    LogAssertion { log }
}

pub struct LogAssertion<'a> {
    log: &'a Log,
}

impl<'a> LogAssertion<'a> {
    pub fn priority(self, expected: u8) -> Self {
        assert_eq!(
            self.log.priority(),
            expected,
            "Expected priority {}, found {} in {}",
            expected,
            self.log.priority(),
            self.log
        );
        self
    }

    /// Assert the exact tag sequence, order included
    pub fn tags(self, expected: &[&str]) -> Self {
        assert_eq!(
            self.log.tags(),
            expected,
            "Tag mismatch in {}",
            self.log
        );
        self
    }

    pub fn no_tags(self) -> Self {
        assert!(
            self.log.tags().is_empty(),
            "Expected no tags, found [{}]",
            self.log.tags().join(":")
        );
        self
    }

    pub fn has_tag(self, tag: &str) -> Self {
        assert!(
            self.log.has_tag(tag),
            "Expected tag '{}', found [{}]",
            tag,
            self.log.tags().join(":")
        );
        self
    }

    pub fn attr(self, key: &str, expected: &str) -> Self {
        match self.log.attr(key) {
            Some(actual) => assert_eq!(
                actual, expected,
                "Attribute '{}' mismatch in {}",
                key, self.log
            ),
            None => panic!(
                "Expected attribute '{}', found keys [{}]",
                key,
                summarize_keys(self.log)
            ),
        }
        self
    }

    pub fn lacks_attr(self, key: &str) -> Self {
        assert!(
            self.log.attr(key).is_none(),
            "Expected no attribute '{}', found value {:?}",
            key,
            self.log.attr(key)
        );
        self
    }

    pub fn attr_count(self, expected: usize) -> Self {
        let actual = self.log.attrs().len();
        assert_eq!(
            actual,
            expected,
            "Expected {} attributes, found {}: [{}]",
            expected,
            actual,
            summarize_keys(self.log)
        );
        self
    }

    pub fn no_attrs(self) -> Self {
        self.attr_count(0)
    }
}

fn summarize_keys(log: &Log) -> String {
    log.attrs().keys().cloned().collect::<Vec<_>>().join(", ")
}
