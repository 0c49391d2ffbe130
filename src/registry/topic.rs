//! Topic identifiers
//!
//! Topics form a closed set known at compile time. Free-form strings only
//! become a [`Topic`] through [`Topic::parse`], which rejects anything that
//! is not a canonical name.

use std::str::FromStr;

use super::error::RegistryError;

/// Named channel for a category of internal notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Topic {
    /// Reload configuration from its source
    ConfigRefresh,
    /// Drop cached state
    CacheInvalidate,
    /// Path synchronization triggered from the metastore side
    HdfsSyncHms,
    /// Path synchronization triggered from the namenode side
    HdfsSyncNn,
}

impl Topic {
    /// Every topic, in declaration order
    pub const ALL: [Topic; 4] = [
        Topic::ConfigRefresh,
        Topic::CacheInvalidate,
        Topic::HdfsSyncHms,
        Topic::HdfsSyncNn,
    ];

    /// Canonical name of the topic
    pub const fn name(self) -> &'static str {
        match self {
            Topic::ConfigRefresh => "CONFIG_REFRESH",
            Topic::CacheInvalidate => "CACHE_INVALIDATE",
            Topic::HdfsSyncHms => "HDFS_SYNC_HMS",
            Topic::HdfsSyncNn => "HDFS_SYNC_NN",
        }
    }

    /// Look up a topic by its canonical name
    ///
    /// Matching is exact and case-sensitive; no trimming is applied.
    pub fn parse(name: &str) -> Result<Topic, RegistryError> {
        Topic::ALL
            .into_iter()
            .find(|topic| topic.name() == name)
            .ok_or_else(|| RegistryError::UnknownTopic(name.to_string()))
    }
}

impl FromStr for Topic {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Topic::parse(s)
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical_names() {
        for topic in Topic::ALL {
            assert_eq!(Topic::parse(topic.name()).unwrap(), topic);
            assert_eq!(topic.to_string().parse::<Topic>().unwrap(), topic);
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        let result = Topic::parse("config_refresh");
        assert!(matches!(result, Err(RegistryError::UnknownTopic(ref name)) if name == "config_refresh"));
    }

    #[test]
    fn test_parse_does_not_trim() {
        assert!(Topic::parse(" CONFIG_REFRESH").is_err());
        assert!(Topic::parse("CONFIG_REFRESH\n").is_err());
    }

    #[test]
    fn test_parse_unknown() {
        assert!(matches!(
            "BOGUS".parse::<Topic>(),
            Err(RegistryError::UnknownTopic(_))
        ));
        assert!(Topic::parse("").is_err());
    }

    #[test]
    fn test_order_matches_declaration() {
        let mut sorted = Topic::ALL;
        sorted.sort();
        assert_eq!(sorted, Topic::ALL);
    }
}
