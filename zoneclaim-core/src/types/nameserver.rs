//! 名称服务器集合

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

/// A set of nameserver host names.
///
/// Names are compared after normalisation (trimmed, lowercase, no trailing
/// dot), so `NS-1.AwsDns-00.com.` and `ns-1.awsdns-00.com` are the same member.
/// Iteration and display are sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NameserverSet(BTreeSet<String>);

impl NameserverSet {
    /// Build a set from raw names. Blank entries are dropped.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            names
                .into_iter()
                .filter_map(|name| normalize_name(name.as_ref()))
                .collect(),
        )
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        normalize_name(name).is_some_and(|n| self.0.contains(&n))
    }

    /// Members present in both sets.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        Self(self.0.intersection(&other.0).cloned().collect())
    }

    /// Whether the two sets share at least one member.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        !self.0.is_disjoint(&other.0)
    }

    /// Whether any member contains `marker` (case-insensitive).
    #[must_use]
    pub fn any_contains_marker(&self, marker: &str) -> bool {
        let marker = marker.to_ascii_lowercase();
        self.0.iter().any(|name| name.contains(&marker))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<String> {
        self.0.iter().cloned().collect()
    }
}

fn normalize_name(name: &str) -> Option<String> {
    let name = name.trim().trim_end_matches('.');
    if name.is_empty() {
        None
    } else {
        Some(name.to_ascii_lowercase())
    }
}

impl fmt::Display for NameserverSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for name in &self.0 {
            if !first {
                f.write_str(" ")?;
            }
            f.write_str(name)?;
            first = false;
        }
        Ok(())
    }
}

impl<S: AsRef<str>> FromIterator<S> for NameserverSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::from_names(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_names_normalises_and_dedups() {
        let set = NameserverSet::from_names([
            "NS-1.AwsDns-00.com.",
            "ns-1.awsdns-00.com",
            "  ",
            "ns-2.awsdns-01.net ",
        ]);
        assert_eq!(set.len(), 2);
        assert!(set.contains("ns-1.awsdns-00.COM."));
        assert_eq!(set.to_string(), "ns-1.awsdns-00.com ns-2.awsdns-01.net");
    }

    #[test]
    fn test_intersection_is_symmetric() {
        let target = NameserverSet::from_names(["ns1.awsdns-00.com", "ns2.awsdns-01.net"]);
        let candidate = NameserverSet::from_names(["ns2.awsdns-01.net.", "ns9.awsdns-09.org"]);
        let disjoint = NameserverSet::from_names(["ns5.other.com"]);

        assert!(target.intersects(&candidate));
        assert!(candidate.intersects(&target));
        assert_eq!(target.intersection(&candidate), candidate.intersection(&target));
        assert_eq!(target.intersection(&candidate).to_vec(), ["ns2.awsdns-01.net"]);

        assert!(!target.intersects(&disjoint));
        assert!(!disjoint.intersects(&target));
        assert!(target.intersection(&disjoint).is_empty());
    }

    #[test]
    fn test_empty_never_intersects() {
        let empty = NameserverSet::default();
        let target = NameserverSet::from_names(["ns1.awsdns-00.com"]);
        assert!(!empty.intersects(&target));
        assert!(!target.intersects(&empty));
    }

    #[test]
    fn test_marker_is_case_insensitive() {
        let set = NameserverSet::from_names(["NS-12.AWSDNS-34.ORG"]);
        assert!(set.any_contains_marker("awsdns"));
        assert!(set.any_contains_marker("AwsDns"));
        assert!(!set.any_contains_marker("cloudflare"));
        assert!(!NameserverSet::default().any_contains_marker("awsdns"));
    }

    #[test]
    fn test_serializes_as_sorted_list() {
        let set: NameserverSet = ["b.example.net", "a.example.net"].into_iter().collect();
        assert_eq!(
            serde_json::to_string(&set).unwrap_or_default(),
            r#"["a.example.net","b.example.net"]"#
        );
    }
}
