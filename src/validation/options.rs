//! Tunables for the extended checks (timescale order, boundary node, action types).
use crate::store::{DataType, Timescale, ID_SEPARATOR};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Timescale tags, fastest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimescaleOrder(Vec<Timescale>);

impl Default for TimescaleOrder {
    fn default() -> Self {
        Self::new(["social", "fast", "medium", "slow", "glacial"])
    }
}

impl TimescaleOrder {
    pub fn new<I, S>(fastest_first: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(fastest_first.into_iter().map(|s| Timescale(s.into())).collect())
    }

    pub fn rank(&self, timescale: &Timescale) -> Option<usize> {
        self.0.iter().position(|t| t == timescale)
    }

    /// `None` when either tag is outside the order.
    pub fn compare(&self, a: &Timescale, b: &Timescale) -> Option<Ordering> {
        Some(self.rank(a)?.cmp(&self.rank(b)?))
    }

    pub fn is_faster(&self, a: &Timescale, b: &Timescale) -> bool {
        self.compare(a, b) == Some(Ordering::Less)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CheckOptions {
    pub timescales: TimescaleOrder,
    /// Id of the external boundary node that legitimately closes feedback loops.
    pub environment: String,
    /// Type segments that mark a data type as an action.
    pub action_markers: Vec<String>,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            timescales: TimescaleOrder::default(),
            environment: "environment".to_string(),
            action_markers: vec!["action".to_string()],
        }
    }
}

impl CheckOptions {
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Boundary nodes match by id, or by the last segment of a composed id.
    pub fn is_environment(&self, id: &str) -> bool {
        id == self.environment || id.rsplit(ID_SEPARATOR).next() == Some(self.environment.as_str())
    }

    pub fn is_action(&self, data_type: &DataType) -> bool {
        data_type
            .as_str()
            .split('-')
            .any(|segment| self.action_markers.iter().any(|m| m == segment))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("action", true)]
    #[case("policy-action", true)]
    #[case("action-plan", true)]
    #[case("transaction", false)]
    #[case("plan", false)]
    fn test_action_types(#[case] tag: &str, #[case] expected: bool) {
        assert_eq!(CheckOptions::default().is_action(&DataType::new(tag)), expected);
    }

    #[rstest]
    #[case("environment", true)]
    #[case("alpha/environment", true)]
    #[case("alpha→beta/alpha/environment", true)]
    #[case("environment-model", false)]
    #[case("C-world", false)]
    fn test_environment_ids(#[case] id: &str, #[case] expected: bool) {
        assert_eq!(CheckOptions::default().is_environment(id), expected);
    }

    #[rstest]
    #[case("social", "fast", Some(Ordering::Less))]
    #[case("glacial", "medium", Some(Ordering::Greater))]
    #[case("slow", "slow", Some(Ordering::Equal))]
    #[case("lunar", "slow", None)]
    fn test_default_order(#[case] a: &str, #[case] b: &str, #[case] expected: Option<Ordering>) {
        let order = TimescaleOrder::default();
        assert_eq!(order.compare(&Timescale::new(a), &Timescale::new(b)), expected);
    }

    #[test]
    fn test_options_from_json_keep_defaults() {
        let opts = CheckOptions::from_json_str(r#"{"timescales": ["tick", "epoch"], "environment": "world"}"#).unwrap();
        assert!(opts.timescales.is_faster(&Timescale::new("tick"), &Timescale::new("epoch")));
        assert!(opts.is_environment("world"));
        assert_eq!(opts.action_markers, vec!["action".to_string()]);
    }
}
