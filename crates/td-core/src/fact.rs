//! Evaluation facts (one row surviving decision-table evaluation) and the
//! ordered list they arrive in.
//!
//! Order is significant: when the same name appears more than once, the
//! **last** occurrence wins. A [`FactList`] is never treated as a set.

use std::collections::BTreeMap;

/// Map from a date type's prefix to its resolved `yyyy-MM-ddTHH:mm` value.
///
/// Populated incrementally while a batch is resolved; later date types read
/// earlier results from it.
pub type AttributeMap = BTreeMap<String, String>;

/// A single `{name, value, reconfigurable}` evaluation fact.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fact {
    /// Field name, e.g. `dueDateOrigin`.
    pub name: String,
    /// Raw field value.
    pub value: String,
    /// Whether a reconfiguration pass may recompute from this fact.
    #[cfg_attr(feature = "serde", serde(rename = "canReconfigure", default))]
    pub reconfigurable: bool,
}

impl Fact {
    /// Create a fact that may not be reconfigured.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            reconfigurable: false,
        }
    }

    /// Create a reconfigurable fact.
    pub fn reconfigurable(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, value).with_reconfigurable(true)
    }

    /// Set the reconfigurable flag.
    pub fn with_reconfigurable(mut self, reconfigurable: bool) -> Self {
        self.reconfigurable = reconfigurable;
        self
    }

    /// Return the trimmed value, or `None` if it is blank.
    pub fn non_blank_value(&self) -> Option<&str> {
        let v = self.value.trim();
        (!v.is_empty()).then_some(v)
    }
}

/// An ordered list of facts with last-occurrence-wins lookups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FactList {
    facts: Vec<Fact>,
}

impl FactList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fact.
    pub fn push(&mut self, fact: Fact) {
        self.facts.push(fact);
    }

    /// Number of facts.
    pub fn len(&self) -> usize {
        self.facts.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    /// Iterate in list order.
    pub fn iter(&self) -> std::slice::Iter<'_, Fact> {
        self.facts.iter()
    }

    /// The underlying slice.
    pub fn as_slice(&self) -> &[Fact] {
        &self.facts
    }

    /// The last fact named `name`, regardless of its flag.
    pub fn last(&self, name: &str) -> Option<&Fact> {
        self.facts.iter().rev().find(|f| f.name == name)
    }

    /// The last fact named `name`, if it is marked reconfigurable.
    ///
    /// A later fixed fact hides every earlier reconfigurable one.
    pub fn last_reconfigurable(&self, name: &str) -> Option<&Fact> {
        self.last(name).filter(|f| f.reconfigurable)
    }

    /// Non-blank value of the last fact named `name`.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.last(name).and_then(Fact::non_blank_value)
    }

    /// A view that sees either every fact or only the reconfigurable ones.
    pub fn view(&self, reconfigurable_only: bool) -> FactView<'_> {
        FactView {
            facts: self,
            reconfigurable_only,
        }
    }
}

impl From<Vec<Fact>> for FactList {
    fn from(facts: Vec<Fact>) -> Self {
        Self { facts }
    }
}

impl FromIterator<Fact> for FactList {
    fn from_iter<I: IntoIterator<Item = Fact>>(iter: I) -> Self {
        Self {
            facts: iter.into_iter().collect(),
        }
    }
}

impl Extend<Fact> for FactList {
    fn extend<I: IntoIterator<Item = Fact>>(&mut self, iter: I) {
        self.facts.extend(iter);
    }
}

impl<'a> IntoIterator for &'a FactList {
    type Item = &'a Fact;
    type IntoIter = std::slice::Iter<'a, Fact>;

    fn into_iter(self) -> Self::IntoIter {
        self.facts.iter()
    }
}

/// Read-only lookups over a [`FactList`], optionally restricted to the
/// reconfigurable facts.
///
/// A reconfiguration pass reads every field through a restricted view, so a
/// field that may not change is invisible to it.
#[derive(Debug, Clone, Copy)]
pub struct FactView<'a> {
    facts: &'a FactList,
    reconfigurable_only: bool,
}

impl<'a> FactView<'a> {
    /// Whether this view only sees reconfigurable facts.
    pub fn is_reconfigurable_only(&self) -> bool {
        self.reconfigurable_only
    }

    /// The last fact named `name`. A reconfigurable-only view returns it
    /// only if it is reconfigurable.
    pub fn fact(&self, name: &str) -> Option<&'a Fact> {
        if self.reconfigurable_only {
            self.facts.last_reconfigurable(name)
        } else {
            self.facts.last(name)
        }
    }

    /// Non-blank value of the last visible fact named `name`.
    pub fn value(&self, name: &str) -> Option<&'a str> {
        self.fact(name).and_then(Fact::non_blank_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn facts() -> FactList {
        FactList::from(vec![
            Fact::new("dueDate", "2022-10-13T16:00"),
            Fact::reconfigurable("dueDateTime", "18:00"),
            Fact::new("dueDate", "2022-10-15T19:00"),
            Fact::new("dueDateTime", "20:00"),
        ])
    }

    #[test]
    fn last_occurrence_wins() {
        let list = facts();
        assert_eq!(list.value("dueDate"), Some("2022-10-15T19:00"));
        assert_eq!(list.value("dueDateTime"), Some("20:00"));
        assert_eq!(list.value("priorityDate"), None);
    }

    #[test]
    fn reconfigurable_view_sees_only_a_reconfigurable_last_fact() {
        let list = facts();
        let view = list.view(true);
        assert!(view.is_reconfigurable_only());
        // the fixed 20:00 overrides the earlier reconfigurable 18:00
        assert_eq!(view.value("dueDateTime"), None);
        assert_eq!(view.value("dueDate"), None);
        assert_eq!(list.view(false).value("dueDateTime"), Some("20:00"));

        let mut list = list;
        list.push(Fact::reconfigurable("dueDateTime", "21:00"));
        assert_eq!(list.view(true).value("dueDateTime"), Some("21:00"));
    }

    #[test]
    fn blank_last_value_hides_earlier_ones() {
        let list = FactList::from(vec![
            Fact::new("dueDate", "2022-10-13T16:00"),
            Fact::new("dueDate", "  "),
        ]);
        assert_eq!(list.value("dueDate"), None);
        assert!(list.last("dueDate").is_some());
    }

    #[test]
    fn collects_and_iterates_in_order() {
        let list: FactList = facts().iter().cloned().collect();
        let names: Vec<&str> = list.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["dueDate", "dueDateTime", "dueDate", "dueDateTime"]);
        assert_eq!(list.len(), 4);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_can_reconfigure_flag() {
        let json = r#"[
            {"name": "dueDate", "value": "2022-10-13T16:00", "canReconfigure": true},
            {"name": "dueDateTime", "value": "18:00"}
        ]"#;
        let facts: Vec<Fact> = serde_json::from_str(json).unwrap();
        assert!(facts[0].reconfigurable);
        assert!(!facts[1].reconfigurable);
    }
}
