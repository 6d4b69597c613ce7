//! Ordered (predicate, outcome) tables where the first satisfied rule wins

use std::fmt;

/// What a decision table settles on for one branch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Run { label: String, command: String },
    Skip { label: String, reason: String },
}

impl Action {
    pub fn run(label: impl Into<String>, command: impl Into<String>) -> Self {
        Action::Run {
            label: label.into(),
            command: command.into(),
        }
    }

    pub fn skip(label: impl Into<String>, reason: impl Into<String>) -> Self {
        Action::Skip {
            label: label.into(),
            reason: reason.into(),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Action::Run { label, .. } | Action::Skip { label, .. } => label,
        }
    }

    pub fn command(&self) -> Option<&str> {
        match self {
            Action::Run { command, .. } => Some(command),
            Action::Skip { .. } => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Run { label, command } => write!(f, "{label}: {command}"),
            Action::Skip { label, reason } => write!(f, "{label}: skipped ({reason})"),
        }
    }
}

pub struct Rule<C> {
    pub name: &'static str,
    pub when: fn(&C) -> bool,
    pub then: fn(&C) -> Action,
}

impl<C> Rule<C> {
    pub fn new(name: &'static str, when: fn(&C) -> bool, then: fn(&C) -> Action) -> Self {
        Self { name, when, then }
    }
}

impl<C> fmt::Debug for Rule<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish()
    }
}

#[derive(Debug)]
pub struct DecisionTable<C> {
    rules: Vec<Rule<C>>,
}

impl<C> DecisionTable<C> {
    pub fn new(rules: Vec<Rule<C>>) -> Self {
        Self { rules }
    }

    /// Name of the first rule whose predicate holds
    pub fn matching_rule(&self, ctx: &C) -> Option<&'static str> {
        self.rules
            .iter()
            .find(|rule| (rule.when)(ctx))
            .map(|rule| rule.name)
    }

    pub fn evaluate(&self, ctx: &C) -> Option<Action> {
        self.rules
            .iter()
            .find(|rule| (rule.when)(ctx))
            .map(|rule| (rule.then)(ctx))
    }

    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.name).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> DecisionTable<u32> {
        DecisionTable::new(vec![
            Rule::new("big", |n: &u32| *n > 100, |_| Action::run("big", "echo big")),
            Rule::new("even", |n: &u32| n % 2 == 0, |n: &u32| Action::run("even", format!("echo {n}"))),
            Rule::new("odd-small", |n: &u32| *n < 10, |_| Action::skip("small", "too small")),
        ])
    }

    #[test]
    fn test_first_match_wins() {
        let table = table();
        assert_eq!(table.evaluate(&200), Some(Action::run("big", "echo big")));
        assert_eq!(table.matching_rule(&200), Some("big"));
        assert_eq!(table.evaluate(&4), Some(Action::run("even", "echo 4")));
        assert_eq!(table.evaluate(&3), Some(Action::skip("small", "too small")));
    }

    #[test]
    fn test_no_match_yields_none() {
        assert_eq!(table().evaluate(&11), None);
        assert_eq!(table().matching_rule(&11), None);
    }

    #[test]
    fn test_rule_order_is_preserved() {
        assert_eq!(table().rule_names(), vec!["big", "even", "odd-small"]);
    }

    #[test]
    fn test_action_accessors() {
        let run = Action::run("Pest PHP", "vendor/bin/pest --parallel");
        assert_eq!(run.label(), "Pest PHP");
        assert_eq!(run.command(), Some("vendor/bin/pest --parallel"));
        assert_eq!(run.to_string(), "Pest PHP: vendor/bin/pest --parallel");

        let skip = Action::skip("PHPUnit", "no tests");
        assert_eq!(skip.command(), None);
        assert_eq!(skip.to_string(), "PHPUnit: skipped (no tests)");
    }
}
