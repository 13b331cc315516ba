//! Property-based test generators using proptest.
//!
//! Keys are drawn from a deliberately small alphabet so that generated
//! scripts keep touching the same keys across frames.

use nestkv_core::Command;
use proptest::prelude::*;

/// One generated step of a command script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptStep {
    /// Command to run.
    pub command: Command,
    /// First argument, empty if unused.
    pub key: String,
    /// Second argument, empty if unused.
    pub value: String,
}

impl ScriptStep {
    fn new(command: Command, key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            command,
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Strategy for generating keys from a small, colliding set.
pub fn key_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["a", "b", "c", "d"]).prop_map(str::to_owned)
}

/// Strategy for generating values.
pub fn value_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9]{1,6}"
}

/// Strategy for generating a single script step.
pub fn script_step_strategy() -> impl Strategy<Value = ScriptStep> {
    prop_oneof![
        4 => (key_strategy(), value_strategy())
            .prop_map(|(k, v)| ScriptStep::new(Command::Write, k, v)),
        3 => key_strategy().prop_map(|k| ScriptStep::new(Command::Read, k, "")),
        2 => key_strategy().prop_map(|k| ScriptStep::new(Command::Remove, k, "")),
        2 => Just(ScriptStep::new(Command::Begin, "", "")),
        2 => Just(ScriptStep::new(Command::Commit, "", "")),
        1 => Just(ScriptStep::new(Command::Discard, "", "")),
    ]
}

/// Strategy for generating a command script.
pub fn script_strategy(
    min_steps: usize,
    max_steps: usize,
) -> impl Strategy<Value = Vec<ScriptStep>> {
    prop::collection::vec(script_step_strategy(), min_steps..max_steps)
}

/// Sizing for model-checking property tests.
#[derive(Debug, Clone)]
pub struct ModelCheckConfig {
    /// Number of scripts to generate.
    pub cases: u32,
    /// Upper bound (exclusive) on steps per script.
    pub max_steps: usize,
}

impl Default for ModelCheckConfig {
    fn default() -> Self {
        Self {
            cases: 256,
            max_steps: 64,
        }
    }
}

impl ModelCheckConfig {
    /// Fewer, shorter scripts for inner-loop runs.
    #[must_use]
    pub fn quick() -> Self {
        Self {
            cases: 32,
            max_steps: 16,
        }
    }

    /// Strategy producing scripts of 1 to `max_steps - 1` steps.
    pub fn scripts(&self) -> impl Strategy<Value = Vec<ScriptStep>> {
        script_strategy(1, self.max_steps.max(2))
    }

    /// Converts to proptest config.
    #[must_use]
    pub fn to_proptest_config(&self) -> ProptestConfig {
        ProptestConfig {
            cases: self.cases,
            ..ProptestConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #![proptest_config(ModelCheckConfig::quick().to_proptest_config())]

        #[test]
        fn step_arguments_match_arity(step in script_step_strategy()) {
            let args = [&step.key, &step.value]
                .iter()
                .filter(|arg| !arg.is_empty())
                .count();
            prop_assert_eq!(args, step.command.arity());
        }

        #[test]
        fn quick_scripts_respect_max_steps(script in ModelCheckConfig::quick().scripts()) {
            prop_assert!(!script.is_empty());
            prop_assert!(script.len() < ModelCheckConfig::quick().max_steps);
        }

        #[test]
        fn values_are_single_words(value in value_strategy()) {
            prop_assert!(!value.is_empty());
            prop_assert!(!value.contains(char::is_whitespace));
        }
    }
}
