//! Reference model of the store.
//!
//! The model keeps one full copy of the visible state per open transaction.
//! `begin` clones the top copy, `commit` replaces the parent copy with the
//! child's, `discard` drops the top copy. It is slow and obviously correct,
//! which makes it a good oracle for the frame-log engine.

use crate::generators::ScriptStep;
use nestkv_core::{Command, CoreError, CoreResult, Store};
use nestkv_storage::MapBackend;
use std::collections::HashMap;

/// Snapshot-per-frame model of the store's observable behaviour.
#[derive(Debug, Clone)]
pub struct ReferenceModel {
    /// Visible state per level; index 0 is the committed state.
    levels: Vec<HashMap<String, String>>,
}

impl Default for ReferenceModel {
    fn default() -> Self {
        Self {
            levels: vec![HashMap::new()],
        }
    }
}

impl ReferenceModel {
    /// Creates an empty model.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of open transactions.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.levels.len() - 1
    }

    /// Returns the committed state.
    #[must_use]
    pub fn committed(&self) -> &HashMap<String, String> {
        &self.levels[0]
    }

    fn top(&self) -> &HashMap<String, String> {
        &self.levels[self.depth()]
    }

    fn top_mut(&mut self) -> &mut HashMap<String, String> {
        let depth = self.depth();
        &mut self.levels[depth]
    }

    /// Applies one step, returning what the store should return.
    pub fn apply(&mut self, command: Command, key: &str, value: &str) -> CoreResult<String> {
        match command {
            Command::Write => {
                self.top_mut().insert(key.to_string(), value.to_string());
                Ok(String::new())
            }
            Command::Read => self
                .top()
                .get(key)
                .cloned()
                .ok_or_else(|| CoreError::key_not_found(key)),
            Command::Remove => self
                .top_mut()
                .remove(key)
                .map(|_| String::new())
                .ok_or_else(|| CoreError::key_not_found(key)),
            Command::Begin => {
                let snapshot = self.top().clone();
                self.levels.push(snapshot);
                Ok(String::new())
            }
            Command::Commit => {
                if self.depth() == 0 {
                    return Err(CoreError::NoActiveTransaction);
                }
                let child = self.levels.pop().unwrap_or_default();
                *self.top_mut() = child;
                Ok(String::new())
            }
            Command::Discard => {
                if self.depth() > 0 {
                    self.levels.pop();
                }
                Ok(String::new())
            }
        }
    }
}

/// Returns the durable contents of a store as a plain map.
pub fn durable_contents<B: MapBackend>(store: &Store<B>) -> HashMap<String, String> {
    let durable = store.durable();
    durable
        .keys()
        .into_iter()
        .filter_map(|key| {
            let value = durable.get(&key)?.to_string();
            Some((key, value))
        })
        .collect()
}

/// A point at which the store and the model disagreed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Divergence {
    /// A step returned different results.
    Step {
        /// Index of the step in the script.
        index: usize,
        /// The step itself.
        step: ScriptStep,
        /// What the store returned.
        store: CoreResult<String>,
        /// What the model returned.
        model: CoreResult<String>,
    },
    /// The number of open transactions differs after the script.
    Depth {
        /// Store depth.
        store: usize,
        /// Model depth.
        model: usize,
    },
    /// The committed state differs after the script.
    Committed {
        /// Store's durable contents.
        store: HashMap<String, String>,
        /// Model's committed level.
        model: HashMap<String, String>,
    },
}

/// Compares the end state of a store with that of a model.
///
/// # Errors
///
/// Returns [`Divergence::Depth`] or [`Divergence::Committed`] on mismatch.
pub fn check_final_state<B: MapBackend>(
    store: &Store<B>,
    model: &ReferenceModel,
) -> Result<(), Divergence> {
    if store.depth() != model.depth() {
        return Err(Divergence::Depth {
            store: store.depth(),
            model: model.depth(),
        });
    }

    let committed = durable_contents(store);
    if &committed != model.committed() {
        return Err(Divergence::Committed {
            store: committed,
            model: model.committed().clone(),
        });
    }
    Ok(())
}

/// Runs `script` against a fresh store and a fresh model side by side.
///
/// # Errors
///
/// Returns the first step whose results differ, or the end-state mismatch
/// if every step agreed but depth or committed state did not.
pub fn check_against_model(script: &[ScriptStep]) -> Result<(), Divergence> {
    let mut store = Store::new();
    let mut model = ReferenceModel::new();

    for (index, step) in script.iter().enumerate() {
        let got = store.execute(step.command, &step.key, &step.value);
        let want = model.apply(step.command, &step.key, &step.value);
        if got != want {
            return Err(Divergence::Step {
                index,
                step: step.clone(),
                store: got,
                model: want,
            });
        }
    }

    check_final_state(&store, &model)
}
