//! Left-to-right composition of curried steps.

use std::fmt;
use std::sync::Arc;

use crate::dict::Dict;

/// Feeds a borrowed value into a one-argument function.
///
/// ```
/// use tally_dict::{curried, Dict, Pipe};
///
/// let dict = Dict::singleton("one", 1)
///     .pipe(curried::insert("two", 2))
///     .pipe(curried::remove("one"));
/// assert_eq!(dict.keys().len(), 1);
/// ```
pub trait Pipe {
    fn pipe<R>(&self, f: impl FnOnce(&Self) -> R) -> R {
        f(self)
    }
}

impl<T: Clone> Pipe for Dict<T> {}

type Step<T> = Arc<dyn Fn(&Dict<T>) -> Dict<T> + Send + Sync>;

/// A reusable sequence of `Dict -> Dict` steps, run in the order they were added.
pub struct Pipeline<T> {
    steps: Vec<Step<T>>,
}

impl<T: Clone> Pipeline<T> {
    pub fn new() -> Self {
        Pipeline { steps: Vec::new() }
    }

    /// Returns a new pipeline with `step` appended; `self` is unchanged.
    pub fn then(&self, step: impl Fn(&Dict<T>) -> Dict<T> + Send + Sync + 'static) -> Self {
        let mut steps = self.steps.clone();
        steps.push(Arc::new(step));
        Pipeline { steps }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn run(&self, input: &Dict<T>) -> Dict<T> {
        self.steps
            .iter()
            .fold(input.clone(), |dict, step| step(&dict))
    }
}

impl<T: Clone> Default for Pipeline<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Pipeline<T> {
    fn clone(&self) -> Self {
        Pipeline {
            steps: self.steps.clone(),
        }
    }
}

impl<T> fmt::Debug for Pipeline<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("steps", &self.steps.len())
            .finish()
    }
}
