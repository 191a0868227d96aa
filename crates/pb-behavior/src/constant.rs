//! A behavior that ignores its input.

use std::marker::PhantomData;

use crate::{Behavior, BehaviorResult};

/// A [`Behavior`] that always returns a clone of the same value.
///
/// Useful as a placeholder in tests or as the initial behavior of a holder
/// before the real variant has been chosen.
#[derive(Debug)]
pub struct ConstantBehavior<I, O> {
    name:    String,
    value:   O,
    _marker: PhantomData<fn(&I)>,
}

impl<I, O: Clone> ConstantBehavior<I, O> {
    pub fn new(name: impl Into<String>, value: O) -> Self {
        Self { name: name.into(), value, _marker: PhantomData }
    }

    pub fn value(&self) -> &O {
        &self.value
    }
}

impl<I, O> Clone for ConstantBehavior<I, O>
where
    O: Clone,
{
    fn clone(&self) -> Self {
        Self { name: self.name.clone(), value: self.value.clone(), _marker: PhantomData }
    }
}

impl<I, O> Behavior for ConstantBehavior<I, O>
where
    I: 'static,
    O: Clone + Send + Sync + 'static,
{
    type Input  = I;
    type Output = O;

    fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    fn apply(&self, _input: &I) -> BehaviorResult<O> {
        Ok(self.value.clone())
    }
}
