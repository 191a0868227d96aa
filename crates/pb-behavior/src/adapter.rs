//! Adapt a plain closure to the [`Behavior`] contract.

use std::fmt;
use std::marker::PhantomData;

use crate::{Behavior, BehaviorResult};

/// A [`Behavior`] backed by a named closure.
///
/// Handy for wrapping an existing function whose signature already matches
/// the contract, or for one-off variants in tests.
///
/// ```rust
/// use pb_behavior::{Behavior, FnBehavior};
///
/// let shout = FnBehavior::new("shout", |s: &String| Ok(s.to_uppercase()));
/// assert_eq!(shout.apply(&"hi".to_owned()).unwrap(), "HI");
/// ```
pub struct FnBehavior<F, I, O> {
    name:    String,
    f:       F,
    _marker: PhantomData<fn(&I) -> O>,
}

impl<F, I, O> FnBehavior<F, I, O>
where
    F: Fn(&I) -> BehaviorResult<O> + Send + Sync + 'static,
{
    pub fn new(name: impl Into<String>, f: F) -> Self {
        Self { name: name.into(), f, _marker: PhantomData }
    }
}

impl<F, I, O> Behavior for FnBehavior<F, I, O>
where
    F: Fn(&I) -> BehaviorResult<O> + Send + Sync + 'static,
    I: 'static,
    O: 'static,
{
    type Input  = I;
    type Output = O;

    fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    fn apply(&self, input: &I) -> BehaviorResult<O> {
        (self.f)(input)
    }
}

impl<F, I, O> fmt::Debug for FnBehavior<F, I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnBehavior").field("name", &self.name).finish_non_exhaustive()
    }
}
