//! Sequential composition of behaviors.

use crate::{Behavior, BehaviorResult, DynBehavior};

// ── Then ──────────────────────────────────────────────────────────────────────

/// Runs `first`, then feeds its output to `second`.
///
/// The first error short-circuits and is returned unchanged; `second` never
/// sees a failed input.  Construct with `a.then(b)`.
pub struct Then<A, B> {
    name:   String,
    first:  A,
    second: B,
}

impl<A, B> Then<A, B>
where
    A: Behavior,
    B: Behavior<Input = A::Output>,
{
    pub fn first(&self) -> &A {
        &self.first
    }

    pub fn second(&self) -> &B {
        &self.second
    }
}

impl<A, B> Behavior for Then<A, B>
where
    A: Behavior,
    B: Behavior<Input = A::Output>,
{
    type Input  = A::Input;
    type Output = B::Output;

    fn name(&self) -> &str {
        &self.name
    }

    fn describe(&self) -> String {
        format!("{} -> {}", self.first.describe(), self.second.describe())
    }

    fn apply(&self, input: &A::Input) -> BehaviorResult<B::Output> {
        let mid = self.first.apply(input)?;
        tracing::trace!(first = self.first.name(), second = self.second.name(), "pipeline stage");
        self.second.apply(&mid)
    }
}

// ── Extension trait ───────────────────────────────────────────────────────────

/// Adds combinators to every [`Behavior`].
pub trait BehaviorExt: Behavior + Sized {
    /// Pipe this behavior's output into `next`.
    fn then<B: Behavior<Input = Self::Output>>(self, next: B) -> Then<Self, B> {
        let name = format!("{}>{}", self.name(), next.name());
        Then { name, first: self, second: next }
    }

    /// Erase the concrete type.
    fn boxed(self) -> DynBehavior<Self::Input, Self::Output>
    where
        Self::Input:  'static,
        Self::Output: 'static,
    {
        Box::new(self)
    }
}

impl<T: Behavior + Sized> BehaviorExt for T {}
