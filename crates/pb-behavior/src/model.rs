//! The `Behavior` trait — the main extension point for user code.

use std::sync::Arc;

use crate::BehaviorResult;

/// An interchangeable unit of logic with a fixed operation contract.
///
/// Every variant of a family (all shipping strategies, all payment
/// processors, …) shares the same `Input` and `Output` types so that a holder
/// can swap one for another without changing its own code.
///
/// # Errors
///
/// A behavior that cannot handle its input returns a [`BehaviorError`]
/// rather than a fallback value.  Holders and registries pass errors through
/// unchanged.
///
/// # Thread safety
///
/// `apply` takes `&self` and the trait requires `Send + Sync`, so one
/// instance may be shared across holders and threads.  A behavior that keeps
/// state (an injected sink, a counter) must synchronize it internally.
///
/// # Example
///
/// ```rust
/// use pb_behavior::{Behavior, BehaviorError, BehaviorResult};
///
/// struct Doubler;
///
/// impl Behavior for Doubler {
///     type Input  = i64;
///     type Output = i64;
///
///     fn name(&self) -> &str { "doubler" }
///
///     fn apply(&self, input: &i64) -> BehaviorResult<i64> {
///         input
///             .checked_mul(2)
///             .ok_or_else(|| BehaviorError::validation(self.name(), "overflow"))
///     }
/// }
///
/// assert_eq!(Doubler.apply(&21).unwrap(), 42);
/// ```
///
/// [`BehaviorError`]: crate::BehaviorError
pub trait Behavior: Send + Sync + 'static {
    type Input;
    type Output;

    /// Stable identifier of this variant, used in logs and errors.
    fn name(&self) -> &str;

    /// Human-readable description.
    ///
    /// Defaults to [`name`][Self::name].  Wrappers extend their inner
    /// description in the order they were applied.
    fn describe(&self) -> String {
        self.name().to_owned()
    }

    /// Perform the operation.
    fn apply(&self, input: &Self::Input) -> BehaviorResult<Self::Output>;
}

/// A boxed behavior with its contract fixed to `I → O`.
///
/// Use this as the registry value type when one registry holds several
/// concrete behavior types.
pub type DynBehavior<I, O> = Box<dyn Behavior<Input = I, Output = O>>;

impl<B: Behavior + ?Sized> Behavior for Box<B> {
    type Input  = B::Input;
    type Output = B::Output;

    #[inline]
    fn name(&self) -> &str {
        (**self).name()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }

    #[inline]
    fn apply(&self, input: &Self::Input) -> BehaviorResult<Self::Output> {
        (**self).apply(input)
    }
}

impl<B: Behavior + ?Sized> Behavior for Arc<B> {
    type Input  = B::Input;
    type Output = B::Output;

    #[inline]
    fn name(&self) -> &str {
        (**self).name()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }

    #[inline]
    fn apply(&self, input: &Self::Input) -> BehaviorResult<Self::Output> {
        (**self).apply(input)
    }
}
