//! Core behavior trait.
//!
//! The trait is generic over a context type `C`, allowing nodes to read the
//! decision inputs and record their result on the context.

use crate::Status;

/// Boxed behavior node that may borrow data living at least as long as `'n`.
pub type Node<'n, C> = Box<dyn Behavior<C> + 'n>;

/// A behavior tree node that can be evaluated against a context.
pub trait Behavior<C> {
    /// Evaluate this behavior node against the given context.
    ///
    /// Returns `Status::Success` if the behavior succeeded and
    /// `Status::Failure` otherwise.
    fn tick(&self, ctx: &mut C) -> Status;
}

impl<C, B> Behavior<C> for Box<B>
where
    B: Behavior<C> + ?Sized,
{
    #[inline]
    fn tick(&self, ctx: &mut C) -> Status {
        (**self).tick(ctx)
    }
}
