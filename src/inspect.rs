//! Walking `source()` chains for identity checks and type recovery.
//!
//! These functions work on any `core::error::Error`, not only on errors built
//! by this crate, so wrapped errors stay transparent to code that inspects
//! chains generically.
use core::error::Error as StdError;

/// Iterator over an error and its transitive causes, outermost first.
#[derive(Clone)]
pub struct Chain<'a> {
    next: Option<&'a (dyn StdError + 'static)>,
}

impl<'a> Chain<'a> {
    #[inline]
    pub fn new(head: &'a (dyn StdError + 'static)) -> Self {
        Self { next: Some(head) }
    }
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn StdError + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

impl core::iter::FusedIterator for Chain<'_> {}

/// Whether `target` is `err` or one of its causes.
///
/// Errors are compared by address, so this answers "is it the same error
/// value", not "does it print the same message".
///
/// ```
/// use errorc::{inspect, new, Field};
///
/// let sentinel = new("not found");
/// let other = new("not found");
/// let err = sentinel.clone().with([Field::string("id", "7")]);
///
/// assert!(inspect::is(err.as_dyn(), sentinel.as_dyn()));
/// assert!(!inspect::is(err.as_dyn(), other.as_dyn()));
/// ```
pub fn is(err: &(dyn StdError + 'static), target: &(dyn StdError + 'static)) -> bool {
    let target = target as *const dyn StdError;
    Chain::new(err).any(|candidate| core::ptr::addr_eq(candidate as *const dyn StdError, target))
}

/// Finds the first error of type `T` in the chain starting at `err`.
pub fn find<'a, T>(err: &'a (dyn StdError + 'static)) -> Option<&'a T>
where
    T: StdError + 'static,
{
    Chain::new(err).find_map(|candidate| candidate.downcast_ref::<T>())
}
