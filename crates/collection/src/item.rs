/// The capability an item needs to live in a [`Collection`](crate::Collection).
///
/// `name` is the lookup key used by [`Collection::get`] and
/// [`Collection::search`]. It is expected, but not required, to be unique
/// within a collection. `uid` is the backend-assigned identity of the item and
/// plays no part in lookups.
///
/// [`Collection::get`]: crate::Collection::get
/// [`Collection::search`]: crate::Collection::search
pub trait NamedItem {
    /// Returns the name of the item.
    fn name(&self) -> &str;

    /// Returns the unique identifier of the item.
    fn uid(&self) -> &str;
}

impl<T> NamedItem for &T
where
    T: NamedItem + ?Sized,
{
    fn name(&self) -> &str { (**self).name() }

    fn uid(&self) -> &str { (**self).uid() }
}
