use std::fmt::Display;
use std::hash::Hash;

/// An object with an identifier that never changes for its lifetime.
pub trait HasStableId {
    type Id: Copy + Eq + Hash + Display;

    fn id(&self) -> Self::Id;
}
