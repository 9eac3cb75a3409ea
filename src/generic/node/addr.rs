use std::fmt;

/// Position in a red-black tree.
///
/// A position is either the identifier of a node in the tree's slab, or the
/// distinguished [`Address::END`] position, which plays the role of the header
/// sentinel: it follows the maximum and precedes the minimum.
/// We write `@id` the address of the node `id` and `@end` the end position.
///
/// ```text
///     ┌────────────────────────────────────┐
///     │ @end   leftmost   root   rightmost │
///     └───────────┼────────┼────────┼──────┘
///                 │        │        │
///                 │        v        │
///                 │     ┌────┐      │
///                 │     │ @0 │      │
///                 │     └────┘      │
///                 │    ╱      ╲     │
///                 v   ╱        ╲    v
///              ┌────┐            ┌────┐
///              │ @2 │            │ @1 │
///              └────┘            └────┘
///
///        in-order ring:  @end -> @2 -> @0 -> @1 -> @end
/// ```
///
/// ## Validity
/// An address is *valid* in a given tree if it is `END` or if it identifies a node
/// currently linked in the tree.
/// Erasing an element invalidates the address of that element only:
/// other nodes may be relinked but are never moved to another slot.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address(usize);

impl Address {
	/// The end position.
	pub const END: Address = Address(usize::MAX);

	#[inline]
	pub fn new(id: usize) -> Address {
		debug_assert!(id != usize::MAX);
		Address(id)
	}

	#[inline]
	pub fn is_end(&self) -> bool {
		self.0 == usize::MAX
	}

	/// Returns the identifier of the addressed node, or `None` for the end position.
	#[inline]
	pub fn id(&self) -> Option<usize> {
		if self.is_end() {
			None
		} else {
			Some(self.0)
		}
	}
}

impl From<Option<usize>> for Address {
	#[inline]
	fn from(id: Option<usize>) -> Address {
		match id {
			Some(id) => Address::new(id),
			None => Address::END,
		}
	}
}

impl fmt::Display for Address {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self.id() {
			Some(id) => write!(f, "@{}", id),
			None => write!(f, "@end"),
		}
	}
}

impl fmt::Debug for Address {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		fmt::Display::fmt(self, f)
	}
}
