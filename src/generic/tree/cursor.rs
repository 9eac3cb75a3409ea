use crate::generic::{
	node::{Address, Node},
	RbTree, RbTreeExt,
};
use cc_traits::{SimpleCollectionRef, Slab};
use std::fmt;

/// Bidirectional cursor over the elements of a [`RbTree`].
///
/// A cursor points either to an element of the tree or to the end position.
/// Moving forward past the last element reaches the end position,
/// and moving forward again wraps to the first element (and symmetrically backward).
///
/// # Example
///
/// ```
/// use rbtree_slab::{RbTree, generic::key::{Identity, Natural}};
///
/// let tree: RbTree<i32, Identity, Natural> = [1, 2, 3].iter().copied().collect();
///
/// let mut cursor = tree.cursor_end();
/// assert_eq!(cursor.get(), None);
/// cursor.move_prev();
/// assert_eq!(cursor.get(), Some(&3));
/// cursor.move_next();
/// assert!(cursor.is_end());
/// ```
pub struct Cursor<'a, V, X, L, C> {
	/// The tree reference.
	tree: &'a RbTree<V, X, L, C>,

	/// Current position.
	addr: Address,
}

impl<'a, V, X, L, C: Slab<Node<V>>> Cursor<'a, V, X, L, C>
where
	C: SimpleCollectionRef,
{
	#[inline]
	pub fn new(tree: &'a RbTree<V, X, L, C>, addr: Address) -> Self {
		Cursor { tree, addr }
	}

	#[inline]
	pub fn address(&self) -> Address {
		self.addr
	}

	#[inline]
	pub fn is_end(&self) -> bool {
		self.addr.is_end()
	}

	/// Returns the element under the cursor, or `None` at the end position.
	#[inline]
	pub fn get(&self) -> Option<&'a V> {
		self.tree.get(self.addr)
	}

	/// Moves to the in-order successor.
	#[inline]
	pub fn move_next(&mut self) {
		self.addr = self.tree.next_address(self.addr)
	}

	/// Moves to the in-order predecessor.
	#[inline]
	pub fn move_prev(&mut self) {
		self.addr = self.tree.previous_address(self.addr)
	}

	/// Moves by `n` positions, forward if `n` is positive, backward otherwise.
	#[inline]
	pub fn advance(&mut self, n: isize) {
		self.addr = self.tree.advance(self.addr, n)
	}

	/// Number of forward moves needed to reach `other`.
	#[inline]
	pub fn distance(&self, other: &Self) -> usize {
		self.tree.distance(self.addr, other.addr)
	}
}

impl<'a, V, X, L, C> Clone for Cursor<'a, V, X, L, C> {
	#[inline]
	fn clone(&self) -> Self {
		*self
	}
}

impl<'a, V, X, L, C> Copy for Cursor<'a, V, X, L, C> {}

impl<'a, V, X, L, C> PartialEq for Cursor<'a, V, X, L, C> {
	#[inline]
	fn eq(&self, other: &Self) -> bool {
		std::ptr::eq(self.tree, other.tree) && self.addr == other.addr
	}
}

impl<'a, V, X, L, C> Eq for Cursor<'a, V, X, L, C> {}

impl<'a, V, X, L, C> fmt::Debug for Cursor<'a, V, X, L, C> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "Cursor({})", self.addr)
	}
}

/// Reverse adapter over a [`Cursor`].
///
/// Moving forward moves the base cursor backward and conversely.
/// The element under a reverse cursor is the predecessor of its base cursor's position,
/// so that the reverse cursor built on the end position designates the last element,
/// and the one built on the first element is past the end of the reversed sequence.
pub struct RevCursor<'a, V, X, L, C> {
	base: Cursor<'a, V, X, L, C>,
}

impl<'a, V, X, L, C: Slab<Node<V>>> RevCursor<'a, V, X, L, C>
where
	C: SimpleCollectionRef,
{
	#[inline]
	pub fn new(base: Cursor<'a, V, X, L, C>) -> Self {
		RevCursor { base }
	}

	/// Returns the underlying cursor.
	#[inline]
	pub fn base(&self) -> Cursor<'a, V, X, L, C> {
		self.base
	}

	/// Returns `true` if the cursor is past the end of the reversed sequence.
	#[inline]
	pub fn is_end(&self) -> bool {
		self.get().is_none()
	}

	/// Returns the element under the cursor.
	#[inline]
	pub fn get(&self) -> Option<&'a V> {
		let mut c = self.base;
		c.move_prev();
		c.get()
	}

	#[inline]
	pub fn move_next(&mut self) {
		self.base.move_prev()
	}

	#[inline]
	pub fn move_prev(&mut self) {
		self.base.move_next()
	}

	#[inline]
	pub fn advance(&mut self, n: isize) {
		self.base.advance(-n)
	}

	/// Number of forward moves needed to reach `other`.
	#[inline]
	pub fn distance(&self, other: &Self) -> usize {
		other.base.distance(&self.base)
	}
}

impl<'a, V, X, L, C> Clone for RevCursor<'a, V, X, L, C> {
	#[inline]
	fn clone(&self) -> Self {
		*self
	}
}

impl<'a, V, X, L, C> Copy for RevCursor<'a, V, X, L, C> {}

impl<'a, V, X, L, C> PartialEq for RevCursor<'a, V, X, L, C> {
	#[inline]
	fn eq(&self, other: &Self) -> bool {
		self.base == other.base
	}
}

impl<'a, V, X, L, C> Eq for RevCursor<'a, V, X, L, C> {}

impl<'a, V, X, L, C> fmt::Debug for RevCursor<'a, V, X, L, C> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "RevCursor({})", self.base.addr)
	}
}
