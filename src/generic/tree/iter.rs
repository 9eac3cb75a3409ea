use crate::generic::{
	key::{Compare, KeyOfValue},
	node::{Address, Node},
	RbTree, RbTreeExt,
};
use cc_traits::{SimpleCollectionMut, SimpleCollectionRef, Slab, SlabMut};
use std::iter::{DoubleEndedIterator, ExactSizeIterator, FusedIterator};

/// Iterator over the values of a [`RbTree`], in ascending order.
pub struct Iter<'a, V, X, L, C> {
	/// The tree reference.
	tree: &'a RbTree<V, X, L, C>,

	/// Address of the next item.
	addr: Address,

	/// Address following the last item.
	end: Address,

	/// Number of remaining items.
	len: usize,
}

impl<'a, V, X, L, C: Slab<Node<V>>> Iter<'a, V, X, L, C>
where
	C: SimpleCollectionRef,
{
	#[inline]
	pub(crate) fn new(tree: &'a RbTree<V, X, L, C>) -> Self {
		Iter {
			tree,
			addr: tree.begin(),
			end: Address::END,
			len: tree.len(),
		}
	}
}

impl<'a, V, X, L, C: Slab<Node<V>>> Iterator for Iter<'a, V, X, L, C>
where
	C: SimpleCollectionRef,
{
	type Item = &'a V;

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		(self.len, Some(self.len))
	}

	#[inline]
	fn next(&mut self) -> Option<&'a V> {
		if self.len > 0 {
			self.len -= 1;

			let value = self.tree.get(self.addr).unwrap();
			self.addr = self.tree.next_address(self.addr);
			Some(value)
		} else {
			None
		}
	}
}

impl<'a, V, X, L, C: Slab<Node<V>>> FusedIterator for Iter<'a, V, X, L, C> where C: SimpleCollectionRef {}
impl<'a, V, X, L, C: Slab<Node<V>>> ExactSizeIterator for Iter<'a, V, X, L, C> where
	C: SimpleCollectionRef
{
}

impl<'a, V, X, L, C: Slab<Node<V>>> DoubleEndedIterator for Iter<'a, V, X, L, C>
where
	C: SimpleCollectionRef,
{
	#[inline]
	fn next_back(&mut self) -> Option<&'a V> {
		if self.len > 0 {
			self.len -= 1;

			self.end = self.tree.previous_address(self.end);
			self.tree.get(self.end)
		} else {
			None
		}
	}
}

impl<'a, V, X, L, C: Slab<Node<V>>> IntoIterator for &'a RbTree<V, X, L, C>
where
	C: SimpleCollectionRef,
{
	type IntoIter = Iter<'a, V, X, L, C>;
	type Item = &'a V;

	#[inline]
	fn into_iter(self) -> Iter<'a, V, X, L, C> {
		self.iter()
	}
}

/// Iterator over the values of an address range `[first, last)` of a [`RbTree`].
///
/// This `struct` is created by the [`range`](RbTree::range),
/// [`equal_range_iter`](RbTree::equal_range_iter) and
/// [`iter_between`](RbTree::iter_between) methods.
pub struct Range<'a, V, X, L, C> {
	/// The tree reference.
	tree: &'a RbTree<V, X, L, C>,

	/// Address of the next item.
	addr: Address,

	/// Address following the last item.
	end: Address,
}

impl<'a, V, X, L, C: Slab<Node<V>>> Range<'a, V, X, L, C>
where
	C: SimpleCollectionRef,
{
	#[inline]
	pub(crate) fn between(tree: &'a RbTree<V, X, L, C>, first: Address, last: Address) -> Self {
		Range {
			tree,
			addr: first,
			end: last,
		}
	}
}

impl<'a, V, X, L, C: Slab<Node<V>>> Iterator for Range<'a, V, X, L, C>
where
	C: SimpleCollectionRef,
{
	type Item = &'a V;

	#[inline]
	fn next(&mut self) -> Option<&'a V> {
		if self.addr != self.end {
			let value = self.tree.get(self.addr)?;
			self.addr = self.tree.next_address(self.addr);
			Some(value)
		} else {
			None
		}
	}
}

impl<'a, V, X, L, C: Slab<Node<V>>> FusedIterator for Range<'a, V, X, L, C> where C: SimpleCollectionRef
{}

impl<'a, V, X, L, C: Slab<Node<V>>> DoubleEndedIterator for Range<'a, V, X, L, C>
where
	C: SimpleCollectionRef,
{
	#[inline]
	fn next_back(&mut self) -> Option<&'a V> {
		if self.addr != self.end {
			self.end = self.tree.previous_address(self.end);
			self.tree.get(self.end)
		} else {
			None
		}
	}
}

/// An owning iterator over the values of a [`RbTree`], in ascending order.
///
/// This `struct` is created by the [`into_iter`] method on [`RbTree`]
/// (provided by the `IntoIterator` trait). See its documentation for more.
///
/// [`into_iter`]: IntoIterator::into_iter
pub struct IntoIter<V, X, L, C> {
	/// The tree, drained from both ends.
	tree: RbTree<V, X, L, C>,
}

impl<V, X, L, C: SlabMut<Node<V>>> IntoIter<V, X, L, C>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	#[inline]
	pub fn new(tree: RbTree<V, X, L, C>) -> Self {
		IntoIter { tree }
	}
}

impl<V, X: KeyOfValue<V>, L: Compare<X::Key>, C: SlabMut<Node<V>>> FusedIterator
	for IntoIter<V, X, L, C>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
}

impl<V, X: KeyOfValue<V>, L: Compare<X::Key>, C: SlabMut<Node<V>>> ExactSizeIterator
	for IntoIter<V, X, L, C>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
}

impl<V, X: KeyOfValue<V>, L: Compare<X::Key>, C: SlabMut<Node<V>>> Iterator for IntoIter<V, X, L, C>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	type Item = V;

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		(self.tree.len(), Some(self.tree.len()))
	}

	#[inline]
	fn next(&mut self) -> Option<V> {
		self.tree.pop_first()
	}
}

impl<V, X: KeyOfValue<V>, L: Compare<X::Key>, C: SlabMut<Node<V>>> DoubleEndedIterator
	for IntoIter<V, X, L, C>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	#[inline]
	fn next_back(&mut self) -> Option<V> {
		self.tree.pop_last()
	}
}

impl<V, X: KeyOfValue<V>, L: Compare<X::Key>, C: SlabMut<Node<V>>> IntoIterator
	for RbTree<V, X, L, C>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	type IntoIter = IntoIter<V, X, L, C>;
	type Item = V;

	#[inline]
	fn into_iter(self) -> IntoIter<V, X, L, C> {
		IntoIter::new(self)
	}
}
