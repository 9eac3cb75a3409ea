use crate::generic::{
	key::{Compare, Identity},
	node::Node,
	IntoIter, Iter, Range, RbTree,
};
use cc_traits::{SimpleCollectionMut, SimpleCollectionRef, Slab, SlabMut};
use std::{
	fmt,
	hash::{Hash, Hasher},
	iter::FromIterator,
	ops::RangeBounds,
};

/// A set based on a red-black tree.
///
/// Each value is its own key, and no two values of the set are equivalent
/// with respect to the comparator `L`.
///
/// It is a logic error for an item to be modified in such a way that the item's ordering relative
/// to any other item, as determined by the comparator, changes while it is in the set.
pub struct RbSet<T, L, C> {
	tree: RbTree<T, Identity, L, C>,
}

impl<T, L, C> RbSet<T, L, C> {
	/// Makes a new, empty `RbSet`.
	///
	/// # Example
	///
	/// ```
	/// # #![allow(unused_mut)]
	/// use rbtree_slab::RbSet;
	///
	/// let mut set: RbSet<i32> = RbSet::new();
	/// ```
	#[inline]
	pub fn new() -> Self
	where
		C: Default,
		L: Default,
	{
		RbSet {
			tree: RbTree::new(),
		}
	}

	/// Makes a new, empty `RbSet` ordered by the given comparator.
	#[inline]
	pub fn with_comparator(less: L) -> Self
	where
		C: Default,
	{
		RbSet {
			tree: RbTree::with_comparator(less),
		}
	}

	/// Returns the number of elements in the set.
	///
	/// # Example
	///
	/// ```
	/// use rbtree_slab::RbSet;
	///
	/// let mut v = RbSet::new();
	/// assert_eq!(v.len(), 0);
	/// v.insert(1);
	/// assert_eq!(v.len(), 1);
	/// ```
	#[inline]
	pub fn len(&self) -> usize {
		self.tree.len()
	}

	/// Returns `true` if the set contains no elements.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.tree.is_empty()
	}

	/// Returns the underlying tree.
	#[inline]
	pub fn as_tree(&self) -> &RbTree<T, Identity, L, C> {
		&self.tree
	}
}

impl<T, L: Compare<T>, C: Slab<Node<T>>> RbSet<T, L, C>
where
	C: SimpleCollectionRef,
{
	/// Returns `true` if the set contains a value equivalent to `value`.
	///
	/// # Example
	///
	/// ```
	/// use rbtree_slab::RbSet;
	///
	/// let set: RbSet<_> = [1, 2, 3].iter().cloned().collect();
	/// assert_eq!(set.contains(&1), true);
	/// assert_eq!(set.contains(&4), false);
	/// ```
	#[inline]
	pub fn contains(&self, value: &T) -> bool {
		self.tree.contains(value)
	}

	/// Returns a reference to the value in the set, if any, that is equivalent to the given value.
	#[inline]
	pub fn get(&self, value: &T) -> Option<&T> {
		self.tree.get_by_key(value)
	}

	/// Returns a reference to the first (minimum) value in the set, if any.
	#[inline]
	pub fn first(&self) -> Option<&T> {
		self.tree.first()
	}

	/// Returns a reference to the last (maximum) value in the set, if any.
	#[inline]
	pub fn last(&self) -> Option<&T> {
		self.tree.last()
	}

	/// Returns the first value not less than `value`.
	#[inline]
	pub fn lower_bound(&self, value: &T) -> Option<&T> {
		self.tree.get(self.tree.lower_bound(value))
	}

	/// Returns the first value greater than `value`.
	#[inline]
	pub fn upper_bound(&self, value: &T) -> Option<&T> {
		self.tree.get(self.tree.upper_bound(value))
	}

	/// Gets an iterator that visits the values in the set in ascending order.
	///
	/// # Example
	///
	/// ```
	/// use rbtree_slab::RbSet;
	///
	/// let set: RbSet<usize> = [3, 1, 2].iter().cloned().collect();
	/// let mut set_iter = set.iter();
	/// assert_eq!(set_iter.next(), Some(&1));
	/// assert_eq!(set_iter.next(), Some(&2));
	/// assert_eq!(set_iter.next(), Some(&3));
	/// assert_eq!(set_iter.next(), None);
	/// ```
	#[inline]
	pub fn iter(&self) -> Iter<T, Identity, L, C> {
		self.tree.iter()
	}

	/// Constructs a double-ended iterator over a sub-range of elements in the set.
	///
	/// # Panics
	///
	/// Panics if range `start > end`.
	/// Panics if range `start == end` and both bounds are `Excluded`.
	#[inline]
	pub fn range<R: RangeBounds<T>>(&self, range: R) -> Range<T, Identity, L, C> {
		self.tree.range(range)
	}
}

impl<T, L: Compare<T>, C: SlabMut<Node<T>>> RbSet<T, L, C>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	/// Clears the set, removing all values.
	#[inline]
	pub fn clear(&mut self) {
		self.tree.clear()
	}

	/// Adds a value to the set.
	///
	/// If the set did not have an equivalent value present, `true` is returned.
	///
	/// If the set did have an equivalent value present, `false` is returned, and the
	/// entry is not updated.
	///
	/// # Example
	///
	/// ```
	/// use rbtree_slab::RbSet;
	///
	/// let mut set = RbSet::new();
	///
	/// assert_eq!(set.insert(2), true);
	/// assert_eq!(set.insert(2), false);
	/// assert_eq!(set.len(), 1);
	/// ```
	#[inline]
	pub fn insert(&mut self, value: T) -> bool {
		self.tree.insert_unique(value).1
	}

	/// Removes a value from the set. Returns whether the value was
	/// present in the set.
	#[inline]
	pub fn remove(&mut self, value: &T) -> bool {
		self.tree.erase_key(value) > 0
	}

	/// Removes and returns the value in the set, if any, that is equivalent to the given one.
	///
	/// # Example
	///
	/// ```
	/// use rbtree_slab::RbSet;
	///
	/// let mut set: RbSet<_> = [1, 2, 3].iter().cloned().collect();
	/// assert_eq!(set.take(&2), Some(2));
	/// assert_eq!(set.take(&2), None);
	/// ```
	#[inline]
	pub fn take(&mut self, value: &T) -> Option<T> {
		self.tree.take(value)
	}

	/// Removes the first value from the set and returns it, if any.
	#[inline]
	pub fn pop_first(&mut self) -> Option<T> {
		self.tree.pop_first()
	}

	/// Removes the last value from the set and returns it, if any.
	#[inline]
	pub fn pop_last(&mut self) -> Option<T> {
		self.tree.pop_last()
	}
}

impl<T, L: Default, C: Default> Default for RbSet<T, L, C> {
	#[inline]
	fn default() -> Self {
		RbSet::new()
	}
}

impl<T: Clone, L: Clone, C: Clone> Clone for RbSet<T, L, C> {
	#[inline]
	fn clone(&self) -> Self {
		RbSet {
			tree: self.tree.clone(),
		}
	}
}

impl<T: PartialEq, L, C: Slab<Node<T>>, D: Slab<Node<T>>> PartialEq<RbSet<T, L, D>>
	for RbSet<T, L, C>
where
	C: SimpleCollectionRef,
	D: SimpleCollectionRef,
{
	#[inline]
	fn eq(&self, other: &RbSet<T, L, D>) -> bool {
		self.tree == other.tree
	}
}

impl<T: Eq, L, C: Slab<Node<T>>> Eq for RbSet<T, L, C> where C: SimpleCollectionRef {}

impl<T: Hash, L, C: Slab<Node<T>>> Hash for RbSet<T, L, C>
where
	C: SimpleCollectionRef,
{
	#[inline]
	fn hash<H: Hasher>(&self, h: &mut H) {
		self.tree.hash(h)
	}
}

impl<T: fmt::Debug, L, C: Slab<Node<T>>> fmt::Debug for RbSet<T, L, C>
where
	C: SimpleCollectionRef,
{
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		fmt::Debug::fmt(&self.tree, f)
	}
}

impl<T, L: Compare<T> + Default, C: SlabMut<Node<T>> + Default> FromIterator<T> for RbSet<T, L, C>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	#[inline]
	fn from_iter<I>(iter: I) -> Self
	where
		I: IntoIterator<Item = T>,
	{
		let mut set = RbSet::new();
		set.extend(iter);
		set
	}
}

impl<T, L: Compare<T>, C: SlabMut<Node<T>>> Extend<T> for RbSet<T, L, C>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	#[inline]
	fn extend<I>(&mut self, iter: I)
	where
		I: IntoIterator<Item = T>,
	{
		self.tree.insert_unique_range(iter)
	}
}

impl<'a, T, L: Compare<T>, C: Slab<Node<T>>> IntoIterator for &'a RbSet<T, L, C>
where
	C: SimpleCollectionRef,
{
	type IntoIter = Iter<'a, T, Identity, L, C>;
	type Item = &'a T;

	#[inline]
	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl<T, L: Compare<T>, C: SlabMut<Node<T>>> IntoIterator for RbSet<T, L, C>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	type IntoIter = IntoIter<T, Identity, L, C>;
	type Item = T;

	#[inline]
	fn into_iter(self) -> Self::IntoIter {
		self.tree.into_iter()
	}
}

/// An ordered multiset based on a red-black tree.
///
/// Equivalent values are all kept, in insertion order.
///
/// # Example
///
/// ```
/// use rbtree_slab::RbMultiSet;
///
/// let mut set = RbMultiSet::new();
/// set.insert(5);
/// set.insert(5);
/// set.insert(3);
/// set.insert(5);
///
/// assert_eq!(set.count(&5), 3);
/// assert_eq!(set.iter().copied().collect::<Vec<_>>(), [3, 5, 5, 5]);
/// ```
pub struct RbMultiSet<T, L, C> {
	tree: RbTree<T, Identity, L, C>,
}

impl<T, L, C> RbMultiSet<T, L, C> {
	/// Makes a new, empty `RbMultiSet`.
	#[inline]
	pub fn new() -> Self
	where
		C: Default,
		L: Default,
	{
		RbMultiSet {
			tree: RbTree::new(),
		}
	}

	/// Makes a new, empty `RbMultiSet` ordered by the given comparator.
	#[inline]
	pub fn with_comparator(less: L) -> Self
	where
		C: Default,
	{
		RbMultiSet {
			tree: RbTree::with_comparator(less),
		}
	}

	#[inline]
	pub fn len(&self) -> usize {
		self.tree.len()
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.tree.is_empty()
	}

	#[inline]
	pub fn as_tree(&self) -> &RbTree<T, Identity, L, C> {
		&self.tree
	}
}

impl<T, L: Compare<T>, C: Slab<Node<T>>> RbMultiSet<T, L, C>
where
	C: SimpleCollectionRef,
{
	#[inline]
	pub fn contains(&self, value: &T) -> bool {
		self.tree.contains(value)
	}

	/// Number of values equivalent to `value`.
	#[inline]
	pub fn count(&self, value: &T) -> usize {
		self.tree.count(value)
	}

	#[inline]
	pub fn first(&self) -> Option<&T> {
		self.tree.first()
	}

	#[inline]
	pub fn last(&self) -> Option<&T> {
		self.tree.last()
	}

	/// Iterator over the values equivalent to `value`, in insertion order.
	#[inline]
	pub fn equal_range(&self, value: &T) -> Range<T, Identity, L, C> {
		self.tree.equal_range_iter(value)
	}

	#[inline]
	pub fn iter(&self) -> Iter<T, Identity, L, C> {
		self.tree.iter()
	}

	#[inline]
	pub fn range<R: RangeBounds<T>>(&self, range: R) -> Range<T, Identity, L, C> {
		self.tree.range(range)
	}
}

impl<T, L: Compare<T>, C: SlabMut<Node<T>>> RbMultiSet<T, L, C>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	#[inline]
	pub fn clear(&mut self) {
		self.tree.clear()
	}

	/// Adds a value to the set, after every equivalent value.
	#[inline]
	pub fn insert(&mut self, value: T) {
		self.tree.insert_equal(value);
	}

	/// Removes the first value equivalent to `value`.
	///
	/// Returns whether such a value was present.
	#[inline]
	pub fn remove_one(&mut self, value: &T) -> bool {
		let addr = self.tree.lower_bound(value);
		let found = match self.tree.get(addr) {
			Some(first) => !self.tree.key_comp().less(value, first),
			None => false,
		};

		if found {
			self.tree.erase(addr);
		}

		found
	}

	/// Removes every value equivalent to `value`.
	///
	/// Returns the number of removed values.
	#[inline]
	pub fn remove_all(&mut self, value: &T) -> usize {
		self.tree.erase_key(value)
	}

	#[inline]
	pub fn pop_first(&mut self) -> Option<T> {
		self.tree.pop_first()
	}

	#[inline]
	pub fn pop_last(&mut self) -> Option<T> {
		self.tree.pop_last()
	}
}

impl<T, L: Default, C: Default> Default for RbMultiSet<T, L, C> {
	#[inline]
	fn default() -> Self {
		RbMultiSet::new()
	}
}

impl<T: Clone, L: Clone, C: Clone> Clone for RbMultiSet<T, L, C> {
	#[inline]
	fn clone(&self) -> Self {
		RbMultiSet {
			tree: self.tree.clone(),
		}
	}
}

impl<T: PartialEq, L, C: Slab<Node<T>>, D: Slab<Node<T>>> PartialEq<RbMultiSet<T, L, D>>
	for RbMultiSet<T, L, C>
where
	C: SimpleCollectionRef,
	D: SimpleCollectionRef,
{
	#[inline]
	fn eq(&self, other: &RbMultiSet<T, L, D>) -> bool {
		self.tree == other.tree
	}
}

impl<T: Eq, L, C: Slab<Node<T>>> Eq for RbMultiSet<T, L, C> where C: SimpleCollectionRef {}

impl<T: fmt::Debug, L, C: Slab<Node<T>>> fmt::Debug for RbMultiSet<T, L, C>
where
	C: SimpleCollectionRef,
{
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		fmt::Debug::fmt(&self.tree, f)
	}
}

impl<T, L: Compare<T> + Default, C: SlabMut<Node<T>> + Default> FromIterator<T>
	for RbMultiSet<T, L, C>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	#[inline]
	fn from_iter<I>(iter: I) -> Self
	where
		I: IntoIterator<Item = T>,
	{
		let mut set = RbMultiSet::new();
		set.extend(iter);
		set
	}
}

impl<T, L: Compare<T>, C: SlabMut<Node<T>>> Extend<T> for RbMultiSet<T, L, C>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	#[inline]
	fn extend<I>(&mut self, iter: I)
	where
		I: IntoIterator<Item = T>,
	{
		self.tree.insert_equal_range(iter)
	}
}

impl<'a, T, L: Compare<T>, C: Slab<Node<T>>> IntoIterator for &'a RbMultiSet<T, L, C>
where
	C: SimpleCollectionRef,
{
	type IntoIter = Iter<'a, T, Identity, L, C>;
	type Item = &'a T;

	#[inline]
	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl<T, L: Compare<T>, C: SlabMut<Node<T>>> IntoIterator for RbMultiSet<T, L, C>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	type IntoIter = IntoIter<T, Identity, L, C>;
	type Item = T;

	#[inline]
	fn into_iter(self) -> Self::IntoIter {
		self.tree.into_iter()
	}
}
