use crate::generic::{
	key::{Compare, First},
	node::Node,
	IntoIter, Iter, Range, RbTree,
};
use cc_traits::{SimpleCollectionMut, SimpleCollectionRef, Slab, SlabMut};
use std::{
	fmt,
	hash::{Hash, Hasher},
	iter::{DoubleEndedIterator, ExactSizeIterator, FromIterator, FusedIterator},
	ops::RangeBounds,
};

/// A map based on a red-black tree.
///
/// Entries are `(key, value)` pairs ordered by key, and no two keys of the map are
/// equivalent with respect to the comparator `L`.
///
/// # Example
///
/// ```
/// use rbtree_slab::RbMap;
///
/// let mut movie_reviews = RbMap::new();
///
/// movie_reviews.insert("Office Space",       "Deals with real issues in the workplace.");
/// movie_reviews.insert("Pulp Fiction",       "Masterpiece.");
/// movie_reviews.insert("The Godfather",      "Very enjoyable.");
/// movie_reviews.insert("The Blues Brothers", "Eye lyked it a lot.");
///
/// if !movie_reviews.contains_key(&"Les Misérables") {
///     println!("We've got {} reviews, but Les Misérables ain't one.",
///              movie_reviews.len());
/// }
///
/// movie_reviews.remove(&"The Blues Brothers");
///
/// for (movie, review) in &movie_reviews {
///     println!("{}: \"{}\"", movie, review);
/// }
///
/// assert_eq!(movie_reviews.get(&"Pulp Fiction"), Some(&"Masterpiece."));
/// ```
pub struct RbMap<K, M, L, C> {
	tree: RbTree<(K, M), First, L, C>,
}

impl<K, M, L, C> RbMap<K, M, L, C> {
	/// Create a new empty map.
	#[inline]
	pub fn new() -> Self
	where
		C: Default,
		L: Default,
	{
		RbMap {
			tree: RbTree::new(),
		}
	}

	/// Create a new empty map ordered by the given key comparator.
	#[inline]
	pub fn with_comparator(less: L) -> Self
	where
		C: Default,
	{
		RbMap {
			tree: RbTree::with_comparator(less),
		}
	}

	/// Returns the number of elements in the map.
	#[inline]
	pub fn len(&self) -> usize {
		self.tree.len()
	}

	/// Returns `true` if the map contains no elements.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.tree.is_empty()
	}

	/// Returns the underlying tree.
	#[inline]
	pub fn as_tree(&self) -> &RbTree<(K, M), First, L, C> {
		&self.tree
	}
}

impl<K, M, L: Compare<K>, C: Slab<Node<(K, M)>>> RbMap<K, M, L, C>
where
	C: SimpleCollectionRef,
{
	/// Returns a reference to the value corresponding to the key.
	///
	/// # Example
	///
	/// ```
	/// use rbtree_slab::RbMap;
	///
	/// let mut map = RbMap::new();
	/// map.insert(1, "a");
	/// assert_eq!(map.get(&1), Some(&"a"));
	/// assert_eq!(map.get(&2), None);
	/// ```
	#[inline]
	pub fn get(&self, key: &K) -> Option<&M> {
		self.tree.get_by_key(key).map(|(_, value)| value)
	}

	/// Returns the key-value pair corresponding to the supplied key.
	#[inline]
	pub fn get_key_value(&self, key: &K) -> Option<(&K, &M)> {
		self.tree.get_by_key(key).map(|(k, v)| (k, v))
	}

	#[inline]
	pub fn contains_key(&self, key: &K) -> bool {
		self.tree.contains(key)
	}

	/// Returns the first key-value pair in the map.
	/// The key in this pair is the minimum key in the map.
	#[inline]
	pub fn first_key_value(&self) -> Option<(&K, &M)> {
		self.tree.first().map(|(k, v)| (k, v))
	}

	/// Returns the last key-value pair in the map.
	/// The key in this pair is the maximum key in the map.
	#[inline]
	pub fn last_key_value(&self) -> Option<(&K, &M)> {
		self.tree.last().map(|(k, v)| (k, v))
	}

	/// Gets an iterator over the entries of the map, sorted by key.
	#[inline]
	pub fn iter(&self) -> MapIter<K, M, L, C> {
		MapIter::new(self.tree.iter())
	}

	/// Gets an iterator over the keys of the map, in sorted order.
	///
	/// # Example
	///
	/// ```
	/// use rbtree_slab::RbMap;
	///
	/// let mut a = RbMap::new();
	/// a.insert(2, "b");
	/// a.insert(1, "a");
	///
	/// let keys: Vec<_> = a.keys().cloned().collect();
	/// assert_eq!(keys, [1, 2]);
	/// ```
	#[inline]
	pub fn keys(&self) -> Keys<K, M, L, C> {
		Keys {
			inner: self.tree.iter(),
		}
	}

	/// Gets an iterator over the values of the map, in order by key.
	#[inline]
	pub fn values(&self) -> Values<K, M, L, C> {
		Values {
			inner: self.tree.iter(),
		}
	}

	/// Constructs a double-ended iterator over a sub-range of entries in the map.
	///
	/// # Panics
	///
	/// Panics if range `start > end`.
	/// Panics if range `start == end` and both bounds are `Excluded`.
	#[inline]
	pub fn range<R: RangeBounds<K>>(&self, range: R) -> MapRange<K, M, L, C> {
		MapRange {
			inner: self.tree.range(range),
		}
	}
}

impl<K, M, L: Compare<K>, C: SlabMut<Node<(K, M)>>> RbMap<K, M, L, C>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	/// Clears the map, removing all elements.
	#[inline]
	pub fn clear(&mut self) {
		self.tree.clear()
	}

	/// Returns a mutable reference to the value corresponding to the key.
	#[inline]
	pub fn get_mut(&mut self, key: &K) -> Option<&mut M> {
		let addr = self.tree.find(key);
		self.tree.get_mut(addr).map(|(_, value)| value)
	}

	/// Inserts a key-value pair into the map.
	///
	/// If the map did not have an equivalent key present, `None` is returned.
	///
	/// If the map did have an equivalent key present, the value is updated, and the old
	/// value is returned. The key is not updated.
	///
	/// # Example
	///
	/// ```
	/// use rbtree_slab::RbMap;
	///
	/// let mut map = RbMap::new();
	/// assert_eq!(map.insert(37, "a"), None);
	/// assert_eq!(map.is_empty(), false);
	///
	/// map.insert(37, "b");
	/// assert_eq!(map.insert(37, "c"), Some("b"));
	/// assert_eq!(map.get(&37), Some(&"c"));
	/// ```
	pub fn insert(&mut self, key: K, value: M) -> Option<M> {
		let addr = self.tree.lower_bound(&key);
		let occupied = match self.tree.get(addr) {
			Some((k, _)) => !self.tree.key_comp().less(&key, k),
			None => false,
		};

		if occupied {
			let (_, old) = self.tree.get_mut(addr).unwrap();
			Some(std::mem::replace(old, value))
		} else {
			// `addr` is exactly the insertion point.
			self.tree.insert_unique_hint(addr, (key, value));
			None
		}
	}

	/// Inserts a key-value pair into the map only if the key is not already present.
	///
	/// Returns `true` if the pair was inserted.
	/// Otherwise the map is unchanged and the given pair is dropped.
	#[inline]
	pub fn try_insert(&mut self, key: K, value: M) -> bool {
		self.tree.insert_unique((key, value)).1
	}

	/// Returns a mutable reference to the value corresponding to the key,
	/// inserting the value produced by `f` first if the key is absent.
	pub fn get_or_insert_with<F>(&mut self, key: K, f: F) -> &mut M
	where
		F: FnOnce() -> M,
	{
		let mut addr = self.tree.find(&key);
		if addr.is_end() {
			addr = self.tree.insert_unique((key, f())).0
		}

		&mut self.tree.get_mut(addr).unwrap().1
	}

	/// Returns a mutable reference to the value corresponding to the key,
	/// inserting the default value first if the key is absent.
	///
	/// # Example
	///
	/// ```
	/// use rbtree_slab::RbMap;
	///
	/// let mut counts: RbMap<char, usize> = RbMap::new();
	/// for c in "abracadabra".chars() {
	///     *counts.get_or_default(c) += 1;
	/// }
	///
	/// assert_eq!(counts.get(&'a'), Some(&5));
	/// assert_eq!(counts.get(&'c'), Some(&1));
	/// ```
	#[inline]
	pub fn get_or_default(&mut self, key: K) -> &mut M
	where
		M: Default,
	{
		self.get_or_insert_with(key, M::default)
	}

	/// Removes a key from the map, returning the value at the key if the key
	/// was previously in the map.
	#[inline]
	pub fn remove(&mut self, key: &K) -> Option<M> {
		self.tree.take(key).map(|(_, value)| value)
	}

	/// Removes a key from the map, returning the stored key and value if the key
	/// was previously in the map.
	#[inline]
	pub fn remove_entry(&mut self, key: &K) -> Option<(K, M)> {
		self.tree.take(key)
	}

	/// Removes and returns the first element in the map.
	#[inline]
	pub fn pop_first(&mut self) -> Option<(K, M)> {
		self.tree.pop_first()
	}

	/// Removes and returns the last element in the map.
	#[inline]
	pub fn pop_last(&mut self) -> Option<(K, M)> {
		self.tree.pop_last()
	}
}

impl<K, M, L: Default, C: Default> Default for RbMap<K, M, L, C> {
	#[inline]
	fn default() -> Self {
		RbMap::new()
	}
}

impl<K: Clone, M: Clone, L: Clone, C: Clone> Clone for RbMap<K, M, L, C> {
	#[inline]
	fn clone(&self) -> Self {
		RbMap {
			tree: self.tree.clone(),
		}
	}
}

impl<K: PartialEq, M: PartialEq, L, C: Slab<Node<(K, M)>>, D: Slab<Node<(K, M)>>>
	PartialEq<RbMap<K, M, L, D>> for RbMap<K, M, L, C>
where
	C: SimpleCollectionRef,
	D: SimpleCollectionRef,
{
	#[inline]
	fn eq(&self, other: &RbMap<K, M, L, D>) -> bool {
		self.tree == other.tree
	}
}

impl<K: Eq, M: Eq, L, C: Slab<Node<(K, M)>>> Eq for RbMap<K, M, L, C> where C: SimpleCollectionRef {}

impl<K: Hash, M: Hash, L, C: Slab<Node<(K, M)>>> Hash for RbMap<K, M, L, C>
where
	C: SimpleCollectionRef,
{
	#[inline]
	fn hash<H: Hasher>(&self, h: &mut H) {
		self.tree.hash(h)
	}
}

impl<K: fmt::Debug, M: fmt::Debug, L, C: Slab<Node<(K, M)>>> fmt::Debug for RbMap<K, M, L, C>
where
	C: SimpleCollectionRef,
{
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_map()
			.entries(self.tree.iter().map(|(k, v)| (k, v)))
			.finish()
	}
}

impl<K, M, L: Compare<K> + Default, C: SlabMut<Node<(K, M)>> + Default> FromIterator<(K, M)>
	for RbMap<K, M, L, C>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	#[inline]
	fn from_iter<T>(iter: T) -> Self
	where
		T: IntoIterator<Item = (K, M)>,
	{
		let mut map = RbMap::new();
		map.extend(iter);
		map
	}
}

impl<K, M, L: Compare<K>, C: SlabMut<Node<(K, M)>>> Extend<(K, M)> for RbMap<K, M, L, C>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	#[inline]
	fn extend<T>(&mut self, iter: T)
	where
		T: IntoIterator<Item = (K, M)>,
	{
		for (key, value) in iter {
			self.insert(key, value);
		}
	}
}

impl<'a, K, M, L: Compare<K>, C: Slab<Node<(K, M)>>> IntoIterator for &'a RbMap<K, M, L, C>
where
	C: SimpleCollectionRef,
{
	type IntoIter = MapIter<'a, K, M, L, C>;
	type Item = (&'a K, &'a M);

	#[inline]
	fn into_iter(self) -> MapIter<'a, K, M, L, C> {
		self.iter()
	}
}

impl<K, M, L: Compare<K>, C: SlabMut<Node<(K, M)>>> IntoIterator for RbMap<K, M, L, C>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	type IntoIter = IntoIter<(K, M), First, L, C>;
	type Item = (K, M);

	#[inline]
	fn into_iter(self) -> Self::IntoIter {
		self.tree.into_iter()
	}
}

/// A multimap based on a red-black tree.
///
/// Several entries may have equivalent keys. They are kept in insertion order.
///
/// # Example
///
/// ```
/// use rbtree_slab::RbMultiMap;
///
/// let mut map = RbMultiMap::new();
/// map.insert(1, 'a');
/// map.insert(2, 'b');
/// map.insert(1, 'c');
///
/// assert_eq!(map.count(&1), 2);
/// assert_eq!(map.get_all(&1).copied().collect::<Vec<_>>(), ['a', 'c']);
/// ```
pub struct RbMultiMap<K, M, L, C> {
	tree: RbTree<(K, M), First, L, C>,
}

impl<K, M, L, C> RbMultiMap<K, M, L, C> {
	#[inline]
	pub fn new() -> Self
	where
		C: Default,
		L: Default,
	{
		RbMultiMap {
			tree: RbTree::new(),
		}
	}

	#[inline]
	pub fn with_comparator(less: L) -> Self
	where
		C: Default,
	{
		RbMultiMap {
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
	pub fn as_tree(&self) -> &RbTree<(K, M), First, L, C> {
		&self.tree
	}
}

impl<K, M, L: Compare<K>, C: Slab<Node<(K, M)>>> RbMultiMap<K, M, L, C>
where
	C: SimpleCollectionRef,
{
	#[inline]
	pub fn contains_key(&self, key: &K) -> bool {
		self.tree.contains(key)
	}

	/// Number of entries with a key equivalent to `key`.
	#[inline]
	pub fn count(&self, key: &K) -> usize {
		self.tree.count(key)
	}

	/// Iterator over the values associated to `key`, in insertion order.
	#[inline]
	pub fn get_all(&self, key: &K) -> GetAll<K, M, L, C> {
		GetAll {
			inner: self.tree.equal_range_iter(key),
		}
	}

	#[inline]
	pub fn iter(&self) -> MapIter<K, M, L, C> {
		MapIter::new(self.tree.iter())
	}

	#[inline]
	pub fn keys(&self) -> Keys<K, M, L, C> {
		Keys {
			inner: self.tree.iter(),
		}
	}

	#[inline]
	pub fn values(&self) -> Values<K, M, L, C> {
		Values {
			inner: self.tree.iter(),
		}
	}

	#[inline]
	pub fn range<R: RangeBounds<K>>(&self, range: R) -> MapRange<K, M, L, C> {
		MapRange {
			inner: self.tree.range(range),
		}
	}
}

impl<K, M, L: Compare<K>, C: SlabMut<Node<(K, M)>>> RbMultiMap<K, M, L, C>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	#[inline]
	pub fn clear(&mut self) {
		self.tree.clear()
	}

	/// Inserts a key-value pair after every entry with an equivalent key.
	#[inline]
	pub fn insert(&mut self, key: K, value: M) {
		self.tree.insert_equal((key, value));
	}

	/// Removes every entry with a key equivalent to `key`.
	///
	/// Returns the number of removed entries.
	#[inline]
	pub fn remove_all(&mut self, key: &K) -> usize {
		self.tree.erase_key(key)
	}

	#[inline]
	pub fn pop_first(&mut self) -> Option<(K, M)> {
		self.tree.pop_first()
	}

	#[inline]
	pub fn pop_last(&mut self) -> Option<(K, M)> {
		self.tree.pop_last()
	}
}

impl<K, M, L: Default, C: Default> Default for RbMultiMap<K, M, L, C> {
	#[inline]
	fn default() -> Self {
		RbMultiMap::new()
	}
}

impl<K: Clone, M: Clone, L: Clone, C: Clone> Clone for RbMultiMap<K, M, L, C> {
	#[inline]
	fn clone(&self) -> Self {
		RbMultiMap {
			tree: self.tree.clone(),
		}
	}
}

impl<K: PartialEq, M: PartialEq, L, C: Slab<Node<(K, M)>>, D: Slab<Node<(K, M)>>>
	PartialEq<RbMultiMap<K, M, L, D>> for RbMultiMap<K, M, L, C>
where
	C: SimpleCollectionRef,
	D: SimpleCollectionRef,
{
	#[inline]
	fn eq(&self, other: &RbMultiMap<K, M, L, D>) -> bool {
		self.tree == other.tree
	}
}

impl<K: Eq, M: Eq, L, C: Slab<Node<(K, M)>>> Eq for RbMultiMap<K, M, L, C> where
	C: SimpleCollectionRef
{
}

impl<K: fmt::Debug, M: fmt::Debug, L, C: Slab<Node<(K, M)>>> fmt::Debug
	for RbMultiMap<K, M, L, C>
where
	C: SimpleCollectionRef,
{
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_map()
			.entries(self.tree.iter().map(|(k, v)| (k, v)))
			.finish()
	}
}

impl<K, M, L: Compare<K> + Default, C: SlabMut<Node<(K, M)>> + Default> FromIterator<(K, M)>
	for RbMultiMap<K, M, L, C>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	#[inline]
	fn from_iter<T>(iter: T) -> Self
	where
		T: IntoIterator<Item = (K, M)>,
	{
		let mut map = RbMultiMap::new();
		map.extend(iter);
		map
	}
}

impl<K, M, L: Compare<K>, C: SlabMut<Node<(K, M)>>> Extend<(K, M)> for RbMultiMap<K, M, L, C>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	#[inline]
	fn extend<T>(&mut self, iter: T)
	where
		T: IntoIterator<Item = (K, M)>,
	{
		self.tree.insert_equal_range(iter)
	}
}

impl<'a, K, M, L: Compare<K>, C: Slab<Node<(K, M)>>> IntoIterator
	for &'a RbMultiMap<K, M, L, C>
where
	C: SimpleCollectionRef,
{
	type IntoIter = MapIter<'a, K, M, L, C>;
	type Item = (&'a K, &'a M);

	#[inline]
	fn into_iter(self) -> MapIter<'a, K, M, L, C> {
		self.iter()
	}
}

impl<K, M, L: Compare<K>, C: SlabMut<Node<(K, M)>>> IntoIterator for RbMultiMap<K, M, L, C>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	type IntoIter = IntoIter<(K, M), First, L, C>;
	type Item = (K, M);

	#[inline]
	fn into_iter(self) -> Self::IntoIter {
		self.tree.into_iter()
	}
}

/// Iterator over the entries of a [`RbMap`] or [`RbMultiMap`].
pub struct MapIter<'a, K, M, L, C> {
	inner: Iter<'a, (K, M), First, L, C>,
}

impl<'a, K, M, L, C> MapIter<'a, K, M, L, C> {
	#[inline]
	fn new(inner: Iter<'a, (K, M), First, L, C>) -> Self {
		MapIter { inner }
	}
}

impl<'a, K, M, L, C: Slab<Node<(K, M)>>> Iterator for MapIter<'a, K, M, L, C>
where
	C: SimpleCollectionRef,
{
	type Item = (&'a K, &'a M);

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		self.inner.size_hint()
	}

	#[inline]
	fn next(&mut self) -> Option<(&'a K, &'a M)> {
		self.inner.next().map(|(k, v)| (k, v))
	}
}

impl<'a, K, M, L, C: Slab<Node<(K, M)>>> DoubleEndedIterator for MapIter<'a, K, M, L, C>
where
	C: SimpleCollectionRef,
{
	#[inline]
	fn next_back(&mut self) -> Option<(&'a K, &'a M)> {
		self.inner.next_back().map(|(k, v)| (k, v))
	}
}

impl<'a, K, M, L, C: Slab<Node<(K, M)>>> FusedIterator for MapIter<'a, K, M, L, C> where
	C: SimpleCollectionRef
{
}
impl<'a, K, M, L, C: Slab<Node<(K, M)>>> ExactSizeIterator for MapIter<'a, K, M, L, C> where
	C: SimpleCollectionRef
{
}

/// Iterator over the keys of a [`RbMap`] or [`RbMultiMap`].
pub struct Keys<'a, K, M, L, C> {
	inner: Iter<'a, (K, M), First, L, C>,
}

impl<'a, K, M, L, C: Slab<Node<(K, M)>>> Iterator for Keys<'a, K, M, L, C>
where
	C: SimpleCollectionRef,
{
	type Item = &'a K;

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		self.inner.size_hint()
	}

	#[inline]
	fn next(&mut self) -> Option<&'a K> {
		self.inner.next().map(|(k, _)| k)
	}
}

impl<'a, K, M, L, C: Slab<Node<(K, M)>>> DoubleEndedIterator for Keys<'a, K, M, L, C>
where
	C: SimpleCollectionRef,
{
	#[inline]
	fn next_back(&mut self) -> Option<&'a K> {
		self.inner.next_back().map(|(k, _)| k)
	}
}

impl<'a, K, M, L, C: Slab<Node<(K, M)>>> ExactSizeIterator for Keys<'a, K, M, L, C> where
	C: SimpleCollectionRef
{
}

/// Iterator over the values of a [`RbMap`] or [`RbMultiMap`].
pub struct Values<'a, K, M, L, C> {
	inner: Iter<'a, (K, M), First, L, C>,
}

impl<'a, K, M, L, C: Slab<Node<(K, M)>>> Iterator for Values<'a, K, M, L, C>
where
	C: SimpleCollectionRef,
{
	type Item = &'a M;

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		self.inner.size_hint()
	}

	#[inline]
	fn next(&mut self) -> Option<&'a M> {
		self.inner.next().map(|(_, v)| v)
	}
}

impl<'a, K, M, L, C: Slab<Node<(K, M)>>> DoubleEndedIterator for Values<'a, K, M, L, C>
where
	C: SimpleCollectionRef,
{
	#[inline]
	fn next_back(&mut self) -> Option<&'a M> {
		self.inner.next_back().map(|(_, v)| v)
	}
}

impl<'a, K, M, L, C: Slab<Node<(K, M)>>> ExactSizeIterator for Values<'a, K, M, L, C> where
	C: SimpleCollectionRef
{
}

/// Iterator over a sub-range of entries of a [`RbMap`] or [`RbMultiMap`].
pub struct MapRange<'a, K, M, L, C> {
	inner: Range<'a, (K, M), First, L, C>,
}

impl<'a, K, M, L, C: Slab<Node<(K, M)>>> Iterator for MapRange<'a, K, M, L, C>
where
	C: SimpleCollectionRef,
{
	type Item = (&'a K, &'a M);

	#[inline]
	fn next(&mut self) -> Option<(&'a K, &'a M)> {
		self.inner.next().map(|(k, v)| (k, v))
	}
}

impl<'a, K, M, L, C: Slab<Node<(K, M)>>> DoubleEndedIterator for MapRange<'a, K, M, L, C>
where
	C: SimpleCollectionRef,
{
	#[inline]
	fn next_back(&mut self) -> Option<(&'a K, &'a M)> {
		self.inner.next_back().map(|(k, v)| (k, v))
	}
}

/// Iterator over the values associated to a key in a [`RbMultiMap`].
pub struct GetAll<'a, K, M, L, C> {
	inner: Range<'a, (K, M), First, L, C>,
}

impl<'a, K, M, L, C: Slab<Node<(K, M)>>> Iterator for GetAll<'a, K, M, L, C>
where
	C: SimpleCollectionRef,
{
	type Item = &'a M;

	#[inline]
	fn next(&mut self) -> Option<&'a M> {
		self.inner.next().map(|(_, v)| v)
	}
}

impl<'a, K, M, L, C: Slab<Node<(K, M)>>> DoubleEndedIterator for GetAll<'a, K, M, L, C>
where
	C: SimpleCollectionRef,
{
	#[inline]
	fn next_back(&mut self) -> Option<&'a M> {
		self.inner.next_back().map(|(_, v)| v)
	}
}
