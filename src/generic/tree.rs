use crate::generic::{
	key::{Compare, KeyOfValue},
	node::{Address, Node},
};
use cc_traits::{SimpleCollectionMut, SimpleCollectionRef, Slab, SlabMut};
use smallvec::SmallVec;
use std::{
	fmt,
	hash::{Hash, Hasher},
	iter::FromIterator,
	marker::PhantomData,
	ops::{Bound, RangeBounds},
};

mod cursor;
mod ext;
mod iter;
mod verify;

pub use cursor::*;
pub use ext::*;
pub use iter::*;
pub use verify::*;

/// A red-black tree.
///
/// This is the ordered associative container on top of which sets, multisets,
/// maps and multimaps are built.
/// Each stored value `V` is ordered by the key extracted with `X`, according to the
/// strict-less comparator `L`.
/// Nodes are allocated in a slab-like container `C` and linked together by
/// their identifiers, each node knowing its parent, left and right children.
///
/// # Basic usage
///
/// ```
/// use rbtree_slab::{RbTree, generic::key::{Identity, Natural}};
///
/// let mut tree: RbTree<i32, Identity, Natural> = RbTree::new();
///
/// for i in [5, 3, 8, 1, 4, 7, 9] {
///     tree.insert_unique(i);
/// }
///
/// let values: Vec<_> = tree.iter().copied().collect();
/// assert_eq!(values, [1, 3, 4, 5, 7, 8, 9]);
/// assert!(tree.rb_verify());
/// ```
///
/// # Unique and equal insertion
///
/// The same tree can be used with unique keys, where inserting a value whose key is
/// already present is a no-op, or with equal keys, where values with equivalent keys
/// are kept in insertion order:
///
/// ```
/// use rbtree_slab::{RbTree, generic::key::First};
///
/// let mut tree: RbTree<(i32, char), First, _> = RbTree::with_comparator(|a: &i32, b: &i32| a < b);
/// tree.insert_equal((5, 'a'));
/// tree.insert_equal((5, 'b'));
/// tree.insert_equal((3, 'c'));
/// tree.insert_equal((5, 'd'));
///
/// assert_eq!(tree.count(&5), 3);
/// let values: Vec<_> = tree.iter().map(|(_, c)| *c).collect();
/// assert_eq!(values, ['c', 'a', 'b', 'd']);
/// ```
///
/// # Addresses and cursors
///
/// Every element is addressed by an [`Address`]: the identifier of its node.
/// The special [`Address::END`] position follows the last element.
/// Addresses stay valid until the element they designate is erased, and can be turned
/// into bidirectional [`Cursor`]s.
///
/// ## Extended API
///
/// This crate provides the two traits [`RbTreeExt`] and [`RbTreeExtMut`] that can be imported to
/// expose low-level operations on [`RbTree`].
///
/// # Correctness
///
/// It is a logic error for a value to be modified in such a way that its key's ordering relative
/// to any other key, as determined by the comparator, changes while it is in the tree.
pub struct RbTree<V, X, L, C> {
	/// Allocated and free nodes.
	nodes: C,

	/// Root node id.
	root: Option<usize>,

	/// Minimum node id.
	leftmost: Option<usize>,

	/// Maximum node id.
	rightmost: Option<usize>,

	/// Number of items in the tree.
	len: usize,

	/// Key comparator.
	less: L,

	v: PhantomData<V>,
	x: PhantomData<X>,
}

impl<V, X, L, C> RbTree<V, X, L, C> {
	/// Create a new empty tree.
	#[inline]
	pub fn new() -> RbTree<V, X, L, C>
	where
		C: Default,
		L: Default,
	{
		RbTree::with_comparator(L::default())
	}

	/// Create a new empty tree ordered by the given comparator.
	#[inline]
	pub fn with_comparator(less: L) -> RbTree<V, X, L, C>
	where
		C: Default,
	{
		RbTree {
			nodes: Default::default(),
			root: None,
			leftmost: None,
			rightmost: None,
			len: 0,
			less,
			v: PhantomData,
			x: PhantomData,
		}
	}

	/// Returns `true` if the tree contains no elements.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	/// Returns the number of elements in the tree.
	#[inline]
	pub fn len(&self) -> usize {
		self.len
	}

	/// Maximum number of elements the tree could theoretically hold.
	#[inline]
	pub fn max_size(&self) -> usize {
		usize::MAX / std::mem::size_of::<Node<V>>().max(1)
	}

	/// Returns the key comparator.
	#[inline]
	pub fn key_comp(&self) -> &L {
		&self.less
	}

	/// Address of the first element, or `END` if the tree is empty.
	#[inline]
	pub fn begin(&self) -> Address {
		self.leftmost.into()
	}

	/// The end position.
	#[inline]
	pub fn end(&self) -> Address {
		Address::END
	}

	/// Swaps the content of two trees.
	#[inline]
	pub fn swap(&mut self, other: &mut Self) {
		std::mem::swap(self, other)
	}
}

impl<V, X, L, C: Slab<Node<V>>> RbTree<V, X, L, C>
where
	C: SimpleCollectionRef,
{
	/// Returns the value at the given address, or `None` for `END`.
	#[inline]
	pub fn get(&self, addr: Address) -> Option<&V> {
		addr.id().map(|id| self.node(id).value())
	}

	/// Returns the first value, the minimum.
	#[inline]
	pub fn first(&self) -> Option<&V> {
		self.get(self.begin())
	}

	/// Returns the last value, the maximum.
	#[inline]
	pub fn last(&self) -> Option<&V> {
		self.get(self.rightmost.into())
	}

	/// Cursor on the first element.
	#[inline]
	pub fn cursor_begin(&self) -> Cursor<V, X, L, C> {
		Cursor::new(self, self.begin())
	}

	/// Cursor on the end position.
	#[inline]
	pub fn cursor_end(&self) -> Cursor<V, X, L, C> {
		Cursor::new(self, Address::END)
	}

	/// Cursor on the given address.
	#[inline]
	pub fn cursor(&self, addr: Address) -> Cursor<V, X, L, C> {
		Cursor::new(self, addr)
	}

	/// Reverse cursor on the last element.
	#[inline]
	pub fn rbegin(&self) -> RevCursor<V, X, L, C> {
		RevCursor::new(self.cursor_end())
	}

	/// Reverse cursor past the first element.
	#[inline]
	pub fn rend(&self) -> RevCursor<V, X, L, C> {
		RevCursor::new(self.cursor_begin())
	}

	/// Moves `addr` by `n` positions, forward if `n` is positive, backward otherwise.
	#[inline]
	pub fn advance(&self, mut addr: Address, n: isize) -> Address {
		if n >= 0 {
			for _ in 0..n {
				addr = self.next_address(addr)
			}
		} else {
			for _ in 0..n.unsigned_abs() {
				addr = self.previous_address(addr)
			}
		}

		addr
	}

	/// Number of increments needed to go from `first` to `last`.
	///
	/// Runs in linear time. `last` must be reachable from `first`.
	pub fn distance(&self, mut first: Address, last: Address) -> usize {
		let mut n = 0;
		while first != last {
			first = self.next_address(first);
			n += 1;
		}

		n
	}

	/// Gets an iterator that visits the values in the tree in ascending order.
	#[inline]
	pub fn iter(&self) -> Iter<V, X, L, C> {
		Iter::new(self)
	}

	/// Iterator over the values of the `[first, last)` address range.
	#[inline]
	pub fn iter_between(&self, first: Address, last: Address) -> Range<V, X, L, C> {
		Range::between(self, first, last)
	}

	/// Write the tree in the DOT graph description language.
	///
	/// Requires the `dot` feature.
	#[cfg(feature = "dot")]
	#[inline]
	pub fn dot_write<W: std::io::Write>(&self, f: &mut W) -> std::io::Result<()>
	where
		V: std::fmt::Display,
	{
		write!(f, "digraph tree {{\n\tnode [shape=record];\n")?;
		if let Some(id) = self.root {
			self.dot_write_node(f, id)?
		}
		write!(f, "}}")
	}

	/// Write the given node in the DOT graph description language.
	///
	/// Requires the `dot` feature.
	#[cfg(feature = "dot")]
	#[inline]
	fn dot_write_node<W: std::io::Write>(&self, f: &mut W, id: usize) -> std::io::Result<()>
	where
		V: std::fmt::Display,
	{
		let name = format!("n{}", id);
		let node = self.node(id);

		write!(f, "\t{} [color={}, label=\"", name, node.color())?;
		if let Some(parent) = node.parent() {
			write!(f, "({})|", parent)?;
		}

		node.dot_write_label(f)?;
		writeln!(f, "|({})\"];", id)?;

		for child_id in node.left().into_iter().chain(node.right()) {
			self.dot_write_node(f, child_id)?;
			let child_name = format!("n{}", child_id);
			writeln!(f, "\t{} -> {}", name, child_name)?;
		}

		Ok(())
	}
}

impl<V, X: KeyOfValue<V>, L: Compare<X::Key>, C: Slab<Node<V>>> RbTree<V, X, L, C>
where
	C: SimpleCollectionRef,
{
	#[inline]
	fn key(&self, id: usize) -> &X::Key {
		X::key_of(self.node(id).value())
	}

	/// Descend from the root looking for the insertion point of `key`.
	///
	/// Returns the last visited node and `true` if the last branch taken was leftward.
	/// Equal keys go to the right, so that the insertion point follows every equivalent key.
	fn descend(&self, key: &X::Key) -> (Option<usize>, bool) {
		let mut x = self.root;
		let mut y = None;
		let mut comp = true;

		while let Some(id) = x {
			y = Some(id);
			comp = self.less.less(key, self.key(id));
			x = if comp {
				self.node(id).left()
			} else {
				self.node(id).right()
			};
		}

		(y, comp)
	}

	/// Finds an element whose key is equivalent to `key`.
	///
	/// Returns `END` if there is none.
	/// When several elements match, any of them may be returned.
	pub fn find(&self, key: &X::Key) -> Address {
		let mut x = self.root;

		while let Some(id) = x {
			let node_key = self.key(id);
			if self.less.less(key, node_key) {
				x = self.node(id).left()
			} else if !self.less.less(node_key, key) {
				return Address::new(id);
			} else {
				x = self.node(id).right()
			}
		}

		Address::END
	}

	/// Returns `true` if the tree contains an element whose key is equivalent to `key`.
	#[inline]
	pub fn contains(&self, key: &X::Key) -> bool {
		!self.find(key).is_end()
	}

	/// Returns the value of an element whose key is equivalent to `key`.
	#[inline]
	pub fn get_by_key(&self, key: &X::Key) -> Option<&V> {
		self.get(self.find(key))
	}

	/// Number of elements whose key is equivalent to `key`.
	#[inline]
	pub fn count(&self, key: &X::Key) -> usize {
		let (first, last) = self.equal_range(key);
		self.distance(first, last)
	}

	/// Address of the first element whose key is not less than `key`.
	pub fn lower_bound(&self, key: &X::Key) -> Address {
		let mut x = self.root;
		let mut y = Address::END;

		while let Some(id) = x {
			if !self.less.less(self.key(id), key) {
				y = Address::new(id);
				x = self.node(id).left()
			} else {
				x = self.node(id).right()
			}
		}

		y
	}

	/// Address of the first element whose key is greater than `key`.
	pub fn upper_bound(&self, key: &X::Key) -> Address {
		let mut x = self.root;
		let mut y = Address::END;

		while let Some(id) = x {
			if self.less.less(key, self.key(id)) {
				y = Address::new(id);
				x = self.node(id).left()
			} else {
				x = self.node(id).right()
			}
		}

		y
	}

	/// Returns the `[lower_bound(key), upper_bound(key))` address range.
	#[inline]
	pub fn equal_range(&self, key: &X::Key) -> (Address, Address) {
		(self.lower_bound(key), self.upper_bound(key))
	}

	/// Iterator over the elements whose key is equivalent to `key`.
	#[inline]
	pub fn equal_range_iter(&self, key: &X::Key) -> Range<V, X, L, C> {
		let (first, last) = self.equal_range(key);
		Range::between(self, first, last)
	}

	/// Constructs a double-ended iterator over a sub-range of elements in the tree.
	///
	/// # Panics
	///
	/// Panics if range `start > end`.
	/// Panics if range `start == end` and both bounds are `Excluded`.
	///
	/// # Example
	///
	/// ```
	/// use rbtree_slab::{RbTree, generic::key::{Identity, Natural}};
	/// use std::ops::Bound::{Excluded, Included};
	///
	/// let tree: RbTree<i32, Identity, Natural> = (0..10).collect();
	/// let values: Vec<_> = tree.range((Excluded(&3), Included(&6))).copied().collect();
	/// assert_eq!(values, [4, 5, 6]);
	///
	/// let values: Vec<_> = tree.range(7..).copied().collect();
	/// assert_eq!(values, [7, 8, 9]);
	/// ```
	pub fn range<R>(&self, range: R) -> Range<V, X, L, C>
	where
		R: RangeBounds<X::Key>,
	{
		if !self.is_valid_range(&range) {
			panic!("Invalid range")
		}

		let first = match range.start_bound() {
			Bound::Included(start) => self.lower_bound(start),
			Bound::Excluded(start) => self.upper_bound(start),
			Bound::Unbounded => self.begin(),
		};

		let last = match range.end_bound() {
			Bound::Included(end) => self.upper_bound(end),
			Bound::Excluded(end) => self.lower_bound(end),
			Bound::Unbounded => Address::END,
		};

		Range::between(self, first, last)
	}

	fn is_valid_range<R>(&self, range: &R) -> bool
	where
		R: RangeBounds<X::Key>,
	{
		match (range.start_bound(), range.end_bound()) {
			(Bound::Included(start), Bound::Included(end)) => !self.less.less(end, start),
			(Bound::Included(start), Bound::Excluded(end)) => !self.less.less(end, start),
			(Bound::Excluded(start), Bound::Included(end)) => !self.less.less(end, start),
			(Bound::Excluded(start), Bound::Excluded(end)) => self.less.less(start, end),
			_ => true,
		}
	}
}

impl<V, X: KeyOfValue<V>, L: Compare<X::Key>, C: SlabMut<Node<V>>> RbTree<V, X, L, C>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	/// Returns a mutable reference to the value at the given address.
	///
	/// It is a logic error to modify the key of the value.
	#[inline]
	pub fn get_mut(&mut self, addr: Address) -> Option<&mut V> {
		match addr.id() {
			Some(id) => Some(self.node_mut(id).value_mut()),
			None => None,
		}
	}

	/// Inserts a value if no element with an equivalent key is present.
	///
	/// Returns the address of the inserted element and `true`,
	/// or the address of the already present element and `false`
	/// (in which case `value` is dropped).
	pub fn insert_unique(&mut self, value: V) -> (Address, bool) {
		let (y, comp) = self.descend(X::key_of(&value));

		let y = match y {
			Some(y) => y,
			None => return (Address::new(self.link_leaf(None, true, value)), true),
		};

		// candidate for an equivalent key: the in-order predecessor of the insertion point.
		let j = if comp {
			if self.leftmost == Some(y) {
				return (Address::new(self.link_leaf(Some(y), true, value)), true);
			}

			self.previous_address(Address::new(y))
		} else {
			Address::new(y)
		};

		let j_id = j.id().unwrap();
		if self.less.less(self.key(j_id), X::key_of(&value)) {
			(Address::new(self.link_leaf(Some(y), comp, value)), true)
		} else {
			log::trace!("duplicate key rejected at {}", j);
			(j, false)
		}
	}

	/// Inserts a value if no element with an equivalent key is present,
	/// using `hint` as a suggestion for the position.
	///
	/// If the value fits right before `hint`, it is inserted in constant comparisons.
	/// Otherwise this is equivalent to [`insert_unique`](RbTree::insert_unique).
	/// Returns the address of the inserted element,
	/// or the address of the element with an equivalent key.
	pub fn insert_unique_hint(&mut self, hint: Address, value: V) -> Address {
		if self.is_empty() {
			return self.insert_unique(value).0;
		}

		match hint.id() {
			None => {
				let rightmost = self.rightmost.unwrap();
				if self.less.less(self.key(rightmost), X::key_of(&value)) {
					return Address::new(self.link_leaf(Some(rightmost), false, value));
				}
			}
			Some(id) if self.leftmost == Some(id) => {
				if self.less.less(X::key_of(&value), self.key(id)) {
					return Address::new(self.link_leaf(Some(id), true, value));
				}
			}
			Some(id) => {
				let before = self.previous_address(hint).id().unwrap();
				if self.less.less(self.key(before), X::key_of(&value))
					&& self.less.less(X::key_of(&value), self.key(id))
				{
					return Address::new(self.link_between(before, id, value));
				}
			}
		}

		self.insert_unique(value).0
	}

	/// Inserts a value, even if elements with an equivalent key are present.
	///
	/// The new element is placed after every element with an equivalent key.
	pub fn insert_equal(&mut self, value: V) -> Address {
		let (y, comp) = self.descend(X::key_of(&value));
		Address::new(self.link_leaf(y, comp, value))
	}

	/// Inserts a value, even if elements with an equivalent key are present,
	/// using `hint` as a suggestion for the position.
	///
	/// If the value can be placed right before `hint` without breaking the order,
	/// it is placed there. Otherwise this is equivalent to
	/// [`insert_equal`](RbTree::insert_equal).
	pub fn insert_equal_hint(&mut self, hint: Address, value: V) -> Address {
		if self.is_empty() {
			return self.insert_equal(value);
		}

		match hint.id() {
			None => {
				let rightmost = self.rightmost.unwrap();
				if !self.less.less(X::key_of(&value), self.key(rightmost)) {
					return Address::new(self.link_leaf(Some(rightmost), false, value));
				}
			}
			Some(id) if self.leftmost == Some(id) => {
				if !self.less.less(self.key(id), X::key_of(&value)) {
					return Address::new(self.link_leaf(Some(id), true, value));
				}
			}
			Some(id) => {
				let before = self.previous_address(hint).id().unwrap();
				if !self.less.less(X::key_of(&value), self.key(before))
					&& !self.less.less(self.key(id), X::key_of(&value))
				{
					return Address::new(self.link_between(before, id, value));
				}
			}
		}

		self.insert_equal(value)
	}

	/// Links a new leaf between two consecutive nodes `before` and `after`.
	#[inline]
	fn link_between(&mut self, before: usize, after: usize, value: V) -> usize {
		if self.node(before).right().is_none() {
			self.link_leaf(Some(before), false, value)
		} else {
			// `after` is the minimum of the right subtree of `before`.
			self.link_leaf(Some(after), true, value)
		}
	}

	/// Inserts each value of the iterator in sequence with
	/// [`insert_unique`](RbTree::insert_unique).
	pub fn insert_unique_range<I: IntoIterator<Item = V>>(&mut self, iter: I) {
		for value in iter {
			self.insert_unique(value);
		}
	}

	/// Inserts each value of the iterator in sequence with
	/// [`insert_equal`](RbTree::insert_equal).
	pub fn insert_equal_range<I: IntoIterator<Item = V>>(&mut self, iter: I) {
		for value in iter {
			self.insert_equal(value);
		}
	}

	/// Erases the element at the given address.
	///
	/// Returns the address of the following element.
	/// Erasing `END` does nothing and returns `END`.
	#[inline]
	pub fn erase(&mut self, addr: Address) -> Address {
		match self.remove_at(addr) {
			Some((_, next)) => next,
			None => Address::END,
		}
	}

	/// Erases every element of the `[first, last)` address range.
	///
	/// Returns the number of erased elements.
	pub fn erase_range(&mut self, mut first: Address, last: Address) -> usize {
		if first == self.begin() && last.is_end() {
			let len = self.len;
			self.clear();
			return len;
		}

		let mut count = 0;
		while first != last {
			first = self.erase(first);
			count += 1;
		}

		count
	}

	/// Erases every element whose key is equivalent to `key`.
	///
	/// Returns the number of erased elements.
	#[inline]
	pub fn erase_key(&mut self, key: &X::Key) -> usize {
		let (first, last) = self.equal_range(key);
		self.erase_range(first, last)
	}

	/// Removes and returns an element whose key is equivalent to `key`.
	#[inline]
	pub fn take(&mut self, key: &X::Key) -> Option<V> {
		let addr = self.find(key);
		self.remove_at(addr).map(|(value, _)| value)
	}

	/// Removes and returns the first element.
	#[inline]
	pub fn pop_first(&mut self) -> Option<V> {
		let addr = self.begin();
		self.remove_at(addr).map(|(value, _)| value)
	}

	/// Removes and returns the last element.
	#[inline]
	pub fn pop_last(&mut self) -> Option<V> {
		let addr = self.rightmost.into();
		self.remove_at(addr).map(|(value, _)| value)
	}
}

impl<V, X, L, C: SlabMut<Node<V>>> RbTree<V, X, L, C>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	/// Clears the tree, removing all elements.
	///
	/// Nodes are released with an explicit worklist, without recursion.
	pub fn clear(&mut self) {
		log::trace!("clearing {} nodes", self.len);

		let mut stack: SmallVec<[usize; 64]> = SmallVec::new();
		stack.extend(self.root);

		while let Some(id) = stack.pop() {
			let node = self.release_node(id);
			stack.extend(node.left());
			stack.extend(node.right());
		}

		self.root = None;
		self.leftmost = None;
		self.rightmost = None;
		self.len = 0;
	}
}

impl<V, X, L, C: Default> Default for RbTree<V, X, L, C>
where
	L: Default,
{
	#[inline]
	fn default() -> Self {
		RbTree::new()
	}
}

impl<V: Clone, X, L: Clone, C: Clone> Clone for RbTree<V, X, L, C> {
	#[inline]
	fn clone(&self) -> Self {
		RbTree {
			nodes: self.nodes.clone(),
			root: self.root,
			leftmost: self.leftmost,
			rightmost: self.rightmost,
			len: self.len,
			less: self.less.clone(),
			v: PhantomData,
			x: PhantomData,
		}
	}
}

impl<V, X: KeyOfValue<V>, L: Compare<X::Key> + Default, C: SlabMut<Node<V>> + Default>
	FromIterator<V> for RbTree<V, X, L, C>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	#[inline]
	fn from_iter<T>(iter: T) -> RbTree<V, X, L, C>
	where
		T: IntoIterator<Item = V>,
	{
		let mut tree = RbTree::new();
		tree.insert_unique_range(iter);
		tree
	}
}

impl<V, X: KeyOfValue<V>, L: Compare<X::Key>, C: SlabMut<Node<V>>> Extend<V>
	for RbTree<V, X, L, C>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	#[inline]
	fn extend<T>(&mut self, iter: T)
	where
		T: IntoIterator<Item = V>,
	{
		self.insert_unique_range(iter)
	}
}

impl<V: PartialEq, X, L, C: Slab<Node<V>>, D: Slab<Node<V>>> PartialEq<RbTree<V, X, L, D>>
	for RbTree<V, X, L, C>
where
	C: SimpleCollectionRef,
	D: SimpleCollectionRef,
{
	fn eq(&self, other: &RbTree<V, X, L, D>) -> bool {
		if self.len() == other.len() {
			self.iter().zip(other.iter()).all(|(a, b)| a == b)
		} else {
			false
		}
	}
}

impl<V: Eq, X, L, C: Slab<Node<V>>> Eq for RbTree<V, X, L, C> where C: SimpleCollectionRef {}

impl<V: Hash, X, L, C: Slab<Node<V>>> Hash for RbTree<V, X, L, C>
where
	C: SimpleCollectionRef,
{
	#[inline]
	fn hash<H: Hasher>(&self, h: &mut H) {
		self.len.hash(h);
		for value in self {
			value.hash(h);
		}
	}
}

impl<V: fmt::Debug, X, L, C: Slab<Node<V>>> fmt::Debug for RbTree<V, X, L, C>
where
	C: SimpleCollectionRef,
{
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_set().entries(self.iter()).finish()
	}
}
