use crate::generic::{
	node::{Address, Color, Node},
	RbTree,
};
use cc_traits::{SimpleCollectionMut, SimpleCollectionRef, Slab, SlabMut};

/// Extension methods.
///
/// This trait can be imported to access the internal methods of the red-black tree.
/// These methods are not intended to be directly called by users, but can be used to
/// extends the data structure with new functionalities.
pub trait RbTreeExt<V> {
	/// Get the root node id.
	///
	/// Returns `None` if the tree is empty.
	fn root_id(&self) -> Option<usize>;

	/// Get the id of the minimum node, if any.
	fn leftmost_id(&self) -> Option<usize>;

	/// Get the id of the maximum node, if any.
	fn rightmost_id(&self) -> Option<usize>;

	/// Get the node associated to the given `id`.
	///
	/// Panics if `id` is out of bounds.
	fn node(&self, id: usize) -> &Node<V>;

	/// Checks if the given link points to a red node.
	///
	/// Null links are black.
	fn is_red(&self, id: Option<usize>) -> bool;

	/// Minimum node of the subtree rooted in `id`.
	fn minimum(&self, id: usize) -> usize;

	/// Maximum node of the subtree rooted in `id`.
	fn maximum(&self, id: usize) -> usize;

	/// Get the in-order successor address.
	///
	/// The successor of the maximum is `END`, and the successor of `END` is the minimum.
	///
	/// ```text
	///              ┌───┐
	///        ┌─────│ 4 │─────┐          4 has a right child:
	///        │     └───┘     │          the successor is the minimum of its right subtree (5).
	///      ┌───┐           ┌───┐
	///    ┌─│ 2 │─┐       ┌─│ 6 │        3 has no right child:
	///    │ └───┘ │       │ └───┘        climb while coming from a right child,
	///  ┌───┐   ┌───┐   ┌───┐            the successor is the first ancestor reached
	///  │ 1 │   │ 3 │   │ 5 │            from a left child (4).
	///  └───┘   └───┘   └───┘
	/// ```
	fn next_address(&self, addr: Address) -> Address;

	/// Get the in-order predecessor address.
	///
	/// The predecessor of `END` is the maximum, and the predecessor of the minimum is `END`.
	fn previous_address(&self, addr: Address) -> Address;
}

pub trait RbTreeExtMut<V> {
	/// Set the new known number of items in the tree.
	fn set_len(&mut self, len: usize);

	fn set_root_id(&mut self, id: Option<usize>);

	/// Get the node associated to the given `id` mutabily.
	///
	/// Panics if `id` is out of bounds.
	fn node_mut(&mut self, id: usize) -> &mut Node<V>;

	/// Links a new red leaf holding `value` under `parent`, then rebalances the tree.
	///
	/// If `parent` is `None` the tree must be empty and the leaf becomes the root.
	/// Otherwise the leaf becomes the left child of `parent` if `left` is `true`,
	/// its right child otherwise. The target child slot must be free.
	fn link_leaf(&mut self, parent: Option<usize>, left: bool, value: V) -> usize;

	/// Left rotation around the pivot node `x`.
	///
	/// ```text
	///     x                y
	///    ╱ ╲              ╱ ╲
	///   a   y     =>     x   c
	///      ╱ ╲          ╱ ╲
	///     b   c        a   b
	/// ```
	fn rotate_left(&mut self, x: usize);

	/// Right rotation around the pivot node `x`.
	fn rotate_right(&mut self, x: usize);

	/// Restore the red-black invariants after linking the red node `x`.
	fn rebalance_insert(&mut self, x: usize);

	/// Unlink the node `z` from the tree structure and restore the red-black invariants.
	///
	/// The node itself is not released: its slot is still allocated and must be released
	/// by the caller.
	/// When `z` has two children, its in-order successor takes its structural position and
	/// color, so that no value is moved between nodes.
	fn rebalance_erase(&mut self, z: usize);

	/// Remove the item at the given address.
	///
	/// Returns the removed value and the address of its successor,
	/// or `None` if the address is `END`.
	fn remove_at(&mut self, addr: Address) -> Option<(V, Address)>;

	/// Allocate a free identifier for the given node.
	fn allocate_node(&mut self, node: Node<V>) -> usize;

	/// Release the given node identifier and return the node it used to identify.
	fn release_node(&mut self, id: usize) -> Node<V>;
}

impl<V, X, L, C: Slab<Node<V>>> RbTreeExt<V> for RbTree<V, X, L, C>
where
	C: SimpleCollectionRef,
{
	#[inline]
	fn root_id(&self) -> Option<usize> {
		self.root
	}

	#[inline]
	fn leftmost_id(&self) -> Option<usize> {
		self.leftmost
	}

	#[inline]
	fn rightmost_id(&self) -> Option<usize> {
		self.rightmost
	}

	#[inline]
	fn node(&self, id: usize) -> &Node<V> {
		C::into_ref(self.nodes.get(id).unwrap())
	}

	#[inline]
	fn is_red(&self, id: Option<usize>) -> bool {
		match id {
			Some(id) => self.node(id).is_red(),
			None => false,
		}
	}

	#[inline]
	fn minimum(&self, mut id: usize) -> usize {
		while let Some(left) = self.node(id).left() {
			id = left
		}

		id
	}

	#[inline]
	fn maximum(&self, mut id: usize) -> usize {
		while let Some(right) = self.node(id).right() {
			id = right
		}

		id
	}

	fn next_address(&self, addr: Address) -> Address {
		match addr.id() {
			Some(mut id) => {
				if let Some(right) = self.node(id).right() {
					return Address::new(self.minimum(right));
				}

				loop {
					match self.node(id).parent() {
						Some(parent) if self.node(parent).right() == Some(id) => id = parent,
						parent => return parent.into(),
					}
				}
			}
			None => self.leftmost.into(),
		}
	}

	fn previous_address(&self, addr: Address) -> Address {
		match addr.id() {
			Some(mut id) => {
				if let Some(left) = self.node(id).left() {
					return Address::new(self.maximum(left));
				}

				loop {
					match self.node(id).parent() {
						Some(parent) if self.node(parent).left() == Some(id) => id = parent,
						parent => return parent.into(),
					}
				}
			}
			None => self.rightmost.into(),
		}
	}
}

impl<V, X, L, C: SlabMut<Node<V>>> RbTreeExtMut<V> for RbTree<V, X, L, C>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	#[inline]
	fn set_len(&mut self, new_len: usize) {
		self.len = new_len
	}

	#[inline]
	fn set_root_id(&mut self, id: Option<usize>) {
		self.root = id
	}

	#[inline]
	fn node_mut(&mut self, id: usize) -> &mut Node<V> {
		C::into_mut(self.nodes.get_mut(id).unwrap())
	}

	fn link_leaf(&mut self, parent: Option<usize>, left: bool, value: V) -> usize {
		let id = self.allocate_node(Node::leaf(parent, value));

		match parent {
			Some(parent) => {
				if left {
					debug_assert!(self.node(parent).left().is_none());
					self.node_mut(parent).set_left(Some(id));
					if self.leftmost == Some(parent) {
						self.leftmost = Some(id)
					}
				} else {
					debug_assert!(self.node(parent).right().is_none());
					self.node_mut(parent).set_right(Some(id));
					if self.rightmost == Some(parent) {
						self.rightmost = Some(id)
					}
				}
			}
			None => {
				debug_assert!(self.root.is_none());
				self.root = Some(id);
				self.leftmost = Some(id);
				self.rightmost = Some(id);
			}
		}

		self.len += 1;
		self.rebalance_insert(id);
		id
	}

	fn rotate_left(&mut self, x: usize) {
		let y = self.node(x).right().unwrap();
		let y_left = self.node(y).left();

		self.node_mut(x).set_right(y_left);
		if let Some(y_left) = y_left {
			self.node_mut(y_left).set_parent(Some(x))
		}

		let x_parent = self.node(x).parent();
		self.node_mut(y).set_parent(x_parent);
		match x_parent {
			Some(p) => {
				if self.node(p).left() == Some(x) {
					self.node_mut(p).set_left(Some(y))
				} else {
					self.node_mut(p).set_right(Some(y))
				}
			}
			None => self.root = Some(y),
		}

		self.node_mut(y).set_left(Some(x));
		self.node_mut(x).set_parent(Some(y));
	}

	fn rotate_right(&mut self, x: usize) {
		let y = self.node(x).left().unwrap();
		let y_right = self.node(y).right();

		self.node_mut(x).set_left(y_right);
		if let Some(y_right) = y_right {
			self.node_mut(y_right).set_parent(Some(x))
		}

		let x_parent = self.node(x).parent();
		self.node_mut(y).set_parent(x_parent);
		match x_parent {
			Some(p) => {
				if self.node(p).right() == Some(x) {
					self.node_mut(p).set_right(Some(y))
				} else {
					self.node_mut(p).set_left(Some(y))
				}
			}
			None => self.root = Some(y),
		}

		self.node_mut(y).set_right(Some(x));
		self.node_mut(x).set_parent(Some(y));
	}

	fn rebalance_insert(&mut self, mut x: usize) {
		self.node_mut(x).set_color(Color::Red);

		while self.root != Some(x) {
			let parent = match self.node(x).parent() {
				Some(parent) if self.node(parent).is_red() => parent,
				_ => break,
			};

			// a red node is never the root.
			let grand_parent = self.node(parent).parent().unwrap();

			if self.node(grand_parent).left() == Some(parent) {
				let uncle = self.node(grand_parent).right();

				if self.is_red(uncle) {
					// recolor and continue from the grand parent.
					self.node_mut(parent).set_color(Color::Black);
					self.node_mut(uncle.unwrap()).set_color(Color::Black);
					self.node_mut(grand_parent).set_color(Color::Red);
					x = grand_parent;
				} else {
					let mut parent = parent;
					if self.node(parent).right() == Some(x) {
						// inside child: reduce to the outside case.
						x = parent;
						self.rotate_left(x);
						parent = self.node(x).parent().unwrap();
					}

					self.node_mut(parent).set_color(Color::Black);
					self.node_mut(grand_parent).set_color(Color::Red);
					self.rotate_right(grand_parent);
				}
			} else {
				let uncle = self.node(grand_parent).left();

				if self.is_red(uncle) {
					self.node_mut(parent).set_color(Color::Black);
					self.node_mut(uncle.unwrap()).set_color(Color::Black);
					self.node_mut(grand_parent).set_color(Color::Red);
					x = grand_parent;
				} else {
					let mut parent = parent;
					if self.node(parent).left() == Some(x) {
						x = parent;
						self.rotate_right(x);
						parent = self.node(x).parent().unwrap();
					}

					self.node_mut(parent).set_color(Color::Black);
					self.node_mut(grand_parent).set_color(Color::Red);
					self.rotate_left(grand_parent);
				}
			}
		}

		if let Some(root) = self.root {
			self.node_mut(root).set_color(Color::Black)
		}
	}

	fn rebalance_erase(&mut self, z: usize) {
		let z_left = self.node(z).left();
		let z_right = self.node(z).right();
		let z_parent = self.node(z).parent();

		// `x` replaces the node physically removed from its slot, `x_parent` is its parent.
		let x: Option<usize>;
		let x_parent: Option<usize>;
		let removed_color: Color;

		match (z_left, z_right) {
			(Some(z_left), Some(z_right)) => {
				// the successor `y` takes the structural position of `z`.
				let y = self.minimum(z_right);
				x = self.node(y).right();

				self.node_mut(z_left).set_parent(Some(y));
				self.node_mut(y).set_left(Some(z_left));

				if y != z_right {
					let y_parent = self.node(y).parent().unwrap();
					x_parent = Some(y_parent);
					if let Some(x) = x {
						self.node_mut(x).set_parent(Some(y_parent))
					}

					// `y` is a left child since it is the minimum of `z_right`.
					self.node_mut(y_parent).set_left(x);
					self.node_mut(y).set_right(Some(z_right));
					self.node_mut(z_right).set_parent(Some(y));
				} else {
					x_parent = Some(y);
				}

				self.replace_child(z_parent, z, Some(y));
				self.node_mut(y).set_parent(z_parent);

				// `y` takes the color of `z`, the removed color is the one of `y`.
				let y_color = self.node(y).color();
				let z_color = self.node(z).color();
				self.node_mut(y).set_color(z_color);
				self.node_mut(z).set_color(y_color);
				removed_color = y_color;
			}
			(z_left, z_right) => {
				x = z_left.or(z_right);
				x_parent = z_parent;

				if let Some(x) = x {
					self.node_mut(x).set_parent(z_parent)
				}

				self.replace_child(z_parent, z, x);

				if self.leftmost == Some(z) {
					self.leftmost = match z_right {
						Some(_) => Some(self.minimum(x.unwrap())),
						None => z_parent,
					}
				}

				if self.rightmost == Some(z) {
					self.rightmost = match z_left {
						Some(_) => Some(self.maximum(x.unwrap())),
						None => z_parent,
					}
				}

				removed_color = self.node(z).color();
			}
		}

		if removed_color.is_black() {
			self.rebalance_erase_fixup(x, x_parent)
		}
	}

	fn remove_at(&mut self, addr: Address) -> Option<(V, Address)> {
		let id = addr.id()?;
		let next = self.next_address(addr);
		self.rebalance_erase(id);
		self.len -= 1;
		let node = self.release_node(id);
		Some((node.into_value(), next))
	}

	#[inline]
	fn allocate_node(&mut self, node: Node<V>) -> usize {
		self.nodes.insert(node)
	}

	#[inline]
	fn release_node(&mut self, id: usize) -> Node<V> {
		self.nodes.remove(id).unwrap()
	}
}

impl<V, X, L, C: SlabMut<Node<V>>> RbTree<V, X, L, C>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	/// Replace the child `old` of `parent` by `new`.
	///
	/// If `parent` is `None`, then `old` is the root and `new` becomes the root.
	#[inline]
	fn replace_child(&mut self, parent: Option<usize>, old: usize, new: Option<usize>) {
		match parent {
			Some(parent) => {
				if self.node(parent).left() == Some(old) {
					self.node_mut(parent).set_left(new)
				} else {
					self.node_mut(parent).set_right(new)
				}
			}
			None => self.root = new,
		}
	}

	/// Restore the black height after the removal of a black node.
	///
	/// `x` is the (possibly null) node that took the place of the removed node,
	/// and `x_parent` its parent.
	fn rebalance_erase_fixup(&mut self, mut x: Option<usize>, mut x_parent: Option<usize>) {
		while x != self.root && !self.is_red(x) {
			// `x` is not the root so it has a parent.
			let parent = x_parent.unwrap();

			if self.node(parent).left() == x {
				// the sibling cannot be null since its side holds at least one black node.
				let mut w = self.node(parent).right().unwrap();

				if self.node(w).is_red() {
					self.node_mut(w).set_color(Color::Black);
					self.node_mut(parent).set_color(Color::Red);
					self.rotate_left(parent);
					w = self.node(parent).right().unwrap();
				}

				let w_left = self.node(w).left();
				let w_right = self.node(w).right();
				if !self.is_red(w_left) && !self.is_red(w_right) {
					self.node_mut(w).set_color(Color::Red);
					x = Some(parent);
					x_parent = self.node(parent).parent();
				} else {
					if !self.is_red(w_right) {
						self.node_mut(w_left.unwrap()).set_color(Color::Black);
						self.node_mut(w).set_color(Color::Red);
						self.rotate_right(w);
						w = self.node(parent).right().unwrap();
					}

					let parent_color = self.node(parent).color();
					self.node_mut(w).set_color(parent_color);
					self.node_mut(parent).set_color(Color::Black);
					if let Some(w_right) = self.node(w).right() {
						self.node_mut(w_right).set_color(Color::Black)
					}
					self.rotate_left(parent);
					break;
				}
			} else {
				let mut w = self.node(parent).left().unwrap();

				if self.node(w).is_red() {
					self.node_mut(w).set_color(Color::Black);
					self.node_mut(parent).set_color(Color::Red);
					self.rotate_right(parent);
					w = self.node(parent).left().unwrap();
				}

				let w_left = self.node(w).left();
				let w_right = self.node(w).right();
				if !self.is_red(w_left) && !self.is_red(w_right) {
					self.node_mut(w).set_color(Color::Red);
					x = Some(parent);
					x_parent = self.node(parent).parent();
				} else {
					if !self.is_red(w_left) {
						self.node_mut(w_right.unwrap()).set_color(Color::Black);
						self.node_mut(w).set_color(Color::Red);
						self.rotate_left(w);
						w = self.node(parent).left().unwrap();
					}

					let parent_color = self.node(parent).color();
					self.node_mut(w).set_color(parent_color);
					self.node_mut(parent).set_color(Color::Black);
					if let Some(w_left) = self.node(w).left() {
						self.node_mut(w_left).set_color(Color::Black)
					}
					self.rotate_right(parent);
					break;
				}
			}
		}

		if let Some(x) = x {
			self.node_mut(x).set_color(Color::Black)
		}
	}
}
