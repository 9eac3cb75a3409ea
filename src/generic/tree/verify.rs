use crate::generic::{
	key::{Compare, KeyOfValue},
	node::Node,
	RbTree, RbTreeExt,
};
use cc_traits::{SimpleCollectionRef, Slab};
use smallvec::SmallVec;
use std::fmt;

/// Broken structural invariant reported by [`RbTree::verify`].
///
/// Node identifiers are the slab indices of the offending nodes.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Violation {
	/// The cached root, leftmost and rightmost links disagree with the tree length.
	Header,

	/// The root has a parent.
	RootParent(usize),

	/// The root is red.
	RedRoot(usize),

	/// A red node has a red child.
	RedRed { parent: usize, child: usize },

	/// A child does not point back to its parent.
	ParentLink { parent: usize, child: usize },

	/// Two paths to a null link do not cross the same number of black nodes.
	BlackHeight {
		node: usize,
		expected: usize,
		found: usize,
	},

	/// A child is on the wrong side of its parent.
	Order { parent: usize, child: usize },

	/// The cached leftmost link is not the minimum.
	Leftmost {
		expected: Option<usize>,
		found: Option<usize>,
	},

	/// The cached rightmost link is not the maximum.
	Rightmost {
		expected: Option<usize>,
		found: Option<usize>,
	},

	/// The number of reachable nodes is not the tree length.
	Length { expected: usize, found: usize },
}

fn fmt_link(f: &mut fmt::Formatter, id: Option<usize>) -> fmt::Result {
	match id {
		Some(id) => write!(f, "node {}", id),
		None => write!(f, "no node"),
	}
}

impl fmt::Display for Violation {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Violation::Header => write!(f, "inconsistent root, leftmost and rightmost links"),
			Violation::RootParent(id) => write!(f, "root node {} has a parent", id),
			Violation::RedRoot(id) => write!(f, "root node {} is red", id),
			Violation::RedRed { parent, child } => {
				write!(f, "red node {} has a red child {}", parent, child)
			}
			Violation::ParentLink { parent, child } => write!(
				f,
				"node {} is a child of node {} but does not link back to it",
				child, parent
			),
			Violation::BlackHeight {
				node,
				expected,
				found,
			} => write!(
				f,
				"black height of node {} is {}, expected {}",
				node, found, expected
			),
			Violation::Order { parent, child } => {
				write!(f, "node {} is misplaced under node {}", child, parent)
			}
			Violation::Leftmost { expected, found } => {
				write!(f, "leftmost link is ")?;
				fmt_link(f, *found)?;
				write!(f, ", expected ")?;
				fmt_link(f, *expected)
			}
			Violation::Rightmost { expected, found } => {
				write!(f, "rightmost link is ")?;
				fmt_link(f, *found)?;
				write!(f, ", expected ")?;
				fmt_link(f, *expected)
			}
			Violation::Length { expected, found } => write!(
				f,
				"{} reachable nodes, expected {}",
				found, expected
			),
		}
	}
}

impl std::error::Error for Violation {}

impl<V, X: KeyOfValue<V>, L: Compare<X::Key>, C: Slab<Node<V>>> RbTree<V, X, L, C>
where
	C: SimpleCollectionRef,
{
	/// Number of black nodes on the path from `id` up to the root, both included.
	fn black_count(&self, mut id: usize) -> usize {
		let mut count = 0;
		loop {
			let node = self.node(id);
			if node.is_black() {
				count += 1
			}

			match node.parent() {
				Some(parent) => id = parent,
				None => break count,
			}
		}
	}

	/// Checks the red-black tree invariants.
	///
	/// The following properties are checked:
	///  - the root, leftmost and rightmost links are all unset exactly when the tree is empty,
	///  - the root has no parent and is black,
	///  - every child links back to its parent,
	///  - no red node has a red child,
	///  - every path from a node with a null link up to the root crosses the same number of
	///    black nodes,
	///  - every left child is not greater than its parent, every right child not less,
	///  - the in-order sequence is non-decreasing,
	///  - the leftmost and rightmost links are the minimum and maximum,
	///  - the number of reachable nodes is the tree length.
	///
	/// Runs in linear time without recursion.
	pub fn verify(&self) -> Result<(), Violation> {
		let root = match (self.root_id(), self.leftmost_id(), self.rightmost_id()) {
			(None, None, None) if self.is_empty() => return Ok(()),
			(Some(root), Some(_), Some(_)) if !self.is_empty() => root,
			_ => return Err(Violation::Header),
		};

		if self.node(root).parent().is_some() {
			return Err(Violation::RootParent(root));
		}

		if self.node(root).is_red() {
			return Err(Violation::RedRoot(root));
		}

		let expected_black_count = self.black_count(self.minimum(root));

		let mut stack: SmallVec<[usize; 64]> = SmallVec::new();
		stack.push(root);
		let mut count = 0;

		while let Some(id) = stack.pop() {
			count += 1;
			if count > self.len() {
				return Err(Violation::Length {
					expected: self.len(),
					found: count,
				});
			}

			let node = self.node(id);
			let key = X::key_of(node.value());

			if node.is_leaf_adjacent() {
				let found = self.black_count(id);
				if found != expected_black_count {
					return Err(Violation::BlackHeight {
						node: id,
						expected: expected_black_count,
						found,
					});
				}
			}

			for (child, left) in node
				.left()
				.map(|c| (c, true))
				.into_iter()
				.chain(node.right().map(|c| (c, false)))
			{
				let child_node = self.node(child);

				if child_node.parent() != Some(id) {
					return Err(Violation::ParentLink { parent: id, child });
				}

				if node.is_red() && child_node.is_red() {
					return Err(Violation::RedRed { parent: id, child });
				}

				let child_key = X::key_of(child_node.value());
				let misplaced = if left {
					self.key_comp().less(key, child_key)
				} else {
					self.key_comp().less(child_key, key)
				};

				if misplaced {
					return Err(Violation::Order { parent: id, child });
				}

				stack.push(child)
			}
		}

		if count != self.len() {
			return Err(Violation::Length {
				expected: self.len(),
				found: count,
			});
		}

		let minimum = self.minimum(root);
		if self.leftmost_id() != Some(minimum) {
			return Err(Violation::Leftmost {
				expected: Some(minimum),
				found: self.leftmost_id(),
			});
		}

		let maximum = self.maximum(root);
		if self.rightmost_id() != Some(maximum) {
			return Err(Violation::Rightmost {
				expected: Some(maximum),
				found: self.rightmost_id(),
			});
		}

		let mut addr = self.begin();
		while let Some(id) = addr.id() {
			let next = self.next_address(addr);
			if let Some(next_id) = next.id() {
				if self
					.key_comp()
					.less(X::key_of(self.node(next_id).value()), X::key_of(self.node(id).value()))
				{
					return Err(Violation::Order {
						parent: id,
						child: next_id,
					});
				}
			}

			addr = next
		}

		Ok(())
	}

	/// Checks the red-black tree invariants, logging the first broken one.
	///
	/// See [`verify`](RbTree::verify).
	pub fn rb_verify(&self) -> bool {
		match self.verify() {
			Ok(()) => true,
			Err(violation) => {
				log::warn!("red-black tree verification failed: {}", violation);
				false
			}
		}
	}
}
