use std::fmt;

mod addr;

pub use addr::Address;

/// Node color.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Color {
	Red,
	Black,
}

impl Color {
	#[inline]
	pub fn is_red(&self) -> bool {
		*self == Color::Red
	}

	#[inline]
	pub fn is_black(&self) -> bool {
		*self == Color::Black
	}
}

impl fmt::Display for Color {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Color::Red => write!(f, "red"),
			Color::Black => write!(f, "black"),
		}
	}
}

/// Red-black tree node.
///
/// Links are identifiers of other nodes in the same container.
/// The value is owned by the node and never moves to another node during rebalancing:
/// only the links and the color change.
#[derive(Clone)]
pub struct Node<V> {
	color: Color,
	parent: Option<usize>,
	left: Option<usize>,
	right: Option<usize>,
	value: V,
}

impl<V> Node<V> {
	/// Creates a new red leaf.
	#[inline]
	pub fn leaf(parent: Option<usize>, value: V) -> Node<V> {
		Node {
			color: Color::Red,
			parent,
			left: None,
			right: None,
			value,
		}
	}

	#[inline]
	pub fn color(&self) -> Color {
		self.color
	}

	#[inline]
	pub fn is_red(&self) -> bool {
		self.color.is_red()
	}

	#[inline]
	pub fn is_black(&self) -> bool {
		self.color.is_black()
	}

	#[inline]
	pub fn set_color(&mut self, color: Color) {
		self.color = color
	}

	#[inline]
	pub fn parent(&self) -> Option<usize> {
		self.parent
	}

	#[inline]
	pub fn set_parent(&mut self, parent: Option<usize>) {
		self.parent = parent
	}

	#[inline]
	pub fn left(&self) -> Option<usize> {
		self.left
	}

	#[inline]
	pub fn set_left(&mut self, left: Option<usize>) {
		self.left = left
	}

	#[inline]
	pub fn right(&self) -> Option<usize> {
		self.right
	}

	#[inline]
	pub fn set_right(&mut self, right: Option<usize>) {
		self.right = right
	}

	/// Returns `true` if the node has at most one child.
	#[inline]
	pub fn is_leaf_adjacent(&self) -> bool {
		self.left.is_none() || self.right.is_none()
	}

	#[inline]
	pub fn value(&self) -> &V {
		&self.value
	}

	/// Mutable access to the value.
	///
	/// It is a logic error to change the key of the value in a way that
	/// changes its ordering relative to the other values of the tree.
	#[inline]
	pub fn value_mut(&mut self) -> &mut V {
		&mut self.value
	}

	#[inline]
	pub fn into_value(self) -> V {
		self.value
	}

	#[cfg(feature = "dot")]
	#[inline]
	pub fn dot_write_label<W: std::io::Write>(&self, f: &mut W) -> std::io::Result<()>
	where
		V: fmt::Display,
	{
		write!(f, "{}", self.value)
	}
}

impl<V: fmt::Debug> fmt::Debug for Node<V> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_struct("Node")
			.field("color", &self.color)
			.field("parent", &self.parent)
			.field("left", &self.left)
			.field("right", &self.right)
			.field("value", &self.value)
			.finish()
	}
}
