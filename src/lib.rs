//! This crate provides a red-black tree implementation
//! where nodes are allocated in a slab-like container
//! and linked together by their identifiers.
//!
//! The [`RbTree`] type is the ordered associative container on which
//! sets, multisets, maps and multimaps are built.
//! It supports unique-key and equal-key insertion, search by key
//! ([`find`](generic::RbTree::find), [`lower_bound`](generic::RbTree::lower_bound),
//! [`upper_bound`](generic::RbTree::upper_bound), [`equal_range`](generic::RbTree::equal_range)),
//! and bidirectional traversal with [`Cursor`](generic::Cursor)s where the end position
//! follows the maximum element.
//!
//! ```
//! use rbtree_slab::RbMultiSet;
//!
//! let mut set: RbMultiSet<i32> = (0..10).chain(0..10).collect();
//! assert_eq!(set.count(&5), 2);
//!
//! set.remove_all(&5);
//! assert_eq!(set.count(&5), 0);
//! assert_eq!(set.len(), 18);
//! assert!(set.as_tree().rb_verify());
//! ```
//!
//! The types of the [`generic`] module are parametrised by their storage.
//! The type aliases of the crate root use [`slab::Slab`] and require the `std-slab`
//! feature, enabled by default.
#[cfg(feature = "std-slab")]
use slab::Slab;

pub mod generic;

#[cfg(feature = "std-slab")]
use generic::key::Natural;

/// Red-black tree based on `Slab`.
#[cfg(feature = "std-slab")]
pub type RbTree<V, X, L> = generic::RbTree<V, X, L, Slab<generic::Node<V>>>;

/// Red-black tree set based on `Slab`.
#[cfg(feature = "std-slab")]
pub type RbSet<T> = generic::RbSet<T, Natural, Slab<generic::Node<T>>>;

/// Red-black tree multiset based on `Slab`.
#[cfg(feature = "std-slab")]
pub type RbMultiSet<T> = generic::RbMultiSet<T, Natural, Slab<generic::Node<T>>>;

/// Red-black tree map based on `Slab`.
#[cfg(feature = "std-slab")]
pub type RbMap<K, M> = generic::RbMap<K, M, Natural, Slab<generic::Node<(K, M)>>>;

/// Red-black tree multimap based on `Slab`.
#[cfg(feature = "std-slab")]
pub type RbMultiMap<K, M> = generic::RbMultiMap<K, M, Natural, Slab<generic::Node<(K, M)>>>;
