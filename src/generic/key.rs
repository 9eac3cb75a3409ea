//! Key extraction and ordering.
//!
//! A red-black tree stores values of type `V` and orders them by a key
//! extracted from each value with a [`KeyOfValue`] projection,
//! using a strict-less [`Compare`] predicate.
//! The tree never assumes a default total order on its values.
use std::marker::PhantomData;

/// Projection from a stored value to its comparison key.
///
/// The projection must be pure: calling it twice on the same value must
/// return equal keys.
pub trait KeyOfValue<V> {
	type Key;

	fn key_of(value: &V) -> &Self::Key;
}

/// Identity projection, used by sets.
#[derive(Clone, Copy, Default, Debug)]
pub struct Identity;

impl<T> KeyOfValue<T> for Identity {
	type Key = T;

	#[inline]
	fn key_of(value: &T) -> &T {
		value
	}
}

/// First component projection, used by maps storing `(key, mapped)` pairs.
#[derive(Clone, Copy, Default, Debug)]
pub struct First;

impl<K, M> KeyOfValue<(K, M)> for First {
	type Key = K;

	#[inline]
	fn key_of(value: &(K, M)) -> &K {
		&value.0
	}
}

/// Strict weak ordering on keys.
///
/// `less(a, b)` must return `true` if and only if `a` is strictly ordered before `b`.
/// Two keys `a` and `b` are considered equivalent when neither `less(a, b)` nor
/// `less(b, a)` holds.
pub trait Compare<K: ?Sized> {
	fn less(&self, a: &K, b: &K) -> bool;
}

/// Ascending order given by [`Ord`].
#[derive(Clone, Copy, Default, Debug)]
pub struct Natural;

impl<K: Ord + ?Sized> Compare<K> for Natural {
	#[inline]
	fn less(&self, a: &K, b: &K) -> bool {
		a < b
	}
}

/// Descending order given by [`Ord`].
#[derive(Clone, Copy, Default, Debug)]
pub struct Greater;

impl<K: Ord + ?Sized> Compare<K> for Greater {
	#[inline]
	fn less(&self, a: &K, b: &K) -> bool {
		b < a
	}
}

impl<K: ?Sized, F> Compare<K> for F
where
	F: Fn(&K, &K) -> bool,
{
	#[inline]
	fn less(&self, a: &K, b: &K) -> bool {
		self(a, b)
	}
}

/// Ordering on a projection of the key.
///
/// ```
/// use rbtree_slab::generic::key::{By, Compare};
///
/// let by_abs: By<_, i32> = By::new(|x: &i32| x.abs());
/// assert!(by_abs.less(&-1, &2));
/// assert!(!by_abs.less(&-3, &3));
/// ```
pub struct By<F, T> {
	f: F,
	t: PhantomData<fn() -> T>,
}

impl<F, T> By<F, T> {
	pub fn new(f: F) -> Self {
		By { f, t: PhantomData }
	}
}

impl<F: Clone, T> Clone for By<F, T> {
	fn clone(&self) -> Self {
		By::new(self.f.clone())
	}
}

impl<K: ?Sized, F, T: Ord> Compare<K> for By<F, T>
where
	F: Fn(&K) -> T,
{
	#[inline]
	fn less(&self, a: &K, b: &K) -> bool {
		(self.f)(a) < (self.f)(b)
	}
}
