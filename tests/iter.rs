use rbtree_slab::{
	generic::{
		key::{Identity, Natural},
		RbTreeExt,
	},
	RbMap, RbSet, RbTree,
};
use std::{cell::Cell, rc::Rc};

type Set = RbTree<i32, Identity, Natural>;

#[test]
pub fn iter() {
	let mut map = RbMap::new();
	for i in 0..10 {
		map.insert(i, i);
	}

	let mut i = 0;
	for (key, value) in &map {
		assert_eq!(*key, i);
		assert_eq!(*value, i);
		i += 1;
	}

	assert_eq!(i, 10)
}

#[test]
pub fn iter_rev() {
	let tree: Set = (0..10).collect();

	let values: Vec<_> = tree.iter().rev().copied().collect();
	assert_eq!(values, [9, 8, 7, 6, 5, 4, 3, 2, 1, 0]);
}

#[test]
pub fn iter_both_ends() {
	let tree: Set = (0..10).collect();
	let mut iter = tree.iter();

	assert_eq!(iter.len(), 10);
	assert_eq!(iter.next(), Some(&0));
	assert_eq!(iter.next_back(), Some(&9));
	assert_eq!(iter.next_back(), Some(&8));
	assert_eq!(iter.len(), 7);

	let rest: Vec<_> = iter.copied().collect();
	assert_eq!(rest, [1, 2, 3, 4, 5, 6, 7]);
}

#[test]
pub fn into_iter() {
	struct Element {
		/// Drop counter.
		counter: Rc<Cell<usize>>,
		value: i32,
	}

	impl Element {
		pub fn new(counter: &Rc<Cell<usize>>, value: i32) -> Self {
			Element {
				counter: counter.clone(),
				value,
			}
		}

		pub fn inner(&self) -> i32 {
			self.value
		}
	}

	impl Drop for Element {
		fn drop(&mut self) {
			let c = self.counter.get();
			self.counter.set(c + 1);
		}
	}

	let counter = Rc::new(Cell::new(0));
	let mut map = RbMap::new();
	for i in 0..100 {
		map.insert(i, Element::new(&counter, i));
	}

	for (key, value) in map {
		assert_eq!(key, value.inner());
	}

	assert_eq!(counter.get(), 100);

	let counter = Rc::new(Cell::new(0));
	let mut map = RbMap::new();
	for i in 0..100 {
		map.insert(i, Element::new(&counter, i));
	}

	let mut iter = map.into_iter();
	for i in 0..10 {
		let (key, value) = iter.next().unwrap();
		assert_eq!(key, i);
		assert_eq!(value.inner(), i);
	}

	let (key, _) = iter.next_back().unwrap();
	assert_eq!(key, 99);
	assert_eq!(iter.len(), 89);

	std::mem::drop(iter);
	assert_eq!(counter.get(), 100);
}

#[test]
pub fn into_iter_rev() {
	let set: RbSet<i32> = (0..10).collect();
	let values: Vec<_> = set.into_iter().rev().collect();
	assert_eq!(values, [9, 8, 7, 6, 5, 4, 3, 2, 1, 0]);
}

#[test]
pub fn end_is_a_ring() {
	let tree: Set = (0..10).collect();

	let max = tree.find(&9);
	let min = tree.find(&0);

	assert_eq!(tree.next_address(max), tree.end());
	assert_eq!(tree.previous_address(tree.end()), max);
	assert_eq!(tree.previous_address(min), tree.end());
	assert_eq!(tree.next_address(tree.end()), min);

	let empty = Set::new();
	assert_eq!(empty.begin(), empty.end());
	assert_eq!(empty.next_address(empty.end()), empty.end());
	assert_eq!(empty.previous_address(empty.end()), empty.end());
}

#[test]
pub fn cursor() {
	let tree: Set = (0..10).collect();

	let mut cursor = tree.cursor_begin();
	for i in 0..10 {
		assert!(!cursor.is_end());
		assert_eq!(cursor.get(), Some(&i));
		cursor.move_next();
	}

	assert!(cursor.is_end());
	assert_eq!(cursor, tree.cursor_end());
	assert_eq!(cursor.get(), None);

	cursor.move_prev();
	assert_eq!(cursor.get(), Some(&9));

	cursor.advance(-4);
	assert_eq!(cursor.get(), Some(&5));
	assert_eq!(cursor.address(), tree.find(&5));

	cursor.advance(2);
	assert_eq!(cursor.get(), Some(&7));

	let other = tree.cursor(tree.find(&2));
	assert_eq!(other.distance(&cursor), 5);
	assert_eq!(tree.cursor_begin().distance(&tree.cursor_end()), 10);
}

#[test]
pub fn rev_cursor() {
	let tree: Set = (0..10).collect();

	let mut cursor = tree.rbegin();
	let mut values = Vec::new();
	while !cursor.is_end() {
		values.push(*cursor.get().unwrap());
		cursor.move_next();
	}

	assert_eq!(values, [9, 8, 7, 6, 5, 4, 3, 2, 1, 0]);
	assert_eq!(cursor, tree.rend());

	cursor.move_prev();
	assert_eq!(cursor.get(), Some(&0));
	assert_eq!(cursor.base().get(), Some(&1));

	let mut cursor = tree.rbegin();
	assert_eq!(cursor.base(), tree.cursor_end());
	cursor.advance(10);
	assert_eq!(cursor, tree.rend());
	assert_eq!(tree.rbegin().distance(&tree.rend()), 10);
}

#[test]
pub fn advance_and_distance() {
	let tree: Set = (0..10).collect();

	assert_eq!(tree.get(tree.advance(tree.begin(), 3)), Some(&3));
	assert_eq!(tree.get(tree.advance(tree.end(), -1)), Some(&9));
	assert_eq!(tree.advance(tree.begin(), 10), tree.end());
	assert_eq!(tree.distance(tree.begin(), tree.end()), 10);
	assert_eq!(tree.distance(tree.find(&4), tree.find(&4)), 0);
}

#[test]
pub fn iter_between() {
	let tree: Set = (0..10).collect();

	let values: Vec<_> = tree.iter_between(tree.find(&2), tree.find(&5)).copied().collect();
	assert_eq!(values, [2, 3, 4]);

	let values: Vec<_> = tree
		.iter_between(tree.find(&2), tree.find(&5))
		.rev()
		.copied()
		.collect();
	assert_eq!(values, [4, 3, 2]);

	let values: Vec<_> = tree.iter_between(tree.find(&7), tree.end()).copied().collect();
	assert_eq!(values, [7, 8, 9]);
}

#[test]
pub fn debug() {
	let set: RbSet<i32> = (1..4).collect();
	assert_eq!(format!("{:?}", set), "{1, 2, 3}");

	let mut map = RbMap::new();
	map.insert(1, 'a');
	map.insert(2, 'b');
	assert_eq!(format!("{:?}", map), "{1: 'a', 2: 'b'}");
}
