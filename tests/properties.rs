use quickcheck::{Arbitrary, Gen, TestResult};
use quickcheck_macros::quickcheck;
use rbtree_slab::{
	generic::key::{First, Identity, Natural},
	RbTree,
};
use std::collections::{BTreeMap, BTreeSet};

type Set = RbTree<u8, Identity, Natural>;
type Multi = RbTree<(u8, usize), First, Natural>;

#[derive(Clone, Copy, Debug)]
enum Op {
	Insert(u8),
	Remove(u8),
}

impl Arbitrary for Op {
	fn arbitrary(g: &mut Gen) -> Self {
		if bool::arbitrary(g) {
			Op::Insert(u8::arbitrary(g))
		} else {
			Op::Remove(u8::arbitrary(g))
		}
	}
}

#[quickcheck]
fn unique_matches_model(ops: Vec<Op>) -> bool {
	let mut tree = Set::new();
	let mut model = BTreeSet::new();

	for op in ops {
		match op {
			Op::Insert(k) => {
				if tree.insert_unique(k).1 != model.insert(k) {
					return false;
				}
			}
			Op::Remove(k) => {
				if tree.erase_key(&k) != model.remove(&k) as usize {
					return false;
				}
			}
		}

		if tree.verify().is_err() || tree.len() != model.len() {
			return false;
		}
	}

	tree.iter().eq(model.iter())
}

#[quickcheck]
fn equal_matches_model(ops: Vec<Op>) -> bool {
	let mut tree = Multi::new();
	let mut model: BTreeMap<u8, Vec<usize>> = BTreeMap::new();

	for (i, op) in ops.into_iter().enumerate() {
		match op {
			Op::Insert(k) => {
				tree.insert_equal((k, i));
				model.entry(k).or_default().push(i);
			}
			Op::Remove(k) => {
				let addr = tree.lower_bound(&k);
				let found = match tree.get(addr) {
					Some((key, _)) => *key == k,
					None => false,
				};

				let expected = match model.get_mut(&k) {
					Some(seq) if !seq.is_empty() => Some(seq.remove(0)),
					_ => None,
				};

				match expected {
					Some(j) => {
						if !found || tree.get(addr) != Some(&(k, j)) {
							return false;
						}

						tree.erase(addr);
					}
					None => {
						if found {
							return false;
						}
					}
				}
			}
		}

		if tree.verify().is_err() {
			return false;
		}
	}

	let expected: Vec<_> = model
		.iter()
		.flat_map(|(k, seq)| seq.iter().map(move |i| (*k, *i)))
		.collect();
	tree.iter().copied().eq(expected)
}

#[quickcheck]
fn erase_anywhere_keeps_invariants(values: Vec<u16>, picks: Vec<usize>) -> TestResult {
	if values.is_empty() {
		return TestResult::discard();
	}

	let mut tree: RbTree<u16, Identity, Natural> = RbTree::new();
	tree.insert_equal_range(values.iter().copied());

	let mut model = values;
	model.sort_unstable();

	for pick in picks {
		if tree.is_empty() {
			break;
		}

		let n = pick % tree.len();
		let addr = tree.advance(tree.begin(), n as isize);
		let next = tree.erase(addr);
		model.remove(n);

		if tree.verify().is_err() {
			return TestResult::failed();
		}

		if tree.get(next) != model.get(n) {
			return TestResult::failed();
		}
	}

	TestResult::from_bool(tree.iter().eq(model.iter()))
}

#[quickcheck]
fn sorted_and_stable(values: Vec<(u8, u8)>) -> bool {
	let mut tree: RbTree<(u8, u8), First, Natural> = RbTree::new();
	tree.insert_equal_range(values.iter().copied());

	let mut expected = values;
	expected.sort_by_key(|(k, _)| *k);

	tree.rb_verify() && tree.iter().copied().eq(expected)
}

#[quickcheck]
fn bounds_and_count(values: Vec<u8>, key: u8) -> bool {
	let mut tree = Set::new();
	tree.insert_equal_range(values.iter().copied());

	let mut sorted = values;
	sorted.sort_unstable();

	let lower = sorted.iter().position(|v| *v >= key);
	let upper = sorted.iter().position(|v| *v > key);

	tree.get(tree.lower_bound(&key)) == lower.map(|i| &sorted[i])
		&& tree.get(tree.upper_bound(&key)) == upper.map(|i| &sorted[i])
		&& tree.count(&key) == sorted.iter().filter(|v| **v == key).count()
		&& tree.contains(&key) == sorted.contains(&key)
}

#[quickcheck]
fn reverse_traversal(values: Vec<u8>) -> bool {
	let tree: Set = values.into_iter().collect();

	let forward: Vec<_> = tree.iter().copied().collect();
	let mut backward = Vec::new();
	let mut cursor = tree.rbegin();
	while let Some(v) = cursor.get() {
		backward.push(*v);
		cursor.move_next();
	}

	backward.reverse();
	forward == backward && cursor == tree.rend()
}

#[quickcheck]
fn clone_is_independent(values: Vec<u8>) -> bool {
	let tree: Set = values.iter().copied().collect();
	let mut cloned = tree.clone();

	for v in values.iter().take(values.len() / 2) {
		cloned.erase_key(v);
	}

	let fresh: Set = values.iter().copied().collect();
	tree == fresh && cloned.rb_verify()
}
