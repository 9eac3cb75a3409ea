use rand::{rngs::SmallRng, seq::SliceRandom, SeedableRng};
use rbtree_slab::{
	generic::{
		key::{First, Identity, Natural},
		node::Address,
		RbTreeExt, RbTreeExtMut,
	},
	RbTree,
};

const SEED: u64 = 0x5eed;

type Map = RbTree<(usize, usize), First, Natural>;
type Set = RbTree<i32, Identity, Natural>;

#[test]
pub fn insert() {
	let mut tree = Map::new();

	for item in &ITEMS {
		let (addr, inserted) = tree.insert_unique(*item);
		assert!(inserted);
		assert_eq!(tree.get(addr), Some(item));
		assert!(tree.rb_verify());
	}

	assert_eq!(tree.len(), 100);

	let keys: Vec<_> = tree.iter().map(|(key, _)| *key).collect();
	let mut expected: Vec<_> = ITEMS.iter().map(|(key, _)| *key).collect();
	expected.sort_unstable();
	assert_eq!(keys, expected)
}

#[test]
pub fn remove() {
	let mut tree: Map = ITEMS.iter().copied().collect();

	let mut items = ITEMS;
	let mut rng = SmallRng::seed_from_u64(SEED);
	items.shuffle(&mut rng);

	for (key, value) in &items {
		assert_eq!(tree.take(key), Some((*key, *value)));
		assert_eq!(tree.verify(), Ok(()));
		assert!(!tree.contains(key))
	}

	assert!(tree.is_empty());
	assert_eq!(tree.begin(), tree.end())
}

#[test]
pub fn addresses() {
	let tree: Map = ITEMS.iter().copied().collect();

	for (key, _) in &ITEMS {
		let addr = tree.find(key);
		assert!(!addr.is_end());

		let before = tree.previous_address(addr);
		assert_ne!(before, addr);
		assert_eq!(tree.next_address(before), addr);

		let after = tree.next_address(addr);
		assert_ne!(after, addr);
		assert_eq!(tree.previous_address(after), addr);
	}
}

#[test]
pub fn stable_addresses() {
	let mut tree: Set = (0..100).collect();
	let addresses: Vec<_> = (0..100).map(|i| (i, tree.find(&i))).collect();

	let mut rng = SmallRng::seed_from_u64(SEED);
	let mut evens: Vec<_> = (0..50).map(|i| i * 2).collect();
	evens.shuffle(&mut rng);

	for i in &evens {
		assert_eq!(tree.take(i), Some(*i));
	}

	assert!(tree.rb_verify());
	for (i, addr) in addresses {
		if i % 2 == 1 {
			assert_eq!(tree.get(addr), Some(&i))
		}
	}
}

#[test]
pub fn unique_insert_sequence() {
	let mut tree = Set::new();

	for i in &[5, 3, 8, 1, 4, 7, 9] {
		tree.insert_unique(*i);
		assert!(tree.rb_verify());
	}

	let values: Vec<_> = tree.iter().copied().collect();
	assert_eq!(values, [1, 3, 4, 5, 7, 8, 9])
}

#[test]
pub fn duplicate_unique_insert() {
	let mut tree = Map::new();

	let (a, inserted) = tree.insert_unique((1, 10));
	assert!(inserted);

	let (b, inserted) = tree.insert_unique((1, 20));
	assert!(!inserted);
	assert_eq!(a, b);
	assert_eq!(tree.get(a), Some(&(1, 10)));
	assert_eq!(tree.len(), 1)
}

#[test]
pub fn equal_insert_is_stable() {
	let mut tree: RbTree<(i32, char), First, Natural> = RbTree::new();

	for item in &[(5, 'a'), (5, 'b'), (3, 'c'), (5, 'd')] {
		tree.insert_equal(*item);
		assert!(tree.rb_verify());
	}

	assert_eq!(tree.count(&5), 3);
	let values: Vec<_> = tree.iter().copied().collect();
	assert_eq!(values, [(3, 'c'), (5, 'a'), (5, 'b'), (5, 'd')])
}

#[test]
pub fn erase_key_equal() {
	let mut tree = Set::new();
	for i in 0..10 {
		tree.insert_equal(i);
		tree.insert_equal(i);
	}

	assert_eq!(tree.len(), 20);
	assert_eq!(tree.erase_key(&5), 2);
	assert_eq!(tree.count(&5), 0);
	assert_eq!(tree.len(), 18);
	assert!(tree.rb_verify());

	let values: Vec<_> = tree.iter().copied().collect();
	let expected: Vec<_> = (0..10).filter(|i| *i != 5).flat_map(|i| vec![i, i]).collect();
	assert_eq!(values, expected)
}

#[test]
pub fn erase_begin_until_empty() {
	let mut tree: Set = (0..10).collect();

	for n in (0..10).rev() {
		let next = tree.erase(tree.begin());
		assert_eq!(next, tree.begin());
		assert_eq!(tree.len(), n);
		assert!(tree.rb_verify());
	}

	assert!(tree.is_empty());
	assert_eq!(tree.root_id(), None);
	assert_eq!(tree.leftmost_id(), None);
	assert_eq!(tree.rightmost_id(), None)
}

#[test]
pub fn find_absent() {
	let tree: Set = (0..10).collect();
	assert_eq!(tree.find(&42), tree.end());
	assert_eq!(tree.find(&-1), tree.end());
	assert_eq!(tree.get(tree.find(&3)), Some(&3))
}

#[test]
pub fn erase_end() {
	let mut tree: Set = (0..5).collect();

	let end = tree.end();
	assert_eq!(tree.erase(end), end);
	assert!(tree.remove_at(end).is_none());
	assert_eq!(tree.erase_key(&42), 0);
	assert_eq!(tree.len(), 5)
}

#[test]
pub fn single_element() {
	let mut tree = Set::new();

	let (addr, _) = tree.insert_unique(7);
	assert_eq!(tree.begin(), addr);
	assert_eq!(tree.end(), Address::END);
	assert_eq!(tree.rbegin().get(), Some(&7));
	assert_eq!(tree.previous_address(tree.end()), addr);

	assert_eq!(tree.erase(addr), Address::END);
	assert!(tree.is_empty());
	assert_eq!(tree.root_id(), None);
	assert_eq!(tree.begin(), tree.end());
	assert_eq!(tree.verify(), Ok(()))
}

#[test]
pub fn pop() {
	let mut tree: Set = (0..10).collect();

	assert_eq!(tree.pop_first(), Some(0));
	assert_eq!(tree.pop_last(), Some(9));
	assert_eq!(tree.first(), Some(&1));
	assert_eq!(tree.last(), Some(&8));
	assert!(tree.rb_verify());

	let mut empty = Set::new();
	assert_eq!(empty.pop_first(), None);
	assert_eq!(empty.pop_last(), None)
}

#[test]
pub fn insert_unique_hint() {
	let mut tree = Set::new();
	for i in 0..100 {
		let end = tree.end();
		let addr = tree.insert_unique_hint(end, i);
		assert_eq!(tree.get(addr), Some(&i));
	}
	assert!(tree.rb_verify());
	assert_eq!(tree.len(), 100);

	let mut tree = Set::new();
	for i in (0..100).rev() {
		let begin = tree.begin();
		tree.insert_unique_hint(begin, i);
		assert!(tree.rb_verify());
	}
	assert!(tree.iter().copied().eq(0..100));

	let mut tree: Set = (0..50).map(|i| i * 2).collect();
	for i in 0..50 {
		let value = i * 2 + 1;
		let hint = tree.upper_bound(&value);
		let addr = tree.insert_unique_hint(hint, value);
		assert_eq!(tree.next_address(addr), hint);
	}
	assert!(tree.rb_verify());
	assert!(tree.iter().copied().eq(0..100));
}

#[test]
pub fn insert_unique_bad_hint() {
	let mut tree: Set = (0..10).collect();

	let hint = tree.find(&2);
	let addr = tree.insert_unique_hint(hint, 20);
	assert_eq!(tree.next_address(addr), tree.end());

	let existing = tree.find(&5);
	let begin = tree.begin();
	assert_eq!(tree.insert_unique_hint(begin, 5), existing);
	assert_eq!(tree.len(), 11);
	assert!(tree.rb_verify())
}

#[test]
pub fn insert_equal_hint() {
	let mut tree: RbTree<(i32, char), First, Natural> = RbTree::new();
	tree.insert_equal((1, 'a'));
	tree.insert_equal((1, 'b'));

	let first = tree.lower_bound(&1);
	let addr = tree.insert_equal_hint(first, (1, 'c'));
	assert_eq!(tree.begin(), addr);

	let end = tree.end();
	tree.insert_equal_hint(end, (1, 'd'));

	let begin = tree.begin();
	tree.insert_equal_hint(begin, (2, 'e'));

	let second = tree.next_address(tree.begin());
	tree.insert_equal_hint(second, (1, 'f'));

	assert!(tree.rb_verify());
	let values: Vec<_> = tree.iter().map(|(_, c)| *c).collect();
	assert_eq!(values, ['c', 'f', 'a', 'b', 'd', 'e'])
}

#[test]
pub fn insert_ranges() {
	let mut tree = Set::new();
	tree.insert_unique_range(vec![3, 1, 2, 3, 1]);
	assert_eq!(tree.len(), 3);

	tree.insert_equal_range(vec![2, 2]);
	assert_eq!(tree.len(), 5);
	assert_eq!(tree.count(&2), 3);
	assert!(tree.rb_verify())
}

#[test]
pub fn clear() {
	let mut tree: Map = ITEMS.iter().copied().collect();

	tree.clear();
	assert!(tree.is_empty());
	assert_eq!(tree.len(), 0);
	assert_eq!(tree.begin(), tree.end());
	assert!(tree.iter().next().is_none());
	assert_eq!(tree.verify(), Ok(()));

	tree.insert_unique((1, 1));
	assert_eq!(tree.len(), 1);
	assert!(tree.rb_verify())
}

#[test]
pub fn swap_and_clone() {
	let mut a: Set = (0..10).collect();
	let mut b: Set = (10..15).collect();

	a.swap(&mut b);
	assert_eq!(a.len(), 5);
	assert_eq!(b.len(), 10);
	assert_eq!(a.first(), Some(&10));
	assert_eq!(b.first(), Some(&0));

	let mut c = b.clone();
	assert_eq!(c, b);
	assert!(c.rb_verify());

	c.erase_key(&3);
	assert_ne!(c, b);
	assert_eq!(b.len(), 10)
}

#[test]
pub fn comparator() {
	let mut tree: RbTree<i32, Identity, _> = RbTree::with_comparator(|a: &i32, b: &i32| b < a);
	tree.insert_unique_range(0..10);

	assert!(tree.rb_verify());
	assert!(tree.iter().copied().eq((0..10).rev()));
	assert_eq!(tree.lower_bound(&4), tree.find(&4));
	assert_eq!(tree.get(tree.upper_bound(&4)), Some(&3))
}

const ITEMS: [(usize, usize); 100] = [
	(5305, 994),
	(2471, 5072),
	(6468, 9469),
	(791, 7301),
	(1186, 4662),
	(8779, 6320),
	(1542, 5685),
	(5991, 369),
	(9548, 7564),
	(950, 5823),
	(8313, 2753),
	(3517, 1918),
	(614, 8088),
	(1408, 965),
	(7104, 3575),
	(6851, 4709),
	(1144, 2119),
	(3943, 4056),
	(1486, 6519),
	(9028, 6405),
	(6955, 8134),
	(968, 1320),
	(9264, 2725),
	(2028, 7359),
	(3657, 6580),
	(9551, 9002),
	(1013, 4552),
	(9455, 2243),
	(9593, 7053),
	(6499, 9014),
	(812, 4561),
	(3622, 6804),
	(763, 5878),
	(9120, 6233),
	(2181, 3780),
	(4744, 2472),
	(6867, 1359),
	(2363, 2887),
	(8858, 2478),
	(1929, 3800),
	(9353, 3822),
	(5054, 197),
	(9179, 7945),
	(2961, 9652),
	(1688, 2987),
	(9528, 4304),
	(9358, 4619),
	(3078, 67),
	(6101, 2386),
	(1596, 6864),
	(8974, 8758),
	(1028, 6049),
	(9246, 9991),
	(976, 9278),
	(3374, 5220),
	(8133, 2056),
	(8711, 8445),
	(7005, 884),
	(5146, 7481),
	(7628, 9163),
	(7424, 6428),
	(5924, 6521),
	(4911, 6536),
	(4070, 6457),
	(2945, 1696),
	(3999, 7889),
	(1341, 6560),
	(9411, 1019),
	(4919, 3122),
	(8604, 1103),
	(8111, 3420),
	(5627, 7219),
	(7353, 2659),
	(4717, 1801),
	(9977, 5571),
	(1199, 9842),
	(1934, 861),
	(8387, 1677),
	(6850, 3),
	(2702, 9286),
	(5604, 2478),
	(2490, 8791),
	(8011, 1662),
	(6909, 5957),
	(642, 417),
	(1271, 1152),
	(9143, 3407),
	(9388, 6164),
	(5140, 2433),
	(5572, 4132),
	(5737, 5691),
	(9738, 9867),
	(8137, 5966),
	(9501, 7768),
	(7474, 2012),
	(1126, 1889),
	(1533, 7996),
	(4422, 7634),
	(7767, 7870),
	(1064, 7927),
];
