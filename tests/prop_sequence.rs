use std::collections::VecDeque;

use proptest::prelude::*;
use ring_sequence::{RingError, RingSequence};

#[derive(Debug, Clone)]
enum Op {
    Enter(i32),
    EnterAt(usize, i32),
    Poll,
    Remove(usize),
    RemoveItem(i32),
    Clear,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<i32>().prop_map(Op::Enter),
        3 => (0usize..64, any::<i32>()).prop_map(|(i, x)| Op::EnterAt(i, x)),
        3 => Just(Op::Poll),
        2 => (0usize..64).prop_map(Op::Remove),
        1 => (0i32..8).prop_map(Op::RemoveItem),
        1 => Just(Op::Clear),
    ]
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_matches_vecdeque_model(
        capacity in 1usize..6,
        ops in prop::collection::vec(op_strategy(), 0..200),
    ) {
        init_tracing();
        let mut seq = RingSequence::with_capacity(capacity).unwrap();
        let mut model: VecDeque<i32> = VecDeque::new();
        let mut last_capacity = seq.capacity();

        for op in ops {
            match op {
                Op::Enter(x) => {
                    seq.enter(x);
                    model.push_back(x);
                }
                Op::EnterAt(i, x) => {
                    if i <= model.len() {
                        prop_assert_eq!(seq.enter_at(i, x), Ok(()));
                        model.insert(i, x);
                    } else {
                        prop_assert_eq!(
                            seq.enter_at(i, x),
                            Err(RingError::IndexOutOfBounds { index: i, len: model.len() })
                        );
                    }
                }
                Op::Poll => prop_assert_eq!(seq.poll(), model.pop_front()),
                Op::Remove(i) => {
                    let expected = model
                        .remove(i)
                        .ok_or(RingError::IndexOutOfBounds { index: i, len: model.len() });
                    prop_assert_eq!(seq.remove(i), expected);
                }
                Op::RemoveItem(x) => {
                    let expected = match model.iter().position(|&y| y == x) {
                        Some(i) => model.remove(i).is_some(),
                        None => false,
                    };
                    prop_assert_eq!(seq.remove_item(&x), expected);
                }
                Op::Clear => {
                    seq.clear();
                    model.clear();
                }
            }

            prop_assert!(seq.capacity() >= last_capacity);
            prop_assert!(seq.len() <= seq.capacity());
            last_capacity = seq.capacity();

            prop_assert_eq!(seq.len(), model.len());
            prop_assert_eq!(seq.is_empty(), model.is_empty());
            prop_assert_eq!(seq.peek(), model.front());
            for (i, expected) in model.iter().enumerate() {
                prop_assert_eq!(seq.get(i), Ok(expected));
            }
            prop_assert!(seq.get(model.len()).is_err());
            prop_assert!(seq.iter().eq(model.iter()));
        }
    }

    #[test]
    fn prop_insert_then_remove_restores(
        capacity in 1usize..8,
        polls in 0usize..8,
        items in prop::collection::vec(any::<i32>(), 0..24),
        index_seed in any::<usize>(),
        value in any::<i32>(),
    ) {
        let mut seq = RingSequence::with_capacity(capacity).unwrap();
        seq.extend(items.iter().copied());
        for _ in 0..polls.min(items.len()) {
            seq.poll();
        }
        let before: Vec<i32> = seq.iter().copied().collect();
        let index = index_seed % (before.len() + 1);

        seq.enter_at(index, value).unwrap();
        prop_assert_eq!(seq.get(index), Ok(&value));
        prop_assert_eq!(seq.remove(index), Ok(value));

        let after: Vec<i32> = seq.iter().copied().collect();
        prop_assert_eq!(after, before);
    }

    #[test]
    fn prop_index_of_never_mutates(
        items in prop::collection::vec(0i32..10, 0..32),
        needle in 0i32..10,
    ) {
        let seq: RingSequence<i32> = items.iter().copied().collect();
        let found = seq.index_of(&needle);
        prop_assert_eq!(found, items.iter().position(|&x| x == needle));
        prop_assert_eq!(seq.len(), items.len());
    }
}

#[test]
fn fifo_across_growth() {
    let mut seq = RingSequence::new();
    for i in 0..100 {
        seq.enter(i);
        if i % 3 == 0 {
            seq.poll();
        }
    }
    let drained: Vec<i32> = std::iter::from_fn(|| seq.poll()).collect();
    let mut expected: Vec<i32> = (0..100).collect();
    expected.drain(..34);
    assert_eq!(drained, expected);
}

#[test]
fn bounds_on_every_size() {
    let mut seq: RingSequence<u8> = RingSequence::new();
    for n in 0..10u8 {
        assert!(seq.get(seq.len()).is_err());
        assert!(seq.get(usize::MAX).is_err());
        seq.enter(n);
    }
}
