use boxel_grid::BitGrid;
use proptest::prelude::*;

const GRID_LEN: usize = 300;

/// Reference model: a plain bool vector plus the grid under test, kept in
/// lockstep through a random op sequence.
#[derive(Clone, Debug)]
enum Op {
    Set(usize, bool),
    SetRange(usize, usize, bool),
    TestAndClear(usize),
    TestAndClearRange(usize, usize),
}

fn arb_range() -> impl Strategy<Value = (usize, usize)> {
    (0..GRID_LEN).prop_flat_map(|i| (Just(i), 1..=(GRID_LEN - i)))
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..GRID_LEN, any::<bool>()).prop_map(|(i, v)| Op::Set(i, v)),
        (arb_range(), any::<bool>()).prop_map(|((i, l), v)| Op::SetRange(i, l, v)),
        (0..GRID_LEN).prop_map(Op::TestAndClear),
        arb_range().prop_map(|(i, l)| Op::TestAndClearRange(i, l)),
    ]
}

fn model_test_range(model: &[bool], i: usize, len: usize) -> bool {
    model[i..i + len].iter().all(|&b| b)
}

proptest! {
    // The grid agrees with a per-bit bool model across arbitrary op sequences.
    #[test]
    fn bitgrid_matches_model(ops in proptest::collection::vec(arb_op(), 1..64)) {
        let mut grid = BitGrid::new(GRID_LEN);
        let mut model = vec![false; GRID_LEN];
        for op in ops {
            match op {
                Op::Set(i, v) => {
                    grid.set(i, v);
                    model[i] = v;
                }
                Op::SetRange(i, len, v) => {
                    grid.set_range(i, len, v);
                    model[i..i + len].iter_mut().for_each(|b| *b = v);
                }
                Op::TestAndClear(i) => {
                    let got = grid.test_and_clear(i);
                    prop_assert_eq!(got, model[i]);
                    model[i] = false;
                }
                Op::TestAndClearRange(i, len) => {
                    let want = model_test_range(&model, i, len);
                    let got = grid.test_and_clear_range(i, len);
                    prop_assert_eq!(got, want);
                    if want {
                        model[i..i + len].iter_mut().for_each(|b| *b = false);
                    }
                }
            }
            for i in 0..GRID_LEN {
                prop_assert_eq!(grid.test(i), model[i]);
            }
            prop_assert_eq!(grid.count_ones(), model.iter().filter(|&&b| b).count());
        }
    }

    // test_range over arbitrary fills agrees with the model.
    #[test]
    fn test_range_matches_model(
        fills in proptest::collection::vec((arb_range(), any::<bool>()), 0..16),
        (qi, qlen) in arb_range(),
    ) {
        let mut grid = BitGrid::new(GRID_LEN);
        let mut model = vec![false; GRID_LEN];
        for ((i, len), v) in fills {
            grid.set_range(i, len, v);
            model[i..i + len].iter_mut().for_each(|b| *b = v);
        }
        prop_assert_eq!(grid.test_range(qi, qlen), model_test_range(&model, qi, qlen));
    }

    // A failed test_and_clear_range leaves every bit untouched.
    #[test]
    fn failed_clear_range_is_a_no_op(
        fills in proptest::collection::vec(arb_range(), 1..8),
        hole in 0..GRID_LEN,
        (qi, qlen) in arb_range(),
    ) {
        let mut grid = BitGrid::new(GRID_LEN);
        for (i, len) in fills {
            grid.set_range(i, len, true);
        }
        grid.set(hole, false);
        prop_assume!(hole >= qi && hole < qi + qlen);
        let before = grid.clone();
        prop_assert!(!grid.test_and_clear_range(qi, qlen));
        prop_assert_eq!(grid, before);
    }
}
