use proptest::prelude::*;

use crate::{Axis, Direction, GridSize, InitialColoring, Palette, Puzzle, SliceRotation};


fn puzzle(n: usize, coloring: InitialColoring) -> Puzzle {
    Puzzle::new(GridSize::new(n).unwrap(), Palette::default(), coloring)
}

fn arb_direction() -> impl Strategy<Value = Direction> {
    prop_oneof![Just(Direction::Positive), Just(Direction::Negative)]
}

fn arb_rotation(n: usize) -> impl Strategy<Value = SliceRotation> {
    (0..3_usize, 0..n, arb_direction()).prop_map(|(axis, layer, direction)| SliceRotation {
        axis: Axis::ALL[axis],
        layer,
        direction,
    })
}

/// Grid size together with a sequence of valid rotations for that size.
fn arb_rotation_sequence(
    sizes: std::ops::RangeInclusive<usize>,
    len: std::ops::Range<usize>,
) -> impl Strategy<Value = (usize, Vec<SliceRotation>)> {
    sizes.prop_flat_map(move |n| {
        (
            Just(n),
            proptest::collection::vec(arb_rotation(n), len.clone()),
        )
    })
}
