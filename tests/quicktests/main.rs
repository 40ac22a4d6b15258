use quickcheck::{Arbitrary, Gen};

mod ordered;

/// An enum for the various kinds of "things" to do to
/// a tree in a quicktest.
#[derive(Copy, Clone, Debug)]
pub enum Op<K> {
    /// Insert the K into the tree
    Insert(K),
    /// Look the K up and compare its neighbours with a sorted model
    Query(K),
}

impl<K> Arbitrary for Op<K>
where
    K: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1]).unwrap() {
            0 => Op::Insert(K::arbitrary(g)),
            1 => Op::Query(K::arbitrary(g)),
            _ => unreachable!(),
        }
    }
}
