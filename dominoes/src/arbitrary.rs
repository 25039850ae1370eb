use crate::{Tile, MAX_PIPS};

impl quickcheck::Arbitrary for Tile {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let left = u8::arbitrary(g) % (MAX_PIPS + 1);
        let right = u8::arbitrary(g) % (MAX_PIPS + 1);
        Tile::new_unchecked(left, right)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let (left, right) = (self.left(), self.right());
        Box::new(
            (left, right)
                .shrink()
                .map(|(left, right)| Tile::new_unchecked(left, right)),
        )
    }
}
