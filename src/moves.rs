use itertools::Itertools;
use serde::{Serialize, Serializer};
use strum::{Display, EnumString, VariantArray};

use crate::location::{Location, Offset};

/// Pieces whose movement pattern is a single leap, jumping `(long, short)` squares in any of the eight orientations.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Display, EnumString, VariantArray)]
#[strum(serialize_all = "lowercase")]
pub enum Piece {
    /// The chess knight, a `(2, 1)` leaper.
    #[default]
    Knight,
    /// A `(3, 1)` leaper.
    Camel,
    /// A `(3, 2)` leaper.
    Zebra,
    /// A `(4, 1)` leaper.
    Giraffe,
}

impl Piece {
    /// The `(long, short)` leap of this piece.
    pub fn leap(&self) -> (isize, isize) {
        match self {
            Self::Knight => (2, 1),
            Self::Camel => (3, 1),
            Self::Zebra => (3, 2),
            Self::Giraffe => (4, 1),
        }
    }

    /// The ordered [`MoveSet`] of this piece. See [`MoveSet::leaper`].
    pub fn moves(&self) -> MoveSet {
        let (long, short) = self.leap();
        MoveSet::leaper(long, short)
    }
}

/// An ordered list of `(row, column)` offsets a piece may move by.
///
/// The order matters: a search tries offsets first to last, so it decides which tour is found first, if any.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct MoveSet {
    offsets: Vec<Offset>,
}

impl MoveSet {
    /// Every orientation of a `(long, short)` leap, sweeping counterclockwise from `(long, short)` itself:
    ///
    /// `(a, b), (b, a), (-b, a), (-a, b), (-a, -b), (-b, -a), (b, -a), (a, -b)`
    ///
    /// For the knight this is `[(2, 1), (1, 2), (-1, 2), (-2, 1), (-2, -1), (-1, -2), (1, -2), (2, -1)]`.
    /// Orientations which coincide (e.g. when `long == short`) are kept once, at their first position.
    pub fn leaper(long: isize, short: isize) -> Self {
        let (a, b) = (long, short);
        Self::from_offsets([
            (a, b), (b, a),
            (-b, a), (-a, b),
            (-a, -b), (-b, -a),
            (b, -a), (a, -b),
        ].into_iter().unique())
    }

    /// Take `offsets` verbatim, in order.
    pub fn from_offsets(offsets: impl IntoIterator<Item = Offset>) -> Self {
        Self { offsets: offsets.into_iter().collect_vec() }
    }

    /// The offsets in search order.
    pub fn offsets(&self) -> &[Offset] {
        &self.offsets
    }

    /// The number of offsets.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Whether there are no offsets at all.
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub(crate) fn has_null_offset(&self) -> bool {
        self.offsets.contains(&(0, 0))
    }

    /// Every location one move away from `from`, in search order. Nothing here is bounds checked.
    pub fn targets_from(&self, from: Location) -> impl Iterator<Item = Location> + '_ {
        self.offsets.iter().map(move |offset| from.offset_by(*offset))
    }

    /// Whether a single move carries `from` to `to`.
    pub fn connects(&self, from: Location, to: Location) -> bool {
        from.offset_to(to).is_some_and(|offset| self.offsets.contains(&offset))
    }
}

impl Default for MoveSet {
    fn default() -> Self {
        Piece::Knight.moves()
    }
}

impl From<Piece> for MoveSet {
    fn from(value: Piece) -> Self {
        value.moves()
    }
}

impl Serialize for MoveSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.offsets.serialize(serializer)
    }
}
