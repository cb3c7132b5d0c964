use std::fmt::{Display, Formatter};
use std::num::NonZero;

use ndarray::Ix;
use serde::Serialize;

pub(crate) type Coord = usize;
pub(crate) type Dimension = NonZero<Coord>;

/// A signed `(row, column)` displacement, as found in a [`MoveSet`](crate::MoveSet).
pub type Offset = (isize, isize);

#[derive(Clone, Eq, Hash, Copy, PartialEq, Ord, PartialOrd, Debug, Serialize)]
/// A location `(row, column)` on a board. The top left corner is `Location(0, 0)`.
pub struct Location(pub Coord, pub Coord);

impl Location {
    pub(crate) fn as_index(&self) -> (Coord, Coord) {
        (self.0, self.1)
    }

    /// Displace this location by `rhs`.
    ///
    /// Stepping off the top or left edge wraps around to a huge coordinate, which any bounds check rejects.
    pub fn offset_by(self, rhs: Offset) -> Self {
        Self(self.0.wrapping_add_signed(rhs.0), self.1.wrapping_add_signed(rhs.1))
    }

    /// The offset which carries `self` to `other`, if it fits in an [`Offset`].
    pub fn offset_to(self, other: Location) -> Option<Offset> {
        let rows = isize::try_from(other.0).ok()?.checked_sub(isize::try_from(self.0).ok()?)?;
        let cols = isize::try_from(other.1).ok()?.checked_sub(isize::try_from(self.1).ok()?)?;
        Some((rows, cols))
    }

    #[inline]
    pub(crate) fn within(&self, size: Dimension) -> bool {
        self.0 < size.get() && self.1 < size.get()
    }
}

impl From<(Ix, Ix)> for Location {
    fn from(value: (Ix, Ix)) -> Self {
        Self(value.0, value.1)
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}
