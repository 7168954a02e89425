//! Lattice geometry for the 3x3x3 cube
//!
//! Every cube exposes three faces at the default isometric viewing angle:
//! top (the `+y` face), left (`+z`) and right (`+x`). A face is a unit square,
//! and two faces touch when their squares share an edge.
//!
//! The touching relation over all 81 faces is built once at compile time into
//! a bitset table, so the hot selection path is a single shift and mask.

use super::PreconditionError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of cubes in the lattice
pub const CUBE_COUNT: usize = 27;

/// Number of selectable faces in the lattice (27 cubes × 3 sides)
pub const FACE_COUNT: usize = CUBE_COUNT * 3;

/// One coordinate along a lattice axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Index {
    Zero = 0,
    One = 1,
    Two = 2,
}

impl Index {
    /// All indices in ascending order
    pub const ALL: [Self; 3] = [Self::Zero, Self::One, Self::Two];

    /// Numeric value of this index (0-2)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Convert a raw coordinate, returning `None` when it is outside `0..=2`
    #[must_use]
    pub const fn from_value(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Zero),
            1 => Some(Self::One),
            2 => Some(Self::Two),
            _ => None,
        }
    }

    /// The next index along the axis, or `None` past the lattice boundary
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Zero => Some(Self::One),
            Self::One => Some(Self::Two),
            Self::Two => None,
        }
    }
}

impl TryFrom<u8> for Index {
    type Error = PreconditionError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_value(value).ok_or(PreconditionError::InvalidIndex(value))
    }
}

impl From<Index> for u8 {
    fn from(index: Index) -> Self {
        index.value()
    }
}

/// One of the 27 cube positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LatticePoint {
    pub x: Index,
    pub y: Index,
    pub z: Index,
}

impl LatticePoint {
    /// The cube in the middle of the lattice
    pub const CENTER: Self = Self::from_indices(Index::One, Index::One, Index::One);

    /// Build a point from already-validated indices
    #[inline]
    #[must_use]
    pub const fn from_indices(x: Index, y: Index, z: Index) -> Self {
        Self { x, y, z }
    }

    /// Build a point from raw coordinates
    ///
    /// # Errors
    /// Returns `PreconditionError::InvalidIndex` if any coordinate is above 2.
    ///
    /// # Examples
    /// ```
    /// use cubeword::core::LatticePoint;
    ///
    /// let point = LatticePoint::new(1, 1, 1).unwrap();
    /// assert_eq!(point, LatticePoint::CENTER);
    /// assert!(LatticePoint::new(3, 0, 0).is_err());
    /// ```
    pub fn new(x: u8, y: u8, z: u8) -> Result<Self, PreconditionError> {
        Ok(Self {
            x: Index::try_from(x)?,
            y: Index::try_from(y)?,
            z: Index::try_from(z)?,
        })
    }

    /// Flat x-major position: `x * 9 + y * 3 + z`
    #[inline]
    #[must_use]
    pub const fn flat(self) -> usize {
        self.x as usize * 9 + self.y as usize * 3 + self.z as usize
    }

    /// Inverse of [`LatticePoint::flat`]
    #[must_use]
    pub const fn from_flat(flat: usize) -> Option<Self> {
        if flat >= CUBE_COUNT {
            return None;
        }
        match (
            Index::from_value((flat / 9) as u8),
            Index::from_value(((flat / 3) % 3) as u8),
            Index::from_value((flat % 3) as u8),
        ) {
            (Some(x), Some(y), Some(z)) => Some(Self { x, y, z }),
            _ => None,
        }
    }

    /// All 27 points in flat order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..CUBE_COUNT).filter_map(Self::from_flat)
    }

    /// The lattice cell that covers `side` of this cube, if any
    ///
    /// Top faces are covered from `+y`, left faces from `+z`, right faces from `+x`.
    #[must_use]
    pub const fn neighbor(self, side: Side) -> Option<Self> {
        let next = match side {
            Side::Top => self.y.next(),
            Side::Left => self.z.next(),
            Side::Right => self.x.next(),
        };
        let Some(next) = next else {
            return None;
        };
        Some(match side {
            Side::Top => Self { y: next, ..self },
            Side::Left => Self { z: next, ..self },
            Side::Right => Self { x: next, ..self },
        })
    }
}

impl fmt::Display for LatticePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x.value(), self.y.value(), self.z.value())
    }
}

/// The three player-visible faces of a cube
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Top = 0,
    Left = 1,
    Right = 2,
}

impl Side {
    /// Sides in storage order
    pub const ALL: [Self; 3] = [Self::Top, Self::Left, Self::Right];

    /// Single-letter code used by the CLI (`t`, `l`, `r`)
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Top => 't',
            Self::Left => 'l',
            Self::Right => 'r',
        }
    }

    /// Parse a single-letter side code (case-insensitive)
    #[must_use]
    pub const fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_lowercase() {
            't' => Some(Self::Top),
            'l' => Some(Self::Left),
            'r' => Some(Self::Right),
            _ => None,
        }
    }
}

/// A selectable face: a cube position plus one of its visible sides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct IndexedCubeFace {
    pub index: LatticePoint,
    pub side: Side,
}

impl IndexedCubeFace {
    #[inline]
    #[must_use]
    pub const fn new(index: LatticePoint, side: Side) -> Self {
        Self { index, side }
    }

    /// Dense id in `0..81`: `index.flat() * 3 + side`
    #[inline]
    #[must_use]
    pub const fn id(self) -> usize {
        self.index.flat() * 3 + self.side as usize
    }

    /// Inverse of [`IndexedCubeFace::id`]
    ///
    /// # Errors
    /// Returns `PreconditionError::InvalidFaceId` for ids of 81 and above.
    pub const fn from_id(id: usize) -> Result<Self, PreconditionError> {
        let Some(index) = LatticePoint::from_flat(id / 3) else {
            return Err(PreconditionError::InvalidFaceId(id));
        };
        let side = match id % 3 {
            0 => Side::Top,
            1 => Side::Left,
            _ => Side::Right,
        };
        Ok(Self { index, side })
    }

    /// All 81 faces in id order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..FACE_COUNT).filter_map(|id| Self::from_id(id).ok())
    }

    /// Whether this face shares an edge with `other`
    #[inline]
    #[must_use]
    pub fn is_touching(self, other: Self) -> bool {
        touching(self, other)
    }

    /// Every face that touches this one, in id order
    pub fn touching_faces(self) -> impl Iterator<Item = Self> {
        let mask = TOUCHING[self.id()];
        (0..FACE_COUNT)
            .filter(move |&id| (mask >> id) & 1 == 1)
            .filter_map(|id| Self::from_id(id).ok())
    }
}

impl fmt::Display for IndexedCubeFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}",
            self.index.x.value(),
            self.index.y.value(),
            self.index.z.value(),
            self.side.code()
        )
    }
}

/// Whether two faces share an edge
///
/// Symmetric, and never true for a face and itself.
///
/// # Examples
/// ```
/// use cubeword::core::{touching, IndexedCubeFace, LatticePoint, Side};
///
/// let top = IndexedCubeFace::new(LatticePoint::CENTER, Side::Top);
/// let left = IndexedCubeFace::new(LatticePoint::CENTER, Side::Left);
/// assert!(touching(top, left));
/// assert!(!touching(top, top));
/// ```
#[inline]
#[must_use]
pub fn touching(a: IndexedCubeFace, b: IndexedCubeFace) -> bool {
    (TOUCHING[a.id()] >> b.id()) & 1 == 1
}

/// Bitset per face id: bit `j` of entry `i` is set when faces `i` and `j` touch.
static TOUCHING: [u128; FACE_COUNT] = build_touching_table();

type Corner = [i8; 3];

/// Corners of the unit square for a face id, in lattice units
const fn face_corners(id: usize) -> [Corner; 4] {
    let flat = id / 3;
    let x = (flat / 9) as i8;
    let y = ((flat / 3) % 3) as i8;
    let z = (flat % 3) as i8;

    match id % 3 {
        // top: plane y + 1
        0 => [
            [x, y + 1, z],
            [x + 1, y + 1, z],
            [x, y + 1, z + 1],
            [x + 1, y + 1, z + 1],
        ],
        // left: plane z + 1
        1 => [
            [x, y, z + 1],
            [x + 1, y, z + 1],
            [x, y + 1, z + 1],
            [x + 1, y + 1, z + 1],
        ],
        // right: plane x + 1
        _ => [
            [x + 1, y, z],
            [x + 1, y + 1, z],
            [x + 1, y, z + 1],
            [x + 1, y + 1, z + 1],
        ],
    }
}

const fn same_corner(a: Corner, b: Corner) -> bool {
    a[0] == b[0] && a[1] == b[1] && a[2] == b[2]
}

const fn shared_corners(a: &[Corner; 4], b: &[Corner; 4]) -> usize {
    let mut shared = 0;
    let mut i = 0;
    while i < 4 {
        let mut j = 0;
        while j < 4 {
            if same_corner(a[i], b[j]) {
                shared += 1;
            }
            j += 1;
        }
        i += 1;
    }
    shared
}

/// Two distinct axis-aligned unit squares share an edge iff they share exactly two corners.
const fn build_touching_table() -> [u128; FACE_COUNT] {
    let mut table = [0u128; FACE_COUNT];

    let mut a = 0;
    while a < FACE_COUNT {
        let corners_a = face_corners(a);
        let mut b = 0;
        while b < FACE_COUNT {
            if a != b && shared_corners(&corners_a, &face_corners(b)) == 2 {
                table[a] |= 1u128 << b;
            }
            b += 1;
        }
        a += 1;
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn face(x: u8, y: u8, z: u8, side: Side) -> IndexedCubeFace {
        IndexedCubeFace::new(LatticePoint::new(x, y, z).unwrap(), side)
    }

    #[test]
    fn touching_is_symmetric() {
        for a in IndexedCubeFace::all() {
            for b in IndexedCubeFace::all() {
                assert_eq!(
                    touching(a, b),
                    touching(b, a),
                    "touching({a}, {b}) is not symmetric"
                );
            }
        }
    }

    #[test]
    fn touching_is_irreflexive() {
        for a in IndexedCubeFace::all() {
            assert!(!touching(a, a), "{a} touches itself");
        }
    }

    #[test]
    fn faces_of_one_cube_touch_pairwise() {
        for point in LatticePoint::all() {
            for &first in &Side::ALL {
                for &second in &Side::ALL {
                    if first != second {
                        assert!(touching(
                            IndexedCubeFace::new(point, first),
                            IndexedCubeFace::new(point, second)
                        ));
                    }
                }
            }
        }
    }

    #[test]
    fn coplanar_neighbors_touch() {
        assert!(touching(face(0, 0, 0, Side::Top), face(1, 0, 0, Side::Top)));
        assert!(touching(face(0, 0, 0, Side::Top), face(0, 0, 1, Side::Top)));
        assert!(touching(face(0, 0, 0, Side::Left), face(0, 1, 0, Side::Left)));
        assert!(touching(face(0, 0, 0, Side::Right), face(0, 0, 1, Side::Right)));
    }

    #[test]
    fn diagonal_and_distant_faces_do_not_touch() {
        // share a single corner
        assert!(!touching(face(0, 0, 0, Side::Top), face(1, 0, 1, Side::Top)));
        // different planes
        assert!(!touching(face(0, 0, 0, Side::Top), face(0, 1, 0, Side::Top)));
        assert!(!touching(face(0, 0, 0, Side::Top), face(2, 2, 2, Side::Right)));
    }

    #[test]
    fn fold_neighbors_touch() {
        // top of (1,1,1) meets the left face of the cube above and behind it
        assert!(touching(face(1, 1, 1, Side::Top), face(1, 2, 0, Side::Left)));
        assert!(touching(face(1, 1, 1, Side::Top), face(0, 2, 1, Side::Right)));
    }

    #[test]
    fn interior_face_has_twelve_neighbors() {
        // each of the four edges is shared with one coplanar and two perpendicular faces
        assert_eq!(face(1, 1, 1, Side::Top).touching_faces().count(), 12);
        assert_eq!(face(1, 1, 1, Side::Left).touching_faces().count(), 12);
        assert_eq!(face(1, 1, 1, Side::Right).touching_faces().count(), 12);
    }

    #[test]
    fn face_id_roundtrip() {
        for id in 0..FACE_COUNT {
            assert_eq!(IndexedCubeFace::from_id(id).unwrap().id(), id);
        }
        assert_eq!(
            IndexedCubeFace::from_id(FACE_COUNT),
            Err(PreconditionError::InvalidFaceId(FACE_COUNT))
        );
    }

    #[test]
    fn lattice_point_rejects_out_of_range() {
        assert_eq!(
            LatticePoint::new(0, 3, 0),
            Err(PreconditionError::InvalidIndex(3))
        );
        assert_eq!(LatticePoint::all().count(), CUBE_COUNT);
    }

    #[test]
    fn neighbor_follows_face_direction() {
        let center = LatticePoint::CENTER;
        assert_eq!(center.neighbor(Side::Top), LatticePoint::new(1, 2, 1).ok());
        assert_eq!(center.neighbor(Side::Left), LatticePoint::new(1, 1, 2).ok());
        assert_eq!(center.neighbor(Side::Right), LatticePoint::new(2, 1, 1).ok());

        let corner = LatticePoint::new(2, 2, 2).unwrap();
        assert_eq!(corner.neighbor(Side::Top), None);
    }

    #[test]
    fn point_serializes_as_plain_numbers() {
        let json = serde_json::to_string(&LatticePoint::CENTER).unwrap();
        assert_eq!(json, r#"{"x":1,"y":1,"z":1}"#);

        let bad: Result<LatticePoint, _> = serde_json::from_str(r#"{"x":1,"y":5,"z":1}"#);
        assert!(bad.is_err());
    }
}
