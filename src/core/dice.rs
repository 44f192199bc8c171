//! Die faces and the small multisets that hold them.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// One face of a die.
///
/// Numeric faces score their number; `Star` scores 5 and is required to
/// claim any tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Face {
    One,
    Two,
    Three,
    Four,
    Five,
    Star,
}

impl Face {
    /// Every face, in roll order.
    pub const ALL: [Face; 6] = [
        Face::One,
        Face::Two,
        Face::Three,
        Face::Four,
        Face::Five,
        Face::Star,
    ];

    /// Points this face adds to a sum.
    #[must_use]
    pub const fn points(self) -> u32 {
        match self {
            Face::One => 1,
            Face::Two => 2,
            Face::Three => 3,
            Face::Four => 4,
            Face::Five | Face::Star => 5,
        }
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Face::Star => write!(f, "star"),
            other => write!(f, "{}", other.points()),
        }
    }
}

/// A multiset of faces. Eight dice fit inline without a heap allocation.
pub type Faces = SmallVec<[Face; 8]>;

/// Sum of a multiset of faces, with `Star` counted as 5.
///
/// ```
/// use stars_engine::core::{sum_faces, Face};
///
/// assert_eq!(sum_faces(&[Face::Star, Face::Star, Face::Three]), 13);
/// ```
#[must_use]
pub fn sum_faces(faces: &[Face]) -> u32 {
    faces.iter().map(|f| f.points()).sum()
}

/// Does this multiset contain at least one `Star`?
#[must_use]
pub fn has_star(faces: &[Face]) -> bool {
    faces.contains(&Face::Star)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_points() {
        let points: Vec<_> = Face::ALL.iter().map(|f| f.points()).collect();
        assert_eq!(points, vec![1, 2, 3, 4, 5, 5]);
    }

    #[test]
    fn test_sum_faces() {
        assert_eq!(sum_faces(&[]), 0);
        assert_eq!(sum_faces(&[Face::Star, Face::Star, Face::Three]), 13);
        assert_eq!(sum_faces(&[Face::One, Face::Five, Face::Five]), 11);
    }

    #[test]
    fn test_has_star() {
        assert!(!has_star(&[Face::Five, Face::Five]));
        assert!(has_star(&[Face::One, Face::Star]));
    }

    #[test]
    fn test_display() {
        assert_eq!(Face::Star.to_string(), "star");
        assert_eq!(Face::Four.to_string(), "4");
    }
}
