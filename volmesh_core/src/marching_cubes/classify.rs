//! Case classification and triangle emission.

use crate::error::VolmeshCoreError;
use crate::types::Point3;

use super::tables::{AMBIGUOUS_CASES, MAX_TRIANGLES_PER_CELL, ROW_LEN, TRIANGLE_TABLE};

/// How ambiguous cases select their triangle-table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AmbiguityPolicy {
    /// Every case uses its own row.
    #[default]
    Direct,
    /// Ambiguous cases use the row of their complement `255 - case`.
    Mirrored,
}

/// Classify a cell from its 8 corner intensities.
///
/// Bit `i` is set iff `intensities[i] - threshold > 0`.
#[inline]
pub fn case_number(intensities: &[i32; 8], threshold: f32) -> u8 {
    let mut case = 0u8;
    for (i, &value) in intensities.iter().enumerate() {
        if value as f32 - threshold > 0.0 {
            case |= 1 << i;
        }
    }
    case
}

/// Whether `case` is one of the listed ambiguous configurations.
///
/// The zero fill at the end of [`AMBIGUOUS_CASES`] is not a member.
#[inline]
pub fn is_ambiguous(case: u8) -> bool {
    case != 0 && AMBIGUOUS_CASES.contains(&case)
}

/// Offset of the row used for `case` in [`TRIANGLE_TABLE`].
#[inline]
pub fn table_offset(case: u8, policy: AmbiguityPolicy) -> usize {
    match policy {
        AmbiguityPolicy::Mirrored if is_ambiguous(case) => (255 - case as usize) * ROW_LEN,
        _ => case as usize * ROW_LEN,
    }
}

/// The 15 table slots used for `case`.
#[inline]
pub fn table_row(case: u8, policy: AmbiguityPolicy) -> &'static [i8] {
    let offset = table_offset(case, policy);
    &TRIANGLE_TABLE[offset..offset + ROW_LEN]
}

/// Number of triangles the table lists for `case`.
pub fn triangle_count(case: u8, policy: AmbiguityPolicy) -> usize {
    table_row(case, policy)
        .chunks_exact(3)
        .take_while(|group| group[0] >= 0)
        .count()
}

/// Emit the triangles of `case` through `sink`, in table order.
///
/// Reads at most [`MAX_TRIANGLES_PER_CELL`] groups and stops at the first group starting with
/// -1. A group referencing an edge without a crossing is skipped.
///
/// # Returns
/// The number of triangles passed to `sink`.
pub fn emit_triangles<S>(
    case: u8,
    edges: &[Option<Point3>; 12],
    policy: AmbiguityPolicy,
    mut sink: S,
) -> usize
where
    S: FnMut([Point3; 3]),
{
    let mut emitted = 0;
    for group in table_row(case, policy)
        .chunks_exact(3)
        .take(MAX_TRIANGLES_PER_CELL)
    {
        if group[0] < 0 {
            break;
        }
        let a = edges[group[0] as usize];
        let b = edges[group[1] as usize];
        let c = edges[group[2] as usize];
        if let (Some(a), Some(b), Some(c)) = (a, b, c) {
            sink([a, b, c]);
            emitted += 1;
        }
    }
    emitted
}

/// Check the structural invariants of the lookup tables.
///
/// Every slot is -1 or an edge index in 0..12, each row is a prefix of complete triangles
/// followed only by -1, and every listed ambiguous case is non-zero before the fill.
pub fn validate_tables() -> Result<(), VolmeshCoreError> {
    for case in 0..=255u8 {
        let row = table_row(case, AmbiguityPolicy::Direct);
        let mut ended = false;
        for group in row.chunks_exact(3) {
            if group[0] < 0 {
                ended = true;
            }
            for &slot in group {
                if slot < -1 || slot >= 12 {
                    return Err(VolmeshCoreError::InvalidEdgeIndex { case, value: slot });
                }
                if ended != (slot < 0) {
                    return Err(VolmeshCoreError::MalformedRow { case });
                }
            }
        }
    }

    let listed = AMBIGUOUS_CASES.iter().take_while(|&&c| c != 0).count();
    if let Some(&stray) = AMBIGUOUS_CASES[listed..].iter().find(|&&c| c != 0) {
        return Err(VolmeshCoreError::InvalidCaseNumber {
            value: i32::from(stray),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_number_bits() {
        assert_eq!(case_number(&[0; 8], 0.5), 0);
        assert_eq!(case_number(&[1; 8], 0.5), 255);

        let mut values = [0; 8];
        values[0] = 1;
        assert_eq!(case_number(&values, 0.5), 1);
        values[6] = 1;
        assert_eq!(case_number(&values, 0.5), 0b0100_0001);
    }

    #[test]
    fn test_case_number_equal_to_threshold_is_below() {
        assert_eq!(case_number(&[10; 8], 10.0), 0);
    }

    #[test]
    fn test_is_ambiguous() {
        assert!(is_ambiguous(250));
        assert!(is_ambiguous(165));
        assert!(is_ambiguous(61));
        assert!(!is_ambiguous(0));
        assert!(!is_ambiguous(1));
        assert!(!is_ambiguous(255));
    }

    #[test]
    fn test_table_offset_policies() {
        assert_eq!(table_offset(1, AmbiguityPolicy::Direct), 15);
        assert_eq!(table_offset(1, AmbiguityPolicy::Mirrored), 15);
        assert_eq!(table_offset(250, AmbiguityPolicy::Direct), 250 * 15);
        assert_eq!(table_offset(250, AmbiguityPolicy::Mirrored), 5 * 15);
        assert_eq!(AmbiguityPolicy::default(), AmbiguityPolicy::Direct);
    }

    #[test]
    fn test_triangle_count_extremes() {
        assert_eq!(triangle_count(0, AmbiguityPolicy::Direct), 0);
        assert_eq!(triangle_count(255, AmbiguityPolicy::Direct), 0);
        assert_eq!(triangle_count(1, AmbiguityPolicy::Direct), 1);
        assert_eq!(triangle_count(3, AmbiguityPolicy::Direct), 2);
    }

    #[test]
    fn test_emit_skips_absent_edges() {
        // Case 1 uses edges 0, 8, 3.
        let mut edges = [None; 12];
        edges[0] = Some(Point3::new(0.5, 0.0, 0.0));
        edges[8] = Some(Point3::new(0.0, 0.0, 0.5));

        let mut out = 0;
        assert_eq!(emit_triangles(1, &edges, AmbiguityPolicy::Direct, |_| out += 1), 0);
        assert_eq!(out, 0);

        edges[3] = Some(Point3::new(0.0, 0.5, 0.0));
        let mut tris = [[Point3::default(); 3]; 1];
        let n = emit_triangles(1, &edges, AmbiguityPolicy::Direct, |t| tris[0] = t);
        assert_eq!(n, 1);
        assert_eq!(tris[0][0], Point3::new(0.5, 0.0, 0.0));
        assert_eq!(tris[0][1], Point3::new(0.0, 0.0, 0.5));
        assert_eq!(tris[0][2], Point3::new(0.0, 0.5, 0.0));
    }

    #[test]
    fn test_tables_validate() {
        assert_eq!(validate_tables(), Ok(()));
    }
}
