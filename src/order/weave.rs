//! Woven traversals: side-cross and middle-out
//!
//! Side-cross consumes the ascending-sorted index list from both ends
//! inward, alternating smallest-remaining and largest-remaining. Middle-out
//! starts at the structural midpoint of storage order and fans outward,
//! alternating one step left, one step right.

use super::sorted::sorted_positions;
use super::TraversalOrder;

/// Smallest, largest, next-smallest, next-largest, ...
///
/// Built from the ascending-sorted position list; with an odd element count
/// the single leftover middle position is emitted once, last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SideCross;

impl<T: Ord> TraversalOrder<T> for SideCross {
    fn permutation(items: &[T]) -> Vec<usize> {
        let sorted = sorted_positions(items);
        let mut woven = Vec::with_capacity(sorted.len());
        let mut low = 0;
        let mut high = sorted.len();
        while low < high {
            woven.push(sorted[low]);
            low += 1;
            if low < high {
                high -= 1;
                woven.push(sorted[high]);
            }
        }
        woven
    }
}

/// Middle position first, then alternating left and right outward
///
/// With `mid = n / 2`, emits `mid`, then for each offset `1..=mid` emits
/// `mid - offset` followed by `mid + offset` while the latter stays in
/// bounds. Uses storage positions only; element values are never read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MiddleOut;

impl<T> TraversalOrder<T> for MiddleOut {
    fn permutation(items: &[T]) -> Vec<usize> {
        let n = items.len();
        if n == 0 {
            return Vec::new();
        }

        let mid = n / 2;
        let mut fanned = Vec::with_capacity(n);
        fanned.push(mid);
        for offset in 1..=mid {
            fanned.push(mid - offset);
            if mid + offset < n {
                fanned.push(mid + offset);
            }
        }
        fanned
    }
}

#[cfg(test)]
mod tests {
    use super::super::is_permutation;
    use super::*;

    #[test]
    fn test_side_cross_odd_count() {
        // values [7, 15, 6, 1, 2] -> side-cross values [1, 15, 2, 7, 6]
        let items = [7, 15, 6, 1, 2];
        assert_eq!(<SideCross as TraversalOrder<i32>>::permutation(&items), vec![3, 1, 4, 0, 2]);
    }

    #[test]
    fn test_side_cross_even_count() {
        // values [4, 1, 3, 2] -> side-cross values [1, 4, 2, 3]
        let items = [4, 1, 3, 2];
        assert_eq!(<SideCross as TraversalOrder<i32>>::permutation(&items), vec![1, 0, 3, 2]);
    }

    #[test]
    fn test_middle_out_even_count() {
        // values [1, 2, 3, 4, 5, 6] -> middle-out values [4, 3, 5, 2, 6, 1]
        let items = [1, 2, 3, 4, 5, 6];
        assert_eq!(
            <MiddleOut as TraversalOrder<i32>>::permutation(&items),
            vec![3, 2, 4, 1, 5, 0]
        );
    }

    #[test]
    fn test_middle_out_odd_count() {
        // values [7, 15, 6, 1, 2] -> middle-out values [6, 15, 1, 7, 2]
        let items = [7, 15, 6, 1, 2];
        assert_eq!(<MiddleOut as TraversalOrder<i32>>::permutation(&items), vec![2, 1, 3, 0, 4]);
    }

    #[test]
    fn test_singleton_and_empty() {
        let one = [42];
        assert_eq!(<MiddleOut as TraversalOrder<i32>>::permutation(&one), vec![0]);
        assert_eq!(<SideCross as TraversalOrder<i32>>::permutation(&one), vec![0]);

        let none: [i32; 0] = [];
        assert!(<MiddleOut as TraversalOrder<i32>>::permutation(&none).is_empty());
        assert!(<SideCross as TraversalOrder<i32>>::permutation(&none).is_empty());
    }

    #[test]
    fn test_middle_out_visits_every_position_once() {
        for n in 0..16 {
            let items: Vec<i32> = (0..n as i32).collect();
            let fanned = <MiddleOut as TraversalOrder<i32>>::permutation(&items);
            assert!(is_permutation(&fanned, n), "not a permutation for n={n}");
        }
    }
}
