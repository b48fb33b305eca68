//! Fold resource pool
//!
//! Fixed-capacity pool of fold visuals behind an array-backed LIFO
//! free-list. LIFO reuse keeps the stacking order equal to the number of
//! folds already active when a slot is handed out, so newer simultaneous
//! folds draw above older ones. The (capacity+1)-th concurrent acquire is
//! refused, never queued.

use crate::tuning::FoldTuning;

use super::visual::FoldVisual;

#[derive(Debug, Clone)]
pub struct FoldPool {
    visuals: Vec<FoldVisual>,
    /// Free slot indices, top of the stack reused first
    free: Vec<usize>,
}

impl FoldPool {
    pub fn new(tuning: &FoldTuning) -> Self {
        let capacity = tuning.fold_capacity.max(1);
        let visuals = vec![FoldVisual::new(tuning); capacity];
        // Reverse so slot 0 is the first handed out
        let free = (0..capacity).rev().collect();
        Self { visuals, free }
    }

    /// Pop a slot off the free-list, or `None` when every fold is in use.
    /// The slot's visual is activated with its stacking order.
    pub fn acquire(&mut self) -> Option<usize> {
        let index = self.free.pop()?;
        let stack_order = self.visuals.len() - self.free.len() - 1;
        self.visuals[index].acquire(stack_order);
        log::debug!("fold slot {index} acquired (stack order {stack_order})");
        Some(index)
    }

    /// Return a slot to the free-list and deactivate its visual.
    /// Releasing a slot that is already free is a caller bug.
    pub fn release(&mut self, index: usize) {
        debug_assert!(
            !self.free.contains(&index),
            "fold slot {index} released while already free"
        );
        self.visuals[index].release();
        self.free.push(index);
        log::debug!("fold slot {index} released");
    }

    pub fn capacity(&self) -> usize {
        self.visuals.len()
    }

    pub fn free_count(&self) -> usize {
        self.free.len()
    }

    pub fn in_use_count(&self) -> usize {
        self.visuals.len() - self.free.len()
    }

    pub fn visual(&self, index: usize) -> &FoldVisual {
        &self.visuals[index]
    }

    pub(crate) fn visual_mut(&mut self, index: usize) -> &mut FoldVisual {
        &mut self.visuals[index]
    }

    /// All visuals, free and in use, for the render pass
    pub fn visuals(&self) -> &[FoldVisual] {
        &self.visuals
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn pool_with_capacity(capacity: usize) -> FoldPool {
        let tuning = FoldTuning {
            fold_capacity: capacity,
            ..Default::default()
        };
        FoldPool::new(&tuning)
    }

    #[test]
    fn test_acquire_until_exhausted() {
        let mut pool = pool_with_capacity(2);
        let a = pool.acquire();
        let b = pool.acquire();
        assert!(a.is_some());
        assert!(b.is_some());
        assert_ne!(a, b);
        assert_eq!(pool.acquire(), None);
        assert_eq!(pool.free_count(), 0);
        assert_eq!(pool.in_use_count(), 2);
    }

    #[test]
    fn test_lifo_reuse() {
        let mut pool = pool_with_capacity(3);
        let a = pool.acquire().unwrap();
        let b = pool.acquire().unwrap();
        pool.release(a);
        pool.release(b);
        // Most recently released comes back first
        assert_eq!(pool.acquire(), Some(b));
        assert_eq!(pool.acquire(), Some(a));
    }

    #[test]
    fn test_stack_order_counts_active_folds() {
        let mut pool = pool_with_capacity(3);
        let a = pool.acquire().unwrap();
        let b = pool.acquire().unwrap();
        assert_eq!(pool.visual(a).stack_order(), 0);
        assert_eq!(pool.visual(b).stack_order(), 1);

        // After a full drain, orders restart from the bottom
        pool.release(b);
        pool.release(a);
        let c = pool.acquire().unwrap();
        assert_eq!(pool.visual(c).stack_order(), 0);
    }

    #[test]
    fn test_release_reactivates_slot_later() {
        let mut pool = pool_with_capacity(1);
        let a = pool.acquire().unwrap();
        assert!(pool.visual(a).is_active());
        pool.release(a);
        assert!(!pool.visual(a).is_active());
        assert_eq!(pool.acquire(), Some(a));
        assert!(pool.visual(a).is_active());
    }

    #[test]
    fn test_capacity_floor_of_one() {
        let mut pool = pool_with_capacity(0);
        assert_eq!(pool.capacity(), 1);
        assert!(pool.acquire().is_some());
    }

    proptest! {
        #[test]
        fn prop_free_plus_in_use_is_capacity(ops in proptest::collection::vec(any::<bool>(), 0..64)) {
            let mut pool = pool_with_capacity(4);
            let mut held: Vec<usize> = Vec::new();

            for op in ops {
                if op {
                    if let Some(slot) = pool.acquire() {
                        // No double lending
                        prop_assert!(!held.contains(&slot));
                        held.push(slot);
                    } else {
                        prop_assert_eq!(pool.free_count(), 0);
                    }
                } else if let Some(slot) = held.pop() {
                    pool.release(slot);
                }
                prop_assert_eq!(pool.free_count() + pool.in_use_count(), pool.capacity());
                prop_assert_eq!(pool.in_use_count(), held.len());
            }
        }
    }
}
