use crate::error::{GearForgeError, GfResult};

/// Largest combination count accepted. Indices and multipliers must fit a
/// signed 64-bit accumulator.
pub const MAX_TOTAL: u64 = i64::MAX as u64;

/// Mixed-radix view of the combination space.
///
/// Slot 0 is the fastest-varying digit and the last slot the slowest, so
/// `choice[i] = (idx / multiplier[i]) % size[i]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexSpace {
    sizes: Vec<u64>,
    multipliers: Vec<u64>,
    total: u64,
}

impl IndexSpace {
    pub fn new(sizes: &[usize]) -> GfResult<Self> {
        let mut total: u64 = 1;
        let mut multipliers = Vec::with_capacity(sizes.len());

        for (slot, &size) in sizes.iter().enumerate() {
            if size == 0 {
                return Err(GearForgeError::EmptySlot {
                    slot,
                    slot_id: slot as i64,
                });
            }
            multipliers.push(total);
            total = total
                .checked_mul(size as u64)
                .filter(|&t| t <= MAX_TOTAL)
                .ok_or(GearForgeError::CombinationOverflow { slot })?;
        }

        Ok(Self {
            sizes: sizes.iter().map(|&s| s as u64).collect(),
            multipliers,
            total,
        })
    }

    #[inline]
    pub fn total(&self) -> u64 {
        self.total
    }

    #[inline]
    pub fn slot_count(&self) -> usize {
        self.sizes.len()
    }

    pub fn sizes(&self) -> &[u64] {
        &self.sizes
    }

    pub fn multipliers(&self) -> &[u64] {
        &self.multipliers
    }

    #[inline]
    pub fn contains(&self, idx: u64) -> bool {
        idx < self.total
    }

    /// Choice tuple of `idx`.
    ///
    /// # Panics
    /// If `idx >= total()`.
    pub fn decode(&self, idx: u64) -> Vec<usize> {
        assert!(
            self.contains(idx),
            "index {} outside a space of {} combinations",
            idx,
            self.total
        );
        let mut out = vec![0; self.sizes.len()];
        self.decode_into(idx, &mut out);
        out
    }

    /// Writes the choice tuple of `idx` into `out`, which must hold one entry per slot.
    /// `idx` must be below `total()`; this is only checked in debug builds, and a
    /// larger index wraps onto an unrelated tuple.
    #[inline(always)]
    pub fn decode_into(&self, idx: u64, out: &mut [usize]) {
        debug_assert!(idx < self.total);
        for i in 0..self.sizes.len() {
            out[i] = ((idx / self.multipliers[i]) % self.sizes[i]) as usize;
        }
    }

    /// Steps `digits` to the tuple of the next index, odometer style.
    /// Returns `false` when it wraps past the last tuple back to all zeros.
    #[inline(always)]
    pub fn advance(&self, digits: &mut [usize]) -> bool {
        for i in 0..self.sizes.len() {
            digits[i] += 1;
            if (digits[i] as u64) < self.sizes[i] {
                return true;
            }
            digits[i] = 0;
        }
        false
    }

    /// Inverse of `decode`.
    pub fn encode(&self, digits: &[usize]) -> u64 {
        digits
            .iter()
            .zip(&self.multipliers)
            .map(|(&d, &m)| d as u64 * m)
            .sum()
    }
}
