//! LeafSampler - deterministic systematic sampling of an ordered sequence.
//!
//! With `T` items and a cap `M < T`, the selected indices are
//! `floor(i * T / M)` for `i in 0..M`. Computed in integer arithmetic, so
//! the result is exact and identical across runs and platforms.

/// Evenly spaced subset selection with a hard cap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LeafSampler {
  /// Maximum number of items to keep.
  pub cap: usize,
}

impl LeafSampler {
  /// Create a sampler keeping at most `cap` items.
  pub fn new(cap: usize) -> Self {
    Self { cap }
  }

  /// Indices to keep out of `total` items, strictly increasing.
  ///
  /// - `total <= cap`: every index.
  /// - `cap == 0`: nothing.
  /// - otherwise: `cap` indices starting at 0 with stride `total / cap`.
  pub fn indices(&self, total: usize) -> Vec<usize> {
    if total <= self.cap {
      return (0..total).collect();
    }
    if self.cap == 0 {
      return Vec::new();
    }
    let (total, cap) = (total as u128, self.cap as u128);
    (0..cap).map(|i| (i * total / cap) as usize).collect()
  }

  /// Keep the items at [`LeafSampler::indices`], preserving order.
  pub fn select<T: Clone>(&self, items: &[T]) -> Vec<T> {
    self
      .indices(items.len())
      .into_iter()
      .map(|index| items[index].clone())
      .collect()
  }
}

#[cfg(test)]
#[path = "sampler_test.rs"]
mod sampler_test;
