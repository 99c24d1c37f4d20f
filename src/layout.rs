// SPDX-License-Identifier: MPL-2.0
//! Stacking layout for toasts sharing a position.
//!
//! Offsets are purely additive: a new toast sits after every existing one,
//! and removing a toast only shifts the ones stacked after it.

/// Anything that occupies a slot in a position's stack.
pub trait Stackable {
    /// Rendered height in pixels, `None` until the renderer has laid it out.
    fn rendered_height(&self) -> Option<f64>;
    /// Current offset, `None` while the visual element is not mounted.
    fn offset(&self) -> Option<f64>;
    fn set_offset(&mut self, offset: f64);
}

fn height_or_zero(height: Option<f64>) -> f64 {
    height.filter(|h| h.is_finite() && *h > 0.0).unwrap_or(0.0)
}

/// Offset for a toast appended after `existing`.
///
/// One leading gap plus `height + gap` per existing toast; toasts without a
/// height yet contribute only the gap.
#[must_use]
pub fn offset_for_insert<S: Stackable>(existing: &[S], gap: f64) -> f64 {
    existing.iter().fold(gap, |offset, toast| {
        offset + height_or_zero(toast.rendered_height()) + gap
    })
}

/// Shifts every toast from `removed_index` on toward the anchor edge.
///
/// `remaining` is the stack after removal, so `removed_index` now points at
/// the first toast that was stacked after the removed one. Toasts that are
/// not mounted yet are skipped.
pub fn reflow_after_remove<S: Stackable>(
    removed_index: usize,
    remaining: &mut [S],
    removed_height: f64,
    gap: f64,
) {
    let shift = height_or_zero(Some(removed_height)) + gap;
    for toast in remaining.iter_mut().skip(removed_index) {
        let Some(offset) = toast.offset() else {
            continue;
        };
        tracing::trace!(from = offset, to = offset - shift, "reflow toast");
        toast.set_offset(offset - shift);
    }
}
