//! Iterative consolidation of detected text boxes into line regions.
//!
//! Layout detectors tend to emit several fragments per visual line: a label
//! box, a value box, sometimes a sliver for a clipped descender. This module
//! merges such fragments into one region per line by repeatedly folding
//! together boxes that either overlap (IoU) or sit within a vertical
//! proximity band, until a full pass performs no merge.

use crate::core::config::ConsolidationConfig;
use crate::processors::geometry::BoundingBox;
use tracing::debug;

/// Merges boxes that overlap or are vertically close until a fixed point.
///
/// Within one pass, boxes are scanned in their current order; each
/// not-yet-consumed box seeds a merged region that absorbs every other
/// not-yet-consumed box satisfying the merge predicate against the
/// *accumulated* rectangle. Absorption is therefore transitive inside a
/// pass: once a candidate grows the seed, later candidates are tested
/// against the grown extent. Passes repeat until one completes with zero
/// merges, which the shrinking box count guarantees happens.
///
/// Output order is the order in which seed boxes were first encountered,
/// not spatial order; callers that need top-to-bottom regions must re-sort.
pub fn consolidate_regions(boxes: &[BoundingBox], config: &ConsolidationConfig) -> Vec<BoundingBox> {
    let mut current: Vec<BoundingBox> = boxes.to_vec();
    let mut passes = 0usize;

    loop {
        passes += 1;
        let mut merged_any = false;
        let mut consumed = vec![false; current.len()];
        let mut next = Vec::with_capacity(current.len());

        for i in 0..current.len() {
            if consumed[i] {
                continue;
            }
            consumed[i] = true;
            let mut merged = current[i];

            for j in 0..current.len() {
                if consumed[j] {
                    continue;
                }
                if should_merge(&merged, &current[j], config) {
                    merged = merged.union(&current[j]);
                    consumed[j] = true;
                    merged_any = true;
                }
            }

            next.push(merged);
        }

        current = next;
        if !merged_any {
            break;
        }
    }

    debug!(
        input = boxes.len(),
        output = current.len(),
        passes,
        "region consolidation converged"
    );
    current
}

/// The merge predicate: overlap above the IoU threshold, or facing edges
/// closer than the proximity threshold. Both comparisons are strict, so a
/// pair sitting exactly on the IoU threshold stays apart.
fn should_merge(merged: &BoundingBox, candidate: &BoundingBox, config: &ConsolidationConfig) -> bool {
    merged.iou(candidate) > config.iou_threshold
        || merged.vertical_gap(candidate) < config.proximity_threshold
}
