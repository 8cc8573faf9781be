//! Overlap join between line intervals and annotation spans

use crate::document::{LabelSet, VirtualLine};
use crate::interval::OverlapIndex;
use crate::lines::LineInterval;

/// Labels of every span overlapping `line`, or `{no_type}` when none does.
pub fn labels_for<I>(line: LineInterval, index: &I, no_type: &str) -> LabelSet
where
    I: OverlapIndex<String>,
{
    let labels: LabelSet = index.overlapping(line).into_iter().cloned().collect();
    if labels.is_empty() {
        LabelSet::from([no_type.to_string()])
    } else {
        labels
    }
}

/// Attach labels to each physical line.
///
/// `lines` and `intervals` run in parallel; lines past the end of
/// `intervals` get no interval and are treated as unannotated.
pub fn annotate_lines<S, I>(
    lines: &[S],
    intervals: &[LineInterval],
    index: &I,
    no_type: &str,
) -> Vec<VirtualLine>
where
    S: AsRef<str>,
    I: OverlapIndex<String>,
{
    lines
        .iter()
        .enumerate()
        .map(|(raw, line)| {
            let labels = match intervals.get(raw) {
                Some(interval) => labels_for(*interval, index, no_type),
                None => LabelSet::from([no_type.to_string()]),
            };
            VirtualLine::new(raw + 1, labels, line.as_ref().trim_end())
        })
        .collect()
}
