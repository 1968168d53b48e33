use crate::classifier::label_list::LabelList;
use crate::classifier::ranked_result::LabelScore;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

#[derive(Debug, Clone, Copy)]
struct Candidate {
    index: usize,
    score: f32,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the max-heap keeps the lowest score on top.
        other.score.total_cmp(&self.score)
    }
}

/// Bounded min-heap selection of the K best labels.
///
/// The heap allocation is kept between frames but emptied at the start of
/// every call, so nothing from a previous frame leaks into the next ranking.
#[derive(Debug, Default)]
pub struct TopKSelector {
    heap: BinaryHeap<Candidate>,
    drained: Vec<Candidate>,
}

impl TopKSelector {
    pub fn new(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity + 1),
            drained: Vec::with_capacity(capacity),
        }
    }

    /// Returns `min(k, scores.len())` entries sorted by descending score.
    /// Scores without a matching label are ignored.
    pub fn select(&mut self, scores: &[f32], labels: &LabelList, k: usize) -> Vec<LabelScore> {
        self.heap.clear();
        self.drained.clear();

        for (index, &score) in scores.iter().enumerate().take(labels.len()) {
            self.heap.push(Candidate { index, score });
            if self.heap.len() > k {
                self.heap.pop();
            }
        }

        while let Some(candidate) = self.heap.pop() {
            self.drained.push(candidate);
        }

        self.drained
            .iter()
            .rev()
            .filter_map(|candidate| {
                labels.get(candidate.index).map(|label| LabelScore {
                    label: label.to_string(),
                    score: candidate.score,
                })
            })
            .collect()
    }
}
