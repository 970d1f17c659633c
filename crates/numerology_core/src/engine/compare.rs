//! Side-by-side comparison of two charts.

use crate::model::chart::{ChartPosition, NumerologyChart};
use crate::model::number::NumerologyNumber;
use serde::Serialize;

/// One slot compared across two charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PositionComparison {
    pub position: ChartPosition,
    pub left: NumerologyNumber,
    pub right: NumerologyNumber,
    pub matches: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartComparison {
    /// Every slot of [`ChartPosition::ALL`], in display order.
    pub positions: Vec<PositionComparison>,
    /// Slots holding the same number in both charts.
    pub shared_count: usize,
}

impl ChartComparison {
    pub fn shared_positions(&self) -> impl Iterator<Item = ChartPosition> + '_ {
        self.positions
            .iter()
            .filter(|item| item.matches)
            .map(|item| item.position)
    }
}

/// Compares every chart slot of `left` against `right`.
pub fn compare_charts(left: &NumerologyChart, right: &NumerologyChart) -> ChartComparison {
    let positions: Vec<PositionComparison> = ChartPosition::ALL
        .iter()
        .map(|&position| {
            let left_number = left.number_at(position);
            let right_number = right.number_at(position);
            PositionComparison {
                position,
                left: left_number,
                right: right_number,
                matches: left_number == right_number,
            }
        })
        .collect();
    let shared_count = positions.iter().filter(|item| item.matches).count();

    ChartComparison {
        positions,
        shared_count,
    }
}
