//! Realization numbers and the ages bounding them.

use crate::engine::config::{ConfigError, RealizationOperand, RealizationTable};
use crate::engine::reduce::reduce_sum;
use crate::model::chart::{LifeCycles, RealizationAges, Realizations};
use crate::model::number::NumerologyNumber;

/// Chart values already known when realizations are evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RealizationInputs {
    pub destiny: NumerologyNumber,
    pub motivation: NumerologyNumber,
    pub inner_self: NumerologyNumber,
    pub expression: NumerologyNumber,
    pub cycles: LifeCycles,
}

/// Evaluates `table` in order r1..r4.
///
/// # Errors
/// - [`ConfigError::ForwardRealizationReference`] when a formula reads a
///   realization that is not computed yet. Validated configs never hit this.
pub fn realizations(
    table: &RealizationTable,
    inputs: &RealizationInputs,
) -> Result<Realizations, ConfigError> {
    let mut computed: Vec<NumerologyNumber> = Vec::with_capacity(4);
    for (index, formula) in table.formulas().iter().enumerate() {
        let slot = (index + 1) as u8;
        let left = resolve(formula.left, inputs, &computed, slot)?;
        let right = resolve(formula.right, inputs, &computed, slot)?;
        computed.push(reduce_sum(left, right));
    }

    Ok(Realizations {
        r1: computed[0],
        r2: computed[1],
        r3: computed[2],
        r4: computed[3],
    })
}

fn resolve(
    operand: RealizationOperand,
    inputs: &RealizationInputs,
    computed: &[NumerologyNumber],
    slot: u8,
) -> Result<NumerologyNumber, ConfigError> {
    let value = match operand {
        RealizationOperand::Destiny => inputs.destiny,
        RealizationOperand::Motivation => inputs.motivation,
        RealizationOperand::InnerSelf => inputs.inner_self,
        RealizationOperand::Expression => inputs.expression,
        RealizationOperand::Cycle1 => inputs.cycles.c1,
        RealizationOperand::Cycle2 => inputs.cycles.c2,
        RealizationOperand::Cycle3 => inputs.cycles.c3,
        RealizationOperand::Realization1
        | RealizationOperand::Realization2
        | RealizationOperand::Realization3 => operand
            .realization_slot()
            .and_then(|referenced| computed.get(usize::from(referenced) - 1))
            .copied()
            .ok_or(ConfigError::ForwardRealizationReference { slot, operand })?,
    };
    Ok(value)
}

/// First realization ends at `base - root(destiny)`; the next two last
/// `span` years each. Ages saturate at `u32::MAX`; `EngineConfig::validate`
/// rejects parameters that would reach it.
pub fn realization_ages(destiny: NumerologyNumber, base: u32, span: u32) -> RealizationAges {
    let first_end = base.saturating_sub(u32::from(destiny.root()));
    let second_end = first_end.saturating_add(span);
    RealizationAges {
        first_end,
        second_end,
        third_end: second_end.saturating_add(span),
    }
}

#[cfg(test)]
mod tests {
    use super::{realization_ages, realizations, RealizationInputs};
    use crate::engine::config::{
        ConfigError, RealizationFormula, RealizationOperand, RealizationTable,
    };
    use crate::model::chart::LifeCycles;
    use crate::model::number::NumerologyNumber;

    fn n(value: u32) -> NumerologyNumber {
        NumerologyNumber::new(value).unwrap()
    }

    fn inputs() -> RealizationInputs {
        RealizationInputs {
            destiny: n(4),
            motivation: n(7),
            inner_self: n(3),
            expression: n(1),
            cycles: LifeCycles {
                c1: n(6),
                c2: n(6),
                c3: n(1),
            },
        }
    }

    #[test]
    fn methodology_table_combines_named_operands() {
        let result = realizations(&RealizationTable::METHODOLOGY, &inputs()).unwrap();
        assert_eq!(result.r1, n(4)); // 7 + 6 = 13
        assert_eq!(result.r2, n(3)); // 6 + 6 = 12
        assert_eq!(result.r3, n(7)); // 6 + 1
        assert_eq!(result.r4, n(5)); // 4 + 1
    }

    #[test]
    fn classic_pinnacles_reuse_earlier_realizations() {
        let result = realizations(&RealizationTable::CLASSIC_PINNACLES, &inputs()).unwrap();
        assert_eq!(result.r1, n(3)); // 6 + 6 = 12
        assert_eq!(result.r2, n(7)); // 6 + 1
        assert_eq!(result.r3, n(1)); // 3 + 7 = 10
        assert_eq!(result.r4, n(7)); // 6 + 1
    }

    #[test]
    fn forward_reference_is_an_error() {
        let mut table = RealizationTable::METHODOLOGY;
        table.r1 = RealizationFormula::new(
            RealizationOperand::Realization3,
            RealizationOperand::Cycle1,
        );
        let err = realizations(&table, &inputs()).unwrap_err();
        assert_eq!(
            err,
            ConfigError::ForwardRealizationReference {
                slot: 1,
                operand: RealizationOperand::Realization3,
            }
        );
    }

    #[test]
    fn ages_use_destiny_root() {
        let ages = realization_ages(n(4), 36, 9);
        assert_eq!((ages.first_end, ages.second_end, ages.third_end), (32, 41, 50));

        let master = realization_ages(n(22), 36, 9);
        assert_eq!(master.first_end, 32);
    }

    #[test]
    fn ages_saturate_instead_of_wrapping() {
        let ages = realization_ages(n(1), 36, u32::MAX);
        assert_eq!(ages.first_end, 35);
        assert_eq!(ages.second_end, u32::MAX);
        assert_eq!(ages.third_end, u32::MAX);
    }
}
