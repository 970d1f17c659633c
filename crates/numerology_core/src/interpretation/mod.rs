//! Static interpretation lookup.
//!
//! # Responsibility
//! - Map every reduced number to its short meaning.
//! - Give each chart slot a display title.
//!
//! # Invariants
//! - The table has exactly one entry per legal `NumerologyNumber`.

use crate::model::chart::{ChartPosition, NumerologyChart};
use crate::model::number::NumerologyNumber;
use serde::Serialize;

/// Meaning of one reduced number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NumberMeaning {
    pub number: u8,
    pub keyword: &'static str,
    pub summary: &'static str,
}

const MEANINGS: [NumberMeaning; 12] = [
    NumberMeaning {
        number: 1,
        keyword: "Liderança",
        summary: "Iniciativa, independência e coragem para abrir caminhos.",
    },
    NumberMeaning {
        number: 2,
        keyword: "Cooperação",
        summary: "Sensibilidade, diplomacia e talento para parcerias.",
    },
    NumberMeaning {
        number: 3,
        keyword: "Expressão",
        summary: "Criatividade, comunicação e alegria de viver.",
    },
    NumberMeaning {
        number: 4,
        keyword: "Estrutura",
        summary: "Disciplina, trabalho constante e bases sólidas.",
    },
    NumberMeaning {
        number: 5,
        keyword: "Liberdade",
        summary: "Mudança, curiosidade e adaptação a novas experiências.",
    },
    NumberMeaning {
        number: 6,
        keyword: "Responsabilidade",
        summary: "Cuidado com a família, harmonia e senso de dever.",
    },
    NumberMeaning {
        number: 7,
        keyword: "Introspecção",
        summary: "Estudo, fé e busca pelo conhecimento interior.",
    },
    NumberMeaning {
        number: 8,
        keyword: "Realização material",
        summary: "Ambição, gestão e poder de concretizar resultados.",
    },
    NumberMeaning {
        number: 9,
        keyword: "Humanitarismo",
        summary: "Compaixão, desapego e encerramento de ciclos.",
    },
    NumberMeaning {
        number: 11,
        keyword: "Inspiração",
        summary: "Número mestre da intuição e da iluminação espiritual.",
    },
    NumberMeaning {
        number: 22,
        keyword: "Construtor mestre",
        summary: "Número mestre que transforma visões em obras duradouras.",
    },
    NumberMeaning {
        number: 33,
        keyword: "Mestre do amor",
        summary: "Número mestre do serviço, da cura e da compaixão.",
    },
];

/// Meaning of `number`.
pub fn meaning(number: NumerologyNumber) -> &'static NumberMeaning {
    let index = match number.value() {
        11 => 9,
        22 => 10,
        33 => 11,
        digit => usize::from(digit) - 1,
    };
    &MEANINGS[index]
}

/// Display title of a chart slot.
pub fn position_title(position: ChartPosition) -> &'static str {
    match position {
        ChartPosition::Destiny => "Caminho do Destino",
        ChartPosition::Motivation => "Motivação",
        ChartPosition::InnerSelf => "Eu Íntimo",
        ChartPosition::Expression => "Expressão",
        ChartPosition::Merit => "Mérito",
        ChartPosition::Challenge1 => "Primeiro Desafio",
        ChartPosition::Challenge2 => "Segundo Desafio",
        ChartPosition::Challenge3 => "Terceiro Desafio",
        ChartPosition::BiggestChallenge => "Desafio Principal",
        ChartPosition::Cycle1 => "Ciclo Formativo",
        ChartPosition::Cycle2 => "Ciclo Produtivo",
        ChartPosition::Cycle3 => "Ciclo da Colheita",
        ChartPosition::Realization1 => "Primeira Realização",
        ChartPosition::Realization2 => "Segunda Realização",
        ChartPosition::Realization3 => "Terceira Realização",
        ChartPosition::Realization4 => "Quarta Realização",
        ChartPosition::PersonalYear => "Ano Pessoal",
        ChartPosition::PersonalMonth => "Mês Pessoal",
    }
}

/// One interpreted chart slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PositionReading {
    pub position: ChartPosition,
    pub title: &'static str,
    pub number: NumerologyNumber,
    pub meaning: &'static NumberMeaning,
}

/// Reads every slot of `chart`, in display order.
pub fn interpret(chart: &NumerologyChart) -> Vec<PositionReading> {
    ChartPosition::ALL
        .iter()
        .map(|&position| {
            let number = chart.number_at(position);
            PositionReading {
                position,
                title: position_title(position),
                number,
                meaning: meaning(number),
            }
        })
        .collect()
}

impl NumerologyChart {
    /// Same as [`interpret`].
    pub fn interpretations(&self) -> Vec<PositionReading> {
        interpret(self)
    }
}

#[cfg(test)]
mod tests {
    use super::{interpret, meaning};
    use crate::engine::chart::NumerologyEngine;
    use crate::model::chart::ChartPosition;
    use crate::model::number::NumerologyNumber;
    use chrono::NaiveDate;

    #[test]
    fn every_legal_number_has_its_own_entry() {
        for value in [1, 2, 3, 4, 5, 6, 7, 8, 9, 11, 22, 33] {
            let number = NumerologyNumber::new(value).unwrap();
            assert_eq!(u32::from(meaning(number).number), value);
        }
    }

    #[test]
    fn interpret_covers_every_position() {
        let as_of = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        let chart = NumerologyEngine::default()
            .calculate("Ana Souza", "15/06/1990", as_of)
            .unwrap();

        let readings = interpret(&chart);
        assert_eq!(readings.len(), ChartPosition::ALL.len());
        assert_eq!(readings[0].position, ChartPosition::Destiny);
        assert_eq!(readings[0].number, chart.destiny);
        assert_eq!(readings[0].meaning.number, chart.destiny.value());
        assert_eq!(chart.interpretations(), readings);
    }
}
