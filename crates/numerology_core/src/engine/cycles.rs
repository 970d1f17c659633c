//! Life cycles.
//!
//! Month maps to C1, day to C2 and year to C3. Which cycle is current is
//! decided only by age against [`CycleBoundaries`].

use crate::engine::config::CycleBoundaries;
use crate::engine::reduce::reduce;
use crate::model::birth_date::BirthDate;
use crate::model::chart::{CyclePosition, LifeCycles};

pub fn life_cycles(birth: &BirthDate) -> LifeCycles {
    LifeCycles {
        c1: reduce(birth.month()),
        c2: reduce(birth.day()),
        c3: reduce(birth.year_digits()),
    }
}

/// C1 below `first_end`, C2 below `second_end`, C3 otherwise.
pub fn cycle_for_age(age: u32, boundaries: &CycleBoundaries) -> CyclePosition {
    if age < boundaries.first_end {
        CyclePosition::First
    } else if age < boundaries.second_end {
        CyclePosition::Second
    } else {
        CyclePosition::Third
    }
}
