/// Odds of one dice beating another
use itertools::Itertools;

use crate::{dice::Dice, dice_set::DiceSet};

fn count_pairs(a: &Dice, b: &Dice, pred: impl Fn(u32, u32) -> bool) -> usize {
    a.get_faces()
        .iter()
        .cartesian_product(b.get_faces().iter())
        .filter(|&(&x, &y)| pred(x, y))
        .count()
}

fn pair_total(a: &Dice, b: &Dice) -> usize {
    a.get_faces().len() * b.get_faces().len()
}

/// Ordered face pairs where `a` shows the higher face
pub fn win_count(a: &Dice, b: &Dice) -> usize {
    count_pairs(a, b, |x, y| x > y)
}

pub fn tie_count(a: &Dice, b: &Dice) -> usize {
    count_pairs(a, b, |x, y| x == y)
}

/// P(face of `a` > face of `b`) over all 36 face pairs; ties are not wins.
///
/// `win_probability(b, a)` is its own computation, it is not
/// `1 - win_probability(a, b)` whenever the dice share a face value.
pub fn win_probability(a: &Dice, b: &Dice) -> f64 {
    win_count(a, b) as f64 / pair_total(a, b) as f64
}

pub fn tie_probability(a: &Dice, b: &Dice) -> f64 {
    tie_count(a, b) as f64 / pair_total(a, b) as f64
}

/// Win probabilities of each dice (row) against each other dice (column).
/// The diagonal is 0 and never computed.
#[derive(Clone, Debug)]
pub struct ProbabilityTable {
    dice: Vec<Dice>,
    probabilities: Vec<Vec<f64>>,
}

impl ProbabilityTable {
    pub fn new(dice: &DiceSet) -> Self {
        let dice = dice.as_slice().to_vec();
        let probabilities = dice
            .iter()
            .enumerate()
            .map(|(i, a)| {
                dice.iter()
                    .enumerate()
                    .map(|(j, b)| if i == j { 0.0 } else { win_probability(a, b) })
                    .collect()
            })
            .collect();

        Self {
            dice,
            probabilities,
        }
    }

    pub fn get_dice(&self) -> &[Dice] {
        &self.dice
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.probabilities.get(row)?.get(col).copied()
    }

    pub fn len(&self) -> usize {
        self.dice.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }
}
