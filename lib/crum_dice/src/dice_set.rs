use std::slice::Iter;

use crate::{
    dice::Dice,
    error::{DiceError, Result},
};

/// Fewest dice a game can start with
pub const MIN_DICE: usize = 3;

/// Dice still available for selection
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DiceSet(Vec<Dice>);

impl DiceSet {
    pub fn new(dice: Vec<Dice>) -> Self {
        Self(dice)
    }

    /// Parses one dice per specification, requiring at least [`MIN_DICE`]
    pub fn parse<I, S>(specs: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let specs: Vec<S> = specs.into_iter().collect();
        if specs.len() < MIN_DICE {
            return Err(DiceError::InvalidDiceSpec(format!(
                "the number of dice must be at least {MIN_DICE}, got {}",
                specs.len()
            )));
        }

        specs
            .iter()
            .map(|spec| spec.as_ref().parse::<Dice>())
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }

    /// Hands over the chosen dice together with what is left
    pub fn take(self, index: usize) -> Result<(Dice, DiceSet)> {
        let len = self.0.len();
        if index >= len {
            return Err(DiceError::NoSuchDice { index, len });
        }

        let mut dice = self.0;
        let chosen = dice.remove(index);
        Ok((chosen, Self(dice)))
    }

    pub fn get(&self, index: usize) -> Option<&Dice> {
        self.0.get(index)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, Dice> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Dice] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a DiceSet {
    type Item = &'a Dice;
    type IntoIter = Iter<'a, Dice>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
