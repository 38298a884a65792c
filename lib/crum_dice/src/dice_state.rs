/// Turn order of a single match: who moves first, dice selection, two throws

pub const DICE_MATCH_STATE_FIRST_MOVE: u8 = 0;
pub const DICE_MATCH_STATE_USER_SELECT: u8 = 1;
pub const DICE_MATCH_STATE_COMPUTER_SELECT: u8 = 2;
pub const DICE_MATCH_STATE_THROW: u8 = 3;
pub const DICE_MATCH_STATE_FINISHED: u8 = 4;

/// Both players pick one dice before anybody throws
pub const DICE_MATCH_SELECTIONS: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    User,
    Computer,
}

impl Player {
    pub const fn other(self) -> Self {
        match self {
            Self::User => Self::Computer,
            Self::Computer => Self::User,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiceMatchStateEnum {
    FirstMove,
    UserSelect,
    ComputerSelect,
    Throw { thrower: Player },
    Finished,
    Invalid,
}

#[derive(Clone, Debug)]
pub struct DiceMatchState {
    pub(super) first_player: Option<Player>,
    pub(super) selections: usize,
    pub(super) current_thrower: Player,
    pub(super) current_state: u8,
}

impl Default for DiceMatchState {
    fn default() -> Self {
        Self::new()
    }
}

impl DiceMatchState {
    pub const fn new() -> Self {
        Self {
            first_player: None,
            selections: 0,
            current_thrower: Player::Computer,
            current_state: DICE_MATCH_STATE_FIRST_MOVE,
        }
    }

    pub const fn is_finished(&self) -> bool {
        self.current_state == DICE_MATCH_STATE_FINISHED
    }

    pub const fn get_first_player(&self) -> Option<Player> {
        self.first_player
    }

    const fn select_state(player: Player) -> u8 {
        match player {
            Player::User => DICE_MATCH_STATE_USER_SELECT,
            Player::Computer => DICE_MATCH_STATE_COMPUTER_SELECT,
        }
    }

    pub fn start(&mut self, first_player: Player) {
        self.first_player = Some(first_player);
        self.current_state = Self::select_state(first_player);
    }

    /// Returns true once both players hold a dice. The computer always
    /// throws first.
    pub fn next_select(&mut self) -> bool {
        self.selections += 1;
        if self.selections >= DICE_MATCH_SELECTIONS {
            self.current_thrower = Player::Computer;
            self.current_state = DICE_MATCH_STATE_THROW;
            return true;
        }

        let Some(first_player) = self.first_player else {
            return false;
        };
        self.current_state = Self::select_state(first_player.other());
        false
    }

    /// Returns true when the last throw is in
    pub fn next_throw(&mut self) -> bool {
        match self.current_thrower {
            Player::Computer => {
                self.current_thrower = Player::User;
                false
            }
            Player::User => {
                self.current_state = DICE_MATCH_STATE_FINISHED;
                true
            }
        }
    }

    pub const fn to_tuple(&self) -> (usize, Player, u8) {
        (self.selections, self.current_thrower, self.current_state)
    }

    pub const fn to_enum(&self) -> DiceMatchStateEnum {
        match self.current_state {
            DICE_MATCH_STATE_FIRST_MOVE => DiceMatchStateEnum::FirstMove,
            DICE_MATCH_STATE_USER_SELECT => DiceMatchStateEnum::UserSelect,
            DICE_MATCH_STATE_COMPUTER_SELECT => DiceMatchStateEnum::ComputerSelect,
            DICE_MATCH_STATE_THROW => DiceMatchStateEnum::Throw {
                thrower: self.current_thrower,
            },
            DICE_MATCH_STATE_FINISHED => DiceMatchStateEnum::Finished,
            _ => DiceMatchStateEnum::Invalid,
        }
    }
}
