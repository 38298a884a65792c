use crum_fair::{FairError, FairPlay, random::SecureRandom, verify::verify_commitment};
use proptest::prelude::*;
use rand::{SeedableRng, rngs::StdRng};

use crate::{
    DiceError,
    dice::{Dice, FACES_PER_DIE},
    dice_match::{DiceMatch, FIRST_MOVE_RANGE, MatchOutcome, THROW_OFFSET_RANGE},
    dice_set::DiceSet,
    dice_state::{DICE_MATCH_STATE_FINISHED, DiceMatchStateEnum, Player},
    probability::{ProbabilityTable, tie_probability, win_count, win_probability},
};

const EPSILON: f64 = 1e-12;

fn dice(spec: &str) -> Dice {
    spec.parse().expect("Should parse dice")
}

fn classic_set() -> DiceSet {
    DiceSet::parse(["2,2,4,4,9,9", "6,8,1,1,8,6", "7,5,3,7,5,3"]).expect("Should parse set")
}

/// Plays a whole match with fixed user inputs, whoever moves first
fn play_out<R: rand_core::RngCore + rand_core::CryptoRng>(game: &mut DiceMatch<R>) {
    loop {
        match game.get_current_state().to_enum() {
            DiceMatchStateEnum::FirstMove => {
                game.submit_guess(1).expect("Should accept guess");
            }
            DiceMatchStateEnum::UserSelect => {
                game.submit_user_dice(0).expect("Should select dice");
            }
            DiceMatchStateEnum::ComputerSelect => {
                game.submit_computer_dice().expect("Computer should select dice");
            }
            DiceMatchStateEnum::Throw { .. } => {
                game.begin_throw().expect("Should commit throw");
                game.submit_throw(4).expect("Should throw");
            }
            DiceMatchStateEnum::Finished => break,
            DiceMatchStateEnum::Invalid => panic!("Invalid match state"),
        }
    }
}

#[test]
fn test_dice_parse_and_display() {
    let d = dice("2, 2,4,4 ,9,9");
    assert_eq!(d.get_faces(), &[2, 2, 4, 4, 9, 9]);
    assert_eq!(d.to_string(), "2,2,4,4,9,9");
    assert_eq!(d.get_face(4), Some(9));
    assert_eq!(d.get_face(FACES_PER_DIE), None);
}

#[test]
fn test_dice_rejects_bad_faces() {
    assert!(matches!(
        Dice::new(&[1, 2, 3, 4, 5]),
        Err(DiceError::InvalidDiceSpec(_))
    ));
    assert!(matches!(
        Dice::new(&[1, 2, 3, 4, 5, 6, 7]),
        Err(DiceError::InvalidDiceSpec(_))
    ));
    assert!(matches!(
        Dice::new(&[1, 2, 0, 4, 5, 6]),
        Err(DiceError::InvalidDiceSpec(_))
    ));

    for spec in ["1,2,3,4,5", "1,2,3,4,5,0", "1,2,-3,4,5,6", "a,b,c,d,e,f", "", "1,2,3,,5,6"] {
        assert!(
            matches!(spec.parse::<Dice>(), Err(DiceError::InvalidDiceSpec(_))),
            "`{spec}` should be rejected"
        );
    }
}

#[test]
fn test_dice_set_requires_three() {
    assert!(matches!(
        DiceSet::parse(["1,2,3,4,5,6", "1,2,3,4,5,6"]),
        Err(DiceError::InvalidDiceSpec(_))
    ));
    assert!(matches!(
        DiceSet::parse(Vec::<String>::new()),
        Err(DiceError::InvalidDiceSpec(_))
    ));
    assert!(matches!(
        DiceSet::parse(["1,2,3,4,5,6", "1,2,3,4,5,6", "1,2,3,4,5"]),
        Err(DiceError::InvalidDiceSpec(_))
    ));
    assert_eq!(classic_set().len(), 3);
}

#[test]
fn test_dice_set_take_transfers_ownership() {
    let set = classic_set();

    let (chosen, rest) = set.clone().take(1).expect("Should take dice");
    assert_eq!(chosen, dice("6,8,1,1,8,6"));
    assert_eq!(rest.len(), 2);
    assert_eq!(rest.get(0), set.get(0));
    assert_eq!(rest.get(1), set.get(2));

    assert_eq!(
        set.take(3),
        Err(DiceError::NoSuchDice { index: 3, len: 3 })
    );
}

#[test]
fn test_win_probability_example() {
    let a = dice("2,2,4,4,9,9");
    let b = dice("1,1,6,6,8,8");

    // 2s beat both 1s, 4s beat both 1s, 9s beat everything
    assert_eq!(win_count(&a, &b), 20);
    assert!((win_probability(&a, &b) - 20.0 / 36.0).abs() < EPSILON);

    // 6s and 8s each beat the 2s and 4s
    assert_eq!(win_count(&b, &a), 16);
    assert!((win_probability(&b, &a) - 16.0 / 36.0).abs() < EPSILON);
    assert_eq!(tie_probability(&a, &b), 0.0);
}

#[test]
fn test_ties_are_not_wins() {
    let a = dice("3,3,3,3,3,3");
    assert_eq!(win_probability(&a, &a), 0.0);
    assert_eq!(tie_probability(&a, &a), 1.0);

    let b = dice("1,2,3,4,5,6");
    let win = win_probability(&b, &a);
    let loss = win_probability(&a, &b);
    assert!((win - 18.0 / 36.0).abs() < EPSILON);
    assert!((loss - 12.0 / 36.0).abs() < EPSILON);
    assert!((win + loss + tie_probability(&a, &b) - 1.0).abs() < EPSILON);
}

#[test]
fn test_probability_table() {
    let set = classic_set();
    let table = ProbabilityTable::new(&set);

    assert_eq!(table.len(), 3);
    for i in 0..3 {
        assert_eq!(table.get(i, i), Some(0.0));
        for j in 0..3 {
            if i != j {
                let expected = win_probability(&set.as_slice()[i], &set.as_slice()[j]);
                assert_eq!(table.get(i, j), Some(expected));
            }
        }
    }
    assert_eq!(table.get(3, 0), None);
}

#[test]
fn test_match_flow() {
    let mut game = DiceMatch::new(classic_set(), FairPlay::new()).expect("Should start match");
    let mac = game.get_pending_mac().expect("First move committed").to_string();

    let first = game.submit_guess(2).expect("Should accept guess");
    assert!(verify_commitment(&mac, 0, FIRST_MOVE_RANGE, &first.reveal()).is_ok());
    let expected_first = if first.reveal().number == 2 {
        Player::User
    } else {
        Player::Computer
    };
    assert_eq!(first.first_player, expected_first);
    assert_eq!(game.get_current_state().get_first_player(), Some(expected_first));
    assert_eq!(game.get_pending_mac(), None);

    play_out(&mut game);

    assert_eq!(game.get_remaining_dice().len(), 1);
    let user_dice = game.get_user_dice().expect("User holds dice").clone();
    let computer_dice = game.get_computer_dice().expect("Computer holds dice").clone();
    assert_ne!(user_dice, computer_dice);

    let throws = game.get_throws();
    assert_eq!(throws.len(), 2);
    assert_eq!(throws[0].thrower, Player::Computer);
    assert_eq!(throws[1].thrower, Player::User);

    for throw in throws {
        let reveal = throw.reveal();
        assert!(throw.commitment.verify(&reveal).is_ok());
        assert!((2..THROW_OFFSET_RANGE).contains(&reveal.number));
        assert_eq!(throw.face_index, ((4 + reveal.number) % 6) as usize);
        assert_eq!(throw.computer_value(), reveal.number);
        let held = match throw.thrower {
            Player::User => &user_dice,
            Player::Computer => &computer_dice,
        };
        assert_eq!(Some(throw.face), held.get_face(throw.face_index));
    }

    let outcome = game.get_outcome().expect("Match finished");
    let (user_face, computer_face) = (throws[1].face, throws[0].face);
    match outcome {
        MatchOutcome::UserWins { .. } => assert!(user_face > computer_face),
        MatchOutcome::ComputerWins { .. } => assert!(user_face < computer_face),
        MatchOutcome::Draw { face } => {
            assert_eq!(face, user_face);
            assert_eq!(user_face, computer_face);
        }
    }

    let (selections, _, state) = game.get_current_state().to_tuple();
    assert_eq!(selections, 2);
    assert_eq!(state, DICE_MATCH_STATE_FINISHED);
}

#[test]
fn test_match_rejects_out_of_turn_moves() {
    let mut game = DiceMatch::new(classic_set(), FairPlay::new()).expect("Should start match");

    assert!(matches!(game.submit_user_dice(0), Err(DiceError::WrongState(_))));
    assert!(matches!(game.submit_computer_dice(), Err(DiceError::WrongState(_))));
    assert!(matches!(game.begin_throw(), Err(DiceError::WrongState(_))));
    assert!(matches!(game.submit_throw(3), Err(DiceError::WrongState(_))));
    assert_eq!(game.get_outcome(), None);

    // A bad guess leaves the commitment in place
    assert_eq!(
        game.submit_guess(FIRST_MOVE_RANGE).map(|o| o.guess),
        Err(DiceError::InvalidChoice { value: 3, min: 0, max: 2 })
    );
    assert!(game.get_pending_mac().is_some());
    game.submit_guess(0).expect("Should accept guess");
    assert!(matches!(game.submit_guess(0), Err(DiceError::WrongState(_))));

    // Drive selection to the throws
    while !matches!(
        game.get_current_state().to_enum(),
        DiceMatchStateEnum::Throw { .. }
    ) {
        match game.get_current_state().to_enum() {
            DiceMatchStateEnum::UserSelect => {
                assert!(matches!(
                    game.submit_user_dice(7),
                    Err(DiceError::NoSuchDice { index: 7, .. })
                ));
                game.submit_user_dice(0).expect("Should select dice");
            }
            DiceMatchStateEnum::ComputerSelect => {
                game.submit_computer_dice().expect("Computer should select dice");
            }
            state => panic!("Unexpected state {state:?}"),
        }
    }

    assert!(matches!(game.submit_throw(3), Err(DiceError::WrongState(_))));
    game.begin_throw().expect("Should commit throw");
    assert!(matches!(game.begin_throw(), Err(DiceError::WrongState(_))));
    assert!(matches!(
        game.submit_throw(1),
        Err(DiceError::InvalidChoice { value: 1, min: 2, max: 7 })
    ));
    assert!(matches!(
        game.submit_throw(8),
        Err(DiceError::InvalidChoice { value: 8, .. })
    ));
    game.submit_throw(7).expect("Should throw");
}

#[test]
fn test_match_needs_three_dice() {
    let set = DiceSet::new(vec![dice("1,2,3,4,5,6"), dice("2,3,4,5,6,7")]);
    assert!(matches!(
        DiceMatch::new(set, FairPlay::new()),
        Err(DiceError::InvalidDiceSpec(_))
    ));
}

#[test]
fn test_match_with_seeded_source_is_reproducible() {
    let seeded = |seed| FairPlay::with_random(SecureRandom::with_rng(StdRng::seed_from_u64(seed)));

    let mut game_a = DiceMatch::new(classic_set(), seeded(7)).expect("Should start match");
    let mut game_b = DiceMatch::new(classic_set(), seeded(7)).expect("Should start match");
    assert_eq!(game_a.get_pending_mac(), game_b.get_pending_mac());

    play_out(&mut game_a);
    play_out(&mut game_b);
    assert_eq!(game_a.get_outcome(), game_b.get_outcome());
    assert_eq!(game_a.get_user_dice(), game_b.get_user_dice());
}

#[test]
fn test_entropy_failure_surfaces_as_fair_error() {
    struct Drained;

    impl rand_core::RngCore for Drained {
        fn next_u32(&mut self) -> u32 {
            unreachable!()
        }
        fn next_u64(&mut self) -> u64 {
            unreachable!()
        }
        fn fill_bytes(&mut self, _dest: &mut [u8]) {
            unreachable!()
        }
        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand_core::Error> {
            Err(rand_core::Error::new("no entropy"))
        }
    }

    impl rand_core::CryptoRng for Drained {}

    let result = DiceMatch::new(
        classic_set(),
        FairPlay::with_random(SecureRandom::with_rng(Drained)),
    );
    assert!(matches!(
        result,
        Err(DiceError::Fair(FairError::EntropyUnavailable(_)))
    ));
}

fn arb_dice() -> impl Strategy<Value = Dice> {
    prop::array::uniform6(1u32..=12).prop_map(|faces| Dice::new(&faces).expect("Positive faces"))
}

proptest! {
    #[test]
    fn prop_win_loss_tie_sum_to_one(a in arb_dice(), b in arb_dice()) {
        let total = win_probability(&a, &b) + win_probability(&b, &a) + tie_probability(&a, &b);
        prop_assert!((total - 1.0).abs() < EPSILON);
    }

    #[test]
    fn prop_win_probability_in_unit_interval(a in arb_dice(), b in arb_dice()) {
        let p = win_probability(&a, &b);
        prop_assert!((0.0..=1.0).contains(&p));
        prop_assert_eq!(win_count(&a, &b) as f64 / 36.0, p);
    }
}
