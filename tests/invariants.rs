//! Property tests for board invariants under arbitrary attack sequences.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use conquest::board::{Board, Faction, TERRITORY_COUNT};
use conquest::mission::mission_complete;
use conquest::resolve::{apply_rolls, attack, validate_attack, BattleOutcome, DiceRolls};

fn attack_pair() -> impl Strategy<Value = (i64, i64)> {
    (0i64..=6, 0i64..=6)
}

proptest! {
    #[test]
    fn board_stays_well_formed(seed in any::<u64>(), attacks in prop::collection::vec(attack_pair(), 0..64)) {
        let mut board = Board::initial();
        let mut rng = SmallRng::seed_from_u64(seed);
        for (a, d) in attacks {
            let before = board.clone();
            if attack(&mut board, a, d, &mut rng).is_err() {
                prop_assert_eq!(&board, &before);
            }
            prop_assert_eq!(board.territories().len(), TERRITORY_COUNT);
        }
        // Troops only ever leave the board.
        let total: u32 = board.territories().iter().map(|t| t.troops).sum();
        prop_assert!(total <= 12);
    }

    #[test]
    fn capture_leaves_one_troop_with_attacker(
        a in 1i64..=5,
        d in 1i64..=5,
        attacker_roll in 1u8..=6,
        defender_roll in 1u8..=6,
    ) {
        let mut board = Board::initial();
        board.set_troops((d - 1) as usize, 1);
        if let Ok((ai, di)) = validate_attack(&board, a, d) {
            let attacker_owner = board.territories()[ai].owner;
            let attacker_troops = board.territories()[ai].troops;
            let report = apply_rolls(&mut board, ai, di, DiceRolls::new(attacker_roll, defender_roll));
            if attacker_roll >= defender_roll {
                prop_assert_eq!(report.outcome, BattleOutcome::Captured);
                prop_assert_eq!(board.territories()[di].owner, attacker_owner);
                prop_assert_eq!(board.territories()[di].troops, 1);
                prop_assert_eq!(board.territories()[ai].troops, attacker_troops - 1);
            } else {
                prop_assert_eq!(report.outcome, BattleOutcome::DefenderHeld);
                prop_assert_eq!(board.territories()[di].troops, 1);
            }
        }
    }

    #[test]
    fn mission_check_is_stable(seed in any::<u64>(), mission_id in 0u32..3) {
        let mut board = Board::initial();
        let mut rng = SmallRng::seed_from_u64(seed);
        for _ in 0..10 {
            let _ = attack(&mut board, 2, 1, &mut rng);
        }
        let first = mission_complete(&board, mission_id, Faction::Blue);
        prop_assert_eq!(mission_complete(&board, mission_id, Faction::Blue), first);
    }
}
