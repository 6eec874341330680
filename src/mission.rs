//! Secret missions.
//!
//! One mission is drawn at game start and never changes. Completion is a
//! pure function of the mission, the current board, and the player's
//! faction, so checking repeatedly without an attack gives the same answer.

use rand::Rng;

use crate::board::{Board, Faction};

/// Number of mission definitions.
pub const MISSION_COUNT: u32 = 2;

/// Territories the player must hold to complete the conquest mission.
pub const CONQUEST_TARGET: usize = 3;

/// A win condition assigned for the whole game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mission {
    /// Leave no Green troops anywhere on the board.
    EliminateGreen,
    /// Hold at least three territories with the player's faction.
    ConquerThree,
}

impl Mission {
    /// Maps a drawn mission id to its definition.
    pub fn from_id(id: u32) -> Option<Mission> {
        match id {
            0 => Some(Mission::EliminateGreen),
            1 => Some(Mission::ConquerThree),
            _ => None,
        }
    }

    /// Returns true when the board satisfies this mission for `player`.
    ///
    /// The elimination mission only looks at the Green troop total, so a
    /// board with no Green territories at all satisfies it.
    pub fn is_complete(self, board: &Board, player: Faction) -> bool {
        match self {
            Mission::EliminateGreen => board.troops_of(Faction::Green) == 0,
            Mission::ConquerThree => board.territories_owned(player) >= CONQUEST_TARGET,
        }
    }
}

/// Draws a mission id uniformly from `0..MISSION_COUNT`.
pub fn choose_mission<R: Rng>(rng: &mut R) -> u32 {
    rng.gen_range(0..MISSION_COUNT)
}

/// Checks a mission by id. Unknown ids are never complete.
pub fn mission_complete(board: &Board, mission_id: u32, player: Faction) -> bool {
    Mission::from_id(mission_id).is_some_and(|m| m.is_complete(board, player))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Territory, TERRITORY_COUNT};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn board_with_owners(owners: [Faction; TERRITORY_COUNT]) -> Board {
        let mut board = Board::initial();
        for (i, owner) in owners.into_iter().enumerate() {
            board.set_owner(i, owner);
        }
        board
    }

    #[test]
    fn from_id_known_and_unknown() {
        assert_eq!(Mission::from_id(0), Some(Mission::EliminateGreen));
        assert_eq!(Mission::from_id(1), Some(Mission::ConquerThree));
        assert_eq!(Mission::from_id(2), None);
    }

    #[test]
    fn conquer_three_fresh_board_incomplete() {
        let board = Board::initial();
        assert!(!mission_complete(&board, 1, Faction::Blue));
    }

    #[test]
    fn conquer_three_with_three_blue_territories() {
        let board = board_with_owners([
            Faction::Green,
            Faction::Blue,
            Faction::Blue,
            Faction::Blue,
            Faction::Yellow,
        ]);
        assert!(mission_complete(&board, 1, Faction::Blue));
        assert!(!mission_complete(&board, 1, Faction::Red));
    }

    #[test]
    fn eliminate_green_vacuous_when_no_green_territory() {
        let board = board_with_owners([
            Faction::Blue,
            Faction::Blue,
            Faction::Red,
            Faction::Red,
            Faction::Yellow,
        ]);
        assert!(mission_complete(&board, 0, Faction::Blue));
    }

    #[test]
    fn eliminate_green_counts_troops_not_territories() {
        let board = Board::from_territories([
            Territory::new("North America", Faction::Green, 0),
            Territory::new("Europe", Faction::Blue, 2),
            Territory::new("Asia", Faction::Red, 4),
            Territory::new("Africa", Faction::Green, 0),
            Territory::new("Oceania", Faction::Yellow, 1),
        ]);
        assert!(mission_complete(&board, 0, Faction::Blue));
        assert!(!mission_complete(&Board::initial(), 0, Faction::Blue));
    }

    #[test]
    fn unknown_mission_never_complete() {
        let board = board_with_owners([Faction::Blue; TERRITORY_COUNT]);
        assert!(!mission_complete(&board, 2, Faction::Blue));
        assert!(!mission_complete(&board, u32::MAX, Faction::Blue));
    }

    #[test]
    fn repeated_checks_agree() {
        let board = Board::initial();
        for id in 0..MISSION_COUNT {
            let first = mission_complete(&board, id, Faction::Blue);
            for _ in 0..5 {
                assert_eq!(mission_complete(&board, id, Faction::Blue), first);
            }
        }
    }

    #[test]
    fn choose_mission_covers_both_ids() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut seen = [false; MISSION_COUNT as usize];
        for _ in 0..200 {
            let id = choose_mission(&mut rng);
            assert!(id < MISSION_COUNT);
            seen[id as usize] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}
