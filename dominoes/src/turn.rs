use tracing::trace;

use crate::{Board, Deck, End, Player, Randomness, TieBreak, Tile};

/// Where and how a tile is added to the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    /// The tile in the orientation it is played in.
    pub tile: Tile,
    pub end: End,
    /// Whether the tile had to be turned around to fit.
    pub flipped: bool,
}

/// Finds where `tile` fits against the open `edges` (left, right).
///
/// The candidates are tried in this order, and the first one that fits wins:
/// 1. unturned, on the right end
/// 2. unturned, on the left end
/// 3. turned, on the right end
/// 4. turned, on the left end
///
/// Gives the tile back if it fits neither end.
pub fn place(mut tile: Tile, edges: [u8; 2]) -> Result<Placement, Tile> {
    let [left_edge, right_edge] = edges;
    let (end, flipped) = if tile.left() == right_edge {
        (End::Right, false)
    } else if tile.right() == left_edge {
        (End::Left, false)
    } else if tile.right() == right_edge {
        (End::Right, true)
    } else if tile.left() == left_edge {
        (End::Left, true)
    } else {
        return Err(tile);
    };
    if flipped {
        tile.turn();
    }
    Ok(Placement { tile, end, flipped })
}

/// Summarizes the outcome of one turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    Played {
        placement: Placement,
        /// The tile at the end of the board that the played tile was attached to.
        connected_to: Tile,
    },
    /// Nothing fit, so a tile was drawn into the hand.
    Drew { tile: Tile },
    /// Nothing fit and the deck is empty.
    Blocked,
}

pub fn execute_turn(
    player: &mut Player,
    board: &mut Board,
    deck: &mut Deck,
    tie_break: TieBreak,
    randomness: &mut impl Randomness,
) -> TurnOutcome {
    let edges = board.edges();
    let Some(tile) = player.hand.take(edges, tie_break, randomness) else {
        return match deck.draw() {
            Some(tile) => {
                trace!(player = player.name.as_str(), ?edges, %tile, "Drawing");
                player.hand.insert_tile(tile.clone());
                TurnOutcome::Drew { tile }
            }
            None => {
                trace!(player = player.name.as_str(), ?edges, "Blocked");
                TurnOutcome::Blocked
            }
        };
    };
    let placement = match place(tile, edges) {
        Ok(placement) => placement,
        // The hand only gives out tiles that contain one of the edges
        Err(tile) => unreachable!("{} does not fit the edges {:?}", tile, edges),
    };
    let connected_to = board.end(placement.end).clone();
    trace!(
        player = player.name.as_str(),
        ?edges,
        tile = %placement.tile,
        end = ?placement.end,
        flipped = placement.flipped,
        "Playing"
    );
    board.insert(placement.end, placement.tile.clone());
    TurnOutcome::Played {
        placement,
        connected_to,
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;
    use crate::randomness::Scripted;
    use crate::{tile, Hand};

    quickcheck! {
        fn placed_tiles_touch_their_end(tile: Tile, edges: (u8, u8)) -> bool {
            let edges = [edges.0 % 7, edges.1 % 7];
            match place(tile.clone(), edges) {
                Ok(Placement { tile: placed, end, flipped }) => {
                    let touches = match end {
                        End::Left => placed.right() == edges[0],
                        End::Right => placed.left() == edges[1],
                    };
                    let orientation = if flipped {
                        placed.left() == tile.right() && placed.right() == tile.left()
                    } else {
                        placed == tile
                    };
                    touches && orientation
                }
                Err(returned) => {
                    returned == tile && !tile.contains(edges[0]) && !tile.contains(edges[1])
                }
            }
        }
    }

    fn placement(tile: &str, end: End, flipped: bool) -> Placement {
        Placement {
            tile: tile.parse().unwrap(),
            end,
            flipped,
        }
    }

    #[test]
    fn placement_priority() {
        // Unturned on the right wins over everything else
        assert_eq!(place(tile!("<3:5>"), [3, 3]), Ok(placement("<3:5>", End::Right, false)));
        assert_eq!(place(tile!("<5:3>"), [3, 3]), Ok(placement("<5:3>", End::Left, false)));
        assert_eq!(place(tile!("<1:2>"), [2, 5]), Ok(placement("<1:2>", End::Left, false)));
        assert_eq!(place(tile!("<6:5>"), [2, 5]), Ok(placement("<5:6>", End::Right, true)));
        assert_eq!(place(tile!("<2:1>"), [2, 5]), Ok(placement("<1:2>", End::Left, true)));
        // A double matching both ends goes to the right
        assert_eq!(place(tile!("<4:4>"), [4, 4]), Ok(placement("<4:4>", End::Right, false)));
        assert_eq!(place(tile!("<0:1>"), [2, 5]), Err(tile!("<0:1>")));
    }

    #[test]
    fn play_a_tile() {
        let mut player = Player::new("Alice");
        player.hand = Hand::from_iter([tile!("<0:0>"), tile!("<6:2>")]);
        let mut board = Board::new(tile!("<2:2>"));
        let mut deck = Deck::new();
        let outcome = execute_turn(
            &mut player,
            &mut board,
            &mut deck,
            TieBreak::First,
            &mut Scripted::default(),
        );
        assert_eq!(
            outcome,
            TurnOutcome::Played {
                placement: placement("<6:2>", End::Left, false),
                connected_to: tile!("<2:2>"),
            }
        );
        assert_eq!(board.to_string(), " <6:2> <2:2>");
        assert_eq!(player.hand.len(), 1);
        assert_eq!(deck.len(), 28);
    }

    #[test]
    fn draw_when_nothing_fits() {
        let mut player = Player::new("Bob");
        player.hand = Hand::from_iter([tile!("<0:0>")]);
        let mut board = Board::new(tile!("<2:3>"));
        let mut deck = Deck::new();
        let outcome = execute_turn(
            &mut player,
            &mut board,
            &mut deck,
            TieBreak::Random,
            &mut Scripted::default(),
        );
        assert_eq!(outcome, TurnOutcome::Drew { tile: tile!("<6:6>") });
        assert_eq!(player.hand.to_string(), " <0:0> <6:6>");
        assert_eq!(board.len(), 1);
        assert_eq!(deck.len(), 27);
    }

    #[test]
    fn blocked_when_deck_is_empty() {
        let mut player = Player::new("Bob");
        player.hand = Hand::from_iter([tile!("<0:0>")]);
        let mut board = Board::new(tile!("<2:3>"));
        let mut deck = Deck::new();
        while deck.draw().is_some() {}
        let outcome = execute_turn(
            &mut player,
            &mut board,
            &mut deck,
            TieBreak::First,
            &mut Scripted::default(),
        );
        assert_eq!(outcome, TurnOutcome::Blocked);
        assert_eq!(player.hand.len(), 1);
    }
}
