//! Tile effects: income, expenses, chance cards, purchases and rent.
//!
//! | tile | effect | decision |
//! |------|--------|----------|
//! | start, empty, penalty | nothing | no |
//! | income | bank pays the player | no |
//! | expense | player pays the bank | no |
//! | chance | card applied immediately | acknowledge |
//! | asset, unowned | offer to buy | buy / pass |
//! | asset, own | nothing | no |
//! | asset, other's | rent to the owner | no |
//!
//! Rent and expenses are charged even when they push a balance below zero.

use tracing::{debug, info};

use crate::error::{GameError, GameResult};
use crate::game::{
    draw_card, Board, EventLog, GameEvent, PendingDecision, Player, PlayerId, RandomSource,
    TileKind,
};

/// Apply the effect of the tile at `tile_index` to `players[current]`.
///
/// Returns the decision the player must answer, if any. Effects that need no
/// answer are fully applied before returning.
///
/// # Errors
///
/// Returns [`GameError::InvalidTileIndex`] if the index is off the board.
pub fn resolve_tile<R: RandomSource + ?Sized>(
    board: &Board,
    players: &mut [Player],
    current: usize,
    tile_index: usize,
    rng: &mut R,
    log: &mut EventLog,
) -> GameResult<Option<PendingDecision>> {
    let tile = *board.get(tile_index).ok_or(GameError::InvalidTileIndex {
        index: tile_index,
        len: board.len(),
    })?;
    let player = &mut players[current];
    debug!(player = %player.name, tile = tile.name, kind = tile.kind.label(), "resolving tile");

    match tile.kind {
        TileKind::Start | TileKind::Empty | TileKind::Penalty => Ok(None),
        TileKind::Income { amount } => {
            player.adjust(amount);
            log.push(GameEvent::Collected {
                player: player.name.clone(),
                amount,
            });
            Ok(None)
        }
        TileKind::Expense { amount } => {
            player.adjust(-amount);
            log.push(GameEvent::Paid {
                player: player.name.clone(),
                amount,
            });
            Ok(None)
        }
        TileKind::Chance => {
            let (_, card) = draw_card(rng);
            player.adjust(card.delta);
            debug!(player = %player.name, delta = card.delta, "chance card drawn");
            log.push(GameEvent::Chance {
                player: player.name.clone(),
                text: card.text,
                delta: card.delta,
            });
            Ok(Some(PendingDecision::chance(tile.name, card)))
        }
        TileKind::Asset { cost, rent } => match tile.owner {
            None => Ok(Some(PendingDecision::purchase(
                tile_index,
                tile.name,
                cost,
                player.money,
            ))),
            Some(owner) if owner == player.id => Ok(None),
            Some(owner) => {
                pay_rent(players, current, owner, rent, log);
                Ok(None)
            }
        },
    }
}

/// Move `amount` from `players[payer]` to the player with id `owner`.
///
/// No affordability check: the payer may end up negative. Rent to an unknown
/// owner id is dropped rather than paid to the bank.
pub fn pay_rent(
    players: &mut [Player],
    payer: usize,
    owner: PlayerId,
    amount: i32,
    log: &mut EventLog,
) {
    let Some(owner_index) = players.iter().position(|p| p.id == owner) else {
        return;
    };
    if owner_index == payer {
        return;
    }

    players[payer].adjust(-amount);
    players[owner_index].adjust(amount);
    info!(
        payer = %players[payer].name,
        owner = %players[owner_index].name,
        amount,
        "rent paid"
    );
    log.push(GameEvent::RentPaid {
        payer: players[payer].name.clone(),
        owner: players[owner_index].name.clone(),
        amount,
    });
}

/// Buy the asset at `tile_index` for `player`.
///
/// Affordability and ownership are checked here, at commit time, whatever the
/// prompt showed earlier. Returns the price paid.
///
/// # Errors
///
/// Returns an error if the tile is off the board, is not an asset, is already
/// owned, or costs more than the player has.
pub fn buy_asset(
    board: &mut Board,
    player: &mut Player,
    tile_index: usize,
    log: &mut EventLog,
) -> GameResult<i32> {
    let len = board.len();
    let tile = board.get_mut(tile_index).ok_or(GameError::InvalidTileIndex {
        index: tile_index,
        len,
    })?;

    let TileKind::Asset { cost, .. } = tile.kind else {
        return Err(GameError::NotAnAsset { tile: tile_index });
    };
    if let Some(owner) = tile.owner {
        return Err(GameError::AlreadyOwned {
            tile: tile_index,
            owner,
        });
    }
    if !player.can_afford(cost) {
        return Err(GameError::InsufficientFunds {
            needed: cost,
            available: player.money,
        });
    }

    player.adjust(-cost);
    tile.owner = Some(player.id);
    info!(player = %player.name, tile = tile.name, cost, "asset bought");
    log.push(GameEvent::Bought {
        player: player.name.clone(),
        tile: tile.name,
        cost,
    });
    Ok(cost)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{DecisionKind, ScriptedRandom, CHANCE_CARDS, STARTING_MONEY};

    fn players() -> Vec<Player> {
        vec![Player::new(1, "Player 1"), Player::new(2, "Player 2")]
    }

    fn resolve(board: &Board, players: &mut [Player], current: usize, tile: usize) -> Option<PendingDecision> {
        let mut rng = ScriptedRandom::new(vec![1], vec![1]);
        let mut log = EventLog::new();
        resolve_tile(board, players, current, tile, &mut rng, &mut log).unwrap()
    }

    #[test]
    fn test_income_tile_pays_player() {
        let board = Board::standard();
        let mut players = players();
        assert!(resolve(&board, &mut players, 0, 4).is_none());
        assert_eq!(players[0].money, STARTING_MONEY + 200);
    }

    #[test]
    fn test_expense_tile_charges_player() {
        let board = Board::standard();
        let mut players = players();
        assert!(resolve(&board, &mut players, 1, 11).is_none());
        assert_eq!(players[1].money, STARTING_MONEY - 100);
    }

    #[test]
    fn test_inert_tiles() {
        let board = Board::standard();
        let mut players = players();
        for tile in [0, 8, 16] {
            assert!(resolve(&board, &mut players, 0, tile).is_none());
        }
        assert_eq!(players[0].money, STARTING_MONEY);
    }

    #[test]
    fn test_chance_applies_card_and_asks_for_ack() {
        let board = Board::standard();
        let mut players = players();
        let decision = resolve(&board, &mut players, 0, 2).unwrap();
        assert_eq!(decision.kind, DecisionKind::Chance { card: CHANCE_CARDS[1] });
        assert_eq!(players[0].money, STARTING_MONEY - 50);
    }

    #[test]
    fn test_unowned_asset_offers_purchase() {
        let board = Board::standard();
        let mut players = players();
        let decision = resolve(&board, &mut players, 0, 3).unwrap();
        assert_eq!(decision.kind, DecisionKind::Purchase { tile: 3 });
        assert_eq!(players[0].money, STARTING_MONEY);
    }

    #[test]
    fn test_rent_transfers_to_owner() {
        let mut board = Board::standard();
        board.get_mut(1).unwrap().owner = Some(1);
        let mut players = players();

        assert!(resolve(&board, &mut players, 1, 1).is_none());
        assert_eq!(players[0].money, STARTING_MONEY + 10);
        assert_eq!(players[1].money, STARTING_MONEY - 10);
    }

    #[test]
    fn test_own_asset_is_free() {
        let mut board = Board::standard();
        board.get_mut(1).unwrap().owner = Some(1);
        let mut players = players();

        assert!(resolve(&board, &mut players, 0, 1).is_none());
        assert_eq!(players[0].money, STARTING_MONEY);
    }

    #[test]
    fn test_rent_can_go_negative() {
        let mut log = EventLog::new();
        let mut players = players();
        players[1].money = 5;
        pay_rent(&mut players, 1, 1, 30, &mut log);
        assert_eq!(players[1].money, -25);
        assert_eq!(players[0].money, STARTING_MONEY + 30);
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_buy_asset() {
        let mut board = Board::standard();
        let mut player = Player::new(1, "Player 1");
        let mut log = EventLog::new();

        let paid = buy_asset(&mut board, &mut player, 3, &mut log).unwrap();
        assert_eq!(paid, 150);
        assert_eq!(player.money, STARTING_MONEY - 150);
        assert_eq!(board.get(3).unwrap().owner, Some(1));
    }

    #[test]
    fn test_buy_asset_twice_rejected() {
        let mut board = Board::standard();
        let mut first = Player::new(1, "Player 1");
        let mut second = Player::new(2, "Player 2");
        let mut log = EventLog::new();

        buy_asset(&mut board, &mut first, 3, &mut log).unwrap();
        let err = buy_asset(&mut board, &mut second, 3, &mut log).unwrap_err();
        assert_eq!(err, GameError::AlreadyOwned { tile: 3, owner: 1 });
        assert_eq!(second.money, STARTING_MONEY);
    }

    #[test]
    fn test_buy_asset_insufficient_funds() {
        let mut board = Board::standard();
        let mut player = Player::new(1, "Player 1");
        player.money = 100;
        let mut log = EventLog::new();

        let err = buy_asset(&mut board, &mut player, 19, &mut log).unwrap_err();
        assert_eq!(
            err,
            GameError::InsufficientFunds {
                needed: 300,
                available: 100
            }
        );
        assert!(board.get(19).unwrap().owner.is_none());
        assert!(log.is_empty());
    }

    #[test]
    fn test_buy_non_asset_rejected() {
        let mut board = Board::standard();
        let mut player = Player::new(1, "Player 1");
        let mut log = EventLog::new();
        assert_eq!(
            buy_asset(&mut board, &mut player, 4, &mut log),
            Err(GameError::NotAnAsset { tile: 4 })
        );
    }

    #[test]
    fn test_resolve_off_board() {
        let board = Board::standard();
        let mut players = players();
        let mut rng = ScriptedRandom::default();
        let mut log = EventLog::new();
        assert_eq!(
            resolve_tile(&board, &mut players, 0, 24, &mut rng, &mut log),
            Err(GameError::InvalidTileIndex { index: 24, len: 24 })
        );
    }
}
