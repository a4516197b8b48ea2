//! Drives whole rounds through the processors the instruction handlers call.

use anchor_lang::prelude::*;
use bytemuck::Zeroable;
use seat_lottery::{
    errors::ErrorCode,
    processors::{
        admin_config::{apply_init_config, ConfigKeys, InitConfigArgs},
        claims::{claim_auto, claim_tier},
        deposits::apply_deposit,
        refunds::withdraw,
        round_lifecycle::{force_draw, on_random_received, open_round, request_draw, set_stop},
    },
    state::{Config, Participant, Round, RoundStatus, TicketCategory},
};

const T0: i64 = 1_700_000_000;

struct Engine {
    admin: Pubkey,
    config: Config,
}

struct LiveRound {
    key: Pubkey,
    round: Round,
    records: Vec<(Pubkey, Participant)>,
}

impl Engine {
    fn new(capacity: u8, prizes: Vec<u64>) -> Self {
        let admin = Pubkey::new_unique();
        let mut config = Config::default();
        let args = InitConfigArgs {
            capacity,
            tiers: prizes.len() as u8,
            prize_amounts: prizes,
            min_draw_delay_sec: 60,
        };
        let keys = ConfigKeys {
            admin,
            transferable_mint: Pubkey::new_unique(),
            soulbound_mint: Pubkey::new_unique(),
        };
        apply_init_config(&mut config, keys, &args, T0).unwrap();
        Self { admin, config }
    }

    fn open(&self, now: i64) -> LiveRound {
        let mut round = Round::zeroed();
        open_round(&mut round, &self.config, self.config.current_round_id, 255, now).unwrap();
        LiveRound {
            key: Pubkey::new_unique(),
            round,
            records: Vec::new(),
        }
    }
}

impl LiveRound {
    fn deposit(&mut self, owner: &Pubkey, category: TicketCategory, count: u8) -> Result<u8> {
        let idx = match self.records.iter().position(|(o, _)| o == owner) {
            Some(idx) => idx,
            None => {
                self.records.push((*owner, Participant::default()));
                self.records.len() - 1
            }
        };
        let record = &mut self.records[idx].1;
        apply_deposit(&mut self.round, &self.key, record, owner, category, count).map(|o| o.first_seat)
    }

    fn record_mut(&mut self, owner: &Pubkey) -> &mut Participant {
        &mut self
            .records
            .iter_mut()
            .find(|(o, _)| o == owner)
            .expect("owner has a record")
            .1
    }
}

#[test]
fn full_round_pays_every_tier_exactly_once() {
    let mut engine = Engine::new(10, vec![5, 1, 1]);
    let mut live = engine.open(T0);
    let players: Vec<Pubkey> = (0..10).map(|_| Pubkey::new_unique()).collect();

    for (i, player) in players.iter().enumerate() {
        assert_eq!(live.deposit(player, TicketCategory::Transferable, 1).unwrap(), i as u8);
    }
    assert_eq!(live.round.fill_count, 10);
    assert_eq!(live.round.draw_eligible, 1);

    // Full round: anyone may request before the cooldown
    let caller = players[3];
    let request_id = request_draw(&mut live.round, &mut engine.config, &caller, T0 + 1).unwrap();
    assert_eq!(live.round.request_id, request_id);

    let settlement = on_random_received(&mut live.round, &mut engine.config, [42u8; 32], T0 + 5).unwrap();
    assert_eq!(settlement.winners.len(), 3);
    assert_eq!(settlement.next_round_id, 1);
    assert_eq!(engine.config.current_round_id, 1);
    assert_eq!(live.round.status, RoundStatus::Drawn as u8);

    let mut paid = 0u64;
    for (tier, seat) in settlement.winners.iter().enumerate() {
        let owner = players[*seat as usize];
        let outcome = claim_tier(&mut live.round, &engine.config, &owner, tier as u8).unwrap();
        paid += outcome.amount;
        let err = claim_tier(&mut live.round, &engine.config, &owner, tier as u8).unwrap_err();
        assert_eq!(err, ErrorCode::AlreadyClaimed.into());
    }
    assert_eq!(paid, 7);
    assert_eq!(live.round.claimed_mask, [0b111, 0]);

    // A late duplicate callback for the same request is rejected
    let err = on_random_received(&mut live.round, &mut engine.config, [7u8; 32], T0 + 9).unwrap_err();
    assert_eq!(err, ErrorCode::UnknownRequest.into());
}

#[test]
fn every_seat_wins_in_a_hundred_tier_round() {
    let prizes: Vec<u64> = (0..100u64).map(|tier| 1_000 - tier * 5).collect();
    let total: u64 = prizes.iter().sum();
    let mut engine = Engine::new(100, prizes);
    let admin = engine.admin;
    let mut live = engine.open(T0);
    let owners: Vec<Pubkey> = (0..4).map(|_| Pubkey::new_unique()).collect();

    for owner in owners.iter() {
        live.deposit(owner, TicketCategory::Transferable, 25).unwrap();
    }
    assert_eq!(live.round.fill_count, 100);

    let settlement = force_draw(&mut live.round, &mut engine.config, &admin, [11u8; 32], T0 + 1).unwrap();
    let mut seats = settlement.winners.clone();
    seats.sort_unstable();
    assert_eq!(seats, (0..100u8).collect::<Vec<u8>>());
    assert_eq!(live.round.winners().unwrap(), settlement.winners);

    let mut paid = 0u64;
    let mut tiers_paid = 0;
    for owner in owners.iter() {
        for _ in 0..25 {
            paid += claim_auto(&mut live.round, &engine.config, owner).unwrap().amount;
            tiers_paid += 1;
        }
        let err = claim_auto(&mut live.round, &engine.config, owner).unwrap_err();
        assert_eq!(err, ErrorCode::AlreadyClaimed.into());
    }
    assert_eq!(tiers_paid, 100);
    assert_eq!(paid, total);
    assert!((0..100u8).all(|tier| live.round.is_tier_claimed(tier)));

    let err = claim_tier(&mut live.round, &engine.config, &owners[0], 100).unwrap_err();
    assert_eq!(err, ErrorCode::InvalidTier.into());
}

#[test]
fn stopped_round_refunds_exact_mix() {
    let mut engine = Engine::new(10, vec![5, 1, 1]);
    let mut live = engine.open(T0);
    let alice = Pubkey::new_unique();
    let bob = Pubkey::new_unique();

    live.deposit(&alice, TicketCategory::Transferable, 2).unwrap();
    live.deposit(&alice, TicketCategory::Soulbound, 2).unwrap();
    live.deposit(&bob, TicketCategory::Soulbound, 1).unwrap();

    let admin = engine.admin;
    let next = set_stop(&mut live.round, &mut engine.config, &admin).unwrap();
    assert_eq!(next, 1);

    let key = live.key;
    let round = live.round;
    let refund = withdraw(&round, &key, live.record_mut(&alice), &alice).unwrap();
    assert_eq!((refund.transferable_units, refund.soulbound_units), (2, 2));
    let err = withdraw(&round, &key, live.record_mut(&alice), &alice).unwrap_err();
    assert_eq!(err, ErrorCode::AlreadyWithdrawn.into());

    let refund = withdraw(&round, &key, live.record_mut(&bob), &bob).unwrap();
    assert_eq!((refund.transferable_units, refund.soulbound_units), (0, 1));

    let stranger = Pubkey::new_unique();
    let err = withdraw(&round, &key, &mut Participant::default(), &stranger).unwrap_err();
    assert_eq!(err, ErrorCode::NotDeposited.into());

    // Stopped rounds never draw
    let err = force_draw(&mut live.round, &mut engine.config, &admin, [1u8; 32], T0).unwrap_err();
    assert_eq!(err, ErrorCode::WrongRoundState.into());
}

#[test]
fn rounds_are_isolated() {
    let mut engine = Engine::new(4, vec![3, 1]);
    let admin = engine.admin;
    let alice = Pubkey::new_unique();

    let mut first = engine.open(T0);
    first.deposit(&alice, TicketCategory::Transferable, 4).unwrap();
    force_draw(&mut first.round, &mut engine.config, &admin, [9u8; 32], T0 + 10).unwrap();

    let mut second = engine.open(T0 + 20);
    assert_eq!(second.round.round_id, 1);
    assert_eq!(second.round.fill_count, 0);
    assert_eq!(second.deposit(&alice, TicketCategory::Soulbound, 1).unwrap(), 0);

    // Drawing round 0 again, or acting on it as current, is refused
    let err = request_draw(&mut first.round, &mut engine.config, &admin, T0 + 30).unwrap_err();
    assert_eq!(err, ErrorCode::WrongRoundState.into());
    assert_eq!(first.records[0].1.share_of(&second.key), 0);
    assert_eq!(second.records[0].1.share_of(&second.key), 1);

    // Round 0 prizes remain claimable after round 1 opened
    let first_claim = claim_auto(&mut first.round, &engine.config, &alice).unwrap();
    let second_claim = claim_auto(&mut first.round, &engine.config, &alice).unwrap();
    assert_eq!(first_claim.amount + second_claim.amount, 4);
}

#[test]
fn shares_always_sum_to_fill_count() {
    let engine = Engine::new(25, vec![10, 5, 2]);
    let mut live = engine.open(T0);
    let owners: Vec<Pubkey> = (0..4).map(|_| Pubkey::new_unique()).collect();
    let batches: [(usize, u8); 8] = [(0, 3), (1, 1), (2, 7), (0, 2), (3, 5), (1, 4), (2, 9), (3, 2)];

    for (owner_idx, count) in batches.iter() {
        let owner = owners[*owner_idx];
        let before = live.round.fill_count;
        match live.deposit(&owner, TicketCategory::Transferable, *count) {
            Ok(first_seat) => assert_eq!(first_seat, before),
            Err(err) => {
                assert_eq!(err, ErrorCode::CapacityExceeded.into());
                assert_eq!(live.round.fill_count, before);
            }
        }

        let total: u32 = live
            .records
            .iter()
            .map(|(_, record)| record.share_of(&live.key) as u32)
            .sum();
        assert_eq!(total, live.round.fill_count as u32);
        for seat in 0..live.round.fill_count {
            let seat_owner = live.round.seat_owner(seat).unwrap();
            assert!(owners.contains(&seat_owner));
        }
    }
    assert!(live.round.fill_count <= 25);
}

#[test]
fn stuck_oracle_request_is_cancelled_by_force_draw() {
    let mut engine = Engine::new(10, vec![5, 1, 1]);
    let admin = engine.admin;
    let mut live = engine.open(T0);
    let player = Pubkey::new_unique();
    live.deposit(&player, TicketCategory::Transferable, 3).unwrap();

    // Not full and inside the cooldown: only the admin may request
    let err = request_draw(&mut live.round, &mut engine.config, &player, T0 + 1).unwrap_err();
    assert_eq!(err, ErrorCode::NotYetEligible.into());
    request_draw(&mut live.round, &mut engine.config, &player, T0 + 60).unwrap();

    let err = request_draw(&mut live.round, &mut engine.config, &admin, T0 + 61).unwrap_err();
    assert_eq!(err, ErrorCode::AlreadyDrawing.into());

    let settlement = force_draw(&mut live.round, &mut engine.config, &admin, [3u8; 32], T0 + 500).unwrap();
    assert!(settlement.forced);
    assert!(settlement.cancelled_request);
    assert!(!engine.config.oracle.outstanding);

    let err = on_random_received(&mut live.round, &mut engine.config, [4u8; 32], T0 + 501).unwrap_err();
    assert_eq!(err, ErrorCode::UnknownRequest.into());
}
