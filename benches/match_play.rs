use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rust_war::cards::Card;
use rust_war::core::{MatchConfig, Player, PlayerId, PlayerMap};
use rust_war::game::WarGame;
use rust_war::rules::resolve_war;

fn full_match(c: &mut Criterion) {
    c.bench_function("match 4x13, 2 players", |b| {
        b.iter(|| {
            let mut game = WarGame::new(MatchConfig::default().with_seed(black_box(42)));
            game.play()
        })
    });

    c.bench_function("match 100x100, 8 players", |b| {
        b.iter(|| {
            let config = MatchConfig::new(100, 100, 8).with_seed(black_box(42));
            WarGame::new(config).play()
        })
    });
}

fn single_rank_war(c: &mut Criterion) {
    c.bench_function("war chain, single rank, 4 players", |b| {
        b.iter_batched(
            || {
                let mut players = PlayerMap::new(4, Player::new);
                for id in PlayerId::all(4) {
                    for _ in 0..1_000 {
                        players[id].add_card(Card::new(0, 0));
                    }
                }
                players
            },
            |mut players| {
                let order: Vec<PlayerId> = PlayerId::all(4).collect();
                resolve_war(&mut players, &order, 0)
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, full_match, single_rank_war);
criterion_main!(benches);
