criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        checking_one_triple,
        counting_table_sets,
        exhausting_full_deck_sets,
        resolving_a_claim,
}

fn checking_one_triple(c: &mut criterion::Criterion) {
    let rules = Classic::default();
    let triple = [0u16, 40, 80].map(Card::from);
    c.bench_function("check whether 3 Cards form a set", |b| {
        b.iter(|| rules.is_set(&triple))
    });
}

fn counting_table_sets(c: &mut criterion::Criterion) {
    let rules = Classic::default();
    let mut deck = Deck::new(FEATURES);
    deck.shuffle(&mut SmallRng::seed_from_u64(0));
    let table = (0..TABLE_SIZE).filter_map(|_| deck.draw()).collect::<Vec<Card>>();
    c.bench_function("find every set among 12 Cards", |b| {
        b.iter(|| rules.count_sets(&table, usize::MAX))
    });
}

fn exhausting_full_deck_sets(c: &mut criterion::Criterion) {
    let rules = Classic::default();
    let deck = Deck::new(FEATURES);
    c.bench_function("find every set in an 81-Card Deck", |b| {
        b.iter(|| rules.count_sets(deck.cards(), usize::MAX))
    });
}

fn resolving_a_claim(c: &mut criterion::Criterion) {
    let rules = Classic::default();
    let deck = Deck::new(FEATURES);
    let mut table = Table::new(TABLE_SIZE, deck.len());
    deck.cards()
        .iter()
        .take(TABLE_SIZE)
        .enumerate()
        .for_each(|(slot, &card)| table.place_card(card, slot));
    let claim = [0u16, 1, 2].map(Card::from);
    c.bench_function("locate and check a claim on a 12-slot Table", |b| {
        b.iter(|| table.locate(&claim).map(|_| rules.is_set(&claim)))
    });
}

use rand::SeedableRng;
use rand::rngs::SmallRng;
use setgame::FEATURES;
use setgame::TABLE_SIZE;
use setgame::cards::Card;
use setgame::cards::Classic;
use setgame::cards::Deck;
use setgame::cards::Rules;
use setgame::table::Table;
