// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for the covering search.
//!
//! These tests validate that the engine:
//! - Starts from the origin ball in the production space
//! - Reports the depth bound instead of a partial answer
//! - Returns complete coverings that start with the seed
//! - Leaves the caller's seed untouched

mod common;

use common::{assert_covering, engine_for, points};
use hamming_cover::context::BallTable;
use hamming_cover::filters::almost_disjoint;
use hamming_cover::state::Counters;
use hamming_cover::{Outcome, Point, SearchConfig, SearchEngine, Seed, Space};

#[test]
fn test_origin_seed_covers_232_of_2048() {
    let space = Space::default();
    let seed = Seed::origin(&space);
    assert_eq!(seed.covered().len(), 1 + 11 + 55 + 165);
    assert_eq!(space.universe_size(), 2048);
}

#[test]
fn test_one_codeword_cannot_cover_production_space() {
    let space = Space::default();
    let config = SearchConfig::new(&space, 1, 2, 1, 0).unwrap();
    let mut engine = SearchEngine::new(space, config);

    let outcome = engine.search(&Seed::origin(&space));

    assert_eq!(outcome, Outcome::DepthExceeded);
    assert_eq!(engine.statistics().get(Counters::Coverings), 0);
    // Every candidate at level 1 led straight past the bound.
    assert_eq!(
        engine.statistics().get(Counters::DepthExceeded),
        engine.statistics().get(Counters::Candidates)
    );
}

#[test]
fn test_nearly_covered_production_space_completes() {
    let space = Space::default();
    // Seed with a covering missing its last codeword; the search must complete it.
    let full = greedy_covering(&space);
    let rest = &full[..full.len() - 1];
    let seed = Seed::new(&space, rest[1..].iter().copied()).unwrap();
    assert_eq!(seed.points(), rest);
    assert!(seed.covered().len() < 2048);

    let config = SearchConfig::new(&space, full.len(), 0, 0, 0).unwrap();
    let mut engine = SearchEngine::new(space, config);
    let outcome = engine.search(&seed);

    let found = outcome.points().expect("one more codeword completes the covering");
    assert_eq!(found.len(), full.len());
    assert_eq!(&found[..rest.len()], rest);
    assert_covering(&space, found);
}

#[test]
fn test_seed_is_not_modified() {
    let mut engine = engine_for(4, 1, 5, 1);
    let space = engine.context().space;
    let seed = Seed::new(&space, points(&[0b1111])).unwrap();
    let before = seed.clone();

    let outcome = engine.search(&seed);

    assert_eq!(seed, before);
    let found = outcome.points().unwrap();
    assert_eq!(&found[..2], seed.points());
}

#[test]
fn test_four_bit_words_radius_one() {
    let mut engine = engine_for(4, 1, 6, 1);
    let space = engine.context().space;
    let outcome = engine.search(&Seed::origin(&space));
    let found = outcome.points().unwrap();
    // K(4, 1) = 4.
    assert_eq!(found.len(), 4);
    assert_covering(&space, found);
}

#[test]
fn test_five_bit_words_radius_one_bound() {
    let space = Space::new(5, 1).unwrap();
    // A ball holds 6 of 32 points: 5 codewords cannot cover.
    let config = SearchConfig::new(&space, 5, 1, 5, 0).unwrap();
    let mut engine = SearchEngine::new(space, config);
    assert_eq!(engine.search(&Seed::origin(&space)), Outcome::DepthExceeded);
}

#[test]
fn test_smaller_covering_replaces_larger() {
    let mut engine = engine_for(4, 1, 8, 0);
    let space = engine.context().space;
    let outcome = engine.search(&Seed::origin(&space));
    // Without maximal-touching more branches are explored, and the best of
    // them must still be as small as any found.
    let found = outcome.points().unwrap();
    assert_eq!(found.len(), 4);
    assert!(engine.statistics().get(Counters::Coverings) > 1);
}

#[test]
fn test_display_of_result() {
    let mut engine = engine_for(3, 1, 3, 1);
    let space = engine.context().space;
    let outcome = engine.search(&Seed::origin(&space));
    let found = outcome.points().unwrap();
    assert_eq!(space.display_sequence(found).to_string(), "2: [000 111]");
}

#[test]
fn test_covered_from_zero_radius_is_seed() {
    let space = Space::new(3, 0).unwrap();
    let seed = Seed::new(&space, points(&[1, 2])).unwrap();
    assert_eq!(seed.covered().len(), 3);

    let config = SearchConfig::new(&space, 8, 0, 8, 0).unwrap();
    let mut engine = SearchEngine::new(space, config);
    let found = engine.search(&seed).into_points().unwrap();
    assert_eq!(found.len(), 8);
    assert_eq!(found[3..], points(&[3, 4, 5, 6, 7])[..]);
}

/// A covering of the production space, built from the origin by always
/// taking the first almost-disjoint point.
fn greedy_covering(space: &Space) -> Vec<Point> {
    let memo = BallTable::new(space, space.radius(), space.radius());
    let mut codewords = vec![Point::ORIGIN];
    let mut covered = *Seed::origin(space).covered();
    while covered.len() < space.universe_size() {
        let next = almost_disjoint(space, &memo, &covered, space.radius())[0];
        codewords.push(next);
        covered.union_with(memo.ball(next, space.radius()));
    }
    codewords
}
