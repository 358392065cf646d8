// Colony-level scenarios driven through the public library API.

use ant_forage::prelude::*;

const NEST: Point = Point::new(400.0, 300.0);

fn colony_at_nest(ants: usize) -> Colony {
    let mut colony = Colony::empty(SimConfig::default()).unwrap();
    colony.add_nest(NEST);
    for _ in 0..ants {
        colony.spawn_ant(NEST, NEST);
    }
    colony
}

#[test]
fn pheromone_fades_after_255_ticks() {
    let mut rng = fastrand::Rng::with_seed(1);
    let mut colony = colony_at_nest(0);
    colony.set_pheromone(NEST);

    for _ in 0..254 {
        colony.step(&[], &mut rng);
    }
    assert_eq!(colony.pheromone().map(|p| p.strength()), Some(1));

    let report = colony.step(&[], &mut rng);
    assert!(report.pheromone_expired);
    assert!(colony.pheromone().is_none());

    let mut scent = Pheromone::new(NEST, 255, 1);
    for _ in 0..255 {
        scent.decay();
    }
    assert_eq!(scent.strength(), 0);
    assert!(!scent.is_active());
}

#[test]
fn first_pickup_happens_inside_food_radius() {
    let mut rng = fastrand::Rng::with_seed(42);
    let food = Point::new(600.0, 300.0);
    let mut colony = colony_at_nest(3);
    colony.add_food(food);
    // a 200 unit gap is out of reach for a one-unit random walk in any
    // reasonable tick count, so the scent leads the ants there
    colony.set_pheromone(food);

    let mut found = None;
    for _ in 0..200 {
        colony.step(&[], &mut rng);
        if let Some(ant) = colony.ants().iter().find(|a| a.is_carrying_food()) {
            found = Some(ant.clone());
            break;
        }
    }

    let ant = found.expect("an ant should reach the food while the scent lasts");
    assert_eq!(ant.state(), ForagingState::Returning);
    assert!(ant.position.distance(food) < 20.0);
}

#[test]
fn wandering_ants_pick_up_nearby_food_inside_radius() {
    let mut rng = fastrand::Rng::with_seed(42);
    let food = Point::new(425.0, 300.0);
    let mut colony = colony_at_nest(3);
    colony.add_food(food);

    let mut found = None;
    for _ in 0..20_000 {
        let before: Vec<Point> = colony.ants().iter().map(|a| a.position).collect();
        colony.step(&[], &mut rng);
        if let Some(ant) = colony.ants().iter().find(|a| a.is_carrying_food()) {
            // the pickup tick does not move the ant
            assert_eq!(ant.position, before[ant.id as usize]);
            found = Some(ant.clone());
            break;
        }
    }

    let ant = found.expect("a wandering ant should stumble onto food 25 units away");
    assert!(colony.pheromone().is_none());
    assert!(ant.position.distance(food) < 20.0);
}

#[test]
fn searching_ant_in_range_picks_up_next_tick() {
    let mut rng = fastrand::Rng::with_seed(3);
    let mut colony = colony_at_nest(0);
    colony.add_food(Point::new(100.0, 100.0));
    colony.spawn_ant(Point::new(115.0, 100.0), NEST);

    colony.step(&[], &mut rng);

    assert!(colony.ants()[0].is_carrying_food());
}

#[test]
fn return_from_inside_radius_completes_next_tick() {
    let mut rng = fastrand::Rng::with_seed(5);
    let mut colony = colony_at_nest(0);
    // food right where the ant stands: it picks up on tick 1
    let start = Point::new(405.0, 300.0);
    colony.add_food(Point::new(600.0, 300.0));
    colony.add_food(start);
    colony.spawn_ant(start, NEST);
    colony.step(&[], &mut rng);
    assert!(colony.ants()[0].is_carrying_food());
    assert_eq!(colony.ants()[0].position.distance(NEST), 5.0);

    let report = colony.step(&[], &mut rng);

    assert_eq!(report.deliveries.len(), 1);
    assert_eq!(colony.population(), 2);
    assert!(!colony.ants()[0].is_carrying_food());
}

#[test]
fn one_spawn_per_delivery_while_lingering() {
    let mut rng = fastrand::Rng::with_seed(9);
    let mut colony = colony_at_nest(0);
    colony.add_food(Point::new(460.0, 300.0));
    colony.spawn_ant(Point::new(470.0, 300.0), NEST);

    // pick up, walk home, then linger at the nest with nothing to do
    let mut deliveries = 0;
    for _ in 0..60 {
        deliveries += colony.step(&[], &mut rng).deliveries.len();
    }

    assert_eq!(deliveries, 1);
    assert_eq!(colony.population(), 2);
}

#[test]
fn new_pheromone_retargets_ants_immediately() {
    let mut rng = fastrand::Rng::with_seed(7);
    let mut colony = colony_at_nest(1);
    let old = Point::new(400.0, 100.0);
    let new = Point::new(600.0, 300.0);

    colony.step(&[Event::PlacePheromone(old)], &mut rng);
    colony.step(&[Event::PlacePheromone(new)], &mut rng);
    assert_eq!(colony.pheromone().map(|p| p.position), Some(new));
    assert_eq!(colony.pheromone().map(|p| p.strength()), Some(255));

    let before = colony.ants()[0].position;
    colony.step(&[], &mut rng);
    let after = colony.ants()[0].position;

    let expected_dx = (new.x - before.x) / before.distance(new) * 2.0;
    let expected_dy = (new.y - before.y) / before.distance(new) * 2.0;
    assert!((after.x - before.x - expected_dx).abs() < 1e-9);
    assert!((after.y - before.y - expected_dy).abs() < 1e-9);
}

#[test]
fn population_never_shrinks() {
    let mut rng = fastrand::Rng::with_seed(2024);
    let mut colony = Colony::new(SimConfig::default(), &mut rng).unwrap();
    let food = colony.food_sources()[0];

    let mut last = colony.population();
    for tick in 0..600u32 {
        let events = if tick % 200 == 0 {
            vec![Event::PlacePheromone(food)]
        } else {
            Vec::new()
        };
        colony.step(&events, &mut rng);
        assert!(colony.population() >= last);
        last = colony.population();
    }
    assert!(colony.deliveries() > 0);
}

#[test]
fn wandering_stays_within_one_unit_per_axis() {
    let mut rng = fastrand::Rng::with_seed(77);
    let mut colony = colony_at_nest(5);

    for _ in 0..200 {
        let before: Vec<Point> = colony.ants().iter().map(|a| a.position).collect();
        colony.step(&[], &mut rng);
        for (ant, prev) in colony.ants().iter().zip(before) {
            assert!((ant.position.x - prev.x).abs() <= 1.0);
            assert!((ant.position.y - prev.y).abs() <= 1.0);
        }
    }
}

#[test]
fn same_seed_replays_identically() {
    let run = |seed: u64| {
        let mut rng = fastrand::Rng::with_seed(seed);
        let mut colony = Colony::new(SimConfig::default(), &mut rng).unwrap();
        for _ in 0..300 {
            colony.step(&[], &mut rng);
        }
        colony.snapshot()
    };

    assert_eq!(run(31), run(31));
}
