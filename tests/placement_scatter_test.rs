use rand::SeedableRng;
use rand::rngs::StdRng;
use torchmaze::maze::{
    MapError, MazeLayout, TileKind, TileMap,
    scatter::{GRASS_VARIANTS, scatter_grass, scatter_torches},
};
use torchmaze::{Point3, Vector3};

fn layout(text: &str) -> MazeLayout {
    let map = TileMap::parse(text).expect("valid map");
    MazeLayout::from_map(&map).expect("valid layout")
}

#[test]
fn example_map_expands_to_documented_world_positions() {
    let built = layout("2\n2\n0 1\n2 0\n");

    assert_eq!(
        built.walls,
        vec![Vector3::new(0.0, 0.0, 0.0), Vector3::new(2.0, 0.0, 2.0)]
    );
    assert_eq!(built.floors.len(), 2);
    assert_eq!(built.ceilings.len(), 2);
    // The start tile sits at grid (0, 1).
    assert_eq!(built.spawn, Point3::new(0.0, 0.0, 2.0));
}

#[test]
fn every_cell_contributes_to_exactly_one_category() {
    let text = "3\n2\n0 1 2\n0 1 0\n";
    let map = TileMap::parse(text).expect("valid map");
    let built = layout(text);

    let mut wall_cells = 0;
    let mut open_cells = 0;
    for column in 0..map.width() {
        for row in 0..map.height() {
            match map.kind(column, row) {
                Some(TileKind::Wall) => wall_cells += 1,
                Some(TileKind::EmptySpace) | Some(TileKind::PlayerStart) => open_cells += 1,
                None => (),
            }
        }
    }

    assert_eq!(built.walls.len(), wall_cells);
    assert_eq!(built.floors.len(), open_cells);
    assert_eq!(built.ceilings.len(), open_cells);
    assert_eq!(
        built.walls.len() + built.floors.len(),
        map.width() * map.height()
    );
}

#[test]
fn floor_and_ceiling_heights_are_fixed() {
    let built = layout("3\n2\n0 1 2\n0 1 0\n");
    assert!(built.floors.iter().all(|f| f.y == -2.0));
    assert!(built.ceilings.iter().all(|c| c.y == 1.0));
    assert!(built.walls.iter().all(|w| w.y == 0.0));
}

#[test]
fn unknown_codes_place_nothing() {
    let built = layout("3\n1\n9 2 7\n");
    assert!(built.walls.is_empty());
    assert_eq!(built.floors.len(), 1);
    assert_eq!(built.spawn, Point3::new(2.0, 0.0, 0.0));
}

#[test]
fn a_map_without_a_start_is_rejected() {
    let map = TileMap::parse("2\n2\n0 1\n1 0\n").expect("valid map");
    assert!(matches!(
        MazeLayout::from_map(&map),
        Err(MapError::MissingPlayerStart)
    ));
}

#[test]
fn a_map_with_two_starts_is_rejected() {
    let map = TileMap::parse("2\n2\n2 1\n2 0\n").expect("valid map");
    match MazeLayout::from_map(&map) {
        Err(MapError::ExtraPlayerStart { column, row }) => {
            // Scan order is column-major, so the duplicate is (0, 1).
            assert_eq!((column, row), (0, 1));
        }
        other => panic!("expected ExtraPlayerStart, got {other:?}"),
    }
}

const MEADOW: &str = "4\n4\n0 0 0 0\n0 2 1 0\n0 1 1 0\n0 0 0 0\n";

#[test]
fn grass_covers_every_floor_tile_once() {
    let built = layout(MEADOW);
    for seed in 0..16 {
        let mut rng = StdRng::seed_from_u64(seed);
        let variants = scatter_grass(&built.floors, &mut rng);
        let total: usize = variants.iter().map(Vec::len).sum();
        assert_eq!(total, built.floors.len(), "seed {seed}");
        assert_eq!(variants.len(), GRASS_VARIANTS);
    }
}

#[test]
fn torches_are_sparse_and_stay_near_their_tile() {
    let built = layout(MEADOW);
    for seed in 0..16 {
        let mut rng = StdRng::seed_from_u64(seed);
        let torches = scatter_torches(&built.floors, &mut rng);
        assert!(torches.len() <= built.floors.len(), "seed {seed}");
        for torch in &torches {
            assert_eq!(torch.y, -2.0);
            assert!(
                built
                    .floors
                    .iter()
                    .any(|f| (torch.x - f.x).abs() <= 0.8 + 1e-4
                        && (torch.z - f.z).abs() <= 0.8 + 1e-4),
                "seed {seed}: torch {torch:?} is not near any floor tile"
            );
        }
    }
}

#[test]
fn jitter_lands_on_tenth_steps() {
    let built = layout(MEADOW);
    let mut rng = StdRng::seed_from_u64(3);
    let torches = scatter_torches(&built.floors, &mut rng);
    let grass = scatter_grass(&built.floors, &mut rng);
    let all = torches
        .iter()
        .chain(grass.iter().flatten());
    for position in all {
        // Tile centres are even, jitter is n/10: ten times any coordinate is
        // (nearly) an integer.
        for value in [position.x, position.z] {
            assert!(
                ((value * 10.0).round() - value * 10.0).abs() < 1e-3,
                "{value} is not aligned to 0.1 steps"
            );
        }
    }
}

#[test]
fn scatter_handles_an_empty_floor_list() {
    let mut rng = StdRng::seed_from_u64(0);
    let floors: Vec<Vector3<f32>> = Vec::new();
    assert!(scatter_torches(&floors, &mut rng).is_empty());
    assert!(scatter_grass(&floors, &mut rng).iter().all(Vec::is_empty));
}

#[test]
fn prop_categories_are_distinct_and_complete() {
    use torchmaze::maze::PropKind;
    let mut seen = std::collections::BTreeSet::new();
    for kind in PropKind::ALL {
        assert!(seen.insert(kind), "{kind:?} listed twice");
    }
    assert_eq!(seen.len(), PropKind::ALL.len());
    // Three grass variants run through the foliage pass, four categories
    // stay opaque.
    assert_eq!(PropKind::ALL.iter().filter(|k| k.is_foliage()).count(), 3);
    assert_eq!(PropKind::ALL.iter().filter(|k| !k.is_foliage()).count(), 4);
}

#[test]
fn seeded_scatter_is_deterministic() {
    let built = layout(MEADOW);

    let mut first = StdRng::seed_from_u64(99);
    let mut second = StdRng::seed_from_u64(99);

    assert_eq!(
        scatter_torches(&built.floors, &mut first),
        scatter_torches(&built.floors, &mut second)
    );
    assert_eq!(
        scatter_grass(&built.floors, &mut first),
        scatter_grass(&built.floors, &mut second)
    );
}
