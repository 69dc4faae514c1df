//! Farm grid tests
//!
//! Exercises the cell-addressed tool operations, growth advancement with an
//! injected clock, and grid bounds handling.

use farm_sim::simulation::{
    CellPos, CropStage, Farm, FarmConfig, FarmError, ManualClock, Species,
};

fn test_farm() -> (Farm<ManualClock>, ManualClock) {
    let config = FarmConfig {
        width: 4,
        height: 3,
        growth_duration: 10.0,
        ..FarmConfig::default()
    };
    let clock = ManualClock::new();
    let farm = Farm::with_clock(&config, clock.clone()).expect("test config should be valid");
    (farm, clock)
}

fn stage(farm: &Farm<ManualClock>, pos: CellPos) -> Option<CropStage> {
    farm.cell(pos)
        .expect("cell should be in bounds")
        .map(|crop| crop.stage())
}

/// Fertilize, plant and water a cell at the current clock reading
fn start_crop(farm: &mut Farm<ManualClock>, pos: CellPos) {
    assert!(farm.fertilize_soil(pos).unwrap());
    assert!(farm.plant_crop(pos, Species::Wheat).unwrap());
    assert!(farm.water_crop(pos).unwrap());
}

#[test]
fn test_new_farm_is_untilled() {
    let (farm, _) = test_farm();
    assert_eq!(farm.width(), 4);
    assert_eq!(farm.height(), 3);
    assert_eq!(farm.occupied_count(), 0);
    assert_eq!(farm.cells().count(), 12);
    assert!(farm.cells().all(|(_, crop)| crop.is_none()));
}

#[test]
fn test_fertilize_creates_crop() {
    let (mut farm, _) = test_farm();
    let pos = CellPos::new(1, 2);

    assert!(farm.fertilize_soil(pos).unwrap());
    assert_eq!(stage(&farm, pos), Some(CropStage::Fertilized));
    assert_eq!(farm.occupied_count(), 1);
}

#[test]
fn test_fertilize_occupied_cell_keeps_existing_crop() {
    let (mut farm, clock) = test_farm();
    let pos = CellPos::new(0, 0);

    clock.set(3.0);
    start_crop(&mut farm, pos);
    let before = farm.cell(pos).unwrap().cloned();

    assert!(!farm.fertilize_soil(pos).unwrap());
    assert_eq!(farm.cell(pos).unwrap().cloned(), before);
    assert_eq!(farm.cell(pos).unwrap().unwrap().planted_at(), Some(3.0));
}

#[test]
fn test_plant_requires_fertilized_soil() {
    let (mut farm, _) = test_farm();
    let pos = CellPos::new(2, 1);

    // Untilled soil
    assert!(!farm.plant_crop(pos, Species::Wheat).unwrap());
    assert_eq!(stage(&farm, pos), None);

    farm.fertilize_soil(pos).unwrap();
    assert!(farm.plant_crop(pos, Species::Wheat).unwrap());
    assert_eq!(stage(&farm, pos), Some(CropStage::Planted));

    // Already planted
    assert!(!farm.plant_crop(pos, Species::Wheat).unwrap());
    assert_eq!(stage(&farm, pos), Some(CropStage::Planted));
}

#[test]
fn test_plant_records_time_and_species() {
    let (mut farm, clock) = test_farm();
    let pos = CellPos::new(3, 0);

    farm.fertilize_soil(pos).unwrap();
    clock.set(7.5);
    farm.plant_crop(pos, Species::Wheat).unwrap();

    let crop = farm.cell(pos).unwrap().unwrap();
    assert_eq!(crop.planted_at(), Some(7.5));
    assert_eq!(crop.species(), Species::Wheat);
}

#[test]
fn test_water_requires_planted_crop() {
    let (mut farm, _) = test_farm();
    let pos = CellPos::new(0, 1);

    assert!(!farm.water_crop(pos).unwrap());

    farm.fertilize_soil(pos).unwrap();
    assert!(!farm.water_crop(pos).unwrap());
    assert_eq!(stage(&farm, pos), Some(CropStage::Fertilized));

    farm.plant_crop(pos, Species::Wheat).unwrap();
    assert!(farm.water_crop(pos).unwrap());
    assert_eq!(stage(&farm, pos), Some(CropStage::Watered));

    assert!(!farm.water_crop(pos).unwrap());
}

#[test]
fn test_advance_all_growth_follows_clock() {
    let (mut farm, clock) = test_farm();
    let pos = CellPos::new(1, 1);
    start_crop(&mut farm, pos);

    clock.set(5.0);
    assert_eq!(farm.advance_all_growth(), 0);
    assert_eq!(stage(&farm, pos), Some(CropStage::Watered));

    clock.set(10.0);
    assert_eq!(farm.advance_all_growth(), 1);
    assert_eq!(stage(&farm, pos), Some(CropStage::Sprout));

    clock.set(20.0);
    farm.advance_all_growth();
    assert_eq!(stage(&farm, pos), Some(CropStage::Grown));

    clock.set(30.0);
    farm.advance_all_growth();
    assert_eq!(stage(&farm, pos), Some(CropStage::Harvested));
}

#[test]
fn test_advance_all_growth_only_moves_watered_crops() {
    let (mut farm, clock) = test_farm();
    let watered = CellPos::new(0, 0);
    let planted = CellPos::new(1, 0);
    let fertilized = CellPos::new(2, 0);

    start_crop(&mut farm, watered);
    farm.fertilize_soil(planted).unwrap();
    farm.plant_crop(planted, Species::Wheat).unwrap();
    farm.fertilize_soil(fertilized).unwrap();

    clock.set(100.0);
    assert_eq!(farm.advance_all_growth(), 1);

    assert_eq!(stage(&farm, watered), Some(CropStage::Sprout));
    assert_eq!(stage(&farm, planted), Some(CropStage::Planted));
    assert_eq!(stage(&farm, fertilized), Some(CropStage::Fertilized));
}

#[test]
fn test_harvest_requires_ripe_crop() {
    let (mut farm, clock) = test_farm();
    let pos = CellPos::new(2, 2);

    assert!(!farm.harvest_crop(pos).unwrap());

    start_crop(&mut farm, pos);
    clock.set(10.0);
    farm.advance_all_growth();
    assert!(!farm.harvest_crop(pos).unwrap());
    assert_eq!(stage(&farm, pos), Some(CropStage::Sprout));

    farm.advance_all_growth();
    farm.advance_all_growth();
    assert_eq!(stage(&farm, pos), Some(CropStage::Harvested));

    assert!(farm.harvest_crop(pos).unwrap());
    assert_eq!(stage(&farm, pos), None);
    assert_eq!(farm.occupied_count(), 0);
}

#[test]
fn test_full_cycle_repeats_without_leaking_state() {
    let (mut farm, clock) = test_farm();
    let pos = CellPos::new(3, 2);

    for cycle in 0..5 {
        let start = cycle as f64 * 100.0;
        clock.set(start);
        start_crop(&mut farm, pos);

        // Previous cycle's timestamp must not speed up this one
        clock.set(start + 9.0);
        farm.advance_all_growth();
        assert_eq!(stage(&farm, pos), Some(CropStage::Watered));

        clock.set(start + 10.0);
        for _ in 0..3 {
            farm.advance_all_growth();
        }
        assert_eq!(stage(&farm, pos), Some(CropStage::Harvested));
        assert!(farm.harvest_crop(pos).unwrap());
        assert_eq!(stage(&farm, pos), None);
    }
}

#[test]
fn test_grid_corners_are_usable() {
    let (mut farm, _) = test_farm();
    let first = CellPos::new(0, 0);
    let last = CellPos::new(farm.width() - 1, farm.height() - 1);

    assert!(farm.fertilize_soil(first).unwrap());
    assert!(farm.fertilize_soil(last).unwrap());
    assert_eq!(stage(&farm, first), Some(CropStage::Fertilized));
    assert_eq!(stage(&farm, last), Some(CropStage::Fertilized));
}

#[test]
fn test_out_of_bounds_is_an_error() {
    let (mut farm, _) = test_farm();
    let outside = [CellPos::new(4, 0), CellPos::new(0, 3), CellPos::new(100, 100)];

    for pos in outside {
        let expected = FarmError::OutOfBounds {
            x: pos.x,
            y: pos.y,
            width: 4,
            height: 3,
        };
        assert_eq!(farm.fertilize_soil(pos), Err(expected.clone()));
        assert_eq!(farm.plant_crop(pos, Species::Wheat), Err(expected.clone()));
        assert_eq!(farm.water_crop(pos), Err(expected.clone()));
        assert_eq!(farm.harvest_crop(pos), Err(expected.clone()));
        assert!(farm.cell(pos).is_err());
    }

    // Nothing inside the grid was touched
    assert_eq!(farm.occupied_count(), 0);
}

#[test]
fn test_stage_counts() {
    let (mut farm, _) = test_farm();
    farm.fertilize_soil(CellPos::new(0, 0)).unwrap();
    farm.fertilize_soil(CellPos::new(1, 0)).unwrap();
    start_crop(&mut farm, CellPos::new(2, 0));

    let counts = farm.stage_counts();
    let count_of = |stage: CropStage| {
        counts
            .iter()
            .find(|(s, _)| *s == stage)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    };
    assert_eq!(count_of(CropStage::Fertilized), 2);
    assert_eq!(count_of(CropStage::Watered), 1);
    assert_eq!(count_of(CropStage::Harvested), 0);
}

#[test]
fn test_invalid_config_is_rejected() {
    let rejected = [
        FarmConfig {
            width: 0,
            ..FarmConfig::default()
        },
        FarmConfig {
            growth_duration: f64::NAN,
            ..FarmConfig::default()
        },
        FarmConfig {
            intermediate_stages: vec![CropStage::Sprout, CropStage::Sprout],
            ..FarmConfig::default()
        },
        FarmConfig {
            intermediate_stages: vec![CropStage::Empty],
            ..FarmConfig::default()
        },
    ];

    for config in rejected {
        assert!(
            matches!(
                Farm::with_clock(&config, ManualClock::new()),
                Err(FarmError::InvalidConfig { .. })
            ),
            "config should be rejected: {config:?}"
        );
    }
}
