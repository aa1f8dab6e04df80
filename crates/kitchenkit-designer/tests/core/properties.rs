//! Property-based invariant tests for the layout engine, validation,
//! reports and history.

use std::collections::HashSet;
use std::sync::Arc;

use kitchenkit_core::data::{init_standard_library, Group};
use kitchenkit_core::{LayoutMode, Project, Unit, WallId};
use kitchenkit_designer::{
    detect_collisions, generate_bom, Axis, HistoryManager, LayoutEngine, PlannerState, Snapshot,
};
use proptest::prelude::*;

const MODULES: [&str; 5] = ["base-60", "base-draw-90", "wall-80", "tall-60", "corner-carousel"];

fn wall_strategy() -> impl Strategy<Value = WallId> {
    prop_oneof![
        Just(WallId::A),
        Just(WallId::B),
        Just(WallId::C),
        Just(WallId::Island),
    ]
}

fn unit_spec_strategy() -> impl Strategy<Value = (usize, WallId, f64, f64, bool)> {
    (
        0..MODULES.len(),
        wall_strategy(),
        -50.0f64..400.0,
        0.0f64..200.0,
        any::<bool>(),
    )
}

/// A project with up to `max` random units, some locked, grouped in pairs.
fn project_strategy(max: usize) -> impl Strategy<Value = Project> {
    prop::collection::vec(unit_spec_strategy(), 0..max).prop_map(|specs| {
        let library = init_standard_library();
        let units: Vec<Unit> = specs
            .into_iter()
            .enumerate()
            .map(|(i, (module, wall, x, y, locked))| {
                let module = library.get_module(MODULES[module]).unwrap();
                let mut unit = Unit::from_module(format!("u{}", i), module, wall, x, y);
                unit.locked = locked;
                unit
            })
            .collect();
        let groups: Vec<Group> = units
            .chunks(2)
            .enumerate()
            .map(|(i, pair)| Group {
                id: format!("group-{}", i + 1),
                name: format!("Pair {}", i + 1),
                unit_ids: pair.iter().map(|u| u.id.clone()).collect(),
            })
            .collect();
        let mut project = Project::empty("Property", LayoutMode::U);
        project.units = Arc::new(units);
        project.groups = Arc::new(groups);
        project
    })
}

proptest! {
    #[test]
    fn snap_is_idempotent(project in project_strategy(24)) {
        let engine = LayoutEngine::default();
        let once = engine.snap_units(&project);
        let twice = engine.snap_units(&once);
        prop_assert_eq!(&once.units, &twice.units);
    }

    #[test]
    fn locked_units_never_move(
        project in project_strategy(16),
        x in -100.0f64..500.0,
        y in -100.0f64..500.0,
    ) {
        let engine = LayoutEngine::default();
        let ids: Vec<String> = project.units.iter().map(|u| u.id.clone()).collect();
        for unit in project.units.iter().filter(|u| u.locked) {
            let moved = engine.move_unit(&project, &unit.id, x, y);
            prop_assert_eq!(moved.unit(&unit.id), Some(unit));
            let rotated = engine.rotate_unit(&project, &unit.id);
            prop_assert_eq!(rotated.unit(&unit.id), Some(unit));
            for axis in [Axis::X, Axis::Y] {
                let aligned = engine.align_units(&project, &ids, axis);
                prop_assert_eq!(aligned.unit(&unit.id), Some(unit));
            }
            let snapped = engine.snap_units(&project);
            prop_assert_eq!(snapped.unit(&unit.id), Some(unit));
        }
    }

    #[test]
    fn collisions_are_symmetric_and_per_wall(project in project_strategy(20)) {
        let forward = detect_collisions(&project.units);
        let mut reversed_units = project.units.to_vec();
        reversed_units.reverse();
        let backward = detect_collisions(&reversed_units);

        let normalize = |pairs: &[(String, String)]| -> HashSet<(String, String)> {
            pairs
                .iter()
                .map(|(a, b)| if a < b { (a.clone(), b.clone()) } else { (b.clone(), a.clone()) })
                .collect()
        };
        prop_assert_eq!(normalize(&forward), normalize(&backward));

        for (a, b) in &forward {
            let (ua, ub) = (project.unit(a).unwrap(), project.unit(b).unwrap());
            prop_assert_eq!(ua.wall, ub.wall);
        }
    }

    #[test]
    fn delete_scrubs_every_reference(project in project_strategy(12), pick in any::<prop::sample::Index>()) {
        prop_assume!(!project.units.is_empty());
        let engine = LayoutEngine::default();
        let id = project.units[pick.index(project.units.len())].id.clone();
        let result = engine.delete_unit(&project, &id);

        prop_assert!(!result.has_unit(&id));
        prop_assert!(result.groups.iter().all(|g| !g.unit_ids.contains(&id)));
        prop_assert_eq!(result.units.len(), project.units.len() - 1);
        prop_assert_eq!(result.groups.len(), project.groups.len());
    }

    #[test]
    fn bom_counts_every_unit(project in project_strategy(30)) {
        let bom = generate_bom(&project);
        let counted: usize = bom.units.iter().map(|l| l.count).sum();
        prop_assert_eq!(counted, project.units.len());
        prop_assert_eq!(bom.totals.total_units, project.units.len());
    }

    #[test]
    fn history_never_exceeds_capacity(pushes in 0usize..120, capacity in 1usize..60) {
        let mut history = HistoryManager::new(capacity);
        let project = Project::empty("History", LayoutMode::L);
        for _ in 0..pushes {
            history.push(Snapshot::of(&project));
        }
        prop_assert_eq!(history.undo_depth(), pushes.min(capacity));
    }

    #[test]
    fn undo_all_restores_original(
        modules in prop::collection::vec((0..MODULES.len(), wall_strategy()), 1..10),
    ) {
        let mut planner = PlannerState::new(Project::new("Undo", LayoutMode::U));
        let original = planner.project().clone();
        for (module, wall) in &modules {
            planner.create_unit(MODULES[*module], *wall);
        }
        planner.snap_units();
        let edited = planner.project().clone();

        while planner.undo() {}
        prop_assert_eq!(&planner.project().units, &original.units);
        while planner.redo() {}
        prop_assert_eq!(&planner.project().units, &edited.units);
    }
}
