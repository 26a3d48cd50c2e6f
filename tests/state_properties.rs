//! Property tests for the inventory and vitality contracts

use meeble_crossing::combat::weapons::WeaponKind;
use meeble_crossing::entity::inventory::Inventory;
use meeble_crossing::entity::vitality::VitalityPool;
use proptest::prelude::*;

#[derive(Debug, Clone, Copy)]
enum InventoryOp {
    Acquire(WeaponKind),
    Cycle,
}

fn inventory_op() -> impl Strategy<Value = InventoryOp> {
    prop_oneof![
        prop::sample::select(WeaponKind::ALL.to_vec()).prop_map(InventoryOp::Acquire),
        Just(InventoryOp::Cycle),
    ]
}

proptest! {
    /// The equip cursor is None exactly while the inventory is empty,
    /// and otherwise always a valid index
    #[test]
    fn equip_cursor_always_in_range(ops in prop::collection::vec(inventory_op(), 0..64)) {
        let mut inventory = Inventory::new();
        for op in ops {
            match op {
                InventoryOp::Acquire(kind) => inventory.acquire(kind),
                InventoryOp::Cycle => inventory.cycle_equip(),
            }
            match inventory.equipped_index() {
                None => prop_assert!(inventory.is_empty()),
                Some(index) => prop_assert!(index < inventory.len()),
            }
        }
    }

    /// Cycling `len` times is the identity
    #[test]
    fn cycle_full_loop_is_identity(
        kinds in prop::collection::vec(prop::sample::select(WeaponKind::ALL.to_vec()), 1..16),
        pre_cycles in 0usize..8,
    ) {
        let mut inventory = Inventory::new();
        for kind in kinds {
            inventory.acquire(kind);
        }
        for _ in 0..pre_cycles {
            inventory.cycle_equip();
        }

        let start = inventory.equipped_index();
        for _ in 0..inventory.len() {
            inventory.cycle_equip();
        }
        prop_assert_eq!(inventory.equipped_index(), start);
    }

    /// Damage never increases health and never drives it below zero
    #[test]
    fn damage_is_monotone_and_bounded(
        max in 1.0f32..500.0,
        hits in prop::collection::vec(0.0f32..100.0, 0..32),
    ) {
        let mut pool = VitalityPool::full(max);
        let mut previous = pool.value();
        for hit in hits {
            pool.apply_damage(hit);
            prop_assert!(pool.value() <= previous);
            prop_assert!(pool.value() >= 0.0);
            prop_assert!(pool.value() <= pool.max());
            previous = pool.value();
        }
    }

    /// The terminal edge fires at most once over any damage sequence
    #[test]
    fn destroy_edge_fires_at_most_once(
        hits in prop::collection::vec(0.0f32..60.0, 1..64),
    ) {
        let mut pool = VitalityPool::full(100.0);
        let mut edges = 0;
        for hit in hits {
            if pool.apply_damage(hit) {
                edges += 1;
            }
        }
        prop_assert!(edges <= 1);
        if edges == 1 {
            prop_assert!(pool.is_empty());
        }
    }
}
