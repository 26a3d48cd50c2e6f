//! Scheduled task facility
//!
//! Replaces the engine's ad-hoc delayed/looped timer callbacks with an
//! explicit queue driven by the session clock. Each task carries a due
//! time, an optional period, an optional target entity, and a kind the
//! tick dispatcher interprets as an idempotent action. Tasks whose
//! target has been destroyed are dropped at dispatch without effect.

use crate::core::types::{EntityId, TimeMs};

/// What a fired task does; execution lives in the tick dispatcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    /// Remove a projectile whose flight time expired
    DespawnProjectile,
    /// Apply one contact drain hit to the player for an overlapping enemy
    ContactDrain,
    /// Drop a random weapon pickup somewhere in the level
    SpawnPickup,
}

#[derive(Debug, Clone)]
pub struct ScheduledTask {
    pub due_at: TimeMs,
    /// Periodic tasks are re-armed on fire; one-shot tasks are removed
    pub period_ms: Option<TimeMs>,
    pub target: Option<EntityId>,
    pub kind: TaskKind,
}

/// Single-threaded task queue, drained at the start of each tick
#[derive(Debug, Default)]
pub struct Scheduler {
    tasks: Vec<ScheduledTask>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a one-shot task
    pub fn schedule_once(&mut self, due_at: TimeMs, target: Option<EntityId>, kind: TaskKind) {
        self.tasks.push(ScheduledTask {
            due_at,
            period_ms: None,
            target,
            kind,
        });
    }

    /// Schedule a recurring task
    pub fn schedule_every(
        &mut self,
        first_due: TimeMs,
        period_ms: TimeMs,
        target: Option<EntityId>,
        kind: TaskKind,
    ) {
        self.tasks.push(ScheduledTask {
            due_at: first_due,
            period_ms: Some(period_ms),
            target,
            kind,
        });
    }

    /// Is a task of this kind pending for this target?
    ///
    /// Guards against arming a second contact drain schedule for the
    /// same enemy.
    pub fn has_task(&self, target: EntityId, kind: TaskKind) -> bool {
        self.tasks
            .iter()
            .any(|t| t.target == Some(target) && t.kind == kind)
    }

    /// Cancel pending tasks of one kind for a target
    pub fn cancel(&mut self, target: EntityId, kind: TaskKind) {
        self.tasks
            .retain(|t| !(t.target == Some(target) && t.kind == kind));
    }

    /// Cancel every pending task for a target (entity destruction)
    pub fn cancel_for_target(&mut self, target: EntityId) {
        self.tasks.retain(|t| t.target != Some(target));
    }

    /// Remove and return tasks due at or before `now`, in schedule order
    ///
    /// Periodic tasks are re-armed one period ahead; the dispatcher
    /// cancels them when their condition no longer holds.
    pub fn take_due(&mut self, now: TimeMs) -> Vec<ScheduledTask> {
        let mut due = Vec::new();
        let mut rest = Vec::with_capacity(self.tasks.len());
        for mut task in self.tasks.drain(..) {
            if task.due_at <= now {
                due.push(task.clone());
                if let Some(period) = task.period_ms {
                    task.due_at += period;
                    rest.push(task);
                }
            } else {
                rest.push(task);
            }
        }
        self.tasks = rest;
        due
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_shot_fires_once() {
        let mut scheduler = Scheduler::new();
        let id = EntityId::new();
        scheduler.schedule_once(100, Some(id), TaskKind::DespawnProjectile);

        assert!(scheduler.take_due(50).is_empty());
        let due = scheduler.take_due(100);
        assert_eq!(due.len(), 1);
        assert!(scheduler.is_empty());
    }

    #[test]
    fn test_periodic_rearms() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule_every(100, 100, None, TaskKind::SpawnPickup);

        assert_eq!(scheduler.take_due(100).len(), 1);
        assert_eq!(scheduler.len(), 1);
        assert!(scheduler.take_due(150).is_empty());
        assert_eq!(scheduler.take_due(200).len(), 1);
    }

    #[test]
    fn test_has_task_guards_duplicates() {
        let mut scheduler = Scheduler::new();
        let enemy = EntityId::new();
        assert!(!scheduler.has_task(enemy, TaskKind::ContactDrain));
        scheduler.schedule_every(100, 100, Some(enemy), TaskKind::ContactDrain);
        assert!(scheduler.has_task(enemy, TaskKind::ContactDrain));
        assert!(!scheduler.has_task(enemy, TaskKind::DespawnProjectile));
    }

    #[test]
    fn test_cancel_by_kind() {
        let mut scheduler = Scheduler::new();
        let enemy = EntityId::new();
        scheduler.schedule_every(100, 100, Some(enemy), TaskKind::ContactDrain);
        scheduler.cancel(enemy, TaskKind::ContactDrain);
        assert!(scheduler.is_empty());
        assert!(scheduler.take_due(1000).is_empty());
    }

    #[test]
    fn test_cancel_for_target_clears_all_kinds() {
        let mut scheduler = Scheduler::new();
        let id = EntityId::new();
        let other = EntityId::new();
        scheduler.schedule_once(100, Some(id), TaskKind::DespawnProjectile);
        scheduler.schedule_every(100, 100, Some(id), TaskKind::ContactDrain);
        scheduler.schedule_once(100, Some(other), TaskKind::DespawnProjectile);

        scheduler.cancel_for_target(id);
        assert_eq!(scheduler.len(), 1);
        assert!(scheduler.has_task(other, TaskKind::DespawnProjectile));
    }
}
