//! Unit tests for lift-building.

#[cfg(test)]
mod helpers {
    use lift_core::{NewPassenger, Tick};

    use crate::{Building, BuildingBuilder};

    pub fn arrival(start: u32, dest: u32) -> NewPassenger {
        NewPassenger::new(start, dest, Tick::ZERO, 50)
    }

    pub fn patient(start: u32, dest: u32, max_wait: u64) -> NewPassenger {
        NewPassenger::new(start, dest, Tick::ZERO, max_wait)
    }

    /// 3 floors, 2 elevators at floor 0, `max_queue = 5`, capacity 3.
    pub fn small() -> Building {
        BuildingBuilder::new(3, 2).max_queue(5).capacity(3).build().unwrap()
    }
}

// ── Passenger ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod passenger {
    use lift_core::{Direction, PassengerId, Tick};

    use crate::{BuildingError, Passenger};

    fn rider(start: u32, dest: u32, max_wait: u64) -> Passenger {
        Passenger::new(PassengerId(0), Tick::ZERO, start, dest, max_wait).unwrap()
    }

    #[test]
    fn same_floor_rejected() {
        let err = Passenger::new(PassengerId(0), Tick::ZERO, 2, 2, 10).unwrap_err();
        assert_eq!(err, BuildingError::SameFloor { floor: 2 });
    }

    #[test]
    fn advance_outside_counts_wait() {
        let mut p = rider(0, 3, 10);
        p.advance(false);
        p.advance(false);
        assert_eq!(p.age_steps(), 2);
        assert_eq!(p.wait_steps(), 2);
    }

    #[test]
    fn advance_inside_only_ages() {
        let mut p = rider(0, 3, 10);
        p.advance(false);
        p.advance(true);
        p.advance(true);
        assert_eq!(p.age_steps(), 3);
        assert_eq!(p.wait_steps(), 1);
    }

    #[test]
    fn expiry_is_strictly_after_patience() {
        let mut p = rider(0, 3, 2);
        p.advance(false);
        p.advance(false);
        assert!(!p.has_expired(), "age == max_wait is still patient");
        p.advance(false);
        assert!(p.has_expired());
    }

    #[test]
    fn progress_toward_goal() {
        let p = rider(0, 6, 10);
        assert!(p.moved_toward_goal(3, 4));
        assert!(!p.moved_toward_goal(4, 3));
        assert!(!p.moved_toward_goal(4, 4), "standing still is never progress");
        let q = rider(0, 5, 10);
        assert!(q.moved_toward_goal(4, 5));
        assert!(!q.moved_toward_goal(5, 6));
    }

    #[test]
    fn direction_from_trip() {
        assert_eq!(rider(1, 4, 10).direction(), Direction::Up);
        assert_eq!(rider(4, 0, 10).direction(), Direction::Down);
    }

    #[test]
    fn clone_is_independent() {
        let original = rider(0, 2, 10);
        let mut copy = original.clone();
        copy.advance(false);
        assert_eq!(original.age_steps(), 0);
        assert_eq!(copy.age_steps(), 1);
    }
}

// ── Elevator ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod elevator {
    use lift_core::{PassengerId, Tick};

    use crate::{BuildingError, Elevator, Passenger};

    fn riders(dests: &[u32], start: u32) -> Vec<Passenger> {
        dests
            .iter()
            .enumerate()
            .map(|(i, &d)| Passenger::new(PassengerId(i as u64), Tick::ZERO, start, d, 50).unwrap())
            .collect()
    }

    #[test]
    fn start_floor_is_clamped() {
        let e = Elevator::new(9, 4, 2, 5);
        assert_eq!(e.floor(), 5);
        assert_eq!(e.start_floor(), 5);
        assert_eq!(Elevator::new(0, 4, 2, 5).floor(), 2);
    }

    #[test]
    fn move_clamps_at_bounds() {
        let mut e = Elevator::new(0, 4, 0, 2);
        e.move_by(-1);
        assert_eq!(e.floor(), 0);
        e.move_by(1);
        e.move_by(1);
        e.move_by(1);
        assert_eq!(e.floor(), 2);
        e.move_by(0);
        assert_eq!(e.floor(), 2);
    }

    #[test]
    fn load_returns_new_slice_and_tracks_destinations() {
        let mut e = Elevator::new(0, 4, 0, 9);
        let boarded = e.load(riders(&[3, 5], 0)).unwrap();
        assert_eq!(boarded.len(), 2);
        let boarded = e.load(riders(&[7], 0)).unwrap();
        assert_eq!(boarded[0].destination_floor(), 7);
        assert_eq!(e.occupancy(), 3);
        assert_eq!(e.available_capacity(), 1);
        assert!(e.has_destination(3) && e.has_destination(5) && e.has_destination(7));
        assert!(!e.has_destination(0));
    }

    #[test]
    fn overload_fails_without_boarding() {
        let mut e = Elevator::new(0, 2, 0, 9);
        e.load(riders(&[3], 0)).unwrap();
        let err = e.load(riders(&[4, 5], 0)).unwrap_err();
        assert_eq!(err, BuildingError::OverCapacity { requested: 2, available: 1, capacity: 2 });
        assert_eq!(e.occupancy(), 1);
        assert!(!e.has_destination(4));
    }

    #[test]
    fn unload_is_exact_and_keeps_order() {
        let mut e = Elevator::new(0, 6, 0, 9);
        e.load(riders(&[2, 3, 2, 4, 2], 0)).unwrap();
        e.move_by(1);
        e.move_by(1);
        let out = e.unload();
        let out_ids: Vec<u64> = out.iter().map(|p| p.id().0).collect();
        assert_eq!(out_ids, vec![0, 2, 4]);
        let kept: Vec<u64> = e.passengers().iter().map(|p| p.id().0).collect();
        assert_eq!(kept, vec![1, 3]);
        assert!(!e.has_destination(2));
    }

    #[test]
    fn unload_with_nobody_for_this_floor() {
        let mut e = Elevator::new(0, 4, 0, 9);
        assert!(e.unload().is_empty());
        e.load(riders(&[5], 0)).unwrap();
        assert!(e.unload().is_empty());
        assert_eq!(e.occupancy(), 1);
    }

    #[test]
    fn destination_flags_cover_building() {
        let mut e = Elevator::new(0, 4, 0, 3);
        e.load(riders(&[1, 3], 0)).unwrap();
        assert_eq!(e.destination_flags(5), vec![false, true, false, true, false]);
    }

    #[test]
    fn reset_empties_and_returns_home() {
        let mut e = Elevator::new(1, 4, 0, 5);
        e.load(riders(&[4], 1)).unwrap();
        e.move_by(1);
        e.reset();
        assert_eq!(e.floor(), 1);
        assert!(e.is_empty());
        assert!(e.destinations().is_empty());
    }
}

// ── Queues ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod queues {
    use lift_core::{Direction, PassengerId, Tick};

    use crate::{FloorQueues, Passenger};

    fn rider(id: u64, start: u32, dest: u32, max_wait: u64) -> Passenger {
        Passenger::new(PassengerId(id), Tick::ZERO, start, dest, max_wait).unwrap()
    }

    #[test]
    fn admission_respects_bound() {
        let mut q = FloorQueues::new(3, 2);
        assert!(q.try_admit(rider(0, 0, 2, 5)).is_ok());
        assert!(q.try_admit(rider(1, 0, 1, 5)).is_ok());
        let back = q.try_admit(rider(2, 0, 2, 5)).unwrap_err();
        assert_eq!(back.id(), PassengerId(2));
        assert_eq!(q.len(0, Direction::Up), 2);
        assert!(q.try_admit(rider(3, 0, 1, 5)).is_err());
        assert!(q.try_admit(rider(4, 2, 0, 5)).is_ok());
        assert_eq!(q.total_len(), 3);
    }

    #[test]
    fn zero_bound_rejects_everyone() {
        let mut q = FloorQueues::new(3, 0);
        assert!(q.try_admit(rider(0, 0, 2, 5)).is_err());
        assert_eq!(q.total_len(), 0);
    }

    #[test]
    fn take_front_is_fifo() {
        let mut q = FloorQueues::new(3, 10);
        for id in 0..4 {
            q.try_admit(rider(id, 0, 2, 5)).unwrap();
        }
        let taken: Vec<u64> = q.take_front(0, Direction::Up, 3).iter().map(|p| p.id().0).collect();
        assert_eq!(taken, vec![0, 1, 2]);
        assert_eq!(q.get(0, Direction::Up).unwrap()[0].id(), PassengerId(3));
        assert!(q.take_front(1, Direction::Down, 5).is_empty());
        assert!(q.take_front(99, Direction::Up, 5).is_empty());
    }

    #[test]
    fn expired_in_floor_then_direction_order() {
        let mut q = FloorQueues::new(3, 10);
        q.try_admit(rider(0, 1, 0, 0)).unwrap(); // floor 1 down
        q.try_admit(rider(1, 1, 2, 0)).unwrap(); // floor 1 up
        q.try_admit(rider(2, 0, 2, 9)).unwrap(); // patient
        q.try_admit(rider(3, 0, 1, 0)).unwrap(); // floor 0 up
        q.age_all();
        let gone: Vec<u64> = q.remove_expired().iter().map(|p| p.id().0).collect();
        assert_eq!(gone, vec![3, 1, 0]);
        assert_eq!(q.total_len(), 1);
        assert!(q.remove_expired().is_empty());
    }

    #[test]
    fn out_of_range_queries() {
        let q = FloorQueues::new(2, 4);
        assert!(q.get(5, Direction::Up).is_none());
        assert_eq!(q.len(5, Direction::Down), 0);
        assert!(!q.is_waiting(5, Direction::Down));
    }
}

// ── Builder / config ──────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use lift_core::{Direction, ElevatorId};

    use crate::{BuildingBuilder, BuildingConfig, BuildingError, Capacities, DEFAULT_MAX_QUEUE};

    #[test]
    fn defaults() {
        let b = BuildingBuilder::new(5, 2).capacity(4).build().unwrap();
        assert_eq!(b.num_floors(), 5);
        assert_eq!(b.num_elevators(), 2);
        assert_eq!(b.max_queue(), DEFAULT_MAX_QUEUE);
        for e in b.elevators() {
            assert_eq!(e.floor(), 0);
            assert_eq!(e.bounds(), (0, 4));
            assert_eq!(e.capacity(), 4);
        }
        assert_eq!(b.current_step().0, 0);
        assert_eq!(b.total_queued(), 0);
        assert_eq!(b.queue_len(0, Direction::Up), 0);
    }

    #[test]
    fn too_few_floors_or_elevators() {
        assert!(matches!(
            BuildingBuilder::new(1, 1).capacity(1).build(),
            Err(BuildingError::Config(_))
        ));
        assert!(matches!(
            BuildingBuilder::new(4, 0).capacity(1).build(),
            Err(BuildingError::Config(_))
        ));
    }

    #[test]
    fn capacity_is_required() {
        assert_eq!(
            BuildingBuilder::new(4, 1).build().unwrap_err(),
            BuildingError::MissingCapacity
        );
    }

    #[test]
    fn per_elevator_capacities() {
        let b = BuildingBuilder::new(4, 3).capacities(vec![2, 4, 6]).build().unwrap();
        let caps: Vec<usize> = b.elevators().iter().map(|e| e.capacity()).collect();
        assert_eq!(caps, vec![2, 4, 6]);
        assert_eq!(b.elevator(ElevatorId(2)).unwrap().capacity(), 6);
        assert!(b.elevator(ElevatorId(3)).is_none());
    }

    #[test]
    fn single_entry_list_is_uniform() {
        let b = BuildingBuilder::new(4, 3).capacities(vec![7]).build().unwrap();
        assert!(b.elevators().iter().all(|e| e.capacity() == 7));
    }

    #[test]
    fn list_length_mismatch() {
        let err = BuildingBuilder::new(4, 3).capacities(vec![1, 2]).build().unwrap_err();
        assert_eq!(
            err,
            BuildingError::ElevatorCountMismatch { expected: 3, got: 2, what: "elevator capacities" }
        );
        let err = BuildingBuilder::new(4, 2).capacity(1).start_floors(vec![0]).build().unwrap_err();
        assert!(matches!(err, BuildingError::ElevatorCountMismatch { what: "elevator start floors", .. }));
        let err = BuildingBuilder::new(4, 2).capacity(1).bounds(vec![(0, 3)]).build().unwrap_err();
        assert!(matches!(err, BuildingError::ElevatorCountMismatch { what: "elevator bounds", .. }));
    }

    #[test]
    fn bad_bounds() {
        let err = BuildingBuilder::new(4, 2)
            .capacity(1)
            .bounds(vec![(0, 3), (2, 1)])
            .build()
            .unwrap_err();
        assert_eq!(err, BuildingError::InvalidBounds { elevator: 1, min: 2, max: 1, num_floors: 4 });
        assert!(matches!(
            BuildingBuilder::new(4, 1).capacity(1).bounds(vec![(0, 4)]).build(),
            Err(BuildingError::InvalidBounds { .. })
        ));
    }

    #[test]
    fn start_floor_clamped_into_bounds() {
        let b = BuildingBuilder::new(10, 2)
            .capacity(5)
            .bounds(vec![(0, 4), (5, 9)])
            .start_floors(vec![7, 0])
            .build()
            .unwrap();
        assert_eq!(b.elevators()[0].floor(), 4);
        assert_eq!(b.elevators()[1].floor(), 5);
    }

    #[test]
    fn config_builds_same_as_builder() {
        let config = BuildingConfig {
            num_floors:            6,
            num_elevators:         2,
            max_queue:             3,
            elevator_capacities:   Some(Capacities::PerElevator(vec![4, 8])),
            elevator_start_floors: Some(vec![0, 5]),
            elevator_bounds:       None,
        };
        let b = config.build().unwrap();
        assert_eq!(b.max_queue(), 3);
        assert_eq!(b.elevators()[1].floor(), 5);
        assert_eq!(b.elevators()[1].capacity(), 8);

        let missing = BuildingConfig { elevator_capacities: None, ..config };
        assert_eq!(missing.build().unwrap_err(), BuildingError::MissingCapacity);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn config_from_json() {
        let json = r#"{ "num_floors": 10, "num_elevators": 2, "elevator_capacities": 10 }"#;
        let config: BuildingConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.max_queue, DEFAULT_MAX_QUEUE);
        assert_eq!(config.elevator_capacities, Some(Capacities::Uniform(10)));

        let json = r#"{ "num_floors": 4, "num_elevators": 2, "elevator_capacities": [3, 5],
                        "elevator_bounds": [[0, 3], [1, 3]] }"#;
        let config: BuildingConfig = serde_json::from_str(json).unwrap();
        let b = config.build().unwrap();
        assert_eq!(b.elevators()[1].bounds(), (1, 3));
        assert_eq!(b.elevators()[1].floor(), 1);
    }
}

// ── Step protocol ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod step {
    use lift_core::{ActionKind::*, Direction, PassengerId, Tick};

    use super::helpers::{arrival, patient, small};
    use crate::{BuildingBuilder, BuildingError, StepOutcome};

    #[test]
    fn scenario_a_queue_overflow_rejects() {
        let mut b = small();
        let mut arrivals = vec![arrival(0, 1)];
        arrivals.extend(std::iter::repeat(arrival(0, 2)).take(6));
        b.execute_step(&arrivals, &[Wait, Wait]).unwrap();

        assert_eq!(b.queue_len(0, Direction::Up), 5);
        assert_eq!(b.rejected().len(), 2);
        let rejected_ids: Vec<u64> = b.rejected().iter().map(|p| p.id().0).collect();
        assert_eq!(rejected_ids, vec![5, 6], "rejected arrivals still receive ids");
        assert_eq!(b.outcome().rejected, 2);
        assert_eq!(b.outcome().queued, 5);
    }

    #[test]
    fn scenario_b_and_c_load_ride_unload() {
        let mut b = small();
        b.execute_step(&vec![arrival(0, 2); 4], &[Wait, Wait]).unwrap();

        // B: the fourth passenger does not fit and keeps their place.
        b.execute_step(&[], &[LoadUp, Wait]).unwrap();
        assert_eq!(b.elevators()[0].occupancy(), 3);
        assert_eq!(b.queue_len(0, Direction::Up), 1);
        assert_eq!(b.queue(0, Direction::Up).unwrap()[0].id(), PassengerId(3));

        // C: two floors up, then everyone bound for floor 2 leaves.
        b.execute_step(&[], &[MoveUp, Wait]).unwrap();
        assert_eq!(b.correct_moves(), 3);
        b.execute_step(&[], &[MoveUp, Wait]).unwrap();
        b.execute_step(&[], &[Unload, Wait]).unwrap();
        assert_eq!(b.deboarded().len(), 3);
        assert!(b.deboarded().iter().all(|p| p.destination_floor() == 2));
        assert_eq!(b.elevators()[0].occupancy(), 0);
        assert_eq!(b.outcome().deboarded, 3);
        assert_eq!(b.current_step(), Tick(5));
    }

    #[test]
    fn scenario_d_direction_counts() {
        let mut b = BuildingBuilder::new(8, 1).capacity(4).start_floors(vec![3]).build().unwrap();
        b.execute_step(&[arrival(3, 6), arrival(3, 1)], &[LoadUp]).unwrap();
        b.execute_step(&[], &[LoadDown]).unwrap();
        assert_eq!(b.elevators()[0].occupancy(), 2);

        b.execute_step(&[], &[MoveUp]).unwrap();
        assert_eq!(b.elevators()[0].floor(), 4);
        assert_eq!((b.correct_moves(), b.incorrect_moves()), (1, 1));
    }

    #[test]
    fn lower_index_drains_shared_queue_first() {
        let mut b = small();
        b.execute_step(&vec![arrival(0, 2); 4], &[LoadUp, LoadUp]).unwrap();
        let first: Vec<u64> = b.elevators()[0].passengers().iter().map(|p| p.id().0).collect();
        let second: Vec<u64> = b.elevators()[1].passengers().iter().map(|p| p.id().0).collect();
        assert_eq!(first, vec![0, 1, 2]);
        assert_eq!(second, vec![3]);
        assert_eq!(b.total_queued(), 0);
        assert_eq!(b.total_in_transit(), 4);
    }

    #[test]
    fn each_action_has_its_own_effect() {
        let mut b = BuildingBuilder::new(5, 1).capacity(4).start_floors(vec![3]).build().unwrap();
        b.execute_step(&[arrival(3, 4), arrival(3, 1)], &[LoadDown]).unwrap();
        let aboard: Vec<u32> =
            b.elevators()[0].passengers().iter().map(|p| p.destination_floor()).collect();
        assert_eq!(aboard, vec![1]);
        assert_eq!(b.queue_len(3, Direction::Up), 1);

        b.execute_step(&[], &[MoveDown]).unwrap();
        assert_eq!(b.elevators()[0].floor(), 2);
        assert_eq!((b.correct_moves(), b.incorrect_moves()), (1, 0));

        b.execute_step(&[], &[Wait]).unwrap();
        assert_eq!(b.elevators()[0].floor(), 2);
        assert_eq!((b.correct_moves(), b.incorrect_moves()), (0, 0));

        b.execute_step(&[], &[MoveDown]).unwrap();
        b.execute_step(&[], &[Unload]).unwrap();
        assert_eq!(b.deboarded().len(), 1);
        assert_eq!(b.elevators()[0].occupancy(), 0);
    }

    #[test]
    fn load_wrong_direction_or_empty_queue_is_noop() {
        let mut b = small();
        b.execute_step(&[arrival(0, 2)], &[LoadDown, Wait]).unwrap();
        assert_eq!(b.elevators()[0].occupancy(), 0);
        assert_eq!(b.queue_len(0, Direction::Up), 1);
        b.execute_step(&[], &[Wait, Unload]).unwrap();
        assert!(b.deboarded().is_empty());
    }

    #[test]
    fn move_past_bound_is_clamped_and_scored() {
        let mut b = small();
        b.execute_step(&[arrival(0, 2)], &[LoadUp, MoveDown]).unwrap();
        assert_eq!(b.elevators()[1].floor(), 0);
        assert_eq!(b.incorrect_moves(), 0, "an empty car scores nothing");

        b.execute_step(&[], &[MoveDown, Wait]).unwrap();
        assert_eq!(b.elevators()[0].floor(), 0);
        assert_eq!((b.correct_moves(), b.incorrect_moves()), (0, 1));
    }

    #[test]
    fn aging_rules() {
        let mut b = small();
        b.execute_step(&[arrival(0, 2)], &[Wait, Wait]).unwrap();
        let queued = &b.queue(0, Direction::Up).unwrap()[0];
        assert_eq!((queued.age_steps(), queued.wait_steps()), (1, 1));

        b.execute_step(&[], &[LoadUp, Wait]).unwrap();
        let rider = &b.elevators()[0].passengers()[0];
        assert_eq!((rider.age_steps(), rider.wait_steps()), (2, 1));

        b.execute_step(&[], &[Wait, Wait]).unwrap();
        let rider = &b.elevators()[0].passengers()[0];
        assert_eq!((rider.age_steps(), rider.wait_steps()), (3, 1));
    }

    #[test]
    fn expiry_counted_exactly_once() {
        let mut b = small();
        b.execute_step(&[patient(1, 0, 1)], &[Wait, Wait]).unwrap();
        b.execute_step(&[], &[Wait, Wait]).unwrap();
        assert!(b.expired().is_empty(), "age 1 does not exceed patience 1");
        b.execute_step(&[], &[Wait, Wait]).unwrap();
        assert_eq!(b.expired().len(), 1);
        assert_eq!(b.expired()[0].wait_steps(), 2);
        assert_eq!(b.total_queued(), 0);
        b.execute_step(&[], &[Wait, Wait]).unwrap();
        assert!(b.expired().is_empty());
    }

    #[test]
    fn expiry_runs_before_intake() {
        let mut b = BuildingBuilder::new(3, 1).max_queue(1).capacity(2).build().unwrap();
        b.execute_step(&[patient(0, 2, 0)], &[Wait]).unwrap();
        // The impatient passenger leaves first, so the newcomer fits.
        b.execute_step(&[arrival(0, 1)], &[Wait]).unwrap();
        assert_eq!(b.expired().len(), 1);
        assert!(b.rejected().is_empty());
        assert_eq!(b.queue_len(0, Direction::Up), 1);
    }

    #[test]
    fn boarded_passengers_never_expire() {
        let mut b = small();
        b.execute_step(&[patient(0, 2, 0)], &[LoadUp, Wait]).unwrap();
        for _ in 0..5 {
            b.execute_step(&[], &[Wait, Wait]).unwrap();
            assert!(b.expired().is_empty());
        }
        assert_eq!(b.total_in_transit(), 1);
    }

    #[test]
    fn wrong_action_count_mutates_nothing() {
        let mut b = small();
        b.execute_step(&[arrival(0, 2)], &[Wait, Wait]).unwrap();
        let err = b.execute_step(&[arrival(0, 1)], &[LoadUp]).unwrap_err();
        assert_eq!(err, BuildingError::ActionCountMismatch { expected: 2, got: 1 });
        assert_eq!(b.current_step(), Tick(1));
        assert_eq!(b.total_queued(), 1);
        assert_eq!(b.queue(0, Direction::Up).unwrap()[0].age_steps(), 1);
    }

    #[test]
    fn bad_arrivals_mutate_nothing() {
        let mut b = small();
        let err = b.execute_step(&[arrival(0, 2), arrival(1, 1)], &[Wait, Wait]).unwrap_err();
        assert_eq!(err, BuildingError::SameFloor { floor: 1 });
        let err = b.execute_step(&[arrival(0, 2), arrival(0, 3)], &[Wait, Wait]).unwrap_err();
        assert_eq!(err, BuildingError::FloorOutOfRange { floor: 3, num_floors: 3 });
        assert_eq!(b.total_queued(), 0);
        assert_eq!(b.current_step(), Tick::ZERO);

        // The next valid step assigns the first id.
        b.execute_step(&[arrival(0, 2)], &[Wait, Wait]).unwrap();
        assert_eq!(b.queue(0, Direction::Up).unwrap()[0].id(), PassengerId(0));
    }

    #[test]
    fn per_step_outputs_are_cleared() {
        let mut b = small();
        let arrivals = vec![arrival(0, 1); 6];
        b.execute_step(&arrivals, &[Wait, Wait]).unwrap();
        assert_eq!(b.rejected().len(), 1);
        b.execute_step(&[], &[Wait, Wait]).unwrap();
        assert!(b.rejected().is_empty());
        assert_eq!(
            b.outcome(),
            StepOutcome { queued: 5, ..StepOutcome::default() }
        );
    }

    #[test]
    fn buttons_and_observation() {
        let mut b = small();
        b.execute_step(&[arrival(0, 2), arrival(2, 1), arrival(1, 2)], &[LoadUp, Wait]).unwrap();
        assert_eq!(b.hall_buttons(), vec![[false, false], [true, false], [false, true]]);
        assert_eq!(
            b.destination_buttons(),
            vec![vec![false, false, true], vec![false, false, false]]
        );

        let obs = b.observe();
        assert_eq!(obs.elevator_floors, vec![0, 0]);
        let flat = obs.flatten();
        assert_eq!(flat.len(), crate::Observation::flat_len(3, 2));
        assert_eq!(
            flat,
            vec![0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0]
        );
    }

    #[test]
    fn clone_is_independent() {
        let mut b = small();
        b.execute_step(&[arrival(0, 2), arrival(0, 1)], &[Wait, Wait]).unwrap();
        let snapshot = b.clone();

        b.execute_step(&[], &[LoadUp, Wait]).unwrap();
        b.execute_step(&[], &[MoveUp, Wait]).unwrap();

        assert_eq!(snapshot.total_queued(), 2);
        assert_eq!(snapshot.elevators()[0].occupancy(), 0);
        assert_eq!(snapshot.queue(0, Direction::Up).unwrap()[0].age_steps(), 1);
        assert_eq!(snapshot.current_step(), Tick(1));
        assert_eq!(b.elevators()[0].floor(), 1);
    }

    #[test]
    fn reset_restores_fresh_episode() {
        let mut b = BuildingBuilder::new(4, 1).capacity(2).start_floors(vec![2]).build().unwrap();
        b.execute_step(&[arrival(2, 3), arrival(2, 3), arrival(0, 1)], &[LoadUp]).unwrap();
        b.execute_step(&[], &[MoveUp]).unwrap();
        b.reset();

        assert_eq!(b.current_step(), Tick::ZERO);
        assert_eq!(b.elevators()[0].floor(), 2);
        assert_eq!(b.total_in_transit(), 0);
        assert_eq!(b.total_queued(), 0);
        assert_eq!(b.outcome(), StepOutcome::default());

        b.execute_step(&[arrival(0, 1)], &[Wait]).unwrap();
        assert_eq!(b.queue(0, Direction::Up).unwrap()[0].id(), PassengerId(0));
    }
}

// ── Outcome ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod outcome {
    use crate::StepOutcome;

    #[test]
    fn components_follow_keys() {
        let o = StepOutcome { deboarded: 1, rejected: 2, expired: 3, correct_moves: 4, incorrect_moves: 5, queued: 6, in_transit: 7 };
        let comps = o.components();
        for (i, (key, value)) in comps.iter().enumerate() {
            assert_eq!(*key, StepOutcome::KEYS[i]);
            assert_eq!(*value, i + 1);
        }
    }

    #[test]
    fn accumulate_sums_every_field() {
        let mut total = StepOutcome::default();
        let step = StepOutcome { deboarded: 2, queued: 3, in_transit: 1, ..StepOutcome::default() };
        total.accumulate(&step);
        total.accumulate(&step);
        assert_eq!(total.deboarded, 4);
        assert_eq!(total.queued, 6);
        assert_eq!(total.in_transit, 2);
        assert_eq!(total.rejected, 0);
    }
}

// ── Properties ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod properties {
    use proptest::prelude::*;
    use rustc_hash::FxHashSet;

    use lift_core::{ActionKind, NewPassenger, Tick};

    use crate::BuildingBuilder;

    const FLOORS: u32 = 5;
    const ELEVATORS: usize = 2;

    fn step_input() -> impl Strategy<Value = (Vec<(u32, u32, u64)>, Vec<u8>)> {
        (
            prop::collection::vec((0..FLOORS, 1..FLOORS, 0u64..6), 0..5),
            prop::collection::vec(0u8..6, ELEVATORS),
        )
    }

    proptest! {
        #[test]
        fn invariants_hold_and_passengers_are_conserved(
            max_queue in 0usize..4,
            capacity in 1usize..4,
            steps in prop::collection::vec(step_input(), 1..40),
        ) {
            let mut b = BuildingBuilder::new(FLOORS, ELEVATORS)
                .max_queue(max_queue)
                .capacity(capacity)
                .bounds(vec![(0, FLOORS - 1), (1, 3)])
                .build()
                .unwrap();

            let mut arrived = 0usize;
            let mut gone = 0usize;
            for (tick, (raw_arrivals, raw_actions)) in steps.into_iter().enumerate() {
                let arrivals: Vec<NewPassenger> = raw_arrivals
                    .iter()
                    .map(|&(start, offset, patience)| {
                        NewPassenger::new(start, (start + offset) % FLOORS, Tick(tick as u64), patience)
                    })
                    .collect();
                let actions: Vec<ActionKind> = raw_actions
                    .iter()
                    .map(|&o| ActionKind::from_ordinal(o).unwrap())
                    .collect();
                b.execute_step(&arrivals, &actions).unwrap();

                arrived += arrivals.len();
                gone += b.deboarded().len() + b.rejected().len() + b.expired().len();
                prop_assert_eq!(arrived, gone + b.total_queued() + b.total_in_transit());

                for floor in 0..FLOORS {
                    for dir in [lift_core::Direction::Up, lift_core::Direction::Down] {
                        prop_assert!(b.queue_len(floor, dir) <= max_queue);
                    }
                }
                for e in b.elevators() {
                    prop_assert!(e.occupancy() <= e.capacity());
                    prop_assert!(e.min_floor() <= e.floor() && e.floor() <= e.max_floor());
                    let riding: FxHashSet<u32> =
                        e.passengers().iter().map(|p| p.destination_floor()).collect();
                    prop_assert_eq!(e.destinations(), &riding);
                }
            }
        }
    }
}
