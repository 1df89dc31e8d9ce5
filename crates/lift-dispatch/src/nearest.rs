//! A simple collective-control heuristic.

use lift_core::{ActionKind, Direction, ElevatorId, Floor, SimRng};

use crate::{DispatchContext, DispatchPolicy};

/// Serve the car's own riders first, then the closest lit hall button.
///
/// Per elevator, in priority order:
///
/// 1. Unload if anyone aboard is bound for this floor.
/// 2. Load from this floor's queue if there is room and the car can travel
///    that way.  A car with riders only loads in its riders' direction; an
///    empty car prefers the up queue.
/// 3. Move toward the nearest rider destination within the car's bounds.
/// 4. Move toward the nearest lit hall button the car can serve.
/// 5. Wait.
///
/// Cars do not coordinate, so two idle cars may chase the same call.  Only
/// the limited observation and the car's own occupants are consulted.
pub struct NearestCallPolicy;

impl DispatchPolicy for NearestCallPolicy {
    fn choose(&self, elevator: ElevatorId, ctx: &DispatchContext<'_>, _rng: &mut SimRng) -> ActionKind {
        let Some(car) = ctx.building.elevator(elevator) else {
            return ActionKind::Wait;
        };
        let floor = car.floor();
        let (lo, hi) = car.bounds();
        let hall = &ctx.observation.hall_buttons;
        let waiting = |f: Floor, d: Direction| hall.get(f as usize).is_some_and(|b| b[d.index()]);
        // A call at `f` is servable only if the car can leave `f` that way.
        let servable = |f: Floor, d: Direction| {
            waiting(f, d)
                && match d {
                    Direction::Up => f < hi,
                    Direction::Down => f > lo,
                }
        };

        if car.has_destination(floor) {
            return ActionKind::Unload;
        }

        // Riders' direction: the first rider's trip from here.
        let heading = car
            .passengers()
            .first()
            .map(|p| Direction::of_trip(floor, p.destination_floor()));

        if car.available_capacity() > 0 {
            let load = match heading {
                Some(d) => servable(floor, d).then_some(d),
                None if servable(floor, Direction::Up) => Some(Direction::Up),
                None if servable(floor, Direction::Down) => Some(Direction::Down),
                None => None,
            };
            match load {
                Some(Direction::Up) => return ActionKind::LoadUp,
                Some(Direction::Down) => return ActionKind::LoadDown,
                None => {}
            }
        }

        let reachable = |f: &Floor| (lo..=hi).contains(f);
        let target = nearest(floor, car.destinations().iter().copied().filter(reachable)).or_else(|| {
            nearest(
                floor,
                (lo..=hi).filter(|&f| servable(f, Direction::Up) || servable(f, Direction::Down)),
            )
        });

        match target {
            Some(t) if t > floor => ActionKind::MoveUp,
            Some(t) if t < floor => ActionKind::MoveDown,
            _ => ActionKind::Wait,
        }
    }
}

/// Closest candidate to `floor`; ties go to the lower floor.
fn nearest(floor: Floor, candidates: impl Iterator<Item = Floor>) -> Option<Floor> {
    candidates.min_by_key(|&f| (f.abs_diff(floor), f))
}
