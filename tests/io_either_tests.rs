//! Integration tests for IOEither.
//!
//! Covers deferral, re-execution, and fail-fast sequencing, using external
//! counters to observe when side effects actually happen.

use io_either::eff;
use io_either::effect::{Failure, IO, IOEither};
use rstest::{fixture, rstest};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

#[fixture]
fn counter() -> Arc<AtomicUsize> {
    Arc::new(AtomicUsize::new(0))
}

fn counted_step(counter: &Arc<AtomicUsize>, outcome: Result<i32, Failure>) -> IOEither<i32> {
    let counter = counter.clone();
    IOEither::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        outcome.clone()
    })
}

fn maybe_int_pure(value: i32) -> IOEither<i32> {
    IOEither::new(move || Ok(value))
}

// =============================================================================
// Deferral
// =============================================================================

mod deferral {
    use super::*;

    #[rstest]
    fn construction_does_not_run_effect(counter: Arc<AtomicUsize>) {
        let _computation = counted_step(&counter, Ok(1));
        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }

    #[rstest]
    fn composition_does_not_run_effect(counter: Arc<AtomicUsize>) {
        let step = counter.clone();
        let _computation = counted_step(&counter, Ok(1))
            .flat_map(move |x| counted_step(&step, Ok(x + 1)))
            .fmap(|x| x * 2)
            .map_error(|failure| failure);
        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }

    #[rstest]
    fn run_executes_effect_once(counter: Arc<AtomicUsize>) {
        let computation = counted_step(&counter, Ok(1));
        assert_eq!(computation.run(), Ok(1));
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[rstest]
    fn running_twice_runs_effect_twice(counter: Arc<AtomicUsize>) {
        let computation = counted_step(&counter, Ok(1));
        assert_eq!(computation.run(), Ok(1));
        assert_eq!(computation.run(), Ok(1));
        assert_eq!(counter.load(Ordering::SeqCst), 2);
    }

    #[rstest]
    fn clones_share_the_description_not_the_result(counter: Arc<AtomicUsize>) {
        let computation = counted_step(&counter, Ok(1));
        let cloned = computation.clone();
        computation.run().unwrap();
        cloned.run().unwrap();
        assert_eq!(counter.load(Ordering::SeqCst), 2);
    }
}

// =============================================================================
// Sequencing
// =============================================================================

mod sequencing {
    use super::*;

    #[rstest]
    fn run_of_construct_equals_thunk() {
        let thunk = || Ok::<_, Failure>(6 * 7);
        assert_eq!(IOEither::new(thunk).run(), thunk());
    }

    #[rstest]
    fn three_successful_steps_yield_last_value() {
        let computation = maybe_int_pure(1)
            .flat_map(|x| maybe_int_pure(x + 1))
            .flat_map(|y| maybe_int_pure(y + 1));
        assert_eq!(computation.run(), Ok(3));
    }

    #[rstest]
    fn three_successful_steps_can_be_tupled() {
        let computation = maybe_int_pure(1).flat_map(|x| {
            maybe_int_pure(x + 1)
                .flat_map(move |y| maybe_int_pure(y + 1).fmap(move |z| (x, y, z)))
        });
        assert_eq!(computation.run(), Ok((1, 2, 3)));
    }

    #[rstest]
    fn failure_in_step_two_skips_step_three(counter: Arc<AtomicUsize>) {
        let second = counter.clone();
        let third = counter.clone();
        let computation = counted_step(&counter, Ok(1))
            .flat_map(move |_| counted_step(&second, Err(Failure::new("step 2 failed"))))
            .flat_map(move |y| counted_step(&third, Ok(y + 1)));

        assert_eq!(computation.run(), Err(Failure::new("step 2 failed")));
        assert_eq!(counter.load(Ordering::SeqCst), 2);
    }

    #[rstest]
    fn failure_in_step_one_skips_everything_after(counter: Arc<AtomicUsize>) {
        let later = counter.clone();
        let computation = counted_step(&counter, Err(Failure::new("first")))
            .flat_map(move |x| counted_step(&later, Ok(x)))
            .fmap(|x| x + 100);

        assert_eq!(computation.run(), Err(Failure::new("first")));
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[rstest]
    fn each_run_of_failing_chain_reexecutes_up_to_failure(counter: Arc<AtomicUsize>) {
        let second = counter.clone();
        let computation = counted_step(&counter, Ok(1))
            .flat_map(move |_| counted_step(&second, Err(Failure::new("nope"))));

        assert!(computation.run().is_err());
        assert!(computation.run().is_err());
        assert_eq!(counter.load(Ordering::SeqCst), 4);
    }

    #[rstest]
    fn eff_macro_chains_dependent_steps() {
        let computation = eff! {
            x <= maybe_int_pure(1);
            y <= maybe_int_pure(x + 1);
            z <= maybe_int_pure(y + 1);
            yield format!("x={x} y={y} z={z}")
        };
        assert_eq!(computation.run(), Ok("x=1 y=2 z=3".to_string()));
    }
}

// =============================================================================
// Error handling
// =============================================================================

mod error_handling {
    use super::*;

    #[rstest]
    fn custom_error_payload_propagates_untouched() {
        #[derive(Debug, Clone, PartialEq)]
        enum Lookup {
            Missing(&'static str),
        }

        let computation: IOEither<i32, Lookup> = IOEither::pure(1)
            .flat_map(|_| IOEither::throw(Lookup::Missing("user")))
            .flat_map(|x: i32| IOEither::pure(x * 2));
        assert_eq!(computation.run(), Err(Lookup::Missing("user")));
    }

    #[rstest]
    fn catch_recovers_and_continues(counter: Arc<AtomicUsize>) {
        let recovery = counter.clone();
        let computation = IOEither::catch(counted_step(&counter, Err(Failure::new("x"))), move |_| {
            counted_step(&recovery, Ok(0))
        })
        .fmap(|x| x + 1);

        assert_eq!(computation.run(), Ok(1));
        assert_eq!(counter.load(Ordering::SeqCst), 2);
    }

    #[rstest]
    fn ensure_rejects_value() {
        let computation = IOEither::ensure(
            maybe_int_pure(-3),
            || Failure::new("must be positive"),
            |value| *value > 0,
        );
        assert_eq!(computation.run(), Err(Failure::new("must be positive")));
    }

    #[rstest]
    fn attempt_turns_panic_into_failure() {
        let computation: IOEither<i32> = IOEither::attempt(|| {
            let values: Vec<i32> = Vec::new();
            values.first().copied().unwrap_or_else(|| panic!("empty input"))
        });
        assert_eq!(computation.run(), Err(Failure::new("empty input")));
    }

    #[rstest]
    fn fold_branches_on_outcome() {
        let describe = |computation: IOEither<i32>| {
            computation
                .fold(|failure| format!("failure: {failure}"), |value| format!("success: {value}"))
                .run_unsafe()
        };
        assert_eq!(describe(maybe_int_pure(3)), "success: 3");
        assert_eq!(describe(IOEither::throw(Failure::new("bad"))), "failure: bad");
    }
}

// =============================================================================
// Collections and lifting
// =============================================================================

mod collections {
    use super::*;

    #[rstest]
    fn traverse_collects_all_successes() {
        let computation = IOEither::traverse(vec![1, 2, 3], maybe_int_pure);
        assert_eq!(computation.run(), Ok(vec![1, 2, 3]));
    }

    #[rstest]
    fn traverse_stops_at_first_failure(counter: Arc<AtomicUsize>) {
        let step = counter.clone();
        let computation = IOEither::traverse(vec![1, -2, 3, -4], move |n| {
            if n > 0 {
                counted_step(&step, Ok(n))
            } else {
                counted_step(&step, Err(Failure::new(format!("{n} is negative"))))
            }
        });

        assert_eq!(computation.run(), Err(Failure::new("-2 is negative")));
        assert_eq!(counter.load(Ordering::SeqCst), 2);
    }

    #[rstest]
    fn lift_io_runs_io_on_every_run(counter: Arc<AtomicUsize>) {
        let effect = counter.clone();
        let io = IO::new(move || effect.fetch_add(1, Ordering::SeqCst));
        let computation: IOEither<usize> = IOEither::lift_io(io);

        assert_eq!(computation.run(), Ok(0));
        assert_eq!(computation.run(), Ok(1));
    }
}
