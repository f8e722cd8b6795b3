//! Example code for the `README.md` file.
//!
//! This contains the same code that appears in the `micro_time` package `README.md`.

fn main() {
    use micro_time::{Clock, Duration};

    // Start measuring immediately.
    let mut clock = Clock::new();

    // Simulate some work.
    std::thread::sleep(std::time::Duration::from_millis(10));

    let elapsed = clock.elapsed();
    println!("Work completed in {} us", elapsed.as_micros());

    // Re-baseline the stopwatch; the accumulated time is returned.
    let lap = clock.reset();
    println!("First lap: {} ms", lap.as_millis());

    // Durations carry a full arithmetic and comparison operator set.
    let budget = Duration::from_secs_f32(1.45) + Duration::from_millis(456);
    let per_item = budget / 100_i64;
    let used = lap % Duration::from_millis(1);

    println!("Budget: {} us", budget.as_micros());
    println!("Per item: {} us", per_item.as_micros());
    println!("Sub-millisecond part of the lap: {} us", used.as_micros());
    println!("Within budget: {}", lap < budget);
}
