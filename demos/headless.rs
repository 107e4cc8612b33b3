//! Drives the meter without a window: builds a config with the builder,
//! steps the animation at fixed times, and prints the draw calls recorded
//! for each frame.

use balance_meter::{BalanceMeter, MeterConfig, SceneRecorder};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = MeterConfig::builder()
        .max_value(3000.0)
        .currency_symbol("₵".to_string())
        .stroke_width(15.0)
        .build();
    let mut meter = BalanceMeter::new(config)?;

    let run = meter.start_animation();
    for elapsed_ms in [0.0, 750.0, 1500.0, 2250.0, 3000.0] {
        meter.advance(run, elapsed_ms);
        let mut recorder = SceneRecorder::new(400, 400);
        meter.render(&mut recorder);
        println!(
            "t={elapsed_ms:>6}ms  value={:>8.2}  sweep={:>7.3}°  state={:?}",
            meter.model().current_value(),
            meter.model().swept_angle(),
            meter.driver_state(),
        );
        for call in recorder.calls() {
            println!("    {call:?}");
        }
    }
    Ok(())
}
