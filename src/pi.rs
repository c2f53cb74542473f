use std::time::Duration;

use ads1x15_tools::{open, run, Args};
use anyhow::Context;
use clap::Parser;
use log::info;
use rppal::hal::Delay;
use rppal::i2c::I2c;

fn main() -> Result<(), anyhow::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let i2c = I2c::with_bus(args.bus).with_context(|| format!("opening I2C bus {}", args.bus))?;

    let mut adc = open(&args, i2c, Delay::new());

    info!(
        "{:?} at {:#04x} on bus {}, gain {:?}",
        adc.variant(),
        adc.address(),
        args.bus,
        adc.gain()
    );

    let interval = Duration::from_millis(args.interval_ms);

    run(&mut adc, args.mode, args.count, || std::thread::sleep(interval))?;

    Ok(())
}
