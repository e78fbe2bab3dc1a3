use std::fs;

use snowflake_engine::{CliArgs, CliController, EngineLimits, FractalEngine, USAGE, presenter_for_path};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = CliArgs::parse(std::env::args().skip(1))?;

    run(&args, EngineLimits::from_env())
}

fn run(args: &CliArgs, limits: EngineLimits) -> Result<(), Box<dyn std::error::Error>> {
    if args.help {
        println!("{}", USAGE);
        return Ok(());
    }

    let engine = FractalEngine::snowflake()
        .with_limits(limits)
        .with_backend(args.backend)
        .with_layout(args.layout);
    let mut controller = CliController::new(presenter_for_path(&args.output), engine);

    controller.generate(args.iterations, args.parallel)?;

    if let Some(parent) = args.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    controller.write(&args.output)?;
    println!("Saved to {}", args.output.display());

    Ok(())
}
