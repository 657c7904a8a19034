use anyhow::{bail, Context, Result};
use tracing::Level;
use tsp_ga::{EvolutionConfig, EvolutionDriver, TracingReporter};

const USAGE: &str = "\
Usage: tsp-ga [GENERATIONS] [POPULATION_SIZE] [OPTIONS]

Arguments:
  GENERATIONS          Number of generations          [default: 5000]
  POPULATION_SIZE      Population size and stop count [default: 100]

Options:
  -s, --seed <N>       Random seed                    [default: random]
      --min <N>        Inclusive coordinate minimum   [default: 0]
      --max <N>        Exclusive coordinate maximum   [default: 100]
  -i, --interval <N>   Generations between reports    [default: 100]
      --serial         Evaluate tours on one thread
  -h, --help           Show this help";

/// Parses the command line into a config. `None` means help was requested.
fn parse_args(args: &[String]) -> Result<Option<EvolutionConfig>> {
    let mut config = EvolutionConfig::default();
    let mut positional = 0usize;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        let mut value = |name: &str| {
            iter.next()
                .with_context(|| format!("{name} requires a value"))
        };
        match arg.as_str() {
            "--seed" | "-s" => {
                let v = value("--seed")?;
                config.seed = Some(v.parse().with_context(|| format!("invalid seed: {v}"))?);
            }
            "--min" => {
                let v = value("--min")?;
                config.range_min = v.parse().with_context(|| format!("invalid --min: {v}"))?;
            }
            "--max" => {
                let v = value("--max")?;
                config.range_max = v.parse().with_context(|| format!("invalid --max: {v}"))?;
            }
            "--interval" | "-i" => {
                let v = value("--interval")?;
                config.report_interval =
                    v.parse().with_context(|| format!("invalid --interval: {v}"))?;
            }
            "--serial" => config.parallel = false,
            "--help" | "-h" => return Ok(None),
            other if other.starts_with('-') => bail!("unknown option: {other}"),
            other => {
                let n: usize = other
                    .parse()
                    .with_context(|| format!("expected a non-negative integer, got {other}"))?;
                match positional {
                    0 => config.generations = n,
                    1 => config.population_size = n,
                    _ => bail!("unexpected argument: {other}"),
                }
                positional += 1;
            }
        }
    }
    Ok(Some(config))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(config) = parse_args(&args)? else {
        println!("{USAGE}");
        return Ok(());
    };

    let result = EvolutionDriver::run(&config, TracingReporter)?;

    println!(
        "FINISHED: {} generations, distance {:.6}",
        result.generations, result.best_distance
    );
    println!("RESULT");
    for point in &result.best {
        println!("({:.1}, {:.1})", point.x, point.y);
    }
    Ok(())
}
