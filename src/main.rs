use anyhow::{Context, Result, anyhow};
use bitconv::{Measurement, bits_to_int, int_as_big_int, int_as_double, int_to_bits, measurements_to_int};
use itertools::Itertools;
use std::env::args;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: bitconv encode <number> <width> | decode <bits> | measure <outcome>... | widen <number>";

fn main() -> Result<()> {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
		.with_writer(std::io::stderr)
		.init();
	let args: Vec<String> = args().skip(1).collect();
	println!("{}", run(&args)?);
	Ok(())
}

fn run(args: &[String]) -> Result<String> {
	let (command, rest) = args.split_first().ok_or(anyhow!("Please specify a command\n{USAGE}"))?;
	match &command[..] {
		"encode" => {
			let [number, width] = rest else { return Err(anyhow!("encode takes a number and a width\n{USAGE}")) };
			let number: i64 = number.parse().context("Error parsing number")?;
			let width: i64 = width.parse().context("Error parsing width")?;
			let bits = int_to_bits(number, width).context("Error encoding number")?;
			Ok(bits.iter().map(|&b| if b { '1' } else { '0' }).join(""))
		},
		"decode" => {
			let [bits] = rest else { return Err(anyhow!("decode takes a single bit string\n{USAGE}")) };
			let bits = bits.chars().map(|c| match c {
				'1' => Ok(true),
				'0' => Ok(false),
				other => Err(anyhow!("Invalid bit {other:?}, expected 0 or 1")),
			}).collect::<Result<Vec<_>>>()?;
			Ok(bits_to_int(&bits).context("Error decoding bits")?.to_string())
		},
		"measure" => {
			let results = rest.iter()
				.map(|s| s.parse::<Measurement>())
				.collect::<Result<Vec<_>, _>>()
				.context("Error parsing measurement outcomes")?;
			Ok(measurements_to_int(&results).context("Error decoding measurements")?.to_string())
		},
		"widen" => {
			let [number] = rest else { return Err(anyhow!("widen takes a single number\n{USAGE}")) };
			let number: i64 = number.parse().context("Error parsing number")?;
			Ok(format!("{:.1} {}", int_as_double(number), int_as_big_int(number)))
		},
		other => Err(anyhow!("Unknown command {other:?}\n{USAGE}")),
	}
}
