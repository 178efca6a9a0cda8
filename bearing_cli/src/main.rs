//! # Bearing Capacity CLI
//!
//! Terminal front end for the EC7 shallow foundation calculation. Inputs
//! come from interactive prompts (defaults are the reference footing) or
//! from a JSON file; the result is printed as a report or as JSON.
//!
//! ```text
//! bearing_cli                                   # prompt for each value
//! bearing_cli --defaults                        # reference footing, no prompts
//! bearing_cli --input footing.json --json       # file in, JSON out
//! RUST_LOG=debug bearing_cli --defaults         # trace each pipeline stage
//! ```

mod report;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use log::{error, info, warn};

use bearing_core::{
    compute_bearing_capacity, load_input, CalcError, CohesionShapeFactor, EccentricityConvention, FoundationInput,
    LoadDirection,
};

use report::{render_error, render_report};

#[derive(Parser)]
#[command(author, version, about = "EC7 bearing capacity of an eccentrically loaded shallow foundation")]
struct Cli {
    /// Read the foundation input from a JSON file instead of prompting
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Use the reference footing without prompting
    #[arg(long, default_value_t = false, conflicts_with = "input")]
    defaults: bool,

    /// Axis along which the horizontal load acts (overrides the input file)
    #[arg(long, value_enum)]
    load_direction: Option<DirectionArg>,

    /// Cohesion shape factor formula (overrides the input file)
    #[arg(long, value_enum)]
    cohesion_shape_factor: Option<ShapeFactorArg>,

    /// Sign convention of the effective-dimension reduction (overrides the input file)
    #[arg(long, value_enum)]
    eccentricity: Option<EccentricityArg>,

    /// Print the result or error as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum DirectionArg {
    AlongB,
    AlongL,
}

impl From<DirectionArg> for LoadDirection {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::AlongB => LoadDirection::AlongB,
            DirectionArg::AlongL => LoadDirection::AlongL,
        }
    }
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum ShapeFactorArg {
    Literal,
    Ec7,
}

impl From<ShapeFactorArg> for CohesionShapeFactor {
    fn from(arg: ShapeFactorArg) -> Self {
        match arg {
            ShapeFactorArg::Literal => CohesionShapeFactor::Literal,
            ShapeFactorArg::Ec7 => CohesionShapeFactor::Ec7,
        }
    }
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum EccentricityArg {
    Signed,
    Absolute,
}

impl From<EccentricityArg> for EccentricityConvention {
    fn from(arg: EccentricityArg) -> Self {
        match arg {
            EccentricityArg::Signed => EccentricityConvention::Signed,
            EccentricityArg::Absolute => EccentricityConvention::Absolute,
        }
    }
}

/// Interpret one answer to a prompt: blank keeps the default, anything
/// else must parse as a number.
fn parse_answer(answer: &str, default: f64) -> Option<f64> {
    let answer = answer.trim();
    if answer.is_empty() {
        return Some(default);
    }
    answer.parse().ok()
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    loop {
        print!("{} [{}]: ", prompt, default);
        if io::stdout().flush().is_err() {
            return default;
        }

        let mut input = String::new();
        match io::stdin().lock().read_line(&mut input) {
            // End of input: nothing more to ask
            Ok(0) | Err(_) => return default,
            Ok(_) => {}
        }

        match parse_answer(&input, default) {
            Some(value) => return value,
            None => {
                warn!("Could not parse '{}' as a number for '{}'", input.trim(), prompt);
                println!("  '{}' is not a number; try again.", input.trim());
            }
        }
    }
}

fn prompt_input() -> FoundationInput {
    let d = FoundationInput::reference();

    println!("Enter values (press Enter to keep the default):");
    println!();

    FoundationInput {
        unit_weight_kn_m3: prompt_f64("Soil unit weight γ (kN/m³)", d.unit_weight_kn_m3),
        width_m: prompt_f64("Footing width B (m)", d.width_m),
        length_m: prompt_f64("Footing length L (m)", d.length_m),
        horizontal_load_kn: prompt_f64("Horizontal load H (kN)", d.horizontal_load_kn),
        vertical_load_kn: prompt_f64("Vertical load V (kN)", d.vertical_load_kn),
        cohesion_kpa: prompt_f64("Cohesion c (kPa)", d.cohesion_kpa),
        friction_angle_deg: prompt_f64("Friction angle φ (°)", d.friction_angle_deg),
        overburden_kpa: prompt_f64("Effective overburden q (kPa)", d.overburden_kpa),
        moment_about_l_knm: prompt_f64("Moment about L, M_L (kN·m)", d.moment_about_l_knm),
        moment_about_b_knm: prompt_f64("Moment about B, M_B (kN·m)", d.moment_about_b_knm),
        ..d
    }
}

fn resolve_input(cli: &Cli) -> Result<FoundationInput, CalcError> {
    let mut input = match &cli.input {
        Some(path) => {
            info!("Reading foundation input from {}", path.display());
            load_input(path)?
        }
        None if cli.defaults => FoundationInput::reference(),
        None => prompt_input(),
    };

    if let Some(direction) = cli.load_direction {
        input = input.with_load_direction(direction.into());
    }
    if let Some(variant) = cli.cohesion_shape_factor {
        input = input.with_cohesion_shape_factor(variant.into());
    }
    if let Some(convention) = cli.eccentricity {
        input = input.with_eccentricity(convention.into());
    }
    Ok(input)
}

fn print_error(err: &CalcError, as_json: bool) {
    if as_json {
        if let Ok(json) = serde_json::to_string_pretty(err) {
            println!("{}", json);
            return;
        }
    }
    eprintln!("{}", render_error(err));
}

/// Exit status for a failed run: 1 for calculation errors, 2 for I/O.
fn exit_code_for(err: &CalcError) -> u8 {
    if err.is_calculation_error() {
        1
    } else {
        2
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    if !cli.json {
        println!("Shallow Foundation Bearing Capacity (EN 1997-1 Annex D)");
        println!("========================================================");
        println!();
    }

    let input = match resolve_input(&cli) {
        Ok(input) => input,
        Err(e) => {
            error!("Could not obtain input: {}", e);
            print_error(&e, cli.json);
            return ExitCode::from(exit_code_for(&e));
        }
    };

    match compute_bearing_capacity(&input) {
        Ok(result) => {
            if cli.json {
                match serde_json::to_string_pretty(&result) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Error: could not serialize result: {}", e);
                        return ExitCode::from(2);
                    }
                }
            } else {
                println!();
                print!("{}", render_report(&input, &result));
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            print_error(&e, cli.json);
            ExitCode::from(exit_code_for(&e))
        }
    }
}
