//! Command-line front end for the remainder automaton and for machines
//! described in TOML.

use std::{
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::{Parser, Subcommand};
use remainder_fsm::{FiniteStateMachine, FsmDefinition, RemainderAutomaton, logging};

/// Run finite-state machines from the command line
#[derive(Parser, Debug)]
#[command(name = "remainder-fsm")]
#[command(about = "Compute binary remainders modulo three with a finite-state machine", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute the remainder of binary numbers divided by three
    Remainder {
        /// Binary strings, most significant bit first
        #[arg(default_values = ["110", "1010"])]
        inputs: Vec<String>,
    },
    /// Run sequences through a machine loaded from a TOML definition
    Run {
        /// Path to the machine definition
        #[arg(short, long)]
        definition: PathBuf,

        /// Input sequences, one symbol per character
        inputs: Vec<String>,
    },
    /// Print the remainder automaton as a TOML definition
    Dump,
}

fn remainder(inputs: &[String]) -> bool {
    let mut automaton = RemainderAutomaton::new();
    let mut ok = true;

    for input in inputs {
        match automaton.compute_remainder(input) {
            Ok(remainder) => println!(">> Input: {input}, Remainder: {remainder}"),
            Err(err) => {
                eprintln!(">> Input: {input}, Error: {err}");
                ok = false;
            }
        }
    }

    ok
}

fn run(definition: &Path, inputs: &[String]) -> anyhow::Result<bool> {
    let mut fsm = FsmDefinition::load(definition)?.build()?;
    let mut ok = true;

    for input in inputs {
        fsm.reset();
        match fsm.process_input(input.chars()) {
            Ok(state) => {
                let state = state.clone();
                let verdict = if fsm.is_accepting() {
                    "accepted"
                } else {
                    "rejected"
                };
                println!(">> Input: {input}, State: {state}, {verdict}");
            }
            Err(err) => {
                eprintln!(">> Input: {input}, Error: {err}");
                ok = false;
            }
        }
    }

    Ok(ok)
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    logging::init()?;

    let ok = match cli.command {
        Commands::Remainder { inputs } => remainder(&inputs),
        Commands::Run { definition, inputs } => run(&definition, &inputs)?,
        Commands::Dump => {
            print!("{}", FsmDefinition::remainder().to_toml_string()?);
            true
        }
    };

    Ok(if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
