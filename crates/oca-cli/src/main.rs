//! Command-line interface for the orthogonal cellular automata search.

#![forbid(unsafe_code)]

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use gf2_core::BitVector;
use num_bigint::BigUint;
use oca_gen::{
    are_orthogonal, build_square, decompose_cycles, is_latin_square, iterate, Automaton,
    AutomatonConfig, OlsEntry, Square,
};
use oca_search::{MaxPeriodSearch, SearchConfig, MAX_DIAMETER};

/// Orthogonal cellular automata CLI.
#[derive(Parser)]
#[command(
    name = "oca",
    version,
    author,
    about = "Latin squares and maximal-period pairs of linear bipermutive cellular automata"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search all pairs of linear bipermutive rules of a diameter.
    Search {
        /// Diameter of the local rules.
        diameter: usize,
        /// Only print pairs whose order is the maximal period.
        #[arg(long, default_value_t = false)]
        maximal_only: bool,
        /// Run on a single thread.
        #[arg(long, default_value_t = false)]
        sequential: bool,
        /// Print one JSON object per pair instead of text lines.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Build and print the Latin square induced by a rule.
    Square {
        /// Decimal rule number.
        #[arg(long, default_value = "42330")]
        rule: BigUint,
        /// Diameter of the rule.
        #[arg(long, default_value_t = 4)]
        diameter: usize,
        /// Block length; defaults to diameter - 1.
        #[arg(long)]
        block: Option<usize>,
    },
    /// Print the cycle decomposition of two orthogonal squares.
    Cycles {
        /// Decimal number of the first rule.
        #[arg(long)]
        rule1: BigUint,
        /// Decimal number of the second rule.
        #[arg(long)]
        rule2: BigUint,
        /// Diameter of both rules.
        #[arg(long)]
        diameter: usize,
    },
    /// Print the orbit of an entry under two superposed squares.
    Orbit {
        /// Decimal number of the first rule.
        #[arg(long)]
        rule1: BigUint,
        /// Decimal number of the second rule.
        #[arg(long)]
        rule2: BigUint,
        /// Diameter of both rules.
        #[arg(long)]
        diameter: usize,
        /// Starting row, 1-based.
        #[arg(long)]
        row: u32,
        /// Starting column, 1-based.
        #[arg(long)]
        col: u32,
        /// Number of steps; defaults to the number of entries.
        #[arg(long)]
        steps: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Search {
            diameter,
            maximal_only,
            sequential,
            json,
        } => cmd_search(diameter, maximal_only, !sequential, json),
        Commands::Square {
            rule,
            diameter,
            block,
        } => cmd_square(&rule, diameter, block),
        Commands::Cycles {
            rule1,
            rule2,
            diameter,
        } => cmd_cycles(&rule1, &rule2, diameter),
        Commands::Orbit {
            rule1,
            rule2,
            diameter,
            row,
            col,
            steps,
        } => cmd_orbit(&rule1, &rule2, diameter, OlsEntry::new(row, col), steps),
    }
}

fn cmd_search(diameter: usize, maximal_only: bool, parallel: bool, json: bool) -> Result<()> {
    let search = MaxPeriodSearch::with_config(SearchConfig { diameter, parallel })
        .context("set up search")?;

    if !json {
        let divisors: Vec<String> = search.divisors().iter().map(|d| d.to_string()).collect();
        println!("Diameter: {}", search.diameter());
        println!("Degree: {}", search.degree());
        println!("Number of linear rules: {}", search.rules().len());
        println!(
            "Maximum period attainable by linear orthogonal sequences: {}",
            search.max_period()
        );
        println!("Divisors of the maximum order: {}", divisors.join(" "));
        println!();
    }

    let reports = search.run().context("run search")?;
    for report in reports.iter().filter(|r| r.maximal || !maximal_only) {
        if json {
            println!(
                "{}",
                serde_json::to_string(report).context("serialize report")?
            );
        } else {
            println!("{report}");
        }
    }
    Ok(())
}

fn cmd_square(rule: &BigUint, diameter: usize, block: Option<usize>) -> Result<()> {
    let block = block.unwrap_or(diameter.saturating_sub(1));
    let square = square_of(rule, diameter, block)?;
    print!("{square}");
    println!();
    println!("Latin square: {}", is_latin_square(&square)?);
    Ok(())
}

fn cmd_cycles(rule1: &BigUint, rule2: &BigUint, diameter: usize) -> Result<()> {
    let (a, b) = orthogonal_pair(rule1, rule2, diameter)?;
    for cycle in decompose_cycles(&a, &b).context("decompose cycles")? {
        println!("{cycle}");
    }
    Ok(())
}

fn cmd_orbit(
    rule1: &BigUint,
    rule2: &BigUint,
    diameter: usize,
    start: OlsEntry,
    steps: Option<usize>,
) -> Result<()> {
    let (a, b) = orthogonal_pair(rule1, rule2, diameter)?;
    let steps = steps.unwrap_or(a.order() * a.order());
    let orbit = iterate(&a, &b, start, steps).context("iterate squares")?;
    let entries: Vec<String> = orbit.iter().map(OlsEntry::to_string).collect();
    println!("{start} -> {}", entries.join(" "));
    Ok(())
}

fn automaton(rule: &BigUint, diameter: usize, block: usize) -> Result<Automaton> {
    if !(1..=MAX_DIAMETER).contains(&diameter) {
        bail!("diameter {diameter} is outside 1..={MAX_DIAMETER}");
    }
    let table = BitVector::from_biguint(rule, 1usize << diameter)
        .with_context(|| format!("rule {rule} does not fit diameter {diameter}"))?;
    Automaton::new(2 * block, table, AutomatonConfig::with_neighborhood(diameter, 0))
        .context("build automaton")
}

fn square_of(rule: &BigUint, diameter: usize, block: usize) -> Result<Square> {
    let mut ca = automaton(rule, diameter, block)?;
    build_square(&mut ca, block).with_context(|| format!("build square of rule {rule}"))
}

fn orthogonal_pair(
    rule1: &BigUint,
    rule2: &BigUint,
    diameter: usize,
) -> Result<(Square, Square)> {
    let block = diameter.saturating_sub(1);
    let a = square_of(rule1, diameter, block)?;
    let b = square_of(rule2, diameter, block)?;
    if !are_orthogonal(&a, &b)? {
        bail!("the squares of rules {rule1} and {rule2} are not orthogonal");
    }
    Ok((a, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_defaults() {
        let cli = Cli::try_parse_from(["oca", "square"]).unwrap();
        match cli.command {
            Commands::Square {
                rule,
                diameter,
                block,
            } => {
                assert_eq!(rule, BigUint::from(42330u32));
                assert_eq!(diameter, 4);
                assert_eq!(block, None);
            }
            _ => panic!("expected the square command"),
        }
    }

    #[test]
    fn search_requires_a_diameter() {
        assert!(Cli::try_parse_from(["oca", "search"]).is_err());
        assert!(Cli::try_parse_from(["oca", "search", "4", "--json"]).is_ok());
    }

    #[test]
    fn oversized_rule_is_rejected() {
        assert!(square_of(&BigUint::from(1u32 << 16), 4, 3).is_err());
        assert!(square_of(&BigUint::from(42330u32), 4, 3).is_ok());
    }

    #[test]
    fn oversized_diameter_is_rejected_before_allocation() {
        for diameter in [0, MAX_DIAMETER + 1, 60] {
            let err = square_of(&BigUint::from(1u32), diameter, 3).unwrap_err();
            assert!(err.to_string().contains("is outside"), "{err}");
        }
    }

    #[test]
    fn non_orthogonal_pair_is_rejected() {
        let (r1, r2) = (BigUint::from(21930u32), BigUint::from(27030u32));
        assert!(orthogonal_pair(&r1, &r2, 4).is_err());
        let r3 = BigUint::from(39270u32);
        assert!(orthogonal_pair(&r1, &r3, 4).is_ok());
    }
}
