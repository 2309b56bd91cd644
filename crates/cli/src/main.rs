use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod eval;
mod output;

use eval::{Kind, ParseKind, TrigFn};

#[derive(Parser)]
#[command(name = "numkit")]
#[command(about = "Evaluate numeric and angle helpers and print the result as JSON")]
struct Cmd {
    /// Pretty-print the JSON result
    #[arg(long, global = true)]
    pretty: bool,

    /// Also write the JSON result to this file
    #[arg(long, global = true)]
    out: Option<PathBuf>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand, Debug)]
enum Action {
    /// Smallest of a comma-separated list
    Min {
        #[arg(long, required = true, value_delimiter = ',', allow_hyphen_values = true)]
        values: Vec<String>,
        #[arg(long, value_enum, default_value_t = Kind::Double)]
        kind: Kind,
    },
    /// Largest of a comma-separated list
    Max {
        #[arg(long, required = true, value_delimiter = ',', allow_hyphen_values = true)]
        values: Vec<String>,
        #[arg(long, value_enum, default_value_t = Kind::Double)]
        kind: Kind,
    },
    /// base^exp by repeated squaring (integer kinds truncate negative exponents to 0)
    Pow {
        #[arg(long, allow_hyphen_values = true)]
        base: String,
        #[arg(long, allow_hyphen_values = true)]
        exp: i32,
        #[arg(long, value_enum, default_value_t = Kind::Double)]
        kind: Kind,
    },
    /// sin/cos/tan of an angle in degrees
    Trig {
        #[arg(long, value_enum)]
        func: TrigFn,
        #[arg(long, allow_hyphen_values = true)]
        degrees: f64,
    },
    /// Reduce degrees into [-180, 180]
    Reduce {
        #[arg(long, allow_hyphen_values = true)]
        degrees: f64,
    },
    /// Wrap radians into (-pi, pi]
    Wrap {
        #[arg(long, allow_hyphen_values = true)]
        radians: f64,
    },
    /// Fraction of the range [from, to] (either order) at which value lies
    Normalize {
        #[arg(long, allow_hyphen_values = true)]
        value: f64,
        #[arg(long, allow_hyphen_values = true)]
        from: f64,
        #[arg(long, allow_hyphen_values = true)]
        to: f64,
    },
    /// Bound value into [min, max]
    Clamp {
        #[arg(long, allow_hyphen_values = true)]
        value: String,
        #[arg(long, allow_hyphen_values = true)]
        min: String,
        #[arg(long, allow_hyphen_values = true)]
        max: String,
        #[arg(long, value_enum, default_value_t = Kind::Double)]
        kind: Kind,
    },
    /// Distance from a point to the line through a and b (points as "x,y")
    Distance {
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        point: [f64; 2],
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        a: [f64; 2],
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        b: [f64; 2],
    },
    /// Shortest signed rotation between two bearings in radians
    Rotation {
        #[arg(long, allow_hyphen_values = true)]
        last: f64,
        #[arg(long, allow_hyphen_values = true)]
        current: f64,
    },
    /// Angle in degrees between two vectors given as "x,y"
    Between {
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        u: [f64; 2],
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        v: [f64; 2],
    },
    /// Whether bit `index` of `value` is set
    Bit {
        #[arg(long, allow_hyphen_values = true)]
        value: i32,
        #[arg(long)]
        index: u32,
    },
    /// Lenient parse with zero fallback
    Parse {
        #[arg(long, value_enum)]
        kind: ParseKind,
        #[arg(allow_hyphen_values = true)]
        raw: Option<String>,
    },
    /// Print version info
    Report,
}

fn parse_point(s: &str) -> Result<[f64; 2], String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected \"x,y\", got {s:?}"))?;
    let x = x.trim().parse::<f64>().map_err(|e| format!("x: {e}"))?;
    let y = y.trim().parse::<f64>().map_err(|e| format!("y: {e}"))?;
    Ok([x, y])
}

fn main() -> Result<()> {
    // stdout carries the JSON result only
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let eval = eval::evaluate(&cmd.action)?;
    tracing::info!(op = eval.op, result = %eval.result, "evaluated");
    let text = output::render(&eval, cmd.pretty)?;
    println!("{text}");
    if let Some(out) = &cmd.out {
        output::write_json(out, &text)?;
    }
    Ok(())
}
