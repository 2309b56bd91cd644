//! Evaluate one parsed subcommand into a serializable record.

use anyhow::{Context, Result};
use clap::ValueEnum;
use numkit::{angle, bits, convert, extrema, line, pow::fast_pow, range};
use serde::Serialize;
use serde_json::{json, Value};
use std::str::FromStr;

use crate::Action;

/// Numeric type a generic operation runs in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Kind {
    Int,
    Long,
    Float,
    Double,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum TrigFn {
    Sin,
    Cos,
    Tan,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ParseKind {
    Int,
    Long,
    Float,
    Double,
    Bool,
}

/// Result of one operation: `{ "op", "inputs", "result" }`.
#[derive(Debug, Serialize)]
pub struct Evaluation {
    pub op: &'static str,
    pub inputs: Value,
    pub result: Value,
}

/// JSON has no NaN/infinity; those become `null`.
fn float_value(op: &'static str, x: f64) -> Value {
    match serde_json::Number::from_f64(x) {
        Some(n) => Value::Number(n),
        None => {
            tracing::warn!(op, value = %x, "non-finite result");
            Value::Null
        }
    }
}

/// The name clap accepts for `v`, e.g. `int` for `Kind::Int`.
fn value_name<T: ValueEnum>(v: &T) -> String {
    v.to_possible_value()
        .map(|p| p.get_name().to_string())
        .unwrap_or_default()
}

fn parse_all<T>(values: &[String]) -> Result<Vec<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    values
        .iter()
        .map(|s| s.trim().parse::<T>().with_context(|| format!("parsing {s:?}")))
        .collect()
}

fn parse_one<T>(s: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    s.trim().parse::<T>().with_context(|| format!("parsing {s:?}"))
}

fn pick<T: PartialOrd + Copy>(xs: &[T], want_max: bool) -> Result<T> {
    let out = if want_max {
        extrema::max(xs)?
    } else {
        extrema::min(xs)?
    };
    Ok(out)
}

fn extremum(op: &'static str, values: &[String], kind: Kind, want_max: bool) -> Result<Value> {
    Ok(match kind {
        Kind::Int => Value::from(pick(&parse_all::<i32>(values)?, want_max)?),
        Kind::Long => Value::from(pick(&parse_all::<i64>(values)?, want_max)?),
        Kind::Float => float_value(op, f64::from(pick(&parse_all::<f32>(values)?, want_max)?)),
        Kind::Double => float_value(op, pick(&parse_all::<f64>(values)?, want_max)?),
    })
}

pub fn evaluate(action: &Action) -> Result<Evaluation> {
    let eval = match action {
        Action::Min { values, kind } => Evaluation {
            op: "min",
            inputs: json!({ "values": values, "kind": value_name(kind) }),
            result: extremum("min", values, *kind, false)?,
        },
        Action::Max { values, kind } => Evaluation {
            op: "max",
            inputs: json!({ "values": values, "kind": value_name(kind) }),
            result: extremum("max", values, *kind, true)?,
        },
        Action::Pow { base, exp, kind } => {
            let result = match kind {
                Kind::Int => Value::from(fast_pow(parse_one::<i32>(base)?, *exp)),
                Kind::Long => Value::from(fast_pow(parse_one::<i64>(base)?, *exp)),
                Kind::Float => float_value("pow", f64::from(fast_pow(parse_one::<f32>(base)?, *exp))),
                Kind::Double => float_value("pow", fast_pow(parse_one::<f64>(base)?, *exp)),
            };
            Evaluation {
                op: "pow",
                inputs: json!({ "base": base, "exp": exp, "kind": value_name(kind) }),
                result,
            }
        }
        Action::Trig { func, degrees } => {
            let y = match func {
                TrigFn::Sin => angle::sin_deg(*degrees),
                TrigFn::Cos => angle::cos_deg(*degrees),
                TrigFn::Tan => angle::tan_deg(*degrees),
            };
            Evaluation {
                op: "trig",
                inputs: json!({ "func": value_name(func), "degrees": degrees }),
                result: float_value("trig", y),
            }
        }
        Action::Reduce { degrees } => Evaluation {
            op: "reduce",
            inputs: json!({ "degrees": degrees }),
            result: float_value("reduce", angle::reduce_angle_to_signed_range(*degrees)),
        },
        Action::Wrap { radians } => Evaluation {
            op: "wrap",
            inputs: json!({ "radians": radians }),
            result: float_value("wrap", angle::wrap_angle_to_pi_range(*radians)),
        },
        Action::Normalize { value, from, to } => Evaluation {
            op: "normalize",
            inputs: json!({ "value": value, "from": from, "to": to }),
            result: float_value("normalize", range::normalize(*value, *from, *to)),
        },
        Action::Clamp {
            value,
            min,
            max,
            kind,
        } => {
            let result = match kind {
                Kind::Int => Value::from(range::clamp(
                    parse_one::<i32>(value)?,
                    parse_one::<i32>(min)?,
                    parse_one::<i32>(max)?,
                )),
                Kind::Long => Value::from(range::clamp(
                    parse_one::<i64>(value)?,
                    parse_one::<i64>(min)?,
                    parse_one::<i64>(max)?,
                )),
                Kind::Float => float_value(
                    "clamp",
                    f64::from(range::clamp(
                        parse_one::<f32>(value)?,
                        parse_one::<f32>(min)?,
                        parse_one::<f32>(max)?,
                    )),
                ),
                Kind::Double => float_value(
                    "clamp",
                    range::clamp(
                        parse_one::<f64>(value)?,
                        parse_one::<f64>(min)?,
                        parse_one::<f64>(max)?,
                    ),
                ),
            };
            Evaluation {
                op: "clamp",
                inputs: json!({ "value": value, "min": min, "max": max, "kind": value_name(kind) }),
                result,
            }
        }
        Action::Distance { point, a, b } => Evaluation {
            op: "distance",
            inputs: json!({ "point": point, "a": a, "b": b }),
            result: float_value(
                "distance",
                line::distance_to_line(point[0], point[1], a[0], a[1], b[0], b[1]),
            ),
        },
        Action::Rotation { last, current } => Evaluation {
            op: "rotation",
            inputs: json!({ "last": last, "current": current }),
            result: float_value("rotation", angle::shortest_rotation(*last, *current)),
        },
        Action::Between { u, v } => Evaluation {
            op: "between",
            inputs: json!({ "u": u, "v": v }),
            result: float_value("between", angle::angle_between_vectors(u[0], u[1], v[0], v[1])),
        },
        Action::Bit { value, index } => Evaluation {
            op: "bit",
            inputs: json!({ "value": value, "index": index }),
            result: Value::Bool(bits::has_bit_at(*value, *index)),
        },
        Action::Parse { kind, raw } => {
            let raw_ref = raw.as_deref();
            let result = match kind {
                ParseKind::Int => Value::from(convert::parse_int(raw_ref)),
                ParseKind::Long => Value::from(convert::parse_long(raw_ref)),
                ParseKind::Float => float_value("parse", f64::from(convert::parse_float(raw_ref))),
                ParseKind::Double => float_value("parse", convert::parse_double(raw_ref)),
                ParseKind::Bool => Value::Bool(convert::parse_bool(raw_ref)),
            };
            Evaluation {
                op: "parse",
                inputs: json!({ "kind": value_name(kind), "raw": raw }),
                result,
            }
        }
        Action::Report => Evaluation {
            op: "report",
            inputs: json!({}),
            result: json!({
                "version": numkit::VERSION,
                "code_rev": option_env!("GIT_COMMIT").unwrap_or("unknown"),
            }),
        },
    };
    Ok(eval)
}
