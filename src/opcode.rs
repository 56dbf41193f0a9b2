//! Host-facing operations, addressed by the block opcodes a scripting runtime sends.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::context::TouchContext;
use crate::error::{Error, Result};
use crate::model::QueryTarget;
use crate::state::viewport::{DEFAULT_STAGE_HEIGHT, DEFAULT_STAGE_WIDTH};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Opcode {
    IsTouchingSprite,
    DistanceToClosestFinger,
    ClosestFingerX,
    ClosestFingerY,
    SetStageSize,
    GetStageWidth,
    GetStageHeight,
}

impl Opcode {
    pub const ALL: [Opcode; 7] = [
        Opcode::IsTouchingSprite,
        Opcode::DistanceToClosestFinger,
        Opcode::ClosestFingerX,
        Opcode::ClosestFingerY,
        Opcode::SetStageSize,
        Opcode::GetStageWidth,
        Opcode::GetStageHeight,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Opcode::IsTouchingSprite => "isTouchingSprite",
            Opcode::DistanceToClosestFinger => "distanceToClosestFinger",
            Opcode::ClosestFingerX => "closestFingerX",
            Opcode::ClosestFingerY => "closestFingerY",
            Opcode::SetStageSize => "setStageSize",
            Opcode::GetStageWidth => "getStageWidth",
            Opcode::GetStageHeight => "getStageHeight",
        }
    }

    /// Human label, as the block reads in the editor.
    pub fn label(self) -> &'static str {
        match self {
            Opcode::IsTouchingSprite => "finger touching sprite?",
            Opcode::DistanceToClosestFinger => "distance to closest finger",
            Opcode::ClosestFingerX => "x of closest finger",
            Opcode::ClosestFingerY => "y of closest finger",
            Opcode::SetStageSize => "set stage size",
            Opcode::GetStageWidth => "stage width",
            Opcode::GetStageHeight => "stage height",
        }
    }
}

impl FromStr for Opcode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Opcode::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| Error::UnknownOpcode(s.to_string()))
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a boolean or reporter block hands back to the runtime.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BlockValue {
    Bool(bool),
    Number(f64),
}

impl fmt::Display for BlockValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            BlockValue::Bool(b) => write!(f, "{b}"),
            BlockValue::Number(n) if n == f64::INFINITY => f.write_str("Infinity"),
            BlockValue::Number(n) if n == f64::NEG_INFINITY => f.write_str("-Infinity"),
            BlockValue::Number(n) => write!(f, "{n}"),
        }
    }
}

/// Evaluates a boolean/reporter opcode against the current state.
pub fn report(ctx: &TouchContext, opcode: Opcode, target: Option<&QueryTarget>) -> Result<BlockValue> {
    let sprite = || target.ok_or(Error::MissingTarget(opcode.name()));
    let value = match opcode {
        Opcode::IsTouchingSprite => BlockValue::Bool(ctx.is_touching(sprite()?)),
        Opcode::DistanceToClosestFinger => BlockValue::Number(ctx.distance_to_closest(sprite()?)),
        Opcode::ClosestFingerX => BlockValue::Number(ctx.closest_x(sprite()?)),
        Opcode::ClosestFingerY => BlockValue::Number(ctx.closest_y(sprite()?)),
        Opcode::GetStageWidth => BlockValue::Number(ctx.stage_width()),
        Opcode::GetStageHeight => BlockValue::Number(ctx.stage_height()),
        Opcode::SetStageSize => return Err(Error::NotAReporter(opcode.name())),
    };
    Ok(value)
}

/// Runs any opcode. Commands yield `None`.
pub fn run(ctx: &mut TouchContext, opcode: Opcode, args: &Value, target: Option<&QueryTarget>) -> Result<Option<BlockValue>> {
    match opcode {
        Opcode::SetStageSize => {
            let (width, height) = stage_size_args(args);
            ctx.set_stage_size(width, height);
            Ok(None)
        }
        _ => report(ctx, opcode, target).map(Some),
    }
}

/// `WIDTH`/`HEIGHT` of a `setStageSize` block, defaulting to the block's initial values.
pub fn stage_size_args(args: &Value) -> (f64, f64) {
    let width = args.get("WIDTH").map_or(DEFAULT_STAGE_WIDTH, number_arg);
    let height = args.get("HEIGHT").map_or(DEFAULT_STAGE_HEIGHT, number_arg);
    (width, height)
}

/// Numeric coercion of a block argument: numbers pass, strings go through [`parse_float`],
/// anything else is NaN.
pub fn number_arg(v: &Value) -> f64 {
    match v {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => parse_float(s),
        _ => f64::NAN,
    }
}

/// Lenient float parsing: skips leading whitespace and reads the longest decimal prefix,
/// ignoring trailing garbage. `"12.5px"` is `12.5`, `"px"` is NaN.
pub fn parse_float(s: &str) -> f64 {
    // JS whitespace is Unicode White_Space plus the byte-order mark
    let s = s.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    let bytes = s.as_bytes();
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }
    if s[i..].starts_with("Infinity") {
        return if bytes.first() == Some(&b'-') { f64::NEG_INFINITY } else { f64::INFINITY };
    }
    let digits = |from: usize| bytes[from..].iter().take_while(|b| b.is_ascii_digit()).count();

    let int_digits = digits(i);
    i += int_digits;
    let mut frac_digits = 0;
    if bytes.get(i) == Some(&b'.') {
        frac_digits = digits(i + 1);
        if int_digits > 0 || frac_digits > 0 {
            i += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }
    if matches!(bytes.get(i), Some(b'e') | Some(b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+') | Some(b'-')) {
            j += 1;
        }
        let exp_digits = digits(j);
        if exp_digits > 0 {
            i = j + exp_digits;
        }
    }
    s[..i].parse().unwrap_or(f64::NAN)
}
