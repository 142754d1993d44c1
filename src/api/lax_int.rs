// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Lenient integer fields
//!
//! Accepts JSON integers, integral floats (`5.0`), numeric strings (`"5"`)
//! and booleans (`true` = 1). Fractional numbers, non-numeric strings and
//! `null` are rejected.

use serde::{de::Error, Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum LaxInt {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
}

/// Use with `#[serde(deserialize_with = "lax_int::deserialize")]`
pub fn deserialize<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = LaxInt::deserialize(deserializer)
        .map_err(|_| D::Error::custom("Input should be a valid integer"))?;

    match value {
        LaxInt::Int(n) => Ok(n),
        LaxInt::Float(f) if f.is_finite() && f.fract() == 0.0 => Ok(f as i64),
        LaxInt::Float(_) => Err(D::Error::custom(
            "Input should be a valid integer, got a number with a fractional part",
        )),
        LaxInt::Bool(b) => Ok(i64::from(b)),
        LaxInt::Text(text) => text.trim().parse::<i64>().map_err(|_| {
            D::Error::custom("Input should be a valid integer, unable to parse string as an integer")
        }),
    }
}
