//! Conversion between raw 16-bit register words and engineering values.
//!
//! Every [`decode`] is total: reserved "not available" words turn into `None` and never into an
//! error. [`encode`] is the inverse used on the write path and rejects anything that would not
//! survive the trip back through [`decode`].

/// How a register word is to be interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum Encoding {
    /// Two's complement word holding the value multiplied by 10.
    SignedTenths,
    /// Two's complement word holding the value multiplied by 100.
    SignedHundredths,
    /// Plain unsigned word, `0x8000` marks a missing reading.
    UnsignedRawA,
    /// Plain unsigned word, `0xFFFF` marks a missing reading.
    UnsignedRawB,
    /// A single bit of a status word.
    BitFlags { bit: u8 },
}

impl Encoding {
    /// The reserved word that means "no reading available", if the encoding has one.
    pub const fn sentinel(self) -> Option<u16> {
        match self {
            Self::SignedTenths | Self::SignedHundredths => Some(i16::MIN as u16),
            Self::UnsignedRawA => Some(0x8000),
            Self::UnsignedRawB => Some(0xFFFF),
            Self::BitFlags { .. } => None,
        }
    }

    const fn divisor(self) -> u32 {
        match self {
            Self::SignedTenths => 10,
            Self::SignedHundredths => 100,
            Self::UnsignedRawA | Self::UnsignedRawB | Self::BitFlags { .. } => 1,
        }
    }

    pub const fn short_name(self) -> &'static str {
        match self {
            Self::SignedTenths => "i16/10",
            Self::SignedHundredths => "i16/100",
            Self::UnsignedRawA => "u16",
            Self::UnsignedRawB => "u16*",
            Self::BitFlags { .. } => "bit",
        }
    }
}

impl std::fmt::Display for Encoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BitFlags { bit } => f.write_fmt(format_args!("bit {bit}")),
            other => f.write_str(other.short_name()),
        }
    }
}

/// A decoded register value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value {
    Integer(i64),
    /// A fixed-point reading with its decimal scaling already applied.
    Decimal(f64),
    Flag(bool),
}

impl Value {
    pub fn as_f64(self) -> f64 {
        match self {
            Value::Integer(n) => n as f64,
            Value::Decimal(n) => n,
            Value::Flag(b) => f64::from(u8::from(b)),
        }
    }

    pub fn as_integer(self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(n),
            Value::Decimal(_) | Value::Flag(_) => None,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Value::Integer(n) => f.write_fmt(format_args!("{}", n)),
            Value::Decimal(n) => f.write_fmt(format_args!("{}", n)),
            Value::Flag(b) => f.write_str(if b { "on" } else { "off" }),
        }
    }
}

impl serde::Serialize for Value {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Value::Integer(n) => serializer.serialize_i64(n),
            Value::Decimal(n) => serializer.serialize_f64(n),
            Value::Flag(b) => serializer.serialize_bool(b),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum EncodingError {
    #[error("{value} is outside of the permitted range {}..={}", fmt_bound(.min), fmt_bound(.max))]
    OutOfRange { value: f64, min: Option<f64>, max: Option<f64> },
    #[error("{0} cannot be represented as a {1} register word")]
    Unrepresentable(f64, Encoding),
    #[error("{0} is not one of the values this register accepts")]
    NotAChoice(f64),
}

fn fmt_bound(bound: &Option<f64>) -> String {
    bound.map(|b| b.to_string()).unwrap_or_default()
}

/// Decode a raw register word.
///
/// `scale` is an additional divisor on top of the one implied by the encoding. Most registers
/// use `1`.
pub fn decode(raw: u16, encoding: Encoding, scale: u16) -> Option<Value> {
    if encoding.sentinel() == Some(raw) {
        return None;
    }
    let divisor = encoding.divisor() * u32::from(scale.max(1));
    let number = match encoding {
        Encoding::SignedTenths | Encoding::SignedHundredths => i64::from(raw as i16),
        Encoding::UnsignedRawA | Encoding::UnsignedRawB => i64::from(raw),
        Encoding::BitFlags { bit } => {
            return Some(Value::Flag(raw.checked_shr(u32::from(bit)).unwrap_or(0) & 1 == 1));
        }
    };
    Some(if divisor == 1 {
        Value::Integer(number)
    } else {
        Value::Decimal(number as f64 / f64::from(divisor))
    })
}

/// Encode an engineering value into a register word.
///
/// The value is rounded to the nearest step the encoding can express. Range checks against a
/// particular register happen in [`crate::registers::RegisterDescriptor::encode`].
pub fn encode(value: f64, encoding: Encoding, scale: u16) -> Result<u16, EncodingError> {
    let unrepresentable = || EncodingError::Unrepresentable(value, encoding);
    if !value.is_finite() {
        return Err(unrepresentable());
    }
    let divisor = encoding.divisor() * u32::from(scale.max(1));
    let scaled = (value * f64::from(divisor)).round();
    let raw = match encoding {
        Encoding::SignedTenths | Encoding::SignedHundredths => {
            if scaled < f64::from(i16::MIN) || scaled > f64::from(i16::MAX) {
                return Err(unrepresentable());
            }
            scaled as i16 as u16
        }
        Encoding::UnsignedRawA | Encoding::UnsignedRawB => {
            if scaled < 0.0 || scaled > f64::from(u16::MAX) {
                return Err(unrepresentable());
            }
            scaled as u16
        }
        Encoding::BitFlags { bit } => {
            let mask = 1u16.checked_shl(u32::from(bit)).ok_or_else(unrepresentable)?;
            if value == 0.0 {
                0
            } else if value == 1.0 {
                mask
            } else {
                return Err(unrepresentable());
            }
        }
    };
    if encoding.sentinel() == Some(raw) {
        return Err(unrepresentable());
    }
    Ok(raw)
}
