//! Type-coercive field assignment.
//!
//! The setter takes the handle produced by the resolver and one raw string
//! from the request body, converts the string into the destination's
//! concrete type, and assigns it. Only leaf scalars are assignable;
//! structural handles report an unsupported destination type.

use std::num::IntErrorKind;

use chrono::{DateTime, Utc};

use crate::temporal::parse_timestamp;
use crate::{BindError, BindLimits, FieldHandle, Slot};

/// Coerces an integer literal into a concrete width, mapping range failures
/// to `Overflow` with the destination type's name.
macro_rules! coerce_int {
    ($raw:expr, $ty:ty, $parse:ident) => {{
        let parsed = $parse($raw, stringify!($ty))?;
        <$ty>::try_from(parsed).map_err(|_| BindError::Overflow {
            value: $raw.to_string(),
            width: stringify!($ty),
        })?
    }};
}

/// Converts `raw` and assigns it into the field behind `handle`.
///
/// `name` is the field name of the final path segment, used for error
/// context. Optional destinations are only written on a successful parse;
/// a failed conversion leaves them untouched.
///
/// # Example
///
/// ```rust
/// use trellis_bind::{set_field_value, BindLimits, FieldHandle, Slot};
///
/// let limits = BindLimits::default();
/// let mut age = 0_i64;
///
/// let handle = FieldHandle::Slot(Slot::I64(&mut age));
/// set_field_value("age", handle, "1_000", &limits).unwrap();
/// assert_eq!(age, 1000);
/// ```
pub fn set_field_value(
    name: &str,
    handle: FieldHandle<'_>,
    raw: &str,
    limits: &BindLimits,
) -> Result<(), BindError> {
    match handle {
        FieldHandle::Slot(slot) => set_slot(slot, raw, limits),
        FieldHandle::Struct(_) | FieldHandle::Slice(_) => Err(BindError::UnsupportedFieldType {
            name: name.to_string(),
        }),
    }
}

fn set_slot(slot: Slot<'_>, raw: &str, limits: &BindLimits) -> Result<(), BindError> {
    match slot {
        Slot::Text(dest) => *dest = raw.to_string(),
        Slot::Alias(dest) => dest.set_str(raw),

        Slot::I8(dest) => *dest = coerce_int!(raw, i8, parse_signed),
        Slot::I16(dest) => *dest = coerce_int!(raw, i16, parse_signed),
        Slot::I32(dest) => *dest = coerce_int!(raw, i32, parse_signed),
        Slot::I64(dest) => *dest = coerce_int!(raw, i64, parse_signed),
        Slot::U8(dest) => *dest = coerce_int!(raw, u8, parse_unsigned),
        Slot::U16(dest) => *dest = coerce_int!(raw, u16, parse_unsigned),
        Slot::U32(dest) => *dest = coerce_int!(raw, u32, parse_unsigned),
        Slot::U64(dest) => *dest = coerce_int!(raw, u64, parse_unsigned),

        Slot::F32(dest) => *dest = parse_float::<f32>(raw, limits)?,
        Slot::F64(dest) => *dest = parse_float::<f64>(raw, limits)?,

        Slot::Bool(dest) => *dest = parse_bool(raw)?,

        Slot::Timestamp(dest) => {
            *dest = if raw.is_empty() {
                DateTime::<Utc>::UNIX_EPOCH
            } else {
                parse_timestamp(raw)?
            };
        }
        Slot::OptTimestamp(dest) => {
            *dest = if raw.is_empty() {
                None
            } else {
                Some(parse_timestamp(raw)?)
            };
        }

        Slot::OptText(dest) => *dest = Some(raw.to_string()),
        Slot::OptI8(dest) => *dest = Some(coerce_int!(raw, i8, parse_signed)),
        Slot::OptI16(dest) => *dest = Some(coerce_int!(raw, i16, parse_signed)),
        Slot::OptI32(dest) => *dest = Some(coerce_int!(raw, i32, parse_signed)),
        Slot::OptI64(dest) => *dest = Some(coerce_int!(raw, i64, parse_signed)),
        Slot::OptU8(dest) => *dest = Some(coerce_int!(raw, u8, parse_unsigned)),
        Slot::OptU16(dest) => *dest = Some(coerce_int!(raw, u16, parse_unsigned)),
        Slot::OptU32(dest) => *dest = Some(coerce_int!(raw, u32, parse_unsigned)),
        Slot::OptU64(dest) => *dest = Some(coerce_int!(raw, u64, parse_unsigned)),
        Slot::OptF32(dest) => *dest = Some(parse_float::<f32>(raw, limits)?),
        Slot::OptF64(dest) => *dest = Some(parse_float::<f64>(raw, limits)?),
        Slot::OptBool(dest) => *dest = Some(parse_bool(raw)?),
    }
    Ok(())
}

/// Strips ASCII underscore digit-group separators.
fn strip_separators(raw: &str) -> String {
    raw.chars().filter(|c| *c != '_').collect()
}

fn parse_signed(raw: &str, width: &'static str) -> Result<i128, BindError> {
    let cleaned = strip_separators(raw);
    if cleaned.is_empty() {
        return Err(BindError::InvalidInteger {
            value: raw.to_string(),
        });
    }
    cleaned.parse::<i128>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => BindError::Overflow {
            value: raw.to_string(),
            width,
        },
        _ => BindError::InvalidInteger {
            value: raw.to_string(),
        },
    })
}

fn parse_unsigned(raw: &str, width: &'static str) -> Result<u128, BindError> {
    let cleaned = strip_separators(raw);
    if cleaned.is_empty() {
        return Err(BindError::InvalidInteger {
            value: raw.to_string(),
        });
    }
    cleaned.parse::<u128>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow => BindError::Overflow {
            value: raw.to_string(),
            width,
        },
        _ => BindError::InvalidInteger {
            value: raw.to_string(),
        },
    })
}

fn parse_float<T: std::str::FromStr>(raw: &str, limits: &BindLimits) -> Result<T, BindError> {
    if raw.len() > limits.max_float_len {
        return Err(BindError::InvalidFloat {
            value: raw.to_string(),
        });
    }
    let cleaned = strip_separators(raw);
    if cleaned.is_empty() {
        return Err(BindError::InvalidFloat {
            value: raw.to_string(),
        });
    }
    cleaned.parse::<T>().map_err(|_| BindError::InvalidFloat {
        value: raw.to_string(),
    })
}

fn parse_bool(raw: &str) -> Result<bool, BindError> {
    match raw {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(BindError::InvalidBoolean {
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StringAlias;
    use chrono::TimeZone;
    use proptest::prelude::*;

    fn limits() -> BindLimits {
        BindLimits::default()
    }

    fn set(slot: Slot<'_>, raw: &str) -> Result<(), BindError> {
        set_slot(slot, raw, &limits())
    }

    #[test]
    fn test_text_is_assigned_verbatim() {
        let mut dest = String::new();
        set(Slot::Text(&mut dest), "  <b>Ann</b> ").unwrap();
        assert_eq!(dest, "  <b>Ann</b> ");

        set(Slot::Text(&mut dest), "").unwrap();
        assert_eq!(dest, "");
    }

    #[test]
    fn test_alias_is_assigned_verbatim() {
        struct Slug(String);
        impl StringAlias for Slug {
            fn set_str(&mut self, value: &str) {
                self.0 = value.to_string();
            }
        }

        let mut slug = Slug(String::new());
        set(Slot::Alias(&mut slug), "spring-catalogue").unwrap();
        assert_eq!(slug.0, "spring-catalogue");
    }

    #[test]
    fn test_signed_bounds_round_trip() {
        let mut v8 = 0_i8;
        set(Slot::I8(&mut v8), "-128").unwrap();
        assert_eq!(v8, i8::MIN);
        set(Slot::I8(&mut v8), "127").unwrap();
        assert_eq!(v8, i8::MAX);

        let mut v16 = 0_i16;
        set(Slot::I16(&mut v16), &i16::MIN.to_string()).unwrap();
        assert_eq!(v16, i16::MIN);
        set(Slot::I16(&mut v16), &i16::MAX.to_string()).unwrap();
        assert_eq!(v16, i16::MAX);

        let mut v32 = 0_i32;
        set(Slot::I32(&mut v32), &i32::MIN.to_string()).unwrap();
        assert_eq!(v32, i32::MIN);
        set(Slot::I32(&mut v32), &i32::MAX.to_string()).unwrap();
        assert_eq!(v32, i32::MAX);

        let mut v64 = 0_i64;
        set(Slot::I64(&mut v64), &i64::MIN.to_string()).unwrap();
        assert_eq!(v64, i64::MIN);
        set(Slot::I64(&mut v64), &i64::MAX.to_string()).unwrap();
        assert_eq!(v64, i64::MAX);
    }

    #[test]
    fn test_unsigned_bounds_round_trip() {
        let mut v16 = 0_u16;
        set(Slot::U16(&mut v16), &u16::MAX.to_string()).unwrap();
        assert_eq!(v16, u16::MAX);
        assert!(set(Slot::U16(&mut v16), "65536").is_err());

        let mut v64 = 0_u64;
        set(Slot::U64(&mut v64), "0").unwrap();
        assert_eq!(v64, 0);
        set(Slot::U64(&mut v64), &u64::MAX.to_string()).unwrap();
        assert_eq!(v64, u64::MAX);
        assert!(matches!(
            set(Slot::U64(&mut v64), "18446744073709551616"),
            Err(BindError::Overflow { width: "u64", .. })
        ));
    }

    #[test]
    fn test_signed_overflow_one_past_the_bound() {
        let mut v8 = 0_i8;
        assert!(matches!(
            set(Slot::I8(&mut v8), "128"),
            Err(BindError::Overflow { width: "i8", .. })
        ));
        assert!(matches!(
            set(Slot::I8(&mut v8), "-129"),
            Err(BindError::Overflow { width: "i8", .. })
        ));

        let mut v64 = 0_i64;
        assert!(matches!(
            set(Slot::I64(&mut v64), "9223372036854775808"),
            Err(BindError::Overflow { width: "i64", .. })
        ));
    }

    #[test]
    fn test_underscore_separators_are_stripped() {
        let mut v = 0_i64;
        set(Slot::I64(&mut v), "1_000_000").unwrap();
        assert_eq!(v, 1_000_000);

        let mut u = 0_u32;
        set(Slot::U32(&mut u), "4_294_967_295").unwrap();
        assert_eq!(u, u32::MAX);
    }

    #[test]
    fn test_invalid_integer_content() {
        let mut v = 0_i32;
        for bad in ["", "abc", "12.5", "1e3", "0x10", "_"] {
            assert!(
                matches!(
                    set(Slot::I32(&mut v), bad),
                    Err(BindError::InvalidInteger { .. })
                ),
                "expected {bad:?} to be an invalid integer"
            );
        }
    }

    #[test]
    fn test_unsigned_rejects_negative_for_every_width() {
        let mut v8 = 0_u8;
        let mut v16 = 0_u16;
        let mut v32 = 0_u32;
        let mut v64 = 0_u64;

        assert!(set(Slot::U8(&mut v8), "-1").is_err());
        assert!(set(Slot::U16(&mut v16), "-1").is_err());
        assert!(set(Slot::U32(&mut v32), "-1").is_err());
        assert!(set(Slot::U64(&mut v64), "-1").is_err());
    }

    #[test]
    fn test_unsigned_width_ceiling() {
        let mut v8 = 0_u8;
        set(Slot::U8(&mut v8), "255").unwrap();
        assert_eq!(v8, 255);
        assert!(matches!(
            set(Slot::U8(&mut v8), "256"),
            Err(BindError::Overflow { width: "u8", .. })
        ));
    }

    #[test]
    fn test_floats_parse_decimal_and_scientific() {
        let mut v = 0.0_f64;
        set(Slot::F64(&mut v), "3.25").unwrap();
        assert!((v - 3.25).abs() < f64::EPSILON);

        set(Slot::F64(&mut v), "1_000.5").unwrap();
        assert!((v - 1000.5).abs() < f64::EPSILON);

        set(Slot::F64(&mut v), "2.5e3").unwrap();
        assert!((v - 2500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_floats_recognize_special_values() {
        let mut v = 0.0_f64;
        set(Slot::F64(&mut v), "Inf").unwrap();
        assert!(v.is_infinite() && v.is_sign_positive());

        set(Slot::F64(&mut v), "+Inf").unwrap();
        assert!(v.is_infinite() && v.is_sign_positive());

        set(Slot::F64(&mut v), "-Inf").unwrap();
        assert!(v.is_infinite() && v.is_sign_negative());

        set(Slot::F64(&mut v), "NaN").unwrap();
        assert!(v.is_nan());
    }

    #[test]
    fn test_float_rejects_empty_garbage_and_oversized() {
        let mut v = 0.0_f32;
        assert!(set(Slot::F32(&mut v), "").is_err());
        assert!(set(Slot::F32(&mut v), "abc").is_err());

        let oversized = "9".repeat(65);
        assert!(matches!(
            set(Slot::F32(&mut v), &oversized),
            Err(BindError::InvalidFloat { .. })
        ));
    }

    #[test]
    fn test_bool_accepts_only_exact_lowercase_literals() {
        let mut v = false;
        set(Slot::Bool(&mut v), "true").unwrap();
        assert!(v);
        set(Slot::Bool(&mut v), "false").unwrap();
        assert!(!v);

        for bad in ["True", "FALSE", "1", "0", "yes", "no", "", " true"] {
            assert!(
                matches!(
                    set(Slot::Bool(&mut v), bad),
                    Err(BindError::InvalidBoolean { .. })
                ),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_empty_timestamp_assigns_epoch() {
        let mut v = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap();
        set(Slot::Timestamp(&mut v), "").unwrap();
        assert_eq!(v, DateTime::<Utc>::UNIX_EPOCH);
    }

    #[test]
    fn test_timestamp_parses_date_only() {
        let mut v = DateTime::<Utc>::UNIX_EPOCH;
        set(Slot::Timestamp(&mut v), "2006-01-02").unwrap();
        assert_eq!(v, Utc.with_ymd_and_hms(2006, 1, 2, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_optional_timestamp_clears_on_empty() {
        let mut v = Some(DateTime::<Utc>::UNIX_EPOCH);
        set(Slot::OptTimestamp(&mut v), "").unwrap();
        assert_eq!(v, None);

        set(Slot::OptTimestamp(&mut v), "2006-01-02T15:04:05Z").unwrap();
        assert_eq!(v, Some(Utc.with_ymd_and_hms(2006, 1, 2, 15, 4, 5).unwrap()));
    }

    #[test]
    fn test_optional_scalars_written_only_on_success() {
        let mut count: Option<i64> = None;
        set(Slot::OptI64(&mut count), "42").unwrap();
        assert_eq!(count, Some(42));

        let mut broken: Option<i64> = None;
        assert!(set(Slot::OptI64(&mut broken), "abc").is_err());
        assert_eq!(broken, None);

        let mut flag: Option<bool> = None;
        assert!(set(Slot::OptBool(&mut flag), "True").is_err());
        assert_eq!(flag, None);
    }

    #[test]
    fn test_optional_text_accepts_empty() {
        let mut v: Option<String> = None;
        set(Slot::OptText(&mut v), "").unwrap();
        assert_eq!(v, Some(String::new()));
    }

    #[test]
    fn test_structural_handles_are_unsupported() {
        use crate::fixtures::Author;
        use crate::{resolve, FieldPath};

        let mut author = Author::default();
        let path = FieldPath::parse("settings", &limits()).unwrap();
        let handle = resolve(&mut author, &path, &limits()).unwrap();

        let err = set_field_value("settings", handle, "x", &limits()).unwrap_err();
        assert_eq!(
            err,
            BindError::UnsupportedFieldType {
                name: "settings".to_string()
            }
        );
    }

    proptest! {
        #[test]
        fn prop_i16_round_trips(value in i16::MIN..=i16::MAX) {
            let mut dest = 0_i16;
            set_slot(Slot::I16(&mut dest), &value.to_string(), &limits()).unwrap();
            prop_assert_eq!(dest, value);
        }

        #[test]
        fn prop_u16_round_trips(value in u16::MIN..=u16::MAX) {
            let mut dest = 0_u16;
            set_slot(Slot::U16(&mut dest), &value.to_string(), &limits()).unwrap();
            prop_assert_eq!(dest, value);
        }

        #[test]
        fn prop_values_past_i8_range_overflow(value in 128_i64..=100_000) {
            let mut dest = 0_i8;
            let err = set_slot(Slot::I8(&mut dest), &value.to_string(), &limits()).unwrap_err();
            prop_assert!(matches!(err, BindError::Overflow { .. }), "expected overflow error");
        }

        #[test]
        fn prop_negative_never_binds_unsigned(value in i64::MIN..=-1) {
            let mut dest = 0_u64;
            prop_assert!(set_slot(Slot::U64(&mut dest), &value.to_string(), &limits()).is_err());
        }
    }
}
