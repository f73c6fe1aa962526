//! Registers computed from other registers.

use crate::codec::Value;
use crate::registers::{Derivation, RegisterCatalog, RegisterId, SplitHighLow};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Combine a coarse "high" word with a fine "low" word counting up to 999.
pub fn assemble(low: i64, high: i64) -> i64 {
    high * 1000 + low
}

/// Decide what to publish for a register that must not decrease.
///
/// `previous` is the last value published for the register. A candidate of exactly zero is a
/// reset of the counter on the device and is always published.
pub fn guard(id: RegisterId, candidate: i64, previous: Option<i64>) -> i64 {
    match previous {
        _ if candidate == 0 => 0,
        Some(previous) if previous > candidate => {
            warn!(
                message = "counter went backwards, keeping the previous value",
                register = %id,
                previous,
                candidate
            );
            previous
        }
        _ => candidate,
    }
}

fn source(values: &BTreeMap<RegisterId, Option<Value>>, id: RegisterId) -> Option<i64> {
    values.get(&id).copied().flatten()?.as_integer()
}

fn split(values: &BTreeMap<RegisterId, Option<Value>>, split: SplitHighLow) -> Option<i64> {
    Some(assemble(source(values, split.low)?, source(values, split.high)?))
}

/// Compute every virtual register of the catalog from the physical values in `values`.
///
/// `watermarks` holds the last value published for each monotonic register and is updated in
/// place. A monotonic register that cannot be computed this time keeps its watermark.
pub fn synthesize(
    catalog: &RegisterCatalog,
    values: &mut BTreeMap<RegisterId, Option<Value>>,
    watermarks: &mut BTreeMap<RegisterId, i64>,
) {
    for register in catalog.virtuals() {
        let candidate = match register.derivation {
            Derivation::SplitHighLow(s) => split(values, s),
            Derivation::DayPlusTotal { day, total } => {
                split(values, total).zip(source(values, day)).map(|(total, day)| total + day)
            }
        };
        let published = match candidate {
            Some(candidate) if register.monotonic => {
                let published = guard(register.id, candidate, watermarks.get(&register.id).copied());
                watermarks.insert(register.id, published);
                Some(published)
            }
            Some(candidate) => Some(candidate),
            None => {
                debug!(message = "sources unavailable", register = %register.id);
                None
            }
        };
        values.insert(register.id, published.map(Value::Integer));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registers::Family;

    fn wpm_values(day: i64, low: i64, high: i64) -> BTreeMap<RegisterId, Option<Value>> {
        let mut values = BTreeMap::new();
        values.insert(RegisterId::ProducedHeatingToday, Some(Value::Integer(day)));
        values.insert(RegisterId::ProducedHeatingTotalLow, Some(Value::Integer(low)));
        values.insert(RegisterId::ProducedHeatingTotalHigh, Some(Value::Integer(high)));
        values
    }

    fn lifetime(values: &BTreeMap<RegisterId, Option<Value>>) -> Option<Value> {
        values[&RegisterId::ProducedHeatingLifetime]
    }

    #[test]
    fn split_high_low() {
        assert_eq!(assemble(500, 2), 2500);
        assert_eq!(assemble(0, 0), 0);
        assert_eq!(assemble(999, 65535), 65_535_999);
    }

    #[test]
    fn guard_suppresses_dips() {
        let id = RegisterId::ProducedHeatingLifetime;
        assert_eq!(guard(id, 980, Some(1000)), 1000);
        assert_eq!(guard(id, 1050, Some(1000)), 1050);
        assert_eq!(guard(id, 1000, Some(1000)), 1000);
        assert_eq!(guard(id, 5, None), 5);
    }

    #[test]
    fn guard_honours_reset() {
        assert_eq!(guard(RegisterId::ProducedHeatingLifetime, 0, Some(1000)), 0);
    }

    #[test]
    fn lifetime_over_cycles() {
        let catalog = Family::Wpm.catalog();
        let mut watermarks = BTreeMap::new();

        let mut values = wpm_values(0, 0, 1);
        synthesize(catalog, &mut values, &mut watermarks);
        assert_eq!(values[&RegisterId::ProducedHeatingTotal], Some(Value::Integer(1000)));
        assert_eq!(lifetime(&values), Some(Value::Integer(1000)));

        // The day counter rolled over before the total caught up.
        let mut values = wpm_values(0, 980, 0);
        synthesize(catalog, &mut values, &mut watermarks);
        assert_eq!(values[&RegisterId::ProducedHeatingTotal], Some(Value::Integer(980)));
        assert_eq!(lifetime(&values), Some(Value::Integer(1000)));

        let mut values = wpm_values(50, 0, 1);
        synthesize(catalog, &mut values, &mut watermarks);
        assert_eq!(lifetime(&values), Some(Value::Integer(1050)));

        let mut values = wpm_values(0, 0, 0);
        synthesize(catalog, &mut values, &mut watermarks);
        assert_eq!(lifetime(&values), Some(Value::Integer(0)));
        assert_eq!(watermarks[&RegisterId::ProducedHeatingLifetime], 0);
    }

    #[test]
    fn unavailable_source_keeps_watermark() {
        let catalog = Family::Wpm.catalog();
        let mut watermarks = BTreeMap::from([(RegisterId::ProducedHeatingLifetime, 1000)]);
        let mut values = wpm_values(0, 0, 1);
        values.insert(RegisterId::ProducedHeatingToday, None);
        synthesize(catalog, &mut values, &mut watermarks);
        assert_eq!(lifetime(&values), None);
        assert_eq!(values[&RegisterId::ProducedHeatingTotal], Some(Value::Integer(1000)));
        assert_eq!(watermarks[&RegisterId::ProducedHeatingLifetime], 1000);

        let mut values = wpm_values(10, 980, 0);
        synthesize(catalog, &mut values, &mut watermarks);
        assert_eq!(lifetime(&values), Some(Value::Integer(1000)));
    }

    #[test]
    fn compressor_starts_need_both_words() {
        let catalog = Family::Lwz.catalog();
        let mut watermarks = BTreeMap::new();
        let mut values = BTreeMap::from([
            (RegisterId::CompressorStartsHigh, Some(Value::Integer(12))),
            (RegisterId::CompressorStartsLow, Some(Value::Integer(345))),
        ]);
        synthesize(catalog, &mut values, &mut watermarks);
        assert_eq!(values[&RegisterId::CompressorStarts], Some(Value::Integer(12_345)));
        assert!(!watermarks.contains_key(&RegisterId::CompressorStarts));

        values.insert(RegisterId::CompressorStartsLow, None);
        synthesize(catalog, &mut values, &mut watermarks);
        assert_eq!(values[&RegisterId::CompressorStarts], None);
    }
}
