//! The result of one poll cycle.

use crate::blocks;
use crate::codec::Value;
use crate::registers::{Family, RegisterCatalog, RegisterId, RegisterKind};
use crate::synth;
use std::collections::BTreeMap;

/// Raw words of one block as they were received, kept for diagnostics.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct BlockWords {
    pub name: &'static str,
    pub kind: RegisterKind,
    pub first: u16,
    /// `None` if the block could not be read.
    pub words: Option<Vec<u16>>,
}

/// Values of every register of a catalog at the end of a poll cycle.
///
/// Snapshots are never modified once published. A newer snapshot replaces the older one instead.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct Snapshot {
    cycle: u64,
    family: Option<Family>,
    values: BTreeMap<RegisterId, Option<Value>>,
    #[serde(skip)]
    blocks: Vec<BlockWords>,
    /// Last value published for every monotonic register.
    #[serde(skip)]
    watermarks: BTreeMap<RegisterId, i64>,
}

impl Snapshot {
    /// Decode the words read in a cycle and derive the virtual registers.
    ///
    /// The monotonic registers are guarded against the values `previous` has published.
    pub fn assemble(
        catalog: &RegisterCatalog,
        words: Vec<Option<Vec<u16>>>,
        previous: &Snapshot,
    ) -> Self {
        let mut values = blocks::decode_all(catalog, &words);
        let mut watermarks = if previous.family == Some(catalog.family()) {
            previous.watermarks.clone()
        } else {
            BTreeMap::new()
        };
        synth::synthesize(catalog, &mut values, &mut watermarks);
        let blocks = catalog
            .blocks()
            .iter()
            .zip(words)
            .map(|(block, words)| BlockWords {
                name: block.name,
                kind: block.kind,
                first: block.first,
                words,
            })
            .collect();
        Self {
            cycle: previous.cycle + 1,
            family: Some(catalog.family()),
            values,
            blocks,
            watermarks,
        }
    }

    /// A copy of this snapshot with one register replaced.
    pub fn with_value(&self, id: RegisterId, value: Option<Value>) -> Self {
        let mut result = self.clone();
        result.values.insert(id, value);
        result
    }

    /// Number of the poll cycle that produced this snapshot, `0` before the first one.
    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    pub fn family(&self) -> Option<Family> {
        self.family
    }

    pub fn get(&self, id: RegisterId) -> Option<Value> {
        self.values.get(&id).copied().flatten()
    }

    pub fn values(&self) -> impl Iterator<Item = (RegisterId, Option<Value>)> + '_ {
        self.values.iter().map(|(&id, &value)| (id, value))
    }

    pub fn blocks(&self) -> &[BlockWords] {
        &self.blocks
    }

    pub fn watermark(&self, id: RegisterId) -> Option<i64> {
        self.watermarks.get(&id).copied()
    }

    /// Whether any block failed to read in this cycle.
    pub fn is_degraded(&self) -> bool {
        self.blocks.iter().any(|b| b.words.is_none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(catalog: &RegisterCatalog, fill: u16) -> Vec<Option<Vec<u16>>> {
        catalog.blocks().iter().map(|b| Some(vec![fill; usize::from(b.count)])).collect()
    }

    #[test]
    fn cycles_count_up_and_keep_watermarks() {
        let catalog = Family::Lwz.catalog();
        let first = Snapshot::assemble(catalog, words(catalog, 1), &Snapshot::default());
        assert_eq!(first.cycle(), 1);
        assert_eq!(first.family(), Some(Family::Lwz));
        assert!(!first.is_degraded());
        assert_eq!(first.get(RegisterId::ProducedHeatingLifetime), Some(Value::Integer(1002)));
        assert_eq!(first.watermark(RegisterId::ProducedHeatingLifetime), Some(1002));

        let mut degraded = words(catalog, 1);
        let energy = catalog.descriptor(RegisterId::ProducedHeatingToday).unwrap().block;
        degraded[energy.index()] = None;
        let second = Snapshot::assemble(catalog, degraded, &first);
        assert_eq!(second.cycle(), 2);
        assert!(second.is_degraded());
        assert_eq!(second.get(RegisterId::ProducedHeatingLifetime), None);
        assert_eq!(second.watermark(RegisterId::ProducedHeatingLifetime), Some(1002));
        assert_eq!(second.blocks()[energy.index()].words, None);
    }

    #[test]
    fn watermarks_do_not_cross_families() {
        let lwz = Family::Lwz.catalog();
        let wpm = Family::Wpm.catalog();
        let first = Snapshot::assemble(lwz, words(lwz, 1), &Snapshot::default());
        let second = Snapshot::assemble(wpm, words(wpm, 0), &first);
        assert_eq!(second.get(RegisterId::ProducedHeatingLifetime), Some(Value::Integer(0)));
    }

    #[test]
    fn with_value_replaces_one_register() {
        let catalog = Family::Wpm.catalog();
        let snapshot = Snapshot::assemble(catalog, words(catalog, 200), &Snapshot::default());
        let updated = snapshot.with_value(RegisterId::ComfortTemperatureHk1, Some(Value::Decimal(22.5)));
        assert_eq!(updated.get(RegisterId::ComfortTemperatureHk1), Some(Value::Decimal(22.5)));
        assert_eq!(updated.get(RegisterId::EcoTemperatureHk1), Some(Value::Decimal(20.0)));
        assert_eq!(updated.cycle(), snapshot.cycle());
        assert_eq!(snapshot.get(RegisterId::ComfortTemperatureHk1), Some(Value::Decimal(20.0)));
    }

    #[test]
    fn serializes_values_by_name() {
        let catalog = Family::Wpm.catalog();
        let snapshot = Snapshot::assemble(catalog, words(catalog, 0x8000), &Snapshot::default());
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["family"], "WPM");
        assert_eq!(json["cycle"], 1);
        assert!(json["values"]["OUTSIDE_TEMPERATURE"].is_null());
        assert_eq!(json["values"]["IS_HEATING"], false);
    }
}
