//! Batched reads of a catalog, one request per contiguous register range.

use crate::codec::Value;
use crate::connection::Transport;
use crate::modbus::MAX_READ_COUNT;
use crate::registers::{RegisterCatalog, RegisterDescriptor, RegisterId, RegisterKind};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, warn};

/// A range of registers of one kind read with a single request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterBlock {
    pub name: &'static str,
    pub kind: RegisterKind,
    /// 1-based address of the first register in the block.
    pub first: u16,
    pub count: u16,
}

impl RegisterBlock {
    pub fn contains(&self, address: u16) -> bool {
        address >= self.first && u32::from(address) < u32::from(self.first) + u32::from(self.count)
    }

    /// Word at `address` among the words read for this block.
    pub fn word(&self, words: &[u16], address: u16) -> Option<u16> {
        if !self.contains(address) {
            return None;
        }
        words.get(usize::from(address - self.first)).copied()
    }
}

/// Split the given addresses into maximal contiguous ranges that fit into one read request.
pub fn plan(
    name: &'static str,
    kind: RegisterKind,
    addresses: impl IntoIterator<Item = u16>,
) -> Vec<RegisterBlock> {
    let addresses = addresses.into_iter().collect::<BTreeSet<_>>();
    let mut blocks = Vec::<RegisterBlock>::new();
    for address in addresses {
        match blocks.last_mut() {
            Some(block)
                if u32::from(block.first) + u32::from(block.count) == u32::from(address)
                    && block.count < MAX_READ_COUNT =>
            {
                block.count += 1;
            }
            _ => blocks.push(RegisterBlock {
                name,
                kind,
                first: address,
                count: 1,
            }),
        }
    }
    blocks
}

/// Read every block of the catalog in order.
///
/// The result holds one entry per [`RegisterCatalog::blocks`] element. A block the device refused
/// to serve (an exception response or a short read) is `None`. Any other failure aborts the whole
/// read, as the session can no longer be trusted.
pub async fn read_all<T: Transport>(
    transport: &mut T,
    catalog: &RegisterCatalog,
) -> Result<Vec<Option<Vec<u16>>>, crate::connection::Error> {
    let mut result = Vec::with_capacity(catalog.blocks().len());
    for block in catalog.blocks() {
        debug!(
            message = "reading block",
            block = block.name,
            kind = %block.kind,
            first = block.first,
            count = block.count
        );
        match transport.read_registers(block.kind, block.first, block.count).await {
            Ok(words) => result.push(Some(words)),
            Err(e) if e.is_block_local() => {
                warn!(
                    message = "block could not be read, its registers are unavailable",
                    block = block.name,
                    first = block.first,
                    error = (&e as &dyn std::error::Error)
                );
                result.push(None);
            }
            Err(e) => return Err(e),
        }
    }
    Ok(result)
}

/// Raw word behind a physical register, if its block was read.
pub fn raw_word(
    catalog: &RegisterCatalog,
    words: &[Option<Vec<u16>>],
    descriptor: &RegisterDescriptor,
) -> Option<u16> {
    let block = catalog.blocks().get(descriptor.block.index())?;
    let block_words = words.get(descriptor.block.index())?.as_deref()?;
    block.word(block_words, descriptor.address)
}

/// Decode every physical register of the catalog.
pub fn decode_all(
    catalog: &RegisterCatalog,
    words: &[Option<Vec<u16>>],
) -> BTreeMap<RegisterId, Option<Value>> {
    catalog
        .descriptors()
        .iter()
        .map(|descriptor| {
            let value = raw_word(catalog, words, descriptor).and_then(|raw| descriptor.decode(raw));
            (descriptor.id, value)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registers::Family;

    #[test]
    fn plan_splits_at_gaps() {
        let blocks = plan("test", RegisterKind::Holding, [5, 3, 4, 4, 10, 11]);
        let ranges = blocks.iter().map(|b| (b.first, b.count)).collect::<Vec<_>>();
        assert_eq!(ranges, [(3, 3), (10, 2)]);
    }

    #[test]
    fn plan_splits_at_request_limit() {
        let blocks = plan("test", RegisterKind::Input, 1..=300);
        let ranges = blocks.iter().map(|b| (b.first, b.count)).collect::<Vec<_>>();
        assert_eq!(ranges, [(1, 123), (124, 123), (247, 54)]);
    }

    #[test]
    fn plan_of_nothing_is_empty() {
        assert!(plan("test", RegisterKind::Input, []).is_empty());
    }

    #[test]
    fn word_lookup_is_bounded() {
        let block = RegisterBlock {
            name: "test",
            kind: RegisterKind::Input,
            first: 501,
            count: 3,
        };
        assert_eq!(block.word(&[7, 8, 9], 502), Some(8));
        assert_eq!(block.word(&[7, 8, 9], 504), None);
        assert_eq!(block.word(&[7], 503), None);
        assert_eq!(block.word(&[7, 8, 9], 500), None);
    }

    #[test]
    fn failed_block_only_affects_its_registers() {
        let catalog = Family::Wpm.catalog();
        let words = catalog
            .blocks()
            .iter()
            .map(|b| (b.name != "System State").then(|| vec![215; usize::from(b.count)]))
            .collect::<Vec<_>>();
        let values = decode_all(catalog, &words);
        assert_eq!(values[&RegisterId::OutsideTemperature], Some(Value::Decimal(21.5)));
        assert_eq!(values[&RegisterId::IsHeating], None);
        assert_eq!(values[&RegisterId::FaultStatus], None);
        assert_eq!(values[&RegisterId::ProducedHeatingToday], Some(Value::Integer(215)));
    }
}
