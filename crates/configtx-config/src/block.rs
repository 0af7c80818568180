//! Configuration block envelope
//!
//! A configuration block nests the channel config three messages deep:
//!
//! ```text
//! Block.data.data[0] ──▶ Payload.data ──▶ Config
//! ```
//!
//! [`ConfigBlock`] peels those layers on decode and puts them back on encode,
//! leaving every field it does not own untouched.

use crate::configtx::ConfigTx;
use crate::error::{BlockError, DecodeStage};
use configtx_protos::{Block, Config, Message, Payload};

/// A decoded configuration block with its config under update
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigBlock {
    block: Block,
    payload: Payload,
    config: ConfigTx,
}

impl ConfigBlock {
    /// Decode block bytes down to the channel config
    ///
    /// # Errors
    /// - `BlockError::Decode` naming the layer that failed
    /// - `BlockError::MissingData` if the block has no data entries
    pub fn decode(bytes: &[u8]) -> Result<Self, BlockError> {
        let block =
            Block::decode(bytes).map_err(|e| BlockError::decode(DecodeStage::Block, e))?;

        let entry = block
            .data
            .as_ref()
            .and_then(|data| data.data.first())
            .ok_or(BlockError::MissingData)?;

        let payload = Payload::decode(entry.as_slice())
            .map_err(|e| BlockError::decode(DecodeStage::Payload, e))?;

        let config = Config::decode(payload.data.as_slice())
            .map_err(|e| BlockError::decode(DecodeStage::Config, e))?;

        tracing::trace!(
            sequence = config.sequence,
            payload_len = entry.len(),
            "decoded configuration block"
        );

        Ok(Self {
            block,
            payload,
            config: ConfigTx::new(config),
        })
    }

    /// Re-encode the block carrying the updated config
    ///
    /// The block header is carried over as-is; its data hash is not
    /// recomputed.
    #[must_use]
    pub fn encode(&self) -> Vec<u8> {
        let mut payload = self.payload.clone();
        payload.data = self.config.updated().encode_to_vec();

        let mut block = self.block.clone();
        if let Some(first) = block.data.as_mut().and_then(|data| data.data.first_mut()) {
            *first = payload.encode_to_vec();
        }
        block.encode_to_vec()
    }

    /// Config under update
    #[inline]
    #[must_use]
    pub fn config(&self) -> &ConfigTx {
        &self.config
    }

    /// Mutable config under update
    #[inline]
    pub fn config_mut(&mut self) -> &mut ConfigTx {
        &mut self.config
    }

    /// Block number from the header, if present
    #[inline]
    #[must_use]
    pub fn number(&self) -> Option<u64> {
        self.block.header.as_ref().map(|header| header.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::Address;
    use configtx_protos::{BlockData, BlockMetadata};
    use configtx_test_utils::{block_bytes, minimal_config, payload_bytes, ORG1};
    use pretty_assertions::assert_eq;

    #[test]
    fn decode_minimal_block() {
        let block = ConfigBlock::decode(&block_bytes(&minimal_config())).unwrap();

        assert_eq!(block.config().original(), &minimal_config());
        assert_eq!(block.config().orderer_org_names(), vec![ORG1]);
    }

    #[test]
    fn garbage_fails_at_block_stage() {
        let err = ConfigBlock::decode(b"not a protobuf block").unwrap_err();
        assert_eq!(err.stage(), DecodeStage::Block);
    }

    #[test]
    fn empty_block_has_no_data() {
        let err = ConfigBlock::decode(&[]).unwrap_err();
        assert!(matches!(err, BlockError::MissingData));

        let empty_data = Block {
            data: Some(BlockData { data: Vec::new() }),
            ..Block::default()
        };
        let err = ConfigBlock::decode(&empty_data.encode_to_vec()).unwrap_err();
        assert!(matches!(err, BlockError::MissingData));
    }

    #[test]
    fn garbage_entry_fails_at_payload_stage() {
        let block = Block {
            data: Some(BlockData {
                data: vec![b"not a payload".to_vec()],
            }),
            ..Block::default()
        };

        let err = ConfigBlock::decode(&block.encode_to_vec()).unwrap_err();
        assert_eq!(err.stage(), DecodeStage::Payload);
    }

    #[test]
    fn garbage_body_fails_at_config_stage() {
        let payload = Payload {
            header: None,
            data: b"not a config".to_vec(),
        };
        let block = Block {
            data: Some(BlockData {
                data: vec![payload.encode_to_vec()],
            }),
            ..Block::default()
        };

        let err = ConfigBlock::decode(&block.encode_to_vec()).unwrap_err();
        assert_eq!(err.stage(), DecodeStage::Config);
    }

    #[test]
    fn unmodified_block_reencodes_identically() {
        let bytes = block_bytes(&minimal_config());
        let block = ConfigBlock::decode(&bytes).unwrap();
        assert_eq!(block.encode(), bytes);
    }

    #[test]
    fn encode_carries_update_and_metadata() {
        let mut raw = Block::decode(block_bytes(&minimal_config()).as_slice()).unwrap();
        raw.metadata = Some(BlockMetadata {
            metadata: vec![b"sig".to_vec()],
        });
        raw.data
            .as_mut()
            .unwrap()
            .data
            .push(payload_bytes(&Config::default()));

        let mut block = ConfigBlock::decode(&raw.encode_to_vec()).unwrap();
        block
            .config_mut()
            .set_orderer_endpoint(ORG1, &Address::new("127.0.0.1", 8080))
            .unwrap();

        let reread = ConfigBlock::decode(&block.encode()).unwrap();
        assert_eq!(reread.config().original(), block.config().updated());
        assert_eq!(reread.block.metadata, raw.metadata);
        assert_eq!(reread.block.data.as_ref().unwrap().data.len(), 2);
        assert_eq!(reread.number(), Some(0));
    }
}
