//! Block and payload envelopes

/// A ledger block. Configuration blocks carry exactly one data entry.
#[derive(Clone, PartialEq, prost::Message)]
pub struct Block {
    /// Position in the chain
    #[prost(message, optional, tag = "1")]
    pub header: Option<BlockHeader>,
    /// Block entries
    #[prost(message, optional, tag = "2")]
    pub data: Option<BlockData>,
    /// Per-block metadata, carried through untouched
    #[prost(message, optional, tag = "3")]
    pub metadata: Option<BlockMetadata>,
}

/// Block position and hash chain links
#[derive(Clone, PartialEq, prost::Message)]
pub struct BlockHeader {
    /// Height of the block
    #[prost(uint64, tag = "1")]
    pub number: u64,
    /// Header hash of the previous block
    #[prost(bytes = "vec", tag = "2")]
    pub previous_hash: Vec<u8>,
    /// Hash over the block data
    #[prost(bytes = "vec", tag = "3")]
    pub data_hash: Vec<u8>,
}

/// Serialized entries of a block
#[derive(Clone, PartialEq, prost::Message)]
pub struct BlockData {
    /// Serialized entries; a config block has one payload
    #[prost(bytes = "vec", repeated, tag = "1")]
    pub data: Vec<Vec<u8>>,
}

/// Opaque per-block metadata (signatures, commit hashes)
#[derive(Clone, PartialEq, prost::Message)]
pub struct BlockMetadata {
    /// Opaque metadata entries
    #[prost(bytes = "vec", repeated, tag = "1")]
    pub metadata: Vec<Vec<u8>>,
}

/// A block entry: header plus body bytes
#[derive(Clone, PartialEq, prost::Message)]
pub struct Payload {
    /// Channel and signature headers
    #[prost(message, optional, tag = "1")]
    pub header: Option<Header>,
    /// Body bytes; a serialized `Config` for config blocks
    #[prost(bytes = "vec", tag = "2")]
    pub data: Vec<u8>,
}

/// Serialized channel and signature headers, kept opaque.
#[derive(Clone, PartialEq, prost::Message)]
pub struct Header {
    /// Serialized channel header
    #[prost(bytes = "vec", tag = "1")]
    pub channel_header: Vec<u8>,
    /// Serialized signature header
    #[prost(bytes = "vec", tag = "2")]
    pub signature_header: Vec<u8>,
}
