use std::io::{self, Read};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("header truncated at `{field}` (offset {offset:#04X})")]
    Truncated { field: &'static str, offset: usize },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type DecodeResult<T> = Result<T, DecodeError>;

pub const HEADER_LEN: usize = 0x40;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FieldKind {
    /// Opaque bytes, copied verbatim.
    Bytes,
    /// 32-bit word stored big-endian.
    WordBe,
}

#[derive(Clone, Copy, Debug)]
pub struct FieldSpec {
    pub name: &'static str,
    pub offset: usize,
    pub len: usize,
    pub kind: FieldKind,
}

/// Wire layout of the ROM header. Fields are read in this order from a
/// contiguous stream; offsets are contiguous and total [`HEADER_LEN`].
pub const LAYOUT: [FieldSpec; 14] = [
    FieldSpec { name: "domain1_reg", offset: 0x00, len: 4, kind: FieldKind::Bytes },
    FieldSpec { name: "clock_rate", offset: 0x04, len: 4, kind: FieldKind::WordBe },
    FieldSpec { name: "entry_point", offset: 0x08, len: 4, kind: FieldKind::WordBe },
    FieldSpec { name: "revision", offset: 0x0C, len: 4, kind: FieldKind::WordBe },
    FieldSpec { name: "checksum1", offset: 0x10, len: 4, kind: FieldKind::WordBe },
    FieldSpec { name: "checksum2", offset: 0x14, len: 4, kind: FieldKind::WordBe },
    FieldSpec { name: "unknown1", offset: 0x18, len: 4, kind: FieldKind::WordBe },
    FieldSpec { name: "unknown2", offset: 0x1C, len: 4, kind: FieldKind::WordBe },
    FieldSpec { name: "name", offset: 0x20, len: 20, kind: FieldKind::Bytes },
    FieldSpec { name: "unknown3", offset: 0x34, len: 4, kind: FieldKind::WordBe },
    FieldSpec { name: "cart", offset: 0x38, len: 4, kind: FieldKind::WordBe },
    FieldSpec { name: "cart_id", offset: 0x3C, len: 2, kind: FieldKind::Bytes },
    FieldSpec { name: "region", offset: 0x3E, len: 1, kind: FieldKind::Bytes },
    FieldSpec { name: "version", offset: 0x3F, len: 1, kind: FieldKind::Bytes },
];

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RomHeader {
    pub domain1_reg: [u8; 4],
    pub clock_rate: u32,
    pub entry_point: u32,
    pub revision: u32,
    pub checksum1: u32,
    pub checksum2: u32,
    pub unknown1: u32,
    pub unknown2: u32,
    pub name: [u8; 20],
    pub unknown3: u32,
    pub cart: u32,
    pub cart_id: [u8; 2],
    pub region: u8,
    pub version: u8,
}

impl RomHeader {
    /// Reads the header from `rdr`, which must be positioned at the start
    /// of the image. Exactly [`HEADER_LEN`] bytes are consumed, one
    /// `read_exact` per [`LAYOUT`] field; a short read is fatal.
    pub fn decode<R: Read>(mut rdr: R) -> DecodeResult<Self> {
        let mut raw = [0; HEADER_LEN];

        for field in &LAYOUT {
            let dst = &mut raw[field.offset..field.offset + field.len];
            rdr.read_exact(dst).map_err(|e| match e.kind() {
                io::ErrorKind::UnexpectedEof => DecodeError::Truncated {
                    field: field.name,
                    offset: field.offset,
                },
                _ => DecodeError::Io(e),
            })?;
        }

        Ok(Self::from_raw(&raw))
    }

    // Offsets mirror LAYOUT; `layout_matches_from_raw` ties the two.
    fn from_raw(raw: &[u8; HEADER_LEN]) -> Self {
        let mut domain1_reg = [0; 4];
        domain1_reg.copy_from_slice(&raw[0x00..0x04]);

        let mut name = [0; 20];
        name.copy_from_slice(&raw[0x20..0x34]);

        let mut cart_id = [0; 2];
        cart_id.copy_from_slice(&raw[0x3C..0x3E]);

        Self {
            domain1_reg,
            clock_rate: word_be(raw, 0x04),
            entry_point: word_be(raw, 0x08),
            revision: word_be(raw, 0x0C),
            checksum1: word_be(raw, 0x10),
            checksum2: word_be(raw, 0x14),
            unknown1: word_be(raw, 0x18),
            unknown2: word_be(raw, 0x1C),
            name,
            unknown3: word_be(raw, 0x34),
            cart: word_be(raw, 0x38),
            cart_id,
            region: raw[0x3E],
            version: raw[0x3F],
        }
    }
}

fn word_be(raw: &[u8], offset: usize) -> u32 {
    u32::from_be_bytes([
        raw[offset],
        raw[offset + 1],
        raw[offset + 2],
        raw[offset + 3],
    ])
}
