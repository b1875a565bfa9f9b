// RFMF container format: record header parsing and writing
//
// A container is a plain concatenation of records. Each record is:
//
// - bytes 0..4: magic `RFMF`
// - bytes 4..8: header size (u32 LE), the payload starts here
// - bytes 8..16: record size including header (u64 LE)
// - bytes 16..20: rank (u32 LE)
// - `rank` x u32 LE dimension sizes
// - NUL-terminated name, then padding up to the header size
// - payload: little-endian f32 values

use std::io::{self, Write};

use crate::NnError;

pub const MAGIC: [u8; 4] = *b"RFMF";

/// Size of the fixed part of a record header (magic, sizes, rank).
pub const FIXED_HEADER_SIZE: usize = 20;

/// Headers written by [`StoreBuilder`] are padded to this boundary.
pub const HEADER_ALIGN: usize = 64;

/// Parsed header of one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordHeader {
    pub header_size: u32,
    pub record_size: u64,
    pub shape: Vec<u32>,
    pub name: String,
}

impl RecordHeader {
    /// Number of f32 values the shape describes.
    pub fn element_count(&self) -> Option<usize> {
        self.shape
            .iter()
            .try_fold(1usize, |acc, &d| acc.checked_mul(d as usize))
    }

    /// Payload byte range relative to the record start.
    pub fn payload_range(&self) -> std::ops::Range<usize> {
        self.header_size as usize..self.record_size as usize
    }
}

fn read_u32(data: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([data[at], data[at + 1], data[at + 2], data[at + 3]])
}

fn read_u64(data: &[u8], at: usize) -> u64 {
    let mut b = [0u8; 8];
    b.copy_from_slice(&data[at..at + 8]);
    u64::from_le_bytes(b)
}

/// Parses the record starting at `offset`.
///
/// Returns `Ok(None)` at the end of the collection: when fewer than four
/// bytes remain, or when the record carries an empty name.
pub fn parse_record(data: &[u8], offset: usize) -> Result<Option<RecordHeader>, NnError> {
    let rest = data.get(offset..).unwrap_or_default();
    if rest.len() < MAGIC.len() {
        return Ok(None);
    }
    if rest[..4] != MAGIC {
        return Err(NnError::InvalidMagic { offset });
    }
    if rest.len() < FIXED_HEADER_SIZE {
        return Err(NnError::TruncatedRecord { offset });
    }

    let header_size = read_u32(rest, 4);
    let record_size = read_u64(rest, 8);
    let rank = read_u32(rest, 16) as usize;

    let header_len = header_size as usize;
    let name_start = FIXED_HEADER_SIZE + rank * 4;
    if header_len > rest.len() {
        return Err(NnError::TruncatedRecord { offset });
    }
    if name_start >= header_len {
        return Err(NnError::InvalidRecord {
            offset,
            reason: format!("header size {header_size} too small for rank {rank}"),
        });
    }
    if record_size < header_size as u64 {
        return Err(NnError::InvalidRecord {
            offset,
            reason: format!("record size {record_size} smaller than header size {header_size}"),
        });
    }
    if record_size > rest.len() as u64 {
        return Err(NnError::TruncatedRecord { offset });
    }

    let shape = (0..rank)
        .map(|i| read_u32(rest, FIXED_HEADER_SIZE + i * 4))
        .collect();

    let name_bytes = &rest[name_start..header_len];
    let Some(nul) = name_bytes.iter().position(|&b| b == 0) else {
        return Err(NnError::InvalidRecord {
            offset,
            reason: "unterminated name".into(),
        });
    };
    let name = std::str::from_utf8(&name_bytes[..nul])
        .map_err(|e| NnError::InvalidRecord {
            offset,
            reason: format!("name is not UTF-8: {e}"),
        })?
        .to_string();
    if name.is_empty() {
        return Ok(None);
    }

    let header = RecordHeader {
        header_size,
        record_size,
        shape,
        name,
    };
    let needed = header
        .element_count()
        .and_then(|n| n.checked_mul(4))
        .ok_or_else(|| NnError::InvalidRecord {
            offset,
            reason: "shape overflows".into(),
        })?;
    if header.payload_range().len() < needed {
        return Err(NnError::InvalidRecord {
            offset,
            reason: format!(
                "payload has {} bytes, shape {:?} needs {needed}",
                header.payload_range().len(),
                header.shape
            ),
        });
    }
    Ok(Some(header))
}

/// Serializes named tensors into an RFMF container.
#[derive(Debug, Default)]
pub struct StoreBuilder {
    buf: Vec<u8>,
}

impl StoreBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one record. `data` is column-major and must hold exactly
    /// the number of values `shape` describes.
    pub fn add(&mut self, name: &str, shape: &[u32], data: &[f32]) -> &mut Self {
        let count: usize = shape.iter().map(|&d| d as usize).product();
        debug_assert_eq!(count, data.len(), "shape {shape:?} does not match data for {name}");

        let unpadded = FIXED_HEADER_SIZE + shape.len() * 4 + name.len() + 1;
        let header_size = unpadded.div_ceil(HEADER_ALIGN) * HEADER_ALIGN;
        let record_size = header_size + data.len() * 4;

        let start = self.buf.len();
        self.buf.extend_from_slice(&MAGIC);
        self.buf.extend_from_slice(&(header_size as u32).to_le_bytes());
        self.buf.extend_from_slice(&(record_size as u64).to_le_bytes());
        self.buf.extend_from_slice(&(shape.len() as u32).to_le_bytes());
        for &d in shape {
            self.buf.extend_from_slice(&d.to_le_bytes());
        }
        self.buf.extend_from_slice(name.as_bytes());
        self.buf.resize(start + header_size, 0);
        for &v in data {
            self.buf.extend_from_slice(&v.to_le_bytes());
        }
        self
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn finish(self) -> Vec<u8> {
        self.buf
    }

    pub fn write_to<W: Write>(&self, mut out: W) -> io::Result<()> {
        out.write_all(&self.buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_record() -> Vec<u8> {
        let mut b = StoreBuilder::new();
        b.add("emb/LayerNorm/beta:0", &[3], &[1.0, 2.0, 3.0]);
        b.finish()
    }

    #[test]
    fn parse_written_record() {
        let data = one_record();
        let header = parse_record(&data, 0).unwrap().unwrap();
        assert_eq!(header.name, "emb/LayerNorm/beta:0");
        assert_eq!(header.shape, vec![3]);
        assert_eq!(header.header_size as usize % HEADER_ALIGN, 0);
        assert_eq!(header.record_size as usize, data.len());
        assert_eq!(header.element_count(), Some(3));
        assert_eq!(header.payload_range().len(), 12);
    }

    #[test]
    fn end_of_collection() {
        let data = one_record();
        assert_eq!(parse_record(&data, data.len()).unwrap(), None);
        assert_eq!(parse_record(&data, data.len() + 10).unwrap(), None);
        assert_eq!(parse_record(&[b'R', b'F'], 0).unwrap(), None);
    }

    #[test]
    fn reject_invalid_magic() {
        let mut data = one_record();
        data[0] = b'X';
        assert!(matches!(
            parse_record(&data, 0),
            Err(NnError::InvalidMagic { offset: 0 })
        ));
    }

    #[test]
    fn reject_truncated_payload() {
        let mut data = one_record();
        data.truncate(data.len() - 2);
        assert!(matches!(
            parse_record(&data, 0),
            Err(NnError::TruncatedRecord { offset: 0 })
        ));
    }

    #[test]
    fn reject_truncated_fixed_header() {
        let data = b"RFMF\x40\x00\x00\x00";
        assert!(matches!(
            parse_record(data, 0),
            Err(NnError::TruncatedRecord { .. })
        ));
    }

    #[test]
    fn reject_payload_smaller_than_shape() {
        let mut data = one_record();
        // claim a 4-element vector in a 3-element payload
        data[20..24].copy_from_slice(&4u32.to_le_bytes());
        assert!(matches!(
            parse_record(&data, 0),
            Err(NnError::InvalidRecord { .. })
        ));
    }

    #[test]
    fn reject_unterminated_name() {
        let mut data = one_record();
        let header_size = read_u32(&data, 4) as usize;
        for b in &mut data[24..header_size] {
            *b = b'a';
        }
        assert!(matches!(
            parse_record(&data, 0),
            Err(NnError::InvalidRecord { .. })
        ));
    }

    #[test]
    fn second_record_follows_first() {
        let mut b = StoreBuilder::new();
        b.add("a", &[1], &[0.5]).add("b", &[2, 2], &[1.0, 2.0, 3.0, 4.0]);
        let data = b.finish();
        let first = parse_record(&data, 0).unwrap().unwrap();
        let second = parse_record(&data, first.record_size as usize)
            .unwrap()
            .unwrap();
        assert_eq!(second.name, "b");
        assert_eq!(second.shape, vec![2, 2]);
    }
}
