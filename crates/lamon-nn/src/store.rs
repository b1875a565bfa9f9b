// Tensor store: named float tensors indexed from an RFMF container
//
// The container is memory-mapped and tensors are served as slices into
// the mapping. Payloads that are not 4-byte aligned (or any payload on a
// big-endian host) are decoded into an owned buffer at load time.

use std::fs::File;
use std::ops::{Deref, Range};
use std::path::Path;

use hashbrown::HashMap;
use memmap2::Mmap;

use crate::NnError;
use crate::format;
use crate::tensor::Matrix;

enum Buffer {
    Mapped(Mmap),
    Owned(Vec<u8>),
}

impl Deref for Buffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        match self {
            Buffer::Mapped(m) => m,
            Buffer::Owned(v) => v,
        }
    }
}

enum Payload {
    /// Byte range inside the buffer, already checked to be f32-aligned.
    InPlace(Range<usize>),
    Copied(Vec<f32>),
}

struct Entry {
    shape: Vec<u32>,
    payload: Payload,
}

/// Read-only collection of named tensors.
pub struct TensorStore {
    buffer: Buffer,
    entries: HashMap<String, Entry>,
}

impl std::fmt::Debug for TensorStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TensorStore")
            .field("bytes", &self.buffer.len())
            .field("tensors", &self.entries.len())
            .field("mapped", &matches!(self.buffer, Buffer::Mapped(_)))
            .finish()
    }
}

impl TensorStore {
    /// Memory-maps the file at `path` and indexes its records.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, NnError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let buffer = if file.metadata()?.len() == 0 {
            Buffer::Owned(Vec::new())
        } else {
            // SAFETY: the mapping is read-only and the store never hands out
            // mutable access. Concurrent truncation of the file by another
            // process is outside what we can guard against.
            Buffer::Mapped(unsafe { Mmap::map(&file)? })
        };
        let store = Self::index(buffer)?;
        tracing::info!(
            path = %path.display(),
            tensors = store.len(),
            bytes = store.buffer.len(),
            "loaded tensor store"
        );
        Ok(store)
    }

    /// Indexes an in-memory container.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, NnError> {
        Self::index(Buffer::Owned(bytes))
    }

    fn index(buffer: Buffer) -> Result<Self, NnError> {
        let mut entries = HashMap::new();
        let mut offset = 0usize;
        while let Some(header) = format::parse_record(&buffer, offset)? {
            let count = header.element_count().unwrap_or_default();
            let range = header.payload_range();
            let start = offset + range.start;
            let bytes = &buffer[start..start + count * 4];

            let payload = if cfg!(target_endian = "little")
                && bytemuck::try_cast_slice::<u8, f32>(bytes).is_ok()
            {
                Payload::InPlace(start..start + count * 4)
            } else {
                Payload::Copied(
                    bytes
                        .chunks_exact(4)
                        .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
                        .collect(),
                )
            };

            tracing::debug!(
                name = %header.name,
                shape = ?header.shape,
                copied = matches!(payload, Payload::Copied(_)),
                "indexed tensor"
            );
            entries.insert(
                header.name,
                Entry {
                    shape: header.shape,
                    payload,
                },
            );
            offset += header.record_size as usize;
        }
        Ok(Self { buffer, entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Names of all tensors, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Looks up a tensor by exact name.
    pub fn get(&self, name: &str) -> Result<TensorView<'_>, NnError> {
        let (key, entry) = self
            .entries
            .get_key_value(name)
            .ok_or_else(|| NnError::KeyNotFound(name.to_string()))?;
        let data: &[f32] = match &entry.payload {
            Payload::InPlace(range) => bytemuck::try_cast_slice(&self.buffer[range.clone()])
                .map_err(|e| NnError::InvalidRecord {
                    offset: range.start,
                    reason: e.to_string(),
                })?,
            Payload::Copied(values) => values,
        };
        Ok(TensorView {
            name: key,
            shape: &entry.shape,
            data,
        })
    }
}

/// A named tensor borrowed from a [`TensorStore`].
#[derive(Debug, Clone, Copy)]
pub struct TensorView<'a> {
    name: &'a str,
    shape: &'a [u32],
    data: &'a [f32],
}

impl<'a> TensorView<'a> {
    pub fn name(&self) -> &'a str {
        self.name
    }

    pub fn shape(&self) -> &'a [u32] {
        self.shape
    }

    pub fn data(&self) -> &'a [f32] {
        self.data
    }

    /// The tensor as a vector. Fails unless it is 1-D.
    pub fn vector(&self) -> Result<&'a [f32], NnError> {
        if self.shape.len() != 1 {
            return Err(NnError::shape(self.name, "rank 1", self.shape));
        }
        Ok(self.data)
    }

    /// The tensor as a matrix. Fails unless it is 2-D.
    pub fn matrix(&self) -> Result<Matrix<'a>, NnError> {
        if self.shape.len() != 2 {
            return Err(NnError::shape(self.name, "rank 2", self.shape));
        }
        self.slice_matrix(0)
    }

    /// Slice `index` along the last axis of a 3-D tensor.
    pub fn matrix_at(&self, index: usize) -> Result<Matrix<'a>, NnError> {
        if self.shape.len() != 3 {
            return Err(NnError::shape(self.name, "rank 3", self.shape));
        }
        if index >= self.shape[2] as usize {
            return Err(NnError::shape(
                self.name,
                format!("at least {} slices", index + 1),
                self.shape,
            ));
        }
        self.slice_matrix(index)
    }

    fn slice_matrix(&self, index: usize) -> Result<Matrix<'a>, NnError> {
        let rows = self.shape[0] as usize;
        let cols = self.shape[1] as usize;
        let stride = rows * cols;
        self.data
            .get(stride * index..stride * (index + 1))
            .and_then(|d| Matrix::new(d, rows, cols))
            .ok_or_else(|| NnError::shape(self.name, "matching payload", self.shape))
    }
}
