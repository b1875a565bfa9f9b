// Binary dictionary persistence
//
// Layout, all counts and lengths as varints:
//
// - lemma count, then each lemma as length + UTF-8 bytes
// - part-of-speech count, then one raw byte per lemma
// - form count, then per form in sorted order: length + UTF-8 bytes,
//   candidate count, and per candidate a u32 LE lemma id followed by the
//   four packed feature bytes
//
// Varints are big-endian base-128: every byte but the last has its high
// bit set.

use std::io::{self, Read, Write};

use hashbrown::HashMap;
use lamon_core::{Feature, LemmaInfo};

use super::{Dictionary, DictionaryError};

/// Upper bound for preallocation from untrusted counts.
const MAX_PREALLOC: usize = 1 << 16;

fn write_varint<W: Write>(out: &mut W, value: u64) -> io::Result<()> {
    let mut buf = [0u8; 10];
    let mut i = buf.len() - 1;
    let mut v = value;
    buf[i] = (v & 0x7F) as u8;
    v >>= 7;
    while v > 0 {
        i -= 1;
        buf[i] = 0x80 | (v & 0x7F) as u8;
        v >>= 7;
    }
    out.write_all(&buf[i..])
}

fn write_bytes<W: Write>(out: &mut W, bytes: &[u8]) -> io::Result<()> {
    write_varint(out, bytes.len() as u64)?;
    out.write_all(bytes)
}

fn read_exact<R: Read>(input: &mut R, buf: &mut [u8]) -> Result<(), DictionaryError> {
    input.read_exact(buf).map_err(|e| match e.kind() {
        io::ErrorKind::UnexpectedEof => DictionaryError::Truncated,
        _ => DictionaryError::Io(e),
    })
}

fn read_varint<R: Read>(input: &mut R) -> Result<u64, DictionaryError> {
    let mut value: u64 = 0;
    for _ in 0..10 {
        let mut b = [0u8; 1];
        read_exact(input, &mut b)?;
        if value > u64::MAX >> 7 {
            break;
        }
        value = (value << 7) | u64::from(b[0] & 0x7F);
        if b[0] & 0x80 == 0 {
            return Ok(value);
        }
    }
    Err(DictionaryError::InvalidFormat("varint overflows 64 bits".into()))
}

fn read_len<R: Read>(input: &mut R) -> Result<usize, DictionaryError> {
    let n = read_varint(input)?;
    usize::try_from(n).map_err(|_| DictionaryError::InvalidFormat(format!("length {n} too large")))
}

fn read_bytes<R: Read>(input: &mut R) -> Result<Vec<u8>, DictionaryError> {
    let len = read_len(input)?;
    let mut buf = Vec::with_capacity(len.min(MAX_PREALLOC));
    let read = input.by_ref().take(len as u64).read_to_end(&mut buf)?;
    if read < len {
        return Err(DictionaryError::Truncated);
    }
    Ok(buf)
}

fn read_string<R: Read>(input: &mut R) -> Result<String, DictionaryError> {
    String::from_utf8(read_bytes(input)?)
        .map_err(|e| DictionaryError::InvalidFormat(format!("string is not UTF-8: {e}")))
}

impl Dictionary {
    /// Serializes the dictionary. Forms are written in sorted order so the
    /// output is byte-for-byte reproducible.
    pub fn write_to<W: Write>(&self, mut out: W) -> Result<(), DictionaryError> {
        write_varint(&mut out, self.lemmas.len() as u64)?;
        for lemma in &self.lemmas {
            write_bytes(&mut out, lemma.as_bytes())?;
        }
        write_bytes(&mut out, &self.lemma_pos)?;

        let mut forms: Vec<(&String, &Vec<LemmaInfo>)> = self.forms.iter().collect();
        forms.sort_unstable_by(|a, b| a.0.cmp(b.0));
        write_varint(&mut out, forms.len() as u64)?;
        for (form, infos) in forms {
            write_bytes(&mut out, form.as_bytes())?;
            write_varint(&mut out, infos.len() as u64)?;
            for info in infos {
                out.write_all(&info.lemma_id.to_le_bytes())?;
                out.write_all(&info.feature.to_packed())?;
            }
        }
        Ok(())
    }

    /// Reads a dictionary written by [`Dictionary::write_to`].
    pub fn read_from<R: Read>(mut input: R) -> Result<Self, DictionaryError> {
        let lemma_count = read_len(&mut input)?;
        let mut lemmas = Vec::with_capacity(lemma_count.min(MAX_PREALLOC));
        for _ in 0..lemma_count {
            lemmas.push(read_string(&mut input)?);
        }

        let mut lemma_pos = read_bytes(&mut input)?;
        lemma_pos.resize(lemmas.len(), 0);

        let form_count = read_len(&mut input)?;
        let mut forms = HashMap::with_capacity(form_count.min(MAX_PREALLOC));
        for _ in 0..form_count {
            let form = read_string(&mut input)?;
            let n = read_len(&mut input)?;
            let mut infos = Vec::with_capacity(n.min(MAX_PREALLOC));
            for _ in 0..n {
                let mut rec = [0u8; 8];
                read_exact(&mut input, &mut rec)?;
                let lemma_id = u32::from_le_bytes([rec[0], rec[1], rec[2], rec[3]]);
                if lemma_id as usize >= lemmas.len() {
                    return Err(DictionaryError::InvalidFormat(format!(
                        "form '{form}' refers to lemma {lemma_id} of {}",
                        lemmas.len()
                    )));
                }
                let feature = Feature::from_packed([rec[4], rec[5], rec[6], rec[7]]);
                infos.push(LemmaInfo::new(lemma_id, feature));
            }
            forms.insert(form, infos);
        }

        let mut dict = Dictionary {
            lemmas,
            lemma_pos,
            forms,
            ..Default::default()
        };
        dict.reindex();
        Ok(dict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dictionary {
        Dictionary::from_text(
            "rosa\namo\n[NUM]\n".as_bytes(),
            "rosae\trosa\tfsg\tn\n\
             rosae\trosa\tfpo\tn\n\
             amat\tamo\tIRMA3s\tv\n\
             puellam\tpuella\tfsa\tn\n"
                .as_bytes(),
        )
        .unwrap()
    }

    fn bytes_of(d: &Dictionary) -> Vec<u8> {
        let mut out = Vec::new();
        d.write_to(&mut out).unwrap();
        out
    }

    fn varint(v: u64) -> Vec<u8> {
        let mut out = Vec::new();
        write_varint(&mut out, v).unwrap();
        out
    }

    #[test]
    fn varint_encoding() {
        assert_eq!(varint(0), [0x00]);
        assert_eq!(varint(0x7F), [0x7F]);
        assert_eq!(varint(0x80), [0x81, 0x00]);
        assert_eq!(varint(300), [0x82, 0x2C]);
        assert_eq!(varint(16384), [0x81, 0x80, 0x00]);
        for v in [0, 1, 127, 128, 255, 65535, 1 << 35, u64::MAX] {
            assert_eq!(read_varint(&mut varint(v).as_slice()).unwrap(), v);
        }
    }

    #[test]
    fn reject_overlong_varint() {
        let data = [0xFFu8; 11];
        assert!(matches!(
            read_varint(&mut data.as_slice()),
            Err(DictionaryError::InvalidFormat(_))
        ));
    }

    #[test]
    fn reload_preserves_contents() {
        let d = sample();
        let back = Dictionary::read_from(bytes_of(&d).as_slice()).unwrap();
        assert_eq!(back.len(), d.len());
        assert_eq!(back.form_count(), d.form_count());
        for id in 0..d.len() as u32 {
            assert_eq!(back.lemma(id), d.lemma(id));
            assert_eq!(back.pos(id), d.pos(id));
        }
        for form in ["rosae", "amat", "puellam"] {
            assert_eq!(back.lookup(form), d.lookup(form));
        }
        assert_eq!(back.numeral_lemma(), d.numeral_lemma());
        assert_eq!(back.candidates("XII"), d.candidates("XII"));
    }

    #[test]
    fn output_is_reproducible() {
        let d = sample();
        let first = bytes_of(&d);
        let again = bytes_of(&Dictionary::read_from(first.as_slice()).unwrap());
        assert_eq!(first, again);
    }

    #[test]
    fn reject_truncated() {
        let data = bytes_of(&sample());
        for cut in [0, 1, data.len() / 2, data.len() - 1] {
            assert!(
                matches!(
                    Dictionary::read_from(&data[..cut]),
                    Err(DictionaryError::Truncated)
                ),
                "cut at {cut}"
            );
        }
    }

    #[test]
    fn reject_invalid_utf8() {
        // one lemma of two bytes that are not UTF-8
        let data = [0x01, 0x02, 0xC3, 0x28];
        assert!(matches!(
            Dictionary::read_from(data.as_slice()),
            Err(DictionaryError::InvalidFormat(_))
        ));
    }

    #[test]
    fn reject_dangling_lemma_id() {
        let mut data = Vec::new();
        write_varint(&mut data, 0).unwrap(); // lemmas
        write_varint(&mut data, 0).unwrap(); // pos
        write_varint(&mut data, 1).unwrap(); // forms
        write_bytes(&mut data, b"x").unwrap();
        write_varint(&mut data, 1).unwrap();
        data.extend_from_slice(&[0; 8]);
        assert!(matches!(
            Dictionary::read_from(data.as_slice()),
            Err(DictionaryError::InvalidFormat(_))
        ));
    }

    #[test]
    fn save_and_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin.dict");
        let d = sample();
        d.save(&path).unwrap();
        let back = Dictionary::open(&path).unwrap();
        assert_eq!(back.candidates("rosae"), d.candidates("rosae"));
    }
}
