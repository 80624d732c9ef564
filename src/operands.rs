//! Provides the `read_label_file` function, which returns the contents of a
//! label file as UTF-8 bytes with any Byte Order Mark removed. The file is
//! read in its entirety and closed before we return, so no handle outlives
//! the call.
use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Return the contents of the file at `path`, translated to UTF-8 if it starts
/// with a UTF-16 Byte Order Mark, and with a leading UTF-8 Byte Order Mark
/// stripped.
pub fn read_label_file(path: &Path) -> Result<Vec<u8>> {
    let contents =
        fs::read(path).with_context(|| format!("Can't read file: {}", path.display()))?;
    let mut contents = decode_if_utf16(contents);
    if has_bom(&contents) {
        contents.drain(..BOM_BYTES.len());
    }
    Ok(contents)
}

/// Decode UTF-16 to UTF-8 if we see a UTF-16 Byte Order Mark at the beginning of `candidate`.
/// Otherwise return `candidate` unchanged
fn decode_if_utf16(candidate: Vec<u8>) -> Vec<u8> {
    // Note: `decode_without_bom_handling` will change malformed sequences to the
    // Unicode REPLACEMENT CHARACTER, and translates the UTF-16 BOM to a UTF-8 BOM.
    //
    if let Some((enc, _)) = encoding_rs::Encoding::for_bom(&candidate) {
        if [encoding_rs::UTF_16LE, encoding_rs::UTF_16BE].contains(&enc) {
            let (translated, _had_malformed_sequences) =
                enc.decode_without_bom_handling(&candidate);
            return translated.into_owned().into_bytes();
        }
    }
    return candidate;
}

const BOM_0: u8 = b'\xEF';
const BOM_1: u8 = b'\xBB';
const BOM_2: u8 = b'\xBF';
const BOM_BYTES: &[u8] = b"\xEF\xBB\xBF";
/// Does `contents` begin with a (UTF-8) Byte Order Mark?
fn has_bom(contents: &[u8]) -> bool {
    contents.len() >= 3 && contents[0] == BOM_0 && contents[1] == BOM_1 && contents[2] == BOM_2
}
