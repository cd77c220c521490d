//! Binary dataset file format.
//!
//! The format is fixed-width with no padding:
//!
//! ```text
//! Offset  Size          Field
//! ------  ----          -----
//! 0       4             N, number of records (i32, little-endian)
//! 4       N × (1 + P)   records: 1-byte label, P row-major pixel bytes
//! ```
//!
//! where `P` is [`IMAGE_PIXELS`]. Image dimensions are not stored in the
//! file; both sides use the compile-time constant.
//!
//! Malformed files fail fast: a negative count, a truncated record, or an
//! out-of-range label each map to a distinct [`DatasetLoadError`] variant.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use thiserror::Error;

use super::dataset::{Dataset, DatasetError, Image, IMAGE_PIXELS};

/// Errors that can occur when loading a dataset file.
#[derive(Debug, Error)]
pub enum DatasetLoadError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("file declares a negative record count ({0})")]
    NegativeCount(i32),

    #[error("file truncated: expected {expected} records, got {actual}")]
    Truncated { expected: usize, actual: usize },

    #[error("invalid dataset contents: {0}")]
    Invalid(#[from] DatasetError),
}

/// Load a dataset from a file path.
pub fn read_dataset<P: AsRef<Path>>(path: P) -> Result<Dataset, DatasetLoadError> {
    let file = File::open(path)?;
    read_dataset_from(&mut BufReader::new(file))
}

/// Load a dataset from any reader.
pub fn read_dataset_from<R: Read>(reader: &mut R) -> Result<Dataset, DatasetLoadError> {
    let mut count_buf = [0u8; 4];
    reader.read_exact(&mut count_buf)?;
    let declared = i32::from_le_bytes(count_buf);
    if declared < 0 {
        return Err(DatasetLoadError::NegativeCount(declared));
    }
    let num_records = declared as usize;

    let mut images = Vec::with_capacity(num_records);
    let mut labels = Vec::with_capacity(num_records);

    for record in 0..num_records {
        let mut label_buf = [0u8; 1];
        let mut pixels = vec![0u8; IMAGE_PIXELS];

        let read = reader
            .read_exact(&mut label_buf)
            .and_then(|()| reader.read_exact(&mut pixels));
        match read {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                return Err(DatasetLoadError::Truncated {
                    expected: num_records,
                    actual: record,
                });
            }
            Err(e) => return Err(DatasetLoadError::Io(e)),
        }

        labels.push(label_buf[0]);
        images.push(Image::new(pixels)?);
    }

    Ok(Dataset::new(images, labels)?)
}

/// Serialize a dataset in the binary file format.
///
/// A dataset loaded with [`read_dataset_from`] and written back produces
/// byte-identical content.
pub fn write_dataset<W: Write>(writer: &mut W, dataset: &Dataset) -> io::Result<()> {
    let count = dataset.len() as i32;
    writer.write_all(&count.to_le_bytes())?;
    for i in 0..dataset.len() {
        writer.write_all(&[dataset.label(i)])?;
        writer.write_all(dataset.image(i).pixels())?;
    }
    Ok(())
}

/// Serialize a dataset to a file path.
pub fn write_dataset_to_path<P: AsRef<Path>>(path: P, dataset: &Dataset) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_dataset(&mut writer, dataset)?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn record(label: u8, intensity: u8) -> Vec<u8> {
        let mut bytes = vec![label];
        bytes.extend(std::iter::repeat(intensity).take(IMAGE_PIXELS));
        bytes
    }

    fn file_bytes(records: &[(u8, u8)]) -> Vec<u8> {
        let mut bytes = (records.len() as i32).to_le_bytes().to_vec();
        for &(label, intensity) in records {
            bytes.extend(record(label, intensity));
        }
        bytes
    }

    #[test]
    fn reads_well_formed_file() {
        let bytes = file_bytes(&[(0, 0), (7, 255)]);
        let ds = read_dataset_from(&mut Cursor::new(bytes)).unwrap();

        assert_eq!(ds.len(), 2);
        assert_eq!(ds.label(0), 0);
        assert_eq!(ds.label(1), 7);
        assert_eq!(ds.image(0).pixel(100), 0);
        assert_eq!(ds.image(1).pixel(100), 255);
    }

    #[test]
    fn reads_empty_file() {
        let bytes = 0i32.to_le_bytes().to_vec();
        let ds = read_dataset_from(&mut Cursor::new(bytes)).unwrap();
        assert!(ds.is_empty());
    }

    #[test]
    fn rejects_negative_count() {
        let bytes = (-1i32).to_le_bytes().to_vec();
        let result = read_dataset_from(&mut Cursor::new(bytes));
        assert!(matches!(result, Err(DatasetLoadError::NegativeCount(-1))));
    }

    #[test]
    fn rejects_truncated_record() {
        let mut bytes = file_bytes(&[(1, 0)]);
        // Declare two records but provide only one full record plus a label.
        bytes[0..4].copy_from_slice(&2i32.to_le_bytes());
        bytes.push(3);

        let result = read_dataset_from(&mut Cursor::new(bytes));
        assert!(matches!(
            result,
            Err(DatasetLoadError::Truncated {
                expected: 2,
                actual: 1
            })
        ));
    }

    #[test]
    fn rejects_missing_header() {
        let result = read_dataset_from(&mut Cursor::new(vec![1u8, 2]));
        assert!(matches!(result, Err(DatasetLoadError::Io(_))));
    }

    #[test]
    fn rejects_out_of_range_label() {
        let bytes = file_bytes(&[(12, 0)]);
        let result = read_dataset_from(&mut Cursor::new(bytes));
        assert!(matches!(
            result,
            Err(DatasetLoadError::Invalid(DatasetError::InvalidLabel {
                index: 0,
                label: 12
            }))
        ));
    }

    #[test]
    fn read_write_roundtrip_is_byte_identical() {
        let bytes = file_bytes(&[(0, 0), (1, 255), (9, 128)]);
        let ds = read_dataset_from(&mut Cursor::new(bytes.clone())).unwrap();

        let mut written = Vec::new();
        write_dataset(&mut written, &ds).unwrap();
        assert_eq!(written, bytes);
    }
}
