//! File/reader constructors that stop before `PixelData`, logging each
//! read at `debug` before attempting it.

use std::path::Path;

use dicom_dictionary_std::tags::PIXEL_DATA;
use dicom_object::{DefaultDicomObject, OpenFileOptions, ReadError};
use tracing::debug;

pub(crate) fn open_header<P: AsRef<Path>>(path: P) -> Result<DefaultDicomObject, ReadError> {
    let path = path.as_ref();
    debug!("reading DICOM header from: {path:#?}");
    OpenFileOptions::new().read_until(PIXEL_DATA).open_file(path)
}

pub(crate) fn open_header_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<DefaultDicomObject, ReadError> {
    debug!("reading DICOM header from in-memory buffer");
    OpenFileOptions::new()
        .read_until(PIXEL_DATA)
        .from_reader(reader)
}
