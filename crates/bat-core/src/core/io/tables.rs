use ndarray::Array2;
use serde::Serialize;
use std::io::Write;

/// Writes a frame-indexed time-series matrix as CSV.
///
/// The first column is the frame number; the remaining columns follow
/// `headers`, one per feature. `headers.len()` must equal the matrix width.
pub fn write_series_csv<W: Write>(
    writer: W,
    headers: &[String],
    series: &Array2<f64>,
) -> Result<(), csv::Error> {
    debug_assert_eq!(headers.len(), series.ncols());

    let mut csv_writer = csv::Writer::from_writer(writer);
    let mut header_row = Vec::with_capacity(headers.len() + 1);
    header_row.push("frame".to_string());
    header_row.extend(headers.iter().cloned());
    csv_writer.write_record(&header_row)?;

    for (frame, row) in series.rows().into_iter().enumerate() {
        let mut record = Vec::with_capacity(row.len() + 1);
        record.push(frame.to_string());
        record.extend(row.iter().map(|v| v.to_string()));
        csv_writer.write_record(&record)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Serializes a slice of records as CSV with a header row derived from the
/// record type.
pub fn write_records_csv<W: Write, S: Serialize>(
    writer: W,
    records: &[S],
) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;
    Ok(())
}
