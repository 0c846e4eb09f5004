//! Dataset loader.
//!
//! Reads one city's CSV trip log into an arrow record batch, derives the
//! month/day-of-week/hour columns from `Start Time`, applies the filter
//! selection, and hands back a [`TripTable`]. All derived fields are
//! computed here so the aggregation routines stay read-only.

use std::fs;
use std::io::Cursor;
use std::sync::Arc;

use arrow_array::{Array, ArrayRef, BooleanArray, RecordBatch, StringArray, UInt32Array};
use arrow_csv::ReaderBuilder;
use arrow_csv::reader::Format;
use arrow_schema::{ArrowError, DataType, Field, Schema, SchemaRef};
use arrow_select::concat::concat_batches;
use arrow_select::filter::filter_record_batch;
use chrono::{Datelike, NaiveDateTime, Timelike};
use diagnostics::{log_debug, log_info};

use crate::city::{City, CityCatalog};
use crate::error::{Error, Result};
use crate::filter::FilterSelection;
use crate::table::{SchemaCaps, TripTable, columns, typed_column};

const BATCH_SIZE: usize = 8192;

/// Load the trips for `city`, keeping only rows matching `selection`.
///
/// Row order of the source file is preserved; the file itself is never
/// modified. Each call re-reads the file from scratch.
pub fn load_trips(
    catalog: &CityCatalog,
    city: City,
    selection: &FilterSelection,
) -> Result<TripTable> {
    let path = catalog.path_for(city);
    let bytes = fs::read(&path).map_err(|source| Error::DataUnavailable {
        city: city.name(),
        path: path.clone(),
        source,
    })?;

    let schema = schema_from_header(&bytes)?;
    let caps = SchemaCaps {
        has_gender: schema.column_with_name(columns::GENDER).is_some(),
        has_birth_year: schema.column_with_name(columns::BIRTH_YEAR).is_some(),
    };

    let batch = read_all_rows(&schema, &bytes)?;
    let city_name = city.name();
    let source_rows = batch.num_rows();
    log_info!(
        "loaded {city_name} dataset with {source_rows} rows",
        city_name: city_name,
        source_rows: source_rows
    );

    let batch = derive_start_time_columns(&batch)?;
    let batch = apply_selection(&batch, selection)?;
    let kept_rows = batch.num_rows();
    log_debug!(
        "{kept_rows} of {source_rows} rows match the selection",
        kept_rows: kept_rows,
        source_rows: source_rows
    );

    TripTable::from_batch(&batch, caps)
}

/// Build the schema from the file's header line. Numeric columns are
/// Float64 (Birth Year is fractional upstream when values are missing);
/// everything else stays Utf8 and is parsed explicitly where needed.
fn schema_from_header(bytes: &[u8]) -> Result<SchemaRef> {
    let header_line = bytes.split(|&b| b == b'\n').next().unwrap_or(&[]);
    let header = std::str::from_utf8(header_line)
        .map_err(|e| Error::Csv(ArrowError::CsvError(format!("header is not UTF-8: {e}"))))?
        .trim_end_matches('\r');

    let names: Vec<&str> = header
        .split(',')
        .map(|name| name.trim().trim_matches('"'))
        .collect();
    for required in columns::REQUIRED {
        if !names.contains(&required) {
            return Err(Error::MissingColumn { column: required });
        }
    }

    let fields: Vec<Field> = names
        .iter()
        .map(|name| {
            let data_type = match *name {
                columns::TRIP_DURATION | columns::BIRTH_YEAR => DataType::Float64,
                _ => DataType::Utf8,
            };
            Field::new(*name, data_type, true)
        })
        .collect();
    Ok(Arc::new(Schema::new(fields)))
}

fn read_all_rows(schema: &SchemaRef, bytes: &[u8]) -> Result<RecordBatch> {
    let format = Format::default().with_header(true);
    let reader = ReaderBuilder::new(schema.clone())
        .with_format(format)
        .with_batch_size(BATCH_SIZE)
        .build(Cursor::new(bytes))?;

    let mut batches = Vec::new();
    for batch in reader {
        batches.push(batch?);
    }
    Ok(concat_batches(schema, &batches)?)
}

fn parse_start_time(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M"))
        .ok()
}

/// Append the month (1-12), day-of-week (0-6, Monday = 0) and hour (0-23)
/// columns derived from `Start Time`. Row numbers in errors are 1-based
/// data rows, excluding the header.
fn derive_start_time_columns(batch: &RecordBatch) -> Result<RecordBatch> {
    let start_times = typed_column::<StringArray>(batch, columns::START_TIME)?;

    let rows = start_times.len();
    let mut months = Vec::with_capacity(rows);
    let mut days = Vec::with_capacity(rows);
    let mut hours = Vec::with_capacity(rows);
    for row in 0..rows {
        if start_times.is_null(row) {
            return Err(Error::MalformedTimestamp {
                value: String::new(),
                row: row + 1,
            });
        }
        let raw = start_times.value(row);
        let ts = parse_start_time(raw).ok_or_else(|| Error::MalformedTimestamp {
            value: raw.to_string(),
            row: row + 1,
        })?;
        months.push(ts.month());
        days.push(ts.weekday().num_days_from_monday());
        hours.push(ts.hour());
    }

    let mut fields: Vec<Field> = batch
        .schema()
        .fields()
        .iter()
        .map(|f| f.as_ref().clone())
        .collect();
    fields.push(Field::new(columns::MONTH, DataType::UInt32, false));
    fields.push(Field::new(columns::DAY_OF_WEEK, DataType::UInt32, false));
    fields.push(Field::new(columns::HOUR, DataType::UInt32, false));

    let mut cols: Vec<ArrayRef> = batch.columns().to_vec();
    cols.push(Arc::new(UInt32Array::from(months)));
    cols.push(Arc::new(UInt32Array::from(days)));
    cols.push(Arc::new(UInt32Array::from(hours)));

    Ok(RecordBatch::try_new(Arc::new(Schema::new(fields)), cols)?)
}

/// Keep only rows whose derived month/day match the selection. The two
/// predicates are independent, so applying them as one mask is equivalent
/// to applying them in either order.
fn apply_selection(batch: &RecordBatch, selection: &FilterSelection) -> Result<RecordBatch> {
    if selection.month.is_none() && selection.day.is_none() {
        return Ok(batch.clone());
    }

    let months = typed_column::<UInt32Array>(batch, columns::MONTH)?;
    let days = typed_column::<UInt32Array>(batch, columns::DAY_OF_WEEK)?;
    let mask: BooleanArray = (0..batch.num_rows())
        .map(|row| {
            let month_ok = selection.month.is_none_or(|m| months.value(row) == m);
            let day_ok = selection.day.is_none_or(|d| days.value(row) == d);
            Some(month_ok && day_ok)
        })
        .collect();

    Ok(filter_record_batch(batch, &mask)?)
}
