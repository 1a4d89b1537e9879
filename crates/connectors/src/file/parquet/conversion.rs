//! Conversion from Arrow record batches to row-based trip batches.
//!
//! Column-major Arrow arrays are converted to typed `Value` cells and
//! transposed into rows. Integer widths widen to i64, floats and decimals
//! become f64, timestamps of any unit become naive timestamps.

use crate::file::error::FileError;
use arrow::array::*;
use arrow::datatypes::{
    DataType, Date32Type, Date64Type, Decimal128Type, Float32Type, Float64Type, Int8Type,
    Int16Type, Int32Type, Int64Type, TimeUnit, TimestampMicrosecondType, TimestampMillisecondType,
    TimestampNanosecondType, TimestampSecondType, UInt8Type, UInt16Type, UInt32Type, UInt64Type,
};
use arrow::record_batch::RecordBatch;
use model::core::value::Value;

/// Convert one Arrow record batch into row-major cell vectors, preserving
/// column order.
pub fn record_batch_to_rows(batch: &RecordBatch) -> Result<Vec<Vec<Value>>, FileError> {
    let num_rows = batch.num_rows();
    if num_rows == 0 {
        return Ok(Vec::new());
    }

    let mut columns: Vec<Vec<Value>> = Vec::with_capacity(batch.num_columns());
    for (idx, array) in batch.columns().iter().enumerate() {
        let name = batch.schema().field(idx).name().clone();
        columns.push(array_to_values(&name, array.as_ref())?);
    }

    let mut rows = Vec::with_capacity(num_rows);
    for row_idx in 0..num_rows {
        rows.push(columns.iter().map(|col| col[row_idx].clone()).collect());
    }
    Ok(rows)
}

fn array_to_values(column: &str, array: &dyn Array) -> Result<Vec<Value>, FileError> {
    let mut values = Vec::with_capacity(array.len());

    match array.data_type() {
        DataType::Boolean => {
            let arr = as_boolean_array(array);
            for i in 0..arr.len() {
                values.push(if arr.is_null(i) {
                    Value::Null
                } else {
                    Value::Boolean(arr.value(i))
                });
            }
        }
        DataType::Int8 => convert_int::<Int8Type>(array, &mut values),
        DataType::Int16 => convert_int::<Int16Type>(array, &mut values),
        DataType::Int32 => convert_int::<Int32Type>(array, &mut values),
        DataType::Int64 => convert_int::<Int64Type>(array, &mut values),
        DataType::UInt8 => convert_int::<UInt8Type>(array, &mut values),
        DataType::UInt16 => convert_int::<UInt16Type>(array, &mut values),
        DataType::UInt32 => convert_int::<UInt32Type>(array, &mut values),
        DataType::UInt64 => {
            let arr = as_primitive_array::<UInt64Type>(array);
            for i in 0..arr.len() {
                values.push(if arr.is_null(i) {
                    Value::Null
                } else {
                    Value::Int(arr.value(i) as i64)
                });
            }
        }
        DataType::Float32 => {
            let arr = as_primitive_array::<Float32Type>(array);
            for i in 0..arr.len() {
                values.push(if arr.is_null(i) {
                    Value::Null
                } else {
                    Value::Float(arr.value(i) as f64)
                });
            }
        }
        DataType::Float64 => {
            let arr = as_primitive_array::<Float64Type>(array);
            for i in 0..arr.len() {
                values.push(if arr.is_null(i) {
                    Value::Null
                } else {
                    Value::Float(arr.value(i))
                });
            }
        }
        DataType::Utf8 => {
            let arr = as_string_array(array);
            for i in 0..arr.len() {
                values.push(if arr.is_null(i) {
                    Value::Null
                } else {
                    Value::String(arr.value(i).to_string())
                });
            }
        }
        DataType::LargeUtf8 => {
            let arr = as_largestring_array(array);
            for i in 0..arr.len() {
                values.push(if arr.is_null(i) {
                    Value::Null
                } else {
                    Value::String(arr.value(i).to_string())
                });
            }
        }
        DataType::Date32 => {
            let arr = as_primitive_array::<Date32Type>(array);
            for i in 0..arr.len() {
                if arr.is_null(i) {
                    values.push(Value::Null);
                } else {
                    let days = arr.value(i);
                    let date = chrono::NaiveDate::from_ymd_opt(1970, 1, 1)
                        .and_then(|epoch| {
                            epoch.checked_add_signed(chrono::Duration::days(days as i64))
                        })
                        .ok_or_else(|| FileError::Conversion {
                            column: column.to_string(),
                            message: format!("invalid date32 value {days}"),
                        })?;
                    values.push(Value::Date(date));
                }
            }
        }
        DataType::Date64 => {
            let arr = as_primitive_array::<Date64Type>(array);
            for i in 0..arr.len() {
                if arr.is_null(i) {
                    values.push(Value::Null);
                } else {
                    let millis = arr.value(i);
                    let datetime = chrono::DateTime::from_timestamp_millis(millis).ok_or_else(
                        || FileError::Conversion {
                            column: column.to_string(),
                            message: format!("invalid date64 value {millis}"),
                        },
                    )?;
                    values.push(Value::Date(datetime.date_naive()));
                }
            }
        }
        DataType::Timestamp(unit, _) => {
            convert_timestamp(column, array, unit, &mut values)?;
        }
        DataType::Decimal128(_, scale) => {
            let arr = as_primitive_array::<Decimal128Type>(array);
            let divisor = 10f64.powi(*scale as i32);
            for i in 0..arr.len() {
                values.push(if arr.is_null(i) {
                    Value::Null
                } else {
                    Value::Float(arr.value(i) as f64 / divisor)
                });
            }
        }
        other => {
            return Err(FileError::UnsupportedType {
                column: column.to_string(),
                data_type: format!("{other:?}"),
            });
        }
    }

    Ok(values)
}

fn convert_int<T>(array: &dyn Array, values: &mut Vec<Value>)
where
    T: ArrowPrimitiveType,
    T::Native: Into<i64>,
{
    let arr = as_primitive_array::<T>(array);
    for i in 0..arr.len() {
        values.push(if arr.is_null(i) {
            Value::Null
        } else {
            Value::Int(arr.value(i).into())
        });
    }
}

fn convert_timestamp(
    column: &str,
    array: &dyn Array,
    unit: &TimeUnit,
    values: &mut Vec<Value>,
) -> Result<(), FileError> {
    let invalid = |raw: i64| FileError::Conversion {
        column: column.to_string(),
        message: format!("invalid timestamp value {raw}"),
    };

    match unit {
        TimeUnit::Second => {
            let arr = as_primitive_array::<TimestampSecondType>(array);
            for i in 0..arr.len() {
                if arr.is_null(i) {
                    values.push(Value::Null);
                } else {
                    let secs = arr.value(i);
                    let ts = chrono::DateTime::from_timestamp(secs, 0).ok_or_else(|| invalid(secs))?;
                    values.push(Value::Timestamp(ts.naive_utc()));
                }
            }
        }
        TimeUnit::Millisecond => {
            let arr = as_primitive_array::<TimestampMillisecondType>(array);
            for i in 0..arr.len() {
                if arr.is_null(i) {
                    values.push(Value::Null);
                } else {
                    let millis = arr.value(i);
                    let ts = chrono::DateTime::from_timestamp_millis(millis)
                        .ok_or_else(|| invalid(millis))?;
                    values.push(Value::Timestamp(ts.naive_utc()));
                }
            }
        }
        TimeUnit::Microsecond => {
            let arr = as_primitive_array::<TimestampMicrosecondType>(array);
            for i in 0..arr.len() {
                if arr.is_null(i) {
                    values.push(Value::Null);
                } else {
                    let micros = arr.value(i);
                    let ts = chrono::DateTime::from_timestamp_micros(micros)
                        .ok_or_else(|| invalid(micros))?;
                    values.push(Value::Timestamp(ts.naive_utc()));
                }
            }
        }
        TimeUnit::Nanosecond => {
            let arr = as_primitive_array::<TimestampNanosecondType>(array);
            for i in 0..arr.len() {
                if arr.is_null(i) {
                    values.push(Value::Null);
                } else {
                    let ts = chrono::DateTime::from_timestamp_nanos(arr.value(i));
                    values.push(Value::Timestamp(ts.naive_utc()));
                }
            }
        }
    }
    Ok(())
}
