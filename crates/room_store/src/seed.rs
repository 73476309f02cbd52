use std::path::Path;

use hotel_core::Room;

use crate::error::{StoreError, StoreResult};

const REQUIRED_COLUMNS: [&str; 4] = ["id", "type", "price", "availability"];

/// Parse a seed CSV with `id,type,price,availability` columns into rooms.
///
/// Extra columns are ignored; missing required columns and malformed rows
/// are hard errors so a bad seed never half-loads.
pub fn parse_seed_file(path: &Path) -> StoreResult<Vec<Room>> {
    let mut reader = csv::Reader::from_path(path)?;

    let headers = reader.headers()?.clone();
    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .filter(|name| !headers.iter().any(|h| h.trim() == **name))
        .copied()
        .collect();
    if !missing.is_empty() {
        return Err(StoreError::InvalidSeed(format!(
            "seed file is missing required columns: {}",
            missing.join(", ")
        )));
    }

    let column = |name: &str| -> usize {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .unwrap_or_default()
    };
    let (id_col, type_col, price_col, status_col) = (
        column("id"),
        column("type"),
        column("price"),
        column("availability"),
    );

    let mut rooms = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        let line = index + 2; // 1-based, after the header row
        let field = |col: usize| record.get(col).unwrap_or("").trim();

        let id: i64 = field(id_col)
            .parse()
            .map_err(|_| bad_row(line, "id", field(id_col)))?;
        let room_type = field(type_col)
            .parse()
            .map_err(|_| bad_row(line, "type", field(type_col)))?;
        let price: f64 = field(price_col)
            .parse()
            .map_err(|_| bad_row(line, "price", field(price_col)))?;
        let status = field(status_col)
            .parse()
            .map_err(|_| bad_row(line, "availability", field(status_col)))?;

        if id <= 0 {
            return Err(bad_row(line, "id", field(id_col)));
        }
        if !price.is_finite() || price < 0.0 {
            return Err(bad_row(line, "price", field(price_col)));
        }

        rooms.push(Room {
            id,
            room_type,
            price,
            status,
        });
    }

    Ok(rooms)
}

fn bad_row(line: usize, column: &str, value: &str) -> StoreError {
    StoreError::InvalidSeed(format!("line {line}: bad {column} value {value:?}"))
}
