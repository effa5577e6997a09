//! Target spreadsheet configuration.

/// Which cells to read flower ids from and write season labels to.
///
/// `Default` targets the production flower catalog; tests construct their own
/// targets so the scan logic never depends on module-level constants.
#[derive(Debug, Clone)]
pub struct SheetTarget {
    pub spreadsheet_id: String,
    /// Numeric gid of the catalog tab, logged so the operator can find it.
    pub sheet_gid: String,
    /// A1 range of the flower-id column, header row excluded.
    pub source_range: String,
    /// Column letter that receives the season label.
    pub season_column: String,
    /// 1-based sheet row of the first row inside `source_range`.
    pub first_data_row: u32,
}

impl SheetTarget {
    pub fn new(
        spreadsheet_id: impl Into<String>,
        sheet_gid: impl Into<String>,
        source_range: impl Into<String>,
        season_column: impl Into<String>,
        first_data_row: u32,
    ) -> Self {
        SheetTarget {
            spreadsheet_id: spreadsheet_id.into(),
            sheet_gid: sheet_gid.into(),
            source_range: source_range.into(),
            season_column: season_column.into(),
            first_data_row,
        }
    }

    /// Sheet row number for the source row at `index` within the fetched range.
    pub fn sheet_row(&self, index: usize) -> u32 {
        self.first_data_row + index as u32
    }

    /// A1 reference of the season cell for the source row at `index`.
    pub fn season_cell(&self, index: usize) -> String {
        format!("{}{}", self.season_column, self.sheet_row(index))
    }
}

impl Default for SheetTarget {
    fn default() -> Self {
        SheetTarget::new(
            "1HK3AA9yoJyPgObotVaXMLSAYccxoEtC9LmvZuCww5ZY",
            "2100622490",
            "B2:B164",
            "N",
            2,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_cell_applies_header_offset() {
        let target = SheetTarget::default();
        assert_eq!(target.season_cell(0), "N2");
        assert_eq!(target.season_cell(3), "N5");
    }
}
