//! User, face, and unified row tables.

use crate::row::SpaceRow;
use crate::unique::unique;
use serde::Serialize;

/// The row tables every deriver reads from.
///
/// `table` is `user_table` followed by `face_table`. It is not deduplicated
/// across the two halves: a face row may repeat a user row. Derivers dedup
/// their own outputs, so this is harmless.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceTable {
    user_table: Vec<SpaceRow>,
    face_table: Vec<SpaceRow>,
    table: Vec<SpaceRow>,
}

impl SpaceTable {
    /// Build the tables from user rows in file order.
    pub fn from_user_rows(user_rows: Vec<SpaceRow>) -> Self {
        let face_table = face_rows(&user_rows);
        let table = user_rows.iter().chain(face_table.iter()).copied().collect();
        Self {
            user_table: user_rows,
            face_table,
            table,
        }
    }

    pub fn user_table(&self) -> &[SpaceRow] {
        &self.user_table
    }

    pub fn face_table(&self) -> &[SpaceRow] {
        &self.face_table
    }

    pub fn table(&self) -> &[SpaceRow] {
        &self.table
    }

    pub fn is_empty(&self) -> bool {
        self.user_table.is_empty()
    }
}

/// One face row per distinct user row, deduplicated.
pub fn face_rows(user_rows: &[SpaceRow]) -> Vec<SpaceRow> {
    unique(unique(user_rows.iter().copied()).iter().map(SpaceRow::face))
}
