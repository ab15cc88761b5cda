//! Header normalization and column aliases.

use lab_model::Column;

/// Accepted header spellings per column, after [`normalize_header`].
const ALIASES: &[(&str, Column)] = &[
    ("fecha", Column::Date),
    ("date", Column::Date),
    ("equipo", Column::Equipment),
    ("equipment", Column::Equipment),
    ("turno", Column::Shift),
    ("shift", Column::Shift),
    ("muestras_procesadas", Column::SamplesProcessed),
    ("samples_processed", Column::SamplesProcessed),
    ("rendimiento", Column::YieldPercent),
    ("yield_percent", Column::YieldPercent),
    ("yield", Column::YieldPercent),
    ("comentario", Column::Comment),
    ("comentarios", Column::Comment),
    ("comment", Column::Comment),
    ("comments", Column::Comment),
];

/// Trims BOM and whitespace, lower-cases, and joins words with `_`.
///
/// ```
/// use lab_ingest::normalize_header;
///
/// assert_eq!(normalize_header("\u{feff} Muestras  Procesadas "), "muestras_procesadas");
/// ```
pub fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}').to_lowercase();
    trimmed.split_whitespace().collect::<Vec<_>>().join("_")
}

/// Column a raw header refers to, if any.
pub fn column_for_header(raw: &str) -> Option<Column> {
    let key = normalize_header(raw);
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == key)
        .map(|(_, column)| *column)
}

pub(crate) fn normalize_cell(raw: &str) -> &str {
    raw.trim().trim_matches('\u{feff}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spanish_and_english_headers() {
        assert_eq!(column_for_header("Fecha"), Some(Column::Date));
        assert_eq!(column_for_header("EQUIPMENT"), Some(Column::Equipment));
        assert_eq!(column_for_header(" turno "), Some(Column::Shift));
        assert_eq!(column_for_header("Rendimiento"), Some(Column::YieldPercent));
        assert_eq!(column_for_header("operador"), None);
    }

    #[test]
    fn every_column_has_an_alias() {
        for column in Column::ALL {
            assert_eq!(column_for_header(column.as_str()), Some(column));
        }
    }
}
