use crate::models::professional::Professional;
use crate::models::settings::ColumnWidthMode;

pub const TIME_LABEL_WIDTH: f32 = 50.0;
pub const COLUMN_SPACING: f32 = 1.0;
pub const COMPACT_COLUMN_WIDTH: f32 = 120.0;
pub const COMFORTABLE_COLUMN_WIDTH: f32 = 200.0;

/// Horizontal placement of one professional's column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnLayout {
    pub professional_id: i64,
    pub index: usize,
    pub left: f32,
    pub width: f32,
}

impl ColumnLayout {
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn contains_x(&self, x: f32) -> bool {
        x >= self.left && x < self.right()
    }
}

/// Width of every column for `count` columns in a viewport `viewport_width` wide.
pub fn column_width(mode: ColumnWidthMode, count: usize, viewport_width: f32) -> f32 {
    match mode {
        ColumnWidthMode::Compact => COMPACT_COLUMN_WIDTH,
        ColumnWidthMode::Comfortable => COMFORTABLE_COLUMN_WIDTH,
        ColumnWidthMode::Auto => {
            if count == 0 {
                return COMPACT_COLUMN_WIDTH;
            }
            let available =
                viewport_width - TIME_LABEL_WIDTH - COLUMN_SPACING * count as f32;
            (available / count as f32).max(COMPACT_COLUMN_WIDTH)
        }
    }
}

/// Lay out one column per professional, left to right after the time label gutter.
pub fn compute_columns(
    professionals: &[Professional],
    mode: ColumnWidthMode,
    viewport_width: f32,
) -> Vec<ColumnLayout> {
    let width = column_width(mode, professionals.len(), viewport_width);

    professionals
        .iter()
        .enumerate()
        .map(|(index, professional)| ColumnLayout {
            professional_id: professional.id,
            index,
            left: TIME_LABEL_WIDTH + COLUMN_SPACING + index as f32 * (width + COLUMN_SPACING),
            width,
        })
        .collect()
}

/// Column under a horizontal offset. Spacing between columns hits nothing.
pub fn column_at_x(columns: &[ColumnLayout], x: f32) -> Option<&ColumnLayout> {
    columns.iter().find(|column| column.contains_x(x))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn team(count: i64) -> Vec<Professional> {
        (1..=count)
            .map(|id| Professional::new(id, format!("Pro {}", id)))
            .collect()
    }

    #[test_case(ColumnWidthMode::Compact, 3, 2000.0, 120.0 ; "compact ignores viewport")]
    #[test_case(ColumnWidthMode::Comfortable, 3, 300.0, 200.0 ; "comfortable ignores viewport")]
    #[test_case(ColumnWidthMode::Auto, 2, 652.0, 300.0 ; "auto shares viewport")]
    #[test_case(ColumnWidthMode::Auto, 10, 652.0, 120.0 ; "auto never below compact")]
    #[test_case(ColumnWidthMode::Auto, 0, 652.0, 120.0 ; "auto with no columns")]
    fn test_column_width(mode: ColumnWidthMode, count: usize, viewport: f32, expected: f32) {
        assert_eq!(column_width(mode, count, viewport), expected);
    }

    #[test]
    fn test_compute_columns_offsets() {
        let columns = compute_columns(&team(3), ColumnWidthMode::Compact, 0.0);
        assert_eq!(columns.len(), 3);
        assert_eq!(columns[0].left, 51.0);
        assert_eq!(columns[1].left, 51.0 + 121.0);
        assert_eq!(columns[2].professional_id, 3);
        assert_eq!(columns[2].index, 2);
    }

    #[test]
    fn test_column_at_x() {
        let columns = compute_columns(&team(2), ColumnWidthMode::Compact, 0.0);
        assert_eq!(column_at_x(&columns, 60.0).map(|c| c.professional_id), Some(1));
        assert_eq!(column_at_x(&columns, 172.5).map(|c| c.professional_id), Some(2));
        // Inside the spacing gap between the two columns.
        assert!(column_at_x(&columns, 171.5).is_none());
        assert!(column_at_x(&columns, 10.0).is_none());
    }
}
