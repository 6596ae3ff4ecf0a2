use rust_decimal::Decimal;

use super::FormulaSupport;

/// One cell of an [`ExportTable`](super::ExportTable).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(Decimal),
    /// A spreadsheet formula together with its precomputed value.
    Formula { expression: String, value: Decimal },
}

impl Cell {
    /// Resolves the cell for a target format.
    ///
    /// Numeric-only targets get a formula's precomputed value instead of the
    /// expression. Every other cell is returned unchanged.
    pub fn for_support(
        &self,
        support: FormulaSupport,
    ) -> Cell {
        match (self, support) {
            (Cell::Formula { value, .. }, FormulaSupport::NumericOnly) => Cell::Number(*value),
            _ => self.clone(),
        }
    }

    /// The numeric value of the cell, if it has one.
    pub fn number(&self) -> Option<Decimal> {
        match self {
            Cell::Number(value) | Cell::Formula { value, .. } => Some(*value),
            Cell::Empty | Cell::Text(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn formula() -> Cell {
        Cell::Formula {
            expression: "=SUM(H2:H3)".to_string(),
            value: dec!(1970),
        }
    }

    #[test]
    fn formula_resolves_to_number_when_numeric_only() {
        assert_eq!(
            formula().for_support(FormulaSupport::NumericOnly),
            Cell::Number(dec!(1970))
        );
    }

    #[test]
    fn formula_stays_live_when_supported() {
        assert_eq!(formula().for_support(FormulaSupport::Live), formula());
    }

    #[test]
    fn number_reads_formula_value() {
        assert_eq!(formula().number(), Some(dec!(1970)));
        assert_eq!(Cell::Text("x".to_string()).number(), None);
    }
}
