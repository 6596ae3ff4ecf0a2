/// Columns of the exported sheet, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    InputTimestamp,
    ItemName,
    SellingPrice,
    CostPrice,
    ShippingCost,
    PlatformFeePercent,
    CombinedPointPercent,
    CashProfit,
    PointProfit,
    TotalProfit,
    CashProfitRatePercent,
    TotalProfitRatePercent,
}

impl Column {
    pub const ALL: [Column; 12] = [
        Column::InputTimestamp,
        Column::ItemName,
        Column::SellingPrice,
        Column::CostPrice,
        Column::ShippingCost,
        Column::PlatformFeePercent,
        Column::CombinedPointPercent,
        Column::CashProfit,
        Column::PointProfit,
        Column::TotalProfit,
        Column::CashProfitRatePercent,
        Column::TotalProfitRatePercent,
    ];

    pub fn header(&self) -> &'static str {
        match self {
            Column::InputTimestamp => "InputTimestamp",
            Column::ItemName => "ItemName",
            Column::SellingPrice => "SellingPrice",
            Column::CostPrice => "CostPrice",
            Column::ShippingCost => "ShippingCost",
            Column::PlatformFeePercent => "PlatformFeePercent",
            Column::CombinedPointPercent => "CombinedPointPercent",
            Column::CashProfit => "CashProfit",
            Column::PointProfit => "PointProfit",
            Column::TotalProfit => "TotalProfit",
            Column::CashProfitRatePercent => "CashProfitRatePercent",
            Column::TotalProfitRatePercent => "TotalProfitRatePercent",
        }
    }

    /// Zero-based position in the sheet.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Spreadsheet letter for this column (`A` for the first).
    pub fn letter(&self) -> String {
        column_letter(self.index())
    }
}

/// Converts a zero-based column index to spreadsheet letters
/// (`0` → `A`, `25` → `Z`, `26` → `AA`).
pub fn column_letter(index: usize) -> String {
    let mut letters = Vec::new();
    let mut n = index + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(char::from(b'A' + rem as u8));
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect()
}
