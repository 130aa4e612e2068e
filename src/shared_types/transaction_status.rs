// -----------------------------------------------------------------------------
// ----- TransactionStatus -----------------------------------------------------

/// Maps to the ReadyForQuery transaction status byte that Postgres sends
/// after each command: idle, inside a transaction block, or inside a failed
/// transaction block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionStatus {
    Idle,
    InTransaction,
    Failed,
}

// -----------------------------------------------------------------------------
// ----- TransactionStatus: Static ---------------------------------------------

impl TransactionStatus {
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'I' => Some(TransactionStatus::Idle),
            b'T' => Some(TransactionStatus::InTransaction),
            b'E' => Some(TransactionStatus::Failed),
            _ => None,
        }
    }
}

// -----------------------------------------------------------------------------
// ----- TransactionStatus: Public ---------------------------------------------

impl TransactionStatus {
    pub fn as_byte(self) -> u8 {
        match self {
            TransactionStatus::Idle => b'I',
            TransactionStatus::InTransaction => b'T',
            TransactionStatus::Failed => b'E',
        }
    }
}

// -----------------------------------------------------------------------------
// ----- Tests -----------------------------------------------------------------


// -----------------------------------------------------------------------------
// -----------------------------------------------------------------------------
