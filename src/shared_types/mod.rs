pub mod configuration_variable;
pub mod format_code;
pub mod transaction_status;

pub use configuration_variable::ConfigurationVariable;
pub use format_code::FormatCode;
pub use transaction_status::TransactionStatus;

/// Object identifier of a table or type in the server catalog.
pub type Oid = u32;
