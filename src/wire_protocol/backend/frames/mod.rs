pub mod authentication;
pub mod backend_key_data;
pub mod command_complete;
pub mod copy_data;
pub mod copy_response;
pub mod data_row;
pub mod error_fields;
pub mod error_response;
pub mod function_call_response;
pub mod negotiate_protocol_version;
pub mod notice_response;
pub mod notification_response;
pub mod parameter_description;
pub mod parameter_status;
pub mod ready_for_query;
pub mod row_description;

pub use authentication::AuthenticationFrame;
pub use backend_key_data::BackendKeyDataFrame;
pub use command_complete::CommandCompleteFrame;
pub use copy_data::CopyDataFrame;
pub use copy_response::CopyResponseFrame;
pub use data_row::DataRowFrame;
pub use error_fields::{ErrorFields, Severity};
pub use error_response::ErrorResponseFrame;
pub use function_call_response::FunctionCallResponseFrame;
pub use negotiate_protocol_version::NegotiateProtocolVersionFrame;
pub use notice_response::NoticeResponseFrame;
pub use notification_response::NotificationResponseFrame;
pub use parameter_description::ParameterDescriptionFrame;
pub use parameter_status::ParameterStatusFrame;
pub use ready_for_query::ReadyForQueryFrame;
pub use row_description::{FieldDescription, RowDescriptionFrame};
