//! App - user-task handling built on the ports.
//!
//! # 主要コンポーネント
//! - **SchemaValidator**: form-field schema check
//! - **TaskExtractor**: job -> task record
//! - **UserTaskJobHandler**: extract -> save -> notify

pub mod extractor;
pub mod handler;
pub mod validator;

pub use self::extractor::TaskExtractor;
pub use self::handler::{JobHandler, UserTaskJobHandler};
pub use self::validator::SchemaValidator;
