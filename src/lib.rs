mod clock;
mod conditional;
pub mod constants;
mod context;
pub mod entity_tag;
mod evaluate;
mod exchange;
mod headers;
pub mod http_date;
mod options;
mod preconditions;
mod result;
mod util;
mod validator;

pub use clock::{Clock, ClockFn};
pub use conditional::Conditional;
pub use context::RequestContext;
pub use entity_tag::TagFilter;
pub use exchange::Exchange;
pub use headers::Headers;
pub use options::{ConditionalOptions, ConfigError};
pub use preconditions::{AcceptCondition, Preconditions, RejectCondition};
pub use result::{MalformedHeader, ShortCircuit, UsageError, ValidateError};
pub use util::decode_latin1;
pub use validator::ValidatorOptions;
