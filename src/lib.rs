pub mod error;
pub mod pagination;
pub mod payload;
pub mod response;
pub mod status;

pub use error::{AuthorizationException, Failure, HttpException};
pub use pagination::{Page, Paginated, PaginationMeta};
pub use payload::{Payload, Resource};
pub use response::{ApiReply, ApiResponse};
pub use status::status_message;
