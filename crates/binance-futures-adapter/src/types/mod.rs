/*
[INPUT]:  Order input, exchange enums and JSON payload shapes
[OUTPUT]: Validated order values and typed response records
[POS]:    Data layer - everything that is not network code
[UPDATE]: When a type module is added or removed
*/

pub mod enums;
pub mod models;
pub mod requests;
pub mod responses;

pub use enums::*;
pub use models::*;
pub use requests::*;
pub use responses::*;
