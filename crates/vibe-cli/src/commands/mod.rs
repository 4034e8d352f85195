pub mod calculate;
pub mod dispatch;
pub mod evaluate;
pub mod input;
pub mod schema;
pub mod validate;
