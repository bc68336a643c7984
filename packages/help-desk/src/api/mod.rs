pub mod helper;
pub mod model;
pub mod routes;
