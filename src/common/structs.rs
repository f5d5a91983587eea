/// Generic error carrying a message, used by the query parser.
pub mod custom_error;
