mod errors;
mod reporter;

pub use reporter::Report;
