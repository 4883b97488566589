//! Employee records exactly as the directory provider returns them.

pub mod employee;

pub use employee::{
    BirthDate, Employee, Identity, Info, Location, Login, Name, Picture, ResultsEnvelope, Street,
};
