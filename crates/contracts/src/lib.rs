//! Shared wire contracts between the resume chat frontend and its backend.

pub mod usecases;
