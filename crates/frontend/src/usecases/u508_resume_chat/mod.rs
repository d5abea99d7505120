//! Resume chat UseCase (MVVM Standard)
//!
//! Structure:
//! - api.rs: HTTP calls to the resume backend
//! - state.rs: pure page state and its transitions
//! - view_model.rs: ResumeChatVm, signals + commands
//! - view.rs: Main component ResumeChatPage

mod api;
pub mod state;
mod view;
mod view_model;

pub use view::ResumeChatPage;
pub use view_model::ResumeChatVm;
