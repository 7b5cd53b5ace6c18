pub mod amount;
pub mod auto_sleep;
pub mod events;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod runtime;
pub mod screen;
pub mod theme;
