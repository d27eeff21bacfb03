//! CLI command implementations.

mod common;
pub(crate) mod compile;
pub(crate) mod draft;
pub(crate) mod post;

pub(crate) use compile::CompileArgs;
pub(crate) use draft::DraftCommand;
pub(crate) use post::PostCommand;
