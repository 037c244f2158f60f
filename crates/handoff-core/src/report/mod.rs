//! Report module: Preview or commit planned rewrites

mod commit;
mod dry_run;

pub use commit::apply;
pub use dry_run::render;

#[cfg(test)]
mod tests;
