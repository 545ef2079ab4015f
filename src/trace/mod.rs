// src/trace/mod.rs
//! Step trace model
//!
//! A trace is the ordered list of [`StepRecord`]s one cipher call produced,
//! in execution order. It is built once through a [`Tracer`] and never
//! mutated afterwards.

mod render;
mod step;
mod tracer;

pub use render::render_steps;
pub use step::StepRecord;
pub use tracer::Tracer;
