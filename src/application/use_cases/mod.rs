//! Use case implementations.

mod load_detail_use_case;

pub use load_detail_use_case::LoadDetailUseCase;
